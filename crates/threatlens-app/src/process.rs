//! Message processing
//!
//! Runs a message through the TEA update loop, following up messages and
//! dispatching any resulting actions.

use tokio::sync::mpsc;

use threatlens_client::AnalysisService;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    service: &S,
) where
    S: AnalysisService + Clone + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, service, msg_tx.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
