//! Action handlers: UpdateAction dispatch and background task spawning

use tokio::sync::mpsc;
use tracing::{debug, warn};

use threatlens_client::AnalysisService;

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task.
///
/// Each task reports back with exactly one message; if the event loop has
/// already shut down the message is dropped.
pub fn handle_action<S>(action: UpdateAction, service: &S, msg_tx: mpsc::Sender<Message>)
where
    S: AnalysisService + Clone + Send + Sync + 'static,
{
    match action {
        UpdateAction::AnalyzeUrl { request_id, url } => {
            let service = service.clone();
            tokio::spawn(async move {
                let message = match service.analyze(&url).await {
                    Ok(verdict) => Message::AnalysisCompleted {
                        request_id,
                        verdict: Box::new(verdict),
                    },
                    Err(error) => Message::AnalysisFailed { request_id, error },
                };
                if msg_tx.send(message).await.is_err() {
                    debug!("Event loop gone, dropping result for {:?}", request_id);
                }
            });
        }

        UpdateAction::CheckHealth => {
            let service = service.clone();
            tokio::spawn(async move {
                let result = service.health().await;
                if msg_tx.send(Message::HealthChecked { result }).await.is_err() {
                    warn!("Event loop gone, dropping health probe result");
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RequestId;
    use threatlens_client::test_utils::{example_verdict, FakeAnalysisService};
    use threatlens_client::ServiceError;

    #[tokio::test]
    async fn test_analyze_action_reports_completion() {
        let fake = FakeAnalysisService::new();
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::AnalyzeUrl {
                request_id: RequestId(3),
                url: "https://example.com".to_string(),
            },
            &fake,
            tx,
        );

        match rx.recv().await {
            Some(Message::AnalysisCompleted {
                request_id,
                verdict,
            }) => {
                assert_eq!(request_id, RequestId(3));
                assert_eq!(*verdict, example_verdict());
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(fake.requests(), vec!["https://example.com".to_string()]);
    }

    #[tokio::test]
    async fn test_analyze_action_reports_failure() {
        let fake = FakeAnalysisService::failing(ServiceError::request_failed("Failed to fetch"));
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::AnalyzeUrl {
                request_id: RequestId(1),
                url: "https://example.com".to_string(),
            },
            &fake,
            tx,
        );

        assert!(matches!(
            rx.recv().await,
            Some(Message::AnalysisFailed {
                request_id: RequestId(1),
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_health_action() {
        let fake = FakeAnalysisService::new();
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(UpdateAction::CheckHealth, &fake, tx);

        match rx.recv().await {
            Some(Message::HealthChecked { result }) => {
                assert_eq!(result.unwrap(), "Backend is running")
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
