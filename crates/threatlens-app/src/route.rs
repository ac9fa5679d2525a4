//! Client-side routes
//!
//! Exactly two paths exist: `/` (landing) and `/predict` (threat detector).
//! The result screen is reached only through navigation with a verdict, never
//! by path.

use std::fmt;
use std::str::FromStr;

use threatlens_core::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// `/` - landing screen
    #[default]
    Landing,
    /// `/predict` - threat detector form
    Detector,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Landing, Route::Detector];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Detector => "/predict",
        }
    }

    /// Map a path to its route. Only the two exact paths are accepted.
    pub fn from_path(path: &str) -> Result<Self> {
        let path = path.trim();
        Route::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .ok_or_else(|| Error::unknown_route(path))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Route::from_path(s)
    }
}
