//! Backend service boundary.
//!
//! Account/profile creation and the daily quote live behind the
//! [`ProfileService`] trait; the core only consumes the creation
//! timestamp the backend hands back. The HTTP implementation is in
//! [`http`]; tests substitute their own impls.

pub mod http;
pub mod traits;

pub use http::HttpBackend;
pub use traits::ProfileService;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Successful registration response. The timestamp anchors all plan
/// date math for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCreated {
    pub created_at: DateTime<Utc>,
}

/// Quote of the day, shown on the home screen after onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyQuote {
    pub text: String,
    pub author: String,
}
