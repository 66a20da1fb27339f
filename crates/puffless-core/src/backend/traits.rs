use crate::backend::{DailyQuote, ProfileCreated};
use crate::error::BackendError;
use crate::intake::IntakeState;

/// Remote profile service the onboarding flow registers against.
///
/// Implementations are stateless between calls; all session data is in
/// the intake snapshot handed to `create_profile`. Callers await these
/// synchronously -- there are no retries at this boundary, a failed call
/// is re-triggered by the user.
pub trait ProfileService: Send + Sync {
    /// Unique identifier (e.g. "http", "stub").
    fn name(&self) -> &str;

    /// Create the account/profile from the finalized intake values and
    /// return the server-issued creation timestamp.
    fn create_profile(&self, intake: &IntakeState) -> Result<ProfileCreated, BackendError>;

    /// Fetch today's motivational quote.
    fn daily_quote(&self) -> Result<DailyQuote, BackendError>;
}
