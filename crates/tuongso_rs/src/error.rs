//! Error type for the convenience wrapper.

use thiserror::Error;
use tuongso_numerology::NumerologyError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TuongsoError {
    /// Tables were already installed (or defaulted by an earlier calculation).
    #[error("interpretation tables already initialized")]
    AlreadyInitialized,
    #[error(transparent)]
    Numerology(#[from] NumerologyError),
}
