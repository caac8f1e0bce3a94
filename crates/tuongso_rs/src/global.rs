//! Process-wide interpretation tables.
//!
//! Tables are set at most once. The first calculation without a prior
//! [`init`] fixes the built-in tables for the rest of the process.

use std::sync::OnceLock;

use tracing::info;
use tuongso_numerology::InterpretationTables;

use crate::error::TuongsoError;

static TABLES: OnceLock<InterpretationTables> = OnceLock::new();

/// Install the tables used by every later calculation.
pub fn init(tables: InterpretationTables) -> Result<(), TuongsoError> {
    TABLES
        .set(tables)
        .map_err(|_| TuongsoError::AlreadyInitialized)?;
    info!("interpretation tables installed");
    Ok(())
}

/// Whether tables have been installed or defaulted.
pub fn is_initialized() -> bool {
    TABLES.get().is_some()
}

/// Active tables, falling back to the built-in set.
pub fn tables() -> &'static InterpretationTables {
    TABLES.get_or_init(|| InterpretationTables::builtin().clone())
}
