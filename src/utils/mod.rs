// ============================================================================
// Utilities Module
// Helpers for embedding the validator
// ============================================================================

mod logging;

pub use logging::init_tracing;
