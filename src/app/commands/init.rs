use crate::domain::{AppError, SPEC_TEMPLATE};
use crate::ports::SpecStore;

/// Execute the init command.
///
/// Writes the spec template; an existing spec document is never overwritten.
pub fn execute<S: SpecStore>(store: &S) -> Result<(), AppError> {
    store.create(SPEC_TEMPLATE)?;
    tracing::debug!(path = %store.spec_path().display(), "wrote spec template");
    Ok(())
}
