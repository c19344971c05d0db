use thiserror::Error;

/// Failure taxonomy of the order core.
///
/// `Publish` is kept separate from `Persistence` on purpose: a publish
/// failure happens *after* a successful save, so operators must be able to
/// tell the two apart when reconciling orders whose event never went out.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid order: {0}")]
    Validation(String),
    #[error("Order not found")]
    NotFound,
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("Event publish error: {0}")]
    Publish(String),
}
