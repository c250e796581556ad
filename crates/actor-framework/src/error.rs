//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, plus a boxed slot for the
//! entity's own error type so that hooks can fail with rich, typed reasons.

use std::error::Error;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn Error + Send + Sync>),
}

impl FrameworkError {
    /// Wraps an entity error raised from a lifecycle hook or action.
    pub fn entity<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        FrameworkError::EntityError(Box::new(error))
    }

    /// Recovers the entity's typed error.
    ///
    /// Returns `Err(self)` unchanged when this is not an `EntityError`, or when the
    /// boxed error is of a different type.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|typed| *typed)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}
