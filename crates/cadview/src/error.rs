//! Error types for serialization and delivery.

use thiserror::Error;

/// Errors raised by a [`Tessellator`](crate::tessellate::Tessellator).
#[derive(Error, Debug)]
pub enum TessellateError {
    /// A shape in the batch could not be meshed.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Any other tessellator-internal failure.
    #[error("tessellation failed: {0}")]
    Failed(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised by [`serialize`](crate::serialize::serialize).
#[derive(Error, Debug)]
pub enum SerializeError {
    /// The tessellator rejected the batch. The whole payload is lost — there
    /// is no per-shape recovery, since the batch call is positional.
    #[error("failed to tessellate batch of {count} shape(s)")]
    Tessellation {
        /// Number of shapes in the rejected batch.
        count: usize,
        /// The underlying tessellator error.
        #[source]
        source: TessellateError,
    },
}

/// Error raised by a [`Transport`](crate::channel::Transport) when a payload
/// could not be pushed across the state-sync boundary.
#[derive(Error, Debug)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

impl TransportError {
    /// Create a transport error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
