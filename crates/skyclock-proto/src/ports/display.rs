use std::sync::Arc;

/// Error returned when a [`DisplayTarget`] rejects a write.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    /// The underlying sink failed to accept the text.
    #[error("display `{id}` rejected write: {source}")]
    Write {
        /// Identifier of the display that failed.
        id: String,
        /// Error reported by the sink.
        #[source]
        source: std::io::Error,
    },
}

/// A text-bearing element whose visible content can be replaced.
pub trait DisplayTarget: Send + Sync {
    /// Replace the visible text of the element with `text`.
    fn set_text(&self, text: &str) -> Result<(), DisplayError>;
}

impl<T: DisplayTarget + ?Sized> DisplayTarget for Arc<T> {
    fn set_text(&self, text: &str) -> Result<(), DisplayError> {
        (**self).set_text(text)
    }
}

/// Finds display targets by their stable identifier.
///
/// Absence is a normal outcome, not an error: hosts that do not define the
/// element simply return `None`.
pub trait DisplayLocator {
    /// Concrete display type produced by this locator.
    type Target: DisplayTarget;

    /// Look up the display registered under `id`.
    fn locate(&self, id: &str) -> Option<Self::Target>;
}
