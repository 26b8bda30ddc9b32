//! Editor listener interface
//!
//! Defines the listener trait for editor events

use fieldtrace_core::SavedField;

use crate::error::ValidationError;
use crate::preview::PreviewSnapshot;

/// Handle for a registered editor listener.
///
/// Uniquely identifies a listener subscription. Can be used to unsubscribe
/// from editor events.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EditorListenerHandle(pub String);

/// Listener trait for editor events
///
/// Implement this trait to receive preview updates and gesture results.
/// Callbacks run synchronously inside the gesture that caused them.
pub trait EditorListener {
    /// Called after every gesture that changed what is drawn
    fn on_preview(&self, _snapshot: &PreviewSnapshot) {}

    /// Called when a gesture was rejected with user guidance
    fn on_validation_failed(&self, _error: &ValidationError) {}

    /// Called once the field has been saved
    fn on_saved(&self, _field: &SavedField) {}
}
