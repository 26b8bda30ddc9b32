//! Type aliases for shared editor state.
//!
//! Map hosts usually wire several callbacks (click, drag, context menu) to the
//! same editor. Every callback must reach the one authoritative editor rather
//! than a copy captured when the callback was registered, so hosts hold a
//! [`Shared`] handle and borrow it mutably for the duration of one gesture.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fieldtrace_core::types::*;
//!
//! let editor: Shared<FieldEditor> = shared(FieldEditor::new(context, None, config));
//! let on_click = {
//!     let editor = editor.clone();
//!     move |v| editor.borrow_mut().handle(Gesture::Tap(v))
//! };
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// Each borrow observes the latest committed state; a `borrow_mut` held for
/// one gesture keeps other handlers out until the mutation and its
/// recomputation have finished.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wraps a value in a [`Shared`] handle.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
