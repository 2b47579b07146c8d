//! Frame driver
//!
//! Owns the collaborators and runs one full redraw per `update` call,
//! guarded by an explicit lifecycle state machine.

pub mod frame;
pub mod lifecycle;

pub use frame::Ui;
pub use lifecycle::{Lifecycle, LifecycleEvent, UiError};
