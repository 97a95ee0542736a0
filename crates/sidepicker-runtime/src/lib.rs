//! Sidepicker Runtime
//!
//! Runs a [`Sidepicker`] on a tokio task. Tab activations and the host's
//! animation completion signals arrive as channel messages and are applied
//! strictly in order. If a completion signal does not arrive within the
//! animation's duration plus the configured grace period, the transition is
//! abandoned and the widget returns to idle.
//!
//! [`Sidepicker`]: sidepicker_core::Sidepicker

mod error;
mod event;
mod handle;
mod runtime;

pub use error::RuntimeError;
pub use event::WidgetEvent;
pub use handle::{EventStream, SidepickerHandle};
pub use runtime::SidepickerRuntime;

pub type Result<T> = std::result::Result<T, RuntimeError>;
