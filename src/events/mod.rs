//! Structured run events.
//!
//! - `RunEvent`: What an operation did or refused to do
//! - `Severity`: Info or Warning
//! - `EventLog`: Ordered, optionally bounded buffer that also emits each
//!   event via `tracing`

mod event;

pub use event::{EventLog, RunEvent, Severity, DEFAULT_EVENT_CAPACITY};
