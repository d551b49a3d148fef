//! Core systems for Chalkline.
//!
//! This crate provides the foundational components of the Chalkline control
//! library:
//!
//! - **Signal/Slot System**: Type-safe change notification, delivered
//!   synchronously on the emitting thread
//! - **Logging**: Stable `tracing` targets and span names for filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use chalkline_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
