//! Typed, synchronous publish/subscribe.
//!
//! Each event type gets its own ordered handler registry on an [`EventBus`].
//! Dispatch runs every handler on the calling thread, in subscription order,
//! over a snapshot of the registry taken when dispatch starts.

mod bus;
mod console_output;
mod registry;


pub use bus::{BusEvent, DispatchReport, EventBus, HandlerFailure};
pub use console_output::{ConsoleOutputEvent, ConsoleOutputHandler};
pub use registry::{HandlerId, HandlerRegistration};
