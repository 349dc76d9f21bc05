pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{
    ConfigError, ConsoleError, GripperError, HandlerError, ObserverError, WidgetError,
};
pub use events::{
    BusEvent, ConsoleOutputEvent, ConsoleOutputHandler, DispatchReport, EventBus,
    HandlerFailure, HandlerId, HandlerRegistration,
};
pub use id::{new_id, ProcessHandle, RegionId};
pub use types::{Point, ResizeDelta, Size};

pub type Result<T> = std::result::Result<T, GripperError>;
