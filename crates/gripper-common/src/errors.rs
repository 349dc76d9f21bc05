use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failure raised by a resize observer callback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ObserverError(pub String);

impl ObserverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Failure raised by an event bus handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct HandlerError(pub String);

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("resize gripper requires an observer")]
    MissingObserver,

    #[error("resize observer failed: {0}")]
    Observer(#[from] ObserverError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("console process {0} has not been started")]
    NotStarted(String),

    #[error("console process {0} was already started")]
    AlreadyStarted(String),

    #[error("console process {0} ended without an exit status")]
    Lost(String),

    #[error("console io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum GripperError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Widget(#[from] WidgetError),

    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
