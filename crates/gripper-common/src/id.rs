use serde::{Deserialize, Serialize};
use std::fmt;

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Opaque handle a client uses to refer to a running console process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessHandle(String);

impl ProcessHandle {
    pub fn new() -> Self {
        Self(new_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProcessHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies the hit-region element a pointer capture is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionId(pub u32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_id_is_valid_uuid() {
        let id = new_id();
        let parsed = uuid::Uuid::parse_str(&id);
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap().get_version_num(), 4);
    }

    #[test]
    fn new_id_is_unique() {
        assert_ne!(new_id(), new_id());
    }

    #[test]
    fn process_handle_display() {
        let handle = ProcessHandle::new();
        assert_eq!(handle.to_string(), handle.as_str());
        assert!(uuid::Uuid::parse_str(handle.as_str()).is_ok());
    }

    #[test]
    fn process_handles_differ() {
        let a = ProcessHandle::default();
        let b = ProcessHandle::default();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn process_handle_serialization() {
        let handle = ProcessHandle::new();
        let json = serde_json::to_string(&handle).unwrap();
        let back: ProcessHandle = serde_json::from_str(&json).unwrap();
        assert_eq!(handle, back);
    }

    #[test]
    fn region_id_display() {
        assert_eq!(RegionId(7).to_string(), "region-7");
    }
}
