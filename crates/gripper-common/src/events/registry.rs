use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::errors::HandlerError;

pub(crate) type Handler<E> = Rc<dyn Fn(&E) -> Result<(), HandlerError>>;

/// Identifies one subscription within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(pub u64);

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "handler-{}", self.0)
    }
}

/// Ordered handler list for a single event type.
pub(crate) struct Registry<E> {
    next_id: u64,
    handlers: Vec<(HandlerId, Handler<E>)>,
}

impl<E> Registry<E> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            handlers: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, handler: Handler<E>) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, handler));
        id
    }

    /// Clone the current handler list so dispatch is unaffected by
    /// subscriptions added or removed while it runs.
    pub(crate) fn snapshot(&self) -> Vec<(HandlerId, Handler<E>)> {
        self.handlers.clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.handlers.len()
    }
}

pub(crate) trait Unsubscribe {
    fn unsubscribe(&self, id: HandlerId) -> bool;
}

impl<E> Unsubscribe for RefCell<Registry<E>> {
    fn unsubscribe(&self, id: HandlerId) -> bool {
        let mut registry = self.borrow_mut();
        let before = registry.handlers.len();
        registry.handlers.retain(|(hid, _)| *hid != id);
        registry.handlers.len() != before
    }
}

/// Token returned by [`EventBus::subscribe`](super::EventBus::subscribe).
///
/// Dropping the token removes the handler. Call [`detach`](Self::detach) to
/// keep the handler for the lifetime of the bus instead.
#[must_use = "dropping a HandlerRegistration removes the handler immediately"]
pub struct HandlerRegistration {
    id: HandlerId,
    registry: Option<Weak<dyn Unsubscribe>>,
}

impl HandlerRegistration {
    pub(crate) fn new(id: HandlerId, registry: Weak<dyn Unsubscribe>) -> Self {
        Self {
            id,
            registry: Some(registry),
        }
    }

    pub fn id(&self) -> HandlerId {
        self.id
    }

    /// Remove the handler now. Returns `false` if it was already gone or the
    /// bus has been dropped.
    pub fn remove(mut self) -> bool {
        self.unsubscribe()
    }

    /// Keep the handler subscribed until the bus itself is dropped.
    pub fn detach(mut self) {
        self.registry = None;
    }

    fn unsubscribe(&mut self) -> bool {
        match self.registry.take().and_then(|weak| weak.upgrade()) {
            Some(registry) => registry.unsubscribe(self.id),
            None => false,
        }
    }
}

impl Drop for HandlerRegistration {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for HandlerRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistration")
            .field("id", &self.id)
            .field("attached", &self.registry.is_some())
            .finish()
    }
}
