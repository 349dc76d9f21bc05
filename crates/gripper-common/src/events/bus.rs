use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

use super::registry::{HandlerId, HandlerRegistration, Registry, Unsubscribe};
use crate::errors::HandlerError;

/// A payload that can be published on an [`EventBus`].
pub trait BusEvent: 'static {
    /// Short name used in log output.
    const NAME: &'static str;
}

/// A handler that returned an error or panicked during dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerFailure {
    pub handler: HandlerId,
    pub reason: String,
}

/// Outcome of a single [`EventBus::dispatch`] pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Handlers that ran to completion.
    pub delivered: usize,
    pub failures: Vec<HandlerFailure>,
}

impl DispatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of handlers that were invoked, whether or not they succeeded.
    pub fn invoked(&self) -> usize {
        self.delivered + self.failures.len()
    }
}

/// Single-threaded typed event bus.
///
/// Holds one handler registry per event type. The bus is deliberately
/// `!Send`: it lives on the thread that owns the UI and producers running
/// elsewhere must hand their payloads over before dispatching.
#[derive(Default)]
pub struct EventBus {
    registries: RefCell<HashMap<TypeId, Rc<dyn Any>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `handler` to events of type `E`.
    ///
    /// Handlers run in subscription order. The returned registration removes
    /// the handler when dropped.
    pub fn subscribe<E, F>(&self, handler: F) -> HandlerRegistration
    where
        E: BusEvent,
        F: Fn(&E) -> Result<(), HandlerError> + 'static,
    {
        let registry = self.registry_or_insert::<E>();
        let id = registry.borrow_mut().add(Rc::new(handler));
        debug!(event = E::NAME, %id, "handler subscribed");

        let erased: Rc<dyn Unsubscribe> = registry;
        let weak: Weak<dyn Unsubscribe> = Rc::downgrade(&erased);
        HandlerRegistration::new(id, weak)
    }

    /// Deliver `event` to every handler subscribed to `E`.
    ///
    /// The handler list is snapshotted first: handlers added during this pass
    /// are not called, handlers removed during this pass still are. Each
    /// invocation is isolated, so an error or panic in one handler is
    /// recorded in the report and the remaining handlers still run.
    pub fn dispatch<E: BusEvent>(&self, event: &E) -> DispatchReport {
        let snapshot = match self.registry::<E>() {
            Some(registry) => registry.borrow().snapshot(),
            None => Vec::new(),
        };

        let mut report = DispatchReport::default();
        for (id, handler) in snapshot {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| handler(event)));
            let reason = match outcome {
                Ok(Ok(())) => {
                    report.delivered += 1;
                    continue;
                }
                Ok(Err(err)) => err.to_string(),
                Err(payload) => panic_message(payload.as_ref()),
            };
            warn!(event = E::NAME, handler = %id, "handler failed: {reason}");
            report.failures.push(HandlerFailure {
                handler: id,
                reason,
            });
        }
        report
    }

    /// Number of handlers currently subscribed to `E`.
    pub fn handler_count<E: BusEvent>(&self) -> usize {
        self.registry::<E>()
            .map(|registry| registry.borrow().len())
            .unwrap_or(0)
    }

    fn registry<E: BusEvent>(&self) -> Option<Rc<RefCell<Registry<E>>>> {
        let entry = self.registries.borrow().get(&TypeId::of::<E>()).cloned()?;
        entry.downcast::<RefCell<Registry<E>>>().ok()
    }

    fn registry_or_insert<E: BusEvent>(&self) -> Rc<RefCell<Registry<E>>> {
        if let Some(registry) = self.registry::<E>() {
            return registry;
        }
        let registry = Rc::new(RefCell::new(Registry::<E>::new()));
        let erased: Rc<dyn Any> = registry.clone();
        self.registries
            .borrow_mut()
            .insert(TypeId::of::<E>(), erased);
        registry
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("panicked: {msg}")
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("panicked: {msg}")
    } else {
        "panicked".to_string()
    }
}
