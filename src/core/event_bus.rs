//! Pub/Sub event bus for editor notifications.
//!
//! The editor reports what happened (timeline changed, gesture started or
//! ended, palette refilled) without knowing who listens:
//! - `subscribe()` registers a callback invoked synchronously on `emit()`
//! - every emitted event is also queued; `poll()` drains the queue so a
//!   render loop can batch-process what happened since the last frame
//!
//! Callback order is FIFO within one event type. Order across event types is
//! only guaranteed in the polled queue.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use log::warn;

/// Queue size before the oldest half is evicted
const MAX_QUEUE_SIZE: usize = 1000;

/// Marker trait for events. Blanket-implemented for any `Send + Sync + 'static`.
pub trait Event: Any + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
}

impl<T: Any + Send + Sync + 'static> Event for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

type Callback = Arc<dyn Fn(&dyn Any) + Send + Sync>;

pub type BoxedEvent = Box<dyn Event>;

/// Shared by the bus and every emitter handle
struct Inner {
    subscribers: RwLock<HashMap<TypeId, Vec<Callback>>>,
    queue: Mutex<Vec<BoxedEvent>>,
    capacity: usize,
}

impl Inner {
    fn dispatch<E: Event + Clone>(&self, event: E) {
        let callbacks: Vec<Callback> = self
            .subscribers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&TypeId::of::<E>())
            .cloned()
            .unwrap_or_default();
        // Lock released before callbacks run, so a callback may subscribe
        for cb in &callbacks {
            cb(&event);
        }

        let mut queue = self.queue.lock().unwrap_or_else(|e| e.into_inner());
        if queue.len() >= self.capacity {
            let evict = (queue.len() / 2).max(1);
            warn!("Editor event queue full ({} events), evicting oldest {}", queue.len(), evict);
            queue.drain(0..evict);
        }
        queue.push(Box::new(event));
    }
}

#[derive(Clone)]
pub struct EventBus {
    inner: Arc<Inner>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("queue_len", &self.queue_len())
            .field("capacity", &self.inner.capacity)
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(MAX_QUEUE_SIZE)
    }

    /// Bus whose deferred queue holds at most `capacity` events
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                subscribers: RwLock::new(HashMap::new()),
                queue: Mutex::new(Vec::new()),
                capacity: capacity.max(1),
            }),
        }
    }

    /// Subscribe to events of type E
    pub fn subscribe<E, F>(&self, callback: F)
    where
        E: Event,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let wrapped: Callback = Arc::new(move |any: &dyn Any| {
            if let Some(event) = any.downcast_ref::<E>() {
                callback(event);
            }
        });
        self.inner
            .subscribers
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .entry(TypeId::of::<E>())
            .or_default()
            .push(wrapped);
    }

    /// Invoke subscribers of E, then queue the event for `poll()`
    pub fn emit<E: Event + Clone>(&self, event: E) {
        self.inner.dispatch(event);
    }

    /// Drain everything emitted since the last poll
    pub fn poll(&self) -> Vec<BoxedEvent> {
        std::mem::take(&mut *self.inner.queue.lock().unwrap_or_else(|e| e.into_inner()))
    }

    /// Handle for emitting from the editor
    pub fn emitter(&self) -> EventEmitter {
        EventEmitter {
            inner: Some(Arc::clone(&self.inner)),
        }
    }

    pub fn unsubscribe_all<E: Event>(&self) {
        self.inner
            .subscribers
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&TypeId::of::<E>());
    }

    pub fn has_subscribers<E: Event>(&self) -> bool {
        self.inner
            .subscribers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&TypeId::of::<E>())
            .is_some_and(|v| !v.is_empty())
    }

    pub fn queue_len(&self) -> usize {
        self.inner.queue.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

/// Cloneable emit-only handle. `EventEmitter::dummy()` drops everything,
/// for editors running without a bus.
#[derive(Clone, Default)]
pub struct EventEmitter {
    inner: Option<Arc<Inner>>,
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("connected", &self.inner.is_some())
            .finish()
    }
}

impl EventEmitter {
    pub fn dummy() -> Self {
        Self { inner: None }
    }

    pub fn emit<E: Event + Clone>(&self, event: E) {
        if let Some(inner) = &self.inner {
            inner.dispatch(event);
        }
    }

    pub fn is_connected(&self) -> bool {
        self.inner.is_some()
    }
}

/// Downcast a polled event to a concrete type.
///
/// Derefs to `dyn Event` first; calling `as_any()` on the `Box` itself would
/// hit the blanket impl for `Box<dyn Event>` and never match.
#[inline]
pub fn downcast_event<E: Event>(event: &BoxedEvent) -> Option<&E> {
    (**event).as_any().downcast_ref::<E>()
}
