//! Synchronous publish/subscribe for match events.
//!
//! Each match owns one `EventBus`. Handlers are indexed by [`EventKind`] and
//! run in registration order, to completion, before `publish` returns. There
//! is no global bus, so matches running side by side never see each other's
//! events.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::event::{EventKind, GameEvent};

/// A subscriber callback.
pub type Handler = Box<dyn FnMut(&GameEvent)>;

/// Per-match event dispatcher.
#[derive(Default)]
pub struct EventBus {
    /// Handlers by kind, in registration order.
    handlers: FxHashMap<EventKind, Vec<Handler>>,

    /// Events published so far.
    published: u64,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one kind of event.
    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F)
    where
        F: FnMut(&GameEvent) + 'static,
    {
        self.handlers.entry(kind).or_default().push(Box::new(handler));
    }

    /// Deliver an event to every handler registered for its kind.
    ///
    /// Events nobody listens to are dropped.
    pub fn publish(&mut self, event: GameEvent) {
        self.published += 1;
        let kind = event.kind();
        tracing::trace!(event = %kind, "publish");

        if let Some(handlers) = self.handlers.get_mut(&kind) {
            for handler in handlers.iter_mut() {
                handler(&event);
            }
        }
    }

    /// Number of handlers registered for a kind.
    #[must_use]
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    /// Total events published on this bus.
    #[must_use]
    pub fn published(&self) -> u64 {
        self.published
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self
            .handlers
            .iter()
            .map(|(kind, handlers)| (*kind, handlers.len()))
            .collect();
        kinds.sort_unstable();
        f.debug_struct("EventBus")
            .field("handlers", &kinds)
            .field("published", &self.published)
            .finish()
    }
}

/// Records every event published on a bus, in order.
///
/// Useful for replay logs and for asserting event sequences.
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventRecorder {
    /// Subscribe a new recorder to every kind on `bus`.
    pub fn attach(bus: &mut EventBus) -> Self {
        let recorder = Self::default();
        for kind in EventKind::ALL {
            let sink = Rc::clone(&recorder.events);
            bus.subscribe(kind, move |event| sink.borrow_mut().push(event.clone()));
        }
        recorder
    }

    /// Copy of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Kinds recorded so far, in order.
    #[must_use]
    pub fn kinds(&self) -> Vec<EventKind> {
        self.events.borrow().iter().map(GameEvent::kind).collect()
    }

    /// Number of recorded events of one kind.
    #[must_use]
    pub fn count(&self, kind: EventKind) -> usize {
        self.events.borrow().iter().filter(|e| e.kind() == kind).count()
    }
}
