// Controller connection notifications

use std::collections::VecDeque;
use std::fmt;

/// Maximum number of undrained notifications kept
const MAX_PENDING_EVENTS: usize = 64;

/// Connection change for one player slot in the mapping list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerEvent {
    Connected(usize),
    Disconnected(usize),
}

impl ControllerEvent {
    /// Player number the event refers to
    pub fn player(&self) -> usize {
        match *self {
            ControllerEvent::Connected(player) | ControllerEvent::Disconnected(player) => player,
        }
    }
}

/// Callback invoked synchronously for every notification
pub type ControllerObserver = Box<dyn FnMut(ControllerEvent)>;

/// Observer list plus a queue the frame driver can drain once per tick
#[derive(Default)]
pub struct ControllerEvents {
    observers: Vec<ControllerObserver>,
    pending: VecDeque<ControllerEvent>,
}

impl ControllerEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for every future notification
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(ControllerEvent) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Deliver an event to every observer and queue it
    pub(crate) fn emit(&mut self, event: ControllerEvent) {
        for observer in &mut self.observers {
            observer(event);
        }

        self.pending.push_back(event);
        if self.pending.len() > MAX_PENDING_EVENTS {
            if let Some(dropped) = self.pending.pop_front() {
                log::warn!(
                    "Controller event queue full, dropping {:?}; drain events every tick",
                    dropped
                );
            }
        }
    }

    /// Take every queued event, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = ControllerEvent> + '_ {
        self.pending.drain(..)
    }

    /// Number of queued events
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl fmt::Debug for ControllerEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerEvents")
            .field("observers", &self.observers.len())
            .field("pending", &self.pending)
            .finish()
    }
}
