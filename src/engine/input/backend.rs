// Host polling capability consumed by the input engine

use glam::Vec2;
use std::collections::{HashMap, HashSet};

/// Raw device polling provided by the host engine
///
/// Identifiers are the host's own string keys, e.g. `"joystick 2 button 5"`,
/// `"joystick 1 analog 3"`, `"space"` or `"mouse 0"`.
pub trait DeviceBackend {
    /// Names of the devices in each enumeration slot; vacated slots are empty
    fn device_names(&self) -> Vec<String>;

    /// Current raw value of a named axis
    fn raw_axis(&self, identifier: &str) -> f32;

    /// Whether the named key went down this frame
    fn key_down(&self, identifier: &str) -> bool;

    /// Whether the named key is currently held
    fn key_held(&self, identifier: &str) -> bool;

    /// Whether the named key went up this frame
    fn key_up(&self, identifier: &str) -> bool;

    /// Planar offset between the pointer's projection onto the scene plane and
    /// the screen centre's projection; `None` when either projection misses
    fn pointer_plane_delta(&self) -> Option<Vec2> {
        None
    }
}

/// In-memory backend driven by explicit calls
///
/// Used by tests and the demo binary to script device enumeration, axis
/// values and key transitions.
#[derive(Debug, Default)]
pub struct VirtualBackend {
    /// Device name per enumeration slot
    devices: Vec<String>,

    /// Raw axis values by identifier
    axes: HashMap<String, f32>,

    /// Keys currently held
    held: HashSet<String>,

    /// Keys that went down this frame
    just_down: HashSet<String>,

    /// Keys that went up this frame
    just_up: HashSet<String>,

    /// Pointer projection delta, if the projection hits the plane
    pointer_delta: Option<Vec2>,
}

impl VirtualBackend {
    /// Create a backend with no devices attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend with the given enumeration list
    pub fn with_devices<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut backend = Self::new();
        backend.set_devices(names);
        backend
    }

    /// Replace the whole enumeration list
    pub fn set_devices<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.devices = names.into_iter().map(Into::into).collect();
    }

    /// Attach a named device at a slot, padding earlier slots with empty names
    pub fn plug(&mut self, slot: usize, name: impl Into<String>) {
        if self.devices.len() <= slot {
            self.devices.resize(slot + 1, String::new());
        }
        self.devices[slot] = name.into();
    }

    /// Vacate a slot, leaving an empty name in its place
    pub fn unplug(&mut self, slot: usize) {
        if let Some(name) = self.devices.get_mut(slot) {
            name.clear();
        }
    }

    /// Set a raw axis value
    pub fn set_axis(&mut self, identifier: impl Into<String>, value: f32) {
        self.axes.insert(identifier.into(), value);
    }

    /// Set or clear the pointer projection delta
    pub fn set_pointer_delta(&mut self, delta: Option<Vec2>) {
        self.pointer_delta = delta;
    }

    /// Press a key
    pub fn press(&mut self, identifier: impl Into<String>) {
        let identifier = identifier.into();
        if !self.held.contains(&identifier) {
            self.just_down.insert(identifier.clone());
            self.held.insert(identifier);
        }
    }

    /// Release a key
    pub fn release(&mut self, identifier: &str) {
        if self.held.remove(identifier) {
            self.just_up.insert(identifier.to_string());
        }
    }

    /// Clear per-frame key edges
    /// Call this once per frame after all queries
    pub fn end_frame(&mut self) {
        self.just_down.clear();
        self.just_up.clear();
    }
}

impl DeviceBackend for VirtualBackend {
    fn device_names(&self) -> Vec<String> {
        self.devices.clone()
    }

    fn raw_axis(&self, identifier: &str) -> f32 {
        self.axes.get(identifier).copied().unwrap_or(0.0)
    }

    fn key_down(&self, identifier: &str) -> bool {
        self.just_down.contains(identifier)
    }

    fn key_held(&self, identifier: &str) -> bool {
        self.held.contains(identifier)
    }

    fn key_up(&self, identifier: &str) -> bool {
        self.just_up.contains(identifier)
    }

    fn pointer_plane_delta(&self) -> Option<Vec2> {
        self.pointer_delta
    }
}
