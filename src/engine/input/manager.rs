// Input coordinator - Owns every player mapping and answers game queries

use super::backend::DeviceBackend;
use super::config::CoordinatorConfig;
use super::edge::{axis_pressed, AxisEdgeTracker, EdgeKey, EdgeState};
use super::error::InputError;
use super::events::{ControllerEvent, ControllerEvents};
use super::logical::{AxisDirection, LogicalAxis, LogicalButton};
use super::mapping::{DeviceFamily, DeviceMapping};
use super::registry::MappingRegistry;
use crate::core::math;
use glam::Vec2;

/// Player number of the always-present keyboard mapping
pub const KEYBOARD_PLAYER: usize = 0;

/// Coordinates device mappings, hotplug tracking and edge detection
///
/// Player numbers index the mapping list. Entries are appended as devices
/// appear and are never removed, so a player number stays valid for the
/// lifetime of the coordinator.
pub struct InputCoordinator<B: DeviceBackend> {
    /// Host polling capability
    backend: B,

    /// Tuning
    config: CoordinatorConfig,

    /// Raw name -> family resolution
    registry: MappingRegistry,

    /// Mapping per player, keyboard first
    mappings: Vec<DeviceMapping>,

    /// Axis-as-button edge state
    edges: AxisEdgeTracker,

    /// Connection notifications
    events: ControllerEvents,
}

impl<B: DeviceBackend> InputCoordinator<B> {
    /// Create a coordinator with default tuning
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, CoordinatorConfig::default())
    }

    /// Create a coordinator with custom tuning
    pub fn with_config(backend: B, config: CoordinatorConfig) -> Self {
        Self::with_registry(backend, config, MappingRegistry::new())
    }

    /// Create a coordinator with a custom family registry
    ///
    /// Devices already present are bound immediately without raising
    /// connection notifications.
    pub fn with_registry(backend: B, config: CoordinatorConfig, registry: MappingRegistry) -> Self {
        let mut coordinator = Self {
            backend,
            config,
            registry,
            mappings: vec![DeviceMapping::bind(DeviceFamily::Keyboard, None)],
            edges: AxisEdgeTracker::new(),
            events: ControllerEvents::new(),
        };

        for (slot, name) in coordinator.backend.device_names().into_iter().enumerate() {
            if !name.is_empty() {
                coordinator.attach(slot, &name);
            }
        }
        log::info!(
            "Input coordinator started with {} player(s)",
            coordinator.mappings.len()
        );

        coordinator
    }

    /// Bind a new mapping for `name` at `slot` and return its player number
    fn attach(&mut self, slot: usize, name: &str) -> usize {
        let family = self.registry.resolve(name);
        self.mappings.push(DeviceMapping::bind(family, Some(slot)));
        let player = self.mappings.len() - 1;
        log::info!(
            "Controller {:?} in slot {} bound as {} for player {}",
            name,
            slot,
            family,
            player
        );
        player
    }

    fn owns_slot(&self, slot: usize) -> bool {
        self.mappings
            .iter()
            .any(|mapping| mapping.slot() == Some(slot))
    }

    /// Hotplug pass: bind every newly occupied slot
    ///
    /// Slots are matched by enumeration index rather than list position, so
    /// a device that keeps its slot is never bound twice. Returns the player
    /// numbers created by this pass.
    pub fn reconcile_devices(&mut self) -> Vec<usize> {
        let mut added = Vec::new();
        for (slot, name) in self.backend.device_names().into_iter().enumerate() {
            if name.is_empty() || self.owns_slot(slot) {
                continue;
            }
            let player = self.attach(slot, &name);
            self.events.emit(ControllerEvent::Connected(player));
            added.push(player);
        }
        added
    }

    /// Disconnect pass: flag mappings whose slot is now empty or gone
    ///
    /// Only the falling edge raises a notification. A slot that fills again
    /// clears the flag without one.
    pub fn check_disconnects(&mut self) {
        let names = self.backend.device_names();
        let mut dropped = Vec::new();

        for (player, mapping) in self.mappings.iter_mut().enumerate().skip(1) {
            let Some(slot) = mapping.slot() else {
                continue;
            };
            let present = names.get(slot).is_some_and(|name| !name.is_empty());

            if !present && mapping.is_connected() {
                mapping.set_connected(false);
                log::info!("Player {} ({}) disconnected", player, mapping.family());
                dropped.push(player);
            } else if present && !mapping.is_connected() {
                mapping.set_connected(true);
                log::info!("Player {} ({}) reconnected", player, mapping.family());
            }
        }

        for player in dropped {
            self.events.emit(ControllerEvent::Disconnected(player));
        }
    }

    /// Sample phase for axis-as-button edges
    /// Call once per logical tick before game logic; repeated calls in the
    /// same tick are ignored
    pub fn update(&mut self) {
        let Self {
            backend,
            config,
            mappings,
            edges,
            ..
        } = self;
        let backend: &B = backend;

        edges.sample(|key| {
            let Some(mapping) = mappings.get(key.player) else {
                return false;
            };
            axis_pressed(mapping, key.axis, key.direction, backend, config).unwrap_or_else(
                |err| {
                    log::warn!("Edge sample for {:?} failed: {}", key, err);
                    false
                },
            )
        });
    }

    /// Commit phase for axis-as-button edges
    /// Call once per logical tick after all queries
    pub fn late_update(&mut self) {
        self.edges.commit();
    }

    fn mapping_for(&self, player: usize) -> Result<&DeviceMapping, InputError> {
        self.mappings
            .get(player)
            .ok_or(InputError::UnknownPlayer(player))
    }

    /// Whether `button` went down this frame
    pub fn button_down(&self, button: LogicalButton, player: usize) -> Result<bool, InputError> {
        let identifier = self.mapping_for(player)?.button_identifier(button)?;
        Ok(self.backend.key_down(identifier))
    }

    /// Whether `button` is held
    pub fn button_held(&self, button: LogicalButton, player: usize) -> Result<bool, InputError> {
        let identifier = self.mapping_for(player)?.button_identifier(button)?;
        Ok(self.backend.key_held(identifier))
    }

    /// Whether `button` went up this frame
    pub fn button_up(&self, button: LogicalButton, player: usize) -> Result<bool, InputError> {
        let identifier = self.mapping_for(player)?.button_identifier(button)?;
        Ok(self.backend.key_up(identifier))
    }

    /// Normalized value of one axis
    pub fn axis_value(&self, axis: LogicalAxis, player: usize) -> Result<f32, InputError> {
        self.mapping_for(player)?.read_axis(axis, &self.backend)
    }

    /// Two axes read as a vector with a radial deadzone
    ///
    /// Per-axis deadzones are not applied here; the vector is zeroed only
    /// when its length does not exceed `dead_zone`.
    pub fn combined_axis(
        &self,
        axis_x: LogicalAxis,
        axis_y: LogicalAxis,
        player: usize,
        dead_zone: f32,
    ) -> Result<Vec2, InputError> {
        let mapping = self.mapping_for(player)?;
        let value = Vec2::new(
            mapping.read_axis_unfiltered(axis_x, &self.backend)?,
            mapping.read_axis_unfiltered(axis_y, &self.backend)?,
        );
        Ok(math::radial_dead_zone(value, dead_zone))
    }

    /// Whether an axis is away from rest, without edge tracking
    pub fn axis_as_button(&self, axis: LogicalAxis, player: usize) -> Result<bool, InputError> {
        Ok(self.axis_value(axis, player)?.abs() > self.config.axis_button_epsilon)
    }

    /// Whether an axis left rest this tick, in either direction
    pub fn axis_as_button_down(
        &mut self,
        axis: LogicalAxis,
        player: usize,
    ) -> Result<bool, InputError> {
        self.axis_as_button_down_in(axis, player, AxisDirection::Any)
    }

    /// Whether an axis returned to rest this tick, in either direction
    pub fn axis_as_button_up(&mut self, axis: LogicalAxis, player: usize) -> Result<bool, InputError> {
        self.axis_as_button_up_in(axis, player, AxisDirection::Any)
    }

    /// Whether one side of an axis went down this tick (e.g. DPAD left)
    pub fn axis_as_button_down_in(
        &mut self,
        axis: LogicalAxis,
        player: usize,
        direction: AxisDirection,
    ) -> Result<bool, InputError> {
        Ok(self
            .edge_state(EdgeKey::new(player, axis, direction))?
            .is_down())
    }

    /// Whether one side of an axis went up this tick
    pub fn axis_as_button_up_in(
        &mut self,
        axis: LogicalAxis,
        player: usize,
        direction: AxisDirection,
    ) -> Result<bool, InputError> {
        Ok(self.edge_state(EdgeKey::new(player, axis, direction))?.is_up())
    }

    /// Tracked state for `key`, registering it on first use
    fn edge_state(&mut self, key: EdgeKey) -> Result<&EdgeState, InputError> {
        let pressed = if self.edges.get(&key).is_some() {
            // Ignored by register for tracked keys
            false
        } else {
            let mapping = self.mapping_for(key.player)?;
            axis_pressed(mapping, key.axis, key.direction, &self.backend, &self.config)?
        };
        Ok(self.edges.register(key, pressed))
    }

    /// Register a callback for connection notifications
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(ControllerEvent) + 'static,
    {
        self.events.subscribe(observer);
    }

    /// Take queued connection notifications, oldest first
    pub fn drain_events(&mut self) -> Vec<ControllerEvent> {
        self.events.drain().collect()
    }

    /// Number of players, keyboard included
    pub fn player_count(&self) -> usize {
        self.mappings.len()
    }

    /// Mapping for a player
    pub fn mapping(&self, player: usize) -> Option<&DeviceMapping> {
        self.mappings.get(player)
    }

    /// All mappings in player order
    pub fn mappings(&self) -> &[DeviceMapping] {
        &self.mappings
    }

    /// Whether a player's device currently occupies its slot
    pub fn is_connected(&self, player: usize) -> Result<bool, InputError> {
        Ok(self.mapping_for(player)?.is_connected())
    }

    /// Family a player was bound as
    pub fn family(&self, player: usize) -> Result<DeviceFamily, InputError> {
        Ok(self.mapping_for(player)?.family())
    }

    /// Players whose devices are currently connected
    pub fn connected_players(&self) -> Vec<usize> {
        self.mappings
            .iter()
            .enumerate()
            .filter(|(_, mapping)| mapping.is_connected())
            .map(|(player, _)| player)
            .collect()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    pub fn registry(&self) -> &MappingRegistry {
        &self.registry
    }

    pub fn edge_tracker(&self) -> &AxisEdgeTracker {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::backend::VirtualBackend;
    use approx::assert_relative_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    const DS4: &str = "Wireless Controller";
    const X360: &str = "Controller (XBOX 360 For Windows)";

    fn coordinator(devices: &[&str]) -> InputCoordinator<VirtualBackend> {
        InputCoordinator::new(VirtualBackend::with_devices(devices.iter().copied()))
    }

    /// One logical tick with `f` as the game logic
    fn tick<T>(
        input: &mut InputCoordinator<VirtualBackend>,
        f: impl FnOnce(&mut InputCoordinator<VirtualBackend>) -> T,
    ) -> T {
        input.update();
        let result = f(input);
        input.late_update();
        input.backend_mut().end_frame();
        result
    }

    #[test]
    fn test_keyboard_is_player_zero() {
        let input = coordinator(&[]);
        assert_eq!(input.player_count(), 1);
        assert_eq!(input.family(KEYBOARD_PLAYER).unwrap(), DeviceFamily::Keyboard);
        assert_eq!(input.mapping(KEYBOARD_PLAYER).unwrap().slot(), None);
    }

    #[test]
    fn test_initial_devices_bound_silently() {
        let mut input = coordinator(&["", DS4]);
        assert_eq!(input.player_count(), 2);
        assert_eq!(input.family(1).unwrap(), DeviceFamily::Ps4);
        assert_eq!(input.mapping(1).unwrap().slot(), Some(1));
        assert!(input.drain_events().is_empty());
    }

    #[test]
    fn test_hotplug_appends_new_slot() {
        let mut input = coordinator(&["", DS4]);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        input.subscribe(move |event| sink.borrow_mut().push(event));

        input.backend_mut().set_devices(["", DS4, X360]);
        let added = input.reconcile_devices();

        assert_eq!(added, vec![2]);
        assert_eq!(input.player_count(), 3);
        assert_eq!(input.family(2).unwrap(), DeviceFamily::Xbox360);
        assert_eq!(input.mapping(2).unwrap().slot(), Some(2));
        assert_eq!(*seen.borrow(), vec![ControllerEvent::Connected(2)]);

        // Existing mapping untouched
        assert_eq!(input.family(1).unwrap(), DeviceFamily::Ps4);
        assert_eq!(input.mapping(1).unwrap().slot(), Some(1));
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let mut input = coordinator(&[]);
        input.backend_mut().set_devices([DS4]);
        assert_eq!(input.reconcile_devices(), vec![1]);
        assert!(input.reconcile_devices().is_empty());
        assert_eq!(input.player_count(), 2);
    }

    #[test]
    fn test_reconcile_skips_empty_names() {
        let mut input = coordinator(&[]);
        input.backend_mut().set_devices(["", "", ""]);
        assert!(input.reconcile_devices().is_empty());
        assert_eq!(input.player_count(), 1);
    }

    #[test]
    fn test_unknown_device_uses_fallback() {
        let mut input = coordinator(&[]);
        input.backend_mut().set_devices(["Generic USB Joystick"]);
        input.reconcile_devices();
        assert_eq!(input.family(1).unwrap(), DeviceFamily::Xbox360);
        assert_eq!(input.drain_events(), vec![ControllerEvent::Connected(1)]);
    }

    #[test]
    fn test_slot_reuse_by_new_device_is_not_rebound() {
        // A different pad plugged into a vacated slot keeps the old mapping
        let mut input = coordinator(&[DS4]);
        input.backend_mut().unplug(0);
        input.check_disconnects();
        input.backend_mut().plug(0, X360);
        assert!(input.reconcile_devices().is_empty());
        assert_eq!(input.family(1).unwrap(), DeviceFamily::Ps4);
    }

    #[test]
    fn test_disconnect_fires_once() {
        let mut input = coordinator(&["", DS4]);
        input.backend_mut().unplug(1);

        input.check_disconnects();
        input.check_disconnects();

        assert!(!input.is_connected(1).unwrap());
        assert_eq!(input.drain_events(), vec![ControllerEvent::Disconnected(1)]);
        assert_eq!(input.player_count(), 2, "entries are never removed");
    }

    #[test]
    fn test_reconnect_is_silent() {
        let mut input = coordinator(&["", DS4]);
        input.backend_mut().unplug(1);
        input.check_disconnects();
        input.drain_events();

        input.backend_mut().plug(1, DS4);
        input.check_disconnects();
        assert!(input.is_connected(1).unwrap());
        assert!(input.drain_events().is_empty());

        // A second drop raises a fresh notification
        input.backend_mut().unplug(1);
        input.check_disconnects();
        assert_eq!(input.drain_events(), vec![ControllerEvent::Disconnected(1)]);
    }

    #[test]
    fn test_shrunk_device_list_disconnects() {
        let mut input = coordinator(&[DS4, X360]);
        input.backend_mut().set_devices([DS4]);
        input.check_disconnects();
        assert!(input.is_connected(1).unwrap());
        assert!(!input.is_connected(2).unwrap());
        assert_eq!(input.connected_players(), vec![0, 1]);
    }

    #[test]
    fn test_keyboard_never_disconnects() {
        let mut input = coordinator(&[]);
        input.check_disconnects();
        assert!(input.is_connected(KEYBOARD_PLAYER).unwrap());
        assert!(input.drain_events().is_empty());
    }

    #[test]
    fn test_button_queries_delegate() {
        let mut input = coordinator(&[DS4]);
        input.backend_mut().press("joystick 1 button 1");

        assert!(input.button_down(LogicalButton::ActionSouth, 1).unwrap());
        assert!(input.button_held(LogicalButton::ActionSouth, 1).unwrap());
        assert!(!input.button_up(LogicalButton::ActionSouth, 1).unwrap());

        input.backend_mut().end_frame();
        input.backend_mut().release("joystick 1 button 1");
        assert!(!input.button_held(LogicalButton::ActionSouth, 1).unwrap());
        assert!(input.button_up(LogicalButton::ActionSouth, 1).unwrap());
    }

    #[test]
    fn test_keyboard_buttons() {
        let mut input = coordinator(&[]);
        input.backend_mut().press("space");
        assert!(input.button_down(LogicalButton::ActionSouth, 0).unwrap());
        assert!(input.button_down(LogicalButton::LeftBumper, 0).unwrap());
    }

    #[test]
    fn test_unbound_button_fails() {
        let input = coordinator(&[]);
        assert_eq!(
            input.button_down(LogicalButton::Start, 0),
            Err(InputError::UnboundButton {
                family: DeviceFamily::Keyboard,
                button: LogicalButton::Start,
            })
        );
    }

    #[test]
    fn test_unknown_player_fails() {
        let mut input = coordinator(&[]);
        assert_eq!(
            input.axis_value(LogicalAxis::LeftHorizontal, 3),
            Err(InputError::UnknownPlayer(3))
        );
        assert_eq!(
            input.axis_as_button_down(LogicalAxis::LeftHorizontal, 3),
            Err(InputError::UnknownPlayer(3))
        );
        assert!(input.edge_tracker().is_empty());
    }

    #[test]
    fn test_axis_value_dead_zone_and_inversion() {
        let mut input = coordinator(&[X360]);
        input.backend_mut().set_axis("joystick 1 analog 1", 0.05);
        assert_eq!(input.axis_value(LogicalAxis::LeftVertical, 1).unwrap(), 0.0);

        input.backend_mut().set_axis("joystick 1 analog 1", 0.6);
        assert_relative_eq!(input.axis_value(LogicalAxis::LeftVertical, 1).unwrap(), -0.6);
    }

    #[test]
    fn test_axis_value_stable_within_tick() {
        let mut input = coordinator(&[X360]);
        input.backend_mut().set_axis("joystick 1 analog 0", 0.42);
        input.update();
        let first = input.axis_value(LogicalAxis::LeftHorizontal, 1).unwrap();
        let second = input.axis_value(LogicalAxis::LeftHorizontal, 1).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_combined_axis_radial_dead_zone() {
        let mut input = coordinator(&[DS4]);
        input.backend_mut().set_axis("joystick 1 analog 0", 0.05);
        input.backend_mut().set_axis("joystick 1 analog 1", 0.05);
        assert_eq!(
            input
                .combined_axis(LogicalAxis::LeftHorizontal, LogicalAxis::LeftVertical, 1, 0.1)
                .unwrap(),
            Vec2::ZERO
        );

        input.backend_mut().set_axis("joystick 1 analog 0", 0.2);
        input.backend_mut().set_axis("joystick 1 analog 1", 0.0);
        assert_eq!(
            input
                .combined_axis(LogicalAxis::LeftHorizontal, LogicalAxis::LeftVertical, 1, 0.1)
                .unwrap(),
            Vec2::new(0.2, 0.0)
        );
    }

    #[test]
    fn test_combined_axis_skips_per_axis_dead_zone() {
        // 0.08 on each axis sits inside the 0.1 linear band but clears a 0.05 radial one
        let mut input = coordinator(&[DS4]);
        input.backend_mut().set_axis("joystick 1 analog 0", 0.08);
        input.backend_mut().set_axis("joystick 1 analog 1", 0.08);
        assert_eq!(input.axis_value(LogicalAxis::LeftHorizontal, 1).unwrap(), 0.0);

        let value = input
            .combined_axis(LogicalAxis::LeftHorizontal, LogicalAxis::LeftVertical, 1, 0.05)
            .unwrap();
        assert_relative_eq!(value.x, 0.08);
        assert_relative_eq!(value.y, -0.08);
    }

    #[test]
    fn test_combined_axis_keyboard() {
        let mut input = coordinator(&[]);
        input.backend_mut().press("d");
        input.backend_mut().press("w");
        let value = input
            .combined_axis(LogicalAxis::LeftHorizontal, LogicalAxis::LeftVertical, 0, 0.0)
            .unwrap();
        assert_eq!(value, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_axis_as_button_stateless() {
        let mut input = coordinator(&[X360]);
        assert!(!input.axis_as_button(LogicalAxis::RightTrigger, 1).unwrap());
        input.backend_mut().set_axis("joystick 1 analog 9", 0.5);
        assert!(input.axis_as_button(LogicalAxis::RightTrigger, 1).unwrap());
        assert!(input.edge_tracker().is_empty());
    }

    #[test]
    fn test_axis_edge_sequence() {
        // Xbox left stick horizontal has a 0.1 deadzone
        let mut input = coordinator(&[X360]);
        let mut downs = Vec::new();
        let mut ups = Vec::new();

        for raw in [0.0, 0.9, 0.9, 0.0] {
            input.backend_mut().set_axis("joystick 1 analog 0", raw);
            let (down, up) = tick(&mut input, |input| {
                (
                    input
                        .axis_as_button_down(LogicalAxis::LeftHorizontal, 1)
                        .unwrap(),
                    input.axis_as_button_up(LogicalAxis::LeftHorizontal, 1).unwrap(),
                )
            });
            downs.push(down);
            ups.push(up);
        }

        assert_eq!(downs, vec![false, true, false, false]);
        assert_eq!(ups, vec![false, false, false, true]);
        assert_eq!(input.edge_tracker().len(), 1);
    }

    #[test]
    fn test_repeated_queries_within_tick() {
        let mut input = coordinator(&[X360]);
        tick(&mut input, |input| {
            input.axis_as_button_down(LogicalAxis::RightTrigger, 1).unwrap()
        });

        input.backend_mut().set_axis("joystick 1 analog 9", 1.0);
        let results = tick(&mut input, |input| {
            // Extra update calls inside the tick change nothing
            input.update();
            let first = input.axis_as_button_down(LogicalAxis::RightTrigger, 1).unwrap();
            input.update();
            let second = input.axis_as_button_down(LogicalAxis::RightTrigger, 1).unwrap();
            (first, second)
        });
        assert_eq!(results, (true, true));
    }

    #[test]
    fn test_first_query_while_active_reports_down() {
        // No history before the first query, so an already-held trigger
        // reads as a fresh press on that tick
        let mut input = coordinator(&[X360]);
        input.backend_mut().set_axis("joystick 1 analog 9", 1.0);
        let down = tick(&mut input, |input| {
            input.axis_as_button_down(LogicalAxis::RightTrigger, 1).unwrap()
        });
        assert!(down);

        let down = tick(&mut input, |input| {
            input.axis_as_button_down(LogicalAxis::RightTrigger, 1).unwrap()
        });
        assert!(!down);
    }

    #[test]
    fn test_directional_dpad_edges() {
        let mut input = coordinator(&[DS4]);
        let query = |input: &mut InputCoordinator<VirtualBackend>| {
            (
                input
                    .axis_as_button_down_in(LogicalAxis::DpadHorizontal, 1, AxisDirection::Negative)
                    .unwrap(),
                input
                    .axis_as_button_down_in(LogicalAxis::DpadHorizontal, 1, AxisDirection::Positive)
                    .unwrap(),
            )
        };

        assert_eq!(tick(&mut input, query), (false, false));

        input.backend_mut().set_axis("joystick 1 analog 6", -1.0);
        assert_eq!(tick(&mut input, query), (true, false));

        input.backend_mut().set_axis("joystick 1 analog 6", 1.0);
        assert_eq!(tick(&mut input, query), (false, true));

        input.backend_mut().set_axis("joystick 1 analog 6", 0.0);
        let released = tick(&mut input, |input| {
            input
                .axis_as_button_up_in(LogicalAxis::DpadHorizontal, 1, AxisDirection::Positive)
                .unwrap()
        });
        assert!(released);
        assert_eq!(input.edge_tracker().len(), 2);
    }

    #[test]
    fn test_keyboard_axis_edges() {
        let mut input = coordinator(&[]);
        tick(&mut input, |input| {
            input.axis_as_button_down(LogicalAxis::LeftTrigger, 0).unwrap()
        });

        input.backend_mut().press("left shift");
        let down = tick(&mut input, |input| {
            input.axis_as_button_down(LogicalAxis::LeftTrigger, 0).unwrap()
        });
        assert!(down);
    }

    #[test]
    fn test_edges_per_player() {
        let mut input = coordinator(&[X360, X360]);
        tick(&mut input, |input| {
            input.axis_as_button_down(LogicalAxis::LeftTrigger, 1).unwrap();
            input.axis_as_button_down(LogicalAxis::LeftTrigger, 2).unwrap();
        });

        input.backend_mut().set_axis("joystick 2 analog 8", 1.0);
        let downs = tick(&mut input, |input| {
            (
                input.axis_as_button_down(LogicalAxis::LeftTrigger, 1).unwrap(),
                input.axis_as_button_down(LogicalAxis::LeftTrigger, 2).unwrap(),
            )
        });
        assert_eq!(downs, (false, true));
    }

    /// Run one tick per raw value and collect any-direction edges
    fn any_edges(
        input: &mut InputCoordinator<VirtualBackend>,
        identifier: &str,
        axis: LogicalAxis,
        player: usize,
        raws: &[f32],
    ) -> (Vec<bool>, Vec<bool>) {
        let mut downs = Vec::new();
        let mut ups = Vec::new();
        for &raw in raws {
            input.backend_mut().set_axis(identifier, raw);
            let (down, up) = tick(input, |input| {
                (
                    input.axis_as_button_down(axis, player).unwrap(),
                    input.axis_as_button_up(axis, player).unwrap(),
                )
            });
            downs.push(down);
            ups.push(up);
        }
        (downs, ups)
    }

    #[test]
    fn test_rest_offset_trigger_single_pull() {
        // PS4 right trigger rests at -1 and passes through raw zero mid-pull
        let mut input = coordinator(&[DS4]);
        let (downs, ups) = any_edges(
            &mut input,
            "joystick 1 analog 4",
            LogicalAxis::RightTrigger,
            1,
            &[-1.0, -0.5, 0.0, 0.5, 1.0, -1.0],
        );

        assert_eq!(downs, vec![false, true, false, false, false, false]);
        assert_eq!(ups, vec![false, false, false, false, false, true]);
    }

    #[test]
    fn test_inverted_stick_any_edges() {
        // Xbox left stick vertical is inverted with a 0.1 deadzone
        let mut input = coordinator(&[X360]);
        let (downs, ups) = any_edges(
            &mut input,
            "joystick 1 analog 1",
            LogicalAxis::LeftVertical,
            1,
            &[0.0, -0.9, -0.9, 0.05, 0.7, 0.0],
        );

        assert_eq!(downs, vec![false, true, false, false, true, false]);
        assert_eq!(ups, vec![false, false, false, true, false, true]);
    }
}
