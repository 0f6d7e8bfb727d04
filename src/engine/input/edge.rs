// Down/up edge synthesis on top of continuous axis sampling

use super::backend::DeviceBackend;
use super::config::CoordinatorConfig;
use super::error::InputError;
use super::logical::{AxisDirection, LogicalAxis};
use super::mapping::DeviceMapping;
use crate::core::math;

/// Identity of one tracked axis-as-button
///
/// `player` indexes the coordinator's mapping list, which never removes
/// entries, so it identifies the owning mapping for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub player: usize,
    pub axis: LogicalAxis,
    pub direction: AxisDirection,
}

impl EdgeKey {
    pub fn new(player: usize, axis: LogicalAxis, direction: AxisDirection) -> Self {
        Self {
            player,
            axis,
            direction,
        }
    }
}

/// Two-frame pressed state for one tracked axis
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeState {
    key: EdgeKey,
    pressed_prev: bool,
    pressed_current: bool,
}

impl EdgeState {
    fn new(key: EdgeKey, pressed: bool) -> Self {
        Self {
            key,
            pressed_prev: false,
            pressed_current: pressed,
        }
    }

    pub fn key(&self) -> EdgeKey {
        self.key
    }

    /// Pressed in the current tick
    pub fn is_pressed(&self) -> bool {
        self.pressed_current
    }

    /// Went from released to pressed this tick
    pub fn is_down(&self) -> bool {
        self.pressed_current && !self.pressed_prev
    }

    /// Went from pressed to released this tick
    pub fn is_up(&self) -> bool {
        !self.pressed_current && self.pressed_prev
    }
}

/// Per-(player, axis, direction) edge tracker
///
/// Each logical tick runs one sample phase, any number of queries, then one
/// commit. Extra sample calls inside a tick are ignored.
#[derive(Debug, Default)]
pub struct AxisEdgeTracker {
    states: Vec<EdgeState>,
    sampled_this_tick: bool,
}

impl AxisEdgeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracked state for a key, if it has been registered
    pub fn get(&self, key: &EdgeKey) -> Option<&EdgeState> {
        self.states.iter().find(|state| state.key == *key)
    }

    /// Start tracking `key` with its current pressed state
    ///
    /// The previous state starts released, so a key registered while its axis
    /// is already active reports a down edge on this tick. Registering a key
    /// that is already tracked returns the existing state unchanged.
    pub fn register(&mut self, key: EdgeKey, pressed: bool) -> &EdgeState {
        match self.states.iter().position(|state| state.key == key) {
            Some(index) => &self.states[index],
            None => {
                log::debug!(
                    "Tracking {:?} {} for player {}",
                    key.direction,
                    key.axis,
                    key.player
                );
                self.states.push(EdgeState::new(key, pressed));
                &self.states[self.states.len() - 1]
            }
        }
    }

    /// Sample phase: recompute the current state of every tracked key
    ///
    /// Returns false without sampling when this tick was already sampled.
    pub fn sample<F>(&mut self, mut is_pressed: F) -> bool
    where
        F: FnMut(&EdgeKey) -> bool,
    {
        if self.sampled_this_tick {
            return false;
        }
        for state in &mut self.states {
            state.pressed_current = is_pressed(&state.key);
        }
        self.sampled_this_tick = true;
        true
    }

    /// Commit phase: current becomes previous and the tick is consumed
    pub fn commit(&mut self) {
        for state in &mut self.states {
            state.pressed_prev = state.pressed_current;
        }
        self.sampled_this_tick = false;
    }

    pub fn sampled_this_tick(&self) -> bool {
        self.sampled_this_tick
    }

    /// Number of tracked keys
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[EdgeState] {
        &self.states
    }
}

/// Threshold policy deciding whether an axis counts as pressed
///
/// `Any` requires the raw value to leave the deadzone and then sit more than
/// the configured epsilon away from rest; computed families measure their
/// value from zero.
/// Directional reads compare the sign-corrected raw value against the
/// sign-corrected rest value offset by the deadzone; computed families, which
/// carry no calibration, use a zero baseline and the configured threshold.
pub fn axis_pressed(
    mapping: &DeviceMapping,
    axis: LogicalAxis,
    direction: AxisDirection,
    backend: &dyn DeviceBackend,
    config: &CoordinatorConfig,
) -> Result<bool, InputError> {
    if direction == AxisDirection::Any {
        if mapping.uses_computed_axis() {
            let value = mapping.read_axis(axis, backend)?;
            return Ok(value.abs() > config.axis_button_epsilon);
        }
        let calibration = mapping.calibration(axis)?;
        let raw = backend.raw_axis(&calibration.raw_identifier);
        if math::in_dead_zone(raw, calibration.rest_value, calibration.dead_zone_offset) {
            return Ok(false);
        }
        return Ok((raw - calibration.rest_value).abs() > config.axis_button_epsilon);
    }

    let (sample, baseline, threshold) = if mapping.uses_computed_axis() {
        (
            mapping.read_axis(axis, backend)?,
            0.0,
            config.computed_direction_threshold,
        )
    } else {
        let calibration = mapping.calibration(axis)?;
        (
            mapping.read_axis_unfiltered(axis, backend)?,
            calibration.rest_value * calibration.sign(),
            calibration.dead_zone_offset,
        )
    };

    Ok(match direction {
        AxisDirection::Positive => sample > baseline + threshold,
        _ => sample < baseline - threshold,
    })
}
