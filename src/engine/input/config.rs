// Axis calibration records and coordinator tuning

use crate::core::math;
use std::time::Duration;

/// Default delay between hotplug reconciliation passes
pub const DEFAULT_RECONCILE_INTERVAL: Duration = Duration::from_secs(5);

/// Default threshold for reading an axis as a button in either direction
pub const DEFAULT_AXIS_BUTTON_EPSILON: f32 = 0.01;

/// Default directional threshold for computed axes, which carry no calibration
pub const DEFAULT_COMPUTED_DIRECTION_THRESHOLD: f32 = 0.1;

/// Calibration for one raw axis on one device family
#[derive(Debug, Clone, PartialEq)]
pub struct AxisCalibration {
    /// Identifier polled from the host for this axis
    pub raw_identifier: String,

    /// Lower bound of the raw range
    pub minimum: f32,

    /// Upper bound of the raw range
    pub maximum: f32,

    /// Flip the sign of the reading
    pub inverted: bool,

    /// Half-width of the band around `rest_value` clamped to zero
    pub dead_zone_offset: f32,

    /// Raw reading when the control is untouched
    pub rest_value: f32,
}

impl AxisCalibration {
    /// Create a calibration spanning [-1, 1] resting at zero with no deadzone
    pub fn new(raw_identifier: impl Into<String>) -> Self {
        Self {
            raw_identifier: raw_identifier.into(),
            minimum: -1.0,
            maximum: 1.0,
            inverted: false,
            dead_zone_offset: 0.0,
            rest_value: 0.0,
        }
    }

    /// Set the raw range
    pub fn range(mut self, minimum: f32, maximum: f32) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }

    /// Mark the axis as inverted
    pub fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }

    /// Set the deadzone half-width
    pub fn dead_zone(mut self, offset: f32) -> Self {
        debug_assert!(offset >= 0.0, "deadzone offset must be non-negative");
        self.dead_zone_offset = offset.max(0.0);
        self
    }

    /// Set the unpressed baseline
    pub fn rest(mut self, rest_value: f32) -> Self {
        self.rest_value = rest_value;
        self
    }

    /// Sign multiplier applied to raw readings
    pub fn sign(&self) -> f32 {
        math::inversion_sign(self.inverted)
    }

    /// Normalize a raw reading: zero inside the deadzone, otherwise the
    /// sign-corrected reading clamped into the calibrated range
    pub fn normalize(&self, raw: f32) -> f32 {
        if math::in_dead_zone(raw, self.rest_value, self.dead_zone_offset) {
            return 0.0;
        }
        math::clamp_to_span(raw * self.sign(), self.minimum, self.maximum)
    }
}

/// Tuning for the input coordinator
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinatorConfig {
    /// Delay between hotplug reconciliation passes
    pub reconcile_interval: Duration,

    /// Magnitude an axis must exceed to read as pressed in either direction
    pub axis_button_epsilon: f32,

    /// Directional threshold used by computed-axis families
    pub computed_direction_threshold: f32,
}

impl CoordinatorConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self {
            reconcile_interval: DEFAULT_RECONCILE_INTERVAL,
            axis_button_epsilon: DEFAULT_AXIS_BUTTON_EPSILON,
            computed_direction_threshold: DEFAULT_COMPUTED_DIRECTION_THRESHOLD,
        }
    }

    /// Override the hotplug reconciliation interval
    pub fn with_reconcile_interval(mut self, interval: Duration) -> Self {
        self.reconcile_interval = interval;
        self
    }

    /// Override the any-direction button threshold
    pub fn with_axis_button_epsilon(mut self, epsilon: f32) -> Self {
        self.axis_button_epsilon = epsilon;
        self
    }

    /// Override the computed-axis directional threshold
    pub fn with_computed_direction_threshold(mut self, threshold: f32) -> Self {
        self.computed_direction_threshold = threshold;
        self
    }
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
