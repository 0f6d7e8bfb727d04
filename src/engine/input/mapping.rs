// Per-device binding tables and the family dispatch table

use super::backend::DeviceBackend;
use super::config::AxisCalibration;
use super::error::InputError;
use super::families;
use super::logical::{LogicalAxis, LogicalButton};
use std::collections::HashMap;
use std::fmt;

/// Populates a freshly created mapping's tables
pub type BindFn = fn(&mut DeviceMapping);

/// Replaces calibrated axis reads for families that compute their axes
pub type ComputedAxisFn =
    fn(&DeviceMapping, LogicalAxis, &dyn DeviceBackend) -> Result<f32, InputError>;

/// Static behaviour of one device family
pub struct FamilyDescriptor {
    /// Human-readable family name
    pub name: &'static str,

    /// Raw device names this family claims
    pub aliases: &'static [&'static str],

    /// Table population
    pub bind: BindFn,

    /// Custom axis formula, if the family does not read calibrated axes
    pub computed_axis: Option<ComputedAxisFn>,
}

/// Closed set of supported device families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceFamily {
    Keyboard,
    Ps4,
    Xbox360,
    SwitchPro,
}

impl DeviceFamily {
    /// Name-matched families in registration order
    pub const GAMEPADS: [DeviceFamily; 3] = [
        DeviceFamily::Ps4,
        DeviceFamily::Xbox360,
        DeviceFamily::SwitchPro,
    ];

    /// Layout assumed for devices no family claims
    pub const FALLBACK: DeviceFamily = DeviceFamily::Xbox360;

    /// Dispatch table entry for this family
    pub fn descriptor(self) -> &'static FamilyDescriptor {
        match self {
            DeviceFamily::Keyboard => &families::keyboard::DESCRIPTOR,
            DeviceFamily::Ps4 => &families::ps4::DESCRIPTOR,
            DeviceFamily::Xbox360 => &families::xbox360::DESCRIPTOR,
            DeviceFamily::SwitchPro => &families::switch_pro::DESCRIPTOR,
        }
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Raw device names this family recognizes (empty for the keyboard)
    pub fn declared_aliases(self) -> &'static [&'static str] {
        self.descriptor().aliases
    }

    /// Whether the family replaces calibrated reads with its own formula
    pub fn uses_computed_axis(self) -> bool {
        self.descriptor().computed_axis.is_some()
    }
}

impl fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One key's contribution to a key-synthesized axis
#[derive(Debug, Clone, PartialEq)]
pub struct KeyContribution {
    pub key: String,
    pub weight: f32,
}

impl KeyContribution {
    pub fn new(key: impl Into<String>, weight: f32) -> Self {
        Self {
            key: key.into(),
            weight,
        }
    }
}

/// Component of the pointer's plane delta feeding an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerComponent {
    /// Sideways offset on the plane
    Horizontal,
    /// Forward offset on the plane
    Depth,
}

/// Binding tables for one bound device
#[derive(Debug, Clone)]
pub struct DeviceMapping {
    /// Family this mapping was bound as
    family: DeviceFamily,

    /// Enumeration slot, `None` for the always-present keyboard
    slot: Option<usize>,

    /// Logical button -> raw key identifier
    buttons: HashMap<LogicalButton, String>,

    /// Logical axis -> raw axis calibration
    axes: HashMap<LogicalAxis, AxisCalibration>,

    /// Axes synthesized from held keys
    key_axes: HashMap<LogicalAxis, Vec<KeyContribution>>,

    /// Axes synthesized from the pointer projection
    pointer_axes: HashMap<LogicalAxis, PointerComponent>,

    /// Whether the device still occupies its slot
    connected: bool,
}

impl DeviceMapping {
    /// Create a mapping for `family` at `slot` and populate its tables
    pub fn bind(family: DeviceFamily, slot: Option<usize>) -> Self {
        let mut mapping = Self {
            family,
            slot,
            buttons: HashMap::new(),
            axes: HashMap::new(),
            key_axes: HashMap::new(),
            pointer_axes: HashMap::new(),
            connected: true,
        };
        (family.descriptor().bind)(&mut mapping);
        mapping
    }

    pub fn family(&self) -> DeviceFamily {
        self.family
    }

    pub fn slot(&self) -> Option<usize> {
        self.slot
    }

    /// Number used in synthesized `"joystick N ..."` identifiers
    pub fn device_number(&self) -> usize {
        self.slot.map_or(0, |slot| slot + 1)
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub(crate) fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    pub fn uses_computed_axis(&self) -> bool {
        self.family.uses_computed_axis()
    }

    /// Bind a logical button to a raw key identifier
    pub fn bind_button(&mut self, button: LogicalButton, identifier: impl Into<String>) {
        self.buttons.insert(button, identifier.into());
    }

    /// Bind a logical axis to a calibrated raw axis
    pub fn bind_axis(&mut self, axis: LogicalAxis, calibration: AxisCalibration) {
        self.axes.insert(axis, calibration);
    }

    /// Bind a logical axis to a set of held keys
    pub fn bind_key_axis(&mut self, axis: LogicalAxis, keys: Vec<KeyContribution>) {
        self.key_axes.insert(axis, keys);
    }

    /// Bind a logical axis to the pointer projection
    pub fn bind_pointer_axis(&mut self, axis: LogicalAxis, component: PointerComponent) {
        self.pointer_axes.insert(axis, component);
    }

    pub fn supports_button(&self, button: LogicalButton) -> bool {
        self.buttons.contains_key(&button)
    }

    pub fn supports_axis(&self, axis: LogicalAxis) -> bool {
        self.axes.contains_key(&axis)
            || self.key_axes.contains_key(&axis)
            || self.pointer_axes.contains_key(&axis)
    }

    /// Raw identifier bound to a button
    pub fn button_identifier(&self, button: LogicalButton) -> Result<&str, InputError> {
        self.buttons
            .get(&button)
            .map(String::as_str)
            .ok_or(InputError::UnboundButton {
                family: self.family,
                button,
            })
    }

    /// Calibration bound to an axis
    pub fn calibration(&self, axis: LogicalAxis) -> Result<&AxisCalibration, InputError> {
        self.axes.get(&axis).ok_or_else(|| self.unbound_axis(axis))
    }

    /// Keys synthesizing an axis
    pub fn key_axis(&self, axis: LogicalAxis) -> Option<&[KeyContribution]> {
        self.key_axes.get(&axis).map(Vec::as_slice)
    }

    /// Pointer component feeding an axis
    pub fn pointer_axis(&self, axis: LogicalAxis) -> Option<PointerComponent> {
        self.pointer_axes.get(&axis).copied()
    }

    pub(crate) fn unbound_axis(&self, axis: LogicalAxis) -> InputError {
        InputError::UnboundAxis {
            family: self.family,
            axis,
        }
    }

    /// Normalized axis value: the family formula for computed families,
    /// otherwise the deadzone-clamped, sign-corrected raw reading
    pub fn read_axis(
        &self,
        axis: LogicalAxis,
        backend: &dyn DeviceBackend,
    ) -> Result<f32, InputError> {
        if let Some(compute) = self.family.descriptor().computed_axis {
            return compute(self, axis, backend);
        }
        let calibration = self.calibration(axis)?;
        Ok(calibration.normalize(backend.raw_axis(&calibration.raw_identifier)))
    }

    /// Sign-corrected reading without any deadzone applied
    pub fn read_axis_unfiltered(
        &self,
        axis: LogicalAxis,
        backend: &dyn DeviceBackend,
    ) -> Result<f32, InputError> {
        if let Some(compute) = self.family.descriptor().computed_axis {
            return compute(self, axis, backend);
        }
        let calibration = self.calibration(axis)?;
        Ok(backend.raw_axis(&calibration.raw_identifier) * calibration.sign())
    }
}

/// `"joystick N button M"`
pub fn joystick_button(device_number: usize, button: u32) -> String {
    format!("joystick {} button {}", device_number, button)
}

/// `"joystick N analog M"`
pub fn joystick_analog(device_number: usize, axis: u32) -> String {
    format!("joystick {} analog {}", device_number, axis)
}
