// Switch Pro Controller
//
// Triggers report as digital buttons and the sticks are read raw, so every
// axis goes through the computed path.

use crate::core::math;
use crate::engine::input::backend::DeviceBackend;
use crate::engine::input::config::AxisCalibration;
use crate::engine::input::error::InputError;
use crate::engine::input::logical::{LogicalAxis, LogicalButton};
use crate::engine::input::mapping::{
    joystick_analog, joystick_button, DeviceMapping, FamilyDescriptor,
};

pub static DESCRIPTOR: FamilyDescriptor = FamilyDescriptor {
    name: "Switch Pro Controller",
    aliases: &["Wireless Gamepad"],
    bind,
    computed_axis: Some(read_axis),
};

fn bind(mapping: &mut DeviceMapping) {
    let n = mapping.device_number();

    mapping.bind_button(LogicalButton::RightBumper, joystick_button(n, 5));
    mapping.bind_button(LogicalButton::LeftBumper, joystick_button(n, 4));
    mapping.bind_button(LogicalButton::RightStickButton, joystick_button(n, 11));

    mapping.bind_button(LogicalButton::ActionSouth, joystick_button(n, 0));
    mapping.bind_button(LogicalButton::ActionWest, joystick_button(n, 2));
    mapping.bind_button(LogicalButton::ActionEast, joystick_button(n, 1));
    mapping.bind_button(LogicalButton::ActionNorth, joystick_button(n, 3));
    // Plus and capture
    mapping.bind_button(LogicalButton::Start, joystick_button(n, 9));
    mapping.bind_button(LogicalButton::BackSelect, joystick_button(n, 13));

    mapping.bind_axis(
        LogicalAxis::LeftHorizontal,
        AxisCalibration::new(joystick_analog(n, 1)).dead_zone(0.2),
    );
    mapping.bind_axis(
        LogicalAxis::LeftVertical,
        AxisCalibration::new(joystick_analog(n, 3))
            .inverted()
            .dead_zone(0.2),
    );
    mapping.bind_axis(
        LogicalAxis::RightHorizontal,
        AxisCalibration::new(joystick_analog(n, 6)).dead_zone(0.2),
    );
    mapping.bind_axis(
        LogicalAxis::RightVertical,
        AxisCalibration::new(joystick_analog(n, 7))
            .inverted()
            .dead_zone(0.2),
    );

    mapping.bind_axis(
        LogicalAxis::DpadHorizontal,
        AxisCalibration::new(joystick_analog(n, 8)).dead_zone(0.3),
    );
    mapping.bind_axis(
        LogicalAxis::DpadVertical,
        AxisCalibration::new(joystick_analog(n, 9)).dead_zone(0.3),
    );

    // ZL/ZR are buttons 6 and 7
    mapping.bind_axis(
        LogicalAxis::LeftTrigger,
        AxisCalibration::new(joystick_button(n, 6)).range(0.0, 1.0),
    );
    mapping.bind_axis(
        LogicalAxis::RightTrigger,
        AxisCalibration::new(joystick_button(n, 7)).range(0.0, 1.0),
    );
}

fn read_axis(
    mapping: &DeviceMapping,
    axis: LogicalAxis,
    backend: &dyn DeviceBackend,
) -> Result<f32, InputError> {
    let calibration = mapping.calibration(axis)?;
    if axis.is_trigger() {
        return Ok(if backend.key_held(&calibration.raw_identifier) {
            1.0
        } else {
            0.0
        });
    }

    // No deadzone or inversion on this path
    Ok(math::clamp_to_span(
        backend.raw_axis(&calibration.raw_identifier),
        calibration.minimum,
        calibration.maximum,
    ))
}
