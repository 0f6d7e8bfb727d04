// Xbox 360 and compatible pads; also the layout assumed for unknown devices

use crate::engine::input::config::AxisCalibration;
use crate::engine::input::logical::{LogicalAxis, LogicalButton};
use crate::engine::input::mapping::{
    joystick_analog, joystick_button, DeviceMapping, FamilyDescriptor,
};

pub static DESCRIPTOR: FamilyDescriptor = FamilyDescriptor {
    name: "Xbox 360 Controller",
    aliases: &[
        "Controller (Afterglow Gamepad for Xbox 360)",
        "Controller (Batarang wired controller (XBOX))",
        "Controller (Gamepad for Xbox 360)",
        "Controller (XBOX 360 For Windows)",
        "Controller (XBOX 360 Wireless Receiver for Windows)",
        "XBOX 360 For Windows (Controller)",
        "Controller (XEOX Gamepad)",
    ],
    bind,
    computed_axis: None,
};

fn bind(mapping: &mut DeviceMapping) {
    let n = mapping.device_number();

    mapping.bind_button(LogicalButton::LeftBumper, joystick_button(n, 4));
    mapping.bind_button(LogicalButton::RightBumper, joystick_button(n, 5));
    mapping.bind_button(LogicalButton::RightStickButton, joystick_button(n, 9));

    mapping.bind_button(LogicalButton::ActionSouth, joystick_button(n, 0));
    mapping.bind_button(LogicalButton::ActionWest, joystick_button(n, 2));
    mapping.bind_button(LogicalButton::ActionEast, joystick_button(n, 1));
    mapping.bind_button(LogicalButton::ActionNorth, joystick_button(n, 3));
    mapping.bind_button(LogicalButton::Start, joystick_button(n, 7));
    mapping.bind_button(LogicalButton::BackSelect, joystick_button(n, 6));

    mapping.bind_axis(
        LogicalAxis::LeftHorizontal,
        AxisCalibration::new(joystick_analog(n, 0)).dead_zone(0.1),
    );
    mapping.bind_axis(
        LogicalAxis::LeftVertical,
        AxisCalibration::new(joystick_analog(n, 1))
            .inverted()
            .dead_zone(0.1),
    );
    // Right stick drifts little on this hardware
    mapping.bind_axis(
        LogicalAxis::RightHorizontal,
        AxisCalibration::new(joystick_analog(n, 3)).dead_zone(0.01),
    );
    mapping.bind_axis(
        LogicalAxis::RightVertical,
        AxisCalibration::new(joystick_analog(n, 4))
            .inverted()
            .dead_zone(0.01),
    );

    mapping.bind_axis(
        LogicalAxis::LeftTrigger,
        AxisCalibration::new(joystick_analog(n, 8))
            .range(0.0, 1.0)
            .dead_zone(0.2),
    );
    mapping.bind_axis(
        LogicalAxis::RightTrigger,
        AxisCalibration::new(joystick_analog(n, 9))
            .range(0.0, 1.0)
            .dead_zone(0.2),
    );

    mapping.bind_axis(
        LogicalAxis::DpadHorizontal,
        AxisCalibration::new(joystick_analog(n, 5)).dead_zone(0.3),
    );
    mapping.bind_axis(
        LogicalAxis::DpadVertical,
        AxisCalibration::new(joystick_analog(n, 6)).dead_zone(0.3),
    );
}
