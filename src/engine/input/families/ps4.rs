// DualShock 4

use crate::engine::input::config::AxisCalibration;
use crate::engine::input::logical::{LogicalAxis, LogicalButton};
use crate::engine::input::mapping::{
    joystick_analog, joystick_button, DeviceMapping, FamilyDescriptor,
};

pub static DESCRIPTOR: FamilyDescriptor = FamilyDescriptor {
    name: "PS4 Controller",
    aliases: &["Wireless Controller"],
    bind,
    computed_axis: None,
};

fn bind(mapping: &mut DeviceMapping) {
    let n = mapping.device_number();

    mapping.bind_button(LogicalButton::RightBumper, joystick_button(n, 5));
    mapping.bind_button(LogicalButton::LeftBumper, joystick_button(n, 4));
    mapping.bind_button(LogicalButton::RightStickButton, joystick_button(n, 11));

    // Square/cross/circle/triangle report as 0/1/2/3
    mapping.bind_button(LogicalButton::ActionSouth, joystick_button(n, 1));
    mapping.bind_button(LogicalButton::ActionWest, joystick_button(n, 0));
    mapping.bind_button(LogicalButton::ActionEast, joystick_button(n, 2));
    mapping.bind_button(LogicalButton::ActionNorth, joystick_button(n, 3));
    mapping.bind_button(LogicalButton::Start, joystick_button(n, 9));
    mapping.bind_button(LogicalButton::BackSelect, joystick_button(n, 8));

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
    mapping.bind_axis(
        LogicalAxis::RightHorizontal,
        AxisCalibration::new(joystick_analog(n, 2)).dead_zone(0.1),
    );
    mapping.bind_axis(
        LogicalAxis::RightVertical,
        AxisCalibration::new(joystick_analog(n, 5))
            .inverted()
            .dead_zone(0.1),
    );

    // Triggers rest fully negative
    mapping.bind_axis(
        LogicalAxis::LeftTrigger,
        AxisCalibration::new(joystick_analog(n, 3))
            .dead_zone(0.3)
            .rest(-1.0),
    );
    mapping.bind_axis(
        LogicalAxis::RightTrigger,
        AxisCalibration::new(joystick_analog(n, 4))
            .dead_zone(0.3)
            .rest(-1.0),
    );

    mapping.bind_axis(
        LogicalAxis::DpadHorizontal,
        AxisCalibration::new(joystick_analog(n, 6)).dead_zone(0.3),
    );
    mapping.bind_axis(
        LogicalAxis::DpadVertical,
        AxisCalibration::new(joystick_analog(n, 7)).dead_zone(0.3),
    );
}
