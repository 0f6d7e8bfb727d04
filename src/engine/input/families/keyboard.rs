// Keyboard and mouse, always bound as player 0

use crate::engine::input::backend::DeviceBackend;
use crate::engine::input::error::InputError;
use crate::engine::input::logical::{LogicalAxis, LogicalButton};
use crate::engine::input::mapping::{
    DeviceMapping, FamilyDescriptor, KeyContribution, PointerComponent,
};

pub static DESCRIPTOR: FamilyDescriptor = FamilyDescriptor {
    name: "Keyboard",
    aliases: &[],
    bind,
    computed_axis: Some(read_axis),
};

/// Opposed pair of keys forming one axis
fn key_pair(negative: &str, positive: &str) -> Vec<KeyContribution> {
    vec![
        KeyContribution::new(negative, -1.0),
        KeyContribution::new(positive, 1.0),
    ]
}

fn bind(mapping: &mut DeviceMapping) {
    // Buttons
    mapping.bind_button(LogicalButton::RightBumper, "mouse 0");
    mapping.bind_button(LogicalButton::LeftBumper, "space");
    mapping.bind_button(LogicalButton::RightStickButton, "left ctrl");
    mapping.bind_button(LogicalButton::ActionSouth, "space");
    mapping.bind_button(LogicalButton::ActionWest, "return");

    // Movement (WASD) doubles as the DPAD
    mapping.bind_key_axis(LogicalAxis::LeftHorizontal, key_pair("a", "d"));
    mapping.bind_key_axis(LogicalAxis::LeftVertical, key_pair("s", "w"));
    mapping.bind_key_axis(LogicalAxis::DpadHorizontal, key_pair("a", "d"));
    mapping.bind_key_axis(LogicalAxis::DpadVertical, key_pair("s", "w"));

    // Triggers
    mapping.bind_key_axis(
        LogicalAxis::LeftTrigger,
        vec![KeyContribution::new("left shift", 1.0)],
    );
    mapping.bind_key_axis(
        LogicalAxis::RightTrigger,
        vec![KeyContribution::new("mouse 1", 1.0)],
    );

    // Aim follows the pointer
    mapping.bind_pointer_axis(LogicalAxis::RightHorizontal, PointerComponent::Horizontal);
    mapping.bind_pointer_axis(LogicalAxis::RightVertical, PointerComponent::Depth);
}

fn read_axis(
    mapping: &DeviceMapping,
    axis: LogicalAxis,
    backend: &dyn DeviceBackend,
) -> Result<f32, InputError> {
    if let Some(component) = mapping.pointer_axis(axis) {
        let delta = backend.pointer_plane_delta().unwrap_or_default();
        return Ok(match component {
            PointerComponent::Horizontal => delta.x,
            PointerComponent::Depth => delta.y,
        });
    }

    let keys = mapping
        .key_axis(axis)
        .ok_or_else(|| mapping.unbound_axis(axis))?;
    Ok(keys
        .iter()
        .filter(|contribution| backend.key_held(&contribution.key))
        .map(|contribution| contribution.weight)
        .sum())
}
