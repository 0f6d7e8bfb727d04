// Input mapping system
//
// This module normalizes keyboard and gamepad input into a fixed vocabulary of
// logical buttons and axes, tracks controller hotplug, and synthesizes
// down/up edges for axes used as buttons.
//
// ## Architecture
//
// - `logical`: Logical buttons, axes and axis directions
// - `config`: Per-axis calibration and coordinator tuning
// - `backend`: Host polling capability and a scriptable in-memory backend
// - `mapping`: Per-device binding tables and the family dispatch table
// - `families`: Hand-authored tables for each supported device family
// - `registry`: Device name to family resolution
// - `edge`: Axis-as-button edge tracking
// - `events`: Controller connection notifications
// - `manager`: Input coordinator tying everything together
//
// ## Usage Example
//
// ```rust
// use padmap::engine::input::{InputCoordinator, LogicalAxis, LogicalButton, VirtualBackend};
//
// let mut input = InputCoordinator::new(VirtualBackend::with_devices(["Wireless Controller"]));
//
// // Once per logical tick
// input.update();
// if input.button_down(LogicalButton::ActionSouth, 1)? {
//     // Player 1 pressed the south face button
// }
// if input.axis_as_button_down(LogicalAxis::RightTrigger, 1)? {
//     // Player 1 pulled the right trigger this tick
// }
// input.late_update();
//
// // Every few seconds, then after rendering
// input.reconcile_devices();
// input.check_disconnects();
// ```

pub mod backend;
pub mod config;
pub mod edge;
pub mod error;
pub mod events;
pub mod families;
pub mod logical;
pub mod manager;
pub mod mapping;
pub mod registry;

// Re-export commonly used types
pub use backend::{DeviceBackend, VirtualBackend};
pub use config::{AxisCalibration, CoordinatorConfig};
pub use edge::{AxisEdgeTracker, EdgeKey, EdgeState};
pub use error::InputError;
pub use events::{ControllerEvent, ControllerEvents, ControllerObserver};
pub use logical::{AxisDirection, LogicalAxis, LogicalButton};
pub use manager::{InputCoordinator, KEYBOARD_PLAYER};
pub use mapping::{DeviceFamily, DeviceMapping, FamilyDescriptor};
pub use registry::MappingRegistry;
