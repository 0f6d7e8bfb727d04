// Gamepad and keyboard normalization layer

pub mod core;
pub mod engine;

pub use engine::game_loop::{FrameSchedule, GameLoop};
pub use engine::input::{
    AxisDirection, ControllerEvent, CoordinatorConfig, DeviceBackend, DeviceFamily,
    InputCoordinator, InputError, LogicalAxis, LogicalButton, VirtualBackend,
};
