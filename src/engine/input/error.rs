// Input query errors

use super::logical::{LogicalAxis, LogicalButton};
use super::mapping::DeviceFamily;

/// Errors raised by the query surface
///
/// Unknown device names are not represented here: they resolve to the
/// fallback family and are only logged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{family} has no binding for button {button}")]
    UnboundButton {
        family: DeviceFamily,
        button: LogicalButton,
    },

    #[error("{family} has no binding for axis {axis}")]
    UnboundAxis {
        family: DeviceFamily,
        axis: LogicalAxis,
    },

    #[error("No mapping for player {0}")]
    UnknownPlayer(usize),
}
