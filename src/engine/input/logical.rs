// Device-independent button and axis vocabulary

use std::fmt;

/// Abstract buttons exposed to game logic, stable across device families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalButton {
    // Face buttons
    ActionSouth,
    ActionEast,
    ActionWest,
    ActionNorth,

    // Shoulders
    LeftBumper,
    RightBumper,

    // Menu
    BackSelect,
    Start,

    // Stick clicks
    LeftStickButton,
    RightStickButton,
}

impl LogicalButton {
    /// Every logical button, in declaration order
    pub const ALL: [LogicalButton; 10] = [
        LogicalButton::ActionSouth,
        LogicalButton::ActionEast,
        LogicalButton::ActionWest,
        LogicalButton::ActionNorth,
        LogicalButton::LeftBumper,
        LogicalButton::RightBumper,
        LogicalButton::BackSelect,
        LogicalButton::Start,
        LogicalButton::LeftStickButton,
        LogicalButton::RightStickButton,
    ];
}

impl fmt::Display for LogicalButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Abstract axes exposed to game logic
///
/// Sticks and the DPAD read in [-1, 1]; triggers read in [0, 1] on families
/// that rest at zero and in [-1, 1] on families that rest at -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalAxis {
    LeftHorizontal,
    LeftVertical,
    RightHorizontal,
    RightVertical,
    DpadHorizontal,
    DpadVertical,
    LeftTrigger,
    RightTrigger,
}

impl LogicalAxis {
    /// Every logical axis, in declaration order
    pub const ALL: [LogicalAxis; 8] = [
        LogicalAxis::LeftHorizontal,
        LogicalAxis::LeftVertical,
        LogicalAxis::RightHorizontal,
        LogicalAxis::RightVertical,
        LogicalAxis::DpadHorizontal,
        LogicalAxis::DpadVertical,
        LogicalAxis::LeftTrigger,
        LogicalAxis::RightTrigger,
    ];

    /// Whether this axis is one of the analog triggers
    pub fn is_trigger(self) -> bool {
        matches!(self, LogicalAxis::LeftTrigger | LogicalAxis::RightTrigger)
    }
}

impl fmt::Display for LogicalAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Which side of an axis counts as "pressed" when the axis is read as a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AxisDirection {
    /// Either side of rest
    #[default]
    Any,
    Negative,
    Positive,
}
