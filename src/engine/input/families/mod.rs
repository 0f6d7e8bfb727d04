// Hand-authored device family tables
//
// Button and axis indices differ per hardware and per platform driver; each
// family records the layout its devices report.

pub mod keyboard;
pub mod ps4;
pub mod switch_pro;
pub mod xbox360;
