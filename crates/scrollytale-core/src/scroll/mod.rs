//! Interpolated section navigation.
//!
//! `easing` and `timing` are pure atoms; `navigator` combines them into the
//! tick-driven tween that moves the scroll offset to a section boundary and
//! reports completion exactly once.

pub mod easing;
pub mod navigator;
pub mod timing;

pub use easing::EasingType;
pub use navigator::{NavigatorTick, SectionNavigator};
