//! Testimonials carousel: a rotation controller with autoplay, hover suppression,
//! keyboard and swipe navigation, rendered through a [`Surface`].

mod controller;
mod frame;
mod gesture;
mod timer;

pub use controller::{ClickOutcome, NavKey, RotationController};
pub use frame::{contains, ControlState, Frame, Handles, SlideFrame, Surface, EMPTY_MESSAGE, RETRY_LABEL};
pub use gesture::{Swipe, SwipeTracker};
pub use timer::Countdown;
