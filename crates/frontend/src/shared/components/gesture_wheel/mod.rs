mod component;
mod stepper;

pub use component::GestureWheel;
pub use stepper::{resolve_click, resolve_step, DragTracker, WheelDebounce, WheelTuning};
