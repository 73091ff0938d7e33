//! The `model` crate contains the non-visual core of a kicking keyboard: the key layout and the
//! rotational response to key presses.

mod input;
mod layout;
mod physics;
mod simulation;

pub use input::{InputEventMapper, KeyEvent};
pub use layout::{Bounds, KeySpec, LayoutBuilder, LayoutTable, ManualKey};
pub use physics::{PhysicsParameters, PhysicsState};
pub use simulation::{Event, Simulation};
