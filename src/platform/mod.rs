//! Platform abstraction layer
//!
//! Input arrives as discrete press events. The core only cares whether a
//! press qualifies as an activation (start or flap).

pub mod input;

pub use input::{AutoFlapper, Autopilot, InputEvent, InputSource, Key, ScriptedInput};
