//! Render sinks
//!
//! The core hands each sink a snapshot plus the events of the tick. Sinks
//! own every cosmetic reaction; nothing flows back into the simulation.

pub mod ascii;
pub mod frame;
pub mod sinks;

pub use ascii::{AsciiSink, rasterize};
pub use frame::{ObstacleView, PlayerView, RenderFrame, ZoneView};
pub use sinks::{JsonLinesSink, LogSink, RenderSink};
