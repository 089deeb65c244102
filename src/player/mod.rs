//! Playback state machine, independent of the browser.

mod controller;
mod transport;
mod visualizer;

pub use controller::*;
pub use transport::*;
pub use visualizer::*;
