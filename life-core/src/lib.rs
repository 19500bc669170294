mod automaton;
pub mod constants;
mod config;
mod error;
mod grid;
#[cfg(test)]
mod manual_timer;
mod neighbors;
mod resize;
mod supervisor;
mod timer;

pub use automaton::*;
pub use config::*;
pub use error::*;
pub use grid::*;
pub use neighbors::*;
pub use resize::*;
pub use supervisor::*;
pub use timer::*;
