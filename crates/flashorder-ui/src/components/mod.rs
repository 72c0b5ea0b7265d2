//! Reusable UI components for the order page

mod button;
mod input;
mod overlay;

pub use button::*;
pub use input::*;
pub use overlay::*;
