//! Reusable UI components.
//!
//! Class names here are styled by the application's global stylesheet.

mod button;
mod digit_box;
mod input;

pub use button::*;
pub use digit_box::*;
pub use input::*;
