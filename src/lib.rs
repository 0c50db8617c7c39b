mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod content;
pub use content::*;

mod error;
pub use error::*;

mod geometry;
pub use geometry::*;

/// Layout engines that position content on the canvas
pub mod layout;

mod rect;
pub use rect::*;

mod render;
pub use render::*;

mod units;
pub use units::*;

mod wrap;
pub use wrap::*;
