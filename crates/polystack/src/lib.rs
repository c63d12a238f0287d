//! Regular polygon geometry and digit-driven vertical stacking.
//!
//! Each decimal digit of an input string becomes a regular polygon with
//! `digit + 3` sides. The digits are sorted largest first and the polygons
//! are stacked bottom to top so that every polygon rests on the top edge of
//! the previous one.
//!
//! Layout
//! - `point`: 2D value type with named vector ops.
//! - `polygon`: immutable `RegularPolygon` shape and its `PlacedPolygon`.
//! - `stack`: digit parsing and the stacking pass.
//! - `display`: diagnostic text formatting (`%g`-style numbers).

pub mod display;
pub mod point;
pub mod polygon;
pub mod stack;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use point::{add_points, scale_point, Point};
pub use polygon::{PlacedPolygon, RegularPolygon};
pub use stack::{parse_digits, sort_descending, stack_digits, Stack, StackCfg, StackError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::display::{fmt_num, format_list};
    pub use crate::point::{add_points, scale_point, Point};
    pub use crate::polygon::{PlacedPolygon, RegularPolygon};
    pub use crate::stack::{stack_digits, Stack, StackCfg, StackError};
    pub use nalgebra::Vector2 as Vec2;
}
