//! Digit-driven vertical stacking of regular polygons.
//!
//! Model
//! - Every digit `d` of the input becomes a `RegularPolygon` with
//!   `d + sides_offset` sides (default offset 3, so `0 → triangle`).
//! - Digits are sorted largest first, so the roundest shapes sit at the bottom.
//! - A cursor `y` starts at 0. Each polygon's center goes at
//!   `y + in_radius`, putting its flat base on the cursor; the cursor then
//!   moves to the polygon's top. Adjacent polygons touch with no gap and no
//!   overlap.

use std::fmt;

use crate::point::Point;
use crate::polygon::{PlacedPolygon, RegularPolygon};

/// Stacking parameters.
#[derive(Clone, Copy, Debug)]
pub struct StackCfg {
    /// Side length of every polygon.
    pub side_length: f64,
    /// Added to the digit value to get the side count.
    pub sides_offset: u32,
}

impl Default for StackCfg {
    fn default() -> Self {
        Self {
            side_length: 1.0,
            sides_offset: 3,
        }
    }
}

/// Rejected input or configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum StackError {
    /// Non-digit character at byte offset `pos`.
    NotADigit { ch: char, pos: usize },
    /// Side length must be finite and positive.
    BadSideLength(f64),
    /// `digit + sides_offset` must be at least 3.
    TooFewSides { digit: u8, sides: u32 },
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackError::NotADigit { ch, pos } => {
                write!(f, "expected a decimal digit at position {pos}, found {ch:?}")
            }
            StackError::BadSideLength(s) => {
                write!(f, "side length must be finite and positive, got {s}")
            }
            StackError::TooFewSides { digit, sides } => {
                write!(f, "digit {digit} maps to {sides} sides; a polygon needs at least 3")
            }
        }
    }
}

impl std::error::Error for StackError {}

/// Parse ASCII digits `'0'..='9'` into their values. Empty input is valid.
pub fn parse_digits(input: &str) -> Result<Vec<u8>, StackError> {
    input
        .char_indices()
        .map(|(pos, ch)| {
            ch.to_digit(10)
                .map(|d| d as u8)
                .ok_or(StackError::NotADigit { ch, pos })
        })
        .collect()
}

/// Sort digits largest first.
pub fn sort_descending(digits: &mut [u8]) {
    digits.sort_unstable_by(|a, b| b.cmp(a));
}

/// Result of a stacking pass.
#[derive(Clone, Debug)]
pub struct Stack {
    digits: Vec<u8>,
    polygons: Vec<PlacedPolygon>,
    height: f64,
}

impl Stack {
    /// Digits in processing (descending) order.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Processing order as a digit string, e.g. `"543"`.
    pub fn digit_string(&self) -> String {
        self.digits.iter().map(|d| char::from(b'0' + d)).collect()
    }

    /// Placed polygons, bottom to top.
    pub fn polygons(&self) -> &[PlacedPolygon] {
        &self.polygons
    }

    /// Final cursor position: the top of the highest polygon.
    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Place shapes bottom to top starting at `y = 0`.
///
/// Returns the placed polygons and the final cursor.
pub fn stack_shapes(shapes: &[RegularPolygon]) -> (Vec<PlacedPolygon>, f64) {
    let mut y = 0.0;
    let mut placed = Vec::with_capacity(shapes.len());
    for shape in shapes {
        let height = shape.size().y;
        let base_to_center = shape.in_radius();
        y += base_to_center;
        placed.push(shape.place(Point::new(0.0, y)));
        y += height - base_to_center;
    }
    (placed, y)
}

/// Parse, sort and stack `input` under `cfg`.
pub fn stack_digits(input: &str, cfg: StackCfg) -> Result<Stack, StackError> {
    if !cfg.side_length.is_finite() || cfg.side_length <= 0.0 {
        return Err(StackError::BadSideLength(cfg.side_length));
    }
    let mut digits = parse_digits(input)?;
    sort_descending(&mut digits);
    let shapes = digits
        .iter()
        .map(|&digit| {
            let sides = digit as u32 + cfg.sides_offset;
            RegularPolygon::try_new(sides, cfg.side_length)
                .ok_or(StackError::TooFewSides { digit, sides })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let (polygons, height) = stack_shapes(&shapes);
    Ok(Stack {
        digits,
        polygons,
        height,
    })
}

#[cfg(test)]
mod tests;
