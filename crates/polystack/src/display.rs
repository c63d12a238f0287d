//! Diagnostic text for points and placed polygons.
//!
//! Numbers use `%g`-style output with 6 significant digits so the text
//! matches the long-standing diagnostic format byte for byte:
//! `{n:5, r:0.850651, ir:0.688191, width:1.61803, height:1.53884, center:{x:0, y:0.688191}, points: [...]}`.
//! Not a serialization format; use the JSON report for machine consumption.

use std::fmt;

use crate::point::Point;
use crate::polygon::PlacedPolygon;

/// Significant digits used by `fmt_num`.
const SIG_DIGITS: i32 = 6;

/// Format `v` like C's `%g` (precision 6).
///
/// Examples: `1 → "1"`, `0.5 → "0.5"`, `1.306562964 → "1.30656"`,
/// `-6.1e-17 → "-6.1e-17"`, `12345678 → "1.23457e+07"`.
pub fn fmt_num(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    // Exponent after rounding to SIG_DIGITS significant digits.
    let sci = format!("{:.*e}", (SIG_DIGITS - 1) as usize, v);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if exp < -4 || exp >= SIG_DIGITS {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (SIG_DIGITS - 1 - exp) as usize;
        strip_zeros(&format!("{:.*}", decimals, v)).to_string()
    }
}

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// `[a, b, c]` using each item's `Display`.
pub fn format_list<T: fmt::Display>(items: &[T]) -> String {
    let body: Vec<String> = items.iter().map(|it| it.to_string()).collect();
    format!("[{}]", body.join(", "))
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{x:{}, y:{}}}", fmt_num(self.x), fmt_num(self.y))
    }
}

impl fmt::Display for PlacedPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = self.shape();
        let size = self.size();
        write!(
            f,
            "{{n:{}, r:{}, ir:{}, width:{}, height:{}, center:{}, points: {}}}",
            shape.n(),
            fmt_num(shape.circum_radius()),
            fmt_num(shape.in_radius()),
            fmt_num(size.x),
            fmt_num(size.y),
            self.center(),
            format_list(&self.to_points()),
        )
    }
}
