use polystack::display::format_list;
use polystack::{PlacedPolygon, Point, Stack};
use serde::Serialize;

/// Diagnostic text: sorted digits, one line per polygon, `----`, then the full list.
pub fn render_text(stack: &Stack) -> String {
    let mut out = String::new();
    out.push_str(&stack.digit_string());
    out.push('\n');
    for p in stack.polygons() {
        out.push_str(&p.to_string());
        out.push('\n');
    }
    out.push_str("----\n");
    out.push_str(&format_list(stack.polygons()));
    out.push('\n');
    out
}

#[derive(Serialize)]
struct XY {
    x: f64,
    y: f64,
}

impl From<Point> for XY {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[derive(Serialize)]
struct PolygonRow {
    n: u32,
    r: f64,
    ir: f64,
    exterior_angle: f64,
    interior_angle: f64,
    width: f64,
    height: f64,
    center: XY,
    points: Vec<XY>,
}

impl From<&PlacedPolygon> for PolygonRow {
    fn from(p: &PlacedPolygon) -> Self {
        let shape = p.shape();
        let size = p.size();
        Self {
            n: shape.n(),
            r: shape.circum_radius(),
            ir: shape.in_radius(),
            exterior_angle: shape.exterior_angle(),
            interior_angle: shape.interior_angle(),
            width: size.x,
            height: size.y,
            center: p.center().into(),
            points: p.to_points().into_iter().map(XY::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct Report {
    version: &'static str,
    digits: String,
    height: f64,
    polygons: Vec<PolygonRow>,
}

/// Pretty-printed JSON report of the stack.
pub fn render_json(stack: &Stack) -> serde_json::Result<String> {
    let report = Report {
        version: polystack::VERSION,
        digits: stack.digit_string(),
        height: stack.height(),
        polygons: stack.polygons().iter().map(PolygonRow::from).collect(),
    };
    let mut s = serde_json::to_string_pretty(&report)?;
    s.push('\n');
    Ok(s)
}
