//! DrawingML geometry: guide evaluation and SVG path generation for preset
//! and custom shapes.

mod presets;

pub use presets::preset;

use std::f64::consts::PI;
use std::fmt::Write as _;

use crate::color::Color;
use crate::formula::{Env, evaluate, resolve_token};
use crate::html::dom::Element;
use crate::xml::XmlElement;

#[derive(Clone, Debug, PartialEq)]
pub struct Guide {
    pub name: String,
    pub formula: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub x: String,
    pub y: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    QuadBezTo(Vec<Point>),
    CubicBezTo(Vec<Point>),
    ArcTo {
        w_r: String,
        h_r: String,
        st_ang: String,
        sw_ang: String,
    },
    Close,
}

/// Path-level fill keyword. Anything but `Norm` and `None` shifts the
/// luminance of the shape's fill.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PathFill {
    #[default]
    Norm,
    None,
    Darken,
    DarkenLess,
    Lighten,
    LightenLess,
}

impl PathFill {
    pub fn parse(value: &str) -> Self {
        match value {
            "none" => PathFill::None,
            "darken" => PathFill::Darken,
            "darkenLess" => PathFill::DarkenLess,
            "lighten" => PathFill::Lighten,
            "lightenLess" => PathFill::LightenLess,
            "norm" => PathFill::Norm,
            other => {
                log::warn!("unknown path fill mode {other:?}");
                PathFill::Norm
            }
        }
    }

    fn luminance_offset(self) -> f64 {
        match self {
            PathFill::Darken => -0.5,
            PathFill::DarkenLess => -0.2,
            PathFill::Lighten => 0.5,
            PathFill::LightenLess => 0.2,
            PathFill::Norm | PathFill::None => 0.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub segments: Vec<Segment>,
    pub fill: PathFill,
    pub stroke: bool,
    /// Native coordinate space; points are scaled from it to the target size.
    pub w: Option<f64>,
    pub h: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    pub av_lst: Vec<Guide>,
    pub gd_lst: Vec<Guide>,
    pub path_lst: Vec<Path>,
}

/// Resolved paint for a shape. `None` fields fall through to the inherited
/// style.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeStyle {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub stroke_dash: Option<String>,
}

pub enum GeometrySource<'a> {
    Preset(&'a str),
    Custom(&'a Geometry),
}

/// Base constants of the shape coordinate system for a `w`×`h` box.
pub fn preset_val(w: f64, h: f64) -> Env {
    let ss = w.min(h);
    let mut env = Env::new();
    let mut put = |k: &str, v: f64| {
        env.insert(k.to_string(), v);
    };
    put("l", 0.0);
    put("t", 0.0);
    put("r", w);
    put("b", h);
    put("w", w);
    put("h", h);
    put("hc", w / 2.0);
    put("vc", h / 2.0);
    put("ss", ss);
    put("ls", w.max(h));
    for d in [2.0, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0, 12.0, 32.0] {
        put(&format!("wd{d}"), w / d);
        put(&format!("hd{d}"), h / d);
    }
    for d in [2.0, 4.0, 6.0, 8.0, 16.0, 32.0] {
        put(&format!("ssd{d}"), ss / d);
    }
    put("cd2", 10_800_000.0);
    put("cd4", 5_400_000.0);
    put("cd8", 2_700_000.0);
    put("3cd4", 16_200_000.0);
    put("3cd8", 8_100_000.0);
    put("5cd8", 13_500_000.0);
    put("7cd8", 18_900_000.0);
    env
}

fn guides(list: Option<&XmlElement>) -> Vec<Guide> {
    let Some(list) = list else {
        return Vec::new();
    };
    list.children_named("a:gd")
        .filter_map(|gd| {
            Some(Guide {
                name: gd.attr("name")?.to_string(),
                formula: gd.attr("fmla")?.to_string(),
            })
        })
        .collect()
}

/// `a:avLst` adjustments of a shape instance.
pub fn parse_adjustments(av_lst: Option<&XmlElement>) -> Vec<Guide> {
    guides(av_lst)
}

fn point(el: &XmlElement) -> Point {
    Point {
        x: el.attr("x").unwrap_or("0").to_string(),
        y: el.attr("y").unwrap_or("0").to_string(),
    }
}

/// `a:custGeom`.
pub fn parse_custom_geometry(el: &XmlElement) -> Geometry {
    let mut geometry = Geometry {
        av_lst: guides(el.child("a:avLst")),
        gd_lst: guides(el.child("a:gdLst")),
        path_lst: Vec::new(),
    };
    let Some(path_lst) = el.child("a:pathLst") else {
        return geometry;
    };
    for p in path_lst.children_named("a:path") {
        let mut path = Path {
            fill: p.attr("fill").map(PathFill::parse).unwrap_or_default(),
            stroke: p.attr("stroke") != Some("0") && p.attr("stroke") != Some("false"),
            w: p.attr("w").and_then(|v| v.parse().ok()),
            h: p.attr("h").and_then(|v| v.parse().ok()),
            segments: Vec::new(),
        };
        for seg in p.elements() {
            let points = || seg.children_named("a:pt").map(point).collect::<Vec<_>>();
            let segment = match seg.local_name() {
                "moveTo" => points().into_iter().next().map(Segment::MoveTo),
                "lnTo" => points().into_iter().next().map(Segment::LineTo),
                "quadBezTo" => Some(Segment::QuadBezTo(points())),
                "cubicBezTo" => Some(Segment::CubicBezTo(points())),
                "arcTo" => Some(Segment::ArcTo {
                    w_r: seg.attr("wR").unwrap_or("0").to_string(),
                    h_r: seg.attr("hR").unwrap_or("0").to_string(),
                    st_ang: seg.attr("stAng").unwrap_or("0").to_string(),
                    sw_ang: seg.attr("swAng").unwrap_or("0").to_string(),
                }),
                "close" => Some(Segment::Close),
                other => {
                    log::warn!("unknown path segment a:{other}");
                    None
                }
            };
            path.segments.extend(segment);
        }
        geometry.path_lst.push(path);
    }
    geometry
}

fn fmt_num(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

/// Point on an ellipse at a visual angle (degrees). DrawingML angles are
/// measured on the stretched ellipse, not on its parametric circle.
fn ellipse_point(w_r: f64, h_r: f64, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg * PI / 180.0;
    let p = (w_r * rad.sin()).atan2(h_r * rad.cos());
    (w_r * p.cos(), h_r * p.sin())
}

struct PathBuilder<'a> {
    env: &'a Env,
    sx: f64,
    sy: f64,
    cur: (f64, f64),
    start: (f64, f64),
    d: String,
}

impl PathBuilder<'_> {
    fn x(&self, token: &str) -> f64 {
        resolve_token(token, self.env) * self.sx
    }

    fn y(&self, token: &str) -> f64 {
        resolve_token(token, self.env) * self.sy
    }

    fn push_cmd(&mut self, cmd: char, coords: &[f64]) {
        if !self.d.is_empty() {
            self.d.push(' ');
        }
        self.d.push(cmd);
        for c in coords {
            let _ = write!(self.d, " {}", fmt_num(*c));
        }
    }

    fn points(&mut self, cmd: char, points: &[Point]) {
        let mut coords = Vec::with_capacity(points.len() * 2);
        for p in points {
            coords.push(self.x(&p.x));
            coords.push(self.y(&p.y));
        }
        if let [.., x, y] = coords[..] {
            self.cur = (x, y);
        }
        self.push_cmd(cmd, &coords);
    }

    fn arc(&mut self, w_r: &str, h_r: &str, st_ang: &str, sw_ang: &str) {
        let w_r = self.x(w_r);
        let h_r = self.y(h_r);
        let st = resolve_token(st_ang, self.env) / 60_000.0;
        let mut sw = resolve_token(sw_ang, self.env) / 60_000.0;
        if sw.abs() >= 360.0 - 1e-4 {
            sw = sw.signum() * (360.0 - 1e-4);
        }
        if sw == 0.0 || w_r == 0.0 || h_r == 0.0 {
            return;
        }

        let (sx, sy) = ellipse_point(w_r, h_r, st);
        let center = (self.cur.0 - sx, self.cur.1 - sy);
        let sweep_flag = if sw > 0.0 { 1.0 } else { 0.0 };
        // Pieces of at most half a turn keep the large-arc flag unambiguous.
        let pieces = ((sw.abs() / 180.0) - 1e-9).ceil().max(1.0);
        let step = sw / pieces;
        for i in 1..=(pieces as usize) {
            let (ex, ey) = ellipse_point(w_r, h_r, st + step * i as f64);
            let end = (center.0 + ex, center.1 + ey);
            self.push_cmd('A', &[w_r, h_r, 0.0, 0.0, sweep_flag, end.0, end.1]);
            self.cur = end;
        }
    }

    fn segment(&mut self, segment: &Segment) {
        match segment {
            Segment::MoveTo(p) => {
                self.points('M', std::slice::from_ref(p));
                self.start = self.cur;
            }
            Segment::LineTo(p) => self.points('L', std::slice::from_ref(p)),
            Segment::QuadBezTo(points) => match points.len() {
                0 | 1 => log::warn!("quadBezTo with {} points", points.len()),
                2 => self.points('Q', points),
                _ => {
                    self.points('Q', &points[..2]);
                    for p in &points[2..] {
                        self.points('T', std::slice::from_ref(p));
                    }
                }
            },
            Segment::CubicBezTo(points) => {
                if points.len() == 3 {
                    self.points('C', points);
                } else {
                    log::warn!("cubicBezTo with {} points", points.len());
                }
            }
            Segment::ArcTo {
                w_r,
                h_r,
                st_ang,
                sw_ang,
            } => self.arc(w_r, h_r, st_ang, sw_ang),
            Segment::Close => {
                self.push_cmd('Z', &[]);
                self.cur = self.start;
            }
        }
    }
}

/// SVG `d` strings, one per path, after evaluating the guide lists.
pub fn path_data(geometry: &Geometry, instance_av: &[Guide], width: f64, height: f64) -> Vec<String> {
    let env = guide_env(geometry, instance_av, width, height);
    geometry
        .path_lst
        .iter()
        .map(|path| build_path(path, &env, width, height))
        .collect()
}

fn guide_env(geometry: &Geometry, instance_av: &[Guide], width: f64, height: f64) -> Env {
    let mut env = preset_val(width, height);
    for g in geometry.av_lst.iter().chain(instance_av).chain(&geometry.gd_lst) {
        evaluate(&g.name, &g.formula, &mut env);
    }
    env
}

fn build_path(path: &Path, env: &Env, width: f64, height: f64) -> String {
    let scale = |native: Option<f64>, target: f64| match native {
        Some(n) if n > 0.0 => target / n,
        _ => 1.0,
    };
    let mut builder = PathBuilder {
        env,
        sx: scale(path.w, width),
        sy: scale(path.h, height),
        cur: (0.0, 0.0),
        start: (0.0, 0.0),
        d: String::new(),
    };
    for segment in &path.segments {
        builder.segment(segment);
    }
    builder.d
}

fn resolve_fill(path: &Path, props: &ShapeStyle, inherited: &ShapeStyle) -> String {
    if path.fill == PathFill::None {
        return "none".to_string();
    }
    let Some(base) = props.fill.as_deref().or(inherited.fill.as_deref()) else {
        return "none".to_string();
    };
    let offset = path.fill.luminance_offset();
    if offset == 0.0 {
        return base.to_string();
    }
    match Color::from_css(base) {
        Some(color) => color.offset_luminance(offset).to_css(),
        None => base.to_string(),
    }
}

/// Render a shape into an `<svg>` sized `width`×`height` pixels. Returns
/// `None` for empty boxes and for geometry without paths.
pub fn render_geometry(
    source: GeometrySource,
    instance_av: &[Guide],
    props: &ShapeStyle,
    width: f64,
    height: f64,
    inherited: &ShapeStyle,
) -> Option<Element> {
    if !(width > 0.0 || height > 0.0) {
        return None;
    }
    let geometry = match source {
        GeometrySource::Preset(name) => match preset(name) {
            Some(g) => g,
            None => {
                log::warn!("unsupported preset geometry {name:?}, drawing a rectangle");
                preset("rect")?
            }
        },
        GeometrySource::Custom(g) => g,
    };
    if geometry.path_lst.is_empty() {
        return None;
    }

    let env = guide_env(geometry, instance_av, width, height);
    let stroke = props
        .stroke
        .clone()
        .or_else(|| inherited.stroke.clone())
        .unwrap_or_else(|| "none".to_string());
    let stroke_width = props.stroke_width.or(inherited.stroke_width);
    let dash = props.stroke_dash.as_ref().or(inherited.stroke_dash.as_ref());

    let mut svg = Element::new("svg")
        .with_attr("xmlns", "http://www.w3.org/2000/svg")
        .with_attr("width", fmt_num(width))
        .with_attr("height", fmt_num(height))
        .with_attr("viewBox", format!("0 0 {} {}", fmt_num(width), fmt_num(height)));
    svg.style.set("overflow", "visible");

    for path in &geometry.path_lst {
        let d = build_path(path, &env, width, height);
        if d.is_empty() {
            continue;
        }
        let mut el = Element::new("path")
            .with_attr("d", d)
            .with_attr("fill", resolve_fill(path, props, inherited));
        if path.stroke && stroke != "none" {
            el.set_attr("stroke", stroke.as_str());
            if let Some(w) = stroke_width {
                el.set_attr("stroke-width", fmt_num(w));
            }
            if let Some(dash) = dash {
                el.set_attr("stroke-dasharray", dash.as_str());
            }
        } else {
            el.set_attr("stroke", "none");
        }
        svg.push(el);
    }
    Some(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d_of(svg: &Element) -> Vec<String> {
        svg.elements()
            .filter_map(|p| p.attr("d").map(str::to_string))
            .collect()
    }

    #[test]
    fn rectangle_path() {
        let svg = render_geometry(
            GeometrySource::Preset("rect"),
            &[],
            &ShapeStyle::default(),
            100.0,
            50.0,
            &ShapeStyle::default(),
        )
        .unwrap();
        assert_eq!(d_of(&svg), vec!["M 0 0 L 100 0 L 100 50 L 0 50 Z"]);
        let path = svg.elements().next().unwrap();
        assert_eq!(path.attr("fill"), Some("none"));
        assert_eq!(path.attr("stroke"), Some("none"));
    }

    #[test]
    fn instance_adjustments_override_defaults() {
        let geometry = preset("roundRect").unwrap();
        let default = path_data(geometry, &[], 200.0, 100.0);
        let adjusted = path_data(
            geometry,
            &[Guide {
                name: "adj".into(),
                formula: "val 50000".into(),
            }],
            200.0,
            100.0,
        );
        assert_ne!(default, adjusted);
        assert!(adjusted[0].starts_with("M 0 50 A 50 50"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let av = [Guide {
            name: "adj".into(),
            formula: "val 30000".into(),
        }];
        for name in ["star5", "bentArrow", "can", "arc", "heart", "flowChartTerminator"] {
            let geometry = preset(name).unwrap();
            let first = path_data(geometry, &av, 120.0, 80.0);
            let second = path_data(geometry, &av, 120.0, 80.0);
            assert_eq!(first, second, "{name}");
            assert!(first.iter().all(|d| !d.contains("NaN")), "{name}");
        }
    }

    #[test]
    fn full_circle_arc_is_not_degenerate() {
        let d = path_data(preset("ellipse").unwrap(), &[], 100.0, 100.0);
        assert_eq!(d[0].matches('A').count(), 4);
        let geometry = Geometry {
            path_lst: vec![Path {
                segments: vec![
                    Segment::MoveTo(Point {
                        x: "0".into(),
                        y: "50".into(),
                    }),
                    Segment::ArcTo {
                        w_r: "50".into(),
                        h_r: "50".into(),
                        st_ang: "cd2".into(),
                        sw_ang: "21600000".into(),
                    },
                ],
                stroke: true,
                ..Default::default()
            }],
            ..Default::default()
        };
        let d = path_data(&geometry, &[], 100.0, 100.0);
        assert_eq!(d[0].matches('A').count(), 2);
        assert!(d[0].contains("A 50 50 0 0 1 100 50"));
    }

    #[test]
    fn native_path_size_scales_points() {
        let d = path_data(preset("flowChartDecision").unwrap(), &[], 40.0, 20.0);
        assert_eq!(d[0], "M 0 10 L 20 0 L 40 10 L 20 20 Z");
    }

    #[test]
    fn fill_modes_shift_luminance() {
        let props = ShapeStyle {
            fill: Some("#808080".into()),
            stroke: Some("#000000".into()),
            stroke_width: Some(1.0),
            ..Default::default()
        };
        let svg = render_geometry(
            GeometrySource::Preset("can"),
            &[],
            &props,
            50.0,
            80.0,
            &ShapeStyle::default(),
        )
        .unwrap();
        let fills: Vec<_> = svg.elements().map(|p| p.attr("fill").unwrap().to_string()).collect();
        assert_eq!(fills[0], "#808080");
        assert_ne!(fills[1], "#808080");
        assert_eq!(fills[2], "none");
        let strokes: Vec<_> = svg.elements().map(|p| p.attr("stroke").unwrap().to_string()).collect();
        assert_eq!(strokes, vec!["none", "none", "#000000"]);
    }

    #[test]
    fn inherited_style_is_the_fallback() {
        let inherited = ShapeStyle {
            fill: Some("#ff0000".into()),
            ..Default::default()
        };
        let svg = render_geometry(
            GeometrySource::Preset("noSuchShape"),
            &[],
            &ShapeStyle::default(),
            10.0,
            10.0,
            &inherited,
        )
        .unwrap();
        assert_eq!(svg.elements().next().unwrap().attr("fill"), Some("#ff0000"));
    }

    #[test]
    fn custom_geometry_from_xml() {
        let xml = r#"<a:custGeom xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"><a:avLst/><a:gdLst/><a:pathLst><a:path w="10" h="10"><a:moveTo><a:pt x="0" y="0"/></a:moveTo><a:lnTo><a:pt x="10" y="10"/></a:lnTo><a:close/></a:path></a:pathLst></a:custGeom>"#;
        let el = crate::xml::parse("test", xml).unwrap();
        let geometry = parse_custom_geometry(&el);
        assert_eq!(path_data(&geometry, &[], 20.0, 30.0), vec!["M 0 0 L 20 30 Z"]);
    }
}
