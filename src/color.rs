//! Color resolution: direct hex, theme slots, preset names, DrawingML
//! modifier chains and `w:shd` shading patterns.
//!
//! Nothing here fails loudly. A color that cannot be understood is logged and
//! resolves to an empty string (or the caller's fallback).

use std::collections::HashMap;

use crate::units::{attr_percent, parse_number};
use crate::xml::XmlElement;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        }
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::rgb(r, g, b))
    }

    /// Parse a color this crate produced (or a CSS name): `#rgb`, `#rrggbb`,
    /// `rgb(...)` and `rgba(...)`.
    pub fn from_css(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix('#') {
            if hex.len() == 3 && hex.is_ascii() {
                let doubled: String = hex.chars().flat_map(|c| [c, c]).collect();
                return Self::from_hex(&doubled);
            }
            return Self::from_hex(hex);
        }
        if let Some(args) = value
            .strip_prefix("rgba(")
            .or_else(|| value.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let parts: Vec<f64> = args
                .split(',')
                .map(|p| p.trim().parse::<f64>())
                .collect::<Result<_, _>>()
                .ok()?;
            return match parts[..] {
                [r, g, b] => Some(Self { r, g, b, a: 1.0 }),
                [r, g, b, a] => Some(Self { r, g, b, a }),
                _ => None,
            };
        }
        preset_color(value)
    }

    /// Hue, saturation and lightness, each in `0.0..=1.0`.
    pub fn to_hsl(self) -> (f64, f64, f64) {
        let (r, g, b) = (self.r / 255.0, self.g / 255.0, self.b / 255.0);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        if (max - min).abs() < f64::EPSILON {
            return (0.0, 0.0, l);
        }
        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s, l)
    }

    pub fn from_hsl(h: f64, s: f64, l: f64, a: f64) -> Self {
        if s == 0.0 {
            let v = l * 255.0;
            return Self { r: v, g: v, b: v, a };
        }
        fn hue(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 0.5 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            }
        }
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Self {
            r: hue(p, q, h + 1.0 / 3.0) * 255.0,
            g: hue(p, q, h) * 255.0,
            b: hue(p, q, h - 1.0 / 3.0) * 255.0,
            a,
        }
    }

    fn map_hsl(self, f: impl FnOnce(&mut f64, &mut f64, &mut f64)) -> Self {
        let (mut h, mut s, mut l) = self.to_hsl();
        f(&mut h, &mut s, &mut l);
        Self::from_hsl(h.rem_euclid(1.0), s.clamp(0.0, 1.0), l.clamp(0.0, 1.0), self.a)
    }

    fn map_channels(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            r: f(self.r).clamp(0.0, 255.0),
            g: f(self.g).clamp(0.0, 255.0),
            b: f(self.b).clamp(0.0, 255.0),
            a: self.a,
        }
    }

    pub fn channels(self) -> [u8; 3] {
        [
            self.r.round().clamp(0.0, 255.0) as u8,
            self.g.round().clamp(0.0, 255.0) as u8,
            self.b.round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Shift lightness by a fixed amount (used by path `fill="darken"` etc).
    pub fn offset_luminance(self, delta: f64) -> Self {
        self.map_hsl(|_, _, l| *l += delta)
    }

    pub fn to_css(self) -> String {
        let [r, g, b] = self.channels();
        if (self.a - 1.0).abs() > 1e-9 {
            let a = (self.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
            format!("rgba({r}, {g}, {b}, {a})")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}")
        }
    }
}

/// Theme colors keyed by scheme slot (`dk1`, `accent1`, …) plus the
/// `w:clrSchemeMapping` redirects from the settings part.
#[derive(Clone, Debug, Default)]
pub struct ColorScheme {
    pub colors: HashMap<String, String>,
    pub mapping: HashMap<String, String>,
}

pub(crate) fn slot_name(name: &str) -> &str {
    match name {
        "dark1" => "dk1",
        "light1" => "lt1",
        "dark2" => "dk2",
        "light2" => "lt2",
        "hyperlink" => "hlink",
        "followedHyperlink" => "folHlink",
        "background1" => "bg1",
        "background2" => "bg2",
        "text1" | "tx1" => "t1",
        "text2" | "tx2" => "t2",
        other => other,
    }
}

impl ColorScheme {
    /// Resolve a scheme slot to its hex value (no leading `#`).
    pub fn lookup(&self, name: &str) -> Option<&str> {
        let slot = slot_name(name);
        let slot = match self.mapping.get(slot) {
            Some(mapped) => slot_name(mapped),
            None => match slot {
                "bg1" => "lt1",
                "t1" => "dk1",
                "bg2" => "lt2",
                "t2" => "dk2",
                other => other,
            },
        };
        self.colors.get(slot).map(String::as_str)
    }
}

const CSS_PASSTHROUGH: &[&str] = &[
    "black",
    "white",
    "red",
    "green",
    "blue",
    "yellow",
    "cyan",
    "magenta",
    "transparent",
    "none",
];

fn value_of<'a>(el: &'a XmlElement, attr: &str) -> Option<&'a str> {
    el.attr(attr)
        .or_else(|| el.attr("val"))
        .or_else(|| el.attr("w14:val"))
}

/// Resolve the color carried by `el`. `auto` is what `w:val="auto"` means in
/// this context (black for text, transparent for fills).
pub fn resolve_color(scheme: &ColorScheme, el: &XmlElement, value_attr: &str, auto: &str) -> String {
    let base = match el.local_name() {
        "srgbClr" => value_of(el, value_attr).and_then(Color::from_hex),
        "schemeClr" => value_of(el, value_attr).and_then(|slot| {
            let hex = scheme.lookup(slot);
            if hex.is_none() {
                log::warn!("unknown scheme color {slot:?}");
            }
            hex.and_then(Color::from_hex)
        }),
        "prstClr" => value_of(el, value_attr).and_then(preset_color),
        "sysClr" => el
            .attr("lastClr")
            .and_then(Color::from_hex)
            .or_else(|| match el.attr("val") {
                Some("window") => Some(Color::rgb(255, 255, 255)),
                _ => Some(Color::rgb(0, 0, 0)),
            }),
        "scrgbClr" => Some(Color {
            r: attr_percent(el, "r") * 255.0,
            g: attr_percent(el, "g") * 255.0,
            b: attr_percent(el, "b") * 255.0,
            a: 1.0,
        }),
        "hslClr" => {
            let h = el.attr("hue").and_then(parse_number).unwrap_or(0.0) / 21_600_000.0;
            Some(Color::from_hsl(
                h,
                attr_percent(el, "sat"),
                attr_percent(el, "lum"),
                1.0,
            ))
        }
        _ => return resolve_wml_color(scheme, el, value_attr, auto),
    };

    match base {
        Some(color) => apply_modifiers(color, el).to_css(),
        None => {
            log::warn!("cannot resolve color from <{}>", el.name);
            String::new()
        }
    }
}

/// WordprocessingML colors: `w:themeColor` (+ tint/shade) wins over the
/// literal value, which may be `auto`, a CSS name or hex.
fn resolve_wml_color(scheme: &ColorScheme, el: &XmlElement, value_attr: &str, auto: &str) -> String {
    if let Some(slot) = el.attr("w:themeColor") {
        if let Some(mut color) = scheme.lookup(slot).and_then(Color::from_hex) {
            if let Some(tint) = el.attr("w:themeTint").and_then(|v| u8::from_str_radix(v, 16).ok()) {
                let k = tint as f64 / 255.0;
                color = color.map_channels(|c| c * k + 255.0 * (1.0 - k));
            }
            if let Some(shade) = el.attr("w:themeShade").and_then(|v| u8::from_str_radix(v, 16).ok()) {
                let k = shade as f64 / 255.0;
                color = color.map_channels(|c| c * k);
            }
            return color.to_css();
        }
        log::warn!("unknown theme color {slot:?}");
    }

    let Some(value) = el.attr(value_attr) else {
        return String::new();
    };
    if value == "auto" {
        return auto.to_string();
    }
    if CSS_PASSTHROUGH.contains(&value) {
        return value.to_string();
    }
    if value.len() == 6 && value.chars().all(|c| c.is_ascii_hexdigit()) {
        return format!("#{value}");
    }
    match preset_color(value) {
        Some(color) => color.to_css(),
        None => {
            log::warn!("unrecognized color value {value:?}");
            String::new()
        }
    }
}

fn modifier_value(el: &XmlElement) -> f64 {
    if el.attr("val").is_some() {
        attr_percent(el, "val")
    } else {
        attr_percent(el, "w14:val")
    }
}

fn raw_angle(el: &XmlElement) -> f64 {
    el.attr("val")
        .or_else(|| el.attr("w14:val"))
        .and_then(parse_number)
        .unwrap_or(0.0)
        / 21_600_000.0
}

/// Apply the DrawingML modifier children of a color element, in order.
pub fn apply_modifiers(mut color: Color, el: &XmlElement) -> Color {
    for m in el.elements() {
        let v = modifier_value(m);
        color = match m.local_name() {
            "alpha" => Color { a: v, ..color },
            "alphaMod" => Color { a: color.a * v, ..color },
            "alphaOff" => Color { a: color.a + v, ..color },
            "red" => Color { r: v * 255.0, ..color },
            "redMod" => Color { r: color.r * v, ..color },
            "redOff" => Color { r: color.r + v * 255.0, ..color },
            "green" => Color { g: v * 255.0, ..color },
            "greenMod" => Color { g: color.g * v, ..color },
            "greenOff" => Color { g: color.g + v * 255.0, ..color },
            "blue" => Color { b: v * 255.0, ..color },
            "blueMod" => Color { b: color.b * v, ..color },
            "blueOff" => Color { b: color.b + v * 255.0, ..color },
            "hue" => color.map_hsl(|h, _, _| *h = raw_angle(m)),
            "hueMod" => color.map_hsl(|h, _, _| *h *= v),
            "hueOff" => color.map_hsl(|h, _, _| *h += raw_angle(m)),
            "sat" => color.map_hsl(|_, s, _| *s = v),
            "satMod" => color.map_hsl(|_, s, _| *s *= v),
            "satOff" => color.map_hsl(|_, s, _| *s += v),
            "lum" => color.map_hsl(|_, _, l| *l = v),
            "lumMod" => color.map_hsl(|_, _, l| *l *= v),
            "lumOff" => color.map_hsl(|_, _, l| *l += v),
            "shade" => color.map_channels(|c| c - (1.0 - v) * 256.0),
            "tint" => color.map_channels(|c| c + (1.0 - v) * 256.0),
            "comp" => color.map_hsl(|h, _, _| *h = (*h + 0.5) % 1.0),
            "inv" => color.map_channels(|c| 255.0 - c),
            "gray" => {
                let y = 0.299 * color.r + 0.587 * color.g + 0.114 * color.b;
                Color { r: y, g: y, b: y, ..color }
            }
            other => {
                log::warn!("unsupported color modifier {other:?}");
                color
            }
        };
        color = Color {
            r: color.r.clamp(0.0, 255.0),
            g: color.g.clamp(0.0, 255.0),
            b: color.b.clamp(0.0, 255.0),
            a: color.a.clamp(0.0, 1.0),
        };
    }
    color
}

/// `w:shd` patterns: `clear`/`solid` give the color itself, `pctN` an
/// `rgba` with N% opacity. White is blended as black so that pattern
/// shading stays visible on a white page.
pub fn shading(hex: &str, pattern: &str) -> String {
    let pct = match pattern {
        "clear" | "solid" => return format!("#{hex}"),
        "nil" => return String::new(),
        p => p.strip_prefix("pct").and_then(|n| n.parse::<u32>().ok()),
    };
    let Some(pct) = pct.filter(|p| *p <= 100) else {
        log::warn!("unsupported shading pattern {pattern:?}");
        return format!("#{hex}");
    };
    let hex = if hex.eq_ignore_ascii_case("FFFFFF") { "000000" } else { hex };
    match Color::from_hex(hex) {
        Some(c) => {
            let [r, g, b] = c.channels();
            format!("rgba({r}, {g}, {b}, {})", pct as f64 / 100.0)
        }
        None => {
            log::warn!("invalid shading color {hex:?}");
            String::new()
        }
    }
}

/// Preset color names, case-insensitive.
pub fn preset_color(name: &str) -> Option<Color> {
    let lower = name.to_ascii_lowercase();
    PRESET_COLORS
        .binary_search_by(|(n, _)| n.cmp(&lower.as_str()))
        .ok()
        .and_then(|i| Color::from_hex(PRESET_COLORS[i].1))
}

/// Sorted by name for binary search. Includes DrawingML's abbreviated
/// `dk`/`lt`/`med` spellings.
const PRESET_COLORS: &[(&str, &str)] = &[
    ("aliceblue", "F0F8FF"),
    ("antiquewhite", "FAEBD7"),
    ("aqua", "00FFFF"),
    ("aquamarine", "7FFFD4"),
    ("azure", "F0FFFF"),
    ("beige", "F5F5DC"),
    ("bisque", "FFE4C4"),
    ("black", "000000"),
    ("blanchedalmond", "FFEBCD"),
    ("blue", "0000FF"),
    ("blueviolet", "8A2BE2"),
    ("brown", "A52A2A"),
    ("burlywood", "DEB887"),
    ("cadetblue", "5F9EA0"),
    ("chartreuse", "7FFF00"),
    ("chocolate", "D2691E"),
    ("coral", "FF7F50"),
    ("cornflowerblue", "6495ED"),
    ("cornsilk", "FFF8DC"),
    ("crimson", "DC143C"),
    ("cyan", "00FFFF"),
    ("darkblue", "00008B"),
    ("darkcyan", "008B8B"),
    ("darkgoldenrod", "B8860B"),
    ("darkgray", "A9A9A9"),
    ("darkgreen", "006400"),
    ("darkgrey", "A9A9A9"),
    ("darkkhaki", "BDB76B"),
    ("darkmagenta", "8B008B"),
    ("darkolivegreen", "556B2F"),
    ("darkorange", "FF8C00"),
    ("darkorchid", "9932CC"),
    ("darkred", "8B0000"),
    ("darksalmon", "E9967A"),
    ("darkseagreen", "8FBC8F"),
    ("darkslateblue", "483D8B"),
    ("darkslategray", "2F4F4F"),
    ("darkslategrey", "2F4F4F"),
    ("darkturquoise", "00CED1"),
    ("darkviolet", "9400D3"),
    ("darkyellow", "808000"),
    ("deeppink", "FF1493"),
    ("deepskyblue", "00BFFF"),
    ("dimgray", "696969"),
    ("dimgrey", "696969"),
    ("dkblue", "00008B"),
    ("dkcyan", "008B8B"),
    ("dkgoldenrod", "B8860B"),
    ("dkgray", "A9A9A9"),
    ("dkgreen", "006400"),
    ("dkgrey", "A9A9A9"),
    ("dkkhaki", "BDB76B"),
    ("dkmagenta", "8B008B"),
    ("dkolivegreen", "556B2F"),
    ("dkorange", "FF8C00"),
    ("dkorchid", "9932CC"),
    ("dkred", "8B0000"),
    ("dksalmon", "E9967A"),
    ("dkseagreen", "8FBC8F"),
    ("dkslateblue", "483D8B"),
    ("dkslategray", "2F4F4F"),
    ("dkslategrey", "2F4F4F"),
    ("dkturquoise", "00CED1"),
    ("dkviolet", "9400D3"),
    ("dodgerblue", "1E90FF"),
    ("firebrick", "B22222"),
    ("floralwhite", "FFFAF0"),
    ("forestgreen", "228B22"),
    ("fuchsia", "FF00FF"),
    ("gainsboro", "DCDCDC"),
    ("ghostwhite", "F8F8FF"),
    ("gold", "FFD700"),
    ("goldenrod", "DAA520"),
    ("gray", "808080"),
    ("green", "008000"),
    ("greenyellow", "ADFF2F"),
    ("grey", "808080"),
    ("honeydew", "F0FFF0"),
    ("hotpink", "FF69B4"),
    ("indianred", "CD5C5C"),
    ("indigo", "4B0082"),
    ("ivory", "FFFFF0"),
    ("khaki", "F0E68C"),
    ("lavender", "E6E6FA"),
    ("lavenderblush", "FFF0F5"),
    ("lawngreen", "7CFC00"),
    ("lemonchiffon", "FFFACD"),
    ("lightblue", "ADD8E6"),
    ("lightcoral", "F08080"),
    ("lightcyan", "E0FFFF"),
    ("lightgoldenrodyellow", "FAFAD2"),
    ("lightgray", "D3D3D3"),
    ("lightgreen", "90EE90"),
    ("lightgrey", "D3D3D3"),
    ("lightpink", "FFB6C1"),
    ("lightsalmon", "FFA07A"),
    ("lightseagreen", "20B2AA"),
    ("lightskyblue", "87CEFA"),
    ("lightslategray", "778899"),
    ("lightslategrey", "778899"),
    ("lightsteelblue", "B0C4DE"),
    ("lightyellow", "FFFFE0"),
    ("lime", "00FF00"),
    ("limegreen", "32CD32"),
    ("linen", "FAF0E6"),
    ("ltblue", "ADD8E6"),
    ("ltcoral", "F08080"),
    ("ltcyan", "E0FFFF"),
    ("ltgoldenrodyellow", "FAFAD2"),
    ("ltgray", "D3D3D3"),
    ("ltgreen", "90EE90"),
    ("ltgrey", "D3D3D3"),
    ("ltpink", "FFB6C1"),
    ("ltsalmon", "FFA07A"),
    ("ltseagreen", "20B2AA"),
    ("ltskyblue", "87CEFA"),
    ("ltslategray", "778899"),
    ("ltslategrey", "778899"),
    ("ltsteelblue", "B0C4DE"),
    ("ltyellow", "FFFFE0"),
    ("magenta", "FF00FF"),
    ("maroon", "800000"),
    ("medaquamarine", "66CDAA"),
    ("medblue", "0000CD"),
    ("mediumaquamarine", "66CDAA"),
    ("mediumblue", "0000CD"),
    ("mediumorchid", "BA55D3"),
    ("mediumpurple", "9370DB"),
    ("mediumseagreen", "3CB371"),
    ("mediumslateblue", "7B68EE"),
    ("mediumspringgreen", "00FA9A"),
    ("mediumturquoise", "48D1CC"),
    ("mediumvioletred", "C71585"),
    ("medorchid", "BA55D3"),
    ("medpurple", "9370DB"),
    ("medseagreen", "3CB371"),
    ("medslateblue", "7B68EE"),
    ("medspringgreen", "00FA9A"),
    ("medturquoise", "48D1CC"),
    ("medvioletred", "C71585"),
    ("midnightblue", "191970"),
    ("mintcream", "F5FFFA"),
    ("mistyrose", "FFE4E1"),
    ("moccasin", "FFE4B5"),
    ("navajowhite", "FFDEAD"),
    ("navy", "000080"),
    ("oldlace", "FDF5E6"),
    ("olive", "808000"),
    ("olivedrab", "6B8E23"),
    ("orange", "FFA500"),
    ("orangered", "FF4500"),
    ("orchid", "DA70D6"),
    ("palegoldenrod", "EEE8AA"),
    ("palegreen", "98FB98"),
    ("paleturquoise", "AFEEEE"),
    ("palevioletred", "DB7093"),
    ("papayawhip", "FFEFD5"),
    ("peachpuff", "FFDAB9"),
    ("peru", "CD853F"),
    ("pink", "FFC0CB"),
    ("plum", "DDA0DD"),
    ("powderblue", "B0E0E6"),
    ("purple", "800080"),
    ("rebeccapurple", "663399"),
    ("red", "FF0000"),
    ("rosybrown", "BC8F8F"),
    ("royalblue", "4169E1"),
    ("saddlebrown", "8B4513"),
    ("salmon", "FA8072"),
    ("sandybrown", "F4A460"),
    ("seagreen", "2E8B57"),
    ("seashell", "FFF5EE"),
    ("sienna", "A0522D"),
    ("silver", "C0C0C0"),
    ("skyblue", "87CEEB"),
    ("slateblue", "6A5ACD"),
    ("slategray", "708090"),
    ("slategrey", "708090"),
    ("snow", "FFFAFA"),
    ("springgreen", "00FF7F"),
    ("steelblue", "4682B4"),
    ("tan", "D2B48C"),
    ("teal", "008080"),
    ("thistle", "D8BFD8"),
    ("tomato", "FF6347"),
    ("turquoise", "40E0D0"),
    ("violet", "EE82EE"),
    ("wheat", "F5DEB3"),
    ("white", "FFFFFF"),
    ("whitesmoke", "F5F5F5"),
    ("yellow", "FFFF00"),
    ("yellowgreen", "9ACD32"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn el(name: &str, attrs: &[(&str, &str)], children: Vec<XmlElement>) -> XmlElement {
        let mut e = XmlElement::new(name);
        for (k, v) in attrs {
            e.set_attr(k, *v);
        }
        e.children = children.into_iter().map(crate::xml::XmlNode::Element).collect();
        e
    }

    fn scheme() -> ColorScheme {
        let mut s = ColorScheme::default();
        s.colors.insert("dk1".into(), "000000".into());
        s.colors.insert("lt1".into(), "FFFFFF".into());
        s.colors.insert("accent1".into(), "4472C4".into());
        s
    }

    #[test]
    fn preset_table_is_sorted() {
        assert!(PRESET_COLORS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn preset_table_covers_web_and_drawingml_names() {
        assert!(PRESET_COLORS.len() >= 180, "{}", PRESET_COLORS.len());
        for (name, hex) in [
            ("rebeccaPurple", [0x66, 0x33, 0x99]),
            ("dkSlateGray", [0x2F, 0x4F, 0x4F]),
            ("ltGoldenrodYellow", [0xFA, 0xFA, 0xD2]),
            ("medVioletRed", [0xC7, 0x15, 0x85]),
        ] {
            assert_eq!(preset_color(name).map(Color::channels), Some(hex), "{name}");
        }
        assert_eq!(preset_color("notAColor"), None);
    }

    #[test]
    fn direct_values() {
        let s = scheme();
        let c = el("w:color", &[("w:val", "FF0000")], vec![]);
        assert_eq!(resolve_color(&s, &c, "w:val", "black"), "#FF0000");
        let c = el("w:color", &[("w:val", "auto")], vec![]);
        assert_eq!(resolve_color(&s, &c, "w:val", "black"), "black");
        let c = el("w:highlight", &[("w:val", "darkBlue")], vec![]);
        assert_eq!(resolve_color(&s, &c, "w:val", "black"), "#00008b");
    }

    #[test]
    fn theme_color_uses_scheme_mapping() {
        let mut s = scheme();
        let c = el("w:color", &[("w:val", "FF0000"), ("w:themeColor", "text1")], vec![]);
        assert_eq!(resolve_color(&s, &c, "w:val", "black"), "#000000");
        s.mapping.insert("t1".into(), "light1".into());
        assert_eq!(resolve_color(&s, &c, "w:val", "black"), "#ffffff");
    }

    #[test]
    fn preset_abbreviations() {
        assert_eq!(preset_color("dkSlateGray"), preset_color("darkslategray"));
        assert_eq!(preset_color("medSeaGreen").unwrap().channels(), [0x3C, 0xB3, 0x71]);
        assert!(preset_color("notAColor").is_none());
    }

    #[test]
    fn modifier_chain_with_alpha() {
        let s = scheme();
        let c = el(
            "a:schemeClr",
            &[("val", "accent1")],
            vec![el("a:alpha", &[("val", "50000")], vec![])],
        );
        assert_eq!(resolve_color(&s, &c, "val", "black"), "rgba(68, 114, 196, 0.5)");
    }

    #[test]
    fn lum_mod_round_trip() {
        let original = Color::rgb(0x44, 0x72, 0xC4);
        let lum_mod = |val: &str| el("a:x", &[], vec![el("a:lumMod", &[("val", val)], vec![])]);
        let down = apply_modifiers(original, &lum_mod("75000"));
        assert_ne!(down.channels(), original.channels());
        let back = apply_modifiers(down, &lum_mod("133333"));
        // The same pair chained inside one element.
        let chained = apply_modifiers(
            original,
            &el(
                "a:x",
                &[],
                vec![
                    el("a:lumMod", &[("val", "75000")], vec![]),
                    el("a:lumMod", &[("val", "133333")], vec![]),
                ],
            ),
        );
        for result in [back, chained] {
            let [r0, g0, b0] = original.channels();
            let [r1, g1, b1] = result.channels();
            assert!((r0 as i32 - r1 as i32).abs() <= 1);
            assert!((g0 as i32 - g1 as i32).abs() <= 1);
            assert!((b0 as i32 - b1 as i32).abs() <= 1);
        }
    }

    #[test]
    fn shade_tint_and_comp() {
        let c = Color::rgb(200, 100, 50);
        let shaded = apply_modifiers(c, &el("a:x", &[], vec![el("a:shade", &[("val", "50000")], vec![])]));
        assert_eq!(shaded.channels(), [72, 0, 0]);
        let tinted = apply_modifiers(c, &el("a:x", &[], vec![el("a:tint", &[("val", "90000")], vec![])]));
        assert_eq!(tinted.channels(), [226, 126, 76]);
        let red = Color::rgb(255, 0, 0);
        let comp = apply_modifiers(red, &el("a:x", &[], vec![el("a:comp", &[], vec![])]));
        assert_eq!(comp.channels(), [0, 255, 255]);
    }

    #[test]
    fn shading_patterns() {
        assert_eq!(shading("FF0000", "pct25"), "rgba(255, 0, 0, 0.25)");
        assert_eq!(shading("FFFFFF", "pct50"), "rgba(0, 0, 0, 0.5)");
        assert_eq!(shading("00FF00", "clear"), "#00FF00");
        assert_eq!(shading("00FF00", "diagStripe"), "#00FF00");
    }
}
