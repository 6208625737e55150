//! OOXML measurement and attribute-encoding converters.

use crate::xml::XmlElement;

/// The length encodings that show up in WordprocessingML and DrawingML.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthUnit {
    /// Twentieths of a point.
    Dxa,
    /// English Metric Units, 914400 per inch.
    Emu,
    /// Half-points (`w:sz`).
    FontSize,
    /// Eighths of a point (`w:sz` on borders).
    Border,
    Point,
    /// Fiftieths of a percent.
    Percent,
    /// 240ths of a line (`w:spacing/@w:line` with `lineRule="auto"`).
    LineHeight,
    VmlEmu,
}

impl LengthUnit {
    pub const fn multiplier(self) -> f64 {
        match self {
            LengthUnit::Dxa => 0.066665,
            LengthUnit::Emu => 1.3333 / 12700.0,
            LengthUnit::FontSize => 0.66665,
            LengthUnit::Border => 0.16666,
            LengthUnit::Point => 1.3333,
            LengthUnit::Percent => 0.02,
            LengthUnit::LineHeight => 1.0 / 240.0,
            LengthUnit::VmlEmu => 1.3333 / 12700.0,
        }
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Percent => "%",
            LengthUnit::LineHeight => "",
            _ => "px",
        }
    }
}

const CSS_SUFFIXES: &[&str] = &["px", "pt", "%", "in", "cm", "mm", "pc", "em"];

/// Convert a raw attribute value into a CSS length. Values that already carry
/// a CSS unit pass through untouched, so conversion is idempotent. Unitless
/// line heights are recognized by their decimal point: raw `w:line` values
/// are whole 240ths.
pub fn convert_length(value: Option<&str>, unit: LengthUnit) -> Option<String> {
    let value = value?.trim();
    if CSS_SUFFIXES.iter().any(|s| value.ends_with(s))
        || (unit == LengthUnit::LineHeight && value.contains('.'))
    {
        return Some(value.to_string());
    }
    match parse_number(value) {
        Some(n) => Some(format!("{:.2}{}", n * unit.multiplier(), unit.suffix())),
        None => {
            log::warn!("cannot convert length {value:?} ({unit:?})");
            None
        }
    }
}

pub fn length_attr(el: &XmlElement, attr: &str, unit: LengthUnit) -> Option<String> {
    convert_length(el.attr(attr), unit)
}

/// Numeric prefix of a string, the way `parseFloat` reads it.
pub fn parse_number(value: &str) -> Option<f64> {
    let value = value.trim_start();
    let end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || ((c == '-' || c == '+') && i == 0)))
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    value[..end].parse::<f64>().ok()
}

/// Integer prefix of a string, the way `parseInt(s, 10)` reads it.
pub fn parse_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || ((c == '-' || c == '+') && i == 0)))
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    value[..end].parse::<i64>().ok()
}

/// Reads a px value produced by [`convert_length`] back into a number.
pub fn px(value: &str) -> Option<f64> {
    value.trim().strip_suffix("px").and_then(|v| v.parse().ok())
}

pub fn parse_bool(value: Option<&str>, default: bool) -> bool {
    match value {
        Some("1" | "on" | "true") => true,
        Some("0" | "off" | "false") => false,
        _ => default,
    }
}

pub fn attr_bool(el: &XmlElement, attr: &str, default: bool) -> bool {
    parse_bool(el.attr(attr), default)
}

/// Toggle properties (`<w:b/>`, `<w:i w:val="0"/>`): present without a value means on.
pub fn val_bool(el: &XmlElement, default: bool) -> bool {
    parse_bool(el.val(), default)
}

/// DrawingML percentages: `"50%"` → 0.5, `"50000"` → 0.5, absent → 1.
pub fn attr_percent(el: &XmlElement, attr: &str) -> f64 {
    let Some(value) = el.attr(attr) else {
        return 1.0;
    };
    match value.strip_suffix('%') {
        Some(pct) => parse_number(pct).map(|n| n / 100.0).unwrap_or(1.0),
        None => parse_number(value).map(|n| n / 100_000.0).unwrap_or(1.0),
    }
}

/// Hexadecimal `w:val` (e.g. the packed `w:tblLook` bitmask), 0 when absent.
pub fn val_hex(el: &XmlElement) -> u32 {
    el.val()
        .and_then(|v| u32::from_str_radix(v.trim(), 16).ok())
        .unwrap_or(0)
}

pub fn emu_to_px(emu: f64) -> f64 {
    emu * LengthUnit::Emu.multiplier()
}

pub fn dxa_to_px(dxa: f64) -> f64 {
    dxa * LengthUnit::Dxa.multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [LengthUnit; 8] = [
        LengthUnit::Dxa,
        LengthUnit::Emu,
        LengthUnit::FontSize,
        LengthUnit::Border,
        LengthUnit::Point,
        LengthUnit::Percent,
        LengthUnit::LineHeight,
        LengthUnit::VmlEmu,
    ];

    #[test]
    fn font_size_half_points() {
        assert_eq!(convert_length(Some("24"), LengthUnit::FontSize).as_deref(), Some("16.00px"));
    }

    #[test]
    fn dxa_and_emu() {
        assert_eq!(convert_length(Some("1440"), LengthUnit::Dxa).as_deref(), Some("96.00px"));
        assert_eq!(convert_length(Some("914400"), LengthUnit::Emu).as_deref(), Some("96.00px"));
        assert_eq!(convert_length(Some("5000"), LengthUnit::Percent).as_deref(), Some("100.00%"));
    }

    #[test]
    fn conversion_is_idempotent_once_suffixed() {
        for unit in ALL {
            let once = convert_length(Some("720"), unit).unwrap();
            if unit.suffix().is_empty() {
                continue;
            }
            for other in ALL {
                assert_eq!(convert_length(Some(&once), other).as_deref(), Some(once.as_str()));
            }
        }
        for unit in ALL {
            assert_eq!(convert_length(Some("10px"), unit).as_deref(), Some("10px"));
            assert_eq!(convert_length(Some("12pt"), unit).as_deref(), Some("12pt"));
            assert_eq!(convert_length(Some("50%"), unit).as_deref(), Some("50%"));
        }
    }

    #[test]
    fn line_height_converts_once() {
        let once = convert_length(Some("360"), LengthUnit::LineHeight).unwrap();
        assert_eq!(once, "1.50");
        assert_eq!(convert_length(Some(&once), LengthUnit::LineHeight).as_deref(), Some("1.50"));
        let whole = convert_length(Some("240"), LengthUnit::LineHeight).unwrap();
        assert_eq!(convert_length(Some(&whole), LengthUnit::LineHeight).as_deref(), Some("1.00"));
    }

    #[test]
    fn absent_value_stays_absent() {
        assert_eq!(convert_length(None, LengthUnit::Dxa), None);
    }

    #[test]
    fn booleans() {
        assert!(parse_bool(Some("on"), false));
        assert!(parse_bool(Some("true"), false));
        assert!(!parse_bool(Some("0"), true));
        assert!(!parse_bool(Some("off"), true));
        assert!(parse_bool(None, true));
        assert!(!parse_bool(Some("maybe"), false));
    }

    #[test]
    fn percentages() {
        let mut el = XmlElement::new("a:lumMod");
        assert_eq!(attr_percent(&el, "val"), 1.0);
        el.set_attr("val", "75000");
        assert!((attr_percent(&el, "val") - 0.75).abs() < 1e-9);
        el.set_attr("val", "40%");
        assert!((attr_percent(&el, "val") - 0.4).abs() < 1e-9);
    }

    #[test]
    fn parse_int_reads_prefix() {
        assert_eq!(parse_int("42abc"), Some(42));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("adj"), None);
    }
}
