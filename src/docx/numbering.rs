//! `word/numbering.xml` and list counters.

use std::collections::HashMap;

use crate::css::Css;
use crate::xml::XmlElement;

use super::{Parser, StyleSheet};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LevelSuffix {
    #[default]
    Tab,
    Space,
    Nothing,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Level {
    pub level: u8,
    pub start: u32,
    pub format: String,
    pub text: String,
    pub suffix: LevelSuffix,
    pub justification: Option<String>,
    /// Applied to the paragraph (indents).
    pub paragraph: Css,
    /// Applied to the label.
    pub run: Css,
    /// Raw `w:rFonts/@w:ascii` of the label, for symbol bullets.
    pub font: Option<String>,
    /// `w:isLgl`: referenced levels render as decimal.
    pub legal: bool,
    /// `w:lvlRestart`: `Some(0)` never restarts.
    pub restart: Option<u32>,
    /// Image part of a picture bullet.
    pub picture: Option<String>,
}

#[derive(Clone, Debug, Default)]
struct AbstractNumbering {
    levels: Vec<Level>,
    num_style_link: Option<String>,
}

#[derive(Clone, Debug, Default)]
struct NumberingInstance {
    abstract_id: String,
    start_overrides: HashMap<u8, u32>,
    level_overrides: HashMap<u8, Level>,
}

/// Numbering definitions with level overrides already applied.
#[derive(Clone, Debug, Default)]
pub struct Numbering {
    levels: HashMap<String, Vec<Level>>,
}

impl Numbering {
    pub fn parse(parser: &Parser, root: &XmlElement, styles: &StyleSheet) -> Self {
        let mut pictures: HashMap<String, String> = HashMap::new();
        for bullet in root.children_named("w:numPicBullet") {
            let Some(id) = bullet.attr("w:numPicBulletId") else {
                continue;
            };
            let rel_id = bullet
                .find("v:imagedata")
                .and_then(|img| img.attr("r:id"))
                .or_else(|| bullet.find("a:blip").and_then(|blip| blip.attr("r:embed")));
            if let Some(rel) = rel_id.and_then(|rid| parser.rels.get(rid)) {
                pictures.insert(id.to_string(), rel.part.clone());
            }
        }

        let mut abstracts: HashMap<String, AbstractNumbering> = HashMap::new();
        for el in root.children_named("w:abstractNum") {
            let Some(id) = el.attr("w:abstractNumId") else {
                continue;
            };
            let levels = el
                .children_named("w:lvl")
                .map(|lvl| parse_level(parser, lvl, &pictures))
                .collect();
            abstracts.insert(
                id.to_string(),
                AbstractNumbering {
                    levels,
                    num_style_link: el.child_val("w:numStyleLink").map(str::to_string),
                },
            );
        }

        let mut instances: HashMap<String, NumberingInstance> = HashMap::new();
        for el in root.children_named("w:num") {
            let (Some(id), Some(abstract_id)) = (el.attr("w:numId"), el.child_val("w:abstractNumId")) else {
                continue;
            };
            let mut instance = NumberingInstance {
                abstract_id: abstract_id.to_string(),
                ..Default::default()
            };
            for ov in el.children_named("w:lvlOverride") {
                let Some(ilvl) = ov.attr("w:ilvl").and_then(|v| v.parse().ok()) else {
                    continue;
                };
                if let Some(start) = ov.child_val("w:startOverride").and_then(|v| v.parse().ok()) {
                    instance.start_overrides.insert(ilvl, start);
                }
                if let Some(lvl) = ov.child("w:lvl") {
                    instance.level_overrides.insert(ilvl, parse_level(parser, lvl, &pictures));
                }
            }
            instances.insert(id.to_string(), instance);
        }

        let mut numbering = Numbering::default();
        for (num_id, instance) in &instances {
            let Some(definition) = resolve_abstract(&instance.abstract_id, &abstracts, &instances, styles) else {
                log::warn!("numbering {num_id} references missing abstractNum {}", instance.abstract_id);
                continue;
            };
            let mut levels = definition.levels.clone();
            for level in &mut levels {
                if let Some(ov) = instance.level_overrides.get(&level.level) {
                    *level = ov.clone();
                }
                if let Some(start) = instance.start_overrides.get(&level.level) {
                    level.start = *start;
                }
            }
            levels.sort_by_key(|l| l.level);
            numbering.levels.insert(num_id.clone(), levels);
        }
        numbering
    }

    pub fn levels(&self, num_id: &str) -> Option<&[Level]> {
        self.levels.get(num_id).map(Vec::as_slice)
    }

    pub fn level(&self, num_id: &str, level: u8) -> Option<&Level> {
        self.levels(num_id)?.iter().find(|l| l.level == level)
    }
}

/// Follow `w:numStyleLink` through the numbering style to the definition
/// that actually carries the levels.
fn resolve_abstract<'a>(
    id: &str,
    abstracts: &'a HashMap<String, AbstractNumbering>,
    instances: &HashMap<String, NumberingInstance>,
    styles: &StyleSheet,
) -> Option<&'a AbstractNumbering> {
    let mut current = abstracts.get(id)?;
    for _ in 0..4 {
        let Some(link) = current.num_style_link.as_deref() else {
            break;
        };
        let linked = styles
            .get(link)
            .and_then(|s| s.numbering.as_ref())
            .and_then(|n| instances.get(&n.num_id))
            .and_then(|inst| abstracts.get(&inst.abstract_id));
        match linked {
            Some(next) if !std::ptr::eq(next, current) => current = next,
            _ => break,
        }
    }
    Some(current)
}

fn parse_level(parser: &Parser, el: &XmlElement, pictures: &HashMap<String, String>) -> Level {
    let mut level = Level {
        level: el.attr("w:ilvl").and_then(|v| v.parse().ok()).unwrap_or(0),
        start: 1,
        format: "decimal".to_string(),
        ..Default::default()
    };
    for child in el.elements() {
        match child.name.as_str() {
            "w:start" => level.start = child.val().and_then(|v| v.parse().ok()).unwrap_or(1),
            "w:numFmt" => level.format = child.val().unwrap_or("decimal").to_string(),
            "w:lvlText" => level.text = child.val().unwrap_or_default().to_string(),
            "w:suff" => {
                level.suffix = match child.val() {
                    Some("space") => LevelSuffix::Space,
                    Some("nothing") => LevelSuffix::Nothing,
                    _ => LevelSuffix::Tab,
                }
            }
            "w:lvlJc" => level.justification = child.val().map(str::to_string),
            "w:pPr" => level.paragraph = parser.parse_properties(child).css,
            "w:rPr" => {
                level.run = parser.parse_properties(child).css;
                level.font = child
                    .child("w:rFonts")
                    .and_then(|f| f.attr("w:ascii").or_else(|| f.attr("w:hAnsi")))
                    .map(str::to_string);
            }
            "w:isLgl" => level.legal = crate::units::val_bool(child, true),
            "w:lvlRestart" => level.restart = child.val().and_then(|v| v.parse().ok()),
            "w:lvlPicBulletId" => level.picture = child.val().and_then(|id| pictures.get(id)).cloned(),
            "w:pStyle" | "w:legacy" => {}
            other => log::warn!("unhandled numbering level element <{other}>"),
        }
    }
    level
}

/// Running list counters, one array of nine levels per numbering instance.
#[derive(Clone, Debug, Default)]
pub struct NumberingCounters {
    counters: HashMap<String, [Option<u32>; 9]>,
}

impl NumberingCounters {
    /// Advance `level` of `num_id` and return the label text for it.
    /// Deeper levels restart.
    pub fn next(&mut self, numbering: &Numbering, num_id: &str, level: u8) -> Option<String> {
        let levels = numbering.levels(num_id)?;
        let def = levels.iter().find(|l| l.level == level)?;
        let lvl = level.min(8) as usize;
        let counters = self.counters.entry(num_id.to_string()).or_insert([None; 9]);
        counters[lvl] = Some(match counters[lvl] {
            Some(value) => value + 1,
            None => def.start,
        });
        for deeper in levels.iter().filter(|l| (l.level as usize) > lvl && l.level < 9) {
            if deeper.restart != Some(0) {
                counters[deeper.level as usize] = None;
            }
        }

        if def.format == "bullet" {
            return Some(def.text.clone());
        }
        let mut label = def.text.clone();
        for k in (1..=9).rev() {
            let placeholder = format!("%{k}");
            if !label.contains(&placeholder) {
                continue;
            }
            let Some(referenced) = levels.iter().find(|l| l.level as usize == k - 1) else {
                label = label.replace(&placeholder, "");
                continue;
            };
            let value = counters[k - 1].unwrap_or(referenced.start);
            let format = if def.legal && k - 1 != lvl {
                "decimal"
            } else {
                referenced.format.as_str()
            };
            label = label.replace(&placeholder, &format_number(value, format));
        }
        Some(label)
    }
}

fn to_roman(mut n: u32) -> String {
    const TABLE: &[(u32, &str)] = &[
        (1000, "m"),
        (900, "cm"),
        (500, "d"),
        (400, "cd"),
        (100, "c"),
        (90, "xc"),
        (50, "l"),
        (40, "xl"),
        (10, "x"),
        (9, "ix"),
        (5, "v"),
        (4, "iv"),
        (1, "i"),
    ];
    let mut result = String::new();
    for &(value, numeral) in TABLE {
        while n >= value {
            result.push_str(numeral);
            n -= value;
        }
    }
    result
}

/// Word repeats the letter once per pass through the alphabet: z, aa, bb.
fn to_letters(value: u32, base: u8) -> String {
    if value == 0 {
        return String::new();
    }
    let n = value - 1;
    let letter = (base + (n % 26) as u8) as char;
    std::iter::repeat_n(letter, (n / 26 + 1) as usize).collect()
}

fn ordinal_suffix(value: u32) -> &'static str {
    match (value % 10, value % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

pub fn format_number(value: u32, num_fmt: &str) -> String {
    match num_fmt {
        "decimal" => value.to_string(),
        "decimalZero" => format!("{value:02}"),
        "lowerLetter" => to_letters(value, b'a'),
        "upperLetter" => to_letters(value, b'A'),
        "lowerRoman" => to_roman(value),
        "upperRoman" => to_roman(value).to_uppercase(),
        "ordinal" => format!("{value}{}", ordinal_suffix(value)),
        "decimalEnclosedCircle" if (1..=20).contains(&value) => {
            char::from_u32(0x2460 + value - 1).map(String::from).unwrap_or_default()
        }
        "decimalFullWidth" | "decimalFullWidth2" => value
            .to_string()
            .chars()
            .filter_map(|c| char::from_u32(c as u32 - '0' as u32 + 0xFF10))
            .collect(),
        "none" | "bullet" => String::new(),
        other => {
            log::debug!("number format {other:?} rendered as decimal");
            value.to_string()
        }
    }
}

/// Map a symbol-font private-use code point (U+F0xx) to the Unicode
/// character it usually depicts.
pub fn symbol_char(c: char) -> char {
    let cp = c as u32;
    if !(0xF000..=0xF0FF).contains(&cp) {
        return c;
    }
    match cp - 0xF000 {
        0xB7 => '\u{2022}',
        0xA7 => '\u{25A0}',
        0xA8 => '\u{25CB}',
        0xD8 => '\u{2666}',
        0x76 => '\u{2756}',
        0xFC => '\u{2714}',
        0x6F => '\u{25A1}',
        0x71 => '\u{2752}',
        0x6E => '\u{25A0}',
        sym => char::from_u32(sym).unwrap_or(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorScheme;
    use crate::docx::Relationships;
    use crate::options::ParseOptions;
    use crate::xml;

    const NUMBERING: &str = r#"
        <w:abstractNum w:abstractNumId="0">
          <w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="decimal"/><w:lvlText w:val="%1."/><w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr></w:lvl>
          <w:lvl w:ilvl="1"><w:start w:val="1"/><w:numFmt w:val="lowerLetter"/><w:lvlText w:val="%1.%2)"/><w:suff w:val="space"/></w:lvl>
        </w:abstractNum>
        <w:abstractNum w:abstractNumId="1">
          <w:lvl w:ilvl="0"><w:numFmt w:val="bullet"/><w:lvlText w:val="BULLET"/><w:rPr><w:rFonts w:ascii="Symbol" w:hAnsi="Symbol"/></w:rPr></w:lvl>
        </w:abstractNum>
        <w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>
        <w:num w:numId="2"><w:abstractNumId w:val="0"/><w:lvlOverride w:ilvl="0"><w:startOverride w:val="5"/></w:lvlOverride></w:num>
        <w:num w:numId="3"><w:abstractNumId w:val="1"/></w:num>"#;

    fn numbering() -> Numbering {
        let inner = NUMBERING.replace("BULLET", "\u{F0B7}");
        let root = xml::parse("n", &format!(r#"<w:numbering xmlns:w="{}">{inner}</w:numbering>"#, xml::WML_NS)).unwrap();
        let scheme = ColorScheme::default();
        let options = ParseOptions::default();
        let rels = Relationships::default();
        let parser = Parser {
            scheme: &scheme,
            options: &options,
            rels: &rels,
        };
        Numbering::parse(&parser, &root, &StyleSheet::default())
    }

    #[test]
    fn counters_increment_and_reset_deeper_levels() {
        let numbering = numbering();
        let mut counters = NumberingCounters::default();
        let labels: Vec<String> = [0, 1, 1, 0, 1]
            .iter()
            .filter_map(|&lvl| counters.next(&numbering, "1", lvl))
            .collect();
        assert_eq!(labels, ["1.", "1.a)", "1.b)", "2.", "2.a)"]);
    }

    #[test]
    fn start_override_and_independent_instances() {
        let numbering = numbering();
        let mut counters = NumberingCounters::default();
        assert_eq!(counters.next(&numbering, "2", 0).as_deref(), Some("5."));
        assert_eq!(counters.next(&numbering, "1", 0).as_deref(), Some("1."));
        assert_eq!(counters.next(&numbering, "2", 0).as_deref(), Some("6."));
        assert!(counters.next(&numbering, "99", 0).is_none());
    }

    #[test]
    fn bullet_levels_keep_their_glyph() {
        let numbering = numbering();
        let level = numbering.level("3", 0).unwrap();
        assert_eq!(level.font.as_deref(), Some("Symbol"));
        assert_eq!(symbol_char(level.text.chars().next().unwrap()), '\u{2022}');
        assert_eq!(numbering.level("1", 0).unwrap().paragraph.get("text-indent"), Some("-24.00px"));
        assert_eq!(numbering.level("1", 1).unwrap().suffix, LevelSuffix::Space);
    }

    #[test]
    fn number_formats() {
        assert_eq!(format_number(4, "upperRoman"), "IV");
        assert_eq!(format_number(1994, "lowerRoman"), "mcmxciv");
        assert_eq!(format_number(27, "lowerLetter"), "aa");
        assert_eq!(format_number(28, "upperLetter"), "BB");
        assert_eq!(format_number(3, "decimalZero"), "03");
        assert_eq!(format_number(12, "ordinal"), "12th");
        assert_eq!(format_number(22, "ordinal"), "22nd");
        assert_eq!(format_number(3, "decimalEnclosedCircle"), "\u{2462}");
        assert_eq!(format_number(7, "chineseCounting"), "7");
    }
}
