//! `w:pPr`/`w:rPr` (and their style counterparts) to CSS.

use crate::color::{Color, resolve_color, shading};
use crate::css::Css;
use crate::model::{NumberingRef, RunProperties, TabStop, VertAlign};
use crate::units::{
    LengthUnit, convert_length, dxa_to_px, emu_to_px, length_attr, parse_number, val_bool,
};
use crate::xml::XmlElement;

use super::Parser;

/// Everything a property container can carry. Most of it is already CSS;
/// the rest drives numbering, tab stops and pagination.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Properties {
    pub css: Css,
    pub style_id: Option<String>,
    pub numbering: Option<NumberingRef>,
    pub tabs: Vec<TabStop>,
    pub keep_next: bool,
    pub keep_lines: bool,
    pub page_break_before: bool,
    pub auto_space: bool,
    pub outline_level: Option<u8>,
    pub vert_align: Option<VertAlign>,
    /// `w:pPr/w:rPr`: formatting of the paragraph mark.
    pub mark: Option<Box<Properties>>,
}

enum Property {
    Style,
    Numbering,
    Tabs,
    KeepNext,
    KeepLines,
    PageBreakBefore,
    AutoSpace,
    OutlineLevel,
    ParagraphMark,
    Justification,
    TextAlignment,
    Indent,
    Spacing,
    ParagraphBorders,
    RunBorder,
    Shading,
    NoWrap,
    Direction,
    SuppressHyphens,
    WordWrap,
    Color,
    TextFill,
    FontSize,
    Fonts,
    Highlight,
    Bold,
    Italic,
    Caps,
    SmallCaps,
    Underline,
    Strike,
    DoubleStrike,
    VertAlign,
    Position,
    Vanish,
    CharScale,
    Emphasis,
    TextOutline,
    TextShadow,
    Reflection,
    Glow,
    LegacyShadow,
    Outline,
    Emboss,
    Imprint,
    Ignored,
    Unhandled(String),
}

impl Property {
    fn classify(el: &XmlElement) -> Property {
        match el.name.as_str() {
            "w:pStyle" | "w:rStyle" => Property::Style,
            "w:numPr" => Property::Numbering,
            "w:tabs" => Property::Tabs,
            "w:keepNext" => Property::KeepNext,
            "w:keepLines" => Property::KeepLines,
            "w:pageBreakBefore" => Property::PageBreakBefore,
            "w:autoSpaceDE" | "w:autoSpaceDN" => Property::AutoSpace,
            "w:outlineLvl" => Property::OutlineLevel,
            "w:rPr" => Property::ParagraphMark,
            "w:jc" => Property::Justification,
            "w:textAlignment" => Property::TextAlignment,
            "w:ind" => Property::Indent,
            "w:spacing" => Property::Spacing,
            "w:pBdr" => Property::ParagraphBorders,
            "w:bdr" => Property::RunBorder,
            "w:shd" => Property::Shading,
            "w:noWrap" => Property::NoWrap,
            "w:bidi" | "w:rtl" => Property::Direction,
            "w:suppressAutoHyphens" => Property::SuppressHyphens,
            "w:wordWrap" => Property::WordWrap,
            "w:color" => Property::Color,
            "w14:textFill" => Property::TextFill,
            "w:sz" => Property::FontSize,
            "w:rFonts" => Property::Fonts,
            "w:highlight" => Property::Highlight,
            "w:b" => Property::Bold,
            "w:i" => Property::Italic,
            "w:caps" => Property::Caps,
            "w:smallCaps" => Property::SmallCaps,
            "w:u" => Property::Underline,
            "w:strike" => Property::Strike,
            "w:dstrike" => Property::DoubleStrike,
            "w:vertAlign" => Property::VertAlign,
            "w:position" => Property::Position,
            "w:vanish" => Property::Vanish,
            "w:w" => Property::CharScale,
            "w:em" => Property::Emphasis,
            "w14:textOutline" => Property::TextOutline,
            "w14:shadow" => Property::TextShadow,
            "w14:reflection" => Property::Reflection,
            "w14:glow" => Property::Glow,
            "w:shadow" => Property::LegacyShadow,
            "w:outline" => Property::Outline,
            "w:emboss" => Property::Emboss,
            "w:imprint" => Property::Imprint,
            "w:lang" | "w:bCs" | "w:iCs" | "w:szCs" | "w:kern" | "w:noProof" | "w:cs"
            | "w:widowControl" | "w:snapToGrid" | "w:contextualSpacing" | "w:adjustRightInd"
            | "w:overflowPunct" | "w:topLinePunct" | "w:kinsoku" | "w:rPrChange"
            | "w:pPrChange" | "w:cnfStyle" | "w:sectPr" | "w:webHidden" | "w:specVanish"
            | "w:eastAsianLayout" | "w:fitText" | "w:framePr" | "w:suppressLineNumbers"
            | "w:mirrorIndents" | "w:textDirection" | "w:divId" | "w:effect" | "w:oMath"
            | "w:textboxTightWrap" | "w:ins" | "w:del" | "w:moveFrom" | "w:moveTo"
            | "w:suppressOverlap" | "w:collapsed" | "w14:ligatures" | "w14:numForm"
            | "w14:numSpacing" | "w14:cntxtAlts" | "w14:stylisticSets" | "w14:props3d"
            | "w14:scene3d" => Property::Ignored,
            other => Property::Unhandled(other.to_string()),
        }
    }
}

const HIGHLIGHTS: &[(&str, &str)] = &[
    ("black", "000000"),
    ("blue", "0000FF"),
    ("cyan", "00FFFF"),
    ("darkBlue", "000080"),
    ("darkCyan", "008080"),
    ("darkGray", "808080"),
    ("darkGreen", "008000"),
    ("darkMagenta", "800080"),
    ("darkRed", "800000"),
    ("darkYellow", "808000"),
    ("green", "00FF00"),
    ("lightGray", "C0C0C0"),
    ("magenta", "FF00FF"),
    ("red", "FF0000"),
    ("white", "FFFFFF"),
    ("yellow", "FFFF00"),
];

fn highlight_color(name: &str) -> Option<&'static str> {
    HIGHLIGHTS.iter().find(|(n, _)| *n == name).map(|(_, hex)| *hex)
}

fn negate(length: &str) -> String {
    match length.strip_prefix('-') {
        Some(positive) => positive.to_string(),
        None if parse_number(length) == Some(0.0) => length.to_string(),
        None => format!("-{length}"),
    }
}

/// Add or remove a keyword of `text-decoration-line`.
fn decoration(css: &mut Css, keyword: &str, on: bool) {
    let mut keywords: Vec<String> = css
        .get("text-decoration-line")
        .map(|v| {
            v.split_whitespace()
                .filter(|k| *k != "none" && *k != keyword)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    if on {
        keywords.push(keyword.to_string());
    }
    if keywords.is_empty() {
        css.set("text-decoration-line", "none");
    } else {
        css.set("text-decoration-line", keywords.join(" "));
    }
}

fn add_text_shadow(css: &mut Css, shadow: String) {
    let value = match css.get("text-shadow") {
        Some(existing) => format!("{existing}, {shadow}"),
        None => shadow,
    };
    css.set("text-shadow", value);
}

fn underline_style(value: &str) -> Option<&'static str> {
    Some(match value {
        "none" => return None,
        "double" => "double",
        "dotted" | "dottedHeavy" => "dotted",
        "dash" | "dashedHeavy" | "dashLong" | "dashLongHeavy" | "dotDash" | "dashDotHeavy"
        | "dotDotDash" | "dashDotDotHeavy" => "dashed",
        "wave" | "wavyHeavy" | "wavyDouble" => "wavy",
        _ => "solid",
    })
}

fn border_style(value: &str) -> &'static str {
    match value {
        "nil" | "none" => "none",
        "single" | "thick" => "solid",
        "double" | "triple" | "thinThickSmallGap" | "thickThinSmallGap"
        | "thinThickThinSmallGap" | "thinThickMediumGap" | "thickThinMediumGap"
        | "thinThickThinMediumGap" | "thinThickLargeGap" | "thickThinLargeGap"
        | "thinThickThinLargeGap" | "doubleWave" => "double",
        "dotted" => "dotted",
        "dashed" | "dashSmallGap" | "dotDash" | "dotDotDash" | "dashDotStroked" => "dashed",
        "threeDEmboss" => "ridge",
        "threeDEngrave" => "groove",
        "outset" => "outset",
        "inset" => "inset",
        other => {
            log::debug!("border style {other:?} drawn solid");
            "solid"
        }
    }
}

/// A font name as a CSS `font-family` entry, quoted unless it is a bare identifier.
pub(crate) fn quote_font(name: &str) -> String {
    if name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\'', "\\'"))
    }
}

impl Parser<'_> {
    pub fn parse_properties(&self, pr: &XmlElement) -> Properties {
        let run_context = pr.local_name() == "rPr";
        let mut props = Properties::default();
        for el in pr.elements() {
            let css = &mut props.css;
            match Property::classify(el) {
                Property::Style => props.style_id = el.val().map(str::to_string),
                Property::Numbering => {
                    props.numbering = el.child_val("w:numId").map(|num_id| NumberingRef {
                        num_id: num_id.to_string(),
                        level: el
                            .child_val("w:ilvl")
                            .and_then(|v| v.parse().ok())
                            .unwrap_or(0),
                    })
                }
                Property::Tabs => props.tabs = parse_tabs(el),
                Property::KeepNext => props.keep_next = val_bool(el, true),
                Property::KeepLines => props.keep_lines = val_bool(el, true),
                Property::PageBreakBefore => props.page_break_before = val_bool(el, true),
                Property::AutoSpace => props.auto_space |= val_bool(el, true),
                Property::OutlineLevel => {
                    props.outline_level = el.val().and_then(|v| v.parse().ok())
                }
                Property::ParagraphMark => {
                    props.mark = Some(Box::new(self.parse_properties(el)))
                }
                Property::Justification => {
                    if let Some(align) = el.val().and_then(justification) {
                        css.set("text-align", align);
                    }
                }
                Property::TextAlignment => {
                    let align = match el.val() {
                        Some("top") => "top",
                        Some("center") => "middle",
                        Some("bottom") => "bottom",
                        _ => "baseline",
                    };
                    css.set("vertical-align", align);
                }
                Property::Indent => self.indent(el, css),
                Property::Spacing if run_context => {
                    css.set_opt("letter-spacing", length_attr(el, "w:val", LengthUnit::Dxa))
                }
                Property::Spacing => self.spacing(el, css),
                Property::ParagraphBorders => {
                    for side in el.elements() {
                        let name = match side.local_name() {
                            "top" => "top",
                            "bottom" => "bottom",
                            "left" | "start" => "left",
                            "right" | "end" => "right",
                            _ => continue,
                        };
                        if let Some(border) = self.border(side) {
                            css.set(&format!("border-{name}"), border);
                        }
                        css.set_opt(
                            &format!("padding-{name}"),
                            length_attr(side, "w:space", LengthUnit::Point),
                        );
                    }
                }
                Property::RunBorder => {
                    if let Some(border) = self.border(el) {
                        css.set("border", border);
                    }
                }
                Property::Shading => self.shading(el, css),
                Property::NoWrap => {
                    if val_bool(el, true) {
                        css.set("white-space", "nowrap");
                    }
                }
                Property::Direction => {
                    if val_bool(el, true) {
                        css.set("direction", "rtl");
                    }
                }
                Property::SuppressHyphens => {
                    if val_bool(el, true) {
                        css.set("hyphens", "manual");
                    }
                }
                Property::WordWrap => {
                    if !val_bool(el, true) {
                        css.set("word-break", "break-all");
                    }
                }
                Property::Color => css.set("color", resolve_color(self.scheme, el, "w:val", "black")),
                Property::TextFill => {
                    if let Some(color) = el
                        .child("w14:solidFill")
                        .and_then(|fill| fill.elements().next())
                    {
                        css.set("color", resolve_color(self.scheme, color, "w14:val", "black"));
                    }
                }
                Property::FontSize => {
                    css.set_opt("font-size", convert_length(el.val(), LengthUnit::FontSize))
                }
                Property::Fonts => css.set_opt("font-family", self.font_family(el)),
                Property::Highlight => match el.val() {
                    None | Some("none") => {}
                    Some(name) => match highlight_color(name) {
                        Some(hex) => css.set("background-color", format!("#{hex}")),
                        None => log::warn!("unknown highlight color {name:?}"),
                    },
                },
                Property::Bold => css.set(
                    "font-weight",
                    if val_bool(el, true) { "bold" } else { "normal" },
                ),
                Property::Italic => css.set(
                    "font-style",
                    if val_bool(el, true) { "italic" } else { "normal" },
                ),
                Property::Caps => css.set(
                    "text-transform",
                    if val_bool(el, true) { "uppercase" } else { "none" },
                ),
                Property::SmallCaps => css.set(
                    "font-variant",
                    if val_bool(el, true) { "small-caps" } else { "normal" },
                ),
                Property::Underline => self.underline(el, css),
                Property::Strike => decoration(css, "line-through", val_bool(el, true)),
                Property::DoubleStrike => {
                    let on = val_bool(el, true);
                    decoration(css, "line-through", on);
                    if on {
                        css.set("text-decoration-style", "double");
                    }
                }
                Property::VertAlign => {
                    props.vert_align = match el.val() {
                        Some("superscript") => Some(VertAlign::Superscript),
                        Some("subscript") => Some(VertAlign::Subscript),
                        _ => None,
                    }
                }
                Property::Position => {
                    css.set_opt("vertical-align", convert_length(el.val(), LengthUnit::FontSize))
                }
                Property::Vanish => {
                    if val_bool(el, true) {
                        css.set("display", "none");
                    }
                }
                Property::CharScale => {
                    if let Some(scale) = el.val().and_then(parse_number)
                        && scale != 100.0
                    {
                        css.set("display", "inline-block");
                        css.set("transform", format!("scaleX({:.2})", scale / 100.0));
                    }
                }
                Property::Emphasis => {
                    let (mark, under) = match el.val() {
                        Some("dot") => ("filled dot", false),
                        Some("comma") => ("filled sesame", false),
                        Some("circle") => ("open circle", false),
                        Some("underDot") => ("filled dot", true),
                        _ => ("none", false),
                    };
                    css.set("text-emphasis", mark);
                    if under {
                        css.set("text-emphasis-position", "under right");
                    }
                }
                Property::TextOutline => {
                    if el.child("w14:noFill").is_none() {
                        let width = el
                            .attr("w14:w")
                            .and_then(parse_number)
                            .map(emu_to_px)
                            .unwrap_or(0.75);
                        let color = self.effect_color(el, "w14:solidFill");
                        css.set("-webkit-text-stroke", format!("{width:.2}px {color}"));
                    }
                }
                Property::TextShadow => {
                    let blur = effect_length(el, "w14:blurRad");
                    let dist = effect_length(el, "w14:dist");
                    let dir = el
                        .attr("w14:dir")
                        .and_then(parse_number)
                        .unwrap_or(0.0)
                        / 60_000.0;
                    let (dx, dy) = (dist * dir.to_radians().cos(), dist * dir.to_radians().sin());
                    let color = self.effect_color(el, "");
                    add_text_shadow(css, format!("{dx:.2}px {dy:.2}px {blur:.2}px {color}"));
                }
                Property::Reflection => {
                    let dist = effect_length(el, "w14:dist");
                    let blur = effect_length(el, "w14:blurRad");
                    let alpha = el
                        .attr("w14:stA")
                        .and_then(parse_number)
                        .map(|a| a / 100_000.0)
                        .unwrap_or(0.5);
                    add_text_shadow(
                        css,
                        format!("0px {:.2}px {blur:.2}px rgba(0, 0, 0, {alpha:.2})", dist + 1.0),
                    );
                }
                Property::Glow => {
                    let radius = effect_length(el, "w14:rad");
                    let color = self.effect_color(el, "");
                    add_text_shadow(css, format!("0px 0px {radius:.2}px {color}"));
                }
                Property::LegacyShadow => {
                    if val_bool(el, true) {
                        add_text_shadow(css, "1px 1px 1px rgba(0, 0, 0, 0.5)".to_string());
                    }
                }
                Property::Outline => {
                    if val_bool(el, true) {
                        css.set("-webkit-text-stroke", "1px currentColor");
                        css.set("-webkit-text-fill-color", "white");
                    }
                }
                Property::Emboss => {
                    if val_bool(el, true) {
                        add_text_shadow(css, "-1px -1px 0px rgba(255, 255, 255, 0.6), 1px 1px 0px rgba(0, 0, 0, 0.3)".to_string());
                    }
                }
                Property::Imprint => {
                    if val_bool(el, true) {
                        add_text_shadow(css, "1px 1px 0px rgba(255, 255, 255, 0.6), -1px -1px 0px rgba(0, 0, 0, 0.3)".to_string());
                    }
                }
                Property::Ignored => log::debug!("ignoring <{}>", el.name),
                Property::Unhandled(name) => log::warn!("unhandled property <{name}>"),
            }
        }

        if let Some(align) = props.vert_align {
            let keyword = match align {
                VertAlign::Superscript => "super",
                VertAlign::Subscript => "sub",
            };
            props.css.set("vertical-align", keyword);
            let size = match props.css.get("font-size") {
                Some(size) => format!("calc({size} * 0.65)"),
                None => "smaller".to_string(),
            };
            props.css.set("font-size", size);
        }
        props
    }

    pub fn run_properties(&self, rpr: Option<&XmlElement>) -> RunProperties {
        let Some(rpr) = rpr else {
            return RunProperties::default();
        };
        let props = self.parse_properties(rpr);
        RunProperties {
            style_id: props.style_id,
            css: props.css,
            vert_align: props.vert_align,
        }
    }

    fn indent(&self, el: &XmlElement, css: &mut Css) {
        let start = length_attr(el, "w:left", LengthUnit::Dxa)
            .or_else(|| length_attr(el, "w:start", LengthUnit::Dxa));
        let end = length_attr(el, "w:right", LengthUnit::Dxa)
            .or_else(|| length_attr(el, "w:end", LengthUnit::Dxa));
        css.set_opt("margin-left", start);
        css.set_opt("margin-right", end);
        if let Some(hanging) = length_attr(el, "w:hanging", LengthUnit::Dxa) {
            css.set("text-indent", negate(&hanging));
        } else {
            css.set_opt("text-indent", length_attr(el, "w:firstLine", LengthUnit::Dxa));
        }
    }

    fn spacing(&self, el: &XmlElement, css: &mut Css) {
        css.set_opt("margin-top", length_attr(el, "w:before", LengthUnit::Dxa));
        css.set_opt("margin-bottom", length_attr(el, "w:after", LengthUnit::Dxa));
        if let Some(forced) = &self.options.force_line_height {
            css.set("line-height", forced.clone());
            return;
        }
        let Some(line) = el.attr("w:line").and_then(parse_number) else {
            return;
        };
        match el.attr("w:lineRule").unwrap_or("auto") {
            "auto" => css.set(
                "line-height",
                format!("{:.2}", (line / 240.0).max(self.options.min_line_height)),
            ),
            "exact" => css.set("line-height", format!("{:.2}px", dxa_to_px(line))),
            "atLeast" => log::debug!("atLeast line spacing left to the browser"),
            other => log::warn!("unknown line rule {other:?}"),
        }
    }

    fn underline(&self, el: &XmlElement, css: &mut Css) {
        let Some(style) = underline_style(el.val().unwrap_or("single")) else {
            decoration(css, "underline", false);
            return;
        };
        decoration(css, "underline", true);
        css.set("text-decoration-style", style);
        if el.attr("w:color").is_some_and(|c| c != "auto") {
            css.set(
                "text-decoration-color",
                resolve_color(self.scheme, el, "w:color", "currentColor"),
            );
        }
    }

    /// CSS `border` shorthand for a border element; `"none"` for nil borders
    /// so that they override inherited ones.
    pub(crate) fn border(&self, el: &XmlElement) -> Option<String> {
        let style = border_style(el.val().unwrap_or("single"));
        if style == "none" {
            return Some("none".to_string());
        }
        let width = length_attr(el, "w:sz", LengthUnit::Border).unwrap_or_else(|| "1px".into());
        let mut color = resolve_color(self.scheme, el, "w:color", "black");
        if color.is_empty() {
            color = "black".to_string();
        }
        Some(format!("{width} {style} {color}"))
    }

    pub(crate) fn shading(&self, el: &XmlElement, css: &mut Css) {
        let hex = |v: &&str| *v != "auto" && v.len() == 6;
        let fill = el
            .attr("w:themeFill")
            .and_then(|slot| self.scheme.lookup(slot))
            .or_else(|| el.attr("w:fill").filter(hex))
            .map(str::to_string);
        let pattern = el.val().unwrap_or("clear");
        match pattern {
            "nil" => {}
            "clear" => {
                if let Some(fill) = fill {
                    css.set("background-color", shading(&fill, "clear"));
                }
            }
            _ => {
                let color = el.attr("w:color").filter(hex).unwrap_or("000000");
                if pattern == "solid" {
                    css.set("background-color", shading(color, "solid"));
                    return;
                }
                let overlay = shading(color, pattern);
                match &fill {
                    Some(fill) => css.set("background-color", format!("#{fill}")),
                    None if !overlay.starts_with("rgba") => css.set("background-color", overlay.clone()),
                    None => {}
                }
                if overlay.starts_with("rgba") {
                    css.set(
                        "background-image",
                        format!("linear-gradient({overlay}, {overlay})"),
                    );
                }
            }
        }
    }

    fn font_name(&self, name: &str) -> String {
        let name = self
            .options
            .font_mapping
            .get(name)
            .map(String::as_str)
            .unwrap_or(name);
        quote_font(name)
    }

    /// `font-family` list from `w:rFonts`. Theme slots become
    /// `var(--docx-theme-font-*)` references to the stylesheet's custom
    /// properties.
    pub(crate) fn font_family(&self, el: &XmlElement) -> Option<String> {
        let mut families: Vec<String> = Vec::new();
        for (attr, theme_attr) in [
            ("w:ascii", "w:asciiTheme"),
            ("w:hAnsi", "w:hAnsiTheme"),
            ("w:eastAsia", "w:eastAsiaTheme"),
            ("w:cs", "w:cstheme"),
        ] {
            let family = if let Some(slot) = el.attr(theme_attr) {
                format!("var(--docx-theme-font-{slot})")
            } else if let Some(name) = el.attr(attr).filter(|n| !n.is_empty()) {
                self.font_name(name)
            } else {
                continue;
            };
            if !families.contains(&family) {
                families.push(family);
            }
        }
        (!families.is_empty()).then(|| families.join(", "))
    }

    /// Color of a `w14` text effect, given either directly as a color child
    /// or wrapped in `fill_tag`.
    fn effect_color(&self, el: &XmlElement, fill_tag: &str) -> String {
        let color = if fill_tag.is_empty() {
            el.elements().next()
        } else {
            el.child(fill_tag).and_then(|f| f.elements().next())
        };
        match color {
            Some(c) => {
                let resolved = resolve_color(self.scheme, c, "w14:val", "black");
                if resolved.is_empty() {
                    Color::rgb(0, 0, 0).to_css()
                } else {
                    resolved
                }
            }
            None => "currentColor".to_string(),
        }
    }
}

fn effect_length(el: &XmlElement, attr: &str) -> f64 {
    el.attr(attr).and_then(parse_number).map(emu_to_px).unwrap_or(0.0)
}

fn justification(value: &str) -> Option<&'static str> {
    Some(match value {
        "left" | "start" => "left",
        "right" | "end" => "right",
        "center" => "center",
        "both" | "distribute" | "thaiDistribute" | "highKashida" | "mediumKashida"
        | "lowKashida" | "numTab" => "justify",
        other => {
            log::warn!("unknown justification {other:?}");
            return None;
        }
    })
}

fn parse_tabs(el: &XmlElement) -> Vec<TabStop> {
    let mut tabs: Vec<TabStop> = el
        .children_named("w:tab")
        .filter(|tab| tab.val() != Some("clear"))
        .filter_map(|tab| {
            let position = tab.attr("w:pos").and_then(parse_number).map(dxa_to_px)?;
            Some(TabStop {
                position,
                alignment: tab.val().unwrap_or("left").to_string(),
                leader: tab.attr("w:leader").filter(|l| *l != "none").map(str::to_string),
            })
        })
        .collect();
    tabs.sort_by(|a, b| a.position.total_cmp(&b.position));
    tabs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorScheme;
    use crate::docx::Relationships;
    use crate::options::ParseOptions;
    use crate::xml;

    fn parse_with(options: &ParseOptions, inner: &str, container: &str) -> Properties {
        let root = xml::parse(
            "t",
            &format!(r#"<w:{container} xmlns:w="{}">{inner}</w:{container}>"#, xml::WML_NS),
        )
        .unwrap();
        let mut scheme = ColorScheme::default();
        scheme.colors.insert("accent1".into(), "4472C4".into());
        let rels = Relationships::default();
        Parser {
            scheme: &scheme,
            options,
            rels: &rels,
        }
        .parse_properties(&root)
    }

    fn run(inner: &str) -> Properties {
        parse_with(&ParseOptions::default(), inner, "rPr")
    }

    fn para(inner: &str) -> Properties {
        parse_with(&ParseOptions::default(), inner, "pPr")
    }

    #[test]
    fn basic_run_formatting() {
        let props = run(r#"<w:b/><w:i w:val="0"/><w:sz w:val="24"/><w:color w:val="FF0000"/>"#);
        assert_eq!(props.css.get("font-weight"), Some("bold"));
        assert_eq!(props.css.get("font-style"), Some("normal"));
        assert_eq!(props.css.get("font-size"), Some("16.00px"));
        assert_eq!(props.css.get("color"), Some("#FF0000"));
    }

    #[test]
    fn theme_color_and_fonts() {
        let props = run(
            r#"<w:color w:val="000000" w:themeColor="accent1"/><w:rFonts w:asciiTheme="minorHAnsi" w:eastAsia="SimSun" w:cs="Times New Roman"/>"#,
        );
        assert_eq!(props.css.get("color"), Some("#4472c4"));
        assert_eq!(
            props.css.get("font-family"),
            Some("var(--docx-theme-font-minorHAnsi), SimSun, 'Times New Roman'")
        );
    }

    #[test]
    fn font_mapping_substitutes_names() {
        let mut options = ParseOptions::default();
        options.font_mapping.insert("Calibri".into(), "Carlito".into());
        let props = parse_with(&options, r#"<w:rFonts w:ascii="Calibri" w:hAnsi="Calibri"/>"#, "rPr");
        assert_eq!(props.css.get("font-family"), Some("Carlito"));
    }

    #[test]
    fn decorations_combine() {
        let props = run(r#"<w:u w:val="double" w:color="00FF00"/><w:strike/>"#);
        assert_eq!(props.css.get("text-decoration-line"), Some("underline line-through"));
        assert_eq!(props.css.get("text-decoration-style"), Some("double"));
        assert_eq!(props.css.get("text-decoration-color"), Some("#00FF00"));
        let props = run(r#"<w:u w:val="none"/>"#);
        assert_eq!(props.css.get("text-decoration-line"), Some("none"));
    }

    #[test]
    fn hanging_indent_is_negative() {
        let props = para(r#"<w:ind w:left="720" w:hanging="360"/>"#);
        assert_eq!(props.css.get("margin-left"), Some("48.00px"));
        assert_eq!(props.css.get("text-indent"), Some("-24.00px"));
        let props = para(r#"<w:ind w:start="720" w:firstLine="360"/>"#);
        assert_eq!(props.css.get("text-indent"), Some("24.00px"));
    }

    #[test]
    fn line_spacing_rules() {
        let props = para(r#"<w:spacing w:before="240" w:after="120" w:line="360" w:lineRule="auto"/>"#);
        assert_eq!(props.css.get("margin-top"), Some("16.00px"));
        assert_eq!(props.css.get("margin-bottom"), Some("8.00px"));
        assert_eq!(props.css.get("line-height"), Some("1.50"));

        let props = para(r#"<w:spacing w:line="200" w:lineRule="auto"/>"#);
        assert_eq!(props.css.get("line-height"), Some("1.00"));

        let props = para(r#"<w:spacing w:line="240" w:lineRule="exact"/>"#);
        assert_eq!(props.css.get("line-height"), Some("16.00px"));

        let props = para(r#"<w:spacing w:line="480" w:lineRule="atLeast"/>"#);
        assert_eq!(props.css.get("line-height"), None);

        let options = ParseOptions {
            force_line_height: Some("2".into()),
            ..Default::default()
        };
        let props = parse_with(&options, r#"<w:spacing w:line="360"/>"#, "pPr");
        assert_eq!(props.css.get("line-height"), Some("2"));
    }

    #[test]
    fn run_spacing_is_letter_spacing() {
        let props = run(r#"<w:spacing w:val="20"/>"#);
        assert_eq!(props.css.get("letter-spacing"), Some("1.33px"));
    }

    #[test]
    fn numbering_tabs_and_flags() {
        let props = para(
            r#"<w:pStyle w:val="ListParagraph"/><w:numPr><w:ilvl w:val="1"/><w:numId w:val="3"/></w:numPr>
               <w:tabs><w:tab w:val="right" w:pos="9360" w:leader="dot"/><w:tab w:val="clear" w:pos="720"/></w:tabs>
               <w:keepNext/><w:pageBreakBefore w:val="0"/><w:autoSpaceDE/><w:rPr><w:b/></w:rPr>"#,
        );
        assert_eq!(props.style_id.as_deref(), Some("ListParagraph"));
        assert_eq!(
            props.numbering,
            Some(NumberingRef {
                num_id: "3".into(),
                level: 1
            })
        );
        assert_eq!(props.tabs.len(), 1);
        assert_eq!(props.tabs[0].leader.as_deref(), Some("dot"));
        assert!(props.keep_next);
        assert!(!props.page_break_before);
        assert!(props.auto_space);
        assert_eq!(props.mark.unwrap().css.get("font-weight"), Some("bold"));
    }

    #[test]
    fn borders_and_shading() {
        let props = para(
            r#"<w:pBdr><w:bottom w:val="single" w:sz="8" w:space="1" w:color="auto"/><w:top w:val="nil"/></w:pBdr><w:shd w:val="clear" w:fill="D9E2F3"/>"#,
        );
        assert_eq!(props.css.get("border-bottom"), Some("1.33px solid black"));
        assert_eq!(props.css.get("border-top"), Some("none"));
        assert_eq!(props.css.get("padding-bottom"), Some("1.33px"));
        assert_eq!(props.css.get("background-color"), Some("#D9E2F3"));

        let props = run(r#"<w:shd w:val="pct25" w:color="000000" w:fill="FFFF00"/>"#);
        assert_eq!(props.css.get("background-color"), Some("#FFFF00"));
        assert_eq!(
            props.css.get("background-image"),
            Some("linear-gradient(rgba(0, 0, 0, 0.25), rgba(0, 0, 0, 0.25))")
        );
    }

    #[test]
    fn superscript_shrinks_font() {
        let props = run(r#"<w:sz w:val="24"/><w:vertAlign w:val="superscript"/>"#);
        assert_eq!(props.vert_align, Some(VertAlign::Superscript));
        assert_eq!(props.css.get("vertical-align"), Some("super"));
        assert_eq!(props.css.get("font-size"), Some("calc(16.00px * 0.65)"));
    }

    #[test]
    fn highlight_uses_word_palette() {
        let props = run(r#"<w:highlight w:val="darkYellow"/>"#);
        assert_eq!(props.css.get("background-color"), Some("#808000"));
    }

    #[test]
    fn text_effects_become_shadows() {
        let props = run(
            r#"<w14:glow xmlns:w14="http://schemas.microsoft.com/office/word/2010/wordml" w14:rad="63500"><w14:srgbClr w14:val="FF0000"/></w14:glow><w:shadow/>"#,
        );
        let shadow = props.css.get("text-shadow").unwrap();
        assert!(shadow.starts_with("0px 0px 6.67px "));
        assert!(shadow.ends_with("1px 1px 1px rgba(0, 0, 0, 0.5)"));
    }
}
