//! `word/styles.xml`: document defaults and the style cascade, flattened so
//! every style carries its inherited properties.

use indexmap::IndexMap;

use crate::css::Css;
use crate::model::{NumberingRef, VertAlign};
use crate::units::attr_bool;
use crate::xml::XmlElement;

use super::Parser;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleKind {
    Paragraph,
    Character,
    Table,
    Numbering,
}

/// Conditional formatting regions of a table style (`w:tblStylePr/@w:type`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableBand {
    WholeTable,
    Band1Vert,
    Band2Vert,
    Band1Horz,
    Band2Horz,
    FirstCol,
    LastCol,
    FirstRow,
    LastRow,
    NeCell,
    NwCell,
    SeCell,
    SwCell,
}

impl TableBand {
    pub fn parse(value: &str) -> Option<Self> {
        Some(match value {
            "wholeTable" => TableBand::WholeTable,
            "band1Vert" => TableBand::Band1Vert,
            "band2Vert" => TableBand::Band2Vert,
            "band1Horz" => TableBand::Band1Horz,
            "band2Horz" => TableBand::Band2Horz,
            "firstCol" => TableBand::FirstCol,
            "lastCol" => TableBand::LastCol,
            "firstRow" => TableBand::FirstRow,
            "lastRow" => TableBand::LastRow,
            "neCell" => TableBand::NeCell,
            "nwCell" => TableBand::NwCell,
            "seCell" => TableBand::SeCell,
            "swCell" => TableBand::SwCell,
            _ => return None,
        })
    }

    /// Class carried by the cells in this region.
    pub fn cell_class(self) -> Option<&'static str> {
        Some(match self {
            TableBand::WholeTable => return None,
            TableBand::Band1Vert => "band1Vert",
            TableBand::Band2Vert => "band2Vert",
            TableBand::Band1Horz => "band1Horz",
            TableBand::Band2Horz => "band2Horz",
            TableBand::FirstCol => "firstCol",
            TableBand::LastCol => "lastCol",
            TableBand::FirstRow => "firstRow",
            TableBand::LastRow => "lastRow",
            TableBand::NeCell => "neCell",
            TableBand::NwCell => "nwCell",
            TableBand::SeCell => "seCell",
            TableBand::SwCell => "swCell",
        })
    }

    /// `w:tblLook` switches that must be on (as table classes) for the
    /// region to apply.
    pub fn enabled_by(self) -> &'static [&'static str] {
        match self {
            TableBand::WholeTable => &[],
            TableBand::Band1Vert | TableBand::Band2Vert => &["enable-vBand"],
            TableBand::Band1Horz | TableBand::Band2Horz => &["enable-hBand"],
            TableBand::FirstCol => &["enable-firstCol"],
            TableBand::LastCol => &["enable-lastCol"],
            TableBand::FirstRow => &["enable-firstRow"],
            TableBand::LastRow => &["enable-lastRow"],
            TableBand::NeCell => &["enable-firstRow", "enable-lastCol"],
            TableBand::NwCell => &["enable-firstRow", "enable-firstCol"],
            TableBand::SeCell => &["enable-lastRow", "enable-lastCol"],
            TableBand::SwCell => &["enable-lastRow", "enable-firstCol"],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConditionalStyle {
    pub paragraph: Css,
    pub run: Css,
    pub table: Css,
    pub cell: Css,
    pub row: Css,
}

impl ConditionalStyle {
    fn inherit(&mut self, base: &ConditionalStyle) {
        for (own, inherited) in [
            (&mut self.paragraph, &base.paragraph),
            (&mut self.run, &base.run),
            (&mut self.table, &base.table),
            (&mut self.cell, &base.cell),
            (&mut self.row, &base.row),
        ] {
            own.fill_from(inherited);
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub id: String,
    pub name: Option<String>,
    pub kind: StyleKind,
    pub based_on: Option<String>,
    pub linked: Option<String>,
    pub is_default: bool,
    pub paragraph: Css,
    pub run: Css,
    pub table: Css,
    /// Cell defaults from `w:tblPr` (margins, inside borders) and `w:tcPr`.
    pub cell: Css,
    pub row: Css,
    pub numbering: Option<NumberingRef>,
    pub vert_align: Option<VertAlign>,
    pub row_band_size: Option<u32>,
    pub col_band_size: Option<u32>,
    pub conditional: IndexMap<TableBand, ConditionalStyle>,
}

impl Style {
    fn inherit(&mut self, base: &Style) {
        for (own, inherited) in [
            (&mut self.paragraph, &base.paragraph),
            (&mut self.run, &base.run),
            (&mut self.table, &base.table),
            (&mut self.cell, &base.cell),
            (&mut self.row, &base.row),
        ] {
            own.fill_from(inherited);
        }
        if self.numbering.is_none() {
            self.numbering = base.numbering.clone();
        }
        self.vert_align = self.vert_align.or(base.vert_align);
        self.row_band_size = self.row_band_size.or(base.row_band_size);
        self.col_band_size = self.col_band_size.or(base.col_band_size);
        for (band, inherited) in &base.conditional {
            self.conditional
                .entry(*band)
                .or_default()
                .inherit(inherited);
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct StyleSheet {
    /// `w:docDefaults/w:rPrDefault`.
    pub default_run: Css,
    /// `w:docDefaults/w:pPrDefault`.
    pub default_paragraph: Css,
    styles: IndexMap<String, Style>,
}

/// Class name of a style: `{prefix}_{id}`, with anything outside
/// `[A-Za-z0-9_-]` replaced.
pub fn class_name(prefix: &str, style_id: &str) -> String {
    let escaped: String = style_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '-' })
        .collect();
    format!("{prefix}_{escaped}")
}

impl StyleSheet {
    pub fn parse(parser: &Parser, root: &XmlElement) -> Self {
        let mut sheet = StyleSheet::default();
        if let Some(defaults) = root.child("w:docDefaults") {
            if let Some(rpr) = defaults.child("w:rPrDefault").and_then(|d| d.child("w:rPr")) {
                sheet.default_run = parser.parse_properties(rpr).css;
            }
            if let Some(ppr) = defaults.child("w:pPrDefault").and_then(|d| d.child("w:pPr")) {
                sheet.default_paragraph = parser.parse_properties(ppr).css;
            }
        }

        let mut raw: IndexMap<String, Style> = IndexMap::new();
        for el in root.children_named("w:style") {
            if let Some(style) = parse_style(parser, el) {
                raw.insert(style.id.clone(), style);
            }
        }
        break_cycles(&mut raw);

        for id in raw.keys() {
            let mut chain = vec![id.as_str()];
            while let Some(base) = chain
                .last()
                .and_then(|id| raw.get(*id))
                .and_then(|s| s.based_on.as_deref())
            {
                chain.push(base);
            }
            let Some(mut resolved) = raw.get(id).cloned() else {
                continue;
            };
            for ancestor in chain.iter().skip(1) {
                if let Some(base) = raw.get(*ancestor) {
                    resolved.inherit(base);
                }
            }
            sheet.styles.insert(id.clone(), resolved);
        }
        sheet
    }

    pub fn get(&self, id: &str) -> Option<&Style> {
        self.styles.get(id)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Style> {
        self.styles.values()
    }

    pub fn default_style(&self, kind: StyleKind) -> Option<&Style> {
        self.styles.values().find(|s| s.kind == kind && s.is_default)
    }

    /// Classes an element using `style_id` gets: its base style's class
    /// (when there is one) followed by its own.
    pub fn class_names(&self, prefix: &str, style_id: &str) -> Vec<String> {
        let mut classes = Vec::with_capacity(2);
        if let Some(base) = self.get(style_id).and_then(|s| s.based_on.as_deref()) {
            classes.push(class_name(prefix, base));
        }
        classes.push(class_name(prefix, style_id));
        classes
    }
}

fn parse_style(parser: &Parser, el: &XmlElement) -> Option<Style> {
    let id = el.attr("w:styleId")?.to_string();
    let kind = match el.attr("w:type").unwrap_or("paragraph") {
        "paragraph" => StyleKind::Paragraph,
        "character" => StyleKind::Character,
        "table" => StyleKind::Table,
        "numbering" => StyleKind::Numbering,
        other => {
            log::warn!("style {id} has unknown type {other:?}");
            return None;
        }
    };
    let mut style = Style {
        id,
        name: el.child_val("w:name").map(str::to_string),
        kind,
        based_on: el.child_val("w:basedOn").map(str::to_string),
        linked: el.child_val("w:link").map(str::to_string),
        is_default: attr_bool(el, "w:default", false),
        paragraph: Css::new(),
        run: Css::new(),
        table: Css::new(),
        cell: Css::new(),
        row: Css::new(),
        numbering: None,
        vert_align: None,
        row_band_size: None,
        col_band_size: None,
        conditional: IndexMap::new(),
    };

    for child in el.elements() {
        match child.name.as_str() {
            "w:pPr" => {
                let props = parser.parse_properties(child);
                style.paragraph = props.css;
                style.numbering = props.numbering;
            }
            "w:rPr" => {
                let props = parser.parse_properties(child);
                style.run = props.css;
                style.vert_align = props.vert_align;
            }
            "w:tblPr" => {
                let props = parser.parse_table_properties(child);
                style.table = props.css;
                style.cell.fill_from(&props.cell_css);
                style.row_band_size = props.row_band_size;
                style.col_band_size = props.col_band_size;
            }
            "w:trPr" => style.row = parser.parse_row_properties(child).0,
            "w:tcPr" => style.cell.extend(&parser.parse_cell_properties(child)),
            "w:tblStylePr" => {
                let Some(band) = child.attr("w:type").and_then(TableBand::parse) else {
                    log::warn!("style {} has unknown conditional type {:?}", style.id, child.attr("w:type"));
                    continue;
                };
                style.conditional.insert(band, parse_conditional(parser, child));
            }
            "w:name" | "w:basedOn" | "w:link" | "w:next" | "w:uiPriority" | "w:qFormat"
            | "w:semiHidden" | "w:unhideWhenUsed" | "w:rsid" | "w:locked" | "w:autoRedefine"
            | "w:hidden" | "w:personal" | "w:personalCompose" | "w:personalReply"
            | "w:aliases" => {}
            other => log::warn!("unhandled style element <{other}> in {}", style.id),
        }
    }
    Some(style)
}

fn parse_conditional(parser: &Parser, el: &XmlElement) -> ConditionalStyle {
    let mut conditional = ConditionalStyle::default();
    for child in el.elements() {
        match child.name.as_str() {
            "w:pPr" => conditional.paragraph = parser.parse_properties(child).css,
            "w:rPr" => conditional.run = parser.parse_properties(child).css,
            "w:tblPr" => {
                let props = parser.parse_table_properties(child);
                conditional.table = props.css;
                conditional.cell.fill_from(&props.cell_css);
            }
            "w:trPr" => conditional.row = parser.parse_row_properties(child).0,
            "w:tcPr" => conditional.cell.extend(&parser.parse_cell_properties(child)),
            other => log::warn!("unhandled conditional style element <{other}>"),
        }
    }
    conditional
}

/// Drop `w:basedOn` links that point nowhere or close a loop.
fn break_cycles(styles: &mut IndexMap<String, Style>) {
    let ids: Vec<String> = styles.keys().cloned().collect();
    for id in ids {
        let mut seen = vec![id.clone()];
        let mut current = id;
        loop {
            let Some(base) = styles.get(&current).and_then(|s| s.based_on.clone()) else {
                break;
            };
            if seen.contains(&base) || !styles.contains_key(&base) {
                if seen.contains(&base) {
                    log::warn!("style {current} closes a basedOn cycle through {base}");
                } else {
                    log::warn!("style {current} is based on missing style {base}");
                }
                if let Some(style) = styles.get_mut(&current) {
                    style.based_on = None;
                }
                break;
            }
            seen.push(base.clone());
            current = base;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorScheme;
    use crate::docx::Relationships;
    use crate::options::ParseOptions;
    use crate::xml;

    fn sheet(inner: &str) -> StyleSheet {
        let root = xml::parse("styles", &format!(r#"<w:styles xmlns:w="{}">{inner}</w:styles>"#, xml::WML_NS)).unwrap();
        let scheme = ColorScheme::default();
        let options = ParseOptions::default();
        let rels = Relationships::default();
        let parser = Parser {
            scheme: &scheme,
            options: &options,
            rels: &rels,
        };
        StyleSheet::parse(&parser, &root)
    }

    #[test]
    fn inheritance_fills_from_base() {
        let styles = sheet(
            r#"<w:docDefaults><w:rPrDefault><w:rPr><w:sz w:val="22"/></w:rPr></w:rPrDefault></w:docDefaults>
            <w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:rPr><w:color w:val="333333"/></w:rPr></w:style>
            <w:style w:type="paragraph" w:styleId="Heading1"><w:basedOn w:val="Normal"/><w:pPr><w:keepNext/><w:numPr><w:numId w:val="4"/></w:numPr></w:pPr><w:rPr><w:b/></w:rPr></w:style>
            <w:style w:type="paragraph" w:styleId="Title"><w:basedOn w:val="Heading1"/><w:rPr><w:b w:val="0"/></w:rPr></w:style>"#,
        );
        assert_eq!(styles.default_run.get("font-size"), Some("14.67px"));
        let title = styles.get("Title").unwrap();
        assert_eq!(title.run.get("font-weight"), Some("normal"));
        assert_eq!(title.run.get("color"), Some("#333333"));
        assert_eq!(title.numbering.as_ref().unwrap().num_id, "4");
        assert_eq!(styles.default_style(StyleKind::Paragraph).unwrap().id, "Normal");
        assert_eq!(styles.class_names("docx", "Heading1"), ["docx_Normal", "docx_Heading1"]);
    }

    #[test]
    fn cycles_are_broken() {
        let styles = sheet(
            r#"<w:style w:type="paragraph" w:styleId="A"><w:basedOn w:val="B"/><w:rPr><w:b/></w:rPr></w:style>
            <w:style w:type="paragraph" w:styleId="B"><w:basedOn w:val="A"/><w:rPr><w:i/></w:rPr></w:style>
            <w:style w:type="paragraph" w:styleId="C"><w:basedOn w:val="Missing"/></w:style>"#,
        );
        assert_eq!(styles.len(), 3);
        let a = styles.get("A").unwrap();
        assert_eq!(a.run.get("font-style"), Some("italic"));
        assert!(styles.get("B").unwrap().based_on.is_none());
        assert!(styles.get("C").unwrap().based_on.is_none());
    }

    #[test]
    fn table_style_conditionals() {
        let styles = sheet(
            r#"<w:style w:type="table" w:styleId="Grid"><w:tblPr><w:tblStyleRowBandSize w:val="2"/><w:tblCellMar><w:left w:w="108" w:type="dxa"/></w:tblCellMar></w:tblPr>
                <w:tblStylePr w:type="firstRow"><w:rPr><w:b/></w:rPr><w:tcPr><w:shd w:val="clear" w:fill="4472C4"/></w:tcPr></w:tblStylePr>
                <w:tblStylePr w:type="bogus"/></w:style>"#,
        );
        let grid = styles.get("Grid").unwrap();
        assert_eq!(grid.row_band_size, Some(2));
        assert_eq!(grid.cell.get("padding-left"), Some("7.20px"));
        let first = &grid.conditional[&TableBand::FirstRow];
        assert_eq!(first.run.get("font-weight"), Some("bold"));
        assert_eq!(first.cell.get("background-color"), Some("#4472C4"));
        assert_eq!(grid.conditional.len(), 1);
    }

    #[test]
    fn class_names_are_sanitized() {
        assert_eq!(class_name("docx", "Heading 1"), "docx_Heading-1");
    }
}
