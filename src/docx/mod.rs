//! WordprocessingML parsing: package-level parts (relationships, settings,
//! theme, fonts, styles, numbering, notes) and the typed document body.

mod document;
mod drawing;
mod fonts;
mod numbering;
mod properties;
mod styles;
mod table;
mod theme;

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use base64::Engine;
use serde::Serialize;

use crate::color::{ColorScheme, slot_name};
use crate::error::{Error, Result};
use crate::model::{Document, HeaderFooter, Notes};
use crate::options::ParseOptions;
use crate::package::{Package, part_dir, rels_path, resolve_target};
use crate::units::{LengthUnit, convert_length, px, val_bool};
use crate::xml::{XmlElement, XmlNode};

pub use fonts::EmbeddedFont;
pub use numbering::{Level, LevelSuffix, Numbering, NumberingCounters, format_number, symbol_char};
pub use properties::Properties;
pub(crate) use properties::quote_font;
pub use styles::{ConditionalStyle, Style, StyleKind, StyleSheet, TableBand, class_name};
pub use theme::{Theme, ThemeFonts, parse_theme};

#[derive(Clone, Debug, PartialEq)]
pub struct Relationship {
    pub id: String,
    pub rel_type: String,
    pub target: String,
    pub external: bool,
    /// Package path of the target, or the raw URL for external targets.
    pub part: String,
}

#[derive(Clone, Debug, Default)]
pub struct Relationships(Vec<Relationship>);

impl Relationships {
    pub fn parse(root: &XmlElement, source_part: &str) -> Self {
        let base = part_dir(source_part);
        let rels = root
            .children_named("Relationship")
            .filter_map(|rel| {
                let id = rel.attr("Id")?;
                let target = rel.attr("Target")?;
                let external = rel.attr("TargetMode") == Some("External");
                let part = if external {
                    target.to_string()
                } else {
                    resolve_target(base, target)
                };
                Some(Relationship {
                    id: id.to_string(),
                    rel_type: rel.attr("Type").unwrap_or_default().to_string(),
                    target: target.to_string(),
                    external,
                    part,
                })
            })
            .collect();
        Self(rels)
    }

    /// Relationships of `source_part`; the package relationships for `""`.
    pub fn load(package: &Package, source_part: &str) -> Result<Self> {
        Ok(package
            .get_xml(&rels_path(source_part))?
            .map(|root| Self::parse(&root, source_part))
            .unwrap_or_default())
    }

    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.0.iter().find(|r| r.id == id)
    }

    /// First relationship whose type URI ends in `/{kind}`.
    pub fn by_type(&self, kind: &str) -> Option<&Relationship> {
        self.0
            .iter()
            .find(|r| r.rel_type.rsplit('/').next() == Some(kind))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.0.iter()
    }
}

/// `[Content_Types].xml`.
#[derive(Clone, Debug, Default)]
pub struct ContentTypes {
    overrides: Vec<(String, String)>,
    defaults: HashMap<String, String>,
}

impl ContentTypes {
    pub fn parse(root: &XmlElement) -> Self {
        let mut types = Self::default();
        for el in root.elements() {
            match (el.local_name(), el.attr("ContentType")) {
                ("Override", Some(ct)) => {
                    if let Some(part) = el.attr("PartName") {
                        types
                            .overrides
                            .push((part.trim_start_matches('/').to_string(), ct.to_string()));
                    }
                }
                ("Default", Some(ct)) => {
                    if let Some(ext) = el.attr("Extension") {
                        types.defaults.insert(ext.to_ascii_lowercase(), ct.to_string());
                    }
                }
                _ => {}
            }
        }
        types
    }

    /// First part whose content type ends with `suffix`.
    pub fn part_with(&self, suffix: &str) -> Option<&str> {
        self.overrides
            .iter()
            .find(|(_, ct)| ct.ends_with(suffix))
            .map(|(part, _)| part.as_str())
    }

    pub fn content_type(&self, part: &str) -> Option<&str> {
        let part = part.trim_start_matches('/');
        if let Some((_, ct)) = self
            .overrides
            .iter()
            .find(|(p, _)| p.eq_ignore_ascii_case(part))
        {
            return Some(ct);
        }
        let ext = part.rsplit_once('.')?.1.to_ascii_lowercase();
        self.defaults.get(&ext).map(String::as_str)
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    /// px
    pub default_tab_stop: f64,
    pub even_and_odd_headers: bool,
    pub auto_hyphenation: bool,
    /// `w:clrSchemeMapping`, keyed and valued by scheme slot names.
    pub color_mapping: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_tab_stop: 48.0,
            even_and_odd_headers: false,
            auto_hyphenation: false,
            color_mapping: HashMap::new(),
        }
    }
}

pub fn parse_settings(root: &XmlElement) -> Settings {
    let mut settings = Settings::default();
    for el in root.elements() {
        match el.name.as_str() {
            "w:defaultTabStop" => {
                if let Some(tab) = convert_length(el.val(), LengthUnit::Dxa).as_deref().and_then(px)
                    && tab > 0.0
                {
                    settings.default_tab_stop = tab;
                }
            }
            "w:evenAndOddHeaders" => settings.even_and_odd_headers = val_bool(el, true),
            "w:autoHyphenation" => settings.auto_hyphenation = val_bool(el, true),
            "w:clrSchemeMapping" => {
                for (name, value) in &el.attributes {
                    let Some(slot) = name.strip_prefix("w:") else {
                        continue;
                    };
                    settings
                        .color_mapping
                        .insert(slot_name(slot).to_string(), slot_name(value).to_string());
                }
            }
            _ => {}
        }
    }
    settings
}

/// `docProps/core.xml`, exposed to variables as `doc`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreProperties {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub keywords: Option<String>,
    pub description: Option<String>,
    pub last_modified_by: Option<String>,
    pub revision: Option<String>,
    pub created: Option<String>,
    pub modified: Option<String>,
    pub category: Option<String>,
}

pub fn parse_core_properties(root: &XmlElement) -> CoreProperties {
    let mut core = CoreProperties::default();
    for el in root.elements() {
        let text = el.text().trim().to_string();
        if text.is_empty() {
            continue;
        }
        let slot = match el.local_name() {
            "title" => &mut core.title,
            "subject" => &mut core.subject,
            "creator" => &mut core.creator,
            "keywords" => &mut core.keywords,
            "description" => &mut core.description,
            "lastModifiedBy" => &mut core.last_modified_by,
            "revision" => &mut core.revision,
            "created" => &mut core.created,
            "modified" => &mut core.modified,
            "category" => &mut core.category,
            _ => continue,
        };
        *slot = Some(text);
    }
    core
}

/// Shared state of the property and content parsers: theme colors for
/// color resolution, the options that affect parsing, and the relationships
/// of the part being parsed.
#[derive(Clone, Copy)]
pub struct Parser<'a> {
    pub scheme: &'a ColorScheme,
    pub options: &'a ParseOptions,
    pub rels: &'a Relationships,
}

const SUPPORTED_EXTENSIONS: &[&str] = &["wps", "wpg", "wp14", "w14", "w15", "a14", "v", "o"];

/// Flatten wrappers that carry no rendering of their own: content controls,
/// smart tags, custom XML, tracked insertions. Tracked deletions are dropped,
/// and `mc:AlternateContent` is replaced by the first choice we understand.
pub fn merge_sdt(el: &mut XmlElement) {
    let children = std::mem::take(&mut el.children);
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        splice(child, &mut out);
    }
    el.children = out;
    for child in el.elements_mut() {
        merge_sdt(child);
    }
}

fn splice(node: XmlNode, out: &mut Vec<XmlNode>) {
    let XmlNode::Element(el) = node else {
        out.push(node);
        return;
    };
    match el.name.as_str() {
        "w:sdt" => {
            for content in el.elements().filter(|c| c.is("w:sdtContent")) {
                for child in &content.children {
                    splice(child.clone(), out);
                }
            }
        }
        "w:smartTag" | "w:customXml" | "w:ins" | "w:moveTo" | "w:dir" | "w:bdo" => {
            for child in el.children {
                match &child {
                    XmlNode::Element(c) if c.local_name().ends_with("Pr") => {}
                    _ => splice(child, out),
                }
            }
        }
        "w:del" | "w:moveFrom" | "w:moveFromRangeStart" | "w:moveFromRangeEnd" => {}
        "mc:AlternateContent" => {
            let choice = el.elements().find(|c| {
                c.is("mc:Choice")
                    && c.attr("Requires").is_some_and(|req| {
                        req.split_whitespace()
                            .all(|ns| SUPPORTED_EXTENSIONS.contains(&ns))
                    })
            });
            let chosen = choice.or_else(|| el.child("mc:Fallback"));
            if let Some(chosen) = chosen {
                for child in &chosen.children {
                    splice(child.clone(), out);
                }
            }
        }
        _ => out.push(XmlNode::Element(el)),
    }
}

fn plain_text_run(el: &XmlElement) -> bool {
    if !el.is("w:r") {
        return false;
    }
    let mut texts = 0;
    for child in el.elements() {
        match child.name.as_str() {
            "w:rPr" => {}
            "w:t" => texts += 1,
            _ => return false,
        }
    }
    texts == 1
}

impl Parser<'_> {
    /// Join adjacent runs that hold nothing but text and format identically,
    /// so placeholders split by the editor become one text node again.
    pub fn merge_runs(&self, el: &mut XmlElement) {
        let children = std::mem::take(&mut el.children);
        let mut merged: Vec<XmlNode> = Vec::with_capacity(children.len());
        for child in children {
            if let XmlNode::Element(run) = &child
                && plain_text_run(run)
                && let Some(XmlNode::Element(prev)) = merged.last_mut()
                && plain_text_run(prev)
                && self.run_properties(prev.child("w:rPr"))
                    == self.run_properties(run.child("w:rPr"))
            {
                let text = run.child("w:t").map(XmlElement::text).unwrap_or_default();
                if let Some(t) = prev.elements_mut().find(|c| c.is("w:t")) {
                    let joined = t.text() + &text;
                    t.set_text(joined);
                    t.set_attr("xml:space", "preserve");
                }
                continue;
            }
            merged.push(child);
        }
        el.children = merged;
        for child in el.elements_mut() {
            self.merge_runs(child);
        }
    }
}

/// Everything parsed once per document and shared by every render.
pub struct DocumentContext {
    pub package: Arc<Package>,
    pub options: ParseOptions,
    pub content_types: ContentTypes,
    pub document_part: String,
    pub package_rels: Relationships,
    pub document_rels: Relationships,
    pub core: CoreProperties,
    pub settings: Settings,
    pub theme: Theme,
    pub scheme: ColorScheme,
    pub fonts: Vec<EmbeddedFont>,
    pub styles: StyleSheet,
    pub numbering: Numbering,
    pub notes: Notes,
}

impl DocumentContext {
    /// Load the package-level parts in dependency order: content types,
    /// relationships, settings, theme, font table, styles, numbering, notes.
    pub fn load(package: Arc<Package>, options: ParseOptions) -> Result<Self> {
        let started = Instant::now();

        let content_types = match package.get_xml("[Content_Types].xml")? {
            Some(root) => ContentTypes::parse(&root),
            None => {
                log::warn!("package has no [Content_Types].xml");
                ContentTypes::default()
            }
        };

        let package_rels = Relationships::load(&package, "")?;
        let document_part = package_rels
            .by_type("officeDocument")
            .map(|r| r.part.clone())
            .or_else(|| content_types.part_with("main+xml").map(str::to_string))
            .unwrap_or_else(|| "word/document.xml".to_string());
        if !package.file_exists(&document_part) {
            return Err(Error::InvalidDocx(format!(
                "main document part {document_part} is missing"
            )));
        }
        let document_rels = Relationships::load(&package, &document_part)?;

        let core = match package_rels.by_type("core-properties") {
            Some(rel) => package
                .get_xml(&rel.part)?
                .map(|root| parse_core_properties(&root))
                .unwrap_or_default(),
            None => CoreProperties::default(),
        };

        let locate = |kind: &str, content_type: &str| {
            document_rels
                .by_type(kind)
                .map(|r| r.part.clone())
                .or_else(|| content_types.part_with(content_type).map(str::to_string))
                .filter(|part| package.file_exists(part))
        };

        let settings = match locate("settings", "wordprocessingml.settings+xml") {
            Some(part) => package
                .get_xml(&part)?
                .map(|root| parse_settings(&root))
                .unwrap_or_default(),
            None => Settings::default(),
        };

        let theme = match locate("theme", "theme+xml") {
            Some(part) => package
                .get_xml(&part)?
                .map(|root| parse_theme(&root))
                .unwrap_or_default(),
            None => Theme::default(),
        };
        let scheme = theme.color_scheme(&settings.color_mapping);

        let fonts = match locate("fontTable", "wordprocessingml.fontTable+xml") {
            Some(part) => fonts::load_embedded_fonts(&package, &part)?,
            None => Vec::new(),
        };

        let parser = Parser {
            scheme: &scheme,
            options: &options,
            rels: &document_rels,
        };
        let styles = match locate("styles", "wordprocessingml.styles+xml") {
            Some(part) => package
                .get_xml(&part)?
                .map(|root| StyleSheet::parse(&parser, &root))
                .unwrap_or_default(),
            None => StyleSheet::default(),
        };

        let numbering = match locate("numbering", "wordprocessingml.numbering+xml") {
            Some(part) => {
                let rels = Relationships::load(&package, &part)?;
                let parser = Parser { rels: &rels, ..parser };
                package
                    .get_xml(&part)?
                    .map(|root| Numbering::parse(&parser, &root, &styles))
                    .unwrap_or_default()
            }
            None => Numbering::default(),
        };

        let mut notes = Notes::default();
        for (kind, content_type, element) in [
            ("footnotes", "wordprocessingml.footnotes+xml", "w:footnote"),
            ("endnotes", "wordprocessingml.endnotes+xml", "w:endnote"),
        ] {
            let Some(part) = locate(kind, content_type) else {
                continue;
            };
            let Some(mut root) = package.get_xml(&part)? else {
                continue;
            };
            let rels = Relationships::load(&package, &part)?;
            let parser = Parser { rels: &rels, ..parser };
            merge_sdt(&mut root);
            parser.merge_runs(&mut root);
            let parsed = parser.parse_notes(&root, element);
            if element == "w:footnote" {
                notes.footnotes = parsed;
            } else {
                notes.endnotes = parsed;
            }
        }

        log::info!(
            "Loaded {document_part}: {} styles, {} embedded fonts, {} footnotes, {} endnotes in {:.1}ms",
            styles.len(),
            fonts.len(),
            notes.footnotes.len(),
            notes.endnotes.len(),
            started.elapsed().as_secs_f64() * 1000.0
        );

        Ok(Self {
            package,
            options,
            content_types,
            document_part,
            package_rels,
            document_rels,
            core,
            settings,
            theme,
            scheme,
            fonts,
            styles,
            numbering,
            notes,
        })
    }

    pub fn parser<'a>(&'a self, rels: &'a Relationships) -> Parser<'a> {
        Parser {
            scheme: &self.scheme,
            options: &self.options,
            rels,
        }
    }

    /// The main document part, with wrappers flattened. Runs are merged only
    /// when templating is on, so the run structure is otherwise untouched.
    pub fn document_xml(&self) -> Result<XmlElement> {
        let mut root = self.package.get_xml(&self.document_part)?.ok_or_else(|| {
            Error::InvalidDocx(format!("main document part {} is missing", self.document_part))
        })?;
        merge_sdt(&mut root);
        if self.options.enable_var {
            self.parser(&self.document_rels).merge_runs(&mut root);
        }
        Ok(root)
    }

    pub fn parse_document(&self) -> Result<Document> {
        let root = self.document_xml()?;
        Ok(self.parser(&self.document_rels).parse_document(&root))
    }

    /// Parse the header or footer part a section references by `rel_id`.
    pub fn header_footer(&self, rel_id: &str) -> Result<Option<HeaderFooter>> {
        let Some(rel) = self.document_rels.get(rel_id) else {
            log::warn!("header/footer relationship {rel_id} not found");
            return Ok(None);
        };
        let Some(mut root) = self.package.get_xml(&rel.part)? else {
            log::warn!("header/footer part {} is missing", rel.part);
            return Ok(None);
        };
        let rels = Relationships::load(&self.package, &rel.part)?;
        let parser = self.parser(&rels);
        merge_sdt(&mut root);
        if self.options.enable_var {
            parser.merge_runs(&mut root);
        }
        Ok(Some(HeaderFooter {
            part: rel.part.clone(),
            children: parser.parse_blocks(&root),
        }))
    }

    /// Inline an image part as a `data:` URL.
    pub fn image_data_url(&self, part: &str) -> Option<String> {
        let data = self.package.get_file(part)?;
        let mime = self
            .content_types
            .content_type(part)
            .filter(|ct| ct.starts_with("image/"))
            .map(str::to_string)
            .unwrap_or_else(|| mime_from_extension(part).to_string());
        Some(format!(
            "data:{mime};base64,{}",
            base64::engine::general_purpose::STANDARD.encode(data)
        ))
    }
}

fn mime_from_extension(part: &str) -> &'static str {
    let ext = part
        .rsplit_once('.')
        .map(|(_, e)| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" | "jpe" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "emf" => "image/x-emf",
        "wmf" => "image/x-wmf",
        _ => "application/octet-stream",
    }
}

static TEMPLATE: OnceLock<regex::Regex> = OnceLock::new();

/// `{{expr}}` placeholders in run text.
pub(crate) fn template_regex() -> &'static regex::Regex {
    TEMPLATE.get_or_init(|| regex::Regex::new(r"\{\{([^{}]*)\}\}").expect("static regex"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml;

    fn body(inner: &str) -> XmlElement {
        let text = format!(
            r#"<w:document xmlns:w="{}" xmlns:mc="http://schemas.openxmlformats.org/markup-compatibility/2006"><w:body>{inner}</w:body></w:document>"#,
            xml::WML_NS
        );
        xml::parse("word/document.xml", &text).unwrap()
    }

    #[test]
    fn sdt_and_revisions_are_flattened() {
        let mut root = body(
            r#"<w:sdt><w:sdtPr><w:alias w:val="x"/></w:sdtPr><w:sdtContent><w:p><w:ins><w:r><w:t>kept</w:t></w:r></w:ins><w:del><w:r><w:delText>gone</w:delText></w:r></w:del></w:p></w:sdtContent></w:sdt>"#,
        );
        merge_sdt(&mut root);
        let body = root.child("w:body").unwrap();
        let p = body.child("w:p").unwrap();
        assert_eq!(p.elements().count(), 1);
        assert_eq!(p.text(), "kept");
        assert!(body.find("w:sdtPr").is_none());
    }

    #[test]
    fn alternate_content_prefers_supported_choice() {
        let mut root = body(
            r#"<w:p><w:r><mc:AlternateContent><mc:Choice Requires="wps"><w:t>choice</w:t></mc:Choice><mc:Fallback><w:t>fallback</w:t></mc:Fallback></mc:AlternateContent></w:r></w:p>"#,
        );
        merge_sdt(&mut root);
        assert_eq!(root.find("w:r").unwrap().text(), "choice");

        let mut root = body(
            r#"<w:p><w:r><mc:AlternateContent><mc:Choice Requires="w16se"><w:t>choice</w:t></mc:Choice><mc:Fallback><w:t>fallback</w:t></mc:Fallback></mc:AlternateContent></w:r></w:p>"#,
        );
        merge_sdt(&mut root);
        assert_eq!(root.find("w:r").unwrap().text(), "fallback");
    }

    #[test]
    fn equal_runs_merge() {
        let mut root = body(
            r#"<w:p><w:r><w:rPr><w:b/></w:rPr><w:t>{{na</w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>me}}</w:t></w:r><w:r><w:t> plain</w:t></w:r></w:p>"#,
        );
        let scheme = ColorScheme::default();
        let options = ParseOptions::default();
        let rels = Relationships::default();
        let parser = Parser {
            scheme: &scheme,
            options: &options,
            rels: &rels,
        };
        parser.merge_runs(&mut root);
        let p = root.find("w:p").unwrap();
        let runs: Vec<_> = p.children_named("w:r").collect();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text(), "{{name}}");
        assert_eq!(runs[0].child("w:t").unwrap().attr("xml:space"), Some("preserve"));
    }

    #[test]
    fn relationships_resolve_against_source_dir() {
        let root = xml::parse(
            "word/_rels/document.xml.rels",
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
                <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
                <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="https://example.com" TargetMode="External"/>
            </Relationships>"#,
        )
        .unwrap();
        let rels = Relationships::parse(&root, "word/document.xml");
        assert_eq!(rels.by_type("styles").unwrap().part, "word/styles.xml");
        let link = rels.get("rId2").unwrap();
        assert!(link.external);
        assert_eq!(link.part, "https://example.com");
    }

    #[test]
    fn settings_mapping_uses_slot_names() {
        let root = xml::parse(
            "word/settings.xml",
            &format!(
                r#"<w:settings xmlns:w="{}"><w:defaultTabStop w:val="720"/><w:evenAndOddHeaders/><w:clrSchemeMapping w:bg1="light1" w:t1="dark1" w:hyperlink="hyperlink"/></w:settings>"#,
                xml::WML_NS
            ),
        )
        .unwrap();
        let settings = parse_settings(&root);
        assert_eq!(settings.default_tab_stop, 48.0);
        assert!(settings.even_and_odd_headers);
        assert_eq!(settings.color_mapping["bg1"], "lt1");
        assert_eq!(settings.color_mapping["hlink"], "hlink");
    }
}
