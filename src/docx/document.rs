use std::collections::HashMap;

use crate::model::{
    Block, BreakKind, Columns, Document, FieldCharKind, HeaderFooterKind, HeaderFooterRef,
    Hyperlink, Inline, Note, PageMargins, PageSize, Paragraph, Ruby, Run, RunContent, Section,
    SectionBreak, SectionProperties, SimpleField,
};
use crate::units::{attr_bool, dxa_to_px, parse_number, val_bool};
use crate::xml::XmlElement;

use super::{Parser, template_regex};

fn dxa_attr(el: &XmlElement, attr: &str) -> Option<f64> {
    el.attr(attr).and_then(parse_number).map(dxa_to_px)
}

fn header_footer_ref(el: &XmlElement) -> Option<HeaderFooterRef> {
    let kind = match el.attr("w:type").unwrap_or("default") {
        "first" => HeaderFooterKind::First,
        "even" => HeaderFooterKind::Even,
        _ => HeaderFooterKind::Default,
    };
    Some(HeaderFooterRef {
        kind,
        rel_id: el.attr("r:id")?.to_string(),
    })
}

impl Parser<'_> {
    pub fn parse_document(&self, root: &XmlElement) -> Document {
        let mut sections = Vec::new();
        let Some(body) = root.child("w:body") else {
            log::warn!("document has no w:body");
            return Document { sections };
        };

        let mut children = Vec::new();
        for el in body.elements() {
            match el.name.as_str() {
                "w:p" => {
                    let mut paragraph = self.parse_paragraph(el);
                    let section = paragraph.section.take();
                    children.push(Block::Paragraph(paragraph));
                    if let Some(properties) = section {
                        sections.push(Section {
                            properties,
                            children: std::mem::take(&mut children),
                        });
                    }
                }
                "w:tbl" => children.push(Block::Table(self.parse_table(el))),
                "w:sectPr" => sections.push(Section {
                    properties: self.parse_section_properties(el),
                    children: std::mem::take(&mut children),
                }),
                _ => self.skip_block(el),
            }
        }
        if !children.is_empty() {
            sections.push(Section {
                properties: SectionProperties::default(),
                children,
            });
        }
        Document { sections }
    }

    fn skip_block(&self, el: &XmlElement) {
        match el.name.as_str() {
            "w:bookmarkStart" | "w:bookmarkEnd" | "w:proofErr" | "w:permStart" | "w:permEnd"
            | "w:commentRangeStart" | "w:commentRangeEnd" | "w:tcPr" | "w:trPr" | "w:tblPr"
            | "w:tblGrid" | "w:footnotePr" | "w:endnotePr" => {}
            other => log::warn!("unsupported block element <{other}>"),
        }
    }

    /// Paragraphs and tables of a container (cell, note, header, text box).
    pub fn parse_blocks(&self, container: &XmlElement) -> Vec<Block> {
        let mut blocks = Vec::new();
        for el in container.elements() {
            match el.name.as_str() {
                "w:p" => blocks.push(Block::Paragraph(self.parse_paragraph(el))),
                "w:tbl" => blocks.push(Block::Table(self.parse_table(el))),
                _ => self.skip_block(el),
            }
        }
        blocks
    }

    pub fn parse_section_properties(&self, el: &XmlElement) -> SectionProperties {
        let mut props = SectionProperties::default();
        for child in el.elements() {
            match child.name.as_str() {
                "w:pgSz" => {
                    props.page_size = PageSize {
                        width: dxa_attr(child, "w:w"),
                        height: dxa_attr(child, "w:h"),
                        landscape: child.attr("w:orient") == Some("landscape"),
                    }
                }
                "w:pgMar" => {
                    props.page_margins = PageMargins {
                        top: dxa_attr(child, "w:top"),
                        right: dxa_attr(child, "w:right"),
                        bottom: dxa_attr(child, "w:bottom"),
                        left: dxa_attr(child, "w:left"),
                        header: dxa_attr(child, "w:header"),
                        footer: dxa_attr(child, "w:footer"),
                    }
                }
                "w:cols" => {
                    let count = child.attr("w:num").and_then(|n| n.parse().ok()).unwrap_or(1);
                    props.columns = Some(Columns {
                        count,
                        space: dxa_attr(child, "w:space"),
                        separator: attr_bool(child, "w:sep", false),
                        equal_width: attr_bool(child, "w:equalWidth", true),
                    });
                }
                "w:headerReference" => props.headers.extend(header_footer_ref(child)),
                "w:footerReference" => props.footers.extend(header_footer_ref(child)),
                "w:titlePg" => props.title_page = val_bool(child, true),
                "w:pgNumType" => {
                    props.page_number_start = child.attr("w:start").and_then(|s| s.parse().ok())
                }
                "w:type" => {
                    props.break_type = match child.val() {
                        Some("continuous") => SectionBreak::Continuous,
                        Some("evenPage") => SectionBreak::EvenPage,
                        Some("oddPage") => SectionBreak::OddPage,
                        Some("nextColumn") => SectionBreak::NextColumn,
                        _ => SectionBreak::NextPage,
                    }
                }
                "w:docGrid" | "w:lnNumType" | "w:vAlign" | "w:textDirection" | "w:formProt"
                | "w:rtlGutter" | "w:bidi" | "w:sectPrChange" | "w:paperSrc"
                | "w:printerSettings" | "w:pgBorders" | "w:noEndnote" | "w:footnotePr"
                | "w:endnotePr" => log::debug!("ignoring section property <{}>", child.name),
                other => log::warn!("unhandled section property <{other}>"),
            }
        }
        props
    }

    fn parse_paragraph(&self, el: &XmlElement) -> Paragraph {
        let mut paragraph = Paragraph::default();
        if let Some(ppr) = el.child("w:pPr") {
            let props = self.parse_properties(ppr);
            paragraph.style_id = props.style_id;
            paragraph.css = props.css;
            paragraph.mark_css = props.mark.map(|m| m.css).unwrap_or_default();
            paragraph.numbering = props.numbering;
            paragraph.tabs = props.tabs;
            paragraph.keep_next = props.keep_next;
            paragraph.keep_lines = props.keep_lines;
            paragraph.page_break_before = props.page_break_before;
            paragraph.auto_space = props.auto_space;
            paragraph.outline_level = props.outline_level;
            paragraph.section = ppr
                .child("w:sectPr")
                .map(|s| self.parse_section_properties(s));
        }
        if let Some(forced) = &self.options.force_line_height {
            paragraph.css.set("line-height", forced.clone());
        }
        self.parse_inlines(el, &mut paragraph.children);
        paragraph
    }

    fn parse_inlines(&self, parent: &XmlElement, out: &mut Vec<Inline>) {
        for el in parent.elements() {
            match el.name.as_str() {
                "w:r" => out.push(Inline::Run(self.parse_run(el))),
                "w:hyperlink" => out.push(Inline::Hyperlink(self.parse_hyperlink(el))),
                "w:fldSimple" => {
                    let mut children = Vec::new();
                    self.parse_inlines(el, &mut children);
                    out.push(Inline::SimpleField(SimpleField {
                        instruction: el.attr("w:instr").unwrap_or_default().trim().to_string(),
                        children,
                    }));
                }
                "w:bookmarkStart" => {
                    if let Some(name) = el.attr("w:name").filter(|n| *n != "_GoBack") {
                        out.push(Inline::BookmarkStart(name.to_string()));
                    }
                }
                "m:oMath" | "m:oMathPara" => {
                    let text: String = math_text(el);
                    if !text.is_empty() {
                        out.push(Inline::Math(text));
                    }
                }
                "w:pPr" | "w:bookmarkEnd" | "w:proofErr" | "w:permStart" | "w:permEnd"
                | "w:commentRangeStart" | "w:commentRangeEnd" | "w:lastRenderedPageBreak" => {}
                other => log::warn!("unsupported inline element <{other}>"),
            }
        }
    }

    fn parse_hyperlink(&self, el: &XmlElement) -> Hyperlink {
        let href = el.attr("r:id").and_then(|id| match self.rels.get(id) {
            Some(rel) => Some(rel.target.clone()),
            None => {
                log::warn!("hyperlink relationship {id} not found");
                None
            }
        });
        let mut children = Vec::new();
        self.parse_inlines(el, &mut children);
        Hyperlink {
            href,
            anchor: el.attr("w:anchor").map(str::to_string),
            tooltip: el.attr("w:tooltip").map(str::to_string),
            children,
        }
    }

    pub(crate) fn parse_run(&self, el: &XmlElement) -> Run {
        let props = self.run_properties(el.child("w:rPr"));
        let mut content = Vec::new();
        for child in el.elements() {
            match child.name.as_str() {
                "w:rPr" => {}
                "w:t" => self.push_text(&child.text(), &mut content),
                "w:tab" => content.push(RunContent::Tab),
                "w:ptab" => content.push(RunContent::PositionalTab {
                    alignment: child.attr("w:alignment").unwrap_or("left").to_string(),
                }),
                "w:br" => content.push(RunContent::Break(match child.attr("w:type") {
                    Some("page") => BreakKind::Page,
                    Some("column") => BreakKind::Column,
                    _ => BreakKind::Line,
                })),
                "w:cr" => content.push(RunContent::Break(BreakKind::Line)),
                "w:lastRenderedPageBreak" => content.push(RunContent::LastRenderedPageBreak),
                "w:sym" => {
                    let ch = child
                        .attr("w:char")
                        .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                        .and_then(char::from_u32);
                    match ch {
                        Some(ch) => content.push(RunContent::Symbol {
                            font: child.attr("w:font").map(str::to_string),
                            ch,
                        }),
                        None => log::warn!("w:sym without a valid w:char"),
                    }
                }
                "w:noBreakHyphen" => content.push(RunContent::NoBreakHyphen),
                "w:softHyphen" => content.push(RunContent::SoftHyphen),
                "w:fldChar" => {
                    let kind = match child.attr("w:fldCharType") {
                        Some("begin") => FieldCharKind::Begin,
                        Some("separate") => FieldCharKind::Separate,
                        Some("end") => FieldCharKind::End,
                        other => {
                            log::warn!("unknown fldCharType {other:?}");
                            continue;
                        }
                    };
                    content.push(RunContent::FieldChar(kind));
                }
                "w:instrText" => content.push(RunContent::InstrText(child.text())),
                "w:footnoteReference" => {
                    if let Some(id) = child.attr("w:id") {
                        content.push(RunContent::FootnoteReference(id.to_string()));
                    }
                }
                "w:endnoteReference" => {
                    if let Some(id) = child.attr("w:id") {
                        content.push(RunContent::EndnoteReference(id.to_string()));
                    }
                }
                "w:footnoteRef" | "w:endnoteRef" => content.push(RunContent::NoteMark),
                "w:drawing" => {
                    if let Some(drawing) = self.parse_drawing(child) {
                        content.push(RunContent::Drawing(drawing));
                    }
                }
                "w:pict" | "w:object" => {
                    if let Some(drawing) = self.parse_vml(child) {
                        content.push(RunContent::Drawing(drawing));
                    }
                }
                "w:ruby" => content.push(RunContent::Ruby(self.parse_ruby(child))),
                "w:delText" | "w:delInstrText" | "w:annotationRef" | "w:commentReference"
                | "w:separator" | "w:continuationSeparator" | "w:pgNum" | "w:dayShort"
                | "w:monthShort" | "w:yearShort" | "w:dayLong" | "w:monthLong" | "w:yearLong" => {
                    log::debug!("ignoring run content <{}>", child.name)
                }
                other => log::warn!("unsupported run content <{other}>"),
            }
        }
        Run { props, content }
    }

    /// Text, split around `{{expr}}` placeholders when variables are on.
    fn push_text(&self, text: &str, content: &mut Vec<RunContent>) {
        if !self.options.enable_var {
            content.push(RunContent::Text(text.to_string()));
            return;
        }
        let mut last = 0;
        for caps in template_regex().captures_iter(text) {
            let (Some(whole), Some(expr)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if whole.start() > last {
                content.push(RunContent::Text(text[last..whole.start()].to_string()));
            }
            content.push(RunContent::Variable(expr.as_str().trim().to_string()));
            last = whole.end();
        }
        if last < text.len() || text.is_empty() {
            content.push(RunContent::Text(text[last..].to_string()));
        }
    }

    fn parse_ruby(&self, el: &XmlElement) -> Ruby {
        let runs = |tag: &str| -> Vec<Run> {
            el.child(tag)
                .map(|c| c.children_named("w:r").map(|r| self.parse_run(r)).collect())
                .unwrap_or_default()
        };
        Ruby {
            base: runs("w:rubyBase"),
            text: runs("w:rt"),
        }
    }

    /// Footnotes or endnotes keyed by id; separator notes are skipped.
    pub fn parse_notes(&self, root: &XmlElement, element: &str) -> HashMap<String, Note> {
        root.children_named(element)
            .filter(|note| {
                !matches!(
                    note.attr("w:type"),
                    Some("separator" | "continuationSeparator" | "continuationNotice")
                )
            })
            .filter_map(|note| {
                let id = note.attr("w:id")?.to_string();
                Some((
                    id.clone(),
                    Note {
                        id,
                        children: self.parse_blocks(note),
                    },
                ))
            })
            .collect()
    }
}

fn math_text(el: &XmlElement) -> String {
    let mut out = String::new();
    collect_math(el, &mut out);
    out
}

fn collect_math(el: &XmlElement, out: &mut String) {
    for child in el.elements() {
        if child.is("m:t") {
            out.push_str(&child.text());
        } else {
            collect_math(child, out);
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

    fn parse(body: &str, options: &ParseOptions) -> Document {
        let root = xml::parse(
            "word/document.xml",
            &format!(
                r#"<w:document xmlns:w="{}" xmlns:r="{}" xmlns:m="http://schemas.openxmlformats.org/officeDocument/2006/math"><w:body>{body}</w:body></w:document>"#,
                xml::WML_NS,
                xml::REL_NS
            ),
        )
        .unwrap();
        let scheme = ColorScheme::default();
        let rels = Relationships::default();
        Parser {
            scheme: &scheme,
            options,
            rels: &rels,
        }
        .parse_document(&root)
    }

    fn first_paragraph(doc: &Document) -> &Paragraph {
        match &doc.sections[0].children[0] {
            Block::Paragraph(p) => p,
            Block::Table(_) => panic!("expected a paragraph"),
        }
    }

    #[test]
    fn sections_split_at_paragraph_section_properties() {
        let doc = parse(
            r#"<w:p><w:r><w:t>one</w:t></w:r></w:p>
               <w:p><w:pPr><w:sectPr><w:pgSz w:w="12240" w:h="15840"/><w:type w:val="continuous"/></w:sectPr></w:pPr></w:p>
               <w:p><w:r><w:t>two</w:t></w:r></w:p>
               <w:sectPr><w:pgSz w:w="15840" w:h="12240" w:orient="landscape"/><w:headerReference w:type="first" r:id="rId9"/><w:titlePg/></w:sectPr>"#,
            &ParseOptions::default(),
        );
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].children.len(), 2);
        let width = doc.sections[0].properties.page_size.width.unwrap();
        assert!((width - 816.0).abs() < 0.1);
        assert_eq!(doc.sections[0].properties.break_type, SectionBreak::Continuous);
        let last = &doc.sections[1].properties;
        assert!(last.page_size.landscape && last.title_page);
        assert_eq!(last.headers[0].kind, HeaderFooterKind::First);
        assert_eq!(last.headers[0].rel_id, "rId9");
    }

    #[test]
    fn variables_split_only_when_enabled() {
        let body = r#"<w:p><w:r><w:t xml:space="preserve">Dear {{ customer.name }}, hi</w:t></w:r></w:p>"#;
        let doc = parse(body, &ParseOptions::default());
        let Inline::Run(run) = &first_paragraph(&doc).children[0] else {
            panic!("expected a run");
        };
        assert_eq!(run.content.len(), 1);

        let options = ParseOptions {
            enable_var: true,
            ..Default::default()
        };
        let doc = parse(body, &options);
        let Inline::Run(run) = &first_paragraph(&doc).children[0] else {
            panic!("expected a run");
        };
        let parts: Vec<String> = run
            .content
            .iter()
            .map(|c| match c {
                RunContent::Text(t) => format!("T:{t}"),
                RunContent::Variable(v) => format!("V:{v}"),
                _ => "?".into(),
            })
            .collect();
        assert_eq!(parts, ["T:Dear ", "V:customer.name", "T:, hi"]);
    }

    #[test]
    fn run_content_kinds() {
        let doc = parse(
            r#"<w:p><w:r><w:tab/><w:br w:type="page"/><w:sym w:font="Wingdings" w:char="F0E0"/><w:noBreakHyphen/><w:fldChar w:fldCharType="begin"/><w:instrText> PAGE </w:instrText><w:footnoteReference w:id="2"/></w:r>
               <w:bookmarkStart w:id="0" w:name="intro"/><w:bookmarkStart w:id="1" w:name="_GoBack"/>
               <m:oMath><m:r><m:t>x</m:t></m:r><m:r><m:t>=1</m:t></m:r></m:oMath></w:p>"#,
            &ParseOptions::default(),
        );
        let p = first_paragraph(&doc);
        let Inline::Run(run) = &p.children[0] else {
            panic!("expected a run");
        };
        assert!(matches!(run.content[0], RunContent::Tab));
        assert!(matches!(run.content[1], RunContent::Break(BreakKind::Page)));
        assert!(matches!(run.content[2], RunContent::Symbol { ch: '\u{F0E0}', .. }));
        assert!(matches!(run.content[4], RunContent::FieldChar(FieldCharKind::Begin)));
        assert!(matches!(&run.content[6], RunContent::FootnoteReference(id) if id == "2"));
        assert!(matches!(&p.children[1], Inline::BookmarkStart(name) if name == "intro"));
        assert!(matches!(&p.children[2], Inline::Math(text) if text == "x=1"));
        assert_eq!(p.children.len(), 3);
    }
}
