#![allow(dead_code)]

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;

pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const REL_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Builds minimal `.docx` packages in memory: a main document plus whichever
/// optional parts a test needs.
pub struct DocxBuilder {
    body: String,
    parts: Vec<Part>,
    title: Option<String>,
}

struct Part {
    path: String,
    content_type: String,
    rel_type: String,
    rel_id: String,
    xml: String,
}

impl DocxBuilder {
    pub fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            parts: Vec::new(),
            title: None,
        }
    }

    fn part(mut self, path: &str, content_type: &str, rel: &str, id: &str, xml: String) -> Self {
        self.parts.push(Part {
            path: path.to_string(),
            content_type: content_type.to_string(),
            rel_type: rel.to_string(),
            rel_id: id.to_string(),
            xml,
        });
        self
    }

    pub fn styles(self, inner: &str) -> Self {
        let xml = format!(r#"<w:styles xmlns:w="{W_NS}">{inner}</w:styles>"#);
        self.part(
            "word/styles.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
            "styles",
            "rIdStyles",
            xml,
        )
    }

    pub fn numbering(self, inner: &str) -> Self {
        let xml = format!(r#"<w:numbering xmlns:w="{W_NS}">{inner}</w:numbering>"#);
        self.part(
            "word/numbering.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml",
            "numbering",
            "rIdNumbering",
            xml,
        )
    }

    pub fn footnotes(self, inner: &str) -> Self {
        let xml = format!(r#"<w:footnotes xmlns:w="{W_NS}">{inner}</w:footnotes>"#);
        self.part(
            "word/footnotes.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.footnotes+xml",
            "footnotes",
            "rIdFootnotes",
            xml,
        )
    }

    /// A footer part, referenced from a `w:footerReference` as `rIdFooter1`.
    pub fn footer(self, inner: &str) -> Self {
        let xml = format!(r#"<w:ftr xmlns:w="{W_NS}" xmlns:r="{R_NS}">{inner}</w:ftr>"#);
        self.part(
            "word/footer1.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml",
            "footer",
            "rIdFooter1",
            xml,
        )
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn build(self) -> Vec<u8> {
        let options = SimpleFileOptions::default();
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let mut put = |name: &str, data: &str| {
            zip.start_file(name, options).unwrap();
            zip.write_all(data.as_bytes()).unwrap();
        };

        let mut overrides = String::from(
            r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
        );
        let mut rels = String::new();
        for part in &self.parts {
            overrides.push_str(&format!(
                r#"<Override PartName="/{}" ContentType="{}"/>"#,
                part.path, part.content_type
            ));
            rels.push_str(&format!(
                r#"<Relationship Id="{}" Type="{REL_BASE}/{}" Target="{}"/>"#,
                part.rel_id,
                part.rel_type,
                part.path.trim_start_matches("word/")
            ));
        }

        let mut package_rels = format!(
            r#"<Relationship Id="rId1" Type="{REL_BASE}/officeDocument" Target="word/document.xml"/>"#
        );
        if self.title.is_some() {
            overrides.push_str(r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#);
            package_rels.push_str(r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>"#);
        }

        put(
            "[Content_Types].xml",
            &format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/>{overrides}</Types>"#
            ),
        );
        put(
            "_rels/.rels",
            &format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{package_rels}</Relationships>"#
            ),
        );
        put(
            "word/document.xml",
            &format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="{W_NS}" xmlns:r="{R_NS}"><w:body>{}</w:body></w:document>"#,
                self.body
            ),
        );
        put(
            "word/_rels/document.xml.rels",
            &format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{rels}</Relationships>"#
            ),
        );
        for part in &self.parts {
            put(&part.path, &part.xml);
        }
        if let Some(title) = &self.title {
            put(
                "docProps/core.xml",
                &format!(
                    r#"<?xml version="1.0" encoding="UTF-8"?><cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/"><dc:title>{title}</dc:title></cp:coreProperties>"#
                ),
            );
        }
        zip.finish().unwrap().into_inner()
    }
}

/// A paragraph holding one plain run.
pub fn para(text: &str) -> String {
    format!(r#"<w:p><w:r><w:t xml:space="preserve">{text}</w:t></w:r></w:p>"#)
}

/// Every element of `root` with `tag`, in document order.
pub fn find_all<'a>(
    root: &'a docxide_html::html::dom::Element,
    tag: &str,
) -> Vec<&'a docxide_html::html::dom::Element> {
    let mut out = Vec::new();
    root.walk(&mut |e| {
        if e.tag == tag {
            out.push(e);
        }
    });
    out
}
