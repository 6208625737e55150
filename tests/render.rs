mod common;

use common::{DocxBuilder, find_all, para};
use docxide_html::html::dom::Element;
use docxide_html::{Docx, PathEvaluator, RenderOptions};
use serde_json::json;

fn render(bytes: &[u8], options: &RenderOptions) -> docxide_html::RenderedDocument {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut docx = Docx::from_bytes(bytes).expect("open package");
    docx.render(options).expect("render")
}

fn spans_with_text<'a>(root: &'a Element, text: &str) -> Vec<&'a Element> {
    find_all(root, "span")
        .into_iter()
        .filter(|s| s.text_content() == text)
        .collect()
}

#[test]
fn bold_run_becomes_bold_span() {
    let bytes = DocxBuilder::new(r#"<w:p><w:r><w:rPr><w:b/></w:rPr><w:t>Hello</w:t></w:r></w:p>"#).build();
    let rendered = render(&bytes, &RenderOptions::default());
    let spans = spans_with_text(rendered.root(), "Hello");
    assert!(
        spans.iter().any(|s| s.style.get("font-weight") == Some("bold")),
        "{}",
        rendered.root().to_html()
    );
    assert_eq!(rendered.pages(), 1);
    assert!(rendered.to_html().starts_with("<style>"));
}

#[test]
fn half_point_sizes_convert_to_pixels() {
    let bytes = DocxBuilder::new(r#"<w:p><w:r><w:rPr><w:sz w:val="24"/></w:rPr><w:t>Sized</w:t></w:r></w:p>"#).build();
    let rendered = render(&bytes, &RenderOptions::default());
    let spans = spans_with_text(rendered.root(), "Sized");
    assert!(spans.iter().any(|s| s.style.get("font-size") == Some("16.00px")));
}

#[test]
fn table_look_enables_first_row_region() {
    let row = "<w:tr><w:tc><w:p/></w:tc><w:tc><w:p/></w:tc></w:tr>";
    let body = format!(
        r#"<w:tbl><w:tblPr><w:tblLook w:val="0020"/></w:tblPr><w:tblGrid><w:gridCol w:w="2000"/><w:gridCol w:w="2000"/></w:tblGrid>{row}{row}</w:tbl>"#
    );
    let rendered = render(&DocxBuilder::new(&body).build(), &RenderOptions::default());
    let tables = find_all(rendered.root(), "table");
    assert_eq!(tables.len(), 1);
    assert!(tables[0].has_class("enable-firstRow"));
    let cells = find_all(rendered.root(), "td");
    assert_eq!(cells.len(), 4);
    assert!(cells[0].has_class("firstRow") && cells[1].has_class("firstRow"));
    assert!(!cells[2].has_class("firstRow"));
    assert_eq!(find_all(rendered.root(), "col").len(), 2);
}

#[test]
fn vertical_merges_become_rowspans() {
    let cell = "<w:tc><w:p/></w:tc>";
    let restart = r#"<w:tc><w:tcPr><w:vMerge w:val="restart"/></w:tcPr><w:p/></w:tc>"#;
    let cont = "<w:tc><w:tcPr><w:vMerge/></w:tcPr><w:p/></w:tc>";
    let body = format!(
        r#"<w:tbl><w:tblGrid><w:gridCol w:w="1000"/><w:gridCol w:w="1000"/><w:gridCol w:w="1000"/></w:tblGrid><w:tr>{restart}{cell}{cell}</w:tr><w:tr>{cont}{cell}{cell}</w:tr><w:tr>{cell}{cell}{cell}</w:tr></w:tbl>"#
    );
    let rendered = render(&DocxBuilder::new(&body).build(), &RenderOptions::default());
    let cells = find_all(rendered.root(), "td");
    assert_eq!(cells.len(), 8);
    assert_eq!(cells[0].attr("rowspan"), Some("2"));
    assert!(cells[1..].iter().all(|c| c.attr("rowspan").is_none()));
}

#[test]
fn numbered_paragraphs_count_up() {
    let numbering = r#"<w:abstractNum w:abstractNumId="0"><w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="decimal"/><w:lvlText w:val="%1."/></w:lvl></w:abstractNum><w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>"#;
    let item = |text: &str| {
        format!(r#"<w:p><w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr></w:pPr><w:r><w:t>{text}</w:t></w:r></w:p>"#)
    };
    let body = format!("{}{}{}", item("first"), item("second"), item("third"));
    let bytes = DocxBuilder::new(&body).numbering(numbering).build();
    let rendered = render(&bytes, &RenderOptions::default());
    let labels: Vec<String> = find_all(rendered.root(), "span")
        .into_iter()
        .filter(|s| s.has_class("docx-num"))
        .map(|s| s.text_content())
        .collect();
    assert_eq!(labels, ["1.\t", "2.\t", "3.\t"]);
}

#[test]
fn page_breaks_start_new_pages_with_numbered_footers() {
    let body = format!(
        r#"{}<w:p><w:r><w:br w:type="page"/></w:r></w:p>{}<w:sectPr><w:footerReference w:type="default" r:id="rIdFooter1"/></w:sectPr>"#,
        para("one"),
        para("two")
    );
    let bytes = DocxBuilder::new(&body)
        .footer(r#"<w:p><w:fldSimple w:instr=" PAGE "><w:r><w:t>9</w:t></w:r></w:fldSimple></w:p>"#)
        .build();
    let rendered = render(&bytes, &RenderOptions::default());
    assert_eq!(rendered.pages(), 2);
    let footers: Vec<String> = find_all(rendered.root(), "footer")
        .into_iter()
        .map(|f| f.text_content())
        .collect();
    assert_eq!(footers, ["1", "2"]);
    let pages = find_all(rendered.root(), "section");
    assert!(pages[0].text_content().contains("one"));
    assert!(pages[1].text_content().contains("two"));
}

#[test]
fn continuous_rendering_keeps_one_section() {
    let body = format!(r#"{}<w:p><w:r><w:br w:type="page"/></w:r></w:p>{}"#, para("one"), para("two"));
    let options = RenderOptions {
        page: false,
        ..Default::default()
    };
    let rendered = render(&DocxBuilder::new(&body).build(), &options);
    assert_eq!(rendered.pages(), 1);
}

#[test]
fn long_documents_are_split_by_estimated_height() {
    let body: String = (0..200).map(|i| para(&format!("Line {i}"))).collect();
    let rendered = render(&DocxBuilder::new(&body).build(), &RenderOptions::default());
    assert!(rendered.pages() > 1, "expected several pages, got {}", rendered.pages());
    let text = rendered.root().text_content();
    assert!(text.contains("Line 0") && text.contains("Line 199"));
}

#[test]
fn footnotes_render_at_the_bottom_of_their_page() {
    let body = r#"<w:p><w:r><w:t>See</w:t></w:r><w:r><w:footnoteReference w:id="1"/></w:r></w:p>"#;
    let notes = r#"<w:footnote w:type="separator" w:id="-1"><w:p><w:r><w:separator/></w:r></w:p></w:footnote><w:footnote w:id="1"><w:p><w:r><w:footnoteRef/></w:r><w:r><w:t xml:space="preserve"> A note.</w:t></w:r></w:p></w:footnote>"#;
    let bytes = DocxBuilder::new(body).footnotes(notes).build();
    let rendered = render(&bytes, &RenderOptions::default());

    let refs: Vec<&Element> = find_all(rendered.root(), "a")
        .into_iter()
        .filter(|a| a.has_class("docx-footnote-ref"))
        .collect();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].text_content(), "1");
    assert_eq!(refs[0].attr("href"), Some("#docx-footnote-1"));

    let lists: Vec<&Element> = find_all(rendered.root(), "ol")
        .into_iter()
        .filter(|ol| ol.has_class("docx-footnotes"))
        .collect();
    assert_eq!(lists.len(), 1);
    assert!(lists[0].text_content().contains("A note."));
    assert_eq!(find_all(lists[0], "li")[0].attr("id"), Some("docx-footnote-1"));
}

#[test]
fn variables_render_and_update_in_place() {
    let body = format!("{}{}", para("Hello {{name}}!"), para("{{doc.title}} {{missing}}"));
    let bytes = DocxBuilder::new(&body).title("Report").build();
    let options = RenderOptions {
        enable_var: true,
        data: json!({"name": "Ada"}),
        ..Default::default()
    };
    let mut rendered = render(&bytes, &options);
    let text = rendered.root().text_content();
    assert!(text.contains("Hello Ada!"), "{text}");
    assert!(text.contains("Report"));

    let updated = rendered.update_variables(&json!({"name": "Grace"}), &PathEvaluator);
    assert_eq!(updated, 3);
    let text = rendered.root().text_content();
    assert!(text.contains("Hello Grace!"));
    assert!(text.contains("Report"));
}

#[test]
fn download_substitutes_variables_into_the_package() {
    let bytes = DocxBuilder::new(&para("Dear {{name}},")).build();
    let options = RenderOptions {
        enable_var: true,
        data: json!({"name": "Ada"}),
        ..Default::default()
    };
    let mut docx = Docx::from_bytes(&bytes).unwrap();
    let downloaded = docx.download(&options).unwrap();

    let rendered = render(&downloaded, &RenderOptions::default());
    let text = rendered.root().text_content();
    assert!(text.contains("Dear Ada,"), "{text}");
    assert!(!text.contains("{{"));
}

fn downloaded_document_xml(bytes: &[u8], options: &RenderOptions) -> String {
    use std::io::Read;

    let mut docx = Docx::from_bytes(bytes).unwrap();
    let downloaded = docx.download(options).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(downloaded)).unwrap();
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

#[test]
fn download_keeps_runs_apart_without_templating() {
    let bytes = DocxBuilder::new(r#"<w:p><w:r><w:t>Hel</w:t></w:r><w:r><w:t>lo</w:t></w:r></w:p>"#).build();

    let xml = downloaded_document_xml(&bytes, &RenderOptions::default());
    assert_eq!(xml.matches("<w:r>").count(), 2, "{xml}");

    let options = RenderOptions {
        enable_var: true,
        ..Default::default()
    };
    let xml = downloaded_document_xml(&bytes, &options);
    assert_eq!(xml.matches("<w:r>").count(), 1, "{xml}");
    assert!(xml.contains("Hello"));
}

#[test]
fn options_change_triggers_reparse() {
    let bytes = DocxBuilder::new(&para("{{x}}")).build();
    let mut docx = Docx::from_bytes(&bytes).unwrap();
    let plain = docx.render(&RenderOptions::default()).unwrap();
    assert!(plain.root().text_content().contains("{{x}}"));
    let vars = RenderOptions {
        enable_var: true,
        data: json!({"x": 42}),
        ..Default::default()
    };
    let rendered = docx.render(&vars).unwrap();
    assert!(rendered.root().text_content().contains("42"));
    assert!(docx.render_shared(&RenderOptions::default()).is_err());
}

#[test]
fn class_prefix_applies_everywhere() {
    let options = RenderOptions {
        class_prefix: "word".into(),
        ..Default::default()
    };
    let rendered = render(&DocxBuilder::new(&para("x")).build(), &options);
    assert!(rendered.root().has_class("word-root"));
    assert!(rendered.stylesheet().contains(".word-root"));
    assert!(!rendered.to_html().contains("docx-"));
}
