mod common;

use common::{DocxBuilder, para};
use docxide_html::{Docx, RenderOptions};
use rayon::prelude::*;
use serde_json::json;

#[test]
fn one_parse_serves_parallel_renders() {
    let body: String = (0..40).map(|i| para(&format!("Paragraph {i} for {{{{who}}}}"))).collect();
    let bytes = DocxBuilder::new(&body).build();
    let base = RenderOptions {
        enable_var: true,
        ..Default::default()
    };
    let mut docx = Docx::from_bytes(&bytes).unwrap();
    docx.init(&base.parse_options()).unwrap();

    let names: Vec<String> = (0..16).map(|i| format!("reader{i}")).collect();
    let outputs: Vec<(String, String)> = names
        .par_iter()
        .map(|name| {
            let options = RenderOptions {
                data: json!({ "who": name }),
                ..base.clone()
            };
            let rendered = docx.render_shared(&options).unwrap();
            (name.clone(), rendered.root().text_content())
        })
        .collect();

    for (name, text) in &outputs {
        assert!(text.contains(&format!("Paragraph 0 for {name}")));
        assert!(text.contains(&format!("Paragraph 39 for {name}")));
    }
}

#[test]
fn rendering_is_deterministic() {
    let body = format!(
        r#"{}<w:p><w:r><w:drawing><wp:inline xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing"><wp:extent cx="914400" cy="457200"/><a:graphic xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"><a:graphicData uri="http://schemas.microsoft.com/office/word/2010/wordprocessingShape"><wps:wsp xmlns:wps="http://schemas.microsoft.com/office/word/2010/wordprocessingShape"><wps:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="914400" cy="457200"/></a:xfrm><a:prstGeom prst="roundRect"><a:avLst/></a:prstGeom><a:solidFill><a:srgbClr val="FF0000"/></a:solidFill></wps:spPr></wps:wsp></a:graphicData></a:graphic></wp:inline></w:drawing></w:r></w:p>"#,
        para("shape below")
    );
    let bytes = DocxBuilder::new(&body).build();
    let mut docx = Docx::from_bytes(&bytes).unwrap();
    let first = docx.render(&RenderOptions::default()).unwrap().to_html();
    let second = docx.render(&RenderOptions::default()).unwrap().to_html();
    assert_eq!(first, second);
    assert!(first.contains("<svg"), "{first}");
    assert!(first.contains("fill=\"#ff0000\"") || first.contains("fill=\"#FF0000\""));
}
