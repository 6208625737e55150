//! HTML rendering of the parsed document: one `<section>` per page with
//! header, body, footnotes and footer, plus a generated stylesheet.

pub mod dom;
mod drawing;
mod layout;
mod paragraph;
mod stylesheet;
mod table;
mod text;

use std::collections::HashMap;
use std::time::Instant;

use indexmap::IndexMap;
use serde_json::{Value, json};

use crate::docx::{DocumentContext, NumberingCounters};
use crate::error::Result;
use crate::model::Document;
use crate::options::RenderOptions;
use crate::vars::{Scope, VariableEvaluator};

use dom::{Element, Node};

/// Rendered markup: the stylesheet and the root element holding the pages.
#[derive(Clone, Debug)]
pub struct RenderedDocument {
    prefix: String,
    stylesheet: String,
    root: Element,
    pages: usize,
    doc_scope: Value,
}

impl RenderedDocument {
    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn pages(&self) -> usize {
        self.pages
    }

    /// A fragment for embedding into a host page: `<style>` then the root.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(self.stylesheet.len() + 4096);
        out.push_str("<style>\n");
        out.push_str(&self.stylesheet);
        out.push_str("</style>\n");
        self.root.write_html(&mut out);
        out
    }

    pub fn to_standalone_html(&self, title: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\nbody {{ margin: 0; }}\n{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
            html_escape::encode_text(title),
            self.stylesheet,
            self.root.to_html()
        )
    }

    /// Re-evaluate every variable span against `data` without re-rendering.
    /// Returns the number of spans updated.
    pub fn update_variables(&mut self, data: &Value, evaluator: &dyn VariableEvaluator) -> usize {
        let scope = Scope::new().with_layer(&self.doc_scope).with_layer(data);
        let class = format!("{}-var", self.prefix);
        let mut updated = 0;
        self.root.walk_mut(&mut |el| {
            if !el.has_class(&class) {
                return;
            }
            let Some(expr) = el.attr("data-var") else {
                return;
            };
            let value = evaluator.evaluate(expr, &scope).unwrap_or_default();
            el.children = if value.is_empty() {
                Vec::new()
            } else {
                vec![Node::Text(value)]
            };
            updated += 1;
        });
        updated
    }
}

/// An open complex field (`w:fldChar` begin … end).
#[derive(Default)]
struct ComplexField {
    instruction: String,
    separated: bool,
    /// The cached result is replaced by a live page-number placeholder.
    replaced: bool,
}

#[derive(Clone)]
struct RenderedNote {
    number: usize,
    item: Element,
}

/// Per-render state, created fresh for every render call.
pub(crate) struct RenderContext<'a> {
    doc: &'a DocumentContext,
    options: &'a RenderOptions,
    prefix: &'a str,
    evaluator: &'a dyn VariableEvaluator,
    scope: Scope<'a>,
    counters: NumberingCounters,
    fields: Vec<ComplexField>,
    footnotes: IndexMap<String, RenderedNote>,
    endnotes: IndexMap<String, RenderedNote>,
    current_note: Option<usize>,
    images: HashMap<String, Option<String>>,
    /// Depth inside table cells, text boxes and notes, where page breaks do not apply.
    nesting: usize,
    in_text_box: bool,
    /// Left and top page margins of the section being rendered, px.
    margins: (f64, f64),
    rendered_breaks: bool,
}

impl<'a> RenderContext<'a> {
    fn new(
        doc: &'a DocumentContext,
        options: &'a RenderOptions,
        evaluator: &'a dyn VariableEvaluator,
        doc_scope: &'a Value,
    ) -> Self {
        Self {
            doc,
            options,
            prefix: &options.class_prefix,
            evaluator,
            scope: Scope::new().with_layer(doc_scope).with_layer(&options.data),
            counters: NumberingCounters::default(),
            fields: Vec::new(),
            footnotes: IndexMap::new(),
            endnotes: IndexMap::new(),
            current_note: None,
            images: HashMap::new(),
            nesting: 0,
            in_text_box: false,
            margins: (layout::DEFAULT_MARGIN, layout::DEFAULT_MARGIN),
            rendered_breaks: false,
        }
    }

    fn class(&self, suffix: &str) -> String {
        format!("{}-{suffix}", self.prefix)
    }

    /// Data URL of an image part, loaded once per render.
    fn image(&mut self, part: &str) -> Option<String> {
        if let Some(cached) = self.images.get(part) {
            return cached.clone();
        }
        let url = self.doc.image_data_url(part);
        if url.is_none() {
            log::warn!("image part {part} is missing");
        }
        self.images.insert(part.to_string(), url.clone());
        url
    }

    fn variable(&self, expr: &str) -> Element {
        let value = self.evaluator.evaluate(expr, &self.scope).unwrap_or_default();
        Element::new("span")
            .with_class(self.class("var"))
            .with_attr("data-var", expr)
            .with_text(value)
    }
}

pub(crate) fn core_scope(doc: &DocumentContext) -> Value {
    json!({ "doc": serde_json::to_value(&doc.core).unwrap_or_default() })
}

/// Render `document` with the parsed parts in `doc`. Only shared references
/// are taken, so one context can serve several renders at once.
pub fn render(
    doc: &DocumentContext,
    document: &Document,
    options: &RenderOptions,
    evaluator: &dyn VariableEvaluator,
) -> Result<RenderedDocument> {
    let started = Instant::now();
    let doc_scope = core_scope(doc);
    let mut ctx = RenderContext::new(doc, options, evaluator, &doc_scope);

    let mut sections = Vec::with_capacity(document.sections.len());
    for section in &document.sections {
        let geometry = layout::PageGeometry::of(&section.properties);
        ctx.margins = (geometry.left, geometry.top);
        sections.push(ctx.render_blocks(&section.children));
    }
    let pages = layout::paginate(&mut ctx, &document.sections, sections)?;
    let page_count = pages.len();

    let mut root = Element::new("div").with_class(ctx.class("root"));
    if options.page_wrap {
        root.add_class(ctx.class("wrapper"));
        root.style
            .set_opt("padding", options.page_wrap_padding.clone());
        root.style
            .set_opt("background", options.page_wrap_background.clone());
    }
    if let Some(scale) = zoom_factor(options, &document.sections) {
        root.style.set("transform", format!("scale({scale:.4})"));
        root.style.set("transform-origin", "top left");
    }
    for page in pages {
        root.push(page);
    }

    let stylesheet = stylesheet::build(doc, options);
    log::info!(
        "Rendered {page_count} page(s), {} footnote(s), {} endnote(s) in {:.1}ms",
        ctx.footnotes.len(),
        ctx.endnotes.len(),
        started.elapsed().as_secs_f64() * 1000.0
    );
    Ok(RenderedDocument {
        prefix: options.class_prefix.clone(),
        stylesheet,
        root,
        pages: page_count,
        doc_scope,
    })
}

/// `zoomFitWidth` scales the first page (plus wrapper padding) to the
/// container; otherwise the fixed `zoom`. `None` means no transform.
fn zoom_factor(options: &RenderOptions, sections: &[crate::model::Section]) -> Option<f64> {
    if options.zoom_fit_width
        && let Some(container) = options.container_width
    {
        let page = sections
            .first()
            .map(|s| layout::PageGeometry::of(&s.properties).width)
            .unwrap_or(layout::DEFAULT_PAGE_WIDTH);
        let chrome = if options.page_wrap {
            horizontal_padding(options.wrap_padding())
        } else {
            0.0
        };
        let scale = container / (page + chrome);
        return (scale.is_finite() && scale > 0.0 && (scale - 1.0).abs() > 1e-6).then_some(scale);
    }
    (options.zoom > 0.0 && (options.zoom - 1.0).abs() > 1e-6).then_some(options.zoom)
}

/// Left plus right padding of a CSS `padding` shorthand, in px. Components
/// that are not px lengths count as zero.
fn horizontal_padding(padding: &str) -> f64 {
    let parts: Vec<f64> = padding
        .split_whitespace()
        .map(|part| crate::units::px(part).unwrap_or(0.0))
        .collect();
    match parts.as_slice() {
        [all] => 2.0 * all,
        [_, x] | [_, x, _] => 2.0 * x,
        [_, right, _, left, ..] => right + left,
        [] => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_fit_width_uses_the_container() {
        let options = RenderOptions {
            zoom_fit_width: true,
            container_width: Some(438.0),
            page_wrap: true,
            ..Default::default()
        };
        let scale = zoom_factor(&options, &[]).unwrap();
        assert!((scale - 0.5).abs() < 1e-9);

        let options = RenderOptions::default();
        assert_eq!(zoom_factor(&options, &[]), None);
        let options = RenderOptions {
            zoom: 1.5,
            ..Default::default()
        };
        assert_eq!(zoom_factor(&options, &[]), Some(1.5));
    }

    #[test]
    fn zoom_fit_width_counts_the_wrapper_padding() {
        let options = RenderOptions {
            zoom_fit_width: true,
            container_width: Some(416.0),
            page_wrap_padding: Some("20px 0px".into()),
            ..Default::default()
        };
        let scale = zoom_factor(&options, &[]).unwrap();
        assert!((scale - 416.0 / 816.0).abs() < 1e-9);

        let options = RenderOptions {
            page_wrap_padding: Some("10px".into()),
            container_width: Some(418.0),
            ..options
        };
        let scale = zoom_factor(&options, &[]).unwrap();
        assert!((scale - 0.5).abs() < 1e-9);

        let options = RenderOptions {
            page_wrap: false,
            container_width: Some(408.0),
            ..options
        };
        let scale = zoom_factor(&options, &[]).unwrap();
        assert!((scale - 0.5).abs() < 1e-9);
    }

    #[test]
    fn padding_shorthand_sides() {
        assert_eq!(horizontal_padding("30px"), 60.0);
        assert_eq!(horizontal_padding("5px 12px"), 24.0);
        assert_eq!(horizontal_padding("1px 2px 3px"), 4.0);
        assert_eq!(horizontal_padding("1px 2px 3px 4px"), 6.0);
        assert_eq!(horizontal_padding("1em"), 0.0);
    }
}
