pub mod color;
pub mod css;
pub mod docx;
mod error;
pub mod formula;
pub mod geometry;
pub mod html;
pub mod model;
pub mod options;
pub mod package;
pub mod units;
pub mod vars;
pub mod xml;

pub use docx::{CoreProperties, DocumentContext};
pub use error::{Error, Result};
pub use html::RenderedDocument;
pub use options::{ParseOptions, RenderOptions};
pub use vars::{PathEvaluator, Scope, VariableEvaluator};

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use model::Document;
use package::Package;
use xml::XmlElement;

struct Prepared {
    context: DocumentContext,
    document: Document,
}

/// A loaded `.docx` package. Parsed parts are kept between calls and only
/// reparsed when the parse-affecting options change.
pub struct Docx {
    package: Arc<Package>,
    prepared: Option<Prepared>,
    evaluator: Box<dyn VariableEvaluator>,
}

impl Docx {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            package: Arc::new(Package::from_bytes(bytes)?),
            prepared: None,
            evaluator: Box::new(PathEvaluator),
        })
    }

    pub fn open(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn with_evaluator(mut self, evaluator: impl VariableEvaluator + 'static) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    /// Parse the package for `options`, reusing the previous parse when the
    /// options are unchanged.
    pub fn init(&mut self, options: &ParseOptions) -> Result<&DocumentContext> {
        let stale = self
            .prepared
            .as_ref()
            .is_none_or(|p| p.context.options != *options);
        if stale {
            let t0 = Instant::now();
            let context = DocumentContext::load(Arc::clone(&self.package), options.clone())?;
            let document = context.parse_document()?;
            log::info!(
                "Parsed {} section(s), {} style(s) in {:.1}ms",
                document.sections.len(),
                context.styles.len(),
                t0.elapsed().as_secs_f64() * 1000.0
            );
            self.prepared = Some(Prepared { context, document });
        }
        match &self.prepared {
            Some(p) => Ok(&p.context),
            None => Err(Error::NotInitialized),
        }
    }

    pub fn render(&mut self, options: &RenderOptions) -> Result<RenderedDocument> {
        self.init(&options.parse_options())?;
        self.render_shared(options)
    }

    /// Render through a shared reference, so several renders of one parse
    /// can run at once. [`Docx::init`] must have been called with matching
    /// parse options.
    pub fn render_shared(&self, options: &RenderOptions) -> Result<RenderedDocument> {
        let prepared = self
            .prepared
            .as_ref()
            .filter(|p| p.context.options == options.parse_options())
            .ok_or(Error::NotInitialized)?;
        html::render(
            &prepared.context,
            &prepared.document,
            options,
            self.evaluator.as_ref(),
        )
    }

    /// The package re-zipped, with template variables in the main document
    /// replaced by their values when `enable_var` is on.
    pub fn download(&mut self, options: &RenderOptions) -> Result<Vec<u8>> {
        self.init(&options.parse_options())?;
        let Some(prepared) = &self.prepared else {
            return Err(Error::NotInitialized);
        };
        let context = &prepared.context;
        let mut root = context.document_xml()?;
        if options.enable_var {
            let doc_scope = html::core_scope(context);
            let scope = Scope::new().with_layer(&doc_scope).with_layer(&options.data);
            let replaced = substitute_variables(&mut root, &scope, self.evaluator.as_ref());
            log::debug!("substituted {replaced} template variable(s)");
        }
        context
            .package
            .generate_zip(&context.document_part, &xml::to_string(&root))
    }

    pub fn core_properties(&self) -> Option<&CoreProperties> {
        self.prepared.as_ref().map(|p| &p.context.core)
    }
}

/// Replace every `{{expr}}` inside `w:t` text. Undefined variables become
/// empty strings.
fn substitute_variables(
    el: &mut XmlElement,
    scope: &Scope,
    evaluator: &dyn VariableEvaluator,
) -> usize {
    if el.is("w:t") {
        let text = el.text();
        let mut count = 0;
        let replaced = docx::template_regex().replace_all(&text, |caps: &regex::Captures| {
            count += 1;
            evaluator.evaluate(&caps[1], scope).unwrap_or_default()
        });
        if count > 0 {
            let replaced = replaced.into_owned();
            el.set_text(replaced);
            el.set_attr("xml:space", "preserve");
        }
        return count;
    }
    el.elements_mut()
        .map(|child| substitute_variables(child, scope, evaluator))
        .sum()
}

pub fn convert_docx_to_html(input: &Path, output: &Path, options: &RenderOptions) -> Result<()> {
    let t0 = Instant::now();

    let mut docx = Docx::open(input)?;
    docx.init(&options.parse_options())?;
    let t_parse = t0.elapsed();

    let rendered = docx.render_shared(options)?;
    let title = docx
        .core_properties()
        .and_then(|c| c.title.clone())
        .or_else(|| input.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_default();
    let html = rendered.to_standalone_html(&title);
    let t_render = t0.elapsed();

    std::fs::write(output, &html)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: parse={:.1}ms, render={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes, {} pages)",
        t_parse.as_secs_f64() * 1000.0,
        (t_render - t_parse).as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        html.len(),
        rendered.pages(),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn substitutes_inside_text_nodes_only() {
        let mut root = xml::parse(
            "word/document.xml",
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>Dear {{name}}, {{missing}}!</w:t></w:r><w:r><w:instrText>{{name}}</w:instrText></w:r></w:p></w:body></w:document>"#,
        )
        .unwrap();
        let data = json!({"name": "Ada"});
        let scope = Scope::new().with_layer(&data);
        let count = substitute_variables(&mut root, &scope, &PathEvaluator);
        assert_eq!(count, 2);
        let t = root.find("w:t").unwrap();
        assert_eq!(t.text(), "Dear Ada, !");
        assert_eq!(t.attr("xml:space"), Some("preserve"));
        assert_eq!(root.find("w:instrText").unwrap().text(), "{{name}}");
    }
}
