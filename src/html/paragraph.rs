use crate::docx::{LevelSuffix, StyleKind, quote_font, symbol_char};
use crate::model::{
    Block, BreakKind, FieldCharKind, Inline, NumberingRef, Paragraph, Run, RunContent,
};

use super::dom::Element;
use super::{ComplexField, RenderContext, RenderedNote, text};

/// Fields whose result depends on the page the text lands on.
fn page_field(instruction: &str) -> Option<&'static str> {
    let name = instruction.split_whitespace().next()?;
    if name.eq_ignore_ascii_case("PAGE") {
        Some("PAGE")
    } else if name.eq_ignore_ascii_case("NUMPAGES") {
        Some("NUMPAGES")
    } else {
        None
    }
}

impl RenderContext<'_> {
    pub(super) fn render_blocks(&mut self, blocks: &[Block]) -> Vec<Element> {
        blocks
            .iter()
            .map(|block| match block {
                Block::Paragraph(p) => self.render_paragraph(p),
                Block::Table(t) => self.render_table(t),
            })
            .collect()
    }

    fn render_paragraph(&mut self, p: &Paragraph) -> Element {
        let doc = self.doc;
        let mut el = Element::new(if self.in_text_box { "div" } else { "p" });
        let style_id = p.style_id.as_deref().or_else(|| {
            doc.styles
                .default_style(StyleKind::Paragraph)
                .map(|s| s.id.as_str())
        });
        if let Some(id) = style_id {
            for class in doc.styles.class_names(self.prefix, id) {
                el.add_class(class);
            }
        }
        el.style = p.css.clone();
        if p.keep_next {
            el.style.set("break-after", "avoid");
        }
        if p.keep_lines {
            el.style.set("break-inside", "avoid");
        }
        if p.page_break_before && self.nesting == 0 {
            el.style.set("break-before", "page");
        }
        if let Some(level) = p.outline_level.filter(|l| *l < 9) {
            el.set_attr("role", "heading");
            el.set_attr("aria-level", (level + 1).to_string());
        }

        let numbering = p.numbering.clone().or_else(|| {
            style_id
                .and_then(|id| doc.styles.get(id))
                .and_then(|s| s.numbering.clone())
        });
        if let Some(num) = numbering.filter(|n| n.num_id != "0") {
            self.render_list_label(&num, p, &mut el);
        }

        self.render_inlines(&p.children, &mut el);
        if p.auto_space {
            text::autospace(&mut el);
        }
        el
    }

    fn render_list_label(&mut self, num: &NumberingRef, p: &Paragraph, el: &mut Element) {
        let doc = self.doc;
        let Some(level) = doc.numbering.level(&num.num_id, num.level) else {
            log::warn!("numbering {} has no level {}", num.num_id, num.level);
            return;
        };
        let Some(label_text) = self.counters.next(&doc.numbering, &num.num_id, num.level) else {
            return;
        };
        el.style.fill_from(&level.paragraph);

        let mut label = Element::new("span").with_class(self.class("num"));
        label.style = level.run.clone();
        label.style.fill_from(&p.mark_css);
        let picture = level.picture.as_deref().and_then(|part| self.image(part));
        if let Some(src) = picture {
            let mut img = Element::new("img").with_attr("src", src).with_attr("alt", "");
            img.style.set("height", "0.8em");
            label.push(img);
        } else if level.format == "bullet" {
            match level.font.as_deref() {
                Some(font) if self.options.bullet_use_font => {
                    label.style.set("font-family", quote_font(font));
                    label.push_text(label_text);
                }
                _ => label.push_text(label_text.chars().map(symbol_char).collect::<String>()),
            }
        } else {
            label.push_text(label_text);
        }
        match level.suffix {
            LevelSuffix::Tab => label.push(self.tab()),
            LevelSuffix::Space => label.push_text(" "),
            LevelSuffix::Nothing => {}
        }
        el.push(label);
    }

    fn tab(&self) -> Element {
        Element::new("span").with_class(self.class("tab")).with_text("\t")
    }

    fn field_placeholder(&self, field: &str) -> Element {
        Element::new("span")
            .with_class(self.class("field"))
            .with_attr("data-field", field)
    }

    fn render_inlines(&mut self, inlines: &[Inline], parent: &mut Element) {
        for inline in inlines {
            match inline {
                Inline::Run(run) => self.render_run(run, parent),
                Inline::Hyperlink(link) => {
                    let mut a = Element::new("a");
                    match (&link.href, &link.anchor) {
                        (Some(href), Some(anchor)) => a.set_attr("href", format!("{href}#{anchor}")),
                        (Some(href), None) => a.set_attr("href", href.as_str()),
                        (None, Some(anchor)) => a.set_attr("href", format!("#{anchor}")),
                        (None, None) => {}
                    }
                    if let Some(tooltip) = &link.tooltip {
                        a.set_attr("title", tooltip.as_str());
                    }
                    self.render_inlines(&link.children, &mut a);
                    parent.push(a);
                }
                Inline::SimpleField(field) => match page_field(&field.instruction) {
                    Some(name) => parent.push(self.field_placeholder(name)),
                    None => self.render_inlines(&field.children, parent),
                },
                Inline::BookmarkStart(name) => {
                    parent.push(Element::new("span").with_attr("id", name.as_str()));
                }
                Inline::Math(source) => {
                    parent.push(
                        Element::new("span")
                            .with_class(self.class("math"))
                            .with_text(source.as_str()),
                    );
                }
            }
        }
    }

    /// Whether content at this point belongs to a field instruction or to a
    /// cached result that was replaced.
    fn inside_hidden_field(&self) -> bool {
        self.fields.iter().any(|f| !f.separated || f.replaced)
    }

    fn render_run(&mut self, run: &Run, parent: &mut Element) {
        let mut span = Element::new("span");
        if let Some(id) = &run.props.style_id {
            for class in self.doc.styles.class_names(self.prefix, id) {
                span.add_class(class);
            }
        }
        span.style = run.props.css.clone();

        for content in &run.content {
            match content {
                RunContent::FieldChar(FieldCharKind::Begin) => self.fields.push(ComplexField::default()),
                RunContent::FieldChar(FieldCharKind::Separate) => {
                    if let Some(field) = self.fields.last_mut() {
                        field.separated = true;
                        if let Some(name) = page_field(&field.instruction) {
                            field.replaced = true;
                            span.push(self.field_placeholder(name));
                        }
                    }
                }
                RunContent::FieldChar(FieldCharKind::End) => {
                    if let Some(field) = self.fields.pop()
                        && !field.separated
                        && let Some(name) = page_field(&field.instruction)
                    {
                        span.push(self.field_placeholder(name));
                    }
                }
                RunContent::InstrText(text) => {
                    if let Some(field) = self.fields.last_mut()
                        && !field.separated
                    {
                        field.instruction.push_str(text);
                    }
                }
                _ if self.inside_hidden_field() => {}
                RunContent::Text(text) => span.push_text(text.as_str()),
                RunContent::Variable(expr) => span.push(self.variable(expr)),
                RunContent::Tab | RunContent::PositionalTab { .. } => span.push(self.tab()),
                RunContent::Break(BreakKind::Line) => span.push(Element::new("br")),
                RunContent::Break(BreakKind::Page) => {
                    if self.nesting == 0 {
                        span.push(Element::new("span").with_class(self.class("page-break")));
                    } else {
                        span.push(Element::new("br"));
                    }
                }
                RunContent::Break(BreakKind::Column) => {
                    span.push(Element::new("span").with_class(self.class("column-break")))
                }
                RunContent::LastRenderedPageBreak => {
                    if self.nesting == 0 && self.options.page {
                        self.rendered_breaks = true;
                        span.push(Element::new("span").with_class(self.class("rendered-break")));
                    }
                }
                RunContent::Symbol { font, ch } => {
                    let mut sym = Element::new("span").with_text(symbol_char(*ch).to_string());
                    if let Some(font) = font {
                        sym.style.set("font-family", quote_font(font));
                    }
                    span.push(sym);
                }
                RunContent::NoBreakHyphen => span.push_text("\u{2011}"),
                RunContent::SoftHyphen => span.push_text("\u{00AD}"),
                RunContent::FootnoteReference(id) => span.push(self.note_reference(id, false)),
                RunContent::EndnoteReference(id) => span.push(self.note_reference(id, true)),
                RunContent::NoteMark => {
                    if let Some(number) = self.current_note {
                        span.push_text(number.to_string());
                    }
                }
                RunContent::Drawing(drawing) => span.push(self.render_drawing(drawing)),
                RunContent::Ruby(ruby) => {
                    let mut el = Element::new("ruby");
                    for base in &ruby.base {
                        self.render_run(base, &mut el);
                    }
                    let mut rt = Element::new("rt");
                    for annotation in &ruby.text {
                        self.render_run(annotation, &mut rt);
                    }
                    el.push(rt);
                    span.push(el);
                }
            }
        }
        if !span.children.is_empty() {
            parent.push(span);
        }
    }

    /// The reference mark, rendering the note itself the first time it is seen.
    fn note_reference(&mut self, id: &str, endnote: bool) -> Element {
        let kind = if endnote { "endnote" } else { "footnote" };
        let existing = if endnote { &self.endnotes } else { &self.footnotes };
        let known = existing.get(id).map(|note| note.number);
        let count = existing.len();
        let number = match known {
            Some(number) => number,
            None => {
                let number = count + 1;
                let placeholder = RenderedNote {
                    number,
                    item: Element::new("li"),
                };
                self.notes_mut(endnote).insert(id.to_string(), placeholder);
                let item = self.render_note(id, endnote, number);
                self.notes_mut(endnote)
                    .insert(id.to_string(), RenderedNote { number, item });
                number
            }
        };
        Element::new("a")
            .with_class(self.class(&format!("{kind}-ref")))
            .with_attr(&format!("data-{kind}"), id)
            .with_attr("href", format!("#{}-{kind}-{id}", self.prefix))
            .with_text(number.to_string())
    }

    fn notes_mut(&mut self, endnote: bool) -> &mut indexmap::IndexMap<String, RenderedNote> {
        if endnote {
            &mut self.endnotes
        } else {
            &mut self.footnotes
        }
    }

    fn render_note(&mut self, id: &str, endnote: bool, number: usize) -> Element {
        let doc = self.doc;
        let kind = if endnote { "endnote" } else { "footnote" };
        let mut item = Element::new("li")
            .with_attr("id", format!("{}-{kind}-{id}", self.prefix))
            .with_attr("value", number.to_string());
        let notes = if endnote {
            &doc.notes.endnotes
        } else {
            &doc.notes.footnotes
        };
        let Some(note) = notes.get(id) else {
            log::warn!("{kind} {id} is referenced but not defined");
            return item;
        };
        let saved_note = self.current_note.replace(number);
        let saved_fields = std::mem::take(&mut self.fields);
        self.nesting += 1;
        for block in self.render_blocks(&note.children) {
            item.push(block);
        }
        self.nesting -= 1;
        self.fields = saved_fields;
        self.current_note = saved_note;
        item
    }
}
