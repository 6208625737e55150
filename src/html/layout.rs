//! Page assembly. Body blocks are split into pages at explicit breaks and,
//! when the document carries no rendered page breaks of its own, wherever
//! the estimated content height overflows the page body.

use std::collections::{HashMap, HashSet};

use crate::docx::{DocumentContext, Style, class_name};
use crate::error::Result;
use crate::model::{HeaderFooterKind, HeaderFooterRef, Section, SectionBreak, SectionProperties};
use crate::units::px;

use super::RenderContext;
use super::dom::{Element, Node};
use super::text::text_width_em;

pub(super) const DEFAULT_MARGIN: f64 = 96.0;
pub(super) const DEFAULT_PAGE_WIDTH: f64 = 816.0;
const DEFAULT_PAGE_HEIGHT: f64 = 1056.0;
const DEFAULT_HEADER_DISTANCE: f64 = 48.0;
const DEFAULT_FONT_SIZE: f64 = 14.67;
const NORMAL_LINE_HEIGHT: f64 = 1.15;
const CELL_PADDING: f64 = 4.0;

/// Page box of a section, px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct PageGeometry {
    pub width: f64,
    pub height: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    pub header: f64,
    pub footer: f64,
}

impl PageGeometry {
    pub fn of(props: &SectionProperties) -> Self {
        let m = &props.page_margins;
        Self {
            width: props.page_size.width.unwrap_or(DEFAULT_PAGE_WIDTH),
            height: props.page_size.height.unwrap_or(DEFAULT_PAGE_HEIGHT),
            top: m.top.unwrap_or(DEFAULT_MARGIN),
            right: m.right.unwrap_or(DEFAULT_MARGIN),
            bottom: m.bottom.unwrap_or(DEFAULT_MARGIN),
            left: m.left.unwrap_or(DEFAULT_MARGIN),
            header: m.header.unwrap_or(DEFAULT_HEADER_DISTANCE),
            footer: m.footer.unwrap_or(DEFAULT_HEADER_DISTANCE),
        }
    }

    fn body_height(&self) -> f64 {
        (self.height - self.top.abs() - self.bottom.abs()).max(DEFAULT_MARGIN)
    }

    fn body_width(&self) -> f64 {
        (self.width - self.left - self.right).max(DEFAULT_MARGIN)
    }
}

struct Page {
    /// Section whose geometry, headers and footers the page uses.
    section: usize,
    first_of_section: bool,
    number: u32,
    /// Body blocks, grouped by the section they came from.
    parts: Vec<(usize, Vec<Element>)>,
    used: f64,
    has_content: bool,
    footnotes: HashSet<String>,
}

impl Page {
    fn new(section: usize, first_of_section: bool, number: u32) -> Self {
        Self {
            section,
            first_of_section,
            number,
            parts: Vec::new(),
            used: 0.0,
            has_content: false,
            footnotes: HashSet::new(),
        }
    }

    fn push(&mut self, section: usize, block: Element) {
        match self.parts.last_mut() {
            Some((s, blocks)) if *s == section => blocks.push(block),
            _ => self.parts.push((section, vec![block])),
        }
    }

    fn blocks(&self) -> impl Iterator<Item = &Element> {
        self.parts.iter().flat_map(|(_, blocks)| blocks.iter())
    }
}

/// Line-box estimates from the inline styles plus the classes of the
/// document styles they reference.
struct Metrics<'a> {
    classes: HashMap<String, &'a Style>,
    default_font: f64,
    default_line: Option<String>,
    footnote_heights: HashMap<String, f64>,
}

impl<'a> Metrics<'a> {
    fn new(doc: &'a DocumentContext, prefix: &str) -> Self {
        Self {
            classes: doc
                .styles
                .iter()
                .map(|s| (class_name(prefix, &s.id), s))
                .collect(),
            default_font: doc
                .styles
                .default_run
                .get("font-size")
                .and_then(px)
                .unwrap_or(DEFAULT_FONT_SIZE),
            default_line: doc.styles.default_paragraph.get("line-height").map(str::to_string),
            footnote_heights: HashMap::new(),
        }
    }

    /// A property from the inline style, else from the last class defining it.
    fn lookup<'e>(&'e self, el: &'e Element, property: &str, run: bool) -> Option<&'e str> {
        el.style.get(property).or_else(|| {
            el.classes.iter().rev().find_map(|class| {
                let style = self.classes.get(class)?;
                if run {
                    style.run.get(property)
                } else {
                    style.paragraph.get(property)
                }
            })
        })
    }

    fn font_size(&self, el: &Element, inherited: f64) -> f64 {
        self.lookup(el, "font-size", true)
            .and_then(px)
            .unwrap_or(inherited)
    }

    fn line_height(&self, el: &Element, font: f64) -> f64 {
        let value = self
            .lookup(el, "line-height", false)
            .map(str::to_string)
            .or_else(|| self.default_line.clone());
        match value.as_deref() {
            Some(v) if v.ends_with("px") => px(v).unwrap_or(font * NORMAL_LINE_HEIGHT),
            Some(v) => v
                .parse::<f64>()
                .map(|factor| factor * font * NORMAL_LINE_HEIGHT)
                .unwrap_or(font * NORMAL_LINE_HEIGHT),
            None => font * NORMAL_LINE_HEIGHT,
        }
    }

    fn spacing(&self, el: &Element) -> f64 {
        ["margin-top", "margin-bottom"]
            .iter()
            .filter_map(|p| self.lookup(el, p, false).and_then(px))
            .sum()
    }

    fn height(&self, el: &Element, width: f64) -> f64 {
        match el.tag.as_str() {
            "p" | "div" => self.paragraph_height(el, width),
            "table" => self.table_rows(el).iter().map(|row| self.row_height(row, width)).sum(),
            _ => 0.0,
        }
    }

    fn paragraph_height(&self, el: &Element, width: f64) -> f64 {
        let base_font = self.font_size(el, self.default_font);
        let mut inline = InlineExtent {
            width: 0.0,
            max_font: base_font,
            breaks: 0,
            objects: 0.0,
        };
        self.measure_inline(el, base_font, &mut inline);
        let line = self.line_height(el, inline.max_font);
        let lines = (inline.width / width.max(1.0)).ceil().max(1.0) + inline.breaks as f64;
        lines * line + (inline.objects - line).max(0.0) + self.spacing(el)
    }

    fn measure_inline(&self, el: &Element, font: f64, out: &mut InlineExtent) {
        for child in &el.children {
            match child {
                Node::Text(text) => out.width += text_width_em(text) * font,
                Node::Element(e) => {
                    if e.tag == "br" {
                        out.breaks += 1;
                        continue;
                    }
                    if e.style.get("position") == Some("absolute") {
                        continue;
                    }
                    if matches!(e.tag.as_str(), "img" | "svg")
                        || e.style.get("display") == Some("inline-block")
                    {
                        let h = e.style.get("height").and_then(px).unwrap_or(0.0);
                        out.objects = out.objects.max(h);
                        continue;
                    }
                    let size = self.font_size(e, font);
                    out.max_font = out.max_font.max(size);
                    self.measure_inline(e, size, out);
                }
                Node::Raw(_) => {}
            }
        }
    }

    fn table_rows<'e>(&self, table: &'e Element) -> Vec<&'e Element> {
        table
            .elements()
            .filter(|e| e.tag == "thead" || e.tag == "tbody")
            .flat_map(|section| section.elements().filter(|e| e.tag == "tr"))
            .collect()
    }

    fn row_height(&self, row: &Element, width: f64) -> f64 {
        let cells: Vec<&Element> = row.elements().collect();
        let count: usize = cells
            .iter()
            .map(|c| c.attr("colspan").and_then(|s| s.parse().ok()).unwrap_or(1))
            .sum::<usize>()
            .max(1);
        let tallest = cells
            .iter()
            .map(|cell| {
                let span: usize = cell.attr("colspan").and_then(|s| s.parse().ok()).unwrap_or(1);
                let cell_width = width * span as f64 / count as f64 - CELL_PADDING;
                cell.elements().map(|b| self.height(b, cell_width)).sum::<f64>()
            })
            .fold(0.0, f64::max);
        let min = row.style.get("height").and_then(px).unwrap_or(0.0);
        tallest.max(min) + CELL_PADDING
    }

    /// Height of the footnotes `block` references that `page` does not yet hold.
    fn new_footnotes(&self, block: &Element, page: &Page) -> (Vec<String>, f64) {
        let mut ids = Vec::new();
        block.walk(&mut |e| {
            if let Some(id) = e.attr("data-footnote")
                && !page.footnotes.contains(id)
                && !ids.iter().any(|i| i == id)
            {
                ids.push(id.to_string());
            }
        });
        let height = ids
            .iter()
            .map(|id| self.footnote_heights.get(id).copied().unwrap_or(0.0))
            .sum();
        (ids, height)
    }
}

struct InlineExtent {
    width: f64,
    max_font: f64,
    breaks: usize,
    objects: f64,
}

fn contains_break(el: &Element, is_break: &impl Fn(&Element) -> bool) -> bool {
    el.elements().any(|e| is_break(e) || contains_break(e, is_break))
}

fn continuation(shell: &Element) -> Element {
    let mut next = shell.clone();
    next.attrs.retain(|(name, _)| name != "id");
    next
}

/// Split `el` at every descendant matching `is_break`, dropping the markers.
/// Ancestors of a marker are cut in two; the later halves lose their `id`.
fn split_element(mut el: Element, is_break: &impl Fn(&Element) -> bool) -> Vec<Element> {
    let children = std::mem::take(&mut el.children);
    let shell = el;
    let mut parts = Vec::new();
    let mut current = shell.clone();
    for child in children {
        match child {
            Node::Element(e) if is_break(&e) => {
                parts.push(std::mem::replace(&mut current, continuation(&shell)));
            }
            Node::Element(e) if contains_break(&e, is_break) => {
                let mut pieces = split_element(e, is_break).into_iter();
                if let Some(first) = pieces.next()
                    && !first.children.is_empty()
                {
                    current.push(first);
                }
                for piece in pieces {
                    parts.push(std::mem::replace(&mut current, continuation(&shell)));
                    if !piece.children.is_empty() {
                        current.push(piece);
                    }
                }
            }
            other => current.children.push(other),
        }
    }
    parts.push(current);
    parts
}

fn is_blank(el: &Element) -> bool {
    let mut visible = false;
    el.walk(&mut |e| {
        visible |= matches!(e.tag.as_str(), "img" | "svg" | "table" | "br");
    });
    !visible && el.text_content().trim().is_empty()
}

/// Split a table so that its head fits in `room`, repeating the header rows.
/// `None` when every row fits or when fewer than `min_rows` body rows would.
/// Rows joined by a `rowspan` cell always land on the same page.
fn split_table(
    table: &Element,
    room: f64,
    min_rows: usize,
    metrics: &Metrics,
    width: f64,
) -> Option<(Element, Element)> {
    let body_index = table.children.iter().position(
        |c| matches!(c, Node::Element(e) if e.tag == "tbody"),
    )?;
    let Node::Element(body) = &table.children[body_index] else {
        return None;
    };
    let header_height: f64 = table
        .elements()
        .filter(|e| e.tag == "thead")
        .flat_map(|h| h.elements())
        .map(|row| metrics.row_height(row, width))
        .sum();
    let rows: Vec<&Node> = body.children.iter().collect();
    let mut used = header_height;
    let mut fit = 0;
    for row in &rows {
        let Node::Element(row) = row else {
            fit += 1;
            continue;
        };
        used += metrics.row_height(row, width);
        if used > room {
            break;
        }
        fit += 1;
    }
    // reach[i]: first row not covered by a cell starting at or above row i.
    let reach: Vec<usize> = rows
        .iter()
        .enumerate()
        .scan(0, |open, (i, row)| {
            let end = match row {
                Node::Element(row) => row
                    .elements()
                    .map(|cell| i + cell.attr("rowspan").and_then(|s| s.parse().ok()).unwrap_or(1))
                    .max()
                    .unwrap_or(i + 1),
                _ => i + 1,
            };
            *open = end.max(*open);
            Some(*open)
        })
        .collect();
    let splittable = |at: usize| at == 0 || reach[at - 1] <= at;
    let mut fit = fit.max(min_rows);
    if !splittable(fit) {
        fit = (min_rows..fit)
            .rev()
            .find(|&at| splittable(at))
            .or_else(|| (fit..rows.len()).find(|&at| splittable(at)))
            .unwrap_or(rows.len());
    }
    if fit == 0 || fit >= rows.len() {
        return None;
    }

    let mut head = table.clone();
    let mut tail = continuation(table);
    if let Node::Element(b) = &mut head.children[body_index] {
        b.children.truncate(fit);
    }
    if let Node::Element(b) = &mut tail.children[body_index] {
        b.children.drain(..fit);
    }
    Some((head, tail))
}

/// `Default`/`First`/`Even` references in force for each section, with
/// kinds a section leaves out inherited from the one before it.
fn effective_refs(
    sections: &[Section],
    refs: impl Fn(&SectionProperties) -> &Vec<HeaderFooterRef>,
) -> Vec<HashMap<HeaderFooterKind, String>> {
    let mut current: HashMap<HeaderFooterKind, String> = HashMap::new();
    sections
        .iter()
        .map(|section| {
            for r in refs(&section.properties) {
                current.insert(r.kind, r.rel_id.clone());
            }
            current.clone()
        })
        .collect()
}

fn pick_kind(props: &SectionProperties, page: &Page, even_and_odd: bool) -> HeaderFooterKind {
    if props.title_page && page.first_of_section {
        HeaderFooterKind::First
    } else if even_and_odd && page.number % 2 == 0 {
        HeaderFooterKind::Even
    } else {
        HeaderFooterKind::Default
    }
}

impl RenderContext<'_> {
    fn header_footer_blocks(
        &mut self,
        rel_id: &str,
        cache: &mut HashMap<String, Option<Vec<Element>>>,
    ) -> Result<Option<Vec<Element>>> {
        if let Some(cached) = cache.get(rel_id) {
            return Ok(cached.clone());
        }
        let blocks = match self.doc.header_footer(rel_id)? {
            Some(part) => {
                self.nesting += 1;
                let blocks = self.render_blocks(&part.children);
                self.nesting -= 1;
                Some(blocks)
            }
            None => None,
        };
        cache.insert(rel_id.to_string(), blocks.clone());
        Ok(blocks)
    }

    fn footnote_list(&self, page: &Page) -> Option<Element> {
        let mut ids: Vec<String> = Vec::new();
        for block in page.blocks() {
            block.walk(&mut |e| {
                if let Some(id) = e.attr("data-footnote")
                    && !ids.iter().any(|i| i == id)
                {
                    ids.push(id.to_string());
                }
            });
        }
        let mut list = Element::new("ol").with_class(self.class("footnotes"));
        for id in ids {
            if let Some(note) = self.footnotes.get(&id) {
                list.push(note.item.clone());
            }
        }
        (!list.children.is_empty()).then_some(list)
    }
}

pub(super) fn paginate(
    ctx: &mut RenderContext,
    sections: &[Section],
    rendered: Vec<Vec<Element>>,
) -> Result<Vec<Element>> {
    let doc = ctx.doc;
    let options = ctx.options;
    let mut metrics = Metrics::new(doc, ctx.prefix);
    let estimate = options.page && !ctx.rendered_breaks;
    if estimate {
        let width = sections
            .first()
            .map(|s| PageGeometry::of(&s.properties).body_width())
            .unwrap_or(DEFAULT_PAGE_WIDTH - 2.0 * DEFAULT_MARGIN);
        let heights: HashMap<String, f64> = ctx
            .footnotes
            .iter()
            .map(|(id, note)| {
                let h: f64 = note.item.elements().map(|b| metrics.height(b, width)).sum();
                (id.clone(), h)
            })
            .collect();
        metrics.footnote_heights = heights;
    }

    let page_break = ctx.class("page-break");
    let rendered_break = ctx.class("rendered-break");
    let is_break = |e: &Element| e.has_class(&page_break) || e.has_class(&rendered_break);

    let mut pages: Vec<Page> = Vec::new();
    let mut next_number = 1u32;
    for (index, (section, blocks)) in sections.iter().zip(rendered).enumerate() {
        let props = &section.properties;
        if let Some(start) = props.page_number_start {
            next_number = start;
        }
        let continuous = matches!(
            props.break_type,
            SectionBreak::Continuous | SectionBreak::NextColumn
        );
        if pages.is_empty() || !options.page || !continuous {
            pages.push(Page::new(index, true, next_number));
            next_number += 1;
        }
        let geometry = PageGeometry::of(props);
        let (room, width) = (geometry.body_height(), geometry.body_width());

        for block in blocks {
            if !options.page {
                if let Some(page) = pages.last_mut() {
                    page.push(index, block);
                }
                continue;
            }
            let forced = block.style.get("break-before") == Some("page");
            if forced && pages.last().is_some_and(|p| p.has_content) {
                pages.push(Page::new(index, false, next_number));
                next_number += 1;
            }
            let parts = split_element(block, &is_break);
            let count = parts.len();
            for (i, part) in parts.into_iter().enumerate() {
                if i > 0 && pages.last().is_some_and(|p| p.has_content) {
                    pages.push(Page::new(index, false, next_number));
                    next_number += 1;
                }
                let blank = is_blank(&part);
                if blank && i == 0 && count > 1 {
                    continue;
                }
                let carried = blank && i > 0;

                let mut pending = Some(part);
                while let Some(block) = pending.take() {
                    let Some(page) = pages.last_mut() else {
                        break;
                    };
                    let (notes, notes_height) = metrics.new_footnotes(&block, page);
                    let height = if estimate {
                        metrics.height(&block, width) + notes_height
                    } else {
                        0.0
                    };
                    if estimate && page.used + height > room {
                        let min_rows = usize::from(!page.has_content);
                        if block.tag == "table"
                            && let Some((head, tail)) =
                                split_table(&block, room - page.used, min_rows, &metrics, width)
                        {
                            page.push(index, head);
                            page.has_content = true;
                            page.footnotes.extend(notes);
                            pages.push(Page::new(index, false, next_number));
                            next_number += 1;
                            pending = Some(tail);
                            continue;
                        }
                        if page.has_content {
                            pages.push(Page::new(index, false, next_number));
                            next_number += 1;
                            pending = Some(block);
                            continue;
                        }
                    }
                    page.used += height;
                    page.has_content |= !carried;
                    page.footnotes.extend(notes);
                    page.push(index, block);
                }
            }
        }
    }
    if pages.is_empty() {
        pages.push(Page::new(0, true, next_number));
    }

    assemble(ctx, sections, pages)
}

fn assemble(ctx: &mut RenderContext, sections: &[Section], pages: Vec<Page>) -> Result<Vec<Element>> {
    let doc = ctx.doc;
    let options = ctx.options;
    let headers = effective_refs(sections, |p| &p.headers);
    let footers = effective_refs(sections, |p| &p.footers);
    let mut cache: HashMap<String, Option<Vec<Element>>> = HashMap::new();
    let total = pages.len();
    let last = total.saturating_sub(1);
    let mut out = Vec::with_capacity(total);

    for (page_index, page) in pages.iter().enumerate() {
        let Some(section) = sections.get(page.section) else {
            continue;
        };
        let props = &section.properties;
        let geometry = PageGeometry::of(props);
        ctx.margins = (geometry.left, geometry.top);
        let kind = pick_kind(props, page, doc.settings.even_and_odd_headers);

        let mut el = Element::new("section").with_class(ctx.prefix);
        if !options.ignore_width {
            el.style.set("width", format!("{:.2}px", geometry.width));
        }
        if !options.ignore_height {
            el.style.set("min-height", format!("{:.2}px", geometry.height));
        }
        el.style.set(
            "padding",
            format!(
                "{:.2}px {:.2}px {:.2}px {:.2}px",
                geometry.top.abs(),
                geometry.right,
                geometry.bottom.abs(),
                geometry.left
            ),
        );

        if options.render_header
            && let Some(rel_id) = headers[page.section].get(&kind)
            && let Some(blocks) = ctx.header_footer_blocks(rel_id, &mut cache)?
        {
            let mut header = Element::new("header");
            header.style.set("margin-top", format!("{:.2}px", geometry.header - geometry.top.abs()));
            header.style.set("min-height", format!("{:.2}px", geometry.top.abs() - geometry.header));
            for block in blocks {
                header.push(block);
            }
            el.push(header);
        }

        let mut article = Element::new("article");
        let single = page.parts.len() == 1;
        for (section_index, blocks) in &page.parts {
            let columns = sections
                .get(*section_index)
                .and_then(|s| s.properties.columns.as_ref())
                .filter(|c| c.count > 1);
            if single || columns.is_none() {
                if let Some(c) = columns {
                    apply_columns(&mut article, c);
                }
                for block in blocks {
                    article.push(block.clone());
                }
            } else if let Some(c) = columns {
                let mut wrap = Element::new("div");
                apply_columns(&mut wrap, c);
                for block in blocks {
                    wrap.push(block.clone());
                }
                article.push(wrap);
            }
        }
        if page_index == last
            && options.render_endnotes
            && !ctx.endnotes.is_empty()
        {
            let mut list = Element::new("ol").with_class(ctx.class("endnotes"));
            for note in ctx.endnotes.values() {
                list.push(note.item.clone());
            }
            article.push(list);
        }
        el.push(article);

        if options.render_footnotes
            && let Some(list) = ctx.footnote_list(page)
        {
            el.push(list);
        }

        if options.render_footer
            && let Some(rel_id) = footers[page.section].get(&kind)
            && let Some(blocks) = ctx.header_footer_blocks(rel_id, &mut cache)?
        {
            let mut footer = Element::new("footer");
            footer.style.set("margin-bottom", format!("{:.2}px", geometry.footer - geometry.bottom.abs()));
            footer.style.set("min-height", format!("{:.2}px", geometry.bottom.abs() - geometry.footer));
            for block in blocks {
                footer.push(block);
            }
            el.push(footer);
        }

        fill_page_fields(&mut el, &ctx.class("field"), page.number, total);
        out.push(el);
    }
    log::debug!("assembled {total} page(s)");
    Ok(out)
}

fn apply_columns(el: &mut Element, columns: &crate::model::Columns) {
    el.style.set("column-count", columns.count.to_string());
    if let Some(space) = columns.space {
        el.style.set("column-gap", format!("{space:.2}px"));
    }
    if columns.separator {
        el.style.set("column-rule", "1px solid");
    }
}

fn fill_page_fields(page: &mut Element, class: &str, number: u32, total: usize) {
    page.walk_mut(&mut |e| {
        if !e.has_class(class) {
            return;
        }
        let value = match e.attr("data-field") {
            Some("PAGE") => number.to_string(),
            Some("NUMPAGES") => total.to_string(),
            _ => return,
        };
        e.children = vec![Node::Text(value)];
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker() -> Element {
        Element::new("span").with_class("docx-page-break")
    }

    fn is_marker(e: &Element) -> bool {
        e.has_class("docx-page-break")
    }

    #[test]
    fn splits_paragraph_at_nested_break() {
        let mut run = Element::new("span").with_text("before");
        run.push(marker());
        run.push_text("after");
        let mut p = Element::new("p").with_attr("id", "x");
        p.push(run);

        let parts = split_element(p, &is_marker);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].text_content(), "before");
        assert_eq!(parts[0].attr("id"), Some("x"));
        assert_eq!(parts[1].text_content(), "after");
        assert_eq!(parts[1].attr("id"), None);
        assert_eq!(parts[1].tag, "p");
    }

    #[test]
    fn trailing_break_leaves_an_empty_continuation() {
        let mut p = Element::new("p");
        p.push(Element::new("span").with_text("end"));
        let mut run = Element::new("span");
        run.push(marker());
        p.push(run);
        let parts = split_element(p, &is_marker);
        assert_eq!(parts.len(), 2);
        assert!(is_blank(&parts[1]));
        assert!(!is_blank(&parts[0]));
    }

    #[test]
    fn geometry_defaults_to_letter() {
        let g = PageGeometry::of(&SectionProperties::default());
        assert_eq!(g.width, DEFAULT_PAGE_WIDTH);
        assert_eq!(g.body_height(), DEFAULT_PAGE_HEIGHT - 2.0 * DEFAULT_MARGIN);
    }

    #[test]
    fn page_fields_are_filled() {
        let mut page = Element::new("section");
        page.push(
            Element::new("span")
                .with_class("docx-field")
                .with_attr("data-field", "PAGE"),
        );
        page.push(
            Element::new("span")
                .with_class("docx-field")
                .with_attr("data-field", "NUMPAGES"),
        );
        fill_page_fields(&mut page, "docx-field", 3, 7);
        assert_eq!(page.text_content(), "37");
    }

    #[test]
    fn header_refs_carry_forward() {
        let first = Section {
            properties: SectionProperties {
                headers: vec![HeaderFooterRef {
                    kind: HeaderFooterKind::Default,
                    rel_id: "rId1".into(),
                }],
                ..Default::default()
            },
            children: Vec::new(),
        };
        let second = Section {
            properties: SectionProperties {
                headers: vec![HeaderFooterRef {
                    kind: HeaderFooterKind::First,
                    rel_id: "rId2".into(),
                }],
                ..Default::default()
            },
            children: Vec::new(),
        };
        let refs = effective_refs(&[first, second], |p| &p.headers);
        assert_eq!(refs[1].get(&HeaderFooterKind::Default).map(String::as_str), Some("rId1"));
        assert_eq!(refs[1].get(&HeaderFooterKind::First).map(String::as_str), Some("rId2"));
        assert!(refs[0].get(&HeaderFooterKind::First).is_none());
    }

    #[test]
    fn title_page_and_even_pages_pick_their_kind() {
        let props = SectionProperties {
            title_page: true,
            ..Default::default()
        };
        let first = Page::new(0, true, 1);
        assert_eq!(pick_kind(&props, &first, true), HeaderFooterKind::First);
        let second = Page::new(0, false, 2);
        assert_eq!(pick_kind(&props, &second, true), HeaderFooterKind::Even);
        assert_eq!(pick_kind(&props, &second, false), HeaderFooterKind::Default);
    }

    fn line(text: &str) -> Element {
        let mut p = Element::new("p");
        p.push(Element::new("span").with_text(text));
        p
    }

    fn empty_metrics() -> Metrics<'static> {
        Metrics {
            classes: HashMap::new(),
            default_font: 16.0,
            default_line: None,
            footnote_heights: HashMap::new(),
        }
    }

    #[test]
    fn long_paragraphs_wrap_into_more_lines() {
        let metrics = empty_metrics();
        let short = metrics.height(&line("short"), 600.0);
        let long = metrics.height(&line(&"word ".repeat(200)), 600.0);
        assert!((short - 16.0 * NORMAL_LINE_HEIGHT).abs() < 1e-9);
        assert!(long > short * 5.0);
    }

    #[test]
    fn tables_split_by_rows_with_the_header_repeated() {
        let metrics = empty_metrics();
        let mut table = Element::new("table");
        let mut thead = Element::new("thead");
        let mut head_row = Element::new("tr");
        head_row.push(Element::new("td").with_attr("x", "").with_text(""));
        thead.push(head_row);
        table.push(thead);
        let mut tbody = Element::new("tbody");
        for i in 0..10 {
            let mut tr = Element::new("tr");
            let mut td = Element::new("td");
            td.push(line(&format!("row {i}")));
            tr.push(td);
            tbody.push(tr);
        }
        table.push(tbody);

        let row = 16.0 * NORMAL_LINE_HEIGHT + CELL_PADDING;
        let (head, tail) = split_table(&table, row * 4.5, 0, &metrics, 600.0).unwrap();
        let body_rows = |t: &Element| {
            t.elements()
                .find(|e| e.tag == "tbody")
                .map(|b| b.elements().count())
                .unwrap_or(0)
        };
        assert_eq!(body_rows(&head), 4);
        assert_eq!(body_rows(&tail), 6);
        assert!(tail.elements().any(|e| e.tag == "thead"));
        assert!(split_table(&table, row * 100.0, 0, &metrics, 600.0).is_none());
    }

    fn body_rows(table: &Element) -> Vec<&Element> {
        table
            .elements()
            .find(|e| e.tag == "tbody")
            .map(|b| b.elements().collect())
            .unwrap_or_default()
    }

    /// A body of `rows` single-line rows; `spans` marks (row, rowspan) origins
    /// whose following rows carry one cell fewer.
    fn merged_table(rows: usize, spans: &[(usize, usize)]) -> Element {
        let mut table = Element::new("table");
        let mut tbody = Element::new("tbody");
        let mut covered = vec![false; rows];
        for i in 0..rows {
            let mut tr = Element::new("tr");
            if let Some(&(_, span)) = spans.iter().find(|(at, _)| *at == i) {
                let mut td = Element::new("td").with_attr("rowspan", span.to_string());
                td.push(line("merged"));
                tr.push(td);
                for c in covered.iter_mut().skip(i + 1).take(span - 1) {
                    *c = true;
                }
            } else if !covered[i] {
                let mut td = Element::new("td");
                td.push(line("left"));
                tr.push(td);
            }
            let mut td = Element::new("td");
            td.push(line(&format!("row {i}")));
            tr.push(td);
            tbody.push(tr);
        }
        table.push(tbody);
        table
    }

    #[test]
    fn table_split_keeps_row_spans_together() {
        let metrics = empty_metrics();
        let row = 16.0 * NORMAL_LINE_HEIGHT + CELL_PADDING;
        // Rows 2 and 3 share a merged cell; room for three rows would cut it.
        let table = merged_table(6, &[(2, 2)]);
        let (head, tail) = split_table(&table, row * 3.5, 0, &metrics, 600.0).unwrap();
        assert_eq!(body_rows(&head).len(), 2);
        let tail_rows = body_rows(&tail);
        assert_eq!(tail_rows.len(), 4);
        assert_eq!(tail_rows[0].elements().next().and_then(|td| td.attr("rowspan")), Some("2"));
        assert_eq!(tail_rows[1].elements().count(), 1);
    }

    #[test]
    fn oversized_row_span_moves_forward_on_an_empty_page() {
        let metrics = empty_metrics();
        let row = 16.0 * NORMAL_LINE_HEIGHT + CELL_PADDING;
        let table = merged_table(5, &[(0, 3)]);
        let (head, tail) = split_table(&table, row * 1.5, 1, &metrics, 600.0).unwrap();
        assert_eq!(body_rows(&head).len(), 3);
        assert_eq!(body_rows(&tail).len(), 2);
        // With content already on the page the whole table moves on instead.
        assert!(split_table(&table, row * 1.5, 0, &metrics, 600.0).is_none());
    }
}
