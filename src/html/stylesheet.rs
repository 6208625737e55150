//! The `<style>` block: fixed base rules, embedded fonts and one rule set
//! per document style.
//!
//! Rules are ordered so that the cascade matches Word's precedence of
//! document defaults, then table styles, then paragraph styles, then
//! character styles. Table rules are wrapped in `:where()` so that their
//! specificity stays at the level of the document defaults they follow.

use std::fmt::Write;

use base64::Engine;

use crate::css::Css;
use crate::docx::{DocumentContext, Style, StyleKind, TableBand, class_name, quote_font};
use crate::options::RenderOptions;

pub(super) fn build(doc: &DocumentContext, options: &RenderOptions) -> String {
    let p = options.class_prefix.as_str();
    let root = format!(".{p}-root");
    let mut out = String::with_capacity(8192);

    base_rules(&mut out, p, &root, options);
    root_rule(&mut out, doc, &root);
    font_faces(&mut out, doc);

    if !doc.styles.default_paragraph.is_empty() {
        out.push_str(
            &doc.styles
                .default_paragraph
                .to_rule(&format!("{root} p, {root} :where(.{p}-textbox) > div")),
        );
    }
    if !doc.styles.default_run.is_empty() {
        out.push_str(&doc.styles.default_run.to_rule(&format!("{root} span")));
    }

    for style in doc.styles.iter().filter(|s| s.kind == StyleKind::Table) {
        table_rules(&mut out, &root, &class_name(p, &style.id), style);
    }
    for style in doc.styles.iter().filter(|s| s.kind == StyleKind::Paragraph) {
        let cls = class_name(p, &style.id);
        emit(&mut out, &style.paragraph, &format!("{root} .{cls}"));
        emit(&mut out, &style.run, &format!("{root} .{cls} span"));
    }
    for style in doc.styles.iter().filter(|s| s.kind == StyleKind::Character) {
        let cls = class_name(p, &style.id);
        emit(&mut out, &style.run, &format!("{root} span.{cls}"));
    }
    out
}

fn emit(out: &mut String, css: &Css, selector: &str) {
    if !css.is_empty() {
        out.push_str(&css.to_rule(selector));
    }
}

fn base_rules(out: &mut String, p: &str, root: &str, options: &RenderOptions) {
    let wrapper_background = options
        .page_wrap_background
        .as_deref()
        .unwrap_or("gray");
    let wrapper_padding = options.wrap_padding();
    let _ = write!(
        out,
        ".{p}-wrapper {{ background: {wrapper_background}; padding: {wrapper_padding}; padding-bottom: 0; display: flex; flex-flow: column; align-items: center; }}
.{p}-wrapper > section.{p} {{ background: white; box-shadow: 0 0 10px rgba(0, 0, 0, 0.5); margin-bottom: 30px; }}
section.{p} {{ box-sizing: border-box; display: flex; flex-flow: column nowrap; position: relative; overflow: hidden; }}
section.{p} > article {{ margin-bottom: auto; z-index: 1; }}
section.{p} > footer {{ z-index: 1; }}
{root} table {{ border-collapse: collapse; }}
{root} table td, {root} table th {{ vertical-align: top; }}
{root} p {{ margin: 0; min-height: 1em; }}
{root} :where(.{p}-textbox) > div {{ margin: 0; min-height: 1em; }}
{root} span {{ white-space: pre-wrap; overflow-wrap: break-word; }}
{root} a {{ color: inherit; text-decoration: inherit; }}
{root} .{p}-tab {{ white-space: pre; }}
{root} .{p}-num {{ white-space: pre; }}
{root} .{p}-column-break {{ display: block; break-after: column; }}
{root} .{p}-footnote-ref, {root} .{p}-endnote-ref {{ vertical-align: super; font-size: smaller; }}
{root} ol.{p}-footnotes {{ margin: 0; padding-left: 1.5em; border-top: 1px solid currentColor; font-size: smaller; }}
{root} ol.{p}-endnotes {{ margin: 1em 0 0; padding-left: 1.5em; font-size: smaller; }}
"
    );
}

fn root_rule(out: &mut String, doc: &DocumentContext, root: &str) {
    let mut css = Css::new();
    let mut slots: Vec<_> = doc.theme.fonts.0.iter().collect();
    slots.sort();
    for (slot, face) in slots {
        css.set(&format!("--docx-theme-font-{slot}"), quote_font(face));
    }
    css.set("tab-size", format!("{:.0}px", doc.settings.default_tab_stop));
    if doc.settings.auto_hyphenation {
        css.set("hyphens", "auto");
    }
    out.push_str(&css.to_rule(root));
}

fn font_faces(out: &mut String, doc: &DocumentContext) {
    for font in &doc.fonts {
        let data = base64::engine::general_purpose::STANDARD.encode(&font.data);
        let _ = writeln!(
            out,
            "@font-face {{ font-family: {}; src: url(data:font/ttf;base64,{data}); font-weight: {}; font-style: {}; }}",
            quote_font(&font.family),
            if font.bold { "bold" } else { "normal" },
            if font.italic { "italic" } else { "normal" },
        );
    }
}

fn table_rules(out: &mut String, root: &str, cls: &str, style: &Style) {
    emit(out, &style.table, &format!("{root} table.{cls}"));
    emit(out, &style.row, &format!("{root} table.{cls} > * > tr"));
    emit(out, &style.cell, &format!("{root} table.{cls} td"));
    emit(out, &style.paragraph, &format!("{root} :where(table.{cls}) p"));
    emit(out, &style.run, &format!("{root} :where(table.{cls}) span"));

    let mut bands: Vec<_> = style.conditional.iter().collect();
    bands.sort_by_key(|(band, _)| **band);
    for (band, cond) in bands {
        let (table_sel, cell_sel) = match band.cell_class() {
            Some(cell) => {
                let enable: String = band
                    .enabled_by()
                    .iter()
                    .map(|e| format!(".{e}"))
                    .collect();
                (format!("table.{cls}{enable}"), format!("table.{cls}{enable} td.{cell}"))
            }
            None => (format!("table.{cls}"), format!("table.{cls} td")),
        };
        if *band == TableBand::WholeTable {
            emit(out, &cond.table, &format!("{root} {table_sel}"));
        }
        emit(out, &cond.cell, &format!("{root} {cell_sel}"));
        emit(out, &cond.paragraph, &format!("{root} :where({cell_sel}) p"));
        emit(out, &cond.run, &format!("{root} :where({cell_sel}) span"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rules_are_skipped() {
        let mut out = String::new();
        emit(&mut out, &Css::new(), ".x");
        assert!(out.is_empty());
        let mut css = Css::new();
        css.set("color", "red");
        emit(&mut out, &css, ".x");
        assert_eq!(out, ".x {\n  color: red;\n}\n");
    }

    #[test]
    fn base_rules_use_the_prefix() {
        let mut out = String::new();
        let options = RenderOptions {
            class_prefix: "doc".into(),
            ..Default::default()
        };
        base_rules(&mut out, "doc", ".doc-root", &options);
        assert!(out.contains(".doc-wrapper {"));
        assert!(out.contains("section.doc {"));
        assert!(out.contains(".doc-root .doc-tab { white-space: pre; }"));
        assert!(!out.contains("docx"));
    }
}
