use std::collections::HashMap;

use crate::css::Css;
use crate::model::{Table, TableCell, TableLook, TableRow};
use crate::units::{LengthUnit, attr_bool, convert_length, dxa_to_px, length_attr, parse_number, val_bool, val_hex};
use crate::xml::XmlElement;

use super::Parser;

/// `w:tblPr`, shared by tables and table styles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableProperties {
    pub style_id: Option<String>,
    pub css: Css,
    pub cell_css: Css,
    pub look: Option<TableLook>,
    pub row_band_size: Option<u32>,
    pub col_band_size: Option<u32>,
}

const LOOK_FIRST_ROW: u32 = 0x0020;
const LOOK_LAST_ROW: u32 = 0x0040;
const LOOK_FIRST_COLUMN: u32 = 0x0080;
const LOOK_LAST_COLUMN: u32 = 0x0100;
const LOOK_NO_H_BAND: u32 = 0x0200;
const LOOK_NO_V_BAND: u32 = 0x0400;

/// `w:tblLook`: the packed `w:val` bitmask and the explicit attributes
/// Word 2010+ writes. An attribute wins over its bit when present.
pub fn parse_table_look(el: &XmlElement) -> TableLook {
    let mask = val_hex(el);
    let flag = |attr: &str, bit: u32| attr_bool(el, attr, mask & bit != 0);
    TableLook {
        first_row: flag("w:firstRow", LOOK_FIRST_ROW),
        last_row: flag("w:lastRow", LOOK_LAST_ROW),
        first_column: flag("w:firstColumn", LOOK_FIRST_COLUMN),
        last_column: flag("w:lastColumn", LOOK_LAST_COLUMN),
        no_h_band: flag("w:noHBand", LOOK_NO_H_BAND),
        no_v_band: flag("w:noVBand", LOOK_NO_V_BAND),
    }
}

/// `w:tblW`/`w:tcW`: `dxa`, `pct` (fiftieths of a percent or `"50%"`),
/// `auto`/`nil` meaning no width.
fn table_width(el: &XmlElement) -> Option<String> {
    match el.attr("w:type") {
        Some("pct") => convert_length(el.attr("w:w"), LengthUnit::Percent),
        Some("auto") | Some("nil") => None,
        _ => length_attr(el, "w:w", LengthUnit::Dxa).filter(|w| parse_number(w) != Some(0.0)),
    }
}

fn side_name(local: &str) -> Option<&'static str> {
    Some(match local {
        "top" => "top",
        "bottom" => "bottom",
        "left" | "start" => "left",
        "right" | "end" => "right",
        _ => return None,
    })
}

impl Parser<'_> {
    fn cell_margins(&self, el: &XmlElement, css: &mut Css) {
        for side in el.elements() {
            if let Some(name) = side_name(side.local_name()) {
                css.set_opt(&format!("padding-{name}"), table_width(side));
            }
        }
    }

    pub fn parse_table_properties(&self, el: &XmlElement) -> TableProperties {
        let mut props = TableProperties::default();
        for child in el.elements() {
            match child.name.as_str() {
                "w:tblStyle" => props.style_id = child.val().map(str::to_string),
                "w:tblW" => props.css.set_opt("width", table_width(child)),
                "w:jc" => match child.val() {
                    Some("center") => {
                        props.css.set("margin-left", "auto");
                        props.css.set("margin-right", "auto");
                    }
                    Some("right" | "end") => props.css.set("margin-left", "auto"),
                    _ => {}
                },
                "w:tblInd" => props.css.set_opt("margin-left", table_width(child)),
                "w:tblBorders" => {
                    for border in child.elements() {
                        let Some(css) = self.border(border) else {
                            continue;
                        };
                        match border.local_name() {
                            "insideH" => {
                                props.cell_css.set("border-top", css.clone());
                                props.cell_css.set("border-bottom", css);
                            }
                            "insideV" => {
                                props.cell_css.set("border-left", css.clone());
                                props.cell_css.set("border-right", css);
                            }
                            local => {
                                if let Some(side) = side_name(local) {
                                    props.css.set(&format!("border-{side}"), css);
                                }
                            }
                        }
                    }
                }
                "w:tblCellMar" => self.cell_margins(child, &mut props.cell_css),
                "w:tblLayout" => {
                    if child.attr("w:type") == Some("fixed") {
                        props.css.set("table-layout", "fixed");
                    }
                }
                "w:shd" => self.shading(child, &mut props.css),
                "w:tblCellSpacing" => {
                    if let Some(spacing) = table_width(child) {
                        props.css.set("border-collapse", "separate");
                        props.css.set("border-spacing", spacing);
                    }
                }
                "w:tblLook" => props.look = Some(parse_table_look(child)),
                "w:tblStyleRowBandSize" => {
                    props.row_band_size = child.val().and_then(|v| v.parse().ok())
                }
                "w:tblStyleColBandSize" => {
                    props.col_band_size = child.val().and_then(|v| v.parse().ok())
                }
                "w:tblCaption" | "w:tblDescription" | "w:tblpPr" | "w:tblOverlap"
                | "w:bidiVisual" | "w:tblPrChange" => log::debug!("ignoring <{}>", child.name),
                other => log::warn!("unhandled table property <{other}>"),
            }
        }
        props
    }

    /// `w:trPr` → (css, is_header, grid_before).
    pub fn parse_row_properties(&self, el: &XmlElement) -> (Css, bool, usize) {
        let mut css = Css::new();
        let mut header = false;
        let mut grid_before = 0;
        for child in el.elements() {
            match child.name.as_str() {
                "w:trHeight" => {
                    // Table rows treat `height` as a minimum already.
                    css.set_opt("height", length_attr(child, "w:val", LengthUnit::Dxa));
                    if child.attr("w:hRule") == Some("exact") {
                        css.set("overflow", "hidden");
                    }
                }
                "w:tblHeader" => header = val_bool(child, true),
                "w:gridBefore" => grid_before = child.val().and_then(|v| v.parse().ok()).unwrap_or(0),
                "w:hidden" => {
                    if val_bool(child, true) {
                        css.set("display", "none");
                    }
                }
                "w:cantSplit" | "w:jc" | "w:cnfStyle" | "w:gridAfter" | "w:wBefore" | "w:wAfter"
                | "w:trPrChange" | "w:tblCellSpacing" | "w:ins" | "w:del" => {
                    log::debug!("ignoring <{}>", child.name)
                }
                other => log::warn!("unhandled row property <{other}>"),
            }
        }
        (css, header, grid_before)
    }

    /// `w:tcPr` into CSS. Span and merge attributes are read by the table parser.
    pub fn parse_cell_properties(&self, el: &XmlElement) -> Css {
        let mut css = Css::new();
        for child in el.elements() {
            match child.name.as_str() {
                "w:tcW" => css.set_opt("width", table_width(child)),
                "w:vAlign" => {
                    let align = match child.val() {
                        Some("center") => "middle",
                        Some("bottom") => "bottom",
                        _ => "top",
                    };
                    css.set("vertical-align", align);
                }
                "w:tcBorders" => {
                    for border in child.elements() {
                        let Some(value) = self.border(border) else {
                            continue;
                        };
                        if let Some(side) = side_name(border.local_name()) {
                            css.set(&format!("border-{side}"), value);
                        } else {
                            log::debug!("cell border <{}> not rendered", border.name);
                        }
                    }
                }
                "w:shd" => self.shading(child, &mut css),
                "w:tcMar" => self.cell_margins(child, &mut css),
                "w:noWrap" => {
                    if val_bool(child, true) {
                        css.set("white-space", "nowrap");
                    }
                }
                "w:textDirection" => match child.val() {
                    Some("btLr") => {
                        css.set("writing-mode", "vertical-rl");
                        css.set("transform", "rotate(180deg)");
                    }
                    Some("tbRl" | "tbRlV") => css.set("writing-mode", "vertical-rl"),
                    _ => {}
                },
                "w:gridSpan" | "w:vMerge" | "w:hMerge" | "w:hideMark" | "w:cnfStyle"
                | "w:tcPrChange" | "w:tcFitText" | "w:headers" | "w:cellIns" | "w:cellDel" => {}
                other => log::warn!("unhandled cell property <{other}>"),
            }
        }
        css
    }

    pub fn parse_table(&self, el: &XmlElement) -> Table {
        let mut table = Table::default();
        if let Some(pr) = el.child("w:tblPr") {
            let props = self.parse_table_properties(pr);
            table.style_id = props.style_id;
            table.css = props.css;
            table.cell_css = props.cell_css;
            table.look = props.look.unwrap_or_default();
            table.row_band_size = props.row_band_size;
            table.col_band_size = props.col_band_size;
        }
        if let Some(grid) = el.child("w:tblGrid") {
            table.columns = grid
                .children_named("w:gridCol")
                .map(|col| {
                    col.attr("w:w")
                        .and_then(parse_number)
                        .map(dxa_to_px)
                        .unwrap_or(0.0)
                })
                .collect();
        }

        // Grid column → (row, cell) of the cell a vertical merge continues.
        let mut merges: HashMap<usize, (usize, usize)> = HashMap::new();
        for tr in el.children_named("w:tr") {
            let row_index = table.rows.len();
            let mut row = TableRow::default();
            let mut col = 0;
            if let Some(pr) = tr.child("w:trPr") {
                let (css, header, grid_before) = self.parse_row_properties(pr);
                row.css = css;
                row.is_header = header;
                col = grid_before;
            }
            for tc in tr.children_named("w:tc") {
                let pr = tc.child("w:tcPr");
                let span = pr
                    .and_then(|p| p.child_val("w:gridSpan"))
                    .and_then(|v| v.parse::<u32>().ok())
                    .unwrap_or(1)
                    .max(1);
                let v_merge = pr.and_then(|p| p.child("w:vMerge")).map(|m| m.val().unwrap_or("continue"));
                let h_merge = pr.and_then(|p| p.child("w:hMerge")).map(|m| m.val().unwrap_or("continue"));

                if h_merge == Some("continue")
                    && let Some(prev) = row.cells.last_mut()
                {
                    prev.col_span += span;
                    col += span as usize;
                    continue;
                }

                match v_merge {
                    Some("continue") => {
                        if let Some(&(r, c)) = merges.get(&col)
                            && let Some(origin) = table.rows.get_mut(r).and_then(|row| row.cells.get_mut(c))
                        {
                            origin.row_span += 1;
                            col += span as usize;
                            continue;
                        }
                        log::debug!("vertical merge continues nothing at column {col}");
                    }
                    Some(_) => {
                        merges.insert(col, (row_index, row.cells.len()));
                    }
                    None => {
                        merges.remove(&col);
                    }
                }

                row.cells.push(TableCell {
                    css: pr.map(|p| self.parse_cell_properties(p)).unwrap_or_default(),
                    grid_col: col,
                    col_span: span,
                    row_span: 1,
                    children: self.parse_blocks(tc),
                });
                col += span as usize;
            }
            table.rows.push(row);
        }
        table
    }
}
