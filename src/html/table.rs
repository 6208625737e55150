use crate::docx::StyleKind;
use crate::model::{Table, TableCell, TableLook};

use super::RenderContext;
use super::dom::Element;

/// Classes switching on conditional regions of the table style.
fn enable_classes(look: &TableLook) -> Vec<&'static str> {
    let mut classes = Vec::new();
    if look.first_row {
        classes.push("enable-firstRow");
    }
    if look.last_row {
        classes.push("enable-lastRow");
    }
    if look.first_column {
        classes.push("enable-firstCol");
    }
    if look.last_column {
        classes.push("enable-lastCol");
    }
    if !look.no_h_band {
        classes.push("enable-hBand");
    }
    if !look.no_v_band {
        classes.push("enable-vBand");
    }
    classes
}

/// Position within the table grid, for the conditional-region classes.
struct GridPosition {
    row: usize,
    rows: usize,
    col: usize,
    span: usize,
    cols: usize,
}

/// Regions a cell belongs to, judged purely by its grid position. Bands
/// alternate every `row_band`/`col_band` rows or columns counted from the
/// first row and column; the table's `enable-*` classes decide which of
/// these regions actually get styled.
fn band_classes(pos: &GridPosition, row_band: usize, col_band: usize) -> Vec<&'static str> {
    let first_row = pos.row == 0;
    let last_row = pos.row + 1 == pos.rows;
    let first_col = pos.col == 0;
    let last_col = pos.col + pos.span >= pos.cols;

    let mut classes = Vec::new();
    if first_row {
        classes.push("firstRow");
    }
    if last_row {
        classes.push("lastRow");
    }
    if first_col {
        classes.push("firstCol");
    }
    if last_col {
        classes.push("lastCol");
    }
    for (on, class) in [
        (first_row && first_col, "nwCell"),
        (first_row && last_col, "neCell"),
        (last_row && first_col, "swCell"),
        (last_row && last_col, "seCell"),
    ] {
        if on {
            classes.push(class);
        }
    }

    let band = pos.row / row_band.max(1);
    classes.push(if band % 2 == 0 { "band1Horz" } else { "band2Horz" });
    let band = pos.col / col_band.max(1);
    classes.push(if band % 2 == 0 { "band1Vert" } else { "band2Vert" });
    classes
}

impl RenderContext<'_> {
    pub(super) fn render_table(&mut self, table: &Table) -> Element {
        let doc = self.doc;
        let mut el = Element::new("table");
        let style_id = table.style_id.as_deref().or_else(|| {
            doc.styles
                .default_style(StyleKind::Table)
                .map(|s| s.id.as_str())
        });
        let style = style_id.and_then(|id| doc.styles.get(id));
        if let Some(id) = style_id {
            for class in doc.styles.class_names(self.prefix, id) {
                el.add_class(class);
            }
        }
        for class in enable_classes(&table.look) {
            el.add_class(class);
        }
        el.style = table.css.clone();

        if !table.columns.is_empty() {
            let mut colgroup = Element::new("colgroup");
            for width in &table.columns {
                let mut col = Element::new("col");
                col.style.set("width", format!("{width:.2}px"));
                colgroup.push(col);
            }
            el.push(colgroup);
        }

        let row_band = table
            .row_band_size
            .or(style.and_then(|s| s.row_band_size))
            .unwrap_or(1) as usize;
        let col_band = table
            .col_band_size
            .or(style.and_then(|s| s.col_band_size))
            .unwrap_or(1) as usize;
        let cols = table.columns.len().max(
            table
                .rows
                .iter()
                .map(|r| r.cells.iter().map(|c| c.grid_col + c.col_span as usize).max().unwrap_or(0))
                .max()
                .unwrap_or(0),
        );

        let mut thead = Element::new("thead");
        let mut tbody = Element::new("tbody");
        let mut in_header = true;
        for (index, row) in table.rows.iter().enumerate() {
            let mut tr = Element::new("tr");
            tr.style = row.css.clone();
            for cell in &row.cells {
                let pos = GridPosition {
                    row: index,
                    rows: table.rows.len(),
                    col: cell.grid_col,
                    span: cell.col_span as usize,
                    cols,
                };
                let classes = band_classes(&pos, row_band, col_band);
                tr.push(self.render_cell(cell, table, &classes));
            }
            in_header &= row.is_header;
            if in_header {
                thead.push(tr);
            } else {
                tbody.push(tr);
            }
        }
        if !thead.children.is_empty() {
            el.push(thead);
        }
        el.push(tbody);
        el
    }

    fn render_cell(&mut self, cell: &TableCell, table: &Table, classes: &[&str]) -> Element {
        let mut td = Element::new("td");
        for class in classes {
            td.add_class(*class);
        }
        td.style = cell.css.clone();
        td.style.fill_from(&table.cell_css);
        if cell.col_span > 1 {
            td.set_attr("colspan", cell.col_span.to_string());
        }
        if cell.row_span > 1 {
            td.set_attr("rowspan", cell.row_span.to_string());
        }
        self.nesting += 1;
        for block in self.render_blocks(&cell.children) {
            td.push(block);
        }
        self.nesting -= 1;
        td
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes_at(row: usize, col: usize, row_band: usize) -> Vec<&'static str> {
        band_classes(
            &GridPosition {
                row,
                rows: 4,
                col,
                span: 1,
                cols: 3,
            },
            row_band,
            1,
        )
    }

    #[test]
    fn corners_and_edges() {
        let top_left = classes_at(0, 0, 1);
        assert!(top_left.contains(&"firstRow") && top_left.contains(&"firstCol"));
        assert!(top_left.contains(&"nwCell"));
        let bottom_right = classes_at(3, 2, 1);
        assert!(bottom_right.contains(&"seCell"));
        assert!(!classes_at(1, 1, 1).contains(&"firstRow"));
    }

    #[test]
    fn bands_follow_grid_position() {
        // The header row keeps its band; row 1 is the second band.
        let header = classes_at(0, 1, 1);
        assert!(header.contains(&"firstRow") && header.contains(&"band1Horz"));
        assert_eq!(classes_at(1, 1, 1), ["band2Horz", "band2Vert"]);
        assert!(classes_at(2, 0, 1).contains(&"band1Horz"));
        assert!(classes_at(2, 0, 1).contains(&"band1Vert"));
        let footer = classes_at(3, 1, 1);
        assert!(footer.contains(&"lastRow") && footer.contains(&"band2Horz"));
    }

    #[test]
    fn band_size_groups_rows() {
        assert!(classes_at(1, 1, 2).contains(&"band1Horz"));
        assert!(classes_at(2, 1, 2).contains(&"band2Horz"));
        assert!(classes_at(3, 1, 2).contains(&"band2Horz"));
    }

    #[test]
    fn look_bits_become_enable_classes() {
        let look = TableLook {
            first_row: true,
            no_v_band: true,
            ..Default::default()
        };
        assert_eq!(enable_classes(&look), ["enable-firstRow", "enable-hBand"]);
    }
}
