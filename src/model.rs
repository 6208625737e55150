//! Typed document tree. Every property that ends up as CSS is already
//! resolved into a [`Css`] map; lengths used for layout are kept in px.

use std::collections::HashMap;

use crate::css::Css;
use crate::geometry::{Geometry, Guide, ShapeStyle};

pub struct Document {
    pub sections: Vec<Section>,
}

pub struct Section {
    pub properties: SectionProperties,
    pub children: Vec<Block>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionBreak {
    #[default]
    NextPage,
    Continuous,
    EvenPage,
    OddPage,
    NextColumn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeaderFooterKind {
    Default,
    First,
    Even,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderFooterRef {
    pub kind: HeaderFooterKind,
    pub rel_id: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageSize {
    pub width: Option<f64>,  // px
    pub height: Option<f64>, // px
    pub landscape: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageMargins {
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
    pub header: Option<f64>,
    pub footer: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Columns {
    pub count: u32,
    pub space: Option<f64>,
    pub separator: bool,
    pub equal_width: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionProperties {
    pub page_size: PageSize,
    pub page_margins: PageMargins,
    pub columns: Option<Columns>,
    pub headers: Vec<HeaderFooterRef>,
    pub footers: Vec<HeaderFooterRef>,
    pub title_page: bool,
    pub page_number_start: Option<u32>,
    pub break_type: SectionBreak,
}

pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

#[derive(Clone, Debug, PartialEq)]
pub struct NumberingRef {
    pub num_id: String,
    pub level: u8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TabStop {
    pub position: f64, // px
    pub alignment: String,
    pub leader: Option<String>,
}

#[derive(Default)]
pub struct Paragraph {
    pub style_id: Option<String>,
    pub css: Css,
    /// Paragraph mark properties (`w:pPr/w:rPr`), used for the list label.
    pub mark_css: Css,
    pub numbering: Option<NumberingRef>,
    pub tabs: Vec<TabStop>,
    pub keep_next: bool,
    pub keep_lines: bool,
    pub page_break_before: bool,
    pub auto_space: bool,
    pub outline_level: Option<u8>,
    /// A `w:sectPr` inside `w:pPr` closes the section this paragraph ends.
    pub section: Option<SectionProperties>,
    pub children: Vec<Inline>,
}

pub enum Inline {
    Run(Run),
    Hyperlink(Hyperlink),
    SimpleField(SimpleField),
    BookmarkStart(String),
    Math(String),
}

pub struct Hyperlink {
    pub href: Option<String>,
    pub anchor: Option<String>,
    pub tooltip: Option<String>,
    pub children: Vec<Inline>,
}

pub struct SimpleField {
    pub instruction: String,
    pub children: Vec<Inline>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertAlign {
    Superscript,
    Subscript,
}

/// Resolved run formatting. Two runs with equal properties may be merged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunProperties {
    pub style_id: Option<String>,
    pub css: Css,
    pub vert_align: Option<VertAlign>,
}

pub struct Run {
    pub props: RunProperties,
    pub content: Vec<RunContent>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreakKind {
    Line,
    Page,
    Column,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldCharKind {
    Begin,
    Separate,
    End,
}

pub enum RunContent {
    Text(String),
    /// `{{expr}}` template placeholder.
    Variable(String),
    Tab,
    PositionalTab { alignment: String },
    Break(BreakKind),
    LastRenderedPageBreak,
    Symbol { font: Option<String>, ch: char },
    NoBreakHyphen,
    SoftHyphen,
    FieldChar(FieldCharKind),
    InstrText(String),
    FootnoteReference(String),
    EndnoteReference(String),
    /// `w:footnoteRef`/`w:endnoteRef` inside the note body.
    NoteMark,
    Drawing(Drawing),
    Ruby(Ruby),
}

pub struct Ruby {
    pub base: Vec<Run>,
    pub text: Vec<Run>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnchorPosition {
    pub x: f64, // px, relative to `relative_h`
    pub y: f64,
    pub relative_h: String,
    pub relative_v: String,
    pub align_h: Option<String>,
    pub behind_text: bool,
    pub wrap: WrapKind,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WrapKind {
    #[default]
    None,
    Square,
    TopAndBottom,
    Tight,
}

pub struct Drawing {
    pub width: f64, // px
    pub height: f64,
    pub anchor: Option<AnchorPosition>,
    pub items: Vec<DrawingItem>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub x: f64, // px, in the drawing's coordinate space
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64, // degrees
    pub flip_h: bool,
    pub flip_v: bool,
}

pub enum DrawingItem {
    Picture(Picture),
    Shape(Shape),
    Group(Group),
}

pub struct Picture {
    pub frame: Frame,
    /// Package path of the image part; `None` when the relationship is missing.
    pub target: Option<String>,
    pub external: Option<String>,
    pub description: Option<String>,
}

pub enum ShapeGeometry {
    Preset { name: String, adjustments: Vec<Guide> },
    Custom(Geometry),
}

pub struct Shape {
    pub frame: Frame,
    pub geometry: ShapeGeometry,
    pub style: ShapeStyle,
    pub text: Vec<Block>,
    pub text_css: Css,
}

pub struct Group {
    pub frame: Frame,
    pub children: Vec<DrawingItem>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableLook {
    pub first_row: bool,
    pub last_row: bool,
    pub first_column: bool,
    pub last_column: bool,
    pub no_h_band: bool,
    pub no_v_band: bool,
}

#[derive(Default)]
pub struct Table {
    pub style_id: Option<String>,
    pub css: Css,
    /// Applied to every cell: default margins and inside borders.
    pub cell_css: Css,
    pub look: TableLook,
    pub row_band_size: Option<u32>,
    pub col_band_size: Option<u32>,
    pub columns: Vec<f64>, // px
    pub rows: Vec<TableRow>,
}

#[derive(Default)]
pub struct TableRow {
    pub css: Css,
    pub is_header: bool,
    pub cells: Vec<TableCell>,
}

#[derive(Default)]
pub struct TableCell {
    pub css: Css,
    pub grid_col: usize,
    pub col_span: u32,
    pub row_span: u32,
    pub children: Vec<Block>,
}

pub struct Note {
    pub id: String,
    pub children: Vec<Block>,
}

pub struct HeaderFooter {
    pub part: String,
    pub children: Vec<Block>,
}

#[derive(Default)]
pub struct Notes {
    pub footnotes: HashMap<String, Note>,
    pub endnotes: HashMap<String, Note>,
}
