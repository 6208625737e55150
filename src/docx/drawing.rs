//! DrawingML (`w:drawing`) and legacy VML (`w:pict`) graphics.

use crate::color::resolve_color;
use crate::css::Css;
use crate::geometry::{ShapeStyle, parse_adjustments, parse_custom_geometry};
use crate::model::{
    AnchorPosition, Drawing, DrawingItem, Frame, Group, Picture, Shape, ShapeGeometry, WrapKind,
};
use crate::units::{LengthUnit, attr_bool, emu_to_px, parse_number};
use crate::xml::XmlElement;

use super::Parser;

fn emu_attr(el: &XmlElement, attr: &str) -> f64 {
    el.attr(attr).and_then(parse_number).map(emu_to_px).unwrap_or(0.0)
}

/// `a:xfrm`/`a:off`/`a:ext` pairs; the child offsets are in the same units
/// the parent group declares with `a:chOff`/`a:chExt`.
fn transform(xfrm: Option<&XmlElement>) -> Frame {
    let Some(xfrm) = xfrm else {
        return Frame::default();
    };
    let (x, y) = xfrm
        .child("a:off")
        .map(|off| (emu_attr(off, "x"), emu_attr(off, "y")))
        .unwrap_or_default();
    let (width, height) = xfrm
        .child("a:ext")
        .map(|ext| (emu_attr(ext, "cx"), emu_attr(ext, "cy")))
        .unwrap_or_default();
    Frame {
        x,
        y,
        width,
        height,
        rotation: xfrm.attr("rot").and_then(parse_number).unwrap_or(0.0) / 60_000.0,
        flip_h: attr_bool(xfrm, "flipH", false),
        flip_v: attr_bool(xfrm, "flipV", false),
    }
}

/// Map a child frame from the group's child space into its own box.
fn map_child(frame: &mut Frame, ch_off: (f64, f64), ch_ext: (f64, f64), ext: (f64, f64)) {
    let sx = if ch_ext.0 > 0.0 { ext.0 / ch_ext.0 } else { 1.0 };
    let sy = if ch_ext.1 > 0.0 { ext.1 / ch_ext.1 } else { 1.0 };
    frame.x = (frame.x - ch_off.0) * sx;
    frame.y = (frame.y - ch_off.1) * sy;
    frame.width *= sx;
    frame.height *= sy;
}

fn item_frame_mut(item: &mut DrawingItem) -> &mut Frame {
    match item {
        DrawingItem::Picture(p) => &mut p.frame,
        DrawingItem::Shape(s) => &mut s.frame,
        DrawingItem::Group(g) => &mut g.frame,
    }
}

fn dash_array(preset: &str, width: f64) -> Option<String> {
    let w = width.max(1.0);
    let pattern: &[f64] = match preset {
        "solid" => return None,
        "dot" | "sysDot" => &[1.0, 1.0],
        "dash" | "sysDash" => &[3.0, 1.0],
        "lgDash" => &[8.0, 3.0],
        "dashDot" | "sysDashDot" => &[4.0, 3.0, 1.0, 3.0],
        "lgDashDot" => &[8.0, 3.0, 1.0, 3.0],
        "lgDashDotDot" | "sysDashDotDot" => &[8.0, 3.0, 1.0, 3.0, 1.0, 3.0],
        other => {
            log::warn!("unknown dash preset {other:?}");
            return None;
        }
    };
    Some(
        pattern
            .iter()
            .map(|p| format!("{:.2}", p * w))
            .collect::<Vec<_>>()
            .join(" "),
    )
}

fn anchor_position(anchor: &XmlElement) -> AnchorPosition {
    let mut pos = AnchorPosition {
        behind_text: attr_bool(anchor, "behindDoc", false),
        relative_h: "column".to_string(),
        relative_v: "paragraph".to_string(),
        ..Default::default()
    };
    if let Some(h) = anchor.child("wp:positionH") {
        if let Some(rel) = h.attr("relativeFrom") {
            pos.relative_h = rel.to_string();
        }
        if let Some(offset) = h.child("wp:posOffset") {
            pos.x = parse_number(&offset.text()).map(emu_to_px).unwrap_or(0.0);
        }
        pos.align_h = h.child("wp:align").map(XmlElement::text);
    }
    if let Some(v) = anchor.child("wp:positionV") {
        if let Some(rel) = v.attr("relativeFrom") {
            pos.relative_v = rel.to_string();
        }
        if let Some(offset) = v.child("wp:posOffset") {
            pos.y = parse_number(&offset.text()).map(emu_to_px).unwrap_or(0.0);
        }
    }
    pos.wrap = anchor
        .elements()
        .find_map(|c| match c.name.as_str() {
            "wp:wrapSquare" => Some(WrapKind::Square),
            "wp:wrapTopAndBottom" => Some(WrapKind::TopAndBottom),
            "wp:wrapTight" | "wp:wrapThrough" => Some(WrapKind::Tight),
            "wp:wrapNone" => Some(WrapKind::None),
            _ => None,
        })
        .unwrap_or_default();
    pos
}

/// `width:72pt;height:36.5pt` from a VML style attribute, in px.
fn vml_size(style: &str, property: &str) -> Option<f64> {
    style.split(';').find_map(|decl| {
        let (name, value) = decl.split_once(':')?;
        if name.trim() != property {
            return None;
        }
        let value = value.trim();
        let n = parse_number(value)?;
        Some(if value.ends_with("px") {
            n
        } else if value.ends_with("in") {
            n * 96.0
        } else {
            n * LengthUnit::Point.multiplier()
        })
    })
}

impl Parser<'_> {
    pub(crate) fn parse_drawing(&self, el: &XmlElement) -> Option<Drawing> {
        let container = el.elements().find(|c| c.is("wp:inline") || c.is("wp:anchor"))?;
        let (width, height) = container
            .child("wp:extent")
            .map(|ext| (emu_attr(ext, "cx"), emu_attr(ext, "cy")))
            .unwrap_or_default();
        let anchor = container.is("wp:anchor").then(|| anchor_position(container));
        let description = container
            .child("wp:docPr")
            .and_then(|d| d.attr("descr").or_else(|| d.attr("title")))
            .map(str::to_string);

        let data = container.child("a:graphic")?.child("a:graphicData")?;
        let mut items = Vec::new();
        for graphic in data.elements() {
            if let Some(mut item) = self.parse_graphic_item(graphic) {
                let frame = item_frame_mut(&mut item);
                // The outer placement comes from wp:extent, not the inner xfrm.
                frame.x = 0.0;
                frame.y = 0.0;
                frame.width = width;
                frame.height = height;
                if let DrawingItem::Picture(p) = &mut item
                    && p.description.is_none()
                {
                    p.description = description.clone();
                }
                items.push(item);
            }
        }
        Some(Drawing {
            width,
            height,
            anchor,
            items,
        })
    }

    fn parse_graphic_item(&self, el: &XmlElement) -> Option<DrawingItem> {
        match el.name.as_str() {
            "pic:pic" => self.parse_picture(el).map(DrawingItem::Picture),
            "wps:wsp" => Some(DrawingItem::Shape(self.parse_shape(el))),
            "wpg:wgp" | "wpg:grpSp" => Some(DrawingItem::Group(self.parse_group(el))),
            "wps:bodyPr" | "wpg:cNvGrpSpPr" | "wpg:grpSpPr" | "wps:cNvPr" | "wps:cNvSpPr"
            | "wps:cNvCnPr" | "wpg:cNvPr" => None,
            other => {
                log::warn!("unsupported drawing content <{other}>");
                None
            }
        }
    }

    fn parse_picture(&self, el: &XmlElement) -> Option<Picture> {
        let blip = el.child("pic:blipFill")?.child("a:blip")?;
        let frame = transform(el.child("pic:spPr").and_then(|sp| sp.child("a:xfrm")));
        let description = el
            .child("pic:nvPicPr")
            .and_then(|nv| nv.child("pic:cNvPr"))
            .and_then(|c| c.attr("descr"))
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        let rel_id = blip.attr("r:embed").or_else(|| blip.attr("r:link"));
        let (target, external) = match rel_id.and_then(|id| self.rels.get(id)) {
            Some(rel) if rel.external => (None, Some(rel.target.clone())),
            Some(rel) => (Some(rel.part.clone()), None),
            None => {
                log::warn!("picture relationship {rel_id:?} not found");
                (None, None)
            }
        };
        Some(Picture {
            frame,
            target,
            external,
            description,
        })
    }

    fn shape_style(&self, sp_pr: Option<&XmlElement>) -> ShapeStyle {
        let mut style = ShapeStyle::default();
        let Some(sp_pr) = sp_pr else {
            return style;
        };
        for child in sp_pr.elements() {
            match child.name.as_str() {
                "a:solidFill" => {
                    style.fill = child
                        .elements()
                        .next()
                        .map(|c| resolve_color(self.scheme, c, "val", "transparent"))
                        .filter(|c| !c.is_empty())
                }
                "a:noFill" => style.fill = Some("none".to_string()),
                "a:ln" => {
                    let width = child.attr("w").and_then(parse_number).map(emu_to_px);
                    style.stroke_width = width;
                    for ln in child.elements() {
                        match ln.name.as_str() {
                            "a:noFill" => style.stroke = Some("none".to_string()),
                            "a:solidFill" => {
                                style.stroke = ln
                                    .elements()
                                    .next()
                                    .map(|c| resolve_color(self.scheme, c, "val", "black"))
                                    .filter(|c| !c.is_empty())
                            }
                            "a:prstDash" => {
                                style.stroke_dash = ln
                                    .attr("val")
                                    .and_then(|v| dash_array(v, width.unwrap_or(1.0)))
                            }
                            _ => {}
                        }
                    }
                }
                "a:gradFill" => {
                    // First stop approximates the gradient.
                    style.fill = child
                        .find("a:gs")
                        .and_then(|gs| gs.elements().next())
                        .map(|c| resolve_color(self.scheme, c, "val", "transparent"))
                        .filter(|c| !c.is_empty())
                }
                "a:xfrm" | "a:prstGeom" | "a:custGeom" | "a:effectLst" | "a:extLst" => {}
                other => log::debug!("ignoring shape property <{other}>"),
            }
        }
        style
    }

    /// Fill and line colors referenced by `wps:style`, used where `spPr` is silent.
    fn inherited_style(&self, style: Option<&XmlElement>) -> ShapeStyle {
        let color_of = |tag: &str, auto: &str| {
            style
                .and_then(|s| s.child(tag))
                .and_then(|r| r.elements().next())
                .map(|c| resolve_color(self.scheme, c, "val", auto))
                .filter(|c| !c.is_empty())
        };
        ShapeStyle {
            fill: color_of("a:fillRef", "transparent"),
            stroke: color_of("a:lnRef", "black"),
            stroke_width: style
                .and_then(|s| s.child("a:lnRef"))
                .and_then(|r| r.attr("idx"))
                .and_then(parse_number)
                .filter(|idx| *idx > 0.0)
                .map(|_| 1.0),
            stroke_dash: None,
        }
    }

    fn parse_shape(&self, el: &XmlElement) -> Shape {
        let sp_pr = el.child("wps:spPr");
        let frame = transform(sp_pr.and_then(|sp| sp.child("a:xfrm")));
        let geometry = match sp_pr.and_then(|sp| sp.child("a:custGeom")) {
            Some(cust) => ShapeGeometry::Custom(parse_custom_geometry(cust)),
            None => {
                let prst = sp_pr.and_then(|sp| sp.child("a:prstGeom"));
                ShapeGeometry::Preset {
                    name: prst.and_then(|p| p.attr("prst")).unwrap_or("rect").to_string(),
                    adjustments: parse_adjustments(prst.and_then(|p| p.child("a:avLst"))),
                }
            }
        };
        let mut style = self.shape_style(sp_pr);
        let inherited = self.inherited_style(el.child("wps:style"));
        if style.fill.is_none() {
            style.fill = inherited.fill;
        }
        if style.stroke.is_none() {
            style.stroke = inherited.stroke;
        }
        if style.stroke_width.is_none() {
            style.stroke_width = inherited.stroke_width;
        }

        let text = el
            .child("wps:txbx")
            .and_then(|t| t.child("w:txbxContent"))
            .map(|content| self.parse_blocks(content))
            .unwrap_or_default();

        let mut text_css = Css::new();
        if let Some(body) = el.child("wps:bodyPr") {
            // Insets default to 0.1in left/right and 0.05in top/bottom.
            let inset = |attr: &str, default: f64| {
                body.attr(attr)
                    .and_then(parse_number)
                    .map(emu_to_px)
                    .unwrap_or(default)
            };
            text_css.set(
                "padding",
                format!(
                    "{:.2}px {:.2}px {:.2}px {:.2}px",
                    inset("tIns", 4.8),
                    inset("rIns", 9.6),
                    inset("bIns", 4.8),
                    inset("lIns", 9.6)
                ),
            );
            match body.attr("anchor") {
                Some("ctr") => text_css.set("justify-content", "center"),
                Some("b") => text_css.set("justify-content", "flex-end"),
                _ => {}
            }
        }

        Shape {
            frame,
            geometry,
            style,
            text,
            text_css,
        }
    }

    fn parse_group(&self, el: &XmlElement) -> Group {
        let xfrm = el.child("wpg:grpSpPr").and_then(|g| g.child("a:xfrm"));
        let frame = transform(xfrm);
        let pair = |tag: &str, a: &str, b: &str| {
            xfrm.and_then(|x| x.child(tag))
                .map(|c| (emu_attr(c, a), emu_attr(c, b)))
        };
        let ch_off = pair("a:chOff", "x", "y").unwrap_or((frame.x, frame.y));
        let ch_ext = pair("a:chExt", "cx", "cy").unwrap_or((frame.width, frame.height));

        let mut children = Vec::new();
        for child in el.elements() {
            if let Some(mut item) = self.parse_graphic_item(child) {
                map_child(
                    item_frame_mut(&mut item),
                    ch_off,
                    ch_ext,
                    (frame.width, frame.height),
                );
                children.push(item);
            }
        }
        Group { frame, children }
    }

    /// `v:imagedata` inside `w:pict`/`w:object`; other VML is not drawn.
    pub(crate) fn parse_vml(&self, el: &XmlElement) -> Option<Drawing> {
        let Some(image) = el.find("v:imagedata") else {
            log::debug!("skipping VML content without an image");
            return None;
        };
        let shape_style = el
            .elements()
            .find(|c| c.name.starts_with("v:"))
            .and_then(|shape| shape.attr("style"))
            .unwrap_or_default();
        let width = vml_size(shape_style, "width").unwrap_or(0.0);
        let height = vml_size(shape_style, "height").unwrap_or(0.0);
        let rel_id = image.attr("r:id").or_else(|| image.attr("r:pict"));
        let (target, external) = match rel_id.and_then(|id| self.rels.get(id)) {
            Some(rel) if rel.external => (None, Some(rel.target.clone())),
            Some(rel) => (Some(rel.part.clone()), None),
            None => {
                log::warn!("VML image relationship {rel_id:?} not found");
                return None;
            }
        };
        Some(Drawing {
            width,
            height,
            anchor: None,
            items: vec![DrawingItem::Picture(Picture {
                frame: Frame {
                    width,
                    height,
                    ..Default::default()
                },
                target,
                external,
                description: image.attr("o:title").map(str::to_string),
            })],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorScheme;
    use crate::docx::Relationships;
    use crate::options::ParseOptions;
    use crate::xml;

    const NS: &str = r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture" xmlns:wps="http://schemas.microsoft.com/office/word/2010/wordprocessingShape" xmlns:wpg="http://schemas.microsoft.com/office/word/2010/wordprocessingGroup" xmlns:v="urn:schemas-microsoft-com:vml""#;

    const RELS: &str = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId5" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="media/image1.png"/></Relationships>"#;

    fn with_parser<T>(f: impl FnOnce(&Parser) -> T) -> T {
        let rels_root = xml::parse("word/_rels/document.xml.rels", RELS).unwrap();
        let rels = Relationships::parse(&rels_root, "word/document.xml");
        let mut scheme = ColorScheme::default();
        scheme.colors.insert("accent1".into(), "4472C4".into());
        let options = ParseOptions::default();
        f(&Parser {
            scheme: &scheme,
            options: &options,
            rels: &rels,
        })
    }

    fn drawing(body: &str) -> Option<Drawing> {
        let root = xml::parse("word/document.xml", &format!("<w:drawing {NS}>{body}</w:drawing>")).unwrap();
        with_parser(|p| p.parse_drawing(&root))
    }

    #[test]
    fn inline_picture_resolves_its_part() {
        let d = drawing(
            r#"<wp:inline><wp:extent cx="914400" cy="457200"/><wp:docPr id="1" name="Picture 1" descr="logo"/>
               <a:graphic><a:graphicData><pic:pic><pic:blipFill><a:blip r:embed="rId5"/></pic:blipFill>
               <pic:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="914400" cy="457200"/></a:xfrm></pic:spPr></pic:pic></a:graphicData></a:graphic></wp:inline>"#,
        )
        .unwrap();
        assert!((d.width - 96.0).abs() < 0.01 && (d.height - 48.0).abs() < 0.01);
        assert!(d.anchor.is_none());
        let DrawingItem::Picture(p) = &d.items[0] else {
            panic!("expected a picture");
        };
        assert_eq!(p.target.as_deref(), Some("word/media/image1.png"));
        assert_eq!(p.description.as_deref(), Some("logo"));
    }

    #[test]
    fn anchored_shape_with_theme_fill() {
        let d = drawing(
            r#"<wp:anchor behindDoc="1"><wp:positionH relativeFrom="page"><wp:posOffset>914400</wp:posOffset></wp:positionH>
               <wp:positionV relativeFrom="paragraph"><wp:posOffset>0</wp:posOffset></wp:positionV>
               <wp:extent cx="1828800" cy="914400"/><wp:wrapSquare wrapText="bothSides"/>
               <a:graphic><a:graphicData><wps:wsp><wps:spPr><a:prstGeom prst="roundRect"><a:avLst><a:gd name="adj" fmla="val 25000"/></a:avLst></a:prstGeom>
               <a:solidFill><a:schemeClr val="accent1"/></a:solidFill><a:ln w="12700"><a:prstDash val="dash"/></a:ln></wps:spPr>
               <wps:style><a:lnRef idx="2"><a:srgbClr val="FF0000"/></a:lnRef></wps:style>
               <wps:bodyPr anchor="ctr"/></wps:wsp></a:graphicData></a:graphic></wp:anchor>"#,
        )
        .unwrap();
        let anchor = d.anchor.unwrap();
        assert!(anchor.behind_text);
        assert_eq!(anchor.relative_h, "page");
        assert!((anchor.x - 96.0).abs() < 0.01);
        assert_eq!(anchor.wrap, WrapKind::Square);
        let DrawingItem::Shape(shape) = &d.items[0] else {
            panic!("expected a shape");
        };
        let ShapeGeometry::Preset { name, adjustments } = &shape.geometry else {
            panic!("expected a preset");
        };
        assert_eq!(name, "roundRect");
        assert_eq!(adjustments[0].formula, "val 25000");
        assert_eq!(shape.style.fill.as_deref(), Some("#4472c4"));
        assert_eq!(shape.style.stroke.as_deref(), Some("#ff0000"));
        assert!(shape.style.stroke_dash.is_some());
        assert_eq!(shape.text_css.get("justify-content"), Some("center"));
    }

    #[test]
    fn group_children_are_mapped_into_the_group_box() {
        let d = drawing(
            r#"<wp:inline><wp:extent cx="1828800" cy="1828800"/>
               <a:graphic><a:graphicData><wpg:wgp><wpg:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="1828800" cy="1828800"/><a:chOff x="0" y="0"/><a:chExt cx="914400" cy="914400"/></a:xfrm></wpg:grpSpPr>
               <wps:wsp><wps:spPr><a:xfrm><a:off x="457200" y="0"/><a:ext cx="457200" cy="457200"/></a:xfrm><a:prstGeom prst="ellipse"/></wps:spPr></wps:wsp>
               </wpg:wgp></a:graphicData></a:graphic></wp:inline>"#,
        )
        .unwrap();
        let DrawingItem::Group(group) = &d.items[0] else {
            panic!("expected a group");
        };
        let DrawingItem::Shape(child) = &group.children[0] else {
            panic!("expected a shape");
        };
        assert!((child.frame.x - 96.0).abs() < 0.01);
        assert!((child.frame.width - 96.0).abs() < 0.01);
    }

    #[test]
    fn vml_image_size_from_style() {
        let root = xml::parse(
            "word/document.xml",
            &format!(r#"<w:pict {NS}><v:shape style="width:72pt;height:36pt"><v:imagedata r:id="rId5" o:title="" xmlns:o="urn:schemas-microsoft-com:office:office"/></v:shape></w:pict>"#),
        )
        .unwrap();
        let d = with_parser(|p| p.parse_vml(&root)).unwrap();
        assert!((d.width - 96.0).abs() < 0.01);
        assert!((d.height - 48.0).abs() < 0.01);
    }

    #[test]
    fn missing_image_relationship_yields_nothing() {
        let root = xml::parse(
            "word/document.xml",
            &format!(r#"<w:pict {NS}><v:shape style="width:10pt"><v:imagedata r:id="rId99"/></v:shape></w:pict>"#),
        )
        .unwrap();
        assert!(with_parser(|p| p.parse_vml(&root)).is_none());
    }
}
