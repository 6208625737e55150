use crate::geometry::{GeometrySource, ShapeStyle, render_geometry};
use crate::model::{AnchorPosition, Drawing, DrawingItem, Frame, Picture, Shape, ShapeGeometry, WrapKind};

use super::RenderContext;
use super::dom::Element;

fn place(el: &mut Element, frame: &Frame) {
    el.style.set("position", "absolute");
    el.style.set("left", format!("{:.2}px", frame.x));
    el.style.set("top", format!("{:.2}px", frame.y));
    el.style.set("width", format!("{:.2}px", frame.width));
    el.style.set("height", format!("{:.2}px", frame.height));
    let mut transforms = Vec::new();
    if frame.rotation.abs() > f64::EPSILON {
        transforms.push(format!("rotate({:.2}deg)", frame.rotation));
    }
    if frame.flip_h {
        transforms.push("scaleX(-1)".to_string());
    }
    if frame.flip_v {
        transforms.push("scaleY(-1)".to_string());
    }
    if !transforms.is_empty() {
        el.style.set("transform", transforms.join(" "));
    }
}

impl RenderContext<'_> {
    pub(super) fn render_drawing(&mut self, drawing: &Drawing) -> Element {
        let mut container = Element::new("span").with_class(self.class("drawing"));
        container.style.set("display", "inline-block");
        container.style.set("position", "relative");
        container.style.set("width", format!("{:.2}px", drawing.width));
        container.style.set("height", format!("{:.2}px", drawing.height));
        if let Some(anchor) = &drawing.anchor {
            self.position_anchor(&mut container, anchor);
        }
        for item in &drawing.items {
            if let Some(el) = self.render_item(item) {
                container.push(el);
            }
        }
        container
    }

    fn position_anchor(&self, el: &mut Element, anchor: &AnchorPosition) {
        match anchor.wrap {
            WrapKind::Square | WrapKind::Tight => {
                let right = anchor.align_h.as_deref() == Some("right");
                el.style.set("float", if right { "right" } else { "left" });
                if !right && anchor.align_h.is_none() && anchor.relative_h != "page" {
                    el.style.set("margin-left", format!("{:.2}px", anchor.x));
                }
            }
            WrapKind::TopAndBottom => {
                el.style.set("display", "block");
                el.style.set("margin-left", format!("{:.2}px", anchor.x));
                el.style.set("margin-top", format!("{:.2}px", anchor.y));
            }
            WrapKind::None => {
                el.style.set("position", "absolute");
                let (dx, dy) = match anchor.relative_h.as_str() {
                    "page" => (0.0, 0.0),
                    "margin" => self.margins,
                    _ => {
                        el.style.set("margin-left", format!("{:.2}px", anchor.x));
                        el.style.set("margin-top", format!("{:.2}px", anchor.y));
                        return self.stack(el, anchor);
                    }
                };
                el.style.set("left", format!("{:.2}px", anchor.x + dx));
                el.style.set("top", format!("{:.2}px", anchor.y + dy));
                self.stack(el, anchor);
            }
        }
    }

    fn stack(&self, el: &mut Element, anchor: &AnchorPosition) {
        el.style
            .set("z-index", if anchor.behind_text { "-1" } else { "1" });
    }

    fn render_item(&mut self, item: &DrawingItem) -> Option<Element> {
        match item {
            DrawingItem::Picture(picture) => self.render_picture(picture),
            DrawingItem::Shape(shape) => Some(self.render_shape(shape)),
            DrawingItem::Group(group) => {
                let mut el = Element::new("span");
                place(&mut el, &group.frame);
                for child in &group.children {
                    if let Some(child) = self.render_item(child) {
                        el.push(child);
                    }
                }
                Some(el)
            }
        }
    }

    fn render_picture(&mut self, picture: &Picture) -> Option<Element> {
        let src = match (&picture.target, &picture.external) {
            (Some(part), _) => self.image(part),
            (None, Some(url)) => Some(url.clone()),
            (None, None) => None,
        }?;
        let mut img = Element::new("img")
            .with_attr("src", src)
            .with_attr("alt", picture.description.clone().unwrap_or_default());
        place(&mut img, &picture.frame);
        Some(img)
    }

    fn render_shape(&mut self, shape: &Shape) -> Element {
        let mut el = Element::new("span");
        place(&mut el, &shape.frame);
        let source = match &shape.geometry {
            ShapeGeometry::Preset { name, .. } => GeometrySource::Preset(name),
            ShapeGeometry::Custom(geometry) => GeometrySource::Custom(geometry),
        };
        let adjustments = match &shape.geometry {
            ShapeGeometry::Preset { adjustments, .. } => adjustments.as_slice(),
            ShapeGeometry::Custom(_) => &[],
        };
        if let Some(svg) = render_geometry(
            source,
            adjustments,
            &shape.style,
            shape.frame.width,
            shape.frame.height,
            &ShapeStyle::default(),
        ) {
            let mut svg = svg;
            svg.style.set("position", "absolute");
            svg.style.set("left", "0");
            svg.style.set("top", "0");
            el.push(svg);
        }

        if !shape.text.is_empty() {
            let mut text_box = Element::new("span").with_class(self.class("textbox"));
            text_box.style = shape.text_css.clone();
            text_box.style.set("position", "absolute");
            text_box.style.set("inset", "0");
            text_box.style.set("display", "flex");
            text_box.style.set("flex-direction", "column");
            let saved = std::mem::replace(&mut self.in_text_box, true);
            self.nesting += 1;
            for block in self.render_blocks(&shape.text) {
                text_box.push(block);
            }
            self.nesting -= 1;
            self.in_text_box = saved;
            el.push(text_box);
        }
        el
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_carry_rotation_and_flips() {
        let mut el = Element::new("span");
        place(
            &mut el,
            &Frame {
                x: 10.0,
                y: 5.0,
                width: 40.0,
                height: 20.0,
                rotation: 90.0,
                flip_h: true,
                flip_v: false,
            },
        );
        assert_eq!(el.style.get("left"), Some("10.00px"));
        assert_eq!(el.style.get("transform"), Some("rotate(90.00deg) scaleX(-1)"));
    }

    #[test]
    fn unrotated_frames_have_no_transform() {
        let mut el = Element::new("img");
        place(&mut el, &Frame::default());
        assert_eq!(el.style.get("transform"), None);
    }
}
