use std::collections::HashMap;

use crate::color::ColorScheme;
use crate::xml::XmlElement;

/// Theme typefaces keyed by the slot names WordprocessingML uses in
/// `w:asciiTheme` and friends (`majorAscii`, `minorEastAsia`, ...).
#[derive(Clone, Debug, Default)]
pub struct ThemeFonts(pub HashMap<String, String>);

#[derive(Clone, Debug, Default)]
pub struct Theme {
    pub colors: HashMap<String, String>,
    pub fonts: ThemeFonts,
}

fn typeface<'a>(font: &'a XmlElement, script: &str) -> Option<&'a str> {
    font.child(script)
        .and_then(|n| n.attr("typeface"))
        .filter(|tf| !tf.is_empty())
}

pub fn parse_theme(root: &XmlElement) -> Theme {
    let mut theme = Theme::default();
    let Some(elements) = root.child("a:themeElements") else {
        log::warn!("theme part has no a:themeElements");
        return theme;
    };

    if let Some(scheme) = elements.child("a:clrScheme") {
        for slot in scheme.elements() {
            let value = slot.elements().next().and_then(|c| match c.local_name() {
                "srgbClr" => c.attr("val"),
                "sysClr" => c.attr("lastClr"),
                other => {
                    log::warn!("unsupported theme color source a:{other}");
                    None
                }
            });
            if let Some(value) = value {
                theme
                    .colors
                    .insert(slot.local_name().to_string(), value.to_string());
            }
        }
    }

    if let Some(scheme) = elements.child("a:fontScheme") {
        for (tag, prefix) in [("a:majorFont", "major"), ("a:minorFont", "minor")] {
            let Some(font) = scheme.child(tag) else {
                continue;
            };
            let slots = [
                ("a:latin", ["Ascii", "HAnsi"].as_slice()),
                ("a:ea", ["EastAsia"].as_slice()),
                ("a:cs", ["Bidi"].as_slice()),
            ];
            for (script, names) in slots {
                if let Some(tf) = typeface(font, script) {
                    for name in names {
                        theme.fonts.0.insert(format!("{prefix}{name}"), tf.to_string());
                    }
                }
            }
        }
    }
    theme
}

impl Theme {
    pub fn color_scheme(&self, mapping: &HashMap<String, String>) -> ColorScheme {
        ColorScheme {
            colors: self.colors.clone(),
            mapping: mapping.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_and_fonts() {
        let xml = r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"><a:themeElements>
            <a:clrScheme name="Office">
              <a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
              <a:accent1><a:srgbClr val="4472C4"/></a:accent1>
            </a:clrScheme>
            <a:fontScheme name="Office">
              <a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>
              <a:minorFont><a:latin typeface="Calibri"/><a:ea typeface="SimSun"/></a:minorFont>
            </a:fontScheme>
          </a:themeElements></a:theme>"#;
        let theme = parse_theme(&crate::xml::parse("theme", xml).unwrap());
        assert_eq!(theme.colors["dk1"], "000000");
        assert_eq!(theme.colors["accent1"], "4472C4");
        assert_eq!(theme.fonts.0["majorHAnsi"], "Calibri Light");
        assert_eq!(theme.fonts.0["minorEastAsia"], "SimSun");
        assert!(!theme.fonts.0.contains_key("majorEastAsia"));
    }
}
