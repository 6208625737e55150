use std::collections::HashMap;

use serde::Deserialize;

/// Rendering configuration. Deserializes from the camelCase JSON the CLI
/// accepts with `--options`; every field has a default.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Prefix of every generated CSS class.
    pub class_prefix: String,
    /// Split the body into page sections.
    pub page: bool,
    pub page_wrap: bool,
    pub page_wrap_padding: Option<String>,
    pub page_wrap_background: Option<String>,
    pub ignore_height: bool,
    pub ignore_width: bool,
    /// Floor for `lineRule="auto"` line heights.
    pub min_line_height: f64,
    /// Line height applied to every paragraph, overriding the document.
    pub force_line_height: Option<String>,
    pub enable_var: bool,
    pub data: serde_json::Value,
    pub bullet_use_font: bool,
    pub font_mapping: HashMap<String, String>,
    pub zoom: f64,
    pub zoom_fit_width: bool,
    /// Width of the host container in px, for `zoom_fit_width`.
    pub container_width: Option<f64>,
    pub render_header: bool,
    pub render_footer: bool,
    pub render_footnotes: bool,
    pub render_endnotes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            class_prefix: "docx".to_string(),
            page: true,
            page_wrap: true,
            page_wrap_padding: None,
            page_wrap_background: None,
            ignore_height: false,
            ignore_width: false,
            min_line_height: 1.0,
            force_line_height: None,
            enable_var: false,
            data: serde_json::Value::Null,
            bullet_use_font: true,
            font_mapping: HashMap::new(),
            zoom: 1.0,
            zoom_fit_width: false,
            container_width: None,
            render_header: true,
            render_footer: true,
            render_footnotes: true,
            render_endnotes: true,
        }
    }
}

/// The subset of [`RenderOptions`] that changes how parts are parsed.
/// Parsed state is reused across renders while these stay the same.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOptions {
    pub min_line_height: f64,
    pub force_line_height: Option<String>,
    pub font_mapping: HashMap<String, String>,
    pub enable_var: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        RenderOptions::default().parse_options()
    }
}

impl RenderOptions {
    /// CSS padding of the page wrapper.
    pub fn wrap_padding(&self) -> &str {
        self.page_wrap_padding.as_deref().unwrap_or("30px")
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            min_line_height: self.min_line_height,
            force_line_height: self.force_line_height.clone(),
            font_mapping: self.font_mapping.clone(),
            enable_var: self.enable_var,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_json_with_defaults() {
        let options: RenderOptions = serde_json::from_str(
            r#"{"classPrefix": "doc", "page": false, "minLineHeight": 1.2, "fontMapping": {"Calibri": "Carlito"}}"#,
        )
        .unwrap();
        assert_eq!(options.class_prefix, "doc");
        assert!(!options.page);
        assert_eq!(options.min_line_height, 1.2);
        assert_eq!(options.font_mapping["Calibri"], "Carlito");
        assert!(options.render_header);
        assert_eq!(options.zoom, 1.0);
    }

    #[test]
    fn parse_defaults_match_render_defaults() {
        let parse = ParseOptions::default();
        assert_eq!(parse.min_line_height, 1.0);
        assert_eq!(parse, RenderOptions::default().parse_options());
    }
}
