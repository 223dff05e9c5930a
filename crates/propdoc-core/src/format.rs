//! Display formatting for extracted prop documentation

use crate::scanner::PropInfo;
use serde::Serialize;

/// Placeholder shown when an optional prop has no discoverable default
pub const NO_DEFAULT: &str = "\u{2014}";

/// One row of an API reference table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiRow {
    pub prop: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub default: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Convert extracted props into display-ready rows, preserving order.
///
/// Required props show the literal string `Required` in the default column;
/// optional props show their extracted default or an em-dash placeholder.
pub fn format_rows(props: &[PropInfo]) -> Vec<ApiRow> {
    props
        .iter()
        .map(|p| ApiRow {
            prop: p.prop.clone(),
            ty: format_type(&p.ty),
            default: if p.required {
                "Required".to_string()
            } else {
                p.default.clone().unwrap_or_else(|| NO_DEFAULT.to_string())
            },
            description: p.description.clone(),
        })
        .collect()
}

/// Format a type string for display.
///
/// Union types are re-joined with single-space padding around each `|`.
/// `keyof typeof X` expressions are left exactly as written rather than
/// resolved to concrete literal values; resolving them would mean evaluating
/// the source module.
pub fn format_type(ty: &str) -> String {
    if ty.contains("keyof typeof") {
        return ty.to_string();
    }

    if ty.contains('|') {
        return ty
            .split('|')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" | ");
    }

    ty.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop(required: bool, default: Option<&str>) -> PropInfo {
        PropInfo {
            prop: "value".to_string(),
            ty: "number".to_string(),
            default: default.map(str::to_string),
            required,
            description: None,
        }
    }

    #[test]
    fn test_required_props_show_required() {
        let rows = format_rows(&[prop(true, Some("100"))]);
        assert_eq!(rows[0].default, "Required");
    }

    #[test]
    fn test_optional_prop_shows_default() {
        let rows = format_rows(&[prop(false, Some("100"))]);
        assert_eq!(rows[0].default, "100");
    }

    #[test]
    fn test_missing_default_shows_placeholder() {
        let rows = format_rows(&[prop(false, None)]);
        assert_eq!(rows[0].default, NO_DEFAULT);
    }

    #[test]
    fn test_union_type_normalized() {
        assert_eq!(
            format_type(r#""default"|"success"  |"warning"| "danger""#),
            r#""default" | "success" | "warning" | "danger""#
        );
    }

    #[test]
    fn test_already_normalized_union_unchanged() {
        let ty = r#""default" | "success" | "warning" | "danger""#;
        assert_eq!(format_type(ty), ty);
    }

    #[test]
    fn test_plain_type_passes_through() {
        assert_eq!(format_type("number"), "number");
    }

    #[test]
    fn test_keyof_typeof_left_as_is() {
        let ty = "keyof typeof meterVariants";
        assert_eq!(format_type(ty), ty);
    }

    #[test]
    fn test_row_order_follows_props() {
        let mut a = prop(true, None);
        a.prop = "first".to_string();
        let mut b = prop(false, None);
        b.prop = "second".to_string();

        let rows = format_rows(&[a, b]);
        assert_eq!(rows[0].prop, "first");
        assert_eq!(rows[1].prop, "second");
    }
}
