//! Output formatting for extracted prop documentation

use owo_colors::OwoColorize;
use propdoc_core::{ApiRow, ComponentDoc, format_rows};
use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            _ => None,
        }
    }
}

/// Render extracted component docs in the specified format
pub fn render_docs(docs: &[ComponentDoc], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(docs),
        OutputFormat::Json => render_json(docs),
        OutputFormat::Markdown => render_markdown(docs),
    }
}

fn render_text(docs: &[ComponentDoc]) -> String {
    let mut output = String::new();

    for doc in docs {
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "##".bold(),
            doc.display_name.cyan().bold()
        ));
        if let Some(description) = &doc.description {
            for line in description.lines() {
                output.push_str(&format!("{}\n", line.dimmed()));
            }
        }
        output.push('\n');

        let rows = format_rows(&doc.props);

        // Column widths over the uncolored text
        let prop_width = column_width("Prop", rows.iter().map(|r| r.prop.as_str()));
        let ty_width = column_width("Type", rows.iter().map(|r| r.ty.as_str()));
        let default_width = column_width("Default", rows.iter().map(|r| r.default.as_str()));

        // Pad before coloring so ANSI codes don't skew the columns
        output.push_str(&format!(
            "  {}  {}  {}  {}\n",
            format!("{:prop_width$}", "Prop").bold(),
            format!("{:ty_width$}", "Type").bold(),
            format!("{:default_width$}", "Default").bold(),
            "Description".bold(),
        ));

        for row in &rows {
            let description = row.description.as_deref().unwrap_or("").replace('\n', " ");
            output.push_str(&format!(
                "  {}  {}  {}  {}\n",
                format!("{:prop_width$}", row.prop).green(),
                format!("{:ty_width$}", row.ty),
                format!("{:default_width$}", row.default).yellow(),
                description.dimmed(),
            ));
        }
    }

    output
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(str::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}

#[derive(Serialize)]
struct JsonDoc<'a> {
    component: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    props: Vec<ApiRow>,
}

fn render_json(docs: &[ComponentDoc]) -> String {
    let json_docs: Vec<JsonDoc<'_>> = docs
        .iter()
        .map(|doc| JsonDoc {
            component: &doc.display_name,
            description: doc.description.as_deref(),
            props: format_rows(&doc.props),
        })
        .collect();

    serde_json::to_string_pretty(&json_docs).expect("JSON serialization failed")
}

fn render_markdown(docs: &[ComponentDoc]) -> String {
    let mut output = String::new();

    for doc in docs {
        output.push_str(&format!("## {}\n\n", doc.display_name));
        if let Some(description) = &doc.description {
            output.push_str(description);
            output.push_str("\n\n");
        }

        output.push_str("| Prop | Type | Default | Description |\n");
        output.push_str("| --- | --- | --- | --- |\n");
        for row in format_rows(&doc.props) {
            output.push_str(&format!(
                "| `{}` | `{}` | {} | {} |\n",
                row.prop,
                row.ty,
                row.default,
                row.description.unwrap_or_default().replace('\n', " "),
            ));
        }
        output.push('\n');
    }

    output
}
