//! Interface scanner for extracting prop documentation from component source
//!
//! Scans component source text for `interface <Name>Props` declarations and
//! produces [`ComponentDoc`] records with one [`PropInfo`] per documented
//! field. This is a best-effort scanner over a stylized subset of TypeScript,
//! not a parser: it does not build an AST, and declarations that don't match
//! the expected shape are skipped rather than reported. Known gaps:
//!
//! - string literals containing braces can confuse body extraction
//! - multi-line default expressions are never recovered
//! - nested generic types are stripped lossily, not reconstructed

use serde::Serialize;
use std::ops::Range;

/// Documentation for one prop of a component interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropInfo {
    /// Property name
    pub prop: String,
    /// Type as written in the source (free-form text, not structured)
    #[serde(rename = "type")]
    pub ty: String,
    /// Default value, if one could be sniffed out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Whether the field was declared without the optional `?` marker
    pub required: bool,
    /// Description from the field's doc comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Documentation extracted for one `*Props`-suffixed interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentDoc {
    /// Interface identifier with the `Props` suffix stripped
    pub display_name: String,
    /// Doc comment preceding the `const`/`function` declaration of the
    /// component itself, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Props in declaration order
    pub props: Vec<PropInfo>,
}

/// Extract component documentation from source text.
///
/// Returns one [`ComponentDoc`] per `*Props` interface that yielded at least
/// one prop; interfaces with zero documentable fields are omitted. Never
/// fails: unrecognized or malformed input simply produces a smaller result.
///
/// ```
/// let source = r#"
/// interface WidgetProps {
///     /** Current value */
///     value: number;
///     /** Maximum value (default: 100) */
///     max?: number;
///     className?: string;
/// }
/// "#;
///
/// let docs = propdoc_core::extract_docs(source);
/// assert_eq!(docs.len(), 1);
/// assert_eq!(docs[0].display_name, "Widget");
/// assert_eq!(docs[0].props.len(), 2);
/// assert_eq!(docs[0].props[1].default.as_deref(), Some("100"));
/// ```
pub fn extract_docs(content: &str) -> Vec<ComponentDoc> {
    let mut docs = Vec::new();

    for decl in find_props_interfaces(content) {
        let display_name = decl
            .name
            .strip_suffix("Props")
            .unwrap_or(decl.name)
            .to_string();
        let description = component_description(content, &display_name);
        let props = scan_fields(decl.body, content, decl.body_start);

        if !props.is_empty() {
            docs.push(ComponentDoc {
                display_name,
                description,
                props,
            });
        }
    }

    docs
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A `*Props` interface declaration found in source text
struct InterfaceDecl<'a> {
    name: &'a str,
    /// Text between the interface's braces (balanced over nesting)
    body: &'a str,
    /// Byte offset of `body` within the source text
    body_start: usize,
}

fn find_props_interfaces(content: &str) -> Vec<InterfaceDecl<'_>> {
    let bytes = content.as_bytes();
    let mut decls = Vec::new();
    let mut search = 0;

    while let Some(rel) = content[search..].find("interface") {
        let at = search + rel;
        search = at + "interface".len();

        // `interface` must be a standalone keyword
        if at > 0 && is_ident_byte(bytes[at - 1]) {
            continue;
        }
        let after_kw = at + "interface".len();
        let rest = &content[after_kw..];
        if !rest.starts_with(|c: char| c.is_ascii_whitespace()) {
            continue;
        }

        let name_start = after_kw + (rest.len() - rest.trim_start().len());
        let rest = &content[name_start..];
        let name_len = rest.find(|c| !is_ident_char(c)).unwrap_or(rest.len());
        let name = &rest[..name_len];
        if name.len() <= "Props".len() || !name.ends_with("Props") {
            continue;
        }

        // Skip past generics / extends clause to the opening brace
        let Some(open_rel) = content[name_start + name_len..].find('{') else {
            continue;
        };
        let open = name_start + name_len + open_rel;
        if let Some(body) = balanced_block(content, open) {
            decls.push(InterfaceDecl {
                name,
                body,
                body_start: open + 1,
            });
        }
    }

    decls
}

/// Text between the brace at `open` and its matching close brace. Tracks
/// nesting depth so an inner `}` never terminates the block early.
fn balanced_block(content: &str, open: usize) -> Option<&str> {
    let bytes = content.as_bytes();
    debug_assert_eq!(bytes[open], b'{');

    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&content[open + 1..i]);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Find the doc comment for a component: a `/** ... */` block immediately
/// preceding `const <name>` or `function <name>` (optionally with an
/// intervening `export`).
fn component_description(content: &str, name: &str) -> Option<String> {
    let bytes = content.as_bytes();

    for keyword in ["const", "function"] {
        let needle = format!("{keyword} {name}");
        let mut search = 0;

        while let Some(rel) = content[search..].find(&needle) {
            let at = search + rel;
            search = at + needle.len();

            if at > 0 && is_ident_byte(bytes[at - 1]) {
                continue;
            }
            let end = at + needle.len();
            if end < bytes.len() && is_ident_byte(bytes[end]) {
                continue;
            }

            if let Some(comment) = doc_comment_before(content, at) {
                return Some(comment);
            }
        }
    }

    None
}

/// The cleaned `/** ... */` comment whose closing delimiter sits directly
/// before `decl_start`, allowing whitespace and an `export` keyword between.
fn doc_comment_before(content: &str, decl_start: usize) -> Option<String> {
    let mut head = content[..decl_start].trim_end();
    if let Some(stripped) = head.strip_suffix("export") {
        head = stripped.trim_end();
    }
    let head = head.strip_suffix("*/")?;
    let start = head.rfind("/**")?;

    let cleaned = clean_doc_comment(&content[start..head.len() + "*/".len()]);
    if cleaned.is_empty() { None } else { Some(cleaned) }
}

/// Strip `/** */` delimiters and leading `*` line markers from a doc comment
fn clean_doc_comment(raw: &str) -> String {
    let raw = raw.trim();
    let raw = raw.strip_prefix("/**").unwrap_or(raw);
    let raw = raw.strip_suffix("*/").unwrap_or(raw);

    let lines: Vec<&str> = raw
        .lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix('*')
                .map(|rest| rest.strip_prefix(' ').unwrap_or(rest))
                .unwrap_or(line)
        })
        .collect();

    lines.join("\n").trim().to_string()
}

/// Scan the fields of an interface body. `file` is the whole source text,
/// used for the default-value heuristic; `body_start` is the body's byte
/// offset within it.
fn scan_fields(body: &str, file: &str, body_start: usize) -> Vec<PropInfo> {
    let bytes = body.as_bytes();
    let body_span = body_start..body_start + body.len();
    let mut props = Vec::new();
    let mut pending_doc: Option<String> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if b.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        // Doc comment: attaches to the next field
        if body[i..].starts_with("/**") {
            let Some(end) = body[i..].find("*/") else {
                break;
            };
            let cleaned = clean_doc_comment(&body[i..i + end + 2]);
            pending_doc = (!cleaned.is_empty()).then_some(cleaned);
            i += end + 2;
            continue;
        }

        // Plain block and line comments are trivia
        if body[i..].starts_with("/*") {
            let Some(end) = body[i..].find("*/") else {
                break;
            };
            i += end + 2;
            pending_doc = None;
            continue;
        }
        if body[i..].starts_with("//") {
            i += body[i..].find('\n').map_or(body.len() - i, |n| n + 1);
            continue;
        }

        // Spread/rest fields are inherited pass-through props, not documented
        if body[i..].starts_with("...") {
            i += body[i..].find(';').map_or(body.len() - i, |n| n + 1);
            pending_doc = None;
            continue;
        }

        if is_ident_byte(b) {
            let name_end = body[i..]
                .find(|c| !is_ident_char(c))
                .map_or(body.len(), |n| i + n);
            let name = &body[i..name_end];

            let mut j = name_end;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            let optional = j < bytes.len() && bytes[j] == b'?';
            if optional {
                j += 1;
                while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                    j += 1;
                }
            }
            if j >= bytes.len() || bytes[j] != b':' {
                // Not a field declaration; resume after the identifier
                i = name_end;
                pending_doc = None;
                continue;
            }
            j += 1;

            let Some((ty_raw, consumed)) = read_type(&body[j..]) else {
                // Unterminated final field, dropped
                break;
            };
            i = j + consumed;
            let doc = pending_doc.take();

            // Inherited pass-through prop, excluded by design
            if name == "className" {
                continue;
            }

            let ty = clean_type(ty_raw.trim());
            let (default, description) = resolve_default(doc, name, file, &body_span);

            props.push(PropInfo {
                prop: name.to_string(),
                ty: if ty.is_empty() {
                    "unknown".to_string()
                } else {
                    ty
                },
                default,
                required: !optional,
                description,
            });
            continue;
        }

        // Advance a whole character; a byte step could split multi-byte UTF-8
        i += body[i..].chars().next().map_or(1, char::len_utf8);
        pending_doc = None;
    }

    props
}

/// Type text up to the next top-level `;`, where top-level is relative to
/// `{}`, `()` and `[]` nesting. Returns the type slice and bytes consumed
/// including the terminator, or `None` if the declaration never terminates.
fn read_type(s: &str) -> Option<(&str, usize)> {
    let mut depth = 0i32;

    for (i, &b) in s.as_bytes().iter().enumerate() {
        match b {
            b'{' | b'(' | b'[' => depth += 1,
            b'}' | b')' | b']' => depth -= 1,
            b';' if depth <= 0 => return Some((&s[..i], i + 1)),
            _ => {}
        }
    }

    None
}

/// Strip framework wrapper generics from a type for readability. Lossy by
/// design: the removal stops at the first `>`, so nested generics leave
/// fragments behind rather than being reconstructed.
fn clean_type(ty: &str) -> String {
    let mut out = ty.to_string();

    let mut search = 0;
    while let Some(rel) = out[search..].find("React.") {
        let start = search + rel;
        let after = &out[start + "React.".len()..];
        let ident_len = after.find(|c| !is_ident_char(c)).unwrap_or(after.len());
        if ident_len == 0 || !after[ident_len..].starts_with('<') {
            // Bare `React.Foo` stays; only generic wrappers are removed
            search = start + "React.".len();
            continue;
        }
        let Some(gt) = after[ident_len..].find('>') else {
            break;
        };
        out.replace_range(start..start + "React.".len() + ident_len + gt + 1, "");
        search = start;
    }

    while let Some(start) = out.find("Omit<") {
        let Some(gt) = out[start..].find('>') else {
            break;
        };
        out.replace_range(start..start + gt + 1, "");
    }

    out.trim().to_string()
}

/// Resolve a prop's default value and final description.
///
/// Priority: an inline `(default: X)` marker in the doc comment wins and is
/// stripped from the stored description; otherwise the whole file is scanned
/// for a destructuring or object-literal assignment to the prop's name.
fn resolve_default(
    doc: Option<String>,
    name: &str,
    file: &str,
    body_span: &Range<usize>,
) -> (Option<String>, Option<String>) {
    if let Some(desc) = doc {
        if let Some((value, cleaned)) = split_default_marker(&desc) {
            return (Some(value), (!cleaned.is_empty()).then_some(cleaned));
        }
        return (default_from_implementation(file, name, body_span), Some(desc));
    }

    (default_from_implementation(file, name, body_span), None)
}

/// Split a `(default: X)` marker out of a description. The `default` keyword
/// is matched case-insensitively. Returns the captured value and the
/// description with the marker removed.
fn split_default_marker(desc: &str) -> Option<(String, String)> {
    const KEYWORD: &str = "default:";

    let start = desc.match_indices('(').find_map(|(idx, _)| {
        let rest = &desc[idx + 1..];
        rest.get(..KEYWORD.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(KEYWORD))
            .then_some(idx)
    })?;

    let value_start = start + 1 + KEYWORD.len();
    let close = desc[value_start..].find(')')?;
    let value = desc[value_start..value_start + close].trim();
    if value.is_empty() {
        return None;
    }

    let mut cleaned = String::with_capacity(desc.len());
    cleaned.push_str(&desc[..start]);
    cleaned.push_str(&desc[value_start + close + 1..]);

    Some((value.to_string(), cleaned.trim().to_string()))
}

/// Heuristic scan of the whole file for a default value: a destructuring
/// pattern `name = value` first, then an object-literal pattern
/// `name: value`. Matches inside the declaring interface body are skipped,
/// so a field's own `name: type` declaration never reads as its default. A
/// candidate is rejected if it looks like a type annotation (contains `:`),
/// is an arrow function (contains `=>`), or runs 50 characters or longer.
/// The scan can still match unrelated identifiers elsewhere in the file that
/// share the prop's name; see DESIGN.md.
fn default_from_implementation(file: &str, name: &str, body_span: &Range<usize>) -> Option<String> {
    find_assignment(file, name, b'=', body_span)
        .or_else(|| find_assignment(file, name, b':', body_span))
}

fn find_assignment(file: &str, name: &str, sep: u8, exclude: &Range<usize>) -> Option<String> {
    let bytes = file.as_bytes();
    let mut search = 0;

    while let Some(rel) = file[search..].find(name) {
        let at = search + rel;
        search = at + name.len();

        if exclude.contains(&at) {
            continue;
        }
        // Identifier boundaries on both sides of the name
        if at > 0 && is_ident_byte(bytes[at - 1]) {
            continue;
        }
        let mut j = at + name.len();
        if j < bytes.len() && is_ident_byte(bytes[j]) {
            continue;
        }

        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        if j >= bytes.len() || bytes[j] != sep {
            continue;
        }
        j += 1;
        // `==` comparisons and `=>` arrows are not assignments
        if sep == b'=' && j < bytes.len() && (bytes[j] == b'=' || bytes[j] == b'>') {
            continue;
        }

        let value_end = file[j..]
            .find([',', '}', ';'])
            .map_or(file.len(), |n| j + n);
        let value = file[j..value_end].trim();

        if value.is_empty()
            || value.contains(':')
            || value.contains("=>")
            || value.len() >= 50
        {
            continue;
        }
        return Some(value.to_string());
    }

    None
}
