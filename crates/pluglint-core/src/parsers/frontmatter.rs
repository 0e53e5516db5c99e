//! YAML-frontmatter subset parser.
//!
//! Parses the restricted dialect used by plugin Markdown files: scalar
//! `key: value` pairs, bool/integer coercion, and block list items under a
//! bare `key:`. Multi-line block scalars (`|`, `>`) and nested mappings are
//! not part of the dialect; lines of those shapes are dropped from the
//! header and surface as warnings instead. The parser itself never fails.

use std::collections::HashMap;

/// A single frontmatter value.
///
/// Coercion happens once, at parse time: `true`/`false` (any case) become
/// `Bool`, all-ASCII-digit values become `Int`, block sequences become
/// `List`. Everything else stays a `Str`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Bool(bool),
    Int(i64),
    List(Vec<String>),
}

impl Value {
    /// The scalar string form, if this value is a plain string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Render any variant as display text, list items joined with ", ".
    /// Used by rule sets that accept either a string or a list for a key.
    pub fn display_string(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::List(items) => items.join(", "),
        }
    }

    /// True for the values that read as "unset": empty string, empty list,
    /// `false`, and `0`, mirroring the original validator's truthiness.
    pub fn is_empty_like(&self) -> bool {
        match self {
            Value::Str(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Bool(b) => !b,
            Value::Int(i) => *i == 0,
        }
    }
}

/// Parsed frontmatter: header mapping, document body, and the non-fatal
/// structural warnings collected while scanning the header block.
#[derive(Debug, Clone, Default)]
pub struct Frontmatter {
    pub header: HashMap<String, Value>,
    pub body: String,
    pub warnings: Vec<String>,
}

impl Frontmatter {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.header.get(key)
    }

    /// The value for `key` as a string, if present and a plain string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.header.get(key).and_then(|v| v.as_str())
    }
}

/// Parse frontmatter delimited by `---` lines from `content`.
///
/// Content that does not open with `---`, or opens but never closes the
/// header, is returned untouched: empty header, full content as body, no
/// warnings. An unclosed header is deliberately not reported so that plain
/// Markdown files pass through silently.
///
/// If the header declares the same key twice the later line wins; this is
/// an incidental consequence of sequential map insertion, kept as
/// documented implementation-defined behavior.
pub fn parse(content: &str) -> Frontmatter {
    if !content.starts_with("---") {
        return Frontmatter {
            body: content.to_string(),
            ..Default::default()
        };
    }

    let lines: Vec<&str> = content.split('\n').collect();
    let Some(end_idx) = lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| line.trim() == "---")
        .map(|(i, _)| i)
    else {
        // No closing marker - treat the whole document as plain body
        return Frontmatter {
            body: content.to_string(),
            ..Default::default()
        };
    };

    let body = lines[end_idx + 1..].join("\n");
    let mut header = HashMap::new();
    let mut warnings = Vec::new();
    // Open block-sequence key, with items collected so far
    let mut cursor: Option<(String, Vec<String>)> = None;

    for line in &lines[1..end_idx] {
        let stripped = line.trim();

        if stripped.is_empty() || stripped.starts_with('#') {
            continue;
        }

        // Block scalar markers signal an unsupported multi-line value
        if stripped == "|"
            || stripped == ">"
            || stripped.ends_with('|')
            || stripped.ends_with('>')
        {
            warnings.push("multi-line values (|, >) are not supported".to_string());
            flush_cursor(&mut header, &mut cursor);
            continue;
        }

        // List item: only valid directly under a bare `key:` line
        if stripped == "-" || stripped.starts_with("- ") {
            match cursor.as_mut() {
                Some((_, items)) => {
                    let item = if stripped == "-" { "" } else { &stripped[2..] };
                    items.push(strip_quotes(item.trim()).to_string());
                }
                None => warnings.push("list items must follow a key".to_string()),
            }
            continue;
        }

        // Indented `key:` line is a nested mapping attempt
        if line.starts_with("  ") && line.contains(':') {
            warnings.push("nested objects are not supported".to_string());
            flush_cursor(&mut header, &mut cursor);
            continue;
        }

        if let Some((key, raw)) = line.split_once(':') {
            flush_cursor(&mut header, &mut cursor);
            let key = key.trim().to_string();
            let raw = raw.trim();
            if raw.is_empty() {
                // May become a list (items follow) or the empty string
                cursor = Some((key, Vec::new()));
            } else {
                header.insert(key, coerce(strip_quotes(raw)));
            }
        }
        // Lines with none of the above shapes are ignored silently
    }

    flush_cursor(&mut header, &mut cursor);

    Frontmatter {
        header,
        body,
        warnings,
    }
}

/// Close an open list cursor: collected items become a list, zero items
/// become the scalar empty string for that key.
fn flush_cursor(header: &mut HashMap<String, Value>, cursor: &mut Option<(String, Vec<String>)>) {
    if let Some((key, items)) = cursor.take() {
        if items.is_empty() {
            header.insert(key, Value::Str(String::new()));
        } else {
            header.insert(key, Value::List(items));
        }
    }
}

/// Strip one layer of matching surrounding single or double quotes.
fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 {
        let bytes = value.as_bytes();
        if (bytes[0] == b'"' && bytes[value.len() - 1] == b'"')
            || (bytes[0] == b'\'' && bytes[value.len() - 1] == b'\'')
        {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Coerce an unquoted scalar: case-insensitive `true`/`false` become Bool,
/// all-ASCII-digit values become Int, everything else stays verbatim.
fn coerce(value: &str) -> Value {
    if value.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if value.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        // Digit runs too long for i64 stay as strings
        if let Ok(n) = value.parse::<i64>() {
            return Value::Int(n);
        }
    }
    Value::Str(value.to_string())
}
