//! Name derivation for anonymous default exports.
//!
//! The pipeline is: file path → base name → sanitized identifier → collision
//! probe. Each stage is a pure function so the whole thing can be tested
//! without parsing anything.

use lazy_static::lazy_static;
use oxc_syntax::identifier::{is_identifier_part, is_identifier_start};
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

/// Base name used when the host gives us no file path (in-memory sources).
pub const DEFAULT_BASE_NAME: &str = "unset";

lazy_static! {
    /// Alphanumeric runs; everything between them is a word separator.
    static ref SEGMENT_RE: Regex = Regex::new(r"[A-Za-z0-9]+").unwrap();

    /// Words that can never be bound with `const` in a module, so the
    /// collision probe treats them as permanently taken. Covers the
    /// ECMAScript keywords plus the module/strict-mode restricted names.
    static ref RESERVED_WORDS: HashSet<&'static str> = {
        let mut s = HashSet::new();
        for word in [
            "break", "case", "catch", "class", "const", "continue", "debugger",
            "default", "delete", "do", "else", "enum", "export", "extends",
            "false", "finally", "for", "function", "if", "import", "in",
            "instanceof", "new", "null", "return", "super", "switch", "this",
            "throw", "true", "try", "typeof", "var", "void", "while", "with",
            // Restricted in module code.
            "let", "static", "yield", "await", "implements", "interface",
            "package", "private", "protected", "public", "arguments", "eval",
        ] {
            s.insert(word);
        }
        s
    };
}

/// Extract the raw naming candidate from a file path.
///
/// The base name is the file stem. An `index` file is conventionally named
/// after its directory, so the stem `index` (case-sensitive) yields the
/// immediate parent directory name instead. A missing path, or an `index`
/// file with no named parent, falls back to [`DEFAULT_BASE_NAME`].
pub fn derive_base_name(file_path: Option<&str>) -> String {
    let Some(raw) = file_path else {
        return DEFAULT_BASE_NAME.to_string();
    };
    let path = Path::new(raw);
    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
        return DEFAULT_BASE_NAME.to_string();
    };
    if stem == "index" {
        return path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|s| s.to_str())
            .map(|dir| dir.to_string())
            .unwrap_or_else(|| DEFAULT_BASE_NAME.to_string());
    }
    stem.to_string()
}

/// True when `name` can be bound verbatim with `const` in a module.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !is_identifier_start(first) {
        return false;
    }
    if !chars.all(is_identifier_part) {
        return false;
    }
    !RESERVED_WORDS.contains(name)
}

/// Turn an arbitrary base name into a camelCase identifier.
///
/// A name that is already a clean identifier passes through untouched; this
/// is what keeps `Foo.js` as `Foo` rather than forcing `foo`. Everything else
/// is segmented on non-alphanumeric runs and recombined as camelCase. A
/// result that is empty or starts with a digit gets a `_` prefix.
pub fn sanitize(raw: &str) -> String {
    if is_valid_identifier(raw) {
        return raw.to_string();
    }
    let mut out = String::new();
    for segment in SEGMENT_RE.find_iter(raw) {
        let segment = segment.as_str();
        if out.is_empty() {
            out.push_str(&segment.to_ascii_lowercase());
        } else {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.push_str(&chars.as_str().to_ascii_lowercase());
            }
        }
    }
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Probe for a name absent from the current binding set.
///
/// The unbound base wins outright. Otherwise suffixes `0`, `1`, `2`, … are
/// appended textually to the full sanitized name until a free one turns up.
/// Textually matters: a taken `_1` probes to `_10`, `_11`, and so on, not `_2`.
/// Reserved words count as bound so `new.js` resolves to `new0`.
pub fn resolve_collisions<F>(base: &str, is_bound: F) -> String
where
    F: Fn(&str) -> bool,
{
    let taken = |name: &str| RESERVED_WORDS.contains(name) || is_bound(name);
    if !taken(base) {
        return base.to_string();
    }
    let mut index: u64 = 0;
    loop {
        let candidate = format!("{base}{index}");
        if !taken(&candidate) {
            return candidate;
        }
        index += 1;
    }
}

/// Full contract of the namer: path + binding predicate → final identifier.
pub fn derive_export_name<F>(file_path: Option<&str>, is_bound: F) -> String
where
    F: Fn(&str) -> bool,
{
    let base = sanitize(&derive_base_name(file_path));
    resolve_collisions(&base, is_bound)
}
