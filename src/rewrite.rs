//! Per-dialect rewriters, mirroring the recognizers in [`crate::extract`].
//!
//! Each rewriter takes one line plus the finalized [`ClassMap`] and returns
//! the line with every recognized construct re-serialized under the mapping.
//! Text outside the matched spans is copied verbatim. Matches are applied
//! left to right; each replacement targets the first remaining occurrence of
//! the matched substring in the line being built, so repeated identical
//! constructs are rewritten in encounter order.

use crate::core::{ClassMap, Dialect};
use crate::extract;
use std::collections::HashSet;

/// Rewrite one line under the file's dialect. Names absent from the map
/// pass through unchanged.
pub fn rewrite_line(
    line: &str,
    dialect: Dialect,
    map: &ClassMap,
    suppress_duplicates: bool,
) -> String {
    match dialect {
        Dialect::Markup => rewrite_markup(line, map, suppress_duplicates),
        Dialect::Stylesheet => rewrite_stylesheet(line, map),
        Dialect::Script => rewrite_script(line, map),
    }
}

/// Rebuild each class attribute as `class="..."`, double-quoted regardless
/// of the original quote style. With duplicate suppression on, repeated
/// tokens collapse to their first occurrence.
fn rewrite_markup(line: &str, map: &ClassMap, suppress_duplicates: bool) -> String {
    let mut updated = line.to_string();
    for found in extract::markup_class_attrs(line) {
        let mut tokens: Vec<&str> = found
            .classes
            .iter()
            .copied()
            .map(|name| map.get(name).unwrap_or(name))
            .collect();
        if suppress_duplicates {
            tokens = dedup_preserving_order(tokens);
        }
        let replacement = format!("class=\"{}\"", tokens.join(" "));
        updated = updated.replacen(found.text, &replacement, 1);
    }
    updated
}

/// Replace each matched `.identifier` span with its mapped form, leaving
/// combinators and pseudo-class suffixes untouched.
fn rewrite_stylesheet(line: &str, map: &ClassMap) -> String {
    let mut updated = line.to_string();
    for found in extract::stylesheet_selectors(line) {
        if let Some(short) = map.get(&found.text[1..]) {
            updated = updated.replacen(found.text, &format!(".{short}"), 1);
        }
    }
    updated
}

fn rewrite_script(line: &str, map: &ClassMap) -> String {
    let mut updated = line.to_string();

    for found in extract::query_selector_calls(line) {
        if let Some(replacement) = rebuild_query_selector(found.text, map) {
            updated = updated.replacen(found.text, &replacement, 1);
        }
    }

    for found in extract::class_list_calls(line) {
        let replacement = rebuild_class_list(found.text, map);
        updated = updated.replacen(found.text, &replacement, 1);
    }

    for found in extract::class_name_assignments(line) {
        let tokens: Vec<&str> = found
            .classes
            .iter()
            .copied()
            .map(|name| map.get(name).unwrap_or(name))
            .collect();
        let replacement = format!("className = '{}'", tokens.join(" "));
        updated = updated.replacen(found.text, &replacement, 1);
    }

    updated
}

/// Rebuild the dotted chain of a `querySelector(All)` call, keeping the
/// prefix up to the first `.` and the trailing `")` closer exactly. A match
/// with any other closer (single-quoted calls) is left unmodified.
fn rebuild_query_selector(text: &str, map: &ClassMap) -> Option<String> {
    let (head, tail) = text.split_once('.')?;
    let chain = tail.strip_suffix("\")")?;
    let segments: Vec<&str> = chain
        .split('.')
        .map(|segment| map.get(segment).unwrap_or(segment))
        .collect();
    Some(format!("{head}.{}\")", segments.join(".")))
}

/// Rebuild a `classList.*` argument list: each argument mapped and
/// double-quoted, comma-space-joined, call head and closing paren kept.
fn rebuild_class_list(text: &str, map: &ClassMap) -> String {
    let open = match text.find('(') {
        Some(index) => index + 1,
        None => return text.to_string(),
    };
    let close = match text.rfind(')') {
        Some(index) => index,
        None => return text.to_string(),
    };
    let arguments: Vec<String> = text[open..close]
        .split(',')
        .map(|argument| {
            let name = extract::trim_argument(argument);
            format!("\"{}\"", map.get(name).unwrap_or(name))
        })
        .collect();
    format!(
        "{}{}{}",
        &text[..open],
        arguments.join(", "),
        &text[close..]
    )
}

fn dedup_preserving_order<'a>(tokens: Vec<&'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    tokens.into_iter().filter(|token| seen.insert(*token)).collect()
}
