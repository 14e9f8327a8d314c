//! Per-dialect pattern recognizers.
//!
//! Each recognizer scans one line of raw text and returns the class-bearing
//! constructs it finds, left to right. No parsing happens here: matching is
//! line-scoped, so a construct split across a line boundary is never
//! recognized. A [`Match`] pairs the exact matched span (which the rewriters
//! replace wholesale) with the class-name tokens extracted from it (which
//! the collector counts).

use once_cell::sync::Lazy;
use regex::Regex;

static MARKUP_CLASS_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"class\s*=\s*["']?([\w\s-]+)["']?"#).unwrap());

static STYLESHEET_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.[a-zA-Z_][\w-]*").unwrap());

static QUERY_SELECTOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"querySelector(All)?\(\s*["']\.([\w\s.-]+)["']\s*\)"#).unwrap());

static CLASS_LIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"classList\.(add|remove|toggle)\(\s*["']([\w\s-]+)["'](?:,\s*["']([\w\s-]+)["'])*\s*\)"#)
        .unwrap()
});

static CLASS_NAME_ASSIGN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"className\s*=\s*["']([^"'\s]+(?:\s+[^"'\s]+)*)["']"#).unwrap());

/// One recognized construct on a line: the matched text and the class names
/// inside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match<'a> {
    pub text: &'a str,
    pub classes: Vec<&'a str>,
}

/// `class="..."` / `class='...'` attributes; quotes are optional.
/// Each whitespace-separated token inside the delimiters is one class name.
pub fn markup_class_attrs(line: &str) -> Vec<Match<'_>> {
    MARKUP_CLASS_ATTR
        .captures_iter(line)
        .map(|caps| {
            let full = caps.get(0).unwrap();
            let tokens = caps.get(1).unwrap();
            Match {
                text: full.as_str(),
                classes: tokens.as_str().split_whitespace().collect(),
            }
        })
        .collect()
}

/// `.identifier` selector fragments. The identifier pattern stops before
/// `:` so pseudo-class and pseudo-element suffixes are never part of the
/// match.
pub fn stylesheet_selectors(line: &str) -> Vec<Match<'_>> {
    STYLESHEET_CLASS
        .find_iter(line)
        .map(|found| Match {
            text: found.as_str(),
            classes: vec![&found.as_str()[1..]],
        })
        .collect()
}

/// `querySelector(".a.b")` / `querySelectorAll(".a.b")` calls. Each
/// non-empty segment of the inner dotted selector is one class name.
pub fn query_selector_calls(line: &str) -> Vec<Match<'_>> {
    QUERY_SELECTOR
        .captures_iter(line)
        .map(|caps| {
            let full = caps.get(0).unwrap();
            let selector = caps.get(2).unwrap();
            Match {
                text: full.as_str(),
                classes: selector
                    .as_str()
                    .split('.')
                    .filter(|segment| !segment.is_empty())
                    .collect(),
            }
        })
        .collect()
}

/// `classList.add/remove/toggle(...)` calls with one or more quoted string
/// arguments. The repeated argument group places no upper bound on the
/// argument count.
pub fn class_list_calls(line: &str) -> Vec<Match<'_>> {
    CLASS_LIST
        .find_iter(line)
        .map(|found| Match {
            text: found.as_str(),
            classes: class_list_arguments(found.as_str()),
        })
        .collect()
}

/// Split a matched `classList` call's parenthesized span into its argument
/// tokens, trimmed of quotes and whitespace.
pub(crate) fn class_list_arguments(text: &str) -> Vec<&str> {
    let open = match text.find('(') {
        Some(index) => index + 1,
        None => return Vec::new(),
    };
    let close = match text.rfind(')') {
        Some(index) => index,
        None => return Vec::new(),
    };
    text[open..close]
        .split(',')
        .map(trim_argument)
        .collect()
}

pub(crate) fn trim_argument(argument: &str) -> &str {
    argument.trim_matches(|c: char| c == '"' || c == '\'' || c == ' ')
}

/// `className = "a b c"` assignments. Each whitespace-separated token inside
/// the assigned string is one class name.
pub fn class_name_assignments(line: &str) -> Vec<Match<'_>> {
    CLASS_NAME_ASSIGN
        .captures_iter(line)
        .map(|caps| {
            let full = caps.get(0).unwrap();
            let value = caps.get(1).unwrap();
            Match {
                text: full.as_str(),
                classes: value.as_str().split_whitespace().collect(),
            }
        })
        .collect()
}
