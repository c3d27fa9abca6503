//! `{{name}}` placeholders in prompt templates.
//!
//! A placeholder is `{{`, a non-empty name on one line, and the nearest `}}`.
//! Names are reported once each, in the order they first appear; filling
//! assigns values to names by that position.

use std::sync::OnceLock;

use regex::{Captures, Regex};

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_REGEX
        .get_or_init(|| Regex::new(r"\{\{(.+?)\}\}").expect("Invalid template placeholder regex"))
}

/// Unique placeholder names in first-seen order.
pub fn find_variables(text: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for caps in placeholder_regex().captures_iter(text) {
        if let Some(name) = caps.get(1).map(|m| m.as_str())
            && !names.contains(&name)
        {
            names.push(name);
        }
    }
    names
}

/// Replaces every placeholder with the value at its name's position.
///
/// With fewer values than names the values repeat from the start. With no
/// values the text is returned unchanged. Substituted values are not scanned
/// again, so a value containing `{{x}}` is inserted literally.
pub fn replace_variables<S: AsRef<str>>(text: &str, values: &[S]) -> String {
    if values.is_empty() {
        return text.to_string();
    }
    let names = find_variables(text);
    placeholder_regex()
        .replace_all(text, |caps: &Captures<'_>| {
            let name = caps.get(1).map_or("", |m| m.as_str());
            match names.iter().position(|n| *n == name) {
                Some(idx) => values[idx % values.len()].as_ref().to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
