use std::collections::HashSet;

use crate::view::view_model::Element;

pub const PREFIX_MARKER: &str = "[[";
pub const SUFFIX_MARKER: &str = "]]";
pub const PART_DELIMITER: &str = ", ";

/// Whether an element's surroundings have fixed layout or runtime-varying
/// contents. Position-in-parent is only meaningful for Static layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageType {
    Static,
    Dynamic,
}

impl PageType {
    pub fn label(self) -> &'static str {
        match self {
            PageType::Static => "Static",
            PageType::Dynamic => "Dynamic",
        }
    }
}

/// The up-to-seven ordered components of an identifier. An empty string
/// means "omit this part".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierParts {
    pub class_name: String,
    pub grandparent_outlet: String,
    pub parent_outlet: String,
    pub self_outlet: String,
    pub position_in_parent: String,
    pub title: String,
    pub type_name: String,
}

impl IdentifierParts {
    /// Join the non-empty parts, each behind its field label, between the
    /// fixed markers.
    pub fn compose(&self) -> String {
        let labeled = [
            ("ClassName: ", &self.class_name),
            ("GPOutlet: ", &self.grandparent_outlet),
            ("POutlet: ", &self.parent_outlet),
            ("SelfOutlet: ", &self.self_outlet),
            ("PositionInParent: ", &self.position_in_parent),
            ("Title: ", &self.title),
            ("Type: ", &self.type_name),
        ];

        let body = labeled
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(label, value)| format!("{}{}", label, value))
            .collect::<Vec<_>>()
            .join(PART_DELIMITER);

        format!("{}{}{}", PREFIX_MARKER, body, SUFFIX_MARKER)
    }
}

/// Drop every space character: "Log In" -> "LogIn".
pub fn strip_spaces(text: &str) -> String {
    text.chars().filter(|c| *c != ' ').collect()
}

/// The title part for an element: its text with spaces stripped, but only
/// for kinds that carry user-visible text at all.
pub fn title_for(element: &Element) -> String {
    if !element.kind.carries_text() {
        return String::new();
    }
    element
        .text
        .as_deref()
        .map(strip_spaces)
        .unwrap_or_default()
}

/// Resolve a composed identifier against the already-known set.
///
/// Collisions append the next unused positive integer to the original
/// base, never to a previously suffixed candidate.
pub fn resolve_unique(base: &str, known: &HashSet<String>) -> String {
    if !known.contains(base) {
        return base.to_string();
    }

    let mut suffix = 1u32;
    loop {
        let candidate = format!("{}{}", base, suffix);
        if !known.contains(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}
