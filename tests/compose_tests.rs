use std::collections::HashSet;

use accessid::assign::compose::{
    IdentifierParts, PART_DELIMITER, PREFIX_MARKER, SUFFIX_MARKER, resolve_unique, strip_spaces,
    title_for,
};
use accessid::view::geometry::Rect;
use accessid::view::view_model::{Element, ElementId, ElementKind};

// ============================================================================
// Space stripping
// ============================================================================

#[test]
fn strip_spaces_removes_every_space() {
    assert_eq!(strip_spaces("Log In"), "LogIn");
    assert_eq!(strip_spaces("  a b  c "), "abc");
    assert_eq!(strip_spaces("NoSpaces"), "NoSpaces");
    assert_eq!(strip_spaces(""), "");
}

#[test]
fn strip_spaces_keeps_other_whitespace() {
    // Only the space character is stripped, matching the title rule
    assert_eq!(strip_spaces("a\tb"), "a\tb");
}

// ============================================================================
// Title extraction
// ============================================================================

fn element_with_text(kind: ElementKind, text: &str) -> Element {
    let mut element = Element::new(ElementId(1), kind, Rect::default());
    element.text = Some(text.to_string());
    element
}

#[test]
fn title_for_text_bearing_kinds() {
    assert_eq!(
        title_for(&element_with_text(ElementKind::Button, "Log In")),
        "LogIn"
    );
    assert_eq!(
        title_for(&element_with_text(ElementKind::Label, "Welcome back")),
        "Welcomeback"
    );
    assert_eq!(
        title_for(&element_with_text(ElementKind::TextField, "Enter email")),
        "Enteremail"
    );
}

#[test]
fn title_for_non_text_kinds_is_empty() {
    assert_eq!(
        title_for(&element_with_text(ElementKind::ImageView, "alt text")),
        "",
        "ImageView carries no title even when text is present"
    );
    assert_eq!(title_for(&element_with_text(ElementKind::Switch, "On")), "");
}

#[test]
fn title_for_missing_text_is_empty() {
    let element = Element::new(ElementId(1), ElementKind::Button, Rect::default());
    assert_eq!(title_for(&element), "");
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn compose_includes_only_non_empty_parts() {
    let parts = IdentifierParts {
        class_name: "LoginScreen".into(),
        self_outlet: "loginButton".into(),
        position_in_parent: "MiddleMiddle".into(),
        title: "LogIn".into(),
        type_name: "Button".into(),
        ..Default::default()
    };

    let composed = parts.compose();
    assert_eq!(
        composed,
        "[[ClassName: LoginScreen, SelfOutlet: loginButton, \
         PositionInParent: MiddleMiddle, Title: LogIn, Type: Button]]"
    );
    assert!(!composed.contains("GPOutlet"));
    assert!(!composed.contains("POutlet:"));
}

#[test]
fn compose_preserves_part_order() {
    let parts = IdentifierParts {
        class_name: "S".into(),
        grandparent_outlet: "gp".into(),
        parent_outlet: "p".into(),
        self_outlet: "me".into(),
        position_in_parent: "TopLeft".into(),
        title: "T".into(),
        type_name: "Label".into(),
    };

    assert_eq!(
        parts.compose(),
        "[[ClassName: S, GPOutlet: gp, POutlet: p, SelfOutlet: me, \
         PositionInParent: TopLeft, Title: T, Type: Label]]"
    );
}

#[test]
fn compose_type_only() {
    let parts = IdentifierParts {
        type_name: "View".into(),
        ..Default::default()
    };
    assert_eq!(parts.compose(), "[[Type: View]]");
}

#[test]
fn markers_and_delimiter_are_fixed() {
    assert_eq!(PREFIX_MARKER, "[[");
    assert_eq!(SUFFIX_MARKER, "]]");
    assert_eq!(PART_DELIMITER, ", ");
}

// ============================================================================
// Uniqueness resolution
// ============================================================================

#[test]
fn resolve_unique_returns_base_when_novel() {
    let known = HashSet::new();
    assert_eq!(resolve_unique("[[Type: Label]]", &known), "[[Type: Label]]");
}

#[test]
fn resolve_unique_suffixes_from_one() {
    let mut known = HashSet::new();
    known.insert("[[Type: Label]]".to_string());
    assert_eq!(resolve_unique("[[Type: Label]]", &known), "[[Type: Label]]1");
}

#[test]
fn resolve_unique_skips_no_integers() {
    // With base..base2 taken, the third collision resolves to base3
    let mut known = HashSet::new();
    known.insert("base".to_string());
    known.insert("base1".to_string());
    known.insert("base2".to_string());
    assert_eq!(resolve_unique("base", &known), "base3");
}

#[test]
fn resolve_unique_suffixes_original_base_not_candidates() {
    // The suffix is appended to the base, never re-suffixed cumulatively
    let mut known = HashSet::new();
    known.insert("base".to_string());
    known.insert("base1".to_string());
    let resolved = resolve_unique("base", &known);
    assert_eq!(resolved, "base2");
    assert_ne!(resolved, "base11");
}
