use std::path::PathBuf;

use accessid::assign_screen_fixture;
use accessid::screen::fixture::{FixtureError, build_screen, load_screen};
use accessid::trace::logger::TraceLogger;
use accessid::view::view_model::{ElementId, ElementKind};

// ============================================================================
// Helpers
// ============================================================================

fn temp_fixture(name: &str, content: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("accessid-test-{}-{}", std::process::id(), name));
    std::fs::write(&path, content).expect("write temp fixture");
    path
}

const LOGIN_JSON: &str = r#"{
    "class_name": "LoginScreen",
    "root": {
        "kind": "View",
        "frame": { "x": 0, "y": 0, "width": 300, "height": 300 },
        "children": [
            {
                "kind": "Button",
                "text": "Log In",
                "outlet": "loginButton",
                "frame": { "x": 100, "y": 100, "width": 100, "height": 100 }
            },
            {
                "kind": "TextField",
                "text": "Email",
                "outlet": "emailField",
                "frame": { "x": 20, "y": 20, "width": 260, "height": 40 }
            }
        ]
    }
}"#;

// ============================================================================
// Building screens from fixtures
// ============================================================================

#[test]
fn json_fixture_loads_and_registers_outlets() {
    let path = temp_fixture("login.json", LOGIN_JSON);
    let screen = load_screen(path.to_str().unwrap()).unwrap();

    assert_eq!(screen.class_name, "LoginScreen");
    assert_eq!(screen.outlets.len(), 2);
    assert_eq!(screen.outlets.owning_outlet(ElementId(1)), Some("loginButton"));
    assert_eq!(screen.outlets.owning_outlet(ElementId(2)), Some("emailField"));
    assert_eq!(screen.outlets.owning_outlet(ElementId(0)), None);

    let button = screen.element(ElementId(1)).unwrap();
    assert_eq!(button.kind, ElementKind::Button);
    assert_eq!(button.text.as_deref(), Some("Log In"));
    assert!(button.identifier.is_none());
}

#[test]
fn identity_tokens_are_handed_out_in_preorder() {
    let json = r#"{
        "class_name": "NestedScreen",
        "root": {
            "kind": "View",
            "children": [
                {
                    "kind": "View",
                    "children": [ { "kind": "Label" } ]
                },
                { "kind": "Button" }
            ]
        }
    }"#;
    let fixture = serde_json::from_str(json).unwrap();
    let screen = build_screen(fixture);

    // root=0, first child=1, its label=2, trailing button=3
    assert_eq!(screen.root.id, ElementId(0));
    assert_eq!(screen.root.children[0].id, ElementId(1));
    assert_eq!(screen.root.children[0].children[0].id, ElementId(2));
    assert_eq!(screen.root.children[1].id, ElementId(3));
}

#[test]
fn yaml_fixture_loads() {
    let yaml = r#"
class_name: SettingsScreen
root:
  kind: View
  frame: { x: 0, y: 0, width: 200, height: 400 }
  children:
    - kind: Switch
      outlet: darkModeSwitch
      frame: { x: 150, y: 20, width: 40, height: 20 }
"#;
    let path = temp_fixture("settings.yaml", yaml);
    let screen = load_screen(path.to_str().unwrap()).unwrap();

    assert_eq!(screen.class_name, "SettingsScreen");
    assert_eq!(
        screen.outlets.owning_outlet(ElementId(1)),
        Some("darkModeSwitch")
    );
}

#[test]
fn preset_identifier_survives_loading() {
    let json = r#"{
        "class_name": "HomeScreen",
        "root": {
            "kind": "View",
            "children": [ { "kind": "Button", "identifier": "preset-id" } ]
        }
    }"#;
    let path = temp_fixture("preset.json", json);
    let screen = load_screen(path.to_str().unwrap()).unwrap();
    assert_eq!(
        screen.element(ElementId(1)).unwrap().identifier.as_deref(),
        Some("preset-id")
    );
}

// ============================================================================
// Error cases
// ============================================================================

#[test]
fn missing_file_is_an_io_error() {
    let result = load_screen("/nonexistent/screen.json");
    assert!(matches!(result, Err(FixtureError::Io { .. })));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let path = temp_fixture("broken.json", "{ not json");
    let result = load_screen(path.to_str().unwrap());
    assert!(matches!(result, Err(FixtureError::JsonParse { .. })));
}

#[test]
fn unknown_extension_is_rejected() {
    let path = temp_fixture("screen.toml", "class_name = \"X\"");
    let result = load_screen(path.to_str().unwrap());
    assert!(matches!(result, Err(FixtureError::UnsupportedFormat { .. })));
}

// ============================================================================
// Fixture-to-identifier round trip
// ============================================================================

#[test]
fn assign_screen_fixture_runs_full_pass() {
    let path = temp_fixture("login-pass.json", LOGIN_JSON);
    let (screen, summary) =
        assign_screen_fixture(path.to_str().unwrap(), &TraceLogger::disabled()).unwrap();

    assert_eq!(summary.assigned, 2);
    assert_eq!(summary.skipped_preset, 0);

    let button_id = screen
        .element(ElementId(1))
        .and_then(|el| el.identifier.as_deref())
        .unwrap();
    assert!(button_id.contains("ClassName: LoginScreen"));
    assert!(button_id.contains("SelfOutlet: loginButton"));
    assert!(button_id.contains("PositionInParent: MiddleMiddle"));
    assert!(button_id.contains("Title: LogIn"));
    assert!(button_id.contains("Type: Button"));
}
