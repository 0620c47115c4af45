use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::screen::screen_model::{OutletRegistry, Screen};
use crate::view::geometry::Rect;
use crate::view::view_model::{Element, ElementId, ElementKind};

// ============================================================================
// On-disk screen description (JSON or YAML)
// ============================================================================

/// Serialized form of a screen: class name plus the element tree. Stands in
/// for the live view hierarchy the framework would hand us.
#[derive(Debug, Clone, Deserialize)]
pub struct ScreenFixture {
    pub class_name: String,
    pub root: ElementFixture,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ElementFixture {
    pub kind: ElementKind,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub frame: Rect,
    /// Name of the screen property referencing this element, if any.
    #[serde(default)]
    pub outlet: Option<String>,
    #[serde(default)]
    pub children: Vec<ElementFixture>,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug)]
pub enum FixtureError {
    /// Fixture file could not be read
    Io { path: String, source: std::io::Error },

    /// JSON fixture failed to parse
    JsonParse { path: String, source: serde_json::Error },

    /// YAML fixture failed to parse
    YamlParse { path: String, source: serde_yaml::Error },

    /// Extension is neither .json nor .yaml/.yml
    UnsupportedFormat { path: String },
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::Io { path, source } => {
                write!(f, "Failed to read fixture '{}': {}", path, source)
            }
            FixtureError::JsonParse { path, source } => {
                write!(f, "Invalid JSON fixture '{}': {}", path, source)
            }
            FixtureError::YamlParse { path, source } => {
                write!(f, "Invalid YAML fixture '{}': {}", path, source)
            }
            FixtureError::UnsupportedFormat { path } => {
                write!(f, "Unsupported fixture format '{}' (expected .json, .yaml, or .yml)", path)
            }
        }
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixtureError::Io { source, .. } => Some(source),
            FixtureError::JsonParse { source, .. } => Some(source),
            FixtureError::YamlParse { source, .. } => Some(source),
            FixtureError::UnsupportedFormat { .. } => None,
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a screen from a JSON or YAML fixture file.
pub fn load_screen(path: &str) -> Result<Screen, FixtureError> {
    let content = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_string(),
        source,
    })?;

    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    let fixture: ScreenFixture = match extension {
        "json" => serde_json::from_str(&content).map_err(|source| FixtureError::JsonParse {
            path: path.to_string(),
            source,
        })?,
        "yaml" | "yml" => {
            serde_yaml::from_str(&content).map_err(|source| FixtureError::YamlParse {
                path: path.to_string(),
                source,
            })?
        }
        _ => {
            return Err(FixtureError::UnsupportedFormat {
                path: path.to_string(),
            });
        }
    };

    Ok(build_screen(fixture))
}

/// Materialize a fixture into a Screen: hand out identity tokens in
/// pre-order and register outlets as they are encountered.
pub fn build_screen(fixture: ScreenFixture) -> Screen {
    let mut next_id = 0u64;
    let mut outlets = OutletRegistry::new();
    let root = build_element(fixture.root, &mut next_id, &mut outlets);
    Screen::new(fixture.class_name, root, outlets)
}

fn build_element(
    fixture: ElementFixture,
    next_id: &mut u64,
    outlets: &mut OutletRegistry,
) -> Element {
    let id = ElementId(*next_id);
    *next_id += 1;

    if let Some(outlet) = fixture.outlet {
        outlets.register(outlet, id);
    }

    let mut element = Element::new(id, fixture.kind, fixture.frame);
    element.text = fixture.text;
    element.identifier = fixture.identifier;
    element.children = fixture
        .children
        .into_iter()
        .map(|child| build_element(child, next_id, outlets))
        .collect();
    element
}
