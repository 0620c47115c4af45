use serde::{Deserialize, Serialize};

use crate::view::geometry::Rect;

/// Runtime-unique identity token for one element instance.
///
/// Stands in for pointer identity: outlet matching compares these tokens,
/// never element contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The fixed set of control types the assigner understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Button,
    Label,
    ImageView,
    TextView,
    TextField,
    SegmentedControl,
    Switch,
    NavigationBar,
    TabBar,
    WebView,
    TableViewCell,
    CollectionViewCell,
    TableView,
    CollectionView,
    ScrollView,
    View,
}

impl ElementKind {
    /// Kinds that receive an identifier directly; traversal does not
    /// descend into their children.
    pub fn is_leaf_worthy(self) -> bool {
        matches!(
            self,
            ElementKind::TableViewCell
                | ElementKind::CollectionViewCell
                | ElementKind::ScrollView
                | ElementKind::TextField
                | ElementKind::TextView
                | ElementKind::Label
                | ElementKind::Button
                | ElementKind::NavigationBar
                | ElementKind::TabBar
                | ElementKind::Switch
                | ElementKind::SegmentedControl
                | ElementKind::ImageView
                | ElementKind::WebView
        )
    }

    /// Scrollable containers whose contents vary at runtime. Elements in or
    /// under one of these are classified as Dynamic and carry no position.
    pub fn is_scroll_family(self) -> bool {
        matches!(
            self,
            ElementKind::ScrollView | ElementKind::TableView | ElementKind::CollectionView
        )
    }

    /// Kinds with a user-visible text slot (title, text, or placeholder).
    pub fn carries_text(self) -> bool {
        matches!(
            self,
            ElementKind::Button
                | ElementKind::Label
                | ElementKind::TextView
                | ElementKind::TextField
                | ElementKind::NavigationBar
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Button => "Button",
            ElementKind::Label => "Label",
            ElementKind::ImageView => "ImageView",
            ElementKind::TextView => "TextView",
            ElementKind::TextField => "TextField",
            ElementKind::SegmentedControl => "SegmentedControl",
            ElementKind::Switch => "Switch",
            ElementKind::NavigationBar => "NavigationBar",
            ElementKind::TabBar => "TabBar",
            ElementKind::WebView => "WebView",
            ElementKind::TableViewCell => "TableViewCell",
            ElementKind::CollectionViewCell => "CollectionViewCell",
            ElementKind::TableView => "TableView",
            ElementKind::CollectionView => "CollectionView",
            ElementKind::ScrollView => "ScrollView",
            ElementKind::View => "View",
        }
    }
}

/// One visual control in the view tree.
///
/// A parent exclusively owns its children; no back-references are stored.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
    /// Button title / label text / field placeholder, where applicable.
    pub text: Option<String>,
    /// The accessibility-identifier slot. Unset until assigned.
    pub identifier: Option<String>,
    /// Position within the immediate parent container.
    pub frame: Rect,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(id: ElementId, kind: ElementKind, frame: Rect) -> Self {
        Self {
            id,
            kind,
            text: None,
            identifier: None,
            frame,
            children: Vec::new(),
        }
    }

    /// A pre-set identifier is any non-empty string; assignment never
    /// overwrites one.
    pub fn has_identifier(&self) -> bool {
        self.identifier.as_deref().is_some_and(|id| !id.is_empty())
    }

    pub fn find(&self, id: ElementId) -> Option<&Element> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }
}
