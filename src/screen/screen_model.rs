use std::collections::HashSet;

use crate::view::view_model::{Element, ElementId};

/// One named property on a screen holding a reference to a view-tree element.
#[derive(Debug, Clone)]
pub struct OutletEntry {
    pub name: String,
    pub element: ElementId,
}

/// Explicit outlet registry the screen populates at initialization.
///
/// Replaces runtime reflection: ownership is decided by comparing element
/// identity tokens, so an outlet "owns" an element only when it references
/// that exact instance. Entries keep insertion order for diagnostics.
#[derive(Debug, Clone, Default)]
pub struct OutletRegistry {
    entries: Vec<OutletEntry>,
}

impl OutletRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, element: ElementId) {
        self.entries.push(OutletEntry {
            name: name.into(),
            element,
        });
    }

    /// The name of the first outlet referencing this element, if any.
    pub fn owning_outlet(&self, element: ElementId) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.element == element)
            .map(|entry| entry.name.as_str())
    }

    pub fn entries(&self) -> &[OutletEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// A controller object owning a root container and the identifier state
/// scoped to it.
#[derive(Debug)]
pub struct Screen {
    /// The screen's declared type name; first part of every identifier.
    pub class_name: String,
    /// Root container (the screen's main view).
    pub root: Element,
    pub outlets: OutletRegistry,
    /// Every identifier handed out on this screen. Uniqueness checks go
    /// through the set; `assigned` keeps hand-out order for listing.
    pub known_identifiers: HashSet<String>,
    pub assigned: Vec<String>,
}

impl Screen {
    pub fn new(class_name: impl Into<String>, root: Element, outlets: OutletRegistry) -> Self {
        Self {
            class_name: class_name.into(),
            root,
            outlets,
            known_identifiers: HashSet::new(),
            assigned: Vec::new(),
        }
    }

    /// Record a handed-out identifier in both the set and the ordered list.
    pub fn record_identifier(&mut self, identifier: &str) {
        self.known_identifiers.insert(identifier.to_string());
        self.assigned.push(identifier.to_string());
    }

    /// All identifiers assigned so far, in assignment order.
    pub fn assigned_identifiers(&self) -> &[String] {
        &self.assigned
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.root.find(id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.root.find_mut(id)
    }
}
