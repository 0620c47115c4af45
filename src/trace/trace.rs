use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::assign::compose::PageType;
use crate::view::view_model::ElementKind;

/// One JSONL record per assignment decision.
#[derive(Debug, Serialize)]
pub struct AssignEvent {
    pub timestamp_ms: u128,

    pub element_kind: String,
    pub outcome: String,

    pub identifier: Option<String>,
    pub page_type: Option<String>,
    pub collided: bool,
}

impl AssignEvent {
    pub fn now(kind: ElementKind) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis(),
            element_kind: kind.name().to_string(),
            outcome: "visited".to_string(),
            identifier: None,
            page_type: None,
            collided: false,
        }
    }

    pub fn with_outcome(mut self, outcome: impl ToString) -> Self {
        self.outcome = outcome.to_string();
        self
    }

    pub fn with_identifier(mut self, identifier: &str) -> Self {
        self.identifier = Some(identifier.to_string());
        self
    }

    pub fn with_page_type(mut self, page_type: PageType) -> Self {
        self.page_type = Some(page_type.label().to_string());
        self
    }

    pub fn with_collision(mut self, collided: bool) -> Self {
        self.collided = collided;
        self
    }
}
