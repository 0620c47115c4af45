use std::fmt;

use crate::view::view_model::ElementId;

#[derive(Debug)]
pub enum AssignError {
    /// Manual override proposed an identifier this screen already handed out
    IdentifierTaken { proposed: String },

    /// Element identity token matches nothing in the screen's view tree
    ElementNotFound { element: ElementId },
}

impl fmt::Display for AssignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignError::IdentifierTaken { proposed } => {
                write!(f, "Identifier '{}' is already in use on this screen", proposed)
            }
            AssignError::ElementNotFound { element } => {
                write!(f, "Element {} not found in the view tree", element)
            }
        }
    }
}

impl std::error::Error for AssignError {}
