use std::collections::HashSet;

use crate::assign::compose::{IdentifierParts, PageType, resolve_unique, title_for};
use crate::assign::error::AssignError;
use crate::screen::screen_model::{OutletRegistry, Screen};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::AssignEvent;
use crate::view::geometry::{Rect, classify_position};
use crate::view::view_model::{Element, ElementId};

/// Counters from one assignment pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssignmentSummary {
    /// Direct children examined during the walk.
    pub visited: usize,
    /// Elements that received a fresh identifier.
    pub assigned: usize,
    /// Elements left untouched because an identifier was already set.
    pub skipped_preset: usize,
    /// Assignments that needed an integer suffix to become unique.
    pub collisions: usize,
}

struct AssignEnv<'a> {
    class_name: &'a str,
    outlets: &'a OutletRegistry,
    known: &'a mut HashSet<String>,
    assigned: &'a mut Vec<String>,
    tracer: &'a TraceLogger,
    summary: AssignmentSummary,
}

/// Walk the screen's view tree and give every qualifying element a unique
/// accessibility identifier. Runs to completion synchronously; one pass per
/// layout event.
pub fn assign_identifiers(screen: &mut Screen, tracer: &TraceLogger) -> AssignmentSummary {
    let Screen {
        class_name,
        root,
        outlets,
        known_identifiers,
        assigned,
    } = screen;

    let mut env = AssignEnv {
        class_name: class_name.as_str(),
        outlets,
        known: known_identifiers,
        assigned,
        tracer,
        summary: AssignmentSummary::default(),
    };

    walk(root, None, false, &mut env);
    env.summary
}

/// Depth-first pre-order over direct children. Leaf-worthy children get an
/// identifier and are not descended into; containers with children recurse;
/// everything else is skipped.
fn walk(
    container: &mut Element,
    container_parent: Option<ElementId>,
    dynamic_path: bool,
    env: &mut AssignEnv<'_>,
) {
    let parent_id = container.id;
    let parent_bounds = container.frame.bounds();
    let path_dynamic = dynamic_path || container.kind.is_scroll_family();

    for child in container.children.iter_mut() {
        env.summary.visited += 1;

        if child.kind.is_leaf_worthy() {
            assign_element(
                child,
                parent_id,
                container_parent,
                parent_bounds,
                path_dynamic,
                env,
            );
        } else if !child.children.is_empty() {
            walk(child, Some(parent_id), path_dynamic, env);
        }
        // Childless non-leaf elements are neither assigned nor recursed.
    }
}

fn assign_element(
    element: &mut Element,
    parent: ElementId,
    grandparent: Option<ElementId>,
    parent_bounds: Rect,
    dynamic_path: bool,
    env: &mut AssignEnv<'_>,
) {
    // Pre-set identifiers are final; repeated passes are no-ops.
    if element.has_identifier() {
        env.summary.skipped_preset += 1;
        env.tracer
            .log(&AssignEvent::now(element.kind).with_outcome("skipped-preset"));
        return;
    }

    let page_type = if dynamic_path || element.kind.is_scroll_family() {
        PageType::Dynamic
    } else {
        PageType::Static
    };

    let parts = IdentifierParts {
        class_name: env.class_name.to_string(),
        grandparent_outlet: outlet_name(env.outlets, grandparent),
        parent_outlet: outlet_name(env.outlets, Some(parent)),
        self_outlet: outlet_name(env.outlets, Some(element.id)),
        position_in_parent: match page_type {
            PageType::Static => classify_position(element.frame.center(), parent_bounds)
                .label()
                .to_string(),
            PageType::Dynamic => String::new(),
        },
        title: title_for(element),
        type_name: element.kind.name().to_string(),
    };

    let base = parts.compose();
    let resolved = resolve_unique(&base, env.known);
    let collided = resolved != base;
    if collided {
        env.summary.collisions += 1;
    }

    env.known.insert(resolved.clone());
    env.assigned.push(resolved.clone());
    env.tracer.log(
        &AssignEvent::now(element.kind)
            .with_outcome("assigned")
            .with_identifier(&resolved)
            .with_page_type(page_type)
            .with_collision(collided),
    );

    element.identifier = Some(resolved);
    env.summary.assigned += 1;
}

fn outlet_name(outlets: &OutletRegistry, element: Option<ElementId>) -> String {
    element
        .and_then(|id| outlets.owning_outlet(id))
        .unwrap_or_default()
        .to_string()
}

/// Manually set an element's identifier.
///
/// Fails with an explicit conflict if the identifier was already handed out
/// on this screen. On success the identifier is recorded in the screen's
/// known set, so later auto-assignment cannot collide with it.
pub fn set_identifier(
    screen: &mut Screen,
    element: ElementId,
    proposed: &str,
) -> Result<(), AssignError> {
    if screen.known_identifiers.contains(proposed) {
        return Err(AssignError::IdentifierTaken {
            proposed: proposed.to_string(),
        });
    }

    {
        let target = screen
            .root
            .find_mut(element)
            .ok_or(AssignError::ElementNotFound { element })?;
        target.identifier = Some(proposed.to_string());
    }

    screen.record_identifier(proposed);
    Ok(())
}
