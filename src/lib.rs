use crate::{
    assign::assigner::{AssignmentSummary, assign_identifiers},
    screen::{fixture::load_screen, screen_model::Screen},
    trace::logger::TraceLogger,
};

pub mod assign;
pub mod cli;
pub mod screen;
pub mod trace;
pub mod view;

/// Load a screen fixture and run one full assignment pass over it.
///
/// This is the layout-complete entry point: the framework (here, the CLI or
/// a test) invokes it once per screen after layout, and every qualifying
/// element under the root container comes back with a unique identifier.
pub fn assign_screen_fixture(
    path: &str,
    tracer: &TraceLogger,
) -> Result<(Screen, AssignmentSummary), Box<dyn std::error::Error>> {
    let mut screen = load_screen(path)?;
    let summary = assign_identifiers(&mut screen, tracer);
    Ok((screen, summary))
}
