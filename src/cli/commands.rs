use crate::assign::assigner::assign_identifiers;
use crate::screen::fixture::load_screen;
use crate::trace::logger::TraceLogger;

// ============================================================================
// assign subcommand
// ============================================================================

pub fn cmd_assign(
    fixture: &str,
    trace: Option<&str>,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut screen = load_screen(fixture)?;

    if verbose > 0 {
        eprintln!(
            "Assigning identifiers for screen '{}' ({} outlets)...",
            screen.class_name,
            screen.outlets.len()
        );
    }

    let tracer = match trace {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    let summary = assign_identifiers(&mut screen, &tracer);

    println!("=== Identifiers for {} ===", screen.class_name);
    for identifier in screen.assigned_identifiers() {
        println!("  {}", identifier);
    }
    println!(
        "=== {} assigned, {} skipped (pre-set), {} collisions, {} visited ===",
        summary.assigned, summary.skipped_preset, summary.collisions, summary.visited
    );

    Ok(())
}

// ============================================================================
// outlets subcommand
// ============================================================================

pub fn cmd_outlets(fixture: &str, verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    let screen = load_screen(fixture)?;

    if verbose > 0 {
        eprintln!("Loaded screen '{}'", screen.class_name);
    }

    if screen.outlets.is_empty() {
        println!("No outlets registered on {}", screen.class_name);
        return Ok(());
    }

    println!("=== Outlets for {} ===", screen.class_name);
    for entry in screen.outlets.entries() {
        match screen.element(entry.element) {
            Some(element) => println!(
                "  {} -> {} {} ({})",
                entry.name,
                element.kind.name(),
                element.id,
                element.text.as_deref().unwrap_or("<no text>")
            ),
            None => println!("  {} -> {} (dangling)", entry.name, entry.element),
        }
    }

    Ok(())
}
