use accessid::cli::commands::{cmd_assign, cmd_outlets};
use accessid::cli::config::{Cli, Commands, load_config};
use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Assign { fixture, trace } => {
            // Resolve trace path: CLI > config > off
            let trace_path = trace.as_deref().or(config.assign.trace.as_deref());
            cmd_assign(&fixture, trace_path, cli.verbose)?;
        }
        Commands::Outlets { fixture } => {
            cmd_outlets(&fixture, cli.verbose)?;
        }
    }

    Ok(())
}
