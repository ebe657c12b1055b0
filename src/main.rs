use anyhow::Result;
use clap::Parser;
use healthmap::cli::{Cli, Commands};
use healthmap::commands;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            assessment,
            output,
            config,
            deliverables,
            skip_intermediates,
        } => commands::generate::generate_reports(commands::generate::GenerateConfig {
            assessment,
            output,
            config,
            deliverables: deliverables
                .map(|list| list.into_iter().map(Into::into).collect()),
            skip_intermediates,
        }),
        Commands::Validate { assessment, config } => {
            commands::validate::validate_assessment(assessment, config)
        }
        Commands::Registry => commands::registry::print_registry(),
    }
}
