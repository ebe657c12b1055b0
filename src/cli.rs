use crate::core::Deliverable;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DeliverableArg {
    Comprehensive,
    Owner,
    ExecutiveBrief,
    SalesMarketingManager,
    OperationsManager,
}

impl From<DeliverableArg> for Deliverable {
    fn from(arg: DeliverableArg) -> Self {
        match arg {
            DeliverableArg::Comprehensive => Deliverable::Comprehensive,
            DeliverableArg::Owner => Deliverable::Owner,
            DeliverableArg::ExecutiveBrief => Deliverable::ExecutiveBrief,
            DeliverableArg::SalesMarketingManager => Deliverable::SalesMarketingManager,
            DeliverableArg::OperationsManager => Deliverable::OperationsManager,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "healthmap")]
#[command(about = "Business health assessment report generator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate intermediate reports and composed deliverables
    Generate {
        /// Path to the assessment JSON file
        assessment: PathBuf,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file (defaults to ./healthmap.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Deliverables to compose (defaults to all)
        #[arg(long, value_enum, value_delimiter = ',')]
        deliverables: Option<Vec<DeliverableArg>>,

        /// Skip writing intermediate artifacts, keep only deliverables
        #[arg(long)]
        skip_intermediates: bool,
    },

    /// Run the full pipeline without writing files and report validation
    Validate {
        /// Path to the assessment JSON file
        assessment: PathBuf,

        /// Config file (defaults to ./healthmap.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the content registry table
    Registry,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::parse_from([
            "healthmap",
            "generate",
            "assessment.json",
            "--output",
            "out",
            "--deliverables",
            "owner,executive-brief",
        ]);
        match cli.command {
            Commands::Generate {
                assessment,
                output,
                deliverables,
                ..
            } => {
                assert_eq!(assessment, PathBuf::from("assessment.json"));
                assert_eq!(output, Some(PathBuf::from("out")));
                assert_eq!(deliverables.unwrap().len(), 2);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_parse_validate() {
        let cli = Cli::parse_from(["healthmap", "validate", "a.json"]);
        assert!(matches!(cli.command, Commands::Validate { .. }));
    }

    #[test]
    fn test_parse_registry() {
        let cli = Cli::parse_from(["healthmap", "registry"]);
        assert!(matches!(cli.command, Commands::Registry));
    }
}
