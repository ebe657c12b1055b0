//! `healthmap registry` — print the content registry table.

use crate::registry::ContentRegistry;
use anyhow::Result;
use colored::Colorize;

pub fn print_registry() -> Result<()> {
    let registry = ContentRegistry::standard();

    for entry in registry.entries() {
        println!(
            "{} ({:?})",
            entry.source_file.slug().bold(),
            entry.strategy
        );
        println!("  {}", entry.description);
        for selector in &entry.extraction_config {
            let required = if selector.required {
                " [required]".red().to_string()
            } else {
                String::new()
            };
            println!(
                "  extract {} as {}{}",
                selector.pattern.cyan(),
                selector.content_type.slug(),
                required
            );
        }
        for mapping in &entry.target_mappings {
            println!(
                "  -> {} #{} ({:?}, {:?} voice, priority {})",
                mapping.deliverable.slug(),
                mapping.target_section,
                mapping.insertion_point,
                mapping.target_voice,
                mapping.priority
            );
        }
        println!();
    }

    Ok(())
}
