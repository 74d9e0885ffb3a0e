//! The `mathforge check` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(paper_path: PathBuf) -> Result<()> {
    let check = mathforge_core::paper::validate_paper(&paper_path)?;

    println!(
        "Paper: {} ({} entries)",
        paper_path.display(),
        check.entries
    );

    for w in &check.warnings {
        let prefix = w
            .index
            .map(|i| format!("  [{i}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if check.warnings.is_empty() {
        println!("Paper is clean.");
    } else {
        println!("\n{} warning(s) found.", check.warnings.len());
    }

    Ok(())
}
