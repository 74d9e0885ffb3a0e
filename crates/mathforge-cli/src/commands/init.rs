//! The `mathforge init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("mathforge.toml").exists() {
        println!("mathforge.toml already exists, skipping.");
    } else {
        std::fs::write("mathforge.toml", SAMPLE_CONFIG)?;
        println!("Created mathforge.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit mathforge.toml to taste");
    println!("  2. Run: mathforge generate -n 10 -r 20 --fractions");
    println!("  3. Run: mathforge grade --submission MyAnswers.txt");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# mathforge configuration

default_count = 10
default_range = 20
allow_fractions = false
output_dir = "."
exercise_file = "Exercises.txt"
answer_file = "Answers.txt"
grade_file = "Grade.txt"
"#;
