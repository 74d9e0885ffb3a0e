//! CLI configuration.
//!
//! Defaults for the generate/grade commands, loaded from
//! `mathforge.toml` in the current directory or
//! `~/.config/mathforge/config.toml`. Every field is optional; flags
//! always win over the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level mathforge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MathforgeConfig {
    /// Default number of problems per paper.
    #[serde(default = "default_count")]
    pub default_count: u32,
    /// Default numeric range.
    #[serde(default = "default_range")]
    pub default_range: i64,
    /// Whether papers include proper fractions by default.
    #[serde(default)]
    pub allow_fractions: bool,
    /// Directory the well-known files live in.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Exercise file name.
    #[serde(default = "default_exercise_file")]
    pub exercise_file: String,
    /// Answer-key file name.
    #[serde(default = "default_answer_file")]
    pub answer_file: String,
    /// Grade report file name.
    #[serde(default = "default_grade_file")]
    pub grade_file: String,
}

fn default_count() -> u32 {
    10
}
fn default_range() -> i64 {
    20
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_exercise_file() -> String {
    "Exercises.txt".to_string()
}
fn default_answer_file() -> String {
    "Answers.txt".to_string()
}
fn default_grade_file() -> String {
    "Grade.txt".to_string()
}

impl Default for MathforgeConfig {
    fn default() -> Self {
        Self {
            default_count: default_count(),
            default_range: default_range(),
            allow_fractions: false,
            output_dir: default_output_dir(),
            exercise_file: default_exercise_file(),
            answer_file: default_answer_file(),
            grade_file: default_grade_file(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `mathforge.toml` in the current directory
/// 2. `~/.config/mathforge/config.toml`
pub fn load_config_from(path: Option<&Path>) -> Result<MathforgeConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("mathforge.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<MathforgeConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(MathforgeConfig::default()),
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("mathforge"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = MathforgeConfig::default();
        assert_eq!(config.default_count, 10);
        assert_eq!(config.default_range, 20);
        assert!(!config.allow_fractions);
        assert_eq!(config.exercise_file, "Exercises.txt");
        assert_eq!(config.answer_file, "Answers.txt");
        assert_eq!(config.grade_file, "Grade.txt");
    }

    #[test]
    fn parse_partial_config() {
        let toml_str = r#"
default_count = 30
allow_fractions = true
"#;
        let config: MathforgeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.default_count, 30);
        assert!(config.allow_fractions);
        assert_eq!(config.default_range, 20);
        assert_eq!(config.grade_file, "Grade.txt");
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_config_from(Some(Path::new("/definitely/not/here.toml")));
        assert!(err.is_err());
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "default_range = 99\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.default_range, 99);
    }
}
