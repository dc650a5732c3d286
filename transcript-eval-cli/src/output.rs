//! Report rendering: console output and optional JSON persistence.

use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use transcript_eval_core::{MetricsReport, Result};

/// Print the report to stdout and, when a destination is given, persist it as
/// pretty-printed JSON.
///
/// The saved file name always ends in `.json`; a missing parent directory is
/// created first.
pub fn render_output(report: &MetricsReport, output_file: Option<&Path>) -> Result<()> {
    let json = report.to_pretty_json()?;

    if let Some(path) = output_file {
        let path = normalize_report_path(path);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, &json)?;
        println!(
            "{} {}",
            "Evaluation results saved to".green(),
            path.display()
        );
    }

    println!("{json}");
    Ok(())
}

fn normalize_report_path(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext == "json" => path.to_path_buf(),
        _ => {
            let mut name = path.as_os_str().to_os_string();
            name.push(".json");
            PathBuf::from(name)
        }
    }
}
