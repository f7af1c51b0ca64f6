use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::prelude::*;
use tracing::info;

use crate::error::PersistError;

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// Result of a single answered question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    /// 1-based position in the quiz
    pub number: usize,
    pub prompt: String,
    pub outcome: Outcome,
    pub correct_answer: String,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = match self.outcome {
            Outcome::Correct => "Correct!",
            Outcome::Incorrect => "incorrect.",
        };
        write!(
            f,
            "Question ({}) {}: {} Answer was: {}",
            self.number, self.prompt, verdict, self.correct_answer
        )
    }
}

/// Final results of a finished quiz
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub player_name: String,
    pub lines: Vec<ReportLine>,
    pub score: usize,
    pub total: usize,
    pub finished_at: DateTime<Local>,
}

impl Report {
    pub fn summary(&self) -> String {
        format!("That means you got {}/{} correct!", self.score, self.total)
    }

    /// `<player>_<timestamp>_results.txt`
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}_results.txt",
            file_safe(&self.player_name),
            self.finished_at.format("%Y-%m-%d_%H-%M-%S")
        )
    }

    /// Writes one line per report line into `dir`, returning the file written
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf, PersistError> {
        let path = dir.join(self.file_name());
        self.write_lines(dir, &path)
            .map_err(|source| PersistError {
                path: path.clone(),
                source,
            })?;
        info!(path = %path.display(), lines = self.lines.len(), "saved results");
        Ok(path)
    }

    fn write_lines(&self, dir: &Path, path: &Path) -> std::io::Result<()> {
        fs::create_dir_all(dir)?;
        let mut out = BufWriter::new(File::create(path)?);
        for line in &self.lines {
            // a stray newline in a prompt must not split a record
            writeln!(out, "{}", line.to_string().replace(['\r', '\n'], " "))?;
        }
        out.flush()
    }
}

fn file_safe(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "player".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn report() -> Report {
        Report {
            player_name: "Ada Lovelace".into(),
            lines: vec![
                ReportLine {
                    number: 1,
                    prompt: "Which planet is closest to the sun?".into(),
                    outcome: Outcome::Correct,
                    correct_answer: "Mercury".into(),
                },
                ReportLine {
                    number: 2,
                    prompt: "Who wrote\nHamlet?".into(),
                    outcome: Outcome::Incorrect,
                    correct_answer: "William Shakespeare".into(),
                },
            ],
            score: 1,
            total: 2,
            finished_at: Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap(),
        }
    }

    #[test]
    fn test_report_line_display() {
        let r = report();
        assert_eq!(
            r.lines[0].to_string(),
            "Question (1) Which planet is closest to the sun?: Correct! Answer was: Mercury"
        );
        assert!(r.lines[1]
            .to_string()
            .ends_with(": incorrect. Answer was: William Shakespeare"));
    }

    #[test]
    fn test_summary() {
        assert_eq!(report().summary(), "That means you got 1/2 correct!");
    }

    #[test]
    fn test_file_name_is_derived_from_player_and_time() {
        assert_eq!(
            report().file_name(),
            "Ada_Lovelace_2024-03-09_14-05-07_results.txt"
        );
    }

    #[test]
    fn test_file_safe_replaces_path_separators() {
        assert_eq!(file_safe("../etc/passwd"), "___etc_passwd");
        assert_eq!(file_safe("  "), "player");
    }

    #[test]
    fn test_save_writes_one_line_per_result() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("results");
        let r = report();
        let path = r.save_to(&target).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), r.lines.len());
        assert!(contents.contains("Who wrote Hamlet?"));
    }

    #[test]
    fn test_save_to_unwritable_location_reports_path() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "x").unwrap();

        let err = report().save_to(&blocker).unwrap_err();
        assert_eq!(err.path, blocker.join(report().file_name()));
    }
}
