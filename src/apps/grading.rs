// 🎓 Grading Program - Score sheet in, graded report out

use crate::entities::Student;
use crate::error::GradingError;
use crate::parser;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

pub struct StudentResultProcessor;

impl StudentResultProcessor {
    pub fn new() -> Self {
        StudentResultProcessor
    }

    pub fn read_students_from_file(&self, input_path: &Path) -> Result<Vec<Student>, GradingError> {
        parser::read_students(input_path)
    }

    pub fn write_report_to_file(&self, students: &[Student], output_path: &Path) -> Result<(), GradingError> {
        parser::write_report(students, output_path)
    }

    /// Read, grade, write. Nothing is written unless every line parsed.
    pub fn process(&self, input_path: &Path, output_path: &Path) -> Result<usize, GradingError> {
        let students = self.read_students_from_file(input_path)?;
        self.write_report_to_file(&students, output_path)?;
        Ok(students.len())
    }
}

impl Default for StudentResultProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Console message for a failed run
pub fn describe_error(error: &GradingError) -> String {
    match error {
        GradingError::InputNotFound(_) => "Error: Input file not found.".to_string(),
        GradingError::InvalidScoreFormat(msg) => format!("Invalid score format: {}", msg),
        GradingError::MissingField(msg) => format!("Missing field: {}", msg),
        other => format!("An unexpected error occurred: {}", other),
    }
}

/// Generate the report; any grading error aborts the run with a message
pub fn run<W: Write>(out: &mut W, input_path: &Path, output_path: &Path) -> Result<()> {
    let processor = StudentResultProcessor::new();

    match processor.process(input_path, output_path) {
        Ok(_) => writeln!(out, "Report generated successfully!")?,
        Err(e) => {
            tracing::warn!(error = %e, input = %input_path.display(), "grading run aborted");
            writeln!(out, "{}", describe_error(&e))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_run_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("students.txt");
        let report = dir.path().join("report.txt");
        fs::write(&input, "1,Alice Johnson,85\n2,Bob,55\n").unwrap();
        let mut out = Vec::new();

        run(&mut out, &input, &report).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Report generated successfully!\n");
        assert_eq!(
            fs::read_to_string(&report).unwrap(),
            "Alice Johnson (ID: 1): Score = 85, Grade = A\nBob (ID: 2): Score = 55, Grade = D\n"
        );
    }

    #[test]
    fn test_missing_field_produces_no_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("students.txt");
        let report = dir.path().join("report.txt");
        fs::write(&input, "1,Alice\n").unwrap();
        let mut out = Vec::new();

        run(&mut out, &input, &report).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Missing field: Line '1,Alice' is missing required fields.\n"
        );
        assert!(!report.exists());
    }

    #[test]
    fn test_missing_input_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("report.txt");
        let mut out = Vec::new();

        run(&mut out, &dir.path().join("students.txt"), &report).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Error: Input file not found.\n");
        assert!(!report.exists());
    }

    #[test]
    fn test_invalid_score_message() {
        let err = GradingError::InvalidScoreFormat("Score 'abc' is not a valid integer.".into());
        assert_eq!(
            describe_error(&err),
            "Invalid score format: Score 'abc' is not a valid integer."
        );
    }

    #[test]
    fn test_unexpected_error_message() {
        let err = GradingError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"));
        assert_eq!(
            describe_error(&err),
            "An unexpected error occurred: I/O failure: disk on fire"
        );
    }

    #[test]
    fn test_process_returns_student_count() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("students.txt");
        fs::write(&input, "1,A,90\n2,B,70\n3,C,10\n").unwrap();

        let count = StudentResultProcessor::new()
            .process(&input, &dir.path().join("report.txt"))
            .unwrap();
        assert_eq!(count, 3);
    }
}
