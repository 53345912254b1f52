// 🏗️ Flat-file Parser - Student score sheets
//
// Input:  one `id,fullName,score` record per line, no header
// Output: one report line per student

use crate::entities::Student;
use crate::error::GradingError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Fields every record must carry
const FIELD_COUNT: usize = 3;

// ============================================================================
// READING
// ============================================================================

/// Read all students from a score sheet on disk.
///
/// A missing file is reported as `InputNotFound` so callers can abort the
/// whole run on it.
pub fn read_students(input_path: &Path) -> Result<Vec<Student>, GradingError> {
    let file = File::open(input_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => GradingError::InputNotFound(input_path.to_path_buf()),
        _ => GradingError::Io(e),
    })?;

    let students = parse_students(file)?;
    tracing::info!(
        path = %input_path.display(),
        count = students.len(),
        "students loaded"
    );
    Ok(students)
}

/// Parse score-sheet records from any reader.
///
/// Every line must split on commas into exactly three fields; quotes carry no
/// meaning and blank lines count as malformed. The first malformed line aborts
/// the parse:
/// - wrong field count or non-integer id -> `MissingField`
/// - non-integer score -> `InvalidScoreFormat`
///
/// Ids and scores are 32-bit; anything wider is rejected like any other
/// non-integer. Messages quote the line as it appears in the input.
pub fn parse_students<R: Read>(reader: R) -> Result<Vec<Student>, GradingError> {
    let mut students = Vec::new();

    for raw in BufReader::new(reader).lines() {
        let raw = raw?;
        let line = raw.strip_suffix('\r').unwrap_or(&raw);
        students.push(parse_line(line)?);
    }

    Ok(students)
}

/// Split one line into trimmed fields. An empty line yields an empty record.
fn split_fields(line: &str) -> Result<StringRecord, GradingError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(record) => Ok(record?),
        None => Ok(StringRecord::new()),
    }
}

fn parse_line(line: &str) -> Result<Student, GradingError> {
    let record = split_fields(line)?;

    if record.len() != FIELD_COUNT {
        return Err(GradingError::MissingField(format!(
            "Line '{}' is missing required fields.",
            line
        )));
    }

    let id: i32 = record[0]
        .parse()
        .map_err(|_| GradingError::MissingField(format!("Invalid ID format in line: '{}'", line)))?;

    let full_name = &record[1];

    let score: i32 = record[2].parse().map_err(|_| {
        GradingError::InvalidScoreFormat(format!("Score '{}' is not a valid integer.", &record[2]))
    })?;

    Ok(Student::new(id, full_name, score))
}

// ============================================================================
// WRITING
// ============================================================================

/// Write the graded report to `output_path`, replacing any previous file
pub fn write_report(students: &[Student], output_path: &Path) -> Result<(), GradingError> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_report_to(students, &mut writer)?;
    writer.flush()?;

    tracing::info!(
        path = %output_path.display(),
        count = students.len(),
        "report written"
    );
    Ok(())
}

pub fn write_report_to<W: Write>(students: &[Student], writer: &mut W) -> io::Result<()> {
    for student in students {
        writeln!(writer, "{}", student.report_line())?;
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_two_students() {
        let students = parse_students("1,Alice Johnson,85\n2,Bob,55".as_bytes()).unwrap();

        assert_eq!(
            students,
            vec![
                Student::new(1, "Alice Johnson", 85),
                Student::new(2, "Bob", 55)
            ]
        );
    }

    #[test]
    fn test_report_lines_match_format() {
        let students = parse_students("1,Alice Johnson,85\n2,Bob,55".as_bytes()).unwrap();
        let mut out = Vec::new();
        write_report_to(&students, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Alice Johnson (ID: 1): Score = 85, Grade = A\nBob (ID: 2): Score = 55, Grade = D\n"
        );
    }

    #[test]
    fn test_fields_are_trimmed() {
        let students = parse_students(" 7 ,  Carol Lee , 72 \n".as_bytes()).unwrap();
        assert_eq!(students, vec![Student::new(7, "Carol Lee", 72)]);
    }

    #[test]
    fn test_two_fields_is_missing_field() {
        let err = parse_students("1,Alice".as_bytes()).unwrap_err();

        match err {
            GradingError::MissingField(msg) => {
                assert_eq!(msg, "Line '1,Alice' is missing required fields.")
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_four_fields_is_missing_field() {
        let err = parse_students("1,Alice,Johnson,85".as_bytes()).unwrap_err();
        assert!(matches!(err, GradingError::MissingField(_)));
    }

    #[test]
    fn test_bad_id_is_missing_field() {
        let err = parse_students("x1,Alice,85".as_bytes()).unwrap_err();

        match err {
            GradingError::MissingField(msg) => {
                assert_eq!(msg, "Invalid ID format in line: 'x1,Alice,85'")
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_score_is_invalid_score_format() {
        let err = parse_students("1,Alice,eighty".as_bytes()).unwrap_err();

        match err {
            GradingError::InvalidScoreFormat(msg) => {
                assert_eq!(msg, "Score 'eighty' is not a valid integer.")
            }
            other => panic!("expected InvalidScoreFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_first_bad_line_aborts() {
        let err = parse_students("1,Alice,85\n2,Bob\n3,Carol,oops".as_bytes()).unwrap_err();
        assert!(matches!(err, GradingError::MissingField(_)));
    }

    #[test]
    fn test_blank_line_is_missing_field() {
        let err = parse_students("1,Alice,85\n\n2,Bob,55".as_bytes()).unwrap_err();

        match err {
            GradingError::MissingField(msg) => {
                assert_eq!(msg, "Line '' is missing required fields.")
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_quotes_do_not_group_commas() {
        let err = parse_students("1,\"Smith, John\",85".as_bytes()).unwrap_err();

        match err {
            GradingError::MissingField(msg) => {
                assert_eq!(msg, "Line '1,\"Smith, John\",85' is missing required fields.")
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_message_quotes_raw_line() {
        let err = parse_students(" 1 , Alice".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "Line ' 1 , Alice' is missing required fields.");
    }

    #[test]
    fn test_values_wider_than_32_bits_are_rejected() {
        let err = parse_students("99999999999,Alice,85".as_bytes()).unwrap_err();
        assert!(matches!(err, GradingError::MissingField(_)));

        let err = parse_students("1,Alice,99999999999".as_bytes()).unwrap_err();
        match err {
            GradingError::InvalidScoreFormat(msg) => {
                assert_eq!(msg, "Score '99999999999' is not a valid integer.")
            }
            other => panic!("expected InvalidScoreFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_crlf_and_trailing_newline_accepted() {
        let students = parse_students("1,Alice,85\r\n2,Bob,55\r\n".as_bytes()).unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[1], Student::new(2, "Bob", 55));
    }

    #[test]
    fn test_read_students_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.txt");

        let err = read_students(&path).unwrap_err();
        assert!(matches!(err, GradingError::InputNotFound(p) if p == path));
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");

        write_report(&[Student::new(3, "Dan", 61)], &path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Dan (ID: 3): Score = 61, Grade = C\n"
        );
    }
}
