use crate::domain::ports::StudentRepository;
use crate::domain::student::Student;
use crate::utils::error::{Result, RosterError};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

pub const FIELD_DELIMITER: char = ',';
const FIELDS_PER_RECORD: usize = 4;

/// A line rejected during load, with enough context for an operator to find
/// and fix it in the file.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    pub line_number: usize,
    pub line: String,
    pub reason: String,
}

/// Text-file roster store: one student per line, fields comma-delimited in
/// the order first_name,last_name,age,average_grade, no header.
///
/// Known format flaw: name fields are written without escaping, so a name
/// containing the delimiter corrupts its row on reload.
#[derive(Debug, Clone)]
pub struct FileStudentRepository {
    path: PathBuf,
}

impl FileStudentRepository {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.to_string_lossy().trim().is_empty() {
            return Err(RosterError::MissingArgument {
                name: "path".to_string(),
            });
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl StudentRepository for FileStudentRepository {
    fn save_students(&self, students: &[Student]) -> Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        for student in students {
            writeln!(
                writer,
                "{}{delim}{}{delim}{}{delim}{}",
                student.first_name(),
                student.last_name(),
                student.age(),
                student.average_grade(),
                delim = FIELD_DELIMITER,
            )?;
        }
        writer.flush()?;
        tracing::debug!("Saved {} students to {}", students.len(), self.path.display());
        Ok(())
    }

    fn load_students(&self) -> Result<Vec<Student>> {
        if !self.path.exists() {
            tracing::debug!("No roster file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;

        let (students, skipped) = parse_students(&lines);
        for skip in &skipped {
            tracing::warn!(
                "Skipped invalid student data at line {}: {} ('{}')",
                skip.line_number,
                skip.reason,
                skip.line
            );
        }
        Ok(students)
    }
}

/// Pure best-effort parser: returns the valid rows in file order plus a
/// diagnostic for every rejected line. Never fails as a whole.
pub fn parse_students(lines: &[String]) -> (Vec<Student>, Vec<SkippedLine>) {
    let mut students = Vec::new();
    let mut skipped = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        match parse_line(line) {
            Ok(student) => students.push(student),
            Err(reason) => skipped.push(SkippedLine {
                line_number: index + 1,
                line: line.clone(),
                reason,
            }),
        }
    }

    (students, skipped)
}

fn parse_line(line: &str) -> std::result::Result<Student, String> {
    let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if parts.len() != FIELDS_PER_RECORD {
        return Err(format!(
            "expected {} fields, found {}",
            FIELDS_PER_RECORD,
            parts.len()
        ));
    }

    let age: i32 = parts[2]
        .parse()
        .map_err(|_| format!("age is not an integer: '{}'", parts[2]))?;
    let grade: f64 = parts[3]
        .parse()
        .map_err(|_| format!("average grade is not a number: '{}'", parts[3]))?;

    Student::new(parts[0], parts[1], age, grade).map_err(|e| e.to_string())
}
