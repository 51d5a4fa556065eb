use crate::domain::student::Student;
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::validate_non_empty_string;

/// Ordered roster of students, unique by (first_name, last_name) identity.
/// Insertion order is preserved; all lookups are linear scans.
#[derive(Debug, Default)]
pub struct University {
    students: Vec<Student>,
}

impl University {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the student unless one with the same identity is present.
    pub fn add_student(&mut self, student: Student) -> Result<()> {
        if self.students.iter().any(|s| s.same_identity(&student)) {
            return Err(RosterError::Duplicate {
                first_name: student.first_name().to_string(),
                last_name: student.last_name().to_string(),
            });
        }
        self.students.push(student);
        Ok(())
    }

    /// Removes the first identity match and reports whether anything was
    /// removed. Not-found is an expected outcome, not an error.
    pub fn remove_student(&mut self, student: &Student) -> bool {
        match self.students.iter().position(|s| s.same_identity(student)) {
            Some(index) => {
                self.students.remove(index);
                true
            }
            None => false,
        }
    }

    /// Case-insensitive scan on both names. `Ok(None)` when no match.
    pub fn find_student(&self, first_name: &str, last_name: &str) -> Result<Option<&Student>> {
        validate_non_empty_string("first_name", first_name)?;
        validate_non_empty_string("last_name", last_name)?;

        let first = first_name.to_lowercase();
        let last = last_name.to_lowercase();
        Ok(self.students.iter().find(|s| {
            s.first_name().to_lowercase() == first && s.last_name().to_lowercase() == last
        }))
    }

    /// Read-only ordered view of the current contents.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(first: &str, last: &str) -> Student {
        Student::new(first, last, 20, 4.0).unwrap()
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut university = University::new();
        university.add_student(student("John", "Doe")).unwrap();
        university.add_student(student("Jane", "Smith")).unwrap();

        let names: Vec<_> = university
            .students()
            .iter()
            .map(|s| s.first_name())
            .collect();
        assert_eq!(names, ["John", "Jane"]);
    }

    #[test]
    fn test_duplicate_identity_rejected() {
        let mut university = University::new();
        university
            .add_student(Student::new("John", "Doe", 20, 4.5).unwrap())
            .unwrap();

        // Same identity, different age/grade: still a duplicate.
        let err = university
            .add_student(Student::new("John", "Doe", 30, 2.0).unwrap())
            .unwrap_err();
        assert!(matches!(err, RosterError::Duplicate { .. }));

        assert_eq!(university.len(), 1);
        assert_eq!(university.students()[0].age(), 20);
    }

    #[test]
    fn test_remove_reports_outcome() {
        let mut university = University::new();
        let john = student("John", "Doe");
        university.add_student(john.clone()).unwrap();

        assert!(university.remove_student(&john));
        assert!(!university.remove_student(&john));
        assert!(university.is_empty());
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let mut university = University::new();
        university.add_student(student("Jane", "Smith")).unwrap();

        let found = university.find_student("jane", "SMITH").unwrap();
        assert_eq!(found.unwrap().first_name(), "Jane");

        assert!(university.find_student("John", "Doe").unwrap().is_none());
    }

    #[test]
    fn test_find_rejects_blank_arguments() {
        let university = University::new();
        assert!(university.find_student("", "Doe").is_err());
        assert!(university.find_student("John", "  ").is_err());
    }
}
