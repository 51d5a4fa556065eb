use crate::utils::error::Result;
use crate::utils::validation::{validate_name, validate_range};
use serde::Serialize;

pub const MIN_AGE: i32 = 16;
pub const MAX_AGE: i32 = 100;
pub const MIN_GRADE: f64 = 0.0;
pub const MAX_GRADE: f64 = 5.0;

/// A validated student record. Construction is the only way to obtain one,
/// so every `Student` in circulation satisfies the field constraints.
///
/// `Deserialize` is intentionally not derived: it would bypass validation.
#[derive(Debug, Clone, Serialize)]
pub struct Student {
    first_name: String,
    last_name: String,
    age: i32,
    average_grade: f64,
}

impl Student {
    /// Validates in field order and fails on the first violation; no
    /// partially-constructed value is observable on failure.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: i32,
        average_grade: f64,
    ) -> Result<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();

        validate_name("first_name", &first_name)?;
        validate_name("last_name", &last_name)?;
        validate_range("age", age, MIN_AGE, MAX_AGE)?;
        validate_range("average_grade", average_grade, MIN_GRADE, MAX_GRADE)?;

        Ok(Self {
            first_name,
            last_name,
            age,
            average_grade,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn average_grade(&self) -> f64 {
        self.average_grade
    }

    // Mutation produces a new validated entity; the original is untouched
    // when validation fails.

    pub fn with_first_name(self, first_name: impl Into<String>) -> Result<Self> {
        Self::new(first_name, self.last_name, self.age, self.average_grade)
    }

    pub fn with_last_name(self, last_name: impl Into<String>) -> Result<Self> {
        Self::new(self.first_name, last_name, self.age, self.average_grade)
    }

    pub fn with_age(self, age: i32) -> Result<Self> {
        Self::new(self.first_name, self.last_name, age, self.average_grade)
    }

    pub fn with_average_grade(self, average_grade: f64) -> Result<Self> {
        Self::new(self.first_name, self.last_name, self.age, average_grade)
    }

    /// Identity key: (first_name, last_name), case-sensitive. Age and grade
    /// are not part of identity.
    pub fn identity(&self) -> (&str, &str) {
        (&self.first_name, &self.last_name)
    }

    pub fn same_identity(&self, other: &Student) -> bool {
        self.identity() == other.identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RosterError;

    #[test]
    fn test_valid_student_keeps_inputs() {
        let student = Student::new("John", "Doe", 20, 4.5).unwrap();
        assert_eq!(student.first_name(), "John");
        assert_eq!(student.last_name(), "Doe");
        assert_eq!(student.age(), 20);
        assert_eq!(student.average_grade(), 4.5);
    }

    #[test]
    fn test_age_bounds_inclusive() {
        assert!(Student::new("A", "B", 16, 3.0).is_ok());
        assert!(Student::new("A", "B", 100, 3.0).is_ok());
        assert!(Student::new("A", "B", 15, 3.0).is_err());
        assert!(Student::new("A", "B", 101, 3.0).is_err());
    }

    #[test]
    fn test_grade_bounds_inclusive() {
        assert!(Student::new("A", "B", 20, 0.0).is_ok());
        assert!(Student::new("A", "B", 20, 5.0).is_ok());
        assert!(Student::new("A", "B", 20, -0.1).is_err());
        assert!(Student::new("A", "B", 20, 5.1).is_err());
    }

    #[test]
    fn test_name_constraints() {
        assert!(Student::new("", "Doe", 20, 4.0).is_err());
        assert!(Student::new("John", "  ", 20, 4.0).is_err());
        assert!(Student::new("x".repeat(51), "Doe", 20, 4.0).is_err());
        assert!(Student::new("x".repeat(50), "Doe", 20, 4.0).is_ok());
    }

    #[test]
    fn test_first_violation_names_its_field() {
        let err = Student::new("", "", 0, 99.0).unwrap_err();
        match err {
            RosterError::Validation { field, .. } => assert_eq!(field, "first_name"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_with_setters_revalidate() {
        let student = Student::new("John", "Doe", 20, 4.5).unwrap();
        let older = student.clone().with_age(30).unwrap();
        assert_eq!(older.age(), 30);
        assert_eq!(older.first_name(), "John");

        assert!(student.clone().with_age(10).is_err());
        assert!(student.clone().with_first_name("").is_err());
        assert!(student.with_average_grade(6.0).is_err());
    }

    #[test]
    fn test_identity_ignores_age_and_grade() {
        let a = Student::new("John", "Doe", 20, 4.5).unwrap();
        let b = Student::new("John", "Doe", 55, 1.0).unwrap();
        let c = Student::new("john", "Doe", 20, 4.5).unwrap();
        assert!(a.same_identity(&b));
        assert!(!a.same_identity(&c)); // identity is case-sensitive
    }
}
