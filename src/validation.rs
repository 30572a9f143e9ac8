//! Optional roster checks.
//!
//! The scheduler accepts any roster as given. These checks are for callers
//! who want to catch data problems before scheduling. Detects:
//! - Duplicate emails
//! - Duplicate teachers (same full name and email)
//! - Teachers with no capabilities
//! - Required subjects no teacher can teach

use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::models::{Subject, Teacher};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind:?}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two teachers share an email address.
    DuplicateEmail,
    /// Two teachers share full name and email.
    DuplicateTeacher,
    /// A teacher cannot teach anything.
    NoCapabilities,
    /// A required subject is not in any teacher's capability set.
    UncoverableSubject,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster against the subjects it must cover.
///
/// Checks:
/// 1. No two teachers share a non-empty email
/// 2. No two teachers share full name and email
/// 3. Every teacher can teach at least one subject
/// 4. Every required subject is teachable by someone
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster<S: Subject>(
    required: &HashSet<S>,
    teachers: &[Teacher<S>],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut emails: HashMap<&str, usize> = HashMap::new();
    let mut identities: HashSet<(String, &str)> = HashSet::new();

    for (i, t) in teachers.iter().enumerate() {
        if !identities.insert((t.full_name(), t.email.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTeacher,
                format!(
                    "Duplicate teacher at roster entry {i}: {} <{}>",
                    t.full_name(),
                    t.email
                ),
            ));
        } else if !t.email.is_empty() {
            if let Some(first) = emails.insert(t.email.as_str(), i) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateEmail,
                    format!("Email '{}' used by entries {first} and {i}", t.email),
                ));
            }
        }

        if t.can_teach_subjects.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoCapabilities,
                format!("Teacher '{}' cannot teach any subject", t.full_name()),
            ));
        }
    }

    for subject in uncoverable_subjects(required, teachers) {
        errors.push(ValidationError::new(
            ValidationErrorKind::UncoverableSubject,
            format!("No teacher can teach {subject:?}"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Required subjects that no teacher on the roster can teach.
///
/// A non-empty result means scheduling is bound to be infeasible.
pub fn uncoverable_subjects<S: Subject>(
    required: &HashSet<S>,
    teachers: &[Teacher<S>],
) -> HashSet<S> {
    required
        .iter()
        .filter(|s| !teachers.iter().any(|t| t.can_teach(s)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::create_schedule;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_teachers() -> Vec<Teacher> {
        vec![
            Teacher::new(
                "Іван",
                "Петров",
                35,
                "ivan@example.com",
                ["Математика", "Фізика"],
            ),
            Teacher::new("Марія", "Сидоренко", 30, "maria@example.com", ["Хімія"]),
        ]
    }

    #[test]
    fn test_valid_roster() {
        let required = set(&["Математика", "Хімія"]);
        assert!(validate_roster(&required, &sample_teachers()).is_ok());
    }

    #[test]
    fn test_duplicate_email() {
        let mut teachers = sample_teachers();
        let petro = Teacher::new("Петро", "Коваль", 50, "ivan@example.com", ["Фізика"]);
        teachers.push(petro);

        let errors = validate_roster(&HashSet::new(), &teachers).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateEmail);
        assert!(errors[0].message.contains("0 and 2"));
    }

    #[test]
    fn test_empty_emails_not_duplicates() {
        let teachers: Vec<Teacher> = vec![
            Teacher::new("A", "A", 30, "", ["X"]),
            Teacher::new("B", "B", 30, "", ["Y"]),
        ];
        assert!(validate_roster(&HashSet::new(), &teachers).is_ok());
    }

    #[test]
    fn test_duplicate_teacher() {
        let mut teachers = sample_teachers();
        let again = Teacher::new("Марія", "Сидоренко", 31, "maria@example.com", ["Біологія"]);
        teachers.push(again);

        let errors = validate_roster(&HashSet::new(), &teachers).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateTeacher));
        assert!(!errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateEmail));
    }

    #[test]
    fn test_no_capabilities() {
        let mut teachers = sample_teachers();
        let oleg = Teacher::new(
            "Олег",
            "Коваль",
            30,
            "oleg@example.com",
            Vec::<String>::new(),
        );
        teachers.push(oleg);

        let errors = validate_roster(&HashSet::new(), &teachers).unwrap_err();
        let no_caps: Vec<_> = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::NoCapabilities)
            .collect();
        assert_eq!(no_caps.len(), 1);
        assert!(no_caps[0].message.contains("Олег"));
    }

    #[test]
    fn test_uncoverable_subject() {
        let required = set(&["Математика", "Біологія", "Астрономія"]);
        let teachers = sample_teachers();

        let missing = uncoverable_subjects(&required, &teachers);
        assert_eq!(missing, set(&["Біологія", "Астрономія"]));

        let errors = validate_roster(&required, &teachers).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::UncoverableSubject)
                .count(),
            2
        );
        assert!(!create_schedule(&required, &teachers).is_feasible());
    }

    #[test]
    fn test_multiple_errors() {
        let teachers: Vec<Teacher> = vec![
            Teacher::new("A", "A", 30, "a@x", Vec::<String>::new()),
            Teacher::new("B", "B", 30, "a@x", ["X"]),
        ];
        let errors = validate_roster(&set(&["Y"]), &teachers).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::new(ValidationErrorKind::NoCapabilities, "no subjects");
        assert_eq!(err.to_string(), "NoCapabilities: no subjects");
    }
}
