//! Business constants and user-facing message builders.
//!
//! Both assignment entry points (student-centric PATCH and the legacy
//! class-centric routes) must report identical outcomes, so every
//! user-facing string is built here and nowhere else.

/// Maximum number of students permitted in one class simultaneously.
pub const MAX_STUDENTS_PER_CLASS: usize = 20;

pub mod messages {
    use super::MAX_STUDENTS_PER_CLASS;

    // Student validation messages
    pub const STUDENT_ID_REQUIRED: &str = "StudentId is required.";
    pub const STUDENT_NAME_REQUIRED: &str = "Name is required.";
    pub const STUDENT_SURNAME_REQUIRED: &str = "Surname is required.";
    pub const STUDENT_DATE_OF_BIRTH_REQUIRED: &str = "DateOfBirth is required.";

    // School class validation messages
    pub const CLASS_NAME_REQUIRED: &str = "Name is required.";
    pub const CLASS_LEADING_TEACHER_REQUIRED: &str = "LeadingTeacher is required.";

    pub fn student_not_found(student_id: &str) -> String {
        format!("Student with ID '{student_id}' not found.")
    }

    pub fn student_already_exists(student_id: &str) -> String {
        format!("Student with ID '{student_id}' already exists.")
    }

    pub fn student_deleted(student_id: &str) -> String {
        format!("Student with ID '{student_id}' has been deleted.")
    }

    pub fn class_not_found(class_id: i32) -> String {
        format!("School class with ID {class_id} not found.")
    }

    pub fn class_deleted(class_id: i32) -> String {
        format!("School class with ID {class_id} has been deleted.")
    }

    pub fn class_full(class_name: &str) -> String {
        format!("Class '{class_name}' already has the maximum of {MAX_STUDENTS_PER_CLASS} students.")
    }

    pub fn student_already_in_class(name: &str, surname: &str) -> String {
        format!("Student '{name} {surname}' is already in this class.")
    }

    pub fn student_not_in_class(name: &str, surname: &str) -> String {
        format!("Student '{name} {surname}' is not in this class.")
    }

    pub fn student_added_to_class(name: &str, surname: &str, class_name: &str) -> String {
        format!("Student '{name} {surname}' has been added to class '{class_name}'.")
    }

    pub fn student_removed_from_class(name: &str, surname: &str, class_name: &str) -> String {
        format!("Student '{name} {surname}' has been removed from class '{class_name}'.")
    }
}
