// Student entity and its request/response DTOs.
//
// `student_id` is caller-supplied and immutable after creation; the
// address fields are optional; `school_class_id` is None while the
// student is unassigned.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::patch::PatchField;

/// A student record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: String,
    pub name: String,
    pub surname: String,
    pub date_of_birth: NaiveDate,
    pub city: Option<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub school_class_id: Option<i32>,
}

/// Body of `POST /api/v1/students`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub student_id: String,
    pub name: String,
    pub surname: String,
    pub date_of_birth: NaiveDate,
    pub city: Option<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,
}

impl CreateStudentRequest {
    pub fn into_entity(self) -> Student {
        Student {
            student_id: self.student_id,
            name: self.name,
            surname: self.surname,
            date_of_birth: self.date_of_birth,
            city: self.city,
            street: self.street,
            postal_code: self.postal_code,
            school_class_id: None,
        }
    }
}

/// Body of `PUT /api/v1/students/{id}` — full replace of the mutable
/// fields. The id comes from the route and cannot change; class
/// assignment is managed through PATCH or the class endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: String,
    pub surname: String,
    pub date_of_birth: NaiveDate,
    pub city: Option<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,
}

/// Body of `PATCH /api/v1/students/{id}`.
///
/// Every field is presence-aware: an omitted key leaves the stored value
/// untouched, an explicit `null` clears optional fields, and
/// `school_class_id` of `null`, `0`, or a negative value unassigns the
/// student from their class.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchStudentRequest {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub surname: PatchField<String>,
    #[serde(default)]
    pub date_of_birth: PatchField<NaiveDate>,
    #[serde(default)]
    pub city: PatchField<String>,
    #[serde(default)]
    pub street: PatchField<String>,
    #[serde(default)]
    pub postal_code: PatchField<String>,
    #[serde(default)]
    pub school_class_id: PatchField<i32>,
}

/// Student as returned by the API, with the class name denormalized for
/// display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentResponse {
    pub student_id: String,
    pub name: String,
    pub surname: String,
    pub date_of_birth: NaiveDate,
    pub city: Option<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub school_class_id: Option<i32>,
    pub school_class_name: Option<String>,
}

impl StudentResponse {
    pub fn from_entity(student: Student, school_class_name: Option<String>) -> Self {
        Self {
            student_id: student.student_id,
            name: student.name,
            surname: student.surname,
            date_of_birth: student.date_of_birth,
            city: student.city,
            street: student.street,
            postal_code: student.postal_code,
            school_class_id: student.school_class_id,
            school_class_name,
        }
    }
}
