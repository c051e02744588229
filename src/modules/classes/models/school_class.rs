// SchoolClass entity and its request/response DTOs.
//
// The member list is derived from students' `school_class_id` on read;
// the class record itself never stores membership.

use serde::{Deserialize, Serialize};

use crate::core::patch::PatchField;
use crate::modules::students::models::{Student, StudentResponse};

/// A school class record as held by the store. Ids are store-generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolClass {
    pub id: i32,
    pub name: String,
    pub leading_teacher: String,
}

/// Body of `POST /api/v1/classes`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSchoolClassRequest {
    pub name: String,
    pub leading_teacher: String,
}

/// Body of `PUT /api/v1/classes/{id}` — full replace; the id comes from
/// the route.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSchoolClassRequest {
    pub name: String,
    pub leading_teacher: String,
}

/// Body of `PATCH /api/v1/classes/{id}`. Both fields are required on the
/// entity, so an explicit `null` is rejected the same way a blank value is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchSchoolClassRequest {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub leading_teacher: PatchField<String>,
}

/// Body of the legacy `POST /api/v1/classes/{id}/students` route.
#[derive(Debug, Clone, Deserialize)]
pub struct AddStudentToClassRequest {
    pub student_id: String,
}

/// Class as returned by the API, with the derived member list and count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolClassResponse {
    pub id: i32,
    pub name: String,
    pub leading_teacher: String,
    pub student_count: usize,
    pub students: Vec<StudentResponse>,
}

impl SchoolClassResponse {
    /// Build the response from a class and its current members. Members
    /// carry the class name denormalized, mirroring the student endpoints.
    pub fn from_entity(class: SchoolClass, members: Vec<Student>) -> Self {
        let students: Vec<StudentResponse> = members
            .into_iter()
            .map(|s| StudentResponse::from_entity(s, Some(class.name.clone())))
            .collect();

        Self {
            id: class.id,
            name: class.name,
            leading_teacher: class.leading_teacher,
            student_count: students.len(),
            students,
        }
    }
}
