use std::collections::HashMap;
use std::sync::Arc;

use crate::core::constants::messages;
use crate::core::patch::PatchField;
use crate::core::validation::is_blank;
use crate::core::{Result, ServiceResult};
use crate::modules::classes::repositories::{EnrollmentOutcome, SchoolClassRepository};
use crate::modules::classes::services::enrollment;
use crate::modules::students::models::{
    CreateStudentRequest, PatchStudentRequest, Student, StudentResponse, UpdateStudentRequest,
};
use crate::modules::students::repositories::{StudentInsert, StudentRepository};

/// Service for student business logic.
///
/// Owns validation and the create/update/patch/delete workflows; the
/// class repository is needed for the assignment path and for
/// denormalizing class names into responses.
pub struct StudentService {
    students: Arc<dyn StudentRepository>,
    classes: Arc<dyn SchoolClassRepository>,
}

impl StudentService {
    pub fn new(students: Arc<dyn StudentRepository>, classes: Arc<dyn SchoolClassRepository>) -> Self {
        Self { students, classes }
    }

    /// All students, with class names resolved in one pass.
    pub async fn list_students(&self) -> Result<Vec<StudentResponse>> {
        let students = self.students.find_all().await?;
        let class_names: HashMap<i32, String> = self
            .classes
            .find_all()
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        Ok(students
            .into_iter()
            .map(|s| {
                let class_name = s.school_class_id.and_then(|id| class_names.get(&id).cloned());
                StudentResponse::from_entity(s, class_name)
            })
            .collect())
    }

    pub async fn get_student(&self, student_id: &str) -> Result<ServiceResult<StudentResponse>> {
        match self.students.find_by_id(student_id).await? {
            Some(student) => Ok(ServiceResult::Ok(self.to_response(student).await?)),
            None => Ok(ServiceResult::NotFound(messages::student_not_found(
                student_id,
            ))),
        }
    }

    pub async fn create_student(
        &self,
        request: CreateStudentRequest,
    ) -> Result<ServiceResult<StudentResponse>> {
        if is_blank(&request.student_id) || is_blank(&request.name) || is_blank(&request.surname) {
            return Ok(ServiceResult::BadRequest(format!(
                "{} {} {}",
                messages::STUDENT_ID_REQUIRED,
                messages::STUDENT_NAME_REQUIRED,
                messages::STUDENT_SURNAME_REQUIRED
            )));
        }

        let student = request.into_entity();
        let student_id = student.student_id.clone();

        match self.students.insert(student.clone()).await? {
            StudentInsert::DuplicateId => Ok(ServiceResult::Conflict(
                messages::student_already_exists(&student_id),
            )),
            StudentInsert::Inserted => Ok(ServiceResult::Created(self.to_response(student).await?)),
        }
    }

    /// Full replace of the mutable fields; omitted optional fields are
    /// cleared. Class assignment is not touched here.
    pub async fn update_student(
        &self,
        student_id: &str,
        request: UpdateStudentRequest,
    ) -> Result<ServiceResult<StudentResponse>> {
        let Some(mut student) = self.students.find_by_id(student_id).await? else {
            return Ok(ServiceResult::NotFound(messages::student_not_found(
                student_id,
            )));
        };

        if is_blank(&request.name) || is_blank(&request.surname) {
            return Ok(ServiceResult::BadRequest(format!(
                "{} {}",
                messages::STUDENT_NAME_REQUIRED,
                messages::STUDENT_SURNAME_REQUIRED
            )));
        }

        student.name = request.name;
        student.surname = request.surname;
        student.date_of_birth = request.date_of_birth;
        student.city = request.city;
        student.street = request.street;
        student.postal_code = request.postal_code;

        match self.students.update(student).await? {
            Some(updated) => Ok(ServiceResult::Ok(self.to_response(updated).await?)),
            None => Ok(ServiceResult::NotFound(messages::student_not_found(
                student_id,
            ))),
        }
    }

    /// Apply only the fields present in the request. Required fields
    /// reject explicit `null` and blank values; optional fields accept
    /// `null` to clear. A `school_class_id` of `null`, zero, or a
    /// negative value unassigns; a positive value goes through the shared
    /// enrollment routine. Nothing is persisted when validation fails.
    pub async fn patch_student(
        &self,
        student_id: &str,
        patch: PatchStudentRequest,
    ) -> Result<ServiceResult<StudentResponse>> {
        let Some(mut student) = self.students.find_by_id(student_id).await? else {
            return Ok(ServiceResult::NotFound(messages::student_not_found(
                student_id,
            )));
        };

        match patch.name {
            PatchField::Absent => {}
            PatchField::Null => {
                return Ok(ServiceResult::BadRequest(
                    messages::STUDENT_NAME_REQUIRED.to_string(),
                ))
            }
            PatchField::Value(name) => {
                if is_blank(&name) {
                    return Ok(ServiceResult::BadRequest(
                        messages::STUDENT_NAME_REQUIRED.to_string(),
                    ));
                }
                student.name = name;
            }
        }

        match patch.surname {
            PatchField::Absent => {}
            PatchField::Null => {
                return Ok(ServiceResult::BadRequest(
                    messages::STUDENT_SURNAME_REQUIRED.to_string(),
                ))
            }
            PatchField::Value(surname) => {
                if is_blank(&surname) {
                    return Ok(ServiceResult::BadRequest(
                        messages::STUDENT_SURNAME_REQUIRED.to_string(),
                    ));
                }
                student.surname = surname;
            }
        }

        match patch.date_of_birth {
            PatchField::Absent => {}
            PatchField::Null => {
                return Ok(ServiceResult::BadRequest(
                    messages::STUDENT_DATE_OF_BIRTH_REQUIRED.to_string(),
                ))
            }
            PatchField::Value(date_of_birth) => student.date_of_birth = date_of_birth,
        }

        match patch.city {
            PatchField::Absent => {}
            PatchField::Null => student.city = None,
            PatchField::Value(city) => student.city = Some(city),
        }

        match patch.street {
            PatchField::Absent => {}
            PatchField::Null => student.street = None,
            PatchField::Value(street) => student.street = Some(street),
        }

        match patch.postal_code {
            PatchField::Absent => {}
            PatchField::Null => student.postal_code = None,
            PatchField::Value(postal_code) => student.postal_code = Some(postal_code),
        }

        match patch.school_class_id {
            PatchField::Absent => {}
            PatchField::Null => student.school_class_id = None,
            PatchField::Value(class_id) if class_id <= 0 => student.school_class_id = None,
            PatchField::Value(class_id) => {
                match self.classes.enroll(class_id, student_id).await? {
                    EnrollmentOutcome::Rejected(rejection) => {
                        return Ok(enrollment::rejected(rejection))
                    }
                    EnrollmentOutcome::Enrolled {
                        student: enrolled, ..
                    } => {
                        student.school_class_id = enrolled.school_class_id;
                    }
                }
            }
        }

        match self.students.update(student).await? {
            Some(updated) => Ok(ServiceResult::Ok(self.to_response(updated).await?)),
            None => Ok(ServiceResult::NotFound(messages::student_not_found(
                student_id,
            ))),
        }
    }

    pub async fn delete_student(&self, student_id: &str) -> Result<ServiceResult<String>> {
        if self.students.delete(student_id).await? {
            Ok(ServiceResult::Ok(messages::student_deleted(student_id)))
        } else {
            Ok(ServiceResult::NotFound(messages::student_not_found(
                student_id,
            )))
        }
    }

    async fn to_response(&self, student: Student) -> Result<StudentResponse> {
        let class_name = match student.school_class_id {
            Some(class_id) => self.classes.find_by_id(class_id).await?.map(|c| c.name),
            None => None,
        };
        Ok(StudentResponse::from_entity(student, class_name))
    }
}
