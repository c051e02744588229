use std::collections::HashMap;
use std::sync::Arc;

use crate::core::constants::messages;
use crate::core::patch::PatchField;
use crate::core::validation::is_blank;
use crate::core::{Result, ServiceResult};
use crate::modules::classes::models::{
    CreateSchoolClassRequest, PatchSchoolClassRequest, SchoolClassResponse,
    UpdateSchoolClassRequest,
};
use crate::modules::classes::repositories::{
    EnrollmentOutcome, SchoolClassRepository, WithdrawalOutcome,
};
use crate::modules::classes::services::enrollment;
use crate::modules::students::models::Student;
use crate::modules::students::repositories::StudentRepository;

/// Service for school class business logic.
///
/// Member lists and counts are always derived from the student table at
/// read time; the class record itself never carries membership.
pub struct SchoolClassService {
    classes: Arc<dyn SchoolClassRepository>,
    students: Arc<dyn StudentRepository>,
}

impl SchoolClassService {
    pub fn new(
        classes: Arc<dyn SchoolClassRepository>,
        students: Arc<dyn StudentRepository>,
    ) -> Self {
        Self { classes, students }
    }

    /// All classes with their member lists.
    pub async fn list_classes(&self) -> Result<Vec<SchoolClassResponse>> {
        let classes = self.classes.find_all().await?;
        let mut members_by_class: HashMap<i32, Vec<Student>> = HashMap::new();
        for student in self.students.find_all().await? {
            if let Some(class_id) = student.school_class_id {
                members_by_class.entry(class_id).or_default().push(student);
            }
        }

        Ok(classes
            .into_iter()
            .map(|class| {
                let members = members_by_class.remove(&class.id).unwrap_or_default();
                SchoolClassResponse::from_entity(class, members)
            })
            .collect())
    }

    pub async fn get_class(&self, id: i32) -> Result<ServiceResult<SchoolClassResponse>> {
        let Some(class) = self.classes.find_by_id(id).await? else {
            return Ok(ServiceResult::NotFound(messages::class_not_found(id)));
        };

        let members = self.students.find_by_class(id).await?;
        Ok(ServiceResult::Ok(SchoolClassResponse::from_entity(
            class, members,
        )))
    }

    pub async fn create_class(
        &self,
        request: CreateSchoolClassRequest,
    ) -> Result<ServiceResult<SchoolClassResponse>> {
        if is_blank(&request.name) || is_blank(&request.leading_teacher) {
            return Ok(ServiceResult::BadRequest(format!(
                "{} {}",
                messages::CLASS_NAME_REQUIRED,
                messages::CLASS_LEADING_TEACHER_REQUIRED
            )));
        }

        let class = self
            .classes
            .insert(request.name, request.leading_teacher)
            .await?;

        Ok(ServiceResult::Created(SchoolClassResponse::from_entity(
            class,
            Vec::new(),
        )))
    }

    /// Full replace; the member list and count are recomputed afterwards.
    pub async fn update_class(
        &self,
        id: i32,
        request: UpdateSchoolClassRequest,
    ) -> Result<ServiceResult<SchoolClassResponse>> {
        let Some(mut class) = self.classes.find_by_id(id).await? else {
            return Ok(ServiceResult::NotFound(messages::class_not_found(id)));
        };

        if is_blank(&request.name) || is_blank(&request.leading_teacher) {
            return Ok(ServiceResult::BadRequest(format!(
                "{} {}",
                messages::CLASS_NAME_REQUIRED,
                messages::CLASS_LEADING_TEACHER_REQUIRED
            )));
        }

        class.name = request.name;
        class.leading_teacher = request.leading_teacher;

        match self.classes.update(class).await? {
            Some(updated) => {
                let members = self.students.find_by_class(id).await?;
                Ok(ServiceResult::Ok(SchoolClassResponse::from_entity(
                    updated, members,
                )))
            }
            None => Ok(ServiceResult::NotFound(messages::class_not_found(id))),
        }
    }

    /// Apply only the fields present in the request. Both fields are
    /// required on the entity, so explicit `null` and blank values are
    /// rejected alike.
    pub async fn patch_class(
        &self,
        id: i32,
        patch: PatchSchoolClassRequest,
    ) -> Result<ServiceResult<SchoolClassResponse>> {
        let Some(mut class) = self.classes.find_by_id(id).await? else {
            return Ok(ServiceResult::NotFound(messages::class_not_found(id)));
        };

        match patch.name {
            PatchField::Absent => {}
            PatchField::Null => {
                return Ok(ServiceResult::BadRequest(
                    messages::CLASS_NAME_REQUIRED.to_string(),
                ))
            }
            PatchField::Value(name) => {
                if is_blank(&name) {
                    return Ok(ServiceResult::BadRequest(
                        messages::CLASS_NAME_REQUIRED.to_string(),
                    ));
                }
                class.name = name;
            }
        }

        match patch.leading_teacher {
            PatchField::Absent => {}
            PatchField::Null => {
                return Ok(ServiceResult::BadRequest(
                    messages::CLASS_LEADING_TEACHER_REQUIRED.to_string(),
                ))
            }
            PatchField::Value(leading_teacher) => {
                if is_blank(&leading_teacher) {
                    return Ok(ServiceResult::BadRequest(
                        messages::CLASS_LEADING_TEACHER_REQUIRED.to_string(),
                    ));
                }
                class.leading_teacher = leading_teacher;
            }
        }

        match self.classes.update(class).await? {
            Some(updated) => {
                let members = self.students.find_by_class(id).await?;
                Ok(ServiceResult::Ok(SchoolClassResponse::from_entity(
                    updated, members,
                )))
            }
            None => Ok(ServiceResult::NotFound(messages::class_not_found(id))),
        }
    }

    /// Delete a class; every member is unassigned in the same critical
    /// section, so callers never observe a partially-unassigned state.
    pub async fn delete_class(&self, id: i32) -> Result<ServiceResult<String>> {
        if self.classes.delete_and_unassign(id).await? {
            Ok(ServiceResult::Ok(messages::class_deleted(id)))
        } else {
            Ok(ServiceResult::NotFound(messages::class_not_found(id)))
        }
    }

    /// Legacy class-centric assignment. Same checks, same outcomes as the
    /// student-centric PATCH path; both delegate to the repository's
    /// enroll operation.
    pub async fn add_student_to_class(
        &self,
        class_id: i32,
        student_id: &str,
    ) -> Result<ServiceResult<String>> {
        match self.classes.enroll(class_id, student_id).await? {
            EnrollmentOutcome::Enrolled { student, class } => Ok(ServiceResult::Ok(
                messages::student_added_to_class(&student.name, &student.surname, &class.name),
            )),
            EnrollmentOutcome::Rejected(rejection) => Ok(enrollment::rejected(rejection)),
        }
    }

    /// Legacy class-centric unassignment.
    pub async fn remove_student_from_class(
        &self,
        class_id: i32,
        student_id: &str,
    ) -> Result<ServiceResult<String>> {
        match self.classes.withdraw(class_id, student_id).await? {
            WithdrawalOutcome::Withdrawn { student, class } => Ok(ServiceResult::Ok(
                messages::student_removed_from_class(&student.name, &student.surname, &class.name),
            )),
            WithdrawalOutcome::Rejected(rejection) => {
                Ok(enrollment::withdrawal_rejected(rejection))
            }
        }
    }
}
