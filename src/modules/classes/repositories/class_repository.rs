// School class persistence operations over the shared in-memory store.
//
// Enrollment, withdrawal, and class deletion are compound operations:
// each runs inside a single write-lock critical section so the capacity
// and membership invariants cannot be violated by interleaved requests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::constants::MAX_STUDENTS_PER_CLASS;
use crate::core::Result;
use crate::modules::classes::models::SchoolClass;
use crate::modules::students::models::Student;
use crate::store::SchoolStore;

/// Outcome of [`SchoolClassRepository::enroll`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentOutcome {
    Enrolled { student: Student, class: SchoolClass },
    Rejected(EnrollmentRejection),
}

/// Why an enrollment was refused. Carries the details the services need
/// to phrase the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentRejection {
    ClassNotFound(i32),
    StudentNotFound(String),
    AlreadyEnrolled { name: String, surname: String },
    ClassFull { class_name: String },
}

/// Outcome of [`SchoolClassRepository::withdraw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WithdrawalOutcome {
    Withdrawn { student: Student, class: SchoolClass },
    Rejected(WithdrawalRejection),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WithdrawalRejection {
    ClassNotFound(i32),
    StudentNotFound(String),
    NotEnrolled { name: String, surname: String },
}

/// Data access contract for school class records.
#[async_trait]
pub trait SchoolClassRepository: Send + Sync {
    /// All classes, ordered by id.
    async fn find_all(&self) -> Result<Vec<SchoolClass>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<SchoolClass>>;

    /// Insert a new class; the store assigns the id.
    async fn insert(&self, name: String, leading_teacher: String) -> Result<SchoolClass>;

    /// Overwrite an existing class record. Returns `None` when no record
    /// with that id exists.
    async fn update(&self, class: SchoolClass) -> Result<Option<SchoolClass>>;

    /// Delete a class and unassign all of its members in one critical
    /// section. Returns `false` when no record with that id existed.
    async fn delete_and_unassign(&self, id: i32) -> Result<bool>;

    /// Assign a student to a class, enforcing the capacity and
    /// duplicate-membership rules. Checks run in order: class exists,
    /// student exists, not already enrolled, class below capacity.
    async fn enroll(&self, class_id: i32, student_id: &str) -> Result<EnrollmentOutcome>;

    /// Remove a student from a class, verifying membership.
    async fn withdraw(&self, class_id: i32, student_id: &str) -> Result<WithdrawalOutcome>;
}

/// Store-backed repository implementation.
pub struct InMemorySchoolClassRepository {
    store: Arc<SchoolStore>,
}

impl InMemorySchoolClassRepository {
    pub fn new(store: Arc<SchoolStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SchoolClassRepository for InMemorySchoolClassRepository {
    async fn find_all(&self) -> Result<Vec<SchoolClass>> {
        Ok(self.store.read()?.classes.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<SchoolClass>> {
        Ok(self.store.read()?.classes.get(&id).cloned())
    }

    async fn insert(&self, name: String, leading_teacher: String) -> Result<SchoolClass> {
        let mut data = self.store.write()?;
        let class = SchoolClass {
            id: data.allocate_class_id(),
            name,
            leading_teacher,
        };
        data.classes.insert(class.id, class.clone());
        Ok(class)
    }

    async fn update(&self, class: SchoolClass) -> Result<Option<SchoolClass>> {
        let mut data = self.store.write()?;
        if !data.classes.contains_key(&class.id) {
            return Ok(None);
        }
        data.classes.insert(class.id, class.clone());
        Ok(Some(class))
    }

    async fn delete_and_unassign(&self, id: i32) -> Result<bool> {
        let mut data = self.store.write()?;
        if data.classes.remove(&id).is_none() {
            return Ok(false);
        }
        for student in data.students.values_mut() {
            if student.school_class_id == Some(id) {
                student.school_class_id = None;
            }
        }
        Ok(true)
    }

    async fn enroll(&self, class_id: i32, student_id: &str) -> Result<EnrollmentOutcome> {
        let mut data = self.store.write()?;

        let class = match data.classes.get(&class_id) {
            Some(class) => class.clone(),
            None => {
                return Ok(EnrollmentOutcome::Rejected(
                    EnrollmentRejection::ClassNotFound(class_id),
                ))
            }
        };

        let current = match data.students.get(student_id) {
            Some(student) => student.clone(),
            None => {
                return Ok(EnrollmentOutcome::Rejected(
                    EnrollmentRejection::StudentNotFound(student_id.to_string()),
                ))
            }
        };

        if current.school_class_id == Some(class_id) {
            return Ok(EnrollmentOutcome::Rejected(
                EnrollmentRejection::AlreadyEnrolled {
                    name: current.name,
                    surname: current.surname,
                },
            ));
        }

        if data.members_of(class_id).count() >= MAX_STUDENTS_PER_CLASS {
            return Ok(EnrollmentOutcome::Rejected(EnrollmentRejection::ClassFull {
                class_name: class.name,
            }));
        }

        let mut enrolled = current;
        enrolled.school_class_id = Some(class_id);
        data.students
            .insert(enrolled.student_id.clone(), enrolled.clone());

        Ok(EnrollmentOutcome::Enrolled {
            student: enrolled,
            class,
        })
    }

    async fn withdraw(&self, class_id: i32, student_id: &str) -> Result<WithdrawalOutcome> {
        let mut data = self.store.write()?;

        let class = match data.classes.get(&class_id) {
            Some(class) => class.clone(),
            None => {
                return Ok(WithdrawalOutcome::Rejected(
                    WithdrawalRejection::ClassNotFound(class_id),
                ))
            }
        };

        let current = match data.students.get(student_id) {
            Some(student) => student.clone(),
            None => {
                return Ok(WithdrawalOutcome::Rejected(
                    WithdrawalRejection::StudentNotFound(student_id.to_string()),
                ))
            }
        };

        if current.school_class_id != Some(class_id) {
            return Ok(WithdrawalOutcome::Rejected(WithdrawalRejection::NotEnrolled {
                name: current.name,
                surname: current.surname,
            }));
        }

        let mut withdrawn = current;
        withdrawn.school_class_id = None;
        data.students
            .insert(withdrawn.student_id.clone(), withdrawn.clone());

        Ok(WithdrawalOutcome::Withdrawn {
            student: withdrawn,
            class,
        })
    }
}
