// Student persistence operations over the shared in-memory store.
//
// The duplicate-id check runs inside the same critical section as the
// insert, so two concurrent creates with the same id cannot both succeed.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::Result;
use crate::modules::students::models::Student;
use crate::store::SchoolStore;

/// Outcome of [`StudentRepository::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentInsert {
    Inserted,
    DuplicateId,
}

/// Data access contract for student records.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// All students, ordered by student id.
    async fn find_all(&self) -> Result<Vec<Student>>;

    async fn find_by_id(&self, student_id: &str) -> Result<Option<Student>>;

    /// Students currently assigned to the given class.
    async fn find_by_class(&self, class_id: i32) -> Result<Vec<Student>>;

    /// Insert a new student unless the id is already taken.
    async fn insert(&self, student: Student) -> Result<StudentInsert>;

    /// Overwrite an existing student record. Returns `None` when no
    /// record with that id exists.
    async fn update(&self, student: Student) -> Result<Option<Student>>;

    /// Returns `false` when no record with that id existed.
    async fn delete(&self, student_id: &str) -> Result<bool>;
}

/// Store-backed repository implementation.
pub struct InMemoryStudentRepository {
    store: Arc<SchoolStore>,
}

impl InMemoryStudentRepository {
    pub fn new(store: Arc<SchoolStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>> {
        let data = self.store.read()?;
        let mut students: Vec<Student> = data.students.values().cloned().collect();
        students.sort_by(|a, b| a.student_id.cmp(&b.student_id));
        Ok(students)
    }

    async fn find_by_id(&self, student_id: &str) -> Result<Option<Student>> {
        Ok(self.store.read()?.students.get(student_id).cloned())
    }

    async fn find_by_class(&self, class_id: i32) -> Result<Vec<Student>> {
        let data = self.store.read()?;
        let mut members: Vec<Student> = data.members_of(class_id).cloned().collect();
        members.sort_by(|a, b| a.student_id.cmp(&b.student_id));
        Ok(members)
    }

    async fn insert(&self, student: Student) -> Result<StudentInsert> {
        let mut data = self.store.write()?;
        if data.students.contains_key(&student.student_id) {
            return Ok(StudentInsert::DuplicateId);
        }
        data.students.insert(student.student_id.clone(), student);
        Ok(StudentInsert::Inserted)
    }

    async fn update(&self, student: Student) -> Result<Option<Student>> {
        let mut data = self.store.write()?;
        if !data.students.contains_key(&student.student_id) {
            return Ok(None);
        }
        data.students
            .insert(student.student_id.clone(), student.clone());
        Ok(Some(student))
    }

    async fn delete(&self, student_id: &str) -> Result<bool> {
        Ok(self.store.write()?.students.remove(student_id).is_some())
    }
}
