pub mod student_repository;

pub use student_repository::{InMemoryStudentRepository, StudentInsert, StudentRepository};
