// Students module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Student, StudentResponse};
pub use repositories::{InMemoryStudentRepository, StudentRepository};
pub use services::StudentService;
