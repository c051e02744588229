pub mod student;

pub use student::{
    CreateStudentRequest, PatchStudentRequest, Student, StudentResponse, UpdateStudentRequest,
};
