pub mod school_class;

pub use school_class::{
    AddStudentToClassRequest, CreateSchoolClassRequest, PatchSchoolClassRequest, SchoolClass,
    SchoolClassResponse, UpdateSchoolClassRequest,
};
