pub mod class_repository;

pub use class_repository::{
    EnrollmentOutcome, EnrollmentRejection, InMemorySchoolClassRepository, SchoolClassRepository,
    WithdrawalOutcome, WithdrawalRejection,
};
