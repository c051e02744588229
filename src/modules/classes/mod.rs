// School classes module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{SchoolClass, SchoolClassResponse};
pub use repositories::{InMemorySchoolClassRepository, SchoolClassRepository};
pub use services::SchoolClassService;
