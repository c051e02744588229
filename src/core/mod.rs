pub mod constants;
pub mod error;
pub mod patch;
pub mod result;
pub mod validation;

pub use error::{AppError, Result};
pub use patch::PatchField;
pub use result::ServiceResult;
