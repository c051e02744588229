// Shared mapping from enrollment/withdrawal rejections to service
// outcomes. Both the student-centric PATCH path and the class-centric
// legacy routes go through these, so the two API surfaces cannot drift.

use crate::core::constants::messages;
use crate::core::ServiceResult;
use crate::modules::classes::repositories::{EnrollmentRejection, WithdrawalRejection};

pub(crate) fn rejected<T>(rejection: EnrollmentRejection) -> ServiceResult<T> {
    match rejection {
        EnrollmentRejection::ClassNotFound(class_id) => {
            ServiceResult::NotFound(messages::class_not_found(class_id))
        }
        EnrollmentRejection::StudentNotFound(student_id) => {
            ServiceResult::NotFound(messages::student_not_found(&student_id))
        }
        EnrollmentRejection::AlreadyEnrolled { name, surname } => {
            ServiceResult::BadRequest(messages::student_already_in_class(&name, &surname))
        }
        EnrollmentRejection::ClassFull { class_name } => {
            ServiceResult::BadRequest(messages::class_full(&class_name))
        }
    }
}

pub(crate) fn withdrawal_rejected<T>(rejection: WithdrawalRejection) -> ServiceResult<T> {
    match rejection {
        WithdrawalRejection::ClassNotFound(class_id) => {
            ServiceResult::NotFound(messages::class_not_found(class_id))
        }
        WithdrawalRejection::StudentNotFound(student_id) => {
            ServiceResult::NotFound(messages::student_not_found(&student_id))
        }
        WithdrawalRejection::NotEnrolled { name, surname } => {
            ServiceResult::BadRequest(messages::student_not_in_class(&name, &surname))
        }
    }
}
