use crate::model::User;
use crate::ops::Store;

use super::entity_queries::{assignment_by_student, assignments_by_tutor};

/// Resolve the tutor currently assigned to a student
///
/// student email → student user → assignment → tutor user. `None` if any hop
/// fails, including a student that is not a registered user.
pub fn assigned_tutor<'a>(store: &'a Store, student_email: &str) -> Option<&'a User> {
    let student = store.find_user(student_email)?;
    let assignment = assignment_by_student(store, &student.email)?;
    store.find_user(&assignment.tutor_email)
}

/// All students currently assigned to a tutor
///
/// Assignments whose student no longer resolves are skipped.
pub fn assigned_students<'a>(store: &'a Store, tutor_email: &str) -> Vec<&'a User> {
    let Some(tutor) = store.find_user(tutor_email) else {
        return Vec::new();
    };
    assignments_by_tutor(store, &tutor.email)
        .into_iter()
        .filter_map(|a| store.find_user(&a.student_email))
        .collect()
}
