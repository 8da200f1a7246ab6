//! Atomic apply boundary
//!
//! `apply()` is the single entry point for store mutations:
//! - **All-or-nothing**: on `Err` the returned state is dropped; callers
//!   that need the previous state keep their own copy (the engine clones
//!   before applying)
//! - **No panics**: invalid input returns typed errors
//!
//! ```
//! use tutoria_core::{apply, Command, Store};
//!
//! let (state, applied) = apply(Store::new(), Command::EnsureDefaultData).unwrap();
//! assert_eq!(state.users().len(), 13);
//! assert!(applied.created_id.is_none());
//! ```

use crate::commands::Command;
use crate::errors::Result;
use crate::ops::{
    assignment_ops, file_ops, notification_ops, session_ops, system_ops, topic_ops, user_ops,
    Store,
};

/// Outcome of a successful command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Applied {
    /// ID of the record the command created, if it created one
    pub created_id: Option<String>,
    /// Records affected by bulk commands (mark-all-read)
    pub affected: usize,
}

impl Applied {
    fn created(id: String) -> Self {
        Self {
            created_id: Some(id),
            affected: 1,
        }
    }
}

/// Apply a command to a store, returning the new state
///
/// # Errors
///
/// Returns the domain error of the failing operation; see `TutoriaError`.
pub fn apply(mut state: Store, cmd: Command) -> Result<(Store, Applied)> {
    let applied = match cmd {
        Command::UserCreate { user } => Applied::created(user_ops::create_user(&mut state, user)?),
        Command::UserSave { user } => {
            user_ops::save_user(&mut state, user);
            Applied::default()
        }
        Command::UserUpdate { email, update } => {
            user_ops::update_user(&mut state, &email, update)?;
            Applied::default()
        }
        Command::UserDelete { email } => {
            user_ops::delete_user(&mut state, &email)?;
            Applied::default()
        }
        Command::PasswordRecover {
            email,
            answer,
            new_password,
        } => {
            user_ops::recover_password(&mut state, &email, &answer, new_password.expose())?;
            Applied::default()
        }

        Command::SessionCreate { session } => {
            Applied::created(session_ops::create_session(&mut state, session)?)
        }
        Command::SessionUpdate { session_id, update } => {
            session_ops::update_session(&mut state, &session_id, update)?;
            Applied::default()
        }
        Command::SessionAccept {
            session_id,
            observations,
        } => {
            session_ops::accept_session(&mut state, &session_id, observations)?;
            Applied::default()
        }
        Command::SessionReject { session_id, reason } => {
            session_ops::reject_session(&mut state, &session_id, &reason)?;
            Applied::default()
        }
        Command::SessionComplete {
            session_id,
            grade,
            observations,
        } => {
            session_ops::complete_session(&mut state, &session_id, &grade, observations)?;
            Applied::default()
        }
        Command::SessionDelete { session_id } => {
            session_ops::delete_session(&mut state, &session_id)?;
            Applied::default()
        }

        Command::TopicCreate { topic } => {
            Applied::created(topic_ops::create_topic(&mut state, topic)?)
        }
        Command::TopicUpdate { topic_id, update } => {
            topic_ops::update_topic(&mut state, &topic_id, update)?;
            Applied::default()
        }
        Command::TopicReview { topic_id, review } => {
            topic_ops::review_topic(&mut state, &topic_id, review)?;
            Applied::default()
        }
        Command::TopicDelete { topic_id } => {
            topic_ops::delete_topic(&mut state, &topic_id)?;
            Applied::default()
        }

        Command::FileCreate { file } => Applied::created(file_ops::create_file(&mut state, file)?),
        Command::FileDelete { file_id } => {
            file_ops::delete_file(&mut state, &file_id)?;
            Applied::default()
        }

        Command::AssignTutor {
            student_email,
            tutor_email,
        } => Applied::created(assignment_ops::assign_tutor_to_student(
            &mut state,
            &student_email,
            &tutor_email,
        )?),
        Command::AssignmentRemove { student_email } => {
            assignment_ops::remove_assignment(&mut state, &student_email)?;
            Applied::default()
        }
        Command::AssignmentDelete { assignment_id } => {
            assignment_ops::delete_assignment(&mut state, &assignment_id)?;
            Applied::default()
        }

        Command::NotificationCreate {
            user_email,
            message,
            payload,
        } => Applied::created(notification_ops::create_notification(
            &mut state,
            &user_email,
            message,
            payload,
        )),
        Command::TutorMessage {
            tutor_email,
            student_email,
            message,
        } => Applied::created(notification_ops::send_tutor_message(
            &mut state,
            &tutor_email,
            &student_email,
            &message,
        )?),
        Command::NotificationMarkRead { notification_id } => {
            notification_ops::mark_as_read(&mut state, &notification_id);
            Applied::default()
        }
        Command::NotificationMarkAllRead { user_email } => Applied {
            created_id: None,
            affected: notification_ops::mark_all_as_read(&mut state, &user_email),
        },

        Command::SystemReset => {
            system_ops::reset_system(&mut state);
            Applied::default()
        }
        Command::EnsureDefaultData => Applied {
            created_id: None,
            affected: usize::from(system_ops::ensure_default_data(&mut state)),
        },
        Command::ForceRecreateDefaultData => {
            system_ops::force_recreate_default_data(&mut state);
            Applied::default()
        }
    };

    Ok((state, applied))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::errors::TutoriaError;
    use crate::ops::Slot;

    fn seeded() -> Store {
        apply(Store::new(), Command::EnsureDefaultData).unwrap().0
    }

    #[test]
    fn test_create_reports_id() {
        let (state, applied) = apply(
            seeded(),
            Command::AssignTutor {
                student_email: "carlos.mendoza@live.uleam.edu.ec".to_string(),
                tutor_email: "laura.morales@uleam.edu.ec".to_string(),
            },
        )
        .unwrap();

        let id = applied.created_id.unwrap();
        assert!(state.assignments().iter().any(|a| a.id == id));
    }

    #[test]
    fn test_failed_command_leaves_caller_copy_intact() {
        let before = seeded();
        let pending = before
            .sessions()
            .iter()
            .find(|s| s.student_email == "juan.perez@live.uleam.edu.ec")
            .unwrap()
            .id
            .clone();

        let result = apply(
            before.clone(),
            Command::SessionComplete {
                session_id: pending.clone(),
                grade: "Bueno".to_string(),
                observations: None,
            },
        );

        assert!(matches!(
            result,
            Err(TutoriaError::IllegalSessionTransition { .. })
        ));
        assert_eq!(before.sessions().len(), 4);
        assert_eq!(before.notifications().len(), 4);
    }

    #[test]
    fn test_ensure_default_data_reports_whether_it_seeded() {
        let (state, first) = apply(Store::new(), Command::EnsureDefaultData).unwrap();
        let (_, second) = apply(state, Command::EnsureDefaultData).unwrap();
        assert_eq!(first.affected, 1);
        assert_eq!(second.affected, 0);
    }

    #[test]
    fn test_mark_all_read_reports_count() {
        let (_, applied) = apply(
            seeded(),
            Command::NotificationMarkAllRead {
                user_email: "maria.gonzalez@live.uleam.edu.ec".to_string(),
            },
        )
        .unwrap();
        assert_eq!(applied.affected, 1);
    }

    #[test]
    fn test_reset_dirties_every_slot() {
        let mut state = seeded();
        state.take_dirty();
        let (state, _) = apply(state, Command::SystemReset).unwrap();
        assert!(state.is_empty());
        assert_eq!(state.dirty_slots().count(), Slot::ALL.len());
    }

    #[test]
    fn test_command_names_are_unique() {
        let names = [
            Command::SystemReset.name(),
            Command::EnsureDefaultData.name(),
            Command::ForceRecreateDefaultData.name(),
            Command::UserDelete { email: String::new() }.name(),
            Command::SessionDelete { session_id: String::new() }.name(),
        ];
        let mut deduped = names.to_vec();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
    }
}
