use chrono::Utc;

use super::notification_ops::create_notification;
use super::store::Store;
use crate::errors::{Result, TutoriaError};
use crate::model::{
    generate_id, NewSession, NotificationPayload, SessionStatus, SessionUpdate, TutoringSession,
};
use crate::rules::{check_session_transition, require_non_blank};

/// Request a tutoring session
///
/// The session starts as `Pending` and the tutor receives exactly one
/// `NewSessionRequest` notification.
///
/// Creation never fails; the emails are trimmed, everything else is
/// stored as given.
///
/// # Returns
/// The ID of the new session
pub fn create_session(store: &mut Store, new_session: NewSession) -> Result<String> {
    let subject = new_session.subject;
    let student_email = new_session.student_email.trim().to_string();
    let tutor_email = new_session.tutor_email.trim().to_string();

    let id = generate_id();
    let payload = NotificationPayload::NewSessionRequest {
        session_id: id.clone(),
        subject: subject.clone(),
    };
    let message = format!("Nueva solicitud de tutoría: {}", subject);

    store.insert_session(TutoringSession {
        id: id.clone(),
        student_email,
        tutor_email: tutor_email.clone(),
        date: new_session.date,
        time: new_session.time,
        subject,
        description: new_session.description,
        status: SessionStatus::Pending,
        observations: None,
        grade: None,
        rejection_reason: None,
        created_at: Utc::now(),
    });
    create_notification(store, &tutor_email, message, payload);

    Ok(id)
}

/// Reschedule or re-describe a session
///
/// Unknown ids are a no-op.
///
/// # Errors
/// * `SessionTerminal` - If the session is rejected or completed
pub fn update_session(store: &mut Store, session_id: &str, update: SessionUpdate) -> Result<()> {
    let Some(current) = find(store, session_id) else {
        return Ok(());
    };
    if current.status.is_terminal() {
        return Err(TutoriaError::SessionTerminal {
            session_id: session_id.to_string(),
            status: current.status,
        });
    }
    if let Some(session) = find_mut(store, session_id) {
        update.apply_to(session);
    }
    Ok(())
}

/// pending → accepted, notifying the student
///
/// # Errors
/// * `IllegalSessionTransition` / `SessionTerminal` - If not pending
pub fn accept_session(
    store: &mut Store,
    session_id: &str,
    observations: Option<String>,
) -> Result<()> {
    let Some(current) = find(store, session_id) else {
        return Ok(());
    };
    check_session_transition(session_id, current.status, SessionStatus::Accepted)?;

    let (student_email, subject) = (current.student_email.clone(), current.subject.clone());
    if let Some(session) = find_mut(store, session_id) {
        session.status = SessionStatus::Accepted;
        if let Some(obs) = observations.as_deref().and_then(require_non_blank) {
            session.observations = Some(obs);
        }
    }

    create_notification(
        store,
        &student_email,
        format!("Tu tutoría '{}' ha sido aceptada", subject),
        NotificationPayload::SessionAccepted {
            session_id: session_id.to_string(),
            subject,
        },
    );
    Ok(())
}

/// pending → rejected with a reason, notifying the student
///
/// # Errors
/// * `IllegalSessionTransition` / `SessionTerminal` - If not pending
/// * `MissingRejectionReason` - If `reason` is blank
pub fn reject_session(store: &mut Store, session_id: &str, reason: &str) -> Result<()> {
    let Some(current) = find(store, session_id) else {
        return Ok(());
    };
    check_session_transition(session_id, current.status, SessionStatus::Rejected)?;
    let reason = require_non_blank(reason).ok_or_else(|| TutoriaError::MissingRejectionReason {
        session_id: session_id.to_string(),
    })?;

    let (student_email, subject) = (current.student_email.clone(), current.subject.clone());
    if let Some(session) = find_mut(store, session_id) {
        session.status = SessionStatus::Rejected;
        session.rejection_reason = Some(reason.clone());
    }

    create_notification(
        store,
        &student_email,
        format!("Tu tutoría '{}' ha sido rechazada. Motivo: {}", subject, reason),
        NotificationPayload::SessionRejected {
            session_id: session_id.to_string(),
            subject,
            reason,
        },
    );
    Ok(())
}

/// accepted → completed with a grade, notifying the student
///
/// # Errors
/// * `IllegalSessionTransition` / `SessionTerminal` - If not accepted
/// * `MissingGrade` - If `grade` is blank
pub fn complete_session(
    store: &mut Store,
    session_id: &str,
    grade: &str,
    observations: Option<String>,
) -> Result<()> {
    let Some(current) = find(store, session_id) else {
        return Ok(());
    };
    check_session_transition(session_id, current.status, SessionStatus::Completed)?;
    let grade = require_non_blank(grade).ok_or_else(|| TutoriaError::MissingGrade {
        session_id: session_id.to_string(),
    })?;

    let (student_email, subject) = (current.student_email.clone(), current.subject.clone());
    if let Some(session) = find_mut(store, session_id) {
        session.status = SessionStatus::Completed;
        session.grade = Some(grade.clone());
        if let Some(obs) = observations.as_deref().and_then(require_non_blank) {
            session.observations = Some(obs);
        }
    }

    create_notification(
        store,
        &student_email,
        format!("Tu tutoría '{}' ha sido completada", subject),
        NotificationPayload::SessionCompleted {
            session_id: session_id.to_string(),
            subject,
            grade,
        },
    );
    Ok(())
}

/// Remove a session; unknown ids are a no-op
pub fn delete_session(store: &mut Store, session_id: &str) -> Result<()> {
    if find(store, session_id).is_some() {
        store.sessions_mut().retain(|s| s.id != session_id);
    }
    Ok(())
}

fn find<'a>(store: &'a Store, session_id: &str) -> Option<&'a TutoringSession> {
    store.sessions().iter().find(|s| s.id == session_id)
}

fn find_mut<'a>(store: &'a mut Store, session_id: &str) -> Option<&'a mut TutoringSession> {
    store.sessions_mut().iter_mut().find(|s| s.id == session_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::Slot;
    use chrono::{NaiveDate, NaiveTime};

    fn request(store: &mut Store) -> String {
        create_session(
            store,
            NewSession {
                student_email: "juan.perez@live.uleam.edu.ec".to_string(),
                tutor_email: "patricia.silva@uleam.edu.ec".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 2, 18).unwrap(),
                time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                subject: "Metodología de Investigación".to_string(),
                description: "Definición de la metodología".to_string(),
            },
        )
        .unwrap()
    }

    fn status(store: &Store, id: &str) -> SessionStatus {
        find(store, id).unwrap().status
    }

    #[test]
    fn test_create_notifies_tutor_once() {
        let mut store = Store::new();
        let id = request(&mut store);

        assert_eq!(status(&store, &id), SessionStatus::Pending);
        assert_eq!(store.notifications().len(), 1);
        let n = &store.notifications()[0];
        assert_eq!(n.user_email, "patricia.silva@uleam.edu.ec");
        assert_eq!(n.message, "Nueva solicitud de tutoría: Metodología de Investigación");
        assert!(!n.read);
    }

    #[test]
    fn test_create_accepts_blank_subject() {
        let mut store = Store::new();
        let id = create_session(
            &mut store,
            NewSession {
                student_email: "a@live.uleam.edu.ec".to_string(),
                tutor_email: "b@uleam.edu.ec".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                subject: "  ".to_string(),
                description: String::new(),
            },
        )
        .unwrap();

        assert_eq!(status(&store, &id), SessionStatus::Pending);
        assert_eq!(store.notifications().len(), 1);
        assert_eq!(store.notifications()[0].user_email, "b@uleam.edu.ec");
    }

    #[test]
    fn test_accept_then_complete() {
        let mut store = Store::new();
        let id = request(&mut store);

        accept_session(&mut store, &id, None).unwrap();
        complete_session(&mut store, &id, "Excelente", Some("Buen avance".to_string())).unwrap();

        let session = find(&store, &id).unwrap();
        assert_eq!(session.status, SessionStatus::Completed);
        assert_eq!(session.grade.as_deref(), Some("Excelente"));
        assert_eq!(session.observations.as_deref(), Some("Buen avance"));

        let kinds: Vec<_> = store.notifications().iter().map(|n| n.kind()).collect();
        assert_eq!(kinds, vec!["NUEVA_SOLICITUD", "TUTORIA_ACEPTADA", "TUTORIA_COMPLETADA"]);
    }

    #[test]
    fn test_reject_requires_reason() {
        let mut store = Store::new();
        let id = request(&mut store);

        let err = reject_session(&mut store, &id, "   ").unwrap_err();
        assert!(matches!(err, TutoriaError::MissingRejectionReason { .. }));
        assert_eq!(status(&store, &id), SessionStatus::Pending);

        reject_session(&mut store, &id, "Horario no disponible").unwrap();
        let session = find(&store, &id).unwrap();
        assert_eq!(session.status, SessionStatus::Rejected);
        assert_eq!(session.rejection_reason.as_deref(), Some("Horario no disponible"));
    }

    #[test]
    fn test_complete_requires_accepted_and_grade() {
        let mut store = Store::new();
        let id = request(&mut store);

        let err = complete_session(&mut store, &id, "Bueno", None).unwrap_err();
        assert!(matches!(err, TutoriaError::IllegalSessionTransition { .. }));

        accept_session(&mut store, &id, None).unwrap();
        let err = complete_session(&mut store, &id, "", None).unwrap_err();
        assert!(matches!(err, TutoriaError::MissingGrade { .. }));
    }

    #[test]
    fn test_terminal_session_refuses_edits() {
        let mut store = Store::new();
        let id = request(&mut store);
        reject_session(&mut store, &id, "Sin cupo").unwrap();

        let err = update_session(&mut store, &id, SessionUpdate::new().subject("Otro")).unwrap_err();
        assert!(matches!(err, TutoriaError::SessionTerminal { .. }));

        let err = accept_session(&mut store, &id, None).unwrap_err();
        assert!(matches!(err, TutoriaError::SessionTerminal { .. }));
    }

    #[test]
    fn test_unknown_session_is_noop() {
        let mut store = Store::new();
        accept_session(&mut store, "missing", None).unwrap();
        reject_session(&mut store, "missing", "").unwrap();
        update_session(&mut store, "missing", SessionUpdate::new().subject("x")).unwrap();
        delete_session(&mut store, "missing").unwrap();

        assert!(store.is_empty());
        assert!(!store.is_dirty(Slot::Sessions));
    }

    #[test]
    fn test_update_reschedules_pending_session() {
        let mut store = Store::new();
        let id = request(&mut store);
        let new_date = NaiveDate::from_ymd_opt(2024, 2, 25).unwrap();

        update_session(&mut store, &id, SessionUpdate::new().date(new_date)).unwrap();

        assert_eq!(find(&store, &id).unwrap().date, new_date);
    }
}
