//! Fixed demonstration dataset
//!
//! 4 students, 4 tutors, 3 coordinators, 2 administrators, 3 topics,
//! 3 assignments, 4 sessions, 3 files and 4 notifications. Content is
//! deterministic; user ids are fixed, other ids and all timestamps are taken
//! when seeding runs. Records are inserted directly, so no notification side
//! effects fire beyond the four listed here.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tutoria_core_types::Sensitive;

use crate::model::{
    encode_data_url, generate_id, Assignment, FileRecord, Notification, NotificationPayload,
    Role, SessionStatus, Topic, TutoringSession, User,
};
use crate::ops::Store;

const FAC_ENGINEERING: &str = "Facultad de Ingeniería, Industria y Arquitectura";
const FAC_HEALTH: &str = "Facultad de Ciencias de la Salud";
const FAC_BUSINESS: &str = "Facultad de Ciencias Administrativas, Contables y Comerciales";

const MARIA: &str = "maria.gonzalez@live.uleam.edu.ec";
const JUAN: &str = "juan.perez@live.uleam.edu.ec";
const ANA: &str = "ana.lopez@live.uleam.edu.ec";
const CARLOS_R: &str = "carlos.rodriguez@uleam.edu.ec";
const PATRICIA: &str = "patricia.silva@uleam.edu.ec";
const ROBERTO: &str = "roberto.vasquez@uleam.edu.ec";

/// Minimal one-page PDF used as the inline content of every seeded file
const SAMPLE_PDF: &[u8] = b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n2 0 obj\n<< /Type /Pages /Kids [] /Count 0 >>\nendobj\ntrailer\n<< /Root 1 0 R >>\n%%EOF\n";

struct SeedUser {
    id: &'static str,
    given_names: &'static str,
    surnames: &'static str,
    email: &'static str,
    password: &'static str,
    role: Role,
    faculty: &'static str,
    /// Major for students, specialty for tutors
    field: Option<&'static str>,
    question: &'static str,
    answer: &'static str,
}

#[rustfmt::skip]
const USERS: [SeedUser; 13] = [
    SeedUser { id: "student1", given_names: "María", surnames: "González", email: MARIA, password: "estudiante123", role: Role::Student, faculty: FAC_ENGINEERING, field: Some("Ingeniería en Sistemas"), question: "mascota", answer: "firulais" },
    SeedUser { id: "student2", given_names: "Juan", surnames: "Pérez", email: JUAN, password: "estudiante123", role: Role::Student, faculty: FAC_ENGINEERING, field: Some("Ingeniería Civil"), question: "ciudad", answer: "portoviejo" },
    SeedUser { id: "student3", given_names: "Ana", surnames: "López", email: ANA, password: "estudiante123", role: Role::Student, faculty: FAC_HEALTH, field: Some("Medicina General"), question: "escuela", answer: "san jose" },
    SeedUser { id: "student4", given_names: "Carlos", surnames: "Mendoza", email: "carlos.mendoza@live.uleam.edu.ec", password: "estudiante123", role: Role::Student, faculty: FAC_BUSINESS, field: Some("Administración de Empresas"), question: "mascota", answer: "max" },
    SeedUser { id: "tutor1", given_names: "Dr. Carlos", surnames: "Rodríguez", email: CARLOS_R, password: "tutor123", role: Role::Tutor, faculty: FAC_ENGINEERING, field: Some("Desarrollo de Software"), question: "ciudad", answer: "manta" },
    SeedUser { id: "tutor2", given_names: "Dra. Patricia", surnames: "Silva", email: PATRICIA, password: "tutor123", role: Role::Tutor, faculty: FAC_ENGINEERING, field: Some("Ingeniería Civil"), question: "escuela", answer: "uleam" },
    SeedUser { id: "tutor3", given_names: "Dr. Roberto", surnames: "Vásquez", email: ROBERTO, password: "tutor123", role: Role::Tutor, faculty: FAC_HEALTH, field: Some("Medicina Interna"), question: "mascota", answer: "toby" },
    SeedUser { id: "tutor4", given_names: "Mg. Laura", surnames: "Morales", email: "laura.morales@uleam.edu.ec", password: "tutor123", role: Role::Tutor, faculty: FAC_BUSINESS, field: Some("Gestión Empresarial"), question: "ciudad", answer: "chone" },
    SeedUser { id: "coord1", given_names: "Dra. Ana", surnames: "Martínez", email: "ana.martinez@coordtit.uleam.edu.ec", password: "coordinador123", role: Role::Coordinator, faculty: FAC_ENGINEERING, field: None, question: "escuela", answer: "uleam" },
    SeedUser { id: "coord2", given_names: "Dr. Miguel", surnames: "Torres", email: "miguel.torres@coordtit.uleam.edu.ec", password: "coordinador123", role: Role::Coordinator, faculty: FAC_HEALTH, field: None, question: "mascota", answer: "luna" },
    SeedUser { id: "coord3", given_names: "Mg. Sandra", surnames: "Ramírez", email: "sandra.ramirez@coordtit.uleam.edu.ec", password: "coordinador123", role: Role::Coordinator, faculty: FAC_BUSINESS, field: None, question: "ciudad", answer: "bahia" },
    SeedUser { id: "admin1", given_names: "Admin", surnames: "Sistema", email: "admin@admin.uleam.edu.ec", password: "admin123", role: Role::Administrator, faculty: FAC_BUSINESS, field: None, question: "mascota", answer: "admin" },
    SeedUser { id: "admin2", given_names: "Super", surnames: "Admin", email: "superadmin@admin.uleam.edu.ec", password: "admin123", role: Role::Administrator, faculty: "Sistemas", field: None, question: "escuela", answer: "uleam" },
];

impl SeedUser {
    fn to_user(&self, now: DateTime<Utc>) -> User {
        let (major, specialty) = match self.role {
            Role::Student => (self.field.map(str::to_string), None),
            Role::Tutor => (None, self.field.map(str::to_string)),
            _ => (None, None),
        };
        User {
            id: self.id.to_string(),
            given_names: self.given_names.to_string(),
            surnames: self.surnames.to_string(),
            email: self.email.to_string(),
            password: Sensitive::new(self.password.to_string()),
            role: self.role,
            faculty: Some(self.faculty.to_string()),
            major,
            specialty,
            security_question: self.question.to_string(),
            security_answer: Sensitive::new(self.answer.to_string()),
            registered_at: now,
        }
    }
}

/// Append the fixed dataset to `store`
///
/// Callers clear the store first; see `system_ops`.
pub(crate) fn populate_defaults(store: &mut Store) {
    let now = Utc::now();

    for seed_user in &USERS {
        store.insert_user(seed_user.to_user(now));
    }

    seed_topics(store, now);

    for (student, tutor) in [(MARIA, CARLOS_R), (JUAN, PATRICIA), (ANA, ROBERTO)] {
        store.insert_assignment(Assignment {
            id: generate_id(),
            student_email: student.to_string(),
            tutor_email: tutor.to_string(),
            assigned_at: now,
        });
    }

    let session_ids = seed_sessions(store, now);
    seed_files(store, now);
    seed_notifications(store, now, &session_ids);
}

fn seed_topics(store: &mut Store, now: DateTime<Utc>) {
    let topics = [
        (
            MARIA,
            "Sistema Web para Gestión de Inventarios",
            "Desarrollo de una aplicación web para el control y gestión de inventarios en pequeñas y medianas empresas, utilizando tecnologías modernas como React y Node.js.",
            true,
        ),
        (
            JUAN,
            "Análisis Estructural de Puentes Colgantes",
            "Estudio del comportamiento estructural de puentes colgantes bajo diferentes cargas y condiciones climáticas, aplicando métodos de elementos finitos.",
            false,
        ),
        (
            ANA,
            "Prevalencia de Diabetes en Adultos Mayores",
            "Investigación epidemiológica sobre la prevalencia de diabetes tipo 2 en adultos mayores de 65 años en la provincia de Manabí.",
            true,
        ),
    ];

    for (student, title, description, approved) in topics {
        store.insert_topic(Topic {
            id: generate_id(),
            student_email: student.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            approved,
            observations: None,
            comments: None,
            registered_at: now,
            reviewed_at: approved.then_some(now),
        });
    }
}

struct SeedSession {
    student: &'static str,
    tutor: &'static str,
    date: (i32, u32, u32),
    hour: u32,
    subject: &'static str,
    description: &'static str,
    status: SessionStatus,
    observations: Option<&'static str>,
    grade: Option<&'static str>,
}

const SESSIONS: [SeedSession; 4] = [
    SeedSession {
        student: MARIA,
        tutor: CARLOS_R,
        date: (2024, 2, 15),
        hour: 10,
        subject: "Revisión del Marco Teórico",
        description: "Revisión y corrección del marco teórico del proyecto de titulación",
        status: SessionStatus::Completed,
        observations: Some("Excelente trabajo en la investigación bibliográfica"),
        grade: Some("Excelente"),
    },
    SeedSession {
        student: MARIA,
        tutor: CARLOS_R,
        date: (2024, 2, 20),
        hour: 14,
        subject: "Desarrollo del Prototipo",
        description: "Revisión del avance en el desarrollo del sistema web",
        status: SessionStatus::Accepted,
        observations: None,
        grade: None,
    },
    SeedSession {
        student: JUAN,
        tutor: PATRICIA,
        date: (2024, 2, 18),
        hour: 9,
        subject: "Metodología de Investigación",
        description: "Definición de la metodología para el análisis estructural",
        status: SessionStatus::Pending,
        observations: None,
        grade: None,
    },
    SeedSession {
        student: ANA,
        tutor: ROBERTO,
        date: (2024, 2, 12),
        hour: 11,
        subject: "Diseño de la Investigación",
        description: "Planificación del estudio epidemiológico",
        status: SessionStatus::Completed,
        observations: Some("Muy buen planteamiento metodológico"),
        grade: Some("Muy Bueno"),
    },
];

/// Returns the generated session ids in table order
fn seed_sessions(store: &mut Store, now: DateTime<Utc>) -> Vec<String> {
    let mut ids = Vec::with_capacity(SESSIONS.len());
    for seed in &SESSIONS {
        let (y, m, d) = seed.date;
        let (Some(date), Some(time)) = (
            NaiveDate::from_ymd_opt(y, m, d),
            NaiveTime::from_hms_opt(seed.hour, 0, 0),
        ) else {
            continue;
        };
        let id = generate_id();
        store.insert_session(TutoringSession {
            id: id.clone(),
            student_email: seed.student.to_string(),
            tutor_email: seed.tutor.to_string(),
            date,
            time,
            subject: seed.subject.to_string(),
            description: seed.description.to_string(),
            status: seed.status,
            observations: seed.observations.map(str::to_string),
            grade: seed.grade.map(str::to_string),
            rejection_reason: None,
            created_at: now,
        });
        ids.push(id);
    }
    ids
}

fn seed_files(store: &mut Store, now: DateTime<Utc>) {
    let content = encode_data_url("application/pdf", SAMPLE_PDF);
    let files = [
        ("Marco_Teorico_v1.pdf", 2_048_000, MARIA),
        ("Capitulo1_Introduccion.pdf", 1_536_000, JUAN),
        ("Metodologia_Investigacion.pdf", 3_072_000, ANA),
    ];

    for (name, size, student) in files {
        store.insert_file(FileRecord {
            id: generate_id(),
            name: name.to_string(),
            mime_type: "application/pdf".to_string(),
            size,
            content: content.clone(),
            student_email: student.to_string(),
            uploaded_at: now,
        });
    }
}

fn seed_notifications(store: &mut Store, now: DateTime<Utc>, session_ids: &[String]) {
    let session = |i: usize| session_ids.get(i).cloned().unwrap_or_default();

    let notifications = [
        (
            MARIA,
            "Tu tutoría 'Revisión del Marco Teórico' ha sido completada",
            NotificationPayload::SessionCompleted {
                session_id: session(0),
                subject: SESSIONS[0].subject.to_string(),
                grade: "Excelente".to_string(),
            },
            false,
        ),
        (
            MARIA,
            "Tu tutoría 'Desarrollo del Prototipo' ha sido aceptada",
            NotificationPayload::SessionAccepted {
                session_id: session(1),
                subject: SESSIONS[1].subject.to_string(),
            },
            true,
        ),
        (
            CARLOS_R,
            "Nueva solicitud de tutoría: Desarrollo del Prototipo",
            NotificationPayload::NewSessionRequest {
                session_id: session(1),
                subject: SESSIONS[1].subject.to_string(),
            },
            false,
        ),
        (
            JUAN,
            "Se te ha asignado un tutor para tu proceso de titulación",
            NotificationPayload::TutorAssigned {
                tutor_email: PATRICIA.to_string(),
            },
            true,
        ),
    ];

    for (email, message, payload, read) in notifications {
        store.insert_notification(Notification {
            id: generate_id(),
            user_email: email.to_string(),
            message: message.to_string(),
            payload,
            read,
            created_at: now,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TopicReviewState;

    fn seeded() -> Store {
        let mut store = Store::new();
        populate_defaults(&mut store);
        store
    }

    #[test]
    fn test_seed_counts() {
        let store = seeded();
        assert_eq!(store.users().len(), 13);
        assert_eq!(store.topics().len(), 3);
        assert_eq!(store.assignments().len(), 3);
        assert_eq!(store.sessions().len(), 4);
        assert_eq!(store.files().len(), 3);
        assert_eq!(store.notifications().len(), 4);
    }

    #[test]
    fn test_seed_emails_are_unique() {
        let store = seeded();
        let mut emails: Vec<_> = store.users().iter().map(|u| u.email.as_str()).collect();
        emails.sort();
        emails.dedup();
        assert_eq!(emails.len(), 13);
    }

    #[test]
    fn test_seed_roles_match_email_domains() {
        let store = seeded();
        for user in store.users() {
            assert_eq!(
                crate::rules::validate_email_domain(&user.email),
                Some(user.role),
                "{} has mismatched role",
                user.email
            );
        }
    }

    #[test]
    fn test_seed_files_decode() {
        let store = seeded();
        for file in store.files() {
            let bytes = file.decode_content().unwrap();
            assert!(bytes.starts_with(b"%PDF"));
        }
    }

    #[test]
    fn test_seed_notifications_reference_seeded_sessions() {
        let store = seeded();
        let session_ids: Vec<_> = store.sessions().iter().map(|s| s.id.clone()).collect();
        for n in store.notifications() {
            if let NotificationPayload::NewSessionRequest { session_id, .. }
            | NotificationPayload::SessionAccepted { session_id, .. }
            | NotificationPayload::SessionCompleted { session_id, .. } = &n.payload
            {
                assert!(session_ids.contains(session_id));
            }
        }
    }

    #[test]
    fn test_seed_topic_states() {
        let store = seeded();
        let states: Vec<_> = store.topics().iter().map(|t| t.review_state()).collect();
        assert_eq!(
            states,
            vec![
                TopicReviewState::Approved,
                TopicReviewState::Pending,
                TopicReviewState::Approved
            ]
        );
    }
}
