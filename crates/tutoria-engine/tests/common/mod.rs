use chrono::{NaiveDate, NaiveTime};
use tempfile::TempDir;
use tutoria_core::{NewSession, NewUser, Role};
use tutoria_core_types::{RequestContext, Sensitive};
use tutoria_engine::TutoringSystem;
use tutoria_store::SqliteSlotStorage;

pub const MARIA: &str = "maria.gonzalez@live.uleam.edu.ec";
pub const ANA: &str = "ana.lopez@live.uleam.edu.ec";
pub const CARLOS_R: &str = "carlos.rodriguez@uleam.edu.ec";
pub const ROBERTO: &str = "roberto.vasquez@uleam.edu.ec";

/// Seeded system over a SQLite file in a fresh temp dir
#[allow(dead_code)]
pub fn sqlite_system() -> (TempDir, TutoringSystem<SqliteSlotStorage>) {
    let dir = TempDir::new().unwrap();
    let system = TutoringSystem::open_sqlite(dir.path().join("store.db")).unwrap();
    (dir, system)
}

#[allow(dead_code)]
pub fn ctx() -> RequestContext {
    RequestContext::new()
}

#[allow(dead_code)]
pub fn student(email: &str) -> NewUser {
    NewUser {
        given_names: "Lucía".to_string(),
        surnames: "Vera".to_string(),
        email: email.to_string(),
        password: Sensitive::new("clave123".to_string()),
        role: Role::Student,
        faculty: Some("Facultad de Ingeniería".to_string()),
        major: Some("Ingeniería en Sistemas".to_string()),
        specialty: None,
        security_question: "ciudad natal".to_string(),
        security_answer: Sensitive::new("Manta".to_string()),
    }
}

#[allow(dead_code)]
pub fn session_request(student: &str, tutor: &str) -> NewSession {
    NewSession {
        student_email: student.to_string(),
        tutor_email: tutor.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
        time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        subject: "Revisión de Resultados".to_string(),
        description: "Análisis de los resultados del prototipo".to_string(),
    }
}
