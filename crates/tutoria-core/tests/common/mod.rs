use chrono::{NaiveDate, NaiveTime};
use tutoria_core::ops::system_ops;
use tutoria_core::{NewSession, NewUser, Role, Store};
use tutoria_core_types::Sensitive;

pub const MARIA: &str = "maria.gonzalez@live.uleam.edu.ec";
pub const JUAN: &str = "juan.perez@live.uleam.edu.ec";
pub const CARLOS_MENDOZA: &str = "carlos.mendoza@live.uleam.edu.ec";
pub const CARLOS_R: &str = "carlos.rodriguez@uleam.edu.ec";
pub const LAURA: &str = "laura.morales@uleam.edu.ec";

/// Store holding the default dataset, with a clean dirty set
#[allow(dead_code)]
pub fn seeded_store() -> Store {
    let mut store = Store::new();
    system_ops::ensure_default_data(&mut store);
    store.take_dirty();
    store
}

#[allow(dead_code)]
pub fn new_user(email: &str, role: Role) -> NewUser {
    NewUser {
        given_names: "Prueba".to_string(),
        surnames: "Usuario".to_string(),
        email: email.to_string(),
        password: Sensitive::new("clave123".to_string()),
        role,
        faculty: Some("Facultad de Ciencias de la Salud".to_string()),
        major: None,
        specialty: None,
        security_question: "mascota".to_string(),
        security_answer: Sensitive::new("luna".to_string()),
    }
}

#[allow(dead_code)]
pub fn session_request(student: &str, tutor: &str, subject: &str) -> NewSession {
    NewSession {
        student_email: student.to_string(),
        tutor_email: tutor.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        subject: subject.to_string(),
        description: "Revisión de avance".to_string(),
    }
}
