use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tutoria_core_types::Sensitive;

use crate::errors::TutoriaError;

/// Institutional role, fixed when the account is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "estudiante")]
    Student,
    #[serde(rename = "tutor")]
    Tutor,
    #[serde(rename = "coordinador")]
    Coordinator,
    #[serde(rename = "administrador")]
    Administrator,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Student,
        Role::Tutor,
        Role::Coordinator,
        Role::Administrator,
    ];

    /// Stable tag, identical to the persisted value
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "estudiante",
            Role::Tutor => "tutor",
            Role::Coordinator => "coordinador",
            Role::Administrator => "administrador",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = TutoriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| TutoriaError::InvalidInput {
                field: "role".to_string(),
                reason: format!("unknown role '{}'", s),
            })
    }
}

/// A registered account
///
/// `email` is unique across all users and is how every other entity refers
/// to a user. `id` is internal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub given_names: String,
    pub surnames: String,
    pub email: String,
    pub password: Sensitive<String>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty: Option<String>,
    /// Degree programme (students)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    /// Area of expertise (tutors)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    pub security_question: String,
    pub security_answer: Sensitive<String>,
    pub registered_at: DateTime<Utc>,
}

impl User {
    /// "Given Surnames", as shown in messages
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_names, self.surnames)
    }
}

/// Registration input; the store assigns `id` and `registered_at`
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub given_names: String,
    pub surnames: String,
    pub email: String,
    pub password: Sensitive<String>,
    pub role: Role,
    pub faculty: Option<String>,
    pub major: Option<String>,
    pub specialty: Option<String>,
    pub security_question: String,
    pub security_answer: Sensitive<String>,
}

/// Profile edit
///
/// Enumerates exactly the fields a profile edit may touch. Email and role
/// are deliberately absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserUpdate {
    pub given_names: Option<String>,
    pub surnames: Option<String>,
    pub password: Option<Sensitive<String>>,
    pub faculty: Option<String>,
    pub major: Option<String>,
    pub specialty: Option<String>,
    pub security_question: Option<String>,
    pub security_answer: Option<Sensitive<String>>,
}

impl UserUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn given_names(mut self, value: impl Into<String>) -> Self {
        self.given_names = Some(value.into());
        self
    }

    pub fn surnames(mut self, value: impl Into<String>) -> Self {
        self.surnames = Some(value.into());
        self
    }

    pub fn password(mut self, value: impl Into<String>) -> Self {
        self.password = Some(Sensitive::new(value.into()));
        self
    }

    pub fn faculty(mut self, value: impl Into<String>) -> Self {
        self.faculty = Some(value.into());
        self
    }

    pub fn major(mut self, value: impl Into<String>) -> Self {
        self.major = Some(value.into());
        self
    }

    pub fn specialty(mut self, value: impl Into<String>) -> Self {
        self.specialty = Some(value.into());
        self
    }

    pub fn security_question(mut self, value: impl Into<String>) -> Self {
        self.security_question = Some(value.into());
        self
    }

    pub fn security_answer(mut self, value: impl Into<String>) -> Self {
        self.security_answer = Some(Sensitive::new(value.into()));
        self
    }

    /// True when the update would not change anything
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the provided fields into `user`
    pub(crate) fn apply_to(self, user: &mut User) {
        if let Some(v) = self.given_names {
            user.given_names = v;
        }
        if let Some(v) = self.surnames {
            user.surnames = v;
        }
        if let Some(v) = self.password {
            user.password = v;
        }
        if let Some(v) = self.faculty {
            user.faculty = Some(v);
        }
        if let Some(v) = self.major {
            user.major = Some(v);
        }
        if let Some(v) = self.specialty {
            user.specialty = Some(v);
        }
        if let Some(v) = self.security_question {
            user.security_question = v;
        }
        if let Some(v) = self.security_answer {
            user.security_answer = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "student1".to_string(),
            given_names: "María".to_string(),
            surnames: "González".to_string(),
            email: "maria.gonzalez@live.uleam.edu.ec".to_string(),
            password: Sensitive::new("estudiante123".to_string()),
            role: Role::Student,
            faculty: Some("Facultad de Ingeniería, Industria y Arquitectura".to_string()),
            major: Some("Ingeniería en Sistemas".to_string()),
            specialty: None,
            security_question: "mascota".to_string(),
            security_answer: Sensitive::new("firulais".to_string()),
            registered_at: Utc::now(),
        }
    }

    #[test]
    fn test_role_tags() {
        assert_eq!(Role::Student.as_str(), "estudiante");
        assert_eq!(Role::Administrator.to_string(), "administrador");
        assert_eq!("coordinador".parse::<Role>().unwrap(), Role::Coordinator);
        assert!("rector".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serializes_as_tag() {
        let json = serde_json::to_string(&Role::Tutor).unwrap();
        assert_eq!(json, "\"tutor\"");
    }

    #[test]
    fn test_user_debug_redacts_credentials() {
        let debug_str = format!("{:?}", sample_user());
        assert!(!debug_str.contains("estudiante123"));
        assert!(!debug_str.contains("firulais"));
    }

    #[test]
    fn test_user_json_omits_absent_optionals() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert!(json.get("specialty").is_none());
        assert_eq!(json["password"], "estudiante123");
    }

    #[test]
    fn test_update_touches_only_given_fields() {
        let mut user = sample_user();
        UserUpdate::new()
            .given_names("María José")
            .password("nueva-clave")
            .apply_to(&mut user);

        assert_eq!(user.given_names, "María José");
        assert_eq!(user.password.expose(), "nueva-clave");
        assert_eq!(user.surnames, "González");
        assert_eq!(user.email, "maria.gonzalez@live.uleam.edu.ec");
        assert_eq!(user.role, Role::Student);
    }

    #[test]
    fn test_empty_update() {
        assert!(UserUpdate::new().is_empty());
        assert!(!UserUpdate::new().faculty("Sistemas").is_empty());
    }
}
