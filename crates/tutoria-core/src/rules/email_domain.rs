use crate::model::Role;

/// Institutional email suffixes, checked in order
///
/// Suffixes include the `@`, so `x@live.uleam.edu.ec` never matches the
/// tutor entry.
pub const DOMAIN_TABLE: [(&str, Role); 4] = [
    ("@live.uleam.edu.ec", Role::Student),
    ("@uleam.edu.ec", Role::Tutor),
    ("@coordtit.uleam.edu.ec", Role::Coordinator),
    ("@admin.uleam.edu.ec", Role::Administrator),
];

/// Classify an email into the role its domain grants
///
/// Returns `None` when no institutional suffix matches. First match wins.
pub fn validate_email_domain(email: &str) -> Option<Role> {
    let email = email.trim();
    DOMAIN_TABLE
        .iter()
        .find(|(suffix, _)| email.ends_with(suffix))
        .map(|(_, role)| *role)
}
