use serde::Serialize;
use std::collections::BTreeMap;

use crate::model::{Role, SessionStatus};
use crate::ops::Store;

/// Sessions per status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionCounts {
    pub pending: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub completed: usize,
}

/// Aggregate counts over the whole store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SystemStats {
    pub total_users: usize,
    pub students: usize,
    pub tutors: usize,
    pub coordinators: usize,
    pub administrators: usize,
    pub total_sessions: usize,
    pub sessions: SessionCounts,
    pub total_topics: usize,
    pub approved_topics: usize,
    pub total_files: usize,
    pub total_assignments: usize,
    pub unread_notifications: usize,
    /// Users per faculty string, compared verbatim; users without a faculty
    /// are not counted
    pub users_by_faculty: BTreeMap<String, usize>,
}

/// Compute `SystemStats`; pure
pub fn system_stats(store: &Store) -> SystemStats {
    let mut stats = SystemStats {
        total_users: store.users().len(),
        total_sessions: store.sessions().len(),
        total_topics: store.topics().len(),
        total_files: store.files().len(),
        total_assignments: store.assignments().len(),
        ..SystemStats::default()
    };

    for user in store.users() {
        match user.role {
            Role::Student => stats.students += 1,
            Role::Tutor => stats.tutors += 1,
            Role::Coordinator => stats.coordinators += 1,
            Role::Administrator => stats.administrators += 1,
        }
        if let Some(faculty) = &user.faculty {
            *stats.users_by_faculty.entry(faculty.clone()).or_insert(0) += 1;
        }
    }

    for session in store.sessions() {
        match session.status {
            SessionStatus::Pending => stats.sessions.pending += 1,
            SessionStatus::Accepted => stats.sessions.accepted += 1,
            SessionStatus::Rejected => stats.sessions.rejected += 1,
            SessionStatus::Completed => stats.sessions.completed += 1,
        }
    }

    stats.approved_topics = store.topics().iter().filter(|t| t.approved).count();
    stats.unread_notifications = store.notifications().iter().filter(|n| !n.read).count();
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::system_ops;

    #[test]
    fn test_empty_store_stats() {
        assert_eq!(system_stats(&Store::new()), SystemStats::default());
    }

    #[test]
    fn test_seeded_stats() {
        let mut store = Store::new();
        system_ops::ensure_default_data(&mut store);
        let stats = system_stats(&store);

        assert_eq!(stats.total_users, 13);
        assert_eq!(
            (stats.students, stats.tutors, stats.coordinators, stats.administrators),
            (4, 4, 3, 2)
        );
        assert_eq!(
            stats.sessions,
            SessionCounts {
                pending: 1,
                accepted: 1,
                rejected: 0,
                completed: 2
            }
        );
        assert_eq!(stats.total_topics, 3);
        assert_eq!(stats.approved_topics, 2);
        assert_eq!(stats.total_files, 3);
        assert_eq!(stats.unread_notifications, 2);
        assert_eq!(
            stats.users_by_faculty["Facultad de Ingeniería, Industria y Arquitectura"],
            5
        );
        assert_eq!(stats.users_by_faculty.values().sum::<usize>(), 13);
    }
}
