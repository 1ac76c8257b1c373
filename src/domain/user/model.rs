//! User domain entity

use crate::shared::unix_now;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    /// Books stylists and writes reviews
    Client,
    /// May own a stylist profile
    Stylist,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Stylist => "stylist",
        }
    }

    /// Parses a role name, returning `None` for anything unknown.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "client" => Some(Self::Client),
            "stylist" => Some(Self::Stylist),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: i64,
    pub updated_at: i64,
}

impl User {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>, role: UserRole) -> Self {
        let now = unix_now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.into(),
            password_hash: password_hash.into(),
            role,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_stylist(&self) -> bool {
        self.role == UserRole::Stylist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!(UserRole::parse("Stylist"), Some(UserRole::Stylist));
        assert_eq!(UserRole::parse("client"), Some(UserRole::Client));
        assert_eq!(UserRole::parse("admin"), None);
    }

    #[test]
    fn new_user_gets_fresh_id_and_timestamps() {
        let a = User::new("a@example.com", "hash", UserRole::Stylist);
        let b = User::new("b@example.com", "hash", UserRole::Client);
        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, a.updated_at);
        assert!(a.is_stylist());
        assert!(!b.is_stylist());
    }
}
