//! Signed-in session passed to admin views
//!
//! Pages receive the session explicitly instead of reading a global
//! "is admin logged in" flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ListingError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionRole { Guest, Customer, Admin }

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    user: Option<String>,
    role: SessionRole,
    started_at: DateTime<Utc>,
    #[serde(default)]
    ended_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn guest() -> Self {
        Self { user: None, role: SessionRole::Guest, started_at: Utc::now(), ended_at: None }
    }

    pub fn customer(user: impl Into<String>) -> Self {
        Self { user: Some(user.into()), role: SessionRole::Customer, started_at: Utc::now(), ended_at: None }
    }

    pub fn admin(user: impl Into<String>) -> Self {
        Self { user: Some(user.into()), role: SessionRole::Admin, started_at: Utc::now(), ended_at: None }
    }

    pub fn user(&self) -> Option<&str> { self.user.as_deref() }
    pub fn is_active(&self) -> bool { self.ended_at.is_none() }
    pub fn is_admin(&self) -> bool { self.is_active() && self.role == SessionRole::Admin }

    pub fn sign_out(&mut self) {
        if self.ended_at.is_none() {
            tracing::info!(user = self.user.as_deref().unwrap_or("guest"), "session ended");
            self.ended_at = Some(Utc::now());
        }
    }

    pub fn require_admin(&self) -> Result<()> {
        if self.is_admin() { Ok(()) } else { Err(ListingError::Unauthorized) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_guard() {
        assert!(Session::admin("ops@shop.vn").require_admin().is_ok());
        assert!(matches!(Session::customer("an@mail.vn").require_admin(), Err(ListingError::Unauthorized)));
        assert!(Session::guest().require_admin().is_err());
    }

    #[test]
    fn test_sign_out_revokes_admin() {
        let mut session = Session::admin("ops@shop.vn");
        session.sign_out();
        assert!(!session.is_active());
        assert!(session.require_admin().is_err());
        assert_eq!(session.user(), Some("ops@shop.vn"));
    }
}
