//! Session module - who is signed in and which referral brought them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProfileUid, Timestamp, UserUid};

/// The signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_uid: UserUid,
    pub profile_uid: ProfileUid,
    pub email: String,
}

/// Persisted sign-in state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<SessionUser>,
    pub referral_id: Option<String>,
    pub updated_at: Timestamp,
}

impl Session {
    /// Session with nobody signed in.
    pub fn anonymous() -> Self {
        Self {
            user: None,
            referral_id: None,
            updated_at: Timestamp::now(),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn profile_uid(&self) -> Option<&ProfileUid> {
        self.user.as_ref().map(|u| &u.profile_uid)
    }

    /// True when the session was last touched more than `max_age_days` ago.
    ///
    /// A deadline past the end of the calendar never expires.
    pub fn is_expired(&self, now: Timestamp, max_age_days: i64) -> bool {
        self.updated_at
            .checked_add_days(max_age_days)
            .is_some_and(|deadline| deadline.is_before(&now))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}
