//! Session issuing for `getSessionId`

use tracing::{info, warn};

use crate::error::{Result, SmapiError};

/// A user account as stored by the host application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
}

/// Lookup of user accounts by name
pub trait UserDirectory {
    fn find_user(&self, username: &str) -> Result<Option<UserRecord>>;
}

/// Check a login and hand out the session id for it.
///
/// The stored password must equal the supplied one exactly. The returned
/// session id is the stored username, which later calls send back in their
/// credentials header.
pub fn issue_session_id<U: UserDirectory + ?Sized>(
    users: &U,
    username: &str,
    password: &str,
) -> Result<String> {
    let user = match users.find_user(username)? {
        Some(user) => user,
        None => {
            warn!(username, "Login for unknown user");
            return Err(SmapiError::login_invalid());
        }
    };

    if user.password != password {
        warn!(username, "Login with wrong password");
        return Err(SmapiError::login_invalid());
    }

    info!(username = %user.username, "Issued session");
    Ok(user.username)
}
