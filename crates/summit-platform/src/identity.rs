//! Authenticated-user identity.
//!
//! Authentication itself is the platform's job; by the time a request
//! reaches the service it either carries a verified [`AuthUser`] or it
//! doesn't. Operations that require a caller take `Option<&AuthUser>` and
//! reject `None`.

/// A verified caller identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// Stable user id; keys the caller's profile
    pub user_id: String,
    /// Verified email address
    pub email: String,
    /// Short display handle
    pub nickname: String,
}

impl AuthUser {
    /// Builds an identity from a verified email address.
    ///
    /// The user id is derived from the email, which the platform has
    /// already verified is owned by the caller.
    pub fn new(email: &str, nickname: &str) -> Self {
        AuthUser {
            user_id: user_id_for_email(email),
            email: email.to_string(),
            nickname: nickname.to_string(),
        }
    }
}

/// Derives the stable user id for an email address.
pub fn user_id_for_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_is_normalized_email() {
        assert_eq!(user_id_for_email(" Alice@Example.COM "), "alice@example.com");
    }

    #[test]
    fn test_auth_user_derives_id() {
        let user = AuthUser::new("Bob@example.com", "bob");
        assert_eq!(user.user_id, "bob@example.com");
        assert_eq!(user.email, "Bob@example.com");
        assert_eq!(user.nickname, "bob");
    }
}
