use std::fmt;

/// Decides whether a username/password pair may operate the desk
pub trait Authenticator {
    /// Return `true` if the credentials grant access
    fn authenticate(&self, username: &str, password: &str) -> bool;
}

/// Accepts exactly one fixed credential pair
#[derive(Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    /// The accepted username
    username: String,
    /// The accepted password
    password: String,
}

impl StaticCredentials {
    /// Create a checker for a single username/password pair
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// The password never goes to logs
impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Authenticator for StaticCredentials {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

impl<F> Authenticator for F
where
    F: Fn(&str, &str) -> bool,
{
    fn authenticate(&self, username: &str, password: &str) -> bool {
        self(username, password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_credentials() {
        let auth = StaticCredentials::new("abhinikesh", "1234");
        assert!(auth.authenticate("abhinikesh", "1234"));
        assert!(!auth.authenticate("abhinikesh", "12345"));
        assert!(!auth.authenticate("admin", "1234"));
        assert!(!auth.authenticate("", ""));
    }

    #[test]
    fn test_debug_hides_password() {
        let auth = StaticCredentials::new("abhinikesh", "1234");
        let rendered = format!("{auth:?}");
        assert!(rendered.contains("abhinikesh"));
        assert!(!rendered.contains("1234"));
    }

    #[test]
    fn test_closure_authenticator() {
        let open_desk = |user: &str, _: &str| user == "night-shift";
        assert!(open_desk.authenticate("night-shift", "anything"));
        assert!(!open_desk.authenticate("day-shift", "anything"));
    }
}
