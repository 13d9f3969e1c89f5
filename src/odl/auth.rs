//! Controller Authentication
//!
//! RESTCONF on the controller is protected by HTTP Basic auth. Credentials are
//! resolved from CLI flags, the environment, or the config file.

use std::fmt;

/// Default controller account
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin";

/// Environment variables consulted for credentials
pub const USERNAME_ENV: &str = "ODL_USERNAME";
pub const PASSWORD_ENV: &str = "ODL_PASSWORD";

/// Basic auth credentials for the controller
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

// Security: never print the password
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Read the username from the environment
pub fn get_env_username() -> Option<String> {
    std::env::var(USERNAME_ENV).ok().filter(|u| !u.is_empty())
}

/// Read the password from the environment
pub fn get_env_password() -> Option<String> {
    std::env::var(PASSWORD_ENV).ok().filter(|p| !p.is_empty())
}
