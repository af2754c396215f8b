use serde::Deserialize;

/// Public view of the logged-in user as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_seller: bool,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Who is using the client right now.
///
/// Produced by login, reset by logout, and handed explicitly to whatever needs
/// the current user. The session token itself never appears here; it lives in
/// the HTTP client's cookie store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    user: Option<CurrentUser>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user: CurrentUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Contact email of the current user, if logged in and one is on file.
    pub fn email(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|u| u.email.as_deref())
            .filter(|e| !e.trim().is_empty())
    }

    pub fn clear(&mut self) {
        self.user = None;
    }
}
