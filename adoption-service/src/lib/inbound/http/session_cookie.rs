use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::SameSite;

use crate::config::CookieSameSite;
use crate::config::SessionConfig;

/// Name of the cookie carrying the session token.
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Attributes shared by the cookie that sets a session and the one that
/// clears it. Clients only overwrite a cookie whose attributes match, so both
/// are always built from the same policy.
#[derive(Debug, Clone, Copy)]
pub struct SessionCookie {
    secure: bool,
    same_site: SameSite,
}

impl SessionCookie {
    pub fn new(secure: bool, same_site: SameSite) -> Self {
        Self { secure, same_site }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        let same_site = match config.cookie_same_site {
            CookieSameSite::None => SameSite::None,
            CookieSameSite::Lax => SameSite::Lax,
            CookieSameSite::Strict => SameSite::Strict,
        };
        Self::new(config.cookie_secure, same_site)
    }

    /// HTTP-only cookie holding a freshly issued token.
    pub fn issue(&self, token: String) -> Cookie<'static> {
        self.build(token)
    }

    /// Cookie instructing the client to drop its session token.
    pub fn expire(&self) -> Cookie<'static> {
        let mut cookie = self.build(String::new());
        cookie.make_removal();
        cookie
    }

    fn build(&self, value: String) -> Cookie<'static> {
        Cookie::build((ACCESS_TOKEN_COOKIE, value))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(self.same_site)
            .build()
    }
}

impl Default for SessionCookie {
    fn default() -> Self {
        Self::new(true, SameSite::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_cookie_is_http_only() {
        let cookie = SessionCookie::default().issue("token-value".to_string());

        assert_eq!(cookie.name(), "accessToken");
        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_removal_matches_issued_attributes() {
        let policy = SessionCookie::new(true, SameSite::None);
        let issued = policy.issue("token-value".to_string());
        let removal = policy.expire();

        assert_eq!(removal.name(), issued.name());
        assert_eq!(removal.path(), issued.path());
        assert_eq!(removal.http_only(), issued.http_only());
        assert_eq!(removal.secure(), issued.secure());
        assert_eq!(removal.same_site(), issued.same_site());
        assert_eq!(removal.value(), "");

        let header = removal.to_string();
        assert!(header.contains("Max-Age=0"));
        assert!(header.contains("SameSite=None"));
        assert!(header.contains("Secure"));
    }

    #[test]
    fn test_policy_follows_configuration() {
        let config = SessionConfig {
            secret: "secret".to_string(),
            expiration_hours: None,
            cookie_secure: false,
            cookie_same_site: CookieSameSite::Lax,
        };

        let cookie = SessionCookie::from_config(&config).issue("t".to_string());
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }
}
