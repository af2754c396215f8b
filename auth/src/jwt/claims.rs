use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a session token.
///
/// Binds a user identity and its role flag to the signing key. `exp` is only
/// present when the issuer was configured with a time-to-live.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Subject (user identifier)
    pub sub: String,

    /// Whether the user registered as a seller
    pub is_seller: bool,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl SessionClaims {
    /// Build claims for a freshly authenticated user.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `is_seller` - Role flag stored on the user record
    /// * `ttl` - Token lifetime, `None` for tokens without expiration
    pub fn issue(user_id: impl ToString, is_seller: bool, ttl: Option<Duration>) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id.to_string(),
            is_seller,
            iat: now.timestamp(),
            exp: ttl.map(|ttl| (now + ttl).timestamp()),
        }
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_with_ttl() {
        let claims = SessionClaims::issue("user123", true, Some(Duration::hours(24)));

        assert_eq!(claims.sub, "user123");
        assert!(claims.is_seller);

        let exp = claims.exp.unwrap();
        assert_eq!(exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_issue_without_ttl() {
        let claims = SessionClaims::issue("user123", false, None);

        assert!(claims.exp.is_none());
    }

    #[test]
    fn test_with_expiration() {
        let claims = SessionClaims::issue("user123", false, None).with_expiration(1000);

        assert_eq!(claims.exp, Some(1000));
    }

    #[test]
    fn test_exp_omitted_from_json_when_absent() {
        let claims = SessionClaims::issue("user123", false, None);
        let json = serde_json::to_value(&claims).unwrap();

        assert!(json.get("exp").is_none());
        assert_eq!(json["is_seller"], false);
    }
}
