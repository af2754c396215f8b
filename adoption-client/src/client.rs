use std::time::Duration;

use async_trait::async_trait;
use reqwest::Response;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use crate::errors::ClientError;
use crate::errors::SUBMIT_FAILED_MESSAGE;
use crate::form::AdoptionRequest;
use crate::session::CurrentUser;
use crate::session::SessionContext;

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Backend operation the form flow depends on.
#[async_trait]
pub trait AdoptionApi: Send + Sync {
    /// Any 2xx answer counts as success.
    ///
    /// # Errors
    /// * `Api` - Backend answered non-2xx; message is `Failed to submit the form.`
    /// * `Transport` - Request could not be completed
    async fn submit_adoption_form(&self, request: &AdoptionRequest) -> Result<(), ClientError>;
}

/// Registration payload. Only username and password are required.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Registration {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_seller: bool,
}

/// HTTP client for the adoption backend.
///
/// Keeps a cookie store, so the HTTP-only session cookie set by login is sent
/// on later requests and dropped again by logout.
#[derive(Debug, Clone)]
pub struct AdoptionClient {
    http: reqwest::Client,
    base_url: String,
}

impl AdoptionClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn register(&self, registration: &Registration) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.url("/api/auth/register"))
            .json(registration)
            .send()
            .await?;

        ensure_success(response).await.map(|_| ())
    }

    /// Logs in and returns the resulting session.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SessionContext, ClientError> {
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&Credentials { username, password })
            .send()
            .await?;

        let user: CurrentUser = read_data(ensure_success(response).await?).await?;
        tracing::debug!(username = %user.username, "Logged in");

        Ok(SessionContext::authenticated(user))
    }

    /// Clears the session locally once the backend has expired the cookie.
    pub async fn logout(&self, session: &mut SessionContext) -> Result<(), ClientError> {
        let response = self.http.post(self.url("/api/auth/logout")).send().await?;
        ensure_success(response).await?;

        session.clear();
        Ok(())
    }

    /// Asks the backend who the stored cookie belongs to.
    ///
    /// An absent or rejected cookie yields an anonymous session rather than
    /// an error.
    pub async fn restore_session(&self) -> Result<SessionContext, ClientError> {
        let response = self.http.get(self.url("/api/auth/session")).send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Ok(SessionContext::anonymous());
        }

        let user: CurrentUser = read_data(ensure_success(response).await?).await?;
        Ok(SessionContext::authenticated(user))
    }
}

#[async_trait]
impl AdoptionApi for AdoptionClient {
    async fn submit_adoption_form(&self, request: &AdoptionRequest) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.url("/form/save"))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(status = response.status().as_u16(), "Adoption form rejected");
            return Err(ClientError::Api {
                status: response.status().as_u16(),
                message: SUBMIT_FAILED_MESSAGE.to_string(),
            });
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorData {
    message: String,
}

/// Turns a non-2xx response into `ClientError::Api`, preferring the message
/// from the JSON error envelope over the raw body.
async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await?;
    let message = serde_json::from_str::<Envelope<ErrorData>>(&body)
        .map(|envelope| envelope.data.message)
        .unwrap_or_else(|_| {
            if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("Request failed").to_string()
            } else {
                body
            }
        });

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn read_data<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let envelope: Envelope<T> = response.json().await?;
    Ok(envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_default_base_url() {
        let client = AdoptionClient::new(format!("{DEFAULT_BASE_URL}/")).unwrap();

        assert_eq!(
            client.url("/api/auth/login"),
            "http://localhost:4000/api/auth/login"
        );
    }
}
