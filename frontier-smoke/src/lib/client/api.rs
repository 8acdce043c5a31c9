use reqwest::header::ACCEPT;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::COOKIE;
use reqwest::header::HeaderMap;
use reqwest::header::SET_COOKIE;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use super::errors::ClientError;
use super::messages::AuthCallbackRequest;
use super::messages::AuthTokenResponse;
use super::messages::AuthenticateRequest;
use super::messages::GetOrganizationRequest;
use super::messages::ListUsersRequest;

const FRONTIER_SERVICE: &str = "raystack.frontier.v1beta1.FrontierService";
const ADMIN_SERVICE: &str = "raystack.frontier.v1beta1.AdminService";

/// How a request authenticates against the service.
#[derive(Debug, Clone, Copy)]
pub enum Credential<'a> {
    /// `Cookie: sid=...` browser session
    Session(&'a str),
    /// `Authorization: Bearer ...` token
    Bearer(&'a str),
}

/// Result of starting a passwordless login.
#[derive(Debug, Clone)]
pub struct AuthStart {
    /// Opaque state to feed back into the callback
    pub state: String,
    /// Full response body, for narration
    pub raw: serde_json::Value,
}

/// Established browser session.
#[derive(Debug, Clone)]
pub struct Session {
    pub sid: String,
}

/// Thin client over the Frontier Connect-RPC endpoints.
///
/// Each call stamps a fresh `x-request-id` and dumps response headers at
/// debug level so a failing run can be correlated with service logs.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Start a passwordless login and return the flow state.
    pub async fn begin_login(
        &self,
        email: &str,
        strategy: &str,
    ) -> Result<AuthStart, ClientError> {
        let body = AuthenticateRequest::mail_otp(email, strategy);
        let response = self
            .post(FRONTIER_SERVICE, "Authenticate", &body, None)
            .await?;

        let raw: serde_json::Value = response.json().await?;
        let state = raw
            .get("state")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .ok_or(ClientError::MissingField("state"))?
            .to_string();

        Ok(AuthStart { state, raw })
    }

    /// Complete the login with the one-time code and return the session
    /// established by the `sid` cookie.
    pub async fn complete_login(
        &self,
        strategy: &str,
        code: &str,
        state: &str,
    ) -> Result<Session, ClientError> {
        let body = AuthCallbackRequest {
            strategy_name: strategy.to_string(),
            code: code.to_string(),
            state: state.to_string(),
        };
        let response = self
            .post(FRONTIER_SERVICE, "AuthCallback", &body, None)
            .await?;

        let sid =
            extract_sid_cookie(response.headers()).ok_or(ClientError::MissingSessionCookie)?;

        Ok(Session { sid })
    }

    /// Exchange the browser session for a bearer token.
    pub async fn issue_token(&self, session: &Session) -> Result<String, ClientError> {
        let response = self
            .post(
                FRONTIER_SERVICE,
                "AuthToken",
                &json!({}),
                Some(Credential::Session(&session.sid)),
            )
            .await?;

        let token: AuthTokenResponse = response.json().await?;
        if token.access_token.is_empty() {
            return Err(ClientError::MissingField("accessToken"));
        }

        Ok(token.access_token)
    }

    /// List all users through the admin surface.
    pub async fn list_users(
        &self,
        credential: Credential<'_>,
    ) -> Result<serde_json::Value, ClientError> {
        let response = self
            .post(
                ADMIN_SERVICE,
                "ListAllUsers",
                &ListUsersRequest::default(),
                Some(credential),
            )
            .await?;

        Ok(response.json().await?)
    }

    /// Fetch an organization, typically with a service-account token.
    pub async fn get_organization(
        &self,
        id: &str,
        credential: Credential<'_>,
    ) -> Result<serde_json::Value, ClientError> {
        let body = GetOrganizationRequest { id: id.to_string() };
        let response = self
            .post(FRONTIER_SERVICE, "GetOrganization", &body, Some(credential))
            .await?;

        Ok(response.json().await?)
    }

    /// Tear down the browser session.
    pub async fn logout(&self, session: &Session) -> Result<(), ClientError> {
        self.post(
            FRONTIER_SERVICE,
            "AuthLogout",
            &json!({}),
            Some(Credential::Session(&session.sid)),
        )
        .await?;

        Ok(())
    }

    async fn post<B: Serialize>(
        &self,
        service: &str,
        rpc: &str,
        body: &B,
        credential: Option<Credential<'_>>,
    ) -> Result<reqwest::Response, ClientError> {
        let endpoint = format!("/{}/{}", service, rpc);
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header("x-request-id", request_id())
            .json(body);

        match credential {
            Some(Credential::Session(sid)) => {
                request = request.header(COOKIE, format!("sid={}", sid));
            }
            Some(Credential::Bearer(token)) => {
                request = request.bearer_auth(token);
            }
            None => {}
        }

        let response = request.send().await?;
        dump_headers(&endpoint, response.headers());

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::UnexpectedStatus {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

/// 32 hex characters from 16 random bytes, same shape the original sends.
fn request_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Pull the `sid` value out of the response `Set-Cookie` headers.
fn extract_sid_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|cookie| cookie.split(';').next())
        .filter_map(|pair| pair.trim().strip_prefix("sid="))
        .map(|sid| sid.to_string())
        .next()
}

fn dump_headers(endpoint: &str, headers: &HeaderMap) {
    for (name, value) in headers {
        tracing::debug!(
            endpoint = %endpoint,
            header = %name,
            value = %value.to_str().unwrap_or("<non-ascii>"),
            "Response header"
        );
    }
}
