use serde::Deserialize;
use serde::Serialize;

/// Body for `FrontierService/Authenticate`.
///
/// `return_to` and `callback_url` are sent exactly as the original script
/// sends them; the mailotp strategy ignores both for a non-redirect start.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AuthenticateRequest {
    pub strategy_name: String,
    pub redirect_onstart: bool,
    pub return_to: String,
    pub email: String,
    pub callback_url: String,
}

impl AuthenticateRequest {
    pub fn mail_otp(email: impl Into<String>, strategy: impl Into<String>) -> Self {
        Self {
            strategy_name: strategy.into(),
            redirect_onstart: false,
            return_to: "<string>".to_string(),
            email: email.into(),
            callback_url: "localhost:8002".to_string(),
        }
    }
}

/// Body for `FrontierService/AuthCallback`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AuthCallbackRequest {
    pub strategy_name: String,
    pub code: String,
    pub state: String,
}

/// Body for `AdminService/ListAllUsers`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ListUsersRequest {
    pub page_size: i32,
    pub page_number: i32,
}

impl Default for ListUsersRequest {
    fn default() -> Self {
        Self {
            page_size: 10,
            page_number: 1,
        }
    }
}

/// Body for `FrontierService/GetOrganization`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GetOrganizationRequest {
    pub id: String,
}

/// Response of `FrontierService/AuthToken`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AuthTokenResponse {
    #[serde(rename = "accessToken", default)]
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_request_serializes_original_fields() {
        let request = AuthenticateRequest::mail_otp("smoke@example.com", "mailotp");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["strategy_name"], "mailotp");
        assert_eq!(value["redirect_onstart"], false);
        assert_eq!(value["return_to"], "<string>");
        assert_eq!(value["email"], "smoke@example.com");
        assert_eq!(value["callback_url"], "localhost:8002");
    }

    #[test]
    fn test_list_users_defaults() {
        let request = ListUsersRequest::default();
        assert_eq!(request.page_size, 10);
        assert_eq!(request.page_number, 1);
    }

    #[test]
    fn test_auth_token_response_field_name() {
        let response: AuthTokenResponse =
            serde_json::from_str(r#"{"accessToken":"tok-1"}"#).unwrap();
        assert_eq!(response.access_token, "tok-1");
    }

    #[test]
    fn test_auth_token_response_missing_field_defaults_empty() {
        let response: AuthTokenResponse = serde_json::from_str("{}").unwrap();
        assert!(response.access_token.is_empty());
    }
}
