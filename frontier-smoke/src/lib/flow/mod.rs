pub mod errors;

pub use errors::FlowError;

use std::sync::Arc;

use auth::ServiceClaims;
use auth::TokenSigner;

use crate::client::ApiClient;
use crate::client::ClientError;
use crate::client::Credential;
use crate::config::LoginConfig;
use crate::config::ServiceAccountConfig;
use crate::console;
use crate::otp::OtpSource;

/// The end-to-end smoke sequence against a running deployment.
///
/// Strictly linear: each step extracts a value and feeds it into the
/// next. The first failing step aborts the run.
pub struct SmokeFlow {
    api: ApiClient,
    otp: Arc<dyn OtpSource>,
    login: LoginConfig,
    service_account: ServiceAccountConfig,
}

impl SmokeFlow {
    pub fn new(
        api: ApiClient,
        otp: Arc<dyn OtpSource>,
        login: LoginConfig,
        service_account: ServiceAccountConfig,
    ) -> Self {
        Self {
            api,
            otp,
            login,
            service_account,
        }
    }

    pub async fn run(&self) -> Result<(), FlowError> {
        let email = &self.login.email;
        let strategy = &self.login.strategy;

        console::banner(&format!(
            "Starting authentication flow for email: {}",
            email
        ));

        // Step 1: Initial authentication request
        console::step("Step 1: Making initial authentication request...");
        console::info("Endpoint: /raystack.frontier.v1beta1.FrontierService/Authenticate");

        let start = self
            .api
            .begin_login(email, strategy)
            .await
            .map_err(|e| step_failed("Authenticate", e))?;
        console::data(&format!("Authentication response: {}", start.raw));
        console::success(&format!("Extracted state: {}", start.state));

        // Step 2: Query database for nonce
        console::step("Step 2: Querying database for nonce...");
        console::info(&format!(
            "Database: SELECT nonce FROM flows WHERE email='{}'",
            email
        ));

        let nonce = self.otp.nonce_for_email(email).await?;
        console::success(&format!("Retrieved nonce: {}", nonce));

        // Step 3: Authentication callback
        console::step("Step 3: Making authentication callback...");
        console::info("Endpoint: /raystack.frontier.v1beta1.FrontierService/AuthCallback");

        let session = self
            .api
            .complete_login(strategy, &nonce, &start.state)
            .await
            .map_err(|e| step_failed("AuthCallback", e))?;
        console::success("Authentication callback completed successfully!");
        console::success(&format!("Extracted sid cookie: {}", session.sid));

        // Step 4: Get auth token using the cookie
        console::step("Step 4: Getting auth token...");
        console::info("Endpoint: /raystack.frontier.v1beta1.FrontierService/AuthToken");

        let access_token = self
            .api
            .issue_token(&session)
            .await
            .map_err(|e| step_failed("AuthToken", e))?;
        console::success("Retrieved auth token successfully!");

        // Step 5: List users with the bearer token
        console::step("Step 5: Making API call to list all users with bearer token...");
        console::info("Endpoint: /raystack.frontier.v1beta1.AdminService/ListAllUsers");

        let users_with_token = self
            .api
            .list_users(Credential::Bearer(&access_token))
            .await
            .map_err(|e| step_failed("ListAllUsers (bearer)", e))?;

        // Step 6: Same call with the cookie, for comparison
        console::step("Step 6: Making API call to list all users with cookie...");
        console::info("Endpoint: /raystack.frontier.v1beta1.AdminService/ListAllUsers");

        let users_with_cookie = self
            .api
            .list_users(Credential::Session(&session.sid))
            .await
            .map_err(|e| step_failed("ListAllUsers (cookie)", e))?;

        console::success("User API calls completed successfully!");
        console::data(&format!("Users response (with token): {}", users_with_token));
        console::data(&format!(
            "Users response (with cookie): {}",
            users_with_cookie
        ));

        // Step 7: Mint a service-account token and fetch an organization
        console::banner("Starting authentication flow for service account: API Test");

        let service_token = self.mint_service_token()?;

        console::step("Step 7: Getting org using Access token of service user...");
        console::info("Endpoint: /raystack.frontier.v1beta1.FrontierService/GetOrganization");

        let organization = self
            .api
            .get_organization(
                &self.service_account.organization_id,
                Credential::Bearer(&service_token),
            )
            .await
            .map_err(|e| step_failed("GetOrganization", e))?;
        console::success("Svc User API calls completed successfully!");
        console::data(&format!("Svc User response (with token): {}", organization));

        // Step 8: Logout
        console::step("Step 8: Logging out user...");
        console::info("Endpoint: /raystack.frontier.v1beta1.FrontierService/AuthLogout");

        self.api
            .logout(&session)
            .await
            .map_err(|e| step_failed("AuthLogout", e))?;
        console::success("Logged out successfully!");

        Ok(())
    }

    fn mint_service_token(&self) -> Result<String, FlowError> {
        let credential = self.service_account.credential();
        let signer = TokenSigner::from_credential(&credential)?;
        let claims = ServiceClaims::for_principal(
            &self.service_account.issuer,
            &credential.principal_id,
            self.service_account.validity_hours,
        );
        Ok(signer.sign(&claims)?)
    }
}

fn step_failed(step: &'static str, source: ClientError) -> FlowError {
    FlowError::Api { step, source }
}
