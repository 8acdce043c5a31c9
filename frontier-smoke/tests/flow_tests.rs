mod common;

use std::sync::Arc;

use common::StaticOtpSource;
use common::TestApp;
use common::TEST_ACCESS_TOKEN;
use common::TEST_EMAIL;
use common::TEST_NONCE;
use common::TEST_SID;
use common::TEST_STATE;
use frontier_smoke::client::ClientError;
use frontier_smoke::client::Credential;
use frontier_smoke::flow::FlowError;
use frontier_smoke::ApiClient;
use frontier_smoke::SmokeFlow;

#[tokio::test]
async fn test_full_flow_completes() {
    let app = TestApp::spawn().await;

    let flow = SmokeFlow::new(
        ApiClient::new(&app.address),
        Arc::new(StaticOtpSource {
            nonce: Some(TEST_NONCE.to_string()),
        }),
        app.login_config(),
        app.service_account_config(),
    );

    flow.run().await.expect("Flow should complete");

    assert_eq!(
        app.state.calls(),
        vec![
            "Authenticate",
            "AuthCallback",
            "AuthToken",
            "ListAllUsers",
            "ListAllUsers",
            "GetOrganization",
            "AuthLogout",
        ]
    );
}

#[tokio::test]
async fn test_flow_aborts_when_nonce_is_missing() {
    let app = TestApp::spawn().await;

    let flow = SmokeFlow::new(
        ApiClient::new(&app.address),
        Arc::new(StaticOtpSource { nonce: None }),
        app.login_config(),
        app.service_account_config(),
    );

    let result = flow.run().await;

    assert!(matches!(result, Err(FlowError::Otp(_))));
    // Nothing after the Authenticate call should have run
    assert_eq!(app.state.calls(), vec!["Authenticate"]);
}

#[tokio::test]
async fn test_flow_aborts_on_invalid_private_key() {
    let app = TestApp::spawn().await;

    let mut service_account = app.service_account_config();
    service_account.private_key = "not a pem".to_string();

    let flow = SmokeFlow::new(
        ApiClient::new(&app.address),
        Arc::new(StaticOtpSource {
            nonce: Some(TEST_NONCE.to_string()),
        }),
        app.login_config(),
        service_account,
    );

    let result = flow.run().await;

    assert!(matches!(result, Err(FlowError::Token(_))));
    // The cookie-authenticated steps completed before minting failed
    assert!(app
        .state
        .calls()
        .iter()
        .any(|rpc| rpc == "ListAllUsers"));
    assert!(!app.state.calls().iter().any(|rpc| rpc == "GetOrganization"));
}

#[tokio::test]
async fn test_begin_login_extracts_state() {
    let app = TestApp::spawn().await;
    let client = ApiClient::new(&app.address);

    let start = client
        .begin_login(TEST_EMAIL, "mailotp")
        .await
        .expect("Authenticate should succeed");

    assert_eq!(start.state, TEST_STATE);
    assert_eq!(start.raw["state"], TEST_STATE);
}

#[tokio::test]
async fn test_begin_login_rejects_unknown_strategy() {
    let app = TestApp::spawn().await;
    let client = ApiClient::new(&app.address);

    let result = client.begin_login(TEST_EMAIL, "passkey").await;

    assert!(matches!(
        result,
        Err(ClientError::UnexpectedStatus { status: 400, .. })
    ));
}

#[tokio::test]
async fn test_complete_login_extracts_sid_cookie() {
    let app = TestApp::spawn().await;
    let client = ApiClient::new(&app.address);

    let session = client
        .complete_login("mailotp", TEST_NONCE, TEST_STATE)
        .await
        .expect("AuthCallback should succeed");

    assert_eq!(session.sid, TEST_SID);
}

#[tokio::test]
async fn test_complete_login_rejects_wrong_code() {
    let app = TestApp::spawn().await;
    let client = ApiClient::new(&app.address);

    let result = client.complete_login("mailotp", "000000", TEST_STATE).await;

    assert!(matches!(
        result,
        Err(ClientError::UnexpectedStatus { status: 401, .. })
    ));
}

#[tokio::test]
async fn test_issue_token_requires_session() {
    let app = TestApp::spawn().await;
    let client = ApiClient::new(&app.address);

    let session = client
        .complete_login("mailotp", TEST_NONCE, TEST_STATE)
        .await
        .expect("AuthCallback should succeed");

    let token = client
        .issue_token(&session)
        .await
        .expect("AuthToken should succeed");
    assert_eq!(token, TEST_ACCESS_TOKEN);

    let bogus = frontier_smoke::client::Session {
        sid: "wrong".to_string(),
    };
    let result = client.issue_token(&bogus).await;
    assert!(matches!(
        result,
        Err(ClientError::UnexpectedStatus { status: 401, .. })
    ));
}

#[tokio::test]
async fn test_list_users_accepts_both_credentials() {
    let app = TestApp::spawn().await;
    let client = ApiClient::new(&app.address);

    let with_cookie = client
        .list_users(Credential::Session(TEST_SID))
        .await
        .expect("Cookie call should succeed");
    let with_token = client
        .list_users(Credential::Bearer(TEST_ACCESS_TOKEN))
        .await
        .expect("Bearer call should succeed");

    assert_eq!(with_cookie["count"], 1);
    assert_eq!(with_cookie, with_token);
}

#[tokio::test]
async fn test_list_users_rejects_bad_token() {
    let app = TestApp::spawn().await;
    let client = ApiClient::new(&app.address);

    let result = client.list_users(Credential::Bearer("bad-token")).await;

    assert!(matches!(
        result,
        Err(ClientError::UnexpectedStatus { status: 401, .. })
    ));
}

#[tokio::test]
async fn test_get_organization_with_minted_service_token() {
    let app = TestApp::spawn().await;
    let client = ApiClient::new(&app.address);

    let service_account = app.service_account_config();
    let credential = service_account.credential();
    let signer = auth::TokenSigner::from_credential(&credential).expect("Failed to build signer");
    let claims = auth::ServiceClaims::for_principal(
        &service_account.issuer,
        &credential.principal_id,
        service_account.validity_hours,
    );
    let token = signer.sign(&claims).expect("Failed to sign token");

    let organization = client
        .get_organization(&service_account.organization_id, Credential::Bearer(&token))
        .await
        .expect("GetOrganization should succeed");

    assert_eq!(
        organization["organization"]["id"],
        service_account.organization_id
    );
}

#[tokio::test]
async fn test_logout_requires_session() {
    let app = TestApp::spawn().await;
    let client = ApiClient::new(&app.address);

    let session = client
        .complete_login("mailotp", TEST_NONCE, TEST_STATE)
        .await
        .expect("AuthCallback should succeed");

    client.logout(&session).await.expect("Logout should succeed");

    let bogus = frontier_smoke::client::Session {
        sid: "wrong".to_string(),
    };
    let result = client.logout(&bogus).await;
    assert!(matches!(
        result,
        Err(ClientError::UnexpectedStatus { status: 401, .. })
    ));
}
