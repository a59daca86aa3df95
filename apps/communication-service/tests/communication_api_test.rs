//! # 送信 API の結合テスト
//!
//! `build_app` が組み立てたルーター全体（事前検査・ボディ抽出・ユースケース・
//! エラーレスポンス変換）をモック送信実装で検証する。

use std::sync::Arc;

use async_trait::async_trait;
use aws_communication_domain::provider::{
    ProviderError,
    SMS_SENDER_ID_ATTRIBUTE,
    SMS_TYPE_ATTRIBUTE,
    TemplatedEmail,
};
use aws_communication_infra::{
    EmailSender,
    mock::{MockEmailSender, MockSmsSender},
};
use aws_communication_service::app_builder::{EMAIL_SEND_PATH, SMS_SEND_PATH, build_app};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::CONTENT_TYPE},
    response::Response,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

// --- テストヘルパー ---

fn test_app(email: &MockEmailSender, sms: &MockSmsSender) -> Router {
    build_app(Arc::new(email.clone()), Arc::new(sms.clone()))
}

fn post_json(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

async fn parse_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn email_body() -> Value {
    json!({
        "templateName": "welcome",
        "communicationCharacteristics": [
            { "name": "firstName", "value": "Hanako" },
            { "name": "plan", "value": "gold" }
        ],
        "sender": { "emailAddress": "noreply@example.com" },
        "receiver": { "emailAddress": "hanako@example.com" }
    })
}

fn sms_body() -> Value {
    json!({
        "message": "Your code is 123456",
        "messageType": "Transactional",
        "sender": { "senderId": "ACME" },
        "receiver": { "phoneNumber": "+819012345678" }
    })
}

// --- メール送信 ---

#[tokio::test]
async fn test_メール送信が成功するとメッセージidを返す() {
    let email = MockEmailSender::new().with_templates(["welcome"]);
    let sms = MockSmsSender::new();

    let response = test_app(&email, &sms)
        .oneshot(post_json(EMAIL_SEND_PATH, email_body().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_body(response).await, json!({ "messageId": "mock-email-1" }));

    let sent = email.sent_emails();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].destinations, vec!["hanako@example.com".to_string()]);
    let data: Value = serde_json::from_str(&sent[0].template_data).unwrap();
    assert_eq!(data, json!({ "firstName": "Hanako", "plan": "gold" }));
}

#[tokio::test]
async fn test_未知のテンプレートは404を返す() {
    let email = MockEmailSender::new().with_templates(["other"]);
    let sms = MockSmsSender::new();

    let response = test_app(&email, &sms)
        .oneshot(post_json(EMAIL_SEND_PATH, email_body().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        parse_body(response).await,
        json!({
            "code": "404001",
            "reason": "Template not found for given input: welcome"
        })
    );
}

#[rstest]
#[case("/templateName", "templateName")]
#[case("/sender/emailAddress", "sender.emailAddress")]
#[case("/receiver", "receiver")]
#[case("/receiver/emailAddress", "receiver.emailAddress")]
#[tokio::test]
async fn test_必須フィールドの欠落は400を返す(#[case] pointer: &str, #[case] field: &str) {
    let email = MockEmailSender::new();
    let sms = MockSmsSender::new();
    let mut body = email_body();
    *body.pointer_mut(pointer).unwrap() = Value::Null;

    let response = test_app(&email, &sms)
        .oneshot(post_json(EMAIL_SEND_PATH, body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        parse_body(response).await,
        json!({
            "code": "400001",
            "reason": format!("Missing mandatory parameter: {field}")
        })
    );
    assert!(email.sent_emails().is_empty());
}

#[tokio::test]
async fn test_コミュニケーション特性の欠落は添字付きで報告する() {
    let email = MockEmailSender::new();
    let sms = MockSmsSender::new();
    let mut body = email_body();
    body["communicationCharacteristics"][1]["value"] = json!("  ");

    let response = test_app(&email, &sms)
        .oneshot(post_json(EMAIL_SEND_PATH, body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(response).await;
    assert_eq!(body["code"], "400001");
    assert_eq!(body["reason"], "Missing mandatory parameter: value");
}

#[tokio::test]
async fn test_メール送信失敗は500を返す() {
    let email = MockEmailSender::new();
    email.fail_with(ProviderError::SendFailed("throttled".to_string()));
    let sms = MockSmsSender::new();

    let response = test_app(&email, &sms)
        .oneshot(post_json(EMAIL_SEND_PATH, email_body().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        parse_body(response).await,
        json!({
            "code": "500001",
            "reason": "Service encountered an unexpected condition"
        })
    );
}

// --- SMS 送信 ---

#[tokio::test]
async fn test_sms送信が成功するとメッセージidを返す() {
    let email = MockEmailSender::new();
    let sms = MockSmsSender::new();

    let response = test_app(&email, &sms)
        .oneshot(post_json(SMS_SEND_PATH, sms_body().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_body(response).await, json!({ "messageId": "mock-sms-1" }));

    let sent = sms.sent_messages();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].phone_number, "+819012345678");
    let sender_id = &sent[0].attributes[SMS_SENDER_ID_ATTRIBUTE];
    assert_eq!(sender_id.data_type, "String");
    assert_eq!(sender_id.string_value, "ACME");
    assert_eq!(sent[0].attributes[SMS_TYPE_ATTRIBUTE].string_value, "Transactional");
}

#[rstest]
#[case("/message", "message")]
#[case("/messageType", "messageType")]
#[case("/sender/senderId", "sender.senderId")]
#[case("/receiver/phoneNumber", "receiver.phoneNumber")]
#[tokio::test]
async fn test_sms必須フィールドの欠落は400を返す(#[case] pointer: &str, #[case] field: &str) {
    let email = MockEmailSender::new();
    let sms = MockSmsSender::new();
    let mut body = sms_body();
    *body.pointer_mut(pointer).unwrap() = json!("");

    let response = test_app(&email, &sms)
        .oneshot(post_json(SMS_SEND_PATH, body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(response).await;
    assert_eq!(body["reason"], format!("Missing mandatory parameter: {field}"));
    assert!(sms.sent_messages().is_empty());
}

#[tokio::test]
async fn test_sms送信失敗は500を返す() {
    let email = MockEmailSender::new();
    let sms = MockSmsSender::new();
    sms.fail_with(ProviderError::SendFailed("opted out".to_string()));

    let response = test_app(&email, &sms)
        .oneshot(post_json(SMS_SEND_PATH, sms_body().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(parse_body(response).await["code"], "500001");
}

// --- ボディ・パラメータのエラー ---

#[tokio::test]
async fn test_不正なjsonは400_invalid_json_requestを返す() {
    let email = MockEmailSender::new();
    let sms = MockSmsSender::new();

    let response = test_app(&email, &sms)
        .oneshot(post_json(EMAIL_SEND_PATH, r#"{"templateName": "welcome","#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        parse_body(response).await,
        json!({ "code": "400003", "reason": "Invalid JSON Request" })
    );
}

#[tokio::test]
async fn test_型の不一致はフィールドパス付きで400を返す() {
    let email = MockEmailSender::new();
    let sms = MockSmsSender::new();
    let mut body = email_body();
    body["communicationCharacteristics"][0]["name"] = json!(7);

    let response = test_app(&email, &sms)
        .oneshot(post_json(EMAIL_SEND_PATH, body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        parse_body(response).await,
        json!({
            "code": "400004",
            "reason": "Invalid data format provided in JSON request for communicationCharacteristics.[0].name"
        })
    );
}

#[tokio::test]
async fn test_空のボディは400_unable_to_readを返す() {
    let email = MockEmailSender::new();
    let sms = MockSmsSender::new();

    let response = test_app(&email, &sms)
        .oneshot(post_json(SMS_SEND_PATH, ""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        parse_body(response).await,
        json!({ "code": "400005", "reason": "Unable to parse the request body" })
    );
}

#[rstest]
#[case("null")]
#[case("[]")]
#[case(r#""welcome""#)]
#[tokio::test]
async fn test_ルート値の型違いは400_unable_to_readを返す(#[case] body: &str) {
    let email = MockEmailSender::new();
    let sms = MockSmsSender::new();

    let response = test_app(&email, &sms)
        .oneshot(post_json(EMAIL_SEND_PATH, body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        parse_body(response).await,
        json!({ "code": "400005", "reason": "Unable to parse the request body" })
    );
    assert!(email.sent_emails().is_empty());
}

#[tokio::test]
async fn test_ネストした値の型違いはフィールド名を報告する() {
    let email = MockEmailSender::new();
    let sms = MockSmsSender::new();
    let body = json!({ "templateName": "welcome", "communicationCharacteristics": { "a": 1 } });

    let response = test_app(&email, &sms)
        .oneshot(post_json(EMAIL_SEND_PATH, body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        parse_body(response).await["reason"],
        "Invalid data format provided in JSON request for communicationCharacteristics"
    );
}

#[tokio::test]
async fn test_content_type欠落は必須パラメータエラー() {
    let email = MockEmailSender::new();
    let sms = MockSmsSender::new();
    let request = Request::builder()
        .method("POST")
        .uri(EMAIL_SEND_PATH)
        .body(Body::from(email_body().to_string()))
        .unwrap();

    let response = test_app(&email, &sms).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        parse_body(response).await,
        json!({ "code": "400001", "reason": "Missing mandatory parameter: Content-Type" })
    );
}

#[tokio::test]
async fn test_json以外のcontent_typeは400_unable_to_readを返す() {
    let email = MockEmailSender::new();
    let sms = MockSmsSender::new();
    let request = Request::builder()
        .method("POST")
        .uri(EMAIL_SEND_PATH)
        .header(CONTENT_TYPE, "text/plain")
        .body(Body::from(email_body().to_string()))
        .unwrap();

    let response = test_app(&email, &sms).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(response).await["code"], "400005");
}

#[tokio::test]
async fn test_未知のパスは404で事前検査されない() {
    let email = MockEmailSender::new();
    let sms = MockSmsSender::new();
    let request = Request::builder()
        .uri("/aws-communication/v1/fax/send")
        .body(Body::empty())
        .unwrap();

    let response = test_app(&email, &sms).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// --- パニック ---

/// 送信時にパニックするメール送信
struct PanickingEmailSender;

#[async_trait]
impl EmailSender for PanickingEmailSender {
    async fn send_templated_email(&self, _email: &TemplatedEmail) -> Result<String, ProviderError> {
        panic!("unexpected provider state");
    }
}

#[tokio::test]
async fn test_ハンドラ内のパニックは500を返す() {
    let app = build_app(Arc::new(PanickingEmailSender), Arc::new(MockSmsSender::new()));

    let response = app
        .oneshot(post_json(EMAIL_SEND_PATH, email_body().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(
        parse_body(response).await,
        json!({
            "code": "500001",
            "reason": "Service encountered an unexpected condition"
        })
    );
}

// --- ヘルスチェック ---

#[tokio::test]
async fn test_ヘルスチェックはhealthyを返す() {
    let email = MockEmailSender::new();
    let sms = MockSmsSender::new();
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let response = test_app(&email, &sms).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_body(response).await["status"], "healthy");
}
