//! # 送信ユースケース
//!
//! メール / SMS 送信要求を検証し、プロバイダへ送信する。
//!
//! プロバイダの失敗は次のように分類する:
//!
//! - メール: テンプレート不在 → `DATA_NOT_FOUND`（`["Template", テンプレート名]`）、
//!   それ以外 → `INTERNAL_SERVER_ERROR`
//! - SMS: すべて `INTERNAL_SERVER_ERROR`

use std::sync::Arc;

use aws_communication_domain::{
    ApiError,
    communication::{CommunicationResponse, EmailRequest, SmsRequest},
    provider::{ProviderError, SmsMessage, TemplatedEmail},
    validator::{validate_email_request, validate_sms_request},
};
use aws_communication_infra::{EmailSender, SmsSender};

/// テンプレート不在時に `DATA_NOT_FOUND` へ埋め込むエンティティ名
const TEMPLATE_ENTITY: &str = "Template";

/// 送信ユースケース
pub struct CommunicationUseCaseImpl {
    email_sender: Arc<dyn EmailSender>,
    sms_sender:   Arc<dyn SmsSender>,
}

impl CommunicationUseCaseImpl {
    pub fn new(email_sender: Arc<dyn EmailSender>, sms_sender: Arc<dyn SmsSender>) -> Self {
        Self {
            email_sender,
            sms_sender,
        }
    }

    /// テンプレートメールを送信する
    ///
    /// 1. 必須フィールドを検証（最初の欠落で失敗）
    /// 2. コミュニケーション特性をテンプレートデータに畳み込む
    /// 3. プロバイダへ送信し、メッセージ ID を返す
    #[tracing::instrument(skip_all, fields(template = request.template_name.as_deref()))]
    pub async fn send_email(&self, request: &EmailRequest) -> Result<CommunicationResponse, ApiError> {
        tracing::debug!("メール送信要求を受け付けました");
        let email = TemplatedEmail::from(validate_email_request(request)?);

        match self.email_sender.send_templated_email(&email).await {
            Ok(message_id) => {
                tracing::info!(message_id = %message_id, "メールを送信しました");
                Ok(CommunicationResponse::new(message_id))
            }
            Err(ProviderError::TemplateNotFound(template_name)) => {
                tracing::warn!(template = %template_name, "テンプレートが存在しません");
                Err(ApiError::data_not_found(TEMPLATE_ENTITY, template_name))
            }
            Err(e) => Err(ApiError::internal(e.to_string())),
        }
    }

    /// SMS を送信する
    ///
    /// 送信者 ID と SMS 種別はメッセージ属性として渡す。
    #[tracing::instrument(skip_all)]
    pub async fn send_sms(&self, request: &SmsRequest) -> Result<CommunicationResponse, ApiError> {
        tracing::debug!("SMS 送信要求を受け付けました");
        let message = SmsMessage::from(validate_sms_request(request)?);

        let message_id = self
            .sms_sender
            .publish(&message)
            .await
            .map_err(|e| ApiError::internal(e.to_string()))?;

        tracing::info!(message_id = %message_id, "SMS を送信しました");
        Ok(CommunicationResponse::new(message_id))
    }
}
