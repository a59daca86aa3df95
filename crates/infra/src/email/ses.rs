//! SES メール送信実装
//!
//! AWS SES v2 API の `SendEmail`（テンプレートコンテンツ）でメールを送信する。

use async_trait::async_trait;
use aws_communication_domain::provider::{ProviderError, TemplatedEmail};
use aws_sdk_sesv2::{
    Client,
    error::DisplayErrorContext,
    operation::send_email::SendEmailError,
    types::{Destination, EmailContent, Template},
};

use super::EmailSender;
use crate::aws::{AwsClientConfig, load_sdk_config};

/// SES クライアントを作成する
pub async fn create_client(config: &AwsClientConfig) -> Client {
    Client::new(&load_sdk_config(config).await)
}

/// SES メール送信
///
/// `aws_sdk_sesv2::Client` をラップする。
pub struct SesEmailSender {
    client: Client,
}

impl SesEmailSender {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// テンプレート未存在を示すサービスエラーか
fn is_template_not_found(error: &SendEmailError) -> bool {
    error.is_not_found_exception()
}

#[async_trait]
impl EmailSender for SesEmailSender {
    async fn send_templated_email(&self, email: &TemplatedEmail) -> Result<String, ProviderError> {
        let destination = Destination::builder()
            .set_to_addresses(Some(email.destinations.clone()))
            .build();

        let content = EmailContent::builder()
            .template(
                Template::builder()
                    .template_name(&email.template_name)
                    .template_data(&email.template_data)
                    .build(),
            )
            .build();

        let output = self
            .client
            .send_email()
            .from_email_address(&email.source)
            .destination(destination)
            .content(content)
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error().is_some_and(is_template_not_found) {
                    ProviderError::TemplateNotFound(email.template_name.clone())
                } else {
                    ProviderError::SendFailed(format!("SES 送信失敗: {}", DisplayErrorContext(&e)))
                }
            })?;

        let message_id = output
            .message_id()
            .ok_or_else(|| ProviderError::SendFailed("SES が MessageId を返しませんでした".to_string()))?;

        tracing::info!(
            message_id = %message_id,
            template = %email.template_name,
            "SES: テンプレートメールを送信しました"
        );

        Ok(message_id.to_string())
    }
}
