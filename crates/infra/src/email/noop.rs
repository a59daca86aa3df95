//! Noop メール送信実装
//!
//! メールを実際に送信せず、ログ出力のみ行う。

use async_trait::async_trait;
use aws_communication_domain::provider::{ProviderError, TemplatedEmail};
use uuid::Uuid;

use super::EmailSender;

/// Noop メール送信（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NoopEmailSender;

#[async_trait]
impl EmailSender for NoopEmailSender {
    async fn send_templated_email(&self, email: &TemplatedEmail) -> Result<String, ProviderError> {
        let message_id = Uuid::new_v4().to_string();
        tracing::info!(
            to = ?email.destinations,
            template = %email.template_name,
            message_id = %message_id,
            "Noop: メール送信をスキップ"
        );
        Ok(message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_templated_emailがメッセージidを返す() {
        let sender = NoopEmailSender;
        let email = TemplatedEmail {
            source:        "noreply@example.com".to_string(),
            destinations:  vec!["test@example.com".to_string()],
            template_name: "welcome".to_string(),
            template_data: "{}".to_string(),
        };

        let message_id = sender.send_templated_email(&email).await.unwrap();

        assert!(Uuid::parse_str(&message_id).is_ok());
    }
}
