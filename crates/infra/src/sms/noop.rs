//! Noop SMS 送信実装
//!
//! SMS を実際に送信せず、ログ出力のみ行う。

use async_trait::async_trait;
use aws_communication_domain::provider::{ProviderError, SmsMessage};
use uuid::Uuid;

use super::SmsSender;

/// Noop SMS 送信（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NoopSmsSender;

#[async_trait]
impl SmsSender for NoopSmsSender {
    async fn publish(&self, sms: &SmsMessage) -> Result<String, ProviderError> {
        let message_id = Uuid::new_v4().to_string();
        tracing::info!(
            phone_number = %sms.phone_number,
            message_id = %message_id,
            "Noop: SMS 送信をスキップ"
        );
        Ok(message_id)
    }
}
