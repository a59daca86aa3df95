//! SNS SMS 送信実装
//!
//! AWS SNS の `Publish` API で電話番号宛てに SMS を送信する。

use async_trait::async_trait;
use aws_communication_domain::provider::{MessageAttribute, ProviderError, SmsMessage};
use aws_sdk_sns::{Client, error::DisplayErrorContext, types::MessageAttributeValue};

use super::SmsSender;
use crate::aws::{AwsClientConfig, load_sdk_config};

/// SNS クライアントを作成する
pub async fn create_client(config: &AwsClientConfig) -> Client {
    Client::new(&load_sdk_config(config).await)
}

/// SNS SMS 送信
///
/// `aws_sdk_sns::Client` をラップする。
pub struct SnsSmsSender {
    client: Client,
}

impl SnsSmsSender {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn to_attribute_value(attribute: &MessageAttribute) -> Result<MessageAttributeValue, ProviderError> {
    MessageAttributeValue::builder()
        .data_type(&attribute.data_type)
        .string_value(&attribute.string_value)
        .build()
        .map_err(|e| ProviderError::BuildFailed(format!("メッセージ属性構築失敗: {e}")))
}

#[async_trait]
impl SmsSender for SnsSmsSender {
    async fn publish(&self, sms: &SmsMessage) -> Result<String, ProviderError> {
        let mut request = self
            .client
            .publish()
            .phone_number(&sms.phone_number)
            .message(&sms.message);

        for (name, attribute) in &sms.attributes {
            request = request.message_attributes(name, to_attribute_value(attribute)?);
        }

        let output = request.send().await.map_err(|e| {
            ProviderError::SendFailed(format!("SNS 送信失敗: {}", DisplayErrorContext(&e)))
        })?;

        let message_id = output
            .message_id()
            .ok_or_else(|| ProviderError::SendFailed("SNS が MessageId を返しませんでした".to_string()))?;

        tracing::info!(message_id = %message_id, "SNS: SMS を発行しました");

        Ok(message_id.to_string())
    }
}
