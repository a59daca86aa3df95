//! # 送信リクエスト / レスポンス
//!
//! メール送信・SMS 送信 API のリクエストボディとレスポンスボディ。
//!
//! すべてのフィールドは `Option` で受ける。欠落と `null` は区別せず、
//! 必須項目の判定は [`validator`](crate::validator) が行う。

use serde::{Deserialize, Serialize};

/// テンプレートに埋め込む名前と値の組
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunicationCharacteristic {
    pub name:  Option<String>,
    pub value: Option<String>,
}

impl CommunicationCharacteristic {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name:  Some(name.into()),
            value: Some(value.into()),
        }
    }
}

/// 送信者
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sender {
    pub email_address: Option<String>,
    pub phone_number:  Option<String>,
    /// SMS の送信者 ID
    pub sender_id:     Option<String>,
}

/// 受信者
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receiver {
    pub email_address: Option<String>,
    pub phone_number:  Option<String>,
}

/// メール送信リクエスト
///
/// ```json
/// {
///   "templateName": "welcome",
///   "communicationCharacteristics": [{ "name": "user", "value": "Taro" }],
///   "sender": { "emailAddress": "noreply@example.com" },
///   "receiver": { "emailAddress": "taro@example.com" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    pub template_name: Option<String>,
    pub communication_characteristics: Option<Vec<CommunicationCharacteristic>>,
    pub sender: Option<Sender>,
    pub receiver: Option<Receiver>,
}

impl EmailRequest {
    /// テンプレートデータの組（未指定なら空）
    pub fn characteristics(&self) -> &[CommunicationCharacteristic] {
        self.communication_characteristics.as_deref().unwrap_or_default()
    }
}

/// SMS 送信リクエスト
///
/// ```json
/// {
///   "message": "Your code is 1234",
///   "messageType": "Transactional",
///   "sender": { "senderId": "MYAPP" },
///   "receiver": { "phoneNumber": "+819012345678" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsRequest {
    pub message:      Option<String>,
    pub message_type: Option<String>,
    pub sender:       Option<Sender>,
    pub receiver:     Option<Receiver>,
}

/// 送信成功レスポンス
///
/// `message_id` はプロバイダが払い出した不透明な識別子。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationResponse {
    pub message_id: String,
}

impl CommunicationResponse {
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
        }
    }
}
