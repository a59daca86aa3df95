//! # プロバイダメッセージ
//!
//! メール / SMS プロバイダへ渡すメッセージと、プロバイダが返すエラーを定義する。
//! 具体的な送信は infra 層の `EmailSender` / `SmsSender` 実装が担う。

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::validator::{ValidEmailRequest, ValidSmsRequest};

/// SNS の送信者 ID 属性名
pub const SMS_SENDER_ID_ATTRIBUTE: &str = "AWS.SNS.SMS.SenderID";

/// SNS の SMS 種別属性名
pub const SMS_TYPE_ATTRIBUTE: &str = "AWS.SNS.SMS.SMSType";

/// メッセージ属性の文字列データ型
pub const STRING_DATA_TYPE: &str = "String";

/// プロバイダ呼び出しエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// 指定したテンプレートがプロバイダに存在しない
    #[error("テンプレートが存在しません: {0}")]
    TemplateNotFound(String),

    /// 送信リクエストの組み立てに失敗
    #[error("送信リクエストの構築に失敗: {0}")]
    BuildFailed(String),

    /// 送信に失敗
    #[error("送信に失敗: {0}")]
    SendFailed(String),
}

/// テンプレートメール
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatedEmail {
    /// 送信元アドレス
    pub source:        String,
    /// 送信先アドレス
    pub destinations:  Vec<String>,
    pub template_name: String,
    /// テンプレートデータ（JSON オブジェクト文字列）
    pub template_data: String,
}

impl From<ValidEmailRequest<'_>> for TemplatedEmail {
    fn from(request: ValidEmailRequest<'_>) -> Self {
        Self {
            source:        request.source.to_string(),
            destinations:  vec![request.destination.to_string()],
            template_name: request.template_name.to_string(),
            template_data: template_data(request.characteristics),
        }
    }
}

/// `(name, value)` の列をテンプレートデータの JSON オブジェクトに畳み込む
///
/// 同じ名前が複数あれば後勝ち。
pub fn template_data<'a>(characteristics: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let map: Map<String, Value> = characteristics
        .into_iter()
        .map(|(name, value)| (name.to_string(), Value::String(value.to_string())))
        .collect();
    Value::Object(map).to_string()
}

/// SNS メッセージ属性
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageAttribute {
    pub data_type:    String,
    pub string_value: String,
}

impl MessageAttribute {
    /// 文字列型の属性
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            data_type:    STRING_DATA_TYPE.to_string(),
            string_value: value.into(),
        }
    }
}

/// SMS メッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsMessage {
    pub phone_number: String,
    pub message:      String,
    pub attributes:   BTreeMap<String, MessageAttribute>,
}

impl From<ValidSmsRequest<'_>> for SmsMessage {
    fn from(request: ValidSmsRequest<'_>) -> Self {
        Self {
            phone_number: request.phone_number.to_string(),
            message:      request.message.to_string(),
            attributes:   BTreeMap::from([
                (
                    SMS_SENDER_ID_ATTRIBUTE.to_string(),
                    MessageAttribute::string(request.sender_id),
                ),
                (
                    SMS_TYPE_ATTRIBUTE.to_string(),
                    MessageAttribute::string(request.message_type),
                ),
            ]),
        }
    }
}
