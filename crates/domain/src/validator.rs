//! # リクエスト検証
//!
//! 送信リクエストの必須項目を固定順で検証する。
//!
//! ## 検証順序
//!
//! - メール: `templateName` → `sender` → `receiver` → `sender.emailAddress`
//!   → `receiver.emailAddress` → 各 characteristic の `name` → `value`
//! - SMS: `message` → `messageType` → `sender` → `receiver` → `sender.senderId`
//!   → `receiver.phoneNumber`
//!
//! 最初の違反で `MISSING_MANDATORY_PARAM` を返し、違反の集約はしない。
//! 「空」は未指定・空文字・空白のみを指す。
//!
//! 検証を通過したリクエストは、必須項目を `&str` で持つビューとして返す。

use crate::{
    communication::{EmailRequest, SmsRequest},
    error::ApiError,
};

/// 検証済みメール送信リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEmailRequest<'a> {
    pub template_name:   &'a str,
    /// 送信元（`sender.emailAddress`）
    pub source:          &'a str,
    /// 送信先（`receiver.emailAddress`）
    pub destination:     &'a str,
    /// リスト順の `(name, value)`
    pub characteristics: Vec<(&'a str, &'a str)>,
}

/// 検証済み SMS 送信リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSmsRequest<'a> {
    pub message:      &'a str,
    pub message_type: &'a str,
    pub sender_id:    &'a str,
    pub phone_number: &'a str,
}

/// メール送信リクエストを検証する
pub fn validate_email_request(request: &EmailRequest) -> Result<ValidEmailRequest<'_>, ApiError> {
    let template_name = require(request.template_name.as_deref(), "templateName")?;
    let sender = request
        .sender
        .as_ref()
        .ok_or_else(|| ApiError::missing_mandatory_param("sender"))?;
    let receiver = request
        .receiver
        .as_ref()
        .ok_or_else(|| ApiError::missing_mandatory_param("receiver"))?;
    let source = require(sender.email_address.as_deref(), "sender.emailAddress")?;
    let destination = require(receiver.email_address.as_deref(), "receiver.emailAddress")?;

    let characteristics = request
        .characteristics()
        .iter()
        .map(|characteristic| {
            let name = require(characteristic.name.as_deref(), "name")?;
            let value = require(characteristic.value.as_deref(), "value")?;
            Ok((name, value))
        })
        .collect::<Result<Vec<_>, ApiError>>()?;

    Ok(ValidEmailRequest {
        template_name,
        source,
        destination,
        characteristics,
    })
}

/// SMS 送信リクエストを検証する
pub fn validate_sms_request(request: &SmsRequest) -> Result<ValidSmsRequest<'_>, ApiError> {
    let message = require(request.message.as_deref(), "message")?;
    let message_type = require(request.message_type.as_deref(), "messageType")?;
    let sender = request
        .sender
        .as_ref()
        .ok_or_else(|| ApiError::missing_mandatory_param("sender"))?;
    let receiver = request
        .receiver
        .as_ref()
        .ok_or_else(|| ApiError::missing_mandatory_param("receiver"))?;
    let sender_id = require(sender.sender_id.as_deref(), "sender.senderId")?;
    let phone_number = require(receiver.phone_number.as_deref(), "receiver.phoneNumber")?;

    Ok(ValidSmsRequest {
        message,
        message_type,
        sender_id,
        phone_number,
    })
}

/// 値が空でないことを確認する
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

fn require<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, ApiError> {
    match value {
        Some(v) if !is_blank(Some(v)) => Ok(v),
        _ => Err(ApiError::missing_mandatory_param(name)),
    }
}
