//! # 送信ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /aws-communication/v1/email/send` - テンプレートメール送信
//! - `POST /aws-communication/v1/sms/send` - SMS 送信
//!
//! 成功時は `200 OK` と `{"messageId": ...}` を返す。
//! 失敗時は [`AppError`] が `{code, reason}` に変換する。

use std::sync::Arc;

use aws_communication_domain::communication::{CommunicationResponse, EmailRequest, SmsRequest};
use axum::{Json, extract::State};

use crate::{error::AppError, extract::JsonBody, usecase::CommunicationUseCaseImpl};

/// 送信 API の共有状態
pub struct CommunicationState {
    pub usecase: CommunicationUseCaseImpl,
}

/// テンプレートメールを送信する
pub async fn send_email(
    State(state): State<Arc<CommunicationState>>,
    JsonBody(request): JsonBody<EmailRequest>,
) -> Result<Json<CommunicationResponse>, AppError> {
    let response = state.usecase.send_email(&request).await?;
    Ok(Json(response))
}

/// SMS を送信する
pub async fn send_sms(
    State(state): State<Arc<CommunicationState>>,
    JsonBody(request): JsonBody<SmsRequest>,
) -> Result<Json<CommunicationResponse>, AppError> {
    let response = state.usecase.send_sms(&request).await?;
    Ok(Json(response))
}
