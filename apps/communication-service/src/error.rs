//! # API エラーレスポンス
//!
//! ドメインの [`ApiError`] を HTTP レスポンスへ変換する。
//!
//! ## 設計方針
//!
//! - レスポンスボディは常に `{ "code", "reason" }`（[`ErrorResponse`]）
//! - ステータスは失敗の分類で決まる（400 / 404 / 500）
//! - 5xx はここでまとめて `error` レベルで記録する

use aws_communication_domain::ApiError;
use aws_communication_shared::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// ハンドラ・抽出器・ミドルウェアが共通で返すエラー
#[derive(Debug)]
pub struct AppError(pub ApiError);

impl From<ApiError> for AppError {
    fn from(error: ApiError) -> Self {
        Self(error)
    }
}

impl AppError {
    /// エラーが表す HTTP ステータス
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServer(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let failure = self.0.failure();

        if status.is_server_error() {
            tracing::error!(
                error.category = "internal",
                error.kind = failure.code().code(),
                parameters = ?failure.parameters(),
                "内部エラー: {}",
                self.0
            );
        } else {
            tracing::debug!(
                error.kind = failure.code().code(),
                "リクエストを拒否: {}",
                self.0
            );
        }

        (status, Json::<ErrorResponse>(self.0.to_error_response())).into_response()
    }
}
