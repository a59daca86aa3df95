//! # パニック捕捉
//!
//! `CatchPanicLayer::custom` に渡すハンドラ。ハンドラ内のパニックを
//! `INTERNAL_SERVER_ERROR` レスポンスに変換する。

use std::any::Any;

use aws_communication_domain::ApiError;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// パニックのペイロードを 500 レスポンスに変換する
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    };

    AppError(ApiError::internal(message)).into_response()
}
