//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - `code` はステータスコードカタログの安定したコード（例: `"400001"`）
//! - `reason` はプレースホルダ置換済みの理由文
//! - axum の `IntoResponse` 変換はサービス側の責務（shared に axum 依存を入れない）

use serde::{Deserialize, Serialize};

/// エラーレスポンス
///
/// ```json
/// { "code": "400001", "reason": "Missing mandatory parameter: templateName" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code:   String,
    pub reason: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code:   code.into(),
            reason: reason.into(),
        }
    }
}
