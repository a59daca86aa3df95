//! # JSON ボディ抽出
//!
//! `axum::Json` の代わりに使うボディ抽出器。ボディ読み取りの失敗を
//! `{code, reason}` 形式のエラーへ正規化する。
//!
//! | 失敗 | エラーコード |
//! |------|-------------|
//! | Content-Type が JSON でない、ボディが空、読み取り失敗 | `UNABLE_TO_READ_REQUEST_BODY` |
//! | JSON 構文エラー、途中で終端 | `INVALID_JSON_REQUEST` |
//! | 型の不一致 | `INVALID_DATA_FORMAT_JSON`（フィールドパス付き） |

use aws_communication_domain::ApiError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header::CONTENT_TYPE},
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_path_to_error::{Path, Segment};

use crate::error::AppError;

/// 正規化されたエラーを返す JSON ボディ抽出器
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            tracing::debug!("Content-Type が JSON ではありません");
            return Err(ApiError::unable_to_read_request_body().into());
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection, "リクエストボディの読み取りに失敗");
            ApiError::unable_to_read_request_body()
        })?;

        Ok(Self(parse_json_body(&bytes)?))
    }
}

/// `application/json` または `application/*+json` なら真
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    let Some((kind, subtype)) = essence.split_once('/') else {
        return false;
    };

    kind.eq_ignore_ascii_case("application")
        && (subtype.eq_ignore_ascii_case("json") || subtype.to_ascii_lowercase().ends_with("+json"))
}

/// ボディのバイト列をデシリアライズする
///
/// 末尾に余分な文字がある場合も構文エラーとして扱う。
pub fn parse_json_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::unable_to_read_request_body());
    }

    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| classify(e.inner(), Some(e.path())))?;
    deserializer.end().map_err(|e| classify(&e, None))?;

    Ok(value)
}

fn classify(error: &serde_json::Error, path: Option<&Path>) -> ApiError {
    match error.classify() {
        Category::Syntax | Category::Eof => ApiError::invalid_json_request(),
        Category::Data => {
            // ルート値の型違い（`null`、配列など）はフィールドを特定できない
            let field = path.map(json_path).unwrap_or_default();
            if field.is_empty() {
                ApiError::unable_to_read_request_body()
            } else {
                ApiError::invalid_data_format(field)
            }
        }
        Category::Io => ApiError::unable_to_read_request_body(),
    }
}

/// フィールドパスを `a.[0].b` 形式で描画する
pub fn json_path(path: &Path) -> String {
    path.iter()
        .map(|segment| match segment {
            Segment::Seq { index } => format!("[{index}]"),
            Segment::Map { key } => key.clone(),
            Segment::Enum { variant } => variant.clone(),
            Segment::Unknown => "?".to_string(),
        })
        .collect::<Vec<_>>()
        .join(".")
}
