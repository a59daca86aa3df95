//! # 必須パラメータ事前検査ミドルウェア
//!
//! ルートごとに宣言したヘッダー / クエリ / パスパラメータを、ハンドラ
//! （およびボディの解析）より前に検査する。
//!
//! ## 使い方
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//!
//! Router::new()
//!     .route("/aws-communication/v1/email/send", post(send_email))
//!     .route_layer(from_fn_with_state(SEND_ROUTE_PARAMS, require_params))
//! ```
//!
//! ## 設計方針
//!
//! - 宣言は静的テーブル（[`RouteParams`]）で、ルート登録時に紐付ける
//! - 欠落・空白は `MISSING_MANDATORY_PARAM`、型に合わない値は `INVALID_VALUE_FOR_PARAM`
//! - `route_layer` で適用するため、マッチしないパスには作用しない

use std::collections::HashMap;

use aws_communication_domain::{ApiError, validator::is_blank};
use axum::{
    body::Body,
    extract::{FromRequestParts, Query, RawPathParams, State},
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::error::AppError;

/// パラメータの取得元
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamSource {
    Header,
    Query,
    Path,
}

/// パラメータ値の期待する型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// 任意の文字列
    Text,
    /// 符号付き整数
    Integer,
    /// `true` / `false`（大文字小文字を区別しない）
    Boolean,
}

impl ParamKind {
    fn accepts(self, value: &str) -> bool {
        match self {
            Self::Text => true,
            Self::Integer => value.trim().parse::<i64>().is_ok(),
            Self::Boolean => {
                let value = value.trim();
                value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false")
            }
        }
    }
}

/// パラメータ宣言
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name:     &'static str,
    pub source:   ParamSource,
    pub required: bool,
    pub kind:     ParamKind,
}

impl ParamSpec {
    const fn new(name: &'static str, source: ParamSource) -> Self {
        Self {
            name,
            source,
            required: false,
            kind: ParamKind::Text,
        }
    }

    pub const fn header(name: &'static str) -> Self {
        Self::new(name, ParamSource::Header)
    }

    pub const fn query(name: &'static str) -> Self {
        Self::new(name, ParamSource::Query)
    }

    pub const fn path(name: &'static str) -> Self {
        Self::new(name, ParamSource::Path)
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn kind(mut self, kind: ParamKind) -> Self {
        self.kind = kind;
        self
    }
}

/// ルートに紐付けるパラメータ宣言の一覧
#[derive(Debug, Clone, Copy)]
pub struct RouteParams(pub &'static [ParamSpec]);

/// 送信ルート（メール / SMS）の宣言
pub const SEND_ROUTE_PARAMS: RouteParams =
    RouteParams(&[ParamSpec::header("Content-Type").required()]);

/// 宣言順にパラメータを検査し、最初の違反を返す
///
/// `lookup` は宣言に対応する値（なければ `None`）を返す。
pub fn check_params<F>(specs: &[ParamSpec], lookup: F) -> Result<(), ApiError>
where
    F: Fn(&ParamSpec) -> Option<String>,
{
    for spec in specs {
        let value = lookup(spec);

        if is_blank(value.as_deref()) {
            if spec.required {
                return Err(ApiError::missing_mandatory_param(spec.name));
            }
            continue;
        }

        if value.is_some_and(|value| !spec.kind.accepts(&value)) {
            return Err(ApiError::invalid_value_for_param(spec.name));
        }
    }

    Ok(())
}

/// 事前検査ミドルウェア
pub async fn require_params(
    State(params): State<RouteParams>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = request.into_parts();

    let path_params: HashMap<String, String> = RawPathParams::from_request_parts(&mut parts, &())
        .await
        .map(|params| {
            params
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect()
        })
        .unwrap_or_default();

    let query_params: HashMap<String, String> =
        Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map(|Query(query)| query)
            .map_err(|_| ApiError::invalid_value_for_param("query"))?;

    check_params(params.0, |spec| match spec.source {
        ParamSource::Header => parts
            .headers
            .get(spec.name)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned()),
        ParamSource::Query => query_params.get(spec.name).cloned(),
        ParamSource::Path => path_params.get(spec.name).cloned(),
    })?;

    Ok(next.run(Request::from_parts(parts, body)).await)
}
