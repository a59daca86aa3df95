//! # ステータスコードカタログ
//!
//! API が返すエラーコードと理由テンプレートの固定表。
//!
//! | 名前 | コード | 理由テンプレート |
//! |------|--------|------------------|
//! | `MISSING_MANDATORY_PARAM` | `400001` | `Missing mandatory parameter: {0}` |
//! | `INVALID_VALUE_FOR_PARAM` | `400002` | `Invalid value for parmater: {0}` |
//! | `INVALID_JSON_REQUEST` | `400003` | `Invalid JSON Request` |
//! | `INVALID_DATA_FORMAT_JSON` | `400004` | `Invalid data format provided in JSON request for {0}` |
//! | `UNABLE_TO_READ_REQUEST_BODY` | `400005` | `Unable to parse the request body` |
//! | `DATA_NOT_FOUND` | `404001` | `{0} not found for given input: {1}` |
//! | `INTERNAL_SERVER_ERROR` | `500001` | `Service encountered an unexpected condition` |
//!
//! コードと理由文はクライアントとの契約のため、綴りも含めて変更しない。

use strum::{EnumString, IntoStaticStr};

/// ステータスコード
///
/// 名前（`SCREAMING_SNAKE_CASE`）で引ける:
///
/// ```rust
/// use aws_communication_domain::ErrorCode;
///
/// let code: ErrorCode = "DATA_NOT_FOUND".parse().unwrap();
/// assert_eq!(code.code(), "404001");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // HTTP 400 系
    MissingMandatoryParam,
    InvalidValueForParam,
    // JSON リクエストボディ検証
    InvalidJsonRequest,
    InvalidDataFormatJson,
    UnableToReadRequestBody,
    // HTTP 404 系
    DataNotFound,
    // HTTP 500 系
    InternalServerError,
}

impl ErrorCode {
    /// カタログ全件
    pub const ALL: [ErrorCode; 7] = [
        ErrorCode::MissingMandatoryParam,
        ErrorCode::InvalidValueForParam,
        ErrorCode::InvalidJsonRequest,
        ErrorCode::InvalidDataFormatJson,
        ErrorCode::UnableToReadRequestBody,
        ErrorCode::DataNotFound,
        ErrorCode::InternalServerError,
    ];

    /// アプリケーションのステータスコード
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingMandatoryParam => "400001",
            Self::InvalidValueForParam => "400002",
            Self::InvalidJsonRequest => "400003",
            Self::InvalidDataFormatJson => "400004",
            Self::UnableToReadRequestBody => "400005",
            Self::DataNotFound => "404001",
            Self::InternalServerError => "500001",
        }
    }

    /// 位置指定プレースホルダ（`{0}`, `{1}`, ...）を含む理由テンプレート
    pub const fn reason(self) -> &'static str {
        match self {
            Self::MissingMandatoryParam => "Missing mandatory parameter: {0}",
            Self::InvalidValueForParam => "Invalid value for parmater: {0}",
            Self::InvalidJsonRequest => "Invalid JSON Request",
            Self::InvalidDataFormatJson => "Invalid data format provided in JSON request for {0}",
            Self::UnableToReadRequestBody => "Unable to parse the request body",
            Self::DataNotFound => "{0} not found for given input: {1}",
            Self::InternalServerError => "Service encountered an unexpected condition",
        }
    }

    /// 理由テンプレートが要求するパラメータ数
    pub const fn placeholder_count(self) -> usize {
        match self {
            Self::InvalidJsonRequest | Self::UnableToReadRequestBody | Self::InternalServerError => 0,
            Self::MissingMandatoryParam | Self::InvalidValueForParam | Self::InvalidDataFormatJson => {
                1
            }
            Self::DataNotFound => 2,
        }
    }
}
