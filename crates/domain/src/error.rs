//! # 型付き失敗
//!
//! 検証やプロバイダ呼び出しで契約違反を検出した地点で生成し、
//! 境界（HTTP 層）でエラーレスポンスに変換する失敗値。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `BadRequest` | 400 Bad Request | 必須項目の欠落、不正なボディ、不正なパラメータ値 |
//! | `NotFound` | 404 Not Found | 参照先（テンプレート等）が存在しない |
//! | `InternalServer` | 500 Internal Server Error | 予期しない失敗、プロバイダ障害 |
//!
//! 生成された失敗は変更されずに境界まで伝播し、一度だけレスポンスに変換される。

use std::fmt;

use thiserror::Error;

use crate::{error_code::ErrorCode, message::format_message};

/// 失敗の中身
///
/// ステータスコードと、理由テンプレートに埋め込むパラメータを保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    code:       ErrorCode,
    parameters: Vec<String>,
}

impl Failure {
    pub fn new(code: ErrorCode, parameters: Vec<String>) -> Self {
        Self { code, parameters }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// パラメータを埋め込んだ理由文
    pub fn reason(&self) -> String {
        format_message(self.code.reason(), &self.parameters)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.reason())
    }
}

/// API の型付き失敗
///
/// バリアントが HTTP ステータスの系統を決める。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// クライアントが修正可能な失敗
    #[error("不正なリクエスト: {0}")]
    BadRequest(Failure),

    /// 参照先が存在しない
    #[error("リソースが見つかりません: {0}")]
    NotFound(Failure),

    /// 予期しない失敗
    #[error("内部エラー: {0}")]
    InternalServer(Failure),
}

impl ApiError {
    /// 必須パラメータの欠落（`MISSING_MANDATORY_PARAM`）
    pub fn missing_mandatory_param(name: impl Into<String>) -> Self {
        Self::BadRequest(Failure::new(
            ErrorCode::MissingMandatoryParam,
            vec![name.into()],
        ))
    }

    /// パラメータ値が宣言された型に合わない（`INVALID_VALUE_FOR_PARAM`）
    pub fn invalid_value_for_param(name: impl Into<String>) -> Self {
        Self::BadRequest(Failure::new(
            ErrorCode::InvalidValueForParam,
            vec![name.into()],
        ))
    }

    /// JSON 構文エラー（`INVALID_JSON_REQUEST`）
    pub fn invalid_json_request() -> Self {
        Self::BadRequest(Failure::new(ErrorCode::InvalidJsonRequest, Vec::new()))
    }

    /// 値の型・形式が不正（`INVALID_DATA_FORMAT_JSON`）
    ///
    /// `path` はドット区切りのフィールドパス（例: `communicationCharacteristics.[0].name`）。
    pub fn invalid_data_format(path: impl Into<String>) -> Self {
        Self::BadRequest(Failure::new(
            ErrorCode::InvalidDataFormatJson,
            vec![path.into()],
        ))
    }

    /// リクエストボディを読めない（`UNABLE_TO_READ_REQUEST_BODY`）
    pub fn unable_to_read_request_body() -> Self {
        Self::BadRequest(Failure::new(
            ErrorCode::UnableToReadRequestBody,
            Vec::new(),
        ))
    }

    /// 参照先が存在しない（`DATA_NOT_FOUND`）
    ///
    /// `entity` は参照先の種類（例: `"Template"`）、`input` は検索に使った値。
    pub fn data_not_found(entity: impl Into<String>, input: impl Into<String>) -> Self {
        Self::NotFound(Failure::new(
            ErrorCode::DataNotFound,
            vec![entity.into(), input.into()],
        ))
    }

    /// 予期しない失敗（`INTERNAL_SERVER_ERROR`）
    ///
    /// `message` は元の失敗のメッセージ。理由テンプレートにプレースホルダがないため
    /// レスポンスには現れず、ログにのみ残る。
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalServer(Failure::new(
            ErrorCode::InternalServerError,
            vec![message.into()],
        ))
    }

    pub fn failure(&self) -> &Failure {
        match self {
            Self::BadRequest(failure) | Self::NotFound(failure) | Self::InternalServer(failure) => {
                failure
            }
        }
    }

    /// 対応する HTTP ステータスコード
    pub fn http_status(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::NotFound(_) => 404,
            Self::InternalServer(_) => 500,
        }
    }

    /// ワイヤ形式のエラーレスポンスに変換する
    pub fn to_error_response(&self) -> aws_communication_shared::ErrorResponse {
        let failure = self.failure();
        aws_communication_shared::ErrorResponse::new(failure.code().code(), failure.reason())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_必須パラメータ欠落がフィールド名を埋め込む() {
        let error = ApiError::missing_mandatory_param("sender.emailAddress");
        let response = error.to_error_response();

        assert_eq!(error.http_status(), 400);
        assert_eq!(response.code, "400001");
        assert_eq!(response.reason, "Missing mandatory parameter: sender.emailAddress");
    }

    #[test]
    fn test_データ未検出が2つのパラメータを埋め込む() {
        let error = ApiError::data_not_found("Template", "welcome");
        let response = error.to_error_response();

        assert_eq!(error.http_status(), 404);
        assert_eq!(response.code, "404001");
        assert_eq!(response.reason, "Template not found for given input: welcome");
    }

    #[test]
    fn test_内部エラーはメッセージをレスポンスに含めない() {
        let error = ApiError::internal("connection reset by peer");
        let response = error.to_error_response();

        assert_eq!(error.http_status(), 500);
        assert_eq!(response.code, "500001");
        assert_eq!(response.reason, "Service encountered an unexpected condition");
        assert_eq!(error.failure().parameters(), ["connection reset by peer"]);
    }

    #[test]
    fn test_json構文エラーはパラメータを持たない() {
        let error = ApiError::invalid_json_request();

        assert!(error.failure().parameters().is_empty());
        assert_eq!(error.to_error_response().reason, "Invalid JSON Request");
    }

    #[rstest]
    #[case(ApiError::missing_mandatory_param("a"))]
    #[case(ApiError::invalid_value_for_param("a"))]
    #[case(ApiError::invalid_json_request())]
    #[case(ApiError::invalid_data_format("a.[0]"))]
    #[case(ApiError::unable_to_read_request_body())]
    #[case(ApiError::data_not_found("Template", "a"))]
    fn test_コンストラクタのパラメータ数がテンプレートと一致する(#[case] error: ApiError) {
        let failure = error.failure();
        assert_eq!(failure.parameters().len(), failure.code().placeholder_count());
    }

    #[rstest]
    #[case(ApiError::missing_mandatory_param("a"), 400)]
    #[case(ApiError::invalid_value_for_param("a"), 400)]
    #[case(ApiError::invalid_json_request(), 400)]
    #[case(ApiError::invalid_data_format("a"), 400)]
    #[case(ApiError::unable_to_read_request_body(), 400)]
    #[case(ApiError::data_not_found("Template", "a"), 404)]
    #[case(ApiError::internal("boom"), 500)]
    fn test_コードの系統とhttpステータスが一致する(#[case] error: ApiError, #[case] status: u16) {
        assert_eq!(error.http_status(), status);
        assert_eq!(&error.failure().code().code()[..3], status.to_string().as_str());
    }

    #[test]
    fn test_displayにコードと理由文が含まれる() {
        let error = ApiError::missing_mandatory_param("message");
        assert_eq!(
            error.to_string(),
            "不正なリクエスト: [400001] Missing mandatory parameter: message"
        );
    }
}
