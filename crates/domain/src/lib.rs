//! # AWS Communication ドメイン層
//!
//! メール / SMS 送信 API のドメインモデルとリクエスト検証を定義する。
//!
//! ## 設計方針
//!
//! - **I/O を持たない**: プロバイダ呼び出しや HTTP はインフラ層・サービス層の責務
//! - **型付きエラー**: 失敗はすべて [`ApiError`] として値で返し、境界でレスポンスに変換する
//! - **固定カタログ**: ステータスコードは [`ErrorCode`] の列挙で表現し、実行時に変化しない
//!
//! ## 依存関係の方向
//!
//! ```text
//! service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`error_code`] - ステータスコードカタログ
//! - [`message`] - 理由テンプレートへのパラメータ埋め込み
//! - [`error`] - 型付き失敗（[`ApiError`]）
//! - [`communication`] - リクエスト / レスポンスモデル
//! - [`provider`] - プロバイダへ渡すメッセージとプロバイダエラー
//! - [`validator`] - 必須項目の検証
//!
//! ## 使用例
//!
//! ```rust
//! use aws_communication_domain::{ApiError, ErrorCode};
//!
//! let error = ApiError::missing_mandatory_param("templateName");
//! let response = error.to_error_response();
//!
//! assert_eq!(response.code, ErrorCode::MissingMandatoryParam.code());
//! assert_eq!(response.reason, "Missing mandatory parameter: templateName");
//! ```

pub mod communication;
pub mod error;
pub mod error_code;
pub mod message;
pub mod provider;
pub mod validator;

pub use error::{ApiError, Failure};
pub use error_code::ErrorCode;
pub use message::format_message;
