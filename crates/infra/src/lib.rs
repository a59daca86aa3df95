//! # AWS Communication インフラ層
//!
//! メール / SMS プロバイダとの通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: [`EmailSender`] / [`SmsSender`] で送信手段を抽象化
//! - **実装の切替**: AWS（SES / SNS）と Noop を環境変数で切り替える
//! - **ドメイン型のみを公開**: SDK の型はこのクレートの外に出さない
//!
//! ## 依存関係
//!
//! ```text
//! service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`aws`] - AWS SDK 共通設定（リージョン、認証情報、エンドポイント）
//! - [`email`] - メール送信（SES / Noop）
//! - [`sms`] - SMS 送信（SNS / Noop）
//! - `mock` - テスト用インメモリ実装（`test-utils` feature）

pub mod aws;
pub mod email;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod sms;

pub use email::{EmailSender, NoopEmailSender, SesEmailSender};
pub use sms::{NoopSmsSender, SmsSender, SnsSmsSender};
