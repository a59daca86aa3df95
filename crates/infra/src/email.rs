//! # メール送信
//!
//! テンプレートメールの送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `EmailSender` trait でメール送信を抽象化
//! - **2 つの実装**: SES（本番用）、Noop（ローカル・検証用）
//! - **環境変数切替**: `EMAIL_BACKEND` でランタイム選択

mod noop;
pub mod ses;

use async_trait::async_trait;
use aws_communication_domain::provider::{ProviderError, TemplatedEmail};
pub use noop::NoopEmailSender;
pub use ses::SesEmailSender;

/// メール送信トレイト
///
/// 送信に成功するとプロバイダが払い出したメッセージ ID を返す。
/// テンプレートが存在しない場合は [`ProviderError::TemplateNotFound`] を返すこと。
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// テンプレートメールを送信する
    async fn send_templated_email(&self, email: &TemplatedEmail) -> Result<String, ProviderError>;
}
