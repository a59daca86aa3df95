//! # SMS 送信
//!
//! SMS の送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `SmsSender` trait で SMS 送信を抽象化
//! - **2 つの実装**: SNS（本番用）、Noop（ローカル・検証用）
//! - **環境変数切替**: `SMS_BACKEND` でランタイム選択

mod noop;
pub mod sns;

use async_trait::async_trait;
use aws_communication_domain::provider::{ProviderError, SmsMessage};
pub use noop::NoopSmsSender;
pub use sns::SnsSmsSender;

/// SMS 送信トレイト
///
/// 送信に成功するとプロバイダが払い出したメッセージ ID を返す。
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// 電話番号宛てに SMS を発行する
    async fn publish(&self, sms: &SmsMessage) -> Result<String, ProviderError>;
}
