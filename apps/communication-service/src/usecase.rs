//! # ユースケース層
//!
//! 検証 → プロバイダメッセージ変換 → 送信 → 失敗の分類を担う。
//!
//! ## 設計方針
//!
//! - **依存性注入**: 送信実装を `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは抽出とレスポンス組み立てに専念する

pub mod communication;

pub use communication::CommunicationUseCaseImpl;
