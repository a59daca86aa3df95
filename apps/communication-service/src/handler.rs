//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、検証と送信はユースケースに委譲

pub mod communication;
pub mod health;

pub use communication::{CommunicationState, send_email, send_sms};
pub use health::health_check;
