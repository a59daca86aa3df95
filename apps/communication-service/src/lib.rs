//! # AWS Communication Service ライブラリ
//!
//! メール / SMS 送信 API のハンドラ・ユースケース・ミドルウェアを公開する。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーター構築
//! - `error`: 型付き失敗の HTTP レスポンス変換
//! - `extract`: JSON ボディ抽出（ボディエラーの正規化）
//! - `handler`: HTTP ハンドラ
//! - `middleware`: 必須パラメータ事前検査、パニック捕捉
//! - `usecase`: 送信のオーケストレーション

pub mod app_builder;
pub mod error;
pub mod extract;
pub mod handler;
pub mod middleware;
pub mod usecase;
