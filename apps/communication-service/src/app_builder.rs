//! # アプリケーション構築
//!
//! DI（送信実装・State）の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込み・AWS クライアント初期化とサーバー起動に集中する。

use std::sync::Arc;

use aws_communication_infra::{EmailSender, SmsSender};
use aws_communication_shared::observability::{MakeRequestUuidV7, make_request_span};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{CommunicationState, health_check, send_email, send_sms},
    middleware::{SEND_ROUTE_PARAMS, handle_panic, require_params},
    usecase::CommunicationUseCaseImpl,
};

/// メール送信ルート
pub const EMAIL_SEND_PATH: &str = "/aws-communication/v1/email/send";

/// SMS 送信ルート
pub const SMS_SEND_PATH: &str = "/aws-communication/v1/sms/send";

/// DI コンテナの構築とルーター定義を行う
///
/// 送信実装を受け取り、ユースケース → State → Router の順に組み立てる。
pub fn build_app(email_sender: Arc<dyn EmailSender>, sms_sender: Arc<dyn SmsSender>) -> Router {
    let communication_state = Arc::new(CommunicationState {
        usecase: CommunicationUseCaseImpl::new(email_sender, sms_sender),
    });

    Router::new()
        .route("/health", get(health_check))
        // 送信 API（ボディ解析の前に必須パラメータを検査する）
        .merge(
            Router::new()
                .route(EMAIL_SEND_PATH, post(send_email))
                .route(SMS_SEND_PATH, post(send_sms))
                .route_layer(from_fn_with_state(SEND_ROUTE_PARAMS, require_params))
                .with_state(communication_state),
        )
        // レイヤー順序（下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: カスタムスパンに request_id を含め、全ログに自動注入
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        // 4. CatchPanicLayer: ハンドラのパニックを 500 に変換
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
