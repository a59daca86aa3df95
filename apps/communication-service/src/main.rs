//! # AWS Communication Service サーバー
//!
//! テンプレートメール（SES）と SMS（SNS）を送信する API サーバー。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 説明 |
//! |----------|------|------|
//! | `GET` | `/health` | Liveness Check |
//! | `POST` | `/aws-communication/v1/email/send` | テンプレートメール送信 |
//! | `POST` | `/aws-communication/v1/sms/send` | SMS 送信 |
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `COMMUNICATION_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `COMMUNICATION_PORT` | **Yes** | ポート番号 |
//! | `EMAIL_BACKEND` | No | `ses`（デフォルト）または `noop` |
//! | `SMS_BACKEND` | No | `sns`（デフォルト）または `noop` |
//! | `SES_REGION` / `SNS_REGION` | バックエンドが AWS のとき | リージョン |
//! | `SES_ACCESS_KEY` / `SES_SECRET_KEY` | No | SES の静的認証情報 |
//! | `SNS_ACCESS_KEY` / `SNS_SECRET_KEY` | No | SNS の静的認証情報 |
//! | `SES_ENDPOINT_URL` / `SNS_ENDPOINT_URL` | No | エンドポイント（LocalStack 用） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト） |
//!
//! ## 起動方法
//!
//! ```bash
//! # ローカル（送信しない）
//! COMMUNICATION_PORT=13100 EMAIL_BACKEND=noop SMS_BACKEND=noop \
//!   cargo run -p aws-communication-service
//!
//! # 本番環境
//! COMMUNICATION_PORT=8080 SES_REGION=ap-northeast-1 SNS_REGION=ap-northeast-1 \
//!   cargo run -p aws-communication-service --release
//! ```

mod config;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use aws_communication_infra::{
    EmailSender,
    NoopEmailSender,
    NoopSmsSender,
    SesEmailSender,
    SmsSender,
    SnsSmsSender,
    email::ses,
    sms::sns,
};
use aws_communication_service::app_builder::build_app;
use aws_communication_shared::observability::TracingConfig;
use config::{CommunicationConfig, EmailBackend, SmsBackend};
use tokio::net::TcpListener;

/// 通信サービスのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. 送信バックエンドの初期化
/// 5. ルーターの構築と HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("communication-service");
    aws_communication_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "communication-service").entered();

    let config = CommunicationConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "通信サービスを起動します: {}:{}",
        config.host,
        config.port
    );

    let email_sender: Arc<dyn EmailSender> = match &config.email_backend {
        EmailBackend::Ses(aws) => {
            tracing::info!(region = %aws.region, "メール送信バックエンド: SES");
            Arc::new(SesEmailSender::new(ses::create_client(aws).await))
        }
        EmailBackend::Noop => {
            tracing::warn!("メール送信バックエンド: Noop（メールは送信されません）");
            Arc::new(NoopEmailSender)
        }
    };

    let sms_sender: Arc<dyn SmsSender> = match &config.sms_backend {
        SmsBackend::Sns(aws) => {
            tracing::info!(region = %aws.region, "SMS 送信バックエンド: SNS");
            Arc::new(SnsSmsSender::new(sns::create_client(aws).await))
        }
        SmsBackend::Noop => {
            tracing::warn!("SMS 送信バックエンド: Noop（SMS は送信されません）");
            Arc::new(NoopSmsSender)
        }
    };

    let app = build_app(email_sender, sms_sender);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("無効なアドレスです")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("{addr} へのバインドに失敗しました"))?;

    tracing::info!("通信サービスが起動しました: {}", addr);

    axum::serve(listener, app).await.context("サーバーエラー")?;

    Ok(())
}
