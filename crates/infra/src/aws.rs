//! # AWS SDK 共通設定
//!
//! プロバイダごとのリージョン・認証情報・エンドポイントから SDK 設定を読み込む。
//!
//! ## 認証情報
//!
//! - アクセスキーとシークレットキーが両方指定されていれば静的認証情報を使う
//! - それ以外は SDK のデフォルトプロバイダチェーン（環境変数、IAM ロール等）に任せる
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use aws_communication_infra::{aws::AwsClientConfig, email};
//!
//! async fn setup() {
//!     let config = AwsClientConfig::new("ap-northeast-1");
//!     let client = email::ses::create_client(&config).await;
//! }
//! ```

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_sesv2::config::Credentials;

/// 認証情報プロバイダ名（ログ・デバッグ表示用）
const STATIC_PROVIDER_NAME: &str = "aws-communication-static";

/// プロバイダごとの接続設定
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AwsClientConfig {
    /// リージョン（例: `ap-northeast-1`）
    pub region:       String,
    /// アクセスキー
    pub access_key:   Option<String>,
    /// シークレットキー
    pub secret_key:   Option<String>,
    /// エンドポイント URL（LocalStack 使用時に設定、未設定で AWS デフォルト）
    pub endpoint_url: Option<String>,
}

impl AwsClientConfig {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..Default::default()
        }
    }

    /// 静的認証情報
    ///
    /// アクセスキー・シークレットキーの両方が空でない場合のみ返す。
    pub fn static_credentials(&self) -> Option<Credentials> {
        match (self.access_key.as_deref(), self.secret_key.as_deref()) {
            (Some(access_key), Some(secret_key))
                if !access_key.is_empty() && !secret_key.is_empty() =>
            {
                Some(Credentials::new(
                    access_key,
                    secret_key,
                    None,
                    None,
                    STATIC_PROVIDER_NAME,
                ))
            }
            _ => None,
        }
    }
}

impl std::fmt::Debug for AwsClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsClientConfig")
            .field("region", &self.region)
            .field("access_key", &self.access_key.as_ref().map(|_| "***"))
            .field("secret_key", &self.secret_key.as_ref().map(|_| "***"))
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

/// SDK 設定を読み込む
pub async fn load_sdk_config(config: &AwsClientConfig) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()));

    if let Some(credentials) = config.static_credentials() {
        loader = loader.credentials_provider(credentials);
    }

    if let Some(endpoint_url) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }

    loader.load().await
}
