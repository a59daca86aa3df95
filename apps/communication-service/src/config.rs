//! # 通信サービス設定
//!
//! 環境変数から通信サービスの設定を読み込む。

use std::env;

use aws_communication_infra::aws::AwsClientConfig;
use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    #[error("{name} の値が不正です: {value}")]
    Invalid { name: &'static str, value: String },
}

/// メール送信バックエンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailBackend {
    Ses(AwsClientConfig),
    Noop,
}

/// SMS 送信バックエンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmsBackend {
    Sns(AwsClientConfig),
    Noop,
}

/// 通信サービスの設定
#[derive(Debug, Clone)]
pub struct CommunicationConfig {
    /// バインドアドレス
    pub host:          String,
    /// ポート番号
    pub port:          u16,
    pub email_backend: EmailBackend,
    pub sms_backend:   SmsBackend,
}

impl CommunicationConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の取得関数から設定を読み込む
    ///
    /// 空文字列は未設定として扱う。
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port_value = get("COMMUNICATION_PORT").ok_or(ConfigError::Missing("COMMUNICATION_PORT"))?;
        let port = port_value.trim().parse().map_err(|_| ConfigError::Invalid {
            name:  "COMMUNICATION_PORT",
            value: port_value.clone(),
        })?;

        let email_backend = match get("EMAIL_BACKEND").as_deref().map(str::to_ascii_lowercase) {
            None => EmailBackend::Ses(aws_client_config(&get, &SES_ENV_KEYS)?),
            Some(v) if v == "ses" => EmailBackend::Ses(aws_client_config(&get, &SES_ENV_KEYS)?),
            Some(v) if v == "noop" => EmailBackend::Noop,
            Some(value) => {
                return Err(ConfigError::Invalid {
                    name: "EMAIL_BACKEND",
                    value,
                });
            }
        };

        let sms_backend = match get("SMS_BACKEND").as_deref().map(str::to_ascii_lowercase) {
            None => SmsBackend::Sns(aws_client_config(&get, &SNS_ENV_KEYS)?),
            Some(v) if v == "sns" => SmsBackend::Sns(aws_client_config(&get, &SNS_ENV_KEYS)?),
            Some(v) if v == "noop" => SmsBackend::Noop,
            Some(value) => {
                return Err(ConfigError::Invalid {
                    name: "SMS_BACKEND",
                    value,
                });
            }
        };

        Ok(Self {
            host: get("COMMUNICATION_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            email_backend,
            sms_backend,
        })
    }
}

/// プロバイダ別の環境変数名
struct AwsEnvKeys {
    region:       &'static str,
    access_key:   &'static str,
    secret_key:   &'static str,
    endpoint_url: &'static str,
}

const SES_ENV_KEYS: AwsEnvKeys = AwsEnvKeys {
    region:       "SES_REGION",
    access_key:   "SES_ACCESS_KEY",
    secret_key:   "SES_SECRET_KEY",
    endpoint_url: "SES_ENDPOINT_URL",
};

const SNS_ENV_KEYS: AwsEnvKeys = AwsEnvKeys {
    region:       "SNS_REGION",
    access_key:   "SNS_ACCESS_KEY",
    secret_key:   "SNS_SECRET_KEY",
    endpoint_url: "SNS_ENDPOINT_URL",
};

/// プロバイダ別の AWS 接続設定を読み込む（リージョンは必須）
fn aws_client_config<F>(get: &F, keys: &AwsEnvKeys) -> Result<AwsClientConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(AwsClientConfig {
        region:       get(keys.region).ok_or(ConfigError::Missing(keys.region))?,
        access_key:   get(keys.access_key),
        secret_key:   get(keys.secret_key),
        endpoint_url: get(keys.endpoint_url),
    })
}
