//! # テスト用モック送信
//!
//! ユースケース・ハンドラテストで使用するインメモリ送信実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! aws-communication-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use aws_communication_domain::provider::{ProviderError, SmsMessage, TemplatedEmail};

use crate::{email::EmailSender, sms::SmsSender};

// ===== MockEmailSender =====

/// 送信内容を記録するメール送信
///
/// `with_templates` で既知テンプレートを登録すると、未登録のテンプレートは
/// [`ProviderError::TemplateNotFound`] になる。未登録なら全テンプレートを受け付ける。
#[derive(Clone, Default)]
pub struct MockEmailSender {
    sent:      Arc<Mutex<Vec<TemplatedEmail>>>,
    templates: Option<HashSet<String>>,
    failure:   Arc<Mutex<Option<ProviderError>>>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_templates<I, S>(mut self, templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.templates = Some(templates.into_iter().map(Into::into).collect());
        self
    }

    /// 以降の送信をすべて失敗させる
    pub fn fail_with(&self, error: ProviderError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn sent_emails(&self) -> Vec<TemplatedEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_templated_email(&self, email: &TemplatedEmail) -> Result<String, ProviderError> {
        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }
        if self
            .templates
            .as_ref()
            .is_some_and(|templates| !templates.contains(&email.template_name))
        {
            return Err(ProviderError::TemplateNotFound(email.template_name.clone()));
        }

        let mut sent = self.sent.lock().unwrap();
        sent.push(email.clone());
        Ok(format!("mock-email-{}", sent.len()))
    }
}

// ===== MockSmsSender =====

/// 送信内容を記録する SMS 送信
#[derive(Clone, Default)]
pub struct MockSmsSender {
    sent:    Arc<Mutex<Vec<SmsMessage>>>,
    failure: Arc<Mutex<Option<ProviderError>>>,
}

impl MockSmsSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以降の送信をすべて失敗させる
    pub fn fail_with(&self, error: ProviderError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn sent_messages(&self) -> Vec<SmsMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl SmsSender for MockSmsSender {
    async fn publish(&self, sms: &SmsMessage) -> Result<String, ProviderError> {
        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }

        let mut sent = self.sent.lock().unwrap();
        sent.push(sms.clone());
        Ok(format!("mock-sms-{}", sent.len()))
    }
}
