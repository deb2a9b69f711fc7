use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::models::contact::{ContactReceipt, ContactSubmission, FIELDS_REQUIRED, SEND_FAILED};
use crate::infrastructure::mail::MailError;

/// 邮件发送通道
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), MailError>;
}

pub struct ContactService {
    mailer: Arc<dyn Mailer>,
}

impl ContactService {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    /// 校验失败直接返回，不会发起网络请求；发送失败只返回通用错误
    pub async fn relay(&self, submission: &ContactSubmission) -> ContactReceipt {
        if let Err(e) = submission.validate() {
            tracing::debug!("Rejected contact submission: {}", e);
            return ContactReceipt::failed(FIELDS_REQUIRED);
        }

        match self.mailer.send(submission).await {
            Ok(()) => {
                tracing::info!("Relayed contact message from {}", submission.email);
                ContactReceipt::sent()
            }
            Err(e) => {
                tracing::error!("Failed to relay contact message: {}", e);
                ContactReceipt::failed(SEND_FAILED)
            }
        }
    }
}
