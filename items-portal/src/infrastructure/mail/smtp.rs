use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use maud::html;

use super::MailError;
use crate::config::SmtpConfig;
use crate::domain::models::contact::ContactSubmission;
use crate::domain::services::contact_service::Mailer;

/// 每次发送都新建连接，配置缺失时在发送阶段报错
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailError> {
        let host = self
            .config
            .host
            .as_deref()
            .ok_or(MailError::NotConfigured("smtp.host"))?;

        // 465 端口为隐式 TLS，其余端口先明文连接，服务端支持时升级 STARTTLS
        let tls_parameters = TlsParameters::new(host.to_string())?;
        let tls = if self.config.implicit_tls() {
            Tls::Wrapper(tls_parameters)
        } else {
            Tls::Opportunistic(tls_parameters)
        };

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(self.config.port)
            .tls(tls);
        if let (Some(user), Some(password)) = (&self.config.user, &self.config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), password.clone()));
        }

        Ok(builder.build())
    }
}

/// 发件人显示为提交者本人，HTML 部分对所有输入做转义
pub fn build_message(submission: &ContactSubmission, receiver: &str) -> Result<Message, MailError> {
    let from = Mailbox::new(
        Some(submission.name.clone()),
        submission.email.parse::<Address>()?,
    );
    let to: Mailbox = receiver.parse()?;

    let html = html! {
        p { (submission.message) }
        p { "From: " (submission.name) " (" (submission.email) ")" }
    };

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(format!("New Contact Message from {}", submission.name))
        .multipart(MultiPart::alternative_plain_html(
            submission.message.clone(),
            html.into_string(),
        ))?;

    Ok(message)
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), MailError> {
        let receiver = self
            .config
            .receiver
            .as_deref()
            .ok_or(MailError::NotConfigured("smtp.receiver"))?;

        let message = build_message(submission, receiver)?;
        let response = self.transport()?.send(message).await?;
        tracing::debug!("SMTP server accepted message: {:?}", response.code());

        Ok(())
    }
}
