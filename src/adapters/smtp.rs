use crate::config::SmtpConfig;
use crate::domain::model::TestMail;
use crate::domain::ports::Mailer;
use crate::utils::error::Result;
use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Mail relay client over authenticated SMTP.
pub struct SmtpRelayMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpRelayMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        let credentials = Credentials::new(config.username.clone(), config.password.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.relay_host)?
            .credentials(credentials)
            .build();
        let from: Mailbox = config.from.parse()?;

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl Mailer for SmtpRelayMailer {
    async fn send(&self, mail: &TestMail) -> Result<()> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(mail.to.parse()?)
            .subject(mail.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                mail.text_body.clone(),
                mail.html_body.clone(),
            ))?;

        tracing::info!(to = %mail.to, "sending test email");
        self.transport.send(message).await?;
        Ok(())
    }
}
