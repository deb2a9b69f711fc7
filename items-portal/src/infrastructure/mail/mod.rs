use thiserror::Error;

pub mod smtp;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("SMTP setting {0} is not configured")]
    NotConfigured(&'static str),

    #[error("Invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
