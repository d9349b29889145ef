use thiserror::Error;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("unknown question bank: {0}")]
    UnknownBank(String),
}
