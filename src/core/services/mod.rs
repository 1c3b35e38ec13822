pub mod category_service;
pub mod client_service;
pub mod payment_service;

pub use category_service::CategoryService;
pub use client_service::ClientService;
pub use payment_service::PaymentService;

use crate::errors::StoreError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{0}")]
    Invalid(String),
    #[error("{0} not found")]
    NotFound(String),
}
