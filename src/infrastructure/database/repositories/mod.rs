//! SeaORM repository implementations

use sea_orm::TransactionError;

use crate::domain::DomainError;

mod allocation_repository;
mod billing_repository;
mod building_repository;
mod repository_provider;
mod usage_repository;

pub use allocation_repository::SeaOrmAllocationRepository;
pub use billing_repository::SeaOrmBillingRepository;
pub use building_repository::SeaOrmBuildingRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use usage_repository::SeaOrmUsageRepository;

pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

pub(crate) fn txn_err(e: TransactionError<DomainError>) -> DomainError {
    match e {
        TransactionError::Connection(e) => db_err(e),
        TransactionError::Transaction(e) => e,
    }
}
