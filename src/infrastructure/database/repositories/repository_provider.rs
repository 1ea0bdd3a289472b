//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::allocation::AllocationRepository;
use crate::domain::billing::BillingRepository;
use crate::domain::building::BuildingRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::usage::UsageRepository;

use super::allocation_repository::SeaOrmAllocationRepository;
use super::billing_repository::SeaOrmBillingRepository;
use super::building_repository::SeaOrmBuildingRepository;
use super::usage_repository::SeaOrmUsageRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let building = repos.buildings().find_by_id(1).await?;
/// let debts = repos.billing().debts_for(1).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    buildings: SeaOrmBuildingRepository,
    usages: SeaOrmUsageRepository,
    billing: SeaOrmBillingRepository,
    allocations: SeaOrmAllocationRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            buildings: SeaOrmBuildingRepository::new(db.clone()),
            usages: SeaOrmUsageRepository::new(db.clone()),
            billing: SeaOrmBillingRepository::new(db.clone()),
            allocations: SeaOrmAllocationRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn buildings(&self) -> &dyn BuildingRepository {
        &self.buildings
    }

    fn usages(&self) -> &dyn UsageRepository {
        &self.usages
    }

    fn billing(&self) -> &dyn BillingRepository {
        &self.billing
    }

    fn allocations(&self) -> &dyn AllocationRepository {
        &self.allocations
    }
}
