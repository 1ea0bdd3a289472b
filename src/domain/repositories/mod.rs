//! Repository provider: one accessor per aggregate

use crate::domain::allocation::AllocationRepository;
use crate::domain::billing::BillingRepository;
use crate::domain::building::BuildingRepository;
use crate::domain::usage::UsageRepository;

/// Unified access to all repositories behind one trait object.
///
/// ```ignore
/// let building = repos.buildings().find_by_id(1).await?;
/// let debts = repos.billing().debts_for(building.id).await?;
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn buildings(&self) -> &dyn BuildingRepository;
    fn usages(&self) -> &dyn UsageRepository;
    fn billing(&self) -> &dyn BillingRepository;
    fn allocations(&self) -> &dyn AllocationRepository;
}
