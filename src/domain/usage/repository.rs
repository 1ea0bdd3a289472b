//! Usage snapshot repository interface

use async_trait::async_trait;

use super::model::UsageSnapshot;
use crate::domain::DomainResult;

#[async_trait]
pub trait UsageRepository: Send + Sync {
    /// Load a snapshot together with its unit readings.
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<UsageSnapshot>>;
    async fn find_for_building(&self, building_id: i32) -> DomainResult<Vec<UsageSnapshot>>;
    /// Persist a snapshot and all its readings.
    async fn save(&self, snapshot: UsageSnapshot) -> DomainResult<UsageSnapshot>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
