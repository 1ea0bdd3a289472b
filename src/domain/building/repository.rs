//! Building repository interface

use async_trait::async_trait;

use super::model::Building;
use crate::domain::DomainResult;

#[async_trait]
pub trait BuildingRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Building>>;
    async fn find_all(&self) -> DomainResult<Vec<Building>>;
    async fn save(&self, building: Building) -> DomainResult<Building>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
