//! Allocation result repository interface

use async_trait::async_trait;

use super::model::AllocationResult;
use crate::domain::DomainResult;

#[async_trait]
pub trait AllocationRepository: Send + Sync {
    /// Persist the audit record and its per-unit rows as one atomic unit:
    /// either all rows are committed or none are.
    async fn save(&self, result: AllocationResult) -> DomainResult<AllocationResult>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<AllocationResult>>;
    async fn find_for_building(&self, building_id: i32) -> DomainResult<Vec<AllocationResult>>;
}
