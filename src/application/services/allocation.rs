//! Allocation service: loads inputs, runs the core, persists the audit

use std::sync::Arc;

use tracing::info;

use crate::application::allocation::{AllocationEngine, ConsistencyGuard};
use crate::domain::{
    AllocationResult, AllocationRun, DomainError, DomainResult, GasBill, RepositoryProvider,
    ValidationError,
};

/// Inputs for one allocation run, by record id.
#[derive(Debug, Clone, Copy)]
pub struct AllocateCommand {
    pub building_id: i32,
    pub water_bill_id: i32,
    pub gas_bill_id: Option<i32>,
    pub previous_snapshot_id: i32,
    pub current_snapshot_id: i32,
}

pub struct AllocationService {
    repos: Arc<dyn RepositoryProvider>,
    engine: AllocationEngine,
}

impl AllocationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, coefficient: f64) -> Self {
        Self {
            repos,
            engine: AllocationEngine::new(coefficient),
        }
    }

    /// Run one allocation end to end.
    ///
    /// Loads every referenced record, validates the run, computes per-unit
    /// prices and persists the audit record atomically with its unit rows.
    /// Re-running the same command creates a new independent record.
    pub async fn allocate(&self, cmd: AllocateCommand) -> DomainResult<AllocationResult> {
        let building = self
            .repos
            .buildings()
            .find_by_id(cmd.building_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Building",
                field: "id",
                value: cmd.building_id.to_string(),
            })?;

        let water_bill = self
            .repos
            .billing()
            .find_water_bill(cmd.water_bill_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "WaterBill",
                field: "id",
                value: cmd.water_bill_id.to_string(),
            })?;
        if water_bill.building_id != building.id {
            return Err(ValidationError::single(
                "water_bill",
                format!("belongs to building {}", water_bill.building_id),
            )
            .into());
        }

        let gas_bill = self.load_gas_bill(cmd.gas_bill_id, building.id).await?;

        let previous = self
            .repos
            .usages()
            .find_by_id(cmd.previous_snapshot_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "UsageSnapshot",
                field: "id",
                value: cmd.previous_snapshot_id.to_string(),
            })?;
        let current = self
            .repos
            .usages()
            .find_by_id(cmd.current_snapshot_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "UsageSnapshot",
                field: "id",
                value: cmd.current_snapshot_id.to_string(),
            })?;

        let extra_charges = self.repos.billing().extra_charges_for(water_bill.id).await?;
        let debts = self.repos.billing().debts_for(building.id).await?;

        let run = AllocationRun {
            building,
            water_bill,
            gas_bill,
            previous,
            current,
            extra_charges,
            debts,
        };

        ConsistencyGuard::check(&run)?;
        let computed = self.engine.compute(&run)?;

        let stored = self
            .repos
            .allocations()
            .save(AllocationResult::from_computed(&run, computed))
            .await?;

        info!(
            building_id = run.building.id,
            result_id = stored.id,
            units = stored.units.len(),
            ratio = stored.ratio,
            shared_extra = stored.shared_extra,
            "Water cost allocation persisted"
        );

        Ok(stored)
    }

    pub async fn get_allocation(&self, id: i32) -> DomainResult<Option<AllocationResult>> {
        self.repos.allocations().find_by_id(id).await
    }

    pub async fn list_for_building(
        &self,
        building_id: i32,
    ) -> DomainResult<Vec<AllocationResult>> {
        self.repos.allocations().find_for_building(building_id).await
    }

    async fn load_gas_bill(
        &self,
        gas_bill_id: Option<i32>,
        building_id: i32,
    ) -> DomainResult<Option<GasBill>> {
        let Some(id) = gas_bill_id else {
            return Ok(None);
        };

        let gas_bill =
            self.repos
                .billing()
                .find_gas_bill(id)
                .await?
                .ok_or(DomainError::NotFound {
                    entity: "GasBill",
                    field: "id",
                    value: id.to_string(),
                })?;
        if gas_bill.building_id != building_id {
            return Err(ValidationError::single(
                "gas_bill",
                format!("belongs to building {}", gas_bill.building_id),
            )
            .into());
        }
        Ok(Some(gas_bill))
    }
}
