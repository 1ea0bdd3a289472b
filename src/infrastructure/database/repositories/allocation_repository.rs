//! SeaORM implementation of AllocationRepository
//!
//! The audit vectors (deltas, raw prices, reconciled prices, debts) are
//! stored as JSON text columns on the result row; per-unit figures get
//! their own rows. Result and unit rows are written in one transaction.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::domain::allocation::{AllocationRepository, AllocationResult, UnitAllocation};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{allocation_result, unit_allocation};

use super::{db_err, txn_err};

fn to_json<T: serde::Serialize>(value: &T) -> DomainResult<String> {
    serde_json::to_string(value).map_err(|e| DomainError::Storage(format!("JSON encode: {}", e)))
}

fn from_json<T: serde::de::DeserializeOwned>(raw: &str) -> DomainResult<T> {
    serde_json::from_str(raw).map_err(|e| DomainError::Storage(format!("JSON decode: {}", e)))
}

fn entity_to_domain(
    r: allocation_result::Model,
    units: Vec<unit_allocation::Model>,
) -> DomainResult<AllocationResult> {
    Ok(AllocationResult {
        id: r.id,
        building_id: r.building_id,
        water_bill_id: r.water_bill_id,
        gas_bill_id: r.gas_bill_id,
        previous_snapshot_id: r.previous_snapshot_id,
        current_snapshot_id: r.current_snapshot_id,
        deltas: from_json(&r.deltas)?,
        raw_prices: from_json(&r.raw_prices)?,
        ratio: r.ratio,
        reconciled_prices: from_json(&r.reconciled_prices)?,
        shared_extra: r.shared_extra,
        debts: from_json::<BTreeMap<i32, i64>>(&r.debts)?,
        units: units
            .into_iter()
            .map(|u| UnitAllocation {
                unit: u.unit,
                delta_liters: u.delta_liters,
                price: u.price,
                debt: u.debt,
                total_payable: u.total_payable,
            })
            .collect(),
        created_at: r.created_at,
    })
}

pub struct SeaOrmAllocationRepository {
    db: DatabaseConnection,
}

impl SeaOrmAllocationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn units_for(&self, result_id: i32) -> DomainResult<Vec<unit_allocation::Model>> {
        unit_allocation::Entity::find()
            .filter(unit_allocation::Column::ResultId.eq(result_id))
            .order_by_asc(unit_allocation::Column::Unit)
            .all(&self.db)
            .await
            .map_err(db_err)
    }
}

#[async_trait]
impl AllocationRepository for SeaOrmAllocationRepository {
    async fn save(&self, result: AllocationResult) -> DomainResult<AllocationResult> {
        let deltas = to_json(&result.deltas)?;
        let raw_prices = to_json(&result.raw_prices)?;
        let reconciled_prices = to_json(&result.reconciled_prices)?;
        let debts = to_json(&result.debts)?;

        let saved = self
            .db
            .transaction::<_, AllocationResult, DomainError>(|txn| {
                Box::pin(async move {
                    let model = allocation_result::ActiveModel {
                        id: Set(0),
                        building_id: Set(result.building_id),
                        water_bill_id: Set(result.water_bill_id),
                        gas_bill_id: Set(result.gas_bill_id),
                        previous_snapshot_id: Set(result.previous_snapshot_id),
                        current_snapshot_id: Set(result.current_snapshot_id),
                        ratio: Set(result.ratio),
                        shared_extra: Set(result.shared_extra),
                        deltas: Set(deltas),
                        raw_prices: Set(raw_prices),
                        reconciled_prices: Set(reconciled_prices),
                        debts: Set(debts),
                        created_at: Set(Utc::now()),
                    };
                    let inserted = model.insert(txn).await.map_err(db_err)?;

                    for unit in &result.units {
                        let row = unit_allocation::ActiveModel {
                            id: Set(0),
                            result_id: Set(inserted.id),
                            unit: Set(unit.unit),
                            delta_liters: Set(unit.delta_liters),
                            price: Set(unit.price),
                            debt: Set(unit.debt),
                            total_payable: Set(unit.total_payable),
                        };
                        row.insert(txn).await.map_err(db_err)?;
                    }

                    Ok(AllocationResult {
                        id: inserted.id,
                        created_at: inserted.created_at,
                        ..result
                    })
                })
            })
            .await
            .map_err(txn_err)?;

        info!(
            "Allocation result saved: building={} units={} ({})",
            saved.building_id,
            saved.units.len(),
            saved.id
        );
        Ok(saved)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<AllocationResult>> {
        let model = allocation_result::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(model) = model else {
            return Ok(None);
        };

        let units = self.units_for(model.id).await?;
        Ok(Some(entity_to_domain(model, units)?))
    }

    async fn find_for_building(&self, building_id: i32) -> DomainResult<Vec<AllocationResult>> {
        let models = allocation_result::Entity::find()
            .filter(allocation_result::Column::BuildingId.eq(building_id))
            .order_by_asc(allocation_result::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut results = Vec::with_capacity(models.len());
        for model in models {
            let units = self.units_for(model.id).await?;
            results.push(entity_to_domain(model, units)?);
        }
        Ok(results)
    }
}
