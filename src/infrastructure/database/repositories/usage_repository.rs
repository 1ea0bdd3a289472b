//! SeaORM implementation of UsageRepository

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::domain::usage::{UnitReading, UsageRepository, UsageSnapshot};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{unit_reading, usage_snapshot};

use super::{db_err, txn_err};

fn entity_to_domain(s: usage_snapshot::Model, readings: Vec<unit_reading::Model>) -> UsageSnapshot {
    UsageSnapshot {
        id: s.id,
        building_id: s.building_id,
        taken_on: s.taken_on,
        created_at: s.created_at,
        updated_at: s.updated_at,
        readings: readings
            .into_iter()
            .map(|r| UnitReading {
                unit: r.unit,
                liters: r.liters,
            })
            .collect(),
    }
}

pub struct SeaOrmUsageRepository {
    db: DatabaseConnection,
}

impl SeaOrmUsageRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn readings_for(&self, snapshot_id: i32) -> DomainResult<Vec<unit_reading::Model>> {
        unit_reading::Entity::find()
            .filter(unit_reading::Column::SnapshotId.eq(snapshot_id))
            .order_by_asc(unit_reading::Column::Unit)
            .all(&self.db)
            .await
            .map_err(db_err)
    }
}

#[async_trait]
impl UsageRepository for SeaOrmUsageRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<UsageSnapshot>> {
        let model = usage_snapshot::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(model) = model else {
            return Ok(None);
        };

        let readings = self.readings_for(model.id).await?;
        Ok(Some(entity_to_domain(model, readings)))
    }

    async fn find_for_building(&self, building_id: i32) -> DomainResult<Vec<UsageSnapshot>> {
        let models = usage_snapshot::Entity::find()
            .filter(usage_snapshot::Column::BuildingId.eq(building_id))
            .order_by_asc(usage_snapshot::Column::TakenOn)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut snapshots = Vec::with_capacity(models.len());
        for model in models {
            let readings = self.readings_for(model.id).await?;
            snapshots.push(entity_to_domain(model, readings));
        }
        Ok(snapshots)
    }

    async fn save(&self, snapshot: UsageSnapshot) -> DomainResult<UsageSnapshot> {
        let saved = self
            .db
            .transaction::<_, UsageSnapshot, DomainError>(|txn| {
                Box::pin(async move {
                    let now = Utc::now();
                    let model = usage_snapshot::ActiveModel {
                        id: Set(0),
                        building_id: Set(snapshot.building_id),
                        taken_on: Set(snapshot.taken_on),
                        created_at: Set(now),
                        updated_at: Set(now),
                    };
                    let inserted = model.insert(txn).await.map_err(db_err)?;

                    let mut readings = Vec::with_capacity(snapshot.readings.len());
                    for reading in &snapshot.readings {
                        let row = unit_reading::ActiveModel {
                            id: Set(0),
                            snapshot_id: Set(inserted.id),
                            unit: Set(reading.unit),
                            liters: Set(reading.liters),
                        };
                        readings.push(row.insert(txn).await.map_err(db_err)?);
                    }

                    Ok(entity_to_domain(inserted, readings))
                })
            })
            .await
            .map_err(txn_err)?;

        info!(
            "Usage snapshot saved: building={} date={} readings={} ({})",
            saved.building_id,
            saved.taken_on,
            saved.readings.len(),
            saved.id
        );
        Ok(saved)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        self.db
            .transaction::<_, (), DomainError>(move |txn| {
                Box::pin(async move {
                    unit_reading::Entity::delete_many()
                        .filter(unit_reading::Column::SnapshotId.eq(id))
                        .exec(txn)
                        .await
                        .map_err(db_err)?;

                    let result = usage_snapshot::Entity::delete_by_id(id)
                        .exec(txn)
                        .await
                        .map_err(db_err)?;
                    if result.rows_affected == 0 {
                        return Err(DomainError::NotFound {
                            entity: "UsageSnapshot",
                            field: "id",
                            value: id.to_string(),
                        });
                    }
                    Ok(())
                })
            })
            .await
            .map_err(txn_err)
    }
}
