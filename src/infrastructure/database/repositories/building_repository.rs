//! SeaORM implementation of BuildingRepository

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::building::{Building, BuildingRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::building;

use super::db_err;

fn entity_to_domain(b: building::Model) -> Building {
    Building {
        id: b.id,
        name: b.name,
        units: b.units,
        created_at: b.created_at,
    }
}

pub struct SeaOrmBuildingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBuildingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BuildingRepository for SeaOrmBuildingRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Building>> {
        let model = building::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Building>> {
        let models = building::Entity::find()
            .order_by_asc(building::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn save(&self, b: Building) -> DomainResult<Building> {
        let model = building::ActiveModel {
            id: Set(0),
            name: Set(b.name),
            units: Set(b.units),
            created_at: Set(Utc::now()),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Building saved: {} ({})", result.name, result.id);
        Ok(entity_to_domain(result))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = building::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Building",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}
