//! SeaORM implementation of BillingRepository

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::domain::billing::{BillingRepository, DebtLedger, ExtraCharge, GasBill, WaterBill};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{debt, extra_charge, gas_bill, water_bill};

use super::{db_err, txn_err};

fn water_to_domain(w: water_bill::Model) -> WaterBill {
    WaterBill {
        id: w.id,
        building_id: w.building_id,
        total_payment: w.total_payment,
        consumption_price: w.consumption_price,
        period_start: w.period_start,
        period_end: w.period_end,
        created_at: w.created_at,
    }
}

fn gas_to_domain(g: gas_bill::Model) -> GasBill {
    GasBill {
        id: g.id,
        building_id: g.building_id,
        total_payment: g.total_payment,
        created_at: g.created_at,
    }
}

fn charge_to_domain(c: extra_charge::Model) -> ExtraCharge {
    ExtraCharge {
        id: c.id,
        water_bill_id: c.water_bill_id,
        title: c.title,
        amount: c.amount,
        position: c.position,
    }
}

pub struct SeaOrmBillingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBillingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BillingRepository for SeaOrmBillingRepository {
    async fn find_water_bill(&self, id: i32) -> DomainResult<Option<WaterBill>> {
        let model = water_bill::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(water_to_domain))
    }

    async fn find_water_bills_for_building(
        &self,
        building_id: i32,
    ) -> DomainResult<Vec<WaterBill>> {
        let models = water_bill::Entity::find()
            .filter(water_bill::Column::BuildingId.eq(building_id))
            .order_by_asc(water_bill::Column::PeriodStart)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(water_to_domain).collect())
    }

    async fn save_water_bill(
        &self,
        bill: WaterBill,
        extra_charges: Vec<ExtraCharge>,
    ) -> DomainResult<WaterBill> {
        let saved = self
            .db
            .transaction::<_, WaterBill, DomainError>(|txn| {
                Box::pin(async move {
                    let model = water_bill::ActiveModel {
                        id: Set(0),
                        building_id: Set(bill.building_id),
                        total_payment: Set(bill.total_payment),
                        consumption_price: Set(bill.consumption_price),
                        period_start: Set(bill.period_start),
                        period_end: Set(bill.period_end),
                        created_at: Set(Utc::now()),
                    };
                    let inserted = model.insert(txn).await.map_err(db_err)?;

                    for (position, charge) in extra_charges.into_iter().enumerate() {
                        let row = extra_charge::ActiveModel {
                            id: Set(0),
                            water_bill_id: Set(inserted.id),
                            title: Set(charge.title),
                            amount: Set(charge.amount),
                            position: Set(position as i32),
                        };
                        row.insert(txn).await.map_err(db_err)?;
                    }

                    Ok(water_to_domain(inserted))
                })
            })
            .await
            .map_err(txn_err)?;

        info!(
            "Water bill saved: building={} total={} ({})",
            saved.building_id, saved.total_payment, saved.id
        );
        Ok(saved)
    }

    async fn find_gas_bill(&self, id: i32) -> DomainResult<Option<GasBill>> {
        let model = gas_bill::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(gas_to_domain))
    }

    async fn find_gas_bills_for_building(&self, building_id: i32) -> DomainResult<Vec<GasBill>> {
        let models = gas_bill::Entity::find()
            .filter(gas_bill::Column::BuildingId.eq(building_id))
            .order_by_asc(gas_bill::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(gas_to_domain).collect())
    }

    async fn save_gas_bill(&self, bill: GasBill) -> DomainResult<GasBill> {
        let model = gas_bill::ActiveModel {
            id: Set(0),
            building_id: Set(bill.building_id),
            total_payment: Set(bill.total_payment),
            created_at: Set(Utc::now()),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!(
            "Gas bill saved: building={} total={} ({})",
            result.building_id, result.total_payment, result.id
        );
        Ok(gas_to_domain(result))
    }

    async fn extra_charges_for(&self, water_bill_id: i32) -> DomainResult<Vec<ExtraCharge>> {
        let models = extra_charge::Entity::find()
            .filter(extra_charge::Column::WaterBillId.eq(water_bill_id))
            .order_by_asc(extra_charge::Column::Position)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(charge_to_domain).collect())
    }

    async fn debts_for(&self, building_id: i32) -> DomainResult<DebtLedger> {
        let models = debt::Entity::find()
            .filter(debt::Column::BuildingId.eq(building_id))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(|d| (d.unit, d.amount)).collect())
    }

    async fn set_debt(&self, building_id: i32, unit: i32, amount: i64) -> DomainResult<()> {
        let existing = debt::Entity::find()
            .filter(debt::Column::BuildingId.eq(building_id))
            .filter(debt::Column::Unit.eq(unit))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        match existing {
            Some(row) if amount == 0 => {
                debt::Entity::delete_by_id(row.id)
                    .exec(&self.db)
                    .await
                    .map_err(db_err)?;
            }
            Some(row) => {
                let mut model: debt::ActiveModel = row.into();
                model.amount = Set(amount);
                model.update(&self.db).await.map_err(db_err)?;
            }
            None if amount == 0 => {}
            None => {
                let model = debt::ActiveModel {
                    id: Set(0),
                    building_id: Set(building_id),
                    unit: Set(unit),
                    amount: Set(amount),
                };
                model.insert(&self.db).await.map_err(db_err)?;
            }
        }

        info!(
            "Debt entry set: building={} unit={} amount={}",
            building_id, unit, amount
        );
        Ok(())
    }
}
