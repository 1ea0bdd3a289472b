pub mod model;
pub mod repository;

pub use model::{DebtLedger, ExtraCharge, GasBill, WaterBill};
pub use repository::BillingRepository;
