pub mod dto;
pub mod handlers;

pub use dto::{
    CreateGasBillRequest, CreateWaterBillRequest, DebtEntryDto, ExtraChargeDto, GasBillResponse,
    SetDebtRequest, WaterBillResponse,
};
