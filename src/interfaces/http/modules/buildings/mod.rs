pub mod dto;
pub mod handlers;

pub use dto::{BuildingResponse, CreateBuildingRequest};
