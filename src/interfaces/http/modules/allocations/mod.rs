pub mod dto;
pub mod handlers;

pub use dto::{AllocationResponse, RunAllocationRequest, UnitAllocationDto};
