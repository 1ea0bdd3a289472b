pub mod model;
pub mod repository;

pub use model::{AllocationResult, AllocationRun, ComputedAllocation, UnitAllocation};
pub use repository::AllocationRepository;
