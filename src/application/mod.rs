//! Application layer: allocation core and orchestration services.

pub mod allocation;
pub mod services;

pub use allocation::{AllocationEngine, ConsistencyGuard};
pub use services::{AllocateCommand, AllocationService};
