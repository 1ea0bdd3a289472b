pub mod allocation;
pub mod billing;
pub mod building;
pub mod error;
pub mod repositories;
pub mod usage;

// Re-export commonly used types
pub use allocation::{AllocationResult, AllocationRun, ComputedAllocation, UnitAllocation};
pub use billing::{DebtLedger, ExtraCharge, GasBill, WaterBill};
pub use building::Building;
pub use error::{ComputationError, DomainError, DomainResult, ValidationError, Violation};
pub use repositories::RepositoryProvider;
pub use usage::{UnitReading, UsageSnapshot};
