pub mod allocation;

pub use allocation::{AllocateCommand, AllocationService};
