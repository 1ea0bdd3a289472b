pub mod allocations;
pub mod bills;
pub mod buildings;
pub mod health;
pub mod usages;
