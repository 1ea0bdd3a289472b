//! Pure allocation core: tariff, rounding, validation, engine.

pub mod engine;
pub mod guard;
pub mod rounding;
pub mod tariff;

pub use engine::AllocationEngine;
pub use guard::ConsistencyGuard;
pub use rounding::round_to_hundred;
pub use tariff::tariff_price;
