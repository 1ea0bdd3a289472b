pub mod model;
pub mod repository;

pub use model::{UnitReading, UsageSnapshot};
pub use repository::UsageRepository;
