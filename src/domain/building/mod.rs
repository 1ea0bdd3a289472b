pub mod model;
pub mod repository;

pub use model::Building;
pub use repository::BuildingRepository;
