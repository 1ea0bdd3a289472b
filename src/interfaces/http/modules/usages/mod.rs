pub mod dto;
pub mod handlers;

pub use dto::{CreateSnapshotRequest, ReadingDto, SnapshotResponse};
