pub mod model;
pub mod recorder;
pub mod repository;
pub mod repository_sqlx;

pub use model::PriceRecord;
pub use recorder::{HistoryRecorder, RecordOutcome};
pub use repository::HistoryRepository;
pub use repository_sqlx::SqlxHistoryRepository;
