mod storage;

pub use storage::{IFeedbackStorage, IWeightHistoryStorage};
