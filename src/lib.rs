pub mod analysis;
pub mod cli;
pub mod environment;
pub mod error;
pub mod extraction;
pub mod store;
pub mod tailor;
pub mod workflow;

pub use analysis::JdAnalysis;
pub use environment::EnvironmentConfig;
pub use error::TailorError;
pub use extraction::JdRecord;
pub use tailor::MergeOptions;
pub use workflow::TailorWorkflow;
