pub mod engine;
pub mod pipeline;
pub mod report;
pub mod rules;
pub mod scanner;

pub use crate::domain::model::{ExtractResult, LintReport, SourceFile};
pub use crate::domain::ports::{ConfigProvider, Pipeline, SourceProvider};
pub use crate::utils::error::Result;
