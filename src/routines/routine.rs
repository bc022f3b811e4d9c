use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutineError {
    #[error("Failed to load data")]
    LoadFailed,
    #[error("Failed to process data")]
    ProcessingFailed,
    #[error("Failed to export charts")]
    ExportFailed,
}

#[async_trait::async_trait]
pub trait Routine: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self) -> error_stack::Result<(), RoutineError>;
}
