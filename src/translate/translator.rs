use crate::error::WorkflowError;
use crate::language::Language;

/// Text translation service the orchestrator calls into.
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Service name for logging.
    fn name(&self) -> &str;

    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, WorkflowError>;
}
