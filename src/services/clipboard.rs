use async_trait::async_trait;

use crate::error::AppResult;

#[async_trait]
pub trait ClipboardService: Send + Sync {
    async fn copy(&self, text: &str) -> AppResult<()>;
}
