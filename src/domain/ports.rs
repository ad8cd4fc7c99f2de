use crate::domain::model::{CurationResult, PlayerRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn roster_endpoint(&self) -> &str;
    fn stats_endpoint(&self) -> &str;
    fn input_file(&self) -> &str;
    fn output_path(&self) -> &str;
    fn concurrent_requests(&self) -> usize;
    fn request_delay_ms(&self) -> u64;
    fn timeout_seconds(&self) -> u64;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<PlayerRecord>>;
    async fn transform(&self, players: Vec<PlayerRecord>) -> Result<CurationResult>;
    async fn load(&self, result: CurationResult) -> Result<String>;
}
