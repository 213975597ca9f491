use async_trait::async_trait;
use mockall::mock;

use crate::blob::BlobStore;

// Mock slot store for failure-path tests
mock! {
    pub BlobStore {}

    #[async_trait]
    impl BlobStore for BlobStore {
        async fn read(&self, key: &str) -> eyre::Result<Option<String>>;
        async fn write(&self, key: &str, value: &str) -> eyre::Result<()>;
    }
}
