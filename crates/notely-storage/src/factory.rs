#[cfg(feature = "storage-local")]
use crate::LocalStorage;
#[cfg(feature = "storage-s3")]
use crate::S3Storage;
use crate::{Storage, StorageBackend, StorageError, StorageResult};
use notely_core::Config;
use std::sync::Arc;

/// Create a storage backend based on configuration
///
/// Required configuration that is absent fails construction here, at
/// startup, rather than on the first request.
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    let backend = config.storage_backend().unwrap_or(StorageBackend::Local);

    match backend {
        #[cfg(feature = "storage-s3")]
        StorageBackend::S3 => {
            let bucket = config
                .s3_bucket()
                .map(String::from)
                .ok_or_else(|| StorageError::ConfigError("S3_BUCKET not configured".to_string()))?;
            let region = config
                .s3_region()
                .map(String::from)
                .or_else(|| config.aws_region().map(String::from))
                .ok_or_else(|| {
                    StorageError::ConfigError("S3_REGION or AWS_REGION not configured".to_string())
                })?;
            if config.aws_access_key_id().is_none() || config.aws_secret_access_key().is_none() {
                return Err(StorageError::ConfigError(
                    "AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY must be set for the S3 backend"
                        .to_string(),
                ));
            }
            let endpoint = config.s3_endpoint().map(String::from);

            let storage = S3Storage::new(bucket, region, endpoint).await?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-s3"))]
        StorageBackend::S3 => Err(StorageError::ConfigError(
            "S3 storage backend not available (storage-s3 feature not enabled)".to_string(),
        )),

        #[cfg(feature = "storage-local")]
        StorageBackend::Local => {
            let storage = LocalStorage::new(config.local_storage_path()).await?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-local"))]
        StorageBackend::Local => Err(StorageError::ConfigError(
            "Local storage backend not available (storage-local feature not enabled)".to_string(),
        )),
    }
}

#[cfg(all(test, feature = "storage-s3"))]
mod tests {
    use super::*;
    use notely_core::config::BaseConfig;

    fn config_with(backend: StorageBackend) -> Config {
        Config {
            base: BaseConfig {
                server_port: 4000,
                cors_origins: vec!["*".to_string()],
                environment: "development".to_string(),
            },
            storage_backend: Some(backend),
            local_storage_path: std::env::temp_dir()
                .join("notely-factory-test")
                .to_string_lossy()
                .into_owned(),
            s3_bucket: None,
            s3_region: None,
            s3_endpoint: None,
            aws_region: None,
            aws_access_key_id: None,
            aws_secret_access_key: None,
        }
    }

    #[tokio::test]
    async fn test_s3_backend_requires_bucket() {
        let config = config_with(StorageBackend::S3);
        let result = create_storage(&config).await;
        assert!(matches!(result, Err(StorageError::ConfigError(_))));
    }

    #[tokio::test]
    async fn test_s3_backend_requires_credentials() {
        let mut config = config_with(StorageBackend::S3);
        config.s3_bucket = Some("notes".to_string());
        config.s3_region = Some("us-east-1".to_string());
        let result = create_storage(&config).await;
        assert!(matches!(result, Err(StorageError::ConfigError(_))));
    }

    #[cfg(feature = "storage-local")]
    #[tokio::test]
    async fn test_local_backend_from_config() {
        let config = config_with(StorageBackend::Local);
        let storage = create_storage(&config).await.unwrap();
        assert_eq!(storage.backend_type(), StorageBackend::Local);
    }
}
