use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::models::ServiceOffering;
use crate::domain::catalog::ports::CatalogRepository;
use crate::domain::catalog::ports::CatalogServicePort;

/// Catalog service with a fixed time-to-live response cache.
///
/// The whole listing is cached under a single key; there is no other
/// eviction than expiry.
pub struct CatalogService<CR>
where
    CR: CatalogRepository,
{
    repository: Arc<CR>,
    cache: Cache<(), Arc<Vec<ServiceOffering>>>,
}

impl<CR> CatalogService<CR>
where
    CR: CatalogRepository,
{
    pub fn new(repository: Arc<CR>, time_to_live: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(time_to_live)
            .build();

        Self { repository, cache }
    }
}

#[async_trait]
impl<CR> CatalogServicePort for CatalogService<CR>
where
    CR: CatalogRepository,
{
    async fn list_services(&self) -> Result<Vec<ServiceOffering>, CatalogError> {
        let repository = Arc::clone(&self.repository);

        // Concurrent misses share one database read.
        let offerings = self
            .cache
            .try_get_with((), async move {
                tracing::debug!("Services catalog cache miss");
                repository.list_all().await.map(Arc::new)
            })
            .await
            .map_err(|e| CatalogError::clone(&e))?;

        Ok(offerings.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use uuid::Uuid;

    use super::*;

    mock! {
        pub TestCatalogRepository {}

        #[async_trait]
        impl CatalogRepository for TestCatalogRepository {
            async fn list_all(&self) -> Result<Vec<ServiceOffering>, CatalogError>;
        }
    }

    fn offering() -> ServiceOffering {
        ServiceOffering {
            id: Uuid::new_v4(),
            service: "Web design".to_string(),
            description: "Landing pages".to_string(),
            price: "$500".to_string(),
            provider: "Studio".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_services_is_cached() {
        let mut repository = MockTestCatalogRepository::new();

        repository
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![offering()]));

        let service = CatalogService::new(Arc::new(repository), Duration::from_secs(600));

        let first = service.list_services().await.unwrap();
        let second = service.list_services().await.unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_list_services_reloads_after_expiry() {
        let mut repository = MockTestCatalogRepository::new();

        repository
            .expect_list_all()
            .times(2)
            .returning(|| Ok(vec![offering()]));

        let service = CatalogService::new(Arc::new(repository), Duration::from_millis(50));

        service.list_services().await.unwrap();
        tokio::time::sleep(Duration::from_millis(120)).await;
        service.list_services().await.unwrap();
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let mut repository = MockTestCatalogRepository::new();
        let mut calls = 0;

        repository.expect_list_all().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Err(CatalogError::DatabaseError("unavailable".to_string()))
            } else {
                Ok(vec![offering()])
            }
        });

        let service = CatalogService::new(Arc::new(repository), Duration::from_secs(600));

        assert!(service.list_services().await.is_err());
        assert_eq!(service.list_services().await.unwrap().len(), 1);
    }
}
