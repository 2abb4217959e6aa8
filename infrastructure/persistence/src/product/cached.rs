use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

struct CachedProducts {
    products: Vec<Product>,
    fetched_at: Instant,
}

#[derive(Default)]
struct CacheState {
    entry: Option<CachedProducts>,
    /// Bumped by every write; a fetch started under an older generation is not stored.
    generation: u64,
}

/// Keeps the full product list in memory for `ttl`.
///
/// Writes go straight to the inner repository and drop the cached copy.
pub struct CachedProductRepository {
    inner: Arc<dyn ProductRepository>,
    ttl: Duration,
    cache: RwLock<CacheState>,
}

impl CachedProductRepository {
    pub fn new(inner: Arc<dyn ProductRepository>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cache: RwLock::new(CacheState::default()),
        }
    }

    fn cached(&self) -> Option<Vec<Product>> {
        let cache = self.cache.read().ok()?;
        cache
            .entry
            .as_ref()
            .filter(|c| c.fetched_at.elapsed() < self.ttl)
            .map(|c| c.products.clone())
    }

    fn generation(&self) -> Option<u64> {
        self.cache.read().ok().map(|c| c.generation)
    }

    fn store(&self, products: &[Product], generation: u64) {
        if let Ok(mut cache) = self.cache.write() {
            if cache.generation != generation {
                tracing::debug!("Catalog changed during fetch, not caching the result");
                return;
            }
            cache.entry = Some(CachedProducts {
                products: products.to_vec(),
                fetched_at: Instant::now(),
            });
        }
    }

    fn invalidate(&self) {
        if let Ok(mut cache) = self.cache.write() {
            cache.entry = None;
            cache.generation = cache.generation.wrapping_add(1);
        }
    }
}

#[async_trait]
impl ProductRepository for CachedProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        if let Some(products) = self.cached() {
            return Ok(products);
        }

        let generation = self.generation();
        let products = self.inner.get_all().await?;
        tracing::debug!("Catalog fetched with {} products", products.len());

        if let Some(generation) = generation {
            self.store(&products, generation);
        }
        Ok(products)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        if let Some(product) = self
            .cached()
            .and_then(|products| products.into_iter().find(|p| p.id == id))
        {
            return Ok(product);
        }
        self.inner.get_by_id(id).await
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let result = self.inner.save(product).await;
        self.invalidate();
        result
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = self.inner.delete(id).await;
        self.invalidate();
        result
    }

    async fn get_available(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self.get_all().await?;
        Ok(products.into_iter().filter(|p| p.is_available).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::value_objects::Price;
    use chrono::Utc;
    use mockall::mock;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::{Mutex, oneshot};

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn get_available(&self) -> Result<Vec<Product>, RepositoryError>;
        }
    }

    fn product(name: &str, available: bool) -> Product {
        Product::from_repository(
            Uuid::new_v4(),
            name.to_string(),
            None,
            "Lanches".to_string(),
            Price::from_cents(2000),
            false,
            None,
            None,
            available,
            false,
            Utc::now(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_serve_repeated_reads_from_cache() {
        let mut inner = MockProductRepo::new();
        inner
            .expect_get_all()
            .times(1)
            .returning(|| Ok(vec![product("X-Egg", true), product("X-Frango", false)]));

        let repo = CachedProductRepository::new(Arc::new(inner), Duration::from_secs(300));

        assert_eq!(repo.get_all().await.unwrap().len(), 2);
        assert_eq!(repo.get_available().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_refetch_after_write() {
        let mut inner = MockProductRepo::new();
        inner
            .expect_get_all()
            .times(2)
            .returning(|| Ok(vec![product("X-Egg", true)]));
        inner.expect_save().times(1).returning(|_| Ok(()));

        let repo = CachedProductRepository::new(Arc::new(inner), Duration::from_secs(300));

        repo.get_all().await.unwrap();
        repo.save(&product("X-Calabresa", true)).await.unwrap();
        repo.get_all().await.unwrap();
    }

    /// Inner repository whose `get_all` parks until the test releases it.
    struct GatedCatalog {
        calls: AtomicUsize,
        started: Mutex<Option<oneshot::Sender<()>>>,
        release: Mutex<Option<oneshot::Receiver<()>>>,
    }

    #[async_trait]
    impl ProductRepository for GatedCatalog {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(started) = self.started.lock().await.take() {
                let _ = started.send(());
            }
            let release = self.release.lock().await.take();
            if let Some(release) = release {
                let _ = release.await;
            }
            Ok(vec![product("Pizza Grande", true)])
        }
        async fn get_by_id(&self, _id: Uuid) -> Result<Product, RepositoryError> {
            Err(RepositoryError::NotFound)
        }
        async fn save(&self, _product: &Product) -> Result<(), RepositoryError> {
            Ok(())
        }
        async fn delete(&self, _id: Uuid) -> Result<(), RepositoryError> {
            Ok(())
        }
        async fn get_available(&self) -> Result<Vec<Product>, RepositoryError> {
            self.get_all().await
        }
    }

    #[tokio::test]
    async fn should_not_cache_list_fetched_before_concurrent_write() {
        let (started_tx, started_rx) = oneshot::channel();
        let (release_tx, release_rx) = oneshot::channel();
        let inner = Arc::new(GatedCatalog {
            calls: AtomicUsize::new(0),
            started: Mutex::new(Some(started_tx)),
            release: Mutex::new(Some(release_rx)),
        });
        let repo = Arc::new(CachedProductRepository::new(
            inner.clone(),
            Duration::from_secs(300),
        ));

        let reader = {
            let repo = repo.clone();
            tokio::spawn(async move { repo.get_all().await })
        };
        started_rx.await.unwrap();
        repo.save(&product("Pizza Grande", false)).await.unwrap();
        release_tx.send(()).unwrap();
        reader.await.unwrap().unwrap();

        repo.get_all().await.unwrap();

        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn should_refetch_when_ttl_elapsed() {
        let mut inner = MockProductRepo::new();
        inner.expect_get_all().times(2).returning(|| Ok(vec![]));

        let repo = CachedProductRepository::new(Arc::new(inner), Duration::ZERO);

        repo.get_all().await.unwrap();
        repo.get_all().await.unwrap();
    }

    #[tokio::test]
    async fn should_find_cached_product_by_id() {
        let cached = product("Misto Quente", true);
        let id = cached.id;
        let mut inner = MockProductRepo::new();
        inner
            .expect_get_all()
            .returning(move || Ok(vec![cached.clone()]));
        inner.expect_get_by_id().never();

        let repo = CachedProductRepository::new(Arc::new(inner), Duration::from_secs(300));
        repo.get_all().await.unwrap();

        let found = repo.get_by_id(id).await.unwrap();

        assert_eq!(found.name, "Misto Quente");
    }
}
