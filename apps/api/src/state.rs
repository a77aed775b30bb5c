use std::sync::{Arc, Mutex, MutexGuard};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex as AsyncMutex;

use crate::auth::AuthClient;
use crate::config::Config;
use crate::models::content::ContentType;
use crate::storage::ContentStore;

/// One lock per generator panel. A panel runs at most one generation at a time.
#[derive(Default)]
pub struct PanelLocks {
    blog: AsyncMutex<()>,
    social: AsyncMutex<()>,
    docs: AsyncMutex<()>,
    marketing: AsyncMutex<()>,
}

impl PanelLocks {
    pub fn for_panel(&self, panel: ContentType) -> &AsyncMutex<()> {
        match panel {
            ContentType::Blog => &self.blog,
            ContentType::Social => &self.social,
            ContentType::Docs => &self.docs,
            ContentType::Marketing => &self.marketing,
        }
    }
}

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    /// `None` when AUTH_URL / AUTH_ANON_KEY are not configured.
    pub auth: Option<AuthClient>,
    pub config: Config,
    /// Seeded from RNG_SEED when set. Never held across an `.await`.
    pub rng: Arc<Mutex<StdRng>>,
    pub panels: Arc<PanelLocks>,
}

impl AppState {
    pub fn new(store: Arc<dyn ContentStore>, auth: Option<AuthClient>, config: Config) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            store,
            auth,
            config,
            rng: Arc::new(Mutex::new(rng)),
            panels: Arc::new(PanelLocks::default()),
        }
    }

    /// Locks the shared RNG. A poisoned lock still yields a usable generator.
    pub fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
