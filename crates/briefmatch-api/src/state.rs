//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and REST API.
//! Services are generic over repository and embedder traits; AppState pins
//! them to the SQLite repositories and a runtime-selected embedder.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use briefmatch_core::embedding::box_embedder::BoxEmbedder;
use briefmatch_core::embedding::hashed::HashedEmbedder;
use briefmatch_core::service::feedback::FeedbackService;
use briefmatch_core::service::matching::MatchService;
use briefmatch_core::service::talent::TalentService;
use briefmatch_infra::config::{load_global_config, resolve_api_key, resolve_data_dir};
use briefmatch_infra::embedding::huggingface::HuggingFaceEmbedder;
use briefmatch_infra::sqlite::brief::SqliteBriefRepository;
use briefmatch_infra::sqlite::feedback::SqliteFeedbackRepository;
use briefmatch_infra::sqlite::pool::{DatabasePool, database_url};
use briefmatch_infra::sqlite::talent::SqliteTalentRepository;
use briefmatch_types::config::{EmbeddingConfig, GlobalConfig};

/// Pause between sample inserts when seeding against the remote provider.
const ONLINE_SEED_DELAY: Duration = Duration::from_secs(1);

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteMatchService =
    MatchService<SqliteTalentRepository, SqliteBriefRepository, BoxEmbedder>;

pub type ConcreteTalentService = TalentService<SqliteTalentRepository, BoxEmbedder>;

pub type ConcreteFeedbackService = FeedbackService<SqliteFeedbackRepository>;

/// Shared application state holding all services.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub match_service: Arc<ConcreteMatchService>,
    pub talent_service: Arc<ConcreteTalentService>,
    pub feedback_service: Arc<ConcreteFeedbackService>,
    pub config: Arc<GlobalConfig>,
    pub data_dir: PathBuf,
}

/// Build the embedder selected by config.
///
/// In offline mode the hashed embedder is used directly and no network call
/// is ever made.
pub fn build_embedder(config: &EmbeddingConfig, offline: bool) -> anyhow::Result<BoxEmbedder> {
    if offline {
        tracing::info!(dimension = config.dimension, "Using offline hashed embedder");
        return Ok(BoxEmbedder::new(HashedEmbedder::new(config.dimension)));
    }

    let api_key = resolve_api_key(config);
    if api_key.is_none() {
        tracing::debug!(env = %config.api_key_env, "No embedding API key set, calling provider anonymously");
    }
    let embedder = HuggingFaceEmbedder::new(config, api_key)?;
    Ok(BoxEmbedder::new(embedder))
}

impl AppState {
    /// Initialize the application state: load config, connect to DB, wire services.
    pub async fn init(offline: bool) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_global_config(&data_dir).await;

        let db_pool = DatabasePool::new(&database_url(&data_dir)).await?;

        let seed_delay = if offline { Duration::ZERO } else { ONLINE_SEED_DELAY };
        let embedding = config.embedding.clone();
        Self::from_parts(db_pool, config, data_dir, seed_delay, || {
            build_embedder(&embedding, offline)
        })
    }

    /// Wire services over an open pool. `make_embedder` is called once per
    /// service that embeds text.
    pub fn from_parts<F>(
        db_pool: DatabasePool,
        config: GlobalConfig,
        data_dir: PathBuf,
        seed_delay: Duration,
        make_embedder: F,
    ) -> anyhow::Result<Self>
    where
        F: Fn() -> anyhow::Result<BoxEmbedder>,
    {
        let match_service = MatchService::new(
            SqliteTalentRepository::new(db_pool.clone()),
            SqliteBriefRepository::new(db_pool.clone()),
            make_embedder()?,
        );

        let talent_service =
            TalentService::new(SqliteTalentRepository::new(db_pool.clone()), make_embedder()?)
                .with_seed_delay(seed_delay);

        let feedback_service = FeedbackService::new(SqliteFeedbackRepository::new(db_pool));

        Ok(Self {
            match_service: Arc::new(match_service),
            talent_service: Arc::new(talent_service),
            feedback_service: Arc::new(feedback_service),
            config: Arc::new(config),
            data_dir,
        })
    }
}
