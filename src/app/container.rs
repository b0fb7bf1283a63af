//! Dependency injection container for the noughts application.
//!
//! The container owns the persistence dependency and provides factory methods
//! for creating, saving and restoring learning agents.

use std::{path::Path, sync::Arc};

use super::config::AgentConfig;
use crate::{
    Result,
    adapters::{JsonRepository, repository_for_path},
    agents::LearningAgent,
    ports::ValueTableRepository,
};

/// Application with dependency injection.
///
/// # Examples
///
/// ## Production usage
///
/// ```
/// use noughts::app::{AgentConfig, App};
///
/// let app = App::new();
/// let agent = app.create_agent("agent", AgentConfig::default().with_seed(42))?;
/// # Ok::<(), noughts::Error>(())
/// ```
///
/// ## Testing with dependency injection
///
/// ```
/// use noughts::adapters::InMemoryRepository;
/// use noughts::app::App;
///
/// let app = App::for_testing()
///     .with_repository(InMemoryRepository::new())
///     .with_default_seed(42)
///     .build();
/// ```
pub struct App {
    /// Repository for value table persistence
    repository: Arc<dyn ValueTableRepository + Send + Sync>,
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create a new app with production defaults.
    ///
    /// Uses:
    /// - `JsonRepository` for value table persistence
    /// - No default seed (non-deterministic RNG)
    pub fn new() -> Self {
        Self {
            repository: Arc::new(JsonRepository::new()),
            default_seed: None,
        }
    }

    /// Create an app whose repository matches a policy file's extension.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnsupportedFormat`] for unknown extensions.
    pub fn for_path(path: &Path) -> Result<Self> {
        Ok(Self {
            repository: Arc::from(repository_for_path(path)?),
            default_seed: None,
        })
    }

    /// Create a builder for constructing app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// Get the value table repository.
    pub fn repository(&self) -> Arc<dyn ValueTableRepository + Send + Sync> {
        Arc::clone(&self.repository)
    }

    /// Create a new learning agent with an empty value table.
    ///
    /// A seed in `config` wins over the container's default seed.
    pub fn create_agent(&self, name: &str, mut config: AgentConfig) -> Result<LearningAgent> {
        if config.seed.is_none() {
            config.seed = self.default_seed;
        }
        LearningAgent::new(name, config)
    }

    /// Create an agent and fill its value table from persistent storage.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    ///
    /// use noughts::app::{AgentConfig, App};
    ///
    /// let app = App::new();
    /// let agent = app.load_agent("agent", AgentConfig::default(), Path::new("policy.json"))?;
    /// # Ok::<(), noughts::Error>(())
    /// ```
    pub fn load_agent(&self, name: &str, config: AgentConfig, path: &Path) -> Result<LearningAgent> {
        let mut agent = self.create_agent(name, config)?;
        agent.load_policy(self.repository.as_ref(), path)?;
        Ok(agent)
    }

    /// Save an agent's value table to persistent storage.
    pub fn save_agent(&self, agent: &LearningAgent, path: &Path) -> Result<()> {
        agent.save_policy(self.repository.as_ref(), path)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing app with custom dependencies.
///
/// Primarily used for testing to inject in-memory repositories and control randomness.
pub struct AppBuilder {
    repository: Option<Arc<dyn ValueTableRepository + Send + Sync>>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    /// Create a new app builder.
    pub fn new() -> Self {
        Self {
            repository: None,
            default_seed: None,
        }
    }

    /// Set a custom value table repository.
    pub fn with_repository<R: ValueTableRepository + Send + Sync + 'static>(
        mut self,
        repo: R,
    ) -> Self {
        self.repository = Some(Arc::new(repo));
        self
    }

    /// Set a default random seed for all agents created by this container.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build the app with the configured dependencies.
    ///
    /// If no repository was specified, uses `JsonRepository` by default.
    pub fn build(self) -> App {
        App {
            repository: self
                .repository
                .unwrap_or_else(|| Arc::new(JsonRepository::new())),
            default_seed: self.default_seed,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
