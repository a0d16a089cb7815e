// Cache-backed repository fetcher.
// Serves fresh cache entries directly and otherwise makes one API call.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::cache::{ExpiringCache, KeyValueStore};
use crate::error::Result;
use crate::github::endpoints::MAX_PER_PAGE;
use crate::github::{GitHubClient, Repository};

/// Result of a fetch. Failures never escape the fetcher as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(Vec<Repository>),
    Unavailable,
}

/// Where repository records come from on a cache miss.
pub trait RepoSource {
    fn list_repositories(&mut self) -> impl Future<Output = Result<Vec<Repository>>> + Send;
}

/// Repositories owned by one GitHub user.
pub struct UserRepos {
    client: GitHubClient,
    user: String,
}

impl UserRepos {
    pub fn new(client: GitHubClient, user: impl Into<String>) -> Self {
        Self {
            client,
            user: user.into(),
        }
    }
}

impl RepoSource for UserRepos {
    async fn list_repositories(&mut self) -> Result<Vec<Repository>> {
        let repos = self.client.get_user_repos(&self.user, MAX_PER_PAGE).await?;
        let limit = self.client.rate_limit();
        tracing::debug!(
            remaining = limit.remaining,
            limit = limit.limit,
            "GitHub rate limit"
        );
        Ok(repos)
    }
}

struct Inner<S, K> {
    source: S,
    cache: ExpiringCache<K>,
    generation: u64,
    last: Option<FetchOutcome>,
}

impl<S: RepoSource, K: KeyValueStore> Inner<S, K> {
    async fn load(&mut self, now: DateTime<Utc>) -> FetchOutcome {
        if let Some(repos) = self.cache.read::<Vec<Repository>>(now) {
            tracing::debug!(count = repos.len(), "serving repositories from cache");
            return FetchOutcome::Loaded(repos);
        }

        match self.source.list_repositories().await {
            Ok(repos) => {
                // A failed write still leaves us with good data to show.
                if let Err(e) = self.cache.write(&repos, now) {
                    tracing::warn!(error = %e, "failed to cache repositories");
                }
                tracing::info!(count = repos.len(), "fetched repositories");
                FetchOutcome::Loaded(repos)
            }
            Err(e) => {
                tracing::warn!(error = %e, "repository fetch failed");
                FetchOutcome::Unavailable
            }
        }
    }
}

/// Read-through fetcher with a single-flight guard.
///
/// Callers that arrive while a fetch is in flight wait for it and receive
/// its outcome instead of starting another request.
pub struct Fetcher<S, K> {
    inner: Mutex<Inner<S, K>>,
    completed: AtomicU64,
}

impl<S: RepoSource, K: KeyValueStore> Fetcher<S, K> {
    pub fn new(source: S, cache: ExpiringCache<K>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                source,
                cache,
                generation: 0,
                last: None,
            }),
            completed: AtomicU64::new(0),
        }
    }

    pub async fn get_repositories(&self) -> FetchOutcome {
        self.get_repositories_at(Utc::now()).await
    }

    /// Same as [`Fetcher::get_repositories`] with an explicit clock.
    pub async fn get_repositories_at(&self, now: DateTime<Utc>) -> FetchOutcome {
        let seen = self.completed.load(Ordering::Acquire);
        let mut inner = self.inner.lock().await;

        if inner.generation != seen
            && let Some(outcome) = &inner.last
        {
            return outcome.clone();
        }

        let outcome = inner.load(now).await;
        inner.generation += 1;
        inner.last = Some(outcome.clone());
        self.completed.store(inner.generation, Ordering::Release);
        outcome
    }
}
