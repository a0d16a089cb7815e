// Command-line arguments and the resolved pipeline configuration.
// Everything the pipeline needs is gathered here once at startup.

use std::time::Duration;

use clap::Parser;

/// GitHub account shown when no `--user` is given.
pub const DEFAULT_USER: &str = "MirzaKhalilUlRehman";
/// Fixed key under which the repository list is cached.
pub const CACHE_KEY: &str = "gh_repos_cache_v1";
/// Number of repositories listed before the "See More" toggle.
pub const DEFAULT_THRESHOLD: usize = 13;
/// Shown in the project counter when the fetch fails.
pub const FALLBACK_PROJECTS: &str = "13";
/// Shown in the star counter when the fetch fails.
pub const FALLBACK_STARS: &str = "--";

/// folio - a terminal portfolio panel for a GitHub user's repositories
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Browse a GitHub user's top repositories", long_about = None)]
pub struct Args {
    /// GitHub user whose public repositories are listed
    #[arg(short, long, default_value = DEFAULT_USER)]
    pub user: String,

    /// Number of repositories visible before expanding the list
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: usize,

    /// Seconds a cached repository list stays fresh
    #[arg(long, default_value_t = 120)]
    pub ttl_secs: u64,

    /// Seconds to wait for the GitHub API before giving up
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Base URL of the GitHub REST API
    #[arg(long, default_value = "https://api.github.com")]
    pub api_base: String,

    /// Also hide archived repositories
    #[arg(long)]
    pub exclude_archived: bool,

    /// Keep the cache on disk instead of for this session only
    #[arg(long)]
    pub persist_cache: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Resolved configuration handed to the app and the fetch pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    pub user: String,
    pub api_base: String,
    pub token: Option<String>,
    pub cache_key: String,
    pub cache_ttl: Duration,
    pub persist_cache: bool,
    pub request_timeout: Duration,
    pub threshold: usize,
    pub exclude_archived: bool,
    pub counter_duration: Duration,
    pub counter_tick: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            api_base: "https://api.github.com".to_string(),
            token: None,
            cache_key: CACHE_KEY.to_string(),
            cache_ttl: Duration::from_millis(120_000),
            persist_cache: false,
            request_timeout: Duration::from_secs(10),
            threshold: DEFAULT_THRESHOLD,
            exclude_archived: false,
            counter_duration: Duration::from_millis(700),
            counter_tick: Duration::from_millis(20),
        }
    }
}

impl Config {
    /// Build the configuration from parsed arguments and the environment.
    /// A `GITHUB_TOKEN` is optional and only raises the rate limit.
    pub fn from_args(args: &Args) -> Self {
        let token = std::env::var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());

        Self {
            user: args.user.clone(),
            api_base: args.api_base.trim_end_matches('/').to_string(),
            token,
            cache_ttl: Duration::from_secs(args.ttl_secs),
            persist_cache: args.persist_cache,
            request_timeout: Duration::from_secs(args.timeout_secs),
            threshold: args.threshold,
            exclude_archived: args.exclude_archived,
            ..Self::default()
        }
    }

    /// Public profile page opened by the "open profile" key.
    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_canonical_values() {
        let config = Config::default();
        assert_eq!(config.threshold, 13);
        assert_eq!(config.cache_ttl, Duration::from_millis(120_000));
        assert_eq!(config.counter_duration, Duration::from_millis(700));
        assert_eq!(config.counter_tick, Duration::from_millis(20));
        assert_eq!(config.cache_key, "gh_repos_cache_v1");
    }

    #[test]
    fn test_from_args() {
        let args = Args::parse_from([
            "folio",
            "--user",
            "octocat",
            "--threshold",
            "6",
            "--api-base",
            "http://localhost:8080/",
            "--exclude-archived",
        ]);
        let config = Config::from_args(&args);
        assert_eq!(config.user, "octocat");
        assert_eq!(config.threshold, 6);
        assert_eq!(config.api_base, "http://localhost:8080");
        assert!(config.exclude_archived);
        assert!(!config.persist_cache);
        assert_eq!(config.profile_url(), "https://github.com/octocat");
    }
}
