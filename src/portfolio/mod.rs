// Projects panel pipeline.
// Fetcher -> ranking -> renderer -> counter animation, in that order.

pub mod counters;
pub mod display;
pub mod fetcher;
pub mod ranking;
pub mod renderer;

pub use counters::CounterAnimator;
pub use display::{Display, RepoCard, Toggle};
pub use fetcher::{FetchOutcome, Fetcher, UserRepos};
pub use ranking::RankOptions;
pub use renderer::Renderer;
