// Count-up animation for the two summary counters.
// Starts on the first `Rendered` event and never replays afterwards.

use std::time::{Duration, Instant};

use tokio::sync::broadcast::{self, error::TryRecvError};

use super::display::Display;
use super::renderer::Rendered;

/// Animates one integer from zero to `target` in fixed ticks.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    current: f64,
    target: u64,
    step: f64,
    ticks_left: u64,
}

impl CounterAnimation {
    pub fn new(target: u64, duration: Duration, tick: Duration) -> Self {
        let ticks = duration
            .as_millis()
            .div_ceil(tick.as_millis().max(1))
            .max(1) as u64;
        Self {
            current: 0.0,
            target,
            step: target as f64 / ticks as f64,
            ticks_left: ticks,
        }
    }

    /// Advance one tick and return the value to display.
    /// The final tick lands exactly on the target.
    pub fn tick(&mut self) -> u64 {
        if self.is_finished() {
            return self.target;
        }
        self.current += self.step;
        self.ticks_left -= 1;
        if self.ticks_left == 0 || self.current >= self.target as f64 {
            self.ticks_left = 0;
            self.current = self.target as f64;
            return self.target;
        }
        self.current.round() as u64
    }

    pub fn is_finished(&self) -> bool {
        self.ticks_left == 0
    }
}

struct Running {
    projects: CounterAnimation,
    stars: CounterAnimation,
    next_tick: Instant,
}

impl Running {
    fn is_finished(&self) -> bool {
        self.projects.is_finished() && self.stars.is_finished()
    }
}

/// Drives both counters from the render loop.
pub struct CounterAnimator {
    events: Option<broadcast::Receiver<Rendered>>,
    running: Option<Running>,
    duration: Duration,
    tick: Duration,
}

impl CounterAnimator {
    pub fn new(events: broadcast::Receiver<Rendered>, duration: Duration, tick: Duration) -> Self {
        Self {
            events: Some(events),
            running: None,
            duration,
            tick,
        }
    }

    /// Interval the caller should wake at while animating.
    pub fn tick_interval(&self) -> Duration {
        self.tick
    }

    /// Pick up the first render event and apply every tick due by `now`.
    /// Returns whether an animation is still in flight.
    pub fn advance(&mut self, now: Instant, display: &mut impl Display) -> bool {
        if let Some(rendered) = self.latest_event() {
            if self.running.is_some() {
                // The newer render already wrote its final values.
                self.finish("superseded by a later render");
                return false;
            }
            self.start(rendered, now, display);
        }

        let Some(running) = self.running.as_mut() else {
            return false;
        };

        let mut shown = None;
        while now >= running.next_tick && !running.is_finished() {
            shown = Some((running.projects.tick(), running.stars.tick()));
            running.next_tick += self.tick;
        }

        if let Some((projects, stars)) = shown {
            display.set_counters(&projects.to_string(), &stars.to_string());
        }

        if running.is_finished() {
            self.finish("finished");
            return false;
        }
        true
    }

    /// Abandon an in-flight animation, leaving the counters as they are.
    /// Has no effect before the first render event.
    pub fn stop(&mut self) {
        if self.running.is_some() {
            self.finish("stopped");
        }
    }

    fn latest_event(&mut self) -> Option<Rendered> {
        let events = self.events.as_mut()?;
        let mut latest = None;
        loop {
            match events.try_recv() {
                Ok(rendered) => latest = Some(rendered),
                Err(TryRecvError::Lagged(_)) => continue,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Closed) => {
                    self.events = None;
                    break;
                }
            }
        }
        latest
    }

    fn start(&mut self, rendered: Rendered, now: Instant, display: &mut impl Display) {
        self.running = Some(Running {
            projects: CounterAnimation::new(rendered.visible_count, self.duration, self.tick),
            stars: CounterAnimation::new(rendered.star_total, self.duration, self.tick),
            next_tick: now + self.tick,
        });
        display.set_counters("0", "0");
        tracing::debug!(
            projects = rendered.visible_count,
            stars = rendered.star_total,
            "counter animation started"
        );
    }

    // One-shot: dropping the receiver means later renders never replay.
    fn finish(&mut self, reason: &str) {
        self.running = None;
        self.events = None;
        tracing::debug!(reason, "counter animation over");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::Repository;
    use crate::portfolio::fetcher::FetchOutcome;
    use crate::portfolio::ranking::{RankOptions, tests::repo};
    use crate::portfolio::renderer::Renderer;
    use crate::state::PanelView;

    const DURATION: Duration = Duration::from_millis(700);
    const TICK: Duration = Duration::from_millis(20);

    fn run_to_end(mut animation: CounterAnimation) -> Vec<u64> {
        let mut values = Vec::new();
        while !animation.is_finished() {
            values.push(animation.tick());
        }
        values
    }

    #[test]
    fn test_animation_ends_exactly_on_target() {
        let values = run_to_end(CounterAnimation::new(13, DURATION, TICK));
        assert_eq!(values.len(), 35);
        assert_eq!(values.last(), Some(&13));
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.iter().all(|v| *v <= 13));
    }

    #[test]
    fn test_animation_snaps_despite_rounding() {
        let values = run_to_end(CounterAnimation::new(1001, DURATION, TICK));
        assert_eq!(values.last(), Some(&1001));
        assert_eq!(values.iter().filter(|v| **v == 1001).count(), 1);
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let values = run_to_end(CounterAnimation::new(0, DURATION, TICK));
        assert_eq!(values, vec![0]);
    }

    fn repos(n: u32) -> Vec<Repository> {
        (1..=n).map(|i| repo(&format!("r{}", i), u64::from(i), i)).collect()
    }

    fn animate(n: u32) -> (PanelView, Vec<(String, String)>) {
        let mut renderer = Renderer::new(13, RankOptions::default());
        let mut animator = CounterAnimator::new(renderer.subscribe(), DURATION, TICK);
        let mut view = PanelView::new();
        renderer.render(&FetchOutcome::Loaded(repos(n)), &mut view);

        let start = Instant::now();
        let mut frames = Vec::new();
        let mut elapsed = Duration::ZERO;
        while animator.advance(start + elapsed, &mut view) {
            frames.push((view.projects.clone().unwrap(), view.stars.clone().unwrap()));
            elapsed += TICK;
        }
        (view, frames)
    }

    #[test]
    fn test_counters_animate_to_targets() {
        let (view, frames) = animate(20);
        assert_eq!(frames.first(), Some(&("0".to_string(), "0".to_string())));
        assert_eq!(view.projects.as_deref(), Some("13"));
        assert_eq!(view.stars.as_deref(), Some("210"));
    }

    #[test]
    fn test_short_list_animates_to_count() {
        let (view, _) = animate(5);
        assert_eq!(view.projects.as_deref(), Some("5"));
        assert_eq!(view.stars.as_deref(), Some("15"));
    }

    #[test]
    fn test_late_advance_catches_up() {
        let mut renderer = Renderer::new(13, RankOptions::default());
        let mut animator = CounterAnimator::new(renderer.subscribe(), DURATION, TICK);
        let mut view = PanelView::new();
        renderer.render(&FetchOutcome::Loaded(repos(20)), &mut view);

        let start = Instant::now();
        assert!(animator.advance(start, &mut view));
        assert!(animator.running.is_some());
        assert!(!animator.advance(start + Duration::from_secs(5), &mut view));
        assert_eq!(view.projects.as_deref(), Some("13"));
        assert!(animator.running.is_none());
        assert!(animator.events.is_none());
    }

    #[test]
    fn test_no_replay_after_first_render() {
        let mut renderer = Renderer::new(13, RankOptions::default());
        let mut animator = CounterAnimator::new(renderer.subscribe(), DURATION, TICK);
        let mut view = PanelView::new();
        renderer.render(&FetchOutcome::Loaded(repos(20)), &mut view);

        let start = Instant::now();
        animator.advance(start, &mut view);
        animator.advance(start + Duration::from_secs(1), &mut view);

        renderer.toggle(&mut view);
        renderer.render(&FetchOutcome::Loaded(repos(3)), &mut view);
        assert!(!animator.advance(start + Duration::from_secs(2), &mut view));
        assert_eq!(view.projects.as_deref(), Some("3"));
    }

    #[test]
    fn test_failure_does_not_start_animation() {
        let mut renderer = Renderer::new(13, RankOptions::default());
        let mut animator = CounterAnimator::new(renderer.subscribe(), DURATION, TICK);
        let mut view = PanelView::new();

        renderer.render(&FetchOutcome::Unavailable, &mut view);
        assert!(!animator.advance(Instant::now(), &mut view));
        assert!(animator.events.is_some());
        assert_eq!(view.projects.as_deref(), Some("13"));
        assert_eq!(view.stars.as_deref(), Some("--"));
    }

    #[test]
    fn test_later_render_during_animation_wins() {
        let mut renderer = Renderer::new(13, RankOptions::default());
        let mut animator = CounterAnimator::new(renderer.subscribe(), DURATION, TICK);
        let mut view = PanelView::new();
        renderer.render(&FetchOutcome::Loaded(repos(20)), &mut view);

        let start = Instant::now();
        assert!(animator.advance(start, &mut view));
        assert!(animator.advance(start + Duration::from_millis(100), &mut view));

        renderer.render(&FetchOutcome::Loaded(repos(4)), &mut view);
        assert!(!animator.advance(start + Duration::from_millis(120), &mut view));
        assert!(!animator.advance(start + Duration::from_secs(2), &mut view));
        assert_eq!(view.projects.as_deref(), Some("4"));
        assert_eq!(view.stars.as_deref(), Some("10"));
        assert!(animator.events.is_none());
    }

    #[test]
    fn test_stop_keeps_failure_fallbacks() {
        let mut renderer = Renderer::new(13, RankOptions::default());
        let mut animator = CounterAnimator::new(renderer.subscribe(), DURATION, TICK);
        let mut view = PanelView::new();
        renderer.render(&FetchOutcome::Loaded(repos(20)), &mut view);

        let start = Instant::now();
        assert!(animator.advance(start, &mut view));
        animator.stop();
        renderer.render(&FetchOutcome::Unavailable, &mut view);

        assert!(!animator.advance(start + Duration::from_secs(1), &mut view));
        assert_eq!(view.projects.as_deref(), Some("13"));
        assert_eq!(view.stars.as_deref(), Some("--"));
    }

    #[test]
    fn test_stop_before_first_render_is_noop() {
        let mut renderer = Renderer::new(13, RankOptions::default());
        let mut animator = CounterAnimator::new(renderer.subscribe(), DURATION, TICK);
        let mut view = PanelView::new();

        animator.stop();
        renderer.render(&FetchOutcome::Loaded(repos(5)), &mut view);
        assert!(animator.advance(Instant::now(), &mut view));
        assert_eq!(view.projects.as_deref(), Some("0"));
    }
}
