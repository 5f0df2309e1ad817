//! Count-up animation for statistics

use crate::dom::{Dom, Selector};
use crate::events::Dispatch;
use crate::markup::COUNTER_CLASS;

/// Integer at the start of `text`, after optional whitespace and sign.
/// Trailing characters are ignored, so `"250m"` reads as 250. Values
/// beyond the `i64` range saturate.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}

/// Linear count from zero to `target`
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    duration_ms: f64,
    start_ms: Option<f64>,
}

/// Value to display for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    pub done: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            start_ms: None,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// Advance to `timestamp_ms`. The first frame fixes the start time.
    pub fn frame(&mut self, timestamp_ms: f64) -> CounterFrame {
        let start = *self.start_ms.get_or_insert(timestamp_ms);
        let progress = ((timestamp_ms - start) / self.duration_ms).clamp(0.0, 1.0);
        CounterFrame {
            value: (progress * self.target as f64).floor() as i64,
            done: progress >= 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum CounterState {
    Waiting,
    Running(CounterAnimation),
    Finished,
}

/// Starts each counter the first time it becomes visible.
///
/// The host observes [`CounterAnimator::observed`] with
/// [`CounterAnimator::threshold`] and forwards intersection changes and
/// animation frames.
#[derive(Debug, Clone)]
pub struct CounterAnimator<N> {
    counters: Vec<(N, CounterState)>,
    duration_ms: f64,
    threshold: f64,
}

impl<N: Clone + PartialEq> CounterAnimator<N> {
    pub fn attach<D: Dom<Node = N>>(dom: &D, duration_ms: f64, threshold: f64) -> Option<Self> {
        let counters: Vec<_> = dom
            .select_all(Selector::Class(COUNTER_CLASS))
            .into_iter()
            .map(|n| (n, CounterState::Waiting))
            .collect();
        if counters.is_empty() {
            return None;
        }
        Some(Self {
            counters,
            duration_ms,
            threshold,
        })
    }

    /// Counters that still wait to become visible
    pub fn observed(&self) -> Vec<N> {
        self.counters
            .iter()
            .filter(|(_, state)| *state == CounterState::Waiting)
            .map(|(node, _)| node.clone())
            .collect()
    }

    /// Visible fraction that counts as intersecting
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_animating(&self) -> bool {
        self.counters
            .iter()
            .any(|(_, state)| matches!(state, CounterState::Running(_)))
    }

    pub fn on_intersection<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        target: &N,
        is_intersecting: bool,
    ) -> Dispatch<N> {
        let mut outcome = Dispatch::default();
        if !is_intersecting {
            return outcome;
        }
        let Some((node, state)) = self
            .counters
            .iter_mut()
            .find(|(node, state)| node == target && *state == CounterState::Waiting)
        else {
            return outcome;
        };

        let text = dom.text(node);
        *state = match parse_leading_int(&text) {
            Some(value) => {
                tracing::debug!(goal = value, "counter started");
                outcome.request_frame = true;
                CounterState::Running(CounterAnimation::new(value, self.duration_ms))
            }
            None => {
                tracing::debug!(%text, "counter text is not a number");
                CounterState::Finished
            }
        };
        outcome.unobserve.push(node.clone());
        outcome
    }

    /// Draw one frame of every running counter; returns whether another
    /// frame is needed
    pub fn on_frame<D: Dom<Node = N>>(&mut self, dom: &mut D, timestamp_ms: f64) -> bool {
        for (node, state) in &mut self.counters {
            let CounterState::Running(animation) = state else {
                continue;
            };
            let frame = animation.frame(timestamp_ms);
            dom.set_text(node, &frame.value.to_string());
            tracing::trace!(value = frame.value, "counter frame");
            if frame.done {
                *state = CounterState::Finished;
            }
        }
        self.is_animating()
    }
}
