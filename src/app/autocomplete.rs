// src/app/autocomplete.rs — debounced search-suggestion state machine.
//
// Hidden → PendingDebounce → Fetching → Rendered (or back to Hidden on a
// short query, empty/failed results, or dismissal). Driven by injected
// `Instant`s, so transitions are testable without a GUI or real timers.
// There is no cancellation primitive for an in-flight request; instead every
// issued request carries a sequence number and only the latest may render.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::app::api::ApiError;
use crate::app::types::MovieSummary;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuggestPhase {
    Hidden,
    PendingDebounce,
    Fetching,
    Rendered,
}

/// A request the UI layer should dispatch to the catalog client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub seq: u64,
    pub query: String,
}

pub struct AutocompleteController {
    min_chars: usize,
    debounce: Duration,
    max_results: usize,

    phase: SuggestPhase,
    query: String,
    deadline: Option<Instant>,
    /// Sequence number the next rendered response must match. Bumped both
    /// when a request is issued and when input changes, so a stale in-flight
    /// response can never overwrite a newer keystroke.
    latest_seq: u64,
    suggestions: Vec<MovieSummary>,
}

impl AutocompleteController {
    pub fn new(min_chars: usize, debounce: Duration, max_results: usize) -> Self {
        Self {
            min_chars,
            debounce,
            max_results,
            phase: SuggestPhase::Hidden,
            query: String::new(),
            deadline: None,
            latest_seq: 0,
            suggestions: Vec::new(),
        }
    }

    pub fn phase(&self) -> SuggestPhase {
        self.phase
    }

    pub fn suggestions(&self) -> &[MovieSummary] {
        &self.suggestions
    }

    pub fn is_open(&self) -> bool {
        self.phase == SuggestPhase::Rendered && !self.suggestions.is_empty()
    }

    /// Feed the current text of the search box. Each call while pending or
    /// fetching restarts the debounce timer and invalidates in-flight
    /// responses.
    pub fn on_input(&mut self, raw: &str, now: Instant) {
        let query = raw.trim();
        if query == self.query && self.phase != SuggestPhase::Hidden {
            return; // no change (e.g. cursor movement)
        }
        self.latest_seq += 1;
        self.query = query.to_string();
        self.suggestions.clear();
        if query.chars().count() < self.min_chars {
            self.phase = SuggestPhase::Hidden;
            self.deadline = None;
        } else {
            self.phase = SuggestPhase::PendingDebounce;
            self.deadline = Some(now + self.debounce);
        }
    }

    /// Fire the fetch once the input has been quiet for the debounce
    /// interval. Returns at most one request per elapsed timer.
    pub fn poll(&mut self, now: Instant) -> Option<SuggestionRequest> {
        if self.phase != SuggestPhase::PendingDebounce {
            return None;
        }
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.phase = SuggestPhase::Fetching;
        self.deadline = None;
        debug!("autocomplete fetch #{} for `{}`", self.latest_seq, self.query);
        Some(SuggestionRequest {
            seq: self.latest_seq,
            query: self.query.clone(),
        })
    }

    /// Install a response. Anything but the latest issued request is
    /// discarded; failures hide the panel rather than surfacing an error.
    /// Returns whether the response was accepted, so callers can skip any
    /// per-suggestion work (art, textures) for discarded ones.
    pub fn on_results(&mut self, seq: u64, result: Result<Vec<MovieSummary>, ApiError>) -> bool {
        if seq != self.latest_seq {
            debug!("dropping stale suggestion response #{seq} (latest {})", self.latest_seq);
            return false;
        }
        if self.phase != SuggestPhase::Fetching {
            return false;
        }
        match result {
            Ok(mut results) if !results.is_empty() => {
                results.truncate(self.max_results);
                self.suggestions = results;
                self.phase = SuggestPhase::Rendered;
            }
            Ok(_) => {
                self.phase = SuggestPhase::Hidden;
            }
            Err(e) => {
                debug!("suggestion fetch failed: {e}");
                self.phase = SuggestPhase::Hidden;
            }
        }
        true
    }

    /// Pointer press outside the search control, or a navigation away.
    pub fn dismiss(&mut self) {
        self.latest_seq += 1; // invalidate anything still in flight
        self.phase = SuggestPhase::Hidden;
        self.deadline = None;
        self.suggestions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBOUNCE: Duration = Duration::from_millis(250);

    fn controller() -> AutocompleteController {
        AutocompleteController::new(2, DEBOUNCE, 8)
    }

    fn movie(id: u64, title: &str) -> MovieSummary {
        serde_json::from_str(&format!(r#"{{"id": {id}, "title": "{title}"}}"#)).unwrap()
    }

    #[test]
    fn one_char_query_never_fetches() {
        let mut c = controller();
        let t0 = Instant::now();
        c.on_input("b", t0);
        assert_eq!(c.phase(), SuggestPhase::Hidden);
        assert_eq!(c.poll(t0 + DEBOUNCE * 4), None);
    }

    #[test]
    fn two_char_query_fetches_after_quiet_period() {
        let mut c = controller();
        let t0 = Instant::now();
        c.on_input("ba", t0);
        assert_eq!(c.phase(), SuggestPhase::PendingDebounce);
        assert_eq!(c.poll(t0 + DEBOUNCE / 2), None);
        let req = c.poll(t0 + DEBOUNCE).expect("timer elapsed");
        assert_eq!(req.query, "ba");
        assert_eq!(c.phase(), SuggestPhase::Fetching);
        // one request per elapsed timer
        assert_eq!(c.poll(t0 + DEBOUNCE * 2), None);
    }

    #[test]
    fn retyping_within_debounce_issues_one_request() {
        let mut c = controller();
        let t0 = Instant::now();
        c.on_input("bat", t0);
        c.on_input("batman", t0 + Duration::from_millis(100));
        // original deadline passes without a fetch; timer was restarted
        assert_eq!(c.poll(t0 + DEBOUNCE), None);
        let req = c
            .poll(t0 + Duration::from_millis(100) + DEBOUNCE)
            .expect("restarted timer elapsed");
        assert_eq!(req.query, "batman");
    }

    #[test]
    fn stale_response_never_renders() {
        let mut c = controller();
        let t0 = Instant::now();
        c.on_input("bat", t0);
        let old = c.poll(t0 + DEBOUNCE).unwrap();

        // user keeps typing while "bat" is in flight
        c.on_input("batman", t0 + DEBOUNCE + Duration::from_millis(10));
        let new = c.poll(t0 + DEBOUNCE * 2 + Duration::from_millis(10)).unwrap();
        assert!(new.seq > old.seq);

        // late "bat" response is discarded
        assert!(!c.on_results(old.seq, Ok(vec![movie(1, "Batman Begins")])));
        assert_eq!(c.phase(), SuggestPhase::Fetching);
        assert!(c.suggestions().is_empty());

        // the current one renders
        assert!(c.on_results(new.seq, Ok(vec![movie(2, "Batman Returns")])));
        assert_eq!(c.phase(), SuggestPhase::Rendered);
        assert_eq!(c.suggestions().len(), 1);
    }

    #[test]
    fn results_are_capped() {
        let mut c = AutocompleteController::new(2, DEBOUNCE, 3);
        let t0 = Instant::now();
        c.on_input("star", t0);
        let req = c.poll(t0 + DEBOUNCE).unwrap();
        let many = (0..10).map(|i| movie(i, "Star")).collect();
        c.on_results(req.seq, Ok(many));
        assert_eq!(c.suggestions().len(), 3);
    }

    #[test]
    fn failure_and_empty_results_hide_silently() {
        let mut c = controller();
        let t0 = Instant::now();
        c.on_input("zz", t0);
        let req = c.poll(t0 + DEBOUNCE).unwrap();
        c.on_results(req.seq, Ok(vec![]));
        assert_eq!(c.phase(), SuggestPhase::Hidden);

        c.on_input("zzz", t0 + DEBOUNCE * 2);
        let req = c.poll(t0 + DEBOUNCE * 3).unwrap();
        c.on_results(req.seq, Err(ApiError::Aborted));
        assert_eq!(c.phase(), SuggestPhase::Hidden);
        assert!(c.suggestions().is_empty());
    }

    #[test]
    fn dismiss_hides_and_invalidates_in_flight() {
        let mut c = controller();
        let t0 = Instant::now();
        c.on_input("dune", t0);
        let req = c.poll(t0 + DEBOUNCE).unwrap();
        c.dismiss();
        assert_eq!(c.phase(), SuggestPhase::Hidden);
        assert!(!c.on_results(req.seq, Ok(vec![movie(3, "Dune")])));
        assert_eq!(c.phase(), SuggestPhase::Hidden);
        assert!(c.suggestions().is_empty());
    }

    #[test]
    fn shrinking_below_min_chars_hides() {
        let mut c = controller();
        let t0 = Instant::now();
        c.on_input("ba", t0);
        c.on_input("b", t0 + Duration::from_millis(50));
        assert_eq!(c.phase(), SuggestPhase::Hidden);
        assert_eq!(c.poll(t0 + DEBOUNCE * 2), None);
    }
}
