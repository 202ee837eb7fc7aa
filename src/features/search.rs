//! Book search state
//!
//! Holds everything the search page shows and the transitions between those
//! states. Every request gets a sequence number; a response is applied only
//! when it answers the most recent request of its kind.

use tracing::debug;

use crate::api::Volume;

/// One type-ahead entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub title: Option<String>,
    pub author: Option<String>,
    /// Text searched for when the suggestion is picked
    pub value: String,
}

impl Suggestion {
    /// `typed` stands in for the value when the volume has no title
    pub fn from_volume(volume: &Volume, typed: &str) -> Self {
        Self {
            title: volume.title.clone(),
            author: volume.first_author().map(str::to_string),
            value: volume.title.clone().unwrap_or_else(|| typed.to_string()),
        }
    }

    /// "Title - Author", or just the title when the author is unknown
    pub fn label(&self, untitled: &str) -> String {
        let title = self.title.as_deref().unwrap_or(untitled);
        match &self.author {
            Some(author) => format!("{} - {}", title, author),
            None => title.to_string(),
        }
    }
}

/// Issued by [`SearchState::submit`]; the response must carry `seq` back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
}

/// Issued by [`SearchState::begin_suggest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestTicket {
    pub seq: u64,
    pub query: String,
}

/// What the results area should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus<'a> {
    /// Nothing searched yet
    Idle,
    Loading,
    Failed(&'a str),
    /// Searched, zero results
    Empty,
    Results,
}

#[derive(Debug, Clone)]
pub struct SearchState {
    query: String,
    loading: bool,
    error: Option<String>,
    results: Vec<Volume>,
    suggestions: Vec<Suggestion>,
    selected: Option<String>,
    has_searched: bool,
    last_query: Option<String>,
    search_seq: u64,
    suggest_seq: u64,
    min_query_chars: usize,
}

impl SearchState {
    pub fn new(min_query_chars: usize) -> Self {
        Self {
            query: String::new(),
            loading: false,
            error: None,
            results: Vec::new(),
            suggestions: Vec::new(),
            selected: None,
            has_searched: false,
            last_query: None,
            search_seq: 0,
            suggest_seq: 0,
            min_query_chars: min_query_chars.max(1),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn results(&self) -> &[Volume] {
        &self.results
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    /// Trimmed text of the most recent submitted search
    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    /// Sequence number of the most recent submitted search
    pub fn latest_search_seq(&self) -> u64 {
        self.search_seq
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected(&self) -> Option<&Volume> {
        let id = self.selected.as_deref()?;
        self.results.iter().find(|v| v.id == id)
    }

    pub fn status(&self) -> SearchStatus<'_> {
        if self.loading {
            SearchStatus::Loading
        } else if let Some(error) = &self.error {
            SearchStatus::Failed(error)
        } else if !self.has_searched {
            SearchStatus::Idle
        } else if self.results.is_empty() {
            SearchStatus::Empty
        } else {
            SearchStatus::Results
        }
    }

    /// Store the input text.
    ///
    /// Returns the trimmed query when it is long enough to look up
    /// suggestions; otherwise clears the suggestion list.
    pub fn update_query(&mut self, text: &str) -> Option<String> {
        self.query = text.to_string();

        let trimmed = text.trim();
        if trimmed.chars().count() >= self.min_query_chars {
            Some(trimmed.to_string())
        } else {
            self.drop_suggestions();
            None
        }
    }

    /// Start a full search. Blank input is ignored and changes nothing.
    pub fn submit(&mut self, text: &str) -> Option<SearchTicket> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.query = text.to_string();
        self.loading = true;
        self.error = None;
        self.selected = None;
        self.has_searched = true;
        self.last_query = Some(trimmed.to_string());
        self.drop_suggestions();

        self.search_seq += 1;
        Some(SearchTicket {
            seq: self.search_seq,
            query: trimmed.to_string(),
        })
    }

    /// Apply a search response. Returns false when it was stale and ignored.
    pub fn apply_search(&mut self, seq: u64, result: Result<Vec<Volume>, String>) -> bool {
        if seq != self.search_seq {
            debug!("Discarding stale search response #{} (latest #{})", seq, self.search_seq);
            return false;
        }

        self.loading = false;
        match result {
            Ok(volumes) => {
                self.results = volumes;
                self.error = None;
            }
            Err(e) => {
                self.results.clear();
                self.error = Some(e);
            }
        }
        true
    }

    pub fn begin_suggest(&mut self, query: &str) -> SuggestTicket {
        self.suggest_seq += 1;
        SuggestTicket {
            seq: self.suggest_seq,
            query: query.to_string(),
        }
    }

    /// Apply a suggestion response; failures just empty the list
    pub fn apply_suggestions(
        &mut self,
        seq: u64,
        result: Result<Vec<Suggestion>, String>,
    ) -> bool {
        if seq != self.suggest_seq {
            return false;
        }

        match result {
            Ok(suggestions) => self.suggestions = suggestions,
            Err(e) => {
                debug!("Suggestion lookup failed: {}", e);
                self.suggestions.clear();
            }
        }
        true
    }

    /// Hide the suggestion list and ignore any lookup still in flight
    pub fn drop_suggestions(&mut self) {
        self.suggestions.clear();
        self.suggest_seq += 1;
    }

    /// Expand one result. Ids not in the current results are ignored.
    pub fn select(&mut self, id: &str) -> bool {
        if self.results.iter().any(|v| v.id == id) {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume(id: &str, title: &str) -> Volume {
        Volume {
            id: id.to_string(),
            title: Some(title.to_string()),
            authors: vec!["Someone".to_string()],
            ..Volume::default()
        }
    }

    #[test]
    fn test_initial_status_is_idle() {
        let state = SearchState::default();
        assert_eq!(state.status(), SearchStatus::Idle);
        assert!(!state.has_searched());
    }

    #[test]
    fn test_blank_submit_changes_nothing() {
        let mut state = SearchState::default();
        let ticket = state.submit("dune").unwrap();
        state.apply_search(ticket.seq, Ok(vec![volume("1", "Dune")]));

        assert!(state.submit("").is_none());
        assert!(state.submit("   \t").is_none());
        assert_eq!(state.results().len(), 1);
        assert!(!state.is_loading());
        assert_eq!(state.query(), "dune");
    }

    #[test]
    fn test_submit_trims_and_sets_loading() {
        let mut state = SearchState::default();
        let ticket = state.submit("  dune  ").unwrap();
        assert_eq!(ticket.query, "dune");
        assert_eq!(state.status(), SearchStatus::Loading);
        assert_eq!(state.last_query(), Some("dune"));
    }

    #[test]
    fn test_zero_items_is_empty_not_error() {
        let mut state = SearchState::default();
        let ticket = state.submit("zzzzqqq").unwrap();
        assert!(state.apply_search(ticket.seq, Ok(Vec::new())));
        assert_eq!(state.status(), SearchStatus::Empty);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_failure_clears_results_and_loading() {
        let mut state = SearchState::default();
        let first = state.submit("dune").unwrap();
        state.apply_search(first.seq, Ok(vec![volume("1", "Dune")]));

        let second = state.submit("dune messiah").unwrap();
        state.apply_search(second.seq, Err("connection refused".to_string()));

        assert_eq!(state.status(), SearchStatus::Failed("connection refused"));
        assert!(state.results().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_search_response_is_discarded() {
        let mut state = SearchState::default();
        let old = state.submit("first").unwrap();
        let new = state.submit("second").unwrap();

        assert!(state.apply_search(new.seq, Ok(vec![volume("2", "Second")])));
        assert!(!state.apply_search(old.seq, Ok(vec![volume("1", "First")])));

        assert_eq!(state.results()[0].id, "2");
        assert_eq!(state.status(), SearchStatus::Results);
    }

    #[test]
    fn test_update_query_threshold() {
        let mut state = SearchState::default();
        assert_eq!(state.update_query("d"), None);
        assert_eq!(state.update_query(" d "), None);
        assert_eq!(state.update_query(" du "), Some("du".to_string()));
        assert_eq!(state.query(), " du ");
    }

    #[test]
    fn test_suggestions_follow_latest_lookup() {
        let mut state = SearchState::default();
        let old = state.begin_suggest("du");
        let new = state.begin_suggest("dun");
        let pick = Suggestion::from_volume(&volume("1", "Dune"), "dun");

        assert!(!state.apply_suggestions(old.seq, Ok(vec![pick.clone()])));
        assert!(state.suggestions().is_empty());

        assert!(state.apply_suggestions(new.seq, Ok(vec![pick])));
        assert_eq!(state.suggestions().len(), 1);

        // Shortening the query hides the list
        state.update_query("d");
        assert!(state.suggestions().is_empty());
    }

    #[test]
    fn test_submit_invalidates_pending_suggestions() {
        let mut state = SearchState::default();
        let lookup = state.begin_suggest("dune");
        state.submit("dune").unwrap();
        let pick = Suggestion::from_volume(&volume("1", "Dune"), "dune");
        assert!(!state.apply_suggestions(lookup.seq, Ok(vec![pick])));
        assert!(state.suggestions().is_empty());
    }

    #[test]
    fn test_failed_suggestions_are_silent() {
        let mut state = SearchState::default();
        let ticket = state.begin_suggest("du");
        assert!(state.apply_suggestions(ticket.seq, Err("timeout".to_string())));
        assert!(state.suggestions().is_empty());
        assert_eq!(state.error(), None);
        assert_eq!(state.status(), SearchStatus::Idle);
    }

    #[test]
    fn test_select_only_known_ids() {
        let mut state = SearchState::default();
        let ticket = state.submit("dune").unwrap();
        state.apply_search(ticket.seq, Ok(vec![volume("a", "Dune"), volume("b", "Emma")]));

        assert!(!state.select("zzz"));
        assert_eq!(state.selected_id(), None);

        assert!(state.select("b"));
        assert_eq!(state.selected().unwrap().title.as_deref(), Some("Emma"));

        state.clear_selection();
        assert!(state.selected().is_none());

        // A new search closes the detail view
        state.select("a");
        state.submit("emma");
        assert_eq!(state.selected_id(), None);
    }

    #[test]
    fn test_suggestion_label_and_value() {
        let with_author = Suggestion::from_volume(&volume("1", "Dune"), "du");
        assert_eq!(with_author.label("Untitled"), "Dune - Someone");
        assert_eq!(with_author.value, "Dune");

        let untitled = Suggestion::from_volume(&Volume::default(), "du");
        assert_eq!(untitled.label("Untitled"), "Untitled");
        assert_eq!(untitled.value, "du");
    }
}
