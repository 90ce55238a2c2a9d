//! Display states of the results area

use super::card::{CardLinks, DisplayCard};
use crate::error::SearchError;
use crate::results::SearchResponse;
use crate::RESULTS_PER_PAGE;
use serde::Serialize;

pub const SEARCHING_MESSAGE: &str = "Searching...";
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search term";
pub const NO_RESULTS_MESSAGE: &str = "No books found. Try different keywords.";
pub const ERROR_MESSAGE: &str = "An error occurred while searching. Please try again later.";

/// What currently occupies the results area.
///
/// Idle → Searching → {Results | NoResults | Error | EmptyPrompt}; only a new
/// search leaves a terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    Idle,
    Searching,
    EmptyPrompt,
    NoResults,
    Error,
    Results(ResultsView),
}

/// Total match count plus the cards for the first page
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResultsView {
    pub total: u64,
    pub cards: Vec<DisplayCard>,
}

impl DisplayState {
    /// Terminal state for a successful response
    pub fn from_response(response: &SearchResponse, links: &CardLinks) -> Self {
        if response.is_empty() {
            return Self::NoResults;
        }

        let cards = response
            .docs
            .iter()
            .take(RESULTS_PER_PAGE)
            .map(|record| DisplayCard::from_record(record, links))
            .collect();

        Self::Results(ResultsView {
            total: response.num_found,
            cards,
        })
    }

    /// Terminal state for any search outcome
    pub fn from_outcome(outcome: &Result<SearchResponse, SearchError>, links: &CardLinks) -> Self {
        match outcome {
            Ok(response) => Self::from_response(response, links),
            Err(SearchError::EmptyQuery) => Self::EmptyPrompt,
            Err(SearchError::LookupFailed(_)) => Self::Error,
        }
    }

    /// Notice text for message states
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Searching => Some(SEARCHING_MESSAGE),
            Self::EmptyPrompt => Some(EMPTY_QUERY_MESSAGE),
            Self::NoResults => Some(NO_RESULTS_MESSAGE),
            Self::Error => Some(ERROR_MESSAGE),
            Self::Idle | Self::Results(_) => None,
        }
    }

    /// Stable name used in logs and JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Searching => "searching",
            Self::EmptyPrompt => "empty_query",
            Self::NoResults => "no_results",
            Self::Error => "error",
            Self::Results(_) => "results",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Idle | Self::Searching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;
    use crate::results::BookRecord;

    fn titled(n: usize) -> BookRecord {
        BookRecord {
            title: Some(format!("Book {}", n)),
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_count_is_no_results() {
        let response = SearchResponse {
            num_found: 0,
            docs: vec![titled(1)],
        };
        assert_eq!(
            DisplayState::from_response(&response, &CardLinks::default()),
            DisplayState::NoResults
        );
    }

    #[test]
    fn test_empty_docs_is_no_results() {
        let response = SearchResponse {
            num_found: 12,
            docs: vec![],
        };
        assert_eq!(
            DisplayState::from_response(&response, &CardLinks::default()),
            DisplayState::NoResults
        );
    }

    #[test]
    fn test_first_ten_in_order_with_full_count() {
        let response = SearchResponse {
            num_found: 4521,
            docs: (0..25).map(titled).collect(),
        };
        let state = DisplayState::from_response(&response, &CardLinks::default());

        let DisplayState::Results(view) = &state else {
            panic!("expected results, got {:?}", state);
        };
        assert_eq!(view.total, 4521);
        assert_eq!(view.cards.len(), RESULTS_PER_PAGE);
        let titles: Vec<_> = view.cards.iter().map(|c| c.title.as_str()).collect();
        let expected: Vec<_> = (0..10).map(|n| format!("Book {}", n)).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn test_outcomes_map_to_states() {
        let links = CardLinks::default();
        assert_eq!(
            DisplayState::from_outcome(&Err(SearchError::EmptyQuery), &links),
            DisplayState::EmptyPrompt
        );
        assert_eq!(
            DisplayState::from_outcome(
                &Err(SearchError::LookupFailed(LookupError::Status(502))),
                &links
            ),
            DisplayState::Error
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(DisplayState::Searching.message(), Some("Searching..."));
        assert_eq!(DisplayState::EmptyPrompt.message(), Some("Please enter a search term"));
        assert_eq!(DisplayState::Idle.message(), None);
        assert!(!DisplayState::Searching.is_terminal());
        assert!(DisplayState::Error.is_terminal());
    }
}
