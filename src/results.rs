// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Search results state management.
//!
//! This module provides state for the search results list: the rows from
//! the most recent completed search, the kind that search was issued with,
//! and the list cursor.

use ratatui::widgets::ListState;

use crate::model::{SearchKind, SearchResultItem};

#[derive(Default)]
pub(crate) struct ResultsList {
    /// The kind in effect when the current results were fetched. This is
    /// what drives rendering, not the payload shape of the rows.
    pub(crate) kind: SearchKind,

    pub(crate) items: Vec<SearchResultItem>,

    pub(crate) state: ListState,
}

impl ResultsList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Replaces the results wholesale with the outcome of a new search.
    pub(crate) fn set_results(&mut self, kind: SearchKind, items: Vec<SearchResultItem>) {
        self.kind = kind;
        self.items = items;
        self.state.select((!self.items.is_empty()).then_some(0));
    }

    pub(crate) fn selected_item(&self) -> Option<&SearchResultItem> {
        let index = self.state.selected()?;
        self.items.get(index)
    }

    pub(crate) fn next(&mut self) {
        Self::step_next(&mut self.state, self.items.len());
    }

    pub(crate) fn previous(&mut self) {
        Self::step_previous(&mut self.state, self.items.len());
    }

    fn step_next(state: &mut ListState, len: usize) {
        if len == 0 { return; }
        let i = match state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        state.select(Some(i));
    }

    fn step_previous(state: &mut ListState, len: usize) {
        if len == 0 { return; }
        let i = match state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ArtistSummary;

    fn artist_item(name: &str) -> SearchResultItem {
        SearchResultItem::Artist(ArtistSummary {
            name: name.into(),
            images: vec![],
        })
    }

    #[test]
    fn set_results_replaces_rows_and_selects_first() {
        let mut results = ResultsList::new();
        results.set_results(SearchKind::Artist, vec![artist_item("Nirvana"), artist_item("Hole")]);
        assert_eq!(results.items.len(), 2);
        assert_eq!(results.state.selected(), Some(0));

        results.set_results(SearchKind::Artist, vec![artist_item("Melvins")]);
        assert_eq!(results.items.len(), 1);
        assert_eq!(results.state.selected(), Some(0));
    }

    #[test]
    fn empty_results_clear_the_selection() {
        let mut results = ResultsList::new();
        results.set_results(SearchKind::Artist, vec![artist_item("Nirvana")]);
        results.set_results(SearchKind::Album, vec![]);
        assert_eq!(results.state.selected(), None);
        assert!(results.selected_item().is_none());
    }

    #[test]
    fn navigation_wraps_around() {
        let mut results = ResultsList::new();
        results.set_results(SearchKind::Artist, vec![artist_item("a"), artist_item("b")]);

        results.next();
        assert_eq!(results.state.selected(), Some(1));
        results.next();
        assert_eq!(results.state.selected(), Some(0));
        results.previous();
        assert_eq!(results.state.selected(), Some(1));
    }
}
