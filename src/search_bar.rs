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

//! Search bar state.
//!
//! This module holds the free-text query input and the current search kind.
//! The query is edited verbatim, with no trimming or validation; changing
//! the kind neither re-triggers a search nor clears prior results.

use tui_input::Input;

use crate::model::SearchKind;

pub(crate) struct SearchBar {
    pub(crate) input: Input,
    pub(crate) kind: SearchKind,
}

impl SearchBar {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            kind: SearchKind::default(),
        }
    }

    pub(crate) fn toggle_kind(&mut self) {
        self.kind = self.kind.toggle();
    }
}
