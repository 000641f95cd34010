use crate::app::search::{DisplayMode, Ranked, Scorer};
use crate::config::Config;
use crate::terms::Catalog;
use crate::util::{format_label, percent};
use ratatui::layout::{Position, Rect};
use ratatui::widgets::ListState;
use serde::Serialize;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Insert,
    Navigate,
}

/// What started a preview; a mouse preview ends when the pointer leaves the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewSource {
    Mouse,
    Keyboard,
}

/// A suggestion previewed into the input, with the text it replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub saved_input: String,
    pub index: usize,
    pub source: PreviewSource,
}

/// One rendered suggestion: the label shown and the term it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

/// Turns ranked output into display items. Scored output is annotated with its
/// percentage of the best score in the set.
pub fn suggestions_from(ranked: &Ranked<'_>) -> Vec<Suggestion> {
    match ranked {
        Ranked::Names(names) => names
            .iter()
            .map(|name| Suggestion {
                value: name.to_string(),
                label: name.to_string(),
                score: None,
            })
            .collect(),
        Ranked::Scored(scored) => {
            let Some(max) = scored.iter().map(|s| s.score).max() else {
                return Vec::new();
            };
            scored
                .iter()
                .map(|s| Suggestion {
                    value: s.candidate.to_string(),
                    label: format_label(s.candidate, Some(percent(s.score, max))),
                    score: Some(s.score),
                })
                .collect()
        }
    }
}

#[derive(Debug)]
pub struct SearchState {
    pub input: String,
    pub mode: SearchMode,
    pub suggestions: Vec<Suggestion>,
    pub selected_index: usize,
    pub extended: bool,
    pub show_relevance: bool,
    pub needs_filter: bool,
    pub last_input_change: Instant,
    pub preview: Option<Preview>,
    /// Inner area of the suggestion list from the last draw, for mouse hit tests.
    pub results_area: Rect,
    pub list_state: ListState,
}

#[derive(Debug)]
pub struct App {
    pub status: String,
    pub catalog: Catalog,
    pub scorer: Scorer,
    pub default_limit: usize,
    pub search: SearchState,
}

impl App {
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        let status = format!("{} terms loaded", catalog.len());
        Self {
            status,
            catalog,
            scorer: Scorer::new(config.ngram_walk),
            default_limit: config.default_limit,
            search: SearchState {
                input: String::new(),
                mode: SearchMode::Insert,
                suggestions: Vec::new(),
                selected_index: 0,
                extended: config.extended,
                show_relevance: config.show_relevance,
                needs_filter: false,
                last_input_change: Instant::now(),
                preview: None,
                results_area: Rect::default(),
                list_state: ListState::default(),
            },
        }
    }

    pub fn limit(&self) -> Option<usize> {
        if self.search.extended { None } else { Some(self.default_limit) }
    }

    pub fn display_mode(&self) -> DisplayMode {
        if self.search.show_relevance { DisplayMode::Scored } else { DisplayMode::Names }
    }

    // --- Search Logic ---

    pub fn on_input(&mut self, ch: char) {
        self.end_preview();
        self.search.input.push(ch);
        self.mark_input_changed();
    }

    pub fn on_backspace(&mut self) {
        self.end_preview();
        self.search.input.pop();
        self.mark_input_changed();
    }

    pub fn on_delete(&mut self) {
        self.search.preview = None;
        self.search.input.clear();
        self.mark_input_changed();
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.search.preview = None;
        self.search.input = input.into();
        self.mark_input_changed();
    }

    fn mark_input_changed(&mut self) {
        self.search.mode = SearchMode::Insert;
        self.search.needs_filter = true;
        self.search.last_input_change = Instant::now();
    }

    pub fn maybe_apply_filter(&mut self, debounce: Duration) {
        if self.search.needs_filter && self.search.last_input_change.elapsed() >= debounce {
            self.apply_filter();
        }
    }

    pub fn recompute_filter(&mut self) {
        self.apply_filter();
    }

    /// The typed query, even while a suggestion is previewed in the input.
    pub fn query(&self) -> &str {
        match &self.search.preview {
            Some(p) => &p.saved_input,
            None => &self.search.input,
        }
    }

    fn apply_filter(&mut self) {
        self.search.needs_filter = false;
        let query = self.query();
        let suggestions = if query.is_empty() {
            Vec::new()
        } else {
            let ranked = self.scorer.sort_relevance(query, self.catalog.iter(), self.limit(), self.display_mode());
            suggestions_from(&ranked)
        };
        tracing::debug!(
            query = %query,
            results = suggestions.len(),
            extended = self.search.extended,
            relevance = self.search.show_relevance,
            "re-scored"
        );
        self.search.suggestions = suggestions;

        // Clamp selection
        let count = self.search.suggestions.len();
        if count == 0 {
            self.search.selected_index = 0;
            self.search.mode = SearchMode::Insert;
        } else {
            self.search.selected_index = self.search.selected_index.min(count - 1);
        }

        // A preview that outlived the list it came from shows the new item at its row.
        if let Some((index, source)) = self.search.preview.as_ref().map(|p| (p.index, p.source)) {
            if index < count {
                self.preview(index, source);
            } else {
                self.end_preview();
            }
        }
    }

    pub fn toggle_relevance(&mut self) {
        self.end_preview();
        self.search.show_relevance = !self.search.show_relevance;
        self.recompute_filter();
        self.status = if self.search.show_relevance { "Relevance: on".into() } else { "Relevance: off".into() };
        tracing::info!(relevance = self.search.show_relevance, "toggled relevance display");
    }

    pub fn toggle_extended(&mut self) {
        self.end_preview();
        self.search.extended = !self.search.extended;
        self.recompute_filter();
        self.status = if self.search.extended {
            "Extended: all matches".into()
        } else {
            format!("Extended: off (top {})", self.default_limit)
        };
        tracing::info!(extended = self.search.extended, "toggled extended mode");
    }

    // --- Navigation & Preview ---

    pub fn move_selection(&mut self, delta: isize) {
        if self.search.suggestions.is_empty() {
            return;
        }
        let len = self.search.suggestions.len() as isize;
        let mut idx = self.search.selected_index as isize + delta;
        idx = idx.clamp(0, len - 1);
        self.navigate_to(idx as usize);
    }

    pub fn jump_to_top(&mut self) {
        if !self.search.suggestions.is_empty() {
            self.navigate_to(0);
        }
    }

    pub fn jump_to_bottom(&mut self) {
        if !self.search.suggestions.is_empty() {
            self.navigate_to(self.search.suggestions.len() - 1);
        }
    }

    /// Enters navigate mode on the highlighted suggestion.
    pub fn start_navigation(&mut self) {
        if !self.search.suggestions.is_empty() {
            self.navigate_to(self.search.selected_index);
        }
    }

    fn navigate_to(&mut self, index: usize) {
        self.search.selected_index = index;
        self.search.mode = SearchMode::Navigate;
        self.preview(index, PreviewSource::Keyboard);
    }

    /// Shows suggestion `index` in the input, remembering what was typed.
    pub fn preview(&mut self, index: usize, source: PreviewSource) {
        let Some(value) = self.search.suggestions.get(index).map(|s| s.value.clone()) else {
            return;
        };
        let saved_input = match self.search.preview.take() {
            Some(p) => p.saved_input,
            None => std::mem::take(&mut self.search.input),
        };
        self.search.input = value;
        self.search.selected_index = index;
        self.search.preview = Some(Preview { saved_input, index, source });
    }

    /// Restores the input saved by [`App::preview`]. Returns false if nothing was previewed.
    pub fn end_preview(&mut self) -> bool {
        match self.search.preview.take() {
            Some(p) => {
                self.search.input = p.saved_input;
                true
            }
            None => false,
        }
    }

    pub fn is_previewing(&self) -> bool {
        self.search.preview.is_some()
    }

    /// Leaves navigate mode, putting back the typed query.
    pub fn cancel_navigation(&mut self) {
        self.end_preview();
        self.search.mode = SearchMode::Insert;
    }

    /// Commits suggestion `index` as the new input and clears the list.
    pub fn use_suggestion(&mut self, index: usize) -> Option<String> {
        let value = self.search.suggestions.get(index)?.value.clone();
        self.search.preview = None;
        self.search.input = value.clone();
        self.search.suggestions.clear();
        self.search.selected_index = 0;
        self.search.needs_filter = false;
        self.search.mode = SearchMode::Insert;
        self.status = format!("Selected: {value}");
        tracing::info!(value = %value, "suggestion selected");
        Some(value)
    }

    pub fn use_selected(&mut self) -> Option<String> {
        self.use_suggestion(self.search.selected_index)
    }

    // --- Mouse ---

    /// Index of the suggestion drawn at the given terminal cell, if any.
    pub fn suggestion_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.search.results_area;
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        let idx = self.search.list_state.offset() + usize::from(row - area.y);
        (idx < self.search.suggestions.len()).then_some(idx)
    }

    pub fn on_mouse_move(&mut self, column: u16, row: u16) {
        match self.suggestion_at(column, row) {
            Some(idx) => {
                if self.search.preview.as_ref().map(|p| p.index) != Some(idx) {
                    self.preview(idx, PreviewSource::Mouse);
                }
            }
            None => {
                if self.search.preview.as_ref().map(|p| p.source) == Some(PreviewSource::Mouse) {
                    self.end_preview();
                }
            }
        }
    }

    pub fn on_mouse_click(&mut self, column: u16, row: u16) {
        if let Some(idx) = self.suggestion_at(column, row) {
            self.use_suggestion(idx);
        }
    }
}
