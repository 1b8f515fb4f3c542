use crate::domain::{
    filter_records, flatten_groups, group_by_time, DeliveryRecord, FilterState, FlatRow, LoadState,
    PriorityBand, StatsSnapshot, UiMode,
};
use crate::fetch::FetchEvent;
use chrono::{DateTime, Local};
use std::collections::{BTreeMap, HashMap};

/// Statistics counters as shown in the header. An error replaces the
/// previous snapshot with the placeholder until the next successful
/// refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsState {
    Loading,
    Ready(StatsSnapshot),
    Error,
}

/// Detail modal state for one delivery
#[derive(Debug, Clone)]
pub struct DetailState {
    pub record: DeliveryRecord,
    pub scroll: usize,
}

/// Main application state. All reads and writes happen on the UI thread;
/// fetch workers only talk to it through [`FetchEvent`]s.
pub struct AppState {
    /// Full record set, replaced wholesale on every fetch completion
    pub records: Vec<DeliveryRecord>,
    pub stats: StatsState,
    pub filter: FilterState,
    /// Derived: filtered records bucketed by GI time. Recomputed
    /// synchronously after every fetch completion or filter change, never
    /// by the countdown tick.
    pub groups: BTreeMap<String, Vec<DeliveryRecord>>,
    /// Group expansion flags; survive re-filters, reset on restart
    pub expanded: HashMap<String, bool>,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub detail: Option<DetailState>,
    pub load_state: LoadState,
    pub last_loaded_at: Option<DateTime<Local>>,
    refresh_requested: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            stats: StatsState::Loading,
            filter: FilterState::default(),
            groups: BTreeMap::new(),
            expanded: HashMap::new(),
            selected_index: 0,
            ui_mode: UiMode::Normal,
            detail: None,
            load_state: LoadState::Loading,
            last_loaded_at: None,
            refresh_requested: false,
        }
    }

    /// Recompute the filtered/grouped derivatives from the current records
    /// and filter state
    pub fn apply_filters(&mut self) {
        let filtered = filter_records(&self.records, &self.filter, Local::now().date_naive());
        self.groups = group_by_time(&filtered);
        self.clamp_selection();
    }

    /// Rows currently visible in the table
    pub fn visible_rows(&self) -> Vec<FlatRow> {
        flatten_groups(&self.groups, &self.expanded)
    }

    /// Count of records surviving the current filters
    pub fn filtered_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_rows().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.visible_rows().len() {
            self.selected_index += 1;
        }
    }

    /// Handle Enter/Space on the selected row: toggle a group header or
    /// open the detail modal for a delivery row
    pub fn activate_selected(&mut self) {
        match self.visible_rows().get(self.selected_index) {
            Some(FlatRow::GroupHeader { key, .. }) => {
                let key = key.clone();
                self.toggle_group(&key);
            }
            Some(FlatRow::Delivery { key, index }) => {
                if let Some(record) = self.groups.get(key).and_then(|g| g.get(*index)) {
                    self.detail = Some(DetailState {
                        record: record.clone(),
                        scroll: 0,
                    });
                    self.ui_mode = UiMode::Detail;
                }
            }
            None => {}
        }
    }

    /// Toggle a group's expansion; the flag survives re-filters within the
    /// session
    pub fn toggle_group(&mut self, key: &str) {
        let entry = self.expanded.entry(key.to_string()).or_insert(false);
        *entry = !*entry;
        self.clamp_selection();
    }

    /// Close the detail modal
    pub fn close_detail(&mut self) {
        self.detail = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Scroll the detail modal up
    pub fn scroll_detail_up(&mut self) {
        if let Some(detail) = &mut self.detail {
            detail.scroll = detail.scroll.saturating_sub(1);
        }
    }

    /// Scroll the detail modal down (the renderer saturates at the end)
    pub fn scroll_detail_down(&mut self) {
        if let Some(detail) = &mut self.detail {
            detail.scroll += 1;
        }
    }

    /// Enter search mode; keystrokes re-filter live
    pub fn start_search(&mut self) {
        self.ui_mode = UiMode::Search;
    }

    pub fn search_push(&mut self, c: char) {
        self.filter.search_term.push(c);
        self.apply_filters();
    }

    pub fn search_pop(&mut self) {
        self.filter.search_term.pop();
        self.apply_filters();
    }

    /// Leave search mode keeping the term
    pub fn submit_search(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Leave search mode discarding the term
    pub fn cancel_search(&mut self) {
        self.filter.search_term.clear();
        self.apply_filters();
        self.ui_mode = UiMode::Normal;
    }

    /// Flip between the today and tomorrow windows
    pub fn toggle_tomorrow(&mut self) {
        self.filter.show_tomorrow = !self.filter.show_tomorrow;
        self.apply_filters();
    }

    /// Toggle one of the three priority bands
    pub fn toggle_priority(&mut self, band: PriorityBand) {
        let priorities = &mut self.filter.priorities;
        match band {
            PriorityBand::P10 => priorities.p10 = !priorities.p10,
            PriorityBand::P20 => priorities.p20 = !priorities.p20,
            PriorityBand::P30 => priorities.p30 = !priorities.p30,
            PriorityBand::Other => return,
        }
        self.apply_filters();
    }

    /// Ask the event loop for an immediate refresh
    pub fn request_refresh(&mut self) {
        self.refresh_requested = true;
    }

    pub fn take_refresh_request(&mut self) -> bool {
        std::mem::take(&mut self.refresh_requested)
    }

    /// Mark a refresh as in flight (shown in the status line)
    pub fn mark_loading(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// Apply a fetch completion. Later completions overwrite earlier
    /// state; racing refreshes resolve last-writer-wins with no
    /// sequencing guarantee.
    pub fn apply_fetch_event(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Deliveries(Ok(records)) => {
                tracing::info!(count = records.len(), "delivery list updated");
                self.records = records;
                self.load_state = LoadState::Ready;
                self.last_loaded_at = Some(Local::now());
                self.apply_filters();
            }
            FetchEvent::Deliveries(Err(err)) => {
                tracing::error!(error = %err, "delivery fetch failed");
                self.load_state = LoadState::Error(err.to_string());
            }
            FetchEvent::Statistics(Ok(snapshot)) => {
                self.stats = StatsState::Ready(snapshot);
            }
            FetchEvent::Statistics(Err(err)) => {
                tracing::error!(error = %err, "statistics fetch failed");
                self.stats = StatsState::Error;
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
