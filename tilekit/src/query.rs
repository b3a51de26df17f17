//! Client-side query state over the in-memory record list.
//!
//! The source list is only ever replaced wholesale. Every view (filtered,
//! sorted, paged, grouped, charted) is derived from it on demand.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::types::{SortDirection, SortField, SortSpec, TileRecord};

pub const PAGE_SIZE: usize = 10;

/// Bucket for records whose storage location is blank.
pub const NO_LOCATION: &str = "No Location";

/// Filter criteria. `None` / empty means "match everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub grade: Option<String>,
    pub status: Option<String>,
}

impl FilterCriteria {
    pub fn matches(&self, record: &TileRecord) -> bool {
        if let Some(grade) = &self.grade {
            if &record.grade != grade {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if &record.status != status {
                return false;
            }
        }

        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&record.brand, &record.manufacturer, &record.location]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Headline counts over the full list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    pub total: usize,
    pub unique_brands: usize,
    pub active_samples: usize,
}

/// Distinct values offered by the filter dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub grades: Vec<String>,
    pub statuses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusSlice {
    pub status: String,
    pub count: usize,
    /// Fraction of the charted records, in `0.0..=1.0`.
    pub share: f64,
}

/// One page of the filtered and sorted records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageView {
    pub records: Vec<TileRecord>,
    pub page: usize,
    pub total_pages: usize,
    pub matching: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    records: Vec<TileRecord>,
    criteria: FilterCriteria,
    sort: Option<SortSpec>,
    page: usize,
    page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl QueryState {
    pub fn new(records: Vec<TileRecord>) -> Self {
        Self {
            records,
            criteria: FilterCriteria::default(),
            sort: None,
            page: 1,
            page_size: PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self.clamp_page();
        self
    }

    pub fn records(&self) -> &[TileRecord] {
        &self.records
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Swap in a new source list (reload, optimistic insert or removal).
    pub fn replace_records(&mut self, records: Vec<TileRecord>) {
        self.records = records;
        self.clamp_page();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
        self.page = 1;
    }

    /// Empty string clears the grade filter.
    pub fn set_grade(&mut self, grade: impl Into<String>) {
        self.criteria.grade = non_empty(grade.into());
        self.page = 1;
    }

    /// Empty string clears the status filter.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.criteria.status = non_empty(status.into());
        self.page = 1;
    }

    /// Same field flips direction, a new field starts ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort = Some(match self.sort {
            Some(spec) if spec.field == field => SortSpec {
                field,
                direction: spec.direction.toggled(),
            },
            _ => SortSpec {
                field,
                direction: SortDirection::Ascending,
            },
        });
    }

    pub fn sort_direction_of(&self, field: SortField) -> Option<SortDirection> {
        self.sort
            .filter(|spec| spec.field == field)
            .map(|spec| spec.direction)
    }

    pub fn filtered(&self) -> Vec<TileRecord> {
        apply_filters(&self.records, &self.criteria)
    }

    pub fn sorted(&self) -> Vec<TileRecord> {
        let mut records = self.filtered();
        if let Some(spec) = self.sort {
            sort_records(&mut records, spec);
        }
        records
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page_size)
    }

    /// Jump to `page`. Out-of-range requests are ignored and return `false`.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages() {
            return false;
        }
        self.page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.page.saturating_sub(1))
    }

    pub fn current_page(&self) -> PageView {
        let sorted = self.sorted();
        let matching = sorted.len();
        let total_pages = total_pages(matching, self.page_size);
        let page = self.page.clamp(1, total_pages.max(1));

        let records = sorted
            .into_iter()
            .skip((page - 1) * self.page_size)
            .take(self.page_size)
            .collect();

        PageView {
            records,
            page,
            total_pages,
            matching,
        }
    }

    pub fn metrics(&self) -> Metrics {
        aggregate(&self.records)
    }

    pub fn filter_options(&self) -> FilterOptions {
        filter_options(&self.records)
    }

    pub fn storage_map(&self) -> BTreeMap<String, Vec<TileRecord>> {
        group_by_location(&self.filtered())
    }

    fn clamp_page(&mut self) {
        let pages = self.total_pages();
        self.page = self.page.clamp(1, pages.max(1));
    }
}

pub fn apply_filters(records: &[TileRecord], criteria: &FilterCriteria) -> Vec<TileRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

/// Stable sort; blank values go last whatever the direction.
pub fn sort_records(records: &mut [TileRecord], spec: SortSpec) {
    records.sort_by(|a, b| compare_values(spec.field.value(a), spec.field.value(b), spec.direction));
}

fn compare_values(a: &str, b: &str, direction: SortDirection) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match direction {
            SortDirection::Ascending => a.cmp(b),
            SortDirection::Descending => b.cmp(a),
        },
    }
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

pub fn aggregate(records: &[TileRecord]) -> Metrics {
    let brands: HashSet<&str> = records.iter().map(|r| r.brand.as_str()).collect();
    Metrics {
        total: records.len(),
        unique_brands: brands.len(),
        active_samples: records.iter().filter(|r| r.is_active()).count(),
    }
}

pub fn filter_options(records: &[TileRecord]) -> FilterOptions {
    let grades: BTreeSet<&str> = records.iter().map(|r| r.grade.as_str()).collect();
    let statuses: BTreeSet<&str> = records.iter().map(|r| r.status.as_str()).collect();
    FilterOptions {
        grades: grades.into_iter().map(str::to_string).collect(),
        statuses: statuses.into_iter().map(str::to_string).collect(),
    }
}

/// Partition by trimmed storage location, keys ascending.
pub fn group_by_location(records: &[TileRecord]) -> BTreeMap<String, Vec<TileRecord>> {
    let mut groups: BTreeMap<String, Vec<TileRecord>> = BTreeMap::new();
    for record in records {
        let location = record.location.trim();
        let key = if location.is_empty() { NO_LOCATION } else { location };
        groups.entry(key.to_string()).or_default().push(record.clone());
    }
    groups
}

/// Count per grade, most common first.
pub fn grade_histogram(records: &[TileRecord]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.grade.as_str()).or_default() += 1;
    }

    let mut histogram: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(grade, count)| (grade.to_string(), count))
        .collect();
    // stable: equal counts keep the alphabetical order from the map
    histogram.sort_by(|a, b| b.1.cmp(&a.1));
    histogram
}

/// Count and share per status, in order of first appearance.
pub fn status_breakdown(records: &[TileRecord]) -> Vec<StatusSlice> {
    let mut slices: Vec<StatusSlice> = Vec::new();
    for record in records {
        match slices.iter_mut().find(|s| s.status == record.status) {
            Some(slice) => slice.count += 1,
            None => slices.push(StatusSlice {
                status: record.status.clone(),
                count: 1,
                share: 0.0,
            }),
        }
    }

    let total = records.len() as f64;
    for slice in &mut slices {
        slice.share = slice.count as f64 / total;
    }
    slices
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{STATUS_ACTIVE, STATUS_INACTIVE};

    fn tile(id: &str, brand: &str, manufacturer: &str, grade: &str, location: &str, status: &str) -> TileRecord {
        TileRecord {
            id: id.to_string(),
            entry_date: "2024-01-01".to_string(),
            brand: brand.to_string(),
            manufacturer: manufacturer.to_string(),
            grade: grade.to_string(),
            working_size: "60x60 cm".to_string(),
            finish: "GL".to_string(),
            tile_type: "Rectified".to_string(),
            location: location.to_string(),
            status: status.to_string(),
        }
    }

    fn numbered(count: usize) -> Vec<TileRecord> {
        (0..count)
            .map(|i| tile(&format!("t{}", i), &format!("Brand {:02}", i), "Maker", "BIa", "Rak A", STATUS_ACTIVE))
            .collect()
    }

    fn sample() -> Vec<TileRecord> {
        vec![
            tile("1", "Roman", "PT Roman Ceramic", "BIa", "Rak A-01", STATUS_ACTIVE),
            tile("2", "Mulia", "PT Mulia Industrindo", "BIb", " Rak B-01 ", STATUS_INACTIVE),
            tile("3", "Asia Tile", "PT Asia Tile", "BIa", "", STATUS_ACTIVE),
            tile("4", "Roman", "PT Roman Ceramic", "BIII", "Rak A-01", STATUS_INACTIVE),
            tile("5", "Platinum", "Platinum Ceramics", "BIIa", "   ", STATUS_ACTIVE),
        ]
    }

    #[test]
    fn test_scenario_23_rows() {
        let mut state = QueryState::new(numbered(23));

        assert_eq!(state.metrics().total, 23);
        assert_eq!(state.total_pages(), 3);
        assert!(state.go_to_page(3));

        let page = state.current_page();
        assert_eq!(page.page, 3);
        assert_eq!(page.records.len(), 3);
        assert_eq!(page.records[0].id, "t20");
    }

    #[test]
    fn test_out_of_range_pages_are_ignored() {
        let mut state = QueryState::new(numbered(23));
        assert!(state.go_to_page(2));

        assert!(!state.go_to_page(0));
        assert_eq!(state.page(), 2);
        assert!(!state.go_to_page(4));
        assert_eq!(state.page(), 2);

        assert!(state.next_page());
        assert!(!state.next_page());
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn test_page_clamped_when_list_shrinks() {
        let mut state = QueryState::new(numbered(23));
        state.go_to_page(3);

        state.replace_records(numbered(12));
        assert_eq!(state.page(), 2);

        state.replace_records(Vec::new());
        assert_eq!(state.page(), 1);
        let page = state.current_page();
        assert!(page.records.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!state.previous_page());
    }

    #[test]
    fn test_search_matches_manufacturer_only() {
        let mut state = QueryState::new(sample());
        state.set_search("industrindo");

        let filtered = state.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].brand, "Mulia");
    }

    #[test]
    fn test_search_matches_location_case_insensitive() {
        let mut state = QueryState::new(sample());
        state.set_search("rak a-01");
        let ids: Vec<_> = state.filtered().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn test_grade_and_status_filters_combine() {
        let mut state = QueryState::new(sample());
        state.set_grade("BIa");
        assert_eq!(state.filtered().len(), 2);

        state.set_status(STATUS_ACTIVE);
        state.set_search("asia");
        let filtered = state.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "3");

        state.set_grade("");
        state.set_status("");
        state.set_search("");
        assert_eq!(state.filtered().len(), 5);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = QueryState::new(numbered(23));
        state.go_to_page(3);
        state.set_search("brand");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_toggle_sort() {
        let mut state = QueryState::new(sample());

        state.toggle_sort(SortField::Brand);
        let brands: Vec<_> = state.sorted().into_iter().map(|r| r.brand).collect();
        assert_eq!(brands, vec!["Asia Tile", "Mulia", "Platinum", "Roman", "Roman"]);

        state.toggle_sort(SortField::Brand);
        assert_eq!(state.sort_direction_of(SortField::Brand), Some(SortDirection::Descending));
        let ids: Vec<_> = state.sorted().into_iter().map(|r| r.id).collect();
        // equal keys keep source order in both directions
        assert_eq!(ids, vec!["1", "4", "5", "2", "3"]);

        state.toggle_sort(SortField::Grade);
        assert_eq!(state.sort_direction_of(SortField::Grade), Some(SortDirection::Ascending));
        assert_eq!(state.sort_direction_of(SortField::Brand), None);
    }

    #[test]
    fn test_blank_values_sort_last_in_both_directions() {
        let mut state = QueryState::new(sample());

        state.toggle_sort(SortField::Location);
        let asc: Vec<_> = state.sorted().into_iter().map(|r| r.id).collect();
        assert_eq!(asc.last().map(String::as_str), Some("3"));

        state.toggle_sort(SortField::Location);
        let desc: Vec<_> = state.sorted().into_iter().map(|r| r.id).collect();
        assert_eq!(desc.last().map(String::as_str), Some("3"));
    }

    #[test]
    fn test_metrics_and_options_use_full_list() {
        let mut state = QueryState::new(sample());
        state.set_grade("BIII");

        let metrics = state.metrics();
        assert_eq!(metrics.total, 5);
        assert_eq!(metrics.unique_brands, 4);
        assert_eq!(metrics.active_samples, 3);

        let options = state.filter_options();
        assert_eq!(options.grades, vec!["BIII", "BIIa", "BIa", "BIb"]);
        assert_eq!(options.statuses, vec![STATUS_ACTIVE, STATUS_INACTIVE]);
    }

    #[test]
    fn test_group_by_location() {
        let groups = group_by_location(&sample());

        let keys: Vec<_> = groups.keys().cloned().collect();
        assert_eq!(keys, vec![NO_LOCATION, "Rak A-01", "Rak B-01"]);
        assert_eq!(groups[NO_LOCATION].len(), 2);
        assert_eq!(groups["Rak A-01"].iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["1", "4"]);
    }

    #[test]
    fn test_storage_map_follows_filters() {
        let mut state = QueryState::new(sample());
        state.set_status(STATUS_INACTIVE);
        let groups = state.storage_map();
        assert_eq!(groups.len(), 2);
        assert!(!groups.contains_key(NO_LOCATION));
    }

    #[test]
    fn test_grade_histogram() {
        let histogram = grade_histogram(&sample());
        assert_eq!(histogram[0], ("BIa".to_string(), 2));
        assert_eq!(histogram.len(), 4);
        // ties alphabetical
        assert_eq!(histogram[1].0, "BIII");
    }

    #[test]
    fn test_status_breakdown() {
        let slices = status_breakdown(&sample());
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].status, STATUS_ACTIVE);
        assert_eq!(slices[0].count, 3);
        assert!((slices[0].share - 0.6).abs() < 1e-9);
        assert!(status_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_custom_page_size() {
        let state = QueryState::new(numbered(23)).with_page_size(5);
        assert_eq!(state.page_size(), 5);
        assert_eq!(state.total_pages(), 5);
        assert_eq!(state.current_page().records.len(), 5);
    }
}
