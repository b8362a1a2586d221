use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::domain::entities::employee::{EmployeeField, EmployeeRecord};
use crate::domain::entities::roster::{DisplayParameters, PageSize, SortDirection, SortSpec};

/// Records whose fields contain `search_text`, ignoring case, in input order.
/// An empty search keeps every record.
pub fn filter<'a>(collection: &'a [EmployeeRecord], search_text: &str) -> Vec<&'a EmployeeRecord> {
    if search_text.is_empty() {
        return collection.iter().collect();
    }

    let needle = search_text.to_lowercase();
    collection
        .iter()
        .filter(|record| {
            EmployeeField::ALL.iter().any(|&field| {
                record
                    .field(field)
                    .is_some_and(|value| value.to_lowercase().contains(&needle))
            })
        })
        .collect()
}

/// Stable sort on one field. The input slice is left untouched.
pub fn sort<'a>(records: &[&'a EmployeeRecord], spec: SortSpec) -> Vec<&'a EmployeeRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let left = a.field_or_empty(spec.field);
        let right = b.field_or_empty(spec.field);
        match spec.direction {
            SortDirection::Asc => locale_cmp(left, right),
            SortDirection::Desc => locale_cmp(right, left),
        }
    });
    sorted
}

pub fn page_count(total: usize, page_size: PageSize) -> usize {
    total.div_ceil(page_size.get())
}

/// Returns the rows of `page` and the number of pages. A page past the end yields
/// an empty slice.
pub fn paginate<'r, 'a>(
    records: &'r [&'a EmployeeRecord],
    page: usize,
    page_size: PageSize,
) -> (&'r [&'a EmployeeRecord], usize) {
    let size = page_size.get();
    let count = page_count(records.len(), page_size);
    let start = page.saturating_mul(size).min(records.len());
    let end = start.saturating_add(size).min(records.len());
    (&records[start..end], count)
}

/// Collation close to the default `localeCompare` ordering: letters compare without
/// regard to case or accents first, then accents, then lowercase before uppercase.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = |s: &str| {
        s.nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .flat_map(base_letters)
            .collect::<Vec<_>>()
    };
    let secondary = |s: &str| s.nfd().flat_map(char::to_lowercase).collect::<Vec<_>>();

    primary(a)
        .cmp(&primary(b))
        .then_with(|| secondary(a).cmp(&secondary(b)))
        .then_with(|| case_cmp(a, b))
        .then_with(|| a.cmp(b))
}

fn case_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .find(|(x, y)| x != y)
        .map(|(x, y)| x.is_uppercase().cmp(&y.is_uppercase()))
        .unwrap_or(Ordering::Equal)
}

/// Letters with no canonical decomposition still sort next to their base letters.
fn base_letters(c: char) -> impl Iterator<Item = char> {
    let (first, second) = match c {
        'æ' => ('a', Some('e')),
        'œ' => ('o', Some('e')),
        'ß' => ('s', Some('s')),
        'ø' => ('o', None),
        'ł' => ('l', None),
        'đ' | 'ð' => ('d', None),
        'ı' => ('i', None),
        other => (other, None),
    };
    std::iter::once(first).chain(second)
}

/// Output of one pass of the filter/sort/paginate pipeline.
#[derive(Debug, Clone)]
pub struct DerivedView<'a> {
    pub raw_total: usize,
    pub sorted: Vec<&'a EmployeeRecord>,
    pub page_count: usize,
    pub current_page: usize,
    pub page_size: PageSize,
}

impl<'a> DerivedView<'a> {
    pub fn total(&self) -> usize {
        self.sorted.len()
    }

    pub fn page_records(&self) -> &[&'a EmployeeRecord] {
        paginate(&self.sorted, self.current_page, self.page_size).0
    }
}

/// Owns the display parameters of one roster grid. The collection itself lives with
/// the caller; the view only remembers how many records passed the current search so
/// page navigation can be bounded.
#[derive(Debug, Clone, Default)]
pub struct RosterView {
    params: DisplayParameters,
    filtered_count: usize,
}

impl RosterView {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            params: DisplayParameters {
                page_size,
                ..DisplayParameters::default()
            },
            filtered_count: 0,
        }
    }

    pub fn params(&self) -> &DisplayParameters {
        &self.params
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered_count, self.params.page_size)
    }

    /// Same column toggles the direction; a new column starts ascending.
    pub fn set_sort_key(&mut self, field: EmployeeField) {
        if self.params.sort.field == field {
            self.params.sort.direction = self.params.sort.direction.toggled();
        } else {
            self.params.sort = SortSpec {
                field,
                direction: SortDirection::Asc,
            };
        }
        tracing::debug!(?field, direction = ?self.params.sort.direction, "sort changed");
    }

    pub fn set_search_text(&mut self, text: impl Into<String>, collection: &[EmployeeRecord]) {
        self.params.search_text = text.into();
        self.collection_replaced(collection);
    }

    pub fn clear_search(&mut self, collection: &[EmployeeRecord]) {
        self.set_search_text(String::new(), collection);
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.params.page_size = size;
        self.params.current_page = 0;
    }

    pub fn go_to_page(&mut self, page: usize) {
        if page < self.page_count() {
            self.params.current_page = page;
        }
    }

    pub fn go_to_previous_page(&mut self) {
        if self.params.current_page > 0 {
            self.params.current_page -= 1;
        }
    }

    pub fn go_to_next_page(&mut self) {
        if self.params.current_page + 1 < self.page_count() {
            self.params.current_page += 1;
        }
    }

    /// Recounts the search matches in `collection` and pulls `current_page` back onto
    /// the last page that still exists.
    pub fn collection_replaced(&mut self, collection: &[EmployeeRecord]) {
        self.filtered_count = filter(collection, &self.params.search_text).len();
        let last_page = self.page_count().saturating_sub(1);
        if self.params.current_page > last_page {
            tracing::debug!(
                from = self.params.current_page,
                to = last_page,
                "current page clamped"
            );
            self.params.current_page = last_page;
        }
    }

    pub fn derive<'a>(&self, collection: &'a [EmployeeRecord]) -> DerivedView<'a> {
        let filtered = filter(collection, &self.params.search_text);
        let sorted = sort(&filtered, self.params.sort);
        let page_count = page_count(sorted.len(), self.params.page_size);
        DerivedView {
            raw_total: collection.len(),
            sorted,
            page_count,
            current_page: self.params.current_page,
            page_size: self.params.page_size,
        }
    }
}
