use crate::domain::entities::employee::EmployeeField;
use crate::domain::entities::roster::{DisplayParameters, SortDirection};
use crate::usecase::services::roster_view::DerivedView;

pub const EMPTY_MESSAGE: &str = "No matching records found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    None,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn glyph(self) -> &'static str {
        match self {
            SortIndicator::None => "⇅",
            SortIndicator::Ascending => "↑",
            SortIndicator::Descending => "↓",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderDescriptor {
    pub field: EmployeeField,
    pub label: &'static str,
    pub indicator: SortIndicator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageButton {
    pub index: usize,
    pub label: String,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub buttons: Vec<PageButton>,
}

/// Everything the table markup needs for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub headers: Vec<HeaderDescriptor>,
    pub active_column: EmployeeField,
    /// Cell text of the current page, one inner vec per row in column order.
    pub rows: Vec<Vec<String>>,
    pub empty_message: Option<&'static str>,
    pub summary: String,
    pub pagination: PaginationControls,
}

pub fn headers(params: &DisplayParameters) -> Vec<HeaderDescriptor> {
    EmployeeField::ALL
        .into_iter()
        .map(|field| {
            let indicator = if params.sort.field != field {
                SortIndicator::None
            } else {
                match params.sort.direction {
                    SortDirection::Asc => SortIndicator::Ascending,
                    SortDirection::Desc => SortIndicator::Descending,
                }
            };
            HeaderDescriptor {
                field,
                label: field.label(),
                indicator,
            }
        })
        .collect()
}

pub fn page_buttons(page_count: usize, current_page: usize) -> Vec<PageButton> {
    (0..page_count)
        .map(|index| PageButton {
            index,
            label: (index + 1).to_string(),
            is_current: index == current_page,
        })
        .collect()
}

pub fn pagination_controls(page_count: usize, current_page: usize) -> PaginationControls {
    PaginationControls {
        previous_enabled: current_page > 0,
        next_enabled: current_page + 1 < page_count,
        buttons: page_buttons(page_count, current_page),
    }
}

/// "Showing X to Y of Z entries", with the filtered clause when a search hides rows.
pub fn summary_text(
    current_page: usize,
    page_size: usize,
    total: usize,
    raw_total: usize,
    search_text: &str,
) -> String {
    let first = if total == 0 {
        0
    } else {
        current_page * page_size + 1
    };
    let last = ((current_page + 1) * page_size).min(total);
    let tail = if !search_text.is_empty() && total != raw_total {
        format!("(filtered from {raw_total} total entries)")
    } else {
        "entries".to_string()
    };
    format!("Showing {first} to {last} of {total} {tail}")
}

pub fn build_render_model(params: &DisplayParameters, derived: &DerivedView<'_>) -> RenderModel {
    let rows: Vec<Vec<String>> = derived
        .page_records()
        .iter()
        .map(|record| {
            EmployeeField::ALL
                .into_iter()
                .map(|field| record.field_or_empty(field).to_string())
                .collect()
        })
        .collect();
    let empty_message = rows.is_empty().then_some(EMPTY_MESSAGE);

    RenderModel {
        headers: headers(params),
        active_column: params.sort.field,
        rows,
        empty_message,
        summary: summary_text(
            derived.current_page,
            derived.page_size.get(),
            derived.total(),
            derived.raw_total,
            &params.search_text,
        ),
        pagination: pagination_controls(derived.page_count, derived.current_page),
    }
}
