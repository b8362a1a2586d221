use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::employee::EmployeeRecord;
use crate::domain::entities::roster::PageSize;
use crate::usecase::services::employee_store::EmployeeStore;
use crate::usecase::services::roster_view::RosterView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    CreateEmployee,
    CurrentEmployees,
}

pub struct AppState {
    pub store: Signal<EmployeeStore>,
    pub view: Signal<RosterView>,
    pub page: Signal<Page>,
    pub draft: Signal<EmployeeRecord>,
    pub modal_message: Signal<Option<String>>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            store: use_signal(EmployeeStore::default),
            view: use_signal(|| RosterView::new(page_size)),
            page: use_signal(|| Page::CreateEmployee),
            draft: use_signal(EmployeeRecord::default),
            modal_message: use_signal(|| None::<String>),
            busy: use_signal(|| false),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}
