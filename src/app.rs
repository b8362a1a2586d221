use std::sync::Arc;

use dioxus::prelude::*;
use rfd::FileDialog;

use crate::config::RosterConfig;
use crate::infra::source::file::ROSTER_EXTENSIONS;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::pages::create_employee::CreateEmployeePage;
use crate::ui::pages::employees::EmployeesPage;
use crate::ui::state::app_state::{AppState, Page};
use crate::ui::styles::root_container_style;
use crate::usecase::services::import_service::ImportService;

#[component]
pub fn App() -> Element {
    let config = use_hook(|| RosterConfig::from_env().map_err(|err| format!("{err:#}")));
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            return rsx! {
                div {
                    p { "Unable to resolve the roster location: {err}" }
                }
            };
        }
    };

    let AppState {
        mut store,
        mut view,
        mut page,
        draft,
        modal_message,
        mut busy,
        mut status,
    } = AppState::new(config.page_size);

    let import_service = use_hook(|| Arc::new(ImportService::new(config.roster_path.clone())));
    let import_service_for_init = import_service.clone();
    let import_service_for_picker = import_service.clone();

    use_effect(move || {
        *busy.write() = true;
        let result = run_blocking("load default roster", || {
            import_service_for_init.load_default()
        });
        match result {
            Ok(employees) => {
                let count = employees.len();
                store.write().set_employees(employees);
                *status.write() = format!(
                    "Loaded {count} employees from {}",
                    import_service_for_init.default_roster().display()
                );
            }
            Err(err) => {
                tracing::error!(%err, "failed to load default roster");
                *status.write() = format!("Failed to load roster: {err}");
            }
        }
        *busy.write() = false;
    });

    // The grid re-derives from the latest snapshot whenever the store revision moves.
    let revision = use_memo(move || store.read().revision());
    use_effect(move || {
        let revision = revision();
        let store = store.peek();
        tracing::debug!(revision, "roster revision changed");
        view.write().collection_replaced(store.employees());
    });

    let current_page = page();

    rsx! {
        div {
            style: "{root_container_style()}",
            nav {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        if busy() {
                            return;
                        }

                        let Some(file_path) = FileDialog::new()
                            .add_filter("Roster", &ROSTER_EXTENSIONS)
                            .pick_file() else {
                            *status.write() = "Import cancelled".to_string();
                            return;
                        };

                        *busy.write() = true;
                        *status.write() = format!("Loading {}", file_path.display());

                        let result = run_blocking("load picked roster", || {
                            import_service_for_picker.load_path(&file_path)
                        });
                        match result {
                            Ok(employees) => {
                                let count = employees.len();
                                store.write().set_employees(employees);
                                *status.write() =
                                    format!("Loaded {count} employees from {}", file_path.display());
                            }
                            Err(err) => {
                                tracing::warn!(%err, "roster import failed");
                                *status.write() = format!("Failed to load roster: {err}");
                            }
                        }
                        *busy.write() = false;
                    },
                    "Load roster…"
                }
                span { style: "color: #555;", "{status}" }
            }

            {match current_page {
                Page::CreateEmployee => rsx! {
                    CreateEmployeePage {
                        store,
                        draft,
                        modal_message,
                        status,
                        on_view_employees: move |_| page.set(Page::CurrentEmployees),
                    }
                },
                Page::CurrentEmployees => rsx! {
                    EmployeesPage {
                        store,
                        view,
                        on_home: move |_| page.set(Page::CreateEmployee),
                    }
                },
            }}
        }
    }
}
