use dioxus::prelude::*;

use crate::ui::components::roster_table::RosterTable;
use crate::usecase::services::employee_store::EmployeeStore;
use crate::usecase::services::roster_view::RosterView;

#[component]
pub fn EmployeesPage(
    store: Signal<EmployeeStore>,
    view: Signal<RosterView>,
    on_home: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            style: "text-align: center;",
            h1 { "Current Employees" }
        }
        RosterTable { store, view }
        div {
            style: "margin-top: 8px;",
            a {
                href: "#",
                onclick: move |event| {
                    event.prevent_default();
                    on_home.call(());
                },
                "Home"
            }
        }
    }
}
