use dioxus::prelude::*;

use crate::domain::entities::employee::EmployeeField;
use crate::domain::entities::roster::PageSize;
use crate::usecase::services::employee_store::EmployeeStore;
use crate::usecase::services::render_model::build_render_model;
use crate::usecase::services::roster_view::RosterView;
use crate::ui::styles::{
    page_button_style, table_cell_style, table_container_style, table_header_cell_style,
    toolbar_style,
};

#[component]
pub fn RosterTable(store: Signal<EmployeeStore>, mut view: Signal<RosterView>) -> Element {
    let model = use_memo(move || {
        let store = store.read();
        let view = view.read();
        let derived = view.derive(store.employees());
        build_render_model(view.params(), &derived)
    });
    let model = model();
    let (page_size, search_text) = {
        let view = view.read();
        (view.params().page_size, view.params().search_text.clone())
    };
    let has_search = !search_text.is_empty();
    let active_column = model.active_column;
    let column_count = model.headers.len();

    rsx! {
        div {
            style: "{toolbar_style()}",
            div {
                style: "display: flex; gap: 6px; align-items: center;",
                span { "Show" }
                select {
                    onchange: move |event| {
                        if let Ok(size) = event.value().parse::<PageSize>() {
                            view.write().set_page_size(size);
                        }
                    },
                    for size in PageSize::ALL {
                        option {
                            value: "{size}",
                            selected: size == page_size,
                            "{size}"
                        }
                    }
                }
                span { "entries" }
            }
            div {
                style: "display: flex; gap: 6px; align-items: center;",
                if has_search {
                    button {
                        onclick: move |_| {
                            let store = store.read();
                            view.write().clear_search(store.employees());
                        },
                        "x"
                    }
                }
                label { r#for: "search", "Search:" }
                input {
                    id: "search",
                    name: "search",
                    r#type: "text",
                    value: "{search_text}",
                    oninput: move |event| {
                        let store = store.read();
                        view.write().set_search_text(event.value(), store.employees());
                    },
                }
            }
        }

        div {
            style: "{table_container_style()}",
            table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                thead {
                    tr {
                        {model.headers.iter().map(|header| {
                            let field = header.field;
                            let header_style = table_header_cell_style(field == active_column);
                            let glyph = header.indicator.glyph();
                            rsx!(
                                th {
                                    key: "{field.key()}",
                                    style: "{header_style}",
                                    onclick: move |_| view.write().set_sort_key(field),
                                    "{header.label} "
                                    span { "{glyph}" }
                                }
                            )
                        })}
                    }
                }
                tbody {
                    if let Some(message) = model.empty_message {
                        tr {
                            td { colspan: "{column_count}", style: "padding: 8px; text-align: center;", "{message}" }
                        }
                    }
                    {model.rows.iter().enumerate().map(|(row_idx, row)| {
                        rsx!(
                            tr {
                                key: "{row_idx}",
                                {row.iter().zip(EmployeeField::ALL).map(|(cell, field)| {
                                    let cell_style = table_cell_style(field == active_column, row_idx % 2 == 0);
                                    rsx!(
                                        td {
                                            key: "{field.key()}",
                                            style: "{cell_style}",
                                            "{cell}"
                                        }
                                    )
                                })}
                            }
                        )
                    })}
                }
            }
        }

        div {
            style: "{toolbar_style()}",
            p { "{model.summary}" }
            div {
                button {
                    style: "{page_button_style(false)}",
                    disabled: !model.pagination.previous_enabled,
                    onclick: move |_| view.write().go_to_previous_page(),
                    "Previous"
                }
                {model.pagination.buttons.iter().map(|button| {
                    let index = button.index;
                    let button_style = page_button_style(button.is_current);
                    rsx!(
                        button {
                            key: "{index}",
                            style: "{button_style}",
                            disabled: button.is_current,
                            onclick: move |_| view.write().go_to_page(index),
                            "{button.label}"
                        }
                    )
                })}
                button {
                    style: "{page_button_style(false)}",
                    disabled: !model.pagination.next_enabled,
                    onclick: move |_| view.write().go_to_next_page(),
                    "Next"
                }
            }
        }
    }
}
