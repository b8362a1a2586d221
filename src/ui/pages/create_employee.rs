use dioxus::prelude::*;

use crate::domain::entities::employee::{EmployeeField, EmployeeRecord};
use crate::infra::import::rows::normalize_record_dates;
use crate::ui::components::modal::Modal;
use crate::usecase::services::employee_store::EmployeeStore;

pub const DEPARTMENTS: [&str; 5] = ["Sales", "Marketing", "Engineering", "Human Resources", "Legal"];

/// Trims the draft, drops empty fields and normalizes dates. Both names are required.
pub fn finalize_draft(draft: &EmployeeRecord) -> Result<EmployeeRecord, String> {
    let mut record = EmployeeRecord::default();
    for field in EmployeeField::ALL {
        let value = draft.field_or_empty(field).trim();
        if !value.is_empty() {
            record.set_field(field, value);
        }
    }

    for required in [EmployeeField::FirstName, EmployeeField::LastName] {
        if record.field(required).is_none() {
            return Err(format!("{} is required", required.label()));
        }
    }

    normalize_record_dates(&mut record);
    Ok(record)
}

/// Appends the finalized draft to `store` and returns the new employee's display name.
pub fn submit_draft(draft: &EmployeeRecord, store: &mut EmployeeStore) -> Result<String, String> {
    let record = finalize_draft(draft)?;
    let name = format!(
        "{} {}",
        record.field_or_empty(EmployeeField::FirstName),
        record.field_or_empty(EmployeeField::LastName)
    );
    store.add_employee(record);
    Ok(name)
}

#[component]
pub fn CreateEmployeePage(
    mut store: Signal<EmployeeStore>,
    mut draft: Signal<EmployeeRecord>,
    mut modal_message: Signal<Option<String>>,
    mut status: Signal<String>,
    on_view_employees: EventHandler<()>,
) -> Element {
    let text_fields = EmployeeField::ALL
        .into_iter()
        .filter(|field| *field != EmployeeField::Department);

    rsx! {
        div {
            style: "text-align: center;",
            h1 { "HRnet" }
            a {
                href: "#",
                onclick: move |event| {
                    event.prevent_default();
                    on_view_employees.call(());
                },
                "View Current Employees"
            }
            h2 { "Create Employee" }
        }
        form {
            style: "display: grid; grid-template-columns: max-content 260px; gap: 8px 12px; justify-content: center;",
            onsubmit: move |event| {
                event.prevent_default();
                let submitted = submit_draft(&draft.read(), &mut store.write());
                match submitted {
                    Ok(name) => {
                        draft.set(EmployeeRecord::default());
                        *status.write() = format!("Added {name}");
                        modal_message.set(Some("Employee Created!".to_string()));
                    }
                    Err(message) => {
                        *status.write() = message;
                    }
                }
            },
            {text_fields.map(|field| {
                let value = draft.read().field_or_empty(field).to_string();
                let input_type = if field.is_date() { "date" } else { "text" };
                rsx!(
                    label { key: "label-{field.key()}", r#for: "{field.key()}", "{field.label()}" }
                    input {
                        key: "input-{field.key()}",
                        id: "{field.key()}",
                        r#type: "{input_type}",
                        value: "{value}",
                        oninput: move |event| draft.write().set_field(field, event.value()),
                    }
                )
            })}
            label { r#for: "department", "Department" }
            select {
                id: "department",
                onchange: move |event| draft.write().set_field(EmployeeField::Department, event.value()),
                option { value: "", "(choose)" }
                for department in DEPARTMENTS {
                    option {
                        value: "{department}",
                        selected: draft.read().field(EmployeeField::Department) == Some(department),
                        "{department}"
                    }
                }
            }
            div {}
            button { r#type: "submit", "Save" }
        }
        if let Some(message) = modal_message() {
            Modal {
                on_close: move |_| modal_message.set(None),
                p { "{message}" }
            }
        }
    }
}
