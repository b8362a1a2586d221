pub fn root_container_style() -> &'static str {
    "height: 100vh; display: flex; flex-direction: column; padding: 12px 16px; box-sizing: border-box; font-family: sans-serif;"
}

pub fn toolbar_style() -> &'static str {
    "display: flex; gap: 12px; align-items: center; justify-content: space-between; flex-wrap: wrap; margin: 12px 0;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ddd;"
}

pub fn table_header_cell_style(active: bool) -> String {
    format!(
        "position: sticky; top: 0; z-index: 1; cursor: pointer; user-select: none; text-align: left; padding: 6px 8px; border-bottom: 2px solid #333; background: {};",
        if active { "#e3ecd9" } else { "#fff" }
    )
}

pub fn table_cell_style(active_column: bool, striped_row: bool) -> String {
    let background = match (active_column, striped_row) {
        (true, _) => "background: #f1f6ea;",
        (false, true) => "background: #f4f4f4;",
        (false, false) => "",
    };
    format!("padding: 6px 8px; border-bottom: 1px solid #eee; {background}")
}

pub fn page_button_style(current: bool) -> &'static str {
    if current {
        "margin: 0 2px; padding: 4px 10px; border: 1px solid #5a6f08; background: #93ad18; color: #fff; border-radius: 4px;"
    } else {
        "margin: 0 2px; padding: 4px 10px; border: 1px solid #bbb; background: #fff; border-radius: 4px; cursor: pointer;"
    }
}

pub fn modal_backdrop_style() -> &'static str {
    "position: fixed; inset: 0; background: rgba(0,0,0,0.35); display: flex; align-items: center; justify-content: center; z-index: 1100;"
}

pub fn modal_dialog_style() -> &'static str {
    "position: relative; background: #fff; padding: 24px 40px 24px 16px; border: 1px solid #999; min-width: 280px; border-radius: 6px;"
}
