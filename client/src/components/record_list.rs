//! Generic table for opaque backend records.
//!
//! The backend owns the shape of batches, sensors, routes and the like; pages
//! only pick which fields to show.

#[cfg(test)]
#[path = "record_list_test.rs"]
mod record_list_test;

use leptos::prelude::*;

use crate::net::types::Record;

/// A column: dotted field path (e.g. `commodity.name`) and header label.
pub type Column = (&'static str, &'static str);

/// Display text for the field at `path`, or `"-"` when absent.
#[must_use]
pub fn field_text(record: &Record, path: &str) -> String {
    let value = path.split('.').try_fold(record, |value, key| value.get(key));
    match value {
        None | Some(serde_json::Value::Null) => "-".to_owned(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[component]
pub fn RecordList(
    records: Vec<Record>,
    columns: Vec<Column>,
    #[prop(optional, into)] empty_text: Option<String>,
    /// Builds a link target from a record; the first column links to it.
    #[prop(optional)]
    link: Option<fn(&Record) -> Option<String>>,
) -> impl IntoView {
    if records.is_empty() {
        let text = empty_text.unwrap_or_else(|| "Nothing to show yet.".to_owned());
        return view! { <p class="record-list__empty">{text}</p> }.into_any();
    }

    let header = columns
        .iter()
        .map(|(_, label)| view! { <th>{*label}</th> })
        .collect::<Vec<_>>();

    let rows = records
        .iter()
        .map(|record| {
            let href = link.and_then(|f| f(record));
            let cells = columns
                .iter()
                .enumerate()
                .map(|(i, (path, _))| {
                    let text = field_text(record, path);
                    match (&href, i) {
                        (Some(href), 0) => view! { <td><a href=href.clone()>{text}</a></td> }.into_any(),
                        _ => view! { <td>{text}</td> }.into_any(),
                    }
                })
                .collect::<Vec<_>>();
            view! { <tr>{cells}</tr> }
        })
        .collect::<Vec<_>>();

    view! {
        <table class="record-list">
            <thead>
                <tr>{header}</tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
    .into_any()
}
