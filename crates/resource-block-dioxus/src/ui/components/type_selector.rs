use dioxus::prelude::*;
use resource_block_engine::ResourceType;

/// Drop-down for the four resource types. A stored value that matches none
/// of them leaves every option unselected; the engine reports such a record
/// as having an empty type on save.
#[component]
pub fn TypeSelector(value: String, read_only: bool, on_change: Callback<String>) -> Element {
    rsx! {
        select {
            class: "cdx-input cdx-resource__type",
            disabled: read_only,
            value: value.clone(),
            onchange: move |event: Event<FormData>| on_change.call(event.value()),
            for t in ResourceType::ALL {
                option {
                    value: "{t}",
                    selected: value == t.as_str(),
                    "{t}"
                }
            }
        }
    }
}
