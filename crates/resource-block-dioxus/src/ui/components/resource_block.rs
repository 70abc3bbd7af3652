use dioxus::prelude::*;
use resource_block_engine::ResourceData;

use crate::ui::components::{EditableField, TypeSelector};

/// The whole block: type selector, then title, then message, in the same
/// order the engine renders its element tree. Each edit reports a fully
/// merged record upward so the owner holds a single source of truth.
#[component]
pub fn ResourceBlockView(
    data: ResourceData,
    title_placeholder: String,
    message_placeholder: String,
    read_only: bool,
    on_change: Callback<ResourceData>,
) -> Element {
    rsx! {
        div {
            class: "cdx-block cdx-resource",
            TypeSelector {
                value: data.kind.clone(),
                read_only,
                on_change: {
                    let data = data.clone();
                    move |kind: String| {
                        let mut next = data.clone();
                        next.kind = kind;
                        on_change.call(next);
                    }
                },
            }
            EditableField {
                marker_class: "cdx-resource__title",
                value: data.title.clone(),
                placeholder: title_placeholder,
                read_only,
                on_input: {
                    let data = data.clone();
                    move |title: String| {
                        let mut next = data.clone();
                        next.title = title;
                        on_change.call(next);
                    }
                },
            }
            EditableField {
                marker_class: "cdx-resource__message",
                value: data.message.clone(),
                placeholder: message_placeholder,
                read_only,
                on_input: {
                    let data = data.clone();
                    move |message: String| {
                        let mut next = data.clone();
                        next.message = message;
                        on_change.call(next);
                    }
                },
            }
        }
    }
}
