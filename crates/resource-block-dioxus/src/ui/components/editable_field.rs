use dioxus::prelude::*;

/// One editable text region of the block. Rendered as a textarea so edits
/// flow through normal form events; `marker_class` distinguishes the title
/// region from the message region.
#[component]
pub fn EditableField(
    marker_class: String,
    value: String,
    placeholder: String,
    read_only: bool,
    on_input: Callback<String>,
) -> Element {
    rsx! {
        textarea {
            class: "cdx-input {marker_class}",
            value: value,
            placeholder: placeholder,
            readonly: read_only,
            spellcheck: false,
            oninput: move |event: Event<FormData>| on_input.call(event.value()),
        }
    }
}
