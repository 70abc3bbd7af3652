use dioxus::prelude::*;
use resource_block_engine::{BlockInit, ResourceBlock, ResourceData, ToolConfig, tool};

use super::components::ResourceBlockView;

const RESOURCE_BLOCK_CSS: &str = include_str!("../assets/resource-block.css");

#[component]
pub fn App(
    title_placeholder: Option<String>,
    message_placeholder: Option<String>,
    read_only: bool,
    stylesheet: Option<String>,
) -> Element {
    let mut data = use_signal(ResourceData::default);

    // Resolve placeholder config exactly the way an editor host would:
    // through the tool's own constructor defaults.
    let block = ResourceBlock::new(BlockInit {
        config: ToolConfig {
            title_placeholder,
            message_placeholder,
        },
        read_only,
        ..BlockInit::default()
    });
    let title_placeholder = block.title_placeholder().to_string();
    let message_placeholder = block.message_placeholder().to_string();

    let saved_json = serde_json::to_string_pretty(&*data.read()).unwrap_or_default();
    let css = stylesheet.unwrap_or_else(|| RESOURCE_BLOCK_CSS.to_string());
    let heading = tool::toolbox().title;

    rsx! {
        style { {css} }
        div {
            class: "app-container",
            h2 { "{heading}" }
            ResourceBlockView {
                data: data.read().clone(),
                title_placeholder,
                message_placeholder,
                read_only,
                on_change: move |next: ResourceData| {
                    *data.write() = next;
                },
            }
            div {
                class: "saved-output",
                h3 { "Saved output" }
                pre { "{saved_json}" }
            }
        }
    }
}
