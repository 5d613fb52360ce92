/// Bridge to `browser.tabs` through the sidebar's JS module

use crate::error::PanelError;
use crate::tab_data::{HostEvent, MoveProperties, TabId, TabList, TabSnapshot, TabUpdate};
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/sidebar.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn queryTabs(query: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn updateTab(tab_id: i32, props: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn removeTab(tab_id: i32) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn duplicateTab(tab_id: i32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn moveTab(tab_id: i32, props: JsValue) -> Result<(), JsValue>;

    fn subscribeTabEvents(listener: &js_sys::Function);

    fn unsubscribeTabEvents(listener: &js_sys::Function);
}

pub type EventListener = Closure<dyn Fn(JsValue)>;

pub async fn query_tabs(list: TabList) -> Result<Vec<TabSnapshot>, PanelError> {
    let query = serde_wasm_bindgen::to_value(&list.query())?;
    let tabs_js = queryTabs(query).await?;
    Ok(serde_wasm_bindgen::from_value(tabs_js)?)
}

pub async fn update_tab(tab_id: TabId, update: TabUpdate) -> Result<(), PanelError> {
    let props = serde_wasm_bindgen::to_value(&update)?;
    updateTab(tab_id, props).await?;
    Ok(())
}

pub async fn remove_tab(tab_id: TabId) -> Result<(), PanelError> {
    removeTab(tab_id).await?;
    Ok(())
}

pub async fn duplicate_tab(tab_id: TabId) -> Result<TabSnapshot, PanelError> {
    let tab_js = duplicateTab(tab_id).await?;
    Ok(serde_wasm_bindgen::from_value(tab_js)?)
}

pub async fn move_tab(tab_id: TabId, index: i32) -> Result<(), PanelError> {
    let props = serde_wasm_bindgen::to_value(&MoveProperties { index })?;
    moveTab(tab_id, props).await?;
    Ok(())
}

/// Routes every `browser.tabs.on*` notification to `listener`.
pub fn subscribe(listener: &EventListener) {
    subscribeTabEvents(listener.as_ref().unchecked_ref());
}

pub fn unsubscribe(listener: &EventListener) {
    unsubscribeTabEvents(listener.as_ref().unchecked_ref());
}

pub fn decode_event(raw: JsValue) -> Result<HostEvent, PanelError> {
    Ok(serde_wasm_bindgen::from_value(raw)?)
}
