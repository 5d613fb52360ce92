/// Sidebar panel: pinned and unpinned tab lists, tab counter, context menu

use crate::config::PanelConfig;
use crate::error::PanelError;
use crate::host;
use crate::interaction::{dismisses_context, move_to_top_index, ContextAction, MouseButton, TabCommand};
use crate::row_view::{update_pin, update_row};
use crate::sync::{RenderSequencer, ViewSync};
use crate::tab_data::{HostEvent, TabId, TabList, TabSnapshot, TabUpdate};
use crate::ui::components::{ContextMenu, PinRow, TabRow};
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;
use yew::prelude::*;

pub enum PanelAction {
    Host(HostEvent),
    Snapshot(TabList, Vec<TabSnapshot>),
    ToggleContext(TabId),
    ClearContext,
    Resized(i32),
}

impl Reducible for ViewSync {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            PanelAction::Host(event) => {
                next.handle_event(&event);
            }
            PanelAction::Snapshot(list, tabs) => {
                if let Some(patch) = next.apply_snapshot(list, tabs) {
                    if !patch.is_noop() {
                        log::debug!("{} rows: {:?}", list, patch);
                    }
                }
            }
            PanelAction::ToggleContext(tab_id) => next.toggle_context(tab_id),
            PanelAction::ClearContext => {
                next.clear_context();
            }
            PanelAction::Resized(height) => {
                next.resize(height);
            }
        }

        Rc::new(next)
    }
}

/// Issues renders: three concurrent queries whose results are applied only
/// while their ticket is the latest.
#[derive(Clone)]
struct Renderer {
    dispatcher: UseReducerDispatcher<ViewSync>,
    sequencer: Rc<RefCell<RenderSequencer>>,
}

impl Renderer {
    fn render(&self) {
        let ticket = self.sequencer.borrow_mut().issue();

        for list in TabList::ALL {
            let dispatcher = self.dispatcher.clone();
            let sequencer = self.sequencer.clone();

            spawn_local(async move {
                match host::query_tabs(list).await {
                    Ok(tabs) => {
                        if sequencer.borrow().is_current(ticket) {
                            dispatcher.dispatch(PanelAction::Snapshot(list, tabs));
                        } else {
                            log::debug!("Dropping stale {} tabs result", list);
                        }
                    }
                    Err(e) => log::warn!("Failed to query {} tabs: {}", list, e),
                }
            });
        }
    }

    fn run_command(&self, command: TabCommand) {
        match command {
            TabCommand::Activate(tab_id) => {
                spawn_host_call("activate tab", host::update_tab(tab_id, TabUpdate::activate()))
            }
            TabCommand::Mute(tab_id) => {
                spawn_host_call("mute tab", host::update_tab(tab_id, TabUpdate::mute(true)))
            }
            TabCommand::Unmute(tab_id) => {
                spawn_host_call("unmute tab", host::update_tab(tab_id, TabUpdate::mute(false)))
            }
            TabCommand::Close(tab_id) => spawn_host_call("close tab", host::remove_tab(tab_id)),
            TabCommand::ToggleContext(tab_id) => {
                self.dispatcher.dispatch(PanelAction::ToggleContext(tab_id));
                self.render();
            }
        }
    }

    fn run_context_action(&self, action: ContextAction, tab_id: TabId) {
        let renderer = self.clone();

        spawn_local(async move {
            let result = match action {
                ContextAction::Duplicate => host::duplicate_tab(tab_id)
                    .await
                    .map(|tab| log::debug!("Duplicated tab {} as {}", tab_id, tab.id)),
                ContextAction::MoveToTop => move_to_top(tab_id).await,
            };

            if let Err(e) = result {
                log::warn!("Context action {:?} on tab {} failed: {}", action, tab_id, e);
            }

            renderer.dispatcher.dispatch(PanelAction::ClearContext);
            renderer.render();
        });
    }
}

/// Moves a tab to just after the last pinned tab
async fn move_to_top(tab_id: TabId) -> Result<(), PanelError> {
    let pinned = host::query_tabs(TabList::Pinned).await?;
    host::move_tab(tab_id, move_to_top_index(pinned.len())).await
}

fn spawn_host_call<F>(what: &'static str, call: F)
where
    F: Future<Output = Result<(), PanelError>> + 'static,
{
    spawn_local(async move {
        if let Err(e) = call.await {
            log::warn!("Failed to {}: {}", what, e);
        }
    });
}

fn measure_height(node: &NodeRef) -> Option<i32> {
    node.cast::<HtmlElement>().map(|element| element.offset_height())
}

#[derive(Properties, PartialEq)]
pub struct PanelProps {
    #[prop_or_default]
    pub config: PanelConfig,
}

#[function_component(Panel)]
pub fn panel(props: &PanelProps) -> Html {
    let sync = use_reducer_eq(ViewSync::new);
    let sequencer = use_mut_ref(RenderSequencer::default);
    let pinlist_ref = use_node_ref();

    let renderer = Renderer {
        dispatcher: sync.dispatcher(),
        sequencer,
    };

    // Subscribe to tab notifications, window resizes and outside clicks for the
    // panel's lifetime
    {
        let renderer = renderer.clone();
        let pinlist_ref = pinlist_ref.clone();

        use_effect_with((), move |_| {
            let listener: host::EventListener = {
                let renderer = renderer.clone();
                Closure::wrap(Box::new(move |raw: JsValue| {
                    match host::decode_event(raw) {
                        Ok(event) => renderer.dispatcher.dispatch(PanelAction::Host(event)),
                        Err(e) => log::warn!("Ignoring tab notification: {}", e),
                    }
                    renderer.render();
                }) as Box<dyn Fn(JsValue)>)
            };
            host::subscribe(&listener);

            let on_resize = {
                let dispatcher = renderer.dispatcher.clone();
                Closure::wrap(Box::new(move |_: web_sys::Event| {
                    if let Some(height) = measure_height(&pinlist_ref) {
                        dispatcher.dispatch(PanelAction::Resized(height));
                    }
                }) as Box<dyn Fn(web_sys::Event)>)
            };
            // Rows and the menu stop propagation, so whatever reaches the
            // window was released outside them
            let on_outside_mouseup = {
                let dispatcher = renderer.dispatcher.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    if dismisses_context(MouseButton::from_code(e.button())) {
                        dispatcher.dispatch(PanelAction::ClearContext);
                    }
                }) as Box<dyn Fn(web_sys::MouseEvent)>)
            };

            let window = web_sys::window();
            if let Some(window) = &window {
                if let Err(e) = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref()) {
                    log::warn!("Failed to watch window resizes: {:?}", e);
                }
                if let Err(e) = window.add_event_listener_with_callback("mouseup", on_outside_mouseup.as_ref().unchecked_ref()) {
                    log::warn!("Failed to watch outside clicks: {:?}", e);
                }
            }

            renderer.render();

            move || {
                host::unsubscribe(&listener);
                if let Some(window) = &window {
                    if let Err(e) = window.remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref()) {
                        log::warn!("Failed to stop watching window resizes: {:?}", e);
                    }
                    if let Err(e) = window.remove_event_listener_with_callback("mouseup", on_outside_mouseup.as_ref().unchecked_ref()) {
                        log::warn!("Failed to stop watching outside clicks: {:?}", e);
                    }
                }
            }
        });
    }

    // The pinned block can also change height when pins come and go
    {
        let dispatcher = renderer.dispatcher.clone();
        let pinlist_ref = pinlist_ref.clone();
        use_effect(move || {
            if let Some(height) = measure_height(&pinlist_ref) {
                dispatcher.dispatch(PanelAction::Resized(height));
            }
            || ()
        });
    }

    // Re-render only when the pinned block height actually changed
    {
        let renderer = renderer.clone();
        use_effect_with(sync.state().pin_height(), move |height| {
            if height.is_some() {
                renderer.render();
            }
            || ()
        });
    }

    let on_command = {
        let renderer = renderer.clone();
        Callback::from(move |command: TabCommand| renderer.run_command(command))
    };

    let on_context_action = {
        let renderer = renderer.clone();
        let context = sync.state().context();
        Callback::from(move |action: ContextAction| {
            if let Some(tab_id) = context {
                renderer.run_context_action(action, tab_id);
            }
        })
    };

    let oncontextmenu = {
        let suppress = props.config.suppress_native_context_menu;
        Callback::from(move |e: MouseEvent| {
            if suppress {
                e.prevent_default();
            }
        })
    };

    let empty_icon = props.config.empty_icon.as_str();
    let state = sync.state();

    let pins: Vec<Html> = sync
        .pinned()
        .rows()
        .iter()
        .map(|slot| {
            html! {
                <PinRow
                    key={format!("pin-{}", slot.key)}
                    view={update_pin(&slot.tab, state, empty_icon)}
                    on_command={on_command.clone()}
                />
            }
        })
        .collect();

    let context_menu = |hidden: bool| {
        html! {
            <ContextMenu key="context" hidden={hidden} on_action={on_context_action.clone()} />
        }
    };

    let mut rows: Vec<Html> = Vec::with_capacity(sync.unpinned().len() + 1);
    for slot in sync.unpinned().rows() {
        let view = update_row(&slot.tab, state, empty_icon);
        let anchored = view.has_context;
        rows.push(html! {
            <TabRow key={format!("row-{}", slot.key)} view={view} on_command={on_command.clone()} />
        });
        if anchored {
            rows.push(context_menu(false));
        }
    }
    if sync.context_anchor().is_none() {
        rows.push(context_menu(true));
    }

    let style = state.pin_height().map(|height| format!("--pin-height: {}px", height));

    html! {
        <div class="panel" style={style} oncontextmenu={oncontextmenu}>
            <div id="pinlist" ref={pinlist_ref}>
                {for pins}
            </div>
            <div id="tablist">
                {for rows}
            </div>
            <div id="footer">
                {format!("{} tabs", sync.tab_count())}
            </div>
        </div>
    }
}
