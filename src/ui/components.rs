/// Row and context menu components

use crate::interaction::{dispatch_mouse_up, ContextAction, IconRects, MouseButton, Rect, RowKind, TabCommand};
use crate::row_view::RowView;
use patternfly_yew::prelude::{Button, ButtonVariant};
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RowProps {
    pub view: RowView,
    pub on_command: Callback<TabCommand>,
}

fn element_rect(node: &NodeRef) -> Option<Rect> {
    node.cast::<Element>().map(|element| {
        let rect = element.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom())
    })
}

fn mouse_up_handler(
    kind: RowKind,
    props: &RowProps,
    audible: Option<NodeRef>,
    muted: Option<NodeRef>,
) -> Callback<MouseEvent> {
    let tab_id = props.view.tab_id;
    let on_command = props.on_command.clone();

    Callback::from(move |e: MouseEvent| {
        // Rows own their clicks; the window treats the rest as outside clicks
        e.stop_propagation();

        let icons = IconRects {
            audible: audible.as_ref().and_then(element_rect),
            muted: muted.as_ref().and_then(element_rect),
        };
        let button = MouseButton::from_code(e.button());
        let (x, y) = (e.client_x() as f64, e.client_y() as f64);

        if let Some(command) = dispatch_mouse_up(kind, tab_id, button, x, y, &icons) {
            on_command.emit(command);
        }
    })
}

#[function_component(PinRow)]
pub fn pin_row(props: &RowProps) -> Html {
    let onmouseup = mouse_up_handler(RowKind::Pin, props, None, None);
    let view = &props.view;

    html! {
        <span class={view.class_attr()} data-tab_id={view.tab_id.to_string()} onmouseup={onmouseup}>
            <img class="favicon" src={view.favicon.clone()} />
        </span>
    }
}

#[function_component(TabRow)]
pub fn tab_row(props: &RowProps) -> Html {
    let audible_ref = use_node_ref();
    let muted_ref = use_node_ref();
    let onmouseup = mouse_up_handler(
        RowKind::Tab,
        props,
        Some(audible_ref.clone()),
        Some(muted_ref.clone()),
    );
    let view = &props.view;

    html! {
        <div class={view.class_attr()} data-tab_id={view.tab_id.to_string()} onmouseup={onmouseup}>
            <span class="line" title={view.title.clone()}>
                <img class="favicon" src={view.favicon.clone()} />
                <span class="audibleicon flexicon" ref={audible_ref}>{"\u{1F50A}"}</span>
                <span class="mutedicon flexicon" ref={muted_ref}>{"\u{1F508}"}</span>
                <span class="title">{view.title.clone()}</span>
            </span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContextMenuProps {
    pub hidden: bool,
    pub on_action: Callback<ContextAction>,
}

#[function_component(ContextMenu)]
pub fn context_menu(props: &ContextMenuProps) -> Html {
    // Keep the mouse-up from reaching the window, which would close the
    // menu before the button's click fires
    let onmouseup = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div id="context" hidden={props.hidden} onmouseup={onmouseup}>
            <div id="context-duplicate">
                <Button
                    onclick={props.on_action.reform(|_| ContextAction::Duplicate)}
                    variant={ButtonVariant::Secondary}
                    block={true}
                >
                    {"Duplicate"}
                </Button>
            </div>
            <div id="context-move-to-top">
                <Button
                    onclick={props.on_action.reform(|_| ContextAction::MoveToTop)}
                    variant={ButtonVariant::Secondary}
                    block={true}
                >
                    {"Move to top"}
                </Button>
            </div>
        </div>
    }
}
