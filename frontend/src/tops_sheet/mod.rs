use uuid::Uuid;
use web_sys::js_sys;
use yew::{html, AttrValue, Callback, Component, Context, Html, NodeRef, Properties};

/// Sliding sheet used for confirmations and one-time reveals. Opened and
/// closed imperatively through its `NodeRef` so callers can keep the sheet
/// mounted while toggling visibility.
pub struct TopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={props.node_ref.clone()}>
                {
                    if props.title.is_some() || props.on_close.is_some() {
                        html! {
                            <div class="top-sheet-header">
                                <span class="top-sheet-title">
                                    { props.title.clone().unwrap_or_else(|| AttrValue::from("")) }
                                </span>
                                {
                                    match &props.on_close {
                                        Some(on_close) => {
                                            let on_close = on_close.clone();
                                            html! {
                                                <button
                                                    class="top-sheet-close"
                                                    onclick={Callback::from(move |_| on_close.emit(()))}
                                                >
                                                    { "\u{2715}" }
                                                </button>
                                            }
                                        }
                                        None => html! {},
                                    }
                                }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                { props.children.clone() }
            </div>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    toggle_top_sheet(top_sheet_ref, "add");
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    toggle_top_sheet(top_sheet_ref, "remove");
}

fn toggle_top_sheet(top_sheet_ref: NodeRef, operation: &str) {
    if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
        let func = js_sys::Function::new_no_args(&format!(
            "document.querySelector('#{}').classList.{}('show')",
            top_sheet.id(),
            operation
        ));
        if let Some(window) = web_sys::window() {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50)
                .ok();
        }
    }
}
