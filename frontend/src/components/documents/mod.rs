//! Document review page: list by status, edit metadata drafts, and drive the
//! approve/reject state machine. The `Component` implementation delegates to
//! `update::update` and `view::view`; the machine itself lives in
//! `machine.rs` and is pure.

use yew::prelude::*;

mod draft;
mod machine;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::DocumentsPage;

use crate::session::Session;

#[derive(Properties, PartialEq)]
pub struct DocumentsProps {
    pub session: Session,
}

impl Component for DocumentsPage {
    type Message = Msg;
    type Properties = DocumentsProps;

    fn create(ctx: &Context<Self>) -> Self {
        DocumentsPage::new(ctx.props().session.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            update::fetch_list(self, ctx);
        }
    }
}
