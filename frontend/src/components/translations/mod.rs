//! Bulk editor for per-language UI strings, including the custom FAQ
//! entries stored through the paired-key convention.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::TranslationsPage;

use crate::session::Session;

#[derive(Properties, PartialEq)]
pub struct TranslationsProps {
    pub session: Session,
}

impl Component for TranslationsPage {
    type Message = Msg;
    type Properties = TranslationsProps;

    fn create(ctx: &Context<Self>) -> Self {
        TranslationsPage::new(ctx.props().session.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            update::fetch_rows(self, ctx);
        }
    }
}
