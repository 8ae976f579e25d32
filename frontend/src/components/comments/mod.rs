//! Comment moderation queue: pending-only and all-comments views with
//! per-row approve/reject/delete actions.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::CommentsPage;

use crate::session::Session;

#[derive(Properties, PartialEq)]
pub struct CommentsProps {
    pub session: Session,
}

impl Component for CommentsPage {
    type Message = Msg;
    type Properties = CommentsProps;

    fn create(ctx: &Context<Self>) -> Self {
        CommentsPage::new(ctx.props().session.clone())
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
