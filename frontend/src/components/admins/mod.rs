//! Admin-account and API-key management page.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::AdminsPage;

use crate::session::Session;

#[derive(Properties, PartialEq)]
pub struct AdminsProps {
    pub session: Session,
}

impl Component for AdminsPage {
    type Message = Msg;
    type Properties = AdminsProps;

    fn create(ctx: &Context<Self>) -> Self {
        AdminsPage::new(ctx.props().session.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            update::fetch_all(self, ctx);
        }
    }
}
