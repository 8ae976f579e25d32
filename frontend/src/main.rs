use crate::app::App;

mod api;
mod app;
mod cache;
mod components;
mod notify;
mod session;
mod tops_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
