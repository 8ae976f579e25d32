use yew::prelude::*;

use common::model::stats::DocumentStats;

use crate::cache::Cached;
use crate::components::admins::AdminsPage;
use crate::components::banned_words::BannedWordsPage;
use crate::components::comments::CommentsPage;
use crate::components::documents::DocumentsPage;
use crate::components::public::document_detail::DocumentDetailPage;
use crate::components::public::guide::{GuideKind, GuidePage};
use crate::components::public::search::SearchPage;
use crate::components::translations::TranslationsPage;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Search,
    Document(i64),
    Guide,
    Disclaimer,
    AdminDocuments,
    AdminComments,
    AdminBannedWords,
    AdminAccounts,
    AdminTranslations,
}

impl Page {
    fn is_admin(&self) -> bool {
        matches!(
            self,
            Page::AdminDocuments
                | Page::AdminComments
                | Page::AdminBannedWords
                | Page::AdminAccounts
                | Page::AdminTranslations
        )
    }
}

pub enum Msg {
    Navigate(Page),
    OpenDocument(i64),
    StatsFetched(Cached<DocumentStats>),
}

/// App shell: top navigation plus the active page. The admin session and the
/// public stats cache live here and are injected into pages through props.
pub struct App {
    page: Page,
    session: Option<Session>,
    stats: Option<Cached<DocumentStats>>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App {
            page: Page::Search,
            session: Session::load(),
            stats: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => {
                self.page = page;
                true
            }
            Msg::OpenDocument(id) => {
                self.page = Page::Document(id);
                true
            }
            Msg::StatsFetched(stats) => {
                self.stats = Some(stats);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="app">
                <nav class="main-nav">
                    { self.nav_button(link, Page::Search, "Search") }
                    { self.nav_button(link, Page::Guide, "FOI guide") }
                    { self.nav_button(link, Page::Disclaimer, "Disclaimer") }
                    {
                        if self.session.is_some() {
                            html! {
                                <>
                                    <span class="nav-separator">{ "Admin:" }</span>
                                    { self.nav_button(link, Page::AdminDocuments, "Documents") }
                                    { self.nav_button(link, Page::AdminComments, "Comments") }
                                    { self.nav_button(link, Page::AdminBannedWords, "Banned words") }
                                    { self.nav_button(link, Page::AdminAccounts, "Admins") }
                                    { self.nav_button(link, Page::AdminTranslations, "Translations") }
                                </>
                            }
                        } else {
                            html! {}
                        }
                    }
                </nav>
                <main>{ self.build_page(ctx) }</main>
            </div>
        }
    }
}

impl App {
    fn nav_button(&self, link: &yew::html::Scope<Self>, page: Page, label: &'static str) -> Html {
        let active = self.page == page;
        html! {
            <button
                class={classes!("nav-btn", active.then_some("active"))}
                onclick={link.callback(move |_| Msg::Navigate(page))}
            >
                { label }
            </button>
        }
    }

    fn build_page(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        if self.page.is_admin() {
            let Some(session) = &self.session else {
                return html! {
                    <div class="signin-prompt">
                        <p>{ "This area needs an admin session." }</p>
                        <a href="/login">{ "Sign in" }</a>
                    </div>
                };
            };
            let session = session.clone();
            return match self.page {
                Page::AdminDocuments => html! { <DocumentsPage {session} /> },
                Page::AdminComments => html! { <CommentsPage {session} /> },
                Page::AdminBannedWords => html! { <BannedWordsPage {session} /> },
                Page::AdminAccounts => html! { <AdminsPage {session} /> },
                Page::AdminTranslations => html! { <TranslationsPage {session} /> },
                _ => html! {},
            };
        }
        match self.page {
            Page::Search => html! {
                <SearchPage
                    cached_stats={self.stats.clone()}
                    on_stats_fetched={link.callback(Msg::StatsFetched)}
                    on_open_document={link.callback(Msg::OpenDocument)}
                />
            },
            Page::Document(id) => html! {
                <DocumentDetailPage
                    key={id.to_string()}
                    document_id={id}
                    on_back={link.callback(|_| Msg::Navigate(Page::Search))}
                />
            },
            Page::Guide => html! { <GuidePage kind={GuideKind::FoiGuide} /> },
            Page::Disclaimer => html! { <GuidePage kind={GuideKind::Disclaimer} /> },
            _ => html! {},
        }
    }
}
