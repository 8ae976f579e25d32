//! Public search page with the country-statistics header.
//!
//! The statistics block is backed by an explicit `Cached` entry owned by the
//! app shell and injected through props; this page only fetches when the
//! entry is missing or stale and hands the fresh value back up.

use chrono::Utc;
use num_format::{Locale, ToFormattedString};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::document::Document;
use common::model::stats::DocumentStats;

use crate::api::public::PublicApi;
use crate::api::ApiError;
use crate::cache::Cached;
use crate::notify;

pub enum Msg {
    QueryInput(String),
    CountrySelect(String),
    Search,
    Results(Vec<Document>),
    SearchFailed(ApiError),
    StatsLoaded(DocumentStats),
    StatsFailed(ApiError),
}

#[derive(Properties, PartialEq)]
pub struct SearchProps {
    pub cached_stats: Option<Cached<DocumentStats>>,
    pub on_stats_fetched: Callback<Cached<DocumentStats>>,
    pub on_open_document: Callback<i64>,
}

pub struct SearchPage {
    query: String,
    country: String,
    results: Vec<Document>,
    searching: bool,
    searched: bool,
}

impl Component for SearchPage {
    type Message = Msg;
    type Properties = SearchProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SearchPage {
            query: String::new(),
            country: String::new(),
            results: Vec::new(),
            searching: false,
            searched: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::QueryInput(value) => {
                self.query = value;
                true
            }
            Msg::CountrySelect(value) => {
                self.country = value;
                true
            }
            Msg::Search => {
                if self.searching {
                    return false;
                }
                self.searching = true;
                let query = self.query.clone();
                let country = self.country.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match PublicApi::search(&query, &country).await {
                        Ok(results) => link.send_message(Msg::Results(results)),
                        Err(err) => link.send_message(Msg::SearchFailed(err)),
                    }
                });
                true
            }
            Msg::Results(results) => {
                self.results = results;
                self.searching = false;
                self.searched = true;
                true
            }
            Msg::SearchFailed(err) => {
                self.searching = false;
                notify::error(&format!("Search failed: {err}"));
                true
            }
            Msg::StatsLoaded(stats) => {
                ctx.props()
                    .on_stats_fetched
                    .emit(Cached::new(stats, Utc::now()));
                false
            }
            Msg::StatsFailed(_) => false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        html! {
            <div class="search-page">
                { build_stats_header(props) }
                <div class="search-bar">
                    <input
                        placeholder="Search disclosed documents"
                        value={self.query.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::QueryInput(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                        onkeydown={link.batch_callback(|e: KeyboardEvent| {
                            if e.key() == "Enter" { vec![Msg::Search] } else { vec![] }
                        })}
                    />
                    { build_country_select(self, props, link) }
                    <button disabled={self.searching} onclick={link.callback(|_| Msg::Search)}>
                        { if self.searching { "Searching…" } else { "Search" } }
                    </button>
                </div>
                { self.build_results(ctx) }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let fresh = ctx
            .props()
            .cached_stats
            .as_ref()
            .is_some_and(|cached| cached.is_fresh(Utc::now()));
        if !fresh {
            let link = ctx.link().clone();
            spawn_local(async move {
                match PublicApi::stats().await {
                    Ok(stats) => link.send_message(Msg::StatsLoaded(stats)),
                    Err(err) => link.send_message(Msg::StatsFailed(err)),
                }
            });
        }
    }
}

fn build_stats_header(props: &SearchProps) -> Html {
    match &props.cached_stats {
        Some(cached) => {
            let top: Vec<String> = cached
                .data
                .by_country
                .iter()
                .take(5)
                .map(|entry| format!("{} ({})", entry.country, entry.count))
                .collect();
            html! {
                <div class="stats-header">
                    <span class="total">
                        { format!(
                            "{} documents disclosed",
                            cached.data.total_documents.to_formatted_string(&Locale::en)
                        ) }
                    </span>
                    {
                        if top.is_empty() {
                            html! {}
                        } else {
                            html! { <span class="by-country">{ top.join(" · ") }</span> }
                        }
                    }
                </div>
            }
        }
        None => html! {},
    }
}

fn build_country_select(
    page: &SearchPage,
    props: &SearchProps,
    link: &yew::html::Scope<SearchPage>,
) -> Html {
    let countries: Vec<String> = props
        .cached_stats
        .as_ref()
        .map(|cached| {
            cached
                .data
                .by_country
                .iter()
                .map(|entry| entry.country.clone())
                .collect()
        })
        .unwrap_or_default();
    html! {
        <select onchange={link.callback(|e: Event| {
            Msg::CountrySelect(e.target_unchecked_into::<HtmlSelectElement>().value())
        })}>
            <option value="" selected={page.country.is_empty()}>{ "All countries" }</option>
            {
                countries.into_iter().map(|country| {
                    let selected = country == page.country;
                    html! {
                        <option value={country.clone()} selected={selected}>{ country }</option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}

impl SearchPage {
    fn build_results(&self, ctx: &Context<Self>) -> Html {
        if self.searching {
            return html! { <p class="loading">{ "Searching…" }</p> };
        }
        if self.results.is_empty() {
            return if self.searched {
                html! { <p class="empty">{ "No documents matched." }</p> }
            } else {
                html! {}
            };
        }
        let on_open = ctx.props().on_open_document.clone();
        html! {
            <div class="search-results">
                {
                    self.results.iter().map(|document| {
                        let id = document.id;
                        let on_open = on_open.clone();
                        html! {
                            <div
                                class="result-row"
                                key={id.to_string()}
                                onclick={Callback::from(move |_| on_open.emit(id))}
                            >
                                <h3>{ &document.title }</h3>
                                <span class="country">{ &document.country }</span>
                                <span class="tags">{ document.generated_tags.join(", ") }</span>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        }
    }
}
