use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::translation::decode_faq_entries;

use super::messages::Msg;
use super::state::{TranslationsPage, LANGUAGES, SECTIONS};

pub fn view(page: &TranslationsPage, ctx: &Context<TranslationsPage>) -> Html {
    let link = ctx.link();
    let unsaved = page.unsaved_count();
    html! {
        <div class="translations-page">
            <h2>{ "Translations" }</h2>
            <div class="toolbar">
                { build_selector(&page.language, &LANGUAGES, link, Msg::SetLanguage) }
                { build_selector(&page.section, &SECTIONS, link, Msg::SetSection) }
                <span class="unsaved-count">
                    {
                        if unsaved == 0 {
                            "All changes saved".to_string()
                        } else {
                            format!("{unsaved} unsaved change{}", if unsaved == 1 { "" } else { "s" })
                        }
                    }
                </span>
                <button
                    disabled={page.saving || unsaved == 0}
                    onclick={link.callback(|_| Msg::Save)}
                >
                    { if page.saving { "Saving…" } else { "Save changes" } }
                </button>
                <button onclick={link.callback(|_| Msg::ExportJson)}>{ "Export JSON" }</button>
                <button onclick={link.callback(|_| Msg::CopyJson)}>{ "Copy as JSON" }</button>
            </div>
            {
                if page.loading {
                    html! { <p class="loading">{ "Loading translations…" }</p> }
                } else {
                    build_rows(page, link)
                }
            }
            {
                if page.section == "faq" && !page.loading {
                    build_faq_panel(page, link)
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_selector(
    current: &str,
    options: &'static [&'static str],
    link: &Scope<TranslationsPage>,
    to_msg: fn(String) -> Msg,
) -> Html {
    html! {
        <select onchange={link.callback(move |e: Event| {
            to_msg(e.target_unchecked_into::<HtmlSelectElement>().value())
        })}>
            {
                options.iter().map(|option| {
                    html! {
                        <option value={*option} selected={*option == current}>{ option }</option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}

fn build_rows(page: &TranslationsPage, link: &Scope<TranslationsPage>) -> Html {
    let new_keys = page.new_keys();
    if page.rows.is_empty() && new_keys.is_empty() {
        return html! { <p class="empty">{ "No keys in this section yet." }</p> };
    }
    html! {
        <table class="translations-table">
            <thead>
                <tr>
                    <th>{ "Key" }</th>
                    <th>{ "Value" }</th>
                </tr>
            </thead>
            <tbody>
                {
                    page.rows.iter().map(|row| {
                        let key = row.key.clone();
                        let edited = page.effective_value(row) != row.value;
                        html! {
                            <tr key={row.key.clone()} class={classes!(edited.then_some("edited"))}>
                                <td class="key">{ &row.key }</td>
                                <td>
                                    <input
                                        value={page.effective_value(row).to_string()}
                                        oninput={link.callback(move |e: InputEvent| Msg::Edit {
                                            key: key.clone(),
                                            value: e.target_unchecked_into::<HtmlInputElement>().value(),
                                        })}
                                    />
                                </td>
                            </tr>
                        }
                    }).collect::<Html>()
                }
                {
                    new_keys.into_iter().map(|(key, value)| {
                        let key_for_edit = key.clone();
                        html! {
                            <tr key={key.clone()} class="edited new">
                                <td class="key">{ format!("{key} (new)") }</td>
                                <td>
                                    <input
                                        value={value}
                                        oninput={link.callback(move |e: InputEvent| Msg::Edit {
                                            key: key_for_edit.clone(),
                                            value: e.target_unchecked_into::<HtmlInputElement>().value(),
                                        })}
                                    />
                                </td>
                            </tr>
                        }
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}

fn build_faq_panel(page: &TranslationsPage, link: &Scope<TranslationsPage>) -> Html {
    let entries = decode_faq_entries(&page.rows);
    html! {
        <section class="faq-panel">
            <h3>{ "Custom FAQ entries" }</h3>
            {
                if entries.is_empty() {
                    html! { <p class="empty">{ "No custom FAQ entries." }</p> }
                } else {
                    entries.iter().map(|entry| {
                        html! {
                            <details key={entry.id.clone()}>
                                <summary>{ &entry.question }</summary>
                                <p>{ &entry.answer }</p>
                            </details>
                        }
                    }).collect::<Html>()
                }
            }
            <div class="add-faq-row">
                <input
                    placeholder="Question"
                    value={page.new_faq_question.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::NewFaqQuestion(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <input
                    placeholder="Answer"
                    value={page.new_faq_answer.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::NewFaqAnswer(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <button onclick={link.callback(|_| Msg::AddFaq)}>{ "Add FAQ entry" }</button>
            </div>
        </section>
    }
}
