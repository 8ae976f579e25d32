//! Static public pages rendered from markdown: the freedom-of-information
//! guide and the legal disclaimer.

use pulldown_cmark::{html, Parser};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideKind {
    FoiGuide,
    Disclaimer,
}

#[derive(Properties, PartialEq)]
pub struct GuideProps {
    pub kind: GuideKind,
}

pub struct GuidePage;

impl Component for GuidePage {
    type Message = ();
    type Properties = GuideProps;

    fn create(_ctx: &Context<Self>) -> Self {
        GuidePage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let markdown = match ctx.props().kind {
            GuideKind::FoiGuide => FOI_GUIDE_MD,
            GuideKind::Disclaimer => DISCLAIMER_MD,
        };
        html! {
            <div class="guide-page markdown">
                { Html::from_html_unchecked(render_markdown(markdown)) }
            </div>
        }
    }
}

fn render_markdown(input: &str) -> AttrValue {
    let parser = Parser::new(input);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    AttrValue::from(html_output)
}

const FOI_GUIDE_MD: &str = r#"# Requesting public records

Every resident has the right to request records held by a public body.
This platform publishes documents that were disclosed through such
requests, reviewed by our moderators, and cleared for publication.

## How to file a request

1. Identify the public body that holds the record.
2. Describe the record as precisely as you can: subject, time period,
   and the office that produced it.
3. Send the request in writing and keep a copy. The body must answer
   within the statutory deadline, and any refusal must cite a legal
   exemption.

## What happens to submitted documents

Uploaded documents enter a review queue. A moderator checks that the
file is genuine, strips personal data where the law requires it, and
either approves or rejects the submission. Approved documents are
processed for text extraction and tagging before they appear in search.

## Appeals

If your request is refused or ignored, you can appeal to the oversight
authority. Include the original request, any answer you received, and
the dates of both.
"#;

const DISCLAIMER_MD: &str = r#"# Disclaimer

Documents on this platform were obtained through public-records
requests or submitted by users. We review every submission before
publication, but we cannot guarantee the authenticity or completeness
of third-party material.

The text shown next to a document is produced by automatic character
recognition and may contain errors; the uploaded file remains the
authoritative version.

Comments reflect the views of their authors. Comments can be reported
by any reader and are moderated, but they are not endorsed by the
platform.
"#;
