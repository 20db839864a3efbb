//! Page assembly: the top-level profile-or-error branch and the HTML shells
//! for both rendering strategies.

use chrono::{DateTime, Local};
use tracing::debug;

use crate::models::profile::Profile;
use crate::render::document::{build_document, Section, SiteLinks};
use crate::render::error_view::{error_panel, ERROR_TITLE};
use crate::render::html::{escape, render_body};
use crate::render::json_ld;

const SITE_TITLE: &str = "Truth Engine Profile Viewer";
const SITE_DESCRIPTION: &str = "Powered by Truth Engine";
/// Path the on-load shell pulls its content from.
pub const FRAGMENT_PATH: &str = "/fragment";

const STYLE: &str = "\
body{margin:0;font-family:system-ui,-apple-system,sans-serif;background:#f9fafb;color:#111827}\
main{max-width:56rem;margin:0 auto;padding:3rem 1rem}\
.identity-top{display:flex;gap:1.5rem;align-items:flex-start}\
.avatar{width:6rem;height:6rem;border-radius:50%;object-fit:cover}\
h1{font-size:2.25rem;margin:0}\
.headline{font-size:1.25rem;color:#4b5563;margin:.25rem 0}\
.location,.dates{font-size:.875rem;color:#6b7280}\
.summary{white-space:pre-line;line-height:1.6}\
.links a{margin-right:.75rem;color:#2563eb;text-decoration:none}\
section{margin-top:3rem}\
h2{border-bottom:1px solid #e5e7eb;padding-bottom:.5rem}\
.card{background:#fff;border:1px solid #f3f4f6;border-radius:.5rem;padding:1.5rem;margin-bottom:1rem}\
.card h3{margin:0 0 .25rem}\
.chips span{display:inline-block;margin:.25rem .25rem 0 0;padding:.125rem .5rem;border-radius:.25rem;background:#f3f4f6;font-size:.75rem}\
.chips .skill{background:#eff6ff;color:#1d4ed8;border-radius:9999px}\
footer{margin-top:4rem;border-top:1px solid #e5e7eb;padding-top:2rem;text-align:center;font-size:.875rem;color:#6b7280}\
.data-links a{margin:0 .5rem;font-family:monospace}\
.unavailable{text-align:center}\
.unavailable .error{color:#ef4444}\
.fix{display:inline-block;text-align:left;font-family:monospace;background:#0f172a;color:#fff;padding:1.5rem;border-radius:1rem}\
.loading{text-align:center;opacity:.6;padding-top:30vh}";

/// Everything one branch of the top-level conditional produces.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub title: String,
    pub description: String,
    pub body: String,
    pub available: bool,
}

/// Profile → full view with structured data; absence → the error panel.
pub fn render_view(
    profile: Option<&Profile>,
    site: SiteLinks<'_>,
    env_var: &str,
    now: DateTime<Local>,
) -> View {
    match profile {
        Some(profile) => {
            let doc = build_document(profile, site, now);
            debug!(
                "Document sections: {:?}",
                doc.sections.iter().map(Section::kind).collect::<Vec<_>>()
            );
            let body = format!(
                "<script type=\"application/ld+json\">{}</script>\n{}",
                json_ld::script_body(profile),
                render_body(&doc)
            );
            View {
                title: doc.title,
                description: doc.description,
                body,
                available: true,
            }
        }
        None => View {
            title: ERROR_TITLE.to_string(),
            description: SITE_DESCRIPTION.to_string(),
            body: error_panel(env_var),
            available: false,
        },
    }
}

fn shell(title: &str, description: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n\
         <meta name=\"description\" content=\"{}\">\n\
         <style>{STYLE}</style>\n\
         </head>\n<body>\n{body}</body>\n</html>\n",
        escape(title),
        escape(description)
    )
}

/// Complete server-rendered page.
pub fn full_page(view: &View) -> String {
    shell(&view.title, &view.description, &view.body)
}

/// Shell for the on-load strategy: a loading indicator plus a one-shot loader
/// that swaps in the fragment once the page has mounted. A failed request
/// swaps in the error panel held in the `<template>` instead.
pub fn loading_shell(env_var: &str) -> String {
    let body = format!(
        "<div id=\"root\">\n\
         <div class=\"loading\">Syncing with Truth Engine...</div>\n\
         </div>\n\
         <template id=\"unavailable\">\n{panel}</template>\n\
         <script>\n\
         var root = document.getElementById(\"root\");\n\
         fetch(\"{FRAGMENT_PATH}\")\n\
         .then(function (res) {{\n\
           if (!res.ok) {{ throw new Error(\"Status: \" + res.status); }}\n\
           return res.text();\n\
         }})\n\
         .then(function (html) {{ root.innerHTML = html; }})\n\
         .catch(function (err) {{\n\
           console.error(\"Fetch error:\", err);\n\
           root.innerHTML = document.getElementById(\"unavailable\").innerHTML;\n\
         }});\n\
         </script>\n",
        panel = error_panel(env_var)
    );
    shell(SITE_TITLE, SITE_DESCRIPTION, &body)
}
