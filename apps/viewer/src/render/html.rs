//! Document tree → HTML markup. All profile text goes through [`escape`].

use crate::render::document::{
    Document, EducationItem, ExperienceItem, Footer, Header, ProjectItem, Section,
};
use crate::models::profile::SkillCategory;

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const EXTERNAL: &str = r#"target="_blank" rel="noopener noreferrer""#;

/// Renders every section of the document, in document order, into one `<main>` block.
pub fn render_body(doc: &Document<'_>) -> String {
    let mut out = String::from("<main class=\"profile\">\n");
    for section in &doc.sections {
        match section {
            Section::Header(header) => render_header(&mut out, header),
            Section::Experience(items) => render_experience(&mut out, items),
            Section::Education(items) => render_education(&mut out, items),
            Section::Skills(categories) => render_skills(&mut out, categories),
            Section::Projects(items) => render_projects(&mut out, items),
            Section::Footer(footer) => render_footer(&mut out, footer),
        }
    }
    out.push_str("</main>\n");
    out
}

fn render_header(out: &mut String, header: &Header<'_>) {
    out.push_str("<header class=\"identity\">\n<div class=\"identity-top\">\n");
    if let Some(image) = header.image {
        out.push_str(&format!(
            "<img class=\"avatar\" src=\"{}\" alt=\"{}\">\n",
            escape(image),
            escape(header.name)
        ));
    }
    out.push_str("<div>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape(header.name)));
    if let Some(headline) = header.headline {
        out.push_str(&format!("<p class=\"headline\">{}</p>\n", escape(headline)));
    }
    if let Some(location) = &header.location {
        out.push_str(&format!("<p class=\"location\">📍 {}</p>\n", escape(location)));
    }
    out.push_str("</div>\n</div>\n");

    if let Some(summary) = header.summary {
        out.push_str(&format!("<p class=\"summary\">{}</p>\n", escape(summary)));
    }

    if let Some(links) = &header.links {
        out.push_str("<nav class=\"links\">\n");
        for link in links {
            let icon = if link.website { "🌐" } else { "🔗" };
            out.push_str(&format!(
                "<a href=\"{}\" {EXTERNAL}>{icon} {}</a>\n",
                escape(link.href),
                escape(&link.label)
            ));
        }
        out.push_str("</nav>\n");
    }

    if let Some(email) = header.email {
        out.push_str(&format!(
            "<p class=\"contact\">✉️ <a href=\"mailto:{0}\">{0}</a></p>\n",
            escape(email)
        ));
    }
    if let Some(phone) = header.phone {
        out.push_str(&format!(
            "<p class=\"contact\">📞 <a href=\"tel:{0}\">{0}</a></p>\n",
            escape(phone)
        ));
    }
    out.push_str("</header>\n");
}

fn open_section(out: &mut String, id: &str, title: &str) {
    out.push_str(&format!(
        "<section id=\"{id}\">\n<h2>{title}</h2>\n<div class=\"entries\">\n"
    ));
}

fn close_section(out: &mut String) {
    out.push_str("</div>\n</section>\n");
}

fn render_chips(out: &mut String, class: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str("<div class=\"chips\">");
    for item in items {
        out.push_str(&format!("<span class=\"{class}\">{}</span>", escape(item)));
    }
    out.push_str("</div>\n");
}

fn render_experience(out: &mut String, items: &[ExperienceItem<'_>]) {
    open_section(out, "experience", "Experience");
    for exp in items {
        out.push_str("<article class=\"card\">\n");
        out.push_str(&format!("<h3>{}</h3>\n", escape(exp.title)));
        out.push_str(&format!("<p class=\"org\">{}", escape(exp.organization)));
        if let Some(location) = exp.location {
            out.push_str(&format!(" · {}", escape(location)));
        }
        out.push_str("</p>\n");
        out.push_str(&format!("<p class=\"dates\">{}</p>\n", escape(&exp.dates)));
        if !exp.highlights.is_empty() {
            out.push_str("<ul class=\"highlights\">\n");
            for highlight in exp.highlights {
                out.push_str(&format!("<li>{}</li>\n", escape(highlight)));
            }
            out.push_str("</ul>\n");
        }
        render_chips(out, "tag", exp.tags);
        out.push_str("</article>\n");
    }
    close_section(out);
}

fn render_education(out: &mut String, items: &[EducationItem<'_>]) {
    open_section(out, "education", "Education");
    for edu in items {
        out.push_str("<article class=\"card\">\n");
        out.push_str(&format!("<h3>{}</h3>\n", escape(edu.institution)));
        if let Some(credential) = &edu.credential {
            out.push_str(&format!("<p class=\"org\">{}</p>\n", escape(credential)));
        }
        out.push_str(&format!("<p class=\"dates\">{}", escape(&edu.dates)));
        if let Some(status) = edu.status {
            out.push_str(&format!(" · {}", escape(status)));
        }
        out.push_str("</p>\n</article>\n");
    }
    close_section(out);
}

fn render_skills(out: &mut String, categories: &[SkillCategory]) {
    open_section(out, "skills", "Skills");
    for category in categories {
        out.push_str("<article class=\"card\">\n");
        out.push_str(&format!("<h3>{}</h3>\n", escape(&category.category)));
        render_chips(out, "skill", &category.items);
        out.push_str("</article>\n");
    }
    close_section(out);
}

fn render_projects(out: &mut String, items: &[ProjectItem<'_>]) {
    open_section(out, "projects", "Projects");
    for proj in items {
        out.push_str("<article class=\"card\">\n<h3>");
        match proj.url {
            Some(url) => out.push_str(&format!(
                "<a href=\"{}\" {EXTERNAL}>{} ↗</a>",
                escape(url),
                escape(proj.name)
            )),
            None => out.push_str(&escape(proj.name)),
        }
        out.push_str("</h3>\n");
        if let Some(description) = proj.description {
            out.push_str(&format!("<p class=\"description\">{}</p>\n", escape(description)));
        }
        render_chips(out, "tech", proj.tech);
        if let Some(repo) = proj.repo_url {
            out.push_str(&format!(
                "<p class=\"source\"><a href=\"{}\" {EXTERNAL}>View Source</a></p>\n",
                escape(repo)
            ));
        }
        out.push_str("</article>\n");
    }
    close_section(out);
}

fn render_footer(out: &mut String, footer: &Footer) {
    out.push_str("<footer>\n");
    out.push_str(&format!(
        "<p>Last updated {}</p>\n",
        escape(&footer.last_updated)
    ));
    out.push_str(&format!(
        "<div class=\"data-links\"><a href=\"{}\">📄 JSON</a><a href=\"{}\">🔗 JSON-LD</a></div>\n",
        escape(&footer.json_url),
        escape(&footer.json_ld_url)
    ));
    out.push_str(&format!(
        "<p class=\"powered\">Powered by <a href=\"{}\">Truth Engine</a></p>\n",
        escape(&footer.api_base)
    ));
    out.push_str("</footer>\n");
}
