//! Profile → document tree.
//!
//! The tree decides *what* appears and in which order; `html` decides how it
//! looks. Section order is fixed: header, experience, education, skills,
//! projects, footer. A list section is present only when its field is set and
//! non-empty, and its entries keep the order the profile gave them.

use chrono::{DateTime, Local};

use crate::models::profile::{EducationStatus, Profile, SkillCategory};
use crate::render::format::{
    credential_line, education_date_range, experience_date_range, hostname_label,
    last_updated_label, location_line,
};
use crate::truth_engine::{json_ld_url, raw_json_url};

/// Where the footer links point. `handle` is the configured one, used only
/// when the profile does not carry its own.
#[derive(Debug, Clone, Copy)]
pub struct SiteLinks<'a> {
    pub api_base: &'a str,
    pub handle: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document<'a> {
    pub title: String,
    pub description: String,
    pub sections: Vec<Section<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Section<'a> {
    Header(Header<'a>),
    Experience(Vec<ExperienceItem<'a>>),
    Education(Vec<EducationItem<'a>>),
    Skills(&'a [SkillCategory]),
    Projects(Vec<ProjectItem<'a>>),
    Footer(Footer),
}

impl Section<'_> {
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Header(_) => SectionKind::Header,
            Section::Experience(_) => SectionKind::Experience,
            Section::Education(_) => SectionKind::Education,
            Section::Skills(_) => SectionKind::Skills,
            Section::Projects(_) => SectionKind::Projects,
            Section::Footer(_) => SectionKind::Footer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Header,
    Experience,
    Education,
    Skills,
    Projects,
    Footer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Header<'a> {
    pub name: &'a str,
    pub image: Option<&'a str>,
    pub headline: Option<&'a str>,
    pub location: Option<String>,
    pub summary: Option<&'a str>,
    /// `None` when the profile has no `links` object at all.
    pub links: Option<Vec<LinkItem<'a>>>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkItem<'a> {
    pub href: &'a str,
    pub label: String,
    pub website: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceItem<'a> {
    pub title: &'a str,
    pub organization: &'a str,
    pub location: Option<&'a str>,
    pub dates: String,
    pub highlights: &'a [String],
    pub tags: &'a [String],
}

#[derive(Debug, Clone, PartialEq)]
pub struct EducationItem<'a> {
    pub institution: &'a str,
    pub credential: Option<String>,
    pub dates: String,
    pub status: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectItem<'a> {
    pub name: &'a str,
    pub url: Option<&'a str>,
    pub description: Option<&'a str>,
    pub tech: &'a [String],
    pub repo_url: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Footer {
    pub last_updated: String,
    pub json_url: String,
    pub json_ld_url: String,
    pub api_base: String,
}

/// Present and non-empty, as a slice.
fn non_empty<T>(items: &Option<Vec<T>>) -> Option<&[T]> {
    items.as_deref().filter(|v| !v.is_empty())
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

pub fn build_document<'a>(
    profile: &'a Profile,
    site: SiteLinks<'_>,
    now: DateTime<Local>,
) -> Document<'a> {
    let identity = &profile.identity;
    let mut sections = vec![Section::Header(build_header(profile))];

    if let Some(experience) = non_empty(&profile.experience) {
        sections.push(Section::Experience(
            experience
                .iter()
                .map(|exp| ExperienceItem {
                    title: &exp.title,
                    organization: &exp.organization,
                    location: present(&exp.location),
                    dates: experience_date_range(exp),
                    highlights: non_empty(&exp.highlights).unwrap_or(&[]),
                    tags: non_empty(&exp.tags).unwrap_or(&[]),
                })
                .collect(),
        ));
    }

    if let Some(education) = non_empty(&profile.education) {
        sections.push(Section::Education(
            education
                .iter()
                .map(|edu| EducationItem {
                    institution: &edu.institution,
                    credential: credential_line(edu),
                    dates: education_date_range(edu),
                    status: edu.status.as_ref().map(EducationStatus::as_str),
                })
                .collect(),
        ));
    }

    if let Some(skills) = non_empty(&profile.skills) {
        sections.push(Section::Skills(skills));
    }

    if let Some(projects) = non_empty(&profile.projects) {
        sections.push(Section::Projects(
            projects
                .iter()
                .map(|proj| ProjectItem {
                    name: &proj.name,
                    url: present(&proj.url),
                    description: present(&proj.description),
                    tech: non_empty(&proj.tech).unwrap_or(&[]),
                    repo_url: present(&proj.repo_url),
                })
                .collect(),
        ));
    }

    let handle = profile
        .handle
        .as_deref()
        .filter(|h| !h.is_empty())
        .or(site.handle)
        .unwrap_or("");
    sections.push(Section::Footer(Footer {
        last_updated: last_updated_label(profile.last_updated.as_deref(), &now),
        json_url: raw_json_url(site.api_base, handle),
        json_ld_url: json_ld_url(site.api_base, handle),
        api_base: site.api_base.to_string(),
    }));

    Document {
        title: format!("{} | Portfolio", identity.name),
        description: present(&identity.headline)
            .map(String::from)
            .unwrap_or_else(|| format!("{}'s professional portfolio", identity.name)),
        sections,
    }
}

fn build_header(profile: &Profile) -> Header<'_> {
    let identity = &profile.identity;

    let links = profile.links.as_ref().map(|links| {
        let website = present(&links.website).map(|href| LinkItem {
            href,
            label: "Website".to_string(),
            website: true,
        });
        let same_as = links
            .same_as
            .iter()
            .flatten()
            .filter(|url| !url.is_empty())
            .map(|url| LinkItem {
                href: url,
                label: hostname_label(url),
                website: false,
            });
        website.into_iter().chain(same_as).collect::<Vec<_>>()
    });

    let contact = profile.contact.as_ref();
    Header {
        name: &identity.name,
        image: present(&identity.image),
        headline: present(&identity.headline),
        location: identity
            .location
            .as_ref()
            .map(location_line)
            .filter(|line| !line.is_empty()),
        summary: present(&identity.summary),
        links,
        email: contact.and_then(|c| present(&c.public_email)),
        phone: contact.and_then(|c| present(&c.phone)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{Education, Experience, Identity, Links, Location, Project};
    use chrono::TimeZone;

    const SITE: SiteLinks<'static> = SiteLinks {
        api_base: "https://ryanguidry.com",
        handle: Some("configured"),
    };

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
    }

    fn named(name: &str) -> Profile {
        Profile {
            handle: Some("rg".to_string()),
            identity: Identity {
                name: name.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn kinds(doc: &Document<'_>) -> Vec<SectionKind> {
        doc.sections.iter().map(Section::kind).collect()
    }

    fn full_profile() -> Profile {
        let mut profile = named("Ryan Guidry");
        profile.experience = Some(vec![
            Experience {
                organization: "Second".to_string(),
                title: "Newer".to_string(),
                ..Default::default()
            },
            Experience {
                organization: "First".to_string(),
                title: "Older".to_string(),
                ..Default::default()
            },
        ]);
        profile.education = Some(vec![Education {
            institution: "UT Austin".to_string(),
            ..Default::default()
        }]);
        profile.skills = Some(vec![SkillCategory {
            category: "Languages".to_string(),
            items: vec!["Rust".to_string()],
        }]);
        profile.projects = Some(vec![Project {
            name: "viewer".to_string(),
            ..Default::default()
        }]);
        profile
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let profile = full_profile();
        let doc = build_document(&profile, SITE, now());
        assert_eq!(
            kinds(&doc),
            vec![
                SectionKind::Header,
                SectionKind::Experience,
                SectionKind::Education,
                SectionKind::Skills,
                SectionKind::Projects,
                SectionKind::Footer,
            ]
        );
    }

    #[test]
    fn test_entries_keep_source_order() {
        let profile = full_profile();
        let doc = build_document(&profile, SITE, now());
        let Section::Experience(items) = &doc.sections[1] else {
            panic!("expected experience section");
        };
        let orgs: Vec<_> = items.iter().map(|i| i.organization).collect();
        assert_eq!(orgs, vec!["Second", "First"]);
    }

    #[test]
    fn test_missing_or_empty_experience_is_skipped() {
        let mut profile = named("Ryan Guidry");
        let doc = build_document(&profile, SITE, now());
        assert_eq!(kinds(&doc), vec![SectionKind::Header, SectionKind::Footer]);

        profile.experience = Some(vec![]);
        profile.projects = Some(vec![]);
        let doc = build_document(&profile, SITE, now());
        assert!(!kinds(&doc).contains(&SectionKind::Experience));
        assert!(!kinds(&doc).contains(&SectionKind::Projects));
    }

    #[test]
    fn test_header_location_and_links() {
        let mut profile = named("Ryan Guidry");
        profile.identity.location = Some(Location {
            city: Some("Austin".to_string()),
            region: None,
            country: Some("USA".to_string()),
        });
        profile.links = Some(Links {
            website: Some("https://example.com".to_string()),
            same_as: Some(vec!["https://www.linkedin.com/in/rg".to_string()]),
        });

        let doc = build_document(&profile, SITE, now());
        let Section::Header(header) = &doc.sections[0] else {
            panic!("expected header");
        };
        assert_eq!(header.location.as_deref(), Some("Austin, USA"));
        let labels: Vec<_> = header
            .links
            .as_ref()
            .unwrap()
            .iter()
            .map(|l| l.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Website", "linkedin.com/in/rg"]);
    }

    #[test]
    fn test_footer_links_use_profile_handle() {
        let profile = named("Ryan Guidry");
        let doc = build_document(&profile, SITE, now());
        let Some(Section::Footer(footer)) = doc.sections.last() else {
            panic!("expected footer last");
        };
        assert_eq!(footer.json_url, "https://ryanguidry.com/u/rg.json");
        assert_eq!(footer.json_ld_url, "https://ryanguidry.com/u/rg.jsonld");
    }

    #[test]
    fn test_footer_falls_back_to_configured_handle() {
        let mut profile = named("Ryan Guidry");
        profile.handle = None;
        let doc = build_document(&profile, SITE, now());
        let Some(Section::Footer(footer)) = doc.sections.last() else {
            panic!("expected footer last");
        };
        assert_eq!(footer.json_url, "https://ryanguidry.com/u/configured.json");
    }

    #[test]
    fn test_title_and_description() {
        let mut profile = named("Ryan Guidry");
        let doc = build_document(&profile, SITE, now());
        assert_eq!(doc.title, "Ryan Guidry | Portfolio");
        assert_eq!(doc.description, "Ryan Guidry's professional portfolio");

        profile.identity.headline = Some("Engineer".to_string());
        let doc = build_document(&profile, SITE, now());
        assert_eq!(doc.description, "Engineer");
    }
}
