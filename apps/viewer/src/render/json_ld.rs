use serde::Serialize;

use crate::models::profile::Profile;

/// schema.org `Person` built from the profile identity. Absent fields are left out.
#[derive(Debug, Serialize)]
pub struct PersonSchema<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'a str,
    #[serde(rename = "jobTitle", skip_serializing_if = "Option::is_none")]
    pub job_title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'a str>,
    #[serde(rename = "sameAs", skip_serializing_if = "Option::is_none")]
    pub same_as: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress<'a>>,
}

#[derive(Debug, Serialize)]
pub struct PostalAddress<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "addressLocality", skip_serializing_if = "Option::is_none")]
    pub locality: Option<&'a str>,
    #[serde(rename = "addressRegion", skip_serializing_if = "Option::is_none")]
    pub region: Option<&'a str>,
    #[serde(rename = "addressCountry", skip_serializing_if = "Option::is_none")]
    pub country: Option<&'a str>,
}

pub fn person_schema(profile: &Profile) -> PersonSchema<'_> {
    let identity = &profile.identity;
    let links = profile.links.as_ref();

    PersonSchema {
        context: "https://schema.org",
        kind: "Person",
        name: &identity.name,
        job_title: identity.headline.as_deref(),
        description: identity.summary.as_deref(),
        url: links.and_then(|l| l.website.as_deref()),
        same_as: links.and_then(|l| l.same_as.as_deref()),
        address: identity.location.as_ref().map(|loc| PostalAddress {
            kind: "PostalAddress",
            locality: loc.city.as_deref(),
            region: loc.region.as_deref(),
            country: loc.country.as_deref(),
        }),
    }
}

/// Serializes the person schema for embedding in a `<script>` element.
/// `</` is escaped so profile text cannot close the script block early.
pub fn script_body(profile: &Profile) -> String {
    serde_json::to_string(&person_schema(profile))
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/")
}
