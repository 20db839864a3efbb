#![allow(dead_code)]

use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit `null` the same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Public profile document served by the Truth Engine at `/api/u/{handle}/json`.
///
/// The remote source owns validation. Everything except `identity.name` is
/// optional, and a missing or `null` name deserializes to an empty string
/// rather than failing the whole document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub schema_version: Option<String>,
    pub handle: Option<String>,
    pub version_id: Option<String>,
    pub last_updated: Option<String>,
    pub content_hash: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub identity: Identity,
    pub links: Option<Links>,
    pub contact: Option<Contact>,
    pub experience: Option<Vec<Experience>>,
    pub education: Option<Vec<Education>>,
    pub skills: Option<Vec<SkillCategory>>,
    pub projects: Option<Vec<Project>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub image: Option<String>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Links {
    pub website: Option<String>,
    pub same_as: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub public_email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default, deserialize_with = "null_as_default")]
    pub organization: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: Option<bool>,
    pub highlights: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default, deserialize_with = "null_as_default")]
    pub institution: String,
    pub program: Option<String>,
    pub degree: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<EducationStatus>,
}

/// Education status. Values outside the known four are kept verbatim so the
/// page can still show them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum EducationStatus {
    Completed,
    InProgress,
    Incomplete,
    Withdrawn,
    Other(String),
}

impl EducationStatus {
    /// Wire spelling, which is also what the page shows.
    pub fn as_str(&self) -> &str {
        match self {
            EducationStatus::Completed => "completed",
            EducationStatus::InProgress => "in-progress",
            EducationStatus::Incomplete => "incomplete",
            EducationStatus::Withdrawn => "withdrawn",
            EducationStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for EducationStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "completed" => EducationStatus::Completed,
            "in-progress" => EducationStatus::InProgress,
            "incomplete" => EducationStatus::Incomplete,
            "withdrawn" => EducationStatus::Withdrawn,
            _ => EducationStatus::Other(raw),
        }
    }
}

impl From<EducationStatus> for String {
    fn from(status: EducationStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SkillCategory {
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    pub tech: Option<Vec<String>>,
    pub url: Option<String>,
    pub repo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_full_document() {
        let body = r#"{
            "schemaVersion": "1.0",
            "handle": "rg",
            "versionId": "v7",
            "lastUpdated": "2025-01-15T10:00:00Z",
            "contentHash": "abc123",
            "identity": {
                "name": "Ryan Guidry",
                "headline": "Engineer",
                "location": { "city": "Austin", "country": "USA" }
            },
            "links": { "website": "https://example.com", "sameAs": ["https://www.linkedin.com/in/rg"] },
            "contact": { "publicEmail": "rg@example.com" },
            "experience": [{
                "organization": "Acme",
                "title": "Staff Engineer",
                "startDate": "2021",
                "isCurrent": true,
                "highlights": ["Shipped things"]
            }],
            "education": [{ "institution": "UT Austin", "degree": "BS", "status": "in-progress" }],
            "skills": [{ "category": "Languages", "items": ["Rust", "Go"] }],
            "projects": [{ "name": "viewer", "repoUrl": "https://github.com/rg/viewer" }]
        }"#;

        let profile: Profile = serde_json::from_str(body).unwrap();
        assert_eq!(profile.handle.as_deref(), Some("rg"));
        assert_eq!(profile.identity.name, "Ryan Guidry");
        assert_eq!(
            profile.identity.location.as_ref().unwrap().region,
            None
        );
        assert_eq!(
            profile.links.as_ref().unwrap().same_as.as_ref().unwrap().len(),
            1
        );
        let exp = &profile.experience.as_ref().unwrap()[0];
        assert_eq!(exp.is_current, Some(true));
        assert_eq!(exp.start_date.as_deref(), Some("2021"));
        assert_eq!(
            profile.education.as_ref().unwrap()[0].status,
            Some(EducationStatus::InProgress)
        );
        assert_eq!(
            profile.projects.as_ref().unwrap()[0].repo_url.as_deref(),
            Some("https://github.com/rg/viewer")
        );
    }

    #[test]
    fn test_missing_name_passes_through_as_empty() {
        let profile: Profile = serde_json::from_str(r#"{"identity": {}}"#).unwrap();
        assert_eq!(profile.identity.name, "");
        assert!(profile.experience.is_none());
    }

    #[test]
    fn test_status_uses_kebab_case() {
        let status: EducationStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(status, EducationStatus::InProgress);
        assert_eq!(status.as_str(), "in-progress");
    }

    #[test]
    fn test_null_required_fields_render_empty() {
        let body = r#"{
            "identity": { "name": null },
            "experience": [{ "organization": "Acme", "title": null }],
            "education": [{ "institution": null }],
            "skills": [{ "category": null, "items": null }],
            "projects": [{ "name": null }]
        }"#;

        let profile: Profile = serde_json::from_str(body).unwrap();
        assert_eq!(profile.identity.name, "");
        let exp = &profile.experience.as_ref().unwrap()[0];
        assert_eq!(exp.organization, "Acme");
        assert_eq!(exp.title, "");
        assert_eq!(profile.education.as_ref().unwrap()[0].institution, "");
        let skills = &profile.skills.as_ref().unwrap()[0];
        assert_eq!(skills.category, "");
        assert!(skills.items.is_empty());
        assert_eq!(profile.projects.as_ref().unwrap()[0].name, "");
    }

    #[test]
    fn test_null_identity_falls_back_to_default() {
        let profile: Profile = serde_json::from_str(r#"{"identity": null}"#).unwrap();
        assert_eq!(profile.identity, Identity::default());
    }

    #[test]
    fn test_unknown_status_is_kept_verbatim() {
        let body = r#"{"identity": {"name": "Ryan"}, "education": [{"institution": "UT", "status": "graduated"}]}"#;
        let profile: Profile = serde_json::from_str(body).unwrap();
        let status = profile.education.as_ref().unwrap()[0].status.clone().unwrap();
        assert_eq!(status, EducationStatus::Other("graduated".to_string()));
        assert_eq!(status.as_str(), "graduated");
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"graduated\"");
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        assert!(serde_json::from_str::<Profile>("[1, 2, 3]").is_err());
    }
}
