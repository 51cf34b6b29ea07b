//! Content shapes stored under each section path of the document store.
//!
//! DESIGN
//! ======
//! Every field defaults when missing and blank optional strings collapse to
//! `None`, so partially-filled content still renders. List fields accept
//! either a JSON array or an index-keyed object because the hosted store
//! returns sparse arrays in the latter form.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use super::store::SectionPath;

/// A record fetched from one section path.
pub trait SectionContent: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Store path the section reads from.
    const PATH: SectionPath;

    /// Heading override carried by the content, if any.
    fn title(&self) -> Option<&str> {
        None
    }
}

/// Section content that renders as a list of items.
pub trait ListContent: SectionContent {
    type Item: Clone + Send + Sync + 'static;

    fn items(&self) -> &[Self::Item];
}

/// An item that can be enlarged in the detail modal.
pub trait Showcase {
    fn title(&self) -> &str;
    fn image(&self) -> &str;
    fn description(&self) -> Option<&str> {
        None
    }
    fn link(&self) -> Option<&str> {
        None
    }
}

// =============================================================================
// HERO
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroContent {
    #[serde(deserialize_with = "string_or_default")]
    pub name: String,
    #[serde(deserialize_with = "string_or_default")]
    pub subtitle: String,
    #[serde(deserialize_with = "non_blank")]
    pub image: Option<String>,
    #[serde(deserialize_with = "non_blank")]
    pub background_image: Option<String>,
}

impl SectionContent for HeroContent {
    const PATH: SectionPath = SectionPath::Hero;
}

// =============================================================================
// CERTIFICATIONS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certificate {
    #[serde(deserialize_with = "string_or_default")]
    pub title: String,
    #[serde(deserialize_with = "string_or_default")]
    pub img: String,
    #[serde(deserialize_with = "non_blank")]
    pub link: Option<String>,
}

impl Showcase for Certificate {
    fn title(&self) -> &str {
        &self.title
    }

    fn image(&self) -> &str {
        &self.img
    }

    fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationsContent {
    #[serde(deserialize_with = "non_blank")]
    pub title: Option<String>,
    #[serde(deserialize_with = "list_or_map")]
    pub items: Vec<Certificate>,
}

impl SectionContent for CertificationsContent {
    const PATH: SectionPath = SectionPath::Certifications;

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl ListContent for CertificationsContent {
    type Item = Certificate;

    fn items(&self) -> &[Certificate] {
        &self.items
    }
}

// =============================================================================
// PROJECTS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "string_or_default")]
    pub title: String,
    #[serde(deserialize_with = "non_blank")]
    pub description: Option<String>,
    #[serde(deserialize_with = "string_or_default")]
    pub img: String,
    #[serde(deserialize_with = "non_blank")]
    pub link: Option<String>,
}

impl Showcase for Project {
    fn title(&self) -> &str {
        &self.title
    }

    fn image(&self) -> &str {
        &self.img
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectsContent {
    #[serde(deserialize_with = "non_blank")]
    pub title: Option<String>,
    #[serde(deserialize_with = "list_or_map")]
    pub items: Vec<Project>,
}

impl SectionContent for ProjectsContent {
    const PATH: SectionPath = SectionPath::Projects;

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl ListContent for ProjectsContent {
    type Item = Project;

    fn items(&self) -> &[Project] {
        &self.items
    }
}

// =============================================================================
// EXPERIENCE
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    #[serde(deserialize_with = "string_or_default")]
    pub role: String,
    #[serde(deserialize_with = "string_or_default")]
    pub company: String,
    #[serde(deserialize_with = "non_blank")]
    pub period: Option<String>,
    #[serde(deserialize_with = "non_blank")]
    pub location: Option<String>,
    #[serde(deserialize_with = "non_blank")]
    pub description: Option<String>,
    #[serde(deserialize_with = "non_blank")]
    pub logo: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceContent {
    #[serde(deserialize_with = "non_blank")]
    pub title: Option<String>,
    #[serde(deserialize_with = "list_or_map")]
    pub items: Vec<Role>,
}

impl SectionContent for ExperienceContent {
    const PATH: SectionPath = SectionPath::Experience;

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl ListContent for ExperienceContent {
    type Item = Role;

    fn items(&self) -> &[Role] {
        &self.items
    }
}

// =============================================================================
// EDUCATION
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Degree {
    #[serde(deserialize_with = "string_or_default")]
    pub degree: String,
    #[serde(deserialize_with = "string_or_default")]
    pub school: String,
    #[serde(deserialize_with = "non_blank")]
    pub period: Option<String>,
    #[serde(deserialize_with = "non_blank")]
    pub details: Option<String>,
    #[serde(deserialize_with = "non_blank")]
    pub logo: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationContent {
    #[serde(deserialize_with = "non_blank")]
    pub title: Option<String>,
    #[serde(deserialize_with = "list_or_map")]
    pub items: Vec<Degree>,
}

impl SectionContent for EducationContent {
    const PATH: SectionPath = SectionPath::Education;

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl ListContent for EducationContent {
    type Item = Degree;

    fn items(&self) -> &[Degree] {
        &self.items
    }
}

// =============================================================================
// SKILLS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    #[serde(deserialize_with = "string_or_default")]
    pub name: String,
    #[serde(deserialize_with = "non_blank")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "non_blank")]
    pub category: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsContent {
    #[serde(deserialize_with = "non_blank")]
    pub title: Option<String>,
    #[serde(deserialize_with = "list_or_map")]
    pub items: Vec<Skill>,
}

impl SectionContent for SkillsContent {
    const PATH: SectionPath = SectionPath::Skills;

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl ListContent for SkillsContent {
    type Item = Skill;

    fn items(&self) -> &[Skill] {
        &self.items
    }
}

// =============================================================================
// CONTACT
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactLink {
    #[serde(deserialize_with = "string_or_default")]
    pub label: String,
    #[serde(deserialize_with = "string_or_default")]
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactContent {
    #[serde(deserialize_with = "non_blank")]
    pub title: Option<String>,
    #[serde(deserialize_with = "non_blank")]
    pub message: Option<String>,
    #[serde(deserialize_with = "non_blank")]
    pub email: Option<String>,
    #[serde(deserialize_with = "non_blank")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "non_blank")]
    pub location: Option<String>,
    #[serde(deserialize_with = "list_or_map")]
    pub links: Vec<ContactLink>,
}

impl SectionContent for ContactContent {
    const PATH: SectionPath = SectionPath::Contact;

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

// =============================================================================
// SERDE HELPERS
// =============================================================================

/// Optional string that treats blank and non-string values as absent.
fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned))
}

/// Required text field: numbers and booleans keep their text form, any other
/// non-string value (including `null`) reads as empty.
fn string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

/// List stored either as an array or as an object keyed by index.
fn list_or_map<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(collect_entries(raw))
}

fn collect_entries<T: DeserializeOwned>(raw: Option<serde_json::Value>) -> Vec<T> {
    let entries = match raw {
        Some(serde_json::Value::Array(entries)) => entries,
        Some(serde_json::Value::Object(map)) => {
            let mut keyed = map.into_iter().collect::<Vec<_>>();
            keyed.sort_by(|(a, _), (b, _)| match (a.parse::<u64>(), b.parse::<u64>()) {
                (Ok(a), Ok(b)) => a.cmp(&b),
                (Ok(_), Err(_)) => std::cmp::Ordering::Less,
                (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
                (Err(_), Err(_)) => a.cmp(b),
            });
            keyed.into_iter().map(|(_, v)| v).collect()
        }
        _ => Vec::new(),
    };

    entries
        .into_iter()
        .filter(|entry| !entry.is_null())
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect()
}
