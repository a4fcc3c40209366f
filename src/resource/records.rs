//! Typed records for the portfolio sections.
//!
//! Every field defaults when absent so a partially filled record from the
//! API still decodes. Unknown fields (including `_id`) are ignored.
//!
//! Text fields accept any JSON scalar: numbers and booleans keep their
//! textual form, `null` and structured values read as empty. A record the
//! server returned is therefore never dropped for a field's type.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::entity::Record;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct About {
    #[serde(
        default,
        deserialize_with = "scalar_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "scalar_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "scalar_or_empty")]
    pub role: String,
    #[serde(default, deserialize_with = "scalar_or_empty")]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(
        default,
        deserialize_with = "scalar_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "scalar_or_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "scalar_or_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "scalar_or_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "scalar_or_none")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "scalar_or_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Education {
    #[serde(
        default,
        deserialize_with = "scalar_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "scalar_or_empty")]
    pub school: String,
    #[serde(default, deserialize_with = "scalar_or_empty")]
    pub degree: String,
    #[serde(default, deserialize_with = "scalar_or_none")]
    pub from: Option<String>,
    #[serde(default, deserialize_with = "scalar_or_none")]
    pub to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(
        default,
        deserialize_with = "scalar_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "scalar_or_empty")]
    pub company: String,
    #[serde(default, deserialize_with = "scalar_or_empty")]
    pub role: String,
    #[serde(default, deserialize_with = "scalar_or_empty")]
    pub start_at: String,
    #[serde(default, deserialize_with = "scalar_or_empty")]
    pub end_at: String,
    #[serde(default, deserialize_with = "scalar_or_empty")]
    pub job: String,
}

/// A gallery entry: stored either as a bare URL or with a caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GalleryPhoto {
    Url(String),
    Captioned {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
}

impl GalleryPhoto {
    pub fn url(&self) -> &str {
        match self {
            GalleryPhoto::Url(url) | GalleryPhoto::Captioned { url, .. } => url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(
        default,
        deserialize_with = "scalar_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "scalar_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "scalar_or_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "scalar_or_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "scalar_or_none")]
    pub img_main: Option<String>,
    #[serde(default, deserialize_with = "gallery_or_empty")]
    pub img: Vec<GalleryPhoto>,
    #[serde(default, deserialize_with = "scalar_or_none")]
    pub task: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Skill {
    #[serde(
        default,
        deserialize_with = "scalar_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "scalar_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "scalar_or_none")]
    pub level: Option<String>,
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn scalar_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn scalar_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

/// Keeps the photos that parse; anything but an array is an empty gallery.
fn gallery_or_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<GalleryPhoto>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Array(photos) => Ok(photos
            .into_iter()
            .filter_map(|photo| serde_json::from_value(photo).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

fn non_empty(id: &Option<String>) -> Option<&str> {
    id.as_deref().filter(|id| !id.is_empty())
}

fn span(from: Option<&str>, to: Option<&str>) -> String {
    format!("{} - {}", from.unwrap_or(""), to.unwrap_or(""))
}

impl Record for About {
    fn id(&self) -> Option<&str> {
        non_empty(&self.id)
    }

    fn summary(&self) -> String {
        if self.role.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.role)
        }
    }
}

impl Record for Contact {
    fn id(&self) -> Option<&str> {
        non_empty(&self.id)
    }

    fn summary(&self) -> String {
        [&self.email, &self.phone, &self.address]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl Record for Education {
    fn id(&self) -> Option<&str> {
        non_empty(&self.id)
    }

    fn summary(&self) -> String {
        format!(
            "{}, {} ({})",
            self.school,
            self.degree,
            span(self.from.as_deref(), self.to.as_deref())
        )
    }
}

impl Record for Experience {
    fn id(&self) -> Option<&str> {
        non_empty(&self.id)
    }

    fn summary(&self) -> String {
        format!(
            "{} at {} ({})",
            self.role,
            self.company,
            span(Some(&self.start_at), Some(&self.end_at))
        )
    }
}

impl Record for Project {
    fn id(&self) -> Option<&str> {
        non_empty(&self.id)
    }

    fn summary(&self) -> String {
        match &self.url {
            Some(url) if !url.is_empty() => format!("{} <{}>", self.title, url),
            _ => self.title.clone(),
        }
    }
}

impl Record for Skill {
    fn id(&self) -> Option<&str> {
        non_empty(&self.id)
    }

    fn summary(&self) -> String {
        match &self.level {
            Some(level) if !level.is_empty() => format!("{} ({})", self.name, level),
            _ => self.name.clone(),
        }
    }
}
