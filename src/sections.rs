//! Catalogue of the administrable portfolio sections.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One admin screen and the API collection behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Contact,
    Projects,
    Experience,
    Education,
    Skills,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown section '{0}' (expected one of: about, contact, project, experience, education, skill)")]
pub struct UnknownSection(pub String);

impl Section {
    /// Sidebar order.
    pub const ALL: [Section; 6] = [
        Section::About,
        Section::Contact,
        Section::Projects,
        Section::Experience,
        Section::Education,
        Section::Skills,
    ];

    /// Short route name.
    pub fn name(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Contact => "contact",
            Section::Projects => "project",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skill",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Contact => "Contact",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Skills => "Skills",
        }
    }

    /// Admin route path.
    pub fn path(self) -> String {
        format!("/admin/{}", self.name())
    }

    /// REST collection path segment. Does not always match the route name.
    pub fn endpoint(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Contact => "contact",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Education => "educations",
            Section::Skills => "skills",
        }
    }

    /// Sections holding at most one record.
    pub fn is_singleton(self) -> bool {
        matches!(self, Section::About | Section::Contact)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    /// Accepts the route name, the endpoint, or the label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| {
                wanted == section.name()
                    || wanted == section.endpoint()
                    || wanted == section.label().to_lowercase()
            })
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}
