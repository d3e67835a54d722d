//! Section catalogue and visibility rules for resume layouts.
//!
//! Experience, education and skills are always shown, even when empty.
//! Projects, certifications and languages are shown only when the sequence is
//! non-empty AND its first entry has a non-empty primary field. Later entries
//! are not checked: a blank entry after a filled first one still renders.

use serde::Serialize;

use crate::models::resume::ResumeData;

const LINKEDIN_PROFILE_PREFIX: &str = "https://linkedin.com/in/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Experience,
    Projects,
    Skills,
    Education,
    Certifications,
    Languages,
}

impl Section {
    /// Heading printed above the section.
    pub fn title(self) -> &'static str {
        match self {
            Section::Experience => "Professional Experience",
            Section::Projects => "Key Projects",
            Section::Skills => "Skills",
            Section::Education => "Education",
            Section::Certifications => "Certifications",
            Section::Languages => "Languages",
        }
    }

    /// Stable identifier, used for the `data-section` hook and in API responses.
    pub fn key(self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Education => "education",
            Section::Certifications => "certifications",
            Section::Languages => "languages",
        }
    }

    pub fn is_visible(self, data: &ResumeData) -> bool {
        match self {
            Section::Experience | Section::Skills | Section::Education => true,
            Section::Projects => first_has_content(&data.projects, |p| &p.title),
            Section::Certifications => first_has_content(&data.certifications, |c| &c.name),
            Section::Languages => first_has_content(&data.languages, |l| &l.language),
        }
    }
}

/// Compact layout order: primary column top to bottom, then the sidebar.
pub const COMPACT_ORDER: [Section; 6] = [
    Section::Experience,
    Section::Projects,
    Section::Skills,
    Section::Education,
    Section::Certifications,
    Section::Languages,
];

pub fn visible_sections(data: &ResumeData) -> Vec<Section> {
    COMPACT_ORDER
        .into_iter()
        .filter(|s| s.is_visible(data))
        .collect()
}

fn first_has_content<T>(items: &[T], primary: impl Fn(&T) -> &String) -> bool {
    items.first().is_some_and(|item| !primary(item).is_empty())
}

/// Strips the first `https://linkedin.com/in/` prefix, leaving the profile handle.
/// URLs in any other form are returned unchanged.
pub fn linkedin_handle(url: &str) -> String {
    url.replacen(LINKEDIN_PROFILE_PREFIX, "", 1)
}
