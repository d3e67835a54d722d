use serde::{Deserialize, Deserializer, Serialize};

/// A complete resume record as owned by the host application's resume context.
///
/// Every field defaults when missing or `null` on the wire: required strings
/// become `""` and sequences become empty, so a partially filled record still renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    #[serde(deserialize_with = "null_as_default")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<SkillEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub languages: Vec<LanguageEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<CertificationEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub summary: Option<String>,
}

impl PersonalInfo {
    /// "First Last", as shown in the page header.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    pub field_of_study: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub link: Option<String>,
    pub technologies: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub issuer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
}

/// Decodes `null` as the type's default, the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Returns the value of an optional text field only when it has something to show.
///
/// `Some("")` counts as absent: the host form clears fields to empty strings
/// rather than removing them.
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_camel_case_record() {
        let json = r#"{
            "personalInfo": {
                "firstName": "Jane",
                "lastName": "Doe",
                "title": "Engineer",
                "email": "jane@example.com"
            },
            "education": [{
                "institution": "MIT",
                "degree": "BS",
                "fieldOfStudy": "CS",
                "startDate": "2010",
                "endDate": "2014"
            }],
            "experience": [],
            "skills": [{ "name": "Rust" }],
            "projects": [],
            "languages": [],
            "certifications": []
        }"#;

        let data: ResumeData = serde_json::from_str(json).unwrap();
        assert_eq!(data.personal_info.first_name, "Jane");
        assert_eq!(data.personal_info.email.as_deref(), Some("jane@example.com"));
        assert!(data.personal_info.phone.is_none());
        assert_eq!(data.education[0].field_of_study.as_deref(), Some("CS"));
        assert_eq!(data.skills[0].name, "Rust");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let data: ResumeData =
            serde_json::from_str(r#"{ "experience": [{ "company": "Acme" }] }"#).unwrap();
        assert_eq!(data.personal_info.first_name, "");
        assert_eq!(data.experience[0].position, "");
        assert_eq!(data.experience[0].company, "Acme");
        assert!(data.projects.is_empty());
    }

    #[test]
    fn test_null_required_fields_default_to_empty() {
        let data: ResumeData = serde_json::from_str(
            r#"{
                "personalInfo": { "firstName": "John", "lastName": "Doe", "title": null },
                "experience": [{ "position": null, "company": "Acme", "description": null }],
                "skills": null,
                "languages": [{ "language": "English", "proficiency": null }]
            }"#,
        )
        .unwrap();
        assert_eq!(data.personal_info.title, "");
        assert_eq!(data.personal_info.first_name, "John");
        assert_eq!(data.experience[0].position, "");
        assert!(data.experience[0].description.is_none());
        assert!(data.skills.is_empty());
        assert_eq!(data.languages[0].proficiency, "");
    }

    #[test]
    fn test_null_personal_info_defaults() {
        let data: ResumeData =
            serde_json::from_str(r#"{ "personalInfo": null, "education": null }"#).unwrap();
        assert_eq!(data.personal_info, PersonalInfo::default());
        assert!(data.education.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let data: ResumeData = serde_json::from_str(
            r#"{ "personalInfo": { "firstName": "A", "github": "https://github.com/a" } }"#,
        )
        .unwrap();
        assert_eq!(data.personal_info.first_name, "A");
    }

    #[test]
    fn test_present_filters_empty_strings() {
        assert_eq!(present(&None), None);
        assert_eq!(present(&Some(String::new())), None);
        assert_eq!(present(&Some("x".to_string())), Some("x"));
    }

    #[test]
    fn test_full_name_joins_with_space() {
        let info = PersonalInfo {
            first_name: "John".into(),
            last_name: "Doe".into(),
            ..Default::default()
        };
        assert_eq!(info.full_name(), "John Doe");
    }
}
