//! Wire types for the candidate profile response.

use serde::{Deserialize, Serialize};

/// Response body of `POST /api/v1/resumes/parse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    /// Narrative paragraph about the candidate. Always present; on LLM
    /// failure it explains that no detailed summary could be generated.
    pub summary: String,
    pub extracted_info: ExtractedInfo,
    /// Lowercased extension of the uploaded file, echoed back (e.g. "pdf").
    pub file_type: String,
    /// Set for OCR-processed uploads, `null` otherwise.
    pub message: Option<String>,
}

/// Structured candidate data. Scalar fields are `null` when the resume does
/// not state them; lists are empty rather than `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub description: Option<String>,
    pub company: Option<String>,
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub description: Option<String>,
    pub degree: Degree,
    pub institution: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Closed set of degree levels. Anything the model returns outside the set
/// collapses to `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degree {
    Bachelor,
    HighSchool,
    ElementarySchool,
    Master,
    Technical,
    Doctorate,
    Postgraduate,
    Certificate,
    OpenCourse,
    #[default]
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_deserializes_known_values() {
        let degree: Degree = serde_json::from_str(r#""bachelor""#).unwrap();
        assert_eq!(degree, Degree::Bachelor);
        let degree: Degree = serde_json::from_str(r#""high_school""#).unwrap();
        assert_eq!(degree, Degree::HighSchool);
        let degree: Degree = serde_json::from_str(r#""open_course""#).unwrap();
        assert_eq!(degree, Degree::OpenCourse);
    }

    #[test]
    fn test_degree_unknown_value_collapses_to_other() {
        let degree: Degree = serde_json::from_str(r#""phd-ish""#).unwrap();
        assert_eq!(degree, Degree::Other);
        let degree: Degree = serde_json::from_str(r#""Bacharelado""#).unwrap();
        assert_eq!(degree, Degree::Other);
    }

    #[test]
    fn test_degree_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Degree::HighSchool).unwrap(),
            r#""high_school""#
        );
        assert_eq!(serde_json::to_string(&Degree::Other).unwrap(), r#""other""#);
    }

    #[test]
    fn test_extracted_info_defaults_missing_fields() {
        let info: ExtractedInfo = serde_json::from_str(r#"{"name": "Ana Souza"}"#).unwrap();
        assert_eq!(info.name.as_deref(), Some("Ana Souza"));
        assert_eq!(info.email, None);
        assert!(info.experience.is_empty());
        assert!(info.skills.is_empty());
    }

    #[test]
    fn test_experience_entry_defaults_is_current_false() {
        let entry: ExperienceEntry =
            serde_json::from_str(r#"{"company": "Acme", "title": "Engineer"}"#).unwrap();
        assert!(!entry.is_current);
        assert_eq!(entry.end_date, None);
    }

    #[test]
    fn test_candidate_profile_serializes_null_message() {
        let profile = CandidateProfile {
            summary: "A candidate.".to_string(),
            extracted_info: ExtractedInfo::default(),
            file_type: "pdf".to_string(),
            message: None,
        };

        let value = serde_json::to_value(&profile).unwrap();
        assert!(value["message"].is_null());
        assert_eq!(value["file_type"], "pdf");
        assert!(value["extracted_info"]["skills"].is_array());
    }
}
