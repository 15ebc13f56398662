//! Read-only preview of a submitted resume.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeData;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewExperience {
    pub company: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    /// `"{title} at {company}"`
    pub heading: String,
    /// `"{startDate} - {endDate}"`
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumePreview {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
    pub experience: Vec<PreviewExperience>,
    pub education: String,
}

/// Builds the display form of a snapshot. Values are carried through untouched.
pub fn render_preview(snapshot: &ResumeData) -> ResumePreview {
    ResumePreview {
        name: snapshot.name.clone(),
        email: snapshot.email.clone(),
        phone: snapshot.phone.clone(),
        skills: snapshot.skills.clone(),
        experience: snapshot
            .experience
            .iter()
            .map(|job| PreviewExperience {
                company: job.company.clone(),
                title: job.title.clone(),
                start_date: job.start_date.clone(),
                end_date: job.end_date.clone(),
                heading: job.heading(),
                period: job.period(),
                description: job.description.clone(),
            })
            .collect(),
        education: snapshot.education.clone(),
    }
}

impl fmt::Display for ResumePreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resume Preview")?;
        writeln!(f)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Email: {}", self.email)?;
        writeln!(f, "Phone: {}", self.phone)?;
        writeln!(f)?;
        writeln!(f, "Skills")?;
        writeln!(f, "{}", self.skills)?;
        writeln!(f)?;
        writeln!(f, "Experience")?;
        for job in &self.experience {
            writeln!(f, "{}", job.heading)?;
            writeln!(f, "{}", job.period)?;
            writeln!(f, "{}", job.description)?;
        }
        writeln!(f)?;
        writeln!(f, "Education")?;
        writeln!(f, "{}", self.education)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ExperienceEntry;

    fn make_snapshot() -> ResumeData {
        ResumeData {
            name: "Ana Lee".to_string(),
            email: "a@x.com".to_string(),
            phone: "555".to_string(),
            skills: "Go".to_string(),
            experience: vec![
                ExperienceEntry {
                    company: "Acme".to_string(),
                    title: "Eng".to_string(),
                    start_date: "2020-01-01".to_string(),
                    end_date: "2022-01-01".to_string(),
                    description: "Built things".to_string(),
                },
                ExperienceEntry {
                    company: "Globex".to_string(),
                    title: "Lead".to_string(),
                    start_date: "2022-02-01".to_string(),
                    end_date: "".to_string(),
                    description: "Led  things ".to_string(),
                },
            ],
            education: "BS CS".to_string(),
        }
    }

    #[test]
    fn test_preview_keeps_values_and_order() {
        let preview = render_preview(&make_snapshot());
        assert_eq!(preview.name, "Ana Lee");
        assert_eq!(preview.email, "a@x.com");
        assert_eq!(preview.phone, "555");
        assert_eq!(preview.skills, "Go");
        assert_eq!(preview.education, "BS CS");
        assert_eq!(preview.experience.len(), 2);
        assert_eq!(preview.experience[0].heading, "Eng at Acme");
        assert_eq!(preview.experience[0].period, "2020-01-01 - 2022-01-01");
        assert_eq!(preview.experience[1].heading, "Lead at Globex");
        assert_eq!(preview.experience[1].period, "2022-02-01 - ");
        // whitespace is not normalised
        assert_eq!(preview.experience[1].description, "Led  things ");
    }

    #[test]
    fn test_preview_carries_exact_experience_fields() {
        let mut snapshot = make_snapshot();
        snapshot.experience[0].company = " at Acme ".to_string();
        snapshot.experience[0].start_date = "2020 - 01".to_string();
        let preview = render_preview(&snapshot);
        let job = &preview.experience[0];
        assert_eq!(job.company, " at Acme ");
        assert_eq!(job.title, "Eng");
        assert_eq!(job.start_date, "2020 - 01");
        assert_eq!(job.end_date, "2022-01-01");
        assert_eq!(job.description, "Built things");

        let json = serde_json::to_value(&preview).unwrap();
        assert_eq!(json["experience"][0]["startDate"], "2020 - 01");
    }

    #[test]
    fn test_preview_empty_experience() {
        let snapshot = ResumeData {
            experience: vec![],
            ..Default::default()
        };
        let preview = render_preview(&snapshot);
        assert!(preview.experience.is_empty());
        assert!(preview.to_string().contains("Experience\n\nEducation"));
    }

    #[test]
    fn test_display_lists_entries_in_order() {
        let text = render_preview(&make_snapshot()).to_string();
        let first = text.find("Eng at Acme").unwrap();
        let second = text.find("Lead at Globex").unwrap();
        assert!(first < second);
        assert!(text.contains("Name: Ana Lee"));
        assert!(text.contains("Built things"));
    }
}
