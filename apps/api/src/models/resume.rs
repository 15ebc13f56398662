use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::form::FormError;

/// One job-history record. Every field is free-form text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl ExperienceEntry {
    #[cfg(test)]
    pub fn get(&self, field: ExperienceField) -> &str {
        match field {
            ExperienceField::Company => &self.company,
            ExperienceField::Title => &self.title,
            ExperienceField::StartDate => &self.start_date,
            ExperienceField::EndDate => &self.end_date,
            ExperienceField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: ExperienceField, value: String) {
        let slot = match field {
            ExperienceField::Company => &mut self.company,
            ExperienceField::Title => &mut self.title,
            ExperienceField::StartDate => &mut self.start_date,
            ExperienceField::EndDate => &mut self.end_date,
            ExperienceField::Description => &mut self.description,
        };
        *slot = value;
    }

    /// `"{title} at {company}"`, the heading used by the preview and both exports.
    pub fn heading(&self) -> String {
        format!("{} at {}", self.title, self.company)
    }

    /// `"{start} - {end}"`.
    pub fn period(&self) -> String {
        format!("{} - {}", self.start_date, self.end_date)
    }
}

/// The full resume. `experience` is kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: String,
}

impl Default for ResumeData {
    /// All scalars empty, with exactly one empty experience entry.
    fn default() -> Self {
        ResumeData {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            skills: String::new(),
            experience: vec![ExperienceEntry::default()],
            education: String::new(),
        }
    }
}

impl ResumeData {
    #[cfg(test)]
    pub fn get(&self, field: ResumeField) -> &str {
        match field {
            ResumeField::Name => &self.name,
            ResumeField::Email => &self.email,
            ResumeField::Phone => &self.phone,
            ResumeField::Skills => &self.skills,
            ResumeField::Education => &self.education,
        }
    }

    pub fn set(&mut self, field: ResumeField, value: String) {
        let slot = match field {
            ResumeField::Name => &mut self.name,
            ResumeField::Email => &mut self.email,
            ResumeField::Phone => &mut self.phone,
            ResumeField::Skills => &mut self.skills,
            ResumeField::Education => &mut self.education,
        };
        *slot = value;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field selectors
// ────────────────────────────────────────────────────────────────────────────

/// Top-level scalar fields of `ResumeData`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResumeField {
    Name,
    Email,
    Phone,
    Skills,
    Education,
}

impl ResumeField {
    pub const ALL: [ResumeField; 5] = [
        ResumeField::Name,
        ResumeField::Email,
        ResumeField::Phone,
        ResumeField::Skills,
        ResumeField::Education,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResumeField::Name => "name",
            ResumeField::Email => "email",
            ResumeField::Phone => "phone",
            ResumeField::Skills => "skills",
            ResumeField::Education => "education",
        }
    }
}

impl FromStr for ResumeField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResumeField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for ResumeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields of a single `ExperienceEntry`, using the wire names the browser sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    Company,
    Title,
    StartDate,
    EndDate,
    Description,
}

impl ExperienceField {
    pub const ALL: [ExperienceField; 5] = [
        ExperienceField::Company,
        ExperienceField::Title,
        ExperienceField::StartDate,
        ExperienceField::EndDate,
        ExperienceField::Description,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceField::Company => "company",
            ExperienceField::Title => "title",
            ExperienceField::StartDate => "startDate",
            ExperienceField::EndDate => "endDate",
            ExperienceField::Description => "description",
        }
    }
}

impl FromStr for ExperienceField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExperienceField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for ExperienceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
