// Typed portfolio content.
//
// Every record is built through a fallible constructor so that blank text,
// empty lists and malformed links are rejected before anything is rendered.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("{entity}: field `{field}` must not be blank")]
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },
    #[error("{entity}: list `{field}` must contain at least one non-blank entry")]
    EmptyList {
        entity: &'static str,
        field: &'static str,
    },
    #[error("{entity}: `{value}` is not an https:// or mailto: link")]
    InvalidLink { entity: &'static str, value: String },
}

/// Colour family used for dots, headings and tag chips of an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Cyan,
    Blue,
    Yellow,
    Red,
    Purple,
    Fuchsia,
    Green,
}

impl Accent {
    /// Suffix of the `accent-*` CSS class.
    pub fn css_name(self) -> &'static str {
        match self {
            Accent::Cyan => "cyan",
            Accent::Blue => "blue",
            Accent::Yellow => "yellow",
            Accent::Red => "red",
            Accent::Purple => "purple",
            Accent::Fuchsia => "fuchsia",
            Accent::Green => "green",
        }
    }
}

fn required(entity: &'static str, field: &'static str, value: &str) -> Result<String, ContentError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ContentError::EmptyField { entity, field });
    }
    Ok(trimmed.to_string())
}

fn required_list(
    entity: &'static str,
    field: &'static str,
    values: &[&str],
) -> Result<Vec<String>, ContentError> {
    if values.is_empty() {
        return Err(ContentError::EmptyList { entity, field });
    }
    values
        .iter()
        .map(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                Err(ContentError::EmptyList { entity, field })
            } else {
                Ok(trimmed.to_string())
            }
        })
        .collect()
}

fn link(entity: &'static str, field: &'static str, value: &str) -> Result<String, ContentError> {
    let value = required(entity, field, value)?;
    if value.starts_with("https://") || value.starts_with("mailto:") {
        Ok(value)
    } else {
        Err(ContentError::InvalidLink { entity, value })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub tagline: String,
    pub summary: Vec<String>,
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

impl Profile {
    pub fn new(
        first_name: &str,
        last_name: &str,
        tagline: &str,
        summary: &[&str],
        email: &str,
        linkedin: &str,
        github: &str,
    ) -> Result<Self, ContentError> {
        const E: &str = "profile";
        Ok(Self {
            first_name: required(E, "first_name", first_name)?,
            last_name: required(E, "last_name", last_name)?,
            tagline: required(E, "tagline", tagline)?,
            summary: required_list(E, "summary", summary)?,
            email: link(E, "email", email)?,
            linkedin: link(E, "linkedin", linkedin)?,
            github: link(E, "github", github)?,
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub graduation: String,
    pub location: String,
}

impl Education {
    pub fn new(
        school: &str,
        degree: &str,
        graduation: &str,
        location: &str,
    ) -> Result<Self, ContentError> {
        const E: &str = "education";
        Ok(Self {
            school: required(E, "school", school)?,
            degree: required(E, "degree", degree)?,
            graduation: required(E, "graduation", graduation)?,
            location: required(E, "location", location)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Specialization {
    pub title: String,
    pub summary: String,
    pub accent: Accent,
}

impl Specialization {
    pub fn new(title: &str, summary: &str, accent: Accent) -> Result<Self, ContentError> {
        const E: &str = "specialization";
        Ok(Self {
            title: required(E, "title", title)?,
            summary: required(E, "summary", summary)?,
            accent,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub location: String,
    pub achievements: Vec<String>,
    pub accent: Accent,
}

impl Experience {
    pub fn new(
        company: &str,
        role: &str,
        period: &str,
        location: &str,
        achievements: &[&str],
        accent: Accent,
    ) -> Result<Self, ContentError> {
        const E: &str = "experience";
        Ok(Self {
            company: required(E, "company", company)?,
            role: required(E, "role", role)?,
            period: required(E, "period", period)?,
            location: required(E, "location", location)?,
            achievements: required_list(E, "achievements", achievements)?,
            accent,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub highlights: Vec<String>,
    pub accent: Accent,
}

impl Project {
    pub fn new(
        title: &str,
        description: &str,
        tech: &[&str],
        highlights: &[&str],
        accent: Accent,
    ) -> Result<Self, ContentError> {
        const E: &str = "project";
        Ok(Self {
            title: required(E, "title", title)?,
            description: required(E, "description", description)?,
            tech: required_list(E, "tech", tech)?,
            highlights: required_list(E, "highlights", highlights)?,
            accent,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
    pub accent: Accent,
}

impl SkillGroup {
    pub fn new(category: &str, skills: &[&str], accent: Accent) -> Result<Self, ContentError> {
        const E: &str = "skill group";
        Ok(Self {
            category: required(E, "category", category)?,
            skills: required_list(E, "skills", skills)?,
            accent,
        })
    }
}

/// Everything the page renders.
#[derive(Clone, Debug, PartialEq)]
pub struct Portfolio {
    pub profile: Profile,
    pub education: Education,
    pub specializations: Vec<Specialization>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
}
