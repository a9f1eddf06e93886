//! The resume data model.
//!
//! One root entity, [`Resume`], deserialised from the YAML source document
//! once per run and never mutated afterwards. Every sequence keeps its
//! source order all the way into the output — resume sections are
//! author-ordered, not sorted.
//!
//! Top-level sections carry `#[serde(default)]` so a resume without, say, an
//! `awards:` key deserialises to an empty list and the renderer simply emits
//! zero iterations for that region. Optional leaf fields (`gpa`, `team`, …)
//! stay `Option` so the templates can suppress their markup entirely.

use serde::{Deserialize, Serialize};

/// A complete resume, assembled once from the source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub name: String,
    pub location: String,
    pub email: String,
    pub website: String,

    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// One skills row: a category label and its comma-joined items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    /// May legitimately be empty — the category label still renders.
    #[serde(default)]
    pub items: Vec<String>,
}

/// One employer, holding one or more roles in source order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// A role held at an employer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub title: String,
    /// Date range, e.g. `"2020-2022"`. The renderer applies en-dash
    /// normalisation to this field and to no other field of the role.
    pub dates: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Award {
    pub name: String,
    pub date: String,
    pub organization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub graduation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coursework: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "\
name: Ada Lovelace
location: London
email: ada@example.org
website: example.org
";

    #[test]
    fn minimal_resume_deserialises_with_empty_sections() {
        let r: Resume = serde_yaml::from_str(MINIMAL).unwrap();
        assert_eq!(r.name, "Ada Lovelace");
        assert!(r.skills.is_empty());
        assert!(r.experience.is_empty());
        assert!(r.awards.is_empty());
        assert!(r.education.is_empty());
        assert!(r.projects.is_empty());
    }

    #[test]
    fn skill_group_items_default_to_empty() {
        let g: SkillGroup = serde_yaml::from_str("category: Languages").unwrap();
        assert_eq!(g.category, "Languages");
        assert!(g.items.is_empty());
    }

    #[test]
    fn optional_education_fields_stay_absent() {
        let e: Education = serde_yaml::from_str(
            "degree: BSc Mathematics\ninstitution: UCL\ngraduation: \"2019\"",
        )
        .unwrap();
        assert!(e.gpa.is_none());
        assert!(e.coursework.is_none());
    }

    #[test]
    fn absent_optionals_are_not_serialised() {
        let a = Award {
            name: "Best Paper".into(),
            date: "2021".into(),
            organization: "ACM".into(),
            team: None,
            description: None,
        };
        let json = serde_json::to_value(&a).unwrap();
        assert!(json.get("team").is_none());
        assert!(json.get("description").is_none());
    }

    #[test]
    fn sequences_preserve_source_order() {
        let yaml = "\
name: A
location: B
email: C
website: D
skills:
  - category: Systems
  - category: Web
  - category: Data
";
        let r: Resume = serde_yaml::from_str(yaml).unwrap();
        let cats: Vec<_> = r.skills.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(cats, ["Systems", "Web", "Data"]);
    }

    #[test]
    fn missing_scalar_is_a_parse_error() {
        // `name` omitted — structural parsing must reject, not render blank.
        let yaml = "location: B\nemail: C\nwebsite: D\n";
        assert!(serde_yaml::from_str::<Resume>(yaml).is_err());
    }
}
