//! Markup rendering: bind the loaded [`Resume`] into the fixed layout.
//!
//! The engine is handlebars with two registered helpers carrying the
//! normaliser functions into the template:
//!
//! * `links` — [`normalize::html_field`]: escape raw text, then convert
//!   `[label](target)` patterns into anchors.
//! * `dates` — escape, then hyphen → en-dash. The template applies this
//!   helper to role dates, award dates and graduation dates only; no other
//!   field goes near it.
//!
//! Both helpers return finished markup, so the template invokes them with
//! triple-stash and handlebars' own escaping only applies to plain scalars
//! like `{{name}}`.

use crate::error::ResumeError;
use crate::model::Resume;
use crate::pipeline::normalize::{escape_html, html_field, normalize_date_separators};
use crate::template::RESUME_TEMPLATE;
use handlebars::{handlebars_helper, Handlebars};

handlebars_helper!(links: |s: String| html_field(&s));
handlebars_helper!(dates: |s: String| escape_html(&normalize_date_separators(&s)));

/// Build the template engine with the layout and helpers registered.
///
/// Registration can only fail if the built-in template is malformed, which
/// is a programming error, so that case maps to `Render`.
pub fn engine() -> Result<Handlebars<'static>, ResumeError> {
    let mut hb = Handlebars::new();
    hb.register_helper("links", Box::new(links));
    hb.register_helper("dates", Box::new(dates));
    hb.register_template_string("resume", RESUME_TEMPLATE)
        .map_err(|e| ResumeError::Render {
            detail: format!("layout template failed to compile: {e}"),
        })?;
    Ok(hb)
}

/// Render the complete markup document for a resume.
///
/// Output is byte-for-byte what gets written as the standalone HTML
/// artifact; identical input yields identical output.
pub fn render_html(resume: &Resume) -> Result<String, ResumeError> {
    let hb = engine()?;
    Ok(hb.render("resume", resume)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Award, Education, Experience, Project, Role, SkillGroup};

    fn sample_resume() -> Resume {
        Resume {
            name: "Grace Hopper".into(),
            location: "Arlington, VA".into(),
            email: "[grace@example.org](mailto:grace@example.org)".into(),
            website: "[example.org](https://example.org)".into(),
            skills: vec![SkillGroup {
                category: "Languages".into(),
                items: vec!["COBOL".into(), "[FLOW-MATIC](https://flowmatic.dev)".into()],
            }],
            experience: vec![Experience {
                company: "Eckert-Mauchly".into(),
                location: "Philadelphia, PA".into(),
                roles: vec![Role {
                    title: "Senior Mathematician".into(),
                    dates: "1949-1950".into(),
                    responsibilities: vec!["Wrote the A-0 compiler".into()],
                }],
            }],
            awards: vec![Award {
                name: "National Medal of Technology".into(),
                date: "1991".into(),
                organization: "USPTO".into(),
                team: None,
                description: None,
            }],
            education: vec![Education {
                degree: "PhD Mathematics".into(),
                institution: "Yale".into(),
                graduation: "1930-1934".into(),
                gpa: None,
                coursework: None,
            }],
            projects: vec![Project {
                name: "UNIVAC I".into(),
                url: "[archive](https://archive.example)".into(),
                technologies: vec!["Mercury delay lines".into()],
                description: "First commercial computer in the US".into(),
            }],
        }
    }

    #[test]
    fn renders_complete_document() {
        let html = render_html(&sample_resume()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Hopper"));
        assert!(html.contains(r#"<a href="https://flowmatic.dev">FLOW-MATIC</a>"#));
    }

    #[test]
    fn header_name_goes_through_link_conversion() {
        let mut r = sample_resume();
        r.name = "[Grace Hopper](https://gracehopper.example)".into();
        let html = render_html(&r).unwrap();
        assert!(html
            .contains(r#"<h1><a href="https://gracehopper.example">Grace Hopper</a></h1>"#));
    }

    #[test]
    fn role_dates_get_en_dash_but_company_hyphen_survives() {
        let html = render_html(&sample_resume()).unwrap();
        assert!(html.contains("1949\u{2013}1950"));
        assert!(html.contains("Eckert-Mauchly"), "company hyphen must survive");
    }

    #[test]
    fn graduation_dates_get_en_dash() {
        let html = render_html(&sample_resume()).unwrap();
        assert!(html.contains("1930\u{2013}1934"));
    }

    #[test]
    fn absent_gpa_and_coursework_produce_no_fragment() {
        let html = render_html(&sample_resume()).unwrap();
        assert!(!html.contains("Coursework"));
        // The gpa separator must not dangle after the institution.
        assert!(!html.contains("Yale &bull;"));
    }

    #[test]
    fn empty_skill_items_render_label_without_trailing_comma() {
        let mut r = sample_resume();
        r.skills = vec![SkillGroup {
            category: "Tools".into(),
            items: vec![],
        }];
        let html = render_html(&r).unwrap();
        assert!(html.contains("<strong>Tools:</strong>"));
        assert!(!html.contains("Tools:</strong> ,"));
    }

    #[test]
    fn comma_join_has_no_trailing_separator() {
        let html = render_html(&sample_resume()).unwrap();
        let skills_line = html
            .lines()
            .find(|l| l.contains("Languages"))
            .expect("skills line");
        assert!(skills_line.contains("COBOL, "));
        assert!(!skills_line.trim_end().ends_with(','));
    }

    #[test]
    fn no_awards_section_when_list_empty() {
        let mut r = sample_resume();
        r.awards.clear();
        let html = render_html(&r).unwrap();
        assert!(!html.contains("Awards"));
    }

    #[test]
    fn raw_scalars_are_escaped_and_anchors_are_not_double_escaped() {
        let mut r = sample_resume();
        r.name = "Smith & Jones".into();
        r.experience[0].company = "Tools <R&D>".into();
        let html = render_html(&r).unwrap();
        assert!(html.contains("Smith &amp; Jones"));
        assert!(html.contains("Tools &lt;R&amp;D&gt;"));
        // Helper-generated anchors pass through the triple-stash untouched.
        assert!(html.contains(r#"<a href="https://example.org">example.org</a>"#));
        assert!(!html.contains("&lt;a href="));
    }

    #[test]
    fn rendering_is_deterministic() {
        let r = sample_resume();
        assert_eq!(render_html(&r).unwrap(), render_html(&r).unwrap());
    }
}
