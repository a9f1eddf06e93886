//! Pagination: produce the PDF artifact through a fixed-geometry layout.
//!
//! The resume content is flattened into styled text lines (same normaliser
//! functions as the markup renderer: link markup rewritten so the target
//! survives in the printed text, date fields en-dashed), word-wrapped
//! against the content width, then cut into pages. Page size and margins come from [`RenderConfig`] —
//! configuration constants, never data-driven.
//!
//! Text is set with the builtin Helvetica faces, so the crate ships no font
//! asset. Line width is estimated from an average glyph width; resumes are
//! short text runs and a conservative estimate wraps early rather than
//! overflowing the margin.

use crate::config::RenderConfig;
use crate::error::ResumeError;
use crate::model::Resume;
use crate::pipeline::normalize::{link_with_target, normalize_date_separators};
use printpdf::text::TextItem;
use printpdf::{BuiltinFont, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Pt, Rgb, TextMatrix};

/// Average Helvetica glyph width as a fraction of the font size.
const CHAR_WIDTH_EM: f32 = 0.55;
/// Baseline-to-baseline distance as a fraction of the font size.
const LINE_HEIGHT_EM: f32 = 1.4;
/// Continuation indent for wrapped bullet lines, in points.
const BULLET_HANG_PT: f32 = 10.0;

/// The paginated artifact plus its page count.
pub struct PdfOutput {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Face {
    Regular,
    Bold,
    Oblique,
}

impl Face {
    fn builtin(self) -> BuiltinFont {
        match self {
            Face::Regular => BuiltinFont::Helvetica,
            Face::Bold => BuiltinFont::HelveticaBold,
            Face::Oblique => BuiltinFont::HelveticaOblique,
        }
    }
}

/// One laid-out line: text at an absolute x offset from the left margin.
#[derive(Debug)]
struct Line {
    text: String,
    face: Face,
    size: f32,
    indent: f32,
    /// Extra vertical space after this line, in points.
    gap_after: f32,
}

/// Render the paginated document for a resume.
pub fn render_pdf(resume: &Resume, config: &RenderConfig) -> Result<PdfOutput, ResumeError> {
    let lines = flatten(resume, config);
    let pages = paginate(&lines, config);
    if pages.is_empty() {
        return Err(ResumeError::Render {
            detail: "pagination produced no pages".into(),
        });
    }
    emit(&pages, config)
}

// ── Flattening ───────────────────────────────────────────────────────────

/// Flatten the resume into styled lines, already wrapped to the content
/// width. Section order matches the markup layout exactly.
fn flatten(resume: &Resume, config: &RenderConfig) -> Vec<Line> {
    let body = config.font_size_pt;
    let width = config.content_width_pt();
    let mut out = LineSink {
        lines: Vec::new(),
        width,
    };

    // Header: name centered, contact line centered below it.
    out.centered(&link_with_target(&resume.name), Face::Bold, body * 1.6, 2.0);
    let contact = format!(
        "{} — {} — {}",
        link_with_target(&resume.location),
        link_with_target(&resume.email),
        link_with_target(&resume.website)
    );
    out.centered(&contact, Face::Regular, body, 8.0);

    out.section_title("SKILLS", body);
    for group in &resume.skills {
        let joined = group
            .items
            .iter()
            .map(|i| link_with_target(i))
            .collect::<Vec<_>>()
            .join(", ");
        let text = if joined.is_empty() {
            format!("• {}:", link_with_target(&group.category))
        } else {
            format!("• {}: {}", link_with_target(&group.category), joined)
        };
        out.bullet(&text, Face::Regular, body, 0.0, 2.0);
    }
    out.gap(6.0);

    out.section_title("EXPERIENCE", body);
    for job in &resume.experience {
        for role in &job.roles {
            out.split_line(
                &link_with_target(&role.title),
                &normalize_date_separators(&role.dates),
                Face::Bold,
                Face::Oblique,
                body,
            );
            out.wrapped(
                &format!("{} • {}", link_with_target(&job.company), job.location),
                Face::Regular,
                body,
                0.0,
                1.0,
            );
            for resp in &role.responsibilities {
                out.bullet(
                    &format!("– {}", link_with_target(resp)),
                    Face::Regular,
                    body,
                    8.0,
                    1.0,
                );
            }
            out.gap(4.0);
        }
    }
    out.gap(2.0);

    if !resume.awards.is_empty() {
        out.section_title("AWARDS", body);
        for award in &resume.awards {
            out.split_line(
                &link_with_target(&award.name),
                &normalize_date_separators(&award.date),
                Face::Bold,
                Face::Oblique,
                body,
            );
            let mut org = link_with_target(&award.organization);
            if let Some(ref team) = award.team {
                org = format!("{org} • {team}");
            }
            out.wrapped(&org, Face::Regular, body, 0.0, 1.0);
            if let Some(ref description) = award.description {
                out.wrapped(&link_with_target(description), Face::Regular, body, 8.0, 1.0);
            }
            out.gap(4.0);
        }
        out.gap(2.0);
    }

    out.section_title("EDUCATION", body);
    for edu in &resume.education {
        out.split_line(
            &link_with_target(&edu.degree),
            &normalize_date_separators(&edu.graduation),
            Face::Bold,
            Face::Oblique,
            body,
        );
        let mut inst = link_with_target(&edu.institution);
        if let Some(ref gpa) = edu.gpa {
            inst = format!("{inst} • {gpa}");
        }
        out.wrapped(&inst, Face::Regular, body, 0.0, 1.0);
        if let Some(ref coursework) = edu.coursework {
            let joined = coursework
                .iter()
                .map(|c| link_with_target(c))
                .collect::<Vec<_>>()
                .join(", ");
            out.bullet(
                &format!("• Coursework: {joined}"),
                Face::Regular,
                body,
                8.0,
                1.0,
            );
        }
        out.gap(4.0);
    }
    out.gap(2.0);

    out.section_title("SELECTED WORK", body);
    for project in &resume.projects {
        out.split_line(
            &link_with_target(&project.name),
            &link_with_target(&project.url),
            Face::Bold,
            Face::Oblique,
            body,
        );
        if !project.technologies.is_empty() {
            let joined = project
                .technologies
                .iter()
                .map(|t| link_with_target(t))
                .collect::<Vec<_>>()
                .join(", ");
            out.wrapped(&joined, Face::Oblique, body, 0.0, 1.0);
        }
        out.bullet(
            &format!("– {}", link_with_target(&project.description)),
            Face::Regular,
            body,
            8.0,
            1.0,
        );
        out.gap(4.0);
    }

    out.lines
}

struct LineSink {
    lines: Vec<Line>,
    width: f32,
}

impl LineSink {
    fn push(&mut self, text: String, face: Face, size: f32, indent: f32, gap_after: f32) {
        self.lines.push(Line {
            text,
            face,
            size,
            indent,
            gap_after,
        });
    }

    /// A single line centered within the content width.
    fn centered(&mut self, text: &str, face: Face, size: f32, gap_after: f32) {
        let est = estimate_width(text, size);
        let indent = ((self.width - est) / 2.0).max(0.0);
        self.push(text.to_string(), face, size, indent, gap_after);
    }

    /// Bold uppercase section heading with breathing room above the entries.
    fn section_title(&mut self, title: &str, body: f32) {
        self.push(title.to_string(), Face::Bold, body * 1.1, 0.0, 4.0);
    }

    /// Left text and right-aligned text on one visual line.
    ///
    /// Emitted as a single line when both halves fit, otherwise the right
    /// half drops onto its own line rather than overprinting.
    fn split_line(&mut self, left: &str, right: &str, left_face: Face, right_face: Face, size: f32) {
        let combined = estimate_width(left, size) + estimate_width(right, size);
        if combined + 12.0 <= self.width {
            let pad_pt = self.width - combined;
            let pad_chars = (pad_pt / (size * CHAR_WIDTH_EM)).floor() as usize;
            let mut text = String::with_capacity(left.len() + right.len() + pad_chars);
            text.push_str(left);
            text.extend(std::iter::repeat(' ').take(pad_chars.max(2)));
            text.push_str(right);
            self.push(text, left_face, size, 0.0, 1.0);
        } else {
            self.wrapped(left, left_face, size, 0.0, 0.0);
            let est = estimate_width(right, size);
            let indent = (self.width - est).max(0.0);
            self.push(right.to_string(), right_face, size, indent, 1.0);
        }
    }

    /// Wrapped paragraph at a fixed indent.
    fn wrapped(&mut self, text: &str, face: Face, size: f32, indent: f32, gap_after: f32) {
        let max = max_chars(self.width - indent, size);
        let wrapped = wrap_text(text, max);
        let last = wrapped.len().saturating_sub(1);
        for (i, line) in wrapped.into_iter().enumerate() {
            let gap = if i == last { gap_after } else { 0.0 };
            self.push(line, face, size, indent, gap);
        }
    }

    /// Wrapped line with a hanging indent for continuations.
    fn bullet(&mut self, text: &str, face: Face, size: f32, indent: f32, gap_after: f32) {
        let max = max_chars(self.width - indent - BULLET_HANG_PT, size);
        let wrapped = wrap_text(text, max);
        let last = wrapped.len().saturating_sub(1);
        for (i, line) in wrapped.into_iter().enumerate() {
            let extra = if i == 0 { 0.0 } else { BULLET_HANG_PT };
            let gap = if i == last { gap_after } else { 0.0 };
            self.push(line, face, size, indent + extra, gap);
        }
    }

    fn gap(&mut self, pts: f32) {
        if let Some(last) = self.lines.last_mut() {
            last.gap_after += pts;
        }
    }
}

fn estimate_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * CHAR_WIDTH_EM
}

fn max_chars(width_pt: f32, size: f32) -> usize {
    ((width_pt / (size * CHAR_WIDTH_EM)).floor() as usize).max(8)
}

/// Greedy word wrap. Words longer than the line are hard-split so a single
/// unbroken token can never push past the margin.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len == 0 {
            if word_len <= max_chars {
                current.push_str(word);
                current_len = word_len;
            } else {
                hard_split(word, max_chars, &mut lines, &mut current, &mut current_len);
            }
        } else if current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
            if word_len <= max_chars {
                current.push_str(word);
                current_len = word_len;
            } else {
                hard_split(word, max_chars, &mut lines, &mut current, &mut current_len);
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn hard_split(
    word: &str,
    max_chars: usize,
    lines: &mut Vec<String>,
    current: &mut String,
    current_len: &mut usize,
) {
    let chars: Vec<char> = word.chars().collect();
    for chunk in chars.chunks(max_chars) {
        let piece: String = chunk.iter().collect();
        if chunk.len() == max_chars {
            lines.push(piece);
        } else {
            *current_len = chunk.len();
            current.push_str(&piece);
        }
    }
}

// ── Pagination ───────────────────────────────────────────────────────────

/// Cut the line list into pages of positioned lines `(line, y_from_top)`.
fn paginate<'a>(lines: &'a [Line], config: &RenderConfig) -> Vec<Vec<(&'a Line, f32)>> {
    let usable_bottom = config.page_height_pt - config.margin_vertical_pt;
    let mut pages: Vec<Vec<(&Line, f32)>> = vec![Vec::new()];
    let mut y = config.margin_vertical_pt;

    for line in lines {
        let advance = line.size * LINE_HEIGHT_EM;
        if y + advance > usable_bottom && !pages.last().unwrap().is_empty() {
            pages.push(Vec::new());
            y = config.margin_vertical_pt;
        }
        y += advance;
        pages.last_mut().unwrap().push((line, y));
        y += line.gap_after;
    }

    if pages.last().map(|p| p.is_empty()).unwrap_or(false) && pages.len() > 1 {
        pages.pop();
    }
    pages
}

// ── Emission ─────────────────────────────────────────────────────────────

fn pt_to_mm(pt: f32) -> Mm {
    Pt(pt).into()
}

/// Emit the positioned pages as printpdf ops and serialise the document.
fn emit(pages: &[Vec<(&Line, f32)>], config: &RenderConfig) -> Result<PdfOutput, ResumeError> {
    let mut doc = PdfDocument::new("Resume");

    for page_lines in pages {
        let mut ops: Vec<Op> = Vec::with_capacity(page_lines.len() * 4 + 4);
        ops.push(Op::StartTextSection);
        ops.push(Op::SetFillColor {
            col: printpdf::color::Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)),
        });

        let mut current: Option<(Face, f32)> = None;
        for (line, baseline_from_top) in page_lines {
            if line.text.is_empty() {
                continue;
            }
            let font = line.face.builtin();
            if current != Some((line.face, line.size)) {
                ops.push(Op::SetFontSizeBuiltinFont {
                    size: Pt(line.size),
                    font,
                });
                current = Some((line.face, line.size));
            }
            let x = config.margin_horizontal_pt + line.indent;
            let pdf_y = config.page_height_pt - baseline_from_top;
            ops.push(Op::SetTextMatrix {
                matrix: TextMatrix::Translate(Pt(x), Pt(pdf_y)),
            });
            ops.push(Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(line.text.clone())],
                font,
            });
        }
        ops.push(Op::EndTextSection);

        let page = PdfPage::new(
            pt_to_mm(config.page_width_pt),
            pt_to_mm(config.page_height_pt),
            ops,
        );
        doc.pages.push(page);
    }

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    if bytes.is_empty() {
        return Err(ResumeError::Render {
            detail: "PDF serialisation produced no bytes".into(),
        });
    }

    Ok(PdfOutput {
        bytes,
        page_count: pages.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Experience, Role, SkillGroup};

    fn minimal_resume() -> Resume {
        Resume {
            name: "Ada Lovelace".into(),
            location: "London".into(),
            email: "ada@example.org".into(),
            website: "example.org".into(),
            skills: vec![SkillGroup {
                category: "Mathematics".into(),
                items: vec!["Analysis".into(), "Number theory".into()],
            }],
            experience: vec![Experience {
                company: "Babbage-Works".into(),
                location: "London".into(),
                roles: vec![Role {
                    title: "Analyst".into(),
                    dates: "1842-1843".into(),
                    responsibilities: vec!["Wrote the first published program".into()],
                }],
            }],
            awards: vec![],
            education: vec![],
            projects: vec![],
        }
    }

    #[test]
    fn wrap_respects_max_chars() {
        let lines = wrap_text("one two three four five six seven", 10);
        assert!(lines.len() > 1);
        for l in &lines {
            assert!(l.chars().count() <= 10, "line too long: {l:?}");
        }
    }

    #[test]
    fn wrap_empty_input_yields_single_empty_line() {
        assert_eq!(wrap_text("", 20), vec![String::new()]);
    }

    #[test]
    fn wrap_hard_splits_oversized_words() {
        let lines = wrap_text("abcdefghijklmnop", 5);
        assert!(lines.iter().all(|l| l.chars().count() <= 5));
        assert_eq!(lines.concat(), "abcdefghijklmnop");
    }

    #[test]
    fn renders_valid_pdf_with_at_least_one_page() {
        let out = render_pdf(&minimal_resume(), &RenderConfig::default()).unwrap();
        assert!(out.bytes.starts_with(b"%PDF"));
        assert!(out.page_count >= 1);
    }

    #[test]
    fn long_resume_spills_onto_a_second_page() {
        let mut r = minimal_resume();
        let role = Role {
            title: "Engineer".into(),
            dates: "2000-2001".into(),
            responsibilities: vec!["Did a thing that took a while to describe".into(); 8],
        };
        r.experience = vec![Experience {
            company: "Acme".into(),
            location: "NYC".into(),
            roles: vec![role; 12],
        }];
        let out = render_pdf(&r, &RenderConfig::default()).unwrap();
        assert!(out.page_count >= 2, "got {} pages", out.page_count);
    }

    #[test]
    fn link_targets_survive_in_flattened_lines() {
        let mut r = minimal_resume();
        r.experience[0].roles[0].responsibilities =
            vec!["Co-wrote the [operating manual](https://example.org/manual)".into()];
        let lines = flatten(&r, &RenderConfig::default());
        let joined: String = lines.iter().map(|l| l.text.as_str()).collect::<Vec<_>>().join("\n");
        assert!(
            joined.contains("https://example.org/manual"),
            "the target URL must appear in the printed text"
        );
        assert!(joined.contains("operating manual"));
        // A label that merely re-spells its target is not printed twice.
        r.website = "[example.org](https://example.org)".into();
        let lines = flatten(&r, &RenderConfig::default());
        assert!(lines
            .iter()
            .all(|l| !l.text.contains("example.org (https://example.org)")));
    }

    #[test]
    fn dates_are_en_dashed_in_flattened_lines() {
        let lines = flatten(&minimal_resume(), &RenderConfig::default());
        assert!(lines.iter().any(|l| l.text.contains("1842\u{2013}1843")));
        // Hyphenated company name untouched.
        assert!(lines.iter().any(|l| l.text.contains("Babbage-Works")));
    }

    #[test]
    fn flatten_orders_sections_like_the_markup() {
        let lines = flatten(&minimal_resume(), &RenderConfig::default());
        let titles: Vec<&str> = lines
            .iter()
            .filter(|l| l.face == Face::Bold && l.text.chars().all(|c| !c.is_lowercase()))
            .map(|l| l.text.as_str())
            .filter(|t| ["SKILLS", "EXPERIENCE", "AWARDS", "EDUCATION", "SELECTED WORK"].contains(t))
            .collect();
        assert_eq!(titles, ["SKILLS", "EXPERIENCE", "EDUCATION", "SELECTED WORK"]);
    }
}
