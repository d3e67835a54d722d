//! Compact layout — a dense two-column resume page.
//!
//! Header: name and title left, contact lines right.
//! Primary column (8/12): summary, experience, projects.
//! Sidebar (4/12): skills, education, certifications, languages.
//!
//! Class names are passed through untouched for the host's styling framework.
//! Icon slots are empty `<i data-icon=..>` placeholders filled in by the host.

use crate::models::resume::{
    present, CertificationEntry, EducationEntry, ExperienceEntry, LanguageEntry, PersonalInfo,
    ProjectEntry, ResumeData, SkillEntry,
};
use crate::render::{Element, Node};
use crate::templates::sections::{linkedin_handle, visible_sections, Section};
use crate::templates::ResumeTemplate;

const PAGE: &str = "max-w-[21cm] mx-auto bg-white p-6";
const SECTION_HEADING: &str = "text-sm font-bold uppercase tracking-wider text-gray-900 mb-2";
const ENTRY_TITLE: &str = "font-medium text-gray-900";

pub struct CompactTemplate;

impl ResumeTemplate for CompactTemplate {
    fn name(&self) -> &'static str {
        "compact"
    }

    fn render(&self, data: &ResumeData) -> Node {
        render_compact(data)
    }

    fn visible_sections(&self, data: &ResumeData) -> Vec<Section> {
        visible_sections(data)
    }
}

pub fn render_compact(data: &ResumeData) -> Node {
    Element::new("div")
        .class(PAGE)
        .child(header(&data.personal_info))
        .child(
            Element::new("div")
                .class("grid grid-cols-12 gap-4")
                .child(primary_column(data))
                .child(sidebar(data)),
        )
        .into()
}

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

fn header(info: &PersonalInfo) -> Element {
    let identity = Element::new("div")
        .child(
            Element::new("h1")
                .class("text-2xl font-bold text-gray-900")
                .text(info.full_name()),
        )
        .child(Element::new("p").class("text-gray-600").text(&info.title));

    let contacts = Element::new("div")
        .class("text-right text-sm")
        .child_opt(present(&info.email).map(|email| contact_line("mail", email)))
        .child_opt(present(&info.phone).map(|phone| contact_line("phone", phone)))
        .child_opt(
            present(&info.linkedin).map(|url| contact_line("linkedin", &linkedin_handle(url))),
        );

    Element::new("div")
        .class("flex justify-between items-start border-b border-gray-300 pb-4 mb-4")
        .child(identity)
        .child(contacts)
}

fn contact_line(kind: &'static str, value: &str) -> Element {
    Element::new("div")
        .class("flex items-center justify-end gap-1")
        .attr("data-contact", kind)
        .child(
            Element::new("i")
                .class("h-3 w-3")
                .attr("data-icon", kind)
                .attr("aria-hidden", "true"),
        )
        .child(Element::new("span").text(value))
}

// ────────────────────────────────────────────────────────────────────────────
// Columns
// ────────────────────────────────────────────────────────────────────────────

fn primary_column(data: &ResumeData) -> Element {
    let summary = present(&data.personal_info.summary).map(|summary| {
        Element::new("section")
            .class("text-sm text-gray-700")
            .attr("data-section", "summary")
            .text(summary)
    });

    Element::new("div")
        .class("col-span-8 space-y-4")
        .child_opt(summary)
        .child(section(
            Section::Experience,
            Element::new("div")
                .class("space-y-3")
                .children(data.experience.iter().map(experience_entry)),
        ))
        .child_opt(Section::Projects.is_visible(data).then(|| {
            section(
                Section::Projects,
                Element::new("div")
                    .class("space-y-2")
                    .children(data.projects.iter().map(project_entry)),
            )
        }))
}

fn sidebar(data: &ResumeData) -> Element {
    Element::new("div")
        .class("col-span-4 space-y-4")
        .child(section(
            Section::Skills,
            Element::new("div")
                .class("flex flex-wrap gap-1")
                .children(data.skills.iter().map(skill_chip)),
        ))
        .child(section(
            Section::Education,
            Element::new("div")
                .class("space-y-2")
                .children(data.education.iter().map(education_entry)),
        ))
        .child_opt(Section::Certifications.is_visible(data).then(|| {
            section(
                Section::Certifications,
                Element::new("div")
                    .class("space-y-1")
                    .children(data.certifications.iter().map(certification_entry)),
            )
        }))
        .child_opt(Section::Languages.is_visible(data).then(|| {
            section(
                Section::Languages,
                Element::new("div")
                    .class("space-y-1")
                    .children(data.languages.iter().map(language_row)),
            )
        }))
}

fn section(kind: Section, body: Element) -> Element {
    Element::new("section")
        .attr("data-section", kind.key())
        .child(Element::new("h2").class(SECTION_HEADING).text(kind.title()))
        .child(body)
}

// ────────────────────────────────────────────────────────────────────────────
// Entries
// ────────────────────────────────────────────────────────────────────────────

fn experience_entry(exp: &ExperienceEntry) -> Element {
    Element::new("div")
        .class("text-sm")
        .child(
            Element::new("div")
                .class("flex justify-between")
                .child(Element::new("div").class(ENTRY_TITLE).text(&exp.position))
                .child(
                    Element::new("div")
                        .class("text-gray-600 text-xs")
                        .text(date_range(&exp.start_date, &exp.end_date)),
                ),
        )
        .child(Element::new("div").class("text-gray-600").text(&exp.company))
        .child_opt(present(&exp.description).map(|description| {
            Element::new("p")
                .class("text-gray-700 mt-1 text-xs leading-normal")
                .text(description)
        }))
}

fn project_entry(project: &ProjectEntry) -> Element {
    let link = present(&project.link).map(|href| {
        Element::new("a")
            .attr("href", href)
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
            .class("text-blue-600 hover:underline text-xs")
            .text("View")
    });

    Element::new("div")
        .class("text-sm")
        .child(
            Element::new("div")
                .class("flex justify-between")
                .child(Element::new("div").class(ENTRY_TITLE).text(&project.title))
                .child_opt(link),
        )
        .child_opt(present(&project.technologies).map(|tech| {
            Element::new("div")
                .class("text-gray-600 text-xs")
                .text(tech)
        }))
        .child_opt(present(&project.description).map(|description| {
            Element::new("p")
                .class("text-gray-700 text-xs mt-1")
                .text(description)
        }))
}

fn skill_chip(skill: &SkillEntry) -> Element {
    Element::new("span")
        .class("text-xs px-2 py-1 bg-gray-100 text-gray-700 rounded")
        .text(&skill.name)
}

fn education_entry(edu: &EducationEntry) -> Element {
    let degree = match present(&edu.field_of_study) {
        Some(field) => format!("{} in {}", edu.degree, field),
        None => edu.degree.clone(),
    };

    Element::new("div")
        .class("text-sm")
        .child(Element::new("div").class(ENTRY_TITLE).text(&edu.institution))
        .child(Element::new("div").class("text-xs text-gray-700").text(degree))
        .child(
            Element::new("div")
                .class("text-xs text-gray-600")
                .text(date_range(&edu.start_date, &edu.end_date)),
        )
}

fn certification_entry(cert: &CertificationEntry) -> Element {
    Element::new("div")
        .class("text-xs")
        .child(Element::new("div").class(ENTRY_TITLE).text(&cert.name))
        .child(
            Element::new("div")
                .class("text-gray-600")
                .text(format!("{} \u{2022} {}", cert.issuer, cert.date)),
        )
}

fn language_row(lang: &LanguageEntry) -> Element {
    Element::new("div")
        .class("flex justify-between items-center text-xs")
        .child(Element::new("span").class("text-gray-900").text(&lang.language))
        .child(Element::new("span").class("text-gray-600").text(&lang.proficiency))
}

fn date_range(start: &str, end: &str) -> String {
    format!("{start} - {end}")
}
