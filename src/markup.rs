use crate::constants::{
    BACKDROP_ID, BLOB_PRIMARY_ID, BLOB_SECONDARY_ID, NAV_ID, NAV_SECTION_ATTR, PARTICLE_CLASS,
    REVEAL_CLASS, SCROLL_TO_ATTR, STAGGER_STEP_MS,
};
use crate::core::{
    Experience, Portfolio, Project, SectionId, SkillGroup, Specialization, SECTION_ORDER,
};
use crate::input::particle_layouts;
use std::fmt::Write;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[inline]
fn stagger_style(index: usize) -> String {
    format!("transition-delay:{}ms", (index as u32 + 1) * STAGGER_STEP_MS)
}

/// Full page body: backdrop, navigation and every section in display order.
pub fn render_page(portfolio: &Portfolio, active: Option<SectionId>) -> String {
    let mut html = String::new();
    html.push_str(&render_backdrop());
    html.push_str(&render_nav(active));
    html.push_str("<main class=\"content\">");
    for id in SECTION_ORDER {
        html.push_str(&render_section(id, portfolio));
    }
    html.push_str("</main>");
    html
}

pub fn render_nav(active: Option<SectionId>) -> String {
    let mut html = format!("<nav id=\"{NAV_ID}\" class=\"glass nav\">");
    for id in SECTION_ORDER {
        let class = if active == Some(id) {
            "nav-item active"
        } else {
            "nav-item"
        };
        _ = write!(
            html,
            "<button type=\"button\" class=\"{class}\" {NAV_SECTION_ATTR}=\"{}\">{}</button>",
            id.dom_id(),
            id.label()
        );
    }
    html.push_str("</nav>");
    html
}

pub fn render_backdrop() -> String {
    let mut html = format!(
        "<div id=\"{BACKDROP_ID}\" class=\"backdrop\" aria-hidden=\"true\">\
         <div class=\"pointer-glow\"></div>\
         <div id=\"{BLOB_PRIMARY_ID}\" class=\"blob blob-primary\"></div>\
         <div id=\"{BLOB_SECONDARY_ID}\" class=\"blob blob-secondary\"></div>"
    );
    for (i, p) in particle_layouts().enumerate() {
        _ = write!(
            html,
            "<div class=\"{PARTICLE_CLASS} particle-{}\" data-index=\"{i}\" \
             style=\"left:{}%;top:{}%;animation:float {}s ease-in-out infinite;animation-delay:{}s\"></div>",
            p.palette, p.left_pct, p.top_pct, p.duration_sec, p.delay_sec
        );
    }
    html.push_str("</div>");
    html
}

pub fn render_section(id: SectionId, portfolio: &Portfolio) -> String {
    let body = match id {
        SectionId::Home => render_home(portfolio),
        SectionId::About => render_about(portfolio),
        SectionId::Experience => render_list(
            "Experience",
            "experience-list",
            portfolio.experiences.iter().enumerate().map(|(i, e)| render_experience(i, e)),
        ),
        SectionId::Projects => render_list(
            "Featured Projects",
            "project-grid",
            portfolio.projects.iter().enumerate().map(|(i, p)| render_project(i, p)),
        ),
        SectionId::Skills => render_list(
            "Technical Skills",
            "skill-grid",
            portfolio.skills.iter().enumerate().map(|(i, s)| render_skill_group(i, s)),
        ),
        SectionId::Contact => render_contact(portfolio),
    };
    format!(
        "<section id=\"{}\" class=\"section section-{}\">{}</section>",
        id.dom_id(),
        id.dom_id(),
        body
    )
}

fn render_heading(title: &str) -> String {
    format!(
        "<h2 class=\"section-title {REVEAL_CLASS}\"><span class=\"gradient-text\">{}</span></h2>",
        escape_html(title)
    )
}

fn render_list(title: &str, container_class: &str, cards: impl Iterator<Item = String>) -> String {
    let mut html = render_heading(title);
    _ = write!(html, "<div class=\"{container_class}\">");
    for card in cards {
        html.push_str(&card);
    }
    html.push_str("</div>");
    html
}

fn render_chips(items: &[String], class: &str) -> String {
    items
        .iter()
        .map(|item| format!("<span class=\"{class}\">{}</span>", escape_html(item)))
        .collect()
}

fn render_home(portfolio: &Portfolio) -> String {
    let p = &portfolio.profile;
    let mut html = format!(
        "<div class=\"hero\">\
         <h1 class=\"hero-name\"><span class=\"gradient-text light\">{}</span></h1>\
         <h1 class=\"hero-name\"><span class=\"gradient-text\">{}</span></h1>\
         <p class=\"hero-tagline fade-in-up\">{}</p>",
        escape_html(&p.first_name),
        escape_html(&p.last_name),
        escape_html(&p.tagline)
    );
    for line in &p.summary {
        _ = write!(html, "<p class=\"hero-summary fade-in-up\">{}</p>", escape_html(line));
    }
    _ = write!(
        html,
        "<div class=\"hero-links fade-in-up\">{}</div>\
         <button type=\"button\" class=\"glass explore fade-in-up\" {SCROLL_TO_ATTR}=\"{}\">Explore My Work</button>\
         </div>",
        render_links(portfolio),
        SectionId::About.dom_id()
    );
    html
}

fn render_links(portfolio: &Portfolio) -> String {
    let p = &portfolio.profile;
    format!(
        "<a class=\"link\" href=\"{}\">Email</a>\
         <a class=\"link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">LinkedIn</a>\
         <a class=\"link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">GitHub</a>",
        escape_html(&p.email),
        escape_html(&p.linkedin),
        escape_html(&p.github)
    )
}

fn render_about(portfolio: &Portfolio) -> String {
    let edu = &portfolio.education;
    let mut html = render_heading("About Me");
    _ = write!(
        html,
        "<div class=\"about-grid\">\
         <div class=\"glass card {REVEAL_CLASS} from-left\" style=\"{}\">\
         <h3 class=\"accent-cyan\">Education</h3>\
         <h4>{}</h4><p>{}</p><p class=\"muted\">{}</p><p class=\"muted\">{}</p></div>\
         <div class=\"glass card {REVEAL_CLASS} from-right\" style=\"{}\">\
         <h3 class=\"accent-purple\">Specializations</h3>",
        stagger_style(0),
        escape_html(&edu.school),
        escape_html(&edu.degree),
        escape_html(&edu.graduation),
        escape_html(&edu.location),
        stagger_style(1)
    );
    for s in &portfolio.specializations {
        html.push_str(&render_specialization(s));
    }
    html.push_str("</div></div>");
    html
}

fn render_specialization(s: &Specialization) -> String {
    format!(
        "<div class=\"specialization\"><h4 class=\"accent-{}\">{}</h4><p>{}</p></div>",
        s.accent.css_name(),
        escape_html(&s.title),
        escape_html(&s.summary)
    )
}

fn render_experience(index: usize, e: &Experience) -> String {
    let accent = e.accent.css_name();
    let achievements: String = e
        .achievements
        .iter()
        .map(|a| format!("<li class=\"achievement dot-{accent}\">{}</li>", escape_html(a)))
        .collect();
    format!(
        "<article class=\"glass card {REVEAL_CLASS}\" style=\"{}\">\
         <header class=\"card-header\">\
         <div><h3 class=\"accent-{accent}\">{}</h3><p class=\"role\">{}</p><p class=\"muted\">{}</p></div>\
         <span class=\"period chip-{accent}\">{}</span>\
         </header><ul class=\"achievements\">{}</ul></article>",
        stagger_style(index),
        escape_html(&e.company),
        escape_html(&e.role),
        escape_html(&e.location),
        escape_html(&e.period),
        achievements
    )
}

fn render_project(index: usize, p: &Project) -> String {
    let accent = p.accent.css_name();
    let highlights: String = p
        .highlights
        .iter()
        .map(|h| format!("<li>{}</li>", escape_html(h)))
        .collect();
    format!(
        "<article class=\"glass card project {REVEAL_CLASS}\" style=\"{}\">\
         <h3 class=\"accent-{accent}\">{}</h3><p class=\"description\">{}</p>\
         <h4>Key Highlights</h4><ul class=\"highlights\">{}</ul>\
         <div class=\"tags\">{}</div></article>",
        stagger_style(index),
        escape_html(&p.title),
        escape_html(&p.description),
        highlights,
        render_chips(&p.tech, "tag")
    )
}

fn render_skill_group(index: usize, s: &SkillGroup) -> String {
    let accent = s.accent.css_name();
    format!(
        "<article class=\"glass card {REVEAL_CLASS}\" style=\"{}\">\
         <h3 class=\"accent-{accent}\">{}</h3><div class=\"tags\">{}</div></article>",
        stagger_style(index),
        escape_html(&s.category),
        render_chips(&s.skills, &format!("tag chip-{accent}"))
    )
}

fn render_contact(portfolio: &Portfolio) -> String {
    let mut html = render_heading("Get In Touch");
    _ = write!(
        html,
        "<div class=\"glass card contact {REVEAL_CLASS}\" style=\"{}\">\
         <p>{}</p><div class=\"hero-links\">{}</div></div>",
        stagger_style(0),
        escape_html(&portfolio.profile.full_name()),
        render_links(portfolio)
    );
    html
}
