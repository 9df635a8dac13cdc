//! Modern variant: light theme, blue accent, sticky top nav, card grid.

use crate::models::profile::Profile;
use crate::templates::shared::{
    document_close, document_open, escape_html, initials, progress_script, reveal_script,
    smooth_scroll_script, split_technologies, Sections,
};
use crate::templates::{Bundle, TemplateCompiler};

pub struct ModernTemplate;

impl TemplateCompiler for ModernTemplate {
    fn compile(&self, profile: &Profile) -> Bundle {
        let sections = Sections::of(profile);
        Bundle {
            markup: markup(profile, sections),
            style: style(sections),
            script: script(sections),
        }
    }
}

fn markup(profile: &Profile, sections: Sections) -> String {
    let p = &profile.personal;
    let name = escape_html(&p.full_name);
    let mut html = document_open(&p.full_name, "modern");

    // Sticky nav: link only to sections that exist below.
    html.push_str("<header class=\"topbar\">\n");
    html.push_str(&format!("<span class=\"brand\">{name}</span>\n"));
    html.push_str("<nav class=\"topnav\">\n<a href=\"#about\">About</a>\n");
    if sections.skills {
        html.push_str("<a href=\"#skills\">Skills</a>\n");
    }
    if sections.education {
        html.push_str("<a href=\"#education\">Education</a>\n");
    }
    if sections.projects {
        html.push_str("<a href=\"#projects\">Projects</a>\n");
    }
    html.push_str("</nav>\n</header>\n");

    // Hero
    html.push_str("<section id=\"about\" class=\"hero reveal\">\n");
    if p.profile_image.trim().is_empty() {
        html.push_str(&format!(
            "<div class=\"avatar avatar-fallback\">{}</div>\n",
            escape_html(&initials(&p.full_name))
        ));
    } else {
        html.push_str(&format!(
            "<img class=\"avatar\" src=\"{}\" alt=\"{name}\">\n",
            escape_html(&p.profile_image)
        ));
    }
    html.push_str(&format!("<h1>{name}</h1>\n"));
    html.push_str(&format!("<p class=\"tagline\">{}</p>\n", escape_html(&p.title)));
    html.push_str(&format!("<p class=\"about\">{}</p>\n", escape_html(&p.about)));
    html.push_str("<div class=\"contact-row\">\n");
    html.push_str(&format!(
        "<a class=\"contact-item\" href=\"mailto:{0}\">{0}</a>\n",
        escape_html(&p.email)
    ));
    if !p.phone.trim().is_empty() {
        html.push_str(&format!(
            "<span class=\"contact-item\">{}</span>\n",
            escape_html(&p.phone)
        ));
    }
    if !p.location.trim().is_empty() {
        html.push_str(&format!(
            "<span class=\"contact-item\">{}</span>\n",
            escape_html(&p.location)
        ));
    }
    html.push_str("</div>\n</section>\n");

    if sections.skills {
        html.push_str("<section id=\"skills\" class=\"section reveal\">\n<h2>Skills</h2>\n<div class=\"skills-grid\">\n");
        for skill in &profile.skills {
            html.push_str(&format!(
                "<div class=\"skill-card\">\n<div class=\"skill-head\"><span class=\"skill-name\">{}</span><span class=\"skill-category\">{}</span></div>\n<div class=\"skill-track\"><div class=\"skill-progress\" data-progress=\"{}\"></div></div>\n</div>\n",
                escape_html(&skill.name),
                escape_html(&skill.category),
                skill.proficiency.percent()
            ));
        }
        html.push_str("</div>\n</section>\n");
    }

    if sections.education {
        html.push_str("<section id=\"education\" class=\"section reveal\">\n<h2>Education</h2>\n<div class=\"timeline\">\n");
        for entry in &profile.education {
            html.push_str(&format!(
                "<div class=\"timeline-item\">\n<span class=\"timeline-year\">{}</span>\n<h3>{}</h3>\n<p class=\"timeline-degree\">{}</p>\n",
                escape_html(&entry.year),
                escape_html(&entry.institution),
                escape_html(&entry.degree)
            ));
            if !entry.description.is_empty() {
                html.push_str(&format!(
                    "<p class=\"timeline-note\">{}</p>\n",
                    escape_html(&entry.description)
                ));
            }
            html.push_str("</div>\n");
        }
        html.push_str("</div>\n</section>\n");
    }

    if sections.projects {
        html.push_str("<section id=\"projects\" class=\"section reveal\">\n<h2>Projects</h2>\n<div class=\"project-grid\">\n");
        for project in &profile.projects {
            html.push_str("<article class=\"project-card\">\n");
            if !project.image.trim().is_empty() {
                html.push_str(&format!(
                    "<img class=\"project-image\" src=\"{}\" alt=\"{}\">\n",
                    escape_html(&project.image),
                    escape_html(&project.title)
                ));
            }
            html.push_str(&format!("<h3>{}</h3>\n", escape_html(&project.title)));
            html.push_str(&format!("<p>{}</p>\n", escape_html(&project.description)));
            html.push_str("<div class=\"chip-row\">\n");
            for tech in split_technologies(&project.technologies) {
                html.push_str(&format!("<span class=\"chip\">{}</span>\n", escape_html(&tech)));
            }
            html.push_str("</div>\n<div class=\"project-links\">\n");
            if !project.github.trim().is_empty() {
                html.push_str(&format!(
                    "<a href=\"{}\">Code</a>\n",
                    escape_html(&project.github)
                ));
            }
            if !project.demo.trim().is_empty() {
                html.push_str(&format!(
                    "<a href=\"{}\">Live demo</a>\n",
                    escape_html(&project.demo)
                ));
            }
            html.push_str("</div>\n</article>\n");
        }
        html.push_str("</div>\n</section>\n");
    }

    if sections.social {
        html.push_str("<footer id=\"contact\" class=\"social-footer reveal\">\n<h2>Find me online</h2>\n<div class=\"social-links\">\n");
        for (label, url) in profile.social.entries() {
            html.push_str(&format!(
                "<a class=\"social-link\" href=\"{}\">{label}</a>\n",
                escape_html(url)
            ));
        }
        html.push_str("</div>\n</footer>\n");
    }

    html.push_str(&document_close());
    html
}

fn style(sections: Sections) -> String {
    let mut css = String::from(
        "/* Modern template */\n\
:root { --accent: #2563eb; --ink: #1f2937; --muted: #6b7280; --bg: #f8fafc; --card: #ffffff; }\n\
* { margin: 0; padding: 0; box-sizing: border-box; }\n\
body.modern { font-family: 'Segoe UI', system-ui, sans-serif; background: var(--bg); color: var(--ink); line-height: 1.6; }\n\
.topbar { position: sticky; top: 0; display: flex; justify-content: space-between; align-items: center; padding: 1rem 2rem; background: var(--card); box-shadow: 0 1px 4px rgba(0,0,0,0.08); z-index: 10; }\n\
.brand { font-weight: 700; color: var(--accent); }\n\
.topnav a { margin-left: 1.25rem; color: var(--ink); text-decoration: none; }\n\
.topnav a:hover { color: var(--accent); }\n\
.hero { max-width: 760px; margin: 4rem auto; padding: 0 1.5rem; text-align: center; }\n\
.avatar { width: 120px; height: 120px; border-radius: 50%; object-fit: cover; margin-bottom: 1.25rem; }\n\
.avatar-fallback { display: inline-flex; align-items: center; justify-content: center; background: var(--accent); color: #fff; font-size: 2.5rem; font-weight: 700; }\n\
.hero h1 { font-size: 2.5rem; }\n\
.tagline { color: var(--accent); font-size: 1.2rem; margin: 0.25rem 0 1rem; }\n\
.about { color: var(--muted); }\n\
.contact-row { margin-top: 1.25rem; display: flex; gap: 1.5rem; justify-content: center; flex-wrap: wrap; }\n\
.contact-item { color: var(--muted); text-decoration: none; }\n\
.section { max-width: 960px; margin: 0 auto 4rem; padding: 0 1.5rem; }\n\
.section h2 { font-size: 1.75rem; margin-bottom: 1.5rem; border-left: 4px solid var(--accent); padding-left: 0.75rem; }\n\
.reveal { opacity: 0; transform: translateY(24px); transition: opacity 0.6s ease, transform 0.6s ease; }\n\
.reveal.visible { opacity: 1; transform: none; }\n",
    );

    if sections.skills {
        css.push_str(
            ".skills-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1rem; }\n\
.skill-card { background: var(--card); border-radius: 10px; padding: 1rem 1.25rem; box-shadow: 0 1px 4px rgba(0,0,0,0.06); }\n\
.skill-head { display: flex; justify-content: space-between; margin-bottom: 0.5rem; }\n\
.skill-name { font-weight: 600; }\n\
.skill-category { color: var(--muted); font-size: 0.85rem; }\n\
.skill-track { height: 8px; background: #e5e7eb; border-radius: 4px; overflow: hidden; }\n\
.skill-progress { height: 100%; width: 0; background: var(--accent); border-radius: 4px; transition: width 1.1s ease; }\n",
        );
    }
    if sections.education {
        css.push_str(
            ".timeline { border-left: 2px solid var(--accent); padding-left: 1.5rem; }\n\
.timeline-item { margin-bottom: 1.75rem; position: relative; }\n\
.timeline-item::before { content: ''; position: absolute; left: -1.95rem; top: 0.4rem; width: 12px; height: 12px; border-radius: 50%; background: var(--accent); }\n\
.timeline-year { color: var(--accent); font-weight: 600; font-size: 0.9rem; }\n\
.timeline-degree { color: var(--muted); }\n\
.timeline-note { margin-top: 0.25rem; }\n",
        );
    }
    if sections.projects {
        css.push_str(
            ".project-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1.25rem; }\n\
.project-card { background: var(--card); border-radius: 10px; padding: 1.25rem; box-shadow: 0 1px 4px rgba(0,0,0,0.06); }\n\
.project-image { width: 100%; border-radius: 8px; margin-bottom: 0.75rem; }\n\
.chip-row { margin: 0.75rem 0; display: flex; flex-wrap: wrap; gap: 0.4rem; }\n\
.chip { background: #dbeafe; color: var(--accent); border-radius: 999px; padding: 0.15rem 0.7rem; font-size: 0.8rem; }\n\
.project-links a { margin-right: 1rem; color: var(--accent); text-decoration: none; font-weight: 600; }\n",
        );
    }
    if sections.social {
        css.push_str(
            ".social-footer { text-align: center; padding: 3rem 1.5rem; background: var(--card); }\n\
.social-links { margin-top: 1rem; display: flex; gap: 1.5rem; justify-content: center; flex-wrap: wrap; }\n\
.social-link { color: var(--accent); text-decoration: none; font-weight: 600; }\n",
        );
    }
    css
}

fn script(sections: Sections) -> String {
    let mut js = String::from("// Modern template behavior\n");
    js.push_str(&reveal_script(".reveal", "0.15"));
    if sections.skills {
        js.push_str(&progress_script(".skill-progress"));
    }
    js.push_str(smooth_scroll_script());
    js
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::tests::sample_profile;

    #[test]
    fn test_nav_links_only_to_emitted_sections() {
        let mut profile = sample_profile();
        profile.projects.clear();
        let bundle = ModernTemplate.compile(&profile);
        assert!(bundle.markup.contains("href=\"#skills\""));
        assert!(!bundle.markup.contains("href=\"#projects\""));
        assert!(!bundle.markup.contains("id=\"projects\""));
        assert!(!bundle.style.contains(".project-card"));
    }

    #[test]
    fn test_fallback_avatar_uses_initials() {
        let profile = sample_profile();
        let bundle = ModernTemplate.compile(&profile);
        assert!(bundle.markup.contains("avatar-fallback\">AL</div>"));
    }

    #[test]
    fn test_script_skips_progress_when_no_skills() {
        let mut profile = sample_profile();
        profile.skills.clear();
        let bundle = ModernTemplate.compile(&profile);
        assert!(!bundle.script.contains(".skill-progress"));
        assert!(bundle.script.contains("IntersectionObserver"));
    }
}
