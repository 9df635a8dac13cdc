//! Glassmorphism variant: gradient backdrop with frosted translucent cards.

use crate::models::profile::Profile;
use crate::templates::shared::{
    document_close, document_open, escape_html, initials, progress_script, reveal_script,
    smooth_scroll_script, split_technologies, Sections,
};
use crate::templates::{Bundle, TemplateCompiler};

pub struct GlassmorphismTemplate;

impl TemplateCompiler for GlassmorphismTemplate {
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
    let mut html = document_open(&p.full_name, "glassmorphism");

    html.push_str("<div class=\"backdrop\">\n");

    html.push_str("<section id=\"profile\" class=\"glass-card frost\">\n");
    if p.profile_image.trim().is_empty() {
        html.push_str(&format!(
            "<div class=\"glass-avatar glass-avatar-fallback\">{}</div>\n",
            escape_html(&initials(&p.full_name))
        ));
    } else {
        html.push_str(&format!(
            "<img class=\"glass-avatar\" src=\"{}\" alt=\"{name}\">\n",
            escape_html(&p.profile_image)
        ));
    }
    html.push_str(&format!("<h1>{name}</h1>\n"));
    html.push_str(&format!(
        "<p class=\"subtitle\">{}</p>\n",
        escape_html(&p.title)
    ));
    html.push_str(&format!("<p>{}</p>\n", escape_html(&p.about)));
    html.push_str("<div class=\"contact-strip\">\n");
    html.push_str(&format!(
        "<a href=\"mailto:{0}\">{0}</a>\n",
        escape_html(&p.email)
    ));
    if !p.phone.trim().is_empty() {
        html.push_str(&format!("<span>{}</span>\n", escape_html(&p.phone)));
    }
    if !p.location.trim().is_empty() {
        html.push_str(&format!("<span>{}</span>\n", escape_html(&p.location)));
    }
    html.push_str("</div>\n</section>\n");

    if sections.skills {
        html.push_str("<section id=\"skills\" class=\"glass-card frost\">\n<h2>Skills</h2>\n");
        for skill in &profile.skills {
            html.push_str(&format!(
                "<div class=\"pane-row\">\n<span>{} <small>{}</small></span>\n<div class=\"pane-track\"><div class=\"pane-fill\" data-progress=\"{}\"></div></div>\n</div>\n",
                escape_html(&skill.name),
                escape_html(&skill.category),
                skill.proficiency.percent()
            ));
        }
        html.push_str("</section>\n");
    }

    if sections.education {
        html.push_str("<section id=\"education\" class=\"glass-card frost\">\n<h2>Education</h2>\n");
        for entry in &profile.education {
            html.push_str(&format!(
                "<div class=\"pane-block\">\n<h3>{}</h3>\n<p class=\"pane-meta\">{} &middot; {}</p>\n",
                escape_html(&entry.institution),
                escape_html(&entry.degree),
                escape_html(&entry.year)
            ));
            if !entry.description.is_empty() {
                html.push_str(&format!("<p>{}</p>\n", escape_html(&entry.description)));
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    if sections.projects {
        html.push_str("<section id=\"projects\" class=\"glass-card frost\">\n<h2>Projects</h2>\n<div class=\"pane-grid\">\n");
        for project in &profile.projects {
            html.push_str("<article class=\"pane\">\n");
            if !project.image.trim().is_empty() {
                html.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\">\n",
                    escape_html(&project.image),
                    escape_html(&project.title)
                ));
            }
            html.push_str(&format!("<h3>{}</h3>\n", escape_html(&project.title)));
            html.push_str(&format!("<p>{}</p>\n", escape_html(&project.description)));
            html.push_str("<div class=\"bubble-row\">\n");
            for tech in split_technologies(&project.technologies) {
                html.push_str(&format!(
                    "<span class=\"bubble\">{}</span>\n",
                    escape_html(&tech)
                ));
            }
            html.push_str("</div>\n");
            if !project.github.trim().is_empty() {
                html.push_str(&format!(
                    "<a class=\"pane-link\" href=\"{}\">Source</a>\n",
                    escape_html(&project.github)
                ));
            }
            if !project.demo.trim().is_empty() {
                html.push_str(&format!(
                    "<a class=\"pane-link\" href=\"{}\">Demo</a>\n",
                    escape_html(&project.demo)
                ));
            }
            html.push_str("</article>\n");
        }
        html.push_str("</div>\n</section>\n");
    }

    if sections.social {
        html.push_str("<section id=\"links\" class=\"glass-card frost\">\n<h2>Links</h2>\n<div class=\"orb-row\">\n");
        for (label, url) in profile.social.entries() {
            html.push_str(&format!(
                "<a class=\"orb\" href=\"{}\">{label}</a>\n",
                escape_html(url)
            ));
        }
        html.push_str("</div>\n</section>\n");
    }

    html.push_str("</div>\n");
    html.push_str(&document_close());
    html
}

fn style(sections: Sections) -> String {
    let mut css = String::from(
        "/* Glassmorphism template */\n\
* { margin: 0; padding: 0; box-sizing: border-box; }\n\
body.glassmorphism { font-family: 'Segoe UI', system-ui, sans-serif; color: #f4f6ff; line-height: 1.65; background: linear-gradient(135deg, #667eea 0%, #764ba2 50%, #f093fb 100%) fixed; }\n\
.backdrop { max-width: 860px; margin: 0 auto; padding: 3rem 1.25rem; display: flex; flex-direction: column; gap: 1.75rem; }\n\
.glass-card { background: rgba(255,255,255,0.12); border: 1px solid rgba(255,255,255,0.25); border-radius: 18px; padding: 2rem; backdrop-filter: blur(14px); -webkit-backdrop-filter: blur(14px); box-shadow: 0 8px 32px rgba(0,0,0,0.2); }\n\
.glass-card h2 { margin-bottom: 1.25rem; font-weight: 600; }\n\
.glass-avatar { width: 110px; height: 110px; border-radius: 50%; object-fit: cover; border: 2px solid rgba(255,255,255,0.5); }\n\
.glass-avatar-fallback { display: inline-flex; align-items: center; justify-content: center; font-size: 2.4rem; background: rgba(255,255,255,0.2); }\n\
.subtitle { opacity: 0.85; margin: 0.25rem 0 1rem; }\n\
.contact-strip { margin-top: 1.25rem; display: flex; gap: 1.25rem; flex-wrap: wrap; }\n\
.contact-strip a, .contact-strip span { color: #f4f6ff; opacity: 0.9; }\n\
.frost { opacity: 0; transform: translateY(20px); transition: opacity 0.65s ease, transform 0.65s ease; }\n\
.frost.visible { opacity: 1; transform: none; }\n",
    );
    if sections.education {
        css.push_str(
            ".pane-block { margin-bottom: 1.25rem; }\n\
.pane-meta { opacity: 0.8; font-size: 0.95rem; }\n",
        );
    }
    if sections.skills {
        css.push_str(
            ".pane-row { display: flex; align-items: center; justify-content: space-between; gap: 1rem; margin-bottom: 0.8rem; }\n\
.pane-row small { opacity: 0.75; }\n\
.pane-track { flex: 0 0 55%; height: 8px; border-radius: 4px; background: rgba(255,255,255,0.2); overflow: hidden; }\n\
.pane-fill { height: 100%; width: 0; background: rgba(255,255,255,0.85); border-radius: 4px; transition: width 1s ease; }\n",
        );
    }
    if sections.projects {
        css.push_str(
            ".pane-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(250px, 1fr)); gap: 1.25rem; }\n\
.pane { background: rgba(255,255,255,0.1); border-radius: 14px; padding: 1.1rem; border: 1px solid rgba(255,255,255,0.2); }\n\
.pane img { width: 100%; border-radius: 10px; margin-bottom: 0.6rem; }\n\
.bubble-row { display: flex; flex-wrap: wrap; gap: 0.4rem; margin: 0.6rem 0; }\n\
.bubble { padding: 0.12rem 0.6rem; border-radius: 999px; background: rgba(255,255,255,0.22); font-size: 0.8rem; }\n\
.pane-link { color: #fff; font-weight: 600; margin-right: 0.9rem; }\n",
        );
    }
    if sections.social {
        css.push_str(
            ".orb-row { display: flex; gap: 1rem; flex-wrap: wrap; }\n\
.orb { padding: 0.55rem 1.3rem; border-radius: 999px; background: rgba(255,255,255,0.18); color: #fff; text-decoration: none; border: 1px solid rgba(255,255,255,0.3); }\n\
.orb:hover { background: rgba(255,255,255,0.3); }\n",
        );
    }
    css
}

fn script(sections: Sections) -> String {
    let mut js = String::from("// Glassmorphism template behavior\n");
    js.push_str(&reveal_script(".frost", "0.12"));
    if sections.skills {
        js.push_str(&progress_script(".pane-fill"));
    }
    js.push_str(smooth_scroll_script());
    js
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::tests::sample_profile;

    #[test]
    fn test_cards_use_frost_reveal_class() {
        let bundle = GlassmorphismTemplate.compile(&sample_profile());
        assert!(bundle.markup.contains("glass-card frost"));
        assert!(bundle.script.contains("querySelectorAll('.frost')"));
    }

    #[test]
    fn test_pane_block_styles_gated_on_education() {
        let mut profile = sample_profile();
        profile.education.clear();
        let bundle = GlassmorphismTemplate.compile(&profile);
        assert!(!bundle.markup.contains("pane-block"));
        assert!(!bundle.style.contains(".pane-block"));
        assert!(!bundle.style.contains(".pane-meta"));
    }

    #[test]
    fn test_links_card_gated_on_social() {
        let mut profile = sample_profile();
        profile.social = Default::default();
        let bundle = GlassmorphismTemplate.compile(&profile);
        assert!(!bundle.markup.contains("id=\"links\""));
        assert!(!bundle.style.contains(".orb"));
    }
}
