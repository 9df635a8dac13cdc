//! Dark Neon variant: near-black canvas, neon green and magenta glows.

use crate::models::profile::Profile;
use crate::templates::shared::{
    document_close, document_open, escape_html, initials, progress_script, reveal_script,
    smooth_scroll_script, split_technologies, Sections,
};
use crate::templates::{Bundle, TemplateCompiler};

pub struct DarkNeonTemplate;

impl TemplateCompiler for DarkNeonTemplate {
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
    let mut html = document_open(&p.full_name, "dark-neon");

    html.push_str("<header class=\"neon-hero glow-in\">\n");
    if p.profile_image.trim().is_empty() {
        html.push_str(&format!(
            "<div class=\"neon-avatar neon-avatar-fallback\">{}</div>\n",
            escape_html(&initials(&p.full_name))
        ));
    } else {
        html.push_str(&format!(
            "<img class=\"neon-avatar\" src=\"{}\" alt=\"{name}\">\n",
            escape_html(&p.profile_image)
        ));
    }
    html.push_str(&format!("<h1 class=\"neon-name\">{name}</h1>\n"));
    html.push_str(&format!(
        "<p class=\"neon-title\">{}</p>\n",
        escape_html(&p.title)
    ));
    html.push_str(&format!(
        "<p class=\"neon-about\">{}</p>\n",
        escape_html(&p.about)
    ));
    html.push_str("<ul class=\"neon-contact\">\n");
    html.push_str(&format!(
        "<li><a href=\"mailto:{0}\">{0}</a></li>\n",
        escape_html(&p.email)
    ));
    if !p.phone.trim().is_empty() {
        html.push_str(&format!("<li>{}</li>\n", escape_html(&p.phone)));
    }
    if !p.location.trim().is_empty() {
        html.push_str(&format!("<li>{}</li>\n", escape_html(&p.location)));
    }
    html.push_str("</ul>\n</header>\n<main>\n");

    if sections.skills {
        html.push_str(
            "<section id=\"skills\" class=\"neon-panel glow-in\">\n<h2 class=\"neon-heading\">// Skills</h2>\n",
        );
        for skill in &profile.skills {
            html.push_str(&format!(
                "<div class=\"circuit\">\n<span class=\"circuit-label\">{} <span class=\"circuit-cat\">[{}]</span></span>\n<div class=\"circuit-rail\"><div class=\"circuit-charge\" data-progress=\"{}\"></div></div>\n</div>\n",
                escape_html(&skill.name),
                escape_html(&skill.category),
                skill.proficiency.percent()
            ));
        }
        html.push_str("</section>\n");
    }

    if sections.education {
        html.push_str(
            "<section id=\"education\" class=\"neon-panel glow-in\">\n<h2 class=\"neon-heading\">// Education</h2>\n",
        );
        for entry in &profile.education {
            html.push_str(&format!(
                "<div class=\"log-entry\">\n<h3>{} <span class=\"log-year\">{}</span></h3>\n<p class=\"log-degree\">{}</p>\n",
                escape_html(&entry.institution),
                escape_html(&entry.year),
                escape_html(&entry.degree)
            ));
            if !entry.description.is_empty() {
                html.push_str(&format!("<p>{}</p>\n", escape_html(&entry.description)));
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    if sections.projects {
        html.push_str(
            "<section id=\"projects\" class=\"neon-panel glow-in\">\n<h2 class=\"neon-heading\">// Projects</h2>\n<div class=\"deck\">\n",
        );
        for project in &profile.projects {
            html.push_str("<article class=\"deck-card\">\n");
            if !project.image.trim().is_empty() {
                html.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\">\n",
                    escape_html(&project.image),
                    escape_html(&project.title)
                ));
            }
            html.push_str(&format!("<h3>{}</h3>\n", escape_html(&project.title)));
            html.push_str(&format!("<p>{}</p>\n", escape_html(&project.description)));
            for tech in split_technologies(&project.technologies) {
                html.push_str(&format!(
                    "<span class=\"tag\">{}</span>\n",
                    escape_html(&tech)
                ));
            }
            html.push_str("<div class=\"deck-links\">\n");
            if !project.github.trim().is_empty() {
                html.push_str(&format!(
                    "<a href=\"{}\">[ code ]</a>\n",
                    escape_html(&project.github)
                ));
            }
            if !project.demo.trim().is_empty() {
                html.push_str(&format!(
                    "<a href=\"{}\">[ demo ]</a>\n",
                    escape_html(&project.demo)
                ));
            }
            html.push_str("</div>\n</article>\n");
        }
        html.push_str("</div>\n</section>\n");
    }

    if sections.social {
        html.push_str("<footer class=\"neon-footer glow-in\">\n");
        for (label, url) in profile.social.entries() {
            html.push_str(&format!(
                "<a class=\"pulse-link\" href=\"{}\">{label}</a>\n",
                escape_html(url)
            ));
        }
        html.push_str("</footer>\n");
    }

    html.push_str("</main>\n");
    html.push_str(&document_close());
    html
}

fn style(sections: Sections) -> String {
    let mut css = String::from(
        "/* Dark Neon template */\n\
* { margin: 0; padding: 0; box-sizing: border-box; }\n\
body.dark-neon { font-family: 'Courier New', monospace; background: #0a0a0f; color: #d6f5d6; line-height: 1.6; }\n\
.neon-hero { text-align: center; padding: 5rem 1.5rem 3rem; }\n\
.neon-avatar { width: 130px; height: 130px; border-radius: 50%; object-fit: cover; border: 2px solid #39ff14; box-shadow: 0 0 18px #39ff14; }\n\
.neon-avatar-fallback { display: inline-flex; align-items: center; justify-content: center; font-size: 2.6rem; color: #39ff14; }\n\
.neon-name { margin-top: 1rem; font-size: 2.6rem; color: #39ff14; text-shadow: 0 0 12px #39ff14; }\n\
.neon-title { color: #ff2bd6; text-shadow: 0 0 10px #ff2bd6; font-size: 1.2rem; }\n\
.neon-about { max-width: 60ch; margin: 1rem auto 0; color: #9fe8b0; }\n\
.neon-contact { list-style: none; margin-top: 1.25rem; }\n\
.neon-contact li { display: inline-block; margin: 0 0.75rem; color: #9fe8b0; }\n\
.neon-contact a { color: #39ff14; }\n\
.neon-panel { max-width: 880px; margin: 0 auto 3rem; padding: 1.5rem; border: 1px solid #1f3d24; border-radius: 8px; background: #0d1410; box-shadow: inset 0 0 30px rgba(57,255,20,0.05); }\n\
.neon-heading { color: #ff2bd6; margin-bottom: 1.25rem; }\n\
.glow-in { opacity: 0; transform: scale(0.98); transition: opacity 0.7s ease, transform 0.7s ease; }\n\
.glow-in.visible { opacity: 1; transform: none; }\n",
    );
    if sections.education {
        css.push_str(
            ".log-entry { margin-bottom: 1.25rem; }\n\
.log-year { color: #ff2bd6; font-size: 0.9rem; }\n\
.log-degree { color: #39ff14; }\n",
        );
    }
    if sections.skills {
        css.push_str(
            ".circuit { margin-bottom: 0.9rem; }\n\
.circuit-label { display: block; margin-bottom: 0.3rem; }\n\
.circuit-cat { color: #ff2bd6; font-size: 0.85rem; }\n\
.circuit-rail { height: 6px; background: #15241a; border-radius: 3px; overflow: hidden; }\n\
.circuit-charge { height: 100%; width: 0; background: #39ff14; box-shadow: 0 0 8px #39ff14; transition: width 1.3s steps(24); }\n",
        );
    }
    if sections.projects {
        css.push_str(
            ".deck { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1.25rem; }\n\
.deck-card { border: 1px solid #ff2bd6; border-radius: 8px; padding: 1rem; background: #120a14; }\n\
.deck-card img { width: 100%; border-radius: 4px; margin-bottom: 0.6rem; }\n\
.deck-card h3 { color: #39ff14; }\n\
.tag { display: inline-block; margin: 0.4rem 0.4rem 0 0; padding: 0.1rem 0.5rem; border: 1px solid #39ff14; border-radius: 3px; font-size: 0.8rem; color: #39ff14; }\n\
.deck-links { margin-top: 0.75rem; }\n\
.deck-links a { color: #ff2bd6; margin-right: 1rem; text-decoration: none; }\n",
        );
    }
    if sections.social {
        css.push_str(
            ".neon-footer { text-align: center; padding: 2rem 1rem 4rem; }\n\
.pulse-link { color: #39ff14; margin: 0 1rem; text-decoration: none; text-shadow: 0 0 8px #39ff14; }\n\
.pulse-link:hover { color: #ff2bd6; text-shadow: 0 0 8px #ff2bd6; }\n",
        );
    }
    css
}

fn script(sections: Sections) -> String {
    let mut js = String::from("// Dark Neon template behavior\n");
    js.push_str(&reveal_script(".glow-in", "0.1"));
    if sections.skills {
        js.push_str(&progress_script(".circuit-charge"));
    }
    js.push_str(smooth_scroll_script());
    js
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::tests::sample_profile;

    #[test]
    fn test_skill_rails_carry_percentages() {
        let bundle = DarkNeonTemplate.compile(&sample_profile());
        assert!(bundle
            .markup
            .contains("class=\"circuit-charge\" data-progress=\"90\""));
        assert!(bundle
            .markup
            .contains("class=\"circuit-charge\" data-progress=\"25\""));
    }

    #[test]
    fn test_log_styles_gated_on_education() {
        let mut profile = sample_profile();
        profile.education.clear();
        let bundle = DarkNeonTemplate.compile(&profile);
        assert!(!bundle.markup.contains("log-entry"));
        assert!(!bundle.style.contains(".log-entry"));
    }

    #[test]
    fn test_empty_skills_drops_circuit_hooks_everywhere() {
        let mut profile = sample_profile();
        profile.skills.clear();
        let bundle = DarkNeonTemplate.compile(&profile);
        assert!(!bundle.markup.contains("circuit"));
        assert!(!bundle.style.contains(".circuit-charge"));
        assert!(!bundle.script.contains(".circuit-charge"));
    }
}
