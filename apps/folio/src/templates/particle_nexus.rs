//! Particle Nexus variant: deep-space palette with a fixed canvas mount for
//! the external particle effect layer. The effect itself is not part of the
//! compiled script; this template only guarantees the mount point exists.

use crate::models::profile::Profile;
use crate::templates::shared::{
    document_close, document_open, escape_html, initials, progress_script, reveal_script,
    smooth_scroll_script, split_technologies, Sections,
};
use crate::templates::{Bundle, TemplateCompiler};

pub struct ParticleNexusTemplate;

impl TemplateCompiler for ParticleNexusTemplate {
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
    let mut html = document_open(&p.full_name, "particle-nexus");

    // Mount point the decorative effect layer attaches to.
    html.push_str("<canvas id=\"nexus-canvas\" aria-hidden=\"true\"></canvas>\n");

    html.push_str("<div class=\"constellation\">\n");
    html.push_str("<header class=\"nexus-core nexus-node\">\n");
    if p.profile_image.trim().is_empty() {
        html.push_str(&format!(
            "<div class=\"core-orb core-orb-fallback\">{}</div>\n",
            escape_html(&initials(&p.full_name))
        ));
    } else {
        html.push_str(&format!(
            "<img class=\"core-orb\" src=\"{}\" alt=\"{name}\">\n",
            escape_html(&p.profile_image)
        ));
    }
    html.push_str(&format!("<h1>{name}</h1>\n"));
    html.push_str(&format!(
        "<p class=\"core-role\">{}</p>\n",
        escape_html(&p.title)
    ));
    html.push_str(&format!(
        "<p class=\"core-about\">{}</p>\n",
        escape_html(&p.about)
    ));
    html.push_str("<div class=\"core-contact\">\n");
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
    html.push_str("</div>\n</header>\n");

    if sections.skills {
        html.push_str("<section id=\"skills\" class=\"cluster nexus-node\">\n<h2>Signal strengths</h2>\n<div class=\"signal-grid\">\n");
        for skill in &profile.skills {
            html.push_str(&format!(
                "<div class=\"signal\">\n<span class=\"signal-name\">{}</span>\n<span class=\"signal-band\">{}</span>\n<div class=\"signal-track\"><div class=\"signal-beam\" data-progress=\"{}\"></div></div>\n</div>\n",
                escape_html(&skill.name),
                escape_html(&skill.category),
                skill.proficiency.percent()
            ));
        }
        html.push_str("</div>\n</section>\n");
    }

    if sections.education {
        html.push_str("<section id=\"education\" class=\"cluster nexus-node\">\n<h2>Origins</h2>\n");
        for entry in &profile.education {
            html.push_str(&format!(
                "<div class=\"origin\">\n<h3>{}</h3>\n<p class=\"origin-meta\">{} <span>{}</span></p>\n",
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
        html.push_str("<section id=\"projects\" class=\"cluster nexus-node\">\n<h2>Launched</h2>\n<div class=\"satellite-grid\">\n");
        for project in &profile.projects {
            html.push_str("<article class=\"satellite\">\n");
            if !project.image.trim().is_empty() {
                html.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\">\n",
                    escape_html(&project.image),
                    escape_html(&project.title)
                ));
            }
            html.push_str(&format!("<h3>{}</h3>\n", escape_html(&project.title)));
            html.push_str(&format!("<p>{}</p>\n", escape_html(&project.description)));
            html.push_str("<div class=\"payload-row\">\n");
            for tech in split_technologies(&project.technologies) {
                html.push_str(&format!(
                    "<span class=\"payload\">{}</span>\n",
                    escape_html(&tech)
                ));
            }
            html.push_str("</div>\n");
            if !project.github.trim().is_empty() {
                html.push_str(&format!(
                    "<a class=\"satellite-link\" href=\"{}\">Source</a>\n",
                    escape_html(&project.github)
                ));
            }
            if !project.demo.trim().is_empty() {
                html.push_str(&format!(
                    "<a class=\"satellite-link\" href=\"{}\">Visit</a>\n",
                    escape_html(&project.demo)
                ));
            }
            html.push_str("</article>\n");
        }
        html.push_str("</div>\n</section>\n");
    }

    if sections.social {
        html.push_str("<footer class=\"cluster nexus-node\">\n<h2>Transmissions</h2>\n<div class=\"beacon-row\">\n");
        for (label, url) in profile.social.entries() {
            html.push_str(&format!(
                "<a class=\"beacon\" href=\"{}\">{label}</a>\n",
                escape_html(url)
            ));
        }
        html.push_str("</div>\n</footer>\n");
    }

    html.push_str("</div>\n");
    html.push_str(&document_close());
    html
}

fn style(sections: Sections) -> String {
    let mut css = String::from(
        "/* Particle Nexus template */\n\
* { margin: 0; padding: 0; box-sizing: border-box; }\n\
body.particle-nexus { font-family: 'Segoe UI', system-ui, sans-serif; background: radial-gradient(ellipse at top, #0d1033 0%, #050510 65%); color: #dfe4ff; line-height: 1.65; min-height: 100vh; }\n\
#nexus-canvas { position: fixed; inset: 0; width: 100%; height: 100%; z-index: 0; }\n\
.constellation { position: relative; z-index: 1; max-width: 860px; margin: 0 auto; padding: 3.5rem 1.25rem; }\n\
.nexus-core { text-align: center; margin-bottom: 3rem; }\n\
.core-orb { width: 125px; height: 125px; border-radius: 50%; object-fit: cover; border: 2px solid #5eead4; box-shadow: 0 0 26px rgba(94,234,212,0.5); }\n\
.core-orb-fallback { display: inline-flex; align-items: center; justify-content: center; background: #1c2260; color: #5eead4; font-size: 2.5rem; font-weight: 700; }\n\
.nexus-core h1 { margin-top: 1rem; font-size: 2.5rem; }\n\
.core-role { color: #818cf8; font-size: 1.2rem; }\n\
.core-about { max-width: 58ch; margin: 0.9rem auto 0; color: #aab3e8; }\n\
.core-contact { margin-top: 1.25rem; display: flex; gap: 1.25rem; justify-content: center; flex-wrap: wrap; }\n\
.core-contact a { color: #5eead4; }\n\
.core-contact span { color: #aab3e8; }\n\
.cluster { margin-bottom: 2.75rem; padding: 1.75rem; border-radius: 16px; background: rgba(18,22,64,0.55); border: 1px solid rgba(129,140,248,0.3); }\n\
.cluster h2 { color: #5eead4; margin-bottom: 1.25rem; }\n\
.nexus-node { opacity: 0; transform: translateY(22px); transition: opacity 0.75s ease, transform 0.75s ease; }\n\
.nexus-node.visible { opacity: 1; transform: none; }\n",
    );
    if sections.education {
        css.push_str(
            ".origin { margin-bottom: 1.25rem; }\n\
.origin-meta { color: #818cf8; }\n\
.origin-meta span { color: #5eead4; margin-left: 0.5rem; }\n",
        );
    }
    if sections.skills {
        css.push_str(
            ".signal-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(230px, 1fr)); gap: 1.1rem; }\n\
.signal-name { font-weight: 600; margin-right: 0.4rem; }\n\
.signal-band { color: #818cf8; font-size: 0.85rem; }\n\
.signal-track { margin-top: 0.45rem; height: 7px; border-radius: 4px; background: rgba(129,140,248,0.2); overflow: hidden; }\n\
.signal-beam { height: 100%; width: 0; border-radius: 4px; background: linear-gradient(90deg, #5eead4, #818cf8); box-shadow: 0 0 10px rgba(94,234,212,0.6); transition: width 1.15s ease; }\n",
        );
    }
    if sections.projects {
        css.push_str(
            ".satellite-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(265px, 1fr)); gap: 1.25rem; }\n\
.satellite { background: rgba(13,16,51,0.8); border-radius: 12px; padding: 1.15rem; border: 1px solid rgba(94,234,212,0.25); }\n\
.satellite img { width: 100%; border-radius: 8px; margin-bottom: 0.6rem; }\n\
.payload-row { display: flex; flex-wrap: wrap; gap: 0.4rem; margin: 0.6rem 0; }\n\
.payload { padding: 0.12rem 0.6rem; border-radius: 999px; background: rgba(94,234,212,0.15); color: #5eead4; font-size: 0.8rem; }\n\
.satellite-link { color: #818cf8; font-weight: 600; margin-right: 0.9rem; }\n",
        );
    }
    if sections.social {
        css.push_str(
            ".beacon-row { display: flex; gap: 1rem; flex-wrap: wrap; }\n\
.beacon { padding: 0.5rem 1.3rem; border-radius: 999px; border: 1px solid #5eead4; color: #5eead4; text-decoration: none; }\n\
.beacon:hover { background: rgba(94,234,212,0.15); }\n",
        );
    }
    css
}

fn script(sections: Sections) -> String {
    let mut js = String::from("// Particle Nexus template behavior\n");
    js.push_str(&reveal_script(".nexus-node", "0.15"));
    if sections.skills {
        js.push_str(&progress_script(".signal-beam"));
    }
    js.push_str(smooth_scroll_script());
    js
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::tests::sample_profile;

    #[test]
    fn test_canvas_mount_point_always_emitted() {
        let mut profile = sample_profile();
        profile.skills.clear();
        profile.projects.clear();
        let bundle = ParticleNexusTemplate.compile(&profile);
        assert!(bundle.markup.contains("id=\"nexus-canvas\""));
        assert!(bundle.style.contains("#nexus-canvas"));
        // Effect engine is external: the compiled script never draws on it.
        assert!(!bundle.script.contains("nexus-canvas"));
    }

    #[test]
    fn test_origin_styles_gated_on_education() {
        let mut profile = sample_profile();
        profile.education.clear();
        let bundle = ParticleNexusTemplate.compile(&profile);
        assert!(!bundle.markup.contains("class=\"origin\""));
        assert!(!bundle.style.contains(".origin"));
    }

    #[test]
    fn test_signal_beams_gated_on_skills() {
        let mut profile = sample_profile();
        profile.skills.clear();
        let bundle = ParticleNexusTemplate.compile(&profile);
        assert!(!bundle.markup.contains("signal-beam"));
        assert!(!bundle.style.contains(".signal-beam"));
        assert!(!bundle.script.contains(".signal-beam"));
    }
}
