//! Cyberpunk variant: terminal styling, yellow/cyan on black, scanline
//! overlay, uppercase headings.

use crate::models::profile::Profile;
use crate::templates::shared::{
    document_close, document_open, escape_html, progress_script, reveal_script,
    smooth_scroll_script, split_technologies, Sections,
};
use crate::templates::{Bundle, TemplateCompiler};

pub struct CyberpunkTemplate;

impl TemplateCompiler for CyberpunkTemplate {
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
    let mut html = document_open(&p.full_name, "cyberpunk");

    // Purely decorative overlay; the animation itself lives in the style doc.
    html.push_str("<div class=\"scanlines\" aria-hidden=\"true\"></div>\n");

    html.push_str("<header class=\"terminal cp-block\">\n");
    html.push_str(&format!(
        "<p class=\"prompt\">&gt; whoami</p>\n<h1 class=\"ident\">{name}</h1>\n"
    ));
    html.push_str(&format!(
        "<p class=\"ident-role\">{}</p>\n",
        escape_html(&p.title)
    ));
    html.push_str(&format!(
        "<p class=\"prompt\">&gt; cat about.txt</p>\n<p class=\"readout\">{}</p>\n",
        escape_html(&p.about)
    ));
    html.push_str("<p class=\"prompt\">&gt; contact --list</p>\n<ul class=\"readout-list\">\n");
    html.push_str(&format!(
        "<li>email: <a href=\"mailto:{0}\">{0}</a></li>\n",
        escape_html(&p.email)
    ));
    if !p.phone.trim().is_empty() {
        html.push_str(&format!("<li>phone: {}</li>\n", escape_html(&p.phone)));
    }
    if !p.location.trim().is_empty() {
        html.push_str(&format!("<li>loc: {}</li>\n", escape_html(&p.location)));
    }
    html.push_str("</ul>\n</header>\n<main>\n");

    if sections.skills {
        html.push_str(
            "<section id=\"skills\" class=\"terminal cp-block\">\n<h2 class=\"cp-heading\">SKILL.MATRIX</h2>\n",
        );
        for skill in &profile.skills {
            html.push_str(&format!(
                "<div class=\"matrix-row\">\n<span class=\"matrix-key\">{}</span>\n<span class=\"matrix-cat\">{}</span>\n<div class=\"matrix-gauge\"><div class=\"matrix-level\" data-progress=\"{}\"></div></div>\n</div>\n",
                escape_html(&skill.name),
                escape_html(&skill.category),
                skill.proficiency.percent()
            ));
        }
        html.push_str("</section>\n");
    }

    if sections.education {
        html.push_str(
            "<section id=\"education\" class=\"terminal cp-block\">\n<h2 class=\"cp-heading\">EDU.RECORDS</h2>\n",
        );
        for entry in &profile.education {
            html.push_str(&format!(
                "<div class=\"record\">\n<p class=\"record-head\">[{}] {}</p>\n<p class=\"record-degree\">{}</p>\n",
                escape_html(&entry.year),
                escape_html(&entry.institution),
                escape_html(&entry.degree)
            ));
            if !entry.description.is_empty() {
                html.push_str(&format!(
                    "<p class=\"record-note\">{}</p>\n",
                    escape_html(&entry.description)
                ));
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    if sections.projects {
        html.push_str(
            "<section id=\"projects\" class=\"terminal cp-block\">\n<h2 class=\"cp-heading\">PROJECT.DB</h2>\n",
        );
        for project in &profile.projects {
            html.push_str("<article class=\"dossier\">\n");
            html.push_str(&format!(
                "<h3 class=\"dossier-title\">{}</h3>\n",
                escape_html(&project.title)
            ));
            if !project.image.trim().is_empty() {
                html.push_str(&format!(
                    "<img class=\"dossier-shot\" src=\"{}\" alt=\"{}\">\n",
                    escape_html(&project.image),
                    escape_html(&project.title)
                ));
            }
            html.push_str(&format!("<p>{}</p>\n", escape_html(&project.description)));
            html.push_str("<p class=\"stack-line\">stack:");
            for tech in split_technologies(&project.technologies) {
                html.push_str(&format!(" <span class=\"stack-item\">{}</span>", escape_html(&tech)));
            }
            html.push_str("</p>\n");
            if !project.github.trim().is_empty() {
                html.push_str(&format!(
                    "<a class=\"dossier-link\" href=\"{}\">&gt;&gt; source</a>\n",
                    escape_html(&project.github)
                ));
            }
            if !project.demo.trim().is_empty() {
                html.push_str(&format!(
                    "<a class=\"dossier-link\" href=\"{}\">&gt;&gt; deploy</a>\n",
                    escape_html(&project.demo)
                ));
            }
            html.push_str("</article>\n");
        }
        html.push_str("</section>\n");
    }

    if sections.social {
        html.push_str(
            "<footer class=\"terminal cp-block\">\n<h2 class=\"cp-heading\">NET.LINKS</h2>\n<ul class=\"readout-list\">\n",
        );
        for (label, url) in profile.social.entries() {
            html.push_str(&format!(
                "<li>{}: <a href=\"{}\">{}</a></li>\n",
                label.to_lowercase(),
                escape_html(url),
                escape_html(url)
            ));
        }
        html.push_str("</ul>\n</footer>\n");
    }

    html.push_str("</main>\n");
    html.push_str(&document_close());
    html
}

fn style(sections: Sections) -> String {
    let mut css = String::from(
        "/* Cyberpunk template */\n\
* { margin: 0; padding: 0; box-sizing: border-box; }\n\
body.cyberpunk { font-family: 'Lucida Console', monospace; background: #050505; color: #fcee0a; line-height: 1.6; }\n\
.scanlines { position: fixed; inset: 0; pointer-events: none; background: repeating-linear-gradient(0deg, rgba(0,0,0,0.25) 0, rgba(0,0,0,0.25) 1px, transparent 1px, transparent 3px); z-index: 5; }\n\
.terminal { max-width: 820px; margin: 2rem auto; padding: 1.5rem; border: 1px solid #fcee0a; background: #0a0a08; box-shadow: 0 0 0 4px #050505, 0 0 24px rgba(252,238,10,0.15); }\n\
.prompt { color: #00f0ff; margin-top: 1rem; }\n\
.ident { font-size: 2.4rem; text-transform: uppercase; letter-spacing: 0.12em; }\n\
.ident-role { color: #00f0ff; text-transform: uppercase; }\n\
.readout { color: #e8e6c9; max-width: 70ch; }\n\
.readout-list { list-style: none; color: #e8e6c9; }\n\
.readout-list a { color: #00f0ff; }\n\
.cp-heading { color: #00f0ff; letter-spacing: 0.2em; margin-bottom: 1rem; }\n\
.cp-block { opacity: 0; transform: translateX(-14px); transition: opacity 0.5s linear, transform 0.5s linear; }\n\
.cp-block.visible { opacity: 1; transform: none; }\n",
    );
    if sections.education {
        css.push_str(
            ".record { margin-bottom: 1rem; }\n\
.record-head { font-weight: 700; }\n\
.record-degree { color: #00f0ff; }\n\
.record-note { color: #e8e6c9; }\n",
        );
    }
    if sections.skills {
        css.push_str(
            ".matrix-row { display: grid; grid-template-columns: 1fr auto 160px; align-items: center; gap: 0.8rem; margin-bottom: 0.7rem; }\n\
.matrix-cat { color: #00f0ff; font-size: 0.85rem; }\n\
.matrix-gauge { height: 10px; border: 1px solid #fcee0a; }\n\
.matrix-level { height: 100%; width: 0; background: repeating-linear-gradient(90deg, #fcee0a 0, #fcee0a 6px, transparent 6px, transparent 9px); transition: width 1.4s steps(16); }\n",
        );
    }
    if sections.projects {
        css.push_str(
            ".dossier { border-top: 1px dashed #fcee0a; padding: 1rem 0; }\n\
.dossier-title { text-transform: uppercase; }\n\
.dossier-shot { width: 100%; max-width: 420px; display: block; margin: 0.6rem 0; border: 1px solid #00f0ff; }\n\
.stack-line { color: #00f0ff; margin: 0.5rem 0; }\n\
.stack-item { color: #fcee0a; margin-right: 0.3rem; }\n\
.dossier-link { color: #00f0ff; margin-right: 1.25rem; text-decoration: none; }\n",
        );
    }
    css
}

fn script(sections: Sections) -> String {
    let mut js = String::from("// Cyberpunk template behavior\n");
    js.push_str(&reveal_script(".cp-block", "0.05"));
    if sections.skills {
        js.push_str(&progress_script(".matrix-level"));
    }
    js.push_str(smooth_scroll_script());
    js
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::tests::sample_profile;

    #[test]
    fn test_terminal_blocks_and_scanlines_present() {
        let bundle = CyberpunkTemplate.compile(&sample_profile());
        assert!(bundle.markup.contains("class=\"scanlines\""));
        assert!(bundle.markup.contains("&gt; whoami"));
        assert!(bundle.style.contains("repeating-linear-gradient"));
    }

    #[test]
    fn test_record_styles_gated_on_education() {
        let mut profile = sample_profile();
        profile.education.clear();
        let bundle = CyberpunkTemplate.compile(&profile);
        assert!(!bundle.markup.contains("EDU.RECORDS"));
        assert!(!bundle.style.contains(".record"));
        // The header contact list always renders, so its list styling stays.
        assert!(bundle.style.contains(".readout-list"));
    }

    #[test]
    fn test_matrix_hooks_gated_on_skills() {
        let mut profile = sample_profile();
        profile.skills.clear();
        let bundle = CyberpunkTemplate.compile(&profile);
        assert!(!bundle.markup.contains("matrix-level"));
        assert!(!bundle.style.contains(".matrix-level"));
        assert!(!bundle.script.contains(".matrix-level"));
    }
}
