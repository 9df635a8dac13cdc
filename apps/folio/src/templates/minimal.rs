//! Minimal variant: monochrome, typographic, thin rules, no imagery.
//! Projects are presented as a "work" index; a profile with no projects
//! emits no work container at all.

use crate::models::profile::Profile;
use crate::templates::shared::{
    document_close, document_open, escape_html, progress_script, reveal_script,
    smooth_scroll_script, split_technologies, Sections,
};
use crate::templates::{Bundle, TemplateCompiler};

pub struct MinimalTemplate;

impl TemplateCompiler for MinimalTemplate {
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
    let mut html = document_open(&p.full_name, "minimal");

    html.push_str("<nav class=\"index-nav\">\n<a href=\"#intro\">intro</a>\n");
    if sections.skills {
        html.push_str("<a href=\"#skills\">skills</a>\n");
    }
    if sections.education {
        html.push_str("<a href=\"#education\">education</a>\n");
    }
    if sections.projects {
        html.push_str("<a href=\"#work\">work</a>\n");
    }
    if sections.social {
        html.push_str("<a href=\"#elsewhere\">elsewhere</a>\n");
    }
    html.push_str("</nav>\n<main class=\"page\">\n");

    html.push_str("<section id=\"intro\" class=\"block fade\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(&p.full_name)));
    html.push_str(&format!(
        "<p class=\"role\">{}</p>\n",
        escape_html(&p.title)
    ));
    html.push_str(&format!("<p>{}</p>\n", escape_html(&p.about)));
    html.push_str("<p class=\"contact\">\n");
    html.push_str(&format!(
        "<a href=\"mailto:{0}\">{0}</a>",
        escape_html(&p.email)
    ));
    if !p.phone.trim().is_empty() {
        html.push_str(&format!(" &middot; {}", escape_html(&p.phone)));
    }
    if !p.location.trim().is_empty() {
        html.push_str(&format!(" &middot; {}", escape_html(&p.location)));
    }
    html.push_str("\n</p>\n</section>\n");

    if sections.skills {
        html.push_str("<section id=\"skills\" class=\"block fade\">\n<h2>Skills</h2>\n<ul class=\"skill-list\">\n");
        for skill in &profile.skills {
            html.push_str(&format!(
                "<li>\n<span class=\"skill-label\">{} <em>{}</em></span>\n<span class=\"meter\"><span class=\"meter-fill\" data-progress=\"{}\"></span></span>\n</li>\n",
                escape_html(&skill.name),
                escape_html(&skill.category),
                skill.proficiency.percent()
            ));
        }
        html.push_str("</ul>\n</section>\n");
    }

    if sections.education {
        html.push_str("<section id=\"education\" class=\"block fade\">\n<h2>Education</h2>\n");
        for entry in &profile.education {
            html.push_str(&format!(
                "<div class=\"entry\">\n<p class=\"entry-head\">{} <span class=\"year\">{}</span></p>\n<p class=\"entry-sub\">{}</p>\n",
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
        html.push_str("<section id=\"work\" class=\"block fade\">\n<h2>Selected work</h2>\n");
        for project in &profile.projects {
            html.push_str(&format!(
                "<div class=\"entry\">\n<p class=\"entry-head\">{}</p>\n<p>{}</p>\n",
                escape_html(&project.title),
                escape_html(&project.description)
            ));
            let techs = split_technologies(&project.technologies);
            if !techs.is_empty() {
                html.push_str(&format!(
                    "<p class=\"entry-sub\">{}</p>\n",
                    escape_html(&techs.join(" / "))
                ));
            }
            let mut links = Vec::new();
            if !project.github.trim().is_empty() {
                links.push(format!(
                    "<a href=\"{}\">source</a>",
                    escape_html(&project.github)
                ));
            }
            if !project.demo.trim().is_empty() {
                links.push(format!("<a href=\"{}\">demo</a>", escape_html(&project.demo)));
            }
            if !links.is_empty() {
                html.push_str(&format!("<p class=\"entry-links\">{}</p>\n", links.join(" ")));
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    if sections.social {
        html.push_str("<section id=\"elsewhere\" class=\"block fade\">\n<h2>Elsewhere</h2>\n<p class=\"elsewhere-links\">\n");
        let links: Vec<String> = profile
            .social
            .entries()
            .into_iter()
            .map(|(label, url)| format!("<a href=\"{}\">{}</a>", escape_html(url), label.to_lowercase()))
            .collect();
        html.push_str(&links.join(" &middot; "));
        html.push_str("\n</p>\n</section>\n");
    }

    html.push_str("</main>\n");
    html.push_str(&document_close());
    html
}

fn style(sections: Sections) -> String {
    let mut css = String::from(
        "/* Minimal template */\n\
* { margin: 0; padding: 0; box-sizing: border-box; }\n\
body.minimal { font-family: Georgia, 'Times New Roman', serif; background: #fffefb; color: #222; line-height: 1.7; }\n\
.index-nav { padding: 2rem 0; text-align: center; letter-spacing: 0.08em; }\n\
.index-nav a { color: #222; text-decoration: none; margin: 0 0.8rem; border-bottom: 1px solid transparent; }\n\
.index-nav a:hover { border-bottom-color: #222; }\n\
.page { max-width: 640px; margin: 0 auto; padding: 0 1.25rem 4rem; }\n\
.block { padding: 2.5rem 0; border-top: 1px solid #e8e4da; }\n\
.block h1 { font-size: 2.2rem; font-weight: 400; }\n\
.block h2 { font-size: 1rem; text-transform: uppercase; letter-spacing: 0.18em; font-weight: 400; color: #777; margin-bottom: 1.25rem; }\n\
.role { font-style: italic; color: #555; margin: 0.25rem 0 1rem; }\n\
.contact a { color: #222; }\n\
.fade { opacity: 0; transition: opacity 0.8s ease; }\n\
.fade.visible { opacity: 1; }\n",
    );
    // Education and work share the entry layout.
    if sections.education || sections.projects {
        css.push_str(
            ".entry { margin-bottom: 1.5rem; }\n\
.entry-head { font-weight: 700; }\n\
.entry-sub, .year { color: #777; font-size: 0.95rem; }\n\
.entry-links a { color: #222; margin-right: 0.75rem; }\n",
        );
    }
    if sections.skills {
        css.push_str(
            ".skill-list { list-style: none; }\n\
.skill-list li { display: flex; justify-content: space-between; align-items: center; gap: 1rem; margin-bottom: 0.6rem; }\n\
.skill-label em { color: #777; font-size: 0.9rem; }\n\
.meter { flex: 0 0 180px; height: 2px; background: #e8e4da; display: inline-block; }\n\
.meter-fill { display: block; height: 100%; width: 0; background: #222; transition: width 1.2s ease; }\n",
        );
    }
    if sections.social {
        css.push_str(".elsewhere-links a { color: #222; }\n");
    }
    css
}

fn script(sections: Sections) -> String {
    let mut js = String::from("// Minimal template behavior\n");
    js.push_str(&reveal_script(".fade", "0.1"));
    if sections.skills {
        js.push_str(&progress_script(".meter-fill"));
    }
    js.push_str(smooth_scroll_script());
    js
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::tests::sample_profile;

    #[test]
    fn test_zero_projects_emits_no_work_container() {
        let mut profile = sample_profile();
        profile.projects.clear();
        let bundle = MinimalTemplate.compile(&profile);
        assert!(!bundle.markup.contains("id=\"work\""));
        assert!(!bundle.markup.contains("href=\"#work\""));
        assert!(!bundle.markup.contains("Selected work"));
    }

    #[test]
    fn test_projects_render_inside_work_section() {
        let bundle = MinimalTemplate.compile(&sample_profile());
        assert!(bundle.markup.contains("id=\"work\""));
        assert!(bundle.markup.contains("Engine Notes"));
        assert!(bundle.markup.contains("Rust / WASM / SQLite"));
    }

    #[test]
    fn test_entry_styles_dropped_without_education_or_work() {
        let mut profile = sample_profile();
        profile.education.clear();
        profile.projects.clear();
        let bundle = MinimalTemplate.compile(&profile);
        assert!(!bundle.style.contains(".entry"));

        // Either section alone keeps the shared layout rules.
        let mut profile = sample_profile();
        profile.education.clear();
        let bundle = MinimalTemplate.compile(&profile);
        assert!(bundle.style.contains(".entry"));
    }

    #[test]
    fn test_meter_fill_gated_with_skills() {
        let mut profile = sample_profile();
        profile.skills.clear();
        let bundle = MinimalTemplate.compile(&profile);
        assert!(!bundle.style.contains(".meter-fill"));
        assert!(!bundle.script.contains(".meter-fill"));
    }
}
