//! Gradient Paradise variant: animated pastel gradient wash behind white
//! rounded cards.

use crate::models::profile::Profile;
use crate::templates::shared::{
    document_close, document_open, escape_html, initials, progress_script, reveal_script,
    smooth_scroll_script, split_technologies, Sections,
};
use crate::templates::{Bundle, TemplateCompiler};

pub struct GradientParadiseTemplate;

impl TemplateCompiler for GradientParadiseTemplate {
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
    let mut html = document_open(&p.full_name, "gradient-paradise");

    html.push_str("<main class=\"stream\">\n");

    html.push_str("<section id=\"hello\" class=\"float-card\">\n");
    if p.profile_image.trim().is_empty() {
        html.push_str(&format!(
            "<div class=\"sun sun-fallback\">{}</div>\n",
            escape_html(&initials(&p.full_name))
        ));
    } else {
        html.push_str(&format!(
            "<img class=\"sun\" src=\"{}\" alt=\"{name}\">\n",
            escape_html(&p.profile_image)
        ));
    }
    html.push_str(&format!("<h1>{name}</h1>\n"));
    html.push_str(&format!(
        "<p class=\"calling\">{}</p>\n",
        escape_html(&p.title)
    ));
    html.push_str(&format!("<p>{}</p>\n", escape_html(&p.about)));
    html.push_str("<p class=\"hello-contact\">\n");
    html.push_str(&format!(
        "<a href=\"mailto:{0}\">{0}</a>",
        escape_html(&p.email)
    ));
    if !p.location.trim().is_empty() {
        html.push_str(&format!(" &mdash; {}", escape_html(&p.location)));
    }
    if !p.phone.trim().is_empty() {
        html.push_str(&format!(" &mdash; {}", escape_html(&p.phone)));
    }
    html.push_str("\n</p>\n</section>\n");

    if sections.skills {
        html.push_str("<section id=\"skills\" class=\"float-card\">\n<h2>Skills</h2>\n<div class=\"ribbon-list\">\n");
        for skill in &profile.skills {
            html.push_str(&format!(
                "<div class=\"ribbon\">\n<span class=\"ribbon-name\">{}</span>\n<span class=\"ribbon-cat\">{}</span>\n<div class=\"ribbon-track\"><div class=\"ribbon-glow\" data-progress=\"{}\"></div></div>\n</div>\n",
                escape_html(&skill.name),
                escape_html(&skill.category),
                skill.proficiency.percent()
            ));
        }
        html.push_str("</div>\n</section>\n");
    }

    if sections.education {
        html.push_str("<section id=\"education\" class=\"float-card\">\n<h2>Education</h2>\n");
        for entry in &profile.education {
            html.push_str(&format!(
                "<div class=\"milestone\">\n<h3>{}</h3>\n<p class=\"milestone-meta\">{} &mdash; {}</p>\n",
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
        html.push_str("<section id=\"projects\" class=\"float-card\">\n<h2>Projects</h2>\n<div class=\"postcard-grid\">\n");
        for project in &profile.projects {
            html.push_str("<article class=\"postcard\">\n");
            if !project.image.trim().is_empty() {
                html.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\">\n",
                    escape_html(&project.image),
                    escape_html(&project.title)
                ));
            }
            html.push_str(&format!("<h3>{}</h3>\n", escape_html(&project.title)));
            html.push_str(&format!("<p>{}</p>\n", escape_html(&project.description)));
            html.push_str("<div class=\"pill-row\">\n");
            for tech in split_technologies(&project.technologies) {
                html.push_str(&format!(
                    "<span class=\"pill\">{}</span>\n",
                    escape_html(&tech)
                ));
            }
            html.push_str("</div>\n");
            if !project.github.trim().is_empty() {
                html.push_str(&format!(
                    "<a class=\"postcard-link\" href=\"{}\">Code</a>\n",
                    escape_html(&project.github)
                ));
            }
            if !project.demo.trim().is_empty() {
                html.push_str(&format!(
                    "<a class=\"postcard-link\" href=\"{}\">Demo</a>\n",
                    escape_html(&project.demo)
                ));
            }
            html.push_str("</article>\n");
        }
        html.push_str("</div>\n</section>\n");
    }

    if sections.social {
        html.push_str("<footer id=\"waves\" class=\"float-card\">\n<h2>Keep in touch</h2>\n<div class=\"wave-row\">\n");
        for (label, url) in profile.social.entries() {
            html.push_str(&format!(
                "<a class=\"wave\" href=\"{}\">{label}</a>\n",
                escape_html(url)
            ));
        }
        html.push_str("</div>\n</footer>\n");
    }

    html.push_str("</main>\n");
    html.push_str(&document_close());
    html
}

fn style(sections: Sections) -> String {
    let mut css = String::from(
        "/* Gradient Paradise template */\n\
* { margin: 0; padding: 0; box-sizing: border-box; }\n\
body.gradient-paradise { font-family: 'Comic Sans MS', 'Segoe UI', sans-serif; color: #433659; line-height: 1.65; background: linear-gradient(270deg, #ffd3e0, #c9f0ff, #e6d3ff, #d3ffe8); background-size: 800% 800%; animation: drift 22s ease infinite; }\n\
@keyframes drift { 0% { background-position: 0% 50%; } 50% { background-position: 100% 50%; } 100% { background-position: 0% 50%; } }\n\
.stream { max-width: 820px; margin: 0 auto; padding: 3rem 1.25rem; display: flex; flex-direction: column; gap: 1.75rem; }\n\
.float-card { background: rgba(255,255,255,0.9); border-radius: 24px; padding: 2rem; box-shadow: 0 14px 40px rgba(120,90,200,0.18); opacity: 0; transform: translateY(26px); transition: opacity 0.7s ease, transform 0.7s ease; }\n\
.float-card.visible { opacity: 1; transform: none; }\n\
.float-card h2 { color: #8e6fd8; margin-bottom: 1.25rem; }\n\
.sun { width: 110px; height: 110px; border-radius: 50%; object-fit: cover; box-shadow: 0 0 0 6px #ffd3e0; }\n\
.sun-fallback { display: inline-flex; align-items: center; justify-content: center; background: #8e6fd8; color: #fff; font-size: 2.4rem; font-weight: 700; }\n\
.calling { color: #8e6fd8; font-size: 1.2rem; margin: 0.25rem 0 0.75rem; }\n\
.hello-contact { margin-top: 1rem; }\n\
.hello-contact a { color: #e0699d; font-weight: 700; }\n",
    );
    if sections.education {
        css.push_str(
            ".milestone { margin-bottom: 1.25rem; }\n\
.milestone-meta { color: #8e6fd8; font-size: 0.95rem; }\n",
        );
    }
    if sections.skills {
        css.push_str(
            ".ribbon-list { display: flex; flex-direction: column; gap: 0.9rem; }\n\
.ribbon-name { font-weight: 700; margin-right: 0.5rem; }\n\
.ribbon-cat { color: #8e6fd8; font-size: 0.85rem; }\n\
.ribbon-track { margin-top: 0.35rem; height: 12px; border-radius: 6px; background: #f1eafd; overflow: hidden; }\n\
.ribbon-glow { height: 100%; width: 0; border-radius: 6px; background: linear-gradient(90deg, #ffb3cd, #8e6fd8); transition: width 1.2s ease-in-out; }\n",
        );
    }
    if sections.projects {
        css.push_str(
            ".postcard-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1.25rem; }\n\
.postcard { background: #fff; border-radius: 18px; padding: 1.2rem; box-shadow: 0 8px 22px rgba(120,90,200,0.12); }\n\
.postcard img { width: 100%; border-radius: 12px; margin-bottom: 0.6rem; }\n\
.pill-row { display: flex; flex-wrap: wrap; gap: 0.4rem; margin: 0.6rem 0; }\n\
.pill { background: #ffe2ec; color: #e0699d; border-radius: 999px; padding: 0.15rem 0.7rem; font-size: 0.8rem; }\n\
.postcard-link { color: #8e6fd8; font-weight: 700; margin-right: 1rem; }\n",
        );
    }
    if sections.social {
        css.push_str(
            ".wave-row { display: flex; gap: 1rem; flex-wrap: wrap; }\n\
.wave { padding: 0.5rem 1.4rem; border-radius: 999px; background: linear-gradient(90deg, #ffb3cd, #b3d9ff); color: #433659; text-decoration: none; font-weight: 700; }\n",
        );
    }
    css
}

fn script(sections: Sections) -> String {
    let mut js = String::from("// Gradient Paradise template behavior\n");
    js.push_str(&reveal_script(".float-card", "0.18"));
    if sections.skills {
        js.push_str(&progress_script(".ribbon-glow"));
    }
    js.push_str(smooth_scroll_script());
    js
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::tests::sample_profile;

    #[test]
    fn test_animated_background_always_present() {
        let bundle = GradientParadiseTemplate.compile(&sample_profile());
        assert!(bundle.style.contains("@keyframes drift"));
        assert!(bundle.markup.contains("class=\"stream\""));
    }

    #[test]
    fn test_milestone_styles_gated_on_education() {
        let mut profile = sample_profile();
        profile.education.clear();
        let bundle = GradientParadiseTemplate.compile(&profile);
        assert!(!bundle.markup.contains("milestone"));
        assert!(!bundle.style.contains(".milestone"));
    }

    #[test]
    fn test_ribbons_gated_on_skills() {
        let mut profile = sample_profile();
        profile.skills.clear();
        let bundle = GradientParadiseTemplate.compile(&profile);
        assert!(!bundle.markup.contains("ribbon"));
        assert!(!bundle.style.contains(".ribbon-glow"));
        assert!(!bundle.script.contains(".ribbon-glow"));
    }
}
