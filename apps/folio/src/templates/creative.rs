//! Creative variant: split hero, coral/violet palette, tilted cards.

use crate::models::profile::Profile;
use crate::templates::shared::{
    document_close, document_open, escape_html, initials, progress_script, reveal_script,
    smooth_scroll_script, split_technologies, Sections,
};
use crate::templates::{Bundle, TemplateCompiler};

pub struct CreativeTemplate;

impl TemplateCompiler for CreativeTemplate {
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
    let mut html = document_open(&p.full_name, "creative");

    // Split hero: portrait panel on the left, copy on the right.
    html.push_str("<header class=\"splash tilt\">\n<div class=\"splash-portrait\">\n");
    if p.profile_image.trim().is_empty() {
        html.push_str(&format!(
            "<div class=\"portrait portrait-fallback\">{}</div>\n",
            escape_html(&initials(&p.full_name))
        ));
    } else {
        html.push_str(&format!(
            "<img class=\"portrait\" src=\"{}\" alt=\"{name}\">\n",
            escape_html(&p.profile_image)
        ));
    }
    html.push_str("</div>\n<div class=\"splash-copy\">\n");
    html.push_str(&format!("<h1>{name}</h1>\n"));
    html.push_str(&format!(
        "<p class=\"headline\">{}</p>\n",
        escape_html(&p.title)
    ));
    html.push_str(&format!("<p class=\"bio\">{}</p>\n", escape_html(&p.about)));
    html.push_str(&format!(
        "<p class=\"reach\"><a href=\"mailto:{0}\">{0}</a>",
        escape_html(&p.email)
    ));
    if !p.location.trim().is_empty() {
        html.push_str(&format!(
            " <span class=\"dot\">&bull;</span> {}",
            escape_html(&p.location)
        ));
    }
    if !p.phone.trim().is_empty() {
        html.push_str(&format!(
            " <span class=\"dot\">&bull;</span> {}",
            escape_html(&p.phone)
        ));
    }
    html.push_str("</p>\n</div>\n</header>\n<main>\n");

    if sections.skills {
        html.push_str(
            "<section id=\"skills\" class=\"band tilt\">\n<h2>What I do</h2>\n<div class=\"talent-wall\">\n",
        );
        for skill in &profile.skills {
            html.push_str(&format!(
                "<div class=\"talent\">\n<span class=\"talent-name\">{}</span>\n<span class=\"talent-tag\">{}</span>\n<div class=\"talent-bar\"><div class=\"talent-fill\" data-progress=\"{}\"></div></div>\n</div>\n",
                escape_html(&skill.name),
                escape_html(&skill.category),
                skill.proficiency.percent()
            ));
        }
        html.push_str("</div>\n</section>\n");
    }

    if sections.education {
        html.push_str("<section id=\"education\" class=\"band tilt\">\n<h2>Where I learned</h2>\n");
        for entry in &profile.education {
            html.push_str(&format!(
                "<div class=\"chapter\">\n<h3>{} <small>{}</small></h3>\n<p class=\"chapter-degree\">{}</p>\n",
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
            "<section id=\"projects\" class=\"band tilt\">\n<h2>Things I made</h2>\n<div class=\"shelf\">\n",
        );
        for (index, project) in profile.projects.iter().enumerate() {
            // Alternating tilt keeps the shelf deterministic per input order.
            let lean = if index % 2 == 0 { "lean-left" } else { "lean-right" };
            html.push_str(&format!("<article class=\"piece {lean}\">\n"));
            if !project.image.trim().is_empty() {
                html.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\">\n",
                    escape_html(&project.image),
                    escape_html(&project.title)
                ));
            }
            html.push_str(&format!("<h3>{}</h3>\n", escape_html(&project.title)));
            html.push_str(&format!("<p>{}</p>\n", escape_html(&project.description)));
            html.push_str("<p class=\"materials\">");
            let techs = split_technologies(&project.technologies);
            html.push_str(&escape_html(&techs.join(" + ")));
            html.push_str("</p>\n");
            if !project.github.trim().is_empty() {
                html.push_str(&format!(
                    "<a class=\"piece-link\" href=\"{}\">view source</a>\n",
                    escape_html(&project.github)
                ));
            }
            if !project.demo.trim().is_empty() {
                html.push_str(&format!(
                    "<a class=\"piece-link\" href=\"{}\">try it</a>\n",
                    escape_html(&project.demo)
                ));
            }
            html.push_str("</article>\n");
        }
        html.push_str("</div>\n</section>\n");
    }

    if sections.social {
        html.push_str("<footer class=\"signoff tilt\">\n<h2>Say hello</h2>\n");
        for (label, url) in profile.social.entries() {
            html.push_str(&format!(
                "<a class=\"hello-link\" href=\"{}\">{label}</a>\n",
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
        "/* Creative template */\n\
* { margin: 0; padding: 0; box-sizing: border-box; }\n\
body.creative { font-family: 'Trebuchet MS', Verdana, sans-serif; background: #fdf6f0; color: #2d2438; line-height: 1.65; }\n\
.splash { display: grid; grid-template-columns: 1fr 2fr; gap: 2rem; align-items: center; padding: 4rem 2rem; background: linear-gradient(120deg, #ff6b6b 0%, #6c5ce7 100%); color: #fff; clip-path: polygon(0 0, 100% 0, 100% 92%, 0 100%); }\n\
.portrait { width: 180px; height: 180px; border-radius: 30% 70% 70% 30% / 30% 30% 70% 70%; object-fit: cover; margin: 0 auto; display: block; }\n\
.portrait-fallback { display: flex; align-items: center; justify-content: center; background: rgba(255,255,255,0.25); font-size: 3rem; font-weight: 700; }\n\
.splash h1 { font-size: 2.8rem; }\n\
.headline { font-size: 1.3rem; opacity: 0.9; margin: 0.25rem 0 1rem; }\n\
.bio { max-width: 48ch; }\n\
.reach { margin-top: 1.25rem; }\n\
.reach a { color: #fff; font-weight: 700; }\n\
.dot { opacity: 0.6; }\n\
.band { max-width: 900px; margin: 0 auto; padding: 3rem 1.5rem; }\n\
.band h2 { font-size: 2rem; color: #6c5ce7; margin-bottom: 1.5rem; transform: rotate(-1.5deg); display: inline-block; }\n\
.tilt { opacity: 0; transform: translateY(30px) rotate(0.5deg); transition: all 0.7s cubic-bezier(0.22, 1, 0.36, 1); }\n\
.tilt.visible { opacity: 1; transform: none; }\n",
    );
    if sections.education {
        css.push_str(
            ".chapter { margin-bottom: 1.5rem; padding-left: 1rem; border-left: 4px solid #ff6b6b; }\n\
.chapter small { color: #ff6b6b; }\n\
.chapter-degree { color: #6c5ce7; font-weight: 700; }\n",
        );
    }
    if sections.skills {
        css.push_str(
            ".talent-wall { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1.25rem; }\n\
.talent { background: #fff; border-radius: 16px; padding: 1rem; box-shadow: 4px 4px 0 #ff6b6b; }\n\
.talent-name { font-weight: 700; display: block; }\n\
.talent-tag { color: #6c5ce7; font-size: 0.85rem; }\n\
.talent-bar { margin-top: 0.6rem; height: 10px; background: #f0e9ff; border-radius: 5px; overflow: hidden; }\n\
.talent-fill { height: 100%; width: 0; background: linear-gradient(90deg, #ff6b6b, #6c5ce7); transition: width 1s ease-out; }\n",
        );
    }
    if sections.projects {
        css.push_str(
            ".shelf { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1.5rem; }\n\
.piece { background: #fff; border-radius: 16px; padding: 1.25rem; box-shadow: 6px 6px 0 #6c5ce7; }\n\
.piece img { width: 100%; border-radius: 10px; margin-bottom: 0.75rem; }\n\
.piece.lean-left { transform: rotate(-1deg); }\n\
.piece.lean-right { transform: rotate(1deg); }\n\
.materials { color: #6c5ce7; font-size: 0.9rem; margin: 0.5rem 0; }\n\
.piece-link { color: #ff6b6b; font-weight: 700; margin-right: 1rem; }\n",
        );
    }
    if sections.social {
        css.push_str(
            ".signoff { text-align: center; padding: 3rem 1.5rem 4rem; }\n\
.signoff h2 { color: #ff6b6b; }\n\
.hello-link { display: inline-block; margin: 0.5rem 0.75rem 0; padding: 0.5rem 1.25rem; border: 2px solid #6c5ce7; border-radius: 999px; color: #6c5ce7; text-decoration: none; font-weight: 700; }\n\
.hello-link:hover { background: #6c5ce7; color: #fff; }\n",
        );
    }
    css
}

fn script(sections: Sections) -> String {
    let mut js = String::from("// Creative template behavior\n");
    js.push_str(&reveal_script(".tilt", "0.2"));
    if sections.skills {
        js.push_str(&progress_script(".talent-fill"));
    }
    js.push_str(smooth_scroll_script());
    js
}
