//! Building blocks shared by all eight template compilers: escaping, the
//! sibling-resource placeholder tags, section gates, and the script
//! boilerplate fragments each variant parameterizes with its own selectors.

use crate::models::profile::Profile;

/// Stylesheet reference emitted into every markup document. The preview
/// collaborator substitutes this exact tag with an inline `<style>` block.
pub const STYLE_LINK_TAG: &str = r#"<link rel="stylesheet" href="style.css">"#;

/// Script reference emitted into every markup document. The preview
/// collaborator substitutes this exact tag with an inline `<script>` block.
pub const SCRIPT_SRC_TAG: &str = r#"<script src="script.js"></script>"#;

/// Escapes markup-significant characters in user-supplied text. Applied to
/// every free-text field and URL before interpolation, in text and
/// attribute positions alike.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Which conditional sections a profile produces. Computed once per compile
/// so markup, style, and script stay gated identically.
#[derive(Debug, Clone, Copy)]
pub struct Sections {
    pub skills: bool,
    pub education: bool,
    pub projects: bool,
    pub social: bool,
}

impl Sections {
    pub fn of(profile: &Profile) -> Self {
        Sections {
            skills: !profile.skills.is_empty(),
            education: !profile.education.is_empty(),
            projects: !profile.projects.is_empty(),
            social: !profile.social.is_empty(),
        }
    }
}

/// Splits the free-form comma-separated technologies field into chips.
pub fn split_technologies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Up-to-two-letter monogram for profiles without an image.
pub fn initials(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Opens a standalone document: doctype, head with the stylesheet link
/// placeholder, and the opening body tag.
pub fn document_open(title: &str, body_class: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>{}</title>\n{STYLE_LINK_TAG}\n</head>\n<body class=\"{body_class}\">\n",
        escape_html(title)
    )
}

/// Closes the document with the script placeholder in place.
pub fn document_close() -> String {
    format!("{SCRIPT_SRC_TAG}\n</body>\n</html>\n")
}

// ────────────────────────────────────────────────────────────────────────────
// Script boilerplate fragments
// ────────────────────────────────────────────────────────────────────────────

/// Scroll-triggered reveal: adds `visible` to every `selector` element as it
/// enters the viewport.
pub fn reveal_script(selector: &str, threshold: &str) -> String {
    format!(
        "const observer = new IntersectionObserver((entries) => {{\n  entries.forEach((entry) => {{\n    if (entry.isIntersecting) {{\n      entry.target.classList.add('visible');\n      observer.unobserve(entry.target);\n    }}\n  }});\n}}, {{ threshold: {threshold} }});\ndocument.querySelectorAll('{selector}').forEach((el) => observer.observe(el));\n"
    )
}

/// Progress-bar fill: animates each `selector` element to the width carried
/// by its `data-progress` attribute. Emitted only when the skills section is.
pub fn progress_script(selector: &str) -> String {
    format!(
        "window.addEventListener('load', () => {{\n  document.querySelectorAll('{selector}').forEach((bar) => {{\n    requestAnimationFrame(() => {{\n      bar.style.width = bar.dataset.progress + '%';\n    }});\n  }});\n}});\n"
    )
}

/// Smooth in-page anchor scrolling for the nav links the markup emits.
pub fn smooth_scroll_script() -> &'static str {
    "document.querySelectorAll('a[href^=\"#\"]').forEach((link) => {\n  link.addEventListener('click', (event) => {\n    const target = document.querySelector(link.getAttribute('href'));\n    if (target) {\n      event.preventDefault();\n      target.scrollIntoView({ behavior: 'smooth' });\n    }\n  });\n});\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_covers_all_significant_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Fish & 'Chips'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Fish &amp; &#39;Chips&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_split_technologies_trims_and_drops_empties() {
        assert_eq!(
            split_technologies(" Rust , , WASM,SQLite, "),
            vec!["Rust", "WASM", "SQLite"]
        );
        assert!(split_technologies("  ").is_empty());
    }

    #[test]
    fn test_initials_takes_first_two_words() {
        assert_eq!(initials("ada lovelace byron"), "AL");
        assert_eq!(initials("Plato"), "P");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_document_open_escapes_title_and_links_stylesheet() {
        let open = document_open("Ada <Lovelace>", "modern");
        assert!(open.starts_with("<!DOCTYPE html>"));
        assert!(open.contains("Ada &lt;Lovelace&gt;"));
        assert!(open.contains(STYLE_LINK_TAG));
        assert!(open.ends_with("<body class=\"modern\">\n"));
    }

    #[test]
    fn test_script_fragments_reference_given_selectors() {
        assert!(reveal_script(".reveal", "0.15").contains("querySelectorAll('.reveal')"));
        assert!(progress_script(".skill-progress").contains("dataset.progress"));
        assert!(smooth_scroll_script().contains("scrollIntoView"));
    }
}
