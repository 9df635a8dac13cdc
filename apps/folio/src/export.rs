//! Export interface for compiled bundles: the packaging collaborator that
//! writes the three documents plus a generated readme under fixed names,
//! and the preview inliner that folds style and script into the markup.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

use crate::models::profile::Profile;
use crate::templates::shared::{SCRIPT_SRC_TAG, STYLE_LINK_TAG};
use crate::templates::Bundle;

pub const MARKUP_FILE: &str = "index.html";
pub const STYLE_FILE: &str = "style.css";
pub const SCRIPT_FILE: &str = "script.js";
pub const README_FILE: &str = "README.md";

/// Writes the bundle into `dir` under the fixed file names, creating the
/// directory if needed.
pub fn write_bundle(dir: &Path, bundle: &Bundle, profile: &Profile) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let files = [
        (MARKUP_FILE, bundle.markup.as_str()),
        (STYLE_FILE, bundle.style.as_str()),
        (SCRIPT_FILE, bundle.script.as_str()),
    ];
    for (name, contents) in files {
        let path = dir.join(name);
        fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    }
    let readme = readme_for(profile);
    fs::write(dir.join(README_FILE), readme)
        .with_context(|| format!("Failed to write {}", dir.join(README_FILE).display()))?;
    info!("Exported bundle to {}", dir.display());
    Ok(())
}

/// Produces a single self-contained document by substituting the two
/// well-known sibling references with inline equivalents.
pub fn inline_preview(bundle: &Bundle) -> String {
    bundle
        .markup
        .replace(
            STYLE_LINK_TAG,
            &format!("<style>\n{}\n</style>", bundle.style),
        )
        .replace(
            SCRIPT_SRC_TAG,
            &format!("<script>\n{}\n</script>", bundle.script),
        )
}

fn readme_for(profile: &Profile) -> String {
    let variant = profile.selected_variant.unwrap_or_default();
    let name = if profile.personal.full_name.is_empty() {
        "this portfolio"
    } else {
        profile.personal.full_name.as_str()
    };
    format!(
        "# Portfolio website for {name}\n\n\
Template: {} (`{}`)\n\
Generated: {}\n\n\
## Files\n\n\
- `{MARKUP_FILE}` is the page itself; open it in any browser.\n\
- `{STYLE_FILE}` carries the template styling.\n\
- `{SCRIPT_FILE}` drives the scroll reveals and skill bars.\n\n\
Upload all three files to any static host to publish the site.\n",
        variant.label(),
        variant.id(),
        Utc::now().to_rfc3339()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::variant::Variant;
    use crate::templates;

    fn sample_bundle() -> (Bundle, Profile) {
        let mut profile = Profile::default();
        profile.personal.full_name = "Ada Lovelace".to_string();
        profile.personal.title = "Engineer".to_string();
        profile.personal.email = "ada@example.com".to_string();
        profile.personal.about = "About me.".to_string();
        profile.selected_variant = Some(Variant::Modern);
        let bundle = templates::compile(&profile, Variant::Modern);
        (bundle, profile)
    }

    #[test]
    fn test_write_bundle_creates_all_four_files() {
        let (bundle, profile) = sample_bundle();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("site");
        write_bundle(&out, &bundle, &profile).unwrap();
        for name in [MARKUP_FILE, STYLE_FILE, SCRIPT_FILE, README_FILE] {
            assert!(out.join(name).is_file(), "{name} must be written");
        }
        let markup = std::fs::read_to_string(out.join(MARKUP_FILE)).unwrap();
        assert_eq!(markup, bundle.markup);
        let readme = std::fs::read_to_string(out.join(README_FILE)).unwrap();
        assert!(readme.contains("Ada Lovelace"));
        assert!(readme.contains("`modern`"));
    }

    #[test]
    fn test_inline_preview_substitutes_both_placeholders() {
        let (bundle, _) = sample_bundle();
        let preview = inline_preview(&bundle);
        assert!(!preview.contains(crate::templates::shared::STYLE_LINK_TAG));
        assert!(!preview.contains(crate::templates::shared::SCRIPT_SRC_TAG));
        assert!(preview.contains("<style>"));
        assert!(preview.contains("<script>"));
        assert!(preview.contains(&bundle.style));
        assert!(preview.contains(&bundle.script));
    }
}
