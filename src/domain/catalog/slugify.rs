use once_cell::sync::Lazy;
use regex::Regex;

/// Marker appended to every technology slug. Roles share the `/hire/{slug}`
/// segment with technologies and never end with it.
pub const TECHNOLOGY_SLUG_SUFFIX: &str = "-developers";

static DISALLOWED_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9-]+").expect("static slug pattern must compile"));
static HYPHEN_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-{2,}").expect("static slug pattern must compile"));

/// Normalise a canonical name into a URL segment.
///
/// Each step runs over the whole string before the next one:
/// lower-case, `+` to `-plus`, `#` to `-sharp`, drop `.`, `/` to `-`,
/// runs outside `[a-z0-9-]` to a single `-`, collapse hyphen runs, trim
/// hyphens at both ends. Total: names without any alphanumerics yield an
/// empty string.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let substituted = lowered
        .replace('+', "-plus")
        .replace('#', "-sharp")
        .replace('.', "")
        .replace('/', "-");
    let cleaned = DISALLOWED_RUN.replace_all(&substituted, "-");
    let collapsed = HYPHEN_RUN.replace_all(&cleaned, "-");
    collapsed.trim_matches('-').to_string()
}

/// Technology slug: the base slug with [`TECHNOLOGY_SLUG_SUFFIX`] appended
/// unless it is already there, so re-applying it is a no-op.
pub fn tech_to_slug(name: &str) -> String {
    let base = slugify(name);
    if base.ends_with(TECHNOLOGY_SLUG_SUFFIX) {
        base
    } else {
        format!("{base}{TECHNOLOGY_SLUG_SUFFIX}")
    }
}

pub fn role_to_slug(name: &str) -> String {
    slugify(name)
}

pub fn country_to_slug(name: &str) -> String {
    slugify(name)
}
