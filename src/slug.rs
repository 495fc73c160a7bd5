//! URL slugs for company profiles and articles.
//!
//! [`slugify`] turns a display name into a lowercase, hyphenated candidate.
//! [`unique_slug`] resolves collisions by appending `-1`, `-2`, ... against a
//! set of slugs that are already taken.

use std::collections::HashSet;

/// Candidate used when a name contains nothing sluggable.
pub const FALLBACK_SLUG: &str = "company";

/// Builds a slug from `name`.
///
/// The result only contains `a-z`, `0-9` and single hyphens, and never
/// starts or ends with a hyphen.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        let folded = match c {
            'a'..='z' | '0'..='9' => Some(FoldedChar::Single(c)),
            'A'..='Z' => Some(FoldedChar::Single(c.to_ascii_lowercase())),
            _ => fold_latin(c).map(FoldedChar::Text),
        };

        let Some(folded) = folded else {
            pending_hyphen = true;
            continue;
        };

        if pending_hyphen && !slug.is_empty() {
            slug.push('-');
        }
        pending_hyphen = false;
        match folded {
            FoldedChar::Single(c) => slug.push(c),
            FoldedChar::Text(text) => slug.push_str(text),
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Picks the first of `base`, `base-1`, `base-2`, ... that is not in `taken`.
///
/// Terminates because `taken` is finite.
#[must_use]
pub fn unique_slug(base: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(base) {
        return base.to_string();
    }

    let mut counter: u64 = 1;
    loop {
        let candidate = format!("{base}-{counter}");
        if !taken.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Returns true when `slug` is something [`slugify`] could have produced,
/// optionally with a numeric suffix.
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

enum FoldedChar {
    Single(char),
    Text(&'static str),
}

// ASCII spelling of common accented Latin letters; anything else is a separator.
fn fold_latin(c: char) -> Option<&'static str> {
    let text = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "a",
        'æ' | 'Æ' => "ae",
        'ç' | 'Ç' => "c",
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => "i",
        'ñ' | 'Ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "o",
        'œ' | 'Œ' => "oe",
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => "u",
        'ý' | 'ÿ' | 'Ý' => "y",
        'ß' => "ss",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Acme Co"), "acme-co");
        assert_eq!(slugify("  Bob's   Bakery & Café!  "), "bob-s-bakery-cafe");
        assert_eq!(slugify("Northern-Lights 24/7"), "northern-lights-24-7");
        assert_eq!(slugify("Straße Œuvre"), "strasse-oeuvre");
    }

    #[test]
    fn test_slugify_unsluggable_name_falls_back() {
        assert_eq!(slugify("!!!"), FALLBACK_SLUG);
        assert_eq!(slugify(""), FALLBACK_SLUG);
        assert_eq!(slugify("東京"), FALLBACK_SLUG);
    }

    #[test]
    fn test_slugify_output_is_always_url_safe() {
        let names = [
            "Acme Co",
            "--leading and trailing--",
            "MiXeD CaSe 123",
            "tab\tand\nnewline",
            "emoji 🚀 rocket",
            "Ünïcödé Ñame",
            "a__b..c",
            "日本 Shop 2",
        ];

        for name in names {
            let slug = slugify(name);
            assert!(is_valid_slug(&slug), "{name:?} produced {slug:?}");
        }
    }

    #[test]
    fn test_unique_slug_appends_incrementing_suffix() {
        let mut taken = HashSet::new();
        assert_eq!(unique_slug("acme-co", &taken), "acme-co");

        taken.insert("acme-co".to_string());
        assert_eq!(unique_slug("acme-co", &taken), "acme-co-1");

        taken.insert("acme-co-1".to_string());
        taken.insert("acme-co-2".to_string());
        assert_eq!(unique_slug("acme-co", &taken), "acme-co-3");
    }

    #[test]
    fn test_unique_slug_ignores_unrelated_slugs() {
        let taken: HashSet<String> = ["acme-co-1".to_string(), "acme".to_string()]
            .into_iter()
            .collect();
        assert_eq!(unique_slug("acme-co", &taken), "acme-co");
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("acme-co-1"));
        assert!(!is_valid_slug("Acme"));
        assert!(!is_valid_slug("-acme"));
        assert!(!is_valid_slug("acme--co"));
        assert!(!is_valid_slug(""));
    }
}
