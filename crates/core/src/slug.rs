//! URL-safe identifier derivation for content items.

use std::collections::HashSet;

/// Role value that requires extra disambiguation, since several records share
/// it as their display name.
const FOUNDER_ROLE: &str = "Founder";

/// Convert free text into a lowercase, hyphen-separated slug.
///
/// Non-word, non-space characters are stripped and whitespace runs collapse
/// into single hyphens.
pub fn slugify(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Issues unique slugs for one transformation pass.
///
/// Keeps the set of slugs handed out so far; a collision is resolved by
/// appending the colliding record's upstream id.
#[derive(Debug, Default)]
pub struct SlugIssuer {
    used: HashSet<String>,
}

impl SlugIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the next unique slug from a record's display name, company, and
    /// upstream id. Always returns a non-empty string.
    pub fn issue(&mut self, title: Option<&str>, company: Option<&str>, record_id: &str) -> String {
        let mut slug = match title {
            Some(title) if !slugify(title).is_empty() => slugify(title),
            _ => "item".to_string(),
        };

        // Founder records share a display name, so disambiguate with the
        // company when present, else the upstream record id.
        if title == Some(FOUNDER_ROLE) {
            match company {
                Some(company) if !company.is_empty() => {
                    slug = format!("{}-at-{}", slug, slugify(company));
                }
                _ => {
                    slug = format!("{}-{}", slug, record_id.to_lowercase());
                }
            }
        }

        if self.used.contains(&slug) {
            slug = format!("{}-{}", slug, record_id.to_lowercase());
        }

        self.used.insert(slug.clone());
        slug
    }
}
