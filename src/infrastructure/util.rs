use crate::application::ports::util::SlugGenerator;
use crate::domain::article::MAX_SLUG_LEN;

/// ASCII-only title slugger: lowercase, every run of characters outside
/// `[a-z0-9]` collapses to one hyphen, edges are trimmed and the result is
/// cut to [`MAX_SLUG_LEN`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TitleSlugGenerator;

impl SlugGenerator for TitleSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let mut slug = String::with_capacity(input.len());
        let mut pending_hyphen = false;

        for ch in input.chars().map(|c| c.to_ascii_lowercase()) {
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(ch);
            } else {
                pending_hyphen = true;
            }
        }

        // Only ASCII was pushed, so byte truncation is char-safe.
        slug.truncate(MAX_SLUG_LEN);
        slug.trim_end_matches('-').to_string()
    }
}
