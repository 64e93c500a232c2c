// src/application/ports/util.rs
/// Turns free text into a URL-safe slug base. Must be deterministic and
/// idempotent on its own output; may return an empty string.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
