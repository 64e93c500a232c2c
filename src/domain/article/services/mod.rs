// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle, MAX_SLUG_LEN};
use crate::domain::errors::DomainResult;

/// Base used when a title contains no ASCII alphanumerics at all.
pub const FALLBACK_SLUG_BASE: &str = "article";

/// Domain service responsible for producing unique slugs for articles.
///
/// Uniqueness here is a pre-check: the storage constraint on `slug` stays the
/// authority and writers retry through this service when they lose a race.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Slugified title, or [`FALLBACK_SLUG_BASE`] when the slugger yields
    /// nothing, so an article never gets an empty slug.
    pub fn derive_base(&self, title: &ArticleTitle) -> String {
        let base = self.generator.slugify(title.as_str());
        if base.is_empty() {
            FALLBACK_SLUG_BASE.to_string()
        } else {
            base
        }
    }

    /// Probe `base`, `base-1`, `base-2`, ... until a slug is free. A slug owned
    /// by `ignore_id` counts as free so a renamed article never collides with
    /// itself.
    pub async fn resolve_unique(
        &self,
        base: &str,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        let mut counter = 0u64;

        loop {
            let slug = ArticleSlug::new(candidate(base, counter))?;
            match self.read_repo.find_by_slug(&slug).await? {
                Some(existing) if Some(existing.article.id) != ignore_id => {
                    tracing::debug!(slug = %slug, "slug taken, probing next suffix");
                    counter += 1;
                }
                _ => return Ok(slug),
            }
        }
    }

    pub async fn generate_unique_slug(
        &self,
        title: &ArticleTitle,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        let base = self.derive_base(title);
        self.resolve_unique(&base, ignore_id).await
    }
}

/// `base` for the first probe, `base-N` afterwards, shortening `base` so the
/// result never exceeds [`MAX_SLUG_LEN`].
fn candidate(base: &str, counter: u64) -> String {
    if counter == 0 {
        return base.to_string();
    }

    let suffix = format!("-{counter}");
    let room = MAX_SLUG_LEN.saturating_sub(suffix.len());
    let head: String = base.chars().take(room).collect();
    format!("{}{suffix}", head.trim_end_matches('-'))
}
