//! Deterministic slug derivation.
//!
//! A slug is the shortest prefix (at least [`GeneratorSettings::min_length`]
//! characters) of a link's URL-safe SHA-256 digest that is not yet used in
//! the store. Hashing the link itself makes the result reproducible for a
//! given store state, and also means anyone who knows a link can compute
//! its candidate slugs.

pub mod digest;

pub use digest::{LinkDigest, DIGEST_LENGTH};

use linkhash_core::{LinkStore, Result, Slug, StoreError};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
use typed_builder::TypedBuilder;

pub const DEFAULT_MIN_LENGTH: usize = 6;

/// Configures a [`SlugGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Shortest prefix ever handed out, in `1..=43`.
    #[builder(default = DEFAULT_MIN_LENGTH)]
    pub min_length: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Derives slugs from links by prefix search over the link digest.
#[derive(Debug, Clone, Copy)]
pub struct SlugGenerator {
    min_length: usize,
}

impl SlugGenerator {
    /// Creates a generator, rejecting a minimum length outside `1..=43`.
    pub fn new(settings: GeneratorSettings) -> Result<Self> {
        if settings.min_length == 0 || settings.min_length > DIGEST_LENGTH {
            return Err(StoreError::Config(format!(
                "minimum slug length must be between 1 and {}, got {}",
                DIGEST_LENGTH, settings.min_length
            )));
        }

        Ok(Self {
            min_length: settings.min_length,
        })
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Returns the shortest prefix of the link digest that `store` reports as
    /// available.
    ///
    /// When every prefix is taken the full digest is returned anyway; the
    /// caller's subsequent insert then fails with `DuplicateSlug`.
    pub async fn generate<S>(&self, link: &str, store: &S) -> Result<Slug>
    where
        S: LinkStore + ?Sized,
    {
        let digest = LinkDigest::of(link);
        debug!(link, digest = digest.as_str(), "generating slug");

        for len in self.min_length..=digest.len() {
            let candidate = digest.prefix(len);
            trace!(slug = %candidate, "probing prefix");
            if store.is_available(&candidate).await? {
                return Ok(candidate);
            }
        }

        warn!(link, "every digest prefix is taken");
        Ok(digest.full())
    }

    /// Finds the shortest available prefix and commits `link` under it.
    ///
    /// If the insert loses a race to another writer, the search resumes at
    /// the next longer prefix. Fails with `DuplicateSlug` only when the full
    /// digest is taken as well.
    pub async fn claim<S>(&self, link: &str, store: &S) -> Result<Slug>
    where
        S: LinkStore + ?Sized,
    {
        let digest = LinkDigest::of(link);
        debug!(link, digest = digest.as_str(), "claiming slug");

        for len in self.min_length..=digest.len() {
            let candidate = digest.prefix(len);
            if !store.is_available(&candidate).await? {
                trace!(slug = %candidate, "prefix taken");
                continue;
            }

            match store.insert(&candidate, link).await {
                Ok(()) => return Ok(candidate),
                Err(StoreError::DuplicateSlug(_)) => {
                    warn!(slug = %candidate, "lost insert race, trying longer prefix");
                }
                Err(err) => return Err(err),
            }
        }

        Err(StoreError::DuplicateSlug(digest.as_str().to_owned()))
    }
}
