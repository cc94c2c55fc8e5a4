use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use linkhash_core::Slug;
use sha2::{Digest as _, Sha256};

/// Length of an unpadded URL-safe base64 SHA-256 digest.
pub const DIGEST_LENGTH: usize = 43;

/// The URL-safe encoding of a link's SHA-256 hash.
///
/// The same link text always yields the same digest. Every prefix of it is a
/// valid [`Slug`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkDigest(String);

impl LinkDigest {
    /// Hashes the exact bytes of `link`.
    pub fn of(link: &str) -> Self {
        let hash = Sha256::digest(link.as_bytes());
        Self(URL_SAFE_NO_PAD.encode(hash))
    }

    /// Returns the first `len` characters as a slug, clamped to the digest length.
    pub fn prefix(&self, len: usize) -> Slug {
        let len = len.min(self.0.len());
        Slug::new_unchecked(&self.0[..len])
    }

    /// Returns the whole digest as a slug.
    pub fn full(&self) -> Slug {
        Slug::new_unchecked(self.0.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
