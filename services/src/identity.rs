//! Pseudonymous reviewer identity.
//!
//! Reviewers never log in. A review is attributed to the first 64 bits of the
//! SHA-256 digest of the reviewer's trimmed display name, which is enough to
//! stop one person from holding two active reviews on a course without storing
//! who they are.
//!
//! Two people who type the same display name share one identity and can cancel
//! or replace each other's reviews. This is a known limitation.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest.
pub const USER_ID_LEN: usize = 16;

/// Derives the stable pseudonymous identifier for a display name.
pub fn make_user_id(name: &str) -> String {
    let digest = Sha256::digest(name.trim().as_bytes());
    let mut id = hex::encode(digest);
    id.truncate(USER_ID_LEN);
    id
}
