//! Shared admin password check.
//!
//! There is a single admin password configured for the whole portal. The
//! comparison runs in constant time so response timing does not reveal how
//! many leading bytes of a guess were right.

use subtle::ConstantTimeEq;

/// Whether `candidate` matches the configured admin password.
///
/// An empty configured password never matches.
pub fn verify_admin_password(candidate: &str, configured: &str) -> bool {
    if configured.is_empty() {
        return false;
    }
    candidate.as_bytes().ct_eq(configured.as_bytes()).into()
}
