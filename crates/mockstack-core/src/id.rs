//! Resource identifier generation.
//!
//! Identifiers are drawn from UUID v4 randomness and mapped onto the alphabet
//! each service uses on the wire, so they look like the real thing and are
//! unique for the lifetime of a process.

/// Prefix of IAM group ids.
pub const GROUP_ID_PREFIX: &str = "AGPA";
/// Prefix of IAM user ids.
pub const USER_ID_PREFIX: &str = "AIDA";
/// Prefix of IAM managed policy ids.
pub const POLICY_ID_PREFIX: &str = "ANPA";

/// Length of the random part of an IAM unique id.
const IAM_ID_SUFFIX_LEN: usize = 17;

const LOWER_ALNUM: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const UPPER_ALNUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Produce `len` random characters from `alphabet`.
fn random_chars(alphabet: &[u8], len: usize) -> String {
    let mut out = String::with_capacity(len);
    while out.len() < len {
        for byte in uuid::Uuid::new_v4().into_bytes() {
            if out.len() == len {
                break;
            }
            out.push(char::from(alphabet[usize::from(byte) % alphabet.len()]));
        }
    }
    out
}

/// A lowercase alphanumeric id of the given length (API Gateway style).
///
/// ```
/// let id = mockstack_core::id::lowercase_id(10);
/// assert_eq!(id.len(), 10);
/// assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
/// ```
#[must_use]
pub fn lowercase_id(len: usize) -> String {
    random_chars(LOWER_ALNUM, len)
}

/// A lowercase id of the given length that `taken` does not claim.
///
/// Draws again until an unused id comes up, so the caller must leave room in
/// the id space.
#[must_use]
pub fn fresh_lowercase_id(len: usize, taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = lowercase_id(len);
        if !taken(&id) {
            return id;
        }
    }
}

/// An IAM unique id: a four-letter type prefix followed by 17 uppercase
/// alphanumeric characters.
#[must_use]
pub fn iam_unique_id(prefix: &str) -> String {
    let mut id = String::with_capacity(prefix.len() + IAM_ID_SUFFIX_LEN);
    id.push_str(prefix);
    id.push_str(&random_chars(UPPER_ALNUM, IAM_ID_SUFFIX_LEN));
    id
}
