use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

const STATE_NONCE_LEN: usize = 32;

pub fn generate_nonce() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_NONCE_LEN)
        .map(char::from)
        .collect()
}

fn state_tag(nonce: &str, secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(nonce.as_bytes());
    hasher.update(b":");
    hasher.update(secret.as_bytes());
    URL_SAFE_NO_PAD.encode(hasher.finalize())
}

/// Builds an OAuth `state` value of the form `<nonce>.<tag>`.
///
/// The tag binds the nonce to the client secret so `/callback` can check that
/// the state was minted by this service without storing anything.
pub fn generate_state(secret: &str) -> String {
    let nonce = generate_nonce();
    let tag = state_tag(&nonce, secret);
    format!("{}.{}", nonce, tag)
}

pub fn verify_state(state: &str, secret: &str) -> bool {
    match state.split_once('.') {
        Some((nonce, tag)) if !nonce.is_empty() => state_tag(nonce, secret) == tag,
        _ => false,
    }
}

/// Accepts both `Bearer <token>` and a bare token, as browsers send either.
pub fn strip_bearer(header: &str) -> &str {
    let header = header.trim();
    match header.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        _ if header.eq_ignore_ascii_case("bearer") => "",
        _ => header,
    }
}
