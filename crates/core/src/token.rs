//! Support-token generation.

use rand::Rng;

/// Number of random bytes in a token (twice that many hex characters).
pub const TOKEN_BYTES: usize = 16;

/// Generate a new opaque support token.
///
/// 16 cryptographically random bytes rendered as fixed-width lowercase
/// hex. Collisions are not checked against existing tokens; at 128 bits
/// of entropy they are negligible.
pub fn generate_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::rng().random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
