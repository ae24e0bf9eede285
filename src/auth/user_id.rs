//! Random user identifiers.
//!
//! Produces seven lowercase base-36 characters (e.g. `k3x9q0a`), the shape
//! of ids handed out at signup.

use rand::RngExt;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 7;

/// Generate a random 7-character base-36 user id.
pub fn generate_user_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_user_id_shape() {
        for _ in 0..50 {
            let id = generate_user_id();
            assert_eq!(id.len(), ID_LEN);
            assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        }
    }
}
