//! Product id generation

use rand::Rng;

/// Length of generated ids
pub const ID_LENGTH: usize = 21;

/// URL-safe alphabet, 64 symbols (6 bits per character)
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Generate a random 21-character URL-safe id (126 bits of entropy).
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
