//! Random payment identifiers for wallet payment tracking.

use rand::RngCore;

/// Generate a short (64-bit) payment id: 16 lowercase hex characters.
pub fn new_payment_id_64() -> String {
    random_hex::<8>()
}

/// Generate a long (256-bit) payment id: 64 lowercase hex characters.
pub fn new_payment_id_256() -> String {
    random_hex::<32>()
}

fn random_hex<const N: usize>() -> String {
    let mut buf = [0u8; N];
    rand::thread_rng().fill_bytes(&mut buf);
    hex::encode(buf)
}
