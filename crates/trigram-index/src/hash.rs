//! Order-sensitive 32-bit fingerprint of a word triplet.
//!
//! A MurmurHash-style multiply/shift mix run over the bytes of `a`, then `b`,
//! then `c`, seeded with the combined length. The exact bit pattern is part of
//! the contract: fingerprints must stay stable across builds, so the
//! constants and the tail handling below are fixed.

const M: u32 = 0xc6a4a793;
const R: u32 = 16;

/// Fingerprint three byte strings.
///
/// Never fails; empty parts add to the length seed but mix no bytes.
pub fn fingerprint(a: &[u8], b: &[u8], c: &[u8], seed: u32) -> u32 {
    let total = (a.len() as u32)
        .wrapping_add(b.len() as u32)
        .wrapping_add(c.len() as u32);
    let mut h = seed ^ total.wrapping_mul(M);

    h = mix_part(h, a);
    h = mix_part(h, b);
    h = mix_part(h, c);

    h = h.wrapping_mul(M);
    h ^= h >> 10;
    h = h.wrapping_mul(M);
    h ^= h >> 17;
    h
}

fn mix_part(mut h: u32, data: &[u8]) -> u32 {
    let mut words = data.chunks_exact(4);
    for word in &mut words {
        let k = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
        h = h.wrapping_add(k).wrapping_mul(M);
        h ^= h >> R;
    }

    // Tail bytes fall through: a 3-byte tail also adds bytes 1 and 0.
    let tail = words.remainder();
    if tail.is_empty() {
        return h;
    }
    if tail.len() == 3 {
        h = h.wrapping_add(u32::from(tail[2]) << 16);
    }
    if tail.len() >= 2 {
        h = h.wrapping_add(u32::from(tail[1]) << 8);
    }
    h = h.wrapping_add(u32::from(tail[0])).wrapping_mul(M);
    h ^ (h >> R)
}
