//! MD5 message digest (RFC 1321)
//!
//! Implemented from the RFC rather than pulled from a crate. MD5 is broken
//! for collision resistance and is offered for checksums and comparison only.

/// Initial accumulator values A, B, C, D
const INIT: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// Per-round additive constants, `floor(abs(sin(i + 1)) * 2^32)`
#[rustfmt::skip]
const K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Left-rotation amounts, four per quartile
const S: [[u32; 4]; 4] = [
    [7, 12, 17, 22],
    [5, 9, 14, 20],
    [4, 11, 16, 23],
    [6, 10, 15, 21],
];

const BLOCK_LEN: usize = 64;

fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

fn i(x: u32, y: u32, z: u32) -> u32 {
    y ^ (x | !z)
}

/// Message word used by round `r`
fn word_index(r: usize) -> usize {
    match r / 16 {
        0 => r,
        1 => (5 * r + 1) % 16,
        2 => (3 * r + 5) % 16,
        _ => (7 * r) % 16,
    }
}

/// Appends `0x80`, zeros up to 56 mod 64, then the bit length little-endian
fn pad(input: &[u8]) -> Vec<u8> {
    let bit_len = (input.len() as u64).wrapping_mul(8);
    let mut msg = Vec::with_capacity(input.len() + BLOCK_LEN + 8);
    msg.extend_from_slice(input);
    msg.push(0x80);
    while msg.len() % BLOCK_LEN != 56 {
        msg.push(0);
    }
    msg.extend_from_slice(&bit_len.to_le_bytes());
    msg
}

fn compress(state: &mut [u32; 4], block: &[u8]) {
    let mut m = [0u32; 16];
    for (word, chunk) in m.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let [mut a, mut b, mut c, mut d] = *state;
    for r in 0..64 {
        let mix = match r / 16 {
            0 => f(b, c, d),
            1 => g(b, c, d),
            2 => h(b, c, d),
            _ => i(b, c, d),
        };
        let sum = a
            .wrapping_add(mix)
            .wrapping_add(K[r])
            .wrapping_add(m[word_index(r)]);
        let rotated = sum.rotate_left(S[r / 16][r % 4]);
        (a, b, c, d) = (d, b.wrapping_add(rotated), b, c);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

/// Computes the 16-byte MD5 digest of `input`
pub fn compute(input: &[u8]) -> [u8; 16] {
    let mut state = INIT;
    for block in pad(input).chunks_exact(BLOCK_LEN) {
        compress(&mut state, block);
    }

    let mut out = [0u8; 16];
    for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn md5_hex(s: &str) -> String {
        hex::encode(compute(s.as_bytes()))
    }

    #[test]
    fn test_rfc1321_vectors() {
        assert_eq!(md5_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5_hex("a"), "0cc175b9c0f1b6a831c399e269772661");
        assert_eq!(md5_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(md5_hex("message digest"), "f96b697d7cb7938d525a2f31aaf161d0");
        assert_eq!(
            md5_hex("abcdefghijklmnopqrstuvwxyz"),
            "c3fcd3d76192e4007dfb496cca67e13b"
        );
        assert_eq!(
            md5_hex("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789"),
            "d174ab98d277d9f5a5611c2c9f419d9f"
        );
        assert_eq!(
            md5_hex(&"1234567890".repeat(8)),
            "57edf4a22be3c955ac49da2e2107b67a"
        );
    }

    #[test]
    fn test_fox() {
        assert_eq!(
            md5_hex("The quick brown fox jumps over the lazy dog"),
            "9e107d9d372bb6826bd81d3542a419d6"
        );
    }

    #[test]
    fn test_padding_boundaries() {
        for len in [55, 56, 63, 64, 65] {
            let padded = pad(&vec![0x61; len]);
            assert_eq!(padded.len() % BLOCK_LEN, 0, "len = {}", len);
            assert_eq!(padded[len], 0x80);
            let trailer = &padded[padded.len() - 8..];
            assert_eq!(u64::from_le_bytes(trailer.try_into().unwrap()), len as u64 * 8);
        }
        assert_eq!(pad(&[0u8; 55]).len(), 64);
        assert_eq!(pad(&[0u8; 56]).len(), 128);
    }

    #[test]
    fn test_word_schedule() {
        assert_eq!(word_index(0), 0);
        assert_eq!(word_index(16), 1);
        assert_eq!(word_index(17), 6);
        assert_eq!(word_index(32), 5);
        assert_eq!(word_index(33), 8);
        assert_eq!(word_index(48), 0);
        assert_eq!(word_index(49), 7);
    }
}
