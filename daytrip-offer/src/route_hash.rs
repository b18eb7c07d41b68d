use chrono::NaiveDate;

/// Digest of a route key, read as one big-endian unsigned integer.
///
/// Only small remainders of that integer are ever needed, so they are folded
/// out of the digest nibble by nibble instead of materialising a bignum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteHash {
    digest: [u8; 32],
}

impl RouteHash {
    pub fn of(key: &str) -> Self {
        Self { digest: *blake3::hash(key.as_bytes()).as_bytes() }
    }

    pub fn for_route(origin: &str, destination: &str, date: NaiveDate) -> Self {
        Self::of(&route_key(origin, destination, date))
    }

    /// `h mod modulus`
    pub fn rem(&self, modulus: u64) -> u64 {
        self.rem_after_shift(0, modulus)
    }

    /// `(h >> (4 * nibbles)) mod modulus`
    pub fn rem_after_shift(&self, nibbles: usize, modulus: u64) -> u64 {
        debug_assert!(modulus > 0, "modulus must be positive");
        let kept = self.digest.len() * 2 - nibbles.min(self.digest.len() * 2);
        self.nibbles()
            .take(kept)
            .fold(0, |acc, nibble| (acc * 16 + nibble) % modulus)
    }

    fn nibbles(&self) -> impl Iterator<Item = u64> + '_ {
        self.digest
            .iter()
            .flat_map(|byte| [u64::from(byte >> 4), u64::from(byte & 0x0f)])
    }
}

/// `"{origin}-{destination}-{isoDate}"`
pub fn route_key(origin: &str, destination: &str, date: NaiveDate) -> String {
    format!("{}-{}-{}", origin, destination, date.format("%Y-%m-%d"))
}
