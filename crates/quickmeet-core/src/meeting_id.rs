//! Meeting identifiers.
//!
//! Identifiers are cosmetic: they are displayed in the meeting header and
//! carried in the route, never used to join a real session.

use std::fmt;

use rand::Rng;

/// Length of generated identifiers.
pub const GENERATED_ID_LEN: usize = 8;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Opaque meeting identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeetingId(String);

impl MeetingId {
    /// Generate a random lowercase base-36 identifier.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let id = (0..GENERATED_ID_LEN)
            .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
            .collect();
        Self(id)
    }

    /// Accept user-supplied text.
    ///
    /// Returns `None` when the text is empty after trimming. Accepted input is
    /// kept verbatim, surrounding whitespace included.
    pub fn from_input(input: &str) -> Option<Self> {
        if input.trim().is_empty() { None } else { Some(Self(input.to_owned())) }
    }

    /// Identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MeetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MeetingId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn whitespace_only_input_is_rejected() {
        assert!(MeetingId::from_input("").is_none());
        assert!(MeetingId::from_input("  ").is_none());
        assert!(MeetingId::from_input("\t\n").is_none());
    }

    #[test]
    fn accepted_input_is_verbatim() {
        let id = MeetingId::from_input(" abc123 ");
        assert_eq!(id.as_ref().map(MeetingId::as_str), Some(" abc123 "));
    }

    proptest! {
        #[test]
        fn prop_generated_ids_are_base36(seed in any::<u64>()) {
            let id = MeetingId::generate(&mut ChaCha8Rng::seed_from_u64(seed));

            prop_assert_eq!(id.as_str().len(), GENERATED_ID_LEN);
            prop_assert!(id.as_str().bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
        }
    }
}
