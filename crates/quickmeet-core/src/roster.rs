//! Fake participant roster generator.
//!
//! The roster is a one-shot seed for the meeting screen's static display. It
//! is deterministic in size and names; only the muted and video-off flags are
//! random. The random source is injected so tests can pin exact flag
//! patterns.

use rand::Rng;

use crate::participant::{Participant, ParticipantId};

/// Fixed pool of display names. Only the first [`ROSTER_SIZE`] are used.
pub const NAME_POOL: [&str; 5] =
    ["Alex Kim", "Taylor Smith", "Jordan Lee", "Casey Johnson", "Morgan Williams"];

/// Number of remote participants in every roster.
pub const ROSTER_SIZE: usize = 4;

/// A draw above this value marks the participant muted (~50%).
pub const MUTED_THRESHOLD: f64 = 0.5;

/// A draw above this value marks the participant's video off (~30%).
pub const VIDEO_OFF_THRESHOLD: f64 = 0.7;

/// Immutable list of fabricated remote participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    /// Generate a roster drawing flags from `rng`.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        Self::generate_with(|| rng.gen_range(0.0..1.0))
    }

    /// Generate a roster from a draw function yielding values in `[0, 1)`.
    ///
    /// Each participant consumes two draws, muted first, then video-off.
    pub fn generate_with(mut draw: impl FnMut() -> f64) -> Self {
        let participants = NAME_POOL
            .iter()
            .take(ROSTER_SIZE)
            .enumerate()
            .map(|(index, &name)| {
                let muted = draw() > MUTED_THRESHOLD;
                let video_off = draw() > VIDEO_OFF_THRESHOLD;
                Participant::new(index as ParticipantId + 1, name, muted, video_off)
            })
            .collect();

        Self { participants }
    }

    /// Number of remote participants.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Always `false` for generated rosters.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Iterate participants in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
        self.participants.iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Participant;
    type IntoIter = std::slice::Iter<'a, Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn scripted(values: &[f64]) -> impl FnMut() -> f64 + '_ {
        let mut iter = values.iter().copied().cycle();
        move || iter.next().unwrap_or(0.0)
    }

    #[test]
    fn roster_has_four_pool_names_in_order() {
        let roster = Roster::generate_with(scripted(&[0.0]));

        let names: Vec<_> = roster.iter().map(Participant::name).collect();
        assert_eq!(names, ["Alex Kim", "Taylor Smith", "Jordan Lee", "Casey Johnson"]);
        assert!(!names.contains(&"Morgan Williams"));

        let ids: Vec<_> = roster.iter().map(Participant::id).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
    }

    #[test]
    fn flags_follow_draw_thresholds() {
        // (muted, video) draw pairs per participant
        let roster = Roster::generate_with(scripted(&[
            0.9, 0.1, // muted, video on
            0.2, 0.8, // unmuted, video off
            0.5, 0.7, // thresholds are exclusive
            0.51, 0.71,
        ]));

        let flags: Vec<_> = roster.iter().map(|p| (p.is_muted(), p.is_video_off())).collect();
        assert_eq!(flags, [(true, false), (false, true), (false, false), (true, true)]);
    }

    #[test]
    fn same_seed_yields_same_roster() {
        let a = Roster::generate(&mut ChaCha8Rng::seed_from_u64(7));
        let b = Roster::generate(&mut ChaCha8Rng::seed_from_u64(7));

        assert_eq!(a, b);
        assert_eq!(a.len(), ROSTER_SIZE);
    }
}
