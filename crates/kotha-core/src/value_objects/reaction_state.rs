//! Reaction state machine
//!
//! Per (user, target) pair the reaction occupies one of three states:
//! `None`, `Liked`, `Disliked`. Clicking a reaction type moves between them:
//!
//! | current  | click like            | click dislike          |
//! |----------|-----------------------|------------------------|
//! | None     | insert like           | insert dislike         |
//! | Liked    | remove like           | remove like, insert dislike |
//! | Disliked | remove dislike, insert like | remove dislike    |
//!
//! Transitions are planned here as pure data and executed by the reaction
//! repository; counter decrements are floor-clamped at zero so an
//! inconsistent starting state never produces a negative counter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A reaction a user can place on a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionType {
    Like,
    Dislike,
}

impl ReactionType {
    /// The other reaction type
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Like => Self::Dislike,
            Self::Dislike => Self::Like,
        }
    }

    /// Stable string form used in the `user_interactions.interaction_type` column
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The recorded reaction state for a (user, target) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    None,
    Liked,
    Disliked,
}

impl InteractionState {
    /// Build from an optional stored reaction row
    #[inline]
    pub fn from_reaction(reaction: Option<ReactionType>) -> Self {
        match reaction {
            None => Self::None,
            Some(ReactionType::Like) => Self::Liked,
            Some(ReactionType::Dislike) => Self::Disliked,
        }
    }

    /// The stored reaction this state corresponds to, if any
    #[inline]
    pub fn as_reaction(self) -> Option<ReactionType> {
        match self {
            Self::None => None,
            Self::Liked => Some(ReactionType::Like),
            Self::Disliked => Some(ReactionType::Dislike),
        }
    }
}

/// A target's like/dislike counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterPair {
    pub likes: i64,
    pub dislikes: i64,
}

impl CounterPair {
    /// Create a counter pair
    #[inline]
    pub const fn new(likes: i64, dislikes: i64) -> Self {
        Self { likes, dislikes }
    }
}

/// A planned reaction transition: at most one row removal and one insertion
///
/// Every state change is expressed as delete-then-insert (or plain delete,
/// or plain insert); a reaction row is never edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionTransition {
    /// Reaction row to delete, if any
    pub remove: Option<ReactionType>,
    /// Reaction row to insert, if any
    pub insert: Option<ReactionType>,
}

impl ReactionTransition {
    /// Plan the transition for a click of `requested` while in `current`
    pub fn plan(current: InteractionState, requested: ReactionType) -> Self {
        match current.as_reaction() {
            // First reaction on this target
            None => Self {
                remove: None,
                insert: Some(requested),
            },
            // Clicking the active reaction again toggles it off
            Some(active) if active == requested => Self {
                remove: Some(active),
                insert: None,
            },
            // Switching like <-> dislike
            Some(active) => Self {
                remove: Some(active),
                insert: Some(requested),
            },
        }
    }

    /// The state the pair occupies after this transition
    #[inline]
    pub fn next_state(&self) -> InteractionState {
        InteractionState::from_reaction(self.insert)
    }

    /// Signed delta for one counter: +1 for insert, -1 for removal
    fn delta_for(&self, kind: ReactionType) -> i64 {
        i64::from(self.insert == Some(kind)) - i64::from(self.remove == Some(kind))
    }

    /// Signed delta applied to the `likes` counter
    #[inline]
    pub fn like_delta(&self) -> i64 {
        self.delta_for(ReactionType::Like)
    }

    /// Signed delta applied to the `dislikes` counter
    #[inline]
    pub fn dislike_delta(&self) -> i64 {
        self.delta_for(ReactionType::Dislike)
    }

    /// Apply the deltas to a counter pair, flooring each counter at zero
    pub fn apply(&self, counters: CounterPair) -> CounterPair {
        CounterPair {
            likes: (counters.likes + self.like_delta()).max(0),
            dislikes: (counters.dislikes + self.dislike_delta()).max(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn react(counters: CounterPair, state: InteractionState, requested: ReactionType) -> (CounterPair, InteractionState) {
        let transition = ReactionTransition::plan(state, requested);
        (transition.apply(counters), transition.next_state())
    }

    #[test]
    fn test_opposite() {
        assert_eq!(ReactionType::Like.opposite(), ReactionType::Dislike);
        assert_eq!(ReactionType::Dislike.opposite(), ReactionType::Like);
    }

    #[test]
    fn test_first_reaction_inserts() {
        let t = ReactionTransition::plan(InteractionState::None, ReactionType::Like);
        assert_eq!(t.remove, None);
        assert_eq!(t.insert, Some(ReactionType::Like));
        assert_eq!(t.like_delta(), 1);
        assert_eq!(t.dislike_delta(), 0);
        assert_eq!(t.next_state(), InteractionState::Liked);
    }

    #[test]
    fn test_repeat_click_toggles_off() {
        let t = ReactionTransition::plan(InteractionState::Liked, ReactionType::Like);
        assert_eq!(t.remove, Some(ReactionType::Like));
        assert_eq!(t.insert, None);
        assert_eq!(t.like_delta(), -1);
        assert_eq!(t.next_state(), InteractionState::None);
    }

    #[test]
    fn test_switch_moves_one_up_one_down() {
        let t = ReactionTransition::plan(InteractionState::Liked, ReactionType::Dislike);
        assert_eq!(t.remove, Some(ReactionType::Like));
        assert_eq!(t.insert, Some(ReactionType::Dislike));
        assert_eq!(t.like_delta(), -1);
        assert_eq!(t.dislike_delta(), 1);
        assert_eq!(t.next_state(), InteractionState::Disliked);
    }

    #[test]
    fn test_symmetric_under_swap() {
        let t = ReactionTransition::plan(InteractionState::Disliked, ReactionType::Like);
        assert_eq!(t.remove, Some(ReactionType::Dislike));
        assert_eq!(t.insert, Some(ReactionType::Like));
        assert_eq!(t.like_delta(), 1);
        assert_eq!(t.dislike_delta(), -1);
    }

    #[test]
    fn test_no_self_loops() {
        // Clicking the active reaction never re-inserts it
        for state in [InteractionState::Liked, InteractionState::Disliked] {
            let active = state.as_reaction().unwrap();
            let t = ReactionTransition::plan(state, active);
            assert_eq!(t.next_state(), InteractionState::None);
        }
    }

    #[test]
    fn test_scenario_sequence() {
        // {likes:5, dislikes:2}, None -> dislike -> like -> like
        let c0 = CounterPair::new(5, 2);
        let (c1, s1) = react(c0, InteractionState::None, ReactionType::Dislike);
        assert_eq!(c1, CounterPair::new(5, 3));
        assert_eq!(s1, InteractionState::Disliked);

        let (c2, s2) = react(c1, s1, ReactionType::Like);
        assert_eq!(c2, CounterPair::new(6, 2));
        assert_eq!(s2, InteractionState::Liked);

        let (c3, s3) = react(c2, s2, ReactionType::Like);
        assert_eq!(c3, CounterPair::new(5, 2));
        assert_eq!(s3, InteractionState::None);
    }

    #[test]
    fn test_toggle_restores_initial_counters() {
        let c0 = CounterPair::new(7, 4);
        let (c1, s1) = react(c0, InteractionState::None, ReactionType::Like);
        let (c2, _) = react(c1, s1, ReactionType::Like);
        assert_eq!(c2, c0);
    }

    #[test]
    fn test_decrement_clamped_at_zero() {
        // Inconsistent starting state: Disliked but counters already zero
        let (c, s) = react(CounterPair::new(0, 0), InteractionState::Disliked, ReactionType::Dislike);
        assert_eq!(c, CounterPair::new(0, 0));
        assert_eq!(s, InteractionState::None);
    }

    #[test]
    fn test_counters_never_negative() {
        let mut counters = CounterPair::new(0, 0);
        let mut state = InteractionState::Liked;
        for requested in [
            ReactionType::Like,
            ReactionType::Dislike,
            ReactionType::Dislike,
            ReactionType::Like,
            ReactionType::Like,
        ] {
            let (next, next_state) = react(counters, state, requested);
            assert!(next.likes >= 0 && next.dislikes >= 0);
            counters = next;
            state = next_state;
        }
    }

    #[test]
    fn test_reaction_type_serde_lowercase() {
        // Wire format matches the interaction_type column values
        assert_eq!(serde_json::to_string(&ReactionType::Like).unwrap(), "\"like\"");
        let parsed: ReactionType = serde_json::from_str("\"dislike\"").unwrap();
        assert_eq!(parsed, ReactionType::Dislike);
    }

    #[test]
    fn test_state_roundtrip() {
        for state in [
            InteractionState::None,
            InteractionState::Liked,
            InteractionState::Disliked,
        ] {
            assert_eq!(InteractionState::from_reaction(state.as_reaction()), state);
        }
    }
}
