//! Gamification ladder: levels earned from swims, likes, and feed posts.
//!
//! The ladder is a fixed five-entry table scanned highest-first; a level is
//! awarded only when all three of its minimums are present and met. Level 4
//! carries no swim-count minimum in the app's data, so the highest-first
//! scan never awards it directly; that behavior is kept for parity with the
//! app's badge display.

use serde::Serialize;

/// One rung of the level ladder.
#[derive(Debug, Clone, Serialize)]
pub struct LevelDef {
    /// Level number, 1-based
    pub level: u8,
    /// Badge name
    pub name: &'static str,
    /// Badge glyph
    pub emoji: &'static str,
    /// Minimum logged swims (a missing minimum makes the level unawardable)
    pub min_swim_count: Option<u32>,
    /// Minimum likes received
    pub min_like_count: Option<u32>,
    /// Minimum feed posts
    pub min_feed_count: Option<u32>,
}

/// The fixed ladder, lowest first.
pub const LEVELS: [LevelDef; 5] = [
    LevelDef {
        level: 1,
        name: "Starfish",
        emoji: "★",
        min_swim_count: Some(0),
        min_like_count: Some(0),
        min_feed_count: Some(0),
    },
    LevelDef {
        level: 2,
        name: "Sea Turtle",
        emoji: "☻",
        min_swim_count: Some(10),
        min_like_count: Some(20),
        min_feed_count: Some(5),
    },
    LevelDef {
        level: 3,
        name: "Sea Otter",
        emoji: "☀",
        min_swim_count: Some(30),
        min_like_count: Some(50),
        min_feed_count: Some(15),
    },
    LevelDef {
        level: 4,
        name: "Sea Lion",
        emoji: "⛄",
        min_swim_count: None,
        min_like_count: Some(100),
        min_feed_count: Some(30),
    },
    LevelDef {
        level: 5,
        name: "Orca King",
        emoji: "👑",
        min_swim_count: Some(100),
        min_like_count: Some(200),
        min_feed_count: Some(50),
    },
];

/// What stands between a user and the next level.
#[derive(Debug, Clone, Serialize)]
pub struct NextLevelRequirements {
    /// The next rung, or `None` at the top of the ladder
    pub next_level: Option<&'static LevelDef>,
    /// Swims still needed (0 when already met or not required)
    pub remaining_swims: u32,
    /// Likes still needed
    pub remaining_likes: u32,
    /// Feed posts still needed
    pub remaining_feeds: u32,
}

/// Highest level whose minimums are all present and met.
pub fn user_level(swim_count: u32, like_count: u32, feed_count: u32) -> &'static LevelDef {
    for def in LEVELS.iter().rev() {
        if let (Some(min_swims), Some(min_likes), Some(min_feeds)) =
            (def.min_swim_count, def.min_like_count, def.min_feed_count)
        {
            if swim_count >= min_swims && like_count >= min_likes && feed_count >= min_feeds {
                return def;
            }
        }
    }
    &LEVELS[0]
}

/// Remaining counts toward the level above `current_level`.
pub fn next_level_requirements(
    current_level: u8,
    swim_count: u32,
    like_count: u32,
    feed_count: u32,
) -> NextLevelRequirements {
    let Some(next) = LEVELS.iter().find(|def| def.level == current_level + 1) else {
        return NextLevelRequirements {
            next_level: None,
            remaining_swims: 0,
            remaining_likes: 0,
            remaining_feeds: 0,
        };
    };

    let remaining = |min: Option<u32>, have: u32| min.map_or(0, |m| m.saturating_sub(have));

    NextLevelRequirements {
        next_level: Some(next),
        remaining_swims: remaining(next.min_swim_count, swim_count),
        remaining_likes: remaining(next.min_like_count, like_count),
        remaining_feeds: remaining(next.min_feed_count, feed_count),
    }
}

/// Whether the user has met every requirement of the next level.
pub fn can_level_up(current_level: u8, swim_count: u32, like_count: u32, feed_count: u32) -> bool {
    let req = next_level_requirements(current_level, swim_count, like_count, feed_count);
    req.next_level.is_some()
        && req.remaining_swims == 0
        && req.remaining_likes == 0
        && req.remaining_feeds == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_level_one() {
        assert_eq!(user_level(0, 0, 0).level, 1);
    }

    #[test]
    fn test_exact_thresholds_award_level() {
        assert_eq!(user_level(10, 20, 5).level, 2);
        assert_eq!(user_level(30, 50, 15).level, 3);
    }

    #[test]
    fn test_level_four_is_never_awarded_directly() {
        // Level 4 has no swim minimum, so the scan skips it; a user well
        // past its other minimums stays at level 3 until they reach level 5.
        assert_eq!(user_level(99, 150, 40).level, 3);
        assert_eq!(user_level(100, 200, 50).level, 5);
    }

    #[test]
    fn test_one_short_requirement_holds_level_back() {
        assert_eq!(user_level(10, 20, 4).level, 1);
    }

    #[test]
    fn test_next_level_requirements_clamp_to_zero() {
        let req = next_level_requirements(1, 15, 8, 0);
        let next = req.next_level.unwrap();
        assert_eq!(next.level, 2);
        assert_eq!(req.remaining_swims, 0);
        assert_eq!(req.remaining_likes, 12);
        assert_eq!(req.remaining_feeds, 5);
    }

    #[test]
    fn test_top_of_ladder_has_no_next() {
        let req = next_level_requirements(5, 500, 500, 500);
        assert!(req.next_level.is_none());
        assert!(!can_level_up(5, 500, 500, 500));
    }

    #[test]
    fn test_can_level_up() {
        assert!(!can_level_up(1, 9, 20, 5));
        assert!(can_level_up(1, 10, 20, 5));
        // Level 3 -> 4 needs no swims, only likes and feeds.
        assert!(can_level_up(3, 0, 100, 30));
        assert!(!can_level_up(3, 0, 99, 30));
    }
}
