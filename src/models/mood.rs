//! Mood vocabulary shared by the aggregation endpoints.
//!
//! One canonical score table: `sad` = 1, `normal` = 2 (`neutral` accepted as
//! an alias), `happy` = 3, `cheerful` = 4. The storage layer accepts any
//! string; scoring happens at read time. The two readers differ only in
//! their fallback for unrecognized tags: the trend endpoint reports 0
//! (missing data), the 7-day graph reports 2 (its neutral baseline). Both
//! fallbacks are part of the respective response contracts.

/// Mood assigned when the append path creates a fresh row for today.
pub const DEFAULT_MOOD: &str = "normal";

pub fn score(mood: &str) -> Option<i32> {
    match mood {
        "sad" => Some(1),
        "normal" | "neutral" => Some(2),
        "happy" => Some(3),
        "cheerful" => Some(4),
        _ => None,
    }
}

pub fn trend_score(mood: &str) -> i32 {
    score(mood).unwrap_or(0)
}

pub fn graph_value(mood: &str) -> i32 {
    score(mood).unwrap_or(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_scores() {
        assert_eq!(trend_score("sad"), 1);
        assert_eq!(trend_score("normal"), 2);
        assert_eq!(trend_score("happy"), 3);
        assert_eq!(trend_score("cheerful"), 4);
    }

    #[test]
    fn neutral_is_an_alias_of_normal() {
        assert_eq!(trend_score("neutral"), 2);
        assert_eq!(graph_value("neutral"), 2);
    }

    #[test]
    fn unrecognized_fallbacks_differ_per_reader() {
        assert_eq!(trend_score("confused"), 0);
        assert_eq!(graph_value("confused"), 2);
        assert_eq!(trend_score(""), 0);
    }
}
