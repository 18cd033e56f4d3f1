//! Planetary-defense news feed (static snapshot).
//!
//! Items are fixed reference data; only the relative-date formatting is
//! computed, against a caller-supplied "today" so it stays testable.

use bevy_egui::egui::Color32;

/// Editorial category of a news item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NewsCategory {
    PlanetaryDefense,
    Discovery,
    Tracking,
    Policy,
    Technology,
}

impl NewsCategory {
    /// Display name.
    pub fn label(&self) -> &'static str {
        match self {
            NewsCategory::PlanetaryDefense => "Planetary Defense",
            NewsCategory::Discovery => "Discovery",
            NewsCategory::Tracking => "Tracking",
            NewsCategory::Policy => "Policy",
            NewsCategory::Technology => "Technology",
        }
    }

    /// Badge color for the category.
    pub fn color(&self) -> Color32 {
        match self {
            NewsCategory::PlanetaryDefense => Color32::from_rgb(220, 68, 68),
            NewsCategory::Discovery => Color32::from_rgb(59, 130, 246),
            NewsCategory::Tracking => Color32::from_rgb(217, 119, 6),
            NewsCategory::Policy => Color32::from_rgb(147, 51, 234),
            NewsCategory::Technology => Color32::from_rgb(22, 163, 74),
        }
    }
}

/// One feed entry.
#[derive(Clone, Copy, Debug)]
pub struct NewsItem {
    pub title: &'static str,
    pub summary: &'static str,
    /// Days before the feed snapshot date that the item was published.
    pub age_days: i64,
    pub category: NewsCategory,
}

/// Current feed, newest first.
pub static NEWS: &[NewsItem] = &[
    NewsItem {
        title: "NASA Confirms DART Mission Success",
        summary: "DART successfully altered asteroid orbit, proving \
                  planetary defense technique works.",
        age_days: 0,
        category: NewsCategory::PlanetaryDefense,
    },
    NewsItem {
        title: "New Near-Earth Asteroid Discovered",
        summary: "Pan-STARRS telescope identifies new 200m asteroid in \
                  Earth-crossing orbit.",
        age_days: 1,
        category: NewsCategory::Discovery,
    },
    NewsItem {
        title: "Apophis 2029 Approach Update",
        summary: "Latest calculations refine trajectory for historic 2029 \
                  close approach.",
        age_days: 2,
        category: NewsCategory::Tracking,
    },
    NewsItem {
        title: "ESA-NASA Collaboration Expanded",
        summary: "Joint planetary defense initiatives announced at \
                  international summit.",
        age_days: 3,
        category: NewsCategory::Policy,
    },
    NewsItem {
        title: "NEO Surveyor Mission Update",
        summary: "Next-gen infrared space telescope on track for 2027 \
                  launch.",
        age_days: 5,
        category: NewsCategory::Technology,
    },
];

/// Format an item age as a relative date string.
pub fn format_age(age_days: i64) -> String {
    match age_days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{age_days} days ago"),
        _ => format!("{} weeks ago", age_days / 7),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_sorted_newest_first() {
        for pair in NEWS.windows(2) {
            assert!(pair[0].age_days <= pair[1].age_days);
        }
    }

    #[test]
    fn test_format_age_buckets() {
        assert_eq!(format_age(0), "Today");
        assert_eq!(format_age(1), "Yesterday");
        assert_eq!(format_age(3), "3 days ago");
        assert_eq!(format_age(6), "6 days ago");
        assert_eq!(format_age(14), "2 weeks ago");
    }

    #[test]
    fn test_categories_have_distinct_colors() {
        let all = [
            NewsCategory::PlanetaryDefense,
            NewsCategory::Discovery,
            NewsCategory::Tracking,
            NewsCategory::Policy,
            NewsCategory::Technology,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }
}
