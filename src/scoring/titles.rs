//! Player titles by cumulative score

/// One rung of the title ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Title {
    pub min_score: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Hex color used when rendering the title
    pub color: &'static str,
    pub icon: &'static str,
}

const fn tier(
    min_score: u32,
    title: &'static str,
    description: &'static str,
    color: &'static str,
    icon: &'static str,
) -> Title {
    Title {
        min_score,
        title,
        description,
        color,
        icon,
    }
}

/// Title ladder, ascending by `min_score`
pub const TITLES: [Title; 9] = [
    tier(0, "Novice", "Word Explorer", "#8B4513", "\u{1f331}"),
    tier(25, "Apprentice", "Letter Learner", "#4682B4", "\u{1f4da}"),
    tier(50, "Wordsmith", "Vocabulary Builder", "#32CD32", "\u{270f}\u{fe0f}"),
    tier(100, "Scholar", "Language Student", "#FF6347", "\u{1f393}"),
    tier(200, "Expert", "Word Warrior", "#9370DB", "\u{2694}\u{fe0f}"),
    tier(350, "Master", "Lexicon Legend", "#FFD700", "\u{1f451}"),
    tier(500, "Grandmaster", "Dictionary Deity", "#FF1493", "\u{1f3c6}"),
    tier(750, "Champion", "Word Wizard", "#00CED1", "\u{1f9d9}\u{200d}\u{2642}\u{fe0f}"),
    tier(1000, "Legend", "Alphabet God", "#FF4500", "\u{1f31f}"),
];

/// Highest title whose threshold `score` reaches
#[must_use]
pub fn title_for(score: u32) -> &'static Title {
    TITLES
        .iter()
        .rev()
        .find(|t| score >= t.min_score)
        .unwrap_or(&TITLES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_ascend() {
        assert!(TITLES.windows(2).all(|w| w[0].min_score < w[1].min_score));
        assert_eq!(TITLES[0].min_score, 0);
    }

    #[test]
    fn lowest_and_highest() {
        assert_eq!(title_for(0).title, "Novice");
        assert_eq!(title_for(1000).title, "Legend");
        assert_eq!(title_for(u32::MAX).title, "Legend");
    }

    #[test]
    fn boundaries() {
        assert_eq!(title_for(24).title, "Novice");
        assert_eq!(title_for(25).title, "Apprentice");
        assert_eq!(title_for(349).title, "Expert");
        assert_eq!(title_for(350).title, "Master");
        assert_eq!(title_for(999).title, "Champion");
    }

    #[test]
    fn monotonic_in_score() {
        let mut previous = title_for(0).min_score;
        for score in 0..1200 {
            let current = title_for(score).min_score;
            assert!(current >= previous, "title dropped at {score}");
            assert!(current <= score);
            previous = current;
        }
    }
}
