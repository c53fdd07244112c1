//! Mood rating display buckets

/// One of seven discrete display buckets derived from the 1-7 mood rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoodBucket {
    Saddest,
    Sadder,
    Sad,
    Ok,
    Happy,
    Happier,
    Happiest,
}

impl MoodBucket {
    /// Map a raw mood level onto its display bucket.
    ///
    /// Levels 1-3 are the negative buckets and 5-7 the positive ones.
    /// Everything else, the neutral 4 included, renders as `Ok`.
    #[must_use]
    pub const fn from_level(level: u8) -> Self {
        match level {
            1 => Self::Saddest,
            2 => Self::Sadder,
            3 => Self::Sad,
            5 => Self::Happy,
            6 => Self::Happier,
            7 => Self::Happiest,
            _ => Self::Ok,
        }
    }

    /// Stable name of the bucket's artwork asset
    #[must_use]
    pub const fn asset_name(self) -> &'static str {
        match self {
            Self::Saddest => "saddest",
            Self::Sadder => "sadder",
            Self::Sad => "sad",
            Self::Ok => "ok",
            Self::Happy => "happy",
            Self::Happier => "happier",
            Self::Happiest => "happiest",
        }
    }

    /// Short human label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Saddest => "Saddest",
            Self::Sadder => "Sadder",
            Self::Sad => "Sad",
            Self::Ok => "Ok",
            Self::Happy => "Happy",
            Self::Happier => "Happier",
            Self::Happiest => "Happiest",
        }
    }

    /// Emoji stand-in used when no artwork is bundled
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Saddest => "😭",
            Self::Sadder => "😢",
            Self::Sad => "🙁",
            Self::Ok => "😐",
            Self::Happy => "🙂",
            Self::Happier => "😄",
            Self::Happiest => "😁",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seven_distinct_buckets_on_the_scale() {
        let buckets: HashSet<_> = (1..=7).map(MoodBucket::from_level).collect();
        assert_eq!(buckets.len(), 7);
    }

    #[test]
    fn test_off_scale_levels_render_as_ok() {
        assert_eq!(MoodBucket::from_level(4), MoodBucket::Ok);
        assert_eq!(MoodBucket::from_level(0), MoodBucket::Ok);
        assert_eq!(MoodBucket::from_level(8), MoodBucket::Ok);
        assert_eq!(MoodBucket::from_level(200), MoodBucket::Ok);
    }

    #[test]
    fn test_scale_endpoints() {
        assert_eq!(MoodBucket::from_level(1), MoodBucket::Saddest);
        assert_eq!(MoodBucket::from_level(7), MoodBucket::Happiest);
    }

    #[test]
    fn test_asset_names_are_unique() {
        let names: HashSet<_> = (1..=7)
            .map(|level| MoodBucket::from_level(level).asset_name())
            .collect();
        assert_eq!(names.len(), 7);
    }
}
