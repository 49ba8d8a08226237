//! Mood → color-grading filter table.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    None,
    Warm,
    Cool,
    Cinematic,
    Vintage,
    Cyberpunk,
}

impl Mood {
    /// Case-insensitive. Anything outside the table grades nothing.
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "warm" => Mood::Warm,
            "cool" => Mood::Cool,
            "cinematic" => Mood::Cinematic,
            "vintage" => Mood::Vintage,
            "cyberpunk" => Mood::Cyberpunk,
            _ => Mood::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::None => "none",
            Mood::Warm => "warm",
            Mood::Cool => "cool",
            Mood::Cinematic => "cinematic",
            Mood::Vintage => "vintage",
            Mood::Cyberpunk => "cyberpunk",
        }
    }

    pub fn filter(&self) -> &'static str {
        match self {
            Mood::None => "",
            Mood::Warm => "colorbalance=rs=.3:gs=.1:bs=-.2",
            Mood::Cool => "colorbalance=rs=-.2:gs=.1:bs=.3",
            Mood::Cinematic => "curves=r='0/0 0.5/0.7 1/1':g='0/0 0.5/0.6 1/1':b='0/0 0.5/0.8 1/1'",
            Mood::Vintage => "hue=s=0:s=0.5",
            Mood::Cyberpunk => "eq=contrast=1.5:brightness=0.05:saturation=2",
        }
    }

    pub const ALL: [Mood; 6] = [
        Mood::None,
        Mood::Warm,
        Mood::Cool,
        Mood::Cinematic,
        Mood::Vintage,
        Mood::Cyberpunk,
    ];
}

/// Color-grading expression for a free-form mood label; empty when unrecognised.
pub fn color_filter(mood: Option<&str>) -> &'static str {
    mood.map(Mood::parse).unwrap_or(Mood::None).filter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_verbatim() {
        assert_eq!(color_filter(Some("warm")), "colorbalance=rs=.3:gs=.1:bs=-.2");
        assert_eq!(color_filter(Some("cool")), "colorbalance=rs=-.2:gs=.1:bs=.3");
        assert_eq!(
            color_filter(Some("cinematic")),
            "curves=r='0/0 0.5/0.7 1/1':g='0/0 0.5/0.6 1/1':b='0/0 0.5/0.8 1/1'"
        );
        assert_eq!(color_filter(Some("vintage")), "hue=s=0:s=0.5");
        assert_eq!(
            color_filter(Some("cyberpunk")),
            "eq=contrast=1.5:brightness=0.05:saturation=2"
        );
        assert_eq!(color_filter(Some("none")), "");
    }

    #[test]
    fn mixed_case_matches_canonical_form() {
        for mood in Mood::ALL {
            let canonical = mood.as_str();
            let shouted = canonical.to_uppercase();
            let mut mixed = canonical.to_string();
            if let Some(first) = mixed.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            assert_eq!(color_filter(Some(&shouted)), color_filter(Some(canonical)));
            assert_eq!(color_filter(Some(&mixed)), color_filter(Some(canonical)));
        }
    }

    #[test]
    fn unknown_or_missing_mood_grades_nothing() {
        for tag in ["", "sepia", "warmer", " ", "noir"] {
            assert_eq!(color_filter(Some(tag)), "", "mood {tag:?}");
        }
        assert_eq!(color_filter(None), "");
    }
}
