//! Picker categories.

use super::{
    Emoji, ACTIVITIES_MEMBERS, ANIMALS_AND_NATURE_MEMBERS, FLAGS_MEMBERS, FOOD_AND_DRINK_MEMBERS,
    OBJECTS_MEMBERS, PEOPLE_AND_BODY_MEMBERS, SMILEYS_AND_EMOTION_MEMBERS, SYMBOLS_MEMBERS,
    TRAVEL_AND_PLACES_MEMBERS,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The nine picker tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Faces, hearts, emotion symbols
    SmileysAndEmotion,
    /// Hands, people, roles, families
    PeopleAndBody,
    /// Animals and plants
    AnimalsAndNature,
    /// Food, dishes and drinks
    FoodAndDrink,
    /// Places, transport, time, weather
    TravelAndPlaces,
    /// Events, sports, games
    Activities,
    /// Clothing, tools, household objects
    Objects,
    /// Signs, arrows, keycaps, shapes
    Symbols,
    /// Flags
    Flags,
}

impl Category {
    /// All categories in picker order.
    pub const ALL: [Self; 9] = [
        Self::SmileysAndEmotion,
        Self::PeopleAndBody,
        Self::AnimalsAndNature,
        Self::FoodAndDrink,
        Self::TravelAndPlaces,
        Self::Activities,
        Self::Objects,
        Self::Symbols,
        Self::Flags,
    ];

    /// Category ID (e.g., "smileysAndEmotion").
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::SmileysAndEmotion => "smileysAndEmotion",
            Self::PeopleAndBody => "peopleAndBody",
            Self::AnimalsAndNature => "animalsAndNature",
            Self::FoodAndDrink => "foodAndDrink",
            Self::TravelAndPlaces => "travelAndPlaces",
            Self::Activities => "activities",
            Self::Objects => "objects",
            Self::Symbols => "symbols",
            Self::Flags => "flags",
        }
    }

    /// Display name as used in emoji-test.txt group headers.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SmileysAndEmotion => "Smileys & Emotion",
            Self::PeopleAndBody => "People & Body",
            Self::AnimalsAndNature => "Animals & Nature",
            Self::FoodAndDrink => "Food & Drink",
            Self::TravelAndPlaces => "Travel & Places",
            Self::Activities => "Activities",
            Self::Objects => "Objects",
            Self::Symbols => "Symbols",
            Self::Flags => "Flags",
        }
    }

    /// Members in sort-rank order.
    #[must_use]
    pub fn emojis(self) -> &'static [Emoji] {
        match self {
            Self::SmileysAndEmotion => &SMILEYS_AND_EMOTION_MEMBERS,
            Self::PeopleAndBody => &PEOPLE_AND_BODY_MEMBERS,
            Self::AnimalsAndNature => &ANIMALS_AND_NATURE_MEMBERS,
            Self::FoodAndDrink => &FOOD_AND_DRINK_MEMBERS,
            Self::TravelAndPlaces => &TRAVEL_AND_PLACES_MEMBERS,
            Self::Activities => &ACTIVITIES_MEMBERS,
            Self::Objects => &OBJECTS_MEMBERS,
            Self::Symbols => &SYMBOLS_MEMBERS,
            Self::Flags => &FLAGS_MEMBERS,
        }
    }

    /// Looks up a category by ID.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// Looks up a category by its display name ("Food & Drink").
    #[must_use]
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.display_name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned for an unknown category ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<&str> = Category::ALL.iter().map(|c| c.id()).collect();
        write!(
            f,
            "Unknown category '{}'. Must be one of: {}",
            self.0,
            ids.join(", ")
        )
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
