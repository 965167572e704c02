//! Recommendation matrix
//!
//! Static guidance per risk category: how urgent the case is, which food
//! areas to focus on, and when to follow up.

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::Serialize;
use smallvec::{SmallVec, smallvec};

use crate::error::Result;
use crate::models::Category;

use super::catalog::{FoodItem, FoodTag, foods_by_category};

/// How quickly a child needs attention
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Routine care
    Low,
    /// Close monitoring
    Medium,
    /// Immediate intervention
    High,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Urgency::Low => f.write_str("low"),
            Urgency::Medium => f.write_str("medium"),
            Urgency::High => f.write_str("high"),
        }
    }
}

/// Card colours for a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardPalette {
    /// Background colour (hex)
    pub background: &'static str,
    /// Border colour (hex)
    pub border: &'static str,
}

/// Guidance for one risk category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationProfile {
    /// Category this guidance applies to
    pub category: Category,
    /// Priority headline
    pub priority: &'static str,
    /// Short description of the child's situation
    pub description: &'static str,
    /// Urgency tier
    pub urgency: Urgency,
    /// Suggested meal frequency
    pub meal_frequency: &'static str,
    /// Food areas to surface, in catalog order
    pub focus: SmallVec<[FoodTag; 3]>,
    /// Supplementation advice
    pub supplementation: &'static str,
    /// Card colours
    pub palette: CardPalette,
    /// Days until the next follow-up visit
    pub follow_up_days: u32,
}

impl RecommendationProfile {
    /// Date of the next follow-up visit counted from `from`
    #[must_use]
    pub fn follow_up_date(&self, from: NaiveDate) -> Option<NaiveDate> {
        from.checked_add_days(Days::new(u64::from(self.follow_up_days)))
    }
}

/// Guidance for a category
#[must_use]
pub fn recommend(category: Category) -> RecommendationProfile {
    match category {
        Category::SeverelyMalnourished => RecommendationProfile {
            category,
            priority: "🔴 CRITICAL - Immediate Intervention Required",
            description: "This child needs urgent medical and nutritional support",
            urgency: Urgency::High,
            meal_frequency: "4-5 meals/day + 2 snacks",
            focus: smallvec![FoodTag::Protein, FoodTag::Calories, FoodTag::Micronutrients],
            supplementation: "⚠️ CONSULT HEALTH WORKER IMMEDIATELY. Nutritional supplements are REQUIRED.",
            palette: CardPalette {
                background: "#fee2e2",
                border: "#dc2626",
            },
            follow_up_days: 7,
        },
        Category::AtRisk => RecommendationProfile {
            category,
            priority: "🟠 HIGH PRIORITY - Close Monitoring Required",
            description: "This child shows signs of malnutrition and needs support",
            urgency: Urgency::Medium,
            meal_frequency: "3 meals + 2 snacks/day",
            focus: smallvec![FoodTag::Protein, FoodTag::Calories],
            supplementation: "✓ Fortified foods strongly recommended. Schedule regular health check-ups.",
            palette: CardPalette {
                background: "#fef08a",
                border: "#f59e0b",
            },
            follow_up_days: 14,
        },
        Category::Borderline => RecommendationProfile {
            category,
            priority: "🟡 MODERATE - Preventive Care Needed",
            description: "This child is borderline; focus on improving nutrition",
            urgency: Urgency::Low,
            meal_frequency: "3 balanced meals/day",
            focus: smallvec![FoodTag::Protein, FoodTag::Micronutrients],
            supplementation: "✓ Focus on diverse food groups. Consider fortified foods.",
            palette: CardPalette {
                background: "#fed7aa",
                border: "#f97316",
            },
            follow_up_days: 30,
        },
        Category::Nourished => RecommendationProfile {
            category,
            priority: "🟢 GOOD - Healthy Status Maintained",
            description: "This child is well-nourished. Continue current practices.",
            urgency: Urgency::Low,
            meal_frequency: "3 meals/day with variety",
            focus: smallvec![FoodTag::Micronutrients],
            supplementation: "✓ Continue balanced, diverse diet. Maintain current healthy habits.",
            palette: CardPalette {
                background: "#dcfce7",
                border: "#22c55e",
            },
            follow_up_days: 60,
        },
    }
}

/// Guidance for a category label
///
/// There is no fallback here: a label outside the four categories is an
/// `UnknownCategory` error.
pub fn recommend_label(label: &str) -> Result<RecommendationProfile> {
    Ok(recommend(label.parse()?))
}

/// Guidance plus the foods to show for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    /// Guidance for the category
    pub profile: RecommendationProfile,
    /// Leading catalog entries of every focus area
    pub foods: Vec<&'static FoodItem>,
}

/// Build the guidance card for a category
///
/// Takes the first `foods_per_category` entries of each focus area, in
/// protein, calories, micronutrients order.
#[must_use]
pub fn generate_recommendations(category: Category, foods_per_category: usize) -> Recommendations {
    let profile = recommend(category);
    let foods = FoodTag::ALL
        .into_iter()
        .filter(|tag| profile.focus.contains(tag))
        .flat_map(|tag| foods_by_category(tag).iter().take(foods_per_category))
        .collect();

    Recommendations { profile, foods }
}
