//! Food catalog
//!
//! Fixed, locally available foods grouped into the three nutritional focus
//! areas used by the recommendation matrix.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Nutritional focus area of a food
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodTag {
    /// Protein-rich foods
    Protein,
    /// Energy-dense foods
    Calories,
    /// Vitamin and mineral sources
    Micronutrients,
}

impl FoodTag {
    /// All tags in catalog order
    pub const ALL: [FoodTag; 3] = [FoodTag::Protein, FoodTag::Calories, FoodTag::Micronutrients];

    /// Lowercase label used as a lookup key
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            FoodTag::Protein => "protein",
            FoodTag::Calories => "calories",
            FoodTag::Micronutrients => "micronutrients",
        }
    }

    /// Tag for a label, `None` when unrecognized
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        FoodTag::ALL
            .into_iter()
            .find(|tag| tag.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for FoodTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoodItem {
    /// Food name
    pub name: &'static str,
    /// Suggested serving
    pub quantity: &'static str,
    /// Main nutritional value of a serving
    pub nutritional_value: &'static str,
    /// Approximate local cost
    pub cost: &'static str,
    /// Display icon
    pub icon: &'static str,
}

impl FoodItem {
    const fn new(
        name: &'static str,
        quantity: &'static str,
        nutritional_value: &'static str,
        cost: &'static str,
        icon: &'static str,
    ) -> Self {
        Self {
            name,
            quantity,
            nutritional_value,
            cost,
            icon,
        }
    }
}

/// A catalog search hit together with its focus area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoodMatch {
    /// The matching entry
    pub item: &'static FoodItem,
    /// Focus area the entry is listed under
    pub tag: FoodTag,
}

static PROTEIN_FOODS: [FoodItem; 6] = [
    FoodItem::new("Eggs", "1-2 per day", "6g protein/egg", "₹5-8", "🥚"),
    FoodItem::new("Milk/Curd", "200ml daily", "6g protein/cup", "₹15-20", "🥛"),
    FoodItem::new("Moong Dal", "1 cup cooked", "8g protein", "₹30", "🫘"),
    FoodItem::new("Chick Peas (Chana)", "¾ cup cooked", "15g protein", "₹40", "🫘"),
    FoodItem::new("Peanut Butter", "2 tbsp", "8g protein", "₹20", "🥜"),
    FoodItem::new("Chicken", "100g cooked", "26g protein", "₹60-80", "🍗"),
];

static CALORIE_FOODS: [FoodItem; 6] = [
    FoodItem::new("Rice", "1 cup cooked", "206 calories", "₹20/kg", "🍚"),
    FoodItem::new("Wheat Roti", "2-3 per meal", "70 cal/roti", "₹1/roti", "🫓"),
    FoodItem::new("Jaggery", "1 tbsp", "38 calories", "₹5", "🍯"),
    FoodItem::new("Ghee/Oil", "1 tsp", "45 calories", "₹8", "🧈"),
    FoodItem::new("Banana", "1 medium", "90 calories", "₹5-10", "🍌"),
    FoodItem::new("Sweet Potato", "1 medium", "100 calories", "₹15", "🍠"),
];

static MICRONUTRIENT_FOODS: [FoodItem; 6] = [
    FoodItem::new("Spinach", "1 cup cooked", "Iron, Vit A, Folate", "₹20", "🥬"),
    FoodItem::new("Carrots", "1 medium", "Beta-carotene", "₹5", "🥕"),
    FoodItem::new("Orange/Citrus", "1 fruit", "Vitamin C, Folate", "₹8", "🍊"),
    FoodItem::new("Tomato", "1 medium", "Lycopene, Vit C", "₹5", "🍅"),
    FoodItem::new("Fortified Wheat Flour", "As per roti", "Iron, B12, Folate", "₹30/kg", "🌾"),
    FoodItem::new("Sesame Seeds", "2 tbsp", "Calcium, Iron", "₹30", "🤎"),
];

/// Catalog entries for a focus area
#[must_use]
pub fn foods_by_category(tag: FoodTag) -> &'static [FoodItem] {
    match tag {
        FoodTag::Protein => &PROTEIN_FOODS,
        FoodTag::Calories => &CALORIE_FOODS,
        FoodTag::Micronutrients => &MICRONUTRIENT_FOODS,
    }
}

/// Catalog entries for a focus area label; empty for an unknown label
#[must_use]
pub fn foods_by_category_label(label: &str) -> &'static [FoodItem] {
    match FoodTag::from_label(label) {
        Some(tag) => foods_by_category(tag),
        None => &[],
    }
}

/// Find a food by name, ignoring case and surrounding whitespace
#[must_use]
pub fn search_food(name: &str) -> Option<FoodMatch> {
    let wanted = name.trim().to_lowercase();
    FoodTag::ALL.into_iter().find_map(|tag| {
        foods_by_category(tag)
            .iter()
            .find(|item| item.name.to_lowercase() == wanted)
            .map(|item| FoodMatch { item, tag })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_six_foods() {
        for tag in FoodTag::ALL {
            assert_eq!(foods_by_category(tag).len(), 6);
        }
    }

    #[test]
    fn test_unknown_label_is_empty() {
        assert!(foods_by_category_label("sweets").is_empty());
        assert_eq!(foods_by_category_label(" Calories ")[0].name, "Rice");
    }

    #[test]
    fn test_search_trims_input() {
        let hit = search_food("  sweet potato ").unwrap();
        assert_eq!(hit.item.name, "Sweet Potato");
        assert_eq!(hit.tag, FoodTag::Calories);
    }
}
