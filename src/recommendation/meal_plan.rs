//! Daily meal plans per risk category

use serde::Serialize;

use crate::models::Category;

/// A day of meals for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// Breakfast
    pub breakfast: &'static str,
    /// Mid-morning snack
    pub mid_morning: &'static str,
    /// Lunch
    pub lunch: &'static str,
    /// Afternoon snack
    pub afternoon: &'static str,
    /// Dinner
    pub dinner: &'static str,
    /// Advice for the caregiver
    pub notes: &'static str,
}

static SEVERE_PLAN: MealPlan = MealPlan {
    breakfast: "Fortified cereal with milk and egg",
    mid_morning: "Banana with peanut butter",
    lunch: "Rice with moong dal, carrots, and ghee",
    afternoon: "Milk with jaggery",
    dinner: "Wheat roti with vegetable curry",
    notes: "Include fortified foods. Add extra ghee/oil.",
};

static AT_RISK_PLAN: MealPlan = MealPlan {
    breakfast: "Wheat roti with curd and banana",
    mid_morning: "Orange or local fruit",
    lunch: "Rice with chana, spinach, and oil",
    afternoon: "Milk or buttermilk",
    dinner: "Moong dal with roti",
    notes: "Include 2 protein sources daily.",
};

static BORDERLINE_PLAN: MealPlan = MealPlan {
    breakfast: "Rice porridge with jaggery and ghee",
    mid_morning: "Fruit or nuts",
    lunch: "Roti with dal and seasonal vegetable",
    afternoon: "Milk or curd",
    dinner: "Rice or roti with curry",
    notes: "Ensure food variety.",
};

static NOURISHED_PLAN: MealPlan = MealPlan {
    breakfast: "Varied - roti, rice, eggs, or porridge",
    mid_morning: "Seasonal fruit",
    lunch: "Balanced meal with protein, carb, vegetable",
    afternoon: "Milk or yogurt",
    dinner: "Varied dinner maintaining balance",
    notes: "Continue healthy eating.",
};

/// Meal plan for a category
#[must_use]
pub fn meal_plan(category: Category) -> &'static MealPlan {
    match category {
        Category::SeverelyMalnourished => &SEVERE_PLAN,
        Category::AtRisk => &AT_RISK_PLAN,
        Category::Borderline => &BORDERLINE_PLAN,
        Category::Nourished => &NOURISHED_PLAN,
    }
}

/// Meal plan for a category label, falling back to the borderline plan
#[must_use]
pub fn meal_plan_label(label: &str) -> &'static MealPlan {
    label.parse().map_or_else(
        |_| {
            log::warn!("No meal plan for {label:?}, using the Borderline plan");
            &BORDERLINE_PLAN
        },
        meal_plan,
    )
}
