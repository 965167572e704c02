//! Food recommendations
//!
//! Static lookup tables keyed by risk category: the recommendation matrix,
//! daily meal plans, and the food catalog they draw from. Nothing here is
//! computed beyond table lookup.

pub mod catalog;
pub mod matrix;
pub mod meal_plan;

pub use catalog::{FoodItem, FoodMatch, FoodTag, foods_by_category, foods_by_category_label, search_food};
pub use matrix::{
    CardPalette, RecommendationProfile, Recommendations, Urgency, generate_recommendations,
    recommend, recommend_label,
};
pub use meal_plan::{MealPlan, meal_plan, meal_plan_label};
