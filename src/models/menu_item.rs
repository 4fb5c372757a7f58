use serde::{Deserialize, Serialize};

/// Header of the menu CSV, in column order.
pub const MENU_COLUMNS: [&str; 12] = [
    "Menu Item",
    "Calories",
    "Total Fat (g)",
    "Saturated Fat (g)",
    "Trans Fat (g)",
    "Cholesterol (mg)",
    "Sodium (mg)",
    "Carbohydrates (g)",
    "Dietary Fiber (g)",
    "Sugars (g)",
    "Added Sugars (g)",
    "Protein (g)",
];

/// One of the numeric columns of the menu table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Calories,
    TotalFat,
    SaturatedFat,
    TransFat,
    Cholesterol,
    Sodium,
    Carbohydrates,
    Fiber,
    Sugars,
    AddedSugars,
    Protein,
}

impl Nutrient {
    /// All nutrients in CSV column order.
    pub const ALL: [Nutrient; 11] = [
        Nutrient::Calories,
        Nutrient::TotalFat,
        Nutrient::SaturatedFat,
        Nutrient::TransFat,
        Nutrient::Cholesterol,
        Nutrient::Sodium,
        Nutrient::Carbohydrates,
        Nutrient::Fiber,
        Nutrient::Sugars,
        Nutrient::AddedSugars,
        Nutrient::Protein,
    ];

    /// CSV column header for this nutrient.
    pub fn column(self) -> &'static str {
        let idx = Nutrient::ALL
            .iter()
            .position(|&n| n == self)
            .unwrap_or_default();
        MENU_COLUMNS[idx + 1]
    }
}

/// A menu item with its nutrition facts.
///
/// All nutrient fields are non-negative once the collector has cleaned them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "Menu Item")]
    pub name: String,

    #[serde(rename = "Calories")]
    pub calories: f64,

    #[serde(rename = "Total Fat (g)")]
    pub total_fat: f64,

    #[serde(rename = "Saturated Fat (g)")]
    pub saturated_fat: f64,

    #[serde(rename = "Trans Fat (g)")]
    pub trans_fat: f64,

    #[serde(rename = "Cholesterol (mg)")]
    pub cholesterol: f64,

    #[serde(rename = "Sodium (mg)")]
    pub sodium: f64,

    #[serde(rename = "Carbohydrates (g)")]
    pub carbohydrates: f64,

    #[serde(rename = "Dietary Fiber (g)")]
    pub fiber: f64,

    #[serde(rename = "Sugars (g)")]
    pub sugars: f64,

    #[serde(rename = "Added Sugars (g)")]
    pub added_sugars: f64,

    #[serde(rename = "Protein (g)")]
    pub protein: f64,
}

impl MenuItem {
    /// An item with every nutrient set to zero.
    pub fn zeroed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calories: 0.0,
            total_fat: 0.0,
            saturated_fat: 0.0,
            trans_fat: 0.0,
            cholesterol: 0.0,
            sodium: 0.0,
            carbohydrates: 0.0,
            fiber: 0.0,
            sugars: 0.0,
            added_sugars: 0.0,
            protein: 0.0,
        }
    }

    /// Build an item from a name and nutrient values in column order.
    pub fn from_values(name: impl Into<String>, values: [f64; 11]) -> Self {
        let mut item = Self::zeroed(name);
        for (nutrient, value) in Nutrient::ALL.into_iter().zip(values) {
            *item.get_mut(nutrient) = value;
        }
        item
    }

    #[inline]
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::TotalFat => self.total_fat,
            Nutrient::SaturatedFat => self.saturated_fat,
            Nutrient::TransFat => self.trans_fat,
            Nutrient::Cholesterol => self.cholesterol,
            Nutrient::Sodium => self.sodium,
            Nutrient::Carbohydrates => self.carbohydrates,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sugars => self.sugars,
            Nutrient::AddedSugars => self.added_sugars,
            Nutrient::Protein => self.protein,
        }
    }

    pub fn get_mut(&mut self, nutrient: Nutrient) -> &mut f64 {
        match nutrient {
            Nutrient::Calories => &mut self.calories,
            Nutrient::TotalFat => &mut self.total_fat,
            Nutrient::SaturatedFat => &mut self.saturated_fat,
            Nutrient::TransFat => &mut self.trans_fat,
            Nutrient::Cholesterol => &mut self.cholesterol,
            Nutrient::Sodium => &mut self.sodium,
            Nutrient::Carbohydrates => &mut self.carbohydrates,
            Nutrient::Fiber => &mut self.fiber,
            Nutrient::Sugars => &mut self.sugars,
            Nutrient::AddedSugars => &mut self.added_sugars,
            Nutrient::Protein => &mut self.protein,
        }
    }

    /// First nutrient that is negative or not finite, if any.
    pub fn invalid_nutrient(&self) -> Option<Nutrient> {
        Nutrient::ALL
            .into_iter()
            .find(|&n| !(self.get(n).is_finite() && self.get(n) >= 0.0))
    }

    /// Basic validation: every nutrient is a non-negative finite number.
    pub fn is_valid(&self) -> bool {
        self.invalid_nutrient().is_none()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} cal, fat:{} sat:{} carbs:{} sugar:{} protein:{} sodium:{}",
            self.name,
            self.calories,
            self.total_fat,
            self.saturated_fat,
            self.carbohydrates,
            self.sugars,
            self.protein,
            self.sodium
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> MenuItem {
        MenuItem::from_values(
            "Bean Burrito",
            [350.0, 9.0, 3.5, 0.0, 5.0, 1040.0, 54.0, 9.0, 3.0, 0.0, 13.0],
        )
    }

    #[test]
    fn test_from_values_column_order() {
        let item = sample_item();
        assert_eq!(item.calories, 350.0);
        assert_eq!(item.sodium, 1040.0);
        assert_eq!(item.carbohydrates, 54.0);
        assert_eq!(item.protein, 13.0);
    }

    #[test]
    fn test_nutrient_columns_match_header() {
        assert_eq!(Nutrient::Calories.column(), "Calories");
        assert_eq!(Nutrient::Sodium.column(), "Sodium (mg)");
        assert_eq!(Nutrient::Protein.column(), "Protein (g)");
    }

    #[test]
    fn test_debug_string_lists_macros() {
        let line = sample_item().debug_string();
        assert!(line.starts_with("Bean Burrito: 350 cal"));
        assert!(line.contains("carbs:54"));
        assert!(line.contains("sodium:1040"));
    }

    #[test]
    fn test_is_valid() {
        let item = sample_item();
        assert!(item.is_valid());

        let mut invalid = sample_item();
        invalid.sugars = -1.0;
        assert_eq!(invalid.invalid_nutrient(), Some(Nutrient::Sugars));

        invalid.sugars = f64::NAN;
        assert!(!invalid.is_valid());
    }
}
