use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of menu categories offered by the admin interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Main Course")]
    MainCourse,
    Breakfast,
    Lunch,
    #[serde(rename = "Fast Food")]
    FastFood,
}

impl Category {
    /// All categories, in the order the admin form lists them.
    pub const ALL: [Category; 4] = [
        Category::MainCourse,
        Category::Breakfast,
        Category::Lunch,
        Category::FastFood,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::MainCourse => "Main Course",
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::FastFood => "Fast Food",
        };
        f.write_str(label)
    }
}

/// Whether an item is currently offered on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Active,
    Inactive,
}

impl ItemStatus {
    /// The opposite status, used by the table view's activate/deactivate toggle.
    pub fn toggled(self) -> Self {
        match self {
            ItemStatus::Active => ItemStatus::Inactive,
            ItemStatus::Inactive => ItemStatus::Active,
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemStatus::Active => f.write_str("active"),
            ItemStatus::Inactive => f.write_str("inactive"),
        }
    }
}

/// Represents a sellable dish in the restaurant menu.
///
/// The `id` is assigned by the data service on creation and is immutable
/// afterwards. Everything else is editable through [`MenuItemPatch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u64,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub status: ItemStatus,
}

/// Payload for creating a new menu item.
///
/// The service assigns the id and defaults `status` to
/// [`ItemStatus::Active`] when the draft leaves it out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemDraft {
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    pub status: Option<ItemStatus>,
}

/// Payload for updating an existing menu item.
///
/// Fields left as `None` are retained unchanged by the service's shallow
/// merge; fields set to `Some` overwrite the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub status: Option<ItemStatus>,
}

impl MenuItemPatch {
    /// A patch that only flips the status, as used by the table toggle.
    pub fn status(status: ItemStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// Coerces a raw price field from the admin form into a non-negative amount.
///
/// The form submits prices as free text. Anything that does not parse as a
/// number, or parses negative, becomes `0.0` rather than an error; rejecting
/// bad input is left to the calling layer.
pub fn coerce_price(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_price_parses_valid_input() {
        assert_eq!(coerce_price("5.50"), 5.50);
        assert_eq!(coerce_price(" 12 "), 12.0);
        assert_eq!(coerce_price("0"), 0.0);
    }

    #[test]
    fn coerce_price_defaults_invalid_input_to_zero() {
        assert_eq!(coerce_price(""), 0.0);
        assert_eq!(coerce_price("abc"), 0.0);
        assert_eq!(coerce_price("-3.25"), 0.0);
        assert_eq!(coerce_price("NaN"), 0.0);
    }

    #[test]
    fn status_toggle_flips_both_ways() {
        assert_eq!(ItemStatus::Active.toggled(), ItemStatus::Inactive);
        assert_eq!(ItemStatus::Inactive.toggled(), ItemStatus::Active);
    }

    #[test]
    fn category_labels_match_form_options() {
        let labels: Vec<String> = Category::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(labels, ["Main Course", "Breakfast", "Lunch", "Fast Food"]);
    }
}
