//! Fixed sample rows the mock service starts with.

use crate::model::{Category, ItemStatus, MenuItem};

fn item(
    id: u64,
    name: &str,
    category: Category,
    description: &str,
    price: f64,
    image: &str,
    status: ItemStatus,
) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        category,
        description: description.to_string(),
        price,
        image: image.to_string(),
        status,
    }
}

/// The eight sample rows (ids 1 through 8) seeded at startup.
///
/// Item 3 starts inactive so the status toggle has something to flip in the
/// demo; the repeated Margherita rows exercise the category filters.
pub fn seed_items() -> Vec<MenuItem> {
    vec![
        item(
            1,
            "Grilled Salmon",
            Category::FastFood,
            "Fresh Atlantic salmon with herbs and lemon",
            24.99,
            "https://images.pexels.com/photos/842571/pexels-photo-842571.jpeg?auto=compress&cs=tinysrgb&w=400",
            ItemStatus::Active,
        ),
        item(
            2,
            "Caesar Salad",
            Category::FastFood,
            "Fresh romaine lettuce with caesar dressing",
            12.99,
            "https://images.pexels.com/photos/2097090/pexels-photo-2097090.jpeg?auto=compress&cs=tinysrgb&w=400",
            ItemStatus::Active,
        ),
        item(
            3,
            "Chocolate Cake",
            Category::FastFood,
            "Rich chocolate cake with ganache",
            8.99,
            "https://images.pexels.com/photos/291528/pexels-photo-291528.jpeg?auto=compress&cs=tinysrgb&w=400",
            ItemStatus::Inactive,
        ),
        item(
            4,
            "Beef Burger",
            Category::MainCourse,
            "Juicy beef patty with fresh vegetables",
            16.99,
            "https://images.pexels.com/photos/1639562/pexels-photo-1639562.jpeg?auto=compress&cs=tinysrgb&w=400",
            ItemStatus::Active,
        ),
        item(
            5,
            "Margherita Pizza",
            Category::MainCourse,
            "Classic pizza with tomato, mozzarella, and basil",
            18.99,
            "https://images.pexels.com/photos/315755/pexels-photo-315755.jpeg?auto=compress&cs=tinysrgb&w=400",
            ItemStatus::Active,
        ),
        item(
            6,
            "Margherita Pizza",
            Category::Lunch,
            "Classic pizza with tomato, mozzarella, and basil",
            18.99,
            "https://images.pexels.com/photos/315755/pexels-photo-315755.jpeg?auto=compress&cs=tinysrgb&w=400",
            ItemStatus::Active,
        ),
        item(
            7,
            "Margherita Pizza",
            Category::Breakfast,
            "Classic pizza with tomato, mozzarella, and basil",
            18.99,
            "https://images.pexels.com/photos/315755/pexels-photo-315755.jpeg?auto=compress&cs=tinysrgb&w=400",
            ItemStatus::Active,
        ),
        item(
            8,
            "Margherita Pizza",
            Category::Breakfast,
            "Classic pizza with tomato, mozzarella, and basil",
            18.99,
            "https://images.pexels.com/photos/315755/pexels-photo-315755.jpeg?auto=compress&cs=tinysrgb&w=400",
            ItemStatus::Active,
        ),
    ]
}
