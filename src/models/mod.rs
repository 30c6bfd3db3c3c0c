mod dish;
mod ingredient;
mod menu;
mod order;

pub use dish::Dish;
pub use ingredient::{Ingredient, Unit};
pub use menu::Menu;
pub use order::{DishSales, MAX_DAYS, Order, OrderList, Sales};

/// Longest dish or ingredient name accepted anywhere in the app.
pub const MAX_NAME_LENGTH: usize = 35;

/// True if the name contains anything other than ASCII letters, digits and spaces.
pub fn contains_special_char(name: &str) -> bool {
    name.chars().any(|c| !(c.is_ascii_alphanumeric() || c == ' '))
}

/// True if the name is longer than [`MAX_NAME_LENGTH`] characters.
pub fn is_name_length_invalid(name: &str) -> bool {
    name.chars().count() > MAX_NAME_LENGTH
}

/// Trim and check a user-facing name, returning the trimmed form.
pub fn validate_name(name: &str) -> Result<String, String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("name is empty".to_string());
    }
    if contains_special_char(trimmed) {
        return Err(format!(
            "'{}' may only contain letters, digits and spaces",
            trimmed
        ));
    }
    if is_name_length_invalid(trimmed) {
        return Err(format!(
            "'{}' is longer than {} characters",
            trimmed, MAX_NAME_LENGTH
        ));
    }
    Ok(trimmed.to_string())
}
