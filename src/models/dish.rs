use std::fmt;

use super::Ingredient;

/// A menu item: its per-serving ingredient requirements and its price.
#[derive(Debug, Clone)]
pub struct Dish {
    name: String,
    ingredients: Vec<Ingredient>,
    price: f64,
}

impl Dish {
    pub fn new(name: impl Into<String>, ingredients: Vec<Ingredient>, price: f64) -> Self {
        Self {
            name: name.into(),
            ingredients,
            price,
        }
    }

    /// A dish that is on the menu but has no ingredient data yet.
    pub fn pending(name: impl Into<String>, price: f64) -> Self {
        Self::new(name, Vec::new(), price)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    /// Price formatted to two decimal places.
    pub fn price_string(&self) -> String {
        format!("{:.2}", self.price)
    }

    /// Whether `other` equals this dish's price once both are rounded to cents.
    pub fn same_price(&self, other: f64) -> bool {
        to_cents(self.price) == to_cents(other)
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }
}

fn to_cents(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

impl fmt::Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ${:.2}", self.name, self.price)
    }
}
