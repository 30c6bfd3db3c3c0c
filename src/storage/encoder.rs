use crate::models::{Ingredient, Menu, Sales};
use crate::state::Pantry;

/// Separator between the fields of a record.
pub const DIVIDER: &str = "| ";
/// Separator between the name, quantity and unit of a dish ingredient.
pub const INGREDIENT_DIVIDER: &str = " - ";
/// Dish name written for a day that has no orders.
pub const NULL_ORDER_DAY: &str = "NIL";

fn encode_ingredient(ingredient: &Ingredient) -> String {
    format!(
        "{}{}{}{}{}",
        ingredient.name, INGREDIENT_DIVIDER, ingredient.qty, INGREDIENT_DIVIDER, ingredient.unit
    )
}

/// One line per dish: `name | price | ingredient - qty - unit | ...`.
pub fn encode_menu(menu: &Menu) -> Vec<String> {
    menu.dishes()
        .iter()
        .map(|dish| {
            let mut line = format!("{} {}{}", dish.name(), DIVIDER, dish.price_string());
            for ingredient in dish.ingredients() {
                line.push(' ');
                line.push_str(DIVIDER);
                line.push_str(&encode_ingredient(ingredient));
            }
            line
        })
        .collect()
}

/// One line per ingredient: `name | qty | unit`.
pub fn encode_pantry_stock(pantry: &Pantry) -> Vec<String> {
    pantry
        .ingredients()
        .iter()
        .map(|i| format!("{} {}{} {}{}", i.name, DIVIDER, i.qty, DIVIDER, i.unit))
        .collect()
}

/// One line per order: `day | dish | qty | total cost | complete`, with
/// `day | NIL` standing in for a day without orders. Days are 1-based.
pub fn encode_sales(sales: &Sales) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, orders) in sales.days().iter().enumerate() {
        let day = index + 1;
        if orders.is_empty() {
            lines.push(format!("{} {}{}", day, DIVIDER, NULL_ORDER_DAY));
            continue;
        }
        for order in orders.orders() {
            lines.push(format!(
                "{day} {d}{} {d}{} {d}{:.2} {d}{}",
                order.dish_name(),
                order.quantity(),
                order.total_cost(),
                order.is_complete(),
                day = day,
                d = DIVIDER,
            ));
        }
    }
    lines
}
