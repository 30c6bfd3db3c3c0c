use crate::interface::Ui;
use crate::interface::messages::{
    EMPTY_MENU, EMPTY_STOCK, NO_SALES, NO_SALES_FOR_DAY, SEPARATOR, VIEW_STOCK,
};
use crate::models::{Dish, Menu, OrderList, Sales};
use crate::state::Pantry;

/// Display the menu as a numbered list with prices.
pub fn display_menu(menu: &Menu, ui: &mut dyn Ui) {
    if menu.is_empty() {
        ui.show(EMPTY_MENU);
        return;
    }

    let width = menu.dishes().iter().map(|d| d.name().len()).max().unwrap_or(10);

    ui.show(SEPARATOR);
    ui.show(&format!("{:>3}  {:<width$}  {:>8}", "#", "Dish", "Price", width = width));
    ui.show(SEPARATOR);
    for (i, dish) in menu.dishes().iter().enumerate() {
        ui.show(&format!(
            "{:>3}. {:<width$}  ${:>7}",
            i + 1,
            dish.name(),
            dish.price_string(),
            width = width
        ));
    }
    ui.show(SEPARATOR);
}

/// Display the per-serving ingredients of one dish.
pub fn display_dish_ingredients(dish: &Dish, ui: &mut dyn Ui) {
    ui.show(&format!("Ingredients for {}:", dish.name()));
    if dish.ingredients().is_empty() {
        ui.show("  (no ingredient data yet)");
        return;
    }
    for ingredient in dish.ingredients() {
        ui.show(&format!(
            "  {:<20} {}{}",
            ingredient.name, ingredient.qty, ingredient.unit
        ));
    }
}

/// Display everything in the pantry.
pub fn display_stock(pantry: &Pantry, ui: &mut dyn Ui) {
    if pantry.is_empty() {
        ui.show(EMPTY_STOCK);
        return;
    }

    let width = pantry
        .ingredients()
        .iter()
        .map(|i| i.name.len())
        .max()
        .unwrap_or(10);

    ui.show(VIEW_STOCK);
    for ingredient in pantry.ingredients() {
        ui.show(&format!(
            "  {:<width$}  {:>8}{}",
            ingredient.name,
            ingredient.qty,
            ingredient.unit,
            width = width
        ));
    }
}

/// Display the completed sales of one day (1-based).
pub fn display_day_sales(day: usize, orders: &OrderList, ui: &mut dyn Ui) {
    ui.show(&format!("Day {}:", day));
    let summary = orders.summary();
    if summary.is_empty() {
        ui.show(&format!("  {}", NO_SALES_FOR_DAY));
        return;
    }

    for line in &summary {
        ui.show(&format!(
            "  {:<20} x{:<5} ${:.2}",
            line.dish_name, line.quantity, line.revenue
        ));
    }
    ui.show(&format!("  Total for day: ${:.2}", orders.total_cost()));
}

/// Display sales for every recorded day.
pub fn display_sales(sales: &Sales, ui: &mut dyn Ui) {
    if sales.days().iter().all(|d| d.is_empty()) {
        ui.show(NO_SALES);
        return;
    }

    for (i, orders) in sales.days().iter().enumerate() {
        display_day_sales(i + 1, orders, ui);
        ui.show_line();
    }
    ui.show(&format!("Total revenue: ${:.2}", sales.total_revenue()));
}
