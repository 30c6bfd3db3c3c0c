use std::fmt;

use tracing::{debug, info};

use crate::error::{CafeError, Result};
use crate::interface::Ui;
use crate::interface::messages::UNBOUNDED;
use crate::models::{Dish, Ingredient, Menu, Unit};

/// Notice that an ingredient is too low to make even one serving of a dish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestockAdvisory {
    pub ingredient: String,
    pub current_qty: u32,
    pub unit: Unit,
    /// The full per-serving requirement, e.g. `Rice - 100g`.
    pub needed: String,
}

impl fmt::Display for RestockAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Please restock {}: {}{} left, each dish needs {}",
            self.ingredient, self.current_qty, self.unit, self.needed
        )
    }
}

/// The ingredient stock ledger.
///
/// Names are matched case-insensitively. No mutation ever leaves a quantity
/// negative: operations that cannot be applied in full change nothing.
#[derive(Debug, Clone, Default)]
pub struct Pantry {
    stock: Vec<Ingredient>,
}

impl Pantry {
    pub fn new(stock: Vec<Ingredient>) -> Self {
        Self { stock }
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.stock
    }

    /// Get a stock record by name (case-insensitive).
    pub fn get_ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.stock.iter().find(|i| i.is_named(name))
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.stock.iter().position(|i| i.is_named(name))
    }

    /// Add `qty` of an ingredient to stock.
    ///
    /// An existing record must use the same unit; on a conflict the error
    /// carries the unit already recorded and the quantity is left unchanged.
    pub fn add_ingredient_to_stock(&mut self, name: &str, qty: u32, unit: Unit) -> Result<&Ingredient> {
        match self.position(name) {
            Some(position) => {
                let ingredient = &mut self.stock[position];
                if ingredient.unit != unit {
                    return Err(CafeError::UnitConflict {
                        name: ingredient.name.clone(),
                        previous: ingredient.unit,
                    });
                }
                ingredient.qty = ingredient
                    .qty
                    .checked_add(qty)
                    .ok_or_else(|| CafeError::QuantityOverflow(ingredient.name.clone()))?;
                debug!(ingredient = %ingredient.name, qty = ingredient.qty, "restocked");
                Ok(&self.stock[position])
            }
            None => {
                info!(ingredient = name.trim(), qty, "new ingredient in stock");
                self.stock.push(Ingredient::new(name.trim(), qty, unit));
                Ok(&self.stock[self.stock.len() - 1])
            }
        }
    }

    /// Deduct every required ingredient from stock, or nothing at all.
    ///
    /// All quantities are checked before any are deducted. Requirements that
    /// name the same ingredient more than once are summed; zero requirements
    /// are skipped.
    pub fn fulfill(&mut self, required: &[Ingredient]) -> Result<()> {
        let mut deductions: Vec<(usize, u32)> = Vec::new();
        for needed in required.iter().filter(|needed| needed.qty > 0) {
            let position = self
                .position(&needed.name)
                .ok_or_else(|| CafeError::IngredientNotInStock(needed.name.clone()))?;
            let in_stock = &self.stock[position];
            if in_stock.unit != needed.unit {
                return Err(CafeError::UnitConflict {
                    name: in_stock.name.clone(),
                    previous: in_stock.unit,
                });
            }
            match deductions.iter_mut().find(|(p, _)| *p == position) {
                Some((_, total)) => *total = total.saturating_add(needed.qty),
                None => deductions.push((position, needed.qty)),
            }
        }

        for &(position, total) in &deductions {
            let in_stock = &self.stock[position];
            if in_stock.qty < total {
                return Err(CafeError::InsufficientStock {
                    name: in_stock.name.clone(),
                    available: in_stock.qty,
                    required: total,
                });
            }
        }

        for (position, total) in deductions {
            self.stock[position].qty -= total;
        }
        Ok(())
    }

    /// Cook a dish from stock. Returns false, with stock untouched, if any
    /// ingredient is missing or short.
    pub fn is_dish_cooked(&mut self, required: &[Ingredient]) -> bool {
        match self.fulfill(required) {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "dish not cooked");
                false
            }
        }
    }

    /// Per-serving requirements recorded on the menu for `dish_name`.
    ///
    /// A dish that is not on the menu has no requirements.
    pub fn retrieve_ingredients_for_dish<'m>(&self, dish_name: &str, menu: &'m Menu) -> &'m [Ingredient] {
        menu.dish_by_name(dish_name)
            .map(|d| d.ingredients())
            .unwrap_or(&[])
    }

    /// Servings of one requirement that stock can cover, or `None` if the
    /// requirement is zero and places no limit.
    fn max_for_ingredient(&self, needed: &Ingredient) -> Option<u32> {
        if needed.qty == 0 {
            return None;
        }
        match self.get_ingredient(&needed.name) {
            Some(in_stock) if in_stock.unit == needed.unit => Some(in_stock.qty / needed.qty),
            _ => Some(0),
        }
    }

    /// Restock advisories for every ingredient of `dish` that cannot cover a
    /// single serving.
    pub fn restock_advisories(&self, dish: &Dish, menu: &Menu) -> Vec<RestockAdvisory> {
        self.retrieve_ingredients_for_dish(dish.name(), menu)
            .iter()
            .filter(|needed| self.max_for_ingredient(needed) == Some(0))
            .map(|needed| RestockAdvisory {
                ingredient: needed.name.clone(),
                current_qty: self.get_ingredient(&needed.name).map(|i| i.qty).unwrap_or(0),
                unit: needed.unit,
                needed: needed.to_string(),
            })
            .collect()
    }

    /// Servings of `dish` that current stock can make, or `None` when no
    /// ingredient limits it. Ingredients that cannot cover a single serving
    /// are reported to `ui` as restock advisories.
    pub fn max_servings(&self, dish: &Dish, menu: &Menu, ui: &mut dyn Ui) -> Option<u32> {
        let max = self
            .retrieve_ingredients_for_dish(dish.name(), menu)
            .iter()
            .filter_map(|needed| self.max_for_ingredient(needed))
            .min();

        for advisory in self.restock_advisories(dish, menu) {
            ui.show(&advisory.to_string());
        }
        max
    }

    /// Number of servings of `dish` that can be made from current stock.
    ///
    /// Returns `u32::MAX` for a dish that no ingredient limits.
    pub fn calculate_max_dishes(&self, dish: &Dish, menu: &Menu, ui: &mut dyn Ui) -> u32 {
        self.max_servings(dish, menu, ui).unwrap_or(u32::MAX)
    }

    /// Report how many servings of every menu dish can be made.
    pub fn calculate_dish_availability(&self, menu: &Menu, ui: &mut dyn Ui) {
        let dishes = menu.dishes();
        for (i, dish) in dishes.iter().enumerate() {
            ui.show(&format!("Dish: {}", dish.name()));
            let servings = self.max_servings(dish, menu, ui);
            ui.show(&format_availability(servings));
            if i + 1 != dishes.len() {
                ui.show_line();
            }
        }
    }
}

pub fn format_availability(servings: Option<u32>) -> String {
    match servings {
        Some(count) => format!("Available servings: {}", count),
        None => format!("Available servings: {}", UNBOUNDED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::MemoryUi;

    fn sample_pantry() -> Pantry {
        Pantry::new(vec![
            Ingredient::new("Rice", 200, Unit::Grams),
            Ingredient::new("Chicken", 150, Unit::Grams),
            Ingredient::new("Milk", 1000, Unit::Millilitres),
        ])
    }

    fn chicken_rice() -> Dish {
        Dish::new(
            "Chicken Rice",
            vec![
                Ingredient::new("Rice", 100, Unit::Grams),
                Ingredient::new("Chicken", 50, Unit::Grams),
            ],
            5.0,
        )
    }

    #[test]
    fn test_add_existing_ingredient_sums_quantity() {
        let mut pantry = sample_pantry();
        let rice = pantry.add_ingredient_to_stock("rice", 50, Unit::Grams).unwrap();
        assert_eq!(rice.qty, 250);
        assert_eq!(rice.name, "Rice");
        assert_eq!(pantry.len(), 3);
    }

    #[test]
    fn test_add_with_conflicting_unit_fails() {
        let mut pantry = sample_pantry();
        let err = pantry
            .add_ingredient_to_stock("Milk", 10, Unit::Grams)
            .unwrap_err();
        match err {
            CafeError::UnitConflict { previous, .. } => assert_eq!(previous, Unit::Millilitres),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(pantry.get_ingredient("milk").unwrap().qty, 1000);
    }

    #[test]
    fn test_add_overflow_is_rejected() {
        let mut pantry = sample_pantry();
        let err = pantry
            .add_ingredient_to_stock("Rice", u32::MAX, Unit::Grams)
            .unwrap_err();
        assert!(matches!(err, CafeError::QuantityOverflow(_)));
        assert_eq!(pantry.get_ingredient("Rice").unwrap().qty, 200);
    }

    #[test]
    fn test_add_new_ingredient_appends() {
        let mut pantry = sample_pantry();
        pantry.add_ingredient_to_stock(" Sugar ", 30, Unit::Grams).unwrap();
        assert_eq!(pantry.get_ingredient("sugar").unwrap().name, "Sugar");
        assert_eq!(pantry.len(), 4);
    }

    #[test]
    fn test_is_dish_cooked_deducts_stock() {
        let mut pantry = sample_pantry();
        assert!(pantry.is_dish_cooked(chicken_rice().ingredients()));
        assert_eq!(pantry.get_ingredient("Rice").unwrap().qty, 100);
        assert_eq!(pantry.get_ingredient("Chicken").unwrap().qty, 100);
    }

    #[test]
    fn test_failed_cook_leaves_stock_untouched() {
        let mut pantry = sample_pantry();
        let required = vec![
            Ingredient::new("Rice", 100, Unit::Grams),
            Ingredient::new("Chicken", 500, Unit::Grams),
        ];
        assert!(!pantry.is_dish_cooked(&required));
        assert_eq!(pantry.get_ingredient("Rice").unwrap().qty, 200);
        assert_eq!(pantry.get_ingredient("Chicken").unwrap().qty, 150);

        let missing = vec![
            Ingredient::new("Rice", 100, Unit::Grams),
            Ingredient::new("Egg", 1, Unit::Grams),
        ];
        let err = pantry.fulfill(&missing).unwrap_err();
        assert!(matches!(err, CafeError::IngredientNotInStock(_)));
        assert_eq!(pantry.get_ingredient("Rice").unwrap().qty, 200);
    }

    #[test]
    fn test_repeated_requirement_is_summed() {
        let mut pantry = sample_pantry();
        let required = vec![
            Ingredient::new("Rice", 150, Unit::Grams),
            Ingredient::new("rice", 100, Unit::Grams),
        ];
        assert!(!pantry.is_dish_cooked(&required));
        assert_eq!(pantry.get_ingredient("Rice").unwrap().qty, 200);
    }

    #[test]
    fn test_calculate_max_dishes_takes_minimum() {
        let pantry = sample_pantry();
        let menu = Menu::new(vec![chicken_rice()]);
        let mut ui = MemoryUi::new();
        // Rice 200/100 = 2, Chicken 150/50 = 3
        assert_eq!(pantry.calculate_max_dishes(&chicken_rice(), &menu, &mut ui), 2);
        assert!(ui.messages.is_empty());
    }

    #[test]
    fn test_calculate_max_dishes_missing_ingredient_is_zero() {
        let pantry = Pantry::new(vec![Ingredient::new("Rice", 200, Unit::Grams)]);
        let menu = Menu::new(vec![chicken_rice()]);
        let mut ui = MemoryUi::new();
        assert_eq!(pantry.calculate_max_dishes(&chicken_rice(), &menu, &mut ui), 0);
        assert_eq!(ui.count("Please restock Chicken: 0g left, each dish needs Chicken - 50g"), 1);
    }

    #[test]
    fn test_dish_without_ingredients_is_unbounded() {
        let pantry = sample_pantry();
        let water = Dish::pending("Water", 0.0);
        let menu = Menu::new(vec![water.clone()]);
        let mut ui = MemoryUi::new();
        assert_eq!(pantry.calculate_max_dishes(&water, &menu, &mut ui), u32::MAX);
        assert_eq!(pantry.max_servings(&water, &menu, &mut ui), None);
    }

    #[test]
    fn test_zero_requirement_neither_limits_nor_blocks() {
        let mut pantry = Pantry::default();
        let tea = Dish::new("Tea", vec![Ingredient::new("Sugar", 0, Unit::Grams)], 2.0);
        let menu = Menu::new(vec![tea.clone()]);
        let mut ui = MemoryUi::new();

        assert_eq!(pantry.max_servings(&tea, &menu, &mut ui), None);
        assert!(ui.messages.is_empty());
        assert!(pantry.is_dish_cooked(tea.ingredients()));
    }

    #[test]
    fn test_real_maximum_count_is_not_unbounded() {
        let pantry = Pantry::new(vec![Ingredient::new("Water", u32::MAX, Unit::Millilitres)]);
        let glass = Dish::new("Glass", vec![Ingredient::new("Water", 1, Unit::Millilitres)], 0.0);
        let menu = Menu::new(vec![glass.clone()]);
        let mut ui = MemoryUi::new();

        assert_eq!(pantry.max_servings(&glass, &menu, &mut ui), Some(u32::MAX));
        pantry.calculate_dish_availability(&menu, &mut ui);
        assert!(ui.contains(&format!("Available servings: {}", u32::MAX)));
        assert!(!ui.contains(UNBOUNDED));
    }

    #[test]
    fn test_availability_separates_dishes() {
        let pantry = sample_pantry();
        let menu = Menu::new(vec![chicken_rice(), Dish::pending("Water", 0.0)]);
        let mut ui = MemoryUi::new();
        pantry.calculate_dish_availability(&menu, &mut ui);
        assert_eq!(
            ui.messages,
            vec![
                "Dish: Chicken Rice".to_string(),
                "Available servings: 2".to_string(),
                crate::interface::messages::SEPARATOR.to_string(),
                "Dish: Water".to_string(),
                format!("Available servings: {}", UNBOUNDED),
            ]
        );
    }
}
