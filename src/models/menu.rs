use crate::error::{CafeError, Result};

use super::Dish;

/// Ordered collection of dishes. Positions are exposed 1-based.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    dishes: Vec<Dish>,
}

impl Menu {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self { dishes }
    }

    /// Append a dish, rejecting case-insensitive duplicate names.
    pub fn add_dish(&mut self, dish: Dish) -> Result<()> {
        if self.contains(dish.name()) {
            return Err(CafeError::DuplicateDish(dish.name().to_string()));
        }
        self.dishes.push(dish);
        Ok(())
    }

    /// Remove and return the dish at a 1-based index.
    pub fn remove_dish(&mut self, index: usize) -> Result<Dish> {
        let position = self.position(index)?;
        Ok(self.dishes.remove(position))
    }

    /// Dish at a 1-based index.
    pub fn dish_at(&self, index: usize) -> Result<&Dish> {
        let position = self.position(index)?;
        Ok(&self.dishes[position])
    }

    pub fn dish_at_mut(&mut self, index: usize) -> Result<&mut Dish> {
        let position = self.position(index)?;
        Ok(&mut self.dishes[position])
    }

    /// Find a dish by name (case-insensitive).
    pub fn dish_by_name(&self, name: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.is_named(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.dish_by_name(name).is_some()
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    fn position(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.dishes.len() {
            return Err(CafeError::DishIndexOutOfRange {
                index,
                len: self.dishes.len(),
            });
        }
        Ok(index - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu() -> Menu {
        Menu::new(vec![
            Dish::pending("Latte", 4.5),
            Dish::pending("Chicken Rice", 6.0),
        ])
    }

    #[test]
    fn test_add_dish_rejects_duplicate_names() {
        let mut menu = sample_menu();
        let err = menu.add_dish(Dish::pending("LATTE", 5.0)).unwrap_err();
        assert!(matches!(err, CafeError::DuplicateDish(_)));
        assert_eq!(menu.len(), 2);

        menu.add_dish(Dish::pending("Mocha", 5.0)).unwrap();
        assert_eq!(menu.dish_at(3).unwrap().name(), "Mocha");
    }

    #[test]
    fn test_one_based_indexing() {
        let mut menu = sample_menu();
        assert_eq!(menu.dish_at(1).unwrap().name(), "Latte");
        assert!(menu.dish_at(0).is_err());
        assert!(menu.dish_at(3).is_err());

        let removed = menu.remove_dish(1).unwrap();
        assert_eq!(removed.name(), "Latte");
        assert_eq!(menu.dish_at(1).unwrap().name(), "Chicken Rice");
    }

    #[test]
    fn test_dish_by_name_case_insensitive() {
        let menu = sample_menu();
        assert!(menu.dish_by_name("chicken rice").is_some());
        assert!(menu.dish_by_name("Mocha").is_none());
    }
}
