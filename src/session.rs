use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::error::{CafeError, Result};
use crate::interface::messages::{ORDER_INCOMPLETE, PRICE_UNCHANGED};
use crate::interface::{
    Ui, display_day_sales, display_dish_ingredients, display_menu, display_sales, display_stock,
    suggest_dish,
};
use crate::models::{Dish, Ingredient, MAX_DAYS, Menu, Order, Sales, Unit, validate_name};
use crate::settings::Settings;
use crate::state::{Pantry, format_availability};
use crate::storage::{SaveFile, Storage};

/// An ingredient name, quantity and unit supplied by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientSpec {
    pub name: String,
    pub qty: u32,
    pub unit: Unit,
}

/// Everything a user can ask the café to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    ListMenu,
    ListIngredients { index: usize },
    AddDish {
        name: String,
        price: f64,
        ingredients: Vec<IngredientSpec>,
    },
    DeleteDish { index: usize },
    EditPrice { index: usize, price: f64 },
    BuyIngredient { items: Vec<IngredientSpec> },
    ViewStock,
    AddOrder {
        dish: String,
        quantity: u32,
        /// 1-based; defaults to the latest known day.
        day: Option<usize>,
    },
    ShowAvailability,
    ShowSales,
    ShowSalesByDay { day: usize },
    ExportSales { path: PathBuf },
}

/// One row of the sales CSV export.
#[derive(Debug, Serialize)]
struct SalesRow<'a> {
    day: usize,
    dish: &'a str,
    quantity: u32,
    total_cost: String,
    complete: bool,
}

/// The café's in-memory state for one run, plus the storage it came from.
#[derive(Debug)]
pub struct Session {
    menu: Menu,
    pantry: Pantry,
    sales: Sales,
    storage: Storage,
}

impl Session {
    /// Load the menu, pantry and sales from the configured save files.
    pub fn open(settings: &Settings, ui: &mut dyn Ui) -> Self {
        let mut storage = Storage::new(settings);
        let menu = storage.load_menu(ui);
        let pantry = storage.load_pantry_stock(ui);
        let sales = storage.load_sales(&menu, ui);
        info!(
            dishes = menu.len(),
            ingredients = pantry.len(),
            days = sales.len(),
            "session loaded"
        );
        Self {
            menu,
            pantry,
            sales,
            storage,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn pantry(&self) -> &Pantry {
        &self.pantry
    }

    pub fn sales(&self) -> &Sales {
        &self.sales
    }

    /// Write everything back to disk. Returns the files that failed.
    pub fn save(&self, ui: &mut dyn Ui) -> Vec<SaveFile> {
        self.storage
            .save_all(&self.menu, &self.sales, &self.pantry, ui)
    }

    /// Save before exiting, failing if any file could not be written.
    pub fn shutdown(&self, ui: &mut dyn Ui) -> Result<()> {
        let failed = self.save(ui);
        if failed.is_empty() {
            return Ok(());
        }
        let labels: Vec<&str> = failed.iter().map(|f| f.label()).collect();
        Err(CafeError::SaveFailed(labels.join(", ")))
    }

    pub fn handle(&mut self, request: Request, ui: &mut dyn Ui) -> Result<()> {
        match request {
            Request::ListMenu => {
                display_menu(&self.menu, ui);
                Ok(())
            }
            Request::ListIngredients { index } => {
                display_dish_ingredients(self.menu.dish_at(index)?, ui);
                Ok(())
            }
            Request::AddDish {
                name,
                price,
                ingredients,
            } => self.add_dish(&name, price, ingredients, ui),
            Request::DeleteDish { index } => {
                let dish = self.menu.remove_dish(index)?;
                ui.show(&format!("Removed {} from the menu.", dish.name()));
                Ok(())
            }
            Request::EditPrice { index, price } => self.edit_price(index, price, ui),
            Request::BuyIngredient { items } => {
                self.buy_ingredients(items, ui);
                Ok(())
            }
            Request::ViewStock => {
                display_stock(&self.pantry, ui);
                Ok(())
            }
            Request::AddOrder { dish, quantity, day } => self.add_order(&dish, quantity, day, ui),
            Request::ShowAvailability => {
                self.pantry.calculate_dish_availability(&self.menu, ui);
                Ok(())
            }
            Request::ShowSales => {
                display_sales(&self.sales, ui);
                Ok(())
            }
            Request::ShowSalesByDay { day } => {
                let orders = day
                    .checked_sub(1)
                    .and_then(|i| self.sales.order_list(i))
                    .ok_or(CafeError::DayOutOfRange(day))?;
                display_day_sales(day, orders, ui);
                Ok(())
            }
            Request::ExportSales { path } => self.export_sales(&path, ui),
        }
    }

    fn add_dish(
        &mut self,
        name: &str,
        price: f64,
        ingredients: Vec<IngredientSpec>,
        ui: &mut dyn Ui,
    ) -> Result<()> {
        let name = validate_name(name).map_err(CafeError::InvalidInput)?;
        validate_price(price)?;

        let mut required: Vec<Ingredient> = Vec::new();
        for item in ingredients {
            let ingredient_name = validate_name(&item.name).map_err(CafeError::InvalidInput)?;
            if item.qty == 0 {
                return Err(CafeError::InvalidInput(format!(
                    "{} needs a quantity of at least 1{}",
                    ingredient_name, item.unit
                )));
            }
            // First mention of an ingredient wins.
            if required.iter().any(|i| i.is_named(&ingredient_name)) {
                continue;
            }
            required.push(Ingredient::new(ingredient_name, item.qty, item.unit));
        }

        let dish = Dish::new(name, required, price);
        let message = format!("Added {} to the menu.", dish);
        self.menu.add_dish(dish)?;
        ui.show(&message);
        Ok(())
    }

    fn edit_price(&mut self, index: usize, price: f64, ui: &mut dyn Ui) -> Result<()> {
        validate_price(price)?;
        let dish = self.menu.dish_at_mut(index)?;
        if dish.same_price(price) {
            ui.show(PRICE_UNCHANGED);
            return Ok(());
        }
        dish.set_price(price);
        ui.show(&format!("Price updated: {}", dish));
        Ok(())
    }

    /// Add each item to stock. A rejected item is reported and the rest still go in.
    fn buy_ingredients(&mut self, items: Vec<IngredientSpec>, ui: &mut dyn Ui) {
        for item in items {
            let result = validate_name(&item.name)
                .map_err(CafeError::InvalidInput)
                .and_then(|name| self.pantry.add_ingredient_to_stock(&name, item.qty, item.unit));
            match result {
                Ok(ingredient) => ui.show(&format!(
                    "Bought {}{} of {}, now {}{} in stock.",
                    item.qty, item.unit, ingredient.name, ingredient.qty, ingredient.unit
                )),
                Err(e) => ui.show(&e.to_string()),
            }
        }
    }

    /// Record an order on a day, cooking it from stock if possible.
    ///
    /// The order is recorded either way; it is complete only if every
    /// ingredient could be deducted.
    fn add_order(
        &mut self,
        dish_name: &str,
        quantity: u32,
        day: Option<usize>,
        ui: &mut dyn Ui,
    ) -> Result<()> {
        if quantity == 0 {
            return Err(CafeError::InvalidInput("order quantity must be at least 1".to_string()));
        }
        let day = day.unwrap_or_else(|| self.sales.last_day());
        if day == 0 || day > MAX_DAYS {
            return Err(CafeError::InvalidInput(format!("day {} is out of range", day)));
        }

        let Some(dish) = self.menu.dish_by_name(dish_name).cloned() else {
            if let Some(suggestion) = suggest_dish(dish_name, &self.menu) {
                ui.show(&format!("Did you mean '{}'?", suggestion));
            }
            return Err(CafeError::DishNotFound(dish_name.to_string()));
        };

        let mut order = Order::new(dish.clone(), quantity);
        match self.pantry.fulfill(&order.required_ingredients()) {
            Ok(()) => {
                order.mark_complete();
                ui.show(&format!(
                    "Order placed: {} x{}, total ${:.2}",
                    dish.name(),
                    quantity,
                    order.total_cost()
                ));
            }
            Err(e) => {
                ui.show(ORDER_INCOMPLETE);
                ui.show(&e.to_string());
                let servings = self.pantry.max_servings(&dish, &self.menu, ui);
                ui.show(&format!("{}: {}", dish.name(), format_availability(servings)));
            }
        }

        self.sales.ensure_day(day - 1).add_order(order);
        Ok(())
    }

    fn export_sales(&self, path: &std::path::Path, ui: &mut dyn Ui) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)?;
        let mut rows = 0;
        for (index, orders) in self.sales.days().iter().enumerate() {
            for order in orders.orders() {
                wtr.serialize(SalesRow {
                    day: index + 1,
                    dish: order.dish_name(),
                    quantity: order.quantity(),
                    total_cost: format!("{:.2}", order.total_cost()),
                    complete: order.is_complete(),
                })?;
                rows += 1;
            }
        }
        wtr.flush()?;
        ui.show(&format!("Exported {} orders to {}", rows, path.display()));
        Ok(())
    }
}

/// Highest price a dish may have.
pub const MAX_PRICE: f64 = 1_000_000.0;

fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(CafeError::InvalidInput(format!(
            "price must be a non-negative amount, got {}",
            price
        )));
    }
    if price > MAX_PRICE {
        return Err(CafeError::InvalidInput(format!(
            "price must be at most {:.2}, got {:.2}",
            MAX_PRICE, price
        )));
    }
    Ok(())
}
