//! Save file decoding.
//!
//! Each record type has its own line parser returning `Result<_, LineError>`.
//! The `decode_*` functions run those parsers over a whole file, skipping
//! and reporting bad lines so one corrupted record never loses the rest.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::interface::Ui;
use crate::interface::messages::{
    ERROR_IN_PANTRY_STOCK_DATA, INVALID_MENU_DATA, SALES_LAST_DAY_TEXT_TAMPERED,
    SALES_ORDER_TEXT_TAMPERED,
};
use crate::models::{
    Dish, Ingredient, MAX_DAYS, Menu, Order, Sales, Unit, contains_special_char,
    is_name_length_invalid,
};
use crate::state::Pantry;

use super::encoder::{DIVIDER, INGREDIENT_DIVIDER, NULL_ORDER_DAY};

/// Why a single save file line was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    #[error("line is missing a field")]
    MissingField,

    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("'{0}' is not a valid number")]
    BadNumber(String),

    #[error("invalid unit: {0}")]
    InvalidUnit(String),

    #[error("invalid name '{0}'")]
    InvalidName(String),

    #[error("'{0}' appears more than once")]
    DuplicateName(String),

    #[error("quantity {0} is negative")]
    NegativeQuantity(i64),

    #[error("day {0} is out of range")]
    DayOutOfRange(i64),
}

impl LineError {
    /// Errors caused by a line being cut short rather than garbled.
    pub fn is_index_error(&self) -> bool {
        matches!(self, LineError::MissingField | LineError::DayOutOfRange(_))
    }
}

/// A decoded orders file line.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderRecord {
    /// A day with no orders, kept so later days keep their numbers.
    EmptyDay { day_index: usize },
    Order {
        day_index: usize,
        dish_name: String,
        quantity: u32,
        total_cost: f64,
        is_complete: bool,
    },
}

/// Split a line on `divider`, trimming every field and dropping trailing empties.
fn split_fields<'a>(line: &'a str, divider: &str) -> Vec<&'a str> {
    let mut fields: Vec<&str> = line.split(divider).map(str::trim).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

fn field<'a>(fields: &[&'a str], index: usize) -> Result<&'a str, LineError> {
    fields.get(index).copied().ok_or(LineError::MissingField)
}

fn parse_u32(text: &str) -> Result<u32, LineError> {
    text.parse().map_err(|_| LineError::BadNumber(text.to_string()))
}

fn parse_money(text: &str) -> Result<f64, LineError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(LineError::BadNumber(text.to_string())),
    }
}

fn parse_unit(text: &str) -> Result<Unit, LineError> {
    text.parse().map_err(LineError::InvalidUnit)
}

fn parse_dish_ingredient(text: &str) -> Result<Ingredient, LineError> {
    let parts: Vec<&str> = text.split(INGREDIENT_DIVIDER).map(str::trim).collect();
    let name = field(&parts, 0)?;
    let qty = parse_u32(field(&parts, 1)?)?;
    let unit = parse_unit(field(&parts, 2)?)?;
    Ok(Ingredient::new(name, qty, unit))
}

/// Parse `name | price | ingredient - qty - unit | ...`.
pub fn parse_dish_line(line: &str) -> Result<Dish, LineError> {
    let fields = split_fields(line, DIVIDER);
    let name = field(&fields, 0)?;
    if name.is_empty() {
        return Err(LineError::InvalidName(name.to_string()));
    }
    let price = parse_money(field(&fields, 1)?)?;
    let ingredients = fields[2..]
        .iter()
        .map(|text| parse_dish_ingredient(text))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Dish::new(name, ingredients, price))
}

/// Parse `name | qty | unit`, rejecting names already in `existing`.
pub fn parse_stock_line(line: &str, existing: &[Ingredient]) -> Result<Ingredient, LineError> {
    let fields = split_fields(line, DIVIDER);
    if fields.len() != 3 {
        return Err(LineError::FieldCount {
            expected: 3,
            found: fields.len(),
        });
    }
    let (name, qty_text, unit_text) = (fields[0], fields[1], fields[2]);

    let qty: i64 = qty_text
        .parse()
        .map_err(|_| LineError::BadNumber(qty_text.to_string()))?;

    if name.is_empty() || contains_special_char(name) || is_name_length_invalid(name) {
        return Err(LineError::InvalidName(name.to_string()));
    }
    if existing.iter().any(|i| i.is_named(name)) {
        return Err(LineError::DuplicateName(name.to_string()));
    }
    if qty < 0 {
        return Err(LineError::NegativeQuantity(qty));
    }
    let qty = u32::try_from(qty).map_err(|_| LineError::BadNumber(qty_text.to_string()))?;
    let unit = parse_unit(unit_text)?;

    Ok(Ingredient::new(name, qty, unit))
}

/// Parse `day | dish | qty | total cost | complete` or `day | NIL`.
pub fn parse_order_line(line: &str) -> Result<OrderRecord, LineError> {
    let fields = split_fields(line, DIVIDER);

    let day_text = field(&fields, 0)?;
    let day: i64 = day_text
        .parse()
        .map_err(|_| LineError::BadNumber(day_text.to_string()))?;
    if day < 1 || day > MAX_DAYS as i64 {
        return Err(LineError::DayOutOfRange(day));
    }
    let day_index = (day - 1) as usize;

    let dish_name = field(&fields, 1)?;
    if dish_name == NULL_ORDER_DAY {
        return Ok(OrderRecord::EmptyDay { day_index });
    }

    let quantity = parse_u32(field(&fields, 2)?)?;
    let total_cost = parse_money(field(&fields, 3)?)?;
    let is_complete = field(&fields, 4)? == "true";

    Ok(OrderRecord::Order {
        day_index,
        dish_name: dish_name.to_string(),
        quantity,
        total_cost,
        is_complete,
    })
}

/// Rebuild the menu, skipping corrupted lines and duplicate dishes.
pub fn decode_menu(lines: &[String], ui: &mut dyn Ui) -> Menu {
    info!(lines = lines.len(), "decoding menu");
    let mut menu = Menu::default();
    for line in lines {
        debug!(line = %line, "decoding dish");
        let result = parse_dish_line(line).and_then(|dish| {
            let name = dish.name().to_string();
            menu.add_dish(dish)
                .map_err(|_| LineError::DuplicateName(name))
        });
        if let Err(e) = result {
            warn!(line = %line, error = %e, "menu line corrupted");
            ui.show(&format!("{}{}", INVALID_MENU_DATA, line));
        }
    }
    menu
}

/// Rebuild the pantry, skipping invalid stock lines.
pub fn decode_pantry_stock(lines: &[String], ui: &mut dyn Ui) -> Pantry {
    info!(lines = lines.len(), "decoding pantry stock");
    let mut stock: Vec<Ingredient> = Vec::new();
    for line in lines {
        debug!(line = %line, "decoding stock");
        match parse_stock_line(line, &stock) {
            Ok(ingredient) => stock.push(ingredient),
            Err(e) => {
                warn!(line = %line, error = %e, "pantry stock line corrupted");
                ui.show(&format!("{}{}", ERROR_IN_PANTRY_STOCK_DATA, line));
            }
        }
    }
    Pantry::new(stock)
}

/// Rebuild the sales history against the current menu.
///
/// Days may appear in any order or with gaps; missing days become empty.
/// Orders for dishes no longer on the menu are reported and dropped. Each
/// kind of tamper message is shown at most once per call.
pub fn decode_sales(lines: &[String], menu: &Menu, ui: &mut dyn Ui) -> Sales {
    info!(lines = lines.len(), "decoding orders");
    let mut sales = Sales::default();
    let mut index_error_shown = false;
    let mut number_error_shown = false;

    for line in lines {
        debug!(line = %line, "decoding order");
        match parse_order_line(line) {
            Ok(OrderRecord::EmptyDay { day_index }) => {
                sales.ensure_day(day_index);
            }
            Ok(OrderRecord::Order {
                day_index,
                dish_name,
                quantity,
                total_cost,
                is_complete,
            }) => {
                let Some(dish) = menu.dish_by_name(&dish_name) else {
                    warn!(dish = %dish_name, "order for unknown dish");
                    ui.show(&format!(
                        "'{}' is no longer on the menu, skipping its saved order.",
                        dish_name
                    ));
                    continue;
                };
                let order = Order::from_parts(dish.clone(), quantity, total_cost, is_complete);
                sales.ensure_day(day_index).add_order(order);
            }
            Err(e) if e.is_index_error() => {
                warn!(line = %line, error = %e, "order line incomplete");
                if !index_error_shown {
                    ui.show(SALES_LAST_DAY_TEXT_TAMPERED);
                    index_error_shown = true;
                }
            }
            Err(e) => {
                warn!(line = %line, error = %e, "order line corrupted");
                if !number_error_shown {
                    ui.show(SALES_ORDER_TEXT_TAMPERED);
                    number_error_shown = true;
                }
            }
        }
    }
    sales
}
