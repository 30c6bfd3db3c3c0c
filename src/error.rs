use thiserror::Error;

use crate::models::Unit;

#[derive(Debug, Error)]
pub enum CafeError {
    #[error("Unit does not match the unit already in stock for {name}. Unit used previously: {previous}")]
    UnitConflict { name: String, previous: Unit },

    #[error("Dish not found: {0}")]
    DishNotFound(String),

    #[error("A dish named '{0}' is already on the menu")]
    DuplicateDish(String),

    #[error("No dish at index {index} (menu has {len} dishes)")]
    DishIndexOutOfRange { index: usize, len: usize },

    #[error("No sales recorded for day {0}")]
    DayOutOfRange(usize),

    #[error("Ingredient not in stock: {0}")]
    IngredientNotInStock(String),

    #[error("Not enough {name} in stock: have {available}, need {required}")]
    InsufficientStock {
        name: String,
        available: u32,
        required: u32,
    },

    #[error("Quantity too large for {0}")]
    QuantityOverflow(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Could not save the {0} file(s)")]
    SaveFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CafeError>;
