//! Fixed user-facing strings.

pub const SEPARATOR: &str = "------------------------------------------------------------";

// ─────────────────────────────────────────────────────────────────────────────
// Save file integrity
// ─────────────────────────────────────────────────────────────────────────────

pub const SAVE_FILE_TAMPER_DETECTED: &str =
    "Oh no! Your save files seem to have been tampered with. Some data may be lost.";
pub const HASH_STRING_TAMPERED: &str =
    "The checksum at the end of a save file is not a valid number.";
pub const SAVE_FILE_FORMAT_MENU: &str =
    "Menu save file format: DISH_NAME | PRICE | INGREDIENT - QTY - UNIT | ...";
pub const SAVE_FILE_FORMAT_PANTRY_STOCK: &str =
    "Pantry stock save file format: INGREDIENT_NAME | QTY | UNIT";
pub const SAVE_FILE_FORMAT_ORDERS: &str =
    "Orders save file format: DAY | DISH_NAME | QTY | TOTAL_COST | IS_COMPLETE";
pub const INVALID_MENU_DATA: &str = "Skipping corrupted menu line: ";
pub const ERROR_IN_PANTRY_STOCK_DATA: &str = "Skipping corrupted pantry stock line: ";
pub const SALES_LAST_DAY_TEXT_TAMPERED: &str =
    "An order line is incomplete, the last line of the orders file may have been tampered with.";
pub const SALES_ORDER_TEXT_TAMPERED: &str =
    "Some orders could not be read, the orders file has been tampered with.";
pub const DATA_FOLDER_NOT_FOUND: &str = "Data folder not found, creating a new one.";

// ─────────────────────────────────────────────────────────────────────────────
// Menu, stock and orders
// ─────────────────────────────────────────────────────────────────────────────

pub const EMPTY_MENU: &str = "The menu is empty.";
pub const EMPTY_STOCK: &str = "The pantry is empty.";
pub const VIEW_STOCK: &str = "Ingredients in stock:";
pub const NO_SALES: &str = "No sales recorded yet.";
pub const NO_SALES_FOR_DAY: &str = "No sales for this day.";
pub const ORDER_INCOMPLETE: &str = "Not enough ingredients in stock, order recorded as incomplete.";
pub const PRICE_UNCHANGED: &str = "The new price is the same as the old price.";
pub const UNBOUNDED: &str = "no ingredient limit";
