use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use crate::models::Unit;
use crate::session::{IngredientSpec, Request};

/// CafeCtrl: track a café's menu, pantry stock and daily sales.
#[derive(Parser, Debug)]
#[command(name = "cafe_ctrl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding the save files.
    #[arg(short, long, env = "CAFE_CTRL_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// JSON settings file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// An ingredient argument written as `NAME=QTYUNIT`, e.g. `Rice=100g`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientArg(pub IngredientSpec);

impl FromStr for IngredientArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, amount) = s
            .split_once('=')
            .ok_or_else(|| format!("expected NAME=QTYUNIT, got '{}'", s))?;
        let amount = amount.trim();
        let split = amount
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(amount.len());
        let (qty, unit) = amount.split_at(split);
        let qty: u32 = qty
            .parse()
            .map_err(|_| format!("'{}' does not start with a whole quantity", amount))?;
        let unit: Unit = unit.parse()?;
        Ok(Self(IngredientSpec {
            name: name.trim().to_string(),
            qty,
            unit,
        }))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every dish on the menu.
    ListMenu,

    /// List the ingredients of a dish.
    ListIngredients {
        /// Dish number as shown by list-menu.
        index: usize,
    },

    /// Add a dish to the menu.
    AddDish {
        #[arg(long)]
        name: String,

        #[arg(long)]
        price: f64,

        /// Per-serving ingredient, e.g. `Rice=100g`. Repeatable.
        #[arg(short, long = "ingredient")]
        ingredients: Vec<IngredientArg>,
    },

    /// Remove a dish from the menu.
    DeleteDish {
        index: usize,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Change the price of a dish.
    EditPrice {
        index: usize,

        #[arg(long)]
        price: f64,
    },

    /// Add ingredients to the pantry, e.g. `Rice=1000g Milk=2000ml`.
    BuyIngredient {
        #[arg(required = true)]
        items: Vec<IngredientArg>,
    },

    /// Show everything in the pantry.
    ViewStock,

    /// Place an order, cooking it from pantry stock.
    AddOrder {
        #[arg(long)]
        dish: String,

        #[arg(long, default_value_t = 1)]
        qty: u32,

        /// Business day (defaults to the latest day).
        #[arg(long)]
        day: Option<usize>,
    },

    /// Show how many servings of each dish can be made.
    Availability,

    /// Show sales for every day.
    ShowSales,

    /// Show sales for one day.
    ShowSalesByDay { day: usize },

    /// Write every recorded order to a CSV file.
    ExportSales { path: PathBuf },
}

impl Default for Command {
    fn default() -> Self {
        Command::ListMenu
    }
}

impl From<Command> for Request {
    fn from(command: Command) -> Self {
        let specs = |args: Vec<IngredientArg>| -> Vec<IngredientSpec> {
            args.into_iter().map(|a| a.0).collect()
        };
        match command {
            Command::ListMenu => Request::ListMenu,
            Command::ListIngredients { index } => Request::ListIngredients { index },
            Command::AddDish {
                name,
                price,
                ingredients,
            } => Request::AddDish {
                name,
                price,
                ingredients: specs(ingredients),
            },
            Command::DeleteDish { index, .. } => Request::DeleteDish { index },
            Command::EditPrice { index, price } => Request::EditPrice { index, price },
            Command::BuyIngredient { items } => Request::BuyIngredient {
                items: specs(items),
            },
            Command::ViewStock => Request::ViewStock,
            Command::AddOrder { dish, qty, day } => Request::AddOrder {
                dish,
                quantity: qty,
                day,
            },
            Command::Availability => Request::ShowAvailability,
            Command::ShowSales => Request::ShowSales,
            Command::ShowSalesByDay { day } => Request::ShowSalesByDay { day },
            Command::ExportSales { path } => Request::ExportSales { path },
        }
    }
}
