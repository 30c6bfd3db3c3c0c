pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod session;
pub mod settings;
pub mod state;
pub mod storage;

pub use error::{CafeError, Result};
pub use models::{Dish, Ingredient, Menu, Order, OrderList, Sales, Unit};
pub use session::{Request, Session};
pub use state::Pantry;
