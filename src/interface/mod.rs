pub mod messages;
pub mod prompts;
pub mod render;

pub use prompts::{prompt_yes_no, suggest_dish};
pub use render::{
    display_day_sales, display_dish_ingredients, display_menu, display_sales, display_stock,
};

/// Sink for user-facing output.
///
/// Core operations take this explicitly instead of printing, so they can be
/// driven from tests with [`MemoryUi`].
pub trait Ui {
    fn show(&mut self, message: &str);

    fn show_line(&mut self) {
        self.show(messages::SEPARATOR);
    }
}

/// Writes every message to stdout.
#[derive(Debug, Default)]
pub struct ConsoleUi;

impl Ui for ConsoleUi {
    fn show(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Collects messages in memory.
#[derive(Debug, Default)]
pub struct MemoryUi {
    pub messages: Vec<String>,
}

impl MemoryUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of messages containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.messages.iter().filter(|m| m.contains(needle)).count()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.count(needle) > 0
    }
}

impl Ui for MemoryUi {
    fn show(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
