use super::{Dish, Ingredient};

/// Upper bound on the number of business days Sales will grow to.
pub const MAX_DAYS: usize = 36_500;

/// One order of a dish.
#[derive(Debug, Clone)]
pub struct Order {
    dish: Dish,
    quantity: u32,
    total_cost: f64,
    is_complete: bool,
}

impl Order {
    /// A new, not yet fulfilled order priced from the dish.
    pub fn new(dish: Dish, quantity: u32) -> Self {
        let total_cost = dish.price() * quantity as f64;
        Self {
            dish,
            quantity,
            total_cost,
            is_complete: false,
        }
    }

    /// Rebuild an order as it was saved.
    pub fn from_parts(dish: Dish, quantity: u32, total_cost: f64, is_complete: bool) -> Self {
        Self {
            dish,
            quantity,
            total_cost,
            is_complete,
        }
    }

    pub fn dish_name(&self) -> &str {
        self.dish.name()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn mark_complete(&mut self) {
        self.is_complete = true;
    }

    /// Ingredients needed for the whole order (per-serving amount × quantity).
    ///
    /// Saturates on overflow, which can never be satisfied from stock.
    pub fn required_ingredients(&self) -> Vec<Ingredient> {
        self.dish
            .ingredients()
            .iter()
            .map(|i| Ingredient::new(i.name.clone(), i.qty.saturating_mul(self.quantity), i.unit))
            .collect()
    }
}

/// Completed sales of one dish within a day.
#[derive(Debug, Clone, PartialEq)]
pub struct DishSales {
    pub dish_name: String,
    pub quantity: u32,
    pub revenue: f64,
}

/// All orders taken on one business day.
#[derive(Debug, Clone, Default)]
pub struct OrderList {
    orders: Vec<Order>,
}

impl OrderList {
    pub fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Revenue from completed orders.
    pub fn total_cost(&self) -> f64 {
        self.orders
            .iter()
            .filter(|o| o.is_complete())
            .map(|o| o.total_cost())
            .sum()
    }

    /// Completed orders aggregated per dish, in first-ordered order.
    pub fn summary(&self) -> Vec<DishSales> {
        let mut summary: Vec<DishSales> = Vec::new();
        for order in self.orders.iter().filter(|o| o.is_complete()) {
            match summary
                .iter_mut()
                .find(|s| s.dish_name.eq_ignore_ascii_case(order.dish_name()))
            {
                Some(entry) => {
                    entry.quantity = entry.quantity.saturating_add(order.quantity());
                    entry.revenue += order.total_cost();
                }
                None => summary.push(DishSales {
                    dish_name: order.dish_name().to_string(),
                    quantity: order.quantity(),
                    revenue: order.total_cost(),
                }),
            }
        }
        summary
    }
}

/// Day-indexed order history. Index 0 is day 1.
#[derive(Debug, Clone, Default)]
pub struct Sales {
    order_lists: Vec<OrderList>,
}

impl Sales {
    /// Order list for a 0-based day, growing the history with empty days as needed.
    ///
    /// Callers must keep `day_index` below [`MAX_DAYS`].
    pub fn ensure_day(&mut self, day_index: usize) -> &mut OrderList {
        while self.order_lists.len() <= day_index {
            self.order_lists.push(OrderList::default());
        }
        &mut self.order_lists[day_index]
    }

    /// Order list for a 0-based day, if that day is known.
    pub fn order_list(&self, day_index: usize) -> Option<&OrderList> {
        self.order_lists.get(day_index)
    }

    pub fn days(&self) -> &[OrderList] {
        &self.order_lists
    }

    /// Number of known days, including empty ones.
    pub fn len(&self) -> usize {
        self.order_lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order_lists.is_empty()
    }

    /// The latest known day, 1-based. An empty history starts on day 1.
    pub fn last_day(&self) -> usize {
        self.order_lists.len().max(1)
    }

    pub fn total_revenue(&self) -> f64 {
        self.order_lists.iter().map(|l| l.total_cost()).sum()
    }
}
