use cafe_ctrl_rs::interface::MemoryUi;
use cafe_ctrl_rs::models::{Dish, Ingredient, Menu, Order, Unit};
use cafe_ctrl_rs::state::Pantry;
use cafe_ctrl_rs::CafeError;

fn rice_bowl() -> Dish {
    Dish::new("Rice Bowl", vec![Ingredient::new("Rice", 100, Unit::Grams)], 3.5)
}

#[test]
fn test_same_unit_additions_sum() {
    let mut pantry = Pantry::default();
    for (first, second) in [(0, 0), (1, 2), (250, 750), (u32::MAX - 5, 5)] {
        let name = format!("Flour {}", first);
        pantry.add_ingredient_to_stock(&name, first, Unit::Grams).unwrap();
        let total = pantry
            .add_ingredient_to_stock(&name.to_uppercase(), second, Unit::Grams)
            .unwrap()
            .qty;
        assert_eq!(total, first + second);
    }
}

#[test]
fn test_unit_conflict_keeps_quantity() {
    let mut pantry = Pantry::default();
    pantry.add_ingredient_to_stock("Milk", 500, Unit::Millilitres).unwrap();

    let err = pantry
        .add_ingredient_to_stock("milk", 100, Unit::Grams)
        .unwrap_err();
    assert!(matches!(err, CafeError::UnitConflict { previous: Unit::Millilitres, .. }));
    assert_eq!(pantry.get_ingredient("Milk").unwrap().qty, 500);
}

#[test]
fn test_max_dishes_follows_fulfilled_orders() {
    let mut pantry = Pantry::new(vec![Ingredient::new("Rice", 200, Unit::Grams)]);
    let menu = Menu::new(vec![rice_bowl()]);
    let mut ui = MemoryUi::new();

    assert_eq!(pantry.calculate_max_dishes(&rice_bowl(), &menu, &mut ui), 2);

    let order = Order::new(rice_bowl(), 1);
    assert!(pantry.is_dish_cooked(&order.required_ingredients()));
    assert_eq!(pantry.get_ingredient("Rice").unwrap().qty, 100);
    assert_eq!(pantry.calculate_max_dishes(&rice_bowl(), &menu, &mut ui), 1);

    let big_order = Order::new(rice_bowl(), 2);
    assert!(!pantry.is_dish_cooked(&big_order.required_ingredients()));
    assert_eq!(pantry.get_ingredient("Rice").unwrap().qty, 100);

    assert!(pantry.is_dish_cooked(&order.required_ingredients()));
    assert_eq!(pantry.calculate_max_dishes(&rice_bowl(), &menu, &mut ui), 0);
    assert_eq!(ui.count("Please restock Rice: 0g left, each dish needs Rice - 100g"), 1);
}

#[test]
fn test_max_dishes_zero_when_ingredient_absent() {
    let pantry = Pantry::new(vec![Ingredient::new("Rice", 1000, Unit::Grams)]);
    let curry = Dish::new(
        "Curry Rice",
        vec![
            Ingredient::new("Rice", 100, Unit::Grams),
            Ingredient::new("Curry", 30, Unit::Grams),
        ],
        6.0,
    );
    let menu = Menu::new(vec![curry.clone()]);
    let mut ui = MemoryUi::new();

    assert_eq!(pantry.calculate_max_dishes(&curry, &menu, &mut ui), 0);
    let advisories = pantry.restock_advisories(&curry, &menu);
    assert_eq!(advisories.len(), 1);
    assert_eq!(advisories[0].ingredient, "Curry");
    assert_eq!(advisories[0].current_qty, 0);
    assert_eq!(advisories[0].needed, "Curry - 30g");
}
