use rust_decimal::Decimal;
use std::cell::RefCell;
use std::rc::Rc;
use storefront::domain::model::CartItemInput;
use storefront::{CartSnapshot, CartStore};

fn burger() -> CartItemInput {
    CartItemInput {
        id: "item1".to_string(),
        name: "Veggie Burger".to_string(),
        price: Decimal::new(799, 2),
    }
}

fn fries() -> CartItemInput {
    CartItemInput {
        id: "item2".to_string(),
        name: "Fries".to_string(),
        price: Decimal::new(299, 2),
    }
}

#[test]
fn test_same_item_twice_is_one_line() {
    let cart = CartStore::new();
    cart.add_item(burger());
    cart.add_item(burger());

    let items = cart.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 2);
    assert_eq!(items[0].line_total(), Decimal::new(1598, 2));
    assert_eq!(cart.total(), Decimal::new(1598, 2));
    assert_eq!(cart.item_count(), 2);
}

#[test]
fn test_remove_leaves_other_lines() {
    let cart = CartStore::new();
    cart.add_item(burger());
    cart.add_item(fries());
    assert!(cart.remove_item("item1"));

    let items = cart.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "item2");
    assert_eq!(cart.total(), Decimal::new(299, 2));
}

#[test]
fn test_total_matches_lines_after_every_mutation() {
    let cart = CartStore::new();
    let seen: Rc<RefCell<Vec<CartSnapshot>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _subscription = cart.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));

    cart.add_item(burger());
    cart.add_item(fries());
    cart.add_item(burger());
    cart.remove_item("item2");
    cart.clear_cart();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 5);
    for snapshot in seen.iter() {
        let expected: Decimal = snapshot
            .items()
            .iter()
            .map(|line| line.price * Decimal::from(line.quantity))
            .sum();
        assert_eq!(snapshot.total(), expected);
    }
    assert!(seen[4].is_empty());
    assert_eq!(seen[4].item_count(), 0);
}

#[test]
fn test_absent_remove_is_silent_noop() {
    let cart = CartStore::new();
    cart.add_item(fries());

    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let _subscription = cart.subscribe(move |_| *counter.borrow_mut() += 1);

    assert!(!cart.remove_item("item1"));
    assert_eq!(*calls.borrow(), 0);
    assert_eq!(cart.items().len(), 1);
}

#[test]
fn test_dropped_subscription_stops_receiving() {
    let cart = CartStore::new();
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let subscription = cart.subscribe(move |_| *counter.borrow_mut() += 1);

    cart.add_item(burger());
    drop(subscription);
    cart.add_item(burger());

    assert_eq!(*calls.borrow(), 1);
    assert_eq!(cart.subscriber_count(), 0);
}

#[test]
fn test_clones_share_one_cart() {
    let cart = CartStore::new();
    let other_screen = cart.clone();
    other_screen.add_item(fries());
    assert_eq!(cart.item_count(), 1);
}
