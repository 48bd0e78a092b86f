use rust_decimal::Decimal;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::domain::model::{CartItemInput, CartLineItem};

// ============================================================================
// Cart Store
// ============================================================================
//
// One owned, mutable list of line items per customer session. Screens get a
// cloned handle and never touch the list directly. After every mutation the
// registered listeners are called, in registration order, with a snapshot of
// the new state. No borrow is held while a listener runs, so listeners may
// read the store or drop their own subscription.
//
// ============================================================================

/// Immutable view of the cart handed to listeners and renderers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSnapshot {
    items: Vec<CartLineItem>,
}

impl CartSnapshot {
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> Decimal {
        total_of(&self.items)
    }

    pub fn item_count(&self) -> u32 {
        count_of(&self.items)
    }
}

fn total_of(items: &[CartLineItem]) -> Decimal {
    items
        .iter()
        .map(CartLineItem::line_total)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

fn count_of(items: &[CartLineItem]) -> u32 {
    items
        .iter()
        .fold(0u32, |count, line| count.saturating_add(line.quantity))
}

type Listener = Rc<dyn Fn(&CartSnapshot)>;

#[derive(Default)]
struct CartState {
    items: Vec<CartLineItem>,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

#[derive(Clone, Default)]
pub struct CartStore {
    state: Rc<RefCell<CartState>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit. An existing line keeps its name and price and only
    /// gains quantity.
    pub fn add_item(&self, item: CartItemInput) {
        {
            let mut state = self.state.borrow_mut();
            match state.items.iter_mut().find(|line| line.id == item.id) {
                Some(line) => {
                    line.quantity = line.quantity.saturating_add(1);
                    tracing::debug!(item_id = %line.id, quantity = line.quantity, "Cart line incremented");
                }
                None => {
                    tracing::debug!(item_id = %item.id, "Cart line added");
                    state.items.push(CartLineItem {
                        id: item.id,
                        name: item.name,
                        price: item.price,
                        quantity: 1,
                    });
                }
            }
        }
        self.notify();
    }

    /// Returns whether a line was removed. Removing an absent id changes
    /// nothing and notifies nobody.
    pub fn remove_item(&self, id: &str) -> bool {
        let removed = {
            let mut state = self.state.borrow_mut();
            let before = state.items.len();
            state.items.retain(|line| line.id != id);
            state.items.len() != before
        };

        if removed {
            tracing::debug!(item_id = %id, "Cart line removed");
            self.notify();
        }
        removed
    }

    pub fn clear_cart(&self) {
        self.state.borrow_mut().items.clear();
        tracing::debug!("Cart cleared");
        self.notify();
    }

    pub fn items(&self) -> Vec<CartLineItem> {
        self.state.borrow().items.clone()
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items(),
        }
    }

    pub fn total(&self) -> Decimal {
        total_of(&self.state.borrow().items)
    }

    pub fn item_count(&self) -> u32 {
        count_of(&self.state.borrow().items)
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().items.is_empty()
    }

    /// Registers a change listener. It stays registered until the returned
    /// guard is dropped.
    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&CartSnapshot) + 'static,
    {
        let mut state = self.state.borrow_mut();
        let id = state.next_listener_id;
        state.next_listener_id += 1;
        state.listeners.push((id, Rc::new(listener)));

        Subscription {
            id,
            state: Rc::downgrade(&self.state),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    fn notify(&self) {
        let (snapshot, listeners) = {
            let state = self.state.borrow();
            let listeners: Vec<Listener> =
                state.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
            (
                CartSnapshot {
                    items: state.items.clone(),
                },
                listeners,
            )
        };

        for listener in listeners {
            listener(&snapshot);
        }
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("CartStore")
            .field("items", &state.items)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

/// Keeps a cart listener registered for as long as it lives.
pub struct Subscription {
    id: u64,
    state: Weak<RefCell<CartState>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
