use std::sync::Arc;

use chrono::{DateTime, Utc};

use printmart_catalog::Product;
use printmart_core::{Aggregate, AggregateRoot, CartId, DomainError, Event, Money};

/// Whether the cart currently holds anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartState {
    Empty,
    NonEmpty,
}

/// Aggregate root: Cart.
///
/// Entries are shared references into the catalog; the same product may appear
/// several times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: CartId,
    entries: Vec<Arc<Product>>,
    version: u64,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            entries: Vec::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> CartId {
        self.id
    }

    pub fn entries(&self) -> &[Arc<Product>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn state(&self) -> CartState {
        if self.entries.is_empty() {
            CartState::Empty
        } else {
            CartState::NonEmpty
        }
    }

    /// Sum of discounted prices, in entry order. Zero for an empty cart.
    pub fn total(&self) -> Money {
        self.entries.iter().map(|p| p.discounted_price()).sum()
    }

    /// Append `product` at the tail.
    pub fn add(&mut self, product: Arc<Product>) {
        let event = self.decide_add(&AddItem {
            product,
            occurred_at: Utc::now(),
        });
        self.record(event);
    }

    /// Delete the entry at `index`, shifting later entries down by one.
    ///
    /// An index past the end is rejected with `IndexOutOfRange` and the cart is
    /// left untouched.
    pub fn remove(&mut self, index: usize) -> Result<Arc<Product>, DomainError> {
        let event = self
            .decide_remove(&RemoveItem {
                index,
                occurred_at: Utc::now(),
            })
            .inspect_err(|err| {
                tracing::warn!(cart_id = %self.id, index, error = %err, "cart removal rejected");
            })?;
        let removed = Arc::clone(&event.product);
        self.record(CartEvent::ItemRemoved(event));
        Ok(removed)
    }

    /// Empty the cart. Returns how many entries were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        let event = self.decide_clear(&ClearCart {
            occurred_at: Utc::now(),
        });
        self.record(event);
        removed
    }

    fn record(&mut self, event: CartEvent) {
        self.apply(&event);
        tracing::debug!(
            event_type = event.event_type(),
            cart_id = %self.id,
            version = self.version,
            entries = self.entries.len(),
            "cart event applied"
        );
    }
}

impl AggregateRoot for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddItem {
    pub product: Arc<Product>,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveItem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveItem {
    pub index: usize,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ClearCart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearCart {
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    AddItem(AddItem),
    RemoveItem(RemoveItem),
    ClearCart(ClearCart),
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAdded {
    pub cart_id: CartId,
    pub position: usize,
    pub product: Arc<Product>,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRemoved {
    pub cart_id: CartId,
    pub index: usize,
    pub product: Arc<Product>,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CartCleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartCleared {
    pub cart_id: CartId,
    pub removed: usize,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
    ItemRemoved(ItemRemoved),
    CartCleared(CartCleared),
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded(_) => "cart.item.added",
            CartEvent::ItemRemoved(_) => "cart.item.removed",
            CartEvent::CartCleared(_) => "cart.cleared",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ItemAdded(e) => e.occurred_at,
            CartEvent::ItemRemoved(e) => e.occurred_at,
            CartEvent::CartCleared(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    /// Events are trusted to come from `handle`, which only emits `ItemRemoved`
    /// for an existing entry.
    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::ItemAdded(e) => {
                self.entries.push(Arc::clone(&e.product));
            }
            CartEvent::ItemRemoved(e) => {
                debug_assert!(
                    e.index < self.entries.len(),
                    "ItemRemoved at {} applied to a cart of {}",
                    e.index,
                    self.entries.len()
                );
                if e.index < self.entries.len() {
                    self.entries.remove(e.index);
                }
            }
            CartEvent::CartCleared(_) => {
                self.entries.clear();
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let event = match command {
            CartCommand::AddItem(cmd) => self.decide_add(cmd),
            CartCommand::RemoveItem(cmd) => CartEvent::ItemRemoved(self.decide_remove(cmd)?),
            CartCommand::ClearCart(cmd) => self.decide_clear(cmd),
        };
        Ok(vec![event])
    }
}

impl Cart {
    fn decide_add(&self, cmd: &AddItem) -> CartEvent {
        CartEvent::ItemAdded(ItemAdded {
            cart_id: self.id,
            position: self.entries.len(),
            product: Arc::clone(&cmd.product),
            occurred_at: cmd.occurred_at,
        })
    }

    fn decide_remove(&self, cmd: &RemoveItem) -> Result<ItemRemoved, DomainError> {
        let product = self
            .entries
            .get(cmd.index)
            .ok_or_else(|| DomainError::index_out_of_range(cmd.index, self.entries.len()))?;

        Ok(ItemRemoved {
            cart_id: self.id,
            index: cmd.index,
            product: Arc::clone(product),
            occurred_at: cmd.occurred_at,
        })
    }

    fn decide_clear(&self, cmd: &ClearCart) -> CartEvent {
        CartEvent::CartCleared(CartCleared {
            cart_id: self.id,
            removed: self.entries.len(),
            occurred_at: cmd.occurred_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use printmart_catalog::Catalog;

    fn test_cart() -> Cart {
        Cart::new(CartId::new())
    }

    fn photo_4r() -> Arc<Product> {
        Arc::new(Product::photo_print("Foto 4R", 3_000).unwrap())
    }

    fn mug() -> Arc<Product> {
        Arc::new(Product::merch("Mug Custom", 35_000).unwrap())
    }

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn new_cart_is_empty_with_zero_total() {
        let cart = test_cart();
        assert_eq!(cart.state(), CartState::Empty);
        assert!(cart.total().is_zero());
        assert_eq!(cart.version(), 0);
    }

    #[test]
    fn total_sums_discounted_prices() {
        let mut cart = test_cart();
        cart.add(photo_4r());
        cart.add(mug());

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.state(), CartState::NonEmpty);
        assert_eq!(cart.total().as_major_f64(), 34440.0);
    }

    #[test]
    fn removing_first_entry_keeps_the_rest() {
        let mut cart = test_cart();
        cart.add(photo_4r());
        cart.add(mug());

        let removed = cart.remove(0).unwrap();
        assert_eq!(removed.name(), "Foto 4R");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.entries()[0].name(), "Mug Custom");
        assert_eq!(cart.total().as_major_f64(), 31500.0);
    }

    #[test]
    fn removal_past_the_end_is_rejected_and_changes_nothing() {
        let mut cart = test_cart();
        cart.add(mug());
        let before = cart.clone();

        let err = cart.remove(1).unwrap_err();
        assert_eq!(err, DomainError::IndexOutOfRange { index: 1, len: 1 });
        assert_eq!(cart, before);
        assert_eq!(cart.total(), before.total());
    }

    #[test]
    fn removing_last_entry_returns_to_empty() {
        let mut cart = test_cart();
        cart.add(mug());
        cart.remove(0).unwrap();
        assert_eq!(cart.state(), CartState::Empty);
    }

    #[test]
    fn clear_empties_and_cart_is_reusable() {
        let mut cart = test_cart();
        cart.add(photo_4r());
        cart.add(mug());

        assert_eq!(cart.clear(), 2);
        assert!(cart.total().is_zero());
        assert_eq!(cart.len(), 0);
        assert_eq!(
            cart.remove(0).unwrap_err(),
            DomainError::IndexOutOfRange { index: 0, len: 0 }
        );

        cart.add(mug());
        assert_eq!(cart.total().as_major_f64(), 31500.0);
    }

    #[test]
    fn same_product_can_be_added_twice_by_reference() {
        let catalog = Catalog::print_shop().unwrap();
        let banner = catalog.product(0).unwrap();

        let mut cart = test_cart();
        cart.add(Arc::clone(&banner));
        cart.add(Arc::clone(&banner));

        assert_eq!(cart.len(), 2);
        assert!(Arc::ptr_eq(&cart.entries()[0], &cart.entries()[1]));
        assert_eq!(cart.total().as_major_f64(), 57000.0);
    }

    #[test]
    fn handle_add_reports_tail_position() {
        let mut cart = test_cart();
        cart.add(photo_4r());

        let events = cart
            .handle(&CartCommand::AddItem(AddItem {
                product: mug(),
                occurred_at: test_time(),
            }))
            .unwrap();
        assert_eq!(events.len(), 1);

        match &events[0] {
            CartEvent::ItemAdded(e) => {
                assert_eq!(e.cart_id, cart.id_typed());
                assert_eq!(e.position, 1);
                assert_eq!(e.product.name(), "Mug Custom");
            }
            _ => panic!("Expected ItemAdded event"),
        }
    }

    #[test]
    fn handle_does_not_mutate_state() {
        let mut cart = test_cart();
        cart.add(photo_4r());
        let before = cart.clone();

        let cmd = CartCommand::RemoveItem(RemoveItem {
            index: 0,
            occurred_at: test_time(),
        });
        let events1 = cart.handle(&cmd).unwrap();
        let events2 = cart.handle(&cmd).unwrap();

        assert_eq!(cart, before);
        assert_eq!(events1, events2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "ItemRemoved at 0 applied to a cart of 0")]
    fn applying_a_removal_past_the_end_is_a_bug() {
        let mut cart = test_cart();
        let event = CartEvent::ItemRemoved(ItemRemoved {
            cart_id: cart.id_typed(),
            index: 0,
            product: mug(),
            occurred_at: test_time(),
        });
        cart.apply(&event);
    }

    #[test]
    fn execute_applies_events_and_bumps_version() {
        let mut cart = test_cart();
        cart.execute(&CartCommand::AddItem(AddItem {
            product: mug(),
            occurred_at: test_time(),
        }))
        .unwrap();
        assert_eq!(cart.version(), 1);

        let events = cart
            .execute(&CartCommand::ClearCart(ClearCart {
                occurred_at: test_time(),
            }))
            .unwrap();
        assert_eq!(cart.version(), 2);
        assert_eq!(events[0].event_type(), "cart.cleared");
        match &events[0] {
            CartEvent::CartCleared(e) => assert_eq!(e.removed, 1),
            _ => panic!("Expected CartCleared event"),
        }
    }

    #[test]
    fn rejected_command_leaves_version_alone() {
        let mut cart = test_cart();
        let err = cart
            .execute(&CartCommand::RemoveItem(RemoveItem {
                index: 3,
                occurred_at: test_time(),
            }))
            .unwrap_err();
        assert!(matches!(err, DomainError::IndexOutOfRange { index: 3, len: 0 }));
        assert_eq!(cart.version(), 0);
    }

    #[test]
    fn apply_is_deterministic() {
        let cart_id = CartId::new();
        let product = mug();

        let events = vec![
            CartEvent::ItemAdded(ItemAdded {
                cart_id,
                position: 0,
                product: Arc::clone(&product),
                occurred_at: test_time(),
            }),
            CartEvent::ItemAdded(ItemAdded {
                cart_id,
                position: 1,
                product: Arc::clone(&product),
                occurred_at: test_time(),
            }),
            CartEvent::ItemRemoved(ItemRemoved {
                cart_id,
                index: 0,
                product: Arc::clone(&product),
                occurred_at: test_time(),
            }),
        ];

        let mut cart1 = Cart::new(cart_id);
        let mut cart2 = Cart::new(cart_id);
        for event in &events {
            cart1.apply(event);
            cart2.apply(event);
        }

        assert_eq!(cart1, cart2);
        assert_eq!(cart1.version(), 3);
        assert_eq!(cart1.len(), 1);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(usize),
            Remove(usize),
            Clear,
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                4 => (0usize..9).prop_map(Op::Add),
                3 => (0usize..12).prop_map(Op::Remove),
                1 => Just(Op::Clear),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: total always equals an independently recomputed sum, and
            /// the cart mirrors a plain Vec model under the same operations.
            #[test]
            fn total_stays_consistent(ops in prop::collection::vec(op(), 0..40)) {
                let catalog = Catalog::print_shop().unwrap();
                let mut cart = test_cart();
                let mut model: Vec<Arc<Product>> = Vec::new();

                for op in ops {
                    match op {
                        Op::Add(i) => {
                            let product = catalog.product(i).unwrap();
                            model.push(Arc::clone(&product));
                            cart.add(product);
                        }
                        Op::Remove(i) => {
                            let (len_before, total_before) = (cart.len(), cart.total());
                            match cart.remove(i) {
                                Ok(_) => {
                                    model.remove(i);
                                }
                                Err(err) => {
                                    prop_assert_eq!(
                                        err,
                                        DomainError::IndexOutOfRange { index: i, len: len_before }
                                    );
                                    prop_assert_eq!(cart.len(), len_before);
                                    prop_assert_eq!(cart.total(), total_before);
                                }
                            }
                        }
                        Op::Clear => {
                            cart.clear();
                            model.clear();
                            prop_assert!(cart.total().is_zero());
                            prop_assert_eq!(cart.len(), 0);
                        }
                    }

                    let recomputed: Money = model.iter().map(|p| p.discounted_price()).sum();
                    prop_assert_eq!(cart.total(), recomputed);
                    prop_assert_eq!(cart.entries(), model.as_slice());
                }
            }
        }
    }
}
