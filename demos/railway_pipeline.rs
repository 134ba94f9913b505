//! Order processing expressed as a railway pipeline.
//!
//! Run with `cargo run --example railway_pipeline`.

use std::collections::HashMap;

use maybe_rail::prelude::*;

#[derive(Debug, Clone)]
struct Order {
    id: u32,
    customer: &'static str,
    amount: u32,
}

struct Store {
    orders: HashMap<u32, Order>,
    balances: HashMap<&'static str, u32>,
}

impl Store {
    fn new() -> Self {
        let orders = [
            Order { id: 1, customer: "ana", amount: 30 },
            Order { id: 2, customer: "ben", amount: 0 },
            Order { id: 3, customer: "cho", amount: 120 },
        ]
        .into_iter()
        .map(|order| (order.id, order))
        .collect();
        let balances = [("ana", 100), ("ben", 50), ("cho", 80)].into_iter().collect();

        Self { orders, balances }
    }

    fn find_order(&self, id: u32) -> Maybe<Order> {
        Maybe::from(self.orders.get(&id).cloned())
    }

    fn balance_of(&self, customer: &str) -> Maybe<u32> {
        Maybe::from(self.balances.get(customer).copied())
    }

    fn charge(&self, order: &Order) -> Outcome<u32> {
        let balance = self.balance_of(order.customer).value_or_default(0);
        if balance < order.amount {
            return fail!(
                "{} cannot pay {} with a balance of {}",
                order.customer,
                order.amount,
                balance
            );
        }
        Outcome::ok(balance - order.amount)
    }
}

fn process(store: &Store, id: u32) -> Outcome<u32> {
    store
        .find_order(id)
        .to_outcome(format!("order {id} not found"))
        .ensure(|order| order.amount > 0, "order amount must be positive")
        .and_then(|order| store.charge(&order))
        .on_success(|remaining| println!("order {id}: charged, {remaining} left"))
        .on_failure(|error| println!("order {id}: rejected ({error})"))
}

fn main() {
    let store = Store::new();

    let statuses: Vec<Status> = (1..=4).map(|id| process(&store, id).status()).collect();

    Status::combine(statuses)
        .on_success(|| println!("all orders processed"))
        .on_failure(|| println!("some orders were rejected"))
        .on_both(|status| {
            if let Some(summary) = status.as_error() {
                println!("summary: {summary}");
            }
        });

    let nickname = store
        .find_order(1)
        .map(|order| order.customer)
        .match_with(|name| format!("first customer: {name}"), || "nobody".to_string());
    println!("{nickname}");
}
