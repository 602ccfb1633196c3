// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Store-change hub. Mutating commands publish the key they wrote;
//! subscribers declare the keys they depend on and get called back
//! synchronously, in registration order. Delivery is best-effort: a
//! failing subscriber is reported and the rest still run, and nothing is
//! delivered to contexts that never subscribed (they re-read the store on
//! their next run).

use crate::store::Store;
use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKey {
    Expenses,
    Incomes,
    Budgets,
}

impl StoreKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Expenses => "expenses",
            StoreKey::Incomes => "incomes",
            StoreKey::Budgets => "userBudgets",
        }
    }
}

type Callback = Box<dyn Fn(&Store, StoreKey) -> Result<()>>;

#[derive(Default)]
pub struct SyncHub {
    subscribers: Vec<(Vec<StoreKey>, Callback)>,
}

impl SyncHub {
    pub fn new() -> Self {
        SyncHub::default()
    }

    /// Register a callback for a set of store keys.
    pub fn subscribe<F>(&mut self, keys: &[StoreKey], callback: F)
    where
        F: Fn(&Store, StoreKey) -> Result<()> + 'static,
    {
        self.subscribers.push((keys.to_vec(), Box::new(callback)));
    }

    /// Notify every subscriber interested in `key`. Subscribers do not
    /// publish in turn, so a callback that writes another store does not
    /// cascade.
    pub fn publish(&self, store: &Store, key: StoreKey) {
        for (keys, callback) in &self.subscribers {
            if keys.contains(&key) {
                if let Err(e) = callback(store, key) {
                    eprintln!("sync: subscriber for '{}' failed: {:#}", key.as_str(), e);
                }
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
