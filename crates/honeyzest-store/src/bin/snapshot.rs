//! # Store Snapshot Dump
//!
//! Builds a store from the environment and prints its snapshot as JSON.
//! Handy for checking seed data, rates and translations without a view.
//!
//! ## Usage
//! ```bash
//! # Seeded store, KES, English
//! cargo run -p honeyzest-store --bin snapshot
//!
//! # Prices in dollars at a custom rate, Kiswahili labels
//! HONEYZEST_CURRENCY=USD HONEYZEST_RATE_USD=0.008 HONEYZEST_LANGUAGE=sw \
//!     cargo run -p honeyzest-store --bin snapshot
//!
//! # Sign in first to include that account's orders
//! cargo run -p honeyzest-store --bin snapshot -- --login admin@honeyzest.com 123
//! ```

use std::env;
use std::error::Error;

use honeyzest_store::{init_tracing, Store, StoreConfig};
use tracing::info;

const NAV_KEYS: &[&str] = &["home", "shop", "blog", "contact", "login", "signup", "admin"];

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = StoreConfig::from_env()?;
    let mut store = Store::from_config(&config);

    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|a| a == "--login") {
        let email = args.get(pos + 1).ok_or("--login needs an email")?;
        let password = args.get(pos + 2).ok_or("--login needs a password")?;
        let user = store.login(email, password)?;
        info!(user = %user.name, "Signed in");
    }

    let labels: Vec<(&str, &str)> = NAV_KEYS.iter().map(|key| (*key, store.t(key))).collect();
    info!(?labels, "Navigation labels");

    let snapshot = store.snapshot()?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
