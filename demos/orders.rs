//! Prints a summary of the orders and coupons of the account behind
//! `STRIPE_SECRET_KEY`. Pass a connected account's key as the first
//! argument to act on its behalf instead.
//!
//! cargo run --example orders [sk_connected_key]

use log::{error, info};
use paystripe::{logger::setup_logger, StripeClient, StripeError};
use std::{env as stdenv, process::exit};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let client = StripeClient::from_env()?;
    let explicit_key = stdenv::args().nth(1);

    let orders = match explicit_key.as_deref() {
        Some(key) => client.orders().with_key(key),
        None => client.orders(),
    };
    let coupons = match explicit_key.as_deref() {
        Some(key) => client.coupons().with_key(key),
        None => client.coupons(),
    };

    let newest = orders.list("", 5)?;
    for order in &newest.data {
        info!(
            "{} {} {} {}",
            order.id,
            order.status.as_deref().unwrap_or("-"),
            order.amount.unwrap_or_default(),
            order.currency.as_deref().unwrap_or("-")
        );
    }
    info!("{} orders in total", orders.count()?);

    for coupon in coupons.all()? {
        match coupons.get(&coupon.id) {
            Ok(c) => info!("coupon {} valid={}", c.id, c.valid.unwrap_or(false)),
            Err(StripeError::Api(api)) => error!("coupon {} vanished: {}", coupon.id, api.message),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

fn main() {
    if let Err(e) = setup_logger() {
        eprintln!("logger already set: {}", e);
    }
    if let Err(e) = run() {
        error!("{}", e);
        exit(1);
    }
}
