//! Builds a few metric lines and prints them, with no transport attached.

use std::time::Duration;

use statsline::{value, BuildError, StatsClient};

fn main() -> Result<(), BuildError> {
    let client = StatsClient::new().addr("localhost", 8125).scope(["foo", "bar"]);

    println!("{}", client.counter(["baz", "boom"])?.sample(0.5)?.apply(1));
    println!("{}", client.time(["baz", "boom"])?.sample(0.5)?.apply(Duration::from_millis(100)));
    println!("{}", client.gauge(["baz", "boom"], value::INT)?.apply(1));
    println!("{}", client.gauge(["baz", "boom"], value::INT)?.scope(["zoom", "doom"]).apply(3));
    println!("{}", client.set(["bar"], value::INT)?.apply(1));

    Ok(())
}
