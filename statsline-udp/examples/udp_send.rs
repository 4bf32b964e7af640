//! Sends a handful of metrics to a local StatsD server over UDP.
//!
//! The buffered sink accumulates multiple lines per datagram; remaining lines are
//! flushed when the sink is dropped at the end of `main`.

use std::net::UdpSocket;
use std::time::Duration;

use statsline::{value, MetricSink, StatsClient};
use statsline_udp::BufferedUdpMetricSink;

fn main() {
    let client = StatsClient::new().addr("localhost", 8125).scope(["example"]);

    let socket = UdpSocket::bind("0.0.0.0:0").expect("failed to bind local socket");
    let (host, port) = client.address().expect("client has an address");
    let sink = BufferedUdpMetricSink::from((host, port), socket).expect("failed to create sink");

    let requests = client.counter(["requests"]).expect("valid name").apply(1);
    sink.emit(requests.as_str()).expect("failed to emit");

    let latency = client
        .time(["latency"])
        .expect("valid name")
        .sample(0.5)
        .expect("valid rate")
        .apply(Duration::from_millis(32));
    sink.emit(latency.as_str()).expect("failed to emit");

    let inflight = client.gauge(["inflight"], value::INT).expect("valid name").apply(5);
    sink.emit(inflight.as_str()).expect("failed to emit");
}
