// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Example demonstrating a fan-out over independent lookups.

use std::time::Duration;

use handy::par::{par_for_each, par_map};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let hosts = vec!["east.example.com", "west.example.com", "north.example.com"];

    let latencies = par_map(hosts.clone(), |host| async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        (host, host.len() * 3)
    })
    .await?;

    for (host, latency) in &latencies {
        println!("{host}: {latency} ms");
    }

    par_for_each(hosts, |host| async move {
        if host.is_empty() {
            return Err("empty host name");
        }
        println!("warmed up {host}");
        Ok(())
    })
    .await?;

    Ok(())
}
