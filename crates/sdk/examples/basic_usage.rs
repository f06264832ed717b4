//! Basic SDK usage example.
//!
//! Queries every metric family once against a local Prometheus and prints
//! the results.
//!
//! Run with: cargo run --example basic_usage

use promq_sdk::{PromqClient, PromqResult};
use std::time::Duration;

#[tokio::main]
async fn main() -> PromqResult<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    let client = PromqClient::builder()
        .host("localhost")
        .port(9090)
        .timeout(Duration::from_secs(10))
        .build()?;

    let window = Duration::from_secs(5 * 60);

    println!("Average execution time:");
    for (function, seconds) in client.gateway().average_execution_time(window).await? {
        if seconds.is_nan() {
            println!("  {function}: unmeasurable");
        } else {
            println!("  {function}: {seconds:.3}s");
        }
    }

    println!("\nInvocation rate:");
    for (function, codes) in client.gateway().invocation_rate(window).await? {
        for (code, rate) in codes {
            println!("  {function} [{code}]: {rate:.2}/s");
        }
    }

    println!("\nActive replicas:");
    for (function, count) in client.gateway().service_count().await? {
        println!("  {function}: {count}");
    }

    let cpu = client.nodes().cpu_usage(window).await?;
    let ram = client.nodes().ram_usage(window).await?;

    println!("\nNodes:");
    for (instance, cpu) in &cpu {
        let ram = ram.get(instance).copied().unwrap_or(f64::NAN);
        println!("  {instance}: cpu {:.1}%, ram {:.1}%", cpu * 100.0, ram * 100.0);
    }

    Ok(())
}
