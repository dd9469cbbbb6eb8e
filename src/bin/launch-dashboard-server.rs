//! Launch Records Dashboard Server Binary
//!
//! Run with: `cargo run --bin launch-dashboard-server`

use launch_dashboard::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Note: Tracing is initialized in run_server()
    // Set RUST_LOG environment variable to control log level:
    //   RUST_LOG=debug cargo run --bin launch-dashboard-server

    // Create configuration from environment variables or defaults
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or(3000);
    let dataset_path =
        std::env::var("DATASET_PATH").unwrap_or_else(|_| "data/launches.csv".to_string());

    let config = ServerConfig::new(host, port, dataset_path);

    println!("Starting Launch Records Dashboard Server...");
    println!("   Host: {}", config.host);
    println!("   Port: {}", config.port);
    println!("   Dataset: {}", config.dataset_path);
    println!();
    println!(
        "Server will be available at: http://{}:{}",
        config.host, config.port
    );
    println!();
    println!("Available endpoints:");
    println!("  GET  /health                - Health check");
    println!("  GET  /sites                 - Site dropdown + slider config");
    println!("  GET  /dashboard             - Current chart specs");
    println!("  POST /events/site           - Site filter event");
    println!("  POST /events/payload-range  - Payload range filter event");
    println!();

    // Run server
    run_server(config).await?;

    Ok(())
}
