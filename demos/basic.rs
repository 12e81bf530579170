//! Basic usage example

use envreader::{FromEnv, UnwrapOrExit};

#[derive(Debug, FromEnv)]
struct Config {
    // Required field: loaded from DATABASE_URL environment variable
    pub database_url: String,

    // With default value
    #[env(default = "127.0.0.1:8080")]
    pub server_addr: String,

    // Integer type
    #[env(default = 10)]
    pub max_connections: i64,

    // Boolean type
    pub debug_mode: bool,

    // Comma-separated list
    pub allowed_origins: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("SERVER_ADDR", "0.0.0.0:3000");
    std::env::set_var("ALLOWED_ORIGINS", "https://a.example,https://b.example");

    // Load configuration
    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);
    println!("  Allowed Origins: {:?}", config.allowed_origins);

    // Individual lookups; a missing required value stops the process
    let region = envreader::get_string("REGION", "eu-west-1").unwrap_or_exit();
    let workers = envreader::get_int("WORKERS", 4);
    println!("  Region: {}", region);
    println!("  Workers: {}", workers);

    Ok(())
}
