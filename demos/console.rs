use std::sync::Arc;
use std::time::Duration;

use service_client::{
    text, CancellationToken, Configuration, ServiceClient, TracingLogger,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("service-client example");
    println!("======================\n");

    let config = Configuration::new("demo-api-key-12345")
        .with_base_url("https://api.example.com")
        .with_timeout(Duration::from_secs(30))
        .with_max_retries(3)
        .with_compression(true);

    println!("Configuration:");
    println!("  Base URL: {}", config.base_url);
    println!("  Timeout: {}s", config.timeout().as_secs_f64());
    println!("  Max Retries: {}\n", config.max_retries);

    if let Err(err) = config.validate() {
        println!("✗ {err}");
        return Ok(());
    }
    println!("✓ Configuration validated successfully\n");

    {
        let client = ServiceClient::with_logger(config, Arc::new(TracingLogger));
        let cancel = CancellationToken::new();

        println!("1. Validating connection...");
        let valid = client.validate_connection(&cancel).await?;
        println!("   Connection valid: {valid}\n");

        println!("2. Fetching data...");
        let data = client.get_data("resource-123", &cancel).await?;
        println!("   Retrieved: {data}\n");

        println!("3. Posting data...");
        let posted = client
            .post_data("resource-456", "sample-data", &cancel)
            .await?;
        println!("   Post successful: {posted}\n");
    }

    let sample = "hello world from MyLibrary";
    println!("String helpers");
    println!("--------------\n");
    println!("Original: {sample}");
    println!("Title Case: {}", text::to_title_case(sample));
    println!("Camel Case: {}", text::to_camel_case(sample));
    println!("Pascal Case: {}", text::to_pascal_case(sample));
    println!("Truncated (20 chars): {}", text::truncate(sample, 20));

    println!("\n✓ All examples completed successfully!");
    Ok(())
}
