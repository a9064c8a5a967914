//! AlgoViz assistant HTTP server binary

use algoviz_assistant::{
    AssistantConfig, AssistantRouter, HttpModelGateway, KnowledgeBase, ModelGateway, NullModelGateway,
};
use std::sync::Arc;

mod server {
    pub use algoviz_assistant::server::*;
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    println!("AlgoViz Assistant");
    println!("   Version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    let config = AssistantConfig::from_env()?;
    println!("✓ Run mode: {:?}", config.run_mode);

    let knowledge = KnowledgeBase::builtin();
    knowledge.validate(config.run_mode);
    println!("✓ Knowledge base: {} topics", knowledge.len());

    let gateway: Arc<dyn ModelGateway> = match config.gateway_url {
        Some(ref url) => {
            println!("✓ Model gateway: {} (timeout {} ms)", url, config.gateway_timeout.as_millis());
            Arc::new(HttpModelGateway::new(url.clone(), config.gateway_timeout))
        }
        None => {
            println!("✓ Model gateway: disabled (deterministic answers only)");
            Arc::new(NullModelGateway)
        }
    };

    let router = AssistantRouter::new(Arc::new(knowledge), gateway);

    println!("✓ Starting HTTP server on port {}...", config.port);
    println!();

    server::run_server(router, config.port).await?;

    Ok(())
}
