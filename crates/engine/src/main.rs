//! Staff Registry Engine - Main entry point.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    staffreg_engine::server::run().await
}
