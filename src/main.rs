use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    kotoba_rain::cli::run_cli().await
}
