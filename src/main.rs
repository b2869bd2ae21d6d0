use eyre::Result;

use fanpanel::cli;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> Result<()> {
    fanpanel::init()?;
    cli::run().await
}
