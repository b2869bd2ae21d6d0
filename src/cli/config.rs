use eyre::Result;

use crate::config::Config;

pub async fn read_and_print(path: &str) -> Result<()> {
    let config = Config::load_or_default(path).await?;

    println!("{config:#?}");
    Ok(())
}
