mod flags;

use anyhow::{Context, Result, bail};
use tokio::io::{AsyncWriteExt, stdout};
use tracing::info;
use twdb_client::{ClientConfig, Nanopublication, RdfFormat, TwdbClient};

use crate::flags::{Twdb, TwdbCmd};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let flags = Twdb::from_env_or_exit();
    let mut config = match &flags.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };
    if let Some(base_url) = flags.base_url {
        config.server_base_url = base_url;
    }
    let client = TwdbClient::from_config(&config)?;

    match flags.subcommand {
        TwdbCmd::Get(cmd) => {
            let Some(nanopublication) = client.get_nanopublication(&cmd.uri).await? else {
                bail!("nanopublication {} not found", cmd.uri);
            };
            let trig = nanopublication.serialize(RdfFormat::Trig)?;
            let mut stdout = stdout();
            stdout.write_all(&trig).await?;
            stdout.flush().await?;
        }
        TwdbCmd::Put(cmd) => {
            let format = RdfFormat::from_path(&cmd.file).unwrap_or(config.format);
            let bytes = tokio::fs::read(&cmd.file)
                .await
                .with_context(|| format!("unable to read {}", cmd.file.display()))?;
            let nanopublication = Nanopublication::parse(&bytes, format)
                .with_context(|| format!("{} is not a valid nanopublication", cmd.file.display()))?;
            client.put_nanopublication(&nanopublication).await?;
            info!(uri = nanopublication.uri(), "nanopublication uploaded");
        }
        TwdbCmd::Delete(cmd) => {
            if client.delete_nanopublication(&cmd.uri).await? {
                info!(uri = cmd.uri, "nanopublication deleted");
            } else {
                bail!("nanopublication {} not found", cmd.uri);
            }
        }
    }

    Ok(())
}
