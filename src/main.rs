use anyhow::Result;
use clap::{Parser, Subcommand};
use presigned_url_issuer::{app, Error};
use tokio_retry::strategy::FixedInterval;
use tokio_retry::RetryIf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "presigned-url-issuer")]
#[command(about = "Issue time-limited presigned upload and download URLs")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Issue a presigned S3 PUT URL for a new upload.
    Upload {
        /// Filename to store under a fresh unique key.
        filename: String,
    },
    /// Issue a signed CloudFront GET URL for an existing object key.
    Download {
        /// Object key to authorize for download.
        key: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "presigned_url_issuer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let result = match args.command {
        Command::Upload { filename } => app::create_upload_presigned_url(&filename).await,
        Command::Download { key } => {
            // The secret-store read is the one call that can fail
            // transiently; retry the whole operation once for that class
            // of failure only.
            let retry_strategy = FixedInterval::from_millis(500).take(1);
            RetryIf::spawn(
                retry_strategy,
                || app::get_download_presigned_url(&key),
                |e: &Error| matches!(e, Error::SecretRetrieval(_)),
            )
            .await
        }
    };

    match result {
        Ok(authorization) => {
            info!("Issued presigned URL for key {}", authorization.key);
            println!("{}", serde_json::to_string_pretty(&authorization)?);
            Ok(())
        }
        Err(e) => {
            error!("Authorization failed: {}", e);
            std::process::exit(1);
        }
    }
}
