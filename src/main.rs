use accident_detect::{cli, config, detect, logging};
use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load().context("設定ファイルの読み込みに失敗")?;

    match cli.command {
        Commands::Detect { images, url } => {
            println!("🚗 accident-detect - 事故検出\n");

            let endpoint = config.resolve_endpoint(url.as_deref())?;
            let summary = detect::run_detect(&images, endpoint).await?;

            if !summary.is_success() {
                anyhow::bail!(
                    "{}件中{}件の送信に失敗しました",
                    summary.outcomes.len(),
                    summary.failed_count()
                );
            }
        }

        Commands::Config { set_base_url, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_base_url(url).context("ベースアドレスの保存に失敗")?;
                println!("✔ ベースアドレスを設定しました");
            }

            if show {
                let endpoint = config.resolve_endpoint(None)?;
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!(
                    "  ベースアドレス(設定): {}",
                    config.base_url.as_deref().unwrap_or("未設定")
                );
                println!("  送信先: {}", endpoint.upload_url());
            }
        }
    }

    Ok(())
}
