use agrisense::client::{AnalyzeClient, ImageUpload};
use agrisense::config::{Config, API_URL_ENV};
use agrisense::error::AgriSenseError;
use agrisense::file_store::FileStore;
use agrisense::{cli, views};
use agrisense_common::{home, AnalyzeSession, Route, BRAND};
use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use indicatif::{ProgressBar, ProgressStyle};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = FileStore::in_dir(&Config::config_dir()?);
    tracing::debug!(store = %store.path().display(), "local store");

    match cli.command {
        Commands::Home => {
            println!("🌱 {}\n", BRAND);
            println!("  [{}]", home::TAGLINE);
            println!("  {} {}\n", home::HEADLINE, home::HEADLINE_ACCENT);
            println!("  {}\n", home::BLURB);
            println!("  {}: agrisense analyze <IMAGE>", Route::Analyze.nav_label());
            println!("  {}: agrisense recommend", Route::Recommend.nav_label());
        }

        Commands::Analyze { image, api_url } => {
            let config = Config::load()?;
            let api_base = api_url.unwrap_or_else(|| config.effective_api_base());
            let upload = ImageUpload::from_path(&image)?;

            let mut session = AnalyzeSession::new();
            session.select(upload.selected());
            if let Err(message) = session.begin() {
                eprintln!("{}", message);
                return Ok(ExitCode::FAILURE);
            }

            let client = AnalyzeClient::new(&api_base, config.timeout())
                .context("HTTPクライアントの初期化に失敗")?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner:.green} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message(format!("{} {}", session.button_label(), upload.file_name));
            spinner.enable_steady_tick(Duration::from_millis(100));

            let outcome = client.analyze(&upload).await;
            spinner.finish_and_clear();

            session.finish(&store, outcome);
            print!("{}", views::render_prediction(&session));

            if session.error.is_some() {
                return Ok(ExitCode::FAILURE);
            }
            println!("\n✔ 結果を保存しました（`agrisense recommend` で対処法を表示）");
        }

        Commands::Recommend { json } => {
            let report = store
                .load_report()
                .context("保存済みの解析結果を読み込めません")?;

            match (report, json) {
                (Some(report), true) => println!("{}", report.copy_text()),
                (None, true) => return Err(AgriSenseError::NoStoredResult.into()),
                (report, false) => print!("{}", views::render_recommendations(report.as_ref())),
            }
        }

        Commands::Config { set_api_url, show } => {
            let mut config = Config::load()?;

            if let Some(url) = set_api_url {
                config.set_api_base(url)?;
                config.save()?;
                println!("✔ APIベースURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  APIベースURL: {}", config.effective_api_base());
                if std::env::var(API_URL_ENV).is_ok() {
                    println!("    ({} で上書き中)", API_URL_ENV);
                }
                println!("  タイムアウト: {}秒", config.timeout().as_secs());
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!("  保存先: {}", store.path().display());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
