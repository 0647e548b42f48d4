use anyhow::Context;
use clap::Parser;
use dg_review::{api, cli, config, listing, store};
use cli::{Cli, Commands};
use config::Config;
use dg_review_common::{load_documents_file, DocumentsView};
use std::sync::Arc;
use store::{InMemoryStore, SeedData};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (mut config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) if !cli.command.needs_config() => (Config::default(), Some(e)),
        Err(e) => return Err(e.into()),
    };
    init_tracing(&config, cli.verbose);
    if let Some(e) = load_error {
        tracing::warn!(error = %e, "設定を読み込めないため既定値で続行");
    }

    match cli.command {
        Commands::Serve { host, port, static_dir, upload_dir, seed } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(static_dir) = static_dir {
                config.static_dir = static_dir;
            }
            if let Some(upload_dir) = upload_dir {
                config.upload_dir = upload_dir;
            }

            let seed = match seed {
                Some(path) => SeedData::from_file(&path)
                    .with_context(|| format!("初期データの読み込みに失敗: {}", path.display()))?,
                None => SeedData::default(),
            };
            tracing::info!(
                users = seed.users.len(),
                documents = seed.documents.len(),
                review_items = seed.review_queue.len(),
                "store seeded"
            );

            let listener = tokio::net::TcpListener::bind(config.bind_addr())
                .await
                .with_context(|| format!("バインドに失敗: {}", config.bind_addr()))?;
            let state = api::AppState::new(Arc::new(InMemoryStore::from_seed(seed)), config);
            api::serve(listener, state).await?;
        }

        Commands::Documents { file, seed, search, doc_type, dg, min_confidence } => {
            let documents = match (file, seed) {
                (Some(path), _) => load_documents_file(&path)
                    .with_context(|| format!("ドキュメントの読み込みに失敗: {}", path.display()))?,
                (None, Some(path)) => SeedData::from_file(&path)?.documents,
                (None, None) => SeedData::default().documents,
            };

            let mut view = DocumentsView::new(documents);
            let filters = view.filters_mut();
            filters.set_search(search);
            filters.set_type(doc_type);
            filters.set_dg_filter(dg);
            filters.set_min_confidence(min_confidence);

            println!("{}\n", listing::describe_filters(view.filters()));
            print!("{}", listing::render_documents(&view));
        }

        Commands::Config { set_port, show } => {
            if let Some(port) = set_port {
                config.set_port(port)?;
                println!("✔ ポートを設定しました: {}", port);
            }

            if show || set_port.is_none() {
                println!("設定: {}", Config::config_path()?.display());
                println!("  アドレス: {}", config.bind_addr());
                println!("  静的ファイル: {}", config.static_dir.display());
                println!("  アップロード先: {}", config.upload_dir.display());
                println!("  最大アップロード: {} bytes", config.max_upload_bytes);
                println!("  ログ: {}", config.log_filter);
            }
        }
    }

    Ok(())
}

/// RUST_LOGがあればそれを優先、なければ設定値（-vでdebug）
fn init_tracing(config: &Config, verbose: bool) {
    let default_filter = if verbose { "debug" } else { config.log_filter.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
