use clap::Parser;
use eczane_common::{AppState, Endpoint, Intent, MapSettings};
use izmir_eczane::{browse, cli, config, directory, error, report, session};
use cli::{Cli, Commands};
use config::Config;
use directory::DirectoryClient;
use error::Result;
use session::Session;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "izmir_eczane=debug,eczane_common=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn endpoint_for(all: bool, config: &Config) -> Endpoint {
    if all || config.all_pharmacies {
        Endpoint::All
    } else {
        Endpoint::OnDuty
    }
}

/// 初回取得まで済ませたセッション
async fn open_session(
    config: &Config,
    base_url: Option<&str>,
    endpoint: Endpoint,
    quiet: bool,
) -> Result<Session> {
    let client = match base_url {
        Some(url) => DirectoryClient::new(url, config.timeout_seconds)?,
        None => DirectoryClient::from_config(config)?,
    };
    let state = AppState::new(MapSettings::default()).with_endpoint(endpoint);
    let mut session = Session::new(client, state);
    if quiet {
        session = session.quiet();
    }
    session.start().await;
    Ok(session)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut config = Config::load()?;
    let base_url = cli.base_url.as_deref();

    match cli.command {
        Commands::List { all, json } => {
            let session = open_session(&config, base_url, endpoint_for(all, &config), json).await?;
            let records = session.state().visible();
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                report::print_list(&records);
            }
        }

        Commands::Search { query, all, json } => {
            let mut session =
                open_session(&config, base_url, endpoint_for(all, &config), json).await?;
            session.send(Intent::SearchChanged(query)).await;
            let records = session.state().visible();
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                report::print_list(&records);
            }
        }

        Commands::Show { name, all } => {
            let mut session =
                open_session(&config, base_url, endpoint_for(all, &config), false).await?;
            let record = session.find(&name)?;
            session.send(Intent::Select(record)).await;
            if let Some(selected) = session.state().selected() {
                report::print_detail(selected, &session.state().settings().service_area);
            }
        }

        Commands::Browse { all } => {
            let mut session =
                open_session(&config, base_url, endpoint_for(all, &config), false).await?;
            browse::run_browse(&mut session).await?;
        }

        Commands::Config { set_base_url, set_timeout, show } => {
            let mut changed = false;
            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ APIベースURLを設定しました: {}", config.base_url);
                changed = true;
            }
            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                println!("✔ タイムアウトを設定しました: {}秒", seconds);
                changed = true;
            }
            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定ファイル: {}", Config::config_path()?.display());
                println!("APIベースURL: {}", config.base_url);
                println!("実効URL:      {}", config.effective_base_url());
                println!("タイムアウト: {}秒", config.timeout_seconds);
                println!(
                    "既定リスト:   {}",
                    if config.all_pharmacies { "全薬局" } else { "当番のみ" }
                );
            }
        }
    }

    Ok(())
}
