pub mod accounts;
pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod entities;
pub mod models;
pub mod services;
pub mod slug;
pub mod state;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::{AdCommands, AdvertiserCommands, Cli, Commands, ProfileCommands};
pub use config::Config;
use state::SharedState;

/// Entry point after the runtime is built. `config` is loaded once by `main`.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let cli = Cli::parse();

    config.validate()?;

    init_tracing(&config)?;

    match &config.source {
        Some(path) => info!("Loaded config from: {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(config).await,

        Commands::Init => {
            if Config::create_default_if_missing()? {
                println!("✓ Config file created. Edit config.toml and run again.");
            } else {
                println!("config.toml already exists, leaving it untouched.");
            }
            Ok(())
        }

        Commands::Advertiser { command } => {
            let state = SharedState::new(config).await?;
            match command {
                AdvertiserCommands::Add {
                    username,
                    email,
                    password,
                } => cli::cmd_advertiser_add(&state, &username, &email, &password).await,
                AdvertiserCommands::Check { username, password } => {
                    cli::cmd_advertiser_check(&state, &username, &password).await
                }
                AdvertiserCommands::ResetToken { email } => {
                    cli::cmd_advertiser_reset_token(&state, &email).await
                }
                AdvertiserCommands::ResetPassword {
                    username,
                    token,
                    new_password,
                } => {
                    cli::cmd_advertiser_reset_password(&state, &username, &token, &new_password)
                        .await
                }
            }
        }

        Commands::Profile { command } => {
            let state = SharedState::new(config).await?;
            match command {
                ProfileCommands::Add {
                    advertiser,
                    company_name,
                    description,
                    web_url,
                    facebook_url,
                    instagram_url,
                    pinterest_url,
                    inactive,
                } => {
                    let links = cli::ProfileLinks {
                        web_url,
                        facebook_url,
                        instagram_url,
                        pinterest_url,
                    };
                    cli::cmd_profile_add(
                        &state,
                        &advertiser,
                        &company_name,
                        &description,
                        links,
                        !inactive,
                    )
                    .await
                }
                ProfileCommands::Rename { slug, new_name } => {
                    cli::cmd_profile_rename(&state, &slug, &new_name).await
                }
                ProfileCommands::Activate { slug } => {
                    cli::cmd_profile_set_active(&state, &slug, true).await
                }
                ProfileCommands::Deactivate { slug } => {
                    cli::cmd_profile_set_active(&state, &slug, false).await
                }
                ProfileCommands::List => cli::cmd_profile_list(&state).await,
            }
        }

        Commands::Ad { command } => {
            let state = SharedState::new(config).await?;
            match command {
                AdCommands::Add {
                    advertiser,
                    ad_name,
                    image_filename,
                    profile,
                    notes,
                } => {
                    cli::cmd_ad_add(
                        &state,
                        &advertiser,
                        &ad_name,
                        &image_filename,
                        profile.as_deref(),
                        notes,
                    )
                    .await
                }
            }
        }
    }
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let json = config.general.json_logs;
    let json_layer = json.then(|| tracing_subscriber::fmt::layer().json());
    let fmt_layer = (!json).then(tracing_subscriber::fmt::layer);

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(fmt_layer);

    if config.observability.loki_enabled {
        let url = url::Url::parse(&config.observability.loki_url).context("Invalid Loki URL")?;

        let mut builder = tracing_loki::builder();
        for (key, value) in &config.observability.loki_labels {
            builder = builder.label(key.as_str(), value.as_str())?;
        }
        let (layer, task) = builder.build_url(url)?;

        tokio::spawn(task);

        registry.with(layer).init();
        info!(
            "Loki logging initialized at {}",
            config.observability.loki_url
        );
    } else {
        registry.init();
    }

    Ok(())
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    info!("infobox v{} starting...", env!("CARGO_PKG_VERSION"));

    let prometheus_handle = if config.observability.metrics_enabled {
        use metrics_exporter_prometheus::PrometheusBuilder;
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("Failed to install Prometheus recorder")?;
        info!("Prometheus metrics recorder initialized");
        Some(handle)
    } else {
        None
    };

    let addr = config.bind_address();
    let state = api::create_app_state_from_config(config, prometheus_handle).await?;
    state
        .store()
        .ping()
        .await
        .context("Database is not reachable")?;

    let app = api::router(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🌐 Web server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }
}
