use clap::Parser;
use sitegate_application::ports::{ExpiryScheduler, NoopExpiryScheduler};
use sitegate_domain::CliOverrides;
use sitegate_infrastructure::clock::SystemClock;
use sitegate_jobs::{expiry_channel, ExpirySweepJob, JobRunner, SiteExpiryJob, WalCheckpointJob};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "sitegate")]
#[command(version)]
#[command(about = "SiteGate - Per-site blocking and a shared daily browsing budget")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind,
        database_path: cli.database,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting SiteGate v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;

    let clock = Arc::new(SystemClock::new(config.usage.time_zone()?));
    let legacy = config.legacy.to_legacy_sites()?;
    info!(legacy_sites = legacy.len(), "Legacy sites loaded");

    let shutdown = CancellationToken::new();
    let (expiry_queue, expiry_requests) = expiry_channel(clock.clone());
    let scheduler: Arc<dyn ExpiryScheduler> = if config.scheduler.enabled {
        Arc::new(expiry_queue)
    } else {
        Arc::new(NoopExpiryScheduler)
    };

    let repos = di::Repositories::new(pool.clone());
    let use_cases = di::UseCases::new(&repos, &config, legacy, clock.clone(), scheduler);

    let mut runner = JobRunner::new().with_shutdown_token(shutdown.clone());
    if config.scheduler.enabled {
        runner = runner.with_site_expiry(SiteExpiryJob::new(
            use_cases.expire_site.clone(),
            clock.clone(),
            expiry_requests,
        ));
    }
    if config.scheduler.sweep_interval_secs > 0 {
        runner = runner.with_expiry_sweep(
            ExpirySweepJob::new(use_cases.expire_site.clone())
                .with_interval(config.scheduler.sweep_interval_secs),
        );
    }
    if config.database.wal_checkpoint_interval_secs > 0 {
        runner = runner.with_wal_checkpoint(WalCheckpointJob::new(
            pool.clone(),
            config.database.wal_checkpoint_interval_secs,
        ));
    }
    runner.start().await;

    let app_state = use_cases.app_state(config.server.api_key.as_deref());

    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.web_port)
        .parse()?;

    server::start_web_server(web_addr, app_state, bootstrap::shutdown_signal(shutdown.clone()))
        .await?;

    shutdown.cancel();
    pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}
