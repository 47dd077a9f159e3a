use anyhow::anyhow;
use clap::Parser;

use frenzy_admin::auth::ConfiguredAuthenticator;
use frenzy_admin::config::{self, Insecure};
use frenzy_nav::session::RootRouter;

/// Mounts the root router against the configured session and prints the
/// navigator it selects.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "frenzy.toml")]
    config: std::path::PathBuf,
    /// Allow the fixed development session from the config.
    #[arg(long)]
    insecure: bool,
    /// Route name to resolve inside the mounted navigator.
    #[arg(long, short = 'r')]
    route: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let insecure = if args.insecure {
        Insecure::Allow
    } else {
        Insecure::Deny
    };
    let cfg = config::load(&args.config, insecure).await?;
    let auth = ConfiguredAuthenticator::new(&cfg.access_control);

    let mut router = RootRouter::new();
    log::info!("Session state: {:?}", router.state());
    router.mount(&auth).await;
    let (Some(flow), Some(mounted)) = (router.flow(), router.mounted()) else {
        return Err(anyhow!("Session is still unknown after the check"));
    };
    log::info!("Session state: {:?}", router.state());
    if let Some(e) = router.last_error() {
        log::warn!("Routed to {} because of: {e}", flow.route_name());
    }
    println!("{}", serde_json::to_string_pretty(&mounted)?);

    if let Some(route) = args.route {
        let screen = mounted
            .resolve(&route)
            .ok_or_else(|| anyhow!("Route {route} is not reachable from {}", flow.route_name()))?;
        println!("{route} -> {}", screen.view());
    }
    Ok(())
}
