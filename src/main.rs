use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use skyhall::application::{ProfileService, SessionManager};
use skyhall::domain::{AuthError, CancelToken, Credentials, Profile};
use skyhall::infrastructure::{
    ApiConfig, ApiTransport, CliArgs, Command, HttpAuthClient, HttpProfileClient,
    KeyringTokenStorage, NetProbeMonitor, device_snapshot, local_ip,
};

fn init_logging(args: &CliArgs) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.to_string()));

    if let Some(log_path) = &args.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

struct App {
    sessions: Arc<SessionManager>,
    profiles: ProfileService,
    monitor: Arc<NetProbeMonitor>,
}

fn create_app(config: &ApiConfig) -> Result<App> {
    let transport = Arc::new(ApiTransport::new(config)?);
    let monitor = Arc::new(
        NetProbeMonitor::for_base_url(
            &config.base_url,
            Duration::from_secs(config.probe_interval_secs),
        )
        .map_err(|e| eyre!(e))?,
    );

    let auth = Arc::new(HttpAuthClient::new(transport.clone()));
    let profile = Arc::new(HttpProfileClient::new(transport.clone()));
    let storage = Arc::new(KeyringTokenStorage::new());

    let sessions = Arc::new(SessionManager::new(
        auth,
        storage,
        transport.clone(),
        monitor.clone(),
        config.policy.clone(),
    ));

    let profiles = ProfileService::new(
        profile,
        sessions.clone(),
        transport,
        config.policy.clone(),
    );

    Ok(App {
        sessions,
        profiles,
        monitor,
    })
}

async fn run(app: &App, command: Command, cancel: &CancelToken) -> Result<(), AuthError> {
    match command {
        Command::Login { login, password } => {
            let credentials = Credentials::new(login, password);
            if !credentials.is_complete() {
                eprintln!("login and password must not be empty");
                return Err(AuthError::AuthFailed);
            }

            let Some(ip) = local_ip() else {
                return Err(AuthError::NoInternetConnection);
            };

            let receipt = app
                .sessions
                .login(&credentials, device_snapshot(ip), cancel)
                .await?;
            println!("logged in: {}", receipt.message);
        }
        Command::Profile => {
            let profile = app.profiles.fetch_profile(cancel).await?;
            print_profile(&profile);
        }
        Command::Logout => match app.sessions.logout(cancel).await {
            Ok(receipt) => println!("logged out: {}", receipt.message),
            Err(AuthError::NoToken) => println!("no active session"),
            Err(e) => return Err(e),
        },
        Command::Status => {
            if app.sessions.is_authenticated().await {
                println!("authenticated: a token is stored");
            } else {
                println!("not authenticated");
            }
        }
    }

    Ok(())
}

fn print_profile(profile: &Profile) {
    println!(
        "{} {} <{}>",
        profile.first_name, profile.last_name, profile.email
    );
    println!("login:    {}", profile.login);
    println!("group:    {} ({})", profile.group_name, profile.group_tag);
    println!("service:  {}", profile.service_name);
    println!(
        "language: {}  admin: {}  terminal: {}",
        profile.language_code, profile.is_admin, profile.is_terminal
    );

    for point in &profile.points {
        println!(
            "  [{}] {} ({})  clear: {}  multi-session: {}",
            point.airport,
            point.point_name,
            point.kind,
            point.is_clear,
            point.is_multiple_session_enabled
        );
        for product in &point.products {
            println!(
                "      {}  offline: {}  online: {}  active: {}",
                product.name, product.offline_price, product.online_price, product.is_active
            );
        }
    }
}

fn report_error(err: &AuthError) {
    if matches!(err, AuthError::Cancelled) {
        return;
    }

    if err.is_network_error() {
        eprintln!("check your connection and try again");
        return;
    }

    eprintln!("error: {err}");
    if err.requires_login() {
        eprintln!("run `skyhall login` to start a new session");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    init_logging(&args)?;

    let mut config = ApiConfig::load(args.config.as_deref())?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    info!(version = skyhall::VERSION, "starting skyhall");

    let app = create_app(&config)?;
    let probe = app.monitor.start();
    let cancel = CancelToken::new();

    let outcome = run(&app, args.command, &cancel).await;

    app.monitor.stop();
    probe.abort();

    if let Err(e) = outcome {
        report_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
