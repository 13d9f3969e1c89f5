use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use vtnctl::config::Config;
use vtnctl::odl::client::OdlClient;
use vtnctl::vinterface::{InterfaceSpec, RemoteIdentity, VInterfaceController, ATTRIBUTES};

/// Manage VTN virtual interfaces on an OpenDaylight controller
#[derive(Parser, Debug)]
#[command(name = "vtnctl", version, about, long_about = None)]
struct Args {
    /// RESTCONF endpoint of the controller
    #[arg(short, long, global = true)]
    endpoint: Option<String>,

    /// Controller username
    #[arg(short, long, global = true)]
    username: Option<String>,

    /// Controller password
    #[arg(long, global = true)]
    password: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the interface and print its identity
    Create {
        /// Declared attributes as a JSON object ("-" for stdin)
        #[arg(short, long)]
        spec: PathBuf,
    },
    /// Check the interface still exists; prints an empty identity on drift
    Read {
        #[arg(short, long)]
        spec: PathBuf,
        /// Identity recorded at creation
        #[arg(long, default_value = "")]
        id: String,
    },
    /// Delete the interface
    Delete {
        #[arg(short, long)]
        spec: PathBuf,
        #[arg(long, default_value = "")]
        id: String,
    },
    /// Print the resource attribute schema
    Schema,
    /// Save endpoint and username to the config file
    Configure,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("vtnctl started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("vtnctl").join("vtnctl.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".vtnctl").join("vtnctl.log");
    }
    PathBuf::from("vtnctl.log")
}

/// Read the declared attributes from a file or stdin
fn load_spec(path: &Path) -> Result<InterfaceSpec> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read attributes from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?
    };

    let attrs: Value = serde_json::from_str(&content).context("Attributes are not valid JSON")?;
    Ok(InterfaceSpec::from_attributes(&attrs)?)
}

fn print_identity(identity: &RemoteIdentity) -> Result<()> {
    println!("{}", serde_json::to_string(&json!({ "id": identity.as_str() }))?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level)?;

    let mut config = Config::load();
    let endpoint = config.effective_endpoint(args.endpoint.as_deref());
    let credentials =
        config.effective_credentials(args.username.as_deref(), args.password.as_deref());

    let build_controller = || -> Result<VInterfaceController<OdlClient>> {
        tracing::info!("Using endpoint: {}", endpoint);
        let client = OdlClient::new(&endpoint, credentials.clone())?;
        Ok(VInterfaceController::new(client))
    };

    match &args.command {
        Command::Create { spec } => {
            let spec = load_spec(spec)?;
            let identity = build_controller()?.create(&spec).await?;
            print_identity(&identity)?;
        }
        Command::Read { spec, id } => {
            let spec = load_spec(spec)?;
            let identity = build_controller()?
                .read(&spec, RemoteIdentity::from_recorded(id.as_str()))
                .await?;
            print_identity(&identity)?;
        }
        Command::Delete { spec, id } => {
            let spec = load_spec(spec)?;
            let identity = build_controller()?
                .delete(&spec, RemoteIdentity::from_recorded(id.as_str()))
                .await?;
            print_identity(&identity)?;
        }
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(ATTRIBUTES)?);
        }
        Command::Configure => {
            config.base_url = Some(endpoint.clone());
            config.username = Some(credentials.username.clone());
            config.save().context("Failed to save configuration")?;
            if let Some(path) = Config::config_path() {
                eprintln!("Saved configuration to {:?}", path);
            }
        }
    }

    Ok(())
}
