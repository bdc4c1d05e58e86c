use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod audit;
mod config;
mod diagnostics;
mod fetch;
mod governance;
mod owners;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "sigs-audit")]
#[command(about = "Community governance (sigs.yaml) auditor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ensure OWNERS files and sigs.yaml have the correct data structure.
    Audit(config::AuditArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("SIGS_AUDIT_LOG").unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Audit(args) => {
            println!(
                "Running script : {}",
                chrono::Local::now().format("%m-%d-%Y %H:%M:%S")
            );

            // 1) Resolve configuration; a missing kubernetes checkout is fatal.
            let cfg = config::AuditConfig::resolve(
                args,
                std::env::current_dir()?,
                std::env::var_os("GOPATH"),
            )?;
            tracing::info!(
                kubernetes_directory = %cfg.kubernetes_directory.display(),
                primary_repository = %cfg.primary_repository,
                "configuration resolved"
            );

            // 2) Locate + parse sigs.yaml.
            let sigs_yaml = match &cfg.sigs_yaml {
                Some(path) => path.clone(),
                None => governance::find_sigs_yaml(&cfg.working_dir)?,
            };
            let context = governance::load_context(&sigs_yaml)?;

            // 3) Walk the selected groups.
            let fetcher = fetch::HttpFetcher::new()?;
            let stdout = std::io::stdout();
            let mut auditor = audit::Auditor::new(&context, &cfg, &fetcher, stdout.lock())?;
            auditor.run(&cfg.names)?;
        }
    }

    Ok(())
}
