use clap::{Parser, Subcommand};
use oaim::{AgentOptions, AppError, DEFAULT_PORT};

#[derive(Parser)]
#[command(name = "oaim")]
#[command(version)]
#[command(about = "Scaffold an agent spec, discover bootstrap peers, and serve /ping", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a spec.yaml template in the current directory
    Init,
    /// List bootstrap peers from spec.yaml
    Discover,
    /// Ping bootstrap peers, then serve /ping
    RunAgent {
        /// Port to serve on
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// URL of peer to ping (overrides auto-discovery; the agent does not serve)
        #[arg(long)]
        ping: Option<String>,
    },
}

fn main() {
    oaim::logging::init();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Init => oaim::init(),
        Commands::Discover => oaim::discover().map(|_| ()),
        Commands::RunAgent { port, ping } => {
            let ping = ping.filter(|url| !url.is_empty());
            oaim::run_agent(AgentOptions { port, ping })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
