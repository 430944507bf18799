use clap::Parser;
use rede_lutas::config::AppConfig;
use rede_lutas::http::HttpServer;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rede-lutas", version, about = "Rede das Lutas, Brincadeiras e Habilidades")]
struct Cli {
    /// Port for the web interface
    #[arg(long, default_value_t = 8080, env = "REDE_PORT")]
    port: u16,

    /// Directory holding dados.json and the catalog files
    #[arg(long, default_value = ".", env = "REDE_DATA_DIR")]
    data_dir: PathBuf,

    /// Accept submissions without any selected skill
    #[arg(long)]
    allow_empty_skills: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = AppConfig::new(cli.data_dir, cli.allow_empty_skills);

    println!("Rede das Lutas v{}", rede_lutas::version());
    println!("Dados em: {}", config.records_path().display());

    let server = HttpServer::new(config, cli.port);
    server.start().await
}
