// Copyright 2024 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::{Args, Parser, Subcommand};
use gateway::config::{Config, DEFAULT_PORT};
use gateway::{LONG_VERSION, build, check, init_tracing, run};

#[derive(Parser)]
#[command(name = "tmdb-gateway")]
#[command(about = "TMDB authentication gateway", long_about = None)]
#[command(version = build::PKG_VERSION, long_version = LONG_VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the gateway
    Server {
        /// Listen port
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        #[command(flatten)]
        tmdb: TmdbArgs,
    },

    /// Request a token from TMDB to verify the API key, then exit
    Check {
        #[command(flatten)]
        tmdb: TmdbArgs,
    },
}

#[derive(Args)]
struct TmdbArgs {
    /// TMDB v3 API key
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env must be loaded before clap reads the environment
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing();

    match dotenv {
        Ok(path) => tracing::info!("Loaded .env from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Failed to parse .env: {}", e),
    }

    match cli.command {
        Commands::Server { port, tmdb } => run(Config::new(port, tmdb.api_key)).await?,
        Commands::Check { tmdb } => {
            let config = Config::new(DEFAULT_PORT, tmdb.api_key);
            match check(&config).await {
                Ok(body) => println!("TMDB API key OK: {}", body),
                Err(e) => {
                    eprintln!("TMDB check failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
