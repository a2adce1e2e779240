use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use votelytics_cli::config::{AppConfig, ConfigManager, get_config};
use votelytics_cli::output::{self, TextFormatter};
use votelytics_cli::paths;
use votelytics_core::VotelyticsClient;
use votelytics_core::api::{ConstituencyFilter, PredictionFilter, ResultFilter};
use votelytics_core::cache::CacheBackend;

#[derive(Parser)]
#[command(name = "votelytics")]
#[command(author, version, about = "Votelytics - Tamil Nadu election results and predictions", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Bypass the cache for this invocation
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List constituencies
    Constituencies {
        /// Only constituencies in this district
        #[arg(long)]
        district: Option<String>,

        /// Only constituencies in this region
        #[arg(long)]
        region: Option<String>,

        /// Limit the number of rows
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Show one constituency by ID or code
    Constituency {
        /// Numeric ID, or a code like TN-014 with --code
        id: String,

        /// Treat the argument as a constituency code
        #[arg(long)]
        code: bool,
    },

    /// Historical results for a constituency across elections
    History {
        constituency_id: i64,
    },

    /// List elections
    Elections,

    /// Results for an election
    Results {
        election_id: i64,

        /// Only results for this party
        #[arg(long)]
        party: Option<String>,

        /// Only winning candidates
        #[arg(long)]
        winners_only: bool,

        /// Limit the number of rows
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Winning results for an election year
    Winners {
        year: i32,
    },

    /// A party's aggregate performance in one election
    Party {
        party: String,
        election_id: i64,

        #[arg(long, default_value_t = 2021)]
        year: i32,
    },

    /// Statewide 2026 prediction summary, or the per-seat list
    Predictions {
        #[arg(long, default_value_t = 2026)]
        year: i32,

        /// List per-constituency predictions instead of the summary
        #[arg(long)]
        list: bool,

        /// Only predictions for this alliance (implies --list)
        #[arg(long)]
        alliance: Option<String>,

        /// Only predictions in this region (implies --list)
        #[arg(long)]
        region: Option<String>,

        /// Only predictions with this confidence level (implies --list)
        #[arg(long)]
        confidence: Option<String>,

        /// Limit the number of rows
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Cache diagnostics
    Cache {
        #[command(subcommand)]
        command: CacheCommand,
    },

    /// Configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum CacheCommand {
    /// Show the approximate cache size
    Stats,

    /// Clear cache entries
    Clear {
        /// Only clear keys under this prefix (default: everything)
        #[arg(long)]
        prefix: Option<String>,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Print the config file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("votelytics_core", log::LevelFilter::Debug)
            .filter_module("votelytics_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let mut config = get_config().context("Failed to load configuration")?;
    if cli.no_cache {
        config.client.cache.backend = CacheBackend::Disabled;
    }
    if config.client.cache.dir.is_none() {
        config.client.cache.dir = Some(paths::get_cache_dir());
    }

    match cli.command {
        Commands::Config { command } => config_command(command, &config),
        command => {
            let client =
                VotelyticsClient::from_config(&config.client).context("Failed to build client")?;
            let formatter = TextFormatter::new(config.output.color_enabled);
            run_command(command, &client, &formatter, cli.json).await
        }
    }
}

async fn run_command(
    command: Commands,
    client: &VotelyticsClient,
    formatter: &TextFormatter,
    json: bool,
) -> Result<()> {
    match command {
        Commands::Constituencies {
            district,
            region,
            limit,
        } => {
            let list = if district.is_none() && region.is_none() && limit.is_none() {
                client.constituencies().await?
            } else {
                let filter = ConstituencyFilter {
                    district,
                    region,
                    limit,
                    ..Default::default()
                };
                client.constituencies_filtered(&filter).await?
            };

            if json {
                println!("{}", output::to_json(&list)?);
            } else {
                print!("{}", formatter.constituency_list(&list));
            }
        }

        Commands::Constituency { id, code } => {
            let constituency = if code {
                client.constituency_by_code(&id).await?
            } else {
                let id: i64 = id
                    .parse()
                    .with_context(|| format!("'{id}' is not a numeric ID (use --code for codes)"))?;
                client.constituency(id).await?
            };

            if json {
                println!("{}", output::to_json(&constituency)?);
            } else {
                print!("{}", formatter.constituency(&constituency));
            }
        }

        Commands::History { constituency_id } => {
            let results = client.constituency_history(constituency_id).await?;
            if json {
                println!("{}", output::to_json(&results)?);
            } else {
                print!("{}", formatter.results(&results));
            }
        }

        Commands::Elections => {
            let elections = client.elections().await?;
            if json {
                println!("{}", output::to_json(&elections)?);
            } else {
                print!("{}", formatter.elections(&elections));
            }
        }

        Commands::Results {
            election_id,
            party,
            winners_only,
            limit,
        } => {
            let filter = ResultFilter {
                party,
                winner_only: winners_only.then_some(true),
                limit,
                ..Default::default()
            };
            let results = client.election_results(election_id, &filter).await?;
            if json {
                println!("{}", output::to_json(&results)?);
            } else {
                print!("{}", formatter.results(&results));
            }
        }

        Commands::Winners { year } => {
            let results = client.winners_by_year(year).await?;
            if json {
                println!("{}", output::to_json(&results)?);
            } else {
                print!("{}", formatter.results(&results));
            }
        }

        Commands::Party {
            party,
            election_id,
            year,
        } => {
            let performance = client.party_performance(&party, election_id, year).await?;
            if json {
                println!("{}", output::to_json(&performance)?);
            } else {
                print!("{}", formatter.party_performance(&performance));
            }
        }

        Commands::Predictions {
            year,
            list,
            alliance,
            region,
            confidence,
            limit,
        } => {
            let filtered = alliance.is_some() || region.is_some() || confidence.is_some();
            if list || filtered {
                let filter = PredictionFilter {
                    year: Some(year),
                    alliance,
                    region,
                    confidence_level: confidence,
                    limit,
                    ..Default::default()
                };
                let predictions = client.predictions(&filter).await?;
                if json {
                    println!("{}", output::to_json(&predictions)?);
                } else {
                    print!("{}", formatter.predictions(&predictions));
                }
            } else {
                let summary = client.predictions_summary(year).await?;
                if json {
                    println!("{}", output::to_json(&summary)?);
                } else {
                    print!("{}", formatter.predictions_summary(&summary));
                }
            }
        }

        Commands::Cache { command } => match command {
            CacheCommand::Stats => {
                print!("{}", formatter.cache_stats(client.cache().size_bytes()));
            }
            CacheCommand::Clear { prefix } => {
                match prefix {
                    Some(prefix) => {
                        client.cache().clear_by_prefix(&prefix);
                        println!("Cleared cache entries under '{prefix}'");
                    }
                    None => {
                        client.cache().clear_all();
                        println!("Cleared all Votelytics cache entries");
                    }
                }
            }
        },

        // Handled before the client is built.
        Commands::Config { .. } => unreachable!(),
    }

    Ok(())
}

fn config_command(command: ConfigCommand, config: &AppConfig) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            print!("{}", toml::to_string_pretty(config)?);
        }
        ConfigCommand::Path => {
            println!("{}", ConfigManager::new().get_config_path().display());
        }
    }
    Ok(())
}
