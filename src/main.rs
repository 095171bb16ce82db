use clap::{Args as ClapArgs, Parser, Subcommand};
use color_eyre::Result;
use heritage_gateway::{CacheStore, Config, DataService, IndexFilter, LookupError, SparqlClient};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "heritage-gateway")]
#[command(about = "Cached SPARQL gateway for a city time-machine dataset")]
#[command(version)]
struct Cli {
  /// Path to config file (default: $XDG_CONFIG_HOME/heritage-gateway/config.yaml)
  #[arg(short, long)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(ClapArgs, Debug)]
struct FilterArgs {
  /// Free-text search term
  #[arg(short, long)]
  q: Option<String>,

  /// Street identifier (IRI)
  #[arg(long)]
  street: Option<String>,

  /// Period identifier (IRI)
  #[arg(long)]
  period: Option<String>,

  /// Status filter: alle, bestaand or afgebroken
  #[arg(long)]
  status: Option<String>,

  #[arg(long)]
  limit: Option<usize>,

  #[arg(long)]
  offset: Option<usize>,
}

impl From<FilterArgs> for IndexFilter {
  fn from(args: FilterArgs) -> Self {
    IndexFilter {
      q: args.q,
      street: args.street,
      period: args.period,
      status: args.status,
      limit: args.limit,
      offset: args.offset,
    }
  }
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List all streets
  Streets,
  /// List all periods
  Periods,
  /// Search the building index
  Buildings(FilterArgs),
  /// Search the person index
  Persons(FilterArgs),
  /// Search the photo index
  Photos(FilterArgs),
  /// Show one building
  Building { identifier: String },
  /// Show one person observation
  Person { identifier: String },
  /// Show one photo
  Photo { identifier: String },
  /// Building stock for one year
  YearMap { year: i32 },
  /// Purge this application's cache entries
  ClearCache,
}

#[tokio::main]
async fn main() -> Result<()> {
  color_eyre::install()?;

  let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(writer)
    .init();

  let cli = Cli::parse();

  let config = Config::load(cli.config.as_deref())?.apply_env();
  let cache = CacheStore::connect(&config.cache).await;
  let sparql = SparqlClient::new(&config.endpoint, cache)?;
  let service = DataService::new(sparql);

  match cli.command {
    Command::Streets => print_json(&service.streets().await),
    Command::Periods => print_json(&service.periods().await),
    Command::Buildings(args) => report(service.buildings(&args.into()).await),
    Command::Persons(args) => report(service.persons(&args.into()).await),
    Command::Photos(args) => report(service.photos(&args.into()).await),
    Command::Building { identifier } => report(service.building(&identifier).await),
    Command::Person { identifier } => report(service.person(&identifier).await),
    Command::Photo { identifier } => report(service.photo(&identifier).await),
    Command::YearMap { year } => print_json(&service.buildings_by_year(year).await),
    Command::ClearCache => {
      let deleted = service.cache().clear().await;
      println!("{} cache entries removed", deleted);
      Ok(())
    }
  }
}

fn report<T: Serialize>(result: Result<T, LookupError>) -> Result<()> {
  match result {
    Ok(value) => print_json(&value),
    Err(err) => Err(err.into()),
  }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}
