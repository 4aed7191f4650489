use clap::Parser;
use legends_batch::bridge;
use legends_riot_api::{ApiClientBase, LegendsClient, StaticEndpoint};
use legends_shared::{
    Identifier, Region,
    constants::{MAP_NAMES, MATCH_MAKING_QUEUES},
};
use serde_json::{Map, Value, json};
use tracing::{debug, error};

use cli::{Cli, Command, parse_ids};
use config::Config;
use error::AppError;

mod cli;
mod config;
mod error;
mod logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let compact = cli.compact;

    let value = match cli.command {
        Command::Queues => {
            constants_object(MATCH_MAKING_QUEUES.iter().map(|(id, name)| (*id, json!(name))))
        }
        Command::Maps => constants_object(MAP_NAMES.iter().map(|(id, map)| (*id, json!(map)))),
        command => {
            let mut config = Config::from_env()?;
            if let Some(region) = cli.region {
                config.region =
                    Region::try_from(region).map_err(|e| AppError::InvalidRegion(e.0))?;
            }
            debug!("querying {:?} through {}", config.region, config.base_url);

            let api = LegendsClient::from_base(
                ApiClientBase::new(config.api_key, config.region).with_base_url(config.base_url),
            );
            let value = dispatch(&api, command).await;
            api.log_metrics();
            value?
        }
    };

    let out = if compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    println!("{out}");

    Ok(())
}

async fn dispatch(api: &LegendsClient, command: Command) -> Result<Value, AppError> {
    let value = match command {
        Command::Champions { free_to_play } => api.champions(free_to_play).await?,
        Command::RecentGames { summoner_id } => api.recent_games(summoner_id).await?,
        Command::Challenger { queue } => api.challenger_leagues(queue).await?,
        Command::LeagueEntries { summoner_id } => api.league_entries(summoner_id).await?,
        Command::Leagues { summoner_id } => api.leagues(summoner_id).await?,
        Command::SummaryStats { summoner_id, season } => {
            api.summary_stats(summoner_id, season).await?
        }
        Command::RankedStats { summoner_id, season } => {
            api.ranked_stats(summoner_id, season).await?
        }
        Command::Teams { summoner_id } => api.teams(summoner_id).await?,
        Command::Summoners { ids } => batched(api.summoners_by_id(&parse_ids(&ids))).await?,
        Command::SummonersByName { names } => {
            let names: Vec<Identifier> = names.into_iter().map(Identifier::Name).collect();
            batched(api.summoners_by_name(&names)).await?
        }
        Command::Runes { ids } => batched(api.runes(&parse_ids(&ids))).await?,
        Command::Masteries { ids } => batched(api.masteries(&parse_ids(&ids))).await?,
        Command::Names { ids } => batched(api.summoner_names(&parse_ids(&ids))).await?,
        Command::Static { resource, id } => {
            let endpoint = resource
                .parse::<StaticEndpoint>()
                .map_err(|e| AppError::InvalidArgument(e.to_string()))?;
            let id = id.and_then(|id| parse_ids(&[id]).into_iter().next());
            api.static_data().get(endpoint, id).await?
        }
        Command::Realm => api.static_data().realm().await?,
        Command::Queues | Command::Maps => Value::Null,
    };

    Ok(value)
}

/// Await a batched call, reporting how many entries it merged.
async fn batched<F>(call: F) -> Result<Value, AppError>
where
    F: std::future::Future<Output = legends_riot_api::LegendsApiResponse<Map<String, Value>>>,
{
    let merged = bridge(call, |res| match res {
        Ok(merged) => debug!("merged {} entries", merged.len()),
        Err(e) => debug!("batched call failed: {}", e),
    })
    .await?;

    Ok(Value::Object(merged))
}

fn constants_object<I>(entries: I) -> Value
where
    I: Iterator<Item = (u16, Value)>,
{
    Value::Object(entries.map(|(id, v)| (id.to_string(), v)).collect())
}
