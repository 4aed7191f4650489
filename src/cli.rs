use clap::{Parser, Subcommand};
use legends_shared::{Identifier, constants::ChallengerType};

#[derive(Parser, Debug)]
#[command(name = "legends")]
#[command(about = "Query the League of Legends REST API", long_about = None)]
pub struct Cli {
    /// Region to query, overrides RIOT_REGION (default: na)
    #[arg(short, long, global = true)]
    pub region: Option<String>,

    /// Print compact JSON instead of pretty printed JSON
    #[arg(long, global = true)]
    pub compact: bool,

    /// Log debug information to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List champions
    Champions {
        /// Only champions currently free to play
        #[arg(long)]
        free_to_play: bool,
    },
    /// Recent games of a summoner
    RecentGames { summoner_id: u64 },
    /// Challenger league of a queue type (name or index)
    Challenger {
        #[arg(short, long, default_value = "RANKED_SOLO_5X5")]
        queue: ChallengerType,
    },
    /// League entries of a summoner
    LeagueEntries { summoner_id: u64 },
    /// Leagues of a summoner
    Leagues { summoner_id: u64 },
    /// Summary stats of a summoner
    SummaryStats {
        summoner_id: u64,
        #[arg(short, long)]
        season: Option<u16>,
    },
    /// Ranked stats of a summoner
    RankedStats {
        summoner_id: u64,
        #[arg(short, long)]
        season: Option<u16>,
    },
    /// Teams of a summoner
    Teams { summoner_id: u64 },
    /// Summoners by id
    Summoners {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Summoners by name
    SummonersByName {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Rune pages of summoners
    Runes {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Mastery pages of summoners
    Masteries {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Names of summoners
    Names {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Static data: champion, item, mastery, rune or summoner-spell
    Static {
        resource: String,
        id: Option<String>,
    },
    /// Static data realm information
    Realm,
    /// Known matchmaking queues
    Queues,
    /// Known maps
    Maps,
}

/// Parse command line identifiers; values may also be comma separated.
pub fn parse_ids(raw: &[String]) -> Vec<Identifier> {
    raw.iter()
        .flat_map(|arg| arg.split(','))
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| match id.parse::<u64>() {
            Ok(n) => Identifier::Number(n),
            Err(_) => Identifier::Name(id.to_string()),
        })
        .collect()
}
