//! Play command - Run a series of games between two agents

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::{
    agents::{MatchTally, play_game},
    cli::{
        config::{AgentKind, PlayConfig},
        output::{create_games_progress, format_percent, print_kv, print_section},
    },
};

#[derive(Parser, Debug)]
#[command(about = "Play agents against each other")]
pub struct PlayArgs {
    /// Number of games
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Policy playing X
    #[arg(long, value_enum)]
    pub x: Option<AgentKind>,

    /// Policy playing O
    #[arg(long, value_enum)]
    pub o: Option<AgentKind>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON configuration file; flags given on the command line take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,
}

impl PlayArgs {
    /// Resolve the effective configuration: file (or defaults), then flags
    pub fn resolve(&self) -> Result<PlayConfig> {
        let mut config = match &self.config {
            Some(path) => PlayConfig::load(path)?,
            None => PlayConfig::default(),
        };
        if let Some(games) = self.games {
            config.games = games;
        }
        if let Some(x) = self.x {
            config.x = x;
        }
        if let Some(o) = self.o {
            config.o = o;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.quiet {
            config.progress = false;
        }
        Ok(config)
    }
}

/// Play `config.games` games and tally the outcomes
pub fn run(config: &PlayConfig) -> Result<MatchTally> {
    // Distinct seeds so two random agents do not mirror each other
    let x_seed = config.seed;
    let o_seed = config.seed.map(|seed| seed.wrapping_add(1));
    let mut x = config.x.build("X", config.search, x_seed);
    let mut o = config.o.build("O", config.search, o_seed);

    let progress = if config.progress {
        Some(create_games_progress(config.games as u64)?)
    } else {
        None
    };

    let mut tally = MatchTally::default();
    for _ in 0..config.games {
        let game = play_game(x.as_mut(), o.as_mut())?;
        if let Some(outcome) = game.outcome() {
            tally.record(outcome);
        }
        if let Some(pb) = &progress {
            pb.set_message(format!(
                "X {} / O {} / draw {}",
                tally.x_wins, tally.o_wins, tally.draws
            ));
            pb.inc(1);
        }
    }
    if let Some(pb) = progress {
        pb.finish();
    }

    info!(
        x = config.x.as_str(),
        o = config.o.as_str(),
        games = tally.games(),
        "match finished"
    );
    Ok(tally)
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.resolve()?;
    let tally = run(&config)?;
    let total = tally.games();

    print_section(&format!(
        "{} (X) vs {} (O)",
        config.x.as_str(),
        config.o.as_str()
    ));
    print_kv("Games", &total.to_string());
    print_kv(
        "X wins",
        &format!("{} ({})", tally.x_wins, format_percent(tally.x_wins, total)),
    );
    print_kv(
        "O wins",
        &format!("{} ({})", tally.o_wins, format_percent(tally.o_wins, total)),
    );
    print_kv(
        "Draws",
        &format!("{} ({})", tally.draws, format_percent(tally.draws, total)),
    );

    Ok(())
}
