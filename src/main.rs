use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect_four_minimax::ai::{Agent, MinimaxAgent, RandomAgent};
use connect_four_minimax::config::{AppConfig, EngineConfig, OpponentKind};
use connect_four_minimax::game::{side_to_move, GameState, Grid, Player};
use connect_four_minimax::play::{play_game, MatchTally};

/// Play Connect Four against a minimax engine from the command line.
#[derive(Parser)]
#[command(name = "connect-four", about = "Connect Four minimax engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play headless matches between the engine and an opponent
    Play {
        /// Path to TOML configuration file
        #[arg(long, default_value = "config.toml")]
        config: PathBuf,

        /// Override number of games
        #[arg(long)]
        games: Option<usize>,

        /// Override the opponent
        #[arg(long, value_enum)]
        opponent: Option<OpponentKind>,

        /// Override the engine's search depth
        #[arg(long)]
        depth: Option<usize>,

        /// Seed for the engine's move ordering and the opponent
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the engine's column for a position
    Suggest {
        /// Board rows, top row first, separated by '/' (0 empty, 1 red, 2 yellow)
        #[arg(long)]
        board: String,

        /// Side to suggest for; inferred from piece counts when omitted
        #[arg(long)]
        player: Option<Player>,

        /// Search depth
        #[arg(long, default_value_t = 6)]
        depth: usize,

        /// Seed for move ordering
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Play {
            config,
            games,
            opponent,
            depth,
            seed,
        } => {
            let mut app_config = AppConfig::load_or_default(&config)
                .with_context(|| format!("loading config from {}", config.display()))?;

            // Apply CLI overrides
            if let Some(games) = games {
                app_config.play.games = games;
            }
            if let Some(opponent) = opponent {
                app_config.play.opponent = opponent;
            }
            if let Some(depth) = depth {
                app_config.engine.depth = depth;
            }
            if seed.is_some() {
                app_config.engine.seed = seed;
            }
            app_config.validate().context("invalid settings")?;

            run_matches(&app_config)
        }
        Command::Suggest {
            board,
            player,
            depth,
            seed,
        } => suggest(&board, player, depth, seed),
    }
}

/// Play `play.games` games, swapping colours every game, and print each final
/// board followed by the engine's tally.
fn run_matches(config: &AppConfig) -> Result<()> {
    let engine_cfg = &config.engine;
    let play_cfg = &config.play;
    let mut tally = MatchTally::default();

    for game in 0..play_cfg.games {
        let engine_player = if game % 2 == 0 {
            engine_cfg.player
        } else {
            engine_cfg.player.other()
        };
        let game_seed = engine_cfg.seed.map(|s| s.wrapping_add(game as u64));

        let mut engine = EngineConfig {
            player: engine_player,
            seed: game_seed,
            ..engine_cfg.clone()
        }
        .build()
        .context("building engine")?;

        let mut opponent: Box<dyn Agent> = match play_cfg.opponent {
            OpponentKind::Random => match game_seed {
                Some(s) => Box::new(RandomAgent::with_seed(s ^ 0x5eed)),
                None => Box::new(RandomAgent::new()),
            },
            OpponentKind::Minimax => {
                let agent = MinimaxAgent::new(
                    play_cfg.opponent_depth,
                    engine_player.other(),
                    engine_cfg.rows,
                    engine_cfg.columns,
                )
                .context("building opponent")?;
                match game_seed {
                    Some(s) => Box::new(agent.with_seed(s ^ 0x5eed)),
                    None => Box::new(agent),
                }
            }
        };

        info!(
            game = game + 1,
            engine = engine_player.name(),
            opponent = opponent.name(),
            "starting game"
        );

        let state = GameState::new(engine_cfg.rows, engine_cfg.columns);
        let record = match engine_player {
            Player::Red => play_game(state, &mut engine, opponent.as_mut()),
            Player::Yellow => play_game(state, opponent.as_mut(), &mut engine),
        }
        .with_context(|| format!("game {} aborted", game + 1))?;

        tally.record(record.outcome, engine_player);
        println!(
            "Game {} (engine {}, {} moves):",
            game + 1,
            engine_player,
            record.moves.len()
        );
        println!("{}\n", record.final_state.grid());
    }

    println!(
        "Engine: {} wins, {} losses, {} draws over {} games",
        tally.wins,
        tally.losses,
        tally.draws,
        tally.total_games()
    );
    Ok(())
}

fn suggest(board: &str, player: Option<Player>, depth: usize, seed: Option<u64>) -> Result<()> {
    let grid: Grid = board.parse().context("parsing --board")?;
    let player = player.unwrap_or_else(|| side_to_move(&grid));

    let mut engine = MinimaxAgent::new(depth, player, grid.rows(), grid.cols())
        .context("building engine")?;
    if let Some(s) = seed {
        engine = engine.with_seed(s);
    }

    let report = engine
        .search(&grid)
        .with_context(|| format!("searching for {player}"))?;
    println!(
        "{} should play column {} (score {}, {} nodes)",
        player, report.column, report.score, report.nodes
    );
    Ok(())
}
