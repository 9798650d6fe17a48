//! Solve command - Compute the minimax move for a position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use super::parse_board;
use crate::{
    cli::output::{describe_value, print_kv},
    search::{Minimax, SearchConfig, select_best},
    tictactoe::{Action, Board, Player, format_board},
};

#[derive(Parser, Debug)]
#[command(about = "Compute the optimal move for a position")]
pub struct SolveArgs {
    /// Board as nine cells (X, O, .), rows optionally separated by '/'
    pub board: String,

    /// Show the value of every legal move, not just the chosen one
    #[arg(long)]
    pub all: bool,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,

    /// Evaluate the root moves in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Limit the search depth (plies); the result is exact without a limit
    #[arg(long)]
    pub max_depth: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SolveReport {
    pub board: Board,
    pub to_move: Player,
    pub terminal: bool,
    pub winner: Option<Player>,
    pub best_action: Option<Action>,
    pub value: i32,
    pub exact: bool,
    pub nodes: u64,
    pub actions: Vec<ActionValue>,
}

#[derive(Debug, Serialize)]
pub struct ActionValue {
    pub action: Action,
    pub value: i32,
}

/// Search a board and collect everything the command reports
pub fn solve(board: &Board, config: SearchConfig) -> SolveReport {
    let search = Minimax::new(config);
    let evaluated = search.evaluate_actions(board);
    let best = select_best(board.player(), &evaluated);
    let value = match best {
        Some((_, value)) => value,
        None => board.utility(),
    };

    SolveReport {
        board: *board,
        to_move: board.player(),
        terminal: board.is_terminal(),
        winner: board.winner(),
        best_action: best.map(|(action, _)| action),
        value,
        exact: config.is_exact(),
        nodes: search.nodes_visited(),
        actions: evaluated
            .into_iter()
            .map(|(action, value)| ActionValue { action, value })
            .collect(),
    }
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = parse_board(&args.board)?;
    let mut config = SearchConfig::new().with_parallel(args.parallel);
    if let Some(depth) = args.max_depth {
        config = config.with_max_depth(depth);
    }

    let report = solve(&board, config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", format_board(&board));

    if report.terminal {
        match report.winner {
            Some(winner) => println!("Game over: {winner} has won."),
            None => println!("Game over: draw."),
        }
        return Ok(());
    }

    print_kv("To move", &report.to_move.to_string());
    if let Some(action) = report.best_action {
        print_kv("Best move", &action.to_string());
    }
    print_kv(
        "Value",
        &format!("{} ({})", report.value, describe_value(report.value)),
    );
    if !report.exact {
        print_kv("Note", "depth-limited search, value may be inexact");
    }
    print_kv("Nodes searched", &report.nodes.to_string());

    if args.all {
        println!("\nAll moves:");
        for av in &report.actions {
            let marker = if Some(av.action) == report.best_action {
                "*"
            } else {
                " "
            };
            println!(
                "  {marker} {} -> {:>2} ({})",
                av.action,
                av.value,
                describe_value(av.value)
            );
        }
    }

    Ok(())
}
