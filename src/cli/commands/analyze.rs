//! Analyze command - Game tree statistics for a position

use std::collections::BTreeMap;

use anyhow::Result;
use clap::Parser;

use super::parse_board;
use crate::{
    cli::output::{describe_value, format_number, format_percent, print_kv, print_section},
    search::Minimax,
    tictactoe::{Board, count_games, format_board, reachable_from},
};

#[derive(Parser, Debug)]
#[command(about = "Count reachable positions and complete games")]
pub struct AnalyzeArgs {
    /// Position to analyze (defaults to the empty board)
    #[arg(long)]
    pub board: Option<String>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let root = match args.board.as_deref() {
        Some(input) => parse_board(input)?,
        None => Board::new(),
    };

    print_section("Game Tree Analysis");
    println!("{}\n", format_board(&root));

    let boards = reachable_from(root);
    let terminal = boards.iter().filter(|b| b.is_terminal()).count();
    print_kv("Reachable boards", &format_number(boards.len()));
    print_kv("Terminal boards", &format_number(terminal));

    let mut by_depth: BTreeMap<usize, usize> = BTreeMap::new();
    for board in &boards {
        *by_depth.entry(board.occupied_count()).or_insert(0) += 1;
    }
    println!("\nBoards by number of marks:");
    for (depth, count) in &by_depth {
        println!("  {depth}: {}", format_number(*count));
    }

    let counts = count_games(&root);
    let total = counts.total();
    println!("\nComplete games: {}", format_number(total));
    print_kv(
        "X wins",
        &format!(
            "{} ({})",
            format_number(counts.x_wins),
            format_percent(counts.x_wins, total)
        ),
    );
    print_kv(
        "O wins",
        &format!(
            "{} ({})",
            format_number(counts.o_wins),
            format_percent(counts.o_wins, total)
        ),
    );
    print_kv(
        "Draws",
        &format!(
            "{} ({})",
            format_number(counts.draws),
            format_percent(counts.draws, total)
        ),
    );

    let value = Minimax::default().value(&root);
    println!("\nValue with perfect play: {value} ({})", describe_value(value));

    Ok(())
}
