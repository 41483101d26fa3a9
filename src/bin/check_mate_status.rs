use std::env;
use std::process::ExitCode;

use chess_rules::{Game, GameStatus, Move};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut game = Game::new();
    for (ply, text) in args.iter().skip(1).enumerate() {
        let mv: Move = match text.parse() {
            Ok(mv) => mv,
            Err(e) => {
                eprintln!("move {}: cannot parse '{}': {}", ply + 1, text, e);
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = game.apply_move(mv) {
            eprintln!("move {}: {}", ply + 1, e);
            return ExitCode::FAILURE;
        }
    }

    let side = game.turn();
    let legal_moves = game.all_legal_moves(side);
    let status = game.status();
    println!("side_to_move: {}", side);
    println!("legal_moves: {}", legal_moves.len());
    println!(
        "check: {}",
        matches!(status, GameStatus::Check(_) | GameStatus::Checkmate(_))
    );
    println!("checkmate: {}", matches!(status, GameStatus::Checkmate(_)));
    println!("stalemate: {}", matches!(status, GameStatus::Stalemate(_)));
    for mv in legal_moves.iter() {
        println!("{}", mv);
    }
    ExitCode::SUCCESS
}
