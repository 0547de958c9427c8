mod config;
#[macro_use]
mod logger;
mod render;

use std::io::{BufRead, Write};
use std::time::Duration;

use clap::Parser;
use tictactoe_engine::{GameState, GameStatus, Mark, SessionRng, choose_move, minimax};

use crate::config::CliConfig;
use crate::render::{mark_char, parse_move, render_board};

#[derive(Parser)]
#[command(name = "tictactoe_cli")]
struct Args {
    /// Path to the YAML config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE)]
    config: String,

    /// Overrides the RNG seed from the config
    #[arg(long)]
    seed: Option<u64>,

    /// The engine plays both sides and prints the game
    #[arg(long)]
    demo: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_logger();

    let config = CliConfig::load(&args.config)?;
    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("RNG seed: {}", rng.seed());

    if args.demo {
        run_demo(&mut rng);
        Ok(())
    } else {
        run_interactive(&config, &mut rng)
    }
}

fn run_interactive(
    config: &CliConfig,
    rng: &mut SessionRng,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("You are O, the machine is X. Enter moves as RxC, e.g. 0x2.");

    let mut game = GameState::new();
    while !game.is_over() {
        println!("{}", render_board(game.board()));
        human_turn(&mut game)?;
        if game.is_over() {
            break;
        }
        machine_turn(&mut game, config, rng)?;
    }

    println!("{}", render_board(game.board()));
    let message = match game.status() {
        GameStatus::HumanWon => "You win!",
        GameStatus::MachineWon => "AI wins!",
        GameStatus::Draw => "Draw!",
        GameStatus::InProgress => unreachable!("loop exits only on a terminal state"),
    };
    println!("{}", message);
    Ok(())
}

fn human_turn(game: &mut GameState) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    loop {
        print!("Your move: ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err("input stream closed".into());
        }

        let Some(pos) = parse_move(&line) else {
            println!("Enter a move as RxC with row and column in 0..=2.");
            continue;
        };

        match game.place_mark(Mark::Human, pos) {
            Ok(()) => return Ok(()),
            Err(err) => println!("{}", err),
        }
    }
}

fn machine_turn(
    game: &mut GameState,
    config: &CliConfig,
    rng: &mut SessionRng,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("AI thinks...");
    std::thread::sleep(Duration::from_millis(config.machine_delay_ms));

    let Some(pos) = choose_move(game.board(), rng) else {
        return Ok(());
    };
    log!("AI plays {}x{}", pos.row, pos.col);
    game.place_mark(Mark::Machine, pos)?;
    Ok(())
}

/// Engine self-play: the machine side maximizes, the human side minimizes.
fn run_demo(rng: &mut SessionRng) {
    let mut game = GameState::new();
    let mut player = Mark::Machine;

    while !game.is_over() {
        let pos = match player {
            Mark::Machine => choose_move(game.board(), rng),
            Mark::Human => {
                let depth = game.board().empty_cells().len();
                let mut scratch = *game.board();
                minimax(&mut scratch, depth, Mark::Human).position
            }
            Mark::Empty => unreachable!(),
        };

        let Some(pos) = pos else { break };
        log!("{} plays {}x{}", mark_char(player), pos.row, pos.col);
        if let Err(err) = game.place_mark(player, pos) {
            log!("Move rejected: {}", err);
            return;
        }
        println!("{}", render_board(game.board()));
        player = player.opponent().unwrap();
    }

    let message = match game.status() {
        GameStatus::HumanWon => "O wins",
        GameStatus::MachineWon => "X wins",
        GameStatus::Draw => "Draw",
        GameStatus::InProgress => "No moves left",
    };
    log!("Demo finished: {}", message);
}
