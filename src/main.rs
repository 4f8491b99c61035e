//! Command-line front end
//!
//! Reads one command per line from stdin and forwards squares to the
//! controller as clicks. A square is either algebraic (`e2`, `c10`) or a
//! zero-based `rank,file` pair (`1,4`).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use tilechess::core::{init_logging, load_settings, save_settings, EngineSettings};
use tilechess::game::{ChessGame, ClickOutcome, File, GameEvent, InitialSetup, Square};

#[derive(Parser, Debug)]
#[command(name = "tilechess", version, about = "Two-player chess on boards of any size")]
struct Cli {
    /// JSON setup file (`{"ranks": [[...], ...]}`, rank 0 first)
    #[arg(short, long)]
    setup: Option<PathBuf>,

    /// Log filter directive, overrides the saved settings
    #[arg(long)]
    log: Option<String>,

    /// Hide rank and file labels around the board
    #[arg(long)]
    no_coordinates: bool,

    /// Store the effective options as the new defaults
    #[arg(long)]
    save_settings: bool,
}

enum Command {
    Square(Square),
    Deselect,
    Board,
    History,
    Danger,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line {
        "deselect" | "d" => return Some(Command::Deselect),
        "board" | "b" => return Some(Command::Board),
        "history" | "h" => return Some(Command::History),
        "danger" | "x" => return Some(Command::Danger),
        "help" | "?" => return Some(Command::Help),
        "quit" | "q" | "exit" => return Some(Command::Quit),
        _ => {}
    }

    if let Some((rank, file)) = line.split_once(',') {
        let rank = rank.trim().parse().ok()?;
        let file = file.trim().parse().ok()?;
        return Some(Command::Square(Square::new(rank, file)));
    }

    Square::from_algebraic(line).map(Command::Square)
}

fn render_board(game: &ChessGame, show_coordinates: bool) -> String {
    let board = game.board().to_string();
    if !show_coordinates {
        return board;
    }

    let size = game.board().size();
    let width = size.ranks.to_string().len();
    let mut out = String::new();
    for (row, line) in board.lines().enumerate() {
        let rank = u16::from(size.ranks) - row as u16;
        out.push_str(&format!("{rank:>width$} {line}\n"));
    }
    let files: String = (0..size.files)
        .map(|file| File(file).to_char().unwrap_or('?'))
        .collect();
    out.push_str(&format!("{:>width$} {files}\n", ""));
    out
}

fn report_events(game: &mut ChessGame, out: &mut impl Write) -> io::Result<()> {
    for event in game.drain_events() {
        match event {
            GameEvent::TurnComplete { applied, next } => {
                writeln!(out, "{} -> {} ({:?}); {:?} to move", applied.from, applied.to, applied.kind, next)?
            }
            GameEvent::Check { side } => writeln!(out, "Check! ({:?})", side)?,
            GameEvent::Checkmate { side, winner } => {
                writeln!(out, "Check Mate! {:?} is mated, {:?} wins", side, winner)?
            }
            GameEvent::KingCaptured { side, winner } => {
                writeln!(out, "{:?} king captured, {:?} wins", side, winner)?
            }
        }
    }
    Ok(())
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  <square>     select a piece or move the selected one (e2, c10, 1,4)")?;
    writeln!(out, "  deselect, d  drop the current selection")?;
    writeln!(out, "  board, b     print the board")?;
    writeln!(out, "  history, h   list the moves played")?;
    writeln!(out, "  danger, x    squares the side to move's king must avoid")?;
    writeln!(out, "  quit, q      leave")
}

fn run(game: &mut ChessGame, show_coordinates: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    write!(stdout, "{}", render_board(game, show_coordinates))?;
    writeln!(stdout, "{:?} to move. Type 'help' for commands.", game.side_to_move())?;
    report_events(game, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(command) = parse_command(line) else {
            writeln!(stdout, "Unrecognised input '{}'", line)?;
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Help => print_help(&mut stdout)?,
            Command::Board => write!(stdout, "{}", render_board(game, show_coordinates))?,
            Command::History => {
                for (index, record) in game.history().iter().enumerate() {
                    let suffix = if record.is_checkmate {
                        "#"
                    } else if record.is_check {
                        "+"
                    } else {
                        ""
                    };
                    writeln!(
                        stdout,
                        "{:>3}. {} {}-{}{}",
                        index + 1,
                        record.piece.symbol(),
                        record.from,
                        record.to,
                        suffix
                    )?;
                }
            }
            Command::Danger => {
                let squares: Vec<String> = game
                    .danger_map()
                    .marked_squares()
                    .map(|square| square.to_string())
                    .collect();
                writeln!(stdout, "{:?} king must avoid: {}", game.side_to_move(), squares.join(" "))?;
            }
            Command::Deselect => {
                game.deselect();
                writeln!(stdout, "Selection cleared")?;
            }
            Command::Square(square) => match game.click(square) {
                Ok(ClickOutcome::Selected(moves)) => {
                    let targets: Vec<String> = moves
                        .iter()
                        .map(|mv| format!("{}{}", mv.to, if mv.kind.is_capture() { "x" } else { "" }))
                        .collect();
                    writeln!(stdout, "Selected {}: {}", square, targets.join(" "))?;
                }
                Ok(ClickOutcome::Moved(_)) => {
                    write!(stdout, "{}", render_board(game, show_coordinates))?;
                }
                Err(e) => {
                    debug!("[SELECT] Rejected {}: {}", square, e);
                    writeln!(stdout, "{}", e)?;
                }
            },
        }

        report_events(game, &mut stdout)?;
        if !game.is_running() {
            writeln!(stdout, "{}", game.game_over().message())?;
            break;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = load_settings();
    let mut settings: EngineSettings = loaded.settings.clone();

    if let Some(filter) = cli.log {
        settings.log_filter = filter;
    }
    if let Some(setup) = cli.setup {
        settings.setup_path = Some(setup);
    }
    if cli.no_coordinates {
        settings.show_coordinates = false;
    }

    init_logging(&settings.log_filter)?;
    loaded.report();

    if cli.save_settings {
        if let Err(e) = save_settings(&settings) {
            warn!("[SETTINGS] Could not save settings: {}", e);
        }
    }

    let setup = match &settings.setup_path {
        Some(path) => InitialSetup::load(path)
            .with_context(|| format!("failed to load setup from {}", path.display()))?,
        None => InitialSetup::standard(),
    };

    let mut game = ChessGame::new(&setup).context("invalid starting position")?;
    run(&mut game, settings.show_coordinates)
}
