use std::io::{self, BufRead, Write};
use std::path::Path;

use bv_core::{Delivery, Game};
use bv_vault::{GameRecord, GameRepository, GameSetup, JsonVault, LeagueSize};
use colored::Colorize;

/// Options collected from the command line for a new game.
pub struct PlayOptions {
    pub league: Option<String>,
    pub balls: Vec<String>,
    pub lane: Option<String>,
    pub place: Option<String>,
    pub players: Vec<String>,
}

enum Step {
    Continue(String),
    Quit,
}

pub fn run(vault_path: &Path, options: PlayOptions) -> Result<(), String> {
    let mut vault = super::open_vault(vault_path)?;
    let setup = build_setup(&vault, options)?;
    let mut game = Game::new();

    println!("  {} a {} game", "Starting".bold(), setup.mode);
    println!(
        "  Ball: {} | Lane: {} | Place: {}",
        setup.ball_label(),
        setup.lane_label(),
        setup.place_label()
    );
    println!("  Enter pins (0-10), x, /, f, or -. Type 'help' for commands.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("{} ", prompt(&game));
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match handle(input, &mut game, &mut vault, &setup) {
            Ok(Step::Continue(output)) => println!("{output}\n"),
            Ok(Step::Quit) => break,
            Err(e) => println!("{}\n", e.yellow()),
        }
    }

    if game.roll_count() > 0 {
        println!("  Unsaved game discarded.");
    }
    Ok(())
}

fn build_setup(vault: &JsonVault, options: PlayOptions) -> Result<GameSetup, String> {
    let mut setup = match options.league {
        Some(size) => {
            let size = size
                .parse::<LeagueSize>()
                .map_err(|e| e.to_string())?;
            GameSetup::league(size)
        }
        None => GameSetup::practice(),
    };
    for ball in options.balls {
        setup = setup.with_ball(ball);
    }
    for player in options.players {
        setup = setup.with_player(player);
    }
    if let Some(lane) = options.lane.as_deref().or(vault.last_lane()) {
        setup = setup.with_lane(lane);
    }
    if let Some(place) = options.place.as_deref().or(vault.last_place()) {
        setup = setup.with_place(place);
    }
    Ok(setup)
}

fn prompt(game: &Game) -> String {
    if game.is_complete() {
        return "[done]>".to_string();
    }
    let cursor = game.cursor();
    format!(
        "[frame {} ball {}, {} up]>",
        cursor.frame + 1,
        cursor.roll + 1,
        game.remaining_pins()
    )
}

fn handle(
    input: &str,
    game: &mut Game,
    vault: &mut JsonVault,
    setup: &GameSetup,
) -> Result<Step, String> {
    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => return Ok(Step::Quit),
        "help" => return Ok(Step::Continue(help())),
        "board" => return Ok(Step::Continue(board(game))),
        "undo" | "u" => {
            if game.roll_count() == 0 {
                return Err("nothing to undo".to_string());
            }
            game.undo();
            return Ok(Step::Continue(board(game)));
        }
        "reset" => {
            game.start();
            return Ok(Step::Continue("Game cleared.".to_string()));
        }
        "save" => return save(game, vault, setup).map(Step::Continue),
        _ => {}
    }

    // The whole line is bowled on a copy and only kept if every token fits.
    let mut trial = game.clone();
    for token in input.split_whitespace() {
        let rejected = if trial.is_complete() {
            Some(format!("game is complete, '{token}' is one ball too many"))
        } else {
            match Delivery::parse(token, &trial) {
                Ok(delivery) => {
                    trial.bowl(delivery);
                    None
                }
                Err(e) => Some(e.to_string()),
            }
        };
        if let Some(reason) = rejected {
            return Err(format!(
                "{reason}; nothing from this line was recorded\n{}",
                board(game)
            ));
        }
    }
    *game = trial;

    let mut output = board(game);
    if game.is_complete() {
        output.push_str(&format!(
            "\n\n  {} Final score: {}. Type 'save' to store it.",
            "Game complete!".green().bold(),
            game.score().total
        ));
    }
    Ok(Step::Continue(output))
}

fn save(game: &mut Game, vault: &mut JsonVault, setup: &GameSetup) -> Result<String, String> {
    let record = GameRecord::new(game.snapshot(), setup).map_err(|e| e.to_string())?;
    let summary = format!("Saved game {} (score {}).", record.short_id(), record.score);
    vault.save(record).map_err(|e| e.to_string())?;
    game.start();
    Ok(summary)
}

fn board(game: &Game) -> String {
    super::render_board(game.frames(), &game.score())
}

fn help() -> String {
    [
        "Deliveries (several per line are fine):",
        "  0-10   pins knocked down",
        "  x      strike (all standing pins)",
        "  /      spare (the rest of the rack)",
        "  f      foul",
        "  -      miss",
        "Commands:",
        "  undo   remove the last ball",
        "  board  show the scoresheet",
        "  save   store the game and start a new one",
        "  reset  clear the current game",
        "  quit   leave without saving",
    ]
    .join("\n")
}
