//! Terminal twenty-one against the computer.
//!
//! Run with `RUST_LOG=debug` to see the engine's log output.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use twentyone::{Banner, Card, Game, GameOptions, Phase, Presenter, Side, Suit, Tick};

struct Terminal;

impl Presenter for Terminal {
    fn round_started(&mut self) {
        println!("\n--- New round ---");
    }

    fn card_dealt(&mut self, side: Side, card: Card) {
        println!("{} draws {}", side_name(side), format_card(card));
    }

    fn score_changed(&mut self, side: Side, score: u16) {
        println!("{} score: {score}", side_name(side));
    }

    fn banner(&mut self, banner: Banner, _duration: Duration) {
        println!("{}", colorize(&format!("*** {banner} ***"), "1"));
    }
}

fn main() {
    env_logger::init();
    println!("Twenty-one CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);
    game.set_presenter(Box::new(Terminal));
    game.start_round();

    let clock = Instant::now();

    loop {
        match game.phase() {
            Phase::PlayerTurn => {
                let action = prompt_line("[h]it [s]tand [n]ew [q]uit: ");
                let result = match action.as_str() {
                    "h" | "hit" => game.player_hit().map(|_| ()),
                    "s" | "stand" => game.player_stand(),
                    "n" | "new" => {
                        game.start_round();
                        Ok(())
                    }
                    "q" | "quit" => return,
                    _ => {
                        println!("Unknown action.");
                        continue;
                    }
                };

                if let Err(err) = result {
                    println!("Action error: {err}");
                }
            }
            Phase::ComputerTurn => {
                let mut driver = match game.computer_turn(clock.elapsed()) {
                    Ok(driver) => driver,
                    Err(err) => {
                        println!("Computer error: {err}");
                        game.abandon_round();
                        continue;
                    }
                };

                while let Some(wait) = driver.wait_time(clock.elapsed()) {
                    thread::sleep(wait);
                    match driver.poll(&game, clock.elapsed()) {
                        Ok(Tick::Dealt(_) | Tick::Waiting) => {}
                        Ok(Tick::Stopped) => break,
                        Err(err) => {
                            println!("Computer error: {err}");
                            game.abandon_round();
                            break;
                        }
                    }
                }
            }
            Phase::RoundOver => match prompt_line("[n]ew round [q]uit: ").as_str() {
                "q" | "quit" => return,
                _ => game.start_round(),
            },
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    if input.is_empty() {
        // stdin closed
        return String::from("q");
    }
    input.trim().to_lowercase()
}

const fn side_name(side: Side) -> &'static str {
    match side {
        Side::Player => "You",
        Side::Computer => "Computer",
    }
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
