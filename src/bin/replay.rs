//! Replay Binary
//!
//! Replays a committed hand street by street and prints the pot, either
//! from a JSON record or from a built-in demo hand.

use clap::Parser;
use railbird::gameplay::action::Action;
use railbird::gameplay::action::ActionKind;
use railbird::gameplay::hand::Hand;
use railbird::gameplay::street::Street;
use railbird::session::player::Player;
use railbird::session::session::Session;

#[derive(Parser)]
#[command(about = "replay a recorded hand street by street")]
struct Args {
    /// JSON file holding a committed hand
    #[arg(long)]
    hand: Option<std::path::PathBuf>,
    /// blind level, e.g. 1/2
    #[arg(long, default_value = "1/2")]
    stakes: String,
    /// points per hundred big blinds
    #[arg(long, default_value_t = 50000.)]
    scale: f64,
    /// dealer button seat for the demo hand
    #[arg(long, default_value_t = 3)]
    button: isize,
}

fn main() -> anyhow::Result<()> {
    railbird::log();
    let args = Args::parse();
    let hand = match &args.hand {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => demo(&args),
    };
    for round in hand.rounds().iter().filter(|round| !round.is_empty()) {
        print!("{}", round);
    }
    println!("pot {} ({:.1} BB)", hand.pot(), hand.pot_in_bb(args.scale));
    Ok(())
}

fn demo(args: &Args) -> Hand {
    let mut session = Session::new(&args.stakes, args.scale);
    session.players = ["Alice", "Bob", "Cleo", "Dan", "Eve", "Fay"]
        .iter()
        .enumerate()
        .map(|(seat, name)| Player::new(*name, seat))
        .collect();
    log::info!(
        "replaying a demo hand at {} with the button on seat {}",
        args.stakes,
        args.button
    );
    let mut editor = session.editor(args.button).hero("Cleo");
    editor.hole = "AhKd".to_string();
    editor.append(Street::Pref, Action::new("Cleo", ActionKind::Raise, Some(1500.)));
    editor.append(Street::Pref, Action::new("Dan", ActionKind::Call, None));
    editor.append(Street::Pref, Action::fold("Eve"));
    editor.append(Street::Pref, Action::fold("Fay"));
    editor.deal(Street::Flop, "Th7s5c");
    editor.append(Street::Flop, Action::new("Cleo", ActionKind::Bet, Some(2500.)));
    editor.append(Street::Flop, Action::new("Dan", ActionKind::Call, None));
    editor.deal(Street::Turn, "2d");
    editor.append(Street::Turn, Action::new("Cleo", ActionKind::Check, None));
    editor.append(Street::Turn, Action::new("Dan", ActionKind::Check, None));
    editor.deal(Street::Rive, "9h");
    editor.append(Street::Rive, Action::new("Cleo", ActionKind::Bet, Some(6000.)));
    editor.append(Street::Rive, Action::fold("Dan"));
    let mut hand = editor.commit();
    hand.reveal("Cleo", "AhKd");
    hand
}
