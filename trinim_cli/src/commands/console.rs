use std::io::{self, BufRead, Write};
use trinim::player::Player;
use trinim::position::{Move, Pile, Position};

/// Manual player reading moves from the console.
///
/// Any input naming a pile/count pair outside the current legal-move set is
/// rejected with a re-prompt. End of input resigns.
#[derive(Debug, Default)]
pub struct ConsolePlayer;

impl ConsolePlayer {
    pub fn new() -> Self {
        ConsolePlayer
    }
}

fn prompt(label: &str) -> Option<String> {
    print!("{label}");
    io::stdout().flush().ok()?;

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).ok()? == 0 {
        return None;
    }
    Some(input.trim().to_owned())
}

impl Player for ConsolePlayer {
    fn next_move(&mut self, position: &Position) -> Option<Move> {
        let legal = position.legal_moves();
        if legal.is_empty() {
            return None;
        }

        loop {
            let input = prompt("pile (r/g/b): ")?;
            let Some(pile) = input.chars().next().and_then(Pile::from_letter) else {
                println!("unknown pile '{input}', expected r, g or b");
                continue;
            };

            let input = prompt("count: ")?;
            let Ok(count) = input.parse::<u8>() else {
                println!("'{input}' is not a valid count");
                continue;
            };

            let m = Move { pile, count };
            if legal.contains(&m) {
                return Some(m);
            }
            println!("cannot take {count} from the {pile} pile");
        }
    }
}
