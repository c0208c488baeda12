//! CLI memory game example.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use memoria::{Card, Deck, GameOptions, Level, RngSource, Suit};

fn main() {
    println!("Memoria CLI example (type 'q' to quit)");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let Some(level) = prompt_level(&mut input) else {
        return;
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::for_level(level);
    let mut source = RngSource::seeded(seed);

    let deck = match options.build_deck(&mut source) {
        Ok(deck) => deck,
        Err(err) => {
            println!("Deck error: {err}");
            return;
        }
    };

    let mut matched = vec![false; deck.len()];
    let mut turns = 0_usize;

    while matched.iter().any(|m| !m) {
        print_grid(&deck, &options, &matched, &[]);

        let Some(first) = prompt_position(&mut input, &deck, &matched, "First card: ") else {
            println!("Goodbye.");
            return;
        };
        let Some(second) = prompt_position(&mut input, &deck, &matched, "Second card: ") else {
            println!("Goodbye.");
            return;
        };
        if first == second {
            println!("Pick two different cards.");
            continue;
        }

        turns += 1;
        print_grid(&deck, &options, &matched, &[first, second]);

        match (deck.card(first), deck.card(second)) {
            (Ok(a), Ok(b)) if a == b => {
                println!("Match!");
                matched[first] = true;
                matched[second] = true;
            }
            _ => println!("No match."),
        }
    }

    println!("All pairs found in {turns} turns.");
}

fn prompt_level(input: &mut impl BufRead) -> Option<Level> {
    loop {
        match prompt_line(input, "Level (a)pprentice, (r)egular, (m)aster: ")?.as_str() {
            "a" | "apprentice" => return Some(Level::Apprentice),
            "r" | "regular" => return Some(Level::Regular),
            "m" | "master" => return Some(Level::Master),
            "q" | "quit" => return None,
            _ => println!("Please choose a, r or m."),
        }
    }
}

/// Returns `None` once input is closed or unreadable.
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_lowercase()),
    }
}

fn prompt_position(
    input: &mut impl BufRead,
    deck: &Deck,
    matched: &[bool],
    prompt: &str,
) -> Option<usize> {
    loop {
        let answer = prompt_line(input, prompt)?;
        if answer == "q" || answer == "quit" {
            return None;
        }
        match answer.parse::<usize>() {
            Ok(value) if value < deck.len() && !matched[value] => return Some(value),
            Ok(_) => println!("Pick a face-down card between 0 and {}.", deck.len() - 1),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_grid(deck: &Deck, options: &GameOptions, matched: &[bool], revealed: &[usize]) {
    println!();
    for (index, card) in deck.iter().enumerate() {
        let cell = if matched[index] || revealed.contains(&index) {
            format_card(card)
        } else {
            format!("{index:>3}")
        };
        print!("{cell:>4} ");
        if (index + 1) % options.columns as usize == 0 {
            println!();
        }
    }
    println!();
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
