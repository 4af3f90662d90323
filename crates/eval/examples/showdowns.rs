// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example showdowns
// ```

use std::time::Instant;

use showdown_eval::*;

#[rustfmt::skip]
fn main() {
    const SHOWDOWNS: usize = 1_000_000;
    const HAND_SIZE: usize = 5;

    // Count the categories that decided random showdowns.
    let now = Instant::now();
    let mut wins = [0usize; 9];
    let mut ties = [0usize; 9];
    let mut rng = rand::rng();

    for _ in 0..SHOWDOWNS {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let (Ok(h1), Ok(h2)) = (
            Hand::new(deck.deal_many(HAND_SIZE)),
            Hand::new(deck.deal_many(HAND_SIZE)),
        ) else {
            continue;
        };

        match compare(&h1, &h2) {
            Ok(v) if v.is_tie() => ties[v.category() as usize] += 1,
            Ok(v) => wins[v.category() as usize] += 1,
            Err(e) => eprintln!("{h1} vs {h2}: {e}"),
        }
    }

    let elapsed = now.elapsed().as_secs_f64();
    println!("Showdowns:       {SHOWDOWNS}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Showdowns/sec:   {:.0}\n", SHOWDOWNS as f64 / elapsed);

    println!("{:<16} {:>9} {:>9}", "Category", "Wins", "Ties");
    for category in Category::ranked() {
        let idx = category as usize;
        println!("{:<16} {:>9} {:>9}", category.to_string(), wins[idx], ties[idx]);
    }
}
