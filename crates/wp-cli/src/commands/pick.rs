use std::io;

use wp_roulette::pick_one;

use crate::console::LinePresenter;

pub fn run(file: &str, count: usize, seed: Option<u64>) -> Result<(), String> {
    let roster = super::load(file)?;
    let config = super::config(seed);
    let mut rng = config.rng();

    let mut presenter = LinePresenter::new(io::empty(), io::stdout(), config.modes);
    for _ in 0..count {
        let character = pick_one(&roster, &mut rng).map_err(|e| e.to_string())?;
        presenter
            .print_cards(&[character])
            .map_err(|e| e.to_string())?;
    }

    Ok(())
}
