use std::io;

use wp_roulette::App;

use crate::console::LinePresenter;

pub fn run(file: &str, seed: Option<u64>) -> Result<(), String> {
    let roster = super::load(file)?;
    let config = super::config(seed);

    let stdin = io::stdin();
    let mut presenter = LinePresenter::new(stdin.lock(), io::stdout(), config.modes.clone());

    App::new(&roster, &config)
        .run(&mut presenter)
        .map_err(|e| e.to_string())
}
