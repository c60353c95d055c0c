pub fn run(file: &str, seed: Option<u64>) -> Result<(), String> {
    let roster = super::load(file)?;
    let config = super::config(seed);
    wp_tui::terminal::run(&roster, &config)
}
