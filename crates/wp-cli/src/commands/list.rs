use comfy_table::{ContentArrangement, Table};

pub fn run(file: &str, json: bool) -> Result<(), String> {
    let roster = super::load(file)?;

    if json {
        println!("{}", roster.to_json().map_err(|e| e.to_string())?);
        return Ok(());
    }

    if roster.is_empty() {
        println!("  No characters found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "#", "Name", "Element", "Quality", "Level", "Asc", "Seq", "Talents",
    ]);

    for (id, c) in roster.iter() {
        let talents = format!(
            "{}/{}/{}/{}/{}",
            c.talent_basic_atk, c.talent_skill, c.talent_forte, c.talent_liberation, c.talent_intro
        );
        table.add_row(vec![
            (id.index() + 1).to_string(),
            c.name.clone(),
            c.element.clone(),
            format!("{}\u{2605}", c.quality),
            c.level.to_string(),
            c.ascension.to_string(),
            c.sequence.to_string(),
            talents,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} characters", roster.len());

    Ok(())
}
