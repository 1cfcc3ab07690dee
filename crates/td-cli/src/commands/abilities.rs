use comfy_table::{ContentArrangement, Table};
use td_dice::{Category, ability_rolls};

use crate::GlobalArgs;

pub fn run(global: &GlobalArgs) -> Result<(), String> {
    let mut source = super::open_source(global)?;
    let result = source
        .request(&Category::Abilities.request())
        .map_err(|e| e.to_string())?;
    super::print_alert(&result);

    // Reject failed and malformed results the same way the board does.
    Category::Abilities
        .describe(&result)
        .map_err(|e| e.to_string())?;
    let faces = result.integers().unwrap_or_default();
    let rolls = ability_rolls(&faces).map_err(|e| e.to_string())?;

    if global.json {
        let rows: Vec<_> = rolls
            .iter()
            .map(|r| {
                serde_json::json!({ "dice": r.dice, "dropped": r.lowest(), "score": r.score() })
            })
            .collect();
        let json = serde_json::to_string_pretty(&rows).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Dice", "Dropped", "Score"]);
    for (i, roll) in rolls.iter().enumerate() {
        let dice: Vec<String> = roll.dice.iter().map(u32::to_string).collect();
        table.add_row(vec![
            (i + 1).to_string(),
            dice.join(" "),
            roll.lowest().to_string(),
            roll.score().to_string(),
        ]);
    }

    println!("{table}");
    let total: u32 = rolls.iter().map(|r| r.score()).sum();
    println!("  Total: {total}");
    Ok(())
}
