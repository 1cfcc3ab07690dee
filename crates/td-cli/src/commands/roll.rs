use td_dice::Category;

use crate::GlobalArgs;

pub fn run(global: &GlobalArgs, name: &str, times: u32) -> Result<(), String> {
    let category = Category::from_name(name).ok_or_else(|| {
        format!("unknown category '{name}' (expected coin, dN, or abilities)")
    })?;
    let mut source = super::open_source(global)?;
    let req = category.request();

    let mut rolls = Vec::new();
    for number in 1..=times {
        let result = source.request(&req).map_err(|e| e.to_string())?;
        super::print_alert(&result);
        let text = category.describe(&result).map_err(|e| e.to_string())?;
        if global.json {
            rolls.push(serde_json::json!({ "roll": number, "value": text, "result": result }));
        } else {
            println!("roll number {number}: {text}");
        }
    }

    if global.json {
        let json = serde_json::to_string_pretty(&rolls).map_err(|e| e.to_string())?;
        println!("{json}");
    }
    Ok(())
}
