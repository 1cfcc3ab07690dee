use crate::GlobalArgs;

pub fn run(global: &GlobalArgs) -> Result<(), String> {
    let mut source = super::open_source(global)?;
    let quota = source.fetch_quota();
    if global.json {
        println!("{}", serde_json::json!({ "quota": quota.0 }));
    } else {
        println!("{quota}");
    }
    Ok(())
}
