use comfy_table::{ContentArrangement, Table};

use crate::config::CliConfig;

pub fn run(config: &CliConfig) -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Mask", "Decimal"]);

    for (name, mask) in config.actors.iter() {
        table.add_row(vec![
            name.to_string(),
            mask.to_string(),
            mask.bits().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} actors", config.actors.len());

    Ok(())
}
