//! Types command handler
//!
//! Lists the element kinds the catalog can enumerate and every type name
//! that resolves to each.

use anyhow::Result;

use gselect::ElementKind;

pub fn cmd_types(json: bool) -> Result<()> {
    if json {
        let kinds: serde_json::Map<String, serde_json::Value> = ElementKind::ALL
            .iter()
            .map(|kind| {
                let aliases: Vec<&str> = kind.aliases().collect();
                (kind.query_type().to_string(), serde_json::json!(aliases))
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&kinds)?);
        return Ok(());
    }

    for kind in ElementKind::ALL {
        let aliases: Vec<&str> = kind
            .aliases()
            .filter(|alias| *alias != kind.query_type())
            .collect();
        println!("{:<10} {}", kind.query_type(), aliases.join(", "));
    }
    Ok(())
}
