//! Tree command handler
//!
//! Prints the mapset/element tree for one element type.

use anyhow::Result;

use gselect::config::Config;
use gselect::ui::widgets::element_select::{render_status, render_tree};
use gselect::{ElementCatalog, ElementKind};

pub fn cmd_tree(
    catalog: Box<dyn ElementCatalog>,
    element_type: &str,
    mapsets: Vec<String>,
    ascii: bool,
    json: bool,
    config: &Config,
) -> Result<()> {
    let selector = super::open_selector(catalog, element_type, mapsets, false, config);
    let tree = selector.tree();

    if json {
        let out = serde_json::json!({
            "element_type": element_type,
            "kind": ElementKind::from_alias(element_type),
            "selectable": !tree.is_not_selectable(),
            "nodes": tree.top_level(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let unicode = config.output.unicode && !ascii;
    println!("{}", render_tree(tree, selector.selection(), None, unicode));
    if !tree.is_not_selectable() {
        println!();
        println!("{}", render_status(selector.selection(), tree));
    }
    Ok(())
}
