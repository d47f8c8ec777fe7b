//! Pick command handler
//!
//! Resolves `--select` texts against the tree (or prompts for elements when
//! none are given on a terminal) and prints the resulting selection text.

use anyhow::Result;
use is_terminal::IsTerminal;
use tracing::warn;

use gselect::config::Config;
use gselect::ui::theme::PickerTheme;
use gselect::{ElementCatalog, ElementSelector, NodePath, SelectError};

pub struct PickArgs {
    pub element_type: String,
    pub mapsets: Vec<String>,
    pub select: Vec<String>,
    pub multiple: bool,
    pub strict: bool,
}

pub fn cmd_pick(
    catalog: Box<dyn ElementCatalog>,
    args: PickArgs,
    json: bool,
    config: &Config,
) -> Result<()> {
    let mut selector = super::open_selector(
        catalog,
        &args.element_type,
        args.mapsets,
        args.multiple,
        config,
    );

    if args.select.is_empty() {
        if !json && std::io::stdin().is_terminal() && std::io::stderr().is_terminal() {
            prompt(&mut selector, config.output.unicode)?;
        }
    } else {
        for text in &args.select {
            if selector.set_from_text(text).is_none() {
                if args.strict {
                    return Err(SelectError::UnknownElement(text.clone()).into());
                }
                warn!(text = %text, "no selectable element matches");
            }
        }
    }

    if json {
        let out = serde_json::json!({
            "element_type": selector.element_type(),
            "multiple": selector.is_multiple(),
            "selection": selector.selection_text(),
            "items": selector.selection().labels(selector.tree()),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", selector.selection_text());
    }
    Ok(())
}

fn prompt(selector: &mut ElementSelector<Box<dyn ElementCatalog>>, unicode: bool) -> Result<()> {
    use dialoguer::{MultiSelect, Select};

    let leaves: Vec<(NodePath, String)> = selector
        .tree()
        .leaves()
        .map(|(path, node)| (path, node.label.clone()))
        .collect();
    if leaves.is_empty() {
        eprintln!("No selectable elements of type '{}'.", selector.element_type());
        return Ok(());
    }

    let items: Vec<&str> = leaves.iter().map(|(_, label)| label.as_str()).collect();
    let theme = PickerTheme::new(unicode);
    let prompt = format!("Select {}", selector.element_type());

    let chosen: Vec<usize> = if selector.is_multiple() {
        MultiSelect::with_theme(&theme)
            .with_prompt(prompt)
            .items(&items)
            .interact_opt()?
            .unwrap_or_default()
    } else {
        Select::with_theme(&theme)
            .with_prompt(prompt)
            .items(&items)
            .default(0)
            .interact_opt()?
            .into_iter()
            .collect()
    };

    for index in chosen {
        selector.select_leaf(&leaves[index].0);
    }
    Ok(())
}
