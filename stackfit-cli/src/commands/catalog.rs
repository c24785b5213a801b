//! Catalog listing.

use anyhow::Result;
use clap::Args;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use stackfit_core::{Catalog, Category, StackOption};

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CatalogArgs, catalog: Catalog) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        println!("{}", catalog_table(&catalog));
    }
    Ok(())
}

fn category_notes(category: &Category) -> String {
    let mut notes = vec![if category.multi_select {
        "multi-select"
    } else {
        "single-select"
    }];
    if category.required {
        notes.push("required");
    }
    notes.join(", ")
}

fn push_option_rows(table: &mut Table, category: &Category, option: &StackOption, depth: usize) {
    let label = if depth == 0 {
        option.label.clone()
    } else {
        format!("{}↳ {}", "  ".repeat(depth), option.label)
    };
    let notes = if option.coming_soon { "coming soon" } else { "" };

    table.add_row(vec![
        Cell::new(&category.label),
        Cell::new(label),
        Cell::new(option.id.as_str()),
        Cell::new(notes),
    ]);
    for sub in &option.sub_options {
        push_option_rows(table, category, sub, depth + 1);
    }
}

fn catalog_table(catalog: &Catalog) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Category").fg(Color::Cyan),
        Cell::new("Option").fg(Color::Cyan),
        Cell::new("ID").fg(Color::Cyan),
        Cell::new("Notes").fg(Color::Cyan),
    ]);

    for category in catalog.categories() {
        table.add_row(vec![
            Cell::new(&category.label).fg(Color::Yellow),
            Cell::new(""),
            Cell::new(category.id.as_str()),
            Cell::new(category_notes(category)),
        ]);
        for option in &category.options {
            push_option_rows(&mut table, category, option, 0);
        }
    }
    table
}
