//! Interactive stack wizard.
//!
//! Walks one [`StackBuilder`] session through select → connect → success.
//! The builder decides what is allowed; this module only renders its state
//! and forwards the user's choices.

mod contact;

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use dialoguer::{Confirm, Select, theme::ColorfulTheme};
use stackfit_core::{
    Catalog, CategoryId, FlowStep, MockSubmitter, StackBuilder, Submission, Submitter,
};
use tracing::warn;

use super::render::{
    option_line, render_assessment_to, render_categories_to, render_confirmation_to,
    render_errors_to, render_step_banner_to,
};
use crate::config::StackfitConfig;

/// Entry in the select-step menu.
#[derive(Debug, Clone, PartialEq, Eq)]
enum MenuAction {
    Category(CategoryId),
    Continue,
    StartOver,
    Quit,
}

/// Menu for the select step, derived from the builder's current state.
///
/// "Continue" only appears while the builder allows it.
fn select_menu(builder: &StackBuilder) -> Vec<(String, MenuAction)> {
    let mut menu: Vec<(String, MenuAction)> = builder
        .catalog()
        .categories()
        .iter()
        .map(|category| {
            let marker = if builder.category_has_selection(category) {
                "✓"
            } else {
                " "
            };
            (
                format!("{marker} {}", category.label),
                MenuAction::Category(category.id.clone()),
            )
        })
        .collect();

    if builder.can_continue() {
        menu.push(("→ Continue".to_string(), MenuAction::Continue));
    }
    if !builder.selected_options().is_empty() {
        menu.push(("↺ Start over".to_string(), MenuAction::StartOver));
    }
    menu.push(("Quit".to_string(), MenuAction::Quit));
    menu
}

/// Run the wizard until the user quits.
pub async fn run(catalog: Catalog, config: &StackfitConfig) -> Result<()> {
    let submitter = MockSubmitter::new(Duration::from_millis(config.contact.submit_delay_ms));
    let theme = ColorfulTheme::default();
    let mut builder = StackBuilder::new(catalog);

    loop {
        let keep_going = match builder.current_step() {
            FlowStep::Select => select_step(&mut builder, &theme)?,
            FlowStep::Connect => connect_step(&mut builder, &theme, &submitter).await?,
            FlowStep::Success => success_step(&mut builder, &theme)?,
        };
        if !keep_going {
            return Ok(());
        }
    }
}

fn select_step(builder: &mut StackBuilder, theme: &ColorfulTheme) -> Result<bool> {
    let mut stdout = io::stdout();
    render_step_banner_to(&mut stdout, FlowStep::Select)?;
    render_categories_to(&mut stdout, builder)?;
    render_assessment_to(&mut stdout, builder)?;
    println!();

    let menu = select_menu(builder);
    let labels: Vec<&str> = menu.iter().map(|(label, _)| label.as_str()).collect();
    let choice = Select::with_theme(theme)
        .with_prompt("Pick a category to edit")
        .items(&labels)
        .default(0)
        .interact()?;

    match &menu[choice].1 {
        MenuAction::Category(id) => choose_option(builder, theme, id.as_str())?,
        MenuAction::Continue => builder.go_to_connect(),
        MenuAction::StartOver => builder.reset_state(),
        MenuAction::Quit => return Ok(false),
    }
    Ok(true)
}

/// Offer the category's visible options and toggle the one picked.
fn choose_option(builder: &mut StackBuilder, theme: &ColorfulTheme, category_id: &str) -> Result<()> {
    let Some(category) = builder.catalog().category(category_id) else {
        return Ok(());
    };

    let visible = builder.visible_options(category);
    let mut labels: Vec<String> = visible
        .iter()
        .map(|option| option_line(builder, category, option))
        .collect();
    labels.push("← Back".to_string());
    let ids: Vec<String> = visible.iter().map(|o| o.id.to_string()).collect();

    let choice = Select::with_theme(theme)
        .with_prompt(format!("{} (toggle an option)", category.label))
        .items(&labels)
        .default(0)
        .interact()?;

    if let Some(option_id) = ids.get(choice) {
        builder.toggle(option_id, category_id);
    }
    Ok(())
}

async fn connect_step(
    builder: &mut StackBuilder,
    theme: &ColorfulTheme,
    submitter: &dyn Submitter,
) -> Result<bool> {
    let mut stdout = io::stdout();
    render_step_banner_to(&mut stdout, FlowStep::Connect)?;
    println!("An engineer will set up your dedicated instance (ready in ~24 hours).");
    println!("Book a call to discuss your setup and get started.");
    println!();

    let choice = Select::with_theme(theme)
        .with_prompt("Next")
        .items(&["Fill in the contact form", "← Back to stack selection"])
        .default(0)
        .interact()?;
    if choice == 1 {
        builder.go_to_select();
        return Ok(true);
    }

    let form = contact::prompt_contact_form(theme)?;
    let submission = match Submission::new(form, builder) {
        Ok(submission) => submission,
        Err(errors) => {
            render_errors_to(&mut stdout, &errors)?;
            return Ok(true);
        }
    };

    write!(stdout, "Submitting... ")?;
    stdout.flush()?;
    match submitter.submit(&submission).await {
        Ok(()) => {
            writeln!(stdout, "done")?;
            writeln!(stdout)?;
            render_confirmation_to(&mut stdout, &submission)?;
            builder.go_to_success();
        }
        Err(e) => {
            writeln!(stdout)?;
            warn!(error = %e, "Contact submission failed");
            render_errors_to(&mut stdout, [&e])?;
        }
    }
    Ok(true)
}

fn success_step(builder: &mut StackBuilder, theme: &ColorfulTheme) -> Result<bool> {
    render_step_banner_to(&mut io::stdout(), FlowStep::Success)?;
    println!("We've received your request. An engineer will reach out within 24");
    println!("hours to set up your dedicated instance and schedule a call.");
    println!();

    let start_over = Confirm::with_theme(theme)
        .with_prompt("Start over?")
        .default(false)
        .interact()?;
    if start_over {
        builder.reset_state();
    }
    Ok(start_over)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(builder: &StackBuilder) -> Vec<MenuAction> {
        select_menu(builder)
            .into_iter()
            .map(|(_, action)| action)
            .collect()
    }

    #[test]
    fn menu_lists_categories_then_quit() {
        let builder = StackBuilder::default();
        let actions = actions(&builder);

        assert_eq!(actions.len(), 6);
        assert_eq!(actions[0], MenuAction::Category(CategoryId::from("communication")));
        assert_eq!(actions.last(), Some(&MenuAction::Quit));
        assert!(!actions.contains(&MenuAction::Continue));
        assert!(!actions.contains(&MenuAction::StartOver));
    }

    #[test]
    fn menu_offers_start_over_once_something_is_selected() {
        let mut builder = StackBuilder::default();
        builder.toggle("slack", "communication");

        let actions = actions(&builder);
        assert!(actions.contains(&MenuAction::StartOver));
        assert!(!actions.contains(&MenuAction::Continue));
    }

    #[test]
    fn menu_offers_continue_at_two_categories() {
        let mut builder = StackBuilder::default();
        builder.toggle("slack", "communication");
        builder.toggle("github", "source-code");

        let menu = select_menu(&builder);
        let labels: Vec<&str> = menu.iter().map(|(l, _)| l.as_str()).collect();
        assert!(labels.contains(&"✓ Communication"));
        assert!(labels.contains(&"  Logs"));
        assert!(menu.iter().any(|(_, a)| *a == MenuAction::Continue));
    }
}
