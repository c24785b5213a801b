//! Contact form prompts for the connect step.

use std::io;

use anyhow::Result;
use dialoguer::{Confirm, Input, MultiSelect, theme::ColorfulTheme};
use stackfit_core::contact::validate_email;
use stackfit_core::{ContactError, ContactForm, Problem};

use crate::commands::render::render_errors_to;

/// Ask for every contact form field.
///
/// Per-field checks run inline; the full form is validated again when the
/// submission is built.
pub fn prompt_contact_form(theme: &ColorfulTheme) -> Result<ContactForm> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Name")
        .validate_with(|input: &String| {
            if input.is_empty() {
                Err("Name is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let email: String = Input::with_theme(theme)
        .with_prompt("Work email")
        .validate_with(|input: &String| validate_email(input.trim()).map_err(|e| e.to_string()))
        .interact_text()?;

    let labels: Vec<&str> = Problem::ALL.iter().map(Problem::label).collect();
    let problems = loop {
        let picked = MultiSelect::with_theme(theme)
            .with_prompt("What are you looking to solve? (space to select)")
            .items(&labels)
            .interact()?;
        if !picked.is_empty() {
            break problems_from_indices(&picked);
        }
        render_errors_to(&mut io::stdout(), [ContactError::NoProblemSelected])?;
    };

    let additional_info: String = Input::with_theme(theme)
        .with_prompt("Anything else about your setup we should know? (optional)")
        .allow_empty(true)
        .interact_text()?;

    let accept_terms = Confirm::with_theme(theme)
        .with_prompt("I accept the Terms & Conditions")
        .default(false)
        .interact()?;

    Ok(ContactForm {
        name,
        email: email.trim().to_string(),
        problems,
        additional_info: non_empty(additional_info),
        accept_terms,
    })
}

fn problems_from_indices(indices: &[usize]) -> Vec<Problem> {
    indices
        .iter()
        .filter_map(|&i| Problem::ALL.get(i).copied())
        .collect()
}

fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problems_map_by_menu_position() {
        assert_eq!(
            problems_from_indices(&[0, 4]),
            vec![Problem::NoisyAlerts, Problem::Other]
        );
        assert!(problems_from_indices(&[9]).is_empty());
    }

    #[test]
    fn blank_additional_info_is_dropped() {
        assert_eq!(non_empty("   ".to_string()), None);
        assert_eq!(
            non_empty(" custom auth ".to_string()),
            Some("custom auth".to_string())
        );
    }
}
