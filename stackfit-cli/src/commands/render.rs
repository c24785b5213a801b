//! Plain-text rendering of the option grid, the assessment panel and the
//! wizard's step banners and notices.

use std::fmt;
use std::io::{self, Write};

use dialoguer::console::{StyledObject, style};
use stackfit_core::{
    AssessmentIcon, Category, FlowStep, StackBuilder, StackOption, Submission, Tone,
};

pub fn icon_glyph(icon: AssessmentIcon) -> &'static str {
    match icon {
        AssessmentIcon::Empty => "○",
        AssessmentIcon::Warning => "!",
        AssessmentIcon::Check | AssessmentIcon::Complete => "✓",
    }
}

fn toned<D>(tone: Tone, value: D) -> StyledObject<D> {
    match tone {
        Tone::Neutral => style(value).dim(),
        Tone::Caution => style(value).yellow(),
        Tone::Positive => style(value).green(),
    }
}

/// How far below the top level `id` sits, or `None` if it is not in the tree.
pub fn option_depth(options: &[StackOption], id: &str) -> Option<usize> {
    options.iter().find_map(|option| {
        if option.id.as_str() == id {
            Some(0)
        } else {
            option_depth(&option.sub_options, id).map(|depth| depth + 1)
        }
    })
}

/// Category title with its required marker, select hint and coverage tick.
pub fn category_heading(builder: &StackBuilder, category: &Category) -> String {
    let mut heading = category.label.clone();
    if category.required {
        heading.push_str(" *");
    }
    if category.multi_select {
        heading.push_str(" (select all that apply)");
    }
    if builder.category_has_selection(category) {
        heading.push_str(" ✓");
    }
    heading
}

/// One option row: indentation for sub-options, a checkbox and badges.
pub fn option_line(builder: &StackBuilder, category: &Category, option: &StackOption) -> String {
    let depth = option_depth(&category.options, option.id.as_str()).unwrap_or(0);
    let indent = if depth == 0 {
        String::new()
    } else {
        format!("{}↳ ", "  ".repeat(depth))
    };
    let checkbox = if builder.is_selected(option.id.as_str()) {
        "[x]"
    } else {
        "[ ]"
    };
    let badge = if option.coming_soon {
        " (coming soon)"
    } else {
        ""
    };
    format!("{indent}{checkbox} {}{badge}", option.label)
}

/// Every category with its currently visible options.
pub fn render_categories_to<W: Write>(w: &mut W, builder: &StackBuilder) -> io::Result<()> {
    for category in builder.catalog().categories() {
        writeln!(w, "{}", style(category_heading(builder, category)).bold())?;
        for option in builder.visible_options(category) {
            writeln!(w, "  {}", option_line(builder, category, option))?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// The one-line fit bar shown under the option grid.
pub fn assessment_bar(builder: &StackBuilder) -> String {
    let level = builder.assessment_level();
    format!(
        "{} {} | {}/{} enabled | {}",
        icon_glyph(level.icon),
        level.display_text(),
        builder.enabled_categories_count(),
        builder.catalog().categories().len(),
        level.display_description(),
    )
}

/// Fit bar, assessment headline and the feedback checklist.
pub fn render_assessment_to<W: Write>(w: &mut W, builder: &StackBuilder) -> io::Result<()> {
    let tone = Tone::for_count(builder.enabled_categories_count());
    let level = builder.assessment_level();

    writeln!(w, "{}", toned(tone, assessment_bar(builder)))?;
    writeln!(w)?;
    writeln!(w, "{}", style("ASSESSMENT").dim())?;
    writeln!(w, "{}", style(&level.title).bold())?;
    writeln!(w, "{}", level.description)?;
    writeln!(w)?;
    writeln!(w, "{}", style("WHAT IT CAN DO").dim())?;
    for status in builder.feedback() {
        if status.active {
            writeln!(w, "  {} {}", style("●").green(), status.item.title)?;
        } else {
            writeln!(w, "  {} {}", style("○").dim(), style(&status.item.title).dim())?;
        }
    }
    Ok(())
}

/// "Step n of 3 · title" for the given flow step.
pub fn step_banner(step: FlowStep) -> String {
    let (number, title) = match step {
        FlowStep::Select => (1, "Select your stack"),
        FlowStep::Connect => (2, "Connect with the team"),
        FlowStep::Success => (3, "Request received"),
    };
    format!("Step {number} of 3 · {title}")
}

/// Step banner underlined to its own width.
pub fn render_step_banner_to<W: Write>(w: &mut W, step: FlowStep) -> io::Result<()> {
    let banner = step_banner(step);
    let rule = "━".repeat(banner.chars().count());
    writeln!(w, "{}", style(&banner).bold())?;
    writeln!(w, "{}", style(rule).dim())?;
    writeln!(w)
}

/// One `✗` line per error.
pub fn render_errors_to<W, I>(w: &mut W, errors: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: fmt::Display,
{
    for error in errors {
        writeln!(w, "  {} {}", style("✗").red().bold(), style(error).red())?;
    }
    Ok(())
}

/// Acknowledgement for an accepted contact request.
pub fn render_confirmation_to<W: Write>(w: &mut W, submission: &Submission) -> io::Result<()> {
    let count = submission.selected_stack.len();
    let noun = if count == 1 { "option" } else { "options" };
    writeln!(
        w,
        "{} {}",
        style("✓").green().bold(),
        style(format!("Thank you, {}!", submission.form.name)).green()
    )?;
    writeln!(w, "  Request {} covers {count} {noun}.", submission.id)
}
