// src/utils/format.rs
use console::{style, StyledObject};

use crate::models::StrengthResult;
use crate::strength::{category_style_class, fill_fraction, CharacterClassFlags};

pub const BAR_WIDTH: usize = 20;

// Text progress bar; scores above the maximum spill past the closing bracket,
// at most one extra bar width, then a `+`
pub fn progress_bar(score: i32, width: usize) -> String {
    let cells = (fill_fraction(score) * width as f64).round().max(0.0) as usize;
    let inside = cells.min(width);
    let overflow = cells - inside;
    let drawn = overflow.min(width);

    format!(
        "[{}{}]{}{}",
        "█".repeat(inside),
        "░".repeat(width - inside),
        "█".repeat(drawn),
        if overflow > drawn { "+" } else { "" }
    )
}

// Colour a category label by its style class
pub fn style_category(category: &str) -> StyledObject<String> {
    let label = category.to_string();
    match category_style_class(category).as_str() {
        "very-weak" | "weak" => style(label).red().bold(),
        "medium" => style(label).yellow().bold(),
        "strong" => style(label).green().bold(),
        "very-strong" | "excellent" => style(label).cyan().bold(),
        "error" => style(label).magenta().bold(),
        _ => style(label).bold(),
    }
}

pub fn format_indicators(flags: &CharacterClassFlags) -> String {
    flags
        .labelled()
        .iter()
        .map(|(label, present)| {
            if *present {
                format!("{} {}", style("✔").green(), label)
            } else {
                format!("{} {}", style("✘").dim(), style(label).dim())
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn format_result(result: &StrengthResult) -> String {
    let mut lines = vec![
        format!(
            "Strength: {} ({}/5)",
            style_category(&result.strength_category),
            result.strength_score
        ),
        format!(
            "{} {:.0}%",
            progress_bar(result.strength_score, BAR_WIDTH),
            result.fill_percent()
        ),
    ];

    if result.is_breached {
        lines.push(style("⚠️  Found in known data breaches").red().bold().to_string());
    }

    for suggestion in &result.suggestions {
        lines.push(format!("  • {}", suggestion));
    }

    lines.join("\n")
}
