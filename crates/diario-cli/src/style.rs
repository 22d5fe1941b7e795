use diario_types::VisualCategory;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Colors only when stdout is a terminal
pub fn color_enabled() -> bool {
    std::io::stdout().is_terminal()
}

/// Category badge, tinted per visual category
pub fn badge(label: &str, category: VisualCategory, color: bool) -> String {
    let text = format!("[{}]", label);
    if !color {
        return text;
    }
    match category {
        VisualCategory::Aditamento => text.yellow().bold().to_string(),
        VisualCategory::Parceria => text.cyan().bold().to_string(),
        VisualCategory::Doacao => text.magenta().bold().to_string(),
        VisualCategory::Contrato => text.green().bold().to_string(),
        VisualCategory::Pregao => text.blue().bold().to_string(),
        VisualCategory::Destaque => text.bright_yellow().bold().to_string(),
        VisualCategory::Compra => text.bright_cyan().to_string(),
        VisualCategory::Diversos | VisualCategory::Outro => text.dimmed().to_string(),
    }
}

pub fn dim(text: &str, color: bool) -> String {
    if color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}
