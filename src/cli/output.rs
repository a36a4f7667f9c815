use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
    Separator,
}

/// Tone applied to free-form lines such as table rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputPreferences {
    pub color_enabled: bool,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            color_enabled: true,
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "",
        MessageKind::Success => "[ok]",
        MessageKind::Warning => "[!]",
        MessageKind::Error => "[x]",
        MessageKind::Hint => "hint:",
        MessageKind::Section | MessageKind::Separator => "",
    }
}

pub(crate) fn apply_style(
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> String {
    let text = message.to_string();

    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Separator => "-".repeat(64),
        MessageKind::Info => text,
        _ => format!("{} {}", label(kind), text),
    };

    if !prefs.color_enabled {
        return formatted;
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Hint => formatted.dimmed().to_string(),
        MessageKind::Section => formatted.bold().bright_cyan().to_string(),
        MessageKind::Separator | MessageKind::Info => formatted,
    }
}

pub(crate) fn apply_tone(tone: Tone, text: &str, prefs: &OutputPreferences) -> String {
    if !prefs.color_enabled {
        return text.to_string();
    }
    match tone {
        Tone::Positive => text.green().to_string(),
        Tone::Negative => text.red().to_string(),
        Tone::Neutral => text.to_string(),
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message, &current_preferences());
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn print_toned(tone: Tone, text: &str) {
    println!("{}", apply_tone(tone, text, &current_preferences()));
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

pub fn separator() {
    print(MessageKind::Separator, "");
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: OutputPreferences = OutputPreferences {
        color_enabled: false,
    };

    #[test]
    fn plain_mode_adds_labels_without_escape_codes() {
        assert_eq!(
            apply_style(MessageKind::Warning, "careful", &PLAIN),
            "[!] careful"
        );
        assert_eq!(apply_style(MessageKind::Info, "hello", &PLAIN), "hello");
        assert_eq!(
            apply_style(MessageKind::Section, " Summary ", &PLAIN),
            "=== Summary ==="
        );
        assert_eq!(apply_tone(Tone::Negative, "-$5.00", &PLAIN), "-$5.00");
    }

    #[test]
    fn colored_mode_keeps_message_text() {
        colored::control::set_override(true);
        let prefs = OutputPreferences {
            color_enabled: true,
        };
        let styled = apply_style(MessageKind::Error, "boom", &prefs);
        assert!(styled.contains("[x] boom"));
        assert_ne!(styled, "[x] boom");
        colored::control::unset_override();
    }
}
