//! Localized string lookups
//!
//! The dialog chrome needs exactly two translated labels (the close control
//! and the cancel button). The translation service is treated as a black box
//! keyed by string identifiers; hosts plug in their own [`Translator`].

/// String identifiers the dialog system looks up.
pub mod keys {
    pub const CLOSE_DIALOG: &str = "dialog.close";
    pub const CANCEL: &str = "dialog.cancel";
}

/// Opaque string-returning translation service.
pub trait Translator {
    /// Resolve a string identifier to display text.
    fn translate(&self, key: &str) -> String;
}

/// Built-in English strings, used when the host has no translation layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStrings;

impl Translator for DefaultStrings {
    fn translate(&self, key: &str) -> String {
        match key {
            keys::CLOSE_DIALOG => "Close".to_string(),
            keys::CANCEL => "Cancel".to_string(),
            other => other.to_string(),
        }
    }
}

/// Labels resolved once at session construction; immutable for the session.
#[derive(Debug, Clone)]
pub struct Labels {
    pub close: String,
    pub cancel: String,
}

impl Labels {
    /// Resolve both labels through the given translator.
    pub fn resolve(translator: &dyn Translator) -> Self {
        Self {
            close: translator.translate(keys::CLOSE_DIALOG),
            cancel: translator.translate(keys::CANCEL),
        }
    }
}
