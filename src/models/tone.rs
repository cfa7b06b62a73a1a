//! Tonos de color para badges y marcadores
//!
//! Reemplaza las clases CSS elegidas por string: cada estado se mapea a un
//! `Tone` con un `match` exhaustivo.

use serde::Serialize;

/// Tono visual de un badge, punto o barra
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Danger,
    Warning,
    Primary,
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Danger => "danger",
            Tone::Warning => "warning",
            Tone::Primary => "primary",
            Tone::Neutral => "neutral",
        }
    }

    /// Marcador para la salida de texto
    pub fn marker(&self) -> char {
        match self {
            Tone::Success => '✔',
            Tone::Danger => '✖',
            Tone::Warning => '◷',
            Tone::Primary => '•',
            Tone::Neutral => '·',
        }
    }
}
