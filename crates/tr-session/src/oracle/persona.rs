//! Offline oracle built from the theme's persona catchphrases.

use crate::theme::{Theme, ThemeKind};

use super::{Oracle, OracleError, OracleRequest};

/// Answers in character using the theme's catchphrase templates.
#[derive(Debug, Clone, Copy)]
pub struct PersonaOracle {
    theme: &'static Theme,
}

impl PersonaOracle {
    /// Create an oracle for a theme's persona roster.
    pub fn new(theme: ThemeKind) -> Self {
        Self {
            theme: theme.theme(),
        }
    }
}

impl Oracle for PersonaOracle {
    fn consult(&self, request: &OracleRequest) -> Result<String, OracleError> {
        if !request.options.contains(&request.answer) {
            return Err(OracleError::Failed(format!(
                "\"{}\" is not one of the options",
                request.answer
            )));
        }

        let line = match self.theme.persona(&request.persona) {
            Some(p) => p.catchphrase.replace("{answer}", &request.answer),
            None => format!("It's {}, trust me.", request.answer),
        };
        Ok(line)
    }
}
