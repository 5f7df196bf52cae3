//! Ubuntu Yaru theme-name strategy.
//!
//! Ubuntu encodes the accent color in the GTK theme name, e.g.
//! `'Yaru-purple-dark'`. The plain `'Yaru'` / `'Yaru-dark'` themes use the
//! default orange.

use async_trait::async_trait;
use regex::Regex;
use std::sync::{Arc, LazyLock};

use crate::domain::AccentColor;
use crate::domain::palette::{YARU_DEFAULT, YARU_VARIANTS};
use crate::ports::{
    AccentStrategy, CommandError, CommandRunner, CommandSpec, Inapplicable, ProbeOutcome,
    StrategyKind,
};

// Built from the palette so the accepted variants and the table cannot drift.
static YARU_THEME: LazyLock<Regex> = LazyLock::new(|| {
    let variants = YARU_VARIANTS.names().collect::<Vec<_>>().join("|");
    Regex::new(&format!("^'Yaru(?:-({variants}))?(?:-dark)?'$")).expect("static regex is valid")
});

/// Maps the `gtk-theme` GNOME setting onto the Yaru accent palette.
pub struct ThemeNameStrategy {
    runner: Arc<dyn CommandRunner>,
}

impl ThemeNameStrategy {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    #[must_use]
    pub fn command() -> CommandSpec {
        CommandSpec::new("gsettings").args(["get", "org.gnome.desktop.interface", "gtk-theme"])
    }

    /// Map `gsettings get` output (a quoted theme name) to a color.
    #[must_use]
    pub fn parse(stdout: &str) -> ProbeOutcome {
        let Some(caps) = YARU_THEME.captures(stdout.trim()) else {
            return ProbeOutcome::NotApplicable(Inapplicable::UnexpectedOutput);
        };

        match caps.get(1) {
            None => {
                let [r, g, b] = YARU_DEFAULT;
                ProbeOutcome::Found(AccentColor::from_rgb(r, g, b))
            }
            Some(variant) => YARU_VARIANTS.get(variant.as_str()).map_or_else(
                || {
                    ProbeOutcome::NotApplicable(Inapplicable::UnrecognizedName(
                        variant.as_str().to_string(),
                    ))
                },
                ProbeOutcome::Found,
            ),
        }
    }
}

#[async_trait]
impl AccentStrategy for ThemeNameStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ThemeName
    }

    async fn probe(&self) -> Result<ProbeOutcome, CommandError> {
        let stdout = super::run_query(self.runner.as_ref(), self.kind(), &Self::command()).await?;
        Ok(Self::parse(&stdout))
    }
}
