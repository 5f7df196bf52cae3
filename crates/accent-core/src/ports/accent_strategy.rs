//! Accent strategy port.
//!
//! A strategy is one self-contained way of asking the desktop for its
//! accent color. The detector treats every strategy the same way and only
//! looks at the [`ProbeOutcome`] or [`CommandError`] it returns.

use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::CommandError;
use crate::domain::AccentColor;

/// Identifies one of the supported detection mechanisms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// `org.freedesktop.portal.Settings` accent-color key.
    Portal,
    /// GNOME `gtk-theme` name mapped through the Yaru variant table.
    ThemeName,
    /// GNOME Shell "Custom Accent Colors" extension.
    Extension,
}

impl StrategyKind {
    /// All kinds in default probe order.
    pub const ALL: [Self; 3] = [Self::Portal, Self::ThemeName, Self::Extension];

    /// Stable lowercase name used in logs, CLI arguments and JSON.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Portal => "portal",
            Self::ThemeName => "theme-name",
            Self::Extension => "extension",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Portal => "XDG desktop settings portal (org.freedesktop.appearance)",
            Self::ThemeName => "Ubuntu Yaru GTK theme variant (org.gnome.desktop.interface)",
            Self::Extension => {
                "GNOME Shell Custom Accent Colors extension (org.gnome.shell.extensions.custom-accent-colors)"
            }
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a strategy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown strategy: {0} (expected portal, theme-name or extension)")]
pub struct UnknownStrategy(pub String);

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// Why a strategy's mechanism does not apply on this host.
///
/// None of these are errors: they describe a setting that is absent,
/// unset or unparseable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Inapplicable {
    /// Output did not have the expected shape.
    #[error("unexpected output")]
    UnexpectedOutput,

    /// A color channel was outside `[0.0, 1.0]`, meaning the setting is unset.
    #[error("channel value out of range")]
    ChannelOutOfRange,

    /// The output named something the color table does not know.
    #[error("unrecognized name {0:?}")]
    UnrecognizedName(String),
}

/// Non-failing result of a probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Found(AccentColor),
    NotApplicable(Inapplicable),
}

impl ProbeOutcome {
    /// The color, if one was found.
    #[must_use]
    pub fn color(self) -> Option<AccentColor> {
        match self {
            Self::Found(color) => Some(color),
            Self::NotApplicable(_) => None,
        }
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl From<Option<AccentColor>> for ProbeOutcome {
    fn from(color: Option<AccentColor>) -> Self {
        color.map_or(Self::NotApplicable(Inapplicable::UnexpectedOutput), Self::Found)
    }
}

/// One way of querying the desktop for its accent color.
///
/// Implementations are stateless: every call re-queries the desktop.
#[async_trait]
pub trait AccentStrategy: Send + Sync {
    /// Which mechanism this strategy queries.
    fn kind(&self) -> StrategyKind;

    /// Query the desktop once.
    ///
    /// `Err` means the query itself failed to run (transport failure);
    /// `Ok(ProbeOutcome::NotApplicable(_))` means it ran but the answer
    /// carried no usable color.
    async fn probe(&self) -> Result<ProbeOutcome, CommandError>;
}
