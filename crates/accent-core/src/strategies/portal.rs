//! XDG desktop settings portal strategy.
//!
//! Reads `org.freedesktop.appearance accent-color` through `dbus-send`
//! with literal reply printing. A set value looks like:
//!
//! ```text
//!    variant       struct {
//!          double 0.207843
//!          double 0.517647
//!          double 0.894118
//!       }
//! ```
//!
//! Portals that support the key but have no value configured reply with
//! channels outside `[0, 1]`.

use async_trait::async_trait;
use regex::Regex;
use std::sync::{Arc, LazyLock};

use crate::domain::AccentColor;
use crate::ports::{
    AccentStrategy, CommandError, CommandRunner, CommandSpec, Inapplicable, ProbeOutcome,
    StrategyKind,
};

static DOUBLE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"double\s+(-?\d+(?:[.,]\d+)?(?:[eE][-+]?\d+)?)").expect("static regex is valid")
});

/// Queries the desktop settings portal over the session bus.
pub struct PortalStrategy {
    runner: Arc<dyn CommandRunner>,
}

impl PortalStrategy {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// The `dbus-send` invocation used for the query.
    #[must_use]
    pub fn command() -> CommandSpec {
        CommandSpec::new("dbus-send").args([
            "--session",
            "--print-reply=literal",
            "--dest=org.freedesktop.portal.Desktop",
            "/org/freedesktop/portal/desktop",
            "org.freedesktop.portal.Settings.ReadOne",
            "string:org.freedesktop.appearance",
            "string:accent-color",
        ])
    }

    /// Parse a literal `dbus-send` reply into a color.
    ///
    /// Exactly three `double` tokens (red, green, blue) are required, and
    /// every channel must be in range.
    #[must_use]
    pub fn parse(stdout: &str) -> ProbeOutcome {
        let channels: Option<Vec<f64>> = DOUBLE_TOKEN
            .captures_iter(stdout)
            .map(|caps| caps[1].replace(',', ".").parse::<f64>().ok())
            .collect();

        let Some(&[red, green, blue]) = channels.as_deref() else {
            return ProbeOutcome::NotApplicable(Inapplicable::UnexpectedOutput);
        };

        match AccentColor::from_unit_rgb(red, green, blue) {
            Ok(color) => ProbeOutcome::Found(color),
            Err(_) => ProbeOutcome::NotApplicable(Inapplicable::ChannelOutOfRange),
        }
    }
}

#[async_trait]
impl AccentStrategy for PortalStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Portal
    }

    async fn probe(&self) -> Result<ProbeOutcome, CommandError> {
        let stdout = super::run_query(self.runner.as_ref(), self.kind(), &Self::command()).await?;
        Ok(Self::parse(&stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::CommandOutput;
    use crate::strategies::test_support::MockRunner;

    const REPLY: &str = "   variant       struct {\n         double 0.92\n         double 0.33\n         double 0.13\n      }\n";

    #[test]
    fn test_parse_three_channels() {
        assert_eq!(
            PortalStrategy::parse(REPLY).color().unwrap().as_str(),
            "#ea5421"
        );
    }

    #[test]
    fn test_parse_accepts_comma_decimal() {
        let reply = "double 0,207843\ndouble 0,517647\ndouble 0,894118\n";
        assert_eq!(
            PortalStrategy::parse(reply).color().unwrap().as_str(),
            "#3483e4"
        );
    }

    #[test]
    fn test_parse_requires_exactly_three_tokens() {
        let two = "double 0.5\ndouble 0.5\n";
        let four = "double 0.5\ndouble 0.5\ndouble 0.5\ndouble 0.5\n";
        for reply in [two, four, "", "variant uint32 1"] {
            assert_eq!(
                PortalStrategy::parse(reply),
                ProbeOutcome::NotApplicable(Inapplicable::UnexpectedOutput)
            );
        }
    }

    #[test]
    fn test_parse_out_of_range_rejects_whole_color() {
        for reply in [
            "double -1\ndouble -1\ndouble -1\n",
            "double 0.5\ndouble 1.5\ndouble 0.5\n",
        ] {
            assert_eq!(
                PortalStrategy::parse(reply),
                ProbeOutcome::NotApplicable(Inapplicable::ChannelOutOfRange)
            );
        }
    }

    #[test]
    fn test_parse_bounds_are_inclusive() {
        let reply = "double 0\ndouble 1\ndouble 1.0\n";
        assert_eq!(
            PortalStrategy::parse(reply).color().unwrap().as_str(),
            "#00ffff"
        );
    }

    #[tokio::test]
    async fn test_probe_runs_portal_query() {
        let mut runner = MockRunner::new();
        runner
            .expect_run()
            .withf(|spec| {
                spec.program == "dbus-send"
                    && spec.args.contains(&"string:accent-color".to_string())
                    && spec.args.contains(&"--print-reply=literal".to_string())
            })
            .times(1)
            .returning(|_| Ok(CommandOutput::success(REPLY)));

        let strategy = PortalStrategy::new(Arc::new(runner));
        assert_eq!(strategy.kind(), StrategyKind::Portal);
        let outcome = strategy.probe().await.unwrap();
        assert_eq!(outcome.color().unwrap().as_str(), "#ea5421");
    }

    #[tokio::test]
    async fn test_probe_passes_transport_errors_through() {
        let mut runner = MockRunner::new();
        runner.expect_run().returning(|_| {
            Err(CommandError::NonZeroExit {
                program: "dbus-send".to_string(),
                code: Some(1),
                stderr: "No such interface".to_string(),
            })
        });

        let strategy = PortalStrategy::new(Arc::new(runner));
        assert!(matches!(
            strategy.probe().await,
            Err(CommandError::NonZeroExit { .. })
        ));
    }
}
