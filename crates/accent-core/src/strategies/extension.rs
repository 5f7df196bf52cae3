//! GNOME Shell "Custom Accent Colors" extension strategy.

use async_trait::async_trait;
use regex::Regex;
use std::sync::{Arc, LazyLock};

use crate::domain::palette::CUSTOM_ACCENT_COLORS;
use crate::ports::{
    AccentStrategy, CommandError, CommandRunner, CommandSpec, Inapplicable, ProbeOutcome,
    StrategyKind,
};

static QUOTED_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^'([a-z]+)'$").expect("static regex is valid"));

/// Reads the extension's `accent-color` key and maps the color name.
pub struct ExtensionStrategy {
    runner: Arc<dyn CommandRunner>,
}

impl ExtensionStrategy {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    #[must_use]
    pub fn command() -> CommandSpec {
        CommandSpec::new("gsettings").args([
            "get",
            "org.gnome.shell.extensions.custom-accent-colors",
            "accent-color",
        ])
    }

    #[must_use]
    pub fn parse(stdout: &str) -> ProbeOutcome {
        let Some(caps) = QUOTED_NAME.captures(stdout.trim()) else {
            return ProbeOutcome::NotApplicable(Inapplicable::UnexpectedOutput);
        };

        let name = &caps[1];
        CUSTOM_ACCENT_COLORS.get(name).map_or_else(
            || ProbeOutcome::NotApplicable(Inapplicable::UnrecognizedName(name.to_string())),
            ProbeOutcome::Found,
        )
    }
}

#[async_trait]
impl AccentStrategy for ExtensionStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Extension
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

    #[test]
    fn test_brown() {
        assert_eq!(
            ExtensionStrategy::parse("'brown'\n").color().unwrap().as_str(),
            "#865e3c"
        );
    }

    #[test]
    fn test_table_is_total() {
        for name in CUSTOM_ACCENT_COLORS.names() {
            let outcome = ExtensionStrategy::parse(&format!("'{name}'\n"));
            assert_eq!(outcome.color(), CUSTOM_ACCENT_COLORS.get(name));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            ExtensionStrategy::parse("'unknown'\n"),
            ProbeOutcome::NotApplicable(Inapplicable::UnrecognizedName("unknown".to_string()))
        );
    }

    #[test]
    fn test_unquoted_or_empty_output() {
        for stdout in ["brown", "''", "", "'brown-dark'", "'Brown'"] {
            assert_eq!(
                ExtensionStrategy::parse(stdout),
                ProbeOutcome::NotApplicable(Inapplicable::UnexpectedOutput),
                "{stdout}"
            );
        }
    }

    #[tokio::test]
    async fn test_probe_missing_schema_is_transport_error() {
        let mut runner = MockRunner::new();
        runner
            .expect_run()
            .withf(|spec| spec.args.last().map(String::as_str) == Some("accent-color"))
            .returning(|_| {
                Err(CommandError::NonZeroExit {
                    program: "gsettings".to_string(),
                    code: Some(1),
                    stderr: "No such schema \"org.gnome.shell.extensions.custom-accent-colors\"\n"
                        .to_string(),
                })
            });

        let strategy = ExtensionStrategy::new(Arc::new(runner));
        let err = strategy.probe().await.unwrap_err();
        assert!(err.to_string().contains("No such schema"));
    }

    #[tokio::test]
    async fn test_probe_found() {
        let mut runner = MockRunner::new();
        runner
            .expect_run()
            .returning(|_| Ok(CommandOutput::success("'pink'\n")));

        let strategy = ExtensionStrategy::new(Arc::new(runner));
        assert!(strategy.probe().await.unwrap().is_found());
    }
}
