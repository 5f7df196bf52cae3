//! Built-in accent color strategies.
//!
//! Each strategy pairs one fixed query with one parse/map rule. They share a
//! single [`CommandRunner`] and keep no state between probes.

mod extension;
mod portal;
mod theme_name;

use std::sync::Arc;
use tracing::debug;

use crate::ports::{AccentStrategy, CommandError, CommandRunner, CommandSpec, StrategyKind};

pub use extension::ExtensionStrategy;
pub use portal::PortalStrategy;
pub use theme_name::ThemeNameStrategy;

/// All built-in strategies in probe order: portal, theme name, extension.
pub fn default_strategies(runner: Arc<dyn CommandRunner>) -> Vec<Box<dyn AccentStrategy>> {
    vec![
        Box::new(PortalStrategy::new(Arc::clone(&runner))),
        Box::new(ThemeNameStrategy::new(Arc::clone(&runner))),
        Box::new(ExtensionStrategy::new(runner)),
    ]
}

/// Build the single built-in strategy of the given kind.
pub fn strategy_for(kind: StrategyKind, runner: Arc<dyn CommandRunner>) -> Box<dyn AccentStrategy> {
    match kind {
        StrategyKind::Portal => Box::new(PortalStrategy::new(runner)),
        StrategyKind::ThemeName => Box::new(ThemeNameStrategy::new(runner)),
        StrategyKind::Extension => Box::new(ExtensionStrategy::new(runner)),
    }
}

/// The query a built-in strategy of `kind` runs.
#[must_use]
pub fn command_for(kind: StrategyKind) -> CommandSpec {
    match kind {
        StrategyKind::Portal => PortalStrategy::command(),
        StrategyKind::ThemeName => ThemeNameStrategy::command(),
        StrategyKind::Extension => ExtensionStrategy::command(),
    }
}

async fn run_query(
    runner: &dyn CommandRunner,
    kind: StrategyKind,
    command: &CommandSpec,
) -> Result<String, CommandError> {
    debug!(strategy = %kind, command = %command, "Querying desktop settings");
    let output = runner.run(command).await?;
    debug!(strategy = %kind, stdout = %output.stdout.trim(), "Query finished");
    Ok(output.stdout)
}

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use mockall::mock;

    use crate::ports::{CommandError, CommandOutput, CommandRunner, CommandSpec};

    mock! {
        pub Runner {}

        #[async_trait]
        impl CommandRunner for Runner {
            async fn run(&self, command: &CommandSpec) -> Result<CommandOutput, CommandError>;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::CommandOutput;
    use test_support::MockRunner;

    #[test]
    fn test_default_order() {
        let strategies = default_strategies(Arc::new(MockRunner::new()));
        let kinds: Vec<_> = strategies.iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, StrategyKind::ALL.to_vec());
    }

    #[test]
    fn test_strategy_for_matches_kind() {
        let runner: Arc<dyn CommandRunner> = Arc::new(MockRunner::new());
        for kind in StrategyKind::ALL {
            assert_eq!(strategy_for(kind, Arc::clone(&runner)).kind(), kind);
        }
    }

    #[test]
    fn test_commands_use_expected_programs() {
        assert_eq!(command_for(StrategyKind::Portal).program, "dbus-send");
        assert_eq!(command_for(StrategyKind::ThemeName).program, "gsettings");
        assert_eq!(command_for(StrategyKind::Extension).program, "gsettings");
    }

    #[tokio::test]
    async fn test_strategy_for_runs_its_own_query() {
        let mut runner = MockRunner::new();
        runner
            .expect_run()
            .withf(|spec| *spec == ExtensionStrategy::command())
            .times(1)
            .returning(|_| Ok(CommandOutput::success("'green'\n")));

        let strategy = strategy_for(StrategyKind::Extension, Arc::new(runner));
        let color = strategy.probe().await.unwrap().color().unwrap();
        assert_eq!(color.as_str(), "#2ec27e");
    }
}
