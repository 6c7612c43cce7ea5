//! Scenario table for starting positions.
//!
//! A scenario is a named, fully formed opening `BoardState`. The engine only
//! ever looks scenarios up by key; where they come from is up to the caller.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::core::{BoardConfig, BoardState, CongkakError, Result};

/// Key of the standard game.
pub const NORMAL_SCENARIO: &str = "normal";

/// Key of the short five-pit game.
pub const SMALL_SCENARIO: &str = "small";

/// Source of named starting positions.
pub trait ScenarioSource {
    /// Look up a scenario. `None` if the key is unknown.
    fn scenario(&self, key: &str) -> Option<BoardState>;

    /// Start a game. `None` selects [`NORMAL_SCENARIO`].
    fn start(&self, key: Option<&str>) -> Result<BoardState> {
        let key = key.unwrap_or(NORMAL_SCENARIO);
        match self.scenario(key) {
            Some(state) => {
                debug!(scenario = key, pits = state.pits_per_side(), "starting game");
                Ok(state)
            }
            None => {
                warn!(scenario = key, "unknown scenario");
                Err(CongkakError::UnknownScenario(key.to_string()))
            }
        }
    }
}

/// In-memory scenario table.
///
/// ## Example
///
/// ```
/// use congkak_engine::core::BoardConfig;
/// use congkak_engine::scenarios::{ScenarioSource, ScenarioTable};
///
/// let mut table = ScenarioTable::standard();
/// table
///     .register_config("tiny", &BoardConfig::default().with_pits_per_side(3))
///     .unwrap();
///
/// let state = table.start(Some("tiny")).unwrap();
/// assert_eq!(state.pits_per_side(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScenarioTable {
    scenarios: FxHashMap<String, BoardState>,
}

impl ScenarioTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding the built-in scenarios.
    #[must_use]
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.insert_builtin(NORMAL_SCENARIO, &BoardConfig::default());
        table.insert_builtin(
            SMALL_SCENARIO,
            &BoardConfig::default()
                .with_pits_per_side(5)
                .with_marbles_per_pit(5),
        );
        table
    }

    fn insert_builtin(&mut self, key: &str, config: &BoardConfig) {
        // Built-in configs are non-empty, so new_game cannot fail here.
        if let Ok(state) = BoardState::new_game(config) {
            self.scenarios.insert(key.to_string(), state);
        }
    }

    /// Register an explicit starting position, replacing any previous one.
    ///
    /// The position's rows must share one non-zero length.
    pub fn register(&mut self, key: impl Into<String>, state: BoardState) -> Result<()> {
        state.check_geometry()?;
        self.scenarios.insert(key.into(), state);
        Ok(())
    }

    /// Register the opening position of a configuration.
    pub fn register_config(&mut self, key: impl Into<String>, config: &BoardConfig) -> Result<()> {
        let state = BoardState::new_game(config)?;
        self.register(key, state)
    }

    /// True if the key is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.scenarios.contains_key(key)
    }

    /// Number of scenarios.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// True if the table holds no scenarios.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Iterate over scenario keys (unordered).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.scenarios.keys().map(String::as_str)
    }
}

impl ScenarioSource for ScenarioTable {
    fn scenario(&self, key: &str) -> Option<BoardState> {
        self.scenarios.get(key).cloned()
    }
}
