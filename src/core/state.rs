//! Core State trait for automaton states.
//!
//! Every state the runner can visit implements this trait, which provides
//! pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for automaton states.
///
/// All methods are pure. States are small immutable values and double as
/// half of the transition table's lookup key, so they must be hashable.
///
/// # Required Traits
///
/// - `Clone`: States are copied into run history records
/// - `Eq` + `Hash`: States key the transition table
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: Tables are exchanged as documents
///
/// # Example
///
/// ```rust
/// use moodstack::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Toggle {
///     Off,
///     On,
/// }
///
/// impl State for Toggle {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::On)
///     }
/// }
///
/// assert!(Toggle::On.is_final());
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (recognized) state.
    ///
    /// Reaching a final state means the consumed input was recognized.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
