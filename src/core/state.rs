//! Core State trait for lifecycle phases.
//!
//! A phase is a small value describing where a quiz is in its lifecycle.
//! The trait only exposes pure inspection methods.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for lifecycle phases.
///
/// # Required Traits
///
/// - `Clone`: phases are copied into the status history
/// - `PartialEq`: phases are compared by guards
/// - `Debug`: phases show up in diagnostics
/// - `Serialize` + `Deserialize`: phases travel inside serialized snapshots
///
/// # Example
///
/// ```rust
/// use quizflow::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Round {
///     Waiting,
///     Playing,
///     Over,
///     Broken,
/// }
///
/// impl State for Round {
///     fn name(&self) -> &str {
///         match self {
///             Self::Waiting => "Waiting",
///             Self::Playing => "Playing",
///             Self::Over => "Over",
///             Self::Broken => "Broken",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Over | Self::Broken)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Broken)
///     }
/// }
///
/// assert!(Round::Broken.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in logs and error messages.
    fn name(&self) -> &str;

    /// Whether the phase ends a play-through.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether the phase represents a failure.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Round {
        Waiting,
        Playing,
        Over,
    }

    impl State for Round {
        fn name(&self) -> &str {
            match self {
                Self::Waiting => "Waiting",
                Self::Playing => "Playing",
                Self::Over => "Over",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Over)
        }
    }

    #[test]
    fn default_methods_are_false() {
        assert!(!Round::Waiting.is_error());
        assert!(!Round::Over.is_error());
        assert!(!Round::Playing.is_final());
    }

    #[test]
    fn overridden_is_final_is_used() {
        assert!(Round::Over.is_final());
        assert_eq!(Round::Over.name(), "Over");
    }

    #[test]
    fn phase_serializes_by_variant_name() {
        let json = serde_json::to_string(&Round::Playing).unwrap();
        assert_eq!(json, "\"Playing\"");
        let back: Round = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Round::Playing);
    }
}
