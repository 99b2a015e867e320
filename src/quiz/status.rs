//! Quiz lifecycle phases.

use crate::status_enum;

status_enum! {
    /// Lifecycle phase of a quiz. Exactly one is current at a time.
    pub enum QuizStatus {
        Loading => "loading",
        Error => "error",
        Ready => "ready",
        Active => "active",
        Finished => "finished",
    }
    final: [Error, Finished]
    error: [Error]
    default: Loading
}
