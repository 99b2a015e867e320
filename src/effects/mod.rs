//! Effectful operations around the pure quiz core.
//!
//! The only I/O the quiz performs is fetching its question file once at
//! startup. That fetch is expressed as a Stillwater effect over an
//! environment implementing [`QuestionSource`], so tests swap in an
//! in-memory or failing source without touching the loader.
//!
//! Following Stillwater conventions, [`load_questions`] returns
//! `impl Effect` and is run with `.run(&env).await`.

mod loader;

pub use loader::{
    load_questions, parse_questions, FileSource, LoadError, QuestionSource, StaticSource,
};
