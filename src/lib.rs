//! Fluent matchers for test assertions, plus a non-empty sequence type.
//!
//! `affirm` turns an assertion into a sentence: build a matcher with a word,
//! apply it to a value, and on failure read back what went wrong.
//!
//! ```
//! use affirm::{contain, every, expect, have_length, include, start_with};
//!
//! # fn main() -> Result<(), affirm::ConfigError> {
//! let xs = every![1, 2, 3];
//! expect(&xs).should(have_length(3));
//! expect(&xs).should(contain().all_of([1, 3])?);
//! expect(&xs).should(contain().in_order([1, 2])?);
//! expect("hello world").should(start_with("hello")).should(include("o w"));
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ assertions   │────▶│  matchers    │────▶│  result      │
//! │ (expect,     │     │ (equal,      │     │ (MatchResult,│
//! │  should)     │     │  contain...) │     │  and / or)   │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │                    ▲
//!                             ▼                    │
//!                ┌────────────────────────┐  ┌──────────────┐
//!                │ container / equality   │  │  prettify    │
//!                │ (capability traits)    │  │  (rendering) │
//!                └────────────────────────┘  └──────────────┘
//!                             ▲
//!                             │
//!                      ┌──────────────┐
//!                      │    every     │
//!                      │ (Every<T>)   │
//!                      └──────────────┘
//! ```
//!
//! # Modules
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | `every`      | `Every<T>`, the non-empty sequence                |
//! | `container`  | `Aggregating`, `Sequencing`, `Mapping`, `Length`  |
//! | `equality`   | `Equality` and the stock comparisons              |
//! | `matchers`   | all matcher words and `and` / `or` / `not`        |
//! | `result`     | `MatchResult` and message templates               |
//! | `prettify`   | `Prettifier`, value rendering and its limits      |
//! | `assertions` | `expect`, `should`, `check`, `assert_that!`       |
//! | `contracts`  | debug-only invariant checks                       |
//!
//! # Logging
//!
//! The crate logs through the `log` facade and never installs a logger.
//! Rejected matcher arguments log at `warn`, failed checks at `debug`, and
//! every evaluation at `trace`.

mod assertions;
mod container;
pub mod contracts;
mod equality;
mod error;
mod every;
mod matchers;
mod prettify;
mod result;
pub mod testing;

pub use assertions::{expect, Subject};
pub use container::{Aggregating, Length, Mapping, Sequencing};
pub use equality::{decided_by, CaseInsensitive, Decided, DefaultEquality, Equality, Trimmed};
pub use error::{AssertionFailure, ConfigError, EveryError};
pub use every::Every;
pub use matchers::{
    be_empty, be_err, be_ge, be_gt, be_le, be_lt, be_none, be_ok, be_some, contain, end_with,
    end_with_regex, equal, fully_match_regex, have_length, have_size, include, include_regex, not,
    satisfy, start_with, start_with_regex, And, BeEmpty, Compare, ContainElement, ContainEntry,
    ContainKey, ContainList, ContainSequence, ContainValue, ContainWord, Equal, HaveLength,
    ListWord, Matcher, MatcherExt, Not, OptionMatcher, Or, RegexMatcher, ResultMatcher, Satisfy,
    SequenceWord, StringMatcher,
};
pub use prettify::{Prettifier, MAX_ITEMS_ENV, MAX_LEN_ENV};
pub use result::MatchResult;
