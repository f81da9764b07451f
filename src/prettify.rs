// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rendering values into failure messages.
//!
//! Values are rendered with their `Debug` form, which already gives the
//! conventions a test reader expects: strings quoted (`"abc"`), chars in
//! single quotes (`'c'`), collections in brackets.
//!
//! The `Prettifier` is also where message rendering is configured. Long
//! argument lists and very long values can be cut short so a failing
//! assertion on a large collection stays readable.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment variable that caps the number of rendered list items.
pub const MAX_ITEMS_ENV: &str = "AFFIRM_MAX_ITEMS";

/// Environment variable that caps the rendered length of a single value.
pub const MAX_LEN_ENV: &str = "AFFIRM_MAX_LEN";

/// Renders values for matcher messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prettifier {
    /// Stop rendering an argument list after this many items.
    pub max_items: Option<usize>,
    /// Cut a single rendered value after this many characters.
    pub max_len: Option<usize>,
}

impl Prettifier {
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Read limits from `AFFIRM_MAX_ITEMS` / `AFFIRM_MAX_LEN`.
    ///
    /// Unset variables leave the limit off. Unparseable ones are ignored with a warning.
    pub fn from_env() -> Self {
        Self {
            max_items: read_limit(MAX_ITEMS_ENV),
            max_len: read_limit(MAX_LEN_ENV),
        }
    }

    /// Render one value.
    pub fn render(&self, value: &dyn fmt::Debug) -> String {
        let rendered = format!("{:?}", value);
        match self.max_len {
            Some(max) if rendered.chars().count() > max => {
                let mut cut: String = rendered.chars().take(max).collect();
                cut.push_str("...");
                cut
            }
            _ => rendered,
        }
    }

    /// Render values separated by `", "`, without brackets: `1, 2, 3`.
    pub fn render_list<'a, D>(&self, values: impl IntoIterator<Item = &'a D>) -> String
    where
        D: fmt::Debug + ?Sized + 'a,
    {
        let mut out = String::new();
        for (i, value) in values.into_iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            if self.max_items.is_some_and(|max| i >= max) {
                out.push_str("...");
                break;
            }
            out.push_str(&self.render(&value));
        }
        out
    }

    /// Render values as a bracketed list: `[1, 2, 3]`.
    pub fn render_bracketed<'a, D>(&self, values: impl IntoIterator<Item = &'a D>) -> String
    where
        D: fmt::Debug + ?Sized + 'a,
    {
        format!("[{}]", self.render_list(values))
    }
}

fn read_limit(var: &str) -> Option<usize> {
    let raw = std::env::var(var).ok()?;
    match raw.trim().parse() {
        Ok(limit) => Some(limit),
        Err(err) => {
            warn!("ignoring {}={:?}: {}", var, raw, err);
            None
        }
    }
}
