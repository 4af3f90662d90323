// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Comparison errors.
use thiserror::Error;

use showdown_cards::{ParseCardError, Rank};

use crate::Category;

/// Errors returned when building or comparing hands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A hand is missing, empty, or not a valid hand.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Both hands claim the same rank for a category two hands from one deck
    /// can never share.
    #[error("invariant violation: both hands have {category} of rank {rank}")]
    InvariantViolation {
        /// The category with the shared rank.
        category: Category,
        /// The shared rank.
        rank: Rank,
    },
    /// Invalid card text.
    #[error(transparent)]
    Parse(#[from] ParseCardError),
}

/// Comparison result type.
pub type Result<T> = std::result::Result<T, Error>;
