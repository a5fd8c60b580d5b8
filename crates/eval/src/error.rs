// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use crate::Card;

/// Errors returned for hands that break the evaluator input contract.
///
/// These are caller assembly bugs, a well formed hand always evaluates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Not enough cards to make a 5 cards hand.
    #[error("{param} has {count} cards, at least 5 are required")]
    TooFewCards {
        /// The offending parameter.
        param: &'static str,
        /// The number of cards passed.
        count: usize,
    },
    /// More cards than the evaluator can track.
    #[error("{param} has {count} cards, at most {max} are supported")]
    TooManyCards {
        /// The offending parameter.
        param: &'static str,
        /// The number of cards passed.
        count: usize,
        /// The maximum number of cards.
        max: usize,
    },
    /// A variant layout parameter has the wrong number of cards.
    #[error("{param} has {actual} cards, expected {expected}")]
    BadLayout {
        /// The offending parameter.
        param: &'static str,
        /// The expected number of cards.
        expected: String,
        /// The number of cards passed.
        actual: usize,
    },
    /// Stud cards passed to a draw variant or the other way around.
    #[error("cards layout doesn't match variant {variant}")]
    LayoutMismatch {
        /// The variant name.
        variant: &'static str,
    },
    /// A wild card that is not in the hand.
    #[error("wild card {0} is not in the hand")]
    UnknownWildCard(Card),
    /// A wild position past the end of the hand.
    #[error("wild position {position} is out of range for {len} cards")]
    WildPositionOutOfRange {
        /// The wild position.
        position: usize,
        /// The number of cards.
        len: usize,
    },
}
