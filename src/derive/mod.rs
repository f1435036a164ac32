// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Alternate definitions of `I`, `T`, `Z` and `W` in terms of `S` and `C`.
//!
//! Each submodule walks one combinator from its defining law down to a closed
//! term over the basis, and every intermediate line of that walk is kept as its
//! own function. Names spell the term in lowercase: `szzscc` is `S(ZZS)(CC)`,
//! `cfxgx` is `(Cfx)(gx)`.
//!
//! | Module          | Routes | Closed form                    |
//! |-----------------|--------|--------------------------------|
//! | [`identity`]    | 4      | `SCC`                          |
//! | [`interchange`] | 8      | `S((S(CS)C)(S(CS)C)S)(CC)`     |
//! | [`composition`] | 5      | `S(CS)C`                       |
//! | [`duplicator`]  | 13     | `SS(SC)`, `T(S(TT)(TT))`       |
//!
//! Nothing in here calls the primitive `T`, `Z` or `W`. Where a term is written
//! with one of them, the function comes from [`shapes`], which builds it from
//! the closed form.

pub mod composition;
pub mod duplicator;
pub mod identity;
pub mod interchange;
pub mod shapes;

pub use shapes::{Composition, Constancy, Fusion, Interchange};
