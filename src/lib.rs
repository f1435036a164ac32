// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Combinatory logic over the `{S, C}` basis.
//!
//! Six primitive combinators as curried Rust functions, every step of the
//! derivation of `I`, `T`, `Z` and `W` from `S` and `C` alone, and a harness
//! that checks each derivation agrees with its primitive.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌──────────────┐
//! │ function.rs  │────▶│ combinators.rs   │────▶│  verify/     │
//! │ (Fun, Value, │     │ (I C T Z S W:    │     │ (Family,     │
//! │  curried!)   │     │  the oracles)    │     │  Agreement,  │
//! └──────────────┘     └──────────────────┘     │  run, run_all│
//!        │                     │ C, S           └──────────────┘
//!        │                     ▼                       ▲
//!        │             ┌──────────────────┐            │
//!        └────────────▶│ derive/          │────────────┘
//!                      │ (30 routes built │
//!                      │  from S and C)   │
//!                      └──────────────────┘
//! ```
//!
//! | Module        | Holds                                              |
//! |---------------|----------------------------------------------------|
//! | `function`    | `Fun<A, B>`, `Binary`, `Ternary`, `curried!`       |
//! | `combinators` | the six primitives, `identity` to `duplicator`     |
//! | `derive`      | capability types and every derivation route        |
//! | `verify`      | families, the agreement fold, the four groups      |
//!
//! # Usage
//!
//! ```
//! use sc_basis::combinators::composition;
//! use sc_basis::derive::composition::scsc;
//! use sc_basis::function::Fun;
//!
//! let shout = Fun::new(|s: String| s.to_uppercase());
//! let head = Fun::new(|s: String| s.chars().take(2).collect::<String>());
//!
//! let z = composition::<String, String, String>();
//! let closed = scsc::<String, String, String>();
//! assert_eq!(
//!     z.apply(shout.clone()).apply(head.clone()).apply("hallo".into()),
//!     closed.apply(shout).apply(head).apply("hallo".into()),
//! );
//!
//! sc_basis::verify::run(false).unwrap();
//! ```

pub mod combinators;
pub mod derive;
pub mod function;
pub mod testing;
pub mod verify;

pub use function::{Binary, Fun, Ternary, Value};
pub use verify::{run, run_all, GroupReport, Schedule, VerificationError};
