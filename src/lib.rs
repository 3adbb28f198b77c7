//! # lpb-rs: Linear pseudo-Boolean constraints in Rust
//!
//! **`lpb-rs`** works with **linear pseudo-Boolean constraints** (LPBs)
//! `a0 * x0 + ... + a(n-1) * x(n-1) >= d` over Boolean variables and with the
//! monotone Boolean functions they describe.
//!
//! ## What is an LPB?
//!
//! An LPB with non-negative coefficients describes a monotone Boolean
//! function: setting more variables to true can only increase the left-hand
//! side. Such a function is uniquely described by its minimal true points,
//! i.e. by a DNF of positive clauses. Functions that arise this way are called
//! *threshold functions*.
//!
//! ## Key Features
//!
//! - **Compilation**: [`Lpb::to_dnf`][crate::lpb::Lpb::to_dnf] computes the DNF of minimal clauses with a
//!   dynamic program over partial sums.
//! - **Variable ranking**: [`VariableSetting`][crate::setting::VariableSetting] orders variables by their
//!   [occurrence patterns][crate::pattern::OccurrencePattern].
//! - **Splitting trees**: [`TreeContext`][crate::tree::TreeContext] stores the nodes of a recursive cofactor
//!   expansion, the groundwork for the (incomplete) combinatorial recognition of threshold functions.
//! - **Generic weights**: any [`Coefficient`][crate::types::Coefficient] kind, from `i64` to `BigInt`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use lpb_rs::lpb::parse_lpb;
//! use lpb_rs::setting::VariableSetting;
//! use lpb_rs::tree::TreeContext;
//!
//! // 5 * x0 + 3 * x1 + 3 * x2 + 2 * x3 + 1 * x4 >= 8
//! let lpb = parse_lpb("5 3 3 2 1 8").unwrap();
//!
//! let dnf = lpb.to_dnf();
//! assert_eq!(dnf.len(), 4);
//!
//! let setting = VariableSetting::new(&dnf);
//! assert_eq!(setting.ranking().next(), Some(0));
//!
//! let (mut ctx, root) = TreeContext::with_main(dnf);
//! let (low, high) = ctx.split(root).unwrap();
//! assert_eq!(ctx.node(low).column(), 1);
//! assert_eq!(ctx.node(high).column(), 1);
//! ```
//!
//! ## Core Components
//!
//! - **[`lpb`]**: The [`Lpb`][crate::lpb::Lpb] model, parsing and rendering.
//! - **[`compile`]**: LPB to DNF compilation.
//! - **[`dnf`]**: Monotone DNFs, canonicalization and cofactors.
//! - **[`pattern`]** and **[`setting`]**: Occurrence patterns and variable ranking.
//! - **[`tree`]**: Splitting trees.
//! - **[`dot`]**: Graphviz rendering of splitting trees.

pub mod compile;
pub mod dnf;
pub mod dot;
pub mod error;
pub mod lpb;
pub mod pattern;
pub mod setting;
pub mod tree;
pub mod types;
