//! # qmc-rs: Quine–McCluskey minimization in Rust
//!
//! **`qmc-rs`** turns a Boolean function, given as the list of its minterms, into a
//! sum-of-products (DNF) expression using the Quine–McCluskey method.
//!
//! ## How it works
//!
//! A function of `n` variables is described by the rows of its truth table where it is true.
//! Each row is a *minterm*, an `n`-bit integer. Minimization proceeds in four stages:
//!
//! 1. **Prime implicants**: minterms are merged pairwise whenever they differ in exactly one
//!    bit, that bit becoming a don't-care. Merging repeats until nothing merges anymore;
//!    what is left are the *prime implicants*.
//! 2. **Coverage table**: for every prime implicant, the set of minterms it covers.
//! 3. **Essential implicants**: primes that are the only cover of some minterm. They belong
//!    to every valid cover.
//! 4. **Cover selection**: starting from the essentials, primes are added greedily (most new
//!    minterms first) until every minterm is covered.
//!
//! The last step is a greedy approximation of set cover: the result is always a correct
//! cover, but not necessarily one with the fewest terms or literals.
//!
//! ## Key Features
//!
//! - **Structured results**: [`Minimization`][crate::minimize::Minimization] exposes the primes,
//!   the coverage table, the essential indices and the chosen cover. Text output is a separate
//!   concern, handled by [`render`].
//! - **Stable identity**: implicants are hash-consed in an arena ([`table`]), so duplicates are
//!   detected by identity, never by searching lists.
//! - **Deterministic**: the same input always yields the same output, in a documented order.
//! - **Validated input**: bad variable counts or out-of-range minterms are reported as
//!   [`Error`][crate::error::Error]s before any work starts.
//!
//! ## Basic Usage
//!
//! ```rust
//! use qmc_rs::minimize::minimize;
//! use qmc_rs::render::Renderer;
//!
//! // f(a, b, c) = Σm(0, 1, 2, 5, 6, 7)
//! let m = minimize(3, [0, 1, 2, 5, 6, 7]).unwrap();
//!
//! assert_eq!(m.prime_implicants().len(), 6);
//! assert!(m.essential_indices().is_empty());
//! assert_eq!(m.minimal_cover_indices().len(), 3);
//!
//! let r = Renderer::new(["a", "b", "c"]).unwrap();
//! println!("F = {}", r.dnf(&m.minimal_implicants()));
//! ```
//!
//! ## Core Components
//!
//! - **[`minimize`]**: the entry point, running the whole pipeline.
//! - **[`combine`]**, **[`coverage`]**, **[`essential`]**, **[`cover`]**: the individual stages.
//! - **[`render`]**: bit patterns, product terms, DNF strings and coverage charts.

pub mod bitset;
pub mod combine;
pub mod cover;
pub mod coverage;
pub mod error;
pub mod essential;
pub mod implicant;
pub mod minimize;
pub mod render;
pub mod table;
pub mod types;
pub mod utils;
