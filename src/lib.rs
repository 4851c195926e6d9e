//! Pseudo-legal move generation for a single chess piece: given a board and a
//! square, find every square the piece standing there can move to.
//!
//! ```
//! use piecemoves::{generate_moves, Coordinate, Mailbox};
//!
//! let board = Mailbox::starting();
//! let knight = Coordinate::try_from("g1").unwrap();
//! assert_eq!(generate_moves(&board, knight).unwrap().len(), 2);
//! ```
//!
//! The generator does not care how the board is stored: anything implementing
//! [`Board`] will do. Legality (king safety), turn order and game history are
//! left to the caller.

// Rustc lints.
#![warn(
    absolute_paths_not_starting_with_crate,
    keyword_idents,
    macro_use_extern_crate,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]
// Rustdoc lints.
#![warn(
    rustdoc::private_doc_tests,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
// Clippy lints.
#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
// Move generation sits on the hot path of every caller.
#![deny(clippy::perf)]

pub mod chess;

pub use chess::board::{Board, Mailbox};
pub use chess::core::{Coordinate, Move, Piece, PieceType, Promotion, Team};
pub use chess::movegen::{generate_moves, piece_moves, MoveList};
