//! Flipkit
//!
//! Flipkit is an order tracking toolkit for small reselling operations: it
//! records orders (dates, costs, sale price, delivery status), persists
//! settings locally, synchronizes order records with a spreadsheet-backed
//! HTTP endpoint, and computes aggregate statistics over the collection.
//!
//! The computational core ([`orders`], [`derived`], [`stats`], [`filter`])
//! is pure and exposes plain data structures; [`sync`] talks to the remote
//! sheet, [`tracker`] ties state together, and [`render`] plus [`cli`] make
//! up the console presentation.

pub mod cli;
pub mod derived;
pub mod filter;
pub mod orders;
pub mod render;
pub mod settings;
pub mod stats;
pub mod sync;
pub mod tracker;
