//! Property and scenario tests run against the public API of every container.

mod contract;
mod scenarios;
