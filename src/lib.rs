#[macro_use] extern crate log;
extern crate rand;
extern crate thiserror;

mod client;
mod disjoint_set;
mod error;
mod quick_union;

pub use client::{numbered, parse_header, parse_pair, random_connections, run_client, ClientSummary};
pub use disjoint_set::{DisjointSet, WeightedDisjointSet};
pub use error::{ClientError, UnionFindError};
pub use quick_union::QuickUnion;
