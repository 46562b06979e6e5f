use std::io;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnionFindError {
	#[error("index {index} out of range for {len} elements")]
	IndexOutOfRange { index: usize, len: usize },
}

/// Errors raised while driving a set from a stream of `p q` pairs.
#[derive(Debug, Error)]
pub enum ClientError {
	#[error("input is missing the element count line")]
	MissingHeader,
	#[error("line {line}: expected {expected}, got {content:?}")]
	Malformed {
		line: usize,
		expected: &'static str,
		content: String,
	},
	#[error("i/o error: {0}")]
	Io(#[from] io::Error),
	#[error(transparent)]
	UnionFind(#[from] UnionFindError),
}
