use std::io::{self, Write};

use rand::Rng;

use crate::disjoint_set::DisjointSet;
use crate::error::{ClientError, UnionFindError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientSummary {
	pub pairs: usize,
	pub unions: usize,
	pub components: usize,
}

fn parse_line_of_nums(line_no: usize, line: &str, expected: &'static str) -> Result<Vec<usize>, ClientError> {
	line.split_whitespace()
		.map(str::parse::<usize>)
		.collect::<Result<Vec<_>, _>>()
		.map_err(|_| ClientError::Malformed {
			line: line_no,
			expected,
			content: line.to_string(),
		})
}

/// Reads the element count from the first non-blank line.
pub fn parse_header<I: Iterator<Item = io::Result<(usize, String)>>>(lines_iter: &mut I) -> Result<usize, ClientError> {
	let (line_no, line) = loop {
		match lines_iter.next() {
			Some(numbered_line) => {
				let (line_no, line) = numbered_line?;
				if !line.trim().is_empty() {
					break (line_no, line);
				}
			}
			None => return Err(ClientError::MissingHeader),
		}
	};
	match parse_line_of_nums(line_no, &line, "an element count")?.as_slice() {
		[n] => Ok(*n),
		_ => Err(ClientError::Malformed { line: line_no, expected: "an element count", content: line }),
	}
}

pub fn parse_pair(line_no: usize, line: &str) -> Result<(usize, usize), ClientError> {
	match parse_line_of_nums(line_no, line, "a pair `p q`")?.as_slice() {
		[p, q] => Ok((*p, *q)),
		_ => Err(ClientError::Malformed {
			line: line_no,
			expected: "a pair `p q`",
			content: line.to_string(),
		}),
	}
}

/// Feeds every `p q` line into `set`, writing the pairs that joined two
/// separate sets to `out`. Lines are numbered from 1.
pub fn run_client<D, I, W>(set: &mut D, lines_iter: I, out: &mut W) -> Result<ClientSummary, ClientError>
where
	D: DisjointSet,
	I: Iterator<Item = io::Result<(usize, String)>>,
	W: Write,
{
	let mut pairs = 0;
	let mut unions = 0;
	for numbered_line in lines_iter {
		let (line_no, line) = numbered_line?;
		if line.trim().is_empty() {
			continue;
		}
		let (p, q) = parse_pair(line_no, &line)?;
		pairs += 1;
		if set.connected(p, q)? {
			continue;
		}
		set.union(p, q)?;
		unions += 1;
		writeln!(out, "{} {}", p, q)?;
	}
	let summary = ClientSummary { pairs, unions, components: set.count() };
	info!("{} pairs read, {} unions, {} components", pairs, unions, summary.components);
	Ok(summary)
}

/// Unions uniformly random pairs until at most one set is left. Returns the
/// number of pairs drawn.
pub fn random_connections<D: DisjointSet, R: Rng>(set: &mut D, rng: &mut R) -> Result<usize, UnionFindError> {
	let n = set.len();
	let mut drawn = 0;
	while set.count() > 1 {
		let p = rng.gen_range(0, n);
		let q = rng.gen_range(0, n);
		set.union(p, q)?;
		drawn += 1;
	}
	info!("{} elements connected after {} random pairs", n, drawn);
	Ok(drawn)
}

/// Pairs each line with its 1-based line number. Read errors pass through so
/// input can be consumed as it arrives.
pub fn numbered<I: Iterator<Item = io::Result<String>>>(lines: I) -> impl Iterator<Item = io::Result<(usize, String)>> {
	lines.enumerate().map(|(i, line)| line.map(|line| (i + 1, line)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::quick_union::QuickUnion;

	fn lines(text: &str) -> impl Iterator<Item = io::Result<(usize, String)>> + '_ {
		numbered(text.lines().map(|line| Ok(line.to_string())))
	}

	#[test]
	fn header_skips_blank_lines() {
		let mut it = lines("\n  \n10\n4 3\n");
		assert_eq!(parse_header(&mut it).unwrap(), 10);
		assert_eq!(it.next().unwrap().unwrap(), (4, "4 3".to_string()));
	}

	#[test]
	fn header_missing() {
		match parse_header(&mut lines("\n\n")) {
			Err(ClientError::MissingHeader) => {}
			other => panic!("unexpected {:?}", other),
		}
	}

	#[test]
	fn read_error_stops_the_client() {
		let input = vec![
			Ok("0 1".to_string()),
			Err(io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8")),
			Ok("2 3".to_string()),
		];
		let mut uf = QuickUnion::new(4);
		let mut out = Vec::new();
		match run_client(&mut uf, numbered(input.into_iter()), &mut out) {
			Err(ClientError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::InvalidData),
			other => panic!("unexpected {:?}", other),
		}
		assert_eq!(String::from_utf8(out).unwrap(), "0 1\n");
		assert_eq!(uf.count(), 3);
	}

	#[test]
	fn pair_must_have_two_numbers() {
		assert_eq!(parse_pair(1, " 4  3 ").unwrap(), (4, 3));
		match parse_pair(7, "4 3 2") {
			Err(ClientError::Malformed { line: 7, .. }) => {}
			other => panic!("unexpected {:?}", other),
		}
		match parse_pair(2, "4 x") {
			Err(ClientError::Malformed { line: 2, content, .. }) => assert_eq!(content, "4 x"),
			other => panic!("unexpected {:?}", other),
		}
	}

	#[test]
	fn writes_only_new_connections() {
		let mut uf = QuickUnion::new(4);
		let mut out = Vec::new();
		let summary = run_client(&mut uf, lines("0 1\n\n1 0\n2 3\n0 1\n"), &mut out).unwrap();
		assert_eq!(String::from_utf8(out).unwrap(), "0 1\n2 3\n");
		assert_eq!(summary, ClientSummary { pairs: 4, unions: 2, components: 2 });
	}

	#[test]
	fn out_of_range_pair_aborts() {
		let mut uf = QuickUnion::new(2);
		let mut out = Vec::new();
		match run_client(&mut uf, lines("0 1\n0 2\n"), &mut out) {
			Err(ClientError::UnionFind(UnionFindError::IndexOutOfRange { index: 2, len: 2 })) => {}
			other => panic!("unexpected {:?}", other),
		}
		assert_eq!(String::from_utf8(out).unwrap(), "0 1\n");
	}

	#[test]
	fn random_connections_of_trivial_sets() {
		let mut rng = rand::thread_rng();
		assert_eq!(random_connections(&mut QuickUnion::new(0), &mut rng).unwrap(), 0);
		assert_eq!(random_connections(&mut QuickUnion::new(1), &mut rng).unwrap(), 0);
	}

	#[test]
	fn random_connections_leave_one_set() {
		let mut rng = rand::thread_rng();
		let mut uf = QuickUnion::new(50);
		let drawn = random_connections(&mut uf, &mut rng).unwrap();
		assert!(drawn >= 49);
		assert_eq!(uf.count(), 1);
	}
}
