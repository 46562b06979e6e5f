//! Unweighted quick-union.
//!
//! Merging reparents one root under another and nothing else: no path
//! compression, no balancing. A run of `union(i, i + 1)` calls builds a single
//! chain, so `connected` can cost O(n) per call.

use std::fmt;

use crate::disjoint_set::DisjointSet;
use crate::error::UnionFindError;

#[derive(Debug, Clone)]
pub struct QuickUnion {
	parent: Vec<usize>,
	count: usize,
}

impl QuickUnion {
	/// `n` singleton sets over the elements `0..n`.
	pub fn new(n: usize) -> QuickUnion {
		debug!("quick-union over {} elements", n);
		QuickUnion {
			parent: (0..n).collect(),
			count: n,
		}
	}

	pub fn len(&self) -> usize {
		self.parent.len()
	}

	pub fn is_empty(&self) -> bool {
		self.parent.is_empty()
	}

	/// Number of distinct sets.
	pub fn count(&self) -> usize {
		self.count
	}

	pub fn connected(&self, p: usize, q: usize) -> Result<bool, UnionFindError> {
		self.check(p)?;
		self.check(q)?;
		Ok(self.root(p) == self.root(q))
	}

	/// Merges the sets of `p` and `q`. The root of `q`'s set becomes the root of
	/// the combined set.
	pub fn union(&mut self, p: usize, q: usize) -> Result<(), UnionFindError> {
		self.check(p)?;
		self.check(q)?;
		let i = self.root(p);
		let j = self.root(q);
		if i != j {
			trace!("union({}, {}): root {} -> {}", p, q, i, j);
			self.count -= 1;
		}
		self.parent[i] = j;
		Ok(())
	}

	/// Parent hops from `i` to its root.
	pub fn depth(&self, i: usize) -> Result<usize, UnionFindError> {
		self.check(i)?;
		let mut i = i;
		let mut hops = 0;
		while i != self.parent[i] {
			i = self.parent[i];
			hops += 1;
		}
		Ok(hops)
	}

	/// The non-empty sets, members ascending, ordered by root.
	pub fn partition(&self) -> Vec<Vec<usize>> {
		let mut ptn = vec![vec![]; self.len()];
		for i in 0..self.len() {
			ptn[self.root(i)].push(i);
		}
		ptn.into_iter().filter(|set| !set.is_empty()).collect()
	}

	fn check(&self, i: usize) -> Result<(), UnionFindError> {
		if i < self.parent.len() {
			Ok(())
		} else {
			Err(UnionFindError::IndexOutOfRange { index: i, len: self.parent.len() })
		}
	}

	// `i` must already be in range; terminates because only roots self-loop.
	fn root(&self, mut i: usize) -> usize {
		while i != self.parent[i] {
			i = self.parent[i];
		}
		i
	}
}

impl DisjointSet for QuickUnion {
	fn with_len(n: usize) -> QuickUnion {
		QuickUnion::new(n)
	}

	fn len(&self) -> usize {
		QuickUnion::len(self)
	}

	fn count(&self) -> usize {
		QuickUnion::count(self)
	}

	fn connected(&mut self, p: usize, q: usize) -> Result<bool, UnionFindError> {
		QuickUnion::connected(self, p, q)
	}

	fn union(&mut self, p: usize, q: usize) -> Result<(), UnionFindError> {
		QuickUnion::union(self, p, q)
	}
}

/// Writes `partition()` as `{{0, 1}, {2}}`. The alternate flag is ignored, so
/// `{:#}` stays on one line.
impl fmt::Display for QuickUnion {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{{")?;
		for (k, set) in self.partition().iter().enumerate() {
			if k > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{{")?;
			for (m, i) in set.iter().enumerate() {
				if m > 0 {
					write!(f, ", ")?;
				}
				write!(f, "{}", i)?;
			}
			write!(f, "}}")?;
		}
		write!(f, "}}")
	}
}
