// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
use crate::error::UnionFindError;

/// Operations shared by every union-find strategy in this crate.
///
/// `connected` takes `&mut self` so that strategies which restructure their
/// trees while searching can implement it.
pub trait DisjointSet {
	fn with_len(n: usize) -> Self where Self: Sized;

	fn len(&self) -> usize;

	/// Number of distinct sets.
	fn count(&self) -> usize;

	fn connected(&mut self, p: usize, q: usize) -> Result<bool, UnionFindError>;

	fn union(&mut self, p: usize, q: usize) -> Result<(), UnionFindError>;
}

/// Union by rank with path compression.
///
/// Same partition semantics as `QuickUnion`, different tree shapes: no tree
/// grows taller than `log2(len)`.
#[derive(Debug, Clone)]
pub struct WeightedDisjointSet {
	parent: Vec<usize>,
	rank: Vec<usize>,
	count: usize,
}

impl WeightedDisjointSet {
	pub fn make_singletons(size: usize) -> WeightedDisjointSet {
		debug!("weighted union-find over {} elements", size);
		WeightedDisjointSet {
			parent: (0..size).collect(),
			rank: vec![0; size],
			count: size,
		}
	}

	/// Root of `x`'s set. Every node on the way is repointed at the root.
	pub fn find(&mut self, x: usize) -> Result<usize, UnionFindError> {
		self.check(x)?;
		let mut root = x;
		while root != self.parent[root] {
			root = self.parent[root];
		}
		let mut x = x;
		while x != root {
			let next = self.parent[x];
			self.parent[x] = root;
			x = next;
		}
		Ok(root)
	}

	pub fn unite(&mut self, x: usize, y: usize) -> Result<(), UnionFindError> {
		self.check(x)?;
		self.check(y)?;
		let x_root = self.find(x)?;
		let y_root = self.find(y)?;
		if x_root == y_root {
			return Ok(());
		}
		trace!("unite({}, {}): roots {} and {}", x, y, x_root, y_root);
		if self.rank[x_root] > self.rank[y_root] {
			self.parent[y_root] = x_root;
		} else {
			if self.rank[x_root] == self.rank[y_root] {
				self.rank[y_root] += 1;
			}
			self.parent[x_root] = y_root;
		}
		self.count -= 1;
		Ok(())
	}

	/// Parent hops from `x` to its root, without compressing.
	pub fn depth(&self, x: usize) -> Result<usize, UnionFindError> {
		self.check(x)?;
		let mut x = x;
		let mut hops = 0;
		while x != self.parent[x] {
			x = self.parent[x];
			hops += 1;
		}
		Ok(hops)
	}

	fn check(&self, x: usize) -> Result<(), UnionFindError> {
		if x < self.parent.len() {
			Ok(())
		} else {
			Err(UnionFindError::IndexOutOfRange { index: x, len: self.parent.len() })
		}
	}
}

impl DisjointSet for WeightedDisjointSet {
	fn with_len(n: usize) -> WeightedDisjointSet {
		WeightedDisjointSet::make_singletons(n)
	}

	fn len(&self) -> usize {
		self.parent.len()
	}

	fn count(&self) -> usize {
		self.count
	}

	fn connected(&mut self, p: usize, q: usize) -> Result<bool, UnionFindError> {
		self.check(p)?;
		self.check(q)?;
		Ok(self.find(p)? == self.find(q)?)
	}

	fn union(&mut self, p: usize, q: usize) -> Result<(), UnionFindError> {
		self.unite(p, q)
	}
}
