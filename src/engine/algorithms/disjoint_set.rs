use crate::engine::model::NodeId;

/// Arena-indexed union-find owned by a single Kruskal run.
#[derive(Debug, Clone)]
pub(super) struct DisjointSet {
	parent: Vec<NodeId>,
}

impl DisjointSet {
	pub(super) fn new(n: usize) -> Self {
		Self {
			parent: (0..n).collect(),
		}
	}

	/// Representative of `x`'s component, compressing the walked path.
	pub(super) fn find(&mut self, x: NodeId) -> NodeId {
		let mut root = x;
		while self.parent[root] != root {
			root = self.parent[root];
		}
		let mut cursor = x;
		while self.parent[cursor] != root {
			let next = self.parent[cursor];
			self.parent[cursor] = root;
			cursor = next;
		}
		root
	}

	/// Points `a`'s representative at `b`'s. Returns false when they already
	/// share a component.
	pub(super) fn union(&mut self, a: NodeId, b: NodeId) -> bool {
		let (ra, rb) = (self.find(a), self.find(b));
		if ra == rb {
			return false;
		}
		self.parent[ra] = rb;
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn union_merges_components_once() {
		let mut sets = DisjointSet::new(4);
		assert!(sets.union(0, 1));
		assert!(sets.union(2, 3));
		assert!(!sets.union(1, 0));
		assert_ne!(sets.find(0), sets.find(2));
		assert!(sets.union(1, 3));
		assert_eq!(sets.find(0), sets.find(2));
		assert!(!sets.union(0, 3));
	}

	#[test]
	fn find_compresses_chains() {
		let mut sets = DisjointSet::new(4);
		sets.union(0, 1);
		sets.union(1, 2);
		sets.union(2, 3);
		let root = sets.find(0);
		assert_eq!(root, 3);
		assert!(sets.parent.iter().all(|&p| p == root));
	}
}
