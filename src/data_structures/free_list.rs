/// A stack of previously used, currently unassigned indices.
///
/// The most recently freed index is handed out first.
#[derive(Default)]
pub struct FreeList {
	indices: Vec<usize>,
}

impl FreeList {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			indices: Vec::with_capacity(capacity),
		}
	}

	#[inline(always)]
	pub fn push(&mut self, index: usize) {
		self.indices.push(index);
	}

	#[inline(always)]
	pub fn pop(&mut self) -> Option<usize> {
		self.indices.pop()
	}

	pub fn len(&self) -> usize {
		self.indices.len()
	}

	pub fn is_empty(&self) -> bool {
		self.indices.is_empty()
	}

	/// Iterate the free indices in the order they will be reused.
	pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
		self.indices.iter().rev().copied()
	}

	/// Drop every index and release the backing memory.
	pub fn release(&mut self) -> usize {
		let count = self.indices.len();
		self.indices = Vec::new();
		count
	}
}
