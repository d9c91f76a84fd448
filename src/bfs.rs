//! This module implements a breadth-first search in the shape of
//! [pathfinding's bfs function](https://docs.rs/pathfinding/latest/pathfinding/directed/bfs/index.html).
//! Nodes are stored in an insertion-ordered map that doubles as the visited set and the parent
//! table, so a node is marked visited the moment it is enqueued and never enqueued twice.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;
use std::collections::VecDeque;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

fn reverse_path<N>(parents: &FxIndexMap<N, usize>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = std::iter::successors(parents.get_index(start), |&(_, &parent)| {
        parents.get_index(parent)
    })
    .map(|(node, _)| node.clone())
    .collect();
    path.reverse();
    path
}

/// Searches from `start` until `success` holds, expanding nodes in the order `successors`
/// yields them. Returns the node sequence from `start` to the first successful node, which has
/// the fewest edges of any such sequence. Ties are broken by successor order alone, so the
/// result is deterministic as long as `successors` is.
pub fn bfs<N, FN, IN, FS>(start: &N, mut successors: FN, mut success: FS) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = VecDeque::new();
    to_see.push_back(0);
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    parents.insert(start.clone(), usize::MAX);
    while let Some(index) = to_see.pop_front() {
        let successors = {
            let Some((node, _)) = parents.get_index(index) else {
                continue;
            };
            if success(node) {
                return Some(reverse_path(&parents, index));
            }
            successors(node)
        };
        for successor in successors {
            if let Vacant(e) = parents.entry(successor) {
                let n = e.index();
                e.insert(index);
                to_see.push_back(n);
            }
        }
    }
    None
}
