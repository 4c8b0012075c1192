//! Bulk-loaded R-tree over the climate parameter space.
//!
//! The tree is built once from the full region list and never modified. Nodes
//! hold the hull of their children on every axis, which gives an admissible lower
//! bound for the fitness of anything below them; the search uses that bound to
//! skip whole subtrees.
//!
//! Leaves only store the index of their region in the owning
//! [`ParameterList`](super::ParameterList). That index is also the tie-break: when
//! two regions are equally fit, the one authored first wins.

use std::cmp::Ordering;
use std::mem;

use super::{PARAMETER_COUNT, Parameter};

/// Target fan-out of the tree. Groups are sized in powers of this.
pub(crate) const CHILDREN_PER_NODE: usize = 10;

/// R-tree node for spatial biome lookup.
pub(crate) enum Node {
    /// A single authored region.
    Leaf {
        parameter_space: [Parameter; PARAMETER_COUNT],
        value_index: usize,
    },
    /// Internal node with children and their bounding box.
    Branch {
        parameter_space: [Parameter; PARAMETER_COUNT],
        children: Vec<Node>,
        /// Smallest `value_index` of any leaf below this node.
        min_index: usize,
    },
}

/// Best leaf found so far, ordered by `(distance, value_index)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Nearest {
    pub distance: i64,
    pub value_index: usize,
}

impl Nearest {
    /// Whether a node with the given lower bound and smallest index can still
    /// contain something better than `best`.
    #[inline]
    fn admits(best: Option<&Self>, distance: i64, min_index: usize) -> bool {
        best.is_none_or(|best| (distance, min_index) < (best.distance, best.value_index))
    }
}

impl Node {
    pub(crate) const fn leaf(
        parameter_space: [Parameter; PARAMETER_COUNT],
        value_index: usize,
    ) -> Self {
        Self::Leaf {
            parameter_space,
            value_index,
        }
    }

    /// Wrap `children` in a branch whose bounds cover all of them.
    ///
    /// `children` is never empty: groups come from chunking a non-empty list.
    fn branch(children: Vec<Node>) -> Self {
        let parameter_space = build_parameter_space(&children);
        let min_index = children
            .iter()
            .map(Node::min_index)
            .min()
            .unwrap_or(usize::MAX);
        Self::Branch {
            parameter_space,
            children,
            min_index,
        }
    }

    /// Get the parameter space (bounding box) of this node.
    pub(crate) const fn parameter_space(&self) -> &[Parameter; PARAMETER_COUNT] {
        match self {
            Self::Leaf {
                parameter_space, ..
            }
            | Self::Branch {
                parameter_space, ..
            } => parameter_space,
        }
    }

    pub(crate) const fn min_index(&self) -> usize {
        match self {
            Self::Leaf { value_index, .. } => *value_index,
            Self::Branch { min_index, .. } => *min_index,
        }
    }

    /// Lower bound on the fitness of any leaf in this node.
    ///
    /// For a leaf this is exactly its fitness, since the offset axis is measured
    /// against a target value of 0.
    #[inline]
    pub(crate) fn distance(&self, target: &[i64; PARAMETER_COUNT]) -> i64 {
        distance(self.parameter_space(), target)
    }

    /// Depth of the subtree rooted here (a leaf has depth 1).
    pub(crate) fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Branch { children, .. } => {
                1 + children.iter().map(Node::depth).max().unwrap_or(0)
            }
        }
    }

    /// Search this node for a leaf better than `best`.
    ///
    /// `distance` is this node's own lower bound; callers only descend once it
    /// has passed [`Nearest::admits`].
    fn search(
        &self,
        target: &[i64; PARAMETER_COUNT],
        distance: i64,
        best: &mut Option<Nearest>,
    ) {
        match self {
            Self::Leaf { value_index, .. } => {
                *best = Some(Nearest {
                    distance,
                    value_index: *value_index,
                });
            }
            Self::Branch { children, .. } => {
                for child in children {
                    let child_distance = child.distance(target);
                    if Nearest::admits(best.as_ref(), child_distance, child.min_index()) {
                        child.search(target, child_distance, best);
                    }
                }
            }
        }
    }

    /// Visit every leaf as `(parameter_space, value_index)`.
    #[cfg(test)]
    pub(crate) fn for_each_leaf(
        &self,
        f: &mut impl FnMut(&[Parameter; PARAMETER_COUNT], usize),
    ) {
        match self {
            Self::Leaf {
                parameter_space,
                value_index,
            } => f(parameter_space, *value_index),
            Self::Branch { children, .. } => {
                for child in children {
                    child.for_each_leaf(f);
                }
            }
        }
    }
}

/// Sum of squared per-axis distances from `target` to `parameter_space`.
///
/// Saturates at `i64::MAX` exactly like
/// [`ParameterPoint::fitness`](super::ParameterPoint::fitness), which keeps branch
/// bounds admissible for far out-of-range targets.
#[inline]
pub(crate) fn distance(
    parameter_space: &[Parameter; PARAMETER_COUNT],
    target: &[i64; PARAMETER_COUNT],
) -> i64 {
    let mut d = 0i64;
    for (parameter, &value) in parameter_space.iter().zip(target) {
        let di = parameter.distance_to_value(value);
        d = d.saturating_add(di.saturating_mul(di));
    }
    d
}

/// Find the nearest leaf to `target`, starting from an optional known candidate.
///
/// Seeding with a candidate only lets pruning start earlier; the answer is the
/// `(distance, value_index)` minimum over all leaves either way.
pub(crate) fn search(
    root: &Node,
    target: &[i64; PARAMETER_COUNT],
    seed: Option<Nearest>,
) -> Nearest {
    let mut best = seed;
    let root_distance = root.distance(target);
    if Nearest::admits(best.as_ref(), root_distance, root.min_index()) {
        root.search(target, root_distance, &mut best);
    }
    // Either the seed was a real leaf, or the root was admitted against `None`
    // and the descent reached at least one leaf.
    best.unwrap_or(Nearest {
        distance: root_distance,
        value_index: root.min_index(),
    })
}

/// Build the tree from leaves in authoring order.
///
/// `leaves` must not be empty.
pub(crate) fn build(leaves: Vec<Node>) -> Node {
    debug_assert!(!leaves.is_empty(), "At least one child is required to build a node");
    build_node(leaves)
}

fn build_node(mut nodes: Vec<Node>) -> Node {
    if nodes.len() == 1
        && let Some(node) = nodes.pop()
    {
        return node;
    }

    if nodes.len() <= CHILDREN_PER_NODE {
        // Sort by total magnitude of centers across all dimensions
        nodes.sort_by_key(|node| {
            let total: i128 = node
                .parameter_space()
                .iter()
                .map(|p| i128::from(p.midpoint()).abs())
                .sum();
            (total, node.min_index())
        });
        return Node::branch(nodes);
    }

    // Try grouping along each dimension, keep the cheapest
    let mut min_cost = i64::MAX;
    let mut best_dim = 0;
    for dim in 0..PARAMETER_COUNT {
        sort_nodes(&mut nodes, dim);
        let cost = grouping_cost(&nodes);
        if min_cost > cost {
            min_cost = cost;
            best_dim = dim;
        }
    }

    // The comparator is a total order, so this reproduces the winning grouping.
    sort_nodes(&mut nodes, best_dim);
    let mut groups = group(nodes);
    // Absolute centers keep extreme regions together at the edges of the tree.
    groups.sort_by(|a, b| compare(&a.0, a.1, &b.0, b.1, best_dim, true));

    let children = groups
        .into_iter()
        .map(|(_, _, group)| build_node(group))
        .collect();
    Node::branch(children)
}

/// Group size for `total` nodes: the largest power of ten below `total`.
fn group_size(total: usize) -> usize {
    let exponent = ((total as f64) - 0.01).log10().floor();
    (CHILDREN_PER_NODE as f64).powf(exponent) as usize
}

/// Sum of per-axis widths of a bounding box.
fn cost(parameter_space: &[Parameter; PARAMETER_COUNT]) -> i64 {
    parameter_space
        .iter()
        .fold(0i64, |total, p| total.saturating_add(p.width()))
}

/// Total cost of chunking the (already sorted) nodes into groups.
fn grouping_cost(nodes: &[Node]) -> i64 {
    nodes
        .chunks(group_size(nodes.len()))
        .fold(0i64, |total, chunk| {
            total.saturating_add(cost(&build_parameter_space(chunk)))
        })
}

type Group = ([Parameter; PARAMETER_COUNT], usize, Vec<Node>);

/// Split sorted nodes into consecutive groups, keeping each group's bounds and
/// smallest index for the final ordering.
fn group(nodes: Vec<Node>) -> Vec<Group> {
    let size = group_size(nodes.len());
    let mut groups = Vec::with_capacity(nodes.len().div_ceil(size));
    let mut current = Vec::with_capacity(size);
    for node in nodes {
        current.push(node);
        if current.len() >= size {
            groups.push(finish_group(mem::replace(
                &mut current,
                Vec::with_capacity(size),
            )));
        }
    }
    if !current.is_empty() {
        groups.push(finish_group(current));
    }
    groups
}

fn finish_group(nodes: Vec<Node>) -> Group {
    let parameter_space = build_parameter_space(&nodes);
    let min_index = nodes.iter().map(Node::min_index).min().unwrap_or(usize::MAX);
    (parameter_space, min_index, nodes)
}

/// Sort nodes by the center on `dimension`, breaking ties with the following
/// dimensions in cyclic order and finally by authoring order.
fn sort_nodes(nodes: &mut [Node], dimension: usize) {
    nodes.sort_by(|a, b| {
        compare(
            a.parameter_space(),
            a.min_index(),
            b.parameter_space(),
            b.min_index(),
            dimension,
            false,
        )
    });
}

fn compare(
    a: &[Parameter; PARAMETER_COUNT],
    a_index: usize,
    b: &[Parameter; PARAMETER_COUNT],
    b_index: usize,
    dimension: usize,
    absolute: bool,
) -> Ordering {
    for offset in 0..PARAMETER_COUNT {
        let d = (dimension + offset) % PARAMETER_COUNT;
        let mut center_a = i128::from(a[d].midpoint());
        let mut center_b = i128::from(b[d].midpoint());
        if absolute {
            center_a = center_a.abs();
            center_b = center_b.abs();
        }
        let cmp = center_a.cmp(&center_b);
        if cmp != Ordering::Equal {
            return cmp;
        }
    }
    a_index.cmp(&b_index)
}

/// Build the bounding box for a set of nodes.
fn build_parameter_space(nodes: &[Node]) -> [Parameter; PARAMETER_COUNT] {
    let mut bounds: [Option<Parameter>; PARAMETER_COUNT] = [None; PARAMETER_COUNT];
    for node in nodes {
        for (bound, parameter) in bounds.iter_mut().zip(node.parameter_space()) {
            *bound = Some(parameter.union(bound.as_ref()));
        }
    }
    bounds.map(|b| b.unwrap_or(Parameter::new(0, 0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point_space(values: [i64; PARAMETER_COUNT]) -> [Parameter; PARAMETER_COUNT] {
        values.map(|v| Parameter::new(v, v))
    }

    fn leaves(count: usize) -> Vec<Node> {
        (0..count)
            .map(|i| {
                let i = i as i64;
                Node::leaf(
                    point_space([i * 37 % 200 - 100, i * 11 % 50, -i, i % 7, 0, i * 3 % 13, 0]),
                    i as usize,
                )
            })
            .collect()
    }

    /// Checks the bounds and `min_index` invariants, returning the leaf indices below.
    fn check(node: &Node) -> Vec<usize> {
        match node {
            Node::Leaf { value_index, .. } => vec![*value_index],
            Node::Branch {
                parameter_space,
                children,
                min_index,
            } => {
                assert!(!children.is_empty());
                assert_eq!(*parameter_space, build_parameter_space(children));
                let mut indices = Vec::new();
                for child in children {
                    indices.extend(check(child));
                }
                assert_eq!(Some(min_index), indices.iter().min());
                indices
            }
        }
    }

    #[test]
    fn group_size_is_a_power_of_ten_below_total() {
        assert_eq!(group_size(11), 10);
        assert_eq!(group_size(100), 10);
        assert_eq!(group_size(101), 100);
        assert_eq!(group_size(1000), 100);
        assert_eq!(group_size(1001), 1000);
    }

    #[test]
    fn single_leaf_is_the_root() {
        let root = build(leaves(1));
        assert!(matches!(root, Node::Leaf { value_index: 0, .. }));
        assert_eq!(root.depth(), 1);
    }

    #[test]
    fn small_sets_become_one_branch() {
        let root = build(leaves(10));
        let Node::Branch { children, .. } = &root else {
            panic!("expected a branch");
        };
        assert_eq!(children.len(), 10);
        assert_eq!(root.depth(), 2);
    }

    #[test]
    fn every_leaf_appears_once_and_bounds_hold() {
        for count in [2, 9, 10, 11, 57, 100, 101, 345, 1234] {
            let root = build(leaves(count));
            let mut indices = check(&root);
            indices.sort_unstable();
            assert_eq!(indices, (0..count).collect::<Vec<_>>(), "count {count}");
        }
    }

    #[test]
    fn fan_out_stays_near_ten() {
        fn max_fan_out(node: &Node) -> usize {
            match node {
                Node::Leaf { .. } => 0,
                Node::Branch { children, .. } => children
                    .iter()
                    .map(max_fan_out)
                    .max()
                    .unwrap_or(0)
                    .max(children.len()),
            }
        }
        let root = build(leaves(1234));
        // The root holds ceil(1234 / 1000) groups; everything below is at most ten wide.
        assert!(max_fan_out(&root) <= CHILDREN_PER_NODE);
        assert_eq!(root.depth(), 5);
    }

    #[test]
    fn search_finds_exact_leaf() {
        let root = build(leaves(345));
        let mut target = [0; PARAMETER_COUNT];
        root.for_each_leaf(&mut |space, index| {
            for (t, p) in target.iter_mut().zip(space) {
                *t = p.min;
            }
            let found = search(&root, &target, None);
            assert_eq!(found.distance, 0);
            // Duplicate points resolve to the first authored one.
            assert!(found.value_index <= index);
        });
    }

    #[test]
    fn seed_never_changes_the_answer() {
        let root = build(leaves(345));
        let target = [13, 7, -40, 2, 0, 5, 0];
        let cold = search(&root, &target, None);
        for seed_index in [0, 100, 344] {
            let mut seed = None;
            root.for_each_leaf(&mut |space, index| {
                if index == seed_index {
                    seed = Some(Nearest {
                        distance: distance(space, &target),
                        value_index: index,
                    });
                }
            });
            assert_eq!(search(&root, &target, seed), cold);
        }
    }

    #[test]
    fn extreme_leaves_and_targets() {
        let mut nodes = leaves(40);
        nodes.push(Node::leaf(point_space([i64::MAX; PARAMETER_COUNT]), 40));
        nodes.push(Node::leaf(point_space([i64::MIN; PARAMETER_COUNT]), 41));
        nodes.push(Node::leaf(
            [Parameter::new(i64::MIN, i64::MAX); PARAMETER_COUNT],
            42,
        ));
        let root = build(nodes);
        check(&root);

        for target in [
            [i64::MAX; PARAMETER_COUNT],
            [i64::MIN; PARAMETER_COUNT],
            [i64::MAX, i64::MIN, 0, 0, 0, 0, 0],
        ] {
            let mut expected: Option<Nearest> = None;
            root.for_each_leaf(&mut |space, index| {
                let candidate = Nearest {
                    distance: distance(space, &target),
                    value_index: index,
                };
                if expected.is_none_or(|e| {
                    (candidate.distance, index) < (e.distance, e.value_index)
                }) {
                    expected = Some(candidate);
                }
            });
            assert_eq!(Some(search(&root, &target, None)), expected, "{target:?}");
        }
    }

    #[test]
    fn branch_bounds_are_admissible() {
        fn min_leaf_distance(node: &Node, target: &[i64; PARAMETER_COUNT]) -> i64 {
            let mut min = i64::MAX;
            node.for_each_leaf(&mut |space, _| min = min.min(distance(space, target)));
            min
        }
        fn check_admissible(node: &Node, target: &[i64; PARAMETER_COUNT]) {
            if let Node::Branch { children, .. } = node {
                assert!(node.distance(target) <= min_leaf_distance(node, target));
                for child in children {
                    check_admissible(child, target);
                }
            }
        }

        let root = build(leaves(345));
        for x in (-150..150).step_by(25) {
            for y in (-20..60).step_by(20) {
                check_admissible(&root, &[x, y, -x, 3, 0, y / 3, 0]);
            }
        }
    }
}
