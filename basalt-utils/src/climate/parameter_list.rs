use std::fmt;
use std::time::Instant;

use super::rtree::{self, Nearest, Node};
use super::{ClimateError, PARAMETER_COUNT, Parameter, ParameterPoint, TargetPoint};

/// Warm-start hint for [`ParameterList::find_value_cached`].
///
/// Holds the leaf returned by the previous lookup. Neighbouring samples usually
/// map to the same region, so seeding the search with it lets the tree prune
/// from the first node. Each worker keeps its own cache; it is never shared.
///
/// The cache is only a hint. A stale entry, or one left over from a different
/// list, changes how much of the tree is visited but never the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalityCache {
    last: Option<usize>,
}

impl LocalityCache {
    /// Create an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Index of the last region returned through this cache.
    #[must_use]
    pub const fn last(&self) -> Option<usize> {
        self.last
    }

    /// Forget the last result.
    pub const fn clear(&mut self) {
        self.last = None;
    }
}

/// A list of climate regions with their associated values.
///
/// Built once, then queried with [`find_value`](Self::find_value) or
/// [`find_value_cached`](Self::find_value_cached). Lookups return the value of
/// the region with the lowest [`ParameterPoint::fitness`]; among equally fit
/// regions the one that came first in the input wins.
pub struct ParameterList<T> {
    /// The region entries (parameter point, value pairs) in authoring order
    values: Vec<(ParameterPoint, T)>,
    /// Parameter spaces for each value, for seeding from a cached index
    param_spaces: Vec<[Parameter; PARAMETER_COUNT]>,
    /// R-tree root
    root: Node,
}

impl<T> ParameterList<T> {
    /// Create a new parameter list from values, building the R-tree index.
    pub fn new(values: Vec<(ParameterPoint, T)>) -> Result<Self, ClimateError> {
        if values.is_empty() {
            return Err(ClimateError::EmptyDomain);
        }

        let start = Instant::now();
        let param_spaces: Vec<[Parameter; PARAMETER_COUNT]> =
            values.iter().map(|(pp, _)| pp.parameter_space()).collect();
        let leaves = param_spaces
            .iter()
            .enumerate()
            .map(|(i, space)| Node::leaf(*space, i))
            .collect();
        let root = rtree::build(leaves);

        tracing::debug!(
            regions = values.len(),
            depth = root.depth(),
            elapsed = ?start.elapsed(),
            "built climate parameter tree"
        );

        Ok(Self {
            values,
            param_spaces,
            root,
        })
    }

    /// Create a parameter list from dynamically sized parameter spaces.
    ///
    /// Each entry must have exactly [`PARAMETER_COUNT`] axes, the last being the
    /// single-value offset.
    pub fn from_axes(values: Vec<(Vec<Parameter>, T)>) -> Result<Self, ClimateError> {
        let values = values
            .into_iter()
            .map(|(axes, value)| Ok((ParameterPoint::from_axes(&axes)?, value)))
            .collect::<Result<Vec<_>, ClimateError>>()?;
        Self::new(values)
    }

    /// Get the underlying values in authoring order.
    #[must_use]
    pub fn values(&self) -> &[(ParameterPoint, T)] {
        &self.values
    }

    /// Number of regions in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: construction rejects empty input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Depth of the search tree (a single region has depth 1).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Find the best matching value for a target point (no caching).
    #[must_use]
    pub fn find_value(&self, target: &TargetPoint) -> &T {
        let nearest = rtree::search(&self.root, &target.to_parameter_array(), None);
        &self.values[nearest.value_index].1
    }

    /// Find the best matching value, warm-starting from `cache`.
    ///
    /// The region found is written back into `cache`.
    #[must_use]
    pub fn find_value_cached(&self, target: &TargetPoint, cache: &mut LocalityCache) -> &T {
        let target_array = target.to_parameter_array();
        let seed = cache.last.and_then(|index| {
            self.param_spaces.get(index).map(|space| Nearest {
                distance: rtree::distance(space, &target_array),
                value_index: index,
            })
        });

        let nearest = rtree::search(&self.root, &target_array, seed);
        cache.last = Some(nearest.value_index);
        &self.values[nearest.value_index].1
    }

    /// Find the best matching value by scoring every region.
    ///
    /// Same result as [`find_value`](Self::find_value), including tie-breaks, in
    /// linear time. Meant for verification.
    #[must_use]
    pub fn find_value_brute_force(&self, target: &TargetPoint) -> &T {
        let mut best = 0;
        let mut best_fitness = i64::MAX;
        for (i, (point, _)) in self.values.iter().enumerate() {
            let fitness = point.fitness(target);
            if fitness < best_fitness {
                best = i;
                best_fitness = fitness;
            }
        }
        &self.values[best].1
    }
}

impl<T> fmt::Debug for ParameterList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterList")
            .field("len", &self.values.len())
            .field("depth", &self.root.depth())
            .finish_non_exhaustive()
    }
}
