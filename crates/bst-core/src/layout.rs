//! Collision-free spatial layout for a tree snapshot.
//!
//! The horizontal interval of every node is split between its two child
//! slots in proportion to their leaf counts, with a fixed gap between the
//! halves and a minimum width per slot. Each node sits at the midpoint of
//! its own interval, one `vertical_spacing` below its parent, on the
//! `z = 0` plane. Because sibling intervals never overlap and children
//! stay inside their parent's interval, edges cannot cross.

use std::collections::HashMap;

use nalgebra::Point3;

use crate::tree::{BinarySearchTree, TreeNode};

/// Tuning constants for [`Layout::compute`].
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Left edge of the root interval.
    pub left_bound: f32,
    /// Right edge of the root interval.
    pub right_bound: f32,
    /// Space kept free between a node's left and right slots.
    pub min_gap: f32,
    /// Narrowest interval any slot (occupied or empty) may receive.
    pub min_width: f32,
    /// Radius of the rendered node spheres.
    pub node_radius: f32,
    /// Distance between consecutive depth levels.
    pub vertical_spacing: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let node_radius = 1.0;
        Self {
            left_bound: -50.0,
            right_bound: 50.0,
            min_gap: 2.0,
            min_width: 2.0,
            node_radius,
            vertical_spacing: vertical_spacing_for(node_radius),
        }
    }
}

/// Smallest level spacing that keeps spheres of `radius` apart with a
/// padding of a third of the radius on each side, never below 3.5.
pub fn vertical_spacing_for(radius: f32) -> f32 {
    let padding = radius / 3.0;
    (2.0 * radius + 2.0 * padding).max(3.5)
}

/// A closed horizontal interval `[left, right]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub left: f32,
    pub right: f32,
}

impl Interval {
    pub fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn midpoint(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    /// Returns `true` if the intervals share any point.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.left <= other.right && other.left <= self.right
    }

    /// Returns `true` if `other` lies entirely within `self`.
    pub fn contains(&self, other: &Interval) -> bool {
        self.left <= other.left && other.right <= self.right
    }
}

/// Coordinates assigned to every node of one tree snapshot.
///
/// A pure function of tree shape and configuration: recomputing it for the
/// same snapshot always yields the same map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    positions: HashMap<i32, Point3<f32>>,
    intervals: HashMap<i32, Interval>,
    edges: Vec<(i32, i32)>,
}

/// Bottom-up measurements for one subtree.
#[derive(Debug, Clone, Copy)]
struct Measure {
    /// Leaf count (0 for an empty slot).
    weight: usize,
    /// Narrowest interval the subtree can be laid out in.
    required: f32,
}

impl Layout {
    /// Lays out `tree` according to `config`.
    pub fn compute(tree: &BinarySearchTree, config: &LayoutConfig) -> Self {
        let mut layout = Self::default();
        let Some(root) = tree.root() else {
            return layout;
        };

        let mut measures = HashMap::with_capacity(tree.len());
        let root_measure = measure(Some(root), config, &mut measures);

        let mut interval = Interval::new(config.left_bound, config.right_bound);
        if interval.width() < root_measure.required {
            let half = root_measure.required / 2.0;
            let center = interval.midpoint();
            interval = Interval::new(center - half, center + half);
        }

        place(root, 0, interval, config, &measures, &mut layout);
        layout.edges = tree.edges();
        layout
    }

    /// Lays out `tree` with [`LayoutConfig::default`].
    pub fn with_defaults(tree: &BinarySearchTree) -> Self {
        Self::compute(tree, &LayoutConfig::default())
    }

    /// Returns the position of the node holding `value`.
    pub fn position(&self, value: i32) -> Option<Point3<f32>> {
        self.positions.get(&value).copied()
    }

    /// Returns the horizontal interval allocated to the node holding `value`.
    pub fn interval(&self, value: i32) -> Option<Interval> {
        self.intervals.get(&value).copied()
    }

    /// Iterates over `(value, position)` pairs in no particular order.
    pub fn positions(&self) -> impl Iterator<Item = (i32, Point3<f32>)> + '_ {
        self.positions.iter().map(|(&v, &p)| (v, p))
    }

    /// Parent/child value pairs, in pre-order.
    pub fn edges(&self) -> &[(i32, i32)] {
        &self.edges
    }

    /// Endpoints of every edge, paired with the values they connect.
    pub fn edge_segments(
        &self,
    ) -> impl Iterator<Item = ((i32, i32), Point3<f32>, Point3<f32>)> + '_ {
        self.edges.iter().filter_map(|&(parent, child)| {
            Some(((parent, child), self.position(parent)?, self.position(child)?))
        })
    }

    /// Axis-aligned bounding box of all node centers.
    pub fn bounds(&self) -> Option<(Point3<f32>, Point3<f32>)> {
        let mut iter = self.positions.values();
        let first = *iter.next()?;
        Some(iter.fold((first, first), |(min, max), p| (min.inf(p), max.sup(p))))
    }

    /// Number of laid-out nodes.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` for the layout of an empty tree.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Records the measure of every node in the subtree and returns the subtree's own.
fn measure(
    node: Option<&TreeNode>,
    config: &LayoutConfig,
    measures: &mut HashMap<i32, Measure>,
) -> Measure {
    let Some(node) = node else {
        return Measure {
            weight: 0,
            required: config.min_width,
        };
    };

    let result = if node.is_leaf() {
        Measure {
            weight: 1,
            required: config.min_width,
        }
    } else {
        let left = measure(node.left(), config, measures);
        let right = measure(node.right(), config, measures);
        Measure {
            weight: left.weight + right.weight,
            required: left.required + config.min_gap + right.required,
        }
    };
    measures.insert(node.value(), result);
    result
}

/// Places `node` in `interval` and recurses into its children.
fn place(
    node: &TreeNode,
    depth: usize,
    interval: Interval,
    config: &LayoutConfig,
    measures: &HashMap<i32, Measure>,
    layout: &mut Layout,
) {
    let y = -(depth as f32) * config.vertical_spacing;
    layout
        .positions
        .insert(node.value(), Point3::new(interval.midpoint(), y, 0.0));
    layout.intervals.insert(node.value(), interval);

    if node.is_leaf() {
        return;
    }

    let slot_measure = |child: Option<&TreeNode>| {
        child
            .and_then(|c| measures.get(&c.value()).copied())
            .unwrap_or(Measure {
                weight: 0,
                required: config.min_width,
            })
    };
    let left = slot_measure(node.left());
    let right = slot_measure(node.right());

    let available = interval.width() - config.min_gap;
    let total = (left.weight + right.weight).max(1) as f32;
    let proportional = available * left.weight as f32 / total;
    // clamp() panics if rounding inverts the bounds
    let left_width = proportional
        .max(left.required)
        .min(available - right.required);

    let split = interval.left + left_width;
    if let Some(child) = node.left() {
        place(
            child,
            depth + 1,
            Interval::new(interval.left, split),
            config,
            measures,
            layout,
        );
    }
    if let Some(child) = node.right() {
        place(
            child,
            depth + 1,
            Interval::new(split + config.min_gap, interval.right),
            config,
            measures,
            layout,
        );
    }
}
