//! The spider diagram tree.
//!
//! A [`SpiderDiagram`] is a closed sum of three variants:
//! - [`SpiderDiagram::Null`]: the trivially true diagram.
//! - [`SpiderDiagram::Primary`]: an atomic diagram of spiders, habitats and
//!   shaded zones ([`PrimaryDiagram`]).
//! - [`SpiderDiagram::Compound`]: a logical [`Operator`] applied to
//!   sub-diagrams ([`CompoundDiagram`]).
//!
//! Trees are immutable. Operands are held behind [`Arc`], so a rewrite builds
//! new nodes along the changed path and shares every untouched subtree with
//! the input tree.
//!
//! Nodes are addressed by [`SubDiagramIndex`] in pre-order: the root is `0`,
//! and a compound node's operands follow it depth-first.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::CoreError;
use crate::id::SubDiagramIndex;
use crate::operator::Operator;
use crate::region::Region;
use crate::zone::{ContourName, Zone};

/// Name of a spider.
pub type SpiderName = String;

/// Operand storage of a compound diagram. Every operator has at most two
/// operands, so they stay inline.
pub type Operands = SmallVec<[Arc<SpiderDiagram>; 2]>;

/// A spider diagram tree node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpiderDiagram {
    /// The trivially true statement.
    Null,
    Primary(PrimaryDiagram),
    Compound(CompoundDiagram),
}

/// An atomic diagram: spiders, their habitats and the shaded zones.
///
/// Every spider with a habitat is a declared spider. Shaded zones need not
/// cover the zones referenced by habitats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PrimaryRepr")]
pub struct PrimaryDiagram {
    spiders: BTreeSet<SpiderName>,
    habitats: BTreeMap<SpiderName, Region>,
    shaded_zones: BTreeSet<Zone>,
}

#[derive(Deserialize)]
struct PrimaryRepr {
    #[serde(default)]
    spiders: BTreeSet<SpiderName>,
    #[serde(default)]
    habitats: BTreeMap<SpiderName, Region>,
    #[serde(default)]
    shaded_zones: BTreeSet<Zone>,
}

impl TryFrom<PrimaryRepr> for PrimaryDiagram {
    type Error = CoreError;

    fn try_from(repr: PrimaryRepr) -> Result<Self, Self::Error> {
        PrimaryDiagram::new(repr.spiders, repr.habitats, repr.shaded_zones)
    }
}

impl PrimaryDiagram {
    /// Creates a primary diagram.
    ///
    /// Returns [`CoreError::UnknownHabitatSpider`] if a habitat is given for
    /// a spider not in `spiders`.
    pub fn new<S, H, Z>(spiders: S, habitats: H, shaded_zones: Z) -> Result<Self, CoreError>
    where
        S: IntoIterator<Item = SpiderName>,
        H: IntoIterator<Item = (SpiderName, Region)>,
        Z: IntoIterator<Item = Zone>,
    {
        let spiders: BTreeSet<SpiderName> = spiders.into_iter().collect();
        let habitats: BTreeMap<SpiderName, Region> = habitats.into_iter().collect();

        if let Some(spider) = habitats.keys().find(|s| !spiders.contains(*s)) {
            return Err(CoreError::UnknownHabitatSpider {
                spider: spider.clone(),
            });
        }

        Ok(PrimaryDiagram {
            spiders,
            habitats,
            shaded_zones: shaded_zones.into_iter().collect(),
        })
    }

    pub fn spiders(&self) -> &BTreeSet<SpiderName> {
        &self.spiders
    }

    pub fn spiders_count(&self) -> usize {
        self.spiders.len()
    }

    pub fn habitats(&self) -> &BTreeMap<SpiderName, Region> {
        &self.habitats
    }

    pub fn habitats_count(&self) -> usize {
        self.habitats.len()
    }

    /// The habitat of `spider`, if it has one.
    pub fn habitat(&self, spider: &str) -> Option<&Region> {
        self.habitats.get(spider)
    }

    pub fn shaded_zones(&self) -> &BTreeSet<Zone> {
        &self.shaded_zones
    }

    pub fn shaded_zones_count(&self) -> usize {
        self.shaded_zones.len()
    }

    pub fn is_shaded(&self, zone: &Zone) -> bool {
        self.shaded_zones.contains(zone)
    }

    /// Every contour mentioned by a habitat or a shaded zone.
    pub fn all_contours(&self) -> BTreeSet<ContourName> {
        let mut contours: BTreeSet<ContourName> =
            self.habitats.values().flat_map(Region::all_contours).collect();
        for zone in &self.shaded_zones {
            contours.extend(zone.all_contours());
        }
        contours
    }
}

/// A logical operator applied to an ordered sequence of sub-diagrams.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CompoundRepr")]
pub struct CompoundDiagram {
    operator: Operator,
    operands: Operands,
}

#[derive(Deserialize)]
struct CompoundRepr {
    operator: Operator,
    operands: Vec<Arc<SpiderDiagram>>,
}

impl TryFrom<CompoundRepr> for CompoundDiagram {
    type Error = CoreError;

    fn try_from(repr: CompoundRepr) -> Result<Self, Self::Error> {
        CompoundDiagram::new(repr.operator, repr.operands)
    }
}

impl CompoundDiagram {
    /// Creates a compound diagram.
    ///
    /// Returns [`CoreError::ArityMismatch`] unless the operand count matches
    /// the operator's arity.
    pub fn new<I>(operator: Operator, operands: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = Arc<SpiderDiagram>>,
    {
        let operands: Operands = operands.into_iter().collect();
        let expected = operator.arity().operand_count();
        if operands.len() != expected {
            return Err(CoreError::ArityMismatch {
                operator,
                expected,
                actual: operands.len(),
            });
        }
        Ok(CompoundDiagram { operator, operands })
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operands(&self) -> &[Arc<SpiderDiagram>] {
        &self.operands
    }

    pub fn operand(&self, position: usize) -> Option<&Arc<SpiderDiagram>> {
        self.operands.get(position)
    }

    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }

    /// If this is `~ ~ D`, returns `D`.
    pub fn double_negated_operand(&self) -> Option<&Arc<SpiderDiagram>> {
        if self.operator != Operator::Negation {
            return None;
        }
        match self.operands.first().map(Arc::as_ref) {
            Some(SpiderDiagram::Compound(inner)) if inner.operator == Operator::Negation => {
                inner.operands.first()
            }
            _ => None,
        }
    }

    /// A copy of this node with the same operator over new operands.
    pub(crate) fn with_operands(&self, operands: Operands) -> CompoundDiagram {
        debug_assert_eq!(operands.len(), self.operands.len());
        CompoundDiagram {
            operator: self.operator,
            operands,
        }
    }
}

impl SpiderDiagram {
    /// Builds a primary diagram node. See [`PrimaryDiagram::new`].
    pub fn primary<S, H, Z>(spiders: S, habitats: H, shaded_zones: Z) -> Result<Self, CoreError>
    where
        S: IntoIterator<Item = SpiderName>,
        H: IntoIterator<Item = (SpiderName, Region)>,
        Z: IntoIterator<Item = Zone>,
    {
        PrimaryDiagram::new(spiders, habitats, shaded_zones).map(SpiderDiagram::Primary)
    }

    /// Builds a compound diagram node. See [`CompoundDiagram::new`].
    pub fn compound<I>(operator: Operator, operands: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = Arc<SpiderDiagram>>,
    {
        CompoundDiagram::new(operator, operands).map(SpiderDiagram::Compound)
    }

    /// `~ operand`
    pub fn negation(operand: Arc<SpiderDiagram>) -> Self {
        let mut operands = Operands::new();
        operands.push(operand);
        SpiderDiagram::Compound(CompoundDiagram {
            operator: Operator::Negation,
            operands,
        })
    }

    /// `left <operator> right` for a binary operator.
    pub fn binary(
        operator: Operator,
        left: Arc<SpiderDiagram>,
        right: Arc<SpiderDiagram>,
    ) -> Result<Self, CoreError> {
        SpiderDiagram::compound(operator, [left, right])
    }

    /// Short name of the variant, for messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SpiderDiagram::Null => "null diagram",
            SpiderDiagram::Primary(_) => "primary diagram",
            SpiderDiagram::Compound(_) => "compound diagram",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SpiderDiagram::Null)
    }

    pub fn as_primary(&self) -> Option<&PrimaryDiagram> {
        match self {
            SpiderDiagram::Primary(psd) => Some(psd),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&CompoundDiagram> {
        match self {
            SpiderDiagram::Compound(csd) => Some(csd),
            _ => None,
        }
    }

    /// Number of nodes in this tree, the root included.
    pub fn subdiagram_count(&self) -> usize {
        match self {
            SpiderDiagram::Null | SpiderDiagram::Primary(_) => 1,
            SpiderDiagram::Compound(csd) => {
                1 + csd
                    .operands
                    .iter()
                    .map(|op| op.subdiagram_count())
                    .sum::<usize>()
            }
        }
    }

    /// The node at pre-order `index`, or `None` if the tree is smaller.
    pub fn subdiagram_at(&self, index: SubDiagramIndex) -> Option<&SpiderDiagram> {
        let mut stack = vec![self];
        let mut next = 0;
        while let Some(node) = stack.pop() {
            if next == index.0 {
                return Some(node);
            }
            next += 1;
            if let SpiderDiagram::Compound(csd) = node {
                stack.extend(csd.operands.iter().rev().map(Arc::as_ref));
            }
        }
        None
    }

    /// Size of the subtree rooted at every node, indexed by pre-order index.
    ///
    /// Computed in a single pass, so `sizes[0]` equals
    /// [`subdiagram_count`](Self::subdiagram_count).
    pub fn subtree_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::new();
        fill_subtree_sizes(self, &mut sizes);
        sizes
    }

    /// Every node of the tree with its pre-order index.
    pub fn subdiagrams(&self) -> Vec<(SubDiagramIndex, &SpiderDiagram)> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push((SubDiagramIndex(out.len()), node));
            if let SpiderDiagram::Compound(csd) = node {
                stack.extend(csd.operands.iter().rev().map(Arc::as_ref));
            }
        }
        out
    }
}

/// Records the subtree size of `node` and its descendants in pre-order,
/// returning the size of `node`'s subtree.
fn fill_subtree_sizes(node: &SpiderDiagram, sizes: &mut Vec<usize>) -> usize {
    let slot = sizes.len();
    sizes.push(1);
    if let SpiderDiagram::Compound(csd) = node {
        let size = 1 + csd
            .operands
            .iter()
            .map(|op| fill_subtree_sizes(op, sizes))
            .sum::<usize>();
        sizes[slot] = size;
    }
    sizes[slot]
}
