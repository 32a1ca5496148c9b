//! Logical operators combining sub-diagrams into compound diagrams.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A logical connective applied to the operands of a compound diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// `~ D`
    Negation,
    /// `D1 & D2`
    Conjunction,
    /// `D1 | D2`
    Disjunction,
    /// `D1 --> D2`. Operand order is significant.
    Implication,
    /// `D1 <--> D2`
    Equivalence,
}

/// Arity class of an [`Operator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arity {
    /// Exactly one operand.
    Unary,
    /// Exactly two operands.
    Binary,
}

impl Arity {
    /// Number of operands an operator of this class takes.
    pub fn operand_count(self) -> usize {
        match self {
            Arity::Unary => 1,
            Arity::Binary => 2,
        }
    }
}

impl Operator {
    /// All operators, in declaration order.
    pub const ALL: [Operator; 5] = [
        Operator::Negation,
        Operator::Conjunction,
        Operator::Disjunction,
        Operator::Implication,
        Operator::Equivalence,
    ];

    pub fn arity(self) -> Arity {
        match self {
            Operator::Negation => Arity::Unary,
            Operator::Conjunction
            | Operator::Disjunction
            | Operator::Implication
            | Operator::Equivalence => Arity::Binary,
        }
    }

    /// Canonical operator name, e.g. `op -->` for implication.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Negation => "op ~",
            Operator::Conjunction => "op &",
            Operator::Disjunction => "op |",
            Operator::Implication => "op -->",
            Operator::Equivalence => "op <-->",
        }
    }

    /// Looks up an operator by its [canonical name](Self::name).
    pub fn from_name(name: &str) -> Option<Operator> {
        Operator::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Whether swapping the operands leaves the meaning unchanged.
    pub fn is_commutative(self) -> bool {
        !matches!(self, Operator::Implication)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_name(op.name()), Some(op));
        }
        assert_eq!(Operator::from_name("op ?"), None);
    }

    #[test]
    fn only_negation_is_unary() {
        assert_eq!(Operator::Negation.arity().operand_count(), 1);
        for op in &Operator::ALL[1..] {
            assert_eq!(op.arity(), Arity::Binary);
        }
    }

    #[test]
    fn implication_is_not_commutative() {
        assert!(!Operator::Implication.is_commutative());
        assert!(Operator::Equivalence.is_commutative());
    }
}
