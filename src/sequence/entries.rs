use std::fmt;
use std::str::FromStr;

use crate::numeric::{NumericError, NumericValue, Operator};

use super::generator::SequenceStep;

/// What a board token holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Number,
    Operator,
}

/// A single token placed on a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entry {
    Number(NumericValue),
    Operator(Operator),
}

impl Entry {
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Number(_) => EntryKind::Number,
            Entry::Operator(_) => EntryKind::Operator,
        }
    }

    pub fn as_number(&self) -> Option<NumericValue> {
        match self {
            Entry::Number(value) => Some(*value),
            Entry::Operator(_) => None,
        }
    }

    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Entry::Operator(op) => Some(*op),
            Entry::Number(_) => None,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Number(value) => write!(f, "{}", value),
            Entry::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// Reads cell text back into a token: numbers and `n/d` fractions first,
/// then operator symbols.
impl FromStr for Entry {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(value) = s.parse::<NumericValue>() {
            return Ok(Entry::Number(value));
        }
        s.parse::<Operator>().map(Entry::Operator)
    }
}

/// Flattens a chain into board tokens.
///
/// Token 0 is the first step's `num1`; every step then contributes its
/// operator, `num2` and result, so `n` steps yield `3n + 1` tokens.
pub fn sequence_to_entries(steps: &[SequenceStep]) -> Vec<Entry> {
    let Some(first) = steps.first() else {
        return Vec::new();
    };
    let mut entries = Vec::with_capacity(1 + 3 * steps.len());
    entries.push(Entry::Number(first.num1));
    for step in steps {
        entries.push(Entry::Operator(step.operator));
        entries.push(Entry::Number(step.num2));
        entries.push(Entry::Number(step.result));
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Fraction;

    fn int(n: i64) -> NumericValue {
        NumericValue::Integer(n)
    }

    fn steps() -> Vec<SequenceStep> {
        vec![
            SequenceStep {
                num1: int(7),
                operator: Operator::Add,
                num2: int(5),
                result: int(12),
            },
            SequenceStep {
                num1: int(12),
                operator: Operator::Divide,
                num2: int(4),
                result: int(3),
            },
        ]
    }

    #[test]
    fn flattens_in_chain_order() {
        let entries = sequence_to_entries(&steps());
        assert_eq!(
            entries,
            vec![
                Entry::Number(int(7)),
                Entry::Operator(Operator::Add),
                Entry::Number(int(5)),
                Entry::Number(int(12)),
                Entry::Operator(Operator::Divide),
                Entry::Number(int(4)),
                Entry::Number(int(3)),
            ]
        );
        assert_eq!(entries, sequence_to_entries(&steps()));
        assert!(sequence_to_entries(&[]).is_empty());
    }

    #[test]
    fn kinds_and_text() {
        let entries = sequence_to_entries(&steps());
        let kinds: Vec<_> = entries.iter().take(4).map(Entry::kind).collect();
        assert_eq!(
            kinds,
            vec![
                EntryKind::Number,
                EntryKind::Operator,
                EntryKind::Number,
                EntryKind::Number
            ]
        );
        assert_eq!("x".parse::<Entry>(), Ok(Entry::Operator(Operator::Multiply)));
        assert_eq!(
            "2/3".parse::<Entry>(),
            Ok(Entry::Number(Fraction::new(2, 3).unwrap().into()))
        );
        assert_eq!(Entry::Operator(Operator::Subtract).to_string(), "-");
    }
}
