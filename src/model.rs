use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A fact value, coerced from the raw element text.
///
/// Kept as an explicit sum type so serialization and comparisons can match on
/// the variant; serialized untagged, a JSON consumer sees a native
/// boolean/number/string and can always distinguish a number from
/// numeric-looking text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Numeric value as an f64, if the variant is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{}", v),
        }
    }
}

/// The reporting period of a context: a single instant, or a duration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Period {
    Instant {
        instant: String,
    },
    #[serde(rename_all = "camelCase")]
    Duration {
        start_date: String,
        end_date: String,
    },
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Instant { instant } => write!(f, "on {}", instant),
            Period::Duration {
                start_date,
                end_date,
            } => write!(f, "from {} to {}", start_date, end_date),
        }
    }
}

/// One dimensional qualifier of a context, flattened from an
/// `explicitMember` declaration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub dimension: String,
    pub member: String,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.dimension, self.member)
    }
}

/// The reporting context shared by one or more facts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Context {
    pub entity: String,
    pub segments: Vec<Segment>,
    pub period: Period,
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity: {}, {}", self.entity, self.period)?;
        if !self.segments.is_empty() {
            let segments = self
                .segments
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, ", Segments: [{}]", segments)?;
        }
        Ok(())
    }
}

/// One reported data point.
///
/// Contexts are shared: many facts typically reference the same context, so
/// each fact holds an `Arc` to the immutable context built once during
/// resolution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub context: Arc<Context>,
    pub concept: String,
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fact{{{}, Concept: {}, Value: {}",
            self.context, self.concept, self.value
        )?;
        if let Some(decimals) = &self.decimals {
            write!(f, ", Decimals: {}", decimals)?;
        }
        if let Some(unit) = &self.unit {
            write!(f, ", Unit: {}", unit)?;
        }
        write!(f, "}}")
    }
}

/// The parsed document: all resolved facts in declaration order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Xbrl {
    pub facts: Vec<Fact>,
}

impl Xbrl {
    /// Only the facts whose value coerced to an integer or a float.
    pub fn numeric_facts(&self) -> Vec<&Fact> {
        self.facts.iter().filter(|f| f.value.is_numeric()).collect()
    }
}

impl fmt::Display for Xbrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let facts = self
            .facts
            .iter()
            .map(|fact| fact.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Xbrl{{Facts: [{}]}}", facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_context() -> Arc<Context> {
        Arc::new(Context {
            entity: "0000789019".to_string(),
            segments: vec![],
            period: Period::Instant {
                instant: "2023-06-30".to_string(),
            },
        })
    }

    #[test]
    fn test_fact_display() {
        let fact = Fact {
            context: instant_context(),
            concept: "Assets".to_string(),
            value: Value::Int(1_000_000),
            decimals: Some("-6".to_string()),
            unit: Some("USD".to_string()),
        };
        assert_eq!(
            fact.to_string(),
            "Fact{Entity: 0000789019, on 2023-06-30, Concept: Assets, Value: 1000000, Decimals: -6, Unit: USD}"
        );
    }

    #[test]
    fn test_context_display_with_segments() {
        let ctx = Context {
            entity: "0000789019".to_string(),
            segments: vec![Segment {
                dimension: "ProductLine".to_string(),
                member: "Software".to_string(),
            }],
            period: Period::Duration {
                start_date: "2023-01-01".to_string(),
                end_date: "2023-06-30".to_string(),
            },
        };
        assert_eq!(
            ctx.to_string(),
            "Entity: 0000789019, from 2023-01-01 to 2023-06-30, Segments: [ProductLine: Software]"
        );
    }

    #[test]
    fn test_numeric_facts_filter() {
        let ctx = instant_context();
        let xbrl = Xbrl {
            facts: vec![
                Fact {
                    context: ctx.clone(),
                    concept: "Assets".to_string(),
                    value: Value::Int(42),
                    decimals: None,
                    unit: Some("USD".to_string()),
                },
                Fact {
                    context: ctx.clone(),
                    concept: "Ratio".to_string(),
                    value: Value::Float(0.5),
                    decimals: None,
                    unit: Some("pure".to_string()),
                },
                Fact {
                    context: ctx,
                    concept: "Name".to_string(),
                    value: Value::Text("Microsoft".to_string()),
                    decimals: None,
                    unit: None,
                },
            ],
        };
        assert_eq!(xbrl.numeric_facts().len(), 2);
    }

    #[test]
    fn test_value_as_f64() {
        assert_eq!(Value::Int(2).as_f64(), Some(2.0));
        assert_eq!(Value::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::Bool(true).as_f64(), None);
        assert_eq!(Value::Text("2".to_string()).as_f64(), None);
    }
}
