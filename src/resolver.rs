//! Fact Resolver: turns the raw intermediate form into the final fact list.
//!
//! Two passes. The first indexes units and contexts by their declared
//! identifiers; the second walks the candidate facts in document order and
//! resolves each one against those tables. Bad references never abort the
//! document: a fact with an unknown context is dropped, a fact with an
//! unknown unit is kept as text.

use crate::error::XbrlError;
use crate::model::{Context, Fact, Period, Segment, Value, Xbrl};
use crate::reader::{self, RawContext, RawUnit};
use crate::text::{clean_text, coerce_value, local_name};
use std::collections::HashMap;
use std::sync::Arc;

/// Configurable XBRL parser.
///
/// ```
/// use xbrl_facts::XbrlParser;
///
/// let parser = XbrlParser::new().strip_convention_suffixes(true);
/// let xbrl = parser.parse("<xbrl></xbrl>").unwrap();
/// assert!(xbrl.facts.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct XbrlParser {
    strip_convention_suffixes: bool,
}

impl XbrlParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also strip the conventional "Axis"/"Member" suffixes from segment
    /// dimension and member names. Off by default; namespace-prefix
    /// stripping always happens.
    pub fn strip_convention_suffixes(mut self, strip: bool) -> Self {
        self.strip_convention_suffixes = strip;
        self
    }

    /// Parse an instance document into its resolved fact list.
    pub fn parse(&self, content: &str) -> Result<Xbrl, XbrlError> {
        let raw = reader::read_document(content)?;

        let units = build_unit_table(&raw.units);
        let contexts = self.build_context_table(&raw.contexts);

        let mut facts = Vec::with_capacity(raw.facts.len());
        for fact in &raw.facts {
            let context = match fact.context_ref.as_ref().and_then(|r| contexts.get(r)) {
                Some(context) => Arc::clone(context),
                None => {
                    log::debug!(
                        "dropping fact {}: unresolved context {:?}",
                        fact.name,
                        fact.context_ref
                    );
                    continue;
                }
            };

            let unit = fact
                .unit_ref
                .as_ref()
                .and_then(|r| units.get(r))
                .cloned();
            if fact.unit_ref.is_some() && unit.is_none() {
                log::debug!(
                    "fact {}: unresolved unit {:?}, keeping value as text",
                    fact.name,
                    fact.unit_ref
                );
            }

            // Only a resolved unit licenses numeric coercion.
            let value = match unit {
                Some(_) => coerce_value(&fact.text),
                None => Value::Text(clean_text(&fact.text)),
            };

            facts.push(Fact {
                context,
                concept: fact.name.clone(),
                value,
                decimals: fact.decimals.clone(),
                unit,
            });
        }

        Ok(Xbrl { facts })
    }

    fn build_context_table(&self, raw: &[RawContext]) -> HashMap<String, Arc<Context>> {
        let mut contexts = HashMap::new();
        for ctx in raw {
            // Flatten explicit members across all segment blocks, in
            // encounter order.
            let mut segments = Vec::new();
            for segment in &ctx.segments {
                for member in &segment.members {
                    segments.push(Segment {
                        dimension: self.normalize_name(&member.dimension, "Axis"),
                        member: self.normalize_name(&member.member, "Member"),
                    });
                }
            }

            let period = match &ctx.period.instant {
                Some(instant) => Period::Instant {
                    instant: instant.clone(),
                },
                None => Period::Duration {
                    start_date: ctx.period.start_date.clone().unwrap_or_default(),
                    end_date: ctx.period.end_date.clone().unwrap_or_default(),
                },
            };

            // Duplicate identifiers: last declaration wins.
            contexts.insert(
                ctx.id.clone(),
                Arc::new(Context {
                    entity: ctx.entity.clone(),
                    segments,
                    period,
                }),
            );
        }
        contexts
    }

    fn normalize_name(&self, name: &str, suffix: &str) -> String {
        let local = local_name(name);
        if self.strip_convention_suffixes {
            local.strip_suffix(suffix).unwrap_or(local).to_string()
        } else {
            local.to_string()
        }
    }
}

fn build_unit_table(raw: &[RawUnit]) -> HashMap<String, String> {
    let mut units = HashMap::new();
    for unit in raw {
        let measure = match (&unit.numerator, &unit.denominator) {
            (Some(num), Some(den)) if !num.is_empty() && !den.is_empty() => {
                format!("{}/{}", local_name(num), local_name(den))
            }
            _ => local_name(unit.measure.as_deref().unwrap_or("")).to_string(),
        };
        log::debug!("unit {} -> {}", unit.id, measure);
        units.insert(unit.id.clone(), measure);
    }
    units
}
