//! Document Reader: raw XML text to a schema-shaped intermediate form.
//!
//! No semantic interpretation happens here. Missing attributes and text
//! become empty or absent values; resolving references and normalizing names
//! is the resolver's job.

use crate::error::XbrlError;
use roxmltree::{Document, Node};

/// Everything collected from one instance document, unresolved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawDocument {
    pub units: Vec<RawUnit>,
    pub contexts: Vec<RawContext>,
    pub facts: Vec<RawFact>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RawUnit {
    pub id: String,
    pub measure: Option<String>,
    pub numerator: Option<String>,
    pub denominator: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawPeriod {
    pub instant: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RawMember {
    pub dimension: String,
    pub member: String,
}

/// One `segment` block; a context may declare several.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawSegment {
    pub members: Vec<RawMember>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RawContext {
    pub id: String,
    pub entity: String,
    pub period: RawPeriod,
    pub segments: Vec<RawSegment>,
}

/// A candidate fact: any top-level element that is not a declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct RawFact {
    pub name: String,
    pub context_ref: Option<String>,
    pub unit_ref: Option<String>,
    pub decimals: Option<String>,
    pub text: String,
}

const NON_FACT_ELEMENTS: [&str; 3] = ["context", "unit", "schemaRef"];

/// Parse the document text and collect units, contexts, and candidate facts.
pub fn read_document(content: &str) -> Result<RawDocument, XbrlError> {
    let tree = Document::parse(content)?;
    let root = tree.root_element();
    if root.tag_name().name() != "xbrl" {
        return Err(XbrlError::UnexpectedRoot(
            root.tag_name().name().to_string(),
        ));
    }

    let mut raw = RawDocument::default();

    for child in root.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "unit" => raw.units.push(read_unit(child)),
            "context" => raw.contexts.push(read_context(child)),
            name if !NON_FACT_ELEMENTS.contains(&name) => raw.facts.push(read_fact(child)),
            _ => {}
        }
    }

    Ok(raw)
}

fn child_named<'a, 'i>(node: Node<'a, 'i>, name: &str) -> Option<Node<'a, 'i>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

fn child_text(node: Node, name: &str) -> Option<String> {
    child_named(node, name)
        .and_then(|n| n.text())
        .map(str::to_string)
}

fn read_unit(node: Node) -> RawUnit {
    let divide = child_named(node, "divide");
    RawUnit {
        id: node.attribute("id").unwrap_or("").to_string(),
        measure: child_text(node, "measure"),
        numerator: divide
            .and_then(|d| child_named(d, "unitNumerator"))
            .and_then(|n| child_text(n, "measure")),
        denominator: divide
            .and_then(|d| child_named(d, "unitDenominator"))
            .and_then(|n| child_text(n, "measure")),
    }
}

fn read_context(node: Node) -> RawContext {
    let entity = child_named(node, "entity")
        .and_then(|e| child_text(e, "identifier"))
        .unwrap_or_default();

    let mut period = RawPeriod::default();
    if let Some(period_node) = child_named(node, "period") {
        period.instant = child_text(period_node, "instant");
        period.start_date = child_text(period_node, "startDate");
        period.end_date = child_text(period_node, "endDate");
    }

    // Segment blocks sit under the entity element; encounter order matters.
    let mut segments = Vec::new();
    for segment_node in node
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "segment")
    {
        let mut segment = RawSegment::default();
        for member in segment_node
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "explicitMember")
        {
            segment.members.push(RawMember {
                dimension: member.attribute("dimension").unwrap_or("").to_string(),
                member: member.text().unwrap_or("").to_string(),
            });
        }
        segments.push(segment);
    }

    RawContext {
        id: node.attribute("id").unwrap_or("").to_string(),
        entity,
        period,
        segments,
    }
}

fn read_fact(node: Node) -> RawFact {
    RawFact {
        name: node.tag_name().name().to_string(),
        context_ref: node.attribute("contextRef").map(str::to_string),
        unit_ref: node.attribute("unitRef").map(str::to_string),
        decimals: node.attribute("decimals").map(str::to_string),
        text: node.text().unwrap_or("").to_string(),
    }
}
