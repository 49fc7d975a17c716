//! Extraction of structured facts from XBRL instance documents.
//!
//! The crate takes the raw text of an XBRL instance document and produces a
//! flat, document-ordered list of typed facts. Each fact carries its reporting
//! context (entity, period, dimensional segments), an optional unit of
//! measure, and a value coerced to boolean, integer, float, or cleaned text.
//!
//! ```
//! let doc = r#"<xbrl>
//!     <context id="c1">
//!         <entity><identifier>0000789019</identifier></entity>
//!         <period><instant>2023-06-30</instant></period>
//!     </context>
//!     <unit id="u1"><measure>iso4217:USD</measure></unit>
//!     <Assets contextRef="c1" unitRef="u1" decimals="-6">1000000</Assets>
//! </xbrl>"#;
//!
//! let xbrl = xbrl_facts::parse(doc).unwrap();
//! assert_eq!(xbrl.facts.len(), 1);
//! assert_eq!(xbrl.facts[0].concept, "Assets");
//! ```

pub mod error;
pub mod model;
pub mod reader;
pub mod resolver;
pub mod text;

// Re-exports
pub use error::XbrlError;
pub use model::{Context, Fact, Period, Segment, Value, Xbrl};
pub use resolver::XbrlParser;

/// Parse an XBRL instance document with the default parser configuration.
pub fn parse(content: &str) -> Result<Xbrl, XbrlError> {
    XbrlParser::new().parse(content)
}
