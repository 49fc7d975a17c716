use thiserror::Error;

/// Document-level failures.
///
/// Per-fact problems (a dangling `contextRef` or `unitRef`) are not errors:
/// the resolver drops or degrades those facts instead. Only a document that
/// cannot be read at all is surfaced here.
#[derive(Debug, Error)]
pub enum XbrlError {
    /// The input is not well-formed XML.
    #[error("malformed document: {0}")]
    MalformedDocument(#[from] roxmltree::Error),

    /// The document parsed but its root is not an `xbrl` element.
    #[error("expected <xbrl> document root, found <{0}>")]
    UnexpectedRoot(String),
}
