use std::error::Error as StdError;
use std::fmt;

mod attr_policy;
mod builder;
mod call_shape;
mod document;
mod form_control_attrs;
mod media_link_attrs;
mod select_option_compose;

pub use attr_policy::{is_known_attribute, is_permitted, permitted_kinds};
pub use builder::{ChildSource, ChildSpec, ElementBuilder};
pub use call_shape::looks_like_function_call;
pub use document::Document;
pub use form_control_attrs::FormControlAttrs;
pub use media_link_attrs::{LinkAttrs, MediaAttrs};
pub use select_option_compose::{OptionSpec, SelectComposition};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    EmptyTagName,
    InvalidNode(NodeId),
    NotAnElement(NodeId),
    InvalidHandlerName(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTagName => write!(f, "tag name is empty"),
            Self::InvalidNode(node) => write!(f, "node does not exist: {}", node.0),
            Self::NotAnElement(node) => write!(f, "node is not an element: {}", node.0),
            Self::InvalidHandlerName(name) => write!(f, "invalid handler name: {name}"),
        }
    }
}

impl StdError for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    AbsentInput,
    UnknownAttribute,
    NotApplicableToKind,
    InvalidValue,
    MalformedHandlerExpression,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AbsentInput => write!(f, "absent input"),
            Self::UnknownAttribute => write!(f, "unknown attribute"),
            Self::NotApplicableToKind => write!(f, "not applicable to element kind"),
            Self::InvalidValue => write!(f, "invalid value"),
            Self::MalformedHandlerExpression => write!(f, "malformed handler expression"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub node: NodeId,
    pub tag_name: String,
    pub operation: String,
    pub reason: RejectReason,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rejected {} on <{}>: {}",
            self.operation, self.tag_name, self.reason
        )
    }
}
