use crate::attr_policy;
use crate::call_shape;
use crate::document::Document;
use crate::{HandlerId, NodeId, RejectReason, Rejection};

// One concrete wrapper around one element node. Element-family capabilities
// (form controls, media, links, select composition) are separate traits
// implemented for this type; every mutator funnels through the same policy
// tables and the same rejection channel.
//
// Mutators never fail the chain: a rejected call returns the builder
// unchanged and records a `Rejection` on the document.
#[derive(Debug)]
pub struct ElementBuilder<'d> {
    pub(crate) doc: &'d mut Document,
    pub(crate) node: NodeId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildSpec {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildSource {
    Spec(ChildSpec),
    Node(NodeId),
}

impl From<ChildSpec> for ChildSource {
    fn from(spec: ChildSpec) -> Self {
        Self::Spec(spec)
    }
}

impl From<NodeId> for ChildSource {
    fn from(node: NodeId) -> Self {
        Self::Node(node)
    }
}

impl<'d> ElementBuilder<'d> {
    pub(crate) fn new(doc: &'d mut Document, node: NodeId) -> Self {
        Self { doc, node }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn into_node(self) -> NodeId {
        self.node
    }

    pub fn id(self, id: &str) -> Self {
        self.doc.set_attr(self.node, "id", id);
        self
    }

    pub fn class(self, class_name: &str) -> Self {
        if class_name.trim().is_empty() {
            return self.reject("class", RejectReason::AbsentInput);
        }
        self.doc.class_add(self.node, class_name.trim());
        self
    }

    pub fn classes<I, S>(mut self, class_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for class_name in class_names {
            self = self.class(class_name.as_ref());
        }
        self
    }

    pub fn text_content(self, text: &str) -> Self {
        self.doc.set_text_content(self.node, text);
        self
    }

    // No layout exists to distinguish innerText from textContent here; both
    // replace the node's content with one text child.
    pub fn inner_text(self, text: &str) -> Self {
        self.text_content(text)
    }

    pub fn raw_markup(self, markup: &str) -> Self {
        self.doc.set_raw_markup(self.node, markup);
        self
    }

    pub fn draggable(self) -> Self {
        self.doc.set_attr(self.node, "draggable", "true");
        self
    }

    pub fn attr(self, name: &str, value: &str) -> Self {
        let lowered = name.trim().to_ascii_lowercase();
        if lowered.is_empty() {
            return self.reject("attr", RejectReason::AbsentInput);
        }
        if lowered.starts_with("data-") {
            self.doc.set_attr(self.node, &lowered, value);
            return self;
        }
        if !attr_policy::is_known_attribute(&lowered) {
            return self.reject(&lowered, RejectReason::UnknownAttribute);
        }
        if !attr_policy::is_permitted(self.tag(), &lowered) {
            return self.reject(&lowered, RejectReason::NotApplicableToKind);
        }
        if let Some(allowed) = attr_policy::enum_values(&lowered) {
            if !allowed.contains(&value) {
                return self.reject(&lowered, RejectReason::InvalidValue);
            }
        }
        if attr_policy::is_event_handler(&lowered) && !call_shape::looks_like_function_call(value) {
            return self.reject(&lowered, RejectReason::MalformedHandlerExpression);
        }
        self.doc.set_attr(self.node, &lowered, value);
        self
    }

    pub fn data_attr(self, name: &str, value: &str) -> Self {
        let name = name.trim();
        if name.is_empty() || value.is_empty() {
            return self.reject("data_attr", RejectReason::AbsentInput);
        }
        let lowered = name.to_ascii_lowercase();
        let full = if lowered.starts_with("data-") {
            lowered
        } else {
            format!("data-{lowered}")
        };
        self.doc.set_attr(self.node, &full, value);
        self
    }

    pub fn on_click(self, handler: HandlerId) -> Self {
        if self.doc.handler_name(handler).is_none() {
            return self.reject("on_click", RejectReason::InvalidValue);
        }
        self.doc.set_click_handler(self.node, handler);
        self
    }

    pub fn add_child(self, child: impl Into<ChildSource>) -> Self {
        match child.into() {
            ChildSource::Spec(spec) => {
                let tag = spec.tag.trim();
                if tag.is_empty() {
                    return self.reject("add_child", RejectReason::AbsentInput);
                }
                let child_node = self.doc.create_detached_element(tag.to_ascii_lowercase());
                let mut child = ElementBuilder::new(&mut *self.doc, child_node);
                if let Some(id) = &spec.id {
                    child = child.id(id);
                }
                child = child.classes(&spec.classes);
                if let Some(text) = &spec.text {
                    child = child.text_content(text);
                }
                drop(child);
                self.append(child_node)
            }
            ChildSource::Node(node) => self.append(node),
        }
    }

    pub fn add_children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ChildSource>,
    {
        for child in children {
            self = self.add_child(child);
        }
        self
    }

    pub fn append(self, child: NodeId) -> Self {
        if !self.doc.append_node(self.node, child) {
            return self.reject("append", RejectReason::AbsentInput);
        }
        self
    }

    pub fn append_to(self, target: NodeId) -> Self {
        if !self.doc.append_node(target, self.node) {
            return self.reject("append_to", RejectReason::AbsentInput);
        }
        self
    }

    pub(crate) fn shared_attr(self, name: &str, value: &str) -> Self {
        if !attr_policy::is_permitted(self.tag(), name) {
            return self.reject(name, RejectReason::NotApplicableToKind);
        }
        if let Some(allowed) = attr_policy::enum_values(name) {
            if !allowed.contains(&value) {
                return self.reject(name, RejectReason::InvalidValue);
            }
        }
        self.doc.set_attr(self.node, name, value);
        self
    }

    // Boolean attributes carry presence semantics; the stored value is empty.
    pub(crate) fn shared_flag(self, name: &str) -> Self {
        self.shared_attr(name, "")
    }

    pub(crate) fn reject(self, operation: &str, reason: RejectReason) -> Self {
        let rejection = Rejection {
            node: self.node,
            tag_name: self.tag().to_string(),
            operation: operation.to_string(),
            reason,
        };
        self.doc.push_rejection(rejection);
        self
    }

    fn tag(&self) -> &str {
        self.doc.tag_name(self.node).unwrap_or_default()
    }
}
