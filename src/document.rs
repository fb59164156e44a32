use std::collections::HashMap;

use crate::builder::ElementBuilder;
use crate::call_shape::is_identifier;
use crate::{Error, HandlerId, NodeId, Rejection, Result};

#[derive(Debug, Clone)]
pub(crate) enum NodeType {
    Document,
    Element(Element),
    Text(String),
    // Opaque markup payload; never parsed.
    RawMarkup(String),
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) node_type: NodeType,
}

#[derive(Debug, Clone)]
pub(crate) struct Element {
    pub(crate) tag_name: String,
    pub(crate) attrs: HashMap<String, String>,
    pub(crate) value: String,
    pub(crate) checked: bool,
    pub(crate) disabled: bool,
    pub(crate) required: bool,
    pub(crate) selected: bool,
    pub(crate) click_handler: Option<HandlerId>,
}

impl Element {
    fn new(tag_name: String) -> Self {
        Self {
            tag_name,
            attrs: HashMap::new(),
            value: String::new(),
            checked: false,
            disabled: false,
            required: false,
            selected: false,
            click_handler: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    id_index: HashMap<String, NodeId>,
    handlers: Vec<String>,
    rejections: Vec<Rejection>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let root = Node {
            parent: None,
            children: Vec::new(),
            node_type: NodeType::Document,
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
            id_index: HashMap::new(),
            handlers: Vec::new(),
            rejections: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn create(&mut self, tag_name: &str) -> Result<ElementBuilder<'_>> {
        let tag_name = tag_name.trim();
        if tag_name.is_empty() {
            return Err(Error::EmptyTagName);
        }
        let node = self.create_detached_element(tag_name.to_ascii_lowercase());
        Ok(ElementBuilder::new(self, node))
    }

    pub fn edit(&mut self, node: NodeId) -> Result<ElementBuilder<'_>> {
        if !self.is_valid_node(node) {
            return Err(Error::InvalidNode(node));
        }
        if self.element(node).is_none() {
            return Err(Error::NotAnElement(node));
        }
        Ok(ElementBuilder::new(self, node))
    }

    pub fn form(&mut self) -> ElementBuilder<'_> {
        let node = self.create_detached_element("form".to_string());
        ElementBuilder::new(self, node)
    }

    pub fn select(&mut self) -> ElementBuilder<'_> {
        let node = self.create_detached_element("select".to_string());
        ElementBuilder::new(self, node)
    }

    pub fn audio(&mut self) -> ElementBuilder<'_> {
        let node = self.create_detached_element("audio".to_string());
        ElementBuilder::new(self, node)
    }

    pub fn video(&mut self) -> ElementBuilder<'_> {
        let node = self.create_detached_element("video".to_string());
        ElementBuilder::new(self, node)
    }

    pub fn register_handler(&mut self, name: &str) -> Result<HandlerId> {
        if !is_identifier(name) {
            return Err(Error::InvalidHandlerName(name.to_string()));
        }
        if let Some(index) = self.handlers.iter().position(|known| known == name) {
            return Ok(HandlerId(index));
        }
        self.handlers.push(name.to_string());
        Ok(HandlerId(self.handlers.len() - 1))
    }

    pub fn handler_name(&self, handler: HandlerId) -> Option<&str> {
        self.handlers.get(handler.0).map(String::as_str)
    }

    pub(crate) fn create_detached_element(&mut self, tag_name: String) -> NodeId {
        tracing::trace!(tag = %tag_name, "created element");
        self.create_node(NodeType::Element(Element::new(tag_name)))
    }

    fn create_node(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: None,
            children: Vec::new(),
            node_type,
        });
        id
    }

    pub(crate) fn is_valid_node(&self, node_id: NodeId) -> bool {
        node_id.0 < self.nodes.len()
    }

    pub(crate) fn element(&self, node_id: NodeId) -> Option<&Element> {
        match self.nodes.get(node_id.0).map(|node| &node.node_type) {
            Some(NodeType::Element(element)) => Some(element),
            _ => None,
        }
    }

    pub(crate) fn element_mut(&mut self, node_id: NodeId) -> Option<&mut Element> {
        match self.nodes.get_mut(node_id.0).map(|node| &mut node.node_type) {
            Some(NodeType::Element(element)) => Some(element),
            _ => None,
        }
    }

    pub fn tag_name(&self, node_id: NodeId) -> Option<&str> {
        self.element(node_id).map(|e| e.tag_name.as_str())
    }

    pub fn parent(&self, node_id: NodeId) -> Option<NodeId> {
        self.nodes.get(node_id.0).and_then(|node| node.parent)
    }

    pub fn children(&self, node_id: NodeId) -> &[NodeId] {
        self.nodes
            .get(node_id.0)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn element_children(&self, node_id: NodeId) -> Vec<NodeId> {
        self.children(node_id)
            .iter()
            .copied()
            .filter(|child| self.element(*child).is_some())
            .collect()
    }

    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.id_index.get(id).copied()
    }

    pub fn attr(&self, node_id: NodeId, name: &str) -> Option<String> {
        self.element(node_id)
            .and_then(|e| e.attrs.get(&name.to_ascii_lowercase()).cloned())
    }

    pub fn has_attr(&self, node_id: NodeId, name: &str) -> bool {
        self.element(node_id)
            .map(|e| e.attrs.contains_key(&name.to_ascii_lowercase()))
            .unwrap_or(false)
    }

    pub fn value(&self, node_id: NodeId) -> String {
        self.element(node_id)
            .map(|e| e.value.clone())
            .unwrap_or_default()
    }

    pub fn checked(&self, node_id: NodeId) -> bool {
        self.element(node_id).map(|e| e.checked).unwrap_or(false)
    }

    pub fn disabled(&self, node_id: NodeId) -> bool {
        self.element(node_id).map(|e| e.disabled).unwrap_or(false)
    }

    pub fn required(&self, node_id: NodeId) -> bool {
        self.element(node_id).map(|e| e.required).unwrap_or(false)
    }

    pub fn selected(&self, node_id: NodeId) -> bool {
        self.element(node_id).map(|e| e.selected).unwrap_or(false)
    }

    pub fn click_handler(&self, node_id: NodeId) -> Option<HandlerId> {
        self.element(node_id).and_then(|e| e.click_handler)
    }

    pub fn classes(&self, node_id: NodeId) -> Vec<String> {
        self.element(node_id)
            .map(|e| class_tokens(e.attrs.get("class").map(String::as_str)))
            .unwrap_or_default()
    }

    pub fn text_content(&self, node_id: NodeId) -> String {
        match self.nodes.get(node_id.0).map(|node| &node.node_type) {
            Some(NodeType::Document) | Some(NodeType::Element(_)) => {
                let mut out = String::new();
                for child in self.children(node_id) {
                    out.push_str(&self.text_content(*child));
                }
                out
            }
            Some(NodeType::Text(text)) => text.clone(),
            Some(NodeType::RawMarkup(_)) | None => String::new(),
        }
    }

    pub fn raw_markup(&self, node_id: NodeId) -> Option<&str> {
        match self.children(node_id) {
            [child] => match &self.nodes[child.0].node_type {
                NodeType::RawMarkup(markup) => Some(markup.as_str()),
                _ => None,
            },
            _ => None,
        }
    }

    pub(crate) fn set_attr(&mut self, node_id: NodeId, name: &str, value: &str) {
        let lowered = name.to_ascii_lowercase();
        let old_id = if lowered == "id" {
            self.element(node_id)
                .and_then(|element| element.attrs.get("id").cloned())
        } else {
            None
        };
        let is_option = {
            let Some(element) = self.element_mut(node_id) else {
                return;
            };
            let is_option = element.tag_name.eq_ignore_ascii_case("option");
            element.attrs.insert(lowered.clone(), value.to_string());

            if lowered == "value" {
                element.value = value.to_string();
            } else if lowered == "checked" {
                element.checked = true;
            } else if lowered == "disabled" {
                element.disabled = true;
            } else if lowered == "required" {
                element.required = true;
            } else if lowered == "selected" {
                element.selected = true;
            }
            is_option
        };

        if lowered == "id" {
            if let Some(old) = old_id {
                self.id_index.remove(&old);
            }
            if !value.is_empty() {
                self.id_index.insert(value.to_string(), node_id);
            }
        }

        if is_option && (lowered == "selected" || lowered == "value") {
            if let Some(select) = self.enclosing_select(node_id) {
                self.sync_select_value(select);
            }
        }
    }

    pub(crate) fn set_click_handler(&mut self, node_id: NodeId, handler: HandlerId) {
        if let Some(element) = self.element_mut(node_id) {
            element.click_handler = Some(handler);
        }
    }

    pub(crate) fn class_add(&mut self, node_id: NodeId, class_name: &str) {
        let Some(element) = self.element_mut(node_id) else {
            return;
        };
        let mut classes = class_tokens(element.attrs.get("class").map(String::as_str));
        if !classes.iter().any(|name| name == class_name) {
            classes.push(class_name.to_string());
        }
        set_class_attr(element, &classes);
    }

    pub(crate) fn set_text_content(&mut self, node_id: NodeId, value: &str) {
        if self.element(node_id).is_none() {
            return;
        }
        self.detach_children(node_id);
        if !value.is_empty() {
            let text = self.create_node(NodeType::Text(value.to_string()));
            self.nodes[text.0].parent = Some(node_id);
            self.nodes[node_id.0].children.push(text);
        }
    }

    pub(crate) fn set_raw_markup(&mut self, node_id: NodeId, markup: &str) {
        if self.element(node_id).is_none() {
            return;
        }
        self.detach_children(node_id);
        if !markup.is_empty() {
            let raw = self.create_node(NodeType::RawMarkup(markup.to_string()));
            self.nodes[raw.0].parent = Some(node_id);
            self.nodes[node_id.0].children.push(raw);
        }
    }

    fn detach_children(&mut self, node_id: NodeId) {
        let old_children = std::mem::take(&mut self.nodes[node_id.0].children);
        for child in old_children {
            self.nodes[child.0].parent = None;
        }
    }

    pub(crate) fn append_node(&mut self, parent: NodeId, child: NodeId) -> bool {
        if !self.is_valid_node(parent) || !self.is_valid_node(child) {
            return false;
        }
        if child == self.root || child == parent {
            return false;
        }
        if !self.can_have_children(parent) {
            return false;
        }

        // Prevent cycles: parent must not be inside child's subtree.
        let mut cursor = Some(parent);
        while let Some(node) = cursor {
            if node == child {
                return false;
            }
            cursor = self.parent(node);
        }

        if let Some(old_parent) = self.parent(child) {
            self.nodes[old_parent.0].children.retain(|id| *id != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);

        if let Some(select) = self.enclosing_select(parent) {
            self.sync_select_value(select);
        }
        true
    }

    fn can_have_children(&self, node_id: NodeId) -> bool {
        matches!(
            self.nodes.get(node_id.0).map(|node| &node.node_type),
            Some(NodeType::Document) | Some(NodeType::Element(_))
        )
    }

    fn enclosing_select(&self, node_id: NodeId) -> Option<NodeId> {
        let mut cursor = Some(node_id);
        while let Some(node) = cursor {
            if self
                .tag_name(node)
                .is_some_and(|tag| tag.eq_ignore_ascii_case("select"))
            {
                return Some(node);
            }
            cursor = self.parent(node);
        }
        None
    }

    // A select's value tracks the last selected descendant option, falling
    // back to the first option in tree order.
    fn sync_select_value(&mut self, select: NodeId) {
        let options = self.descendant_options(select);
        let chosen = options
            .iter()
            .rev()
            .find(|option| self.selected(**option))
            .or_else(|| options.first())
            .copied();
        let value = chosen.map(|option| self.value(option)).unwrap_or_default();
        if let Some(element) = self.element_mut(select) {
            element.value = value;
        }
    }

    fn descendant_options(&self, node_id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        for child in self.children(node_id) {
            if self
                .tag_name(*child)
                .is_some_and(|tag| tag.eq_ignore_ascii_case("option"))
            {
                out.push(*child);
            }
            out.extend(self.descendant_options(*child));
        }
        out
    }

    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    pub fn take_rejections(&mut self) -> Vec<Rejection> {
        std::mem::take(&mut self.rejections)
    }

    pub(crate) fn push_rejection(&mut self, rejection: Rejection) {
        tracing::debug!(
            node = rejection.node.0,
            tag = %rejection.tag_name,
            operation = %rejection.operation,
            reason = %rejection.reason,
            "mutation rejected",
        );
        self.rejections.push(rejection);
    }
}

fn class_tokens(class_attr: Option<&str>) -> Vec<String> {
    class_attr
        .unwrap_or_default()
        .split_ascii_whitespace()
        .map(str::to_string)
        .collect()
}

fn set_class_attr(element: &mut Element, classes: &[String]) {
    element.attrs.insert("class".to_string(), classes.join(" "));
}
