use crate::document::Document;
use crate::{ElementBuilder, NodeId, RejectReason};

// Element kinds that may hold option children.
const OPTION_HOSTS: &[&str] = &["datalist", "optgroup", "select"];

// Transient option descriptor; consumed while composing, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSpec {
    pub value: String,
    pub selected: bool,
    pub body: String,
}

impl OptionSpec {
    pub fn new(value: &str, selected: bool, body: &str) -> Self {
        Self {
            value: value.to_string(),
            selected,
            body: body.to_string(),
        }
    }
}

// Select composition capability: builds option and optgroup subtrees beneath
// a select-like element.
pub trait SelectComposition: Sized {
    fn add_option(self, value: &str, selected: bool, body: &str) -> Self;
    fn add_options(self, entries: &[OptionSpec]) -> Self;
    fn add_option_group(self, label: &str, disabled: bool, entries: &[OptionSpec]) -> Self;
    fn selected(self) -> Self;
}

impl SelectComposition for ElementBuilder<'_> {
    fn add_option(self, value: &str, selected: bool, body: &str) -> Self {
        if !is_option_host(self.doc.tag_name(self.node)) {
            return self.reject("add_option", RejectReason::NotApplicableToKind);
        }
        let option = build_option(self.doc, value, selected, body);
        self.append(option)
    }

    fn add_options(mut self, entries: &[OptionSpec]) -> Self {
        for entry in entries {
            self = self.add_option(&entry.value, entry.selected, &entry.body);
        }
        self
    }

    fn add_option_group(self, label: &str, disabled: bool, entries: &[OptionSpec]) -> Self {
        if !self
            .doc
            .tag_name(self.node)
            .is_some_and(|tag| tag == "select")
        {
            return self.reject("add_option_group", RejectReason::NotApplicableToKind);
        }
        let group = self.doc.create_detached_element("optgroup".to_string());
        self.doc.set_attr(group, "label", label);
        if disabled {
            self.doc.set_attr(group, "disabled", "");
        }
        for entry in entries {
            let option = build_option(self.doc, &entry.value, entry.selected, &entry.body);
            self.doc.append_node(group, option);
        }
        self.append(group)
    }

    fn selected(self) -> Self {
        self.shared_flag("selected")
    }
}

fn is_option_host(tag_name: Option<&str>) -> bool {
    tag_name.is_some_and(|tag| OPTION_HOSTS.contains(&tag))
}

fn build_option(doc: &mut Document, value: &str, selected: bool, body: &str) -> NodeId {
    let option = doc.create_detached_element("option".to_string());
    doc.set_attr(option, "value", value);
    if selected {
        doc.set_attr(option, "selected", "");
    }
    doc.set_raw_markup(option, body);
    option
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;

    #[test]
    fn option_round_trips_value_flag_and_body() {
        let mut document = Document::new();
        let select = document.select().add_option("v1", true, "Label1").into_node();

        let children = document.element_children(select);
        assert_eq!(children.len(), 1);
        let option = children[0];
        assert_eq!(document.tag_name(option), Some("option"));
        assert_eq!(document.attr(option, "value").as_deref(), Some("v1"));
        assert!(document.selected(option));
        assert_eq!(document.raw_markup(option), Some("Label1"));
    }

    #[test]
    fn add_option_is_rejected_off_select_kinds() {
        let mut document = Document::new();
        let div = document
            .create("div")
            .unwrap()
            .add_option("v", false, "x")
            .into_node();
        assert!(document.element_children(div).is_empty());
        assert_eq!(
            document.rejections()[0].reason,
            RejectReason::NotApplicableToKind
        );
    }

    #[test]
    fn option_group_nests_its_entries() {
        let mut document = Document::new();
        let entries = [
            OptionSpec::new("a", false, "A"),
            OptionSpec::new("b", true, "B"),
        ];
        let select = document
            .select()
            .add_option_group("letters", true, &entries)
            .into_node();

        let groups = document.element_children(select);
        assert_eq!(groups.len(), 1);
        let group = groups[0];
        assert_eq!(document.tag_name(group), Some("optgroup"));
        assert_eq!(document.attr(group, "label").as_deref(), Some("letters"));
        assert!(document.disabled(group));

        let options = document.element_children(group);
        assert_eq!(options.len(), 2);
        assert_eq!(document.attr(options[0], "value").as_deref(), Some("a"));
        assert!(document.selected(options[1]));
        // The group append syncs the enclosing select's value.
        assert_eq!(document.value(select), "b");
    }

    #[test]
    fn option_group_is_rejected_off_select() {
        let mut document = Document::new();
        let datalist = document
            .create("datalist")
            .unwrap()
            .add_option_group("g", false, &[])
            .into_node();
        assert!(document.element_children(datalist).is_empty());
        assert_eq!(
            document.rejections()[0].reason,
            RejectReason::NotApplicableToKind
        );
    }
}
