use crate::ElementBuilder;

// Form-control capability. Implemented for every builder; calls on element
// kinds outside each attribute's applicability set are rejected at runtime.
pub trait FormControlAttrs: Sized {
    fn required(self) -> Self;
    fn checked(self) -> Self;
    fn autofocus(self) -> Self;
    fn disabled(self) -> Self;
    fn placeholder(self, placeholder: &str) -> Self;
    fn value(self, value: &str) -> Self;
    fn name(self, name: &str) -> Self;
    fn min(self, min: &str) -> Self;
    fn max(self, max: &str) -> Self;
    fn min_length(self, min_length: &str) -> Self;
    fn max_length(self, max_length: &str) -> Self;
    fn size(self, size: &str) -> Self;
    fn html_for(self, target_id: &str) -> Self;
    fn action(self, action: &str) -> Self;
    fn method(self, method: &str) -> Self;
}

impl FormControlAttrs for ElementBuilder<'_> {
    fn required(self) -> Self {
        self.shared_flag("required")
    }

    fn checked(self) -> Self {
        self.shared_flag("checked")
    }

    fn autofocus(self) -> Self {
        self.shared_flag("autofocus")
    }

    fn disabled(self) -> Self {
        self.shared_flag("disabled")
    }

    fn placeholder(self, placeholder: &str) -> Self {
        self.shared_attr("placeholder", placeholder)
    }

    fn value(self, value: &str) -> Self {
        self.shared_attr("value", value)
    }

    fn name(self, name: &str) -> Self {
        self.shared_attr("name", name)
    }

    fn min(self, min: &str) -> Self {
        self.shared_attr("min", min)
    }

    fn max(self, max: &str) -> Self {
        self.shared_attr("max", max)
    }

    fn min_length(self, min_length: &str) -> Self {
        self.shared_attr("minlength", min_length)
    }

    fn max_length(self, max_length: &str) -> Self {
        self.shared_attr("maxlength", max_length)
    }

    fn size(self, size: &str) -> Self {
        self.shared_attr("size", size)
    }

    fn html_for(self, target_id: &str) -> Self {
        self.shared_attr("for", target_id)
    }

    fn action(self, action: &str) -> Self {
        self.shared_attr("action", &action.to_ascii_lowercase())
    }

    fn method(self, method: &str) -> Self {
        self.shared_attr("method", &method.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Document, RejectReason};

    #[test]
    fn checked_applies_to_input_only() {
        let mut document = Document::new();
        let input = document.create("input").unwrap().checked().into_node();
        assert!(document.checked(input));
        assert!(document.has_attr(input, "checked"));

        let anchor = document.create("a").unwrap().checked().into_node();
        assert!(!document.checked(anchor));
        assert!(!document.has_attr(anchor, "checked"));
        assert_eq!(
            document.rejections()[0].reason,
            RejectReason::NotApplicableToKind
        );
        assert_eq!(document.rejections()[0].tag_name, "a");
    }

    #[test]
    fn form_action_and_method_are_lowercased() {
        let mut document = Document::new();
        let form = document
            .form()
            .action("HTTPS://X.TEST/SUBMIT")
            .method("POST")
            .into_node();
        assert_eq!(
            document.attr(form, "action").as_deref(),
            Some("https://x.test/submit")
        );
        assert_eq!(document.attr(form, "method").as_deref(), Some("post"));
    }

    #[test]
    fn action_is_rejected_off_form() {
        let mut document = Document::new();
        let node = document.create("div").unwrap().action("x").into_node();
        assert!(!document.has_attr(node, "action"));
        assert_eq!(
            document.rejections()[0].reason,
            RejectReason::NotApplicableToKind
        );
    }

    #[test]
    fn range_attributes_follow_the_shared_table() {
        let mut document = Document::new();
        let meter = document
            .create("meter")
            .unwrap()
            .min("0")
            .max("10")
            .into_node();
        assert_eq!(document.attr(meter, "min").as_deref(), Some("0"));
        assert_eq!(document.attr(meter, "max").as_deref(), Some("10"));

        let progress = document.create("progress").unwrap().min("0").into_node();
        assert!(!document.has_attr(progress, "min"));
        assert_eq!(
            document.rejections()[0].reason,
            RejectReason::NotApplicableToKind
        );
    }

    #[test]
    fn label_for_targets_label_and_output() {
        let mut document = Document::new();
        let label = document
            .create("label")
            .unwrap()
            .html_for("name")
            .into_node();
        assert_eq!(document.attr(label, "for").as_deref(), Some("name"));

        let span = document.create("span").unwrap().html_for("name").into_node();
        assert!(!document.has_attr(span, "for"));
    }
}
