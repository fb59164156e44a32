use html_composer::{
    is_known_attribute, is_permitted, looks_like_function_call, Document, RejectReason,
};
use proptest::prelude::*;

fn tag_strategy() -> BoxedStrategy<&'static str> {
    prop_oneof![
        Just("a"),
        Just("area"),
        Just("audio"),
        Just("div"),
        Just("form"),
        Just("img"),
        Just("input"),
        Just("meter"),
        Just("option"),
        Just("select"),
        Just("textarea"),
        Just("video"),
    ]
    .boxed()
}

// Shared attributes without enumeration or handler constraints, so that the
// applicability table alone decides the outcome.
fn shared_attribute_strategy() -> BoxedStrategy<&'static str> {
    prop_oneof![
        Just("alt"),
        Just("checked"),
        Just("controls"),
        Just("height"),
        Just("href"),
        Just("max"),
        Just("name"),
        Just("placeholder"),
        Just("selected"),
        Just("src"),
        Just("value"),
    ]
    .boxed()
}

fn attribute_name_strategy() -> BoxedStrategy<String> {
    "[a-z][a-z0-9-]{0,14}".boxed()
}

fn attribute_value_strategy() -> BoxedStrategy<String> {
    "[ -~]{0,20}".boxed()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn unknown_attributes_never_change_the_attribute_set(
        name in attribute_name_strategy(),
        value in attribute_value_strategy(),
    ) {
        prop_assume!(!is_known_attribute(&name));

        let mut document = Document::new();
        let node = document.create("div").unwrap().attr(&name, &value).into_node();

        prop_assert!(!document.has_attr(node, &name));
        prop_assert_eq!(document.rejections().len(), 1);
        prop_assert_eq!(document.rejections()[0].reason, RejectReason::UnknownAttribute);
    }

    #[test]
    fn shared_attributes_write_exactly_when_permitted(
        tag in tag_strategy(),
        attribute in shared_attribute_strategy(),
        value in attribute_value_strategy(),
    ) {
        let mut document = Document::new();
        let node = document.create(tag).unwrap().attr(attribute, &value).into_node();

        if is_permitted(tag, attribute) {
            prop_assert!(document.has_attr(node, attribute));
            prop_assert!(document.rejections().is_empty());
        } else {
            prop_assert!(!document.has_attr(node, attribute));
            prop_assert_eq!(
                document.rejections()[0].reason,
                RejectReason::NotApplicableToKind
            );
        }
    }

    #[test]
    fn repeated_class_tokens_appear_once(
        class in "[a-z]{1,8}",
        repeats in 1usize..4,
    ) {
        let mut document = Document::new();
        let mut builder = document.create("div").unwrap();
        for _ in 0..repeats {
            builder = builder.class(&class);
        }
        let node = builder.into_node();

        let classes = document.classes(node);
        prop_assert_eq!(classes, vec![class]);
    }

    #[test]
    fn paren_free_strings_never_look_like_calls(text in "[A-Za-z0-9_ .]{0,24}") {
        prop_assert!(!looks_like_function_call(&text));
    }

    #[test]
    fn wrapped_identifiers_always_look_like_calls(
        name in "[a-z_][A-Za-z0-9_]{0,10}",
        arg in "[A-Za-z0-9_, ]{0,12}",
    ) {
        let call = format!("{name}({arg})");
        prop_assert!(looks_like_function_call(&call));
    }

    #[test]
    fn chains_never_lose_the_wrapper(
        tag in tag_strategy(),
        name in attribute_name_strategy(),
        value in attribute_value_strategy(),
        class in "[a-z]{1,8}",
    ) {
        let mut document = Document::new();
        // Mixed valid and invalid calls; the chain must always yield a node
        // of the original kind.
        let node = document
            .create(tag)
            .unwrap()
            .attr(&name, &value)
            .class(&class)
            .text_content(&value)
            .into_node();
        prop_assert_eq!(document.tag_name(node), Some(tag));
    }
}
