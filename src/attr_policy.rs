// Central attribute policy: the global-attribute whitelist, the shared
// attribute applicability table, enumerated values, and value normalization.
// Both the generic `attr` entry point and every typed mutator consult the
// same tables.

// Sorted for binary search.
const GLOBAL_ATTRIBUTES: &[&str] = &[
    "accept",
    "accept-charset",
    "accesskey",
    "action",
    "alt",
    "async",
    "autocomplete",
    "autofocus",
    "autoplay",
    "charset",
    "checked",
    "cite",
    "class",
    "cols",
    "colspan",
    "content",
    "contenteditable",
    "controls",
    "coords",
    "data",
    "datetime",
    "default",
    "defer",
    "dir",
    "dirname",
    "disabled",
    "download",
    "draggable",
    "enctype",
    "for",
    "form",
    "formaction",
    "headers",
    "height",
    "hidden",
    "high",
    "href",
    "hreflang",
    "http-equiv",
    "id",
    "ismap",
    "kind",
    "label",
    "lang",
    "list",
    "loop",
    "low",
    "max",
    "maxlength",
    "media",
    "method",
    "min",
    "multiple",
    "muted",
    "name",
    "novalidate",
    "onabort",
    "onafterprint",
    "onbeforeprint",
    "onbeforeunload",
    "onblur",
    "oncanplay",
    "oncanplaythrough",
    "onchange",
    "onclick",
    "oncontextmenu",
    "oncopy",
    "oncuechange",
    "oncut",
    "ondblclick",
    "ondrag",
    "ondragend",
    "ondragenter",
    "ondragleave",
    "ondragover",
    "ondragstart",
    "ondrop",
    "ondurationchange",
    "onemptied",
    "onended",
    "onerror",
    "onfocus",
    "onhashchange",
    "oninput",
    "oninvalid",
    "onkeydown",
    "onkeypress",
    "onkeyup",
    "onload",
    "onloadeddata",
    "onloadedmetadata",
    "onloadstart",
    "onmousedown",
    "onmousemove",
    "onmouseout",
    "onmouseover",
    "onmouseup",
    "onmousewheel",
    "onoffline",
    "ononline",
    "onpageshow",
    "onpaste",
    "onpause",
    "onplay",
    "onplaying",
    "onprogress",
    "onratechange",
    "onreset",
    "onresize",
    "onscroll",
    "onsearch",
    "onseeked",
    "onseeking",
    "onselect",
    "onstalled",
    "onsubmit",
    "onsuspend",
    "ontimeupdate",
    "ontoggle",
    "onunload",
    "onvolumechange",
    "onwaiting",
    "onwheel",
    "open",
    "optimum",
    "pattern",
    "placeholder",
    "poster",
    "preload",
    "readonly",
    "rel",
    "required",
    "reversed",
    "rows",
    "rowspan",
    "sandbox",
    "scope",
    "selected",
    "shape",
    "size",
    "sizes",
    "span",
    "spellcheck",
    "src",
    "srcdoc",
    "srclang",
    "srcset",
    "start",
    "step",
    "style",
    "tabindex",
    "target",
    "title",
    "translate",
    "type",
    "usemap",
    "value",
    "width",
    "wrap",
];

// Attributes that only apply to a fixed set of element kinds. Attributes
// absent from this table are treated as global. Sorted by attribute name.
const SHARED_ATTRIBUTE_KINDS: &[(&str, &[&str])] = &[
    ("action", &["form"]),
    ("alt", &["area", "img", "input"]),
    ("autofocus", &["button", "input", "select", "textarea"]),
    ("autoplay", &["audio", "video"]),
    ("checked", &["input"]),
    ("controls", &["audio", "video"]),
    ("crossorigin", &["audio", "img", "link", "script", "video"]),
    (
        "disabled",
        &[
            "button", "fieldset", "input", "optgroup", "option", "select", "textarea",
        ],
    ),
    ("for", &["label", "output"]),
    (
        "height",
        &["canvas", "embed", "iframe", "img", "input", "object", "video"],
    ),
    ("href", &["a", "area", "base", "link"]),
    ("label", &["optgroup", "option", "track"]),
    ("loop", &["audio", "video"]),
    ("max", &["input", "meter", "progress"]),
    ("maxlength", &["input", "textarea"]),
    ("method", &["form"]),
    ("min", &["input", "meter"]),
    ("minlength", &["input", "textarea"]),
    ("muted", &["audio", "video"]),
    (
        "name",
        &[
            "button", "fieldset", "form", "iframe", "input", "map", "meta", "object", "output",
            "param", "select", "textarea",
        ],
    ),
    ("placeholder", &["input", "textarea"]),
    ("preload", &["audio", "video"]),
    ("rel", &["a", "area", "form", "link"]),
    ("required", &["input", "select", "textarea"]),
    ("selected", &["option"]),
    ("size", &["input", "select"]),
    (
        "src",
        &[
            "audio", "embed", "iframe", "img", "input", "script", "source", "track", "video",
        ],
    ),
    ("target", &["a", "area", "base", "form"]),
    (
        "value",
        &["button", "input", "li", "meter", "option", "param", "progress"],
    ),
    (
        "width",
        &["canvas", "embed", "iframe", "img", "input", "object", "video"],
    ),
];

const TARGET_VALUES: &[&str] = &["_blank", "_parent", "_self", "_top"];
const PRELOAD_VALUES: &[&str] = &["", "auto", "metadata", "none"];

const LENGTH_UNITS: &[&str] = &["px", "em", "rem", "pt", "%", "vh", "vw"];

pub fn is_known_attribute(name: &str) -> bool {
    let lowered = name.to_ascii_lowercase();
    lowered.starts_with("data-") || GLOBAL_ATTRIBUTES.binary_search(&lowered.as_str()).is_ok()
}

pub fn permitted_kinds(attribute: &str) -> Option<&'static [&'static str]> {
    let lowered = attribute.to_ascii_lowercase();
    SHARED_ATTRIBUTE_KINDS
        .binary_search_by_key(&lowered.as_str(), |&(name, _)| name)
        .ok()
        .map(|index| SHARED_ATTRIBUTE_KINDS[index].1)
}

pub fn is_permitted(tag_name: &str, attribute: &str) -> bool {
    match permitted_kinds(attribute) {
        Some(kinds) => {
            let tag = tag_name.to_ascii_lowercase();
            kinds.iter().any(|kind| *kind == tag)
        }
        None => true,
    }
}

pub(crate) fn enum_values(attribute: &str) -> Option<&'static [&'static str]> {
    match attribute.to_ascii_lowercase().as_str() {
        "target" => Some(TARGET_VALUES),
        "preload" => Some(PRELOAD_VALUES),
        _ => None,
    }
}

// `open` is the only on-prefixed attribute in the whitelist that is not an
// event handler.
pub(crate) fn is_event_handler(attribute: &str) -> bool {
    attribute.starts_with("on") && attribute != "open"
}

// "120px" writes as "120"; values that are not a bare number with a known
// length unit pass through untouched.
pub(crate) fn strip_length_unit(value: &str) -> &str {
    let trimmed = value.trim();
    let digits_end = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    if digits_end == 0 {
        return trimmed;
    }
    let (number, suffix) = trimmed.split_at(digits_end);
    if LENGTH_UNITS.contains(&suffix) {
        number
    } else {
        trimmed
    }
}
