use crate::attr_policy::strip_length_unit;
use crate::ElementBuilder;

// Media capability: playback flags, sources, and intrinsic dimensions.
pub trait MediaAttrs: Sized {
    fn src(self, src: &str) -> Self;
    fn alt_text(self, alt_text: &str) -> Self;
    fn autoplay(self) -> Self;
    fn controls(self) -> Self;
    fn looped(self) -> Self;
    fn muted(self) -> Self;
    fn preload(self, preload: &str) -> Self;
    fn cross_origin(self, cross_origin: &str) -> Self;
    fn height(self, height: &str) -> Self;
    fn width(self, width: &str) -> Self;
}

// Link capability: navigation attributes for anchor-like elements.
pub trait LinkAttrs: Sized {
    fn href(self, href: &str) -> Self;
    fn target(self, target: &str) -> Self;
    fn rel(self, rel: &str) -> Self;
}

impl MediaAttrs for ElementBuilder<'_> {
    fn src(self, src: &str) -> Self {
        self.shared_attr("src", src)
    }

    fn alt_text(self, alt_text: &str) -> Self {
        self.shared_attr("alt", alt_text)
    }

    fn autoplay(self) -> Self {
        self.shared_flag("autoplay")
    }

    fn controls(self) -> Self {
        self.shared_flag("controls")
    }

    fn looped(self) -> Self {
        self.shared_flag("loop")
    }

    fn muted(self) -> Self {
        self.shared_flag("muted")
    }

    fn preload(self, preload: &str) -> Self {
        self.shared_attr("preload", preload)
    }

    fn cross_origin(self, cross_origin: &str) -> Self {
        self.shared_attr("crossorigin", cross_origin)
    }

    fn height(self, height: &str) -> Self {
        self.shared_attr("height", strip_length_unit(height))
    }

    fn width(self, width: &str) -> Self {
        self.shared_attr("width", strip_length_unit(width))
    }
}

impl LinkAttrs for ElementBuilder<'_> {
    fn href(self, href: &str) -> Self {
        self.shared_attr("href", href)
    }

    fn target(self, target: &str) -> Self {
        self.shared_attr("target", target)
    }

    fn rel(self, rel: &str) -> Self {
        self.shared_attr("rel", rel)
    }
}
