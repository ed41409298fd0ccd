//! # Component Factory
//!
//! Builds fresh subtrees for everything the palette can drop onto the canvas.
//!
//! Primitives (text, image, button, ...) and prebuilt blocks (hero, navbar,
//! pricing, ...) go through the same [`create`] call, so commands never need
//! to tell them apart. Every node produced here carries a newly minted id.
//!
//! Kind names are matched through [`Template::parse`], which accepts the
//! aliases older palettes used (`hero-section`, `featureGridBlock`, ...).
//! Anything unrecognised becomes a plain container labelled with the kind.

use chrono::Datelike;
use pagesmith_model::{Node, NodeType};

const STOCK_PHOTO: &str =
    "https://images.unsplash.com/photo-1506765515384-028b60a970df?w=1200&q=60&auto=format&fit=crop";

const MUTED: &str = "#475569";
const BRAND: &str = "#2563eb";
const HAIRLINE: &str = "1px solid #eef2f6";

/// Every buildable kind of component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    // primitives
    Text,
    Heading,
    Span,
    Image,
    Video,
    Iframe,
    Button,
    Input,
    Textarea,

    // layout
    Div,
    Section,
    Grid,
    FlexRow,
    FlexCol,
    Card,
    TwoColumn,
    CardBlock,

    // prebuilt blocks
    Navbar,
    Hero,
    FeatureGrid,
    Testimonials,
    CallToAction,
    Footer,
    Pricing,
    Faq,

    Unknown(String),
}

impl Template {
    pub fn parse(kind: &str) -> Self {
        match kind {
            "text" => Template::Text,
            "heading" => Template::Heading,
            "span" => Template::Span,
            "image" => Template::Image,
            "video" => Template::Video,
            "iframe" => Template::Iframe,
            "button" => Template::Button,
            "input" => Template::Input,
            "textarea" => Template::Textarea,
            "div" | "container" => Template::Div,
            "section" => Template::Section,
            "grid" => Template::Grid,
            "flexRow" => Template::FlexRow,
            "flexCol" => Template::FlexCol,
            "card" => Template::Card,
            "twoCol" | "two-column" => Template::TwoColumn,
            "cardBlock" => Template::CardBlock,
            "navbar" | "nav" => Template::Navbar,
            "hero" | "hero-section" | "heroBlock" => Template::Hero,
            "featureGrid" | "feature-grid" | "featureGridBlock" => Template::FeatureGrid,
            "testimonials" | "testimonial" => Template::Testimonials,
            "cta" | "call-to-action" => Template::CallToAction,
            "footer" => Template::Footer,
            "pricing" | "pricingTable" => Template::Pricing,
            "faq" | "accordion" => Template::Faq,
            other => Template::Unknown(other.to_string()),
        }
    }

    /// Template whose defaults a node of this type is reset to
    pub fn for_node_type(node_type: &NodeType) -> Self {
        match node_type {
            NodeType::Root | NodeType::Div => Template::Div,
            NodeType::Section => Template::Section,
            NodeType::Card => Template::Card,
            NodeType::Nav => Template::Navbar,
            NodeType::Grid => Template::Grid,
            NodeType::Footer => Template::Footer,
            NodeType::Text => Template::Text,
            NodeType::Heading => Template::Heading,
            NodeType::Span => Template::Span,
            NodeType::Button => Template::Button,
            NodeType::Image => Template::Image,
            NodeType::Video => Template::Video,
            NodeType::Iframe => Template::Iframe,
            NodeType::Input => Template::Input,
            NodeType::Textarea => Template::Textarea,
            NodeType::Other(tag) => Template::Unknown(tag.clone()),
        }
    }

    pub fn build(&self) -> Node {
        match self {
            Template::Text => base(NodeType::Text)
                .content("Editable paragraph text")
                .style("fontSize", "16px"),

            Template::Heading => base(NodeType::Heading)
                .content("Heading")
                .style("fontSize", "28px")
                .style("fontWeight", "700"),

            Template::Span => base(NodeType::Span)
                .content("Inline text")
                .style("display", "inline"),

            Template::Image => base(NodeType::Image)
                .prop("src", STOCK_PHOTO)
                .prop("alt", "image")
                .style("width", "100%")
                .style("borderRadius", "8px"),

            Template::Video => base(NodeType::Video)
                .prop("src", "")
                .prop("controls", "true")
                .style("width", "100%"),

            Template::Iframe => base(NodeType::Iframe)
                .prop("src", "https://example.com")
                .prop("title", "embed")
                .style("width", "100%")
                .style("height", "360px"),

            Template::Button => base(NodeType::Button)
                .content("Learn more")
                .style("display", "inline-block")
                .style("padding", "10px 18px")
                .style("background", BRAND)
                .style("color", "#fff")
                .style("borderRadius", "8px"),

            Template::Input => base(NodeType::Input)
                .prop("placeholder", "Enter text")
                .style("padding", "10px")
                .style("border", "1px solid #e6eef3")
                .style("borderRadius", "8px"),

            Template::Textarea => base(NodeType::Textarea)
                .prop("placeholder", "Type message")
                .style("padding", "10px")
                .style("border", "1px solid #e6eef3")
                .style("borderRadius", "8px"),

            Template::Div => base(NodeType::Div).style("padding", "8px"),

            Template::Section => base(NodeType::Section).style("padding", "48px 20px"),

            Template::Grid => base(NodeType::Grid)
                .style("display", "grid")
                .style("gridTemplateColumns", "repeat(3,1fr)")
                .style("gap", "20px")
                .children((0..3).map(|_| Template::Card.build())),

            Template::FlexRow => base(NodeType::Div)
                .style("display", "flex")
                .style("flexDirection", "row")
                .style("gap", "16px")
                .children([Template::Div.build(), Template::Div.build()]),

            Template::FlexCol => base(NodeType::Div)
                .style("display", "flex")
                .style("flexDirection", "column")
                .style("gap", "12px")
                .children([Template::Text.build(), Template::Button.build()]),

            Template::Card => base(NodeType::Card)
                .style("padding", "18px")
                .style("border", "1px solid #e6edf3")
                .style("borderRadius", "10px")
                .style("background", "#ffffff")
                .child(heading("Card title", "20px"))
                .child(
                    text("Short supporting description text.")
                        .style("color", MUTED)
                        .style("fontSize", "14px")
                        .style("marginTop", "8px"),
                )
                .child(button("Action").style("marginTop", "12px")),

            Template::TwoColumn => base(NodeType::Div)
                .style("display", "flex")
                .style("gap", "24px")
                .style("flexWrap", "wrap")
                .child(column("Left column", "Content goes here"))
                .child(column("Right column", "More content here")),

            Template::CardBlock => base(NodeType::Div)
                .style("display", "grid")
                .style("gridTemplateColumns", "repeat(3,1fr)")
                .style("gap", "18px")
                .children((0..3).map(|_| Template::Card.build())),

            Template::Navbar => navbar(),
            Template::Hero => hero(),
            Template::FeatureGrid => feature_grid(),
            Template::Testimonials => testimonials(),
            Template::CallToAction => call_to_action(),
            Template::Footer => footer(),
            Template::Pricing => pricing(),
            Template::Faq => faq(),

            Template::Unknown(kind) => base(NodeType::Div)
                .prop("data-component", kind.as_str())
                .child(text(capitalize(kind))),
        }
    }
}

/// Build a fresh subtree for a palette kind. Never fails.
pub fn create(kind: &str) -> Node {
    Template::parse(kind).build()
}

/// Palette grouping, mirroring the sidebar sections of the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteSection {
    Basic,
    Media,
    Form,
    Layout,
    Blocks,
}

impl PaletteSection {
    pub fn title(&self) -> &'static str {
        match self {
            PaletteSection::Basic => "Basic Elements",
            PaletteSection::Media => "Media",
            PaletteSection::Form => "Form Elements",
            PaletteSection::Layout => "Layout",
            PaletteSection::Blocks => "Ready Blocks",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteItem {
    pub label: &'static str,
    pub kind: &'static str,
    pub section: PaletteSection,
}

const fn item(label: &'static str, kind: &'static str, section: PaletteSection) -> PaletteItem {
    PaletteItem { label, kind, section }
}

/// Everything the sidebar offers, in display order
pub const PALETTE: &[PaletteItem] = &[
    item("Div", "div", PaletteSection::Basic),
    item("Section", "section", PaletteSection::Basic),
    item("Container", "container", PaletteSection::Basic),
    item("Text", "text", PaletteSection::Basic),
    item("Heading", "heading", PaletteSection::Basic),
    item("Span", "span", PaletteSection::Basic),
    item("Button", "button", PaletteSection::Basic),
    item("Image", "image", PaletteSection::Basic),
    item("Image", "image", PaletteSection::Media),
    item("Video", "video", PaletteSection::Media),
    item("Iframe", "iframe", PaletteSection::Media),
    item("Input", "input", PaletteSection::Form),
    item("Textarea", "textarea", PaletteSection::Form),
    item("Flex Row", "flexRow", PaletteSection::Layout),
    item("Flex Column", "flexCol", PaletteSection::Layout),
    item("Grid", "grid", PaletteSection::Layout),
    item("Card", "card", PaletteSection::Layout),
    item("Navbar", "navbar", PaletteSection::Blocks),
    item("Hero Section", "hero", PaletteSection::Blocks),
    item("Feature Grid", "featureGrid", PaletteSection::Blocks),
    item("Testimonials", "testimonials", PaletteSection::Blocks),
    item("Call To Action", "cta", PaletteSection::Blocks),
    item("Footer", "footer", PaletteSection::Blocks),
    item("Pricing Table", "pricing", PaletteSection::Blocks),
    item("FAQ Accordion", "faq", PaletteSection::Blocks),
    item("Two Column Layout", "twoCol", PaletteSection::Blocks),
    item("Card Block", "cardBlock", PaletteSection::Blocks),
];

/// Shared defaults every top-level component starts from
fn base(node_type: NodeType) -> Node {
    Node::new(node_type)
        .style("padding", "0px")
        .style("margin", "0px")
        .style("background", "transparent")
        .style("color", "#111827")
        .style("fontSize", "16px")
        .style("border", "none")
        .style("borderRadius", "0px")
        .style("display", "block")
}

fn text(content: impl Into<String>) -> Node {
    Node::new(NodeType::Text).content(content).style("margin", "0")
}

fn heading(content: &str, size: &str) -> Node {
    Node::new(NodeType::Heading)
        .content(content)
        .style("fontSize", size)
        .style("fontWeight", "700")
        .style("margin", "0")
}

fn button(label: &str) -> Node {
    Node::new(NodeType::Button).content(label)
}

fn brand_button(label: &str, padding: &str) -> Node {
    button(label)
        .style("background", BRAND)
        .style("color", "#fff")
        .style("padding", padding)
        .style("borderRadius", "8px")
}

fn div() -> Node {
    Node::new(NodeType::Div)
}

fn bordered_card(padding: &str) -> Node {
    Node::new(NodeType::Card)
        .style("padding", padding)
        .style("borderRadius", "10px")
        .style("border", HAIRLINE)
}

fn column(title: &str, body: &str) -> Node {
    div()
        .style("flex", "1 1 320px")
        .child(heading(title, "20px"))
        .child(text(body).style("color", MUTED).style("marginTop", "8px"))
}

fn navbar() -> Node {
    let link = |label: &str| text(label).style("cursor", "pointer");

    base(NodeType::Nav)
        .style("display", "flex")
        .style("justifyContent", "space-between")
        .style("alignItems", "center")
        .style("padding", "12px 20px")
        .style("background", "#ffffff")
        .style("borderBottom", HAIRLINE)
        .child(
            Node::new(NodeType::Text)
                .content("Your Brand")
                .style("fontWeight", "700")
                .style("fontSize", "18px"),
        )
        .child(
            div()
                .style("display", "flex")
                .style("gap", "12px")
                .style("alignItems", "center")
                .child(link("Home"))
                .child(link("Features"))
                .child(link("Pricing"))
                .child(brand_button("Get Started", "8px 12px")),
        )
}

fn hero() -> Node {
    base(NodeType::Section)
        .style("display", "flex")
        .style("alignItems", "center")
        .style("justifyContent", "space-between")
        .style("flexWrap", "wrap")
        .style("padding", "64px 20px")
        .style("gap", "32px")
        .child(
            div()
                .style("flex", "1 1 420px")
                .style("minWidth", "260px")
                .child(heading("Build Beautiful Websites Effortlessly", "40px").style("color", "#0f172a"))
                .child(
                    text("A powerful, minimal builder to prototype quickly and ship responsive pages.")
                        .style("color", MUTED)
                        .style("fontSize", "16px")
                        .style("marginTop", "12px"),
                )
                .child(
                    div()
                        .style("marginTop", "20px")
                        .style("display", "flex")
                        .style("gap", "12px")
                        .child(brand_button("Get Started", "12px 20px").style("border", "none"))
                        .child(
                            button("Live Demo")
                                .style("background", "transparent")
                                .style("color", BRAND)
                                .style("padding", "12px 20px")
                                .style("borderRadius", "8px")
                                .style("border", "1px solid #e6eef8"),
                        ),
                ),
        )
        .child(
            Node::new(NodeType::Image)
                .prop("src", STOCK_PHOTO)
                .style("flex", "0 1 420px")
                .style("width", "46%")
                .style("minWidth", "260px")
                .style("borderRadius", "12px")
                .style("boxShadow", "0 12px 30px rgba(2,6,23,0.08)"),
        )
}

fn feature_grid() -> Node {
    let feature = |title: &str, body: &str| {
        bordered_card("20px")
            .style("background", "#fff")
            .child(heading(title, "18px"))
            .child(text(body).style("color", MUTED))
    };

    base(NodeType::Section)
        .style("display", "grid")
        .style("gridTemplateColumns", "repeat(3,1fr)")
        .style("gap", "20px")
        .style("padding", "48px 20px")
        .child(feature("Fast", "Build quickly with prebuilt blocks."))
        .child(feature("Responsive", "Layouts adapt to screens automatically."))
        .child(feature("Customizable", "Change styles visually."))
}

fn testimonials() -> Node {
    let quote = |body: &str, author: &str| {
        bordered_card("20px")
            .style("background", "#fff")
            .style("flex", "1")
            .child(text(body).style("fontSize", "18px").style("marginBottom", "12px"))
            .child(text(author).style("color", MUTED))
    };

    base(NodeType::Section)
        .style("display", "flex")
        .style("gap", "20px")
        .style("padding", "40px 20px")
        .child(quote("\u{201c}This builder changed how I design.\u{201d}", "\u{2014} Alex R"))
        .child(quote("\u{201c}Ship prototypes quickly.\u{201d}", "\u{2014} Sam K"))
}

fn call_to_action() -> Node {
    base(NodeType::Section)
        .style("padding", "40px 20px")
        .style("textAlign", "center")
        .style("borderRadius", "8px")
        .style("background", "linear-gradient(90deg,#eef2ff,#e6f0ff)")
        .child(heading("Ready to get started?", "28px"))
        .child(brand_button("Start Free Trial", "12px 22px").style("marginTop", "16px"))
}

fn footer() -> Node {
    let year = chrono::Local::now().year();

    base(NodeType::Footer)
        .style("padding", "28px 20px")
        .style("textAlign", "center")
        .child(text(format!("\u{a9} {} Your Brand. All rights reserved.", year)).style("color", "#6b7280"))
}

fn pricing() -> Node {
    let tier = |name: &str, price: &str, price_size: &str, action: Node| {
        bordered_card("18px")
            .style("textAlign", "center")
            .child(heading(name, "20px"))
            .child(
                text(price)
                    .style("fontSize", price_size)
                    .style("fontWeight", "700")
                    .style("marginTop", "8px"),
            )
            .child(action.style("marginTop", "12px"))
    };

    base(NodeType::Section)
        .style("display", "grid")
        .style("gridTemplateColumns", "repeat(3,1fr)")
        .style("gap", "18px")
        .style("padding", "48px 20px")
        .child(tier("Basic", "$9/mo", "22px", button("Buy")))
        .child(
            tier(
                "Pro",
                "$29/mo",
                "22px",
                button("Buy").style("background", BRAND).style("color", "#fff"),
            )
            .style("padding", "22px")
            .style("background", "#ffffff"),
        )
        .child(tier("Enterprise", "Custom pricing", "18px", button("Contact")))
}

fn faq() -> Node {
    let entry = |question: &str, answer: &str| {
        div()
            .child(heading(question, "18px"))
            .child(text(answer).style("color", MUTED))
    };

    base(NodeType::Section)
        .style("padding", "32px 20px")
        .child(
            entry("How does it work?", "You drag blocks, edit content, then export HTML.")
                .style("marginBottom", "12px"),
        )
        .child(entry(
            "Is it responsive?",
            "Yes \u{2014} blocks are responsive by default.",
        ))
}

fn capitalize(kind: &str) -> String {
    let mut chars = kind.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
