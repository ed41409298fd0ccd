//! Starter documents.
//!
//! Unlike factory output these use fixed, human-readable ids; they only ever
//! appear once, as the initial content of a new document.

use pagesmith_model::{Node, NodeType};

/// Responsive landing page: hero, feature grid, call to action and footer
pub fn landing_page() -> Node {
    Node::root()
        .child(hero_section())
        .child(features_section())
        .child(cta_section())
        .child(footer_section())
}

fn hero_section() -> Node {
    Node::with_id("hero-section", NodeType::Section)
        .style("padding", "60px 20px")
        .style("background", "linear-gradient(135deg,#eef2ff,#e0e7ff)")
        .style("display", "flex")
        .style("gap", "40px")
        .style("alignItems", "center")
        .style("justifyContent", "space-between")
        .style("borderRadius", "12px")
        .style("flexWrap", "wrap")
        .child(
            Node::with_id("hero-left", NodeType::Div)
                .style("width", "50%")
                .style("minWidth", "280px")
                .style("display", "flex")
                .style("flexDirection", "column")
                .style("gap", "20px")
                .child(
                    Node::with_id("hero-title", NodeType::Heading)
                        .content("Build Beautiful Websites Effortlessly")
                        .style("fontSize", "40px")
                        .style("fontWeight", "700")
                        .style("color", "#0f172a")
                        .style("lineHeight", "1.1")
                        .style("margin", "0"),
                )
                .child(
                    Node::with_id("hero-subtitle", NodeType::Text)
                        .content(
                            "A powerful and intuitive drag-and-drop builder to create clean, \
                             responsive layouts in minutes.",
                        )
                        .style("fontSize", "18px")
                        .style("color", "#475569")
                        .style("lineHeight", "1.5")
                        .style("margin", "0"),
                )
                .child(
                    Node::with_id("hero-btn", NodeType::Button)
                        .content("Get Started")
                        .style("background", "#4f46e5")
                        .style("color", "white")
                        .style("padding", "14px 26px")
                        .style("borderRadius", "10px")
                        .style("fontSize", "16px")
                        .style("width", "fit-content")
                        .style("border", "none"),
                ),
        )
        .child(
            Node::with_id("hero-right", NodeType::Image)
                .prop(
                    "src",
                    "https://images.unsplash.com/photo-1522199755839-a2bacb67c546?w=900&q=80&auto=format&fit=crop",
                )
                .style("width", "46%")
                .style("minWidth", "260px")
                .style("borderRadius", "12px")
                .style("boxShadow", "0 12px 30px rgba(0,0,0,0.12)"),
        )
}

fn feature_card(n: u8, title: &str, body: &str) -> Node {
    Node::with_id(format!("f{}", n), NodeType::Card)
        .style("padding", "20px")
        .style("border", "1px solid #e2e8f0")
        .style("borderRadius", "12px")
        .style("background", "white")
        .child(
            Node::with_id(format!("f{}-title", n), NodeType::Heading)
                .content(title)
                .style("fontSize", "22px")
                .style("fontWeight", "600")
                .style("margin", "0 0 10px 0"),
        )
        .child(
            Node::with_id(format!("f{}-desc", n), NodeType::Text)
                .content(body)
                .style("fontSize", "16px")
                .style("color", "#475569"),
        )
}

fn features_section() -> Node {
    Node::with_id("features-section", NodeType::Section)
        .style("padding", "60px 20px")
        .style("display", "grid")
        .style("gridTemplateColumns", "repeat(3,1fr)")
        .style("gap", "30px")
        .style("alignItems", "stretch")
        .child(feature_card(
            1,
            "Drag & Drop",
            "Easily rearrange components with pixel-perfect precision.",
        ))
        .child(feature_card(
            2,
            "Responsive by Default",
            "All layouts adapt beautifully to mobile, tablet, and desktop.",
        ))
        .child(feature_card(
            3,
            "Editable Everything",
            "Text, images, spacing, colors, backgrounds \u{2014} fully editable.",
        ))
}

fn cta_section() -> Node {
    Node::with_id("cta-section", NodeType::Section)
        .style("padding", "50px 20px")
        .style("background", "linear-gradient(135deg,#4f46e5,#6366f1)")
        .style("borderRadius", "12px")
        .style("textAlign", "center")
        .style("color", "white")
        .child(
            Node::with_id("cta-title", NodeType::Heading)
                .content("Start Creating Today")
                .style("fontSize", "32px")
                .style("fontWeight", "700")
                .style("margin", "0 0 20px 0")
                .style("color", "white"),
        )
        .child(
            Node::with_id("cta-btn", NodeType::Button)
                .content("Try It Now")
                .style("background", "white")
                .style("color", "#4f46e5")
                .style("padding", "14px 26px")
                .style("borderRadius", "10px")
                .style("border", "none"),
        )
}

fn footer_section() -> Node {
    Node::with_id("footer-section", NodeType::Section)
        .style("padding", "24px 20px")
        .style("textAlign", "center")
        .style("color", "#475569")
        .style("fontSize", "14px")
        .child(
            Node::with_id("footer-text", NodeType::Text)
                .content("\u{a9} 2025 Your Brand. All rights reserved."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_model::validate;

    #[test]
    fn test_landing_page_is_a_valid_document() {
        let root = landing_page();
        assert!(validate(&root).is_ok());
        assert_eq!(root.children.len(), 4);
        assert_eq!(root.find_node("f2-title").unwrap().content.as_deref(), Some("Responsive by Default"));
    }
}
