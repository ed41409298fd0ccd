use pagesmith_model::{Node, NodeType, StyleValue, Styles};
use std::collections::BTreeMap;

/// Options for body serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// One element per line, indented by depth
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Depth the outermost elements start at
    pub base_depth: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            base_depth: 0,
        }
    }
}

pub(crate) struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    pub(crate) fn new(options: CompileOptions) -> Self {
        Self {
            depth: options.base_depth,
            options,
            buffer: String::new(),
        }
    }

    pub(crate) fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub(crate) fn add_line(&mut self, text: &str) {
        self.start_line();
        self.add(text);
        self.end_line();
    }

    fn start_line(&mut self) {
        if self.options.pretty {
            for _ in 0..self.depth {
                self.buffer.push_str(&self.options.indent);
            }
        }
    }

    fn end_line(&mut self) {
        if self.options.pretty {
            self.add("\n");
        }
    }

    pub(crate) fn indent(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    pub(crate) fn get_output(self) -> String {
        self.buffer
    }
}

/// Serialize the children of `root` (the root itself emits no tag)
pub fn render_body(root: &Node, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);
    render_children(root, &mut ctx);
    ctx.get_output()
}

/// Serialize a single node and its subtree
pub fn render_node(node: &Node, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);
    compile_node(node, &mut ctx);
    ctx.get_output()
}

pub(crate) fn render_children(node: &Node, ctx: &mut Context) {
    for child in &node.children {
        compile_node(child, ctx);
    }
}

fn compile_node(node: &Node, ctx: &mut Context) {
    if node.node_type == NodeType::Root {
        render_children(node, ctx);
        return;
    }

    let tag = tag_name(&node.node_type);
    let mut open = format!("<{}", tag);

    if matches!(node.node_type, NodeType::Other(_)) {
        open.push_str(&format!(" data-type=\"{}\"", escape_html(node.node_type.as_str())));
    }

    for (name, value) in &node.props {
        if !is_valid_attribute_name(name) {
            continue;
        }
        open.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
    }

    if node.node_type == NodeType::Image && !node.props.contains_key("alt") {
        open.push_str(" alt=\"\"");
    }

    let css = style_to_css(&node.styles);
    if !css.is_empty() {
        open.push_str(&format!(" style=\"{}\"", escape_html(&css)));
    }

    // Void elements
    if is_self_closing(tag) {
        open.push_str(" />");
        ctx.add_line(&open);
        return;
    }
    open.push('>');

    let content = node.content.as_deref().map(escape_html).unwrap_or_default();
    let close = format!("</{}>", tag);

    if node.children.is_empty() {
        ctx.add_line(&format!("{}{}{}", open, content, close));
        return;
    }

    ctx.add_line(&open);
    ctx.indent();
    if !content.is_empty() {
        ctx.add_line(&content);
    }
    render_children(node, ctx);
    ctx.dedent();
    ctx.add_line(&close);
}

/// HTML tag a node type serializes to
pub fn tag_name(node_type: &NodeType) -> &'static str {
    match node_type {
        NodeType::Text => "p",
        NodeType::Heading => "h2",
        NodeType::Span => "span",
        NodeType::Button => "button",
        NodeType::Image => "img",
        NodeType::Video => "video",
        NodeType::Iframe => "iframe",
        NodeType::Input => "input",
        NodeType::Textarea => "textarea",
        NodeType::Root
        | NodeType::Div
        | NodeType::Section
        | NodeType::Card
        | NodeType::Nav
        | NodeType::Grid
        | NodeType::Footer
        | NodeType::Other(_) => "div",
    }
}

/// Inline CSS declarations for a node's styles, in key order.
///
/// Keys go from camelCase to dashed case, bare numbers get `px` unless the
/// property is unitless, and `backgroundImageUrl` expands into a
/// `background-image` with cover/no-repeat/center defaults.
pub fn style_to_css(styles: &Styles) -> String {
    let mut resolved: BTreeMap<String, String> = BTreeMap::new();

    for (key, value) in styles {
        if key == "backgroundImageUrl" {
            continue;
        }
        let property = to_dashed(key);
        let value = format_value(&property, value);
        if !value.is_empty() {
            resolved.insert(property, value);
        }
    }

    if let Some(StyleValue::Text(url)) = styles.get("backgroundImageUrl") {
        if !url.trim().is_empty() {
            resolved.insert("background-image".into(), format!("url({})", url.trim()));
            for (property, default) in [
                ("background-size", "cover"),
                ("background-repeat", "no-repeat"),
                ("background-position", "center"),
            ] {
                resolved
                    .entry(property.to_string())
                    .or_insert_with(|| default.to_string());
            }
        }
    }

    resolved
        .iter()
        .map(|(property, value)| format!("{}:{};", property, value))
        .collect()
}

fn format_value(property: &str, value: &StyleValue) -> String {
    match value {
        StyleValue::Number(n) => {
            let number = format_number(*n);
            if is_unitless(property) {
                number
            } else {
                format!("{}px", number)
            }
        }
        StyleValue::Text(text) => text.trim().to_string(),
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

fn is_unitless(property: &str) -> bool {
    matches!(property, "opacity" | "z-index" | "font-weight" | "line-height")
}

/// `fontSize` → `font-size`, `WebkitMask` → `-webkit-mask`
pub fn to_dashed(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'))
}

fn is_self_closing(tag: &str) -> bool {
    matches!(tag, "img" | "input")
}
