//! Static HTML output for rendered sections.

use pagecraft_schema::PageContent;

use crate::renderer::render_document;
use crate::vnode::VNode;

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Document title for full-page output
    pub title: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            title: "Landing Page".to_string(),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a document to a complete standalone HTML page.
pub fn compile_page(content: &PageContent, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    let title = escape_html(&ctx.options.title);
    ctx.add_line(&format!("<title>{title}</title>"));
    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line("<body>");
    ctx.indent();

    for node in render_document(content) {
        compile_node(&node, &mut ctx);
    }

    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

/// Compile a single rendered tree to an HTML fragment.
pub fn compile_fragment(node: &VNode, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);
    compile_node(node, &mut ctx);
    ctx.get_output()
}

fn compile_node(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Element {
            tag,
            attributes,
            styles,
            children,
        } => compile_element(tag, attributes, styles, children, ctx),

        VNode::Text { content } => {
            if ctx.options.pretty {
                ctx.add_indent();
            }
            ctx.add(&escape_html(content));
            if ctx.options.pretty {
                ctx.add("\n");
            }
        }

        // Raw markup from the custom section type passes through verbatim
        VNode::Raw { content } => {
            if ctx.options.pretty {
                ctx.add_indent();
            }
            ctx.add(content);
            if ctx.options.pretty {
                ctx.add("\n");
            }
        }
    }
}

fn compile_element(
    tag: &str,
    attributes: &std::collections::BTreeMap<String, String>,
    styles: &std::collections::BTreeMap<String, String>,
    children: &[VNode],
    ctx: &mut Context,
) {
    if ctx.options.pretty {
        ctx.add_indent();
    }
    ctx.add(&format!("<{}", tag));

    for (name, value) in attributes {
        ctx.add(&format!(" {}=\"{}\"", name, escape_attribute(value)));
    }

    if !styles.is_empty() {
        ctx.add(" style=\"");
        for (i, (key, value)) in styles.iter().enumerate() {
            if i > 0 {
                ctx.add(" ");
            }
            ctx.add(&format!("{}: {};", key, escape_attribute(value)));
        }
        ctx.add("\"");
    }

    if children.is_empty() && is_void(tag) {
        ctx.add(" />");
        if ctx.options.pretty {
            ctx.add("\n");
        }
        return;
    }

    ctx.add(">");

    if !children.is_empty() {
        let block = ctx.options.pretty && has_element_children(children);
        if block {
            ctx.add("\n");
        }
        ctx.indent();

        for child in children {
            if block {
                compile_node(child, ctx);
            } else {
                compile_inline(child, ctx);
            }
        }

        ctx.dedent();
        if block {
            ctx.add_indent();
        }
    }

    ctx.add(&format!("</{}>", tag));
    if ctx.options.pretty {
        ctx.add("\n");
    }
}

/// Text-only children stay on the opening tag's line.
fn compile_inline(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Text { content } => ctx.add(&escape_html(content)),
        VNode::Raw { content } => ctx.add(content),
        VNode::Element { .. } => compile_node(node, ctx),
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn has_element_children(children: &[VNode]) -> bool {
    children
        .iter()
        .any(|child| matches!(child, VNode::Element { .. }))
}
