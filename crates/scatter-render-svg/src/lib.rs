// File: crates/scatter-render-svg/src/lib.rs
// Summary: SVG surface backend; retains appended nodes and serializes them to markup.

use scatter_core::surface::{Circle, Group, Line, Node, Path, Surface, Text, TextAnchor, Transform};

/// A `Surface` that accumulates primitives and serializes them as an
/// `<svg>` document. The node tree is kept as appended, so cleared and
/// append-only render modes both serialize exactly what the surface holds.
pub struct SvgSurface {
    width: f64,
    height: f64,
    nodes: Vec<Node>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, nodes: Vec::new() }
    }

    /// The retained primitive tree, for inspection.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Serialize the surface as a standalone SVG document.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
            self.width, self.height
        ));
        for node in &self.nodes {
            write_node(&mut out, node, 1);
        }
        out.push_str("</svg>\n");
        out
    }

    /// Write the document to `path`, creating parent directories.
    pub fn write_to(&self, path: impl AsRef<std::path::Path>) -> std::io::Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_svg_string())
    }
}

impl Surface for SvgSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn append(&mut self, node: Node) {
        self.nodes.push(node);
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let pad = "  ".repeat(depth);
    match node {
        Node::Group(g) => write_group(out, g, depth, &pad),
        Node::Line(l) => write_line(out, l, &pad),
        Node::Path(p) => write_path(out, p, &pad),
        Node::Circle(c) => write_circle(out, c, &pad),
        Node::Text(t) => write_text(out, t, &pad),
    }
}

fn write_group(out: &mut String, g: &Group, depth: usize, pad: &str) {
    out.push_str(pad);
    out.push_str("<g");
    if let Some(t) = g.transform {
        out.push_str(&format!(" transform=\"{}\"", transform_attr(t)));
    }
    if let Some(class) = g.class {
        out.push_str(&format!(" class=\"{class}\""));
    }
    out.push_str(">\n");
    for child in &g.children {
        write_node(out, child, depth + 1);
    }
    out.push_str(pad);
    out.push_str("</g>\n");
}

fn write_line(out: &mut String, l: &Line, pad: &str) {
    out.push_str(&format!(
        "{pad}<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"",
        l.x1, l.y1, l.x2, l.y2
    ));
    if let Some(stroke) = l.stroke {
        out.push_str(&format!(" stroke=\"{}\"", stroke.css()));
    }
    out.push_str("/>\n");
}

fn write_path(out: &mut String, p: &Path, pad: &str) {
    out.push_str(pad);
    out.push_str("<path");
    if let Some(class) = p.class {
        out.push_str(&format!(" class=\"{class}\""));
    }
    out.push_str(&format!(" d=\"{}\" fill=\"none\"", xml_escape(&p.d)));
    if let Some(stroke) = p.stroke {
        out.push_str(&format!(" stroke=\"{}\"", stroke.css()));
    }
    out.push_str("/>\n");
}

fn write_circle(out: &mut String, c: &Circle, pad: &str) {
    out.push_str(&format!(
        "{pad}<circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
        c.cx, c.cy, c.r
    ));
    if let Some(fill) = c.fill {
        out.push_str(&format!(" fill=\"{}\"", fill.css()));
    }
    if let Some(opacity) = c.fill_opacity {
        out.push_str(&format!(" fill-opacity=\"{opacity}\""));
    }
    out.push_str("/>\n");
}

fn write_text(out: &mut String, t: &Text, pad: &str) {
    out.push_str(&format!("{pad}<text x=\"{}\" y=\"{}\"", t.x, t.y));
    if let Some(class) = t.class {
        out.push_str(&format!(" class=\"{class}\""));
    }
    if let Some(anchor) = t.anchor {
        let value = match anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        out.push_str(&format!(" text-anchor=\"{value}\""));
    }
    if let Some(dy) = t.dy {
        out.push_str(&format!(" dy=\"{dy}\""));
    }
    if let Some(transform) = t.transform {
        out.push_str(&format!(" transform=\"{}\"", transform_attr(transform)));
    }
    if let Some(fill) = t.fill {
        out.push_str(&format!(" fill=\"{}\"", fill.css()));
    }
    out.push_str(&format!(">{}</text>\n", xml_escape(&t.content)));
}

fn transform_attr(t: Transform) -> String {
    match t {
        Transform::Translate(tx, ty) => format!("translate({tx},{ty})"),
        Transform::Rotate(deg) => format!("rotate({deg})"),
    }
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
