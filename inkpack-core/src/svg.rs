//! The drawing tree and its SVG serialization.
//!
//! A [`Drawing`] is the render pipeline's output: a root with width/height
//! and ordered child nodes (rects, translated groups, stroked paths).
//! Serialization is the engine's only external coupling; the tree itself
//! carries no SVG syntax.

use std::collections::BTreeMap;

use compact_str::CompactString;

use crate::{curve::fmt_num, geometry::Point};

/// A node of the drawing tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Rect(RectNode),
    Group(GroupNode),
    Path(PathNode),
}

/// An axis-aligned rectangle with fill and optional stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct RectNode {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: CompactString,
    pub stroke: Option<CompactString>,
}

/// A group of nodes, optionally translated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupNode {
    pub translate: Option<Point>,
    pub children: Vec<Node>,
}

/// A stroked path carrying pre-built SVG path data.
#[derive(Debug, Clone, PartialEq)]
pub struct PathNode {
    pub d: String,
    pub fill: CompactString,
    pub stroke: CompactString,
    pub stroke_width: f32,
}

/// The root of a rendered drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub width: f32,
    pub height: f32,
    /// Extra attributes copied verbatim onto the root element.
    pub attrs: BTreeMap<CompactString, CompactString>,
    pub children: Vec<Node>,
}

impl Drawing {
    /// Iterates over the top-level word groups, skipping rects.
    pub fn groups(&self) -> impl Iterator<Item = &GroupNode> {
        self.children.iter().filter_map(|node| match node {
            Node::Group(g) => Some(g),
            _ => None,
        })
    }

    /// Serializes the tree as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\"",
            fmt_num(self.width),
            fmt_num(self.height)
        ));
        for (key, value) in &self.attrs {
            out.push_str(&format!(" {}=\"{}\"", key, escape_attr(value)));
        }
        out.push_str(">\n");
        for child in &self.children {
            write_node(&mut out, child, 1);
        }
        out.push_str("</svg>\n");
        out
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    indent(out, depth);
    match node {
        Node::Rect(rect) => {
            out.push_str(&format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"",
                fmt_num(rect.x),
                fmt_num(rect.y),
                fmt_num(rect.width),
                fmt_num(rect.height),
                escape_attr(&rect.fill)
            ));
            if let Some(stroke) = &rect.stroke {
                out.push_str(&format!(" stroke=\"{}\"", escape_attr(stroke)));
            }
            out.push_str("/>\n");
        },
        Node::Group(group) => {
            out.push_str("<g");
            if let Some(Point { x, y }) = group.translate {
                out.push_str(&format!(
                    " transform=\"translate({},{})\"",
                    fmt_num(x),
                    fmt_num(y)
                ));
            }
            out.push_str(">\n");
            for child in &group.children {
                write_node(out, child, depth + 1);
            }
            indent(out, depth);
            out.push_str("</g>\n");
        },
        Node::Path(path) => {
            out.push_str(&format!(
                "<path d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
                escape_attr(&path.d),
                escape_attr(&path.fill),
                escape_attr(&path.stroke),
                fmt_num(path.stroke_width)
            ));
        },
    }
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
