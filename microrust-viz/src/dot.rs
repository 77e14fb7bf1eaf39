use log::debug;
use microrust_core::autograd::trace;
use microrust_core::Value;
use std::fmt;

/// Direction in which Graphviz lays out ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankDir {
    /// Left to right: inputs on the left, the root on the right.
    #[default]
    LeftRight,
    TopBottom,
}

impl fmt::Display for RankDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankDir::LeftRight => write!(f, "LR"),
            RankDir::TopBottom => write!(f, "TB"),
        }
    }
}

/// Rendering options for [`draw_dot_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotOptions {
    pub rank_dir: RankDir,
    /// Digits after the decimal point for `data` and `grad`.
    pub precision: usize,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            rank_dir: RankDir::LeftRight,
            precision: 4,
        }
    }
}

/// Renders the graph below `root` with the default options.
pub fn draw_dot(root: &Value) -> String {
    draw_dot_with(root, &DotOptions::default())
}

/// Renders the graph below `root` as Graphviz DOT source.
///
/// Every value becomes a record node `{ label | data .. | grad .. }`. A
/// non-leaf value also gets a small node named after its operation, which
/// points to the value; its operands point to that operation node.
pub fn draw_dot_with(root: &Value, options: &DotOptions) -> String {
    let graph = trace(root);
    debug!(
        "draw_dot: rendering {} nodes and {} edges",
        graph.nodes.len(),
        graph.edges.len()
    );

    let precision = options.precision;
    let mut out = String::from("digraph {\n");
    out.push_str(&format!("\tgraph [rankdir={}]\n", options.rank_dir));

    for node in &graph.nodes {
        let uid = node_name(node);
        out.push_str(&format!(
            "\t\"{}\" [label=\"{{ {} | data {:.prec$} | grad {:.prec$} }}\" shape=record]\n",
            uid,
            escape_record(&node.label()),
            node.data(),
            node.grad(),
            prec = precision
        ));
        if let Some(op) = node.op() {
            let op_uid = op_node_name(node);
            out.push_str(&format!(
                "\t\"{}\" [label=\"{}\"]\n",
                op_uid,
                escape_quoted(&op.to_string())
            ));
            out.push_str(&format!("\t\"{}\" -> \"{}\"\n", op_uid, uid));
        }
    }

    for (operand, result) in &graph.edges {
        out.push_str(&format!(
            "\t\"{}\" -> \"{}\"\n",
            node_name(operand),
            op_node_name(result)
        ));
    }

    out.push_str("}\n");
    out
}

fn node_name(value: &Value) -> String {
    value.id().as_usize().to_string()
}

fn op_node_name(value: &Value) -> String {
    match value.op() {
        Some(op) => format!("{}{}", node_name(value), op),
        None => node_name(value),
    }
}

fn escape_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escapes the characters that have a meaning inside record labels.
fn escape_record(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '{' | '}' | '|' | '<' | '>' | '"' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "dot_test.rs"]
mod tests;
