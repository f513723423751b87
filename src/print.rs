use std::{cmp, fmt::Display};

use crate::node::NodeRef;
use crate::rbt::Rbt;

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";
// columns given to each slot on the deepest level.
const CELL: usize = 4;

/// Render the tree level by level, root on the first line, each key
/// centered above its children. Red keys are wrapped in ANSI red when
/// `ansi` is set. Missing entries leave their slot blank. Meant for
/// debugging small trees, line width doubles with every level.
pub fn render<K, V>(tree: &Rbt<K, V>, ansi: bool) -> String
where
    K: Display,
{
    let root = match tree.root() {
        Some(root) => root,
        None => return String::new(),
    };
    let levels = height(Some(root));
    let width = CELL << (levels - 1);

    let mut out = String::new();
    let mut row: Vec<Option<NodeRef<K, V>>> = vec![Some(root)];
    for level in 0..levels {
        let slot = width >> level;
        let mut line = String::new();
        let mut next = Vec::with_capacity(row.len() * 2);
        for &node in row.iter() {
            let (text, red) = match node.and_then(|n| n.key().map(|k| (k, n.is_red()))) {
                Some((key, red)) => (key.to_string(), red),
                None => (String::new(), false),
            };
            let pad = slot.saturating_sub(text.chars().count());
            line.push_str(&" ".repeat(pad / 2));
            if red && ansi {
                line.push_str(RED);
                line.push_str(&text);
                line.push_str(RESET);
            } else {
                line.push_str(&text);
            }
            line.push_str(&" ".repeat(pad - pad / 2));

            next.push(node.and_then(|n| n.left()).filter(|n| !n.is_sentinel()));
            next.push(node.and_then(|n| n.right()).filter(|n| !n.is_sentinel()));
        }
        out.push_str(line.trim_end());
        out.push('\n');
        row = next;
    }
    out
}

// number of entry levels below, and including, node.
fn height<K, V>(node: Option<NodeRef<K, V>>) -> usize {
    match node {
        Some(n) if !n.is_sentinel() => 1 + cmp::max(height(n.left()), height(n.right())),
        _ => 0,
    }
}

impl<K, V> Rbt<K, V>
where
    K: Display,
{
    /// Print the tree on terminal, red entries in red. Very helpful
    /// while debugging.
    pub fn pretty_print(&self) {
        print!("{}", render(self, true));
    }
}
