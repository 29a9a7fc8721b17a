//! Tree dump for AST nodes
//!
//! Renders a subtree as one line per node, connected with box-drawing
//! markers:
//!
//! ```text
//! Program
//! ├ Demo
//! ├ var
//! └ ...
//!   └ :=
//!     ├ x
//!     └ 5 (int)
//! ```
//!
//! The dump is for humans only; nothing parses it back.

use std::fmt;

use crate::NodeRef;

/// Branch marker for a child with later siblings
const BRANCH: char = '├';
/// Continuation marker below a child with later siblings
const PIPE: char = '│';
/// Branch marker for the last child
const LAST_BRANCH: char = '└';
/// Continuation marker below the last child
const BLANK: char = ' ';

/// Render `node` and its subtree, one line per node.
pub fn render(node: NodeRef<'_>) -> Vec<String> {
    let mut lines = vec![node.label()];
    let children = node.children();
    let last = children.len().saturating_sub(1);

    for (i, child) in children.into_iter().enumerate() {
        let (first, rest) = if i == last {
            (LAST_BRANCH, BLANK)
        } else {
            (BRANCH, PIPE)
        };
        for (j, line) in render(child).into_iter().enumerate() {
            let marker = if j == 0 { first } else { rest };
            lines.push(format!("{} {}", marker, line));
        }
    }

    lines
}

/// `Display` adapter writing the dump of a subtree, lines joined by `\n`
pub struct TreeDump<'a>(pub NodeRef<'a>);

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in render(self.0).iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
