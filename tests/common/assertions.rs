use pasc::ast::{AstNode, NodeKind, NodeRef};

/// Assert a node's children have the given kinds, in order
pub fn assert_child_kinds(node: &dyn AstNode, expected: &[NodeKind]) {
    let kinds: Vec<NodeKind> = node.children().into_iter().map(|c| c.kind()).collect();
    assert_eq!(kinds, expected, "children of {}", node.label());
}

/// Assert a tree dump matches line by line
pub fn assert_renders(node: &dyn AstNode, expected: &[&str]) {
    let lines = node.render();
    assert_eq!(lines, expected, "dump was:\n{}", lines.join("\n"));
}

/// Collect the names of all identifiers below `node`, in pre-order
pub fn collect_idents(node: &dyn AstNode) -> Vec<String> {
    let mut names = Vec::new();
    node.as_node().visit(|n| {
        if let NodeRef::Ident(ident) = n {
            names.push(ident.name().to_string());
        }
    });
    names
}
