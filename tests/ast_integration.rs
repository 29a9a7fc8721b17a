//! End-to-end tests: trees loaded from JSON fixtures, walked and rendered
//! through the public protocol only.

mod common;

use common::assertions::{assert_child_kinds, assert_renders, collect_idents};
use common::fixtures::load_program;
use pasc::ast::{
    Assign, AstNode, Ident, Literal, NodeId, NodeKind, NodeRef, Program, SideTable, StmtList,
    TreeDump, VarsDecl,
};

#[test]
fn e2e_demo_program_renders() {
    let program = load_program("demo.json");
    assert_child_kinds(
        &program,
        &[NodeKind::Ident, NodeKind::VarsDecl, NodeKind::StmtList],
    );
    assert_renders(
        &program,
        &[
            "Program",
            "├ Demo",
            "├ var",
            "└ ...",
            "  └ :=",
            "    ├ x",
            "    └ 5 (int)",
        ],
    );
    assert_eq!(program.name().meta().line(), Some(1));
    assert_eq!(program.name().meta().row(), Some(9));
}

#[test]
fn e2e_fixture_matches_built_tree() {
    let built = Program::new(
        Ident::new("Demo").at(1, 9),
        VarsDecl::new(vec![]),
        StmtList::new(vec![Assign::new(
            Ident::new("x"),
            Literal::new("5").expect("literal"),
        )
        .into()]),
    );
    assert_eq!(load_program("demo.json"), built);
}

#[test]
fn e2e_loops_program_renders() {
    let program = load_program("loops.json");
    let expected = [
        "Program",
        "├ Loops",
        "├ var",
        "│ ├ var_dec",
        "│ │ ├ idents",
        "│ │ │ ├ i",
        "│ │ │ └ total",
        "│ │ └ integer",
        "│ └ arr_decl",
        "│   ├ real",
        "│   ├ buf",
        "│   ├ 0 (int)",
        "│   └ 9 (int)",
        "└ ...",
        "  ├ for",
        "  │ ├ :=",
        "  │ │ ├ i",
        "  │ │ └ 0 (int)",
        "  │ ├ 9 (int)",
        "  │ └ :=",
        "  │   ├ []",
        "  │   │ ├ buf",
        "  │   │ └ i",
        "  │   └ 0.5 (real)",
        "  └ while",
        "    ├ <",
        "    │ ├ total",
        "    │ └ 100 (int)",
        "    └ Body",
        "      └ ...",
        "        └ :=",
        "          ├ total",
        "          └ +",
        "            ├ total",
        "            └ 1 (int)",
    ];
    assert_renders(&program, &expected);
    assert_eq!(program.node_count(), expected.len());
    assert_eq!(
        TreeDump(program.as_node()).to_string(),
        expected.join("\n")
    );
}

#[test]
fn e2e_collect_identifiers() {
    let program = load_program("loops.json");
    assert_eq!(
        collect_idents(&program),
        vec!["Loops", "i", "total", "buf", "i", "buf", "i", "total", "total", "total"]
    );
}

#[test]
fn e2e_annotate_with_side_table() {
    let program = load_program("loops.json");
    let root = program.as_node();

    // Depth of every node, computed outside the tree
    let mut depths = SideTable::new();
    fn walk(node: NodeRef<'_>, depth: usize, next_id: &mut usize, out: &mut SideTable<usize>) {
        out.insert(NodeId(*next_id), depth);
        *next_id += 1;
        for child in node.children() {
            walk(child, depth + 1, next_id, out);
        }
    }
    let mut next_id = 0;
    walk(root, 0, &mut next_id, &mut depths);

    assert_eq!(depths.len(), root.node_count());

    // The dump indents each node by two columns per level
    let lines = program.render();
    for (id, depth) in depths.iter() {
        let indent = lines[id.0]
            .chars()
            .take_while(|c| "├│└ ".contains(*c))
            .count();
        assert_eq!(indent, depth * 2, "line {:?}", lines[id.0]);
    }
}
