//! Integration tests for the shared node protocol: child counts,
//! traversal and rendering over whole trees.

use pasc_ast::*;

fn lit(text: &str) -> Literal {
    Literal::new(text).expect("valid literal")
}

fn ident(name: &str) -> Ident {
    Ident::new(name)
}

fn var_decl(names: &[&str], ty: &str) -> VarDecl {
    VarDecl::new(
        IdentList::new(names.iter().map(|n| ident(n)).collect()),
        TypeSpec::new(ty),
    )
}

/// A program touching every node kind:
///
/// ```text
/// program Sample;
/// var a, b: integer; v: array [1..10] of real;
/// begin
///   procedure reset; begin b := 0 end;
///   function twice(n: integer): integer; begin twice := n * 2 end;
///   a := twice(3);
///   for i := 1 to 10 do v[i] := a / 2;
///   while a > 0 do begin a := a - 1 end;
///   if (a = 0) or (b <> 1) then reset
/// end.
/// ```
fn sample_program() -> Program {
    let vars = VarsDecl::new(vec![
        var_decl(&["a", "b"], "integer").into(),
        ArrayDecl::new(ident("v"), lit("1"), lit("10"), TypeSpec::new("real")).into(),
    ]);

    let reset = ProcedureDecl::without_params(
        ident("reset"),
        VarsDecl::new(vec![]),
        StmtList::new(vec![Assign::new(ident("b"), lit("0")).into()]),
    );

    let twice = FunctionDecl::new(
        ident("twice"),
        Params::new(vec![var_decl(&["n"], "integer")]),
        TypeSpec::new("integer"),
        VarsDecl::new(vec![]),
        StmtList::new(vec![Assign::new(
            ident("twice"),
            BinaryOp::new(BinOp::Mul, ident("n"), lit("2")),
        )
        .into()]),
    );

    let call_twice = Assign::new(ident("a"), Call::new(ident("twice"), vec![lit("3").into()]));

    let for_loop = For::new(
        Some(Assign::new(ident("i"), lit("1")).into()),
        lit("10"),
        Some(
            Assign::new(
                ArrayElementRef::new(ident("v"), ident("i")),
                BinaryOp::new(BinOp::Division, ident("a"), lit("2")),
            )
            .into(),
        ),
    );

    let while_loop = While::new(
        BinaryOp::new(BinOp::Gt, ident("a"), lit("0")),
        Body::new(StmtList::new(vec![Assign::new(
            ident("a"),
            BinaryOp::new(BinOp::Sub, ident("a"), lit("1")),
        )
        .into()])),
    );

    let cond = If::new(
        BinaryOp::new(
            BinOp::Or,
            BinaryOp::new(BinOp::Eq, ident("a"), lit("0")),
            BinaryOp::new(BinOp::Ne, ident("b"), lit("1")),
        ),
        Call::new(ident("reset"), vec![]),
    );

    Program::new(
        ident("Sample"),
        vars,
        StmtList::new(vec![
            reset.into(),
            twice.into(),
            call_twice.into(),
            for_loop.into(),
            while_loop.into(),
            cond.into(),
        ]),
    )
}

/// Child count each kind must report, given what is inside it
fn expected_children(node: NodeRef<'_>) -> usize {
    match node {
        NodeRef::Literal(_) | NodeRef::Ident(_) | NodeRef::TypeSpec(_) => 0,
        NodeRef::ArrayElementRef(_) => 2,
        NodeRef::BinaryOp(_) => 2,
        NodeRef::IdentList(n) => n.idents().len(),
        NodeRef::VarDecl(_) => 2,
        NodeRef::ArrayDecl(_) => 4,
        NodeRef::VarsDecl(n) => n.entries().len(),
        NodeRef::Call(n) => 1 + n.args().len(),
        NodeRef::Assign(_) => 2,
        NodeRef::If(n) => 2 + usize::from(n.else_branch().is_some()),
        NodeRef::While(_) => 2,
        NodeRef::For(_) => 3,
        NodeRef::StmtList(n) => n.len(),
        NodeRef::Body(_) => 1,
        NodeRef::Params(n) => n.decls().len(),
        NodeRef::Program(_) => 3,
        NodeRef::ProcedureDecl(_) => 4,
        NodeRef::FunctionDecl(_) => 5,
    }
}

#[test]
fn test_sample_covers_every_kind() {
    let program = sample_program();
    let mut seen = std::collections::HashSet::new();
    program.visit(|node| {
        seen.insert(node.kind());
    });
    for kind in NodeKind::ALL {
        assert!(seen.contains(&kind), "sample program has no {} node", kind);
    }
}

#[test]
fn test_child_counts_match_kind_shapes() {
    let program = sample_program();
    program.visit(|node| {
        assert_eq!(
            node.children().len(),
            expected_children(node),
            "wrong child count for {}",
            node.kind()
        );
    });
}

#[test]
fn test_visit_reaches_every_node_once() {
    let program = sample_program();

    // Count nodes independently of the traversal, by recursing over children
    fn count(node: NodeRef<'_>) -> usize {
        1 + node.children().into_iter().map(count).sum::<usize>()
    }

    let mut visited = 0;
    program.visit(|_| visited += 1);
    assert_eq!(visited, count(program.as_node()));
    assert_eq!(visited, program.node_count());
}

#[test]
fn test_visit_is_pre_order() {
    let program = sample_program();
    let mut order = Vec::new();
    program.visit(|node| order.push(node));

    // Every node appears before all of its children, and children keep their order
    for (i, node) in order.iter().enumerate() {
        let mut last = i;
        for child in node.children() {
            let pos = order[last + 1..]
                .iter()
                .position(|n| std::ptr::eq(n.meta(), child.meta()))
                .map(|p| p + last + 1)
                .expect("child visited after parent");
            last = pos;
        }
    }
    assert_eq!(order[0].kind(), NodeKind::Program);
}

#[test]
fn test_visit_on_subtree() {
    let program = sample_program();
    let body = program.body();
    let mut visited = 0;
    body.visit(|_| visited += 1);
    assert_eq!(visited, program.node_count() - 1 - 1 - program.vars().node_count());
}

#[test]
fn test_render_line_count_matches_node_count() {
    let program = sample_program();
    let lines = program.render();
    assert_eq!(lines.len(), program.node_count());
    assert_eq!(lines[0], "Program");
}

#[test]
fn test_render_is_deterministic() {
    assert_eq!(sample_program().render(), sample_program().render());
    assert_eq!(sample_program(), sample_program());
}

#[test]
fn test_render_shape_ignores_field_values() {
    // Same structure, different names and values: marker layout must match
    let a = Assign::new(ident("x"), BinaryOp::new(BinOp::Add, ident("y"), lit("1")));
    let b = Assign::new(ident("total"), BinaryOp::new(BinOp::Mul, ident("z"), lit("'s'")));

    fn markers(lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.chars().filter(|c| "├│└".contains(*c)).collect())
            .collect()
    }
    assert_eq!(markers(&a.render()), markers(&b.render()));
}

#[test]
fn test_exactly_one_terminal_branch_per_parent() {
    let program = sample_program();
    program.visit(|node| {
        let children = node.children();
        if children.is_empty() {
            return;
        }
        // Child blocks start at the lines with no indentation below the label
        let lines = node.render();
        let starts: Vec<&String> = lines[1..]
            .iter()
            .filter(|l| l.starts_with('├') || l.starts_with('└'))
            .collect();
        assert_eq!(starts.len(), children.len());
        let terminal: Vec<usize> = starts
            .iter()
            .enumerate()
            .filter(|(_, l)| l.starts_with('└'))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(terminal, vec![children.len() - 1]);
    });
}

#[test]
fn test_side_table_over_program() {
    let program = sample_program();
    let root = program.as_node();
    let types = SideTable::from_tree(root, |node| match node {
        NodeRef::Literal(lit) => Some(lit.ty()),
        _ => None,
    });

    let literal_count = root
        .pre_order()
        .filter(|n| n.kind() == NodeKind::Literal)
        .count();
    assert_eq!(types.len(), literal_count);
    for (id, ty) in types.iter() {
        match root.node_at(id) {
            Some(NodeRef::Literal(lit)) => assert_eq!(lit.ty(), *ty),
            other => panic!("id {:?} points at {:?}", id, other),
        }
    }
}

#[test]
fn test_concurrent_readers() {
    let program = sample_program();
    let expected = program.render();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| program.render()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("render thread"), expected);
        }
    });
}
