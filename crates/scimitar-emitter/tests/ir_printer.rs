use super::*;

#[test]
fn test_emit_expressions() {
    assert_eq!(IRPrinter::emit_to_string(&IRNode::id("target")), "target");
    assert_eq!(
        IRPrinter::emit_to_string(&IRNode::class_literal("com.example.VM")),
        "com.example.VM.class"
    );
    assert_eq!(
        IRPrinter::emit_to_string(&IRNode::prop(IRNode::id("target"), "factory")),
        "target.factory"
    );
    assert_eq!(
        IRPrinter::emit_to_string(&IRNode::call(IRNode::id("target"), "load", vec![])),
        "target.load()"
    );
}

#[test]
fn test_emit_generic_type() {
    let ty = IRType::generic(
        "java.util.Map",
        vec![
            IRType::named("java.lang.String"),
            IRType::generic("java.util.List", vec![IRType::named("com.example.User")]),
        ],
    );
    let mut printer = IRPrinter::new();
    printer.emit_type(&ty);
    assert_eq!(
        printer.get_output(),
        "java.util.Map<java.lang.String, java.util.List<com.example.User>>"
    );
}

#[test]
fn test_emit_assignment_statement() {
    let stmt = IRNode::expr_stmt(IRNode::assign(
        IRNode::prop(IRNode::id("target"), "vm"),
        IRNode::static_call(
            IRType::named("androidx.lifecycle.ViewModelProviders"),
            "of",
            vec![IRNode::id("target")],
        ),
    ));
    assert_eq!(
        IRPrinter::emit_to_string(&stmt),
        "target.vm = androidx.lifecycle.ViewModelProviders.of(target);"
    );
}

#[test]
fn test_emit_anonymous_class() {
    let node = IRNode::AnonymousClass {
        superclass: IRType::generic("a.Observer", vec![IRType::named("a.User")]),
        methods: vec![
            IRMethod::override_final(
                "onLoading",
                vec![],
                vec![IRNode::expr_stmt(IRNode::call(
                    IRNode::id("target"),
                    "spin",
                    vec![],
                ))],
            ),
            IRMethod::override_final(
                "onSuccess",
                vec![IRParam::new("data", IRType::named("a.User"))],
                vec![IRNode::expr_stmt(IRNode::call(
                    IRNode::id("target"),
                    "show",
                    vec![IRNode::id("data")],
                ))],
            ),
        ],
    };
    let expected = "\
new a.Observer<a.User>() {
    @Override
    public final void onLoading() {
        target.spin();
    }

    @Override
    public final void onSuccess(a.User data) {
        target.show(data);
    }
}";
    assert_eq!(IRPrinter::emit_to_string(&node), expected);
}

#[test]
fn test_emit_class_with_constructor() {
    let class = IRNode::ClassDecl {
        package: "com.example".to_string(),
        name: "Main_Binding".to_string(),
        members: vec![
            IRNode::Comment("Generated".to_string()),
            IRNode::Constructor {
                class_name: "Main_Binding".to_string(),
                parameters: vec![IRParam::new("target", IRType::named("com.example.Main"))],
                body: vec![IRNode::expr_stmt(IRNode::assign(
                    IRNode::prop(IRNode::id("target"), "x"),
                    IRNode::id("target"),
                ))],
            },
        ],
    };
    let expected = "\
package com.example;

public final class Main_Binding {
    // Generated
    public Main_Binding(com.example.Main target) {
        target.x = target;
    }
}
";
    assert_eq!(IRPrinter::emit_to_string(&class), expected);
}

#[test]
fn test_empty_constructor_and_default_package() {
    let class = IRNode::ClassDecl {
        package: String::new(),
        name: "Main_Binding".to_string(),
        members: vec![IRNode::Constructor {
            class_name: "Main_Binding".to_string(),
            parameters: vec![IRParam::new("target", IRType::named("Main"))],
            body: vec![],
        }],
    };
    assert_eq!(
        IRPrinter::emit_to_string(&class),
        "public final class Main_Binding {\n    public Main_Binding(Main target) { }\n}\n"
    );
}

#[test]
fn test_custom_indent() {
    let mut printer = IRPrinter::with_indent("\t");
    printer.emit_node(&IRNode::Constructor {
        class_name: "B".to_string(),
        parameters: vec![IRParam::new("t", IRType::named("T"))],
        body: vec![IRNode::expr_stmt(IRNode::id("t"))],
    });
    assert_eq!(printer.take_output(), "public B(T t) {\n\tt;\n}");
    assert!(printer.get_output().is_empty());
}

#[test]
fn test_package_split_at_first_capitalised_segment() {
    use crate::transforms::ir::split_package;

    assert_eq!(split_package("com.ex.Main"), ("com.ex", "Main"));
    assert_eq!(split_package("com.ex.Outer.Inner"), ("com.ex", "Outer.Inner"));
    assert_eq!(split_package("Main"), ("", "Main"));
    assert_eq!(split_package("com.ex.main"), ("com.ex", "main"));
    assert_eq!(split_package("main"), ("", "main"));
}
