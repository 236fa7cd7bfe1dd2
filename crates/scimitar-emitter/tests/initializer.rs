use super::*;
use crate::transforms::ir_printer::IRPrinter;
use scimitar_binder::{
    BindingConfig, FactoryMap, LifecycleRole, MethodRegistry, MethodTriple, TypeArena, TypeId,
};
use std::sync::Arc;

struct Fixture {
    arena: TypeArena,
    base: TypeId,
    target: TypeId,
}

/// `com.example.MainActivity extends com.example.BaseActivity`
fn fixture() -> Fixture {
    let mut arena = TypeArena::new();
    let base = arena.alloc("com.example.BaseActivity").unwrap();
    let target = arena.alloc_subclass("com.example.MainActivity", base).unwrap();
    Fixture {
        arena,
        base,
        target,
    }
}

fn factories(bindings: Vec<Binding>) -> Arc<FactoryMap> {
    let mut map = FactoryMap::new();
    for binding in bindings {
        map.declare(binding).unwrap();
    }
    Arc::new(map)
}

fn assigned_member(statement: &IRNode) -> (&str, &IRNode) {
    let IRNode::ExpressionStatement(expr) = statement else {
        panic!("not a statement: {statement:?}");
    };
    let IRNode::Assignment { target, value } = expr.as_ref() else {
        panic!("not an assignment: {expr:?}");
    };
    let IRNode::PropertyAccess { property, .. } = target.as_ref() else {
        panic!("assignment target is not a member: {target:?}");
    };
    (property.as_str(), value.as_ref())
}

fn end_to_end_set(fx: &Fixture, config: BindingConfig) -> BindingSet {
    let mut set = BindingSet::new(fx.target, config);
    set.set_factories(factories(vec![Binding::factory(
        "defaultFactory",
        fx.base,
        true,
    )]));
    set.add_view_model(Binding::view_model(
        "viewModel",
        fx.target,
        "com.example.UserViewModel",
    ))
    .unwrap();
    set.add_method(
        "users",
        Binding::lifecycle("showUsers", fx.target, LifecycleRole::Success)
            .with_declared_type("com.example.User"),
    )
    .unwrap();
    set.add_method(
        "users",
        Binding::lifecycle("showError", fx.target, LifecycleRole::Error),
    )
    .unwrap();
    set
}

#[test]
fn test_end_to_end_two_statements() {
    let fx = fixture();
    let set = end_to_end_set(&fx, BindingConfig::new(true));

    let spec = build_initializer(&set, &fx.arena).unwrap();
    assert_eq!(spec.statements.len(), 2);
    assert!(spec.diagnostics.is_empty());

    let (member, value) = assigned_member(&spec.statements[0]);
    assert_eq!(member, "viewModel");
    assert_eq!(
        IRPrinter::emit_to_string(value),
        "androidx.lifecycle.ViewModelProviders.of(target, target.defaultFactory)\
         .get(com.example.UserViewModel.class)"
    );

    let (member, value) = assigned_member(&spec.statements[1]);
    assert_eq!(member, "stateObserver");
    let IRNode::AnonymousClass { methods, .. } = value else {
        panic!("observer value is not a dispatch object");
    };
    assert_eq!(methods.len(), 2);
    assert_eq!(spec.dispatches.len(), 1);
    assert_eq!(spec.dispatches[0].callbacks.len(), 2);
    assert_eq!(*value, spec.dispatches[0].to_ir());
}

#[test]
fn test_arch_provider_and_missing_factory() {
    let fx = fixture();
    let mut set = BindingSet::new(fx.target, BindingConfig::new(false));
    set.add_view_model(Binding::view_model("vm", fx.target, "com.example.VM"))
        .unwrap();

    let spec = build_initializer(&set, &fx.arena).unwrap();
    assert_eq!(
        IRPrinter::emit_to_string(&spec.statements[0]),
        "target.vm = android.arch.lifecycle.ViewModelProviders.of(target)\
         .get(com.example.VM.class);"
    );
}

#[test]
fn test_build_is_idempotent() {
    let fx = fixture();
    let set = end_to_end_set(&fx, BindingConfig::default());

    let first = build_initializer(&set, &fx.arena).unwrap();
    let second = build_initializer(&set, &fx.arena).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_view_models_emitted_in_declaration_order() {
    let fx = fixture();
    let mut set = BindingSet::new(fx.target, BindingConfig::default());
    for name in ["zebra", "apple", "mango"] {
        set.add_view_model(Binding::view_model(name, fx.target, "com.example.VM"))
            .unwrap();
    }

    let spec = build_initializer(&set, &fx.arena).unwrap();
    let members: Vec<_> = spec
        .statements
        .iter()
        .map(|stmt| assigned_member(stmt).0)
        .collect();
    assert_eq!(members, vec!["zebra", "apple", "mango"]);
}

#[test]
fn test_ambiguous_local_factory_warns_by_default() {
    let fx = fixture();
    let mut set = BindingSet::new(fx.target, BindingConfig::default());
    set.set_factories(factories(vec![
        Binding::factory("second", fx.target, false),
        Binding::factory("first", fx.target, false),
    ]));
    set.add_view_model(Binding::view_model("vm", fx.target, "com.example.VM"))
        .unwrap();

    let spec = build_initializer(&set, &fx.arena).unwrap();
    assert!(IRPrinter::emit_to_string(&spec.statements[0]).contains("target.first)"));

    assert_eq!(spec.diagnostics.len(), 1);
    let diag = &spec.diagnostics[0];
    assert_eq!(diag.category, DiagnosticCategory::Warning);
    assert_eq!(diag.code, diagnostic_codes::AMBIGUOUS_FACTORY_BINDING);
    assert_eq!(diag.member, "vm");
    assert_eq!(diag.related_information.len(), 1);
    assert_eq!(diag.related_information[0].member, "second");
}

#[test]
fn test_ambiguous_local_factory_denied() {
    let fx = fixture();
    let config = BindingConfig::default().with_ambiguity(AmbiguityPolicy::Deny);
    let mut set = BindingSet::new(fx.target, config);
    set.set_factories(factories(vec![
        Binding::factory("b", fx.target, false),
        Binding::factory("a", fx.target, false),
    ]));
    set.add_view_model(Binding::view_model("vm", fx.target, "com.example.VM"))
        .unwrap();

    let err = build_initializer(&set, &fx.arena).unwrap_err();
    assert_eq!(
        err,
        SynthesisError::AmbiguousFactory {
            view_model: "vm".to_string(),
            owner: "com.example.MainActivity".to_string(),
            factories: vec!["a".to_string(), "b".to_string()],
        }
    );
}

#[test]
fn test_empty_triple_aborts_target() {
    let fx = fixture();
    let mut set = BindingSet::new(fx.target, BindingConfig::default());
    let mut methods = MethodRegistry::new();
    methods.insert_triple("ghost", MethodTriple::default());
    set.set_methods(methods);

    assert_eq!(
        build_initializer(&set, &fx.arena).unwrap_err(),
        SynthesisError::EmptyMethodTriple {
            state_id: "ghost".to_string()
        }
    );
}

#[test]
fn test_missing_view_model_type_is_rejected() {
    let fx = fixture();
    let mut set = BindingSet::new(fx.target, BindingConfig::default());
    let mut vm = Binding::view_model("vm", fx.target, "unused");
    vm.declared_type = None;
    set.add_view_model(vm).unwrap();

    assert_eq!(
        build_initializer(&set, &fx.arena).unwrap_err(),
        SynthesisError::MissingViewModelType {
            member: "vm".to_string()
        }
    );
}

#[test]
fn test_cyclic_hierarchy_reports_and_omits_factory() {
    let mut fx = fixture();
    fx.arena.set_superclass(fx.base, Some(fx.target));
    let mut set = BindingSet::new(fx.target, BindingConfig::default());
    set.add_view_model(Binding::view_model("vm", fx.target, "com.example.VM"))
        .unwrap();

    let spec = build_initializer(&set, &fx.arena).unwrap();
    assert!(IRPrinter::emit_to_string(&spec.statements[0]).contains(".of(target)"));
    assert_eq!(spec.diagnostics.len(), 1);
    assert_eq!(
        spec.diagnostics[0].code,
        diagnostic_codes::HIERARCHY_WALK_ABORTED
    );
}

#[test]
fn test_observer_slot_is_configurable() {
    let fx = fixture();
    let set = end_to_end_set(&fx, BindingConfig::default().with_observer_slot("usersObserver"));

    let spec = build_initializer(&set, &fx.arena).unwrap();
    assert_eq!(assigned_member(&spec.statements[1]).0, "usersObserver");
}

#[test]
fn test_binding_class_ir() {
    let fx = fixture();
    let set = BindingSet::new(fx.target, BindingConfig::default());
    let spec = build_initializer(&set, &fx.arena).unwrap();

    assert_eq!(spec.binding_class_name(), "MainActivity_Binding");
    let IRNode::ClassDecl { package, name, .. } = spec.to_class_ir() else {
        panic!("binding unit is not a class");
    };
    assert_eq!(package, "com.example");
    assert_eq!(name, "MainActivity_Binding");
}

#[test]
fn test_nested_target_keeps_enclosing_package() {
    let mut arena = TypeArena::new();
    let target = arena.alloc("com.ex.Outer.Inner").unwrap();
    let set = BindingSet::new(target, BindingConfig::default());
    let spec = build_initializer(&set, &arena).unwrap();

    assert_eq!(spec.binding_class_name(), "Outer$Inner_Binding");
    let text = IRPrinter::emit_to_string(&spec.to_class_ir());
    assert!(text.starts_with("package com.ex;\n"));
    assert!(text.contains("public Outer$Inner_Binding(com.ex.Outer.Inner target) { }"));
}
