//! Statement model for synthesized binding code.
//!
//! Synthesis produces a tree of [`IRNode`]s rather than strings. A backend
//! (the bundled [`IRPrinter`](super::ir_printer::IRPrinter) renders Java)
//! walks the tree and owns all surface syntax and formatting.
//!
//! The model only covers what binding code needs: member access, calls,
//! assignments, class literals, and anonymous subclasses with overriding
//! methods.

use serde::Serialize;

/// Reference to a declared type, optionally parameterized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IRType {
    pub qualified_name: String,
    pub type_args: Vec<Self>,
}

impl IRType {
    pub fn named(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            type_args: Vec::new(),
        }
    }

    pub fn generic(qualified_name: impl Into<String>, type_args: Vec<Self>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            type_args,
        }
    }

    /// Package part of the qualified name, empty for the default package.
    ///
    /// The package ends before the first segment that starts with an
    /// uppercase letter, so `com.ex.Outer.Inner` lives in `com.ex`.
    pub fn package(&self) -> &str {
        split_package(&self.qualified_name).0
    }

    /// Class path inside the package, e.g. `Outer.Inner`.
    pub fn class_path(&self) -> &str {
        split_package(&self.qualified_name).1
    }
}

/// Split a qualified name into package and class path. Names with no
/// capitalised segment fall back to splitting at the last dot.
pub fn split_package(qualified_name: &str) -> (&str, &str) {
    let mut class_start = 0;
    for segment in qualified_name.split('.') {
        if segment.starts_with(char::is_uppercase) {
            break;
        }
        class_start += segment.len() + 1;
    }
    if class_start == 0 {
        ("", qualified_name)
    } else if class_start > qualified_name.len() {
        qualified_name
            .rsplit_once('.')
            .unwrap_or(("", qualified_name))
    } else {
        (
            &qualified_name[..class_start - 1],
            &qualified_name[class_start..],
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", content = "value", rename_all = "snake_case")]
pub enum IRNode {
    // =========================================================================
    // Literals
    // =========================================================================
    /// `Foo.class`
    ClassLiteral(IRType),

    // =========================================================================
    // Expressions
    // =========================================================================
    /// Local name: `target`, `data`
    Identifier(String),

    /// Static receiver: `ViewModelProviders` in `ViewModelProviders.of(..)`
    TypeRef(IRType),

    /// `object.property`
    PropertyAccess { object: Box<Self>, property: String },

    /// `receiver.method(args)`
    MethodCall {
        receiver: Box<Self>,
        method: String,
        arguments: Vec<Self>,
    },

    /// `target = value`
    Assignment { target: Box<Self>, value: Box<Self> },

    /// `new Superclass<T>() { methods }`
    AnonymousClass {
        superclass: IRType,
        methods: Vec<IRMethod>,
    },

    // =========================================================================
    // Statements
    // =========================================================================
    /// `expr;`
    ExpressionStatement(Box<Self>),

    /// `// text`
    Comment(String),

    // =========================================================================
    // Declarations
    // =========================================================================
    /// `public Name(params) { body }`
    Constructor {
        class_name: String,
        parameters: Vec<IRParam>,
        body: Vec<Self>,
    },

    /// `package p; public final class Name { members }`
    ClassDecl {
        package: String,
        name: String,
        members: Vec<Self>,
    },
}

/// Method of an anonymous class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IRMethod {
    pub name: String,
    pub annotations: Vec<String>,
    pub modifiers: Vec<String>,
    pub parameters: Vec<IRParam>,
    pub body: Vec<IRNode>,
}

impl IRMethod {
    /// `@Override public final void name(params) { body }`
    pub fn override_final(
        name: impl Into<String>,
        parameters: Vec<IRParam>,
        body: Vec<IRNode>,
    ) -> Self {
        Self {
            name: name.into(),
            annotations: vec!["Override".to_string()],
            modifiers: vec!["public".to_string(), "final".to_string()],
            parameters,
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IRParam {
    pub name: String,
    pub ty: IRType,
}

impl IRParam {
    pub fn new(name: impl Into<String>, ty: IRType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

// =========================================================================
// Builder helpers for IR construction
// =========================================================================

impl IRNode {
    /// Create an identifier node
    pub fn id(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Create a property access
    pub fn prop(object: Self, property: impl Into<String>) -> Self {
        Self::PropertyAccess {
            object: Box::new(object),
            property: property.into(),
        }
    }

    /// Create a method call on `receiver`
    pub fn call(receiver: Self, method: impl Into<String>, args: Vec<Self>) -> Self {
        Self::MethodCall {
            receiver: Box::new(receiver),
            method: method.into(),
            arguments: args,
        }
    }

    /// Create a static call: `Type.method(args)`
    pub fn static_call(ty: IRType, method: impl Into<String>, args: Vec<Self>) -> Self {
        Self::call(Self::TypeRef(ty), method, args)
    }

    /// Create an assignment expression
    pub fn assign(target: Self, value: Self) -> Self {
        Self::Assignment {
            target: Box::new(target),
            value: Box::new(value),
        }
    }

    /// Create an expression statement
    pub fn expr_stmt(expr: Self) -> Self {
        Self::ExpressionStatement(Box::new(expr))
    }

    /// Create `Foo.class`
    pub fn class_literal(qualified_name: impl Into<String>) -> Self {
        Self::ClassLiteral(IRType::named(qualified_name))
    }
}
