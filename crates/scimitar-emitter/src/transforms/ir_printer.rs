//! Java source printer for the binding IR.
//!
//! Names are printed fully qualified, so generated units need no imports.

use super::ir::{IRMethod, IRNode, IRParam, IRType};

pub struct IRPrinter {
    output: String,
    indent_level: u32,
    indent_str: &'static str,
}

impl Default for IRPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl IRPrinter {
    pub const fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_str: "    ",
        }
    }

    pub const fn with_indent(indent_str: &'static str) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_str,
        }
    }

    /// Render a single node with a fresh printer.
    pub fn emit_to_string(node: &IRNode) -> String {
        let mut printer = Self::new();
        printer.emit_node(node);
        printer.take_output()
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    pub fn get_output(&self) -> &str {
        &self.output
    }

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn write_line(&mut self) {
        self.output.push('\n');
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(self.indent_str);
        }
    }

    const fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    const fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn emit_node(&mut self, node: &IRNode) {
        match node {
            IRNode::ClassLiteral(ty) => {
                self.emit_type(ty);
                self.write(".class");
            }
            IRNode::Identifier(name) => self.write(name),
            IRNode::TypeRef(ty) => self.emit_type(ty),
            IRNode::PropertyAccess { object, property } => {
                self.emit_node(object);
                self.write(".");
                self.write(property);
            }
            IRNode::MethodCall {
                receiver,
                method,
                arguments,
            } => {
                self.emit_node(receiver);
                self.write(".");
                self.write(method);
                self.write("(");
                self.emit_comma_separated(arguments);
                self.write(")");
            }
            IRNode::Assignment { target, value } => {
                self.emit_node(target);
                self.write(" = ");
                self.emit_node(value);
            }
            IRNode::AnonymousClass {
                superclass,
                methods,
            } => self.emit_anonymous_class(superclass, methods),
            IRNode::ExpressionStatement(expr) => {
                self.emit_node(expr);
                self.write(";");
            }
            IRNode::Comment(text) => {
                self.write("// ");
                self.write(text);
            }
            IRNode::Constructor {
                class_name,
                parameters,
                body,
            } => {
                self.write("public ");
                self.write(class_name);
                self.write("(");
                self.emit_parameters(parameters);
                self.write(") ");
                self.emit_block(body);
            }
            IRNode::ClassDecl {
                package,
                name,
                members,
            } => self.emit_class_decl(package, name, members),
        }
    }

    pub fn emit_type(&mut self, ty: &IRType) {
        self.write(&ty.qualified_name);
        if !ty.type_args.is_empty() {
            self.write("<");
            for (i, arg) in ty.type_args.iter().enumerate() {
                if i > 0 {
                    self.write(", ");
                }
                self.emit_type(arg);
            }
            self.write(">");
        }
    }

    fn emit_comma_separated(&mut self, nodes: &[IRNode]) {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_node(node);
        }
    }

    fn emit_parameters(&mut self, params: &[IRParam]) {
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_type(&param.ty);
            self.write(" ");
            self.write(&param.name);
        }
    }

    /// `{`, one statement per line at the next indent level, `}`.
    fn emit_block(&mut self, body: &[IRNode]) {
        if body.is_empty() {
            self.write("{ }");
            return;
        }
        self.write("{");
        self.write_line();
        self.increase_indent();
        for stmt in body {
            self.write_indent();
            self.emit_node(stmt);
            self.write_line();
        }
        self.decrease_indent();
        self.write_indent();
        self.write("}");
    }

    fn emit_anonymous_class(&mut self, superclass: &IRType, methods: &[IRMethod]) {
        self.write("new ");
        self.emit_type(superclass);
        self.write("() {");
        self.write_line();
        self.increase_indent();
        for (i, method) in methods.iter().enumerate() {
            if i > 0 {
                self.write_line();
            }
            self.emit_method(method);
        }
        self.decrease_indent();
        self.write_indent();
        self.write("}");
    }

    fn emit_method(&mut self, method: &IRMethod) {
        for annotation in &method.annotations {
            self.write_indent();
            self.write("@");
            self.write(annotation);
            self.write_line();
        }
        self.write_indent();
        for modifier in &method.modifiers {
            self.write(modifier);
            self.write(" ");
        }
        self.write("void ");
        self.write(&method.name);
        self.write("(");
        self.emit_parameters(&method.parameters);
        self.write(") ");
        self.emit_block(&method.body);
        self.write_line();
    }

    fn emit_class_decl(&mut self, package: &str, name: &str, members: &[IRNode]) {
        if !package.is_empty() {
            self.write("package ");
            self.write(package);
            self.write(";");
            self.write_line();
            self.write_line();
        }
        self.write("public final class ");
        self.write(name);
        self.write(" {");
        self.write_line();
        self.increase_indent();
        for member in members {
            self.write_indent();
            self.emit_node(member);
            self.write_line();
        }
        self.decrease_indent();
        self.write("}");
        self.write_line();
    }
}

#[cfg(test)]
#[path = "../../tests/ir_printer.rs"]
mod tests;
