//! className injection for JSX elements.

use oxc_allocator::{Allocator, CloneIn};
use oxc_ast::ast::*;
use oxc_ast::AstBuilder;
use oxc_ast_visit::walk_mut::walk_jsx_opening_element;
use oxc_ast_visit::VisitMut;
use oxc_span::SPAN;

use crate::options::IgnoreSet;
use crate::tag::TagName;

// ═══════════════════════════════════════════════════════════════════════════════
// CLASSNAME INJECTOR
// Appends or merges a className attribute on every non-ignored JSX element
// ═══════════════════════════════════════════════════════════════════════════════

pub struct ClassNameInjector<'a> {
    pub ast: AstBuilder<'a>,
    class_name: String,
    ignore: IgnoreSet,
    pub elements_transformed: u32,
}

impl<'a> ClassNameInjector<'a> {
    pub fn new(allocator: &'a Allocator, class_name: &str, ignore: IgnoreSet) -> Self {
        Self {
            ast: AstBuilder::new(allocator),
            class_name: class_name.to_string(),
            ignore,
            elements_transformed: 0,
        }
    }

    fn string_value(&self, value: &str) -> JSXAttributeValue<'a> {
        let atom = self.ast.allocator.alloc_str(value);
        JSXAttributeValue::StringLiteral(self.ast.alloc(self.ast.string_literal(SPAN, atom, None)))
    }

    fn appended_attribute(&self) -> JSXAttributeItem<'a> {
        let name = JSXAttributeName::Identifier(
            self.ast.alloc(self.ast.jsx_identifier(SPAN, "className")),
        );
        JSXAttributeItem::Attribute(self.ast.alloc(self.ast.jsx_attribute(
            SPAN,
            name,
            Some(self.string_value(&self.class_name)),
        )))
    }

    fn joined(&self, existing: &str) -> String {
        format!("{} {}", existing, self.class_name)
    }

    /// Identifiers and member accesses bind tighter than `+` already;
    /// anything else is wrapped so the addition cannot reassociate it.
    fn needs_parens(expr: &Expression<'a>) -> bool {
        !matches!(
            expr,
            Expression::Identifier(_)
                | Expression::StaticMemberExpression(_)
                | Expression::ComputedMemberExpression(_)
                | Expression::PrivateFieldExpression(_)
                | Expression::ParenthesizedExpression(_)
        )
    }

    fn contained(&self, expression: Expression<'a>) -> JSXAttributeValue<'a> {
        JSXAttributeValue::ExpressionContainer(
            self.ast
                .alloc(self.ast.jsx_expression_container(SPAN, JSXExpression::from(expression))),
        )
    }

    fn merged_expression_value(&self, expr: &Expression<'a>) -> JSXAttributeValue<'a> {
        // Both operands are compile-time constants; fold them into one
        // literal instead of emitting an addition.
        if let Expression::StringLiteral(lit) = expr {
            let merged = self.joined(lit.value.as_str());
            let atom = self.ast.allocator.alloc_str(&merged);
            return self.contained(self.ast.expression_string_literal(SPAN, atom, None));
        }

        let mut left = expr.clone_in(self.ast.allocator);
        if Self::needs_parens(&left) {
            left = self.ast.expression_parenthesized(SPAN, left);
        }
        let suffix = self
            .ast
            .allocator
            .alloc_str(&format!(" {}", self.class_name));
        let right = self.ast.expression_string_literal(SPAN, suffix, None);
        let addition = self
            .ast
            .expression_binary(SPAN, left, BinaryOperator::Addition, right);
        self.contained(addition)
    }

    fn inject(&mut self, elem: &mut JSXOpeningElement<'a>) {
        for item in elem.attributes.iter_mut() {
            let attr = match item {
                JSXAttributeItem::Attribute(attr) => attr,
                // Spreads are never the rewrite target and keep their position.
                JSXAttributeItem::SpreadAttribute(_) => continue,
            };
            let is_class_name = matches!(
                &attr.name,
                JSXAttributeName::Identifier(id) if id.name.as_str() == "className"
            );
            if !is_class_name {
                continue;
            }

            let replacement = match &attr.value {
                Some(JSXAttributeValue::StringLiteral(lit)) => {
                    Some(self.string_value(&self.joined(lit.value.as_str())))
                }
                Some(JSXAttributeValue::ExpressionContainer(container)) => container
                    .expression
                    .as_expression()
                    .map(|expr| self.merged_expression_value(expr)),
                // Element/fragment values don't occur for class names; leave them.
                Some(_) => None,
                // Boolean shorthand: the class becomes the value.
                None => Some(self.string_value(&self.class_name)),
            };

            if let Some(value) = replacement {
                attr.value = Some(value);
                self.elements_transformed += 1;
            }
            return;
        }

        elem.attributes.push(self.appended_attribute());
        self.elements_transformed += 1;
    }
}

impl<'a> VisitMut<'a> for ClassNameInjector<'a> {
    fn visit_jsx_opening_element(&mut self, elem: &mut JSXOpeningElement<'a>) {
        if !self.ignore.contains(&TagName::from_jsx_name(&elem.name)) {
            self.inject(elem);
        }
        // Ignoring is local to the element; attribute expressions (and through
        // them, nested JSX) are still traversed.
        walk_jsx_opening_element(self, elem);
    }
}
