//! Tag identity for JSX elements.
//!
//! Ignore matching must distinguish `<Fragment/>` from `<React.Fragment/>`,
//! so tag names are a small tagged variant instead of a raw string.

use oxc_ast::ast::{JSXElementName, JSXMemberExpression, JSXMemberExpressionObject};

/// Identity of a JSX tag: a bare identifier or a dotted member path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagName {
    Identifier(String),
    MemberPath(Vec<String>),
}

impl TagName {
    pub fn from_jsx_name(name: &JSXElementName) -> Self {
        match name {
            JSXElementName::Identifier(id) => TagName::Identifier(id.name.to_string()),
            JSXElementName::IdentifierReference(id) => TagName::Identifier(id.name.to_string()),
            JSXElementName::NamespacedName(ns) => {
                TagName::Identifier(format!("{}:{}", ns.namespace.name, ns.name.name))
            }
            JSXElementName::MemberExpression(me) => TagName::MemberPath(member_segments(me)),
            JSXElementName::ThisExpression(_) => TagName::Identifier("this".to_string()),
        }
    }

    /// Leading identifier: `React` for `React.Fragment`, the name itself otherwise.
    pub fn root(&self) -> &str {
        match self {
            TagName::Identifier(name) => name,
            TagName::MemberPath(segments) => segments.first().map(String::as_str).unwrap_or(""),
        }
    }

    /// Full dotted path: `React.Fragment`, `A.B.C`.
    pub fn qualified(&self) -> String {
        match self {
            TagName::Identifier(name) => name.clone(),
            TagName::MemberPath(segments) => segments.join("."),
        }
    }
}

fn member_segments(me: &JSXMemberExpression) -> Vec<String> {
    let mut segments = match &me.object {
        JSXMemberExpressionObject::IdentifierReference(id) => vec![id.name.to_string()],
        JSXMemberExpressionObject::MemberExpression(inner) => member_segments(inner),
        JSXMemberExpressionObject::ThisExpression(_) => vec!["this".to_string()],
    };
    segments.push(me.property.name.to_string());
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_identity() {
        let tag = TagName::Identifier("Blue".to_string());
        assert_eq!(tag.root(), "Blue");
        assert_eq!(tag.qualified(), "Blue");
    }

    #[test]
    fn test_member_path_identity() {
        let tag = TagName::MemberPath(vec!["React".to_string(), "Fragment".to_string()]);
        assert_eq!(tag.root(), "React");
        assert_eq!(tag.qualified(), "React.Fragment");
    }

    #[test]
    fn test_deep_member_path() {
        let tag = TagName::MemberPath(vec![
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
        ]);
        assert_eq!(tag.root(), "A");
        assert_eq!(tag.qualified(), "A.B.C");
    }
}
