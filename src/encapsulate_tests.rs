#[cfg(test)]
mod tests {
    use crate::compile::encapsulate_source_internal;
    use crate::options::EncapsulateOptions;
    use oxc_allocator::Allocator;
    use oxc_codegen::Codegen;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    // Class derived from the fixture file name `yayEncapsulation.js`
    const FIXTURE: &str = "fixtures/yayEncapsulation.js";

    /// Generated code may be syntactically equivalent without being
    /// byte-equal; printing both sides through the same codegen normalizes
    /// them for comparison.
    fn printed(source: &str) -> String {
        let allocator = Allocator::default();
        let source_type = SourceType::default().with_module(true).with_jsx(true);
        let ret = Parser::new(&allocator, source, source_type).parse();
        assert!(
            ret.errors.is_empty(),
            "expected code should parse: {:?}",
            ret.errors
        );
        Codegen::new().build(&ret.program).code
    }

    fn encapsulated_with(source: &str, options: &EncapsulateOptions) -> String {
        encapsulate_source_internal(source, FIXTURE, options)
            .expect("Should encapsulate")
            .code
    }

    fn encapsulated(source: &str) -> String {
        encapsulated_with(source, &EncapsulateOptions::default())
    }

    #[test]
    fn test_element_with_no_attributes() {
        assert_eq!(
            encapsulated("<Blue/>"),
            printed(r#"<Blue className="yayEncapsulation"/>"#)
        );
    }

    #[test]
    fn test_host_element_with_no_attributes() {
        assert_eq!(
            encapsulated("<div/>"),
            printed(r#"<div className="yayEncapsulation"/>"#)
        );
    }

    #[test]
    fn test_nested_elements() {
        assert_eq!(
            encapsulated("<Blue><Red/></Blue>"),
            printed(
                r#"<Blue className="yayEncapsulation"><Red className="yayEncapsulation"/></Blue>"#
            )
        );
    }

    #[test]
    fn test_element_with_unrelated_attribute() {
        assert_eq!(
            encapsulated(r#"<Blue red="no"/>"#),
            printed(r#"<Blue red="no" className="yayEncapsulation"/>"#)
        );
    }

    #[test]
    fn test_class_name_string_literal_is_merged() {
        assert_eq!(
            encapsulated(r#"<Blue className="no"/>"#),
            printed(r#"<Blue className="no yayEncapsulation"/>"#)
        );
    }

    #[test]
    fn test_class_name_constant_expression_is_folded() {
        assert_eq!(
            encapsulated(r#"<Blue className={"blue"}/>"#),
            printed(r#"<Blue className={"blue yayEncapsulation"}/>"#)
        );
    }

    #[test]
    fn test_class_name_compound_expression_is_parenthesized() {
        assert_eq!(
            encapsulated(r#"<Blue className={yay ? "veryYay" : "boo"}/>"#),
            printed(r#"<Blue className={(yay ? "veryYay" : "boo") + " yayEncapsulation"}/>"#)
        );
    }

    #[test]
    fn test_class_name_identifier_expression_needs_no_parens() {
        assert_eq!(
            encapsulated("<Blue className={yay}/>"),
            printed(r#"<Blue className={yay + " yayEncapsulation"}/>"#)
        );
    }

    #[test]
    fn test_spread_attribute_gets_appended_class_name() {
        assert_eq!(
            encapsulated("<Blue {...yay}/>"),
            printed(r#"<Blue {...yay} className="yayEncapsulation"/>"#)
        );
    }

    #[test]
    fn test_class_name_before_spread_is_merged_in_place() {
        assert_eq!(
            encapsulated(r#"<Blue className="red" {...yay}/>"#),
            printed(r#"<Blue className="red yayEncapsulation" {...yay}/>"#)
        );
    }

    #[test]
    fn test_class_name_after_spread_is_merged_in_place() {
        assert_eq!(
            encapsulated("<Blue {...yay} className={yay.className}/>"),
            printed(r#"<Blue {...yay} className={yay.className + " yayEncapsulation"}/>"#)
        );
    }

    #[test]
    fn test_valueless_class_name_gains_the_class() {
        assert_eq!(
            encapsulated("<Blue className/>"),
            printed(r#"<Blue className="yayEncapsulation"/>"#)
        );
    }

    #[test]
    fn test_jsx_inside_attribute_expression_is_processed() {
        assert_eq!(
            encapsulated("<Blue icon={<Red/>}/>"),
            printed(
                r#"<Blue icon={<Red className="yayEncapsulation"/>} className="yayEncapsulation"/>"#
            )
        );
    }

    #[test]
    fn test_react_fragment_is_ignored() {
        assert_eq!(encapsulated("<React.Fragment/>"), printed("<React.Fragment/>"));
    }

    #[test]
    fn test_fragment_is_ignored() {
        assert_eq!(encapsulated("<Fragment/>"), printed("<Fragment/>"));
    }

    #[test]
    fn test_ignored_element_children_are_still_processed() {
        assert_eq!(
            encapsulated("<Fragment><Blue/></Fragment>"),
            printed(r#"<Fragment><Blue className="yayEncapsulation"/></Fragment>"#)
        );
    }

    #[test]
    fn test_fragment_shorthand_is_untouched() {
        assert_eq!(
            encapsulated("<><Blue/></>"),
            printed(r#"<><Blue className="yayEncapsulation"/></>"#)
        );
    }

    #[test]
    fn test_custom_ignored_elements() {
        let options = EncapsulateOptions {
            ignored_elements: vec!["IgnoreMe".to_string()],
            ..Default::default()
        };
        assert_eq!(
            encapsulated_with("<IgnoreMe/>", &options),
            printed("<IgnoreMe/>")
        );
        // The defaults still apply alongside the additions
        assert_eq!(
            encapsulated_with("<Fragment/>", &options),
            printed("<Fragment/>")
        );
    }

    #[test]
    fn test_custom_ignore_matches_dotted_root() {
        let options = EncapsulateOptions {
            ignored_elements: vec!["Ignored".to_string()],
            ..Default::default()
        };
        assert_eq!(
            encapsulated_with("<Ignored.Panel/>", &options),
            printed("<Ignored.Panel/>")
        );
    }

    #[test]
    fn test_ignore_entries_do_not_prefix_match() {
        assert_eq!(
            encapsulated("<ReactThing/>"),
            printed(r#"<ReactThing className="yayEncapsulation"/>"#)
        );
        assert_eq!(
            encapsulated("<React.Profiler/>"),
            printed(r#"<React.Profiler className="yayEncapsulation"/>"#)
        );
    }

    #[test]
    fn test_surrounding_code_is_preserved() {
        let source = "const yay = true;\nexport const El = () => <Blue className={yay}/>;";
        let expected = concat!(
            "const yay = true;\n",
            r#"export const El = () => <Blue className={yay + " yayEncapsulation"}/>;"#
        );
        assert_eq!(encapsulated(source), printed(expected));
    }

    #[test]
    fn test_transform_count_covers_every_non_ignored_element() {
        let result = encapsulate_source_internal(
            "<Fragment><Blue><Red/></Blue></Fragment>",
            FIXTURE,
            &EncapsulateOptions::default(),
        )
        .expect("Should encapsulate");
        assert_eq!(result.elements_transformed, 2);
    }
}
