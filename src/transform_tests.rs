//! End-to-end tests for the export-naming pass.
//!
//! Comparisons collapse whitespace the same way the fixture outputs are
//! written, so the assertions read as plain before/after source text.

#[cfg(test)]
mod tests {
    use crate::{name_default_export, normalize, ERR_SYNTAX};
    use regex::Regex;

    fn squash(code: &str) -> String {
        Regex::new(r"\s+")
            .unwrap()
            .replace_all(code, " ")
            .trim()
            .to_string()
    }

    fn transform(code: &str, file: &str) -> String {
        let output = name_default_export(code, Some(file)).unwrap();
        squash(&output.code)
    }

    #[test]
    fn safe_file_name_becomes_the_export_variable() {
        assert_eq!(
            transform("export default () => {};", "foo.js"),
            "const foo = () => {}; export default foo;"
        );
    }

    #[test]
    fn unsafe_file_name_is_camel_cased() {
        assert_eq!(
            transform("export default () => {};", "foo bar.js"),
            "const fooBar = () => {}; export default fooBar;"
        );
    }

    #[test]
    fn existing_binding_bumps_to_an_indexed_name() {
        assert_eq!(
            transform("const foo = true; export default () => {};", "foo.js"),
            "const foo = true; const foo0 = () => {}; export default foo0;"
        );
    }

    #[test]
    fn indexed_name_keeps_climbing_past_taken_indexes() {
        assert_eq!(
            transform(
                "const foo = true;\nconst foo0 = true; export default () => {};",
                "foo.js"
            ),
            "const foo = true; const foo0 = true; const foo1 = () => {}; export default foo1;"
        );
    }

    #[test]
    fn numeric_file_name_gets_an_underscore() {
        assert_eq!(
            transform("export default () => {};", "1.js"),
            "const _1 = () => {}; export default _1;"
        );
    }

    #[test]
    fn taken_underscored_name_appends_to_the_full_name() {
        // The index lands after the whole name: `_1` → `_10`, not `_2`.
        assert_eq!(
            transform("const _1 = true; export default () => {};", "1.js"),
            "const _1 = true; const _10 = () => {}; export default _10;"
        );
    }

    #[test]
    fn index_file_uses_its_directory_name() {
        assert_eq!(
            transform("export default () => {};", "foo/index.js"),
            "const foo = () => {}; export default foo;"
        );
    }

    #[test]
    fn async_arrow_function_keeps_its_modifier() {
        assert_eq!(
            transform("export default async () => {};", "foo/index.js"),
            "const foo = async () => {}; export default foo;"
        );
    }

    #[test]
    fn anonymous_async_function_is_named() {
        assert_eq!(
            transform("export default async function () {}", "foo.js"),
            "const foo = async function () {}; export default foo;"
        );
    }

    #[test]
    fn anonymous_class_preserves_file_name_casing() {
        assert_eq!(
            transform("export default class {}", "Foo.js"),
            "const Foo = class {}; export default Foo;"
        );
    }

    #[test]
    fn missing_file_path_uses_the_unset_fallback() {
        let output = name_default_export("export default () => {};", None).unwrap();
        assert_eq!(
            squash(&output.code),
            "const unset = () => {}; export default unset;"
        );
        assert_eq!(output.export_name.as_deref(), Some("unset"));
    }

    #[test]
    fn reserved_word_file_name_is_never_bound_verbatim() {
        assert_eq!(
            transform("export default () => {};", "new.js"),
            "const new0 = () => {}; export default new0;"
        );
    }

    #[test]
    fn function_body_and_parameters_survive_verbatim() {
        assert_eq!(
            transform(
                "export default async (a, { b = 1 }) => {\n  return a + b;\n};",
                "sum.js"
            ),
            "const sum = async (a, { b = 1 }) => { return a + b; }; export default sum;"
        );
    }

    #[test]
    fn excluded_shapes_do_not_transform() {
        let fixtures = [
            "export default [];",
            "export default 'a string';",
            "export default 1;",
            "export default true;",
            "export default new String(\"foo\");",
            "export default null;",
            "export default class Foo {}",
            "export default function foo() {}",
            "export default someIdentifier;",
            "export default makeThing();",
            "export default { a: 1 };",
        ];
        for fixture in fixtures {
            let output = name_default_export(fixture, Some("unset.js")).unwrap();
            assert_eq!(output.code, fixture, "should not transform: {fixture}");
            assert!(!output.changed);
            assert!(output.export_name.is_none());
        }
    }

    #[test]
    fn module_without_default_export_is_untouched() {
        let source = "export const foo = 1;\nexport function bar() {}";
        let output = name_default_export(source, Some("foo.js")).unwrap();
        assert_eq!(output.code, source);
        assert!(!output.changed);
    }

    #[test]
    fn transform_is_idempotent() {
        let first = name_default_export("export default () => {};", Some("foo.js")).unwrap();
        assert!(first.changed);
        let second = name_default_export(&first.code, Some("foo.js")).unwrap();
        assert!(!second.changed);
        assert_eq!(second.code, first.code);
    }

    #[test]
    fn transform_is_deterministic() {
        let source = "const foo = true; export default () => {};";
        let a = name_default_export(source, Some("foo.js")).unwrap();
        let b = name_default_export(source, Some("foo.js")).unwrap();
        assert_eq!(a.code, b.code);
        assert_eq!(a.export_name, b.export_name);
    }

    #[test]
    fn nested_bindings_are_respected_by_the_probe() {
        // `foo` is only bound inside the function body, but the probe is
        // whole-file conservative, so the export still bumps to foo0.
        assert_eq!(
            transform(
                "function run() { const foo = 1; return foo; } export default () => {};",
                "foo.js"
            ),
            "function run() { const foo = 1; return foo; } const foo0 = () => {}; export default foo0;"
        );
    }

    #[test]
    fn typescript_annotations_are_preserved() {
        assert_eq!(
            transform("export default (x: number): number => x * 2;", "double.ts"),
            "const double = (x: number): number => x * 2; export default double;"
        );
    }

    #[test]
    fn output_reparses_cleanly() {
        let output =
            name_default_export("export default async function () {}", Some("foo.js")).unwrap();
        assert!(normalize(&output.code, Some("foo.js")).is_ok());
    }

    #[test]
    fn broken_input_reports_a_syntax_error() {
        let error = name_default_export("export default = ;", Some("bad.js")).unwrap_err();
        assert_eq!(error.code, ERR_SYNTAX);
        assert_eq!(error.file, "bad.js");
    }

    #[test]
    fn output_serializes_with_camel_case_keys() {
        let output = name_default_export("export default () => {};", Some("foo.js")).unwrap();
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"exportName\":\"foo\""));
        assert!(json.contains("\"changed\":true"));
    }
}
