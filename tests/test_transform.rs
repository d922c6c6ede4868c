// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Tests for the line transformer

use availability::{AnnotationConfig, DeclarationKind, LineTransformer};
use proptest::prelude::*;

const MARKER_15: &str = "@available(iOS 15.0, macOS 12.0, tvOS 15.0, watchOS 8.0, *)";

fn transformer() -> LineTransformer {
    LineTransformer::new(&AnnotationConfig::default()).unwrap()
}

#[test]
fn test_top_level_struct_is_annotated() {
    let result = transformer().transform("struct Foo {}\n");
    assert_eq!(result.text, format!("{MARKER_15}\nstruct Foo {{}}\n"));
    assert_eq!(result.insertion_count(), 1);
}

#[test]
fn test_existing_annotation_is_kept() {
    let input = "@available(iOS 14.0, *)\nclass Bar {}\n";
    let result = transformer().transform(input);
    assert_eq!(result.text, input);
    assert_eq!(result.insertion_count(), 0);
}

#[test]
fn test_indented_annotation_above_counts_as_existing() {
    let input = "    @available(iOS 13.0, *)\nstruct Foo {}\n";
    assert_eq!(transformer().transform(input).text, input);
}

#[test]
fn test_nested_declaration_is_not_annotated() {
    let input = "    struct Nested {}\n";
    let result = transformer().transform(input);
    assert_eq!(result.text, input);
    assert!(!result.changed());
}

#[test]
fn test_tab_indented_declaration_is_not_annotated() {
    let input = "\tenum Inner {}\n";
    assert_eq!(transformer().transform(input).text, input);
}

#[test]
fn test_custom_ios_version() {
    let t = LineTransformer::new(&AnnotationConfig::for_ios("16.0")).unwrap();
    let result = t.transform("enum E {}\n");
    assert_eq!(
        result.text,
        "@available(iOS 16.0, macOS 12.0, tvOS 16.0, watchOS 8.0, *)\nenum E {}\n"
    );
}

#[test]
fn test_simple_conformance_extension_is_skipped() {
    let input = "extension Foo: Bar {}\n";
    assert_eq!(transformer().transform(input).text, input);
}

#[test]
fn test_constrained_extensions_are_annotated() {
    for input in ["extension Foo where T: Bar {}\n", "extension Foo<T>: Bar {}\n"] {
        let result = transformer().transform(input);
        assert_eq!(result.insertion_count(), 1, "{input}");
        assert_eq!(result.text, format!("{MARKER_15}\n{input}"));
    }
}

#[test]
fn test_plain_extension_is_annotated() {
    let result = transformer().transform("public extension View {\n}\n");
    assert_eq!(result.insertion_count(), 1);
    assert_eq!(result.insertions[0].kind, DeclarationKind::Extension);
}

#[test]
fn test_members_of_annotated_type_are_left_alone() {
    let input = "\
public struct Card: View {
    enum Style {
        case plain
    }

    var body: some View {
        Text(\"x\")
    }
}
";
    let result = transformer().transform(input);
    assert_eq!(result.insertion_count(), 1);
    assert!(result.text.starts_with(&format!("{MARKER_15}\npublic struct Card: View {{\n    enum Style")));
}

#[test]
fn test_mixed_file() {
    let input = "\
import SwiftUI

@available(iOS 15.0, *)
public struct Already {}

@MainActor public class Model {}

@resultBuilder
public enum Builder {}

protocol Drawable {}

extension Model: Drawable {}

public final class Gap {}
";
    let expected = format!(
        "\
import SwiftUI

@available(iOS 15.0, *)
public struct Already {{}}

{MARKER_15}
@MainActor public class Model {{}}

@resultBuilder
{MARKER_15}
public enum Builder {{}}

{MARKER_15}
protocol Drawable {{}}

extension Model: Drawable {{}}

public final class Gap {{}}
"
    );
    let result = transformer().transform(input);
    assert_eq!(result.text, expected);
    let kinds: Vec<DeclarationKind> = result.insertions.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![DeclarationKind::AttributedClass, DeclarationKind::Enum, DeclarationKind::Protocol]
    );
}

#[test]
fn test_consecutive_declarations_both_annotated() {
    let result = transformer().transform("struct A {}\nstruct B {}");
    assert_eq!(result.text, format!("{MARKER_15}\nstruct A {{}}\n{MARKER_15}\nstruct B {{}}"));
}

#[test]
fn test_crlf_line_endings_are_preserved() {
    let result = transformer().transform("import UIKit\r\nclass View {}\r\n");
    assert_eq!(result.text, format!("import UIKit\r\n{MARKER_15}\r\nclass View {{}}\r\n"));
}

#[test]
fn test_no_trailing_newline_is_preserved() {
    let result = transformer().transform("actor Store {}");
    assert_eq!(result.text, format!("{MARKER_15}\nactor Store {{}}"));
}

#[test]
fn test_empty_input() {
    let result = transformer().transform("");
    assert_eq!(result.text, "");
    assert!(!result.changed());
}

fn swift_line() -> impl Strategy<Value = String> {
    let indent = prop::sample::select(vec!["", "", "    ", "\t"]);
    let body = prop::sample::select(vec![
        "struct A {}",
        "public enum B {",
        "@frozen struct C {",
        "final class D {}",
        "@MainActor class E {}",
        "actor F {}",
        "protocol G {}",
        "extension H: I {}",
        "extension J where K: L {}",
        "@available(iOS 14.0, *)",
        "@objc",
        "func go() {}",
        "}",
        "",
        "let x = 1",
    ]);
    let ending = prop::sample::select(vec!["", "\r"]);
    (indent, body, ending).prop_map(|(i, b, e)| format!("{i}{b}{e}"))
}

fn swift_file() -> impl Strategy<Value = String> {
    prop::collection::vec(swift_line(), 0..40).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn prop_transform_is_idempotent(input in swift_file()) {
        let t = transformer();
        let once = t.transform(&input);
        let twice = t.transform(&once.text);
        prop_assert_eq!(&twice.text, &once.text);
        prop_assert_eq!(twice.insertion_count(), 0);
    }

    #[test]
    fn prop_only_inserts_lines(input in swift_file()) {
        let result = transformer().transform(&input);
        let original: Vec<&str> = input.split('\n').collect();
        let output: Vec<&str> = result.text.split('\n').collect();
        prop_assert_eq!(output.len(), original.len() + result.insertion_count());

        // Dropping the inserted lines gives back the input, in order
        let mut inserted_at: Vec<usize> = result
            .insertions
            .iter()
            .enumerate()
            .map(|(n, ins)| ins.line_num - 1 + n)
            .collect();
        inserted_at.sort_unstable();
        let kept: Vec<&str> = output
            .iter()
            .enumerate()
            .filter(|(idx, _)| inserted_at.binary_search(idx).is_err())
            .map(|(_, line)| *line)
            .collect();
        prop_assert_eq!(kept, original);
    }

    #[test]
    fn prop_annotations_are_top_level_with_matching_indent(input in swift_file()) {
        let result = transformer().transform(&input);
        let output: Vec<&str> = result.text.split('\n').collect();
        for (n, ins) in result.insertions.iter().enumerate() {
            let annotation = output[ins.line_num - 1 + n];
            let declaration = output[ins.line_num + n];
            prop_assert!(!declaration.starts_with(char::is_whitespace));
            prop_assert!(annotation.starts_with(MARKER_15));
            let indent = declaration.len() - declaration.trim_start().len();
            prop_assert_eq!(&annotation[..indent], &declaration[..indent]);
        }
    }
}
