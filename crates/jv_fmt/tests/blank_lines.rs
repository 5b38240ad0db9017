//! Golden scenarios for the blank-line pass.
//!
//! Each test builds the tree for a small Java file, runs the pass with a
//! single rule configured, and compares the reconstructed source against the
//! expected text. Every scenario also re-runs the pass over its own output
//! and asserts a fixed point.

use jv_fmt::{normalize_blank_lines, BlankLineStyle, KeepMaximum, Minimum};
use jv_tree::{
    Block, Comment, CompilationUnit, Import, Member, MethodDecl, NewClass, PackageDecl, Space,
    Statement, TypeBody, TypeDecl, TypeKind,
};
use pretty_assertions::assert_eq;

fn minimum(configure: impl FnOnce(&mut Minimum)) -> BlankLineStyle {
    let mut style = BlankLineStyle::default();
    configure(&mut style.minimum);
    style
}

fn keep_maximum(configure: impl FnOnce(&mut KeepMaximum)) -> BlankLineStyle {
    let mut style = BlankLineStyle::default();
    configure(&mut style.keep_maximum);
    style
}

fn assert_normalized(unit: CompilationUnit, style: &BlankLineStyle, expected: &str) {
    let normalized = normalize_blank_lines(unit, style);
    assert_eq!(normalized.to_source(), expected);

    let again = normalize_blank_lines(normalized.clone(), style);
    assert_eq!(again, normalized, "pass is not idempotent");
}

fn sp(ws: &str) -> Space {
    Space::new(ws)
}

fn field(ws: &str, source: &str) -> Member {
    Member::field(sp(ws), source)
}

fn method(ws: &str, signature: &str, body: Option<Block>) -> Member {
    Member::Method(MethodDecl::new(sp(ws), signature, body))
}

fn body(statements: Vec<Statement>, end: &str) -> Block {
    Block::new(Space::inline(), statements, sp(end))
}

fn stmt(ws: &str, source: &str) -> Statement {
    Statement::source(sp(ws), source)
}

fn class_decl(ws: &str, header: &str, members: Vec<Member>, end: &str) -> TypeDecl {
    TypeDecl::new(sp(ws), TypeKind::Class, header, TypeBody::new(members, sp(end)))
}

fn interface_decl(ws: &str, header: &str, members: Vec<Member>, end: &str) -> TypeDecl {
    TypeDecl::new(
        sp(ws),
        TypeKind::Interface,
        header,
        TypeBody::new(members, sp(end)),
    )
}

fn unit_with_package(package: PackageDecl, types: Vec<TypeDecl>) -> CompilationUnit {
    CompilationUnit {
        package: Some(package),
        types,
        eof: "\n".into(),
        ..CompilationUnit::default()
    }
}

const SAMPLE_HEADER: &str = "/*\n * This is a sample file.\n */";

#[test]
fn keep_maximum_in_declarations() {
    let anonymous_runnable = Statement::New(NewClass::new(
        sp("\n        "),
        "new Runnable()",
        Some(TypeBody::new(
            vec![method(
                "\n            ",
                "public void run()",
                Some(body(vec![], "\n            ")),
            )],
            sp("\n        "),
        )),
        ";",
    ));

    let unit = CompilationUnit::of_types(vec![class_decl(
        "",
        "public class Foo",
        vec![
            field("\n\n\n    ", "private int field1;"),
            field("\n    ", "private int field2;"),
            Member::Initializer(Block::new(
                sp("\n\n    "),
                vec![stmt("\n        ", "field1 = 2;")],
                sp("\n    "),
            )),
            method(
                "\n\n    ",
                "public void foo1()",
                Some(body(vec![anonymous_runnable], "\n    ")),
            ),
            Member::Nested(class_decl("\n\n    ", "public class InnerClass", vec![], "\n    ")),
        ],
        "\n",
    )]);

    assert_normalized(
        unit,
        &keep_maximum(|k| k.in_declarations = Some(0)),
        "public class Foo {\n    private int field1;\n    private int field2;\n    {\n        field1 = 2;\n    }\n    public void foo1() {\n        new Runnable() {\n            public void run() {\n            }\n        };\n    }\n    public class InnerClass {\n    }\n}\n",
    );
}

#[test]
fn keep_maximum_in_code() {
    let unit = CompilationUnit::of_types(vec![class_decl(
        "",
        "public class Foo",
        vec![
            field("\n    ", "private int field1;"),
            Member::Initializer(Block::new(
                sp("\n    "),
                vec![stmt("\n\n\n        ", "field1 = 2;")],
                sp("\n    "),
            )),
        ],
        "\n",
    )]);

    assert_normalized(
        unit,
        &keep_maximum(|k| k.in_code = Some(0)),
        "public class Foo {\n    private int field1;\n    {\n        field1 = 2;\n    }\n}\n",
    );
}

#[test]
fn keep_maximum_before_end_of_block() {
    let unit = CompilationUnit::of_types(vec![class_decl(
        "",
        "public class Foo",
        vec![
            field("\n    ", "private int field1;"),
            Member::Initializer(Block::new(
                sp("\n    "),
                vec![stmt("\n        ", "field1 = 2;")],
                sp("\n\n\n    "),
            )),
        ],
        "\n",
    )]);

    assert_normalized(
        unit,
        &keep_maximum(|k| k.before_end_of_block = Some(0)),
        "public class Foo {\n    private int field1;\n    {\n        field1 = 2;\n    }\n}\n",
    );
}

#[test]
fn keep_maximum_between_header_and_package() {
    let unit = unit_with_package(
        PackageDecl::new(
            Space::none().with_comments(vec![Comment::new(SAMPLE_HEADER, "\n\n")]),
            "com.intellij.samples",
        ),
        vec![class_decl("\n\n", "public class Foo", vec![], "\n")],
    );

    assert_normalized(
        unit,
        &keep_maximum(|k| k.between_header_and_package = Some(0)),
        "/*\n * This is a sample file.\n */\npackage com.intellij.samples;\n\npublic class Foo {\n}\n",
    );
}

#[test]
fn minimum_before_package_beats_the_header_ceiling() {
    let unit = unit_with_package(
        PackageDecl::new(
            Space::none().with_comments(vec![Comment::new(SAMPLE_HEADER, "\n")]),
            "com.intellij.samples",
        ),
        vec![class_decl("\n\n", "public class Foo", vec![], "\n")],
    );

    let mut style = keep_maximum(|k| k.between_header_and_package = Some(0));
    style.minimum.before_package = Some(1);

    assert_normalized(
        unit,
        &style,
        "/*\n * This is a sample file.\n */\n\npackage com.intellij.samples;\n\npublic class Foo {\n}\n",
    );
}

#[test]
fn minimum_before_package_with_nothing_preceding() {
    let unit = unit_with_package(
        PackageDecl::new(sp("\n"), "com.intellij.samples"),
        vec![class_decl("\n\n", "public class Foo", vec![], "\n")],
    );

    assert_normalized(
        unit,
        &minimum(|m| m.before_package = Some(1)),
        "package com.intellij.samples;\n\npublic class Foo {\n}\n",
    );
}

#[test]
fn minimum_before_package_with_doc_comment() {
    let unit = unit_with_package(
        PackageDecl::new(
            Space::none().with_comments(vec![Comment::new("/** Comment */", "\n")]),
            "com.intellij.samples",
        ),
        vec![class_decl("\n\n", "public class Foo", vec![], "\n")],
    );

    let mut style = keep_maximum(|k| k.between_header_and_package = Some(0));
    style.minimum.before_package = Some(1);

    assert_normalized(
        unit,
        &style,
        "/** Comment */\n\npackage com.intellij.samples;\n\npublic class Foo {\n}\n",
    );
}

#[test]
fn minimum_before_imports_with_package() {
    let unit = CompilationUnit {
        package: Some(PackageDecl::new(Space::none(), "com.intellij.samples")),
        imports: vec![Import::new(sp("\n"), "import java.util.Vector;")],
        types: vec![class_decl("\n\n", "public class Foo", vec![], "\n")],
        eof: "\n".into(),
    };

    assert_normalized(
        unit,
        &minimum(|m| m.before_imports = Some(1)),
        "package com.intellij.samples;\n\nimport java.util.Vector;\n\npublic class Foo {\n}\n",
    );
}

#[test]
fn minimum_before_imports_with_nothing_preceding() {
    let unit = CompilationUnit {
        imports: vec![Import::new(sp("\n"), "import java.util.Vector;")],
        types: vec![class_decl("\n\n", "public class Foo", vec![], "\n")],
        eof: "\n".into(),
        ..CompilationUnit::default()
    };

    assert_normalized(
        unit,
        &minimum(|m| m.before_imports = Some(1)),
        "import java.util.Vector;\n\npublic class Foo {\n}\n",
    );
}

#[test]
fn minimum_before_imports_with_header_comment() {
    let unit = CompilationUnit {
        imports: vec![Import::new(
            Space::none().with_comments(vec![Comment::new(SAMPLE_HEADER, "\n")]),
            "import java.util.Vector;",
        )],
        types: vec![class_decl("\n\n", "public class Foo", vec![], "\n")],
        eof: "\n".into(),
        ..CompilationUnit::default()
    };

    assert_normalized(
        unit,
        &minimum(|m| m.before_imports = Some(1)),
        "/*\n * This is a sample file.\n */\n\nimport java.util.Vector;\n\npublic class Foo {\n}\n",
    );
}

#[test]
fn minimum_after_package_wins_over_a_smaller_before_imports() {
    let unit = CompilationUnit {
        package: Some(PackageDecl::new(Space::none(), "com.intellij.samples")),
        imports: vec![Import::new(sp("\n"), "import java.util.Vector;")],
        types: vec![class_decl("\n\n", "public class Foo", vec![], "\n")],
        eof: "\n".into(),
    };

    assert_normalized(
        unit,
        &minimum(|m| {
            m.before_imports = Some(0);
            m.after_package = Some(1);
        }),
        "package com.intellij.samples;\n\nimport java.util.Vector;\n\npublic class Foo {\n}\n",
    );
}

#[test]
fn minimum_after_package_without_imports() {
    let unit = unit_with_package(
        PackageDecl::new(Space::none(), "com.intellij.samples"),
        vec![class_decl("\n", "public class Foo", vec![], "\n")],
    );

    assert_normalized(
        unit,
        &minimum(|m| m.after_package = Some(1)),
        "package com.intellij.samples;\n\npublic class Foo {\n}\n",
    );
}

#[test]
fn minimum_after_imports() {
    let unit = CompilationUnit {
        imports: vec![Import::new(Space::none(), "import java.util.Vector;")],
        types: vec![class_decl("\n", "public class Foo", vec![], "\n")],
        eof: "\n".into(),
        ..CompilationUnit::default()
    };

    assert_normalized(
        unit,
        &minimum(|m| m.after_imports = Some(1)),
        "import java.util.Vector;\n\npublic class Foo {\n}\n",
    );
}

#[test]
fn minimum_around_class() {
    let unit = CompilationUnit {
        imports: vec![Import::new(Space::none(), "import java.util.Vector;")],
        types: vec![
            class_decl("\n\n", "public class Foo", vec![], "\n"),
            class_decl("\n\n", "class Bar", vec![], "\n"),
        ],
        eof: "\n".into(),
        ..CompilationUnit::default()
    };

    assert_normalized(
        unit,
        &minimum(|m| m.around_class = Some(2)),
        "import java.util.Vector;\n\npublic class Foo {\n}\n\n\nclass Bar {\n}\n",
    );
}

#[test]
fn minimum_after_class_header() {
    let unit = CompilationUnit::of_types(vec![class_decl(
        "",
        "public class Foo",
        vec![field("\n    ", "private int field1;")],
        "\n",
    )]);

    assert_normalized(
        unit,
        &minimum(|m| m.after_class_header = Some(1)),
        "public class Foo {\n\n    private int field1;\n}\n",
    );
}

#[test]
fn minimum_before_class_end() {
    let unit = CompilationUnit::of_types(vec![class_decl("", "public class Foo", vec![], "\n")]);

    assert_normalized(
        unit,
        &minimum(|m| m.before_class_end = Some(1)),
        "public class Foo {\n\n}\n",
    );
}

#[test]
fn minimum_after_anonymous_class_header() {
    let anonymous_runnable = Statement::New(NewClass::new(
        sp("\n        "),
        "new Runnable()",
        Some(TypeBody::new(
            vec![method(
                "\n            ",
                "public void run()",
                Some(body(vec![], "\n            ")),
            )],
            sp("\n        "),
        )),
        ";",
    ));

    let unit = CompilationUnit::of_types(vec![class_decl(
        "",
        "public class Foo",
        vec![method(
            "\n    ",
            "public void foo1()",
            Some(body(vec![anonymous_runnable], "\n    ")),
        )],
        "\n",
    )]);

    assert_normalized(
        unit,
        &minimum(|m| m.after_anonymous_class_header = Some(1)),
        "public class Foo {\n    public void foo1() {\n        new Runnable() {\n\n            public void run() {\n            }\n        };\n    }\n}\n",
    );
}

#[test]
fn minimum_around_field_in_interface() {
    let unit = CompilationUnit::of_types(vec![interface_decl(
        "",
        "interface TestInterface",
        vec![
            field("\n    ", "int MAX = 10;"),
            field("\n    ", "int MIN = 1;"),
        ],
        "\n",
    )]);

    assert_normalized(
        unit,
        &minimum(|m| m.around_field_in_interface = Some(1)),
        "interface TestInterface {\n    int MAX = 10;\n\n    int MIN = 1;\n}\n",
    );
}

#[test]
fn minimum_around_field() {
    let unit = CompilationUnit::of_types(vec![class_decl(
        "",
        "class Test",
        vec![
            field("\n    ", "int max = 10;"),
            field("\n    ", "int min = 1;"),
        ],
        "\n",
    )]);

    assert_normalized(
        unit,
        &minimum(|m| m.around_field = Some(1)),
        "class Test {\n    int max = 10;\n\n    int min = 1;\n}\n",
    );
}

#[test]
fn minimum_around_method_in_interface() {
    let unit = CompilationUnit::of_types(vec![interface_decl(
        "",
        "interface TestInterface",
        vec![
            method("\n    ", "void method1();", None),
            method("\n    ", "void method2();", None),
        ],
        "\n",
    )]);

    assert_normalized(
        unit,
        &minimum(|m| m.around_method_in_interface = Some(1)),
        "interface TestInterface {\n    void method1();\n\n    void method2();\n}\n",
    );
}

#[test]
fn minimum_around_method() {
    let unit = CompilationUnit::of_types(vec![class_decl(
        "",
        "class Test",
        vec![
            method("\n    ", "void method1()", Some(body(vec![], ""))),
            method("\n    ", "void method2()", Some(body(vec![], ""))),
        ],
        "\n",
    )]);

    assert_normalized(
        unit,
        &minimum(|m| m.around_method = Some(1)),
        "class Test {\n    void method1() {}\n\n    void method2() {}\n}\n",
    );
}

#[test]
fn minimum_before_method_body() {
    let unit = CompilationUnit::of_types(vec![class_decl(
        "",
        "class Test",
        vec![
            method("\n    ", "void method1()", Some(body(vec![], ""))),
            method(
                "\n\n    ",
                "void method2()",
                Some(body(vec![stmt("\n        ", "int n = 0;")], "\n    ")),
            ),
        ],
        "\n",
    )]);

    assert_normalized(
        unit,
        &minimum(|m| m.before_method_body = Some(1)),
        "class Test {\n    void method1() {\n\n    }\n\n    void method2() {\n\n        int n = 0;\n    }\n}\n",
    );
}

#[test]
fn minimum_around_initializer() {
    let unit = CompilationUnit::of_types(vec![class_decl(
        "",
        "public class Foo",
        vec![
            field("\n    ", "private int field1;"),
            Member::Initializer(Block::new(
                sp("\n    "),
                vec![stmt("\n        ", "field1 = 2;")],
                sp("\n    "),
            )),
            field("\n    ", "private int field2;"),
        ],
        "\n",
    )]);

    assert_normalized(
        unit,
        &minimum(|m| m.around_initializer = Some(1)),
        "public class Foo {\n    private int field1;\n\n    {\n        field1 = 2;\n    }\n\n    private int field2;\n}\n",
    );
}

#[test]
fn default_style_changes_nothing() {
    let unit = CompilationUnit::of_types(vec![class_decl(
        "\n\n",
        "class Test",
        vec![
            field("\n\n\n    ", "int a;"),
            method(
                "\n    ",
                "void f()",
                Some(body(vec![stmt("\n\n\n\n        ", "a = 1;")], "\n\n    ")),
            ),
        ],
        "\n\n",
    )]);

    let source_before = unit.to_source();
    assert_normalized(unit, &BlankLineStyle::default(), &source_before);
}

#[test]
fn intellij_profile_on_a_messy_file() {
    let unit = CompilationUnit {
        package: Some(PackageDecl::new(Space::none(), "a")),
        imports: vec![Import::new(sp("\n"), "import java.util.List;")],
        types: vec![class_decl(
            "\n",
            "public class A",
            vec![
                field("\n    ", "int x;"),
                method("\n    ", "void f()", Some(body(vec![], ""))),
                method(
                    "\n    ",
                    "void g()",
                    Some(body(vec![stmt("\n\n\n\n\n        ", "int n = 0;")], "\n    ")),
                ),
            ],
            "\n",
        )],
        eof: "\n".into(),
    };

    assert_normalized(
        unit,
        &BlankLineStyle::intellij(),
        "package a;\n\nimport java.util.List;\n\npublic class A {\n    int x;\n\n    void f() {}\n\n    void g() {\n\n\n        int n = 0;\n    }\n}\n",
    );
}
