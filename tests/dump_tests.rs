use expect_test::{Expect, expect};
use indoc::indoc;
use pretty_assertions::assert_eq;
use thiol::{Error, ResolveOptions, ResolveOptionsOverride, TypeError, check};

const PRELUDE: &str = indoc! {"
    type Option<T> = record
        is_some: bool;
        value: T;
    end

    type Pair<A, B> = record
        first: A;
        second: B;
    end
"};

fn check_dump(source: &str, expected: Expect) {
    let source = format!("{PRELUDE}\n{source}");
    let checked = check(&source, ResolveOptions::default()).unwrap();
    expected.assert_eq(&checked.dump());
}

#[test]
fn test_vertex_dump() {
    check_dump(
        indoc! {"
            type A = record end
            type B = A
            type C = Option<B>

            type Vertex = record
                position: float4 is Point in ObjectSpace;
                colour: float4 is Colour in Linear;
                uv: float2 is Vector in UV;
                additional: Pair<bool, bool>;
            end
        "},
        expect![[r#"
            A = (0) record end
            B = (0) record end
            C = (2) record
                is_some : (1) bool
                value : (0) record end
            end
            Vertex = (7) record
                position : (3) float4[Point]{ObjectSpace}
                colour : (4) float4[Colour]{Linear}
                uv : (5) float2[Vector]{UV}
                additional : (6) record
                    first : (1) bool
                    second : (1) bool
                end
            end
        "#]],
    );
}

#[test]
fn test_same_shape_different_spelling() {
    check_dump(
        indoc! {"
            type Flags = record first: bool; second: bool end
            type Twice = Pair<bool, bool>
            type Maybe = Option<Flags>
        "},
        expect![[r#"
            Flags = (1) record
                first : (0) bool
                second : (0) bool
            end
            Twice = (1) record
                first : (0) bool
                second : (0) bool
            end
            Maybe = (2) record
                is_some : (0) bool
                value : (1) record
                    first : (0) bool
                    second : (0) bool
                end
            end
        "#]],
    );
}

#[test]
fn test_tags_split_identities() {
    check_dump(
        indoc! {"
            type P = float3 is Point in World
            type V = float3 is Vector in World
            type Q = float3 is Point in View
            type R = float3 is Point in World
            type Raw = float3
        "},
        expect![[r#"
            P = (0) float3[Point]{World}
            V = (1) float3[Vector]{World}
            Q = (2) float3[Point]{View}
            R = (0) float3[Point]{World}
            Raw = (3) float3
        "#]],
    );
}

#[test]
fn test_repeated_checks_agree() {
    let source = format!("{PRELUDE}\ntype C = Option<Pair<int, float4x4>>\n");
    let first = check(&source, ResolveOptions::default()).unwrap();
    let second = check(&source, ResolveOptions::default()).unwrap();
    assert_eq!(first.dump(), second.dump());
    assert_eq!(first.declarations, second.declarations);
}

#[test]
fn test_resolve_error_has_span() {
    let source = "type A = record end\ntype B = Missing";
    let err = check(source, ResolveOptions::default()).unwrap_err();
    let span = err.span().unwrap();
    assert_eq!(&source[span.start..span.end], "type B = Missing");
    assert_eq!(
        err.type_error(),
        Some(&TypeError::UnknownTemplate {
            name: "Missing".into()
        })
    );
}

#[test]
fn test_arity_mismatch() {
    let source = format!("{PRELUDE}\ntype C = Option<bool, int>\n");
    let err = check(&source, ResolveOptions::default()).unwrap_err();
    assert!(matches!(
        err.type_error(),
        Some(TypeError::ArityMismatch {
            expected: 1,
            given: 2,
            ..
        })
    ));
}

const NESTED: &str = indoc! {"
    type Inner<T> = record value: T end
    type Mid<T> = record inner: Inner<T> end
    type Outer<T> = record mid: Mid<T> end
    type X = Outer<int>
"};

#[test]
fn test_depth_override() {
    let options = ResolveOptions::default().override_with(&ResolveOptionsOverride {
        max_depth: Some(2),
    });
    match check(NESTED, options) {
        Err(Error::Resolve { error, .. }) => assert_eq!(
            error.error,
            TypeError::DepthExceeded {
                name: "Inner".into(),
                max_depth: 2
            }
        ),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(check(NESTED, ResolveOptions::default()).is_ok());
}

#[test]
fn test_long_chain_in_any_order() {
    let len = 70;
    let mut lines: Vec<String> = (0..len - 1)
        .map(|i| format!("type L{i} = record x: L{} end", i + 1))
        .collect();
    lines.push(format!("type L{} = record x: bool end", len - 1));

    let top_down = check(&lines.join("\n"), ResolveOptions::default()).unwrap();
    lines.reverse();
    let bottom_up = check(&lines.join("\n"), ResolveOptions::default()).unwrap();

    assert_eq!(top_down.context.len(), len + 1);
    assert_eq!(bottom_up.context.len(), len + 1);
    assert_eq!(top_down.declarations[0].identity.index(), len);
}

#[test]
fn test_tagged_record_is_rejected() {
    let source = "type R = record x: int end\ntype T = R is Point in World";
    let err = check(source, ResolveOptions::default()).unwrap_err();
    assert_eq!(
        err.type_error(),
        Some(&TypeError::InvalidTagBase {
            base: "record x : int end".to_string(),
            tag: "is Point in World".to_string(),
        })
    );
    assert_eq!(err.code(), "T010");
}

#[test]
fn test_arrays_and_transforms() {
    check_dump(
        indoc! {"
            type Light = record
                position: float3 is Point in World;
                intensity: float;
            end

            type Scene = record
                lights: Light[8];
                model: float4x4 from ObjectSpace to World;
                indices: uint[];
                grid: Option<bool>[2][3];
            end
        "},
        expect![[r#"
            Light = (2) record
                position : (0) float3[Point]{World}
                intensity : (1) float
            end
            Scene = (11) record
                lights : (3) record
                    position : (0) float3[Point]{World}
                    intensity : (1) float
                end[8]
                model : (4) float4x4{ObjectSpace->World}
                indices : (6) uint[]
                grid : (10) record
                    is_some : (7) bool
                    value : (7) bool
                end[2][3]
            end
        "#]],
    );
}
