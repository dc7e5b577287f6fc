//! End-to-end template scenarios: build with the public builders, serialize to
//! the wire shape, and extract the plain example.

use assert_json_diff::assert_json_eq;
use pact_matchers::{
    each_like, extract_json, extract_payload, ipv4_address, is_matcher, like, something_like,
    term, Format, Template, IPV4_FORMAT,
};
use serde_json::json;

#[test]
fn each_like_with_nested_like() {
    let template: Template = each_like(Template::object([("id", like(10).into())]), Some(1))
        .unwrap()
        .into();
    assert_json_eq!(extract_payload(&template), json!([{"id": 10}]));
}

#[test]
fn term_scenarios() {
    let node = term("myawesomeword", r"\w+").unwrap();
    let template = Template::from(node);
    assert!(is_matcher(&template));
    assert_eq!(extract_payload(&template), json!("myawesomeword"));

    assert!(term("abc", r"^\d+$").unwrap_err().is_validation());
}

#[test]
fn ipv4_scenarios() {
    assert!(ipv4_address(Some("999.0.0.1")).unwrap_err().is_validation());

    let template = Template::from(ipv4_address(None).unwrap());
    let example = extract_payload(&template);
    let example = example.as_str().expect("ipv4 default is a string");
    assert!(pact_matchers::validate_example(example, IPV4_FORMAT).unwrap());
}

#[test]
fn mixed_mapping() {
    let template = Template::object([
        ("a", Template::from("data")),
        ("b", like(true).into()),
        ("c", each_like("x", Some(2)).unwrap().into()),
    ]);
    assert_json_eq!(
        extract_payload(&template),
        json!({"a": "data", "b": true, "c": ["x", "x"]})
    );
}

#[test]
fn mapping_without_matchers_is_unchanged() {
    let plain = json!({
        "some": "data",
        "more": null,
        "an": [null, "array"],
        "someObject": {"withData": true, "withNumber": 1, "andNull": null}
    });
    let template = Template::from_plain(plain.clone());
    assert_eq!(extract_payload(&template), plain);
}

#[test]
fn object_with_some_matchers() {
    let template = Template::object([
        ("some", something_like("data").into()),
        ("more", Template::from("strings")),
        ("an", Template::from(vec!["array"])),
        ("another", each_like("this", None).unwrap().into()),
        (
            "someObject",
            Template::object([
                ("withData", something_like(true).into()),
                ("withTerm", term("this", "this|that").unwrap().into()),
                ("withNumber", Template::from(1)),
                ("withAnotherNumber", something_like(2).into()),
            ]),
        ),
    ]);

    assert_json_eq!(
        extract_payload(&template),
        json!({
            "some": "data",
            "more": "strings",
            "an": ["array"],
            "another": ["this"],
            "someObject": {
                "withData": true,
                "withTerm": "this",
                "withNumber": 1,
                "withAnotherNumber": 2
            }
        })
    );
}

#[test]
fn complex_nested_object() {
    let template: Template = something_like(Template::object([
        (
            "stringMatcher",
            Template::object([("awesomeSetting", something_like("a string").into())]),
        ),
        (
            "anotherStringMatcher",
            Template::object([
                (
                    "nestedSetting",
                    Template::object([(
                        "anotherStringMatcherSubSetting",
                        something_like(true).into(),
                    )]),
                ),
                ("anotherSetting", term("this", "this|that").unwrap().into()),
            ]),
        ),
        (
            "arrayMatcher",
            Template::object([(
                "lotsOfValueregex",
                each_like("useful", Some(3)).unwrap().into(),
            )]),
        ),
        (
            "arrayOfMatcherregex",
            Template::object([(
                "lotsOfValueregex",
                each_like(
                    Template::object([
                        ("foo", Template::from("bar")),
                        ("baz", something_like("bat").into()),
                    ]),
                    Some(3),
                )
                .unwrap()
                .into(),
            )]),
        ),
    ]))
    .into();

    let item = json!({"foo": "bar", "baz": "bat"});
    assert_json_eq!(
        extract_payload(&template),
        json!({
            "stringMatcher": {"awesomeSetting": "a string"},
            "anotherStringMatcher": {
                "nestedSetting": {"anotherStringMatcherSubSetting": true},
                "anotherSetting": "this"
            },
            "arrayMatcher": {"lotsOfValueregex": ["useful", "useful", "useful"]},
            "arrayOfMatcherregex": {"lotsOfValueregex": [item.clone(), item.clone(), item]}
        })
    );
}

#[test]
fn nested_each_like_wire_shape() {
    let inner = each_like(
        Template::object([
            ("colour", term("red", "red|green|blue").unwrap().into()),
            ("size", something_like(10).into()),
            (
                "tag",
                each_like(
                    Template::from(vec![
                        Template::from(something_like("jumper")),
                        Template::from(something_like("shirt")),
                    ]),
                    Some(2),
                )
                .unwrap()
                .into(),
            ),
        ]),
        Some(1),
    )
    .unwrap();
    let template: Template = each_like(inner, Some(1)).unwrap().into();

    let tag_pair = json!([
        {"value": "jumper", "pact:matcher:type": "type"},
        {"value": "shirt", "pact:matcher:type": "type"}
    ]);
    assert_json_eq!(
        template.to_json(),
        json!({
            "value": [{
                "value": [{
                    "colour": {"value": "red", "regex": "red|green|blue", "pact:matcher:type": "regex"},
                    "size": {"value": 10, "pact:matcher:type": "type"},
                    "tag": {
                        "value": [tag_pair.clone(), tag_pair],
                        "pact:matcher:type": "type",
                        "min": 2
                    }
                }],
                "pact:matcher:type": "type",
                "min": 1
            }],
            "pact:matcher:type": "type",
            "min": 1
        })
    );

    assert_json_eq!(
        extract_payload(&template),
        json!([[{
            "colour": "red",
            "size": 10,
            "tag": [["jumper", "shirt"], ["jumper", "shirt"]]
        }]])
    );
}

#[test]
fn wire_document_extracts_like_the_template() {
    let template = Template::object([
        ("id", Format::Uuid.matcher().into()),
        ("emails", each_like(Format::Email.matcher(), Some(2)).unwrap().into()),
    ]);
    let wire = serde_json::to_value(&template).unwrap();

    assert_eq!(extract_json(&wire), extract_payload(&template));
    let parsed: Template = serde_json::from_value(wire).unwrap();
    assert_eq!(parsed, template);
}
