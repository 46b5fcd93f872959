//! Classifying deserialized JSON.

use typeis::{Check, TypeName, Value, assert, classify, is};

#[test]
fn test_json_scalars() {
    let json: serde_json::Value = serde_json::from_str(r#"[null, true, 1.5, 7, "0x10", ""]"#)
        .expect("valid json");
    let serde_json::Value::Array(items) = json else {
        panic!("expected an array");
    };
    let values: Vec<Value> = items.into_iter().map(Value::from).collect();

    let categories: Vec<TypeName> = values.iter().map(classify).collect();
    assert_eq!(
        categories,
        vec![
            TypeName::Null,
            TypeName::Boolean,
            TypeName::Number,
            TypeName::Number,
            TypeName::String,
            TypeName::String,
        ]
    );
    assert!(is::integer(&values[3]));
    assert!(!is::integer(&values[2]));
    assert!(is::numeric_string(&values[4]));
    assert!(is::empty_string(&values[5]));
}

#[test]
fn test_json_objects_are_plain() {
    let value = Value::from(serde_json::json!({
        "user": { "name": "unicorn", "tags": [] },
        "empty": {}
    }));
    assert!(is::plain_object(&value));
    assert!(is::non_empty_object(&value));

    let user = value.get("user").expect("user");
    assert!(is::plain_object(&user));
    let tags = user.get("tags").expect("tags");
    assert!(is::empty_array(&tags));
    assert!(is::array_like(&tags));
    assert!(is::empty_object(&value.get("empty").expect("empty")));
}

#[test]
fn test_validating_untrusted_input() {
    let payload = serde_json::json!({ "port": "8080", "hosts": ["a", "b"] });
    let value = Value::from(payload);

    let port = value.get("port").expect("port");
    let err = assert::number(&port).expect_err("port is a string");
    assert_eq!(
        err.to_string(),
        "Expected value which is `number`, received value of type `string`."
    );
    assert_eq!(assert::numeric_string(&port), Ok(()));

    let hosts = value.get("hosts").expect("hosts");
    assert_eq!(assert::non_empty_array(&hosts), Ok(()));
    let elements: Vec<Value> = (0..2)
        .filter_map(|i| hosts.get(format!("{i}")))
        .collect();
    assert_eq!(elements.len(), 2);
    assert_eq!(is::all(Check::NonEmptyString, &elements), Ok(true));
    assert_eq!(assert::all(Check::String, &elements), Ok(()));
}
