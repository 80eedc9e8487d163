use std::collections::{BTreeMap, HashMap};

use pretty_assertions::assert_eq;

use super::*;

// === Output text ===

#[test]
fn booleans_output_as_digits() {
    assert_eq!(Value::from(true).output_text(), "1");
    assert_eq!(Value::from(false).output_text(), "0");
}

#[test]
fn numbers_output_verbatim() {
    assert_eq!(Value::from(127_i8).output_text(), "127");
    assert_eq!(Value::from(-5_i64).output_text(), "-5");
    assert_eq!(Value::from(32769_u16).output_text(), "32769");
    assert_eq!(Value::from(u64::MAX).output_text(), "18446744073709551615");
}

#[test]
fn floats_output_like_the_script_language() {
    assert_eq!(Value::from(1.5).output_text(), "1.5");
    assert_eq!(Value::from(2.0).output_text(), "2.0");
    assert_eq!(Value::from(-0.25).output_text(), "-0.25");
    assert_eq!(Value::from(f64::INFINITY).output_text(), "inf");
    assert_eq!(Value::from(f64::NEG_INFINITY).output_text(), "-inf");
    assert_eq!(Value::from(f64::NAN).output_text(), "nan");
}

#[test]
fn strings_output_verbatim() {
    assert_eq!(Value::from("world!").output_text(), "world!");
}

#[test]
fn other_kinds_output_type_name() {
    assert_eq!(Value::Nil.output_text(), "nil");
    assert_eq!(Value::from(vec![1_i32, 2]).output_text(), "table");
    assert_eq!(Value::from(Table::new()).output_text(), "table");
    let f = NativeFunction::new(|_| Ok(Value::Nil));
    assert_eq!(Value::from(f).output_text(), "function");
}

#[test]
fn type_names() {
    assert_eq!(Value::Nil.type_name(), "nil");
    assert_eq!(Value::from(true).type_name(), "boolean");
    assert_eq!(Value::from(1_i32).type_name(), "number");
    assert_eq!(Value::from(1_u32).type_name(), "number");
    assert_eq!(Value::from(1.0).type_name(), "number");
    assert_eq!(Value::from("s").type_name(), "string");
    assert_eq!(Value::from(Vec::<Value>::new()).type_name(), "table");
}

// === Conversions ===

#[test]
fn option_converts_to_nil() {
    assert_eq!(Value::from(None::<i32>), Value::Nil);
    assert_eq!(Value::from(Some("x")), Value::String("x".to_owned()));
}

#[test]
fn hash_map_keys_are_sorted() {
    let map: HashMap<&str, i32> = [("b", 2), ("a", 1), ("c", 3)].into_iter().collect();
    let Value::Table(table) = Value::from(map) else {
        panic!("expected a table");
    };
    assert_eq!(table.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
}

#[test]
fn btree_map_converts_to_table() {
    let map = BTreeMap::from([("element", 32769_u16)]);
    let value = Value::from(map);
    assert_eq!(value.field("element"), Some(&Value::Unsigned(32769)));
}

// === Tables and fields ===

#[test]
fn table_keeps_insertion_order() {
    let mut table = Table::new();
    table.insert("z", 1_i32);
    table.insert("a", 2_i32);
    table.insert("m", 3_i32);
    assert_eq!(table.keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);
    assert_eq!(table.len(), 3);
}

#[test]
fn table_insert_replaces_in_place() {
    let mut table: Table = [("a", 1_i32), ("b", 2_i32)].into_iter().collect();
    assert_eq!(table.insert("a", 10_i32), Some(Value::Integer(1)));
    assert_eq!(
        table.iter().map(|(k, v)| (k, v.clone())).collect::<Vec<_>>(),
        vec![("a", Value::Integer(10)), ("b", Value::Integer(2))]
    );
    assert!(table.contains_key("b"));
    assert!(!table.contains_key("c"));
}

#[test]
fn list_fields_are_one_based() {
    let list = Value::from(vec!["a", "b"]);
    assert_eq!(list.field("1"), Some(&Value::from("a")));
    assert_eq!(list.field("2"), Some(&Value::from("b")));
    assert_eq!(list.field("0"), None);
    assert_eq!(list.field("3"), None);
    assert_eq!(list.field("x"), None);
}

#[test]
fn scalars_have_no_fields() {
    assert_eq!(Value::from(1_i32).field("x"), None);
}

// === Functions ===

#[test]
fn native_function_call_and_identity() {
    let upper = NativeFunction::new(|args| match args {
        [Value::String(s)] => Ok(Value::from(s.to_uppercase())),
        _ => Err("expected one string".to_owned()),
    });
    assert_eq!(upper.call(&[Value::from("world")]), Ok(Value::from("WORLD")));
    assert_eq!(upper.call(&[]), Err("expected one string".to_owned()));

    let same = upper.clone();
    let other = NativeFunction::new(|_| Ok(Value::Nil));
    assert_eq!(upper, same);
    assert_ne!(upper, other);
}
