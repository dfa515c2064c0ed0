use bridge::{Array, Function, Object, Symbol, Type, Value};

#[test]
fn object() {
	let object = Object::new();
	assert!(object.is_empty());

	assert_eq!(object.set("key", Value::null()), None);
	assert_eq!(object.set("key", Value::bool(true)), Some(Value::Null));
	object.set("other", Value::string("value"));

	assert!(object.has("key"));
	assert_eq!(object.get("key"), Some(Value::bool(true)));
	assert_eq!(object.keys(), ["key", "other"]);
	assert_eq!(object.len(), 2);

	assert!(object.delete("key"));
	assert!(!object.delete("key"));
	assert!(object.get("key").is_none());
	assert_eq!(object.len(), 1);
}

#[test]
fn shared_references() {
	let object = Object::new();
	let alias = object.clone();
	alias.set("shared", Value::i32(1));

	assert!(object.ptr_eq(&alias));
	assert_eq!(object.get("shared"), Some(Value::i32(1)));
	assert!(!object.ptr_eq(&Object::new()));
}

#[test]
fn structural_equality() {
	let first = Object::from_iter([("a", Value::i32(1)), ("b", Value::array(&Array::from_vec(vec![Value::Null])))]);
	let second = Object::from_iter([("b", Value::array(&Array::from_vec(vec![Value::Null]))), ("a", Value::i32(1))]);
	assert_eq!(first, second);

	second.set("c", Value::Undefined);
	assert_ne!(first, second);

	let function = Function::new("f", 0);
	assert_eq!(Value::from(function.clone()), Value::from(function));
	assert_ne!(Value::from(Function::new("f", 0)), Value::from(Function::new("f", 0)));
	assert_ne!(Value::from(Symbol::new(None)), Value::from(Symbol::new(None)));
}

#[test]
fn types() {
	assert_eq!(Value::Undefined.type_of(), Type::Undefined);
	assert_eq!(Value::Null.type_of(), Type::Null);
	assert_eq!(Value::object(&Object::new()).type_of(), Type::Object);
	assert_eq!(Value::array(&Array::new()).type_of(), Type::Array);
	assert_eq!(Value::from(Function::new("f", 0)).type_of(), Type::Function);
	assert_eq!(Type::Symbol.to_string(), "symbol");
	assert!(Value::Null.is_null_or_undefined());
	assert!(Value::string("s").is_primitive());
	assert!(!Value::object(&Object::new()).is_primitive());
}

#[test]
fn coercion() {
	assert!(!Value::string("").coerce_to_boolean());
	assert!(Value::object(&Object::new()).coerce_to_boolean());
	assert!(!Value::f64(f64::NAN).coerce_to_boolean());

	assert_eq!(Value::string(" 42 ").coerce_to_number(), 42.0);
	assert_eq!(Value::bool(true).coerce_to_number(), 1.0);
	assert_eq!(Value::Null.coerce_to_number(), 0.0);
	assert!(Value::Undefined.coerce_to_number().is_nan());

	assert_eq!(Value::f64(1.5).coerce_to_string(), "1.5");
	assert_eq!(Value::f64(f64::NEG_INFINITY).coerce_to_string(), "-Infinity");
	assert_eq!(Value::object(&Object::new()).coerce_to_string(), "[object Object]");
}

#[test]
fn numeric_strings() {
	assert_eq!(Value::string("Infinity").coerce_to_number(), f64::INFINITY);
	assert_eq!(Value::string(" -Infinity\n").coerce_to_number(), f64::NEG_INFINITY);
	assert!(Value::string("inf").coerce_to_number().is_nan());
	assert!(Value::string("infinity").coerce_to_number().is_nan());
	assert!(Value::string("NaN").coerce_to_number().is_nan());
	assert!(Value::string("1_000").coerce_to_number().is_nan());

	assert_eq!(Value::string("0x10").coerce_to_number(), 16.0);
	assert_eq!(Value::string("0o17").coerce_to_number(), 15.0);
	assert_eq!(Value::string("0B101").coerce_to_number(), 5.0);
	assert!(Value::string("-0x10").coerce_to_number().is_nan());
	assert!(Value::string("0x").coerce_to_number().is_nan());

	assert_eq!(Value::string("1e3").coerce_to_number(), 1000.0);
	assert_eq!(Value::string(".5").coerce_to_number(), 0.5);
	assert_eq!(Value::string("5.").coerce_to_number(), 5.0);
	assert_eq!(Value::string("-2.5E-1").coerce_to_number(), -0.25);
	assert!(Value::string(".").coerce_to_number().is_nan());
	assert!(Value::string("1e").coerce_to_number().is_nan());
	assert_eq!(Value::string("\u{FEFF} 7 ").coerce_to_number(), 7.0);
}

#[test]
fn number_strings() {
	assert_eq!(Value::f64(1e21).coerce_to_string(), "1e+21");
	assert_eq!(Value::f64(1e-7).coerce_to_string(), "1e-7");
	assert_eq!(Value::f64(1.5e-7).coerce_to_string(), "1.5e-7");
	assert_eq!(Value::f64(-1.25e30).coerce_to_string(), "-1.25e+30");
	assert_eq!(Value::f64(1e20).coerce_to_string(), "100000000000000000000");
	assert_eq!(Value::f64(1e-6).coerce_to_string(), "0.000001");
	assert_eq!(Value::f64(123.456).coerce_to_string(), "123.456");
	assert_eq!(Value::f64(-0.0).coerce_to_string(), "0");
	assert_eq!(Value::f64(0.1 + 0.2).coerce_to_string(), "0.30000000000000004");
}
