use bridge::{Array, Object, Value, inbound, outbound};
use bridge::managed::Vm;

fn round_trip(value: &Value) -> Value {
	let vm = Vm::new();
	let frame = vm.frame();
	let handle = outbound(&frame, value).unwrap();
	inbound(&frame, handle).unwrap()
}

#[test]
fn leaves() {
	let leaves = [
		Value::Null,
		Value::bool(true),
		Value::bool(false),
		Value::i32(0),
		Value::f64(-1.5),
		Value::string(""),
		Value::string("x"),
	];
	for leaf in leaves {
		assert_eq!(round_trip(&leaf), leaf);
	}
}

#[test]
fn undefined_becomes_null() {
	assert_eq!(round_trip(&Value::Undefined), Value::Null);
}

#[test]
fn empty_containers() {
	let object = Value::object(&Object::new());
	assert_eq!(round_trip(&object), object);

	let array = Value::array(&Array::new());
	assert_eq!(round_trip(&array), array);
}

#[test]
fn array_order() {
	let array: Array = (0..50).map(|i| Value::string(&format!("item-{i}"))).collect();
	let value = Value::array(&array);
	assert_eq!(round_trip(&value), value);
}

#[test]
fn object_keys() {
	let object = Object::from_iter([
		("zeta", Value::i32(1)),
		("alpha", Value::Null),
		("mid", Value::string("m")),
	]);
	let result = round_trip(&Value::object(&object));

	let mut expected = object.keys();
	let mut actual = result.as_object().unwrap().keys();
	expected.sort();
	actual.sort();
	assert_eq!(actual, expected);
	assert_eq!(result, Value::object(&object));
}

#[test]
fn five_levels() {
	let mut value = Value::string("leaf");
	for level in 0..5 {
		value = if level % 2 == 0 {
			Value::array(&Array::from_vec(vec![Value::i32(level), value]))
		} else {
			let object = Object::new();
			object.set(format!("level{level}"), value);
			object.set("flag", Value::bool(level == 3));
			Value::object(&object)
		};
	}
	assert_eq!(round_trip(&value), value);
}

#[test]
fn mixed_document() {
	let tags = Array::from_vec(vec![Value::string("a"), Value::string("b")]);
	let size = Object::from_iter([("width", 1920), ("height", 1080)]);
	let document = Object::new();
	document.set("tags", Value::array(&tags));
	document.set("size", Value::object(&size));
	document.set("ratio", Value::f64(16.0 / 9.0));
	document.set("enabled", Value::bool(true));
	document.set("parent", Value::Null);

	let value = Value::object(&document);
	assert_eq!(round_trip(&value), value);
}

#[test]
fn frame_release_restores_heap() {
	let vm = Vm::new();
	let before = vm.live_objects();
	{
		let frame = vm.frame();
		let array = Array::from_vec(vec![Value::object(&Object::from_iter([("k", Value::i32(1))]))]);
		let handle = outbound(&frame, &Value::array(&array)).unwrap();
		inbound(&frame, handle).unwrap();
	}
	assert_eq!(vm.live_objects(), before);
	assert_eq!(vm.live_refs(), 0);
}
