use bridge::{
	Array, Config, ErrorKind, Function, Object, Symbol, Value, outbound, outbound_object, outbound_object_with, outbound_with,
};
use bridge::managed::{Number, Vm};

#[test]
fn primitives() {
	let vm = Vm::new();
	let frame = vm.frame();
	let builtins = vm.builtins();

	assert!(outbound(&frame, &Value::Null).unwrap().is_null());
	assert!(outbound(&frame, &Value::Undefined).unwrap().is_null());

	let boolean = outbound(&frame, &Value::bool(true)).unwrap();
	assert!(frame.is_instance_of(boolean, builtins.boolean).unwrap());
	assert!(frame.boolean_value(boolean).unwrap());

	let number = outbound(&frame, &Value::f64(-1.5)).unwrap();
	assert_eq!(frame.class_of(number).unwrap(), Some(builtins.double));
	assert_eq!(frame.number_value(number).unwrap(), Number::Double(-1.5));

	let integral = outbound(&frame, &Value::i32(7)).unwrap();
	assert_eq!(frame.class_of(integral).unwrap(), Some(builtins.double));

	let string = outbound(&frame, &Value::string("x")).unwrap();
	assert!(frame.is_instance_of(string, builtins.string).unwrap());
	assert_eq!(frame.string_value(string).unwrap(), "x");
}

#[test]
fn object() {
	let vm = Vm::new();
	let frame = vm.frame();

	let object = Object::new();
	object.set("name", Value::string("bridge"));
	object.set("enabled", Value::bool(false));
	object.set("missing", Value::Null);

	let map = outbound(&frame, &Value::object(&object)).unwrap();
	assert!(frame.is_instance_of(map, vm.builtins().map).unwrap());
	assert_eq!(frame.map_len(map).unwrap(), 3);

	let mut keys = frame.map_keys(map).unwrap();
	keys.sort();
	assert_eq!(keys, ["enabled", "missing", "name"]);

	let name = frame.map_get(map, "name").unwrap().unwrap();
	assert_eq!(frame.string_value(name).unwrap(), "bridge");
	assert!(frame.map_get(map, "missing").unwrap().unwrap().is_null());
	assert!(frame.map_get(map, "absent").unwrap().is_none());
}

#[test]
fn array() {
	let vm = Vm::new();
	let frame = vm.frame();

	let array = Array::from_vec(vec![Value::i32(1), Value::string("two"), Value::Null, Value::bool(true)]);
	let list = outbound(&frame, &Value::array(&array)).unwrap();
	assert!(frame.is_instance_of(list, vm.builtins().list).unwrap());
	assert_eq!(frame.class_of(list).unwrap(), Some(vm.builtins().array_list));

	let items = frame.list_items(list).unwrap();
	assert_eq!(items.len(), 4);
	assert_eq!(frame.number_value(items[0]).unwrap(), Number::Double(1.0));
	assert_eq!(frame.string_value(items[1]).unwrap(), "two");
	assert!(items[2].is_null());
	assert!(frame.boolean_value(items[3]).unwrap());
}

#[test]
fn empty_containers() {
	let vm = Vm::new();
	let frame = vm.frame();

	let map = outbound(&frame, &Value::object(&Object::new())).unwrap();
	assert_eq!(frame.map_len(map).unwrap(), 0);

	let list = outbound(&frame, &Value::array(&Array::new())).unwrap();
	assert_eq!(frame.list_len(list).unwrap(), 0);
}

#[test]
fn root_object() {
	let vm = Vm::new();
	let frame = vm.frame();

	let options = Object::from_iter([("quality", Value::f64(0.75))]);
	let map = outbound_object(&frame, &options).unwrap();
	let quality = frame.map_get(map, "quality").unwrap().unwrap();
	assert_eq!(frame.number_value(quality).unwrap().as_f64(), 0.75);
}

#[test]
fn root_object_with_config() {
	let vm = Vm::new();
	let frame = vm.frame();

	let options = Object::from_iter([("sizes", Value::array(&Array::from_vec(vec![Value::array(&Array::new())])))]);
	assert!(outbound_object_with(&frame, &options, &Config::default().max_depth(Some(3))).is_ok());

	let error = outbound_object_with(&frame, &options, &Config::default().max_depth(Some(2))).unwrap_err();
	assert_eq!(error.kind, ErrorKind::DepthExceeded);
	assert_eq!(error.path_string(), "$.sizes[0]");

	let looped = Object::new();
	looped.set("again", Value::object(&looped));
	let error = outbound_object_with(&frame, &looped, &Config::default()).unwrap_err();
	assert_eq!(error.kind, ErrorKind::CyclicStructure);
	let error = outbound_object_with(&frame, &looped, &Config::default().detect_cycles(false).max_depth(Some(8))).unwrap_err();
	assert_eq!(error.kind, ErrorKind::DepthExceeded);
	looped.delete("again");
}

#[test]
fn unsupported() {
	let vm = Vm::new();
	let frame = vm.frame();

	let function = Value::from(Function::new("callback", 0));
	let error = outbound(&frame, &function).unwrap_err();
	assert_eq!(error.kind, ErrorKind::UnsupportedType);
	assert!(error.path.is_empty());

	let symbol = Value::from(Symbol::new(Some("tag")));
	assert_eq!(outbound(&frame, &symbol).unwrap_err().kind, ErrorKind::UnsupportedType);
}

#[test]
fn unsupported_nested() {
	let vm = Vm::new();
	let frame = vm.frame();

	let inner = Array::from_vec(vec![Value::Null, Value::Null, Value::from(Function::new("f", 1))]);
	let object = Object::new();
	object.set("a", Value::array(&inner));

	let error = outbound(&frame, &Value::object(&object)).unwrap_err();
	assert_eq!(error.kind, ErrorKind::UnsupportedType);
	assert_eq!(error.path_string(), "$.a[2]");
	assert!(error.to_string().starts_with("UnsupportedType at $.a[2]: "));
}

#[test]
fn cycles() {
	let vm = Vm::new();
	let frame = vm.frame();

	let object = Object::new();
	let array = Array::new();
	array.push(Value::object(&object));
	object.set("self", Value::array(&array));

	let error = outbound(&frame, &Value::object(&object)).unwrap_err();
	assert_eq!(error.kind, ErrorKind::CyclicStructure);
	assert_eq!(error.path_string(), "$.self[0]");
}

#[test]
fn shared_subgraphs() {
	let vm = Vm::new();
	let frame = vm.frame();

	let shared = Object::from_iter([("x", Value::i32(1))]);
	let array = Array::from_vec(vec![Value::object(&shared), Value::object(&shared)]);

	let list = outbound(&frame, &Value::array(&array)).unwrap();
	let items = frame.list_items(list).unwrap();
	assert_eq!(items.len(), 2);
	assert!(!frame.is_same_object(items[0], items[1]).unwrap());
}

#[test]
fn depth() {
	let vm = Vm::new();
	let frame = vm.frame();

	let nested = Array::from_vec(vec![Value::array(&Array::from_vec(vec![Value::array(&Array::new())]))]);
	let value = Value::array(&nested);

	let config = Config::default().max_depth(Some(3));
	assert!(outbound_with(&frame, &value, &config).is_ok());

	let config = Config::default().max_depth(Some(2));
	let error = outbound_with(&frame, &value, &config).unwrap_err();
	assert_eq!(error.kind, ErrorKind::DepthExceeded);
	assert_eq!(error.path_string(), "$[0][0]");
}

#[test]
fn allocation_failure() {
	let vm = Vm::with_capacity(3);
	let frame = vm.frame();

	let array = Array::from_vec(vec![Value::i32(1), Value::i32(2), Value::i32(3)]);
	let error = outbound(&frame, &Value::array(&array)).unwrap_err();
	assert_eq!(error.kind, ErrorKind::AllocationFailure);
	assert_eq!(error.path_string(), "$[2]");
}

#[test]
fn handles_live_in_frame() {
	let vm = Vm::new();
	{
		let frame = vm.frame();
		let array = Array::from_vec(vec![Value::string("a"), Value::string("b")]);
		outbound(&frame, &Value::array(&array)).unwrap();
		assert_eq!(vm.live_objects(), 3);
		assert_eq!(frame.len(), 3);
	}
	assert_eq!(vm.live_objects(), 0);
	assert_eq!(vm.live_refs(), 0);
}

#[test]
fn failure_releases_with_frame() {
	let vm = Vm::new();
	{
		let frame = vm.frame();
		let array = Array::from_vec(vec![Value::string("a"), Value::from(Function::new("f", 0))]);
		assert!(outbound(&frame, &Value::array(&array)).is_err());
		assert_eq!(vm.live_objects(), 2);
	}
	assert_eq!(vm.live_objects(), 0);
}
