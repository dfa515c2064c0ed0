use bridge::ErrorKind;
use bridge::managed::{ClassFlags, Vm};

#[test]
fn builtins() {
	let vm = Vm::new();
	let builtins = vm.builtins();

	assert_eq!(vm.find_class("java.util.ArrayList"), Some(builtins.array_list));
	assert_eq!(vm.class_name(builtins.hash_map).unwrap(), "java.util.HashMap");
	assert!(vm.class(builtins.list).unwrap().flags.contains(ClassFlags::INTERFACE));
	assert!(vm.class(builtins.number).unwrap().flags.contains(ClassFlags::ABSTRACT));
	assert!(vm.class(builtins.string).unwrap().flags.contains(ClassFlags::FINAL));
	assert!(vm.is_assignable(builtins.linked_hash_map, builtins.hash_map));
}

#[test]
fn instance_of() {
	let vm = Vm::new();
	let builtins = vm.builtins();
	let frame = vm.frame();

	let integer = frame.new_integer(1).unwrap();
	assert!(frame.is_instance_of(integer, builtins.integer).unwrap());
	assert!(frame.is_instance_of(integer, builtins.number).unwrap());
	assert!(frame.is_instance_of(integer, builtins.object).unwrap());
	assert!(!frame.is_instance_of(integer, builtins.long).unwrap());
	assert!(!frame.is_instance_of(frame.null(), builtins.object).unwrap());

	let list = frame.new_array_list(0).unwrap();
	assert!(frame.is_instance_of(list, builtins.list).unwrap());
	assert!(!frame.is_instance_of(list, builtins.map).unwrap());
}

#[test]
fn define_class() {
	let vm = Vm::new();
	let builtins = *vm.builtins();

	let base = vm.define_abstract_class("com.example.Shape", builtins.object, &[]).unwrap();
	let named = vm.define_interface("com.example.Named", &[]).unwrap();
	let circle = vm.define_class("com.example.Circle", base, &[named]).unwrap();

	assert!(vm.is_assignable(circle, base));
	assert!(vm.is_assignable(circle, named));
	assert!(!vm.is_assignable(base, circle));

	let frame = vm.frame();
	let instance = frame.new_object(circle).unwrap();
	assert!(frame.is_instance_of(instance, named).unwrap());
	assert_eq!(frame.new_object(base).unwrap_err().kind, ErrorKind::Type);
	assert_eq!(frame.new_object(named).unwrap_err().kind, ErrorKind::Type);
}

#[test]
fn invalid_definitions() {
	let vm = Vm::new();
	let builtins = *vm.builtins();

	let error = vm.define_class("com.example.Text", builtins.string, &[]).unwrap_err();
	assert_eq!(error.kind, ErrorKind::Type);

	let error = vm.define_class("com.example.Items", builtins.list, &[]).unwrap_err();
	assert_eq!(error.kind, ErrorKind::Type);

	let error = vm.define_class("com.example.Fake", builtins.object, &[builtins.hash_map]).unwrap_err();
	assert_eq!(error.kind, ErrorKind::Type);

	let error = vm.define_class("java.util.HashMap", builtins.object, &[]).unwrap_err();
	assert_eq!(error.kind, ErrorKind::Type);
}

#[test]
fn boxes_need_values() {
	let vm = Vm::new();
	let builtins = *vm.builtins();
	let frame = vm.frame();

	assert_eq!(frame.new_object(builtins.string).unwrap_err().kind, ErrorKind::Type);
	assert_eq!(frame.new_object(builtins.double).unwrap_err().kind, ErrorKind::Type);
	assert_eq!(frame.new_object(builtins.number).unwrap_err().kind, ErrorKind::Type);

	let map = frame.new_object(builtins.hash_map).unwrap();
	assert_eq!(frame.map_len(map).unwrap(), 0);
}

#[test]
fn user_map_class() {
	let vm = Vm::new();
	let builtins = *vm.builtins();
	let settings = vm.define_class("com.example.Settings", builtins.hash_map, &[]).unwrap();

	let frame = vm.frame();
	let map = frame.new_object(settings).unwrap();
	frame.map_put(map, "theme", frame.new_string("dark").unwrap()).unwrap();
	assert!(frame.is_instance_of(map, builtins.map).unwrap());
	assert_eq!(frame.map_keys(map).unwrap(), ["theme"]);
}

#[test]
fn classes_from_another_vm() {
	let vm = Vm::new();
	let other = Vm::new();
	let widget = other.define_class("com.example.Widget", other.builtins().object, &[]).unwrap();
	let frame = vm.frame();

	assert_eq!(vm.class(widget).unwrap_err().kind, ErrorKind::Type);
	assert_eq!(vm.class_name(widget).unwrap_err().kind, ErrorKind::Type);
	assert_eq!(frame.new_object(widget).unwrap_err().kind, ErrorKind::Type);
	assert_eq!(vm.define_class("com.example.Gadget", widget, &[]).unwrap_err().kind, ErrorKind::Type);
	assert!(!vm.is_assignable(widget, vm.builtins().object));

	let list = frame.new_array_list(0).unwrap();
	assert!(!frame.is_instance_of(list, widget).unwrap());
}
