use bridge::{Array, Value};

#[test]
fn array() {
	let array = Array::new();
	array.set(0, Value::null());
	array.set(2, Value::string("third"));

	assert_eq!(array.len(), 3);
	assert_eq!(array.get(0), Some(Value::Null));
	assert_eq!(array.get(1), Some(Value::Undefined));
	assert_eq!(array.get(2), Some(Value::string("third")));
	assert!(array.get(3).is_none());

	array.push(Value::bool(true));
	assert_eq!(array.pop(), Some(Value::bool(true)));
	assert_eq!(array.len(), 3);
}

#[test]
fn snapshots() {
	let array: Array = [1, 2, 3].into_iter().collect();
	let snapshot = array.to_vec();
	array.push(Value::i32(4));

	assert_eq!(snapshot.len(), 3);
	assert_eq!(array.len(), 4);
	assert_eq!(Array::from_slice(&snapshot), Array::from_vec(vec![Value::i32(1), Value::i32(2), Value::i32(3)]));
}

#[test]
fn equality() {
	let first = Array::from_vec(vec![Value::f64(0.0), Value::string("x")]);
	let second = Array::from_vec(vec![Value::f64(-0.0), Value::string("x")]);
	assert_eq!(first, second);

	let nan = Array::from_vec(vec![Value::f64(f64::NAN)]);
	assert_ne!(nan, nan.clone().to_vec().into_iter().collect::<Array>());
	assert_eq!(nan, nan.clone());
}

#[test]
fn capacity() {
	let array = Array::try_with_capacity(16).unwrap();
	assert!(array.is_empty());
	assert!(Array::try_with_capacity(usize::MAX).is_err());
}
