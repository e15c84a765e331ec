use std::cell::RefCell;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::thread;

use frozen_box::Box;

fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn integer_round_trip() {
    assert_eq!(*Box::new(42).get(), 42);
}

#[test]
fn string_round_trip() {
    let boxed = Box::new(String::from("hello"));
    assert_eq!(boxed.get(), "hello");
    assert_eq!(boxed.to_string(), "hello");
    assert_eq!(format!("{:?}", boxed), "\"hello\"");
}

#[test]
fn repeated_gets_agree() {
    let boxed = Box::new(vec![1, 2, 3]);
    let reads: Vec<_> = (0..8).map(|_| boxed.get().clone()).collect();
    assert!(reads.iter().all(|read| read == &[1, 2, 3]));
    assert!(std::ptr::eq(boxed.get(), boxed.get()));
}

#[test]
fn mutation_through_shared_handle_is_visible() {
    let list = Rc::new(RefCell::new(vec![1]));
    let boxed = Box::new(Rc::clone(&list));

    list.borrow_mut().push(2);

    assert_eq!(*boxed.get().borrow(), [1, 2]);
}

#[test]
fn mutation_through_mutex_is_visible() {
    let shared = Arc::new(Mutex::new(0));
    let boxed = Box::new(Arc::clone(&shared));

    *shared.lock().unwrap() = 5;

    assert_eq!(*boxed.get().lock().unwrap(), 5);
}

#[test]
fn hashes_like_value() {
    assert_eq!(hash_of(&Box::new("key")), hash_of(&"key"));

    let set: HashSet<Box<u8>> = [1, 2, 2, 3].iter().copied().map(Box::new).collect();
    assert_eq!(set.len(), 3);
    assert!(set.contains(&2_u8));
}

#[test]
fn ordered_like_value() {
    let mut boxes = vec![Box::new(3), Box::new(1), Box::new(2)];
    boxes.sort();
    let values: Vec<i32> = boxes.into_iter().map(Box::into_inner).collect();
    assert_eq!(values, [1, 2, 3]);
}

#[test]
fn concurrent_readers() {
    let boxed = Box::new(String::from("shared"));

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(boxed.get(), "shared");
                }
            });
        }
    });

    let boxed = Arc::new(Box::new([7_u64; 32]));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let boxed = Arc::clone(&boxed);
            thread::spawn(move || boxed.get().iter().sum::<u64>())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 7 * 32);
    }
}

#[test]
fn pointer_formats_value_address() {
    let boxed = Box::new(0_u32);
    let expected = format!("{:p}", boxed.get() as *const u32);
    assert_eq!(format!("{:p}", boxed), expected);
}
