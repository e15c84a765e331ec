use frozen_box::{static_buf, PoolBox};
use heapless::{pool, pool::singleton::Pool};

pool!(P: [usize; 2]);

fn main() {
    assert!(P::grow(static_buf![0; 64].unwrap()) >= 1);
    let boxed = PoolBox::<P>::new([0, 1]).unwrap();
    assert_eq!(*boxed, [0, 1]);
    drop(boxed);

    let boxed = PoolBox::<P>::new([2, 3]).unwrap();
    assert_eq!(boxed.cloned(), [2, 3]);
}
