use core::any::Any;
use core::cell::Cell;

use frozen_box::Box;

fn main() {
    let counter = Cell::new(0_isize);
    let boxed: Box<&Cell<isize>> = Box::new(&counter);
    assert_eq!(boxed.get().get(), 0);
    counter.set(1);
    assert_eq!(boxed.get().get(), 1);

    let boxed = Box::new([0_u8; 4]);
    let erased: &Box<dyn Any> = &boxed;
    assert_eq!(erased.downcast_ref::<[u8; 4]>(), Some(&[0; 4]));
    let slice: &Box<[u8]> = &boxed;
    assert_eq!(slice.len(), 4);
}
