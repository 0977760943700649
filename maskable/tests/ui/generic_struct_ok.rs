use std::marker::PhantomData;

use maskable::{Maskable, Masker};

struct NotClone;

#[derive(Clone, Maskable)]
struct Record<T, S> {
    payload: T,
    #[mask(name)]
    label: S,
    _kind: PhantomData<NotClone>,
}

fn main() {
    let record = Record {
        payload: 7_u32,
        label: String::from("Lee"),
        _kind: PhantomData,
    };
    let masked = Masker::new().mask(&record);
    assert_eq!(masked.label, "L**");
}
