use maskable::{Maskable, Masker};

#[derive(Clone, Maskable)]
struct Contact(#[mask(email)] String, u8);

#[derive(Clone, Maskable)]
struct Marker;

fn main() {
    let masker = Masker::new();
    let contact = Contact("hong@example.com".into(), 1);
    assert_eq!(masker.mask(&contact).0, "ho**@example.com");
    assert!(masker.mask(&Marker).is_redacted());
}
