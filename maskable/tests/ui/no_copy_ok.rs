use std::sync::Mutex;

use maskable::{Maskable, Masker};

#[derive(Maskable)]
#[mask(no_copy)]
struct Connection {
    #[mask(email)]
    user: String,
    state: Mutex<u32>,
}

fn main() {
    let connection = Connection {
        user: "hong@example.com".into(),
        state: Mutex::new(0),
    };
    let masked = Masker::new().mask(&connection);
    assert!(!masked.is_redacted());
}
