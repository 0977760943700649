use std::borrow::Cow;

use maskable::{Maskable, Masker};

#[derive(Clone, Maskable)]
struct Customer {
    id: u32,
    #[mask(name)]
    name: String,
    #[mask(email)]
    email: String,
    #[mask(email(3))]
    backup_email: Option<String>,
    #[mask(phone)]
    phone: String,
    #[mask(credit_card)]
    card: String,
    #[mask(passport)]
    passport: Box<str>,
    #[mask(name(2))]
    nickname: Cow<'static, str>,
    address: String,
}

fn main() {
    let customer = Customer {
        id: 1,
        name: "Hong".into(),
        email: "hong@example.com".into(),
        backup_email: None,
        phone: "010-1234-5678".into(),
        card: "1234-5678-9012-3456".into(),
        passport: "M12345678".into(),
        nickname: Cow::Borrowed("Gildong"),
        address: "Seoul".into(),
    };
    let masked = Masker::new().mask(&customer);
    assert_eq!(masked.id, 1);
    assert_eq!(masked.address, "Seoul");
}
