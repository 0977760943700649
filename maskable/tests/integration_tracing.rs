//! Tracing integration: masked values as event fields, and the diagnostics
//! the engine emits on its fallback paths.

use std::{
    io,
    sync::{Arc, Mutex},
};

use maskable::{Maskable, Masker, MaskingRule, tracing::TracingMaskedExt};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture(run: impl FnOnce()) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    tracing::subscriber::with_default(subscriber, run);
    captured.contents()
}

#[derive(Clone, Debug, Maskable)]
struct Passenger {
    #[mask(name)]
    name: String,
    #[mask(passport)]
    passport: String,
}

#[derive(Debug, Maskable)]
#[mask(no_copy)]
struct Manifest {
    #[mask(name)]
    captain: String,
}

#[test]
fn masked_values_are_logged_masked() {
    let masker = Masker::new();
    let passenger = Passenger {
        name: "Gildong".into(),
        passport: "M12345678".into(),
    };

    let output = capture(|| {
        tracing::info!(passenger = passenger.tracing_masked(&masker), "boarding");
    });

    assert!(output.contains("G******"));
    assert!(output.contains("M1******8"));
    assert!(!output.contains("Gildong"));
    assert!(!output.contains("M12345678"));
}

#[test]
fn single_values_can_be_logged_with_a_rule() {
    let output = capture(|| {
        tracing::info!(
            phone = maskable::tracing::tracing_masked_str("010-1234-5678", MaskingRule::Phone),
            "callback requested"
        );
    });
    assert!(output.contains("010-****-5678"));
}

#[test]
fn fail_open_is_reported() {
    let masker = Masker::new();
    let manifest = Manifest {
        captain: "Yi Sun-sin".into(),
    };

    let output = capture(|| {
        let masked = masker.mask(&manifest);
        assert!(!masked.is_redacted());
    });

    assert!(output.contains("WARN"));
    assert!(output.contains("returning the original value unmasked"));
}

#[test]
fn descriptor_builds_are_logged_at_debug() {
    let masker = Masker::new();
    let passenger = Passenger {
        name: "Kim".into(),
        passport: "M12345678".into(),
    };

    let output = capture(|| {
        let _ = masker.mask(&passenger);
    });
    assert!(output.contains("DEBUG"));
    assert!(output.contains("Passenger"));
}

#[test]
fn registering_a_field_without_accessor_warns() {
    #[derive(Clone, Maskable)]
    struct Cabin {
        #[mask(name)]
        guest: String,
        seat: String,
    }

    let registry = maskable::DescriptorRegistry::new();
    let output = capture(|| {
        let descriptor = registry
            .register::<Cabin>([
                maskable::FieldDescriptor::of::<Cabin>("seat", MaskingRule::name(1)),
                maskable::FieldDescriptor::of::<Cabin>("guest", MaskingRule::name(2)),
            ])
            .unwrap();
        assert_eq!(descriptor.len(), 1);
        assert_eq!(descriptor.rule_for("seat"), None);
    });

    assert!(output.contains("WARN"));
    assert!(output.contains("field has no masking accessor"));
    assert!(output.contains("seat"));

    let cabin = Cabin {
        guest: "Gildong".into(),
        seat: "12A".into(),
    };
    let masker = maskable::Masker::with_registry(std::sync::Arc::new(registry));
    let masked = masker.mask(&cabin);
    assert_eq!(masked.guest, "Gi*****");
    assert_eq!(masked.seat, "12A");
}
