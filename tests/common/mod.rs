#![allow(dead_code)]

use paylink::application::registry::ProviderCatalog;
use paylink::domain::payment::{PaymentReceipt, PaymentRequest};
use paylink::domain::ports::{PaymentService, PaymentServiceBox};
use paylink::error::{PaymentError, Result};
use paylink::infrastructure::console::ConsolePaymentService;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Provider that records every request it is asked to pay.
pub struct RecordingPaymentService {
    pub identity: &'static str,
    pub calls: Arc<Mutex<Vec<PaymentRequest>>>,
}

impl PaymentService for RecordingPaymentService {
    fn pay(&self, request: &PaymentRequest) -> Result<PaymentReceipt> {
        self.calls.lock().unwrap().push(request.clone());
        Ok(PaymentReceipt {
            provider: self.identity.to_string(),
            message: format!("{} charged {} for {}", self.identity, request.price, request.product_name),
        })
    }
}

/// Provider that turns every request down.
pub struct RejectingPaymentService;

impl PaymentService for RejectingPaymentService {
    fn pay(&self, _request: &PaymentRequest) -> Result<PaymentReceipt> {
        Err(PaymentError::Rejected {
            provider: "test.rejecting".to_string(),
            reason: "card declined".to_string(),
        })
    }
}

/// Shared call log and construction counter handed to the test catalog.
#[derive(Default, Clone)]
pub struct Recorder {
    pub calls: Arc<Mutex<Vec<PaymentRequest>>>,
    pub constructed: Arc<AtomicUsize>,
}

impl Recorder {
    pub fn calls(&self) -> Vec<PaymentRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn constructed(&self) -> usize {
        self.constructed.load(Ordering::SeqCst)
    }
}

/// Catalog with the console provider plus `test.alpha`, `test.beta`,
/// `test.rejecting` and `test.broken` (whose construction always fails).
pub fn test_catalog(recorder: &Recorder) -> ProviderCatalog<dyn PaymentService> {
    let mut catalog = ProviderCatalog::new();
    catalog
        .register(ConsolePaymentService::IDENTITY, || {
            Ok(Box::new(ConsolePaymentService::new()) as PaymentServiceBox)
        })
        .unwrap();
    for identity in ["test.alpha", "test.beta"] {
        let recorder = recorder.clone();
        catalog
            .register(identity, move || {
                recorder.constructed.fetch_add(1, Ordering::SeqCst);
                Ok(Box::new(RecordingPaymentService {
                    identity,
                    calls: recorder.calls.clone(),
                }) as PaymentServiceBox)
            })
            .unwrap();
    }
    catalog
        .register("test.rejecting", || Ok(Box::new(RejectingPaymentService) as PaymentServiceBox))
        .unwrap();
    catalog
        .register("test.broken", || Err("constructor panicked".into()))
        .unwrap();
    catalog
}

/// Writes a manifest for `capability` into `dir`, one line per entry.
pub fn write_manifest(dir: &Path, capability: &str, lines: &[&str]) -> io::Result<()> {
    let mut content = String::from("# generated by tests\n");
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    fs::write(dir.join(capability), content)
}
