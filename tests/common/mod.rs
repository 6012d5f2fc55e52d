//! Shared test doubles for the injected capabilities.

#![allow(dead_code)]

use async_trait::async_trait;
use floralens::detection::RawDetection;
use floralens::{
    CanonicalKey, Classifier, CompletionRequest, DocumentStore, Error, MemoryStore, TextCompletion,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Provider double that counts invocations and replays a scripted response.
pub struct ScriptedProvider {
    calls: AtomicUsize,
    response: Mutex<Result<String, String>>,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl ScriptedProvider {
    pub fn ok(text: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            response: Mutex::new(Ok(text.to_string())),
            last_request: Mutex::new(None),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            response: Mutex::new(Err(message.to_string())),
            last_request: Mutex::new(None),
        }
    }

    pub fn set_response(&self, response: Result<String, String>) {
        *self.response.lock().unwrap() = response;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextCompletion for ScriptedProvider {
    async fn complete(&self, request: CompletionRequest) -> floralens::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request);
        match &*self.response.lock().unwrap() {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(Error::provider(message.clone())),
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// Store double wrapping [`MemoryStore`] with invocation counters and an
/// injectable write failure.
pub struct CountingStore {
    inner: MemoryStore,
    gets: AtomicUsize,
    puts: AtomicUsize,
    fail_puts: AtomicBool,
}

impl CountingStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            gets: AtomicUsize::new(0),
            puts: AtomicUsize::new(0),
            fail_puts: AtomicBool::new(false),
        }
    }

    pub fn fail_puts(&self, fail: bool) {
        self.fail_puts.store(fail, Ordering::SeqCst);
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn documents(&self, collection: &str) -> usize {
        self.inner.len(collection)
    }
}

#[async_trait]
impl DocumentStore for CountingStore {
    async fn get(
        &self,
        collection: &str,
        key: &CanonicalKey,
    ) -> floralens::Result<Option<serde_json::Value>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(collection, key).await
    }

    async fn put(
        &self,
        collection: &str,
        key: &CanonicalKey,
        document: serde_json::Value,
    ) -> floralens::Result<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(Error::store("injected put failure"));
        }
        self.inner.put(collection, key, document).await
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

/// Classifier double replaying a fixed detection list, or an error.
pub struct ScriptedClassifier {
    detections: Mutex<Result<Vec<RawDetection>, String>>,
    calls: AtomicUsize,
}

impl ScriptedClassifier {
    pub fn detecting(pairs: &[(&str, f32)]) -> Self {
        let detections = pairs
            .iter()
            .map(|(label, confidence)| RawDetection {
                label: label.to_string(),
                confidence: *confidence,
                region: None,
            })
            .collect();
        Self {
            detections: Mutex::new(Ok(detections)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            detections: Mutex::new(Err(message.to_string())),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_detections(&self, pairs: &[(&str, f32)]) {
        *self.detections.lock().unwrap() = Ok(pairs
            .iter()
            .map(|(label, confidence)| RawDetection {
                label: label.to_string(),
                confidence: *confidence,
                region: None,
            })
            .collect());
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Classifier for ScriptedClassifier {
    async fn classify(&self, _image: &[u8]) -> floralens::Result<Vec<RawDetection>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &*self.detections.lock().unwrap() {
            Ok(detections) => Ok(detections.clone()),
            Err(message) => Err(Error::detection(message.clone())),
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
