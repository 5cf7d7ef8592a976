#![allow(dead_code)]

use async_trait::async_trait;
use registry_resolve_application::ports::{
    FallbackResolver, HandlerStatus, QueryHandler, RegistryLookup, RequestCounter, ResponseSink,
};
use registry_resolve_domain::{
    AnswerRecord, DnsRequest, DomainError, RegistryAddresses, RegistryFilter, RegistryRecord,
};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockRegistryLookup {
    responses: Arc<Mutex<HashMap<String, Result<RegistryAddresses, DomainError>>>>,
    calls: Arc<Mutex<Vec<RegistryFilter>>>,
}

impl MockRegistryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mimics the real client: empty/blank endpoints are dropped and an
    /// all-empty set becomes `RegistryEmptyResult`.
    pub fn set_records(&self, identifier: &str, endpoints: &[&str]) {
        let records: Vec<RegistryRecord> =
            endpoints.iter().map(|e| RegistryRecord::new(*e)).collect();
        let result = RegistryAddresses::from_records(&records)
            .ok_or_else(|| DomainError::RegistryEmptyResult(identifier.to_string()));
        self.responses
            .lock()
            .unwrap()
            .insert(identifier.to_string(), result);
    }

    pub fn set_error(&self, identifier: &str, error: DomainError) {
        self.responses
            .lock()
            .unwrap()
            .insert(identifier.to_string(), Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<RegistryFilter> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RegistryLookup for MockRegistryLookup {
    async fn describe_instances(
        &self,
        filter: &RegistryFilter,
    ) -> Result<RegistryAddresses, DomainError> {
        self.calls.lock().unwrap().push(filter.clone());

        let key = filter.values.first().cloned().unwrap_or_default();
        self.responses
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Err(DomainError::RegistryEmptyResult(key)))
    }
}

#[derive(Clone, Default)]
pub struct MockFallbackResolver {
    addresses: Arc<Mutex<HashMap<String, Ipv4Addr>>>,
    calls: Arc<AtomicU64>,
}

impl MockFallbackResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_address(&self, name: &str, address: &str) {
        self.addresses
            .lock()
            .unwrap()
            .insert(name.to_string(), address.parse().unwrap());
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl FallbackResolver for MockFallbackResolver {
    async fn resolve_ipv4(&self, name: &str) -> Result<Ipv4Addr, DomainError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.addresses
            .lock()
            .unwrap()
            .get(name)
            .copied()
            .ok_or_else(|| DomainError::FallbackResolution {
                name: name.to_string(),
                reason: "no mock address".to_string(),
            })
    }
}

#[derive(Clone, Default)]
pub struct MockRequestCounter {
    counts: Arc<Mutex<HashMap<String, u64>>>,
}

impl MockRequestCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, server: &str) -> u64 {
        self.counts.lock().unwrap().get(server).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.lock().unwrap().values().sum()
    }
}

impl RequestCounter for MockRequestCounter {
    fn increment(&self, server: &str) {
        *self
            .counts
            .lock()
            .unwrap()
            .entry(server.to_string())
            .or_insert(0) += 1;
    }
}

#[derive(Debug, Default)]
pub struct CollectingSink {
    pub answers: Vec<AnswerRecord>,
    pub reject: bool,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting() -> Self {
        Self {
            answers: Vec::new(),
            reject: true,
        }
    }
}

impl ResponseSink for CollectingSink {
    fn write_answer(&mut self, record: AnswerRecord) -> Result<(), DomainError> {
        if self.reject {
            return Err(DomainError::ResponseWrite("connection closed".to_string()));
        }
        self.answers.push(record);
        Ok(())
    }
}

/// Handler with a fixed outcome, used to build chains around the real one.
pub struct StaticHandler {
    pub name: &'static str,
    pub outcome: Result<HandlerStatus, DomainError>,
    pub answer: Option<AnswerRecord>,
    pub calls: Arc<AtomicU64>,
}

impl StaticHandler {
    pub fn declining(name: &'static str) -> Self {
        Self {
            name,
            outcome: Ok(HandlerStatus::NotHandled),
            answer: None,
            calls: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn answering(name: &'static str, answer: AnswerRecord) -> Self {
        Self {
            name,
            outcome: Ok(HandlerStatus::Handled),
            answer: Some(answer),
            calls: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn failing(name: &'static str, error: DomainError) -> Self {
        Self {
            name,
            outcome: Err(error),
            answer: None,
            calls: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl QueryHandler for StaticHandler {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn handle(
        &self,
        _request: &DnsRequest,
        sink: &mut dyn ResponseSink,
    ) -> Result<HandlerStatus, DomainError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if let Some(answer) = &self.answer {
            sink.write_answer(answer.clone())?;
        }
        self.outcome.clone()
    }
}
