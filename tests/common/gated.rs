//! Backend whose responses are released by the test
//!
//! Each expected request gets a gate; the call stays in flight until the
//! test sends its outcome through the gate. This makes completion order a
//! test decision instead of a scheduling accident.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;
use streamflix_console::{Backend, RequestError};
use tokio::sync::oneshot;

type Outcome = Result<Value, RequestError>;

#[derive(Debug, Clone, PartialEq)]
enum GateKey {
    Get(String),
    Post(String, Value),
}

#[derive(Default)]
pub struct GatedBackend {
    gates: Mutex<Vec<(GateKey, oneshot::Receiver<Outcome>)>>,
}

impl GatedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a gate for a GET of `path`.
    pub fn gate_get(&self, path: &str) -> oneshot::Sender<Outcome> {
        self.open(GateKey::Get(path.to_string()))
    }

    /// Opens a gate for a POST of `body` to `path`.
    pub fn gate_post(&self, path: &str, body: Value) -> oneshot::Sender<Outcome> {
        self.open(GateKey::Post(path.to_string(), body))
    }

    fn open(&self, key: GateKey) -> oneshot::Sender<Outcome> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push((key, rx));
        tx
    }

    async fn wait(&self, key: GateKey) -> Outcome {
        let gate = {
            let mut gates = self.gates.lock().unwrap();
            gates
                .iter()
                .position(|(k, _)| *k == key)
                .map(|index| gates.remove(index).1)
        };
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(RequestError::Network("gate dropped".to_string()))),
            None => Err(RequestError::Network(format!("no gate for {:?}", key))),
        }
    }
}

#[async_trait]
impl Backend for GatedBackend {
    async fn get_json(&self, path: &str) -> Result<Value, RequestError> {
        self.wait(GateKey::Get(path.to_string())).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, RequestError> {
        self.wait(GateKey::Post(path.to_string(), body.clone())).await
    }
}
