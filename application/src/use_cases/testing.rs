//! Scripted tool server used by use case tests.

use crate::ports::tool_session::{SessionError, SessionProvider, ToolSession};
use async_trait::async_trait;
use imaging_domain::ToolCall;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

type Responder = Arc<dyn Fn(&Map<String, Value>) -> Result<Value, SessionError> + Send + Sync>;

#[derive(Default)]
struct MockState {
    calls: Mutex<Vec<ToolCall>>,
    list_count: AtomicUsize,
    opened: AtomicUsize,
    closed: AtomicUsize,
}

#[derive(Clone)]
pub(crate) struct MockSessionProvider {
    tools: Vec<String>,
    responders: HashMap<String, Responder>,
    fail_open: bool,
    fail_list: bool,
    state: Arc<MockState>,
}

impl MockSessionProvider {
    pub(crate) fn new(tools: &[&str]) -> Self {
        Self {
            tools: tools.iter().map(|t| t.to_string()).collect(),
            responders: HashMap::new(),
            fail_open: false,
            fail_list: false,
            state: Arc::new(MockState::default()),
        }
    }

    pub(crate) fn with_result(self, tool: &str, value: Value) -> Self {
        self.with_handler(tool, move |_| Ok(value.clone()))
    }

    pub(crate) fn with_error(self, tool: &str, message: &str) -> Self {
        let tool_name = tool.to_string();
        let message = message.to_string();
        self.with_handler(tool, move |_| {
            Err(SessionError::CallFailed {
                tool: tool_name.clone(),
                message: message.clone(),
            })
        })
    }

    pub(crate) fn with_handler<F>(mut self, tool: &str, handler: F) -> Self
    where
        F: Fn(&Map<String, Value>) -> Result<Value, SessionError> + Send + Sync + 'static,
    {
        self.responders.insert(tool.to_string(), Arc::new(handler));
        self
    }

    pub(crate) fn failing_open(mut self) -> Self {
        self.fail_open = true;
        self
    }

    pub(crate) fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub(crate) fn calls(&self) -> Vec<ToolCall> {
        self.state.calls.lock().unwrap().clone()
    }

    pub(crate) fn calls_to(&self, tool: &str) -> Vec<ToolCall> {
        self.calls().into_iter().filter(|c| c.tool_name == tool).collect()
    }

    pub(crate) fn list_count(&self) -> usize {
        self.state.list_count.load(Ordering::SeqCst)
    }

    pub(crate) fn opened(&self) -> usize {
        self.state.opened.load(Ordering::SeqCst)
    }

    pub(crate) fn closed(&self) -> usize {
        self.state.closed.load(Ordering::SeqCst)
    }

    pub(crate) fn session(&self) -> MockSession {
        MockSession {
            provider: self.clone(),
        }
    }
}

#[async_trait]
impl SessionProvider for MockSessionProvider {
    async fn open(&self) -> Result<Box<dyn ToolSession>, SessionError> {
        if self.fail_open {
            return Err(SessionError::ConnectionError("connection refused".to_string()));
        }
        self.state.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(self.session()))
    }

    fn endpoint(&self) -> String {
        "mock://imaging".to_string()
    }
}

pub(crate) struct MockSession {
    provider: MockSessionProvider,
}

#[async_trait]
impl ToolSession for MockSession {
    async fn list_tools(&self) -> Result<Vec<String>, SessionError> {
        self.provider.state.list_count.fetch_add(1, Ordering::SeqCst);
        if self.provider.fail_list {
            return Err(SessionError::ListFailed("server went away".to_string()));
        }
        Ok(self.provider.tools.clone())
    }

    async fn call_tool(&self, call: &ToolCall) -> Result<Value, SessionError> {
        self.provider.state.calls.lock().unwrap().push(call.clone());
        match self.provider.responders.get(&call.tool_name) {
            Some(responder) => responder(&call.arguments),
            None => Err(SessionError::CallFailed {
                tool: call.tool_name.clone(),
                message: "no scripted response".to_string(),
            }),
        }
    }

    async fn close(&self) {
        self.provider.state.closed.fetch_add(1, Ordering::SeqCst);
    }
}
