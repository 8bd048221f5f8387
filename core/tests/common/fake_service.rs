// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory stand-in for the remote store.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jiff::Timestamp;
use ticklist_core::{Item, ItemId, StoreError, TodoError, TodoService, validate_title};
use tokio::sync::Notify;

/// A data-access call, as recorded by [`FakeService`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Call {
    FetchAll,
    Create(String),
    Toggle(ItemId, bool),
    Delete(ItemId),
}

impl Call {
    fn kind(&self) -> CallKind {
        match self {
            Self::FetchAll => CallKind::FetchAll,
            Self::Create(_) => CallKind::Create,
            Self::Toggle(..) => CallKind::Toggle,
            Self::Delete(_) => CallKind::Delete,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum CallKind {
    FetchAll,
    Create,
    Toggle,
    Delete,
}

#[derive(Debug, Default)]
struct State {
    rows: Vec<Item>,
    clock: i64,
    calls: Vec<Call>,
    failing: HashSet<CallKind>,
}

/// Scripted [`TodoService`] keeping its rows in memory.
#[derive(Debug, Default)]
pub struct FakeService {
    state: Mutex<State>,
    gates: Mutex<HashMap<ItemId, Arc<Notify>>>,
    fetch_gate: Mutex<Option<Arc<Notify>>>,
}

/// Builds an item with a deterministic creation time.
pub fn item(id: &str, title: &str, completed: bool, created_at: i64) -> Item {
    Item {
        id: ItemId::from(id),
        title: title.to_string(),
        completed,
        created_at: Some(Timestamp::from_second(created_at).unwrap()),
    }
}

impl FakeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service whose table already holds `rows`.
    pub fn with_rows(rows: Vec<Item>) -> Self {
        let clock = rows
            .iter()
            .filter_map(|r| r.created_at)
            .map(|ts| ts.as_second())
            .max()
            .unwrap_or(0);
        let service = Self::new();
        {
            let mut state = service.state.lock().unwrap();
            state.rows = rows;
            state.clock = clock;
        }
        service
    }

    /// Current table contents, newest first.
    pub fn rows(&self) -> Vec<Item> {
        let mut rows = self.state.lock().unwrap().rows.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows
    }

    /// Every call made so far, in call order.
    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn fail_fetch_all(&self) {
        self.fail(CallKind::FetchAll);
    }

    pub fn fail_create(&self) {
        self.fail(CallKind::Create);
    }

    pub fn fail_toggle(&self) {
        self.fail(CallKind::Toggle);
    }

    pub fn fail_delete(&self) {
        self.fail(CallKind::Delete);
    }

    /// Lets every call succeed again.
    pub fn recover(&self) {
        self.state.lock().unwrap().failing.clear();
    }

    /// Holds the response to the next mutation of `id` until the returned
    /// handle is notified. The table itself changes immediately.
    pub fn hold(&self, id: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates
            .lock()
            .unwrap()
            .insert(ItemId::from(id), gate.clone());
        gate
    }

    /// Holds the response to the next `fetch_all` until the returned handle is
    /// notified. The rows it returns are read immediately.
    pub fn hold_fetch(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.fetch_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    fn fail(&self, kind: CallKind) {
        self.state.lock().unwrap().failing.insert(kind);
    }

    fn record(&self, call: Call) -> Result<(), TodoError> {
        let mut state = self.state.lock().unwrap();
        let kind = call.kind();
        state.calls.push(call);
        if state.failing.contains(&kind) {
            Err(TodoError::Store(StoreError::Http(
                "503 Service Unavailable: injected".to_string(),
            )))
        } else {
            Ok(())
        }
    }

    async fn wait_gate(&self, id: &ItemId) {
        let gate = self.gates.lock().unwrap().remove(id);
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }
}

#[async_trait]
impl TodoService for FakeService {
    async fn fetch_all(&self) -> Result<Vec<Item>, TodoError> {
        self.record(Call::FetchAll)?;
        let rows = self.rows();

        let gate = self.fetch_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        Ok(rows)
    }

    async fn create(&self, title: &str) -> Result<Item, TodoError> {
        self.record(Call::Create(title.to_string()))?;
        let title = validate_title(title)?;

        let mut state = self.state.lock().unwrap();
        state.clock += 1;
        let created = Item {
            id: ItemId::new(uuid::Uuid::new_v4().to_string()),
            title: title.to_string(),
            completed: false,
            created_at: Some(Timestamp::from_second(state.clock).unwrap()),
        };
        state.rows.push(created.clone());
        Ok(created)
    }

    async fn toggle(&self, id: &ItemId, completed: bool) -> Result<Item, TodoError> {
        self.record(Call::Toggle(id.clone(), completed))?;
        let updated = {
            let mut state = self.state.lock().unwrap();
            state.rows.iter_mut().find(|r| &r.id == id).map(|row| {
                row.completed = completed;
                row.clone()
            })
        };

        self.wait_gate(id).await;
        updated.ok_or_else(|| TodoError::NotFound(format!("no todo with id {id}")))
    }

    async fn delete(&self, id: &ItemId) -> Result<(), TodoError> {
        self.record(Call::Delete(id.clone()))?;
        self.state.lock().unwrap().rows.retain(|r| &r.id != id);

        self.wait_gate(id).await;
        Ok(())
    }
}
