//! Event handler registry

use crate::EventType;
use k2_core::ApiResponse;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Handles one kind of verified webhook event.
///
/// Implemented for any `Fn(&str, &str, &Value) -> ApiResponse` closure.
pub trait EventHandler: Send + Sync {
    /// Handle an event given its topic, event type and resource data
    fn handle(&self, topic: &str, event_type: &str, resource: &Value) -> ApiResponse;
}

impl<F> EventHandler for F
where
    F: Fn(&str, &str, &Value) -> ApiResponse + Send + Sync,
{
    fn handle(&self, topic: &str, event_type: &str, resource: &Value) -> ApiResponse {
        self(topic, event_type, resource)
    }
}

/// Echoes the event back as success data.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl EventHandler for Passthrough {
    fn handle(&self, topic: &str, event_type: &str, resource: &Value) -> ApiResponse {
        ApiResponse::success(serde_json::json!({
            "topic": topic,
            "eventType": event_type,
            "resource": resource,
        }))
    }
}

/// Immutable mapping from event type to handler.
///
/// Built once through [`HandlerRegistry::builder`]; there is no way to add
/// or remove handlers afterwards, so a registry can be shared freely
/// between concurrent dispatches.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<EventType, Arc<dyn EventHandler>>,
}

impl HandlerRegistry {
    /// Start building a registry
    pub fn builder() -> HandlerRegistryBuilder {
        HandlerRegistryBuilder::default()
    }

    /// A registry with a [`Passthrough`] handler for every known event type
    pub fn with_defaults() -> Self {
        EventType::KNOWN
            .into_iter()
            .fold(Self::builder(), |builder, event| {
                builder.on_handler(event, Passthrough)
            })
            .build()
    }

    /// Look up the handler for an event type
    pub fn get(&self, event: &EventType) -> Option<&dyn EventHandler> {
        self.handlers.get(event).map(|handler| &**handler)
    }

    /// Check if a handler is registered
    pub fn contains(&self, event: &EventType) -> bool {
        self.handlers.contains_key(event)
    }

    /// Get the number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered event types
    pub fn event_types(&self) -> impl Iterator<Item = &EventType> {
        self.handlers.keys()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut events: Vec<&str> = self.handlers.keys().map(EventType::as_str).collect();
        events.sort_unstable();
        f.debug_struct("HandlerRegistry")
            .field("events", &events)
            .finish()
    }
}

/// Builder for [`HandlerRegistry`]
#[derive(Default)]
pub struct HandlerRegistryBuilder {
    handlers: HashMap<EventType, Arc<dyn EventHandler>>,
}

impl HandlerRegistryBuilder {
    /// Register a closure for an event type, replacing any earlier one
    pub fn on<F>(self, event: impl Into<EventType>, handler: F) -> Self
    where
        F: Fn(&str, &str, &Value) -> ApiResponse + Send + Sync + 'static,
    {
        self.on_handler(event, handler)
    }

    /// Register a handler for an event type, replacing any earlier one
    pub fn on_handler<H>(mut self, event: impl Into<EventType>, handler: H) -> Self
    where
        H: EventHandler + 'static,
    {
        self.handlers.insert(event.into(), Arc::new(handler));
        self
    }

    /// Freeze the registry
    pub fn build(self) -> HandlerRegistry {
        HandlerRegistry {
            handlers: self.handlers,
        }
    }
}
